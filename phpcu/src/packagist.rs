use check_updates_core::{CheckError, Version};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

use crate::scanner::LatestVersion;

pub const DEFAULT_REGISTRY: &str = "https://repo.packagist.org";

/// Tags that count as releases: v1, 1.2, v1.2.3, 1.2.3.4
static RELEASE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?\d+(\.\d+){0,3}$").expect("release tag pattern is valid"));

/// Packagist metadata response (`/p2/{vendor}/{package}.json`)
#[derive(Debug, Deserialize)]
struct PackagistResponse {
    packages: HashMap<String, Vec<PackagistVersion>>,
}

#[derive(Debug, Deserialize)]
struct PackagistVersion {
    version: String,
}

/// Client for the Packagist metadata API
#[derive(Clone)]
pub struct PackagistClient {
    client: reqwest::Client,
    base_url: String,
}

impl PackagistClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("phpcu/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn package_url(&self, name: &str) -> String {
        format!("{}/p2/{}.json", self.base_url, name)
    }

    /// Fetch the highest numeric release of a package
    pub async fn get_latest(&self, name: &str) -> Result<Version, CheckError> {
        let url = self.package_url(name);
        debug!(%url, "fetching package metadata");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CheckError::lookup(name, e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(not_a_package(name));
        }
        if !response.status().is_success() {
            return Err(CheckError::lookup(
                name,
                format!("Packagist responded with status {}", response.status()),
            ));
        }

        let data: PackagistResponse = response
            .json()
            .await
            .map_err(|e| CheckError::lookup(name, format!("invalid Packagist response: {e}")))?;

        let versions = data.packages.get(name).ok_or_else(|| not_a_package(name))?;

        latest_release(versions.iter().map(|v| v.version.as_str()))
            .ok_or_else(|| CheckError::lookup(name, "no numeric versions published"))
    }
}

impl LatestVersion for PackagistClient {
    async fn latest_version(&self, package: &str) -> Result<Version, CheckError> {
        self.get_latest(package).await
    }
}

fn not_a_package(name: &str) -> CheckError {
    CheckError::lookup(name, format!("«{name}» is not a valid composer package"))
}

/// The highest release among version tags, ignoring branches and
/// pre-releases
pub fn latest_release<'a>(tags: impl IntoIterator<Item = &'a str>) -> Option<Version> {
    tags.into_iter()
        .filter(|tag| RELEASE_TAG.is_match(tag))
        .map(Version::parse)
        .max()
}
