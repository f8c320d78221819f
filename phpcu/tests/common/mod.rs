#![allow(dead_code)]

use serde_json::{Map, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a temporary project directory
pub struct TempProject {
    pub dir: TempDir,
}

impl TempProject {
    /// Create a new temporary project
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    /// Create a project with the given composer.json
    pub fn with_manifest(content: &str) -> Self {
        let project = Self::new();
        project.create_file("composer.json", content);
        project
    }

    /// Get the path to the project directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file in the project with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let file_path = self.dir.path().join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Get the absolute path to a file in the project
    pub fn file_path(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn manifest(&self) -> String {
        fs::read_to_string(self.file_path("composer.json")).expect("Failed to read composer.json")
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A typical Symfony application manifest
pub fn sample_composer_json() -> &'static str {
    r#"{
    "name": "acme/app",
    "type": "project",
    "require": {
        "php": ">=8.2",
        "ext-ctype": "*",
        "monolog/monolog": "^2.9",
        "symfony/console": "6.4.*",
        "psr/log": "^3.0.0"
    },
    "require-dev": {
        "phpunit/phpunit": "~10.5"
    },
    "extra": {
        "symfony": {
            "require": "6.4.*"
        }
    }
}
"#
}

/// Manifest with platform requirements only
pub fn platform_only_composer_json() -> &'static str {
    r#"{
    "require": {
        "php": "^8.1",
        "ext-json": "*"
    }
}
"#
}

/// Serve Packagist metadata for the given packages
pub async fn mock_packagist(releases: &[(&str, &[&str])]) -> MockServer {
    let server = MockServer::start().await;

    for (name, versions) in releases {
        let entries: Vec<_> = versions.iter().map(|v| json!({ "version": v })).collect();
        let mut packages = Map::new();
        packages.insert((*name).to_string(), json!(entries));

        Mock::given(method("GET"))
            .and(path(format!("/p2/{name}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "packages": packages })))
            .mount(&server)
            .await;
    }

    // Anything else is unknown
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(10)
        .mount(&server)
        .await;

    server
}

/// Registry for the sample manifest
pub async fn sample_packagist() -> MockServer {
    mock_packagist(&[
        ("monolog/monolog", &["2.10.0", "3.8.0", "3.8.1", "4.0.0-beta1"]),
        ("symfony/console", &["v6.4.15", "v7.1.8", "v7.2.1", "dev-main"]),
        ("psr/log", &["3.0.0", "3.0.1", "3.0.2"]),
        ("phpunit/phpunit", &["10.5.38", "11.4.4", "11.5.0"]),
    ])
    .await
}
