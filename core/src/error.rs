use std::path::PathBuf;
use thiserror::Error;

/// Every failure a check-updates run can report.
///
/// Manifest errors abort the run before scanning. `MalformedRange` and
/// `RegistryLookupFailed` are per package and collected into the scan report.
/// `NotWritable` and `Io` only abort the write phase.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("unable to find a composer.json file in «{}»", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("invalid manifest {}: {reason}", path.display())]
    ManifestInvalid { path: PathBuf, reason: String },

    #[error("malformed version range «{raw}»: expected two bounds")]
    MalformedRange { raw: String },

    #[error("{package}: {reason}")]
    RegistryLookupFailed { package: String, reason: String },

    #[error("{} is not writable", path.display())]
    NotWritable { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Build a lookup failure for a package
    pub fn lookup(package: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RegistryLookupFailed {
            package: package.into(),
            reason: reason.into(),
        }
    }

    /// The package a per-package error refers to, if any
    pub fn package(&self) -> Option<&str> {
        match self {
            Self::RegistryLookupFailed { package, .. } => Some(package),
            _ => None,
        }
    }

    /// Whether this error stops the whole run rather than a single package
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::MalformedRange { .. } | Self::RegistryLookupFailed { .. }
        )
    }
}
