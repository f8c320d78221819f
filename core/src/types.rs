use crate::classifier;
use crate::constraint::Constraint;
use crate::rewriter;
use crate::version::Version;
use std::fmt;
use std::path::PathBuf;

/// Manifest section a dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Require,
    RequireDev,
}

impl Section {
    /// The key of this section in composer.json
    pub fn key(self) -> &'static str {
        match self {
            Section::Require => "require",
            Section::RequireDev => "require-dev",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A dependency as parsed from a manifest
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Package name (vendor/package)
    pub name: String,
    /// Parsed requirement
    pub constraint: Constraint,
    pub section: Section,
    /// Manifest this dependency was found in
    pub source_file: PathBuf,
}

/// Severity of an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateSeverity {
    Major,
    Minor,
    Patch,
}

/// Result of checking one dependency against the registry
#[derive(Debug, Clone)]
pub struct UpdateCandidate {
    pub name: String,
    pub section: Section,
    /// The requirement as currently written
    pub constraint: Constraint,
    /// Latest release known to the registry
    pub latest: Version,
    /// `None` when there is nothing to update
    pub severity: Option<UpdateSeverity>,
    /// Rewritten requirement, set whenever `severity` is
    pub new_constraint: Option<String>,
}

impl UpdateCandidate {
    /// Classify and rewrite a dependency against the latest release
    pub fn new(dependency: &Dependency, latest: Version) -> Self {
        let severity = classifier::severity(&dependency.constraint, &latest);
        let new_constraint = severity.map(|_| rewriter::rewrite(&dependency.constraint, &latest));

        Self {
            name: dependency.name.clone(),
            section: dependency.section,
            constraint: dependency.constraint.clone(),
            latest,
            severity,
            new_constraint,
        }
    }

    /// Check if this dependency has any update available
    pub fn has_update(&self) -> bool {
        self.severity.is_some()
    }
}
