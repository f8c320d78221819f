use crate::constraint::Constraint;
use crate::error::CheckError;
use crate::types::{Section, UpdateCandidate, UpdateSeverity};
use indexmap::IndexMap;

/// Packages whose minor or major bump also moves the platform requirement
pub const DEFAULT_LEADER_PREFIX: &str = "symfony/";

/// Which severities an update run accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateLevel {
    /// Major, minor and patch
    #[default]
    All,
    /// Minor and patch
    Minor,
    /// Patch only
    Patch,
    /// Report only
    None,
}

impl UpdateLevel {
    pub fn accepts(self, severity: Option<UpdateSeverity>) -> bool {
        match (self, severity) {
            (_, None) | (UpdateLevel::None, _) => false,
            (UpdateLevel::All, Some(_)) => true,
            (UpdateLevel::Minor, Some(s)) => {
                matches!(s, UpdateSeverity::Minor | UpdateSeverity::Patch)
            }
            (UpdateLevel::Patch, Some(s)) => s == UpdateSeverity::Patch,
        }
    }
}

/// Everything a scan produced: candidates in manifest order and the
/// per-package failures met along the way
#[derive(Debug, Default)]
pub struct ScanReport {
    pub candidates: Vec<UpdateCandidate>,
    pub failures: Vec<CheckError>,
}

impl ScanReport {
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Result<UpdateCandidate, CheckError>>,
    {
        outcomes
            .into_iter()
            .fold(Self::default(), |mut report, outcome| {
                match outcome {
                    Ok(candidate) => report.candidates.push(candidate),
                    Err(error) => report.failures.push(error),
                }
                report
            })
    }

    /// Candidates with an update available
    pub fn updatable(&self) -> impl Iterator<Item = &UpdateCandidate> {
        self.candidates.iter().filter(|c| c.has_update())
    }
}

/// Requirement for the framework family, e.g. `extra.symfony.require`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRequirement {
    /// `symfony` for the `symfony/` prefix
    pub family: String,
    /// `<major>.<minor>.*`
    pub constraint: String,
}

/// Package name → new requirement per manifest section, ready for the
/// manifest writer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    pub require: IndexMap<String, String>,
    pub require_dev: IndexMap<String, String>,
    pub platform: Option<PlatformRequirement>,
}

impl UpdatePlan {
    /// Planned requirements for one section
    pub fn section(&self, section: Section) -> &IndexMap<String, String> {
        match section {
            Section::Require => &self.require,
            Section::RequireDev => &self.require_dev,
        }
    }

    pub fn insert(
        &mut self,
        section: Section,
        name: impl Into<String>,
        constraint: impl Into<String>,
    ) {
        let entries = match section {
            Section::Require => &mut self.require,
            Section::RequireDev => &mut self.require_dev,
        };
        entries.insert(name.into(), constraint.into());
    }

    pub fn is_empty(&self) -> bool {
        self.require.is_empty() && self.require_dev.is_empty() && self.platform.is_none()
    }

    pub fn len(&self) -> usize {
        self.require.len() + self.require_dev.len()
    }
}

/// Filters candidates by level and turns them into an [`UpdatePlan`]
#[derive(Debug, Clone)]
pub struct UpdatePlanner {
    level: UpdateLevel,
    leader_prefix: Option<String>,
    /// The family requirement the manifest declares today
    current_platform: Option<Constraint>,
}

impl UpdatePlanner {
    pub fn new(level: UpdateLevel) -> Self {
        Self {
            level,
            leader_prefix: Some(DEFAULT_LEADER_PREFIX.to_string()),
            current_platform: None,
        }
    }

    pub fn with_leader_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.leader_prefix = Some(prefix.into());
        self
    }

    /// Never derive a platform requirement
    pub fn without_leader(mut self) -> Self {
        self.leader_prefix = None;
        self
    }

    /// Family name derived from the leader prefix (`symfony` for `symfony/`)
    pub fn family(&self) -> Option<&str> {
        self.leader_prefix
            .as_deref()
            .map(|prefix| prefix.trim_end_matches('/'))
    }

    /// The manifest's current `extra.<family>.require`.
    ///
    /// Only leader packages released in lockstep with it (same major) can
    /// move it; without one no platform requirement is planned.
    pub fn with_current_platform(mut self, current: Constraint) -> Self {
        self.current_platform = Some(current);
        self
    }

    pub fn level(&self) -> UpdateLevel {
        self.level
    }

    pub fn plan(&self, candidates: &[UpdateCandidate]) -> UpdatePlan {
        let accepted: Vec<&UpdateCandidate> = candidates
            .iter()
            .filter(|c| self.level.accepts(c.severity))
            .collect();

        let mut plan = UpdatePlan {
            platform: self.platform_requirement(&accepted),
            ..UpdatePlan::default()
        };

        for candidate in &accepted {
            if let Some(constraint) = &candidate.new_constraint {
                plan.insert(candidate.section, candidate.name.as_str(), constraint.as_str());
            }
        }

        plan
    }

    fn platform_requirement(&self, accepted: &[&UpdateCandidate]) -> Option<PlatformRequirement> {
        let prefix = self.leader_prefix.as_deref()?;
        let family = self.family()?;
        let current_major = self.current_platform.as_ref()?.anchor().major()?;

        // Bundles and polyfills have their own version lines
        let leader = accepted
            .iter()
            .filter(|c| c.name.starts_with(prefix))
            .filter(|c| c.constraint.anchor().major() == Some(current_major))
            .filter(|c| {
                matches!(
                    c.severity,
                    Some(UpdateSeverity::Major | UpdateSeverity::Minor)
                )
            })
            .max_by(|a, b| a.latest.cmp(&b.latest))?;

        let major = leader.latest.major()?;
        let minor = leader.latest.minor().unwrap_or(0);

        Some(PlatformRequirement {
            family: family.to_string(),
            constraint: format!("{major}.{minor}.*"),
        })
    }
}

/// Plan with the default leader prefix and no platform requirement
pub fn plan(candidates: &[UpdateCandidate], level: UpdateLevel) -> UpdatePlan {
    UpdatePlanner::new(level).plan(candidates)
}
