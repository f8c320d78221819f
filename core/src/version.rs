use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A concrete version as a sequence of numeric components.
///
/// Parsing keeps only ASCII digits and dots, so `v2.3.1` becomes `2.3.1` and
/// `dev-master` has no components at all. A component that is not present is
/// absent, never zero: `1.2` has no patch.
///
/// The derived ordering is lexicographic over the components (a strict
/// prefix sorts first) and is only meant for picking the highest registry
/// tag. Update detection uses [`Version::compare`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    pub fn new(components: Vec<u64>) -> Self {
        Self { components }
    }

    /// Parse a raw version string. Never fails.
    pub fn parse(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        let components = cleaned
            .split('.')
            .map_while(|chunk| chunk.parse::<u64>().ok())
            .collect();

        Self { components }
    }

    /// The nth component (0 = major), or `None` if the version is shorter
    pub fn component(&self, index: usize) -> Option<u64> {
        self.components.get(index).copied()
    }

    pub fn major(&self) -> Option<u64> {
        self.component(0)
    }

    pub fn minor(&self) -> Option<u64> {
        self.component(1)
    }

    pub fn patch(&self) -> Option<u64> {
        self.component(2)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The first `count` components joined with dots
    pub fn truncate(&self, count: usize) -> String {
        self.components
            .iter()
            .take(count)
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Compare over the components both versions share.
    ///
    /// `2.5` and `2.5.1` are equal here: a shorter version already covers
    /// every release below it. A version without any component is less than
    /// any version that has one.
    pub fn compare(&self, other: &Version) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        self.components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a.cmp(b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Shorthand for `self.compare(other) == Ordering::Greater`
    pub fn is_newer_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.truncate(self.components.len()))
    }
}
