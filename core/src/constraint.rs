use crate::error::CheckError;
use crate::version::Version;
use std::fmt;

/// Leading operator of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    /// ^1.2
    Caret,
    /// ~1.2
    Tilde,
    /// >=1.2
    Gte,
    /// >1.2
    Gt,
    /// <=1.2
    Lte,
    /// <1.2
    Lt,
    /// !=1.2
    Neq,
}

impl Modifier {
    // Longest prefix first
    const PREFIXES: [(&'static str, Modifier); 7] = [
        (">=", Modifier::Gte),
        ("<=", Modifier::Lte),
        ("!=", Modifier::Neq),
        ("^", Modifier::Caret),
        ("~", Modifier::Tilde),
        (">", Modifier::Gt),
        ("<", Modifier::Lt),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::None => "",
            Modifier::Caret => "^",
            Modifier::Tilde => "~",
            Modifier::Gte => ">=",
            Modifier::Gt => ">",
            Modifier::Lte => "<=",
            Modifier::Lt => "<",
            Modifier::Neq => "!=",
        }
    }

    /// Split a single requirement into its modifier and body.
    /// Unknown operators are left in the body.
    fn split(raw: &str) -> (Modifier, &str) {
        for (prefix, modifier) in Self::PREFIXES {
            if let Some(body) = raw.strip_prefix(prefix) {
                return (modifier, body.trim_start());
            }
        }
        (Modifier::None, raw)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two halves of a range constraint such as `1.0 - 1.5` or `^1.0 || ^2.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub lower: Constraint,
    pub upper: Constraint,
    /// `|`, `||` or ` - `
    pub separator: &'static str,
    /// Everything in the raw string before the upper bound, kept verbatim
    /// so a rewrite only touches the upper half.
    pub prefix: String,
}

/// A parsed manifest requirement such as `^1.2`, `~2.0.*` or `1.0 - 1.5`.
///
/// For ranges the modifier, precision, wildcard and anchor are those of the
/// upper bound; the range itself carries none of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    raw: String,
    modifier: Modifier,
    precision: usize,
    wildcard: bool,
    anchor: Version,
    bounds: Option<Box<Bounds>>,
}

impl Constraint {
    /// Parse a requirement string from a manifest
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        let raw = raw.trim();

        if let Some(separator) = Self::range_separator(raw) {
            return Self::parse_range(raw, separator);
        }

        let (modifier, body) = Modifier::split(raw);

        // Only the first token counts: `^1.0 <2.0` anchors on 1.0
        let token = body
            .split(|c: char| c.is_whitespace() || c == ',')
            .next()
            .unwrap_or_default();

        let chunks: Vec<&str> = token.split('.').collect();
        let wildcard = chunks.last().is_some_and(|last| last.trim() == "*");
        let numeric = if wildcard {
            &chunks[..chunks.len() - 1]
        } else {
            &chunks[..]
        };

        Ok(Self {
            raw: raw.to_string(),
            modifier,
            precision: chunks.len(),
            wildcard,
            anchor: Version::parse(&numeric.join(".")),
            bounds: None,
        })
    }

    fn range_separator(raw: &str) -> Option<&'static str> {
        ["||", "|", " - "]
            .into_iter()
            .find(|separator| raw.contains(separator))
    }

    fn parse_range(raw: &str, separator: &'static str) -> Result<Self, CheckError> {
        let malformed = || CheckError::MalformedRange {
            raw: raw.to_string(),
        };

        // A third bound or more is ignored
        let mut parts = raw.split(separator);
        let lower = parts.next().ok_or_else(malformed)?;
        let upper = parts.next().ok_or_else(malformed)?;

        if lower.trim().is_empty() || upper.trim().is_empty() {
            return Err(malformed());
        }

        let leading = upper.len() - upper.trim_start().len();
        let prefix = format!("{lower}{separator}{}", &upper[..leading]);

        Ok(Self {
            raw: raw.to_string(),
            modifier: Modifier::None,
            precision: 0,
            wildcard: false,
            anchor: Version::default(),
            bounds: Some(Box::new(Bounds {
                lower: Self::parse(lower)?,
                upper: Self::parse(upper)?,
                separator,
                prefix,
            })),
        })
    }

    /// The single constraint that decides comparison and rewriting
    fn shape(&self) -> &Constraint {
        match &self.bounds {
            Some(bounds) => bounds.upper.shape(),
            None => self,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn modifier(&self) -> Modifier {
        self.shape().modifier
    }

    /// Number of dot-separated components as written, wildcard included
    pub fn precision(&self) -> usize {
        self.shape().precision
    }

    pub fn is_wildcard(&self) -> bool {
        self.shape().wildcard
    }

    /// The version implied by the constraint, without modifier or wildcard
    pub fn anchor(&self) -> &Version {
        &self.shape().anchor
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_deref()
    }

    pub fn is_range(&self) -> bool {
        self.bounds.is_some()
    }

    /// A bare `*`: accepts every release, nothing to update
    pub fn is_any(&self) -> bool {
        self.is_wildcard() && self.anchor().is_empty()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
