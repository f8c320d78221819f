//! Builds the constraint a human would write for an upgrade, keeping the
//! operator, wildcard position and number of components of the original.

use crate::constraint::Constraint;
use crate::version::Version;

/// Rewrite `constraint` so that it anchors on `latest`.
///
/// For ranges only the upper bound changes; the lower bound and separator
/// are kept as written.
pub fn rewrite(constraint: &Constraint, latest: &Version) -> String {
    if let Some(bounds) = constraint.bounds() {
        return format!("{}{}", bounds.prefix, rewrite(&bounds.upper, latest));
    }

    let modifier = constraint.modifier();

    // dev-master and friends: fall back to ^major.minor
    if constraint.anchor().major().is_none() {
        return format!("^{}", padded(latest, 2));
    }

    if constraint.is_wildcard() {
        match constraint.precision() {
            2 => return format!("{modifier}{}.*", padded(latest, 1)),
            3 => return format!("{modifier}{}.*", padded(latest, 2)),
            _ => {}
        }
    }

    // Never fewer components than written: ^1.2.3 against a `v2.0` tag is ^2.0.0
    let components = match constraint.precision() {
        0 | 1 => 1,
        2 => 2,
        precision => precision.max(latest.len()),
    };

    format!("{modifier}{}", padded(latest, components))
}

/// The first `count` components of `latest`, filling missing ones with 0
fn padded(latest: &Version, count: usize) -> String {
    (0..count)
        .map(|index| latest.component(index).unwrap_or(0).to_string())
        .collect::<Vec<_>>()
        .join(".")
}
