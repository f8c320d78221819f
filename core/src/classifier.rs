//! Decides whether a registry release is newer than what a constraint
//! anchors on, and how big the jump is.

use crate::constraint::Constraint;
use crate::types::UpdateSeverity;
use crate::version::Version;

/// Whether `latest` is newer than the constraint's anchor
pub fn is_updatable(constraint: &Constraint, latest: &Version) -> bool {
    !constraint.is_any() && latest.is_newer_than(constraint.anchor())
}

/// Classify the update from the constraint's anchor to `latest`.
///
/// Major pre-empts minor, which pre-empts patch. Anything on a `0.x` line
/// (or with no numeric major at all) is major: there is no stability
/// promise below 1.0.
pub fn severity(constraint: &Constraint, latest: &Version) -> Option<UpdateSeverity> {
    if !is_updatable(constraint, latest) {
        return None;
    }

    let anchor = constraint.anchor();

    match (anchor.major(), latest.major()) {
        (None | Some(0), _) => return Some(UpdateSeverity::Major),
        (Some(current), Some(next)) if next > current => return Some(UpdateSeverity::Major),
        _ => {}
    }

    if let (Some(current), Some(next)) = (anchor.minor(), latest.minor())
        && next > current
    {
        return Some(UpdateSeverity::Minor);
    }

    if let (Some(current), Some(next)) = (anchor.patch(), latest.patch())
        && next > current
    {
        return Some(UpdateSeverity::Patch);
    }

    None
}
