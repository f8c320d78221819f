use check_updates_core::{CheckError, Dependency, ScanReport, UpdateCandidate, Version};
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use tracing::debug;

/// Anything that can tell the latest release of a package
pub trait LatestVersion {
    fn latest_version(&self, package: &str)
    -> impl Future<Output = Result<Version, CheckError>>;
}

/// Look up every dependency, one at a time and in manifest order.
///
/// A failed lookup is recorded in the report and does not stop the scan.
pub async fn scan<R: LatestVersion>(
    registry: &R,
    dependencies: &[Dependency],
    progress: &ProgressBar,
) -> ScanReport {
    let outcomes: Vec<Result<UpdateCandidate, CheckError>> = stream::iter(dependencies)
        .then(|dependency| async move {
            let outcome = registry
                .latest_version(&dependency.name)
                .await
                .map(|latest| UpdateCandidate::new(dependency, latest));

            match &outcome {
                Ok(candidate) => debug!(
                    package = %dependency.name,
                    latest = %candidate.latest,
                    severity = ?candidate.severity,
                    "checked"
                ),
                Err(e) => debug!(package = %dependency.name, error = %e, "lookup failed"),
            }

            progress.inc(1);
            outcome
        })
        .collect()
        .await;

    ScanReport::from_outcomes(outcomes)
}
