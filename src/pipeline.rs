//! One complete audit: traverse, classify, build the report.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::AuditConfig;
use crate::core::audit::GalleryAudit;
use crate::core::report::Report;
use crate::core::visit::{RunStats, VisitFilter};
use crate::error::Result;
use crate::render::LinkCorrector;
use crate::snapshot::SnapshotRepository;

#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub report: Report,
    pub stats: RunStats,
}

/// Audit a repository snapshot from scratch.
///
/// Every run starts from empty accumulators. If anything fails along the way
/// the error is returned and no report exists.
pub fn run_audit(
    repo: &SnapshotRepository,
    config: &AuditConfig,
    now: DateTime<Utc>,
) -> Result<AuditOutcome> {
    let links = LinkCorrector::new(config.base_url.as_deref())?;
    let filter = VisitFilter::new(config.ignore_channels.iter().cloned(), now);

    info!(root_gallery = %repo.root_gallery(), "starting gallery audit");

    let mut audit = GalleryAudit::new(repo.root_gallery());
    let stats = audit.run(repo.visits(), &filter, repo, repo)?;
    let report = audit.build_report(config.report_conflicts, |link| links.correct(link))?;

    info!(
        flagged = audit.count_violations(),
        reported = report.len(),
        "gallery audit finished"
    );
    Ok(AuditOutcome { report, stats })
}
