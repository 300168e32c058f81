// feeding traversal events through lookup + resolver into the classifier
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::core::audit::GalleryAudit;
use crate::core::types::{ChannelId, MatchOutcome, PublishState};
use crate::error::Result;
use crate::mapping::{PermissionLookup, ResourceResolver};

/// The page a placeholder belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub guid: String,
    pub state: PublishState,
    pub published_url: String,
    pub unpublished_url: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl PageInfo {
    //published pages are reported by their live URL, everything else by the draft URL
    pub fn url(&self) -> &str {
        match self.state {
            PublishState::Published => &self.published_url,
            PublishState::Unpublished => &self.unpublished_url,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderContent {
    Image { src: String },
    /// Resource links already extracted from the placeholder's markup.
    Text { links: Vec<String> },
}

/// One placeholder visited by the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderVisit {
    pub page: PageInfo,
    pub channel: ChannelId,
    pub placeholder: String,
    pub content: PlaceholderContent,
}

/// Decides which visits reach the classifier at all.
#[derive(Debug, Clone)]
pub struct VisitFilter {
    ignore_channels: HashSet<ChannelId>,
    now: DateTime<Utc>,
}

impl VisitFilter {
    pub fn new<I, S>(ignore_channels: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ChannelId>,
    {
        VisitFilter {
            ignore_channels: ignore_channels.into_iter().map(Into::into).collect(),
            now,
        }
    }

    pub fn admits(&self, visit: &PlaceholderVisit) -> bool {
        !self.ignore_channels.contains(&visit.channel) && !visit.page.is_expired(self.now)
    }
}

/// Counters for one run, logged when it finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub placeholders: usize,
    /// Placeholders dropped before classification: filtered, unstaffed or without links.
    pub skipped: usize,
    pub references: usize,
    pub correct: usize,
    pub needs_move: usize,
}

impl RunStats {
    fn count(&mut self, outcome: MatchOutcome) {
        self.references += 1;
        if outcome.is_violation() {
            self.needs_move += 1;
        } else {
            self.correct += 1;
        }
    }
}

impl GalleryAudit {
    /// Audit every resource referenced by one placeholder.
    ///
    /// Image placeholders resolve their source first and only then look up the
    /// channel's editors. Text placeholders without links are skipped before
    /// any lookup, otherwise the editors are looked up once for all links.
    pub fn process_visit<L, R>(
        &mut self,
        visit: &PlaceholderVisit,
        filter: &VisitFilter,
        lookup: &L,
        resolver: &R,
        stats: &mut RunStats,
    ) -> Result<()>
    where
        L: PermissionLookup + ?Sized,
        R: ResourceResolver + ?Sized,
    {
        stats.placeholders += 1;
        if !filter.admits(visit) {
            stats.skipped += 1;
            return Ok(());
        }

        let page_url = visit.page.url();
        debug!(page = %visit.page.guid, placeholder = %visit.placeholder, "visiting {page_url}");

        match &visit.content {
            PlaceholderContent::Image { src } => {
                let resource = resolver.resolve(src)?;
                let groups = lookup.editor_groups(&visit.channel)?;
                if groups.is_empty() {
                    stats.skipped += 1;
                    return Ok(());
                }

                //an unresolved image has nothing to misplace
                if let Some(resource) = resource {
                    let outcome = self.classify(&resource.into_reference(page_url, &groups));
                    stats.count(outcome);
                }
            }
            PlaceholderContent::Text { links } => {
                if links.is_empty() {
                    stats.skipped += 1;
                    return Ok(());
                }
                let groups = lookup.editor_groups(&visit.channel)?;
                if groups.is_empty() {
                    stats.skipped += 1;
                    return Ok(());
                }

                for link in links {
                    match resolver.resolve(link)? {
                        Some(resource) => {
                            let outcome =
                                self.classify(&resource.into_reference(page_url, &groups));
                            stats.count(outcome);
                        }
                        None => {
                            warn!(link = %link, page = %page_url, "download link does not resolve to a resource")
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Fold a whole traversal into this audit. The first error ends the run.
    pub fn run<I, L, R>(
        &mut self,
        visits: I,
        filter: &VisitFilter,
        lookup: &L,
        resolver: &R,
    ) -> Result<RunStats>
    where
        I: IntoIterator<Item = Result<PlaceholderVisit>>,
        L: PermissionLookup + ?Sized,
        R: ResourceResolver + ?Sized,
    {
        let mut stats = RunStats::default();
        for visit in visits {
            let outcome =
                visit.and_then(|v| self.process_visit(&v, filter, lookup, resolver, &mut stats));
            if let Err(err) = outcome {
                error!(error = %err, "audit aborted");
                return Err(err);
            }
        }

        info!(
            placeholders = stats.placeholders,
            references = stats.references,
            needs_move = stats.needs_move,
            "traversal complete"
        );
        Ok(stats)
    }
}
