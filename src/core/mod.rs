pub mod audit;
pub mod classify;
pub mod delta;
pub mod lifting;
pub mod report;
pub mod types;
pub mod visit;

pub use audit::{GalleryAudit, NeedsToMove, UsedCorrectly};
pub use delta::SharedAudit;
pub use report::{Report, ReportEntry};
pub use types::{
    ChannelId, CmsRole, Folder, FolderId, MatchOutcome, PublishState, ResourceId,
    ResourceReference,
};
pub use visit::{PageInfo, PlaceholderContent, PlaceholderVisit, RunStats, VisitFilter};
