// classification logic
use tracing::trace;

use crate::core::audit::GalleryAudit;
use crate::core::types::{MatchOutcome, ResourceReference, fold_name};

impl GalleryAudit {
    //Classify one reference against the editor groups of the page using it:
    // - untestable references (no gallery context, no groups) are Correct and not recorded
    // - the first group whose name equals the gallery name wins -> used correctly
    // - no group matches -> the resource needs to move to the FIRST group's gallery
    pub fn classify(&mut self, reference: &ResourceReference) -> MatchOutcome {
        let Some(gallery) = self.nearest_gallery(&reference.ancestry) else {
            return MatchOutcome::Correct;
        };
        let Some(destination) = reference.groups.first() else {
            return MatchOutcome::Correct;
        };

        let gallery_key = fold_name(&gallery.name);
        if let Some(group) = reference.groups.iter().find(|g| fold_name(g) == gallery_key) {
            self.record_correct(&reference.resource, group, &reference.page_url);
            return MatchOutcome::Correct;
        }

        trace!(
            resource = %reference.resource,
            gallery = %gallery.name,
            destination = %destination,
            "resource outside its editors' gallery"
        );
        self.record_move(
            &reference.resource,
            &reference.path,
            destination,
            &reference.page_url,
        );
        MatchOutcome::NeedsMove
    }

    pub fn count_violations(&self) -> usize {
        self.needs_to_move.len()
    }
}
