// lifting a resource onto its gallery
/*

Galleries sit two levels below the root resource gallery:

    root resource gallery
      container
        gallery          <- named after the group that may edit it
          sub folders...
            resource

Starting at the folder holding the resource, keep moving up while the
current folder has a grandparent that is not the root. Whatever folder the
walk stops on is the gallery. A resource without a grandparent folder has
no gallery context at all.

*/
use crate::core::audit::GalleryAudit;
use crate::core::types::Folder;

impl GalleryAudit {
    //None means the reference is untestable (fewer than two folders above it)
    pub fn nearest_gallery<'a>(&self, ancestry: &'a [Folder]) -> Option<&'a Folder> {
        if ancestry.len() < 2 {
            return None;
        }

        let mut level = 0;
        while level + 2 < ancestry.len() && ancestry[level + 2].id != self.root_gallery {
            level += 1;
        }
        Some(&ancestry[level])
    }
}
