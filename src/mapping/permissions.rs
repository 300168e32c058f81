// channel -> editor groups
use crate::core::types::CmsRole;
use crate::error::Result;

/// Answers which groups hold the Editor role on a channel.
///
/// Implementations return distinct names in their configured order. An empty
/// list means nobody edits the channel and its pages are not audited.
pub trait PermissionLookup {
    fn editor_groups(&self, channel: &str) -> Result<Vec<String>>;
}

impl<F> PermissionLookup for F
where
    F: Fn(&str) -> Result<Vec<String>>,
{
    fn editor_groups(&self, channel: &str) -> Result<Vec<String>> {
        self(channel)
    }
}

//keep editor grants only, first occurrence wins
pub fn distinct_editors<'a, I>(grants: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, CmsRole)>,
{
    let mut names: Vec<String> = Vec::new();
    for (name, role) in grants {
        if role != CmsRole::Editor {
            continue;
        }
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
