// link correction for page URLs shown in the report
use url::Url;

use crate::error::{AuditError, Result};

/// Turns the relative URLs the repository hands out into links a reader can
/// follow. Absolute URLs pass through untouched.
#[derive(Debug, Clone, Default)]
pub struct LinkCorrector {
    base: Option<Url>,
}

impl LinkCorrector {
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let base = match base_url {
            Some(raw) => Some(Url::parse(raw).map_err(|source| AuditError::InvalidBaseUrl {
                url: raw.to_string(),
                source,
            })?),
            None => None,
        };
        Ok(LinkCorrector { base })
    }

    pub fn correct(&self, link: &str) -> String {
        if Url::parse(link).is_ok() {
            return link.to_string();
        }
        match &self.base {
            Some(base) => base
                .join(link)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| link.to_string()),
            None => link.to_string(),
        }
    }
}
