//! Audit configuration.
//!
//! Everything is optional; a missing config file means "audit every channel,
//! leave links as they are, do not prepare a notification".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::ChannelId;
use crate::error::Result;
use crate::formats::read_structured;

pub struct AuditDefaults;

impl AuditDefaults {
    pub const SUBJECT: &'static str = "CMS resources to move";
    pub const FONT_FAMILY: &'static str = "Arial";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Channel GUIDs whose pages are never audited.
    pub ignore_channels: Vec<ChannelId>,
    pub email_from: Option<String>,
    pub email_to: Option<String>,
    pub subject: String,
    /// Makes relative page URLs in the report absolute.
    pub base_url: Option<String>,
    /// Also report resources that more than one group needs.
    pub report_conflicts: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            ignore_channels: Vec::new(),
            email_from: None,
            email_to: None,
            subject: AuditDefaults::SUBJECT.to_string(),
            base_url: None,
            report_conflicts: false,
        }
    }
}

impl AuditConfig {
    pub fn load(path: &Path) -> Result<Self> {
        read_structured(path)
    }

    pub fn with_report_conflicts(mut self, enabled: bool) -> Self {
        self.report_conflicts = self.report_conflicts || enabled;
        self
    }
}
