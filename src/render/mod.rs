//! Turning a `Report` into something a person or another tool reads.

pub mod email;
pub mod html;
pub mod links;

pub use email::{EmailMessage, compose};
pub use html::render_html;
pub use links::LinkCorrector;

use crate::config::AuditConfig;
use crate::core::report::Report;
use crate::error::{AuditError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Toon,
    /// Headers and html body, ready for an external mail transport.
    Email,
}

/// Render a non-empty report. `Ok(None)` means there is nothing to write.
pub fn render(
    report: &Report,
    format: OutputFormat,
    config: &AuditConfig,
) -> Result<Option<String>> {
    if report.is_empty() {
        return Ok(None);
    }

    let text = match format {
        OutputFormat::Html => render_html(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Toon => {
            let value = serde_json::to_value(report)?;
            toon_format::encode_default(&value).map_err(AuditError::toon)?
        }
        OutputFormat::Email => match compose(report, config) {
            Some(message) => message.to_mime_string(),
            None => return Ok(None),
        },
    };
    Ok(Some(text))
}
