// notification envelope; sending it is left to an external transport
use serde::Serialize;

use crate::config::AuditConfig;
use crate::core::report::Report;
use crate::render::html::render_html;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

impl EmailMessage {
    /// Headers plus body, suitable for piping into `sendmail -t`.
    pub fn to_mime_string(&self) -> String {
        format!(
            "From: {}\r\nTo: {}\r\nSubject: {}\r\nMIME-Version: 1.0\r\nContent-Type: text/html; charset=utf-8\r\n\r\n{}\r\n",
            self.from, self.to, self.subject, self.html_body
        )
    }
}

/// None when there is nothing to report or nowhere to send it.
pub fn compose(report: &Report, config: &AuditConfig) -> Option<EmailMessage> {
    if report.is_empty() {
        return None;
    }
    let from = config.email_from.as_deref()?;
    let to = config.email_to.as_deref()?;

    Some(EmailMessage {
        from: from.to_string(),
        to: to.to_string(),
        subject: config.subject.clone(),
        html_body: render_html(report),
    })
}
