// html body for the notification email
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::AuditDefaults;
use crate::core::report::Report;

/// One numbered item per resource. An empty report renders to "".
pub fn render_html(report: &Report) -> String {
    if report.is_empty() {
        return String::new();
    }

    let mut body = format!(
        "<html><body style=\"font-family: {}\"><ol>",
        AuditDefaults::FONT_FAMILY
    );
    for entry in report.iter() {
        body.push_str("<li><b>");
        body.push_str(&encode_text(&entry.path));
        body.push_str("</b><br />Belongs in:<ul>");
        for folder in &entry.belongs_in {
            body.push_str("<li>");
            body.push_str(&encode_text(folder));
            body.push_str("</li>");
        }
        body.push_str("</ul>Used on:<ul>");
        for page in &entry.used_on {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                encode_double_quoted_attribute(page),
                encode_text(page)
            ));
        }
        body.push_str("</ul></li>");
    }
    body.push_str("</ol></body></html>");
    body
}
