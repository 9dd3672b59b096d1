//! Server-rendered HTML for the signup and settings pages.
//!
//! Every interpolated value goes through [`escape_html`].

use crate::application::handlers::newsletter::SettingsFormView;

/// Placeholder option at the top of the segment selector.
pub const SEGMENT_PLACEHOLDER: &str = "Please select a segment";

/// Flash-style message shown above a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Status,
    Warning,
    Error,
}

impl MessageKind {
    fn css_class(self) -> &'static str {
        match self {
            MessageKind::Status => "messages--status",
            MessageKind::Warning => "messages--warning",
            MessageKind::Error => "messages--error",
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<h1>{}</h1>\n{}</body>\n</html>\n",
        escape_html(title),
        escape_html(title),
        body
    )
}

fn messages(items: &[(MessageKind, String)]) -> String {
    items
        .iter()
        .map(|(kind, text)| {
            format!(
                "<div class=\"messages {}\" role=\"alert\">{}</div>\n",
                kind.css_class(),
                escape_html(text)
            )
        })
        .collect()
}

/// Values echoed back into the signup form.
#[derive(Debug, Clone, Default)]
pub struct SignupFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Signup page with optional messages.
pub fn signup_page(values: &SignupFormValues, notices: &[(MessageKind, String)]) -> String {
    let body = format!(
        concat!(
            "{messages}",
            "<form class=\"newsletter-signup-form\" method=\"post\" action=\"/newsletter/signup\">\n",
            "<div style=\"display:none\" aria-hidden=\"true\">",
            "<label for=\"hp\">Leave this field blank</label>",
            "<input type=\"text\" id=\"hp\" name=\"hp\" value=\"\" tabindex=\"-1\" autocomplete=\"off\">",
            "</div>\n",
            "<label for=\"first_name\">First Name</label>\n",
            "<input type=\"text\" id=\"first_name\" name=\"first_name\" maxlength=\"255\" value=\"{first}\">\n",
            "<label for=\"last_name\">Last Name</label>\n",
            "<input type=\"text\" id=\"last_name\" name=\"last_name\" maxlength=\"255\" value=\"{last}\">\n",
            "<label for=\"email\">Email</label>\n",
            "<input type=\"email\" id=\"email\" name=\"email\" required value=\"{email}\">\n",
            "<button type=\"submit\">Subscribe</button>\n",
            "</form>\n"
        ),
        messages = messages(notices),
        first = escape_html(&values.first_name),
        last = escape_html(&values.last_name),
        email = escape_html(&values.email),
    );
    layout("Newsletter Signup", &body)
}

/// Segment selector, or nothing when no segments could be loaded.
///
/// Leaving the field out keeps the browser from submitting an empty
/// `segment_id`, so the stored segment survives a save while the API is
/// unreachable.
fn segment_select(view: &SettingsFormView) -> String {
    if view.segments.is_empty() {
        return String::new();
    }

    let mut options = format!(
        "<option value=\"\">{}</option>\n",
        escape_html(SEGMENT_PLACEHOLDER)
    );
    for segment in &view.segments {
        let selected = if segment.id == view.selected_segment_id {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escape_html(&segment.id),
            selected,
            escape_html(&segment.name)
        ));
    }

    format!(
        "<label for=\"segment_id\">Segment</label>\n<select id=\"segment_id\" name=\"segment_id\">\n{}</select>\n",
        options
    )
}

/// Admin settings page.
pub fn settings_page(view: &SettingsFormView, notices: &[(MessageKind, String)]) -> String {
    let mut all_notices = notices.to_vec();
    if let Some(error) = &view.organization_error {
        all_notices.push((MessageKind::Error, error.clone()));
    }
    if let Some(warning) = &view.segments_warning {
        all_notices.push((MessageKind::Warning, warning.clone()));
    }

    let segment_field = segment_select(view);

    let token_hint = if view.token_configured {
        "A token is stored. Leave blank to keep it."
    } else {
        "No token stored yet."
    };

    let updated = view
        .updated_at
        .map(|at| {
            format!(
                "<p class=\"updated-at\">Last saved {}</p>\n",
                at.format("%Y-%m-%d %H:%M UTC")
            )
        })
        .unwrap_or_default();

    let body = format!(
        concat!(
            "{messages}",
            "<form class=\"newsletter-settings-form\" method=\"post\" action=\"/admin/newsletter/settings\">\n",
            "<label for=\"api_bearer_token\">API Bearer Token</label>\n",
            "<input type=\"password\" id=\"api_bearer_token\" name=\"api_bearer_token\" value=\"\" autocomplete=\"off\">\n",
            "<p class=\"description\">{token_hint}</p>\n",
            "<label for=\"organization_name\">Organization Name</label>\n",
            "<input type=\"text\" id=\"organization_name\" name=\"organization_name\" required value=\"{org}\">\n",
            "<p class=\"description\">e.g. examplename.ngo.tools</p>\n",
            "{segment_field}",
            "<label for=\"confirmation_message\">Confirmation Message</label>\n",
            "<textarea id=\"confirmation_message\" name=\"confirmation_message\">{message}</textarea>\n",
            "<p class=\"description\">Use [email] to include the subscriber's address.</p>\n",
            "{updated}",
            "<button type=\"submit\">Save configuration</button>\n",
            "</form>\n"
        ),
        messages = messages(&all_notices),
        token_hint = escape_html(token_hint),
        org = escape_html(&view.organization_host),
        segment_field = segment_field,
        message = escape_html(&view.confirmation_message),
        updated = updated,
    );
    layout("NGO Tools Newsletter Settings", &body)
}

/// Minimal page for failures that prevent rendering a form.
pub fn error_page(title: &str, message: &str) -> String {
    layout(title, &messages(&[(MessageKind::Error, message.to_string())]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::newsletter::Segment;

    fn view() -> SettingsFormView {
        SettingsFormView {
            organization_host: "foo.ngo.tools".to_string(),
            organization_error: None,
            token_configured: true,
            segments: vec![Segment::new("1", "Donors"), Segment::new("2", "<Volunteers>")],
            segments_warning: None,
            selected_segment_id: "2".to_string(),
            confirmation_message: "Thanks [email]".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn escape_html_handles_markup() {
        assert_eq!(
            escape_html("<a href=\"x\">'&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn signup_page_has_hidden_honeypot_and_fields() {
        let html = signup_page(&SignupFormValues::default(), &[]);
        assert!(html.contains("name=\"hp\""));
        assert!(html.contains("display:none"));
        assert!(html.contains("name=\"first_name\""));
        assert!(html.contains("name=\"last_name\""));
        assert!(html.contains("name=\"email\" required"));
    }

    #[test]
    fn signup_page_escapes_messages() {
        let html = signup_page(
            &SignupFormValues::default(),
            &[(MessageKind::Status, "Check <b>me</b>".to_string())],
        );
        assert!(html.contains("Check &lt;b&gt;me&lt;/b&gt;"));
        assert!(html.contains("messages--status"));
    }

    #[test]
    fn settings_page_lists_placeholder_first_and_preselects() {
        let html = settings_page(&view(), &[]);
        let placeholder = html.find(SEGMENT_PLACEHOLDER).unwrap();
        let donors = html.find("Donors").unwrap();
        assert!(placeholder < donors);
        assert!(html.contains("<option value=\"2\" selected>&lt;Volunteers&gt;</option>"));
    }

    #[test]
    fn settings_page_omits_selector_without_segments() {
        let mut view = view();
        view.segments.clear();
        let html = settings_page(&view, &[]);
        assert!(!html.contains("name=\"segment_id\""));
        assert!(!html.contains(SEGMENT_PLACEHOLDER));
    }

    #[test]
    fn settings_page_never_echoes_token() {
        let html = settings_page(&view(), &[]);
        assert!(html.contains("name=\"api_bearer_token\" value=\"\""));
        assert!(html.contains("A token is stored"));
    }

    #[test]
    fn settings_page_shows_view_warnings() {
        let mut view = view();
        view.organization_error = Some("bad org".to_string());
        view.segments_warning = Some("no segments".to_string());
        let html = settings_page(&view, &[]);
        assert!(html.contains("messages--error\" role=\"alert\">bad org"));
        assert!(html.contains("messages--warning\" role=\"alert\">no segments"));
    }
}
