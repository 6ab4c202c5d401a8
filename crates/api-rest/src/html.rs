//! HTML fragments served by the form front-end.
//!
//! Both renderers return fragments, not full documents. All text taken from a request or
//! from openFDA is escaped before it is written into markup.

use drugcheck_core::ResultPayload;
use std::fmt::Write;

/// Name of the repeated form field carrying the selected conditions.
pub const SELECTION_FIELD: &str = "conditions[]";

/// Notice shown in place of the side-effect list when none were reported.
pub const NO_SIDE_EFFECTS_NOTICE: &str = "No potential side effects found.";

/// Render the condition selection form.
pub fn render_condition_form(conditions: &[&str]) -> String {
    let mut options = String::new();
    for condition in conditions {
        let condition = escape(condition);
        let _ = write!(options, r#"<option value="{condition}">{condition}</option>"#);
    }

    format!(
        r#"
<form method="post" action="/get_medications">
    <label for="conditions">Select medical conditions:</label>
    <select name="{SELECTION_FIELD}" id="conditions" multiple>
        {options}
    </select>
    <button type="submit">Submit</button>
</form>
"#
    )
}

/// Render the lookup result.
///
/// Medications and interactions are always listed. The side-effect section is a list when
/// side effects were found and a notice paragraph otherwise.
pub fn render_result(payload: &ResultPayload) -> String {
    let conditions = payload
        .conditions
        .iter()
        .map(|c| escape(c))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    let _ = write!(
        out,
        r#"
<h3>Medications for {conditions}:</h3>
<ul>
    {}
</ul>
<h3>Potential drug interactions:</h3>
<ul>
    {}
</ul>
<h3>Potential side effects:</h3>
"#,
        list_items(&payload.medications),
        list_items(&payload.interactions),
    );

    if payload.side_effects.is_empty() {
        let _ = writeln!(out, "<p>{NO_SIDE_EFFECTS_NOTICE}</p>");
    } else {
        let _ = writeln!(out, "<ul>\n    {}\n</ul>", list_items(&payload.side_effects));
    }

    out
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

/// Escape text for use in element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
