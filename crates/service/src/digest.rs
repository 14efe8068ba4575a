//! HTML digest rendering.

use launchwatch_core::{LaunchDetail, format_display};

pub const NEW_HEADING: &str = "Upcoming Rocket Launches This Week";
pub const UPDATED_HEADING: &str = "Updated Rocket Launches This Week";

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body { font-family: Arial, sans-serif; color: black; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ddd; padding: 8px; }
        th { background-color: #4CAF50; color: white; }
        img { width: 100px; height: auto; }
    </style>
</head>
<body>"#;

const TAIL: &str = "\n</body>\n</html>\n";

const HEADER_ROW: &str = "
        <tr>
            <th>Name</th>
            <th>Start Window</th>
            <th>End Window</th>
            <th>Mission Description</th>
            <th>Image</th>
        </tr>";

/// Render the digest: a New table, then an Updated table, each only when non-empty.
///
/// With both lists empty the result is a complete document with an empty body.
#[must_use]
pub fn render_digest(new: &[LaunchDetail], updated: &[LaunchDetail]) -> String {
    let mut html = String::from(HEAD);
    push_section(&mut html, NEW_HEADING, new);
    push_section(&mut html, UPDATED_HEADING, updated);
    html.push_str(TAIL);
    html
}

fn push_section(html: &mut String, heading: &str, launches: &[LaunchDetail]) {
    if launches.is_empty() {
        return;
    }
    html.push_str(&format!("\n    <h2>{}</h2>\n    <table>{HEADER_ROW}", escape_html(heading)));
    for launch in launches {
        html.push_str(&row(launch));
    }
    html.push_str("\n    </table>");
}

fn row(launch: &LaunchDetail) -> String {
    format!(
        "
        <tr>
            <td><b>{name}</b></td>
            <td>{start}</td>
            <td>{end}</td>
            <td>{description}</td>
            <td><img src=\"{image}\" alt=\"Launch Image\"></td>
        </tr>",
        name = escape_html(&launch.name),
        start = format_display(&launch.start),
        end = format_display(&launch.end),
        description = escape_html(&launch.description),
        image = escape_html(&launch.image_url),
    )
}

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
