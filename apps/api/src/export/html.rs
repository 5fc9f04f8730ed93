//! Standalone HTML document assembly and download filenames.

use crate::render::{escape_html, Node};

const FALLBACK_NAME: &str = "untitled";

/// Inter in the weights the templates use.
pub const INTER_FONT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

/// Wraps the rendered preview root in a complete UTF-8 document with one external
/// stylesheet link and an inline rule that loads Inter for the body.
pub fn standalone_html(title: &str, root: &Node, stylesheet_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="{stylesheet}" rel="stylesheet">
    <style>
        @import url('{font}');
        body {{ font-family: 'Inter', sans-serif; }}
    </style>
</head>
<body>
    {body}
</body>
</html>
"#,
        title = escape_html(title),
        // Style content is raw text; entities would not be decoded there.
        font = INTER_FONT_URL,
        stylesheet = escape_html(stylesheet_url),
        body = root.to_html(),
    )
}

/// Lowercased title with each whitespace run collapsed to `-`, plus `.html`.
pub fn html_filename(title: &str) -> String {
    let slug = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if slug.is_empty() {
        format!("{FALLBACK_NAME}.html")
    } else {
        format!("{slug}.html")
    }
}

/// The raw title plus `.pdf`.
pub fn pdf_filename(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        format!("{FALLBACK_NAME}.pdf")
    } else {
        format!("{title}.pdf")
    }
}

/// `Content-Disposition` value for a download. Non-ASCII names get an RFC 5987
/// `filename*` alongside an ASCII fallback.
pub fn attachment_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    if filename.is_ascii() {
        return format!("attachment; filename=\"{ascii}\"");
    }
    let mut encoded = String::new();
    for byte in filename.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}
