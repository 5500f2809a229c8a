//! HTML-entity escaping for the code display
//!
//! The generated snippet is raw markup; before it lands inside the
//! `<code>` block it goes through here so the browser shows it instead of
//! interpreting it. The live preview always receives the unescaped string.

/// Escape the five characters with HTML meaning: `& < > " '`.
/// Ampersand first so already-produced entities are not double-escaped.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape(escaped: &str) -> String {
        escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#039;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn escape_strips_angle_brackets() {
        let escaped = escape_html("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }

    #[test]
    fn escape_round_trips() {
        let original = r#"<div class="a" title='b'>&amp; more</div>"#;
        assert_eq!(unescape(&escape_html(original)), original);
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("px-16 py-8 rounded"), "px-16 py-8 rounded");
    }
}
