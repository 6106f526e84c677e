/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(escape_html("print(1)\n"), "print(1)\n");
        assert_eq!(escape_html("Übung äöü"), "Übung äöü");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
