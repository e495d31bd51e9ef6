// Template filters shared by the page renderer

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `sc` filter: wrap `input` in a span carrying `class`.
pub fn sc(input: &str, class: &str) -> String {
    format!(
        "<span class=\"{}\">{}</span>",
        escape_html(class),
        escape_html(input)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sc() {
        assert_eq!(sc("Scala", "lang scala"), r#"<span class="lang scala">Scala</span>"#);
    }

    #[test]
    fn test_sc_escapes() {
        assert_eq!(
            sc("<b>&</b>", "x\" onclick=\""),
            r#"<span class="x&quot; onclick=&quot;">&lt;b&gt;&amp;&lt;/b&gt;</span>"#
        );
    }
}
