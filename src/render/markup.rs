use std::fmt;

/// HTML that is safe to splice into a document as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escape plain text for use as element content
    pub fn text(text: &str) -> Self {
        Markup(html_escape::encode_text(text).into_owned())
    }

    /// Escape a value for use inside a double-quoted attribute
    pub fn attribute(value: &str) -> Self {
        Markup(html_escape::encode_double_quoted_attribute(value).into_owned())
    }

    /// Trusted markup, inserted without escaping
    pub fn raw(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    pub fn join(parts: &[Markup], separator: &str) -> Self {
        Markup(
            parts
                .iter()
                .map(Markup::as_str)
                .collect::<Vec<_>>()
                .join(separator),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(Markup::text("Cats & <Dogs>").as_str(), "Cats &amp; &lt;Dogs&gt;");
    }

    #[test]
    fn test_text_keeps_slashes_and_quotes() {
        assert_eq!(Markup::text("AC/DC \"live\"").as_str(), "AC/DC \"live\"");
    }

    #[test]
    fn test_attribute_escapes_quotes() {
        assert_eq!(
            Markup::attribute("https://x.test/?a=\"b\"").as_str(),
            "https://x.test/?a=&quot;b&quot;"
        );
    }

    #[test]
    fn test_raw_is_untouched() {
        assert_eq!(Markup::raw("<b>bold</b>").as_str(), "<b>bold</b>");
    }

    #[test]
    fn test_join() {
        let joined = Markup::join(&[Markup::raw("<a>"), Markup::text("&")], "\n");
        assert_eq!(joined.as_str(), "<a>\n&amp;");
    }
}
