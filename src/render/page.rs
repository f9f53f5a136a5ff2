use crate::render::markup::Markup;

/// Assemble a full document; `style` is inlined verbatim as CSS
pub fn render_page(style: &str, feeds: &[Markup]) -> String {
    format!(
        "<html>\n<head>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        Markup::raw(style),
        Markup::join(feeds, "\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_is_not_escaped() {
        let page = render_page("td > a { color: #333; }", &[]);
        assert!(page.contains("<style>td > a { color: #333; }</style>"));
    }

    #[test]
    fn test_feeds_in_order() {
        let page = render_page(
            "",
            &[Markup::raw("<h2>First</h2>"), Markup::raw("<h2>Second</h2>")],
        );

        let first = page.find("<h2>First</h2>").unwrap();
        let second = page.find("<h2>Second</h2>").unwrap();
        assert!(first < second);
        assert!(page.starts_with("<html>\n<head>\n"));
        assert!(page.trim_end().ends_with("</body>\n</html>"));
    }
}
