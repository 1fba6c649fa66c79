use scraper::{Html, Node, Selector};

/// Extracts the visible text of an HTML document body.
///
/// `script` and `style` subtrees are skipped entirely, runs of whitespace
/// collapse to a single space, the result is trimmed and cut at `max_chars`
/// characters. The cut is a hard one, not sentence-aware.
pub fn extract_visible_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);

    let Some(body) = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
    else {
        return String::new();
    };

    let mut raw = String::new();
    let mut stack: Vec<_> = body.children().rev().collect();
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(element) => {
                if element.name() != "script" && element.name() != "style" {
                    stack.extend(node.children().rev());
                }
            }
            Node::Text(text) => {
                raw.push_str(text);
                raw.push(' ');
            }
            _ => {}
        }
    }

    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > max_chars {
        collapsed.chars().take(max_chars).collect()
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_and_style_subtrees() {
        let html = r#"<html><head><style>body { color: red }</style></head>
            <body><h1>Title</h1><script>var secret = 1;</script><p>Visible</p>
            <div><script>nested()</script>inner</div></body></html>"#;
        let text = extract_visible_text(html, 5000);
        assert_eq!(text, "Title Visible inner");
    }

    #[test]
    fn collapses_whitespace_runs() {
        let html = "<body><p>  a \n\n b\t\tc  </p></body>";
        assert_eq!(extract_visible_text(html, 5000), "a b c");
    }

    #[test]
    fn truncates_to_the_character_cap() {
        let body = "word ".repeat(2500);
        let html = format!("<body><p>{}</p></body>", body);
        let text = extract_visible_text(&html, 5000);
        assert!(text.chars().count() <= 5000);
        assert!(text.starts_with("word word"));
    }

    #[test]
    fn empty_document_yields_empty_text() {
        assert_eq!(extract_visible_text("", 5000), "");
        assert_eq!(extract_visible_text("<body></body>", 5000), "");
    }

    #[test]
    fn cap_is_counted_in_characters_not_bytes() {
        let body = "é".repeat(100);
        let html = format!("<body>{}</body>", body);
        let text = extract_visible_text(&html, 10);
        assert_eq!(text.chars().count(), 10);
    }
}
