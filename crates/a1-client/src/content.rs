//! HTML helpers for CMS-authored markup.
//!
//! CMS titles and bodies arrive as HTML fragments. Before any of it reaches a
//! page it goes through [`sanitize_html`], which keeps a small set of inline
//! and list tags and escapes everything else as text.

use scraper::{ElementRef, Html, Selector};

/// Tags kept as-is (minus attributes).
const ALLOWED_TAGS: &[&str] = &[
    "b", "strong", "em", "i", "u", "span", "br", "p", "ul", "ol", "li", "a", "h1", "h2", "h3",
    "h4", "h5", "h6", "blockquote",
];

/// Tags dropped together with their content.
const DROPPED_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "svg", "math",
];

const VOID_TAGS: &[&str] = &["br"];

/// Reduce an HTML fragment to the allowlisted tags.
///
/// Unknown tags are unwrapped (their text survives), dangerous ones are
/// removed with their content, text is re-escaped. Links keep only an
/// `http(s)`, `mailto:` or relative `href`; `span` keeps its `class`.
pub fn sanitize_html(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    let mut out = String::with_capacity(input.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(parent: ElementRef<'_>, out: &mut String) {
    for child in parent.children() {
        if let Some(text) = child.value().as_text() {
            escape_into(text, out);
        } else if let Some(element) = ElementRef::wrap(child) {
            write_element(element, out);
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if DROPPED_TAGS.contains(&name) {
        return;
    }
    if !ALLOWED_TAGS.contains(&name) {
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    match name {
        "a" => match element.value().attr("href").filter(|h| is_safe_href(h)) {
            Some(href) => {
                out.push_str(" href=\"");
                escape_into(href, out);
                out.push_str("\" rel=\"noopener noreferrer\"");
            }
            None => {
                // No usable target: keep the text only.
                out.truncate(out.len() - 2);
                write_children(element, out);
                return;
            }
        },
        "span" => {
            if let Some(class) = element.value().attr("class") {
                out.push_str(" class=\"");
                escape_into(class, out);
                out.push('"');
            }
        }
        _ => {}
    }
    out.push('>');

    if VOID_TAGS.contains(&name) {
        return;
    }
    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || (href.starts_with('/') && !href.starts_with("//"))
        || href.starts_with('#')
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

/// Text content of an HTML fragment with whitespace collapsed.
///
/// Content of dropped tags (scripts, styles) is not included.
pub fn plain_text(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    let mut text = String::with_capacity(input.len());
    collect_text(fragment.root_element(), &mut text);
    collapse_whitespace(&text)
}

fn collect_text(parent: ElementRef<'_>, out: &mut String) {
    for child in parent.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(element) = ElementRef::wrap(child) {
            match element.value().name() {
                name if DROPPED_TAGS.contains(&name) => {}
                "br" | "p" | "li" => {
                    out.push(' ');
                    collect_text(element, out);
                    out.push(' ');
                }
                _ => collect_text(element, out),
            }
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A content block's body, split the way the content sections render it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichContent {
    /// Text of the first `<p>`.
    pub description: Option<String>,
    /// Text of every `<span>`, in document order, blanks skipped.
    pub bullets: Vec<String>,
}

impl RichContent {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.bullets.is_empty()
    }
}

/// Split a content body into its lead paragraph and bullet points.
pub fn parse_rich_content(input: &str) -> RichContent {
    let (Ok(paragraph), Ok(span)) = (Selector::parse("p"), Selector::parse("span")) else {
        return RichContent::default();
    };
    let fragment = Html::parse_fragment(input);

    let description = fragment
        .select(&paragraph)
        .next()
        .map(|p| collapse_whitespace(&p.text().collect::<String>()))
        .filter(|text| !text.is_empty());

    let bullets = fragment
        .select(&span)
        .map(|s| collapse_whitespace(&s.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect();

    RichContent {
        description,
        bullets,
    }
}
