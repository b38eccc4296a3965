use std::sync::OnceLock;

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::types::NormalizedContent;

/// Elements dropped wholesale, descendants included.
pub const UNWANTED_TAGS: [&str; 5] = ["script", "style", "nav", "header", "footer"];

/// Bodies must be strictly longer than this (in UTF-16 code units) to count as extracted.
pub const MIN_ACCEPTED_CHARS: usize = 100;

pub const DEFAULT_TITLE: &str = "Contenido extraído";

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn blank_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("static regex"))
}

/// Parse as a browser does with scripting disabled, so `<noscript>` holds elements, not raw markup.
fn parse(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts { scripting_enabled: false, ..Default::default() },
        ..Default::default()
    };
    html5ever::parse_document(Html::new_document(), opts).one(html)
}

/// Body text of `html` with unwanted elements removed, whitespace collapsed and trimmed.
pub fn strip(html: &str) -> String {
    let doc = parse(html);
    let mut raw = String::new();
    if let Ok(sel) = Selector::parse("body") {
        if let Some(body) = doc.select(&sel).next() {
            collect_text(body, &mut raw);
        }
    }
    normalize_text(&raw)
}

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            // template contents are inert and never part of the text
            if is_unwanted(name) || name.eq_ignore_ascii_case("template") { continue; }
            collect_text(child_el, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

fn is_unwanted(name: &str) -> bool {
    UNWANTED_TAGS.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// Whitespace normalization shared by `strip`. A second pass is a no-op.
pub fn normalize_text(s: &str) -> String {
    let collapsed = whitespace_run().replace_all(s, " ");
    let joined = blank_line().replace_all(&collapsed, "\n");
    joined.trim().to_string()
}

/// Text of the first `<title>`, ASCII whitespace collapsed. Empty when absent.
pub fn document_title(html: &str) -> String {
    let doc = parse(html);
    let Ok(sel) = Selector::parse("title") else { return String::new() };
    doc.select(&sel)
        .next()
        .map(|t| t.text().collect::<String>().split_ascii_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

pub fn word_count(body: &str) -> usize {
    body.split(' ').count()
}

/// Length in UTF-16 code units, so characters outside the BMP count twice.
pub fn char_count(body: &str) -> usize {
    body.encode_utf16().count()
}

pub fn paragraph_count(body: &str) -> usize {
    body.split('\n').filter(|p| !p.trim().is_empty()).count()
}

/// Build content with the three derived metrics filled in.
pub fn measure(title: String, body: String, accepted: bool) -> NormalizedContent {
    NormalizedContent {
        word_count: word_count(&body),
        char_count: char_count(&body),
        paragraph_count: paragraph_count(&body),
        title,
        body,
        accepted,
    }
}

/// `Some` when `body` clears the acceptance threshold, `None` to signal fallback.
pub fn accept(title: &str, body: &str) -> Option<NormalizedContent> {
    if char_count(body) <= MIN_ACCEPTED_CHARS {
        return None;
    }
    let title = if title.is_empty() { DEFAULT_TITLE } else { title };
    Some(measure(title.to_string(), body.to_string(), true))
}

/// strip + title + accept over one document.
pub fn normalize_html(html: &str) -> Option<NormalizedContent> {
    let body = strip(html);
    let title = document_title(html);
    accept(&title, &body)
}
