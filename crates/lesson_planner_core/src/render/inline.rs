//! Inline span scanning for table cells, list items and paragraphs.
//!
//! The three curriculum keywords are matched first (case-insensitive) and
//! become badge spans; only the text between keyword matches is scanned for
//! `**bold**` spans, so bold detection never crosses a keyword boundary.

use std::sync::LazyLock;

use regex::Regex;

static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Berkesadaran|Bermakna|Menggembirakan").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").unwrap());

/// The three fixed curriculum principles the model is instructed to emit
/// verbatim so the renderer can badge them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Berkesadaran,
    Bermakna,
    Menggembirakan,
}

impl Keyword {
    /// The canonical display form, regardless of the case the model used.
    pub fn label(self) -> &'static str {
        match self {
            Keyword::Berkesadaran => "Berkesadaran",
            Keyword::Bermakna => "Bermakna",
            Keyword::Menggembirakan => "Menggembirakan",
        }
    }

    fn from_match(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "berkesadaran" => Keyword::Berkesadaran,
            "bermakna" => Keyword::Bermakna,
            _ => Keyword::Menggembirakan,
        }
    }
}

/// One inline fragment of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    /// A `**bold**` run, asterisks stripped.
    Strong(String),
    /// One of the badged curriculum keywords.
    Keyword(Keyword),
}

/// Scans a line fragment into inline spans. Keyword matching takes
/// precedence; the remaining segments are scanned for bold runs.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for keyword in KEYWORD_RE.find_iter(text) {
        push_bold_segments(&mut spans, &text[cursor..keyword.start()]);
        spans.push(Span::Keyword(Keyword::from_match(keyword.as_str())));
        cursor = keyword.end();
    }
    push_bold_segments(&mut spans, &text[cursor..]);
    spans
}

fn push_bold_segments(spans: &mut Vec<Span>, segment: &str) {
    let mut cursor = 0;
    for bold in BOLD_RE.find_iter(segment) {
        if bold.start() > cursor {
            spans.push(Span::Text(segment[cursor..bold.start()].to_string()));
        }
        let inner = bold.as_str().trim_matches('*');
        spans.push(Span::Strong(inner.to_string()));
        cursor = bold.end();
    }
    if cursor < segment.len() {
        spans.push(Span::Text(segment[cursor..].to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_in_any_case() {
        for variant in ["Berkesadaran", "BERKESADARAN", "berkesadaran", "BerKeSaDaRan"] {
            let spans = parse_inline(variant);
            assert_eq!(spans, vec![Span::Keyword(Keyword::Berkesadaran)], "{variant}");
        }
        assert_eq!(
            parse_inline("bermakna dan MENGGEMBIRAKAN"),
            vec![
                Span::Keyword(Keyword::Bermakna),
                Span::Text(" dan ".into()),
                Span::Keyword(Keyword::Menggembirakan),
            ]
        );
    }

    #[test]
    fn bold_runs_are_stripped_of_asterisks() {
        assert_eq!(
            parse_inline("sebelum **tengah** sesudah"),
            vec![
                Span::Text("sebelum ".into()),
                Span::Strong("tengah".into()),
                Span::Text(" sesudah".into()),
            ]
        );
    }

    #[test]
    fn bold_detection_never_crosses_a_keyword_boundary() {
        // The ** pair straddles the keyword; neither half may become bold.
        let spans = parse_inline("**Bermakna**");
        assert_eq!(
            spans,
            vec![
                Span::Text("**".into()),
                Span::Keyword(Keyword::Bermakna),
                Span::Text("**".into()),
            ]
        );
    }

    #[test]
    fn plain_text_stays_a_single_span() {
        assert_eq!(
            parse_inline("tidak ada markup"),
            vec![Span::Text("tidak ada markup".into())]
        );
    }
}
