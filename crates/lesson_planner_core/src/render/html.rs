//! HTML emission for the classified block tree.
//!
//! Produces a styled fragment with stable class names; the page stylesheet
//! (and its print rules) does the rest. Consecutive bullet items are grouped
//! under one `<ul>` so the fragment stays well-formed.

use super::{Block, Cell, Keyword, Span};

/// Classifies and renders a text blob in one call.
pub fn render_document(text: &str) -> String {
    render_blocks(&super::parse_blocks(text))
}

/// Renders an ordered block sequence as an HTML fragment.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    let mut iter = blocks.iter().peekable();

    while let Some(block) = iter.next() {
        match block {
            Block::Heading { level, text } => {
                let tag = format!("h{level}");
                out.push_str(&format!("<{tag} class=\"md-h{level}\">{}</{tag}>\n", escape(text)));
            }
            Block::Bullet(spans) => {
                out.push_str("<ul class=\"md-list\">\n");
                out.push_str(&format!("<li>{}</li>\n", render_spans(spans)));
                while let Some(Block::Bullet(next)) = iter.peek() {
                    out.push_str(&format!("<li>{}</li>\n", render_spans(next)));
                    iter.next();
                }
                out.push_str("</ul>\n");
            }
            Block::Numbered { number, spans } => {
                out.push_str(&format!(
                    "<div class=\"md-numbered\"><span class=\"md-num\">{}.</span><p>{}</p></div>\n",
                    escape(number),
                    render_spans(spans)
                ));
            }
            Block::Paragraph(spans) => {
                out.push_str(&format!("<p class=\"md-p\">{}</p>\n", render_spans(spans)));
            }
            Block::Table { header, rows } => out.push_str(&render_table(header, rows)),
            Block::Spacer => out.push_str("<div class=\"md-spacer\"></div>\n"),
        }
    }
    out
}

fn render_table(header: &[String], rows: &[Vec<Cell>]) -> String {
    let mut out = String::from("<div class=\"md-table\"><table>\n<thead><tr>");
    for cell in header {
        out.push_str(&format!("<th>{}</th>", escape(cell)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for (index, row) in rows.iter().enumerate() {
        let stripe = if index % 2 == 0 { "even" } else { "odd" };
        out.push_str(&format!("<tr class=\"{stripe}\">"));
        for cell in row {
            out.push_str(&format!("<td>{}</td>", render_spans(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table></div>\n");
    out
}

fn render_spans(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(&escape(text)),
            Span::Strong(text) => out.push_str(&format!("<strong>{}</strong>", escape(text))),
            Span::Keyword(keyword) => {
                let class = match keyword {
                    Keyword::Berkesadaran => "kw-berkesadaran",
                    Keyword::Bermakna => "kw-bermakna",
                    Keyword::Menggembirakan => "kw-menggembirakan",
                };
                out.push_str(&format!("<span class=\"kw {class}\">{}</span>", keyword.label()));
            }
        }
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_render_as_distinct_badges() {
        let html = render_document("Prinsip: Berkesadaran, bermakna, MENGGEMBIRAKAN.");
        assert!(html.contains("kw-berkesadaran"));
        assert!(html.contains("kw-bermakna"));
        assert!(html.contains("kw-menggembirakan"));
        // The badge text is the canonical label regardless of input case.
        assert!(html.contains(">Menggembirakan</span>"));
    }

    #[test]
    fn consecutive_bullets_share_one_list() {
        let html = render_document("- satu\n- dua\n\n- tiga");
        assert_eq!(html.matches("<ul class=\"md-list\">").count(), 2);
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn raw_markup_in_generated_text_is_escaped() {
        let html = render_document("nilai <b>mentah</b> & \"kutipan\"");
        assert!(html.contains("&lt;b&gt;mentah&lt;/b&gt;"));
        assert!(html.contains("&amp; &quot;kutipan&quot;"));
    }

    #[test]
    fn short_table_emits_no_markup_at_all() {
        assert_eq!(render_document("| satu baris |"), "");
    }
}
