//! crates/lesson_planner_core/src/render/mod.rs
//!
//! Line-oriented classifier for the restricted markdown subset the model is
//! instructed to emit: `#`-headings to four levels, `- ` bullets, `N.`
//! numbered items, `|`-delimited tables, paragraphs, and blank-line spacers.
//!
//! Classification is a single top-to-bottom pass. Table rows are the only
//! multi-line construct, so the pass carries the pending rows as explicit
//! state and flushes them when a non-table line (or end of input) arrives.

pub mod html;
mod inline;

pub use inline::{parse_inline, Keyword, Span};

use std::sync::LazyLock;

use regex::Regex;

static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.*)$").unwrap());

/// One table cell, already scanned for inline spans.
pub type Cell = Vec<Span>;

/// A block-level display node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# ` through `#### `, levels 1-4, marker stripped.
    Heading { level: u8, text: String },
    /// A `- ` item.
    Bullet(Vec<Span>),
    /// A `N.` item; the number is preserved and rendered apart from the text.
    Numbered { number: String, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    /// Header row plus body rows. The second source row (the `---` separator
    /// row) is already discarded.
    Table { header: Vec<String>, rows: Vec<Vec<Cell>> },
    /// A blank source line, kept to preserve vertical rhythm.
    Spacer,
}

/// Classifies a text blob into an ordered sequence of display blocks.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending_table: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('|') {
            let cells = trimmed
                .split('|')
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect();
            pending_table.push(cells);
            continue;
        }
        flush_table(&mut blocks, &mut pending_table);

        if let Some(rest) = trimmed.strip_prefix("# ") {
            blocks.push(Block::Heading { level: 1, text: rest.to_string() });
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            blocks.push(Block::Heading { level: 2, text: rest.to_string() });
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            blocks.push(Block::Heading { level: 3, text: rest.to_string() });
        } else if let Some(rest) = trimmed.strip_prefix("#### ") {
            blocks.push(Block::Heading { level: 4, text: rest.to_string() });
        } else if let Some(rest) = trimmed.strip_prefix("- ") {
            blocks.push(Block::Bullet(parse_inline(rest)));
        } else if let Some(caps) = ORDERED_RE.captures(trimmed) {
            blocks.push(Block::Numbered {
                number: caps[1].to_string(),
                spans: parse_inline(&caps[2]),
            });
        } else if !trimmed.is_empty() {
            blocks.push(Block::Paragraph(parse_inline(trimmed)));
        } else {
            blocks.push(Block::Spacer);
        }
    }
    flush_table(&mut blocks, &mut pending_table);

    blocks
}

/// Completes an accumulated table. A table needs at least a header and the
/// markdown separator row to render; anything shorter renders nothing.
fn flush_table(blocks: &mut Vec<Block>, pending: &mut Vec<Vec<String>>) {
    if pending.is_empty() {
        return;
    }
    let rows = std::mem::take(pending);
    if rows.len() < 2 {
        return;
    }

    let header = rows[0]
        .iter()
        .map(|cell| cell.replace("**", "").trim().to_string())
        .collect();
    let body = rows[2..]
        .iter()
        .map(|row| row.iter().map(|cell| parse_inline(cell.trim())).collect())
        .collect();
    blocks.push(Block::Table { header, rows: body });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_map_to_levels_with_marker_stripped() {
        let blocks = parse_blocks("# Satu\n## Dua\n### Tiga\n#### Empat");
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 1, text: "Satu".into() },
                Block::Heading { level: 2, text: "Dua".into() },
                Block::Heading { level: 3, text: "Tiga".into() },
                Block::Heading { level: 4, text: "Empat".into() },
            ]
        );
    }

    #[test]
    fn numbered_items_keep_the_number_apart_from_the_text() {
        let blocks = parse_blocks("12. langkah kedua belas");
        assert_eq!(
            blocks,
            vec![Block::Numbered {
                number: "12".into(),
                spans: vec![Span::Text("langkah kedua belas".into())],
            }]
        );
    }

    #[test]
    fn blank_lines_become_spacers_not_nothing() {
        let blocks = parse_blocks("satu\n\ndua");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], Block::Spacer);
    }

    #[test]
    fn table_with_fewer_than_two_rows_renders_nothing() {
        assert!(parse_blocks("| only header |").is_empty());
        assert!(parse_blocks("").is_empty());
    }

    #[test]
    fn table_with_exactly_two_rows_is_header_only() {
        let blocks = parse_blocks("| Aspek | Skor |\n|---|---|");
        assert_eq!(
            blocks,
            vec![Block::Table {
                header: vec!["Aspek".into(), "Skor".into()],
                rows: vec![],
            }]
        );
    }

    #[test]
    fn table_body_starts_at_the_third_row() {
        let text = "| **Aspek** | Skor |\n|---|---|\n| Ketelitian | 4 |\n| Kerjasama | 3 |";
        let blocks = parse_blocks(text);
        match &blocks[0] {
            Block::Table { header, rows } => {
                assert_eq!(header, &vec!["Aspek".to_string(), "Skor".to_string()]);
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0][0], vec![Span::Text("Ketelitian".into())]);
            }
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn table_is_terminated_by_a_non_pipe_line() {
        let blocks = parse_blocks("| A | B |\n|---|---|\n| 1 | 2 |\npenutup");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Table { .. }));
        assert_eq!(blocks[1], Block::Paragraph(vec![Span::Text("penutup".into())]));
    }

    #[test]
    fn keywords_are_badged_inside_list_items() {
        let blocks = parse_blocks("- Apersepsi (berkesadaran)");
        assert_eq!(
            blocks,
            vec![Block::Bullet(vec![
                Span::Text("Apersepsi (".into()),
                Span::Keyword(Keyword::Berkesadaran),
                Span::Text(")".into()),
            ])]
        );
    }
}
