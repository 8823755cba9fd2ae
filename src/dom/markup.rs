//! Text-safe table content.
//!
//! Cell content is kept as literal text fragments separated by explicit
//! line breaks. Nothing in a fragment is ever interpreted as markup; HTML
//! serialization escapes it.

use std::borrow::Cow;

use crate::search::SearchResult;

/// Sequence replaced by a line break in match cells. A lone LF is kept.
const LINE_BREAK: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    LineBreak,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    fragments: Vec<Fragment>,
}

impl Cell {
    /// Cell holding `text` verbatim.
    pub fn text(text: &str) -> Self {
        let fragments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Fragment::Text(text.to_string())]
        };
        Self { fragments }
    }

    /// Cell where every CR-LF in `text` becomes a line break.
    pub fn with_line_breaks(text: &str) -> Self {
        let mut fragments = Vec::new();
        for (idx, segment) in text.split(LINE_BREAK).enumerate() {
            if idx > 0 {
                fragments.push(Fragment::LineBreak);
            }
            if !segment.is_empty() {
                fragments.push(Fragment::Text(segment.to_string()));
            }
        }
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Visual lines of the cell, split at line breaks.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![String::new()];
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => {
                    if let Some(last) = lines.last_mut() {
                        last.push_str(text);
                    }
                }
                Fragment::LineBreak => lines.push(String::new()),
            }
        }
        lines
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => out.push_str(&escape_text(text)),
                Fragment::LineBreak => out.push_str("<br>"),
            }
        }
        out
    }
}

/// One table row: the match cell followed by the work cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub matched: Cell,
    pub work: Cell,
}

impl TableRow {
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            matched: Cell::with_line_breaks(&result.matched),
            work: Cell::text(&result.work),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            self.matched.to_html(),
            self.work.to_html()
        )
    }
}

/// Serializes rows as a table body fragment, one `<tr>` per line.
pub fn rows_to_html(rows: &[TableRow]) -> String {
    rows.iter()
        .map(TableRow::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escapes markup-significant characters so `text` displays literally.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_becomes_line_break() {
        let cell = Cell::with_line_breaks("line1\r\nline2");
        assert_eq!(
            cell.fragments(),
            &[
                Fragment::Text("line1".to_string()),
                Fragment::LineBreak,
                Fragment::Text("line2".to_string()),
            ]
        );
        assert_eq!(cell.to_html(), "line1<br>line2");
        assert_eq!(cell.lines(), vec!["line1", "line2"]);
    }

    #[test]
    fn lone_lf_is_left_alone() {
        let cell = Cell::with_line_breaks("line1\nline2");
        assert_eq!(cell.fragments(), &[Fragment::Text("line1\nline2".to_string())]);
        assert_eq!(cell.lines().len(), 1);
    }

    #[test]
    fn consecutive_breaks_are_kept() {
        let cell = Cell::with_line_breaks("a\r\n\r\nb\r\n");
        assert_eq!(cell.lines(), vec!["a", "", "b", ""]);
        assert_eq!(cell.to_html(), "a<br><br>b<br>");
    }

    #[test]
    fn work_cell_is_verbatim() {
        let cell = Cell::text("Hamlet\r\nAct I");
        assert_eq!(cell.lines(), vec!["Hamlet\r\nAct I"]);
    }

    #[test]
    fn markup_is_escaped() {
        let row = TableRow::from_result(&SearchResult::new(
            "<script>alert('x')</script>",
            "A & B \"quoted\"",
        ));
        assert_eq!(
            row.to_html(),
            "<tr><td>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</td>\
             <td>A &amp; B &quot;quoted&quot;</td></tr>"
        );
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_text("plain words"), Cow::Borrowed(_)));
    }
}
