//! Table discovery over live markup and comment-hosted markup.
//!
//! Baseball-Reference ships most secondary tables inside HTML comments and
//! un-comments them client side. `Tables` walks the live tree first, then
//! reparses every comment that contains a `<table` tag, yielding both kinds
//! as the same owned `TableCandidate`.

use once_cell::sync::Lazy;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

use crate::normalize::compact_text;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static THEAD: Lazy<Selector> = Lazy::new(|| Selector::parse("thead").unwrap());
static TFOOT: Lazy<Selector> = Lazy::new(|| Selector::parse("tfoot").unwrap());
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static TH: Lazy<Selector> = Lazy::new(|| Selector::parse("th").unwrap());
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static HEADER_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th, td").unwrap());

/// Where a table was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOrigin {
    Live,
    Comment,
}

impl TableOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Comment => "comment",
        }
    }
}

/// One table cell: its `data-stat` tag (if any) and visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub stat: Option<String>,
    pub text: String,
}

/// A `<tfoot>` row: the text of its first `th` and all of its `td` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterRow {
    pub label: String,
    pub cells: Vec<Cell>,
}

/// An extracted table, detached from the document it came from.
#[derive(Debug, Clone)]
pub struct TableCandidate {
    pub id: String,
    pub origin: TableOrigin,
    /// Cells of the last `<thead>` row, in column order.
    pub header: Vec<Cell>,
    /// `None` when the table has no `<tfoot>`.
    pub footer: Option<Vec<FooterRow>>,
}

impl TableCandidate {
    fn from_element(table: ElementRef<'_>, origin: TableOrigin) -> Self {
        let id = table.value().attr("id").unwrap_or_default().to_string();

        let header = table
            .select(&THEAD)
            .next()
            .and_then(|thead| thead.select(&TR).last())
            .map(|row| {
                row.select(&HEADER_CELL)
                    .map(|cell| Cell {
                        stat: stat_tag(cell),
                        text: compact_text(cell.text()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let footer = table.select(&TFOOT).next().map(|tfoot| {
            tfoot
                .select(&TR)
                .map(|tr| FooterRow {
                    label: tr
                        .select(&TH)
                        .next()
                        .map(|th| compact_text(th.text()))
                        .unwrap_or_default(),
                    cells: tr
                        .select(&TD)
                        .map(|td| Cell {
                            stat: stat_tag(td),
                            text: compact_text(td.text()).replace(',', ""),
                        })
                        .collect(),
                })
                .collect()
        });

        Self {
            id,
            origin,
            header,
            footer,
        }
    }
}

/// `data-stat` attribute, trimmed, lowercased, spaces turned into underscores.
fn stat_tag(el: ElementRef<'_>) -> Option<String> {
    let raw = el.value().attr("data-stat")?.trim().to_lowercase();
    if raw.is_empty() {
        None
    } else {
        Some(raw.replace(' ', "_"))
    }
}

/// Lazy, single-pass sequence of every table in a document.
pub struct Tables<'a> {
    live: Select<'a, 'static>,
    comments: Box<dyn Iterator<Item = &'a str> + 'a>,
    pending: std::vec::IntoIter<TableCandidate>,
}

/// Iterates live tables in document order, then tables hidden in comments.
pub fn iter_tables(document: &Html) -> Tables<'_> {
    let comments = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| node.value().as_comment())
        .map(|comment| &**comment)
        .filter(|text| text.contains("<table"));

    Tables {
        live: document.select(&TABLE),
        comments: Box::new(comments),
        pending: Vec::new().into_iter(),
    }
}

/// Parses markup and collects every table, live then comment-hosted.
pub fn list_tables(html: &str) -> Vec<TableCandidate> {
    let document = Html::parse_document(html);
    iter_tables(&document).collect()
}

impl Iterator for Tables<'_> {
    type Item = TableCandidate;

    fn next(&mut self) -> Option<TableCandidate> {
        if let Some(table) = self.live.next() {
            return Some(TableCandidate::from_element(table, TableOrigin::Live));
        }
        loop {
            if let Some(candidate) = self.pending.next() {
                return Some(candidate);
            }
            let payload = self.comments.next()?;
            self.pending = comment_tables(payload).into_iter();
        }
    }
}

/// Reparses a comment payload as a fragment.
///
/// The HTML parser recovers from malformed input instead of failing; recovery
/// notes are logged and a payload that yields no tables contributes nothing.
fn comment_tables(payload: &str) -> Vec<TableCandidate> {
    let fragment = Html::parse_fragment(payload);
    if !fragment.errors.is_empty() {
        tracing::trace!(
            "comment markup parsed with {} recoverable errors",
            fragment.errors.len()
        );
    }
    fragment
        .select(&TABLE)
        .map(|table| TableCandidate::from_element(table, TableOrigin::Comment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(markup: &str) -> Vec<(String, TableOrigin)> {
        list_tables(markup)
            .into_iter()
            .map(|t| (t.id, t.origin))
            .collect()
    }

    #[test]
    fn live_tables_come_before_comment_tables() {
        let markup = r#"<html><body>
            <!-- <table id="hidden_one"><tr><td>1</td></tr></table> -->
            <table id="live_one"><tr><td>1</td></tr></table>
            <div><!-- just a note --></div>
            <!-- <div><table id="hidden_two"></table><table id="hidden_three"></table></div> -->
            <table id="live_two"></table>
        </body></html>"#;
        assert_eq!(
            ids(markup),
            vec![
                ("live_one".to_string(), TableOrigin::Live),
                ("live_two".to_string(), TableOrigin::Live),
                ("hidden_one".to_string(), TableOrigin::Comment),
                ("hidden_two".to_string(), TableOrigin::Comment),
                ("hidden_three".to_string(), TableOrigin::Comment),
            ]
        );
    }

    #[test]
    fn malformed_comment_markup_is_tolerated() {
        let markup = r#"<html><body>
            <!-- <table id="broken"><tr><td>1</td><td>2 -->
            <!-- <table id="fine"><tfoot><tr><th>x</th></tr></tfoot></table> -->
        </body></html>"#;
        let found = ids(markup);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0, "broken");
        assert_eq!(found[1].0, "fine");
    }

    #[test]
    fn comment_without_table_tag_is_ignored() {
        let markup = "<html><body><!-- <div>no tables here</div> --></body></html>";
        assert!(ids(markup).is_empty());
    }

    #[test]
    fn missing_id_is_empty_string() {
        let markup = "<html><body><table><tr><td>1</td></tr></table></body></html>";
        assert_eq!(ids(markup), vec![(String::new(), TableOrigin::Live)]);
    }

    #[test]
    fn extracts_last_header_row_and_footer_cells() {
        let markup = r#"<html><body><table id="pitching_standard">
            <thead>
              <tr><th colspan="3">Over header</th></tr>
              <tr><th data-stat="year_id">Season</th><th data-stat="W">W</th><th>ERA</th></tr>
            </thead>
            <tbody><tr><th>1909</th><td>12</td><td>1.11</td></tr></tbody>
            <tfoot>
              <tr><th>162 Game Avg.</th><td data-stat="w">1,012</td><td> 2.76 </td></tr>
              <tr><td>no label</td></tr>
            </tfoot>
        </table></body></html>"#;
        let doc = Html::parse_document(markup);
        let table = iter_tables(&doc).next().unwrap();

        assert_eq!(table.header.len(), 3);
        assert_eq!(table.header[0].stat.as_deref(), Some("year_id"));
        assert_eq!(table.header[1].stat.as_deref(), Some("w"));
        assert_eq!(table.header[2].stat, None);
        assert_eq!(table.header[2].text, "ERA");

        let footer = table.footer.unwrap();
        assert_eq!(footer.len(), 2);
        assert_eq!(footer[0].label, "162 Game Avg.");
        assert_eq!(
            footer[0].cells,
            vec![
                Cell {
                    stat: Some("w".to_string()),
                    text: "1012".to_string()
                },
                Cell {
                    stat: None,
                    text: "2.76".to_string()
                },
            ]
        );
        assert_eq!(footer[1].label, "");
    }

    #[test]
    fn table_without_tfoot_has_no_footer() {
        let markup = r#"<html><body><table id="pitching_standard">
            <thead><tr><th>W</th></tr></thead><tbody><tr><td>1</td></tr></tbody>
        </table></body></html>"#;
        let doc = Html::parse_document(markup);
        let table = iter_tables(&doc).next().unwrap();
        assert!(table.footer.is_none());
        assert_eq!(table.header.len(), 1);
    }

    #[test]
    fn stat_tag_spaces_become_underscores() {
        let markup = r#"<html><body><table><tfoot><tr><th>x</th><td data-stat=" Earned Run Avg ">3</td><td data-stat="  ">4</td></tr></tfoot></table></body></html>"#;
        let doc = Html::parse_document(markup);
        let table = iter_tables(&doc).next().unwrap();
        let cells = &table.footer.unwrap()[0].cells;
        assert_eq!(cells[0].stat.as_deref(), Some("earned_run_avg"));
        assert_eq!(cells[1].stat, None);
    }
}
