//! Locates the "162 Game Avg" footer row of the standard pitching table and
//! turns it into a friendly-name field mapping.
//!
//! Candidate tables are any whose id contains `pitch`; the site uses several
//! ids for equivalent tables. Within each footer, a row matches when its
//! normalized label contains both `162` and `avg`. Cells are named by their
//! `data-stat` tags when the row has any, and by header position otherwise.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use scraper::Html;

use crate::normalize::normalize_label;
use crate::stat_keys::{preferred_rank, StatKeyMap, PREFERRED_ORDER, STAT_HEADER_DROP};
use crate::tables::{iter_tables, FooterRow, TableCandidate, TableOrigin};

/// Friendly field name to raw cell value, in output order.
pub type FieldMap = IndexMap<String, String>;

/// Id of the canonical standard pitching table; it outranks every other match.
pub const PRIMARY_TABLE_ID: &str = "pitching_standard";

const TABLE_ID_NEEDLE: &str = "pitch";

/// A matching footer row from one table.
#[derive(Debug, Clone)]
pub struct CareerCandidate {
    pub table_id: String,
    pub origin: TableOrigin,
    pub label: String,
    pub fields: FieldMap,
}

impl CareerCandidate {
    fn rank(&self) -> u8 {
        if self.table_id == PRIMARY_TABLE_ID {
            0
        } else {
            1
        }
    }
}

/// Everything learned while scanning one page.
#[derive(Debug, Default)]
pub struct CareerScan {
    /// Tables whose id looked like a pitching table.
    pub pitching_tables: usize,
    /// How many of those had a `<tfoot>`.
    pub with_footer: usize,
    /// Distinct non-empty normalized footer labels, for troubleshooting.
    pub footer_labels: BTreeSet<String>,
    /// Matching rows, best first. Equal ranks keep document order.
    pub candidates: Vec<CareerCandidate>,
}

impl CareerScan {
    /// Top-ranked mapping, or `None` when nothing matched or it came out empty.
    pub fn best(&self) -> Option<&FieldMap> {
        self.candidates
            .first()
            .map(|c| &c.fields)
            .filter(|fields| !fields.is_empty())
    }

    pub fn into_best(self) -> Option<FieldMap> {
        self.candidates
            .into_iter()
            .next()
            .map(|c| c.fields)
            .filter(|fields| !fields.is_empty())
    }

    /// Emits the per-page diagnostics.
    pub fn log(&self, source: &str) {
        tracing::info!("scanned {}", source);
        tracing::info!(
            "pitching tables seen: {}, with tfoot: {}",
            self.pitching_tables,
            self.with_footer
        );
        if self.footer_labels.is_empty() {
            tracing::info!("no footer labels found in pitching tables");
        } else {
            tracing::info!("footer labels found:");
            for label in &self.footer_labels {
                tracing::info!("  - '{}'", label);
            }
        }
    }
}

/// Whether a normalized footer label names the per-162-game average.
pub fn is_career_avg_label(normalized: &str) -> bool {
    normalized.contains("162") && normalized.contains("avg")
}

/// Scans documents for the career-average row using a translation table.
#[derive(Debug, Clone, Default)]
pub struct CareerRowLocator {
    keys: StatKeyMap,
}

impl CareerRowLocator {
    pub fn new(keys: StatKeyMap) -> Self {
        Self { keys }
    }

    /// Scans every pitching-like table in the document.
    pub fn scan(&self, document: &Html) -> CareerScan {
        let mut scan = CareerScan::default();

        for table in iter_tables(document) {
            let table_id = table.id.to_lowercase();
            if !table_id.contains(TABLE_ID_NEEDLE) {
                continue;
            }
            scan.pitching_tables += 1;

            let header_keys = header_stat_keys(&table);
            let Some(footer) = table.footer.as_ref() else {
                tracing::debug!("table id={} ({}): no <tfoot>", table_id, table.origin.as_str());
                continue;
            };
            scan.with_footer += 1;

            for row in footer {
                let label = normalize_label(&row.label);
                if label.is_empty() {
                    continue;
                }
                scan.footer_labels.insert(label.clone());
                if !is_career_avg_label(&label) {
                    continue;
                }
                tracing::debug!("table id={}: matched footer row '{}'", table_id, label);
                scan.candidates.push(CareerCandidate {
                    table_id: table_id.clone(),
                    origin: table.origin,
                    label,
                    fields: self.field_map(row, &header_keys),
                });
            }
        }

        // stable: equal ranks stay in document order
        scan.candidates.sort_by_key(CareerCandidate::rank);
        scan
    }

    /// Scans, logs diagnostics for `source`, and returns the best mapping.
    pub fn locate(&self, document: &Html, source: &str) -> Option<FieldMap> {
        let scan = self.scan(document);
        scan.log(source);
        scan.into_best()
    }

    /// Builds the ordered mapping for one matching footer row.
    ///
    /// Tagged cells win: if any cell carries a `data-stat`, only tagged cells
    /// are used. Otherwise the i-th cell pairs with the i-th header key and
    /// surplus cells are dropped.
    pub fn field_map(&self, row: &FooterRow, header_keys: &[String]) -> FieldMap {
        let mut raw = FieldMap::new();

        let tagged = row.cells.iter().any(|cell| cell.stat.is_some());
        if tagged {
            for cell in &row.cells {
                if let Some(stat) = &cell.stat {
                    raw.insert(self.keys.translate(stat), cell.text.clone());
                }
            }
        } else {
            for (cell, key) in row.cells.iter().zip(header_keys) {
                raw.insert(self.keys.translate(key), cell.text.clone());
            }
        }

        raw.retain(|k, v| !k.is_empty() && !v.is_empty());
        order_fields(raw)
    }
}

/// Convenience wrapper: parse markup and locate with the default key table.
pub fn locate_career_row(html: &str, source: &str) -> Option<FieldMap> {
    let document = Html::parse_document(html);
    CareerRowLocator::default().locate(&document, source)
}

/// Parses markup and returns the full scan, without logging.
pub fn scan_career_rows(html: &str) -> CareerScan {
    let document = Html::parse_document(html);
    CareerRowLocator::default().scan(&document)
}

/// Stat keys of the last header row, minus descriptive columns.
pub fn header_stat_keys(table: &TableCandidate) -> Vec<String> {
    table
        .header
        .iter()
        .filter_map(|cell| {
            let key = match &cell.stat {
                Some(stat) => stat.clone(),
                None => cell.text.trim().to_lowercase(),
            };
            let key = key.replace(' ', "_").replace('%', "perc");
            if key.is_empty() || STAT_HEADER_DROP.contains(&key.as_str()) {
                None
            } else {
                Some(key)
            }
        })
        .collect()
}

/// Preferred fields first in canonical order, then the rest in discovery order.
fn order_fields(raw: FieldMap) -> FieldMap {
    let mut ordered = FieldMap::with_capacity(raw.len());
    for key in PREFERRED_ORDER {
        if let Some(value) = raw.get(*key) {
            ordered.insert((*key).to_string(), value.clone());
        }
    }
    for (key, value) in raw {
        if preferred_rank(&key).is_none() {
            ordered.insert(key, value);
        }
    }
    ordered
}
