//! Library layer for pitch162: pulls the "162 Game Avg" pitching row and bio
//! fields out of Baseball-Reference player pages and exports them as CSV.
//!
//! The table locator scans live tables and the tables the site hides in HTML
//! comments, matches the career-average footer row by a tolerant label test,
//! and names cells by `data-stat` tag or by header position.

pub mod artifacts;
pub mod bio;
pub mod career;
pub mod error;
pub mod export;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod stat_keys;
pub mod subjects;
pub mod tables;

pub use bbref_api;

pub use artifacts::HtmlDump;
pub use career::{locate_career_row, scan_career_rows, CareerRowLocator, CareerScan, FieldMap};
pub use error::Pitch162Error;
pub use export::{export, ExportPaths, RAW_FILE, ROUNDED_FILE};
pub use pipeline::{extract_record, DelayRange, Pipeline, RunOutput};
pub use record::{ErrorStatus, PitcherRecord};
pub use subjects::SubjectListError;
pub use tables::{iter_tables, list_tables, TableCandidate, TableOrigin};
