//! CSV export: header layout, the raw file, and the rounded file derived
//! from it.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Pitch162Error;
use crate::record::{round_cell, PitcherRecord, FIXED_COLUMNS};
use crate::stat_keys::PREFERRED_ORDER;

pub const RAW_FILE: &str = "pitchers_162_raw.csv";
pub const ROUNDED_FILE: &str = "pitchers_162_rounded.csv";

/// Paths of the two files written by `export`.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub raw: PathBuf,
    pub rounded: PathBuf,
}

/// Fixed columns, then preferred stats seen in any record, then the
/// remaining stats sorted.
pub fn build_header(stat_fields: &BTreeSet<String>) -> Vec<String> {
    let mut header: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
    for field in PREFERRED_ORDER {
        if stat_fields.contains(*field) && !header.iter().any(|h| h == field) {
            header.push((*field).to_string());
        }
    }
    let extras: Vec<String> = stat_fields
        .iter()
        .filter(|f| !header.contains(*f))
        .cloned()
        .collect();
    header.extend(extras);
    header
}

/// Writes `records` under `header`; missing fields are empty.
pub fn write_records<W: io::Write>(
    writer: W,
    header: &[String],
    records: &[PitcherRecord],
) -> Result<(), Pitch162Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(header)?;
    for record in records {
        wtr.write_record(header.iter().map(|column| record.column(column)))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Re-reads a raw CSV and writes it back with counting columns ceiled.
/// The header is copied verbatim.
pub fn round_csv<R: io::Read, W: io::Write>(input: R, output: W) -> Result<(), Pitch162Error> {
    let mut rdr = csv::Reader::from_reader(input);
    let header = rdr.headers()?.clone();
    let mut wtr = csv::Writer::from_writer(output);
    wtr.write_record(&header)?;
    for row in rdr.records() {
        let row = row?;
        wtr.write_record(
            header
                .iter()
                .zip(row.iter())
                .map(|(column, value)| round_cell(column, value)),
        )?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the raw file, then derives the rounded file from it.
pub fn export(
    out_dir: &Path,
    header: &[String],
    records: &[PitcherRecord],
) -> Result<ExportPaths, Pitch162Error> {
    std::fs::create_dir_all(out_dir)?;
    let raw = out_dir.join(RAW_FILE);
    let rounded = out_dir.join(ROUNDED_FILE);

    write_records(std::fs::File::create(&raw)?, header, records)?;
    tracing::info!("saved {}", raw.display());

    round_csv(std::fs::File::open(&raw)?, std::fs::File::create(&rounded)?)?;
    tracing::info!("saved {}", rounded.display());

    Ok(ExportPaths { raw, rounded })
}
