use pitch162_lib::{CareerScan, ErrorStatus, FieldMap, PitcherRecord, RunOutput, TableCandidate};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ERA")]
    era: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "SO")]
    so: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Table")]
    id: String,
    #[tabled(rename = "Origin")]
    origin: String,
    #[tabled(rename = "Header Cells")]
    header_cells: usize,
    #[tabled(rename = "Footer Labels")]
    footer_labels: String,
}

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Table")]
    table_id: String,
    #[tabled(rename = "Origin")]
    origin: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Fields")]
    fields: usize,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_summary_rows(records: &[PitcherRecord]) -> Vec<SummaryRow> {
    records
        .iter()
        .map(|r| {
            let name = format!("{} {}", r.first_name, r.last_name).trim().to_string();
            SummaryRow {
                name: if name.is_empty() {
                    r.source_url.clone()
                } else {
                    name
                },
                era: r.column("ERA"),
                ip: r.column("IP"),
                so: r.column("SO"),
                status: r.error.map(|e| e.to_string()).unwrap_or_else(|| "ok".to_string()),
            }
        })
        .collect()
}

fn build_table_rows(tables: &[TableCandidate]) -> Vec<TableRow> {
    tables
        .iter()
        .map(|t| TableRow {
            id: if t.id.is_empty() {
                "(none)".to_string()
            } else {
                t.id.clone()
            },
            origin: t.origin.as_str().to_string(),
            header_cells: t.header.len(),
            footer_labels: match &t.footer {
                None => "-".to_string(),
                Some(rows) => rows
                    .iter()
                    .map(|row| row.label.as_str())
                    .filter(|label| !label.is_empty())
                    .collect::<Vec<_>>()
                    .join(" | "),
            },
        })
        .collect()
}

fn build_candidate_rows(scan: &CareerScan) -> Vec<CandidateRow> {
    scan.candidates
        .iter()
        .enumerate()
        .map(|(idx, c)| CandidateRow {
            rank: idx + 1,
            table_id: c.table_id.clone(),
            origin: c.origin.as_str().to_string(),
            label: c.label.clone(),
            fields: c.fields.len(),
        })
        .collect()
}

fn build_field_rows(fields: &FieldMap) -> Vec<FieldRow> {
    fields
        .iter()
        .map(|(field, value)| FieldRow {
            field: field.clone(),
            value: value.clone(),
        })
        .collect()
}

fn summary_counts(output: &RunOutput) -> String {
    format!(
        "{} scraped, {} fetch failed, {} without a 162 Game Avg row",
        output.count(None),
        output.count(Some(ErrorStatus::FetchFailed)),
        output.count(Some(ErrorStatus::RowNotFound)),
    )
}

// -- Printers --

pub fn print_run_summary(output: &RunOutput) {
    println!("{}", Table::new(build_summary_rows(&output.records)));
    println!("{}", summary_counts(output));
}

pub fn print_table_overview(tables: &[TableCandidate]) {
    println!("{}", Table::new(build_table_rows(tables)));
}

pub fn print_scan_summary(scan: &CareerScan) {
    println!(
        "Pitching tables: {}, with tfoot: {}, matching rows: {}",
        scan.pitching_tables,
        scan.with_footer,
        scan.candidates.len()
    );
    if scan.footer_labels.is_empty() {
        println!("No footer labels in pitching tables");
    } else {
        for label in &scan.footer_labels {
            println!("  - '{}'", label);
        }
    }
    if !scan.candidates.is_empty() {
        println!("{}", Table::new(build_candidate_rows(scan)));
    }
}

pub fn print_field_map(fields: &FieldMap) {
    println!("{}", Table::new(build_field_rows(fields)));
}
