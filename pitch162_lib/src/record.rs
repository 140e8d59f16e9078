//! Per-player output record and the ceiling-rounded view of it.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bio::{split_name, Bio, Hand, NICKNAME_SENTINEL};
use crate::career::FieldMap;
use crate::stat_keys::is_rounded;

/// Bio and metadata columns, always written first and always present.
pub const FIXED_COLUMNS: &[&str] = &[
    "FirstName",
    "LastName",
    "Nickname",
    "Height",
    "Weight_lb",
    "Bats",
    "Throws",
    "HS_City",
    "HS_State",
    "HS_Country",
    "SourceURL",
    "ErrorStatus",
];

static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Why a record carries no statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    FetchFailed,
    RowNotFound,
}

impl ErrorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchFailed => "fetch_failed",
            Self::RowNotFound => "162_row_not_found",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row.
#[derive(Debug, Clone, PartialEq)]
pub struct PitcherRecord {
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub height: String,
    pub weight_lb: Option<u32>,
    pub bats: Option<Hand>,
    pub throws: Option<Hand>,
    pub hs_city: String,
    pub hs_state: String,
    pub hs_country: String,
    pub source_url: String,
    pub error: Option<ErrorStatus>,
    /// Raw, unrounded statistics; empty unless the career row was found.
    pub stats: FieldMap,
}

impl PitcherRecord {
    /// Record with every fixed field defaulted.
    pub fn new(source_url: &str) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            nickname: NICKNAME_SENTINEL.to_string(),
            height: String::new(),
            weight_lb: None,
            bats: None,
            throws: None,
            hs_city: String::new(),
            hs_state: String::new(),
            hs_country: String::new(),
            source_url: source_url.to_string(),
            error: None,
            stats: FieldMap::new(),
        }
    }

    pub fn fetch_failed(source_url: &str) -> Self {
        Self {
            error: Some(ErrorStatus::FetchFailed),
            ..Self::new(source_url)
        }
    }

    /// Builds a record from the page's extracted parts. A missing career row
    /// marks the record `162_row_not_found`.
    pub fn assemble(
        source_url: &str,
        display_name: &str,
        bio: &Bio,
        stats: Option<FieldMap>,
    ) -> Self {
        let mut record = Self::new(source_url);
        (record.first_name, record.last_name) = split_name(display_name);
        record.apply_bio(bio);
        match stats {
            Some(stats) => record.stats = stats,
            None => record.error = Some(ErrorStatus::RowNotFound),
        }
        record
    }

    /// Overrides only the fields the bio actually supplies.
    pub fn apply_bio(&mut self, bio: &Bio) {
        if let Some(nickname) = &bio.nickname {
            self.nickname = nickname.clone();
        }
        if let Some(height) = &bio.physical.height {
            self.height = height.clone();
        }
        if bio.physical.weight_lb.is_some() {
            self.weight_lb = bio.physical.weight_lb;
        }
        if bio.physical.bats.is_some() {
            self.bats = bio.physical.bats;
        }
        if bio.physical.throws.is_some() {
            self.throws = bio.physical.throws;
        }
        if let Some(town) = &bio.hometown {
            for (field, value) in [
                (&mut self.hs_city, &town.city),
                (&mut self.hs_state, &town.state),
                (&mut self.hs_country, &town.country),
            ] {
                if !value.is_empty() {
                    *field = value.clone();
                }
            }
        }
    }

    /// Cell value for a CSV column; unknown stat columns render empty.
    pub fn column(&self, name: &str) -> String {
        match name {
            "FirstName" => self.first_name.clone(),
            "LastName" => self.last_name.clone(),
            "Nickname" => self.nickname.clone(),
            "Height" => self.height.clone(),
            "Weight_lb" => self.weight_lb.map(|w| w.to_string()).unwrap_or_default(),
            "Bats" => self.bats.map(|h| h.to_string()).unwrap_or_default(),
            "Throws" => self.throws.map(|h| h.to_string()).unwrap_or_default(),
            "HS_City" => self.hs_city.clone(),
            "HS_State" => self.hs_state.clone(),
            "HS_Country" => self.hs_country.clone(),
            "SourceURL" => self.source_url.clone(),
            "ErrorStatus" => self.error.map(|e| e.to_string()).unwrap_or_default(),
            stat => self.stats.get(stat).cloned().unwrap_or_default(),
        }
    }

    /// Copy with counting statistics ceiled. `self` is left untouched.
    pub fn rounded(&self) -> Self {
        Self {
            stats: ceil_counting(&self.stats),
            ..self.clone()
        }
    }
}

/// Ceiling of a plain integer-or-decimal string, formatted as an integer.
/// Commas and surrounding whitespace are ignored; anything else, or a
/// ceiling outside the `i64` range, is `None`.
pub fn round_up(value: &str) -> Option<String> {
    let cleaned = value.replace(',', "");
    let cleaned = cleaned.trim();
    if !NUMERIC.is_match(cleaned) {
        return None;
    }
    let ceiled = cleaned.parse::<f64>().ok()?.ceil();
    if !(i64::MIN as f64..i64::MAX as f64).contains(&ceiled) {
        return None;
    }
    Some((ceiled as i64).to_string())
}

/// Value to write for `column` in the rounded view.
pub fn round_cell(column: &str, value: &str) -> String {
    if value.is_empty() || !is_rounded(column) {
        return value.to_string();
    }
    round_up(value).unwrap_or_else(|| value.to_string())
}

/// New mapping with every counting statistic (except IP) ceiled.
pub fn ceil_counting(stats: &FieldMap) -> FieldMap {
    stats
        .iter()
        .map(|(k, v)| (k.clone(), round_cell(k, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::{Hometown, Physical};

    fn stats(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn round_up_is_ceiling() {
        assert_eq!(round_up("4.2").as_deref(), Some("5"));
        assert_eq!(round_up("5.0").as_deref(), Some("5"));
        assert_eq!(round_up("5").as_deref(), Some("5"));
        assert_eq!(round_up("-1.2").as_deref(), Some("-1"));
        assert_eq!(round_up("-0.5").as_deref(), Some("0"));
        assert_eq!(round_up(" 1,204.1 ").as_deref(), Some("1205"));
    }

    #[test]
    fn round_up_rejects_non_numeric() {
        assert_eq!(round_up(""), None);
        assert_eq!(round_up(".5"), None);
        assert_eq!(round_up("12-10"), None);
        assert_eq!(round_up("1e3"), None);
        assert_eq!(round_up("N/A"), None);
    }

    #[test]
    fn round_up_leaves_out_of_range_values() {
        assert_eq!(round_up("123456789012345678901234.5"), None);
        assert_eq!(round_up("-99999999999999999999"), None);
        assert_eq!(round_up("9007199254740991").as_deref(), Some("9007199254740991"));
        assert_eq!(
            round_cell("SO", "123456789012345678901234.5"),
            "123456789012345678901234.5"
        );
    }

    #[test]
    fn ceil_counting_leaves_ip_and_rates() {
        let raw = stats(&[
            ("W", "14.4"),
            ("ERA", "2.76"),
            ("IP", "180.2"),
            ("SO", "101.1"),
            ("SV", "x"),
            ("H", ""),
        ]);
        let rounded = ceil_counting(&raw);
        assert_eq!(rounded["W"], "15");
        assert_eq!(rounded["ERA"], "2.76");
        assert_eq!(rounded["IP"], "180.2");
        assert_eq!(rounded["SO"], "102");
        assert_eq!(rounded["SV"], "x");
        assert_eq!(rounded["H"], "");
        assert_eq!(raw["W"], "14.4");
    }

    #[test]
    fn rounded_view_does_not_mutate_raw() {
        let mut record = PitcherRecord::new("u");
        record.stats = stats(&[("W", "9.1"), ("IP", "180.2")]);
        let rounded = record.rounded();
        assert_eq!(rounded.column("W"), "10");
        assert_eq!(rounded.column("IP"), "180.2");
        assert_eq!(record.column("W"), "9.1");
    }

    #[test]
    fn defaults() {
        let record = PitcherRecord::new("https://example.com/p.shtml");
        assert_eq!(record.column("Nickname"), "N/A");
        assert_eq!(record.column("SourceURL"), "https://example.com/p.shtml");
        assert_eq!(record.column("ErrorStatus"), "");
        assert_eq!(record.column("Weight_lb"), "");
        assert_eq!(record.column("ERA"), "");
    }

    #[test]
    fn fetch_failed_record() {
        let record = PitcherRecord::fetch_failed("u");
        assert_eq!(record.column("ErrorStatus"), "fetch_failed");
        assert!(record.stats.is_empty());
    }

    #[test]
    fn assemble_without_stats_is_row_not_found() {
        let record = PitcherRecord::assemble("u", "Babe Adams", &Bio::default(), None);
        assert_eq!(record.first_name, "Babe");
        assert_eq!(record.last_name, "Adams");
        assert_eq!(record.nickname, "N/A");
        assert_eq!(record.column("ErrorStatus"), "162_row_not_found");
    }

    #[test]
    fn assemble_applies_present_bio_fields_only() {
        let bio = Bio {
            nickname: Some("Babe".into()),
            physical: Physical {
                height: Some("5'11".into()),
                weight_lb: Some(185),
                bats: Some(Hand::Left),
                throws: None,
            },
            hometown: Some(Hometown {
                city: "Toronto".into(),
                state: "ON".into(),
                country: String::new(),
            }),
        };
        let record = PitcherRecord::assemble(
            "u",
            "Babe Adams",
            &bio,
            Some(stats(&[("ERA", "2.76")])),
        );
        assert_eq!(record.column("Nickname"), "Babe");
        assert_eq!(record.column("Height"), "5'11");
        assert_eq!(record.column("Weight_lb"), "185");
        assert_eq!(record.column("Bats"), "Left");
        assert_eq!(record.column("Throws"), "");
        assert_eq!(record.column("HS_City"), "Toronto");
        assert_eq!(record.column("HS_State"), "ON");
        assert_eq!(record.column("HS_Country"), "");
        assert_eq!(record.column("ERA"), "2.76");
        assert_eq!(record.error, None);
    }
}
