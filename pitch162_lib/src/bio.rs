//! Biographical fields from the `#meta` block at the top of a player page.
//!
//! Every sub-extraction degrades to an absent value; nothing here fails.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::normalize::{compact_text, spaced_text};

pub const NICKNAME_SENTINEL: &str = "N/A";

pub const NAME_SUFFIXES: &[&str] = &["Jr.", "Jr", "Sr.", "Sr", "II", "III", "IV", "V"];

pub const NICKNAME_SEPARATORS: &[&str] = &["•", ";", ",", " / ", " | "];

/// States, DC and the inhabited territories.
pub const US_STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "PR", "GU", "VI", "AS", "MP",
];

static META: Lazy<Selector> = Lazy::new(|| Selector::parse("#meta").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static STRONG: Lazy<Selector> = Lazy::new(|| Selector::parse("strong").unwrap());
static NAME_HEADING: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"h1[itemprop="name"]"#).unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

static NICKNAME_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(Nickname|Nicknames):\s*").unwrap());
static BATS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Bats:\s*(Right|Left|Both)").unwrap());
static THROWS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Throws:\s*(Right|Left)").unwrap());
static HEIGHT_WEIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)-(\d+)\s*,\s*(\d+)\s*lb").unwrap());
static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Batting or throwing hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
    Both,
}

impl Hand {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Height, weight and handedness from the meta text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Physical {
    /// `feet'inches`, e.g. `6'1`.
    pub height: Option<String>,
    pub weight_lb: Option<u32>,
    pub bats: Option<Hand>,
    pub throws: Option<Hand>,
}

/// High-school location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hometown {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Fields found in the meta block. All `None` when the block is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bio {
    pub nickname: Option<String>,
    pub physical: Physical,
    pub hometown: Option<Hometown>,
}

/// Player name from `h1[itemprop=name]`, else the first `h1`.
pub fn display_name(document: &Html) -> String {
    document
        .select(&NAME_HEADING)
        .next()
        .or_else(|| document.select(&HEADING).next())
        .map(|h1| compact_text(h1.text()))
        .unwrap_or_default()
}

/// Splits a display name into (first, last), keeping generational suffixes
/// with the last name when there are at least three tokens.
pub fn split_name(full_name: &str) -> (String, String) {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => (String::new(), String::new()),
        [only] => (only.to_string(), String::new()),
        [rest @ .., last, suffix] if parts.len() >= 3 && NAME_SUFFIXES.contains(suffix) => {
            (rest.join(" "), format!("{} {}", last, suffix))
        }
        [rest @ .., last] => (rest.join(" "), last.to_string()),
    }
}

/// Extracts every bio field from the `#meta` block.
pub fn parse_meta_bio(document: &Html) -> Bio {
    let Some(meta) = document.select(&META).next() else {
        return Bio::default();
    };

    let blob = meta
        .select(&PARAGRAPH)
        .map(|p| spaced_text(p.text()))
        .collect::<Vec<_>>()
        .join(" ");

    Bio {
        nickname: Some(parse_nickname(meta)),
        physical: parse_physical(&blob),
        hometown: parse_high_school(meta),
    }
}

/// Nickname from the `Nickname:` paragraph, or the sentinel.
pub fn parse_nickname(meta: ElementRef<'_>) -> String {
    meta.select(&PARAGRAPH)
        .find(|p| {
            leading_label(*p).is_some_and(|label| {
                label.eq_ignore_ascii_case("Nickname:") || label.eq_ignore_ascii_case("Nicknames:")
            })
        })
        .map(|p| nickname_from_text(&spaced_text(p.text())))
        .unwrap_or_else(|| NICKNAME_SENTINEL.to_string())
}

/// Strips the label, keeps the first listed nickname.
pub fn nickname_from_text(paragraph: &str) -> String {
    let stripped = NICKNAME_LABEL.replace(paragraph, "");
    let mut nickname: &str = &stripped;
    if let Some(sep) = NICKNAME_SEPARATORS.iter().find(|sep| nickname.contains(**sep)) {
        nickname = nickname.split(*sep).next().unwrap_or_default();
    }
    let nickname = nickname.trim();
    if nickname.is_empty() {
        NICKNAME_SENTINEL.to_string()
    } else {
        nickname.to_string()
    }
}

/// Handedness, height and weight from the joined meta text.
pub fn parse_physical(blob: &str) -> Physical {
    let mut physical = Physical {
        bats: BATS.captures(blob).and_then(|c| Hand::parse(&c[1])),
        throws: THROWS.captures(blob).and_then(|c| Hand::parse(&c[1])),
        ..Physical::default()
    };
    if let Some(caps) = HEIGHT_WEIGHT.captures(blob) {
        physical.height = Some(format!("{}'{}", &caps[1], &caps[2]));
        physical.weight_lb = caps[3].parse().ok();
    }
    physical
}

/// Location of the `High School` paragraph, if any.
pub fn parse_high_school(meta: ElementRef<'_>) -> Option<Hometown> {
    let paragraph = meta
        .select(&PARAGRAPH)
        .find(|p| leading_label(*p).is_some_and(|label| label.contains("High School")))?;
    hometown_from_text(&spaced_text(paragraph.text()))
}

/// Last parenthesized group split into city and state. Country is `USA` for
/// recognized state codes.
pub fn hometown_from_text(text: &str) -> Option<Hometown> {
    let location = PARENTHESIZED
        .captures_iter(text)
        .last()
        .map(|c| c[1].to_string())?;
    if location.is_empty() {
        return None;
    }

    let (city, state) = match location.split_once(',') {
        Some((city, rest)) => (
            city.trim().to_string(),
            rest.split(',').next().unwrap_or_default().trim().to_string(),
        ),
        None => (location.trim().to_string(), String::new()),
    };
    let country = if US_STATE_CODES.contains(&state.to_uppercase().as_str()) {
        "USA".to_string()
    } else {
        String::new()
    };
    Some(Hometown {
        city,
        state,
        country,
    })
}

/// Text of the paragraph's first `<strong>`.
fn leading_label(paragraph: ElementRef<'_>) -> Option<String> {
    paragraph
        .select(&STRONG)
        .next()
        .map(|strong| compact_text(strong.text()))
}
