//! Stat key vocabulary: friendly names, their canonical order, and the
//! translation from Baseball-Reference `data-stat` keys.

use std::collections::HashMap;

/// Output order for known pitching fields. Unknown fields follow.
pub const PREFERRED_ORDER: &[&str] = &[
    "W", "L", "W-L%", "ERA", "G", "GS", "GF", "CG", "SHO", "SV", "IP", "H", "R", "ER", "HR", "BB",
    "IBB", "SO", "HBP", "BK", "WP", "BF", "ERA+", "FIP", "WHIP", "H9", "HR9", "BB9", "SO9",
    "SO/BB",
];

/// Cumulative counts, ceiled in the rounded export.
pub const COUNTING: &[&str] = &[
    "W", "L", "G", "GS", "GF", "CG", "SHO", "SV", "H", "R", "ER", "HR", "BB", "IBB", "SO", "HBP",
    "BF", "WP", "BK",
];

/// Never rounded. IP uses thirds notation ("180.2" is 180 and two outs).
pub const SKIP_ROUND: &[&str] = &["IP"];

/// Header columns that describe the row rather than hold a statistic.
pub const STAT_HEADER_DROP: &[&str] = &[
    "season",
    "year_id",
    "age",
    "team_id",
    "tm",
    "lg",
    "lg_id",
    "stint",
    "pos",
    "pos_summary",
];

/// `data-stat` key to friendly name.
pub const KEY_MAP: &[(&str, &str)] = &[
    ("w", "W"),
    ("l", "L"),
    ("wl_perc", "W-L%"),
    ("win_loss_perc", "W-L%"),
    ("earned_run_avg", "ERA"),
    ("g", "G"),
    ("gs", "GS"),
    ("gf", "GF"),
    ("cg", "CG"),
    ("sho", "SHO"),
    ("sv", "SV"),
    ("ip", "IP"),
    ("h", "H"),
    ("r", "R"),
    ("er", "ER"),
    ("hr", "HR"),
    ("bb", "BB"),
    ("ibb", "IBB"),
    ("so", "SO"),
    ("hbp", "HBP"),
    ("bk", "BK"),
    ("wp", "WP"),
    ("bf", "BF"),
    ("batters_faced", "BF"),
    ("era_plus", "ERA+"),
    ("fip", "FIP"),
    ("whip", "WHIP"),
    ("hits_per_nine", "H9"),
    ("home_runs_per_nine", "HR9"),
    ("bases_on_balls_per_nine", "BB9"),
    ("strikeouts_per_nine", "SO9"),
    ("strikeouts_per_base_on_balls", "SO/BB"),
];

/// Whether a friendly field is ceiled in the rounded view.
pub fn is_rounded(field: &str) -> bool {
    COUNTING.contains(&field) && !SKIP_ROUND.contains(&field)
}

/// Position of a field in `PREFERRED_ORDER`.
pub fn preferred_rank(field: &str) -> Option<usize> {
    PREFERRED_ORDER.iter().position(|k| *k == field)
}

/// Raw-key to friendly-name translation with identity fallback.
#[derive(Debug, Clone)]
pub struct StatKeyMap {
    map: HashMap<String, String>,
}

impl Default for StatKeyMap {
    fn default() -> Self {
        Self::from_pairs(KEY_MAP.iter().copied())
    }
}

impl StatKeyMap {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            map: pairs
                .into_iter()
                .map(|(raw, friendly)| (raw.to_string(), friendly.to_string()))
                .collect(),
        }
    }

    /// Friendly name for `raw`, or `raw` itself when no translation exists.
    /// Lookup is exact first, then on the lowercased key.
    pub fn translate(&self, raw: &str) -> String {
        if let Some(friendly) = self.map.get(raw) {
            return friendly.clone();
        }
        self.map
            .get(&raw.to_lowercase())
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_known_keys() {
        let keys = StatKeyMap::default();
        assert_eq!(keys.translate("earned_run_avg"), "ERA");
        assert_eq!(keys.translate("batters_faced"), "BF");
        assert_eq!(keys.translate("wl_perc"), "W-L%");
        assert_eq!(keys.translate("win_loss_perc"), "W-L%");
    }

    #[test]
    fn translate_falls_back_to_lowercase_then_identity() {
        let keys = StatKeyMap::default();
        assert_eq!(keys.translate("ERA_PLUS"), "ERA+");
        assert_eq!(keys.translate("award_summary"), "award_summary");
    }

    #[test]
    fn custom_pairs() {
        let keys = StatKeyMap::from_pairs([("k", "SO")]);
        assert_eq!(keys.translate("k"), "SO");
        assert_eq!(keys.translate("w"), "w");
    }

    #[test]
    fn ip_is_counting_exempt() {
        assert!(!is_rounded("IP"));
        assert!(is_rounded("SO"));
        assert!(!is_rounded("ERA"));
    }

    #[test]
    fn every_counting_stat_has_a_preferred_slot() {
        for field in COUNTING {
            assert!(preferred_rank(field).is_some(), "{} missing", field);
        }
    }
}
