pub mod client;
pub mod depth;
pub mod stats;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the wire formats
// ---------------------------------------------------------------------------

/// The five canonical positional roles. No other value ever appears in
/// mappings or outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Bucket {
    /// Canonical PG→C ordering; drives depth-chart precedence and the key
    /// order of serialized per-bucket maps.
    pub const ALL: [Bucket; 5] = [Bucket::PG, Bucket::SG, Bucket::SF, Bucket::PF, Bucket::C];

    pub fn label(self) -> &'static str {
        match self {
            Bucket::PG => "PG",
            Bucket::SG => "SG",
            Bucket::SF => "SF",
            Bucket::PF => "PF",
            Bucket::C => "C",
        }
    }
}

/// The boxscore stat a sampling run aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Points,
    Rebounds,
    Assists,
    ThreesMade,
    Steals,
    Blocks,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Points => "pts",
            Metric::Rebounds => "reb",
            Metric::Assists => "ast",
            Metric::ThreesMade => "fg3m",
            Metric::Steals => "stl",
            Metric::Blocks => "blk",
        }
    }

    pub fn value_of(self, row: &BoxscoreRow) -> f64 {
        match self {
            Metric::Points => row.points,
            Metric::Rebounds => row.rebounds,
            Metric::Assists => row.assists,
            Metric::ThreesMade => row.threes_made,
            Metric::Steals => row.steals,
            Metric::Blocks => row.blocks,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pts" => Ok(Metric::Points),
            "reb" => Ok(Metric::Rebounds),
            "ast" => Ok(Metric::Assists),
            "fg3m" => Ok(Metric::ThreesMade),
            "stl" => Ok(Metric::Steals),
            "blk" => Ok(Metric::Blocks),
            other => Err(format!(
                "unknown metric {other:?}, expected one of pts, reb, ast, fg3m, stl, blk"
            )),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One player line of a traditional boxscore. Immutable once parsed; cells
/// the upstream payload lacked arrive as 0 / "".
#[derive(Debug, Clone, Default)]
pub struct BoxscoreRow {
    pub team_id: i64,
    pub team_abbrev: String,
    pub player_name: String,
    /// "G", "F" or "C" for starters; empty for bench players.
    pub start_position: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub threes_made: f64,
    pub steals: f64,
    pub blocks: f64,
}

/// The player rows of one game, both teams interleaved as upstream sends them.
#[derive(Debug, Clone, Default)]
pub struct Boxscore {
    pub rows: Vec<BoxscoreRow>,
}

/// One team's positional roster, keyed by normalized player name.
/// Either well-formed or empty — a failed or malformed lookup never yields a
/// partial chart.
#[derive(Debug, Clone, Default)]
pub struct DepthChart {
    assignments: HashMap<String, Bucket>,
}

impl DepthChart {
    /// Record a player under a bucket. Re-assigning an already-known name
    /// overwrites the earlier bucket (last write wins).
    pub fn assign(&mut self, display_name: &str, bucket: Bucket) {
        self.assignments.insert(normalize_name(display_name), bucket);
    }

    /// Authoritative bucket for a display name, if the chart knows it.
    pub fn bucket_for(&self, display_name: &str) -> Option<Bucket> {
        self.assignments.get(&normalize_name(display_name)).copied()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Name normalization
// ---------------------------------------------------------------------------

/// Canonical lookup key for a player display name: lowercase, everything
/// outside `[a-z ]` turned into a space, generational suffixes dropped,
/// whitespace collapsed. Two names refer to the same player iff their
/// normalized forms are identical.
pub fn normalize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            let lower = c.to_ascii_lowercase();
            if lower.is_ascii_lowercase() { lower } else { ' ' }
        })
        .collect();

    let tokens: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|token| !matches!(*token, "jr" | "sr" | "ii" | "iii" | "iv"))
        .collect();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_suffixes_and_punctuation() {
        assert_eq!(normalize_name("LeBron James Jr."), "lebron james");
        assert_eq!(normalize_name("LeBron James Jr."), normalize_name("lebron james"));
        assert_eq!(normalize_name("Kevin Knox II"), "kevin knox");
        assert_eq!(normalize_name("Shaquille O'Neal"), "shaquille o neal");
    }

    #[test]
    fn normalization_collapses_whitespace() {
        assert_eq!(normalize_name("  A.J.   Green  "), "a j green");
    }

    #[test]
    fn normalization_replaces_non_ascii_letters() {
        // Accented characters fall outside [a-z] and become separators.
        assert_eq!(normalize_name("Dennis Schröder"), "dennis schr der");
    }

    #[test]
    fn normalization_of_empty_input_is_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("  .  "), "");
    }

    #[test]
    fn suffix_tokens_are_only_dropped_standalone() {
        // "iii" embedded in a longer token survives.
        assert_eq!(normalize_name("Riiid"), "riiid");
    }

    #[test]
    fn bucket_order_is_pg_through_c() {
        let labels: Vec<&str> = Bucket::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["PG", "SG", "SF", "PF", "C"]);
    }

    #[test]
    fn metric_round_trips_through_wire_names() {
        for metric in [
            Metric::Points,
            Metric::Rebounds,
            Metric::Assists,
            Metric::ThreesMade,
            Metric::Steals,
            Metric::Blocks,
        ] {
            assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
        }
        assert!("xyz".parse::<Metric>().is_err());
    }

    #[test]
    fn depth_chart_lookup_normalizes_both_sides() {
        let mut chart = DepthChart::default();
        chart.assign("Jaren Jackson Jr.", Bucket::PF);
        assert_eq!(chart.bucket_for("jaren jackson"), Some(Bucket::PF));
        assert_eq!(chart.bucket_for("JAREN JACKSON JR"), Some(Bucket::PF));
        assert_eq!(chart.bucket_for("someone else"), None);
    }

    #[test]
    fn depth_chart_reassignment_overwrites() {
        let mut chart = DepthChart::default();
        chart.assign("Combo Guard", Bucket::PG);
        chart.assign("Combo Guard", Bucket::SG);
        assert_eq!(chart.bucket_for("Combo Guard"), Some(Bucket::SG));
        assert_eq!(chart.len(), 1);
    }
}
