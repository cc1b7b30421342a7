use crate::season::{BucketTotals, SeasonTotals};
use nba_api::Metric;
use serde::Serialize;

/// The single JSON document printed to stdout.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Success {
        success: bool,
        team: String,
        season: String,
        metric: Metric,
        sample_games: u32,
        #[serde(rename = "perGame")]
        per_game: BucketTotals,
        totals: BucketTotals,
    },
    Failure {
        success: bool,
        error: String,
    },
}

impl Report {
    pub fn success(team: &str, metric: Metric, outcome: SeasonTotals) -> Self {
        Report::Success {
            success: true,
            team: team.to_owned(),
            season: outcome.season,
            metric,
            sample_games: outcome.sampled_games,
            per_game: outcome.per_game,
            totals: outcome.totals,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Report::Failure { success: false, error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_report_shape() {
        let json = serde_json::to_string(&Report::failure("Unknown team: XYZ"))
            .expect("report should serialize");
        assert_eq!(json, r#"{"success":false,"error":"Unknown team: XYZ"}"#);
    }

    #[test]
    fn success_report_carries_the_resolved_season() {
        let outcome = SeasonTotals {
            season: "2024-25".into(),
            sampled_games: 3,
            totals: BucketTotals::default(),
            per_game: BucketTotals::default(),
        };
        let json = serde_json::to_string(&Report::success("MIL", Metric::Points, outcome))
            .expect("report should serialize");
        assert!(json.starts_with(r#"{"success":true,"team":"MIL","season":"2024-25","#));
        assert!(json.contains(r#""metric":"pts""#));
        assert!(json.contains(r#""sample_games":3"#));
        assert!(json.contains(r#""perGame":{"PG":0.0"#));
    }
}
