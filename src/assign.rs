use nba_api::{BoxscoreRow, Bucket, DepthChart};

/// Decide which positional bucket a boxscore line counts toward.
///
/// The depth chart is authoritative when it knows the player. Otherwise the
/// starting-position label plus a small stat heuristic decides: guards split
/// on assists, forwards on rebounds or blocks, and unlabeled (bench) players
/// land on PF or C depending on rebounds.
pub fn assign_bucket(row: &BoxscoreRow, depth_chart: &DepthChart) -> Bucket {
    if let Some(bucket) = depth_chart.bucket_for(&row.player_name) {
        return bucket;
    }

    match row.start_position.as_str() {
        "G" => {
            if row.assists >= 5.0 {
                Bucket::PG
            } else {
                Bucket::SG
            }
        }
        "F" => {
            if row.rebounds >= 8.0 || row.blocks >= 2.0 {
                Bucket::PF
            } else {
                Bucket::SF
            }
        }
        "C" => Bucket::C,
        _ => {
            if row.rebounds >= 7.0 {
                Bucket::PF
            } else {
                Bucket::C
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(start_position: &str) -> BoxscoreRow {
        BoxscoreRow {
            player_name: "Test Player".into(),
            start_position: start_position.into(),
            ..Default::default()
        }
    }

    #[test]
    fn depth_chart_beats_the_heuristic() {
        let mut chart = DepthChart::default();
        chart.assign("Test Player", Bucket::SF);
        let mut starter = row("C");
        starter.rebounds = 12.0;
        assert_eq!(assign_bucket(&starter, &chart), Bucket::SF);
    }

    #[test]
    fn guard_splits_on_five_assists() {
        let chart = DepthChart::default();
        let mut guard = row("G");
        guard.assists = 5.0;
        assert_eq!(assign_bucket(&guard, &chart), Bucket::PG);
        guard.assists = 4.0;
        assert_eq!(assign_bucket(&guard, &chart), Bucket::SG);
    }

    #[test]
    fn forward_splits_on_eight_rebounds_or_two_blocks() {
        let chart = DepthChart::default();
        let mut forward = row("F");
        forward.rebounds = 8.0;
        assert_eq!(assign_bucket(&forward, &chart), Bucket::PF);
        forward.rebounds = 7.0;
        forward.blocks = 0.0;
        assert_eq!(assign_bucket(&forward, &chart), Bucket::SF);
        forward.blocks = 2.0;
        assert_eq!(assign_bucket(&forward, &chart), Bucket::PF);
    }

    #[test]
    fn starting_center_is_always_a_center() {
        let chart = DepthChart::default();
        assert_eq!(assign_bucket(&row("C"), &chart), Bucket::C);
    }

    #[test]
    fn unlabeled_rows_split_on_seven_rebounds() {
        let chart = DepthChart::default();
        let mut bench = row("");
        bench.rebounds = 7.0;
        assert_eq!(assign_bucket(&bench, &chart), Bucket::PF);
        bench.rebounds = 6.0;
        assert_eq!(assign_bucket(&bench, &chart), Bucket::C);
    }

    #[test]
    fn every_label_yields_a_bucket() {
        // Total over label space, stats zeroed, empty chart.
        let chart = DepthChart::default();
        for label in ["G", "F", "C", "", "F-C", "X"] {
            let _ = assign_bucket(&row(label), &chart);
        }
    }
}
