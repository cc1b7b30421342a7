use crate::assign::assign_bucket;
use crate::teams::TEAM_ID_TO_ABBR;
use log::{debug, warn};
use nba_api::client::{DepthChartApi, StatsApi};
use nba_api::{Bucket, DepthChart, Metric};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

const MIN_GAMES: usize = 1;
const MAX_GAMES: usize = 50;

// ---------------------------------------------------------------------------
// Per-bucket accumulation
// ---------------------------------------------------------------------------

/// Stat accumulation keyed by exactly the five buckets, nothing more or less.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketTotals([f64; 5]);

impl BucketTotals {
    pub fn add(&mut self, bucket: Bucket, value: f64) {
        self.0[bucket as usize] += value;
    }

    pub fn get(&self, bucket: Bucket) -> f64 {
        self.0[bucket as usize]
    }

    pub fn merge(&mut self, delta: &BucketTotals) {
        for bucket in Bucket::ALL {
            self.add(bucket, delta.get(bucket));
        }
    }

    /// Per-game averages; a zero denominator yields all-zero averages rather
    /// than a division error.
    pub fn averaged_over(&self, games: u32) -> BucketTotals {
        if games == 0 {
            return BucketTotals::default();
        }
        let mut averages = BucketTotals::default();
        for bucket in Bucket::ALL {
            averages.0[bucket as usize] = self.get(bucket) / f64::from(games);
        }
        averages
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Serializes as an ordered PG→C object.
impl Serialize for BucketTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Bucket::ALL.len()))?;
        for bucket in Bucket::ALL {
            map.serialize_entry(bucket.label(), &self.get(bucket))?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Season sampling
// ---------------------------------------------------------------------------

/// Aggregated opponent production over one sampled season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTotals {
    /// Two-year label, e.g. "2025-26".
    pub season: String,
    pub sampled_games: u32,
    pub totals: BucketTotals,
    pub per_game: BucketTotals,
}

/// Two-year season label, e.g. 2025 → "2025-26".
pub fn season_label(start_year: i32) -> String {
    format!("{start_year}-{:02}", (start_year + 1) % 100)
}

fn clamped_cap(requested: usize) -> usize {
    requested.clamp(MIN_GAMES, MAX_GAMES)
}

/// Sample the requested season; if it yields no processable games, retry once
/// with the prior season and adopt that result only when it sampled at least
/// one game. Both outcomes exhausted, the zero-valued result keeps the
/// originally-requested season label.
pub async fn sample_with_fallback(
    stats: &StatsApi,
    depth: &DepthChartApi,
    team_id: i64,
    start_year: i32,
    metric: Metric,
    max_games: usize,
) -> SeasonTotals {
    let first = sample_season(stats, depth, team_id, start_year, metric, max_games).await;
    if first.sampled_games > 0 {
        return first;
    }

    debug!("no games sampled for {}, retrying prior season", first.season);
    let retry = sample_season(stats, depth, team_id, start_year - 1, metric, max_games).await;
    if retry.sampled_games > 0 { retry } else { first }
}

/// Sample up to `max_games` of one team's most recent regular-season games
/// (clamped to 1–50) and accumulate what opponents produced per bucket.
/// Strictly sequential: games are processed in list order, one at a time.
pub async fn sample_season(
    stats: &StatsApi,
    depth: &DepthChartApi,
    team_id: i64,
    start_year: i32,
    metric: Metric,
    max_games: usize,
) -> SeasonTotals {
    let season = season_label(start_year);
    let game_ids = match stats.fetch_game_log(team_id, &season).await {
        Ok(ids) => ids,
        Err(err) => {
            warn!("game log unavailable for {season}: {err}");
            Vec::new()
        }
    };

    let mut totals = BucketTotals::default();
    let mut sampled_games = 0u32;
    for game_id in game_ids.iter().take(clamped_cap(max_games)) {
        match process_game(stats, depth, game_id, team_id, metric).await {
            Some(delta) => {
                totals.merge(&delta);
                sampled_games += 1;
            }
            None => debug!("skipping game {game_id}: no usable boxscore"),
        }
    }

    let per_game = totals.averaged_over(sampled_games);
    SeasonTotals { season, sampled_games, totals, per_game }
}

/// Reduce one game's boxscore to the opponent's per-bucket production.
/// Every failure mode — fetch error, no identifiable opponent — resolves to
/// `None` so the game simply contributes nothing.
async fn process_game(
    stats: &StatsApi,
    depth: &DepthChartApi,
    game_id: &str,
    team_id: i64,
    metric: Metric,
) -> Option<BucketTotals> {
    let boxscore = match stats.fetch_boxscore(game_id).await {
        Ok(boxscore) => boxscore,
        Err(err) => {
            debug!("boxscore fetch failed for {game_id}: {err}");
            return None;
        }
    };

    let opponent_row = boxscore.rows.iter().find(|row| row.team_id != team_id)?;
    let opponent_id = opponent_row.team_id;
    let opponent_abbr = TEAM_ID_TO_ABBR
        .get(&opponent_id)
        .map(|abbr| (*abbr).to_string())
        .unwrap_or_else(|| opponent_row.team_abbrev.clone());
    if opponent_abbr.is_empty() {
        return None;
    }

    // One roster lookup per game; absence of data is not a failure.
    let roster = match depth.fetch_depth_chart(&opponent_abbr).await {
        Ok(chart) => {
            debug!("depth chart for {opponent_abbr}: {} players", chart.len());
            chart
        }
        Err(err) => {
            debug!("no depth chart for {opponent_abbr}: {err}");
            DepthChart::default()
        }
    };

    let mut buckets = BucketTotals::default();
    for row in boxscore.rows.iter().filter(|row| row.team_id == opponent_id) {
        let value = metric.value_of(row);
        if value == 0.0 {
            continue;
        }
        buckets.add(assign_bucket(row, &roster), value);
    }
    Some(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_labels_wrap_the_century() {
        assert_eq!(season_label(2025), "2025-26");
        assert_eq!(season_label(1999), "1999-00");
        assert_eq!(season_label(2009), "2009-10");
    }

    #[test]
    fn game_cap_clamps_into_bounds() {
        assert_eq!(clamped_cap(0), 1);
        assert_eq!(clamped_cap(20), 20);
        assert_eq!(clamped_cap(500), 50);
    }

    #[test]
    fn totals_accumulate_rather_than_overwrite() {
        let mut totals = BucketTotals::default();
        let mut game_one = BucketTotals::default();
        game_one.add(Bucket::SG, 10.0);
        let mut game_two = BucketTotals::default();
        game_two.add(Bucket::SG, 12.0);
        game_two.add(Bucket::C, 4.0);

        totals.merge(&game_one);
        totals.merge(&game_two);
        assert_eq!(totals.get(Bucket::SG), 22.0);
        assert_eq!(totals.get(Bucket::C), 4.0);
        assert_eq!(totals.sum(), 26.0);
    }

    #[test]
    fn zero_games_average_to_zero() {
        let mut totals = BucketTotals::default();
        totals.add(Bucket::PG, 50.0);
        let averages = totals.averaged_over(0);
        assert_eq!(averages, BucketTotals::default());
    }

    #[test]
    fn averages_divide_by_sampled_games() {
        let mut totals = BucketTotals::default();
        totals.add(Bucket::PF, 30.0);
        let averages = totals.averaged_over(4);
        assert_eq!(averages.get(Bucket::PF), 7.5);
        assert_eq!(averages.get(Bucket::PG), 0.0);
    }

    #[test]
    fn totals_serialize_as_ordered_five_key_map() {
        let mut totals = BucketTotals::default();
        totals.add(Bucket::SF, 9.5);
        let json = serde_json::to_string(&totals).expect("totals should serialize");
        assert_eq!(json, r#"{"PG":0.0,"SG":0.0,"SF":9.5,"PF":0.0,"C":0.0}"#);
    }
}
