use crate::depth::DepthChartResponse;
use crate::stats::StatsResponse;
use crate::{Boxscore, BoxscoreRow, Bucket, DepthChart};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const STATS_BASE: &str = "https://stats.nba.com/stats";
const STATS_TIMEOUT: Duration = Duration::from_secs(15);
const DEPTH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

/// Client for the public stats.nba.com endpoints.
#[derive(Debug, Clone)]
pub struct StatsApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for StatsApi {
    fn default() -> Self {
        Self::with_base_url(STATS_BASE)
    }
}

impl StatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host. Tests use this with a local
    /// mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .default_headers(stats_headers())
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            timeout: STATS_TIMEOUT,
        }
    }

    /// Regular-season game ids for one team and season, in the upstream
    /// ordering (newest first). A payload without a game-id column yields an
    /// empty list, not an error.
    pub async fn fetch_game_log(&self, team_id: i64, season: &str) -> ApiResult<Vec<String>> {
        let url = format!("{}/teamgamelog", self.base_url);
        let raw: StatsResponse = self
            .get(
                &url,
                &[
                    ("TeamID", team_id.to_string()),
                    ("Season", season.to_string()),
                    ("SeasonType", "Regular Season".to_string()),
                ],
            )
            .await?;
        Ok(map_game_log(raw))
    }

    /// Traditional per-player boxscore for one game.
    pub async fn fetch_boxscore(&self, game_id: &str) -> ApiResult<Boxscore> {
        let url = format!("{}/boxscoretraditionalv2", self.base_url);
        let raw: StatsResponse = self
            .get(
                &url,
                &[
                    ("GameID", game_id.to_string()),
                    ("StartPeriod", "0".to_string()),
                    ("EndPeriod", "0".to_string()),
                    ("StartRange", "0".to_string()),
                    ("EndRange", "0".to_string()),
                    ("RangeType", "0".to_string()),
                ],
            )
            .await?;
        Ok(map_boxscore(raw))
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;
        let response = response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// stats.nba.com rejects requests that don't look like its own web client.
fn stats_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("accept", HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert("accept-language", HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert("origin", HeaderValue::from_static("https://www.nba.com"));
    headers.insert("referer", HeaderValue::from_static("https://www.nba.com/stats/"));
    headers.insert(
        "user-agent",
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36",
        ),
    );
    headers.insert("cache-control", HeaderValue::from_static("no-cache"));
    headers.insert("pragma", HeaderValue::from_static("no-cache"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    headers
}

/// Client for the roster/depth-chart service.
#[derive(Debug, Clone)]
pub struct DepthChartApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl DepthChartApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder().build().unwrap_or_default(),
            base_url: base_url.into(),
            timeout: DEPTH_TIMEOUT,
        }
    }

    /// One team's positional depth chart. Callers treat any `Err` as "no
    /// roster information" rather than a failure — the chart that comes back
    /// is always either well-formed or absent, never partial.
    pub async fn fetch_depth_chart(&self, team_abbr: &str) -> ApiResult<DepthChart> {
        let url = format!("{}/api/depth-chart", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("team", team_abbr)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;
        let response = response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.clone()))?;
        let raw: DepthChartResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parsing(e, url))?;
        Ok(map_depth_chart(raw))
    }
}

// ---------------------------------------------------------------------------
// Mapping: tabular wire data → clean domain types
// ---------------------------------------------------------------------------

/// Case-insensitive lookup of the first matching candidate among a result
/// set's headers. Column sets and ordering are not guaranteed stable, so
/// every cell access goes through an index resolved here.
pub fn column_index(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|name| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
}

fn map_game_log(raw: StatsResponse) -> Vec<String> {
    let Some(set) = raw.result_sets.into_iter().next() else {
        return Vec::new();
    };
    let Some(id_col) = column_index(&set.headers, &["Game_ID", "GAME_ID"]) else {
        return Vec::new();
    };
    set.row_set
        .iter()
        .map(|row| text_cell(row, Some(id_col)))
        .filter(|id| !id.is_empty())
        .collect()
}

fn map_boxscore(raw: StatsResponse) -> Boxscore {
    let sets = raw.result_sets;
    let player_set = sets
        .iter()
        .find(|s| s.name.to_ascii_lowercase().contains("player"))
        .or_else(|| sets.first());
    let Some(set) = player_set else {
        return Boxscore::default();
    };

    let team_id = column_index(&set.headers, &["TEAM_ID"]);
    let team_abbrev = column_index(&set.headers, &["TEAM_ABBREVIATION"]);
    let player_name = column_index(&set.headers, &["PLAYER_NAME"]);
    let start_position = column_index(&set.headers, &["START_POSITION"]);
    let points = column_index(&set.headers, &["PTS"]);
    let rebounds = column_index(&set.headers, &["REB"]);
    let assists = column_index(&set.headers, &["AST"]);
    let threes_made = column_index(&set.headers, &["FG3M"]);
    let steals = column_index(&set.headers, &["STL"]);
    let blocks = column_index(&set.headers, &["BLK"]);

    let rows = set
        .row_set
        .iter()
        .map(|row| BoxscoreRow {
            team_id: id_cell(row, team_id),
            team_abbrev: text_cell(row, team_abbrev),
            player_name: text_cell(row, player_name),
            start_position: text_cell(row, start_position).to_ascii_uppercase(),
            points: numeric_cell(row, points),
            rebounds: numeric_cell(row, rebounds),
            assists: numeric_cell(row, assists),
            threes_made: numeric_cell(row, threes_made),
            steals: numeric_cell(row, steals),
            blocks: numeric_cell(row, blocks),
        })
        .collect();
    Boxscore { rows }
}

/// Later buckets overwrite earlier ones when a name repeats across buckets.
fn map_depth_chart(raw: DepthChartResponse) -> DepthChart {
    let mut chart = DepthChart::default();
    for bucket in Bucket::ALL {
        for entry in raw.depth_chart.get(bucket.label()).into_iter().flatten() {
            if let Some(name) = entry.name() {
                chart.assign(name, bucket);
            }
        }
    }
    chart
}

fn text_cell(row: &[Value], idx: Option<usize>) -> String {
    match idx.and_then(|i| row.get(i)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn numeric_cell(row: &[Value], idx: Option<usize>) -> f64 {
    idx.and_then(|i| row.get(i))
        .and_then(Value::as_f64)
        .unwrap_or_default()
}

fn id_cell(row: &[Value], idx: Option<usize>) -> i64 {
    match idx.and_then(|i| row.get(i)) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or_default(),
        Some(Value::String(s)) => s.parse().unwrap_or_default(),
        _ => 0,
    }
}
