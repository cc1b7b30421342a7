/// Wire types for the stats.nba.com endpoints (teamgamelog,
/// boxscoretraditionalv2). Responses arrive as tabular result sets: a header
/// list plus positional row tuples.
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    /// Cells stay raw `Value`s: the column set and its order drift between
    /// seasons, so every read goes through a resolved header index.
    #[serde(default)]
    pub row_set: Vec<Vec<Value>>,
}
