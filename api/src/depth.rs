/// Wire types for the depth-chart service.
/// Endpoint: `{base}/api/depth-chart?team={ABBR}`
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DepthChartResponse {
    /// Keyed by the five bucket labels. Unknown keys are carried but ignored
    /// by the mapping layer.
    #[serde(default)]
    pub depth_chart: HashMap<String, Vec<DepthEntry>>,
}

/// Entries appear either as bare name strings or as objects carrying a
/// `name` field plus metadata this pipeline ignores.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum DepthEntry {
    Name(String),
    Player(DepthPlayer),
}

impl DepthEntry {
    pub fn name(&self) -> Option<&str> {
        match self {
            DepthEntry::Name(name) => Some(name),
            DepthEntry::Player(player) => player.name.as_deref(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct DepthPlayer {
    #[serde(default)]
    pub name: Option<String>,
}
