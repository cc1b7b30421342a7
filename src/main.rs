use clap::Parser;
use dvp::report::Report;
use dvp::{season, teams};
use nba_api::Metric;
use nba_api::client::{DepthChartApi, StatsApi};

/// Sample how much of a stat a team's recent opponents produced, broken down
/// by positional role.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Team abbreviation, e.g. MIL
    #[arg(short, long)]
    team: String,

    /// Season start year, e.g. 2025 for the 2025-26 season
    #[arg(short, long)]
    season: i32,

    /// Max games to sample, newest first (clamped to 1-50)
    #[arg(short, long, default_value_t = 20)]
    games: usize,

    /// Stat to aggregate: pts, reb, ast, fg3m, stl or blk
    #[arg(short, long, default_value = "pts")]
    metric: Metric,

    /// Base URL of the depth-chart service
    #[arg(long, default_value = "http://localhost:3000")]
    host: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let team = args.team.to_ascii_uppercase();
    let Some(&team_id) = teams::ABBR_TO_TEAM_ID.get(team.as_str()) else {
        return emit(&Report::failure(format!("Unknown team: {team}")));
    };

    let stats = StatsApi::new();
    let depth = DepthChartApi::new(&args.host);
    let outcome =
        season::sample_with_fallback(&stats, &depth, team_id, args.season, args.metric, args.games)
            .await;

    emit(&Report::success(&team, args.metric, outcome))
}

// stdout carries exactly one JSON line; diagnostics go to the logger.
fn emit(report: &Report) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}
