use crate::analyzers::aggregator::aggregate;
use crate::analyzers::intersector::intersect;
use crate::data_retrieval::match_fetcher;
use crate::data_retrieval::player_directory;
use crate::data_retrieval::pubg_client::PubgClient;
use crate::errors::{StatsError, StatsResult};
use crate::match_stats::{Player, RawMatchStat, Statistics};
use crate::report;
use crate::types::PlayerName;
use std::collections::HashMap;

/// Appends one match worth of per-player records to the roster
/// accumulators. The accumulators live inside the resolved roster, keyed
/// by player identity, so a record can never land on the wrong player.
fn fold_match_stats(
    roster: &mut Vec<Player>,
    mut stats_by_player: HashMap<PlayerName, RawMatchStat>,
) {
    for player in roster.iter_mut() {
        if let Some(stat) = stats_by_player.remove(&player.name) {
            player.raw_stats.push(stat);
        }
    }
}

/// Summarizes every roster member, in roster order. A player with fewer
/// records than shared matches was listed in a match they never appeared
/// in; the shortfall is logged, never averaged away. A player with no
/// records at all gets an error entry instead of a fabricated row.
fn build_report(
    roster: &[Player],
    total_matches: usize,
) -> Vec<(PlayerName, StatsResult<Statistics>)> {
    roster
        .iter()
        .map(|player| {
            if player.raw_stats.len() < total_matches {
                warn!(
                    "Player {} has records for {} of {} shared matches.",
                    player.name,
                    player.raw_stats.len(),
                    total_matches
                );
            }
            (player.name.clone(), aggregate(&player.raw_stats))
        })
        .collect()
}

/// Runs the whole analytics pipeline: resolve the roster, intersect the
/// recent match histories, fold the shared matches into per-player
/// accumulators and render the summary table. Failed data-source calls are
/// logged and treated as missing data; only an empty roster aborts the run.
pub async fn run_analytics(names: Vec<PlayerName>) -> StatsResult<()> {
    let client = PubgClient::new();
    let mut roster = match player_directory::resolve_roster(&client, &names).await {
        Ok(roster) => roster,
        Err(e @ StatsError::InvalidInput(_)) => return Err(e),
        Err(e) => {
            error!("Unable to resolve roster: {}", e);
            vec![]
        }
    };
    if roster.is_empty() {
        warn!("No roster members resolved. Nothing to analyze.");
        report::render(0, &[]);
        return Ok(());
    }
    let roster_names: Vec<PlayerName> = roster.iter().map(|p| p.name.clone()).collect();

    let match_histories: Vec<_> = roster.iter().map(|p| p.match_ids.clone()).collect();
    let shared_matches = intersect(&match_histories)?;
    info!("Roster shares {} recent matches.", shared_matches.len());

    for match_id in shared_matches.iter() {
        let stats_by_player =
            match match_fetcher::fetch_match_stats(&client, match_id, &roster_names).await {
                Ok(stats) => stats,
                Err(e) => {
                    warn!("Skipping match {}: {}", match_id, e);
                    continue;
                }
            };
        fold_match_stats(&mut roster, stats_by_player);
    }

    let report_rows = build_report(&roster, shared_matches.len());
    report::render(shared_matches.len(), &report_rows);
    Ok(())
}
