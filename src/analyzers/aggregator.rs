use crate::analyzers::time_format::sec2time;
use crate::errors::{StatsError, StatsResult};
use crate::match_stats::{RawMatchStat, Statistics};

/// Rounds to 3 fractional digits, half away from zero.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Folds a player's raw per-match records into a single summary. The
/// reduction is max/sum based, so the result never depends on record order.
pub fn aggregate(raw_stats: &[RawMatchStat]) -> StatsResult<Statistics> {
    if raw_stats.is_empty() {
        return Err(StatsError::InsufficientData);
    }
    let mut max_kills: u64 = 0;
    let mut max_time_survived: f64 = 0.0;
    let mut kills_sum: u64 = 0;
    let mut time_sum: f64 = 0.0;
    for stat in raw_stats {
        max_kills = max_kills.max(stat.kills);
        max_time_survived = max_time_survived.max(stat.time_survived);
        kills_sum += stat.kills;
        time_sum += stat.time_survived;
    }
    let count = raw_stats.len() as f64;
    Ok(Statistics {
        max_kills,
        avg_kills: round3(kills_sum as f64 / count),
        max_time_survived: sec2time(max_time_survived)?,
        avg_time_survived: sec2time(round3(time_sum / count))?,
    })
}
