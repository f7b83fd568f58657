use crate::types::{MatchId, PlayerId, PlayerName};
use serde::{Deserialize, Serialize};

/// One player's performance data for one match, as returned by the data
/// source. Deserialized straight from the participant `stats` object;
/// unknown fields are ignored, missing ones are a format error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawMatchStat {
    pub kills: u64,
    #[serde(rename = "timeSurvived")]
    pub time_survived: f64,
}

/// A roster member. Identity (name/id) is fixed once resolved; `raw_stats`
/// is the per-run accumulator filled by the pipeline fold, one record per
/// shared match the player actually appeared in.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: PlayerName,
    pub id: PlayerId,
    pub match_ids: Vec<MatchId>,
    pub raw_stats: Vec<RawMatchStat>,
}

impl Player {
    pub fn new(name: PlayerName, id: PlayerId, match_ids: Vec<MatchId>) -> Player {
        Player {
            name,
            id,
            match_ids,
            raw_stats: vec![],
        }
    }
}

/// Derived summary metrics for one player. Survival times are stored
/// already formatted as HH:MM:SS.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Statistics {
    pub max_kills: u64,
    pub avg_kills: f64,
    pub max_time_survived: String,
    pub avg_time_survived: String,
}
