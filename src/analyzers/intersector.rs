use crate::errors::{StatsError, StatsResult};
use crate::types::MatchId;

/// Computes the set of match ids common to all roster members. The result
/// keeps the order of the first list, filtered to membership in all others,
/// so identical inputs always produce identical output.
pub fn intersect(match_id_lists: &[Vec<MatchId>]) -> StatsResult<Vec<MatchId>> {
    let (first, rest) = match match_id_lists.split_first() {
        Some(split) => split,
        None => {
            return Err(StatsError::InvalidInput(
                "no match histories to intersect".to_string(),
            ))
        }
    };
    Ok(first
        .iter()
        .filter(|id| rest.iter().all(|list| list.contains(id)))
        .cloned()
        .collect())
}
