use crate::data_retrieval::pubg_client::PubgClient;
use crate::errors::{StatsError, StatsResult};
use crate::match_stats::RawMatchStat;
use crate::types::{MatchId, PlayerName};
use std::collections::HashMap;

/// Filters a match payload down to the participant stats of the requested
/// names, re-keyed by name. A requested name missing from the payload is
/// simply absent from the result; the caller detects the shortfall.
pub fn extract_participant_stats(
    match_json: &serde_json::Value,
    names: &[PlayerName],
) -> StatsResult<HashMap<PlayerName, RawMatchStat>> {
    let included = match_json["included"].as_array().ok_or_else(|| {
        StatsError::DataFormat("match response has no included array".to_string())
    })?;
    let mut stats_by_player = HashMap::new();
    for entity in included {
        if entity["type"] != "participant" {
            continue;
        }
        let stats = &entity["attributes"]["stats"];
        let name = stats["name"]
            .as_str()
            .ok_or_else(|| StatsError::DataFormat("participant stats have no name".to_string()))?
            .to_string();
        if !names.contains(&name) {
            continue;
        }
        let raw_stat: RawMatchStat = serde_json::from_value(stats.clone()).map_err(|e| {
            StatsError::DataFormat(format!("participant stats of {}: {}", name, e))
        })?;
        stats_by_player.insert(name, raw_stat);
    }
    Ok(stats_by_player)
}

/// Fetches one match and returns the roster members' raw stats for it.
pub async fn fetch_match_stats(
    client: &PubgClient,
    match_id: &MatchId,
    names: &[PlayerName],
) -> StatsResult<HashMap<PlayerName, RawMatchStat>> {
    let match_json = client.fetch_match_info(match_id).await?;
    extract_participant_stats(&match_json, names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<PlayerName> {
        vec!["test1".to_string(), "test2".to_string()]
    }

    #[test]
    fn extract_participant_stats_test() {
        let match_json: serde_json::Value = serde_json::from_str(
            r#"{"data": {"type": "match", "id": "m1"},
                "included": [
                {"type": "roster", "id": "r1", "attributes": {"won": "true"}},
                {"type": "participant", "id": "p1",
                 "attributes": {"stats": {"name": "test1", "kills": 4, "timeSurvived": 151.5, "DBNOs": 2}}},
                {"type": "participant", "id": "p2",
                 "attributes": {"stats": {"name": "test2", "kills": 0, "timeSurvived": 600.0}}},
                {"type": "participant", "id": "p3",
                 "attributes": {"stats": {"name": "stranger", "kills": 9, "timeSurvived": 1200.0}}}
            ]}"#,
        )
        .unwrap();
        let stats_by_player = extract_participant_stats(&match_json, &roster()).unwrap();
        assert_eq!(stats_by_player.len(), 2);
        assert_eq!(
            stats_by_player["test1"],
            RawMatchStat {
                kills: 4,
                time_survived: 151.5
            }
        );
        assert_eq!(stats_by_player["test2"].kills, 0);
        assert!(!stats_by_player.contains_key("stranger"));
    }

    #[test]
    fn missing_player_is_absent_test() {
        let match_json: serde_json::Value = serde_json::from_str(
            r#"{"included": [
                {"type": "participant", "id": "p1",
                 "attributes": {"stats": {"name": "test1", "kills": 1, "timeSurvived": 42.0}}}
            ]}"#,
        )
        .unwrap();
        let stats_by_player = extract_participant_stats(&match_json, &roster()).unwrap();
        assert_eq!(stats_by_player.len(), 1);
        assert!(!stats_by_player.contains_key("test2"));
    }

    #[test]
    fn malformed_payload_test() {
        let no_included: serde_json::Value =
            serde_json::from_str(r#"{"data": {"type": "match", "id": "m1"}}"#).unwrap();
        match extract_participant_stats(&no_included, &roster()) {
            Err(StatsError::DataFormat(_)) => {}
            other => panic!("expected DataFormat error, got {:?}", other),
        }

        let no_kills: serde_json::Value = serde_json::from_str(
            r#"{"included": [
                {"type": "participant", "id": "p1",
                 "attributes": {"stats": {"name": "test1", "timeSurvived": 42.0}}}
            ]}"#,
        )
        .unwrap();
        match extract_participant_stats(&no_kills, &roster()) {
            Err(StatsError::DataFormat(_)) => {}
            other => panic!("expected DataFormat error, got {:?}", other),
        }
    }
}
