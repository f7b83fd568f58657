use crate::data_retrieval::pubg_client::PubgClient;
use crate::errors::{StatsError, StatsResult};
use crate::match_stats::Player;
use crate::types::{MatchId, PlayerName};

/// Extracts roster identity and recent match ids from a /players response.
fn extract_players(response: &serde_json::Value) -> StatsResult<Vec<Player>> {
    let data = response["data"]
        .as_array()
        .ok_or_else(|| StatsError::DataFormat("players response has no data array".to_string()))?;
    let mut players = vec![];
    for player_json in data {
        let name = player_json["attributes"]["name"]
            .as_str()
            .ok_or_else(|| StatsError::DataFormat("player entry has no name".to_string()))?;
        let id = player_json["id"]
            .as_str()
            .ok_or_else(|| StatsError::DataFormat("player entry has no id".to_string()))?;
        let matches = player_json["relationships"]["matches"]["data"]
            .as_array()
            .ok_or_else(|| {
                StatsError::DataFormat(format!("player {} has no match relationships", name))
            })?;
        let match_ids = matches
            .iter()
            .map(|match_ref| {
                match_ref["id"]
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        StatsError::DataFormat(format!("match reference of {} has no id", name))
                    })
            })
            .collect::<StatsResult<Vec<MatchId>>>()?;
        players.push(Player::new(name.to_string(), id.to_string(), match_ids));
    }
    Ok(players)
}

/// Resolves the roster names to players with ids and recent match histories.
/// Names unknown to the api are simply absent from the result.
pub async fn resolve_roster(
    client: &PubgClient,
    names: &[PlayerName],
) -> StatsResult<Vec<Player>> {
    if names.is_empty() {
        return Err(StatsError::InvalidInput("roster is empty".to_string()));
    }
    let response = client.fetch_players(names).await?;
    let players = extract_players(&response)?;
    info!("Resolved {} of {} roster names.", players.len(), names.len());
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_players_test() {
        let response: serde_json::Value = serde_json::from_str(
            r#"{"data": [
                {"type": "player", "id": "account.a1",
                 "attributes": {"name": "test1", "shardId": "steam"},
                 "relationships": {"matches": {"data": [
                    {"type": "match", "id": "m1"}, {"type": "match", "id": "m2"}]}}},
                {"type": "player", "id": "account.b2",
                 "attributes": {"name": "test2", "shardId": "steam"},
                 "relationships": {"matches": {"data": []}}}
            ]}"#,
        )
        .unwrap();
        let players = extract_players(&response).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "test1");
        assert_eq!(players[0].id, "account.a1");
        assert_eq!(players[0].match_ids, vec!["m1".to_string(), "m2".to_string()]);
        assert!(players[0].raw_stats.is_empty());
        assert_eq!(players[1].name, "test2");
        assert!(players[1].match_ids.is_empty());
    }

    #[test]
    fn extract_players_malformed_test() {
        let response: serde_json::Value =
            serde_json::from_str(r#"{"errors": [{"title": "Unauthorized"}]}"#).unwrap();
        match extract_players(&response) {
            Err(StatsError::DataFormat(_)) => {}
            other => panic!("expected DataFormat error, got {:?}", other),
        }
    }
}
