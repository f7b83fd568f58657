use crate::errors::{StatsError, StatsResult};
use crate::types::{MatchId, PlayerName};
use crate::CONFIG;
use itertools::Itertools;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION};
use tokio::time::{delay_until, Duration, Instant};

/// Struct which handles all communication with the PUBG api.
pub struct PubgClient {
    http: reqwest::Client,
    base_url: String,
}

impl PubgClient {
    pub fn new() -> Self {
        let api_key = CONFIG
            .get_str("pubg_api_key")
            .expect("Field pubg_api_key not set in config.");
        let shard = CONFIG
            .get_str("pubg_shard")
            .expect("Field pubg_shard not set in config.");
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", api_key)
                .parse()
                .expect("Api key is not a valid header value."),
        );
        headers.insert(
            ACCEPT,
            "application/vnd.api+json"
                .parse()
                .expect("Accept header value is invalid."),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Unable to build http client.");
        PubgClient {
            http,
            base_url: format!("https://api.pubg.com/shards/{}", shard),
        }
    }

    /// Sends get requests. Waits between calls to stay under the api
    /// rate limit (10 rpm for a free PUBG key).
    async fn get_req_paced(&self, url: &String) -> StatsResult<serde_json::Value> {
        let interval = CONFIG
            .get_int("request_interval_secs")
            .expect("Field request_interval_secs not set in config.")
            as u64;
        let start_inst = Instant::now();
        let response = self.http.get(url).send().await?.text().await?;
        delay_until(start_inst + Duration::from_secs(interval)).await;
        match serde_json::from_str(&response) {
            Ok(json) => Ok(json),
            Err(_) => {
                warn!("Unable to parse response at url: {}", url);
                Err(StatsError::DataFormat(format!(
                    "response at {} is not valid json",
                    url
                )))
            }
        }
    }

    /// Resolves player names to account ids and recent match-id lists.
    /// Uses the /players?filter[playerNames]= endpoint.
    pub async fn fetch_players(&self, names: &[PlayerName]) -> StatsResult<serde_json::Value> {
        info!("Fetching roster info for: {}", names.iter().join(", "));
        self.get_req_paced(&format!(
            "{}/players?filter[playerNames]={}",
            self.base_url,
            names.iter().join(",")
        ))
        .await
    }

    /// Get single match data including per-participant stats.
    /// Uses the /matches/{match_id} endpoint.
    pub async fn fetch_match_info(&self, match_id: &MatchId) -> StatsResult<serde_json::Value> {
        info!("Fetching match info: {}", match_id);
        self.get_req_paced(&format!("{}/matches/{}", self.base_url, match_id))
            .await
    }
}
