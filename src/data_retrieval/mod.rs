pub mod match_fetcher;
pub mod player_directory;
pub mod pubg_client;
