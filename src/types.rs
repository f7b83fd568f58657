pub type PlayerId = String;
pub type PlayerName = String;
pub type MatchId = String;
