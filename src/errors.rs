use std::fmt;

/// Error taxonomy of the analytics pipeline. Transport and data-format
/// failures are skippable at the call site; invalid input aborts the
/// responsible operation.
#[derive(Debug)]
pub enum StatsError {
    Transport(reqwest::Error),
    DataFormat(String),
    InvalidInput(String),
    InsufficientData,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Transport(e) => write!(f, "transport error: {}", e),
            StatsError::DataFormat(msg) => write!(f, "unexpected data format: {}", msg),
            StatsError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            StatsError::InsufficientData => write!(f, "no raw stats to aggregate"),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StatsError {
    fn from(e: reqwest::Error) -> StatsError {
        StatsError::Transport(e)
    }
}

pub type StatsResult<T> = std::result::Result<T, StatsError>;
