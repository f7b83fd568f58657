use crate::errors::{StatsError, StatsResult};

/// Converts a duration in seconds to a zero-padded HH:MM:SS string.
/// Sub-second precision is discarded, never rounded up. Hours grow past
/// two digits for very long durations.
pub fn sec2time(seconds: f64) -> StatsResult<String> {
    if seconds < 0.0 {
        return Err(StatsError::InvalidInput(format!(
            "negative duration: {}",
            seconds
        )));
    }
    let whole = seconds.floor() as u64;
    let hours = whole / 3600;
    let minutes = (whole / 60) % 60;
    let secs = whole % 60;
    Ok(format!("{:02}:{:02}:{:02}", hours, minutes, secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sec2time_test() {
        assert_eq!(sec2time(0.0).unwrap(), "00:00:00");
        assert_eq!(sec2time(3661.0).unwrap(), "01:01:01");
        assert_eq!(sec2time(225.0).unwrap(), "00:03:45");
        assert_eq!(sec2time(45296.0).unwrap(), "12:34:56");
    }

    #[test]
    fn sec2time_truncates_test() {
        assert_eq!(sec2time(59.999).unwrap(), "00:00:59");
        assert_eq!(sec2time(0.5).unwrap(), "00:00:00");
    }

    #[test]
    fn sec2time_wide_hours_test() {
        assert_eq!(sec2time(360000.0).unwrap(), "100:00:00");
    }

    #[test]
    fn sec2time_negative_test() {
        match sec2time(-1.0) {
            Err(StatsError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput error, got {:?}", other),
        }
    }
}
