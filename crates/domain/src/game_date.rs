use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DomainError;
use crate::ids::GameId;

/// Wire format of a dated puzzle id
pub const GAME_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Parsing
// =============================================================================

/// Parse a puzzle id such as `2025-01-15` into its calendar date.
pub fn parse_game_date(game_id: &GameId) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(game_id.as_str(), GAME_DATE_FORMAT)
        .map_err(|e| DomainError::parse(format!("{}: {}", game_id, e)))
}

/// Id of the puzzle for the UTC calendar day containing `now_millis`.
pub fn today_game_id(now_millis: u64) -> GameId {
    let millis = i64::try_from(now_millis).unwrap_or(i64::MAX);
    let date = DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .date_naive();
    GameId::new(date.format(GAME_DATE_FORMAT).to_string())
}

// =============================================================================
// Display
// =============================================================================

/// "January 15, 2025"; ids that are not dates are shown unchanged.
pub fn long_date_label(game_id: &GameId) -> String {
    match parse_game_date(game_id) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => game_id.to_string(),
    }
}

/// "1/15/2025"; ids that are not dates are shown unchanged.
pub fn short_date_label(game_id: &GameId) -> String {
    match parse_game_date(game_id) {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => game_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_dated_ids() {
        let date = parse_game_date(&GameId::new("2025-01-15")).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 15));
    }

    #[test]
    fn rejects_non_dates() {
        let err = parse_game_date(&GameId::new("game-1")).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn today_uses_utc_calendar_day() {
        // 2025-01-15T23:59:59Z
        assert_eq!(today_game_id(1_736_985_599_000).as_str(), "2025-01-15");
        // 2025-01-16T00:00:00Z
        assert_eq!(today_game_id(1_736_985_600_000).as_str(), "2025-01-16");
    }

    #[test]
    fn long_label_spells_out_month() {
        assert_eq!(long_date_label(&GameId::new("2025-01-15")), "January 15, 2025");
        assert_eq!(long_date_label(&GameId::new("2024-12-01")), "December 1, 2024");
    }

    #[test]
    fn short_label_is_numeric() {
        assert_eq!(short_date_label(&GameId::new("2025-01-03")), "1/3/2025");
    }

    #[test]
    fn labels_fall_back_to_raw_id() {
        assert_eq!(long_date_label(&GameId::new("game-1")), "game-1");
        assert_eq!(short_date_label(&GameId::new("game-1")), "game-1");
    }
}
