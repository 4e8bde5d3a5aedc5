//! Text rendering of the two session panels.
//!
//! Views only read state; every change goes through the flows on
//! [`AppState`](crate::state::AppState).

pub mod detail_panel;
pub mod list_panel;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Render a service timestamp as `YYYY-MM-DD HH:MM` (UTC), or verbatim when
/// it is not a recognizable datetime.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-03-01T10:00:00+00:00"), "2025-03-01 10:00");
        assert_eq!(format_timestamp("2025-03-01T12:30:00+02:00"), "2025-03-01 10:30");
        assert_eq!(format_timestamp("2025-03-01T10:00:00.123456"), "2025-03-01 10:00");
        assert_eq!(format_timestamp("2025-03-01 09:15:42"), "2025-03-01 09:15");
        assert_eq!(format_timestamp("Sat, 01 Mar 2025"), "Sat, 01 Mar 2025");
        assert_eq!(format_timestamp(""), "");
    }
}
