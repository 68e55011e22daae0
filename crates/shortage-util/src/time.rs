//! Time utilities for the shortage tracker
//!
//! # Mock Time for Development
//!
//! In debug builds, the `SHORTAGE_MOCK_TIME` environment variable can be set
//! to override the system time used to stamp new shortages. This is useful
//! for exercising date-range filters by hand.
//!
//! Format: `YYYY-MM-DD HH:MM:SS` (e.g., `2023-01-15 09:30:00`)

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::sync::OnceLock;

use crate::TrackerError;

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "SHORTAGE_MOCK_TIME";

/// Date format accepted for filter bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-time format accepted for filter bounds and mock time
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offset between mock time and real time, computed once per process.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            if let Ok(mock_time_str) = std::env::var(MOCK_TIME_ENV_VAR) {
                match parse_local(&mock_time_str) {
                    Ok(mock_dt) => {
                        let offset = mock_dt.signed_duration_since(Local::now());
                        tracing::info!(
                            mock_time = %mock_time_str,
                            offset_secs = offset.num_seconds(),
                            "Mock time enabled"
                        );
                        return Some(offset);
                    }
                    Err(_) => {
                        tracing::warn!(
                            mock_time = %mock_time_str,
                            expected_format = DATETIME_FORMAT,
                            "Invalid mock time format"
                        );
                    }
                }
            }
            None
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Returns whether mock time is currently active.
pub fn is_mock_time_active() -> bool {
    get_mock_time_offset().is_some()
}

/// Get the current local time, respecting mock time settings in debug builds.
pub fn now() -> DateTime<Local> {
    let real_now = Local::now();

    if let Some(offset) = get_mock_time_offset() {
        real_now + offset
    } else {
        real_now
    }
}

/// Format a DateTime for display with full date and time.
pub fn format_datetime_full(dt: &DateTime<Local>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Parse a local date or date-time.
///
/// Accepts `YYYY-MM-DD` (taken as local midnight), `YYYY-MM-DD HH:MM:SS`,
/// or an RFC 3339 timestamp.
pub fn parse_local(input: &str) -> Result<DateTime<Local>, TrackerError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Local));
    }

    let naive = if let Ok(ndt) = NaiveDateTime::parse_from_str(input, DATETIME_FORMAT) {
        ndt
    } else if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        date.and_hms_opt(0, 0, 0)
            .ok_or_else(|| TrackerError::date(input))?
    } else {
        return Err(TrackerError::date(input));
    };

    // Ambiguous local times (DST fold) resolve to the earlier instant
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TrackerError::date(input))
}

/// Lenient variant of [`parse_local`] for optional filter bounds.
///
/// Empty or unparseable input means "no bound".
pub fn parse_optional_bound(input: &str) -> Option<DateTime<Local>> {
    if input.trim().is_empty() {
        return None;
    }
    parse_local(input).ok()
}
