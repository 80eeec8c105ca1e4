use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use crate::error::ApiError;
use crate::utils::constants::TIMEZONE_OFFSET_HOURS_MAX;

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Fixed offset for the caller's wall clock, in whole hours east of UTC.
pub fn offset_from_hours(timezone_offset_hours: i32) -> Result<FixedOffset, ApiError> {
    if timezone_offset_hours.unsigned_abs() > TIMEZONE_OFFSET_HOURS_MAX.unsigned_abs() {
        return Err(ApiError::InvalidTimezoneOffset(timezone_offset_hours));
    }
    FixedOffset::east_opt(timezone_offset_hours * 3600)
        .ok_or(ApiError::InvalidTimezoneOffset(timezone_offset_hours))
}

/// Current instant expressed in the caller's offset.
pub fn operation_time(timezone_offset_hours: i32) -> Result<DateTime<FixedOffset>, ApiError> {
    operation_time_at(now_utc(), timezone_offset_hours)
}

pub fn operation_time_at(
    now: DateTime<Utc>,
    timezone_offset_hours: i32,
) -> Result<DateTime<FixedOffset>, ApiError> {
    let offset = offset_from_hours(timezone_offset_hours)?;
    Ok(now.with_timezone(&offset))
}

/// ISO-8601 with an explicit offset, e.g. `2024-05-01T15:04:05.000+03:00`
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Parse `tokenExpireIn` as returned by the auth endpoints.
pub fn parse_expiry(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

/// A token is usable only while `now` is strictly before its expiry.
pub fn is_expired_at(expires_at: &DateTime<FixedOffset>, now: DateTime<Utc>) -> bool {
    now >= expires_at.with_timezone(&Utc)
}

pub fn is_expired(expires_at: &DateTime<FixedOffset>) -> bool {
    is_expired_at(expires_at, now_utc())
}
