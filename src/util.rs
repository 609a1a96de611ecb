use crate::error::{LogTableError, Result};
use crate::model::DateRange;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use std::time::{Duration, SystemTime};

pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%Y-%m-%d"), date.format("%a"))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn resolve_range(since: Option<&str>, until: Option<&str>) -> Result<DateRange> {
    let mut range = DateRange::new();

    let since_dt = since.map(parse_date_arg).transpose()?;
    let until_dt = until.map(parse_until_arg).transpose()?;

    if let (Some(s), Some(u)) = (since_dt, until_dt) {
        if s > u {
            return Err(LogTableError::InvalidDate(format!(
                "Invalid range: since ({s}) is after until ({u})"
            )));
        }
    }

    if let Some(s) = since_dt {
        range = range.with_since(s);
    }
    if let Some(u) = until_dt {
        range = range.with_until(u);
    }

    Ok(range)
}

/// Like [`parse_date_arg`], but a bare `YYYY-MM-DD` covers that whole day.
pub fn parse_until_arg(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_nano_opt(23, 59, 59, 999_999_999) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }
    parse_date_arg(input)
}

pub fn parse_date_arg(input: &str) -> Result<DateTime<Utc>> {
    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    // YYYY-MM-DD
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }

    // "2 weeks ago", "90d"
    let duration = parse_natural_duration(input)?
        .or_else(|| humantime::parse_duration(input.trim()).ok())
        .ok_or_else(|| LogTableError::InvalidDate(format!("Unrecognised date '{input}'")))?;

    let target = SystemTime::now()
        .checked_sub(duration)
        .ok_or_else(|| LogTableError::InvalidDate(format!("Duration overflow for '{input}'")))?;
    Ok(DateTime::<Utc>::from(target))
}

fn parse_natural_duration(input: &str) -> Result<Option<Duration>> {
    let lowered = input.trim().to_lowercase();

    let units = [
        (" days ago", 86400),
        (" weeks ago", 7 * 86400),
        (" months ago", 30 * 86400),
    ];
    for (suffix, secs) in units {
        if let Some(n) = lowered.strip_suffix(suffix) {
            if let Ok(n) = n.trim().parse::<u64>() {
                return n
                    .checked_mul(secs)
                    .map(|secs| Some(Duration::from_secs(secs)))
                    .ok_or_else(|| {
                        LogTableError::InvalidDate(format!("Duration overflow for '{input}'"))
                    });
            }
        }
    }

    Ok(None)
}
