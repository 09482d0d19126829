//! Small date helpers shared by the services.

use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::{Error, Result};

/// Returns the first and last day of the given month, both inclusive.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::Unexpected(format!("invalid month {year}-{month:02}")))?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| Error::Unexpected(format!("invalid month {year}-{month:02}")))?;
    Ok((start, next_month - Duration::days(1)))
}

/// Returns the Monday and Sunday of the ISO week containing `day`, inclusive.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let weekday = day.weekday().num_days_from_monday() as i64;
    let start = day - Duration::days(weekday);
    (start, start + Duration::days(6))
}

/// Returns January 1st and December 31st of the year containing `day`.
pub fn year_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = day.year();
    // Both dates exist for every year chrono can represent.
    (
        NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(year, 12, 31).expect("valid date"),
    )
}
