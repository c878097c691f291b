//! Japanese date and time formatting
//!
//! Renders dates the way `ja-JP` long-form formatting does
//! (`2024年1月1日月曜日`) and times as two-digit `HH:MM`.

use std::fmt::Display;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Weekday};

/// Long-form name of a weekday
#[must_use]
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月曜日",
        Weekday::Tue => "火曜日",
        Weekday::Wed => "水曜日",
        Weekday::Thu => "木曜日",
        Weekday::Fri => "金曜日",
        Weekday::Sat => "土曜日",
        Weekday::Sun => "日曜日",
    }
}

/// `2024年1月1日月曜日`
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}年{}月{}日{}",
        date.year(),
        date.month(),
        date.day(),
        weekday_name(date.weekday())
    )
}

/// Wall-clock `HH:MM` of `time` as seen in `tz`
#[must_use]
pub fn hour_minute<Tz>(time: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz).format("%H:%M").to_string()
}
