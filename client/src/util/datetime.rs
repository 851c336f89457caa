//! Display formatting for backend timestamps.
//!
//! The backend sends `YYYY-MM-DD HH:MM:SS`; the UI shows a time of day on
//! message bubbles and a short date on session entries. Unparseable input is
//! shown as received.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const BACKEND_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const TIME_OF_DAY: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute]:[second] [period]");
const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

fn reformat(raw: &str, output: &[BorrowedFormatItem<'static>]) -> String {
    PrimitiveDateTime::parse(raw.trim(), BACKEND_FORMAT)
        .ok()
        .and_then(|dt| dt.format(output).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Time of day for a history turn, e.g. `"2:05:09 PM"`.
#[must_use]
pub fn message_time(raw: &str) -> String {
    reformat(raw, TIME_OF_DAY)
}

/// Short date for a session entry, e.g. `"3/1/2024"`.
#[must_use]
pub fn session_date(raw: &str) -> String {
    reformat(raw, SHORT_DATE)
}

/// Current local time of day for optimistic user messages.
#[must_use]
pub fn now_time() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_time_string("en-US"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc()
            .format(TIME_OF_DAY)
            .unwrap_or_default()
    }
}
