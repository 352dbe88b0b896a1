use chrono::{Days, Local, NaiveDate};

/// Resolve a signed day offset (0 = today) against the local wall-clock date.
///
/// No timezone conversion happens here: the dashboard always shows the date
/// the user's clock shows. Any offset is accepted; extreme values simply
/// point far into the past or future.
fn resolve_offset(offset: i64) -> NaiveDate {
    let today = Local::now().date_naive();
    if offset >= 0 {
        today
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MAX)
    } else {
        today
            .checked_sub_days(Days::new(offset.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Compact `YYYYMMDD` key for the scoreboard query, `offset` days from today.
pub fn date_key(offset: i64) -> String {
    date_key_for(resolve_offset(offset))
}

/// Human-readable header for the same date, e.g. `Friday, Aug 29`.
pub fn header_label(offset: i64) -> String {
    header_label_for(resolve_offset(offset))
}

pub(crate) fn date_key_for(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

pub(crate) fn header_label_for(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}
