use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Hours Singapore sits ahead of UTC. The offset is fixed year round;
/// Singapore has not observed daylight saving since 1982.
pub const SGT_UTC_OFFSET_HOURS: i64 = 8;

/// Current wall clock time in Singapore, where the crew trains.
pub fn now_singapore() -> NaiveDateTime {
    (Utc::now() + Duration::hours(SGT_UTC_OFFSET_HOURS)).naive_utc()
}

/// Formats a submission timestamp for the spreadsheet record and the
/// confirmation reply.
pub fn format_submission_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats a report date as the canonical DD/MM/YYYY column header.
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats the optional excuse time, falling back to the literal NA.
pub fn format_excuse_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => "NA".to_string(),
    }
}
