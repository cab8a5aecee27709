use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveTime};

use crate::bot::report::ReportStatus;

/// Parses a report date in strict DD/MM/YYYY form.
pub fn validate_report_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y")
        .map_err(|_| anyhow!("Date must be in DD/MM/YYYY format."))
}

/// Maps a single status token onto a known report status.
pub fn validate_status(raw: &str) -> Result<ReportStatus> {
    ReportStatus::from_token(raw)
        .ok_or_else(|| anyhow!("Status must be one of: absent, late, leave early."))
}

/// Parses the trailing time detail: either the literal NA or a 24h HH:MM time.
pub fn validate_excuse_time(raw: &str) -> Result<Option<NaiveTime>> {
    let raw = raw.trim();

    if raw.eq_ignore_ascii_case("na") {
        return Ok(None);
    }

    NaiveTime::parse_from_str(raw, "%H:%M")
        .map(Some)
        .map_err(|_| anyhow!("Time must be NA or HH:MM (24h format)."))
}

pub fn validate_member_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow!("Name cannot be empty."));
    }

    Ok(())
}

pub fn validate_reason(reason: &str) -> Result<()> {
    if reason.trim().is_empty() {
        return Err(anyhow!("Reason cannot be empty. Use 'Reason NA' if none."));
    }

    Ok(())
}
