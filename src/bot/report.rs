use std::fmt;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::utils::datetime::{format_excuse_time, format_report_date, format_submission_timestamp};
use crate::utils::validation::{
    validate_excuse_time, validate_member_name, validate_reason, validate_report_date,
    validate_status,
};

/// Why a crew member will miss part or all of a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Absent,
    Late,
    LeaveEarly,
}

impl ReportStatus {
    /// Maps a lowercased status token onto a status. `leaveearly` and
    /// `leave_early` are accepted as one token spellings of leave early.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "absent" => Some(ReportStatus::Absent),
            "late" => Some(ReportStatus::Late),
            "leave" | "leaveearly" | "leave_early" => Some(ReportStatus::LeaveEarly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Absent => "absent",
            ReportStatus::Late => "late",
            ReportStatus::LeaveEarly => "leave early",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated attendance report parsed from the /attendance arguments
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceReport {
    /// Training date the report is for
    pub date: NaiveDate,
    pub status: ReportStatus,
    /// Member name, a single token (underscores for spaces)
    pub name: String,
    /// Free text reason, one or more tokens
    pub reason: String,
    /// Arrival or departure time for late / leave early, None for NA
    pub excuse_time: Option<NaiveTime>,
}

impl AttendanceReport {
    /// Parses the raw argument text of an /attendance command.
    ///
    /// Expected shape:
    /// `[DD/MM/YYYY] [absent/late/leave early] [Name] [Reason...] [NA or HH:MM]`
    ///
    /// The status `leave early` may be written as the two tokens `leave early`
    /// or as the single tokens `leaveearly` / `leave_early`. The reason may
    /// span several tokens; the final token is always the time detail.
    pub fn parse(args: &str) -> Result<Self> {
        let tokens: Vec<&str> = args.split_whitespace().collect();

        if tokens.len() < 5 {
            return Err(anyhow!("Please provide all 5 fields."));
        }

        let date = validate_report_date(tokens[0])?;

        // `leave early` spans two tokens; consume both so the name that
        // follows is not swallowed as part of the status.
        let two_token_leave = tokens[1].eq_ignore_ascii_case("leave")
            && tokens.get(2).is_some_and(|t| t.eq_ignore_ascii_case("early"));
        let (status, rest) = if two_token_leave {
            (ReportStatus::LeaveEarly, &tokens[3..])
        } else {
            (validate_status(tokens[1])?, &tokens[2..])
        };

        // Name, at least one reason token, and the time detail must remain
        if rest.len() < 3 {
            return Err(anyhow!("Please provide all 5 fields."));
        }

        let excuse_time = validate_excuse_time(rest[rest.len() - 1])?;

        let name = rest[0];
        let reason = rest[1..rest.len() - 1].join(" ");
        validate_member_name(name)?;
        validate_reason(&reason)?;

        Ok(AttendanceReport {
            date,
            status,
            name: name.to_string(),
            reason,
            excuse_time,
        })
    }

    /// Canonical zero padded DD/MM/YYYY header for this report's date column.
    ///
    /// Reports written as `3/9/2025` and `03/09/2025` land in the same column
    /// because the header is rebuilt from the parsed date.
    pub fn date_header(&self) -> String {
        format_report_date(self.date)
    }

    /// Multi line record written into a single spreadsheet cell.
    pub fn record_cell(&self, telegram_handle: Option<&str>, submitted_at: &NaiveDateTime) -> String {
        let handle = match telegram_handle {
            Some(username) => format!("@{username}"),
            None => "N/A".to_string(),
        };

        format!(
            "Name: {}\nTelegram Handle: {}\nStatus: {}\nReason: {}\nSubmitted: {}\nTime: {}",
            self.name,
            handle,
            self.status,
            self.reason,
            format_submission_timestamp(submitted_at),
            format_excuse_time(self.excuse_time),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_absent_report() {
        let report = AttendanceReport::parse("03/09/2025 absent marvell sick NA").unwrap();

        assert_eq!(report.date, NaiveDate::from_ymd_opt(2025, 9, 3).unwrap());
        assert_eq!(report.status, ReportStatus::Absent);
        assert_eq!(report.name, "marvell");
        assert_eq!(report.reason, "sick");
        assert_eq!(report.excuse_time, None);
    }

    #[test]
    fn test_parse_late_report_with_time() {
        let report = AttendanceReport::parse("03/09/2025 late marvell night class 19:15").unwrap();

        assert_eq!(report.status, ReportStatus::Late);
        assert_eq!(report.name, "marvell");
        assert_eq!(report.reason, "night class");
        assert_eq!(
            report.excuse_time,
            Some(NaiveTime::from_hms_opt(19, 15, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_leave_early_as_two_tokens() {
        let report =
            AttendanceReport::parse("03/09/2025 leave early marvell family matter 20:30").unwrap();

        assert_eq!(report.status, ReportStatus::LeaveEarly);
        assert_eq!(report.name, "marvell");
        assert_eq!(report.reason, "family matter");
        assert_eq!(
            report.excuse_time,
            Some(NaiveTime::from_hms_opt(20, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_leave_early_single_token_spellings() {
        for raw in [
            "03/09/2025 leaveearly marvell family matter 20:30",
            "03/09/2025 leave_early marvell family matter 20:30",
            "03/09/2025 LeaveEarly marvell family matter 20:30",
        ] {
            let report = AttendanceReport::parse(raw).unwrap();
            assert_eq!(report.status, ReportStatus::LeaveEarly, "input: {raw}");
            assert_eq!(report.name, "marvell", "input: {raw}");
        }
    }

    #[test]
    fn test_parse_multi_word_reason() {
        let report = AttendanceReport::parse(
            "03/09/2025 absent jia_ying overseas work trip until friday NA",
        )
        .unwrap();

        assert_eq!(report.reason, "overseas work trip until friday");
    }

    #[test]
    fn test_parse_too_few_fields() {
        for raw in ["", "03/09/2025", "03/09/2025 absent marvell NA"] {
            let error = AttendanceReport::parse(raw).unwrap_err().to_string();
            assert_eq!(error, "Please provide all 5 fields.", "input: {raw:?}");
        }

        // Two token leave early with the reason missing leaves only four fields
        let error = AttendanceReport::parse("03/09/2025 leave early marvell 20:30")
            .unwrap_err()
            .to_string();
        assert_eq!(error, "Please provide all 5 fields.");
    }

    #[test]
    fn test_parse_invalid_date() {
        let error = AttendanceReport::parse("2025-09-03 absent marvell sick NA")
            .unwrap_err()
            .to_string();
        assert_eq!(error, "Date must be in DD/MM/YYYY format.");
    }

    #[test]
    fn test_parse_invalid_status() {
        let error = AttendanceReport::parse("03/09/2025 sick marvell flu NA")
            .unwrap_err()
            .to_string();
        assert_eq!(error, "Status must be one of: absent, late, leave early.");
    }

    #[test]
    fn test_parse_invalid_time() {
        let error = AttendanceReport::parse("03/09/2025 late marvell night class 7pm")
            .unwrap_err()
            .to_string();
        assert_eq!(error, "Time must be NA or HH:MM (24h format).");
    }

    #[test]
    fn test_date_header_is_zero_padded() {
        let report = AttendanceReport::parse("3/9/2025 absent marvell sick NA").unwrap();
        assert_eq!(report.date_header(), "03/09/2025");
    }

    #[test]
    fn test_record_cell_with_handle_and_time() {
        let report = AttendanceReport::parse("03/09/2025 late marvell night class 19:15").unwrap();
        let submitted = NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();

        let cell = report.record_cell(Some("marvell_t"), &submitted);
        assert_eq!(
            cell,
            "Name: marvell\nTelegram Handle: @marvell_t\nStatus: late\nReason: night class\nSubmitted: 2025-09-01 12:30:00\nTime: 19:15"
        );
    }

    #[test]
    fn test_record_cell_without_handle() {
        let report = AttendanceReport::parse("03/09/2025 absent marvell sick NA").unwrap();
        let submitted = NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let cell = report.record_cell(None, &submitted);
        assert!(cell.contains("Telegram Handle: N/A"));
        assert!(cell.contains("Time: NA"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ReportStatus::Absent.to_string(), "absent");
        assert_eq!(ReportStatus::Late.to_string(), "late");
        assert_eq!(ReportStatus::LeaveEarly.to_string(), "leave early");
    }
}
