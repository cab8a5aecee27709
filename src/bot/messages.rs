//! User facing copy for the bot. Kept in one place so wording tweaks
//! never touch handler logic.

use crate::bot::report::AttendanceReport;
use crate::utils::datetime::format_excuse_time;

/// How to use /attendance, shown when the command arrives without arguments
pub const ATTENDANCE_INSTRUCTIONS: &str = "🙆🏼‍♂️🙆🏼‍♀️ this is how you log your attendance:\n/attendance [DD/MM/YYYY] [absent/late/leave early] [Name] [Reason] [NA/HH:MM (24h format)]\n\nexamples:\n• /attendance 03/09/2025 absent marvell sick NA\n• /attendance 03/09/2025 late marvell night class 19:15\n• /attendance 03/09/2025 leave early marvell family matter 20:30";

/// Format reminder appended to every validation error reply
pub const ATTENDANCE_FORMAT_REMINDER: &str = "Format:\n/attendance [DD/MM/YYYY] [absent/late/leave early] [Name] [Reason] [NA/HH:MM (24h format)]";

/// Reply for /help
pub const HELP_MESSAGE: &str = "❓ are you confused?\n\nif you’re unsure how to use me 👀 or something isn’t working, please pm my boss @tamlongkang for help.";

/// Intro line above the /usefullinks button keyboard
pub const USEFUL_LINKS_INTRO: &str = "okay, here are some important links that you might be looking for 🤝:";

/// Link buttons for /usefullinks, one button per row
pub const USEFUL_LINKS: &[(&str, &str)] = &[(
    "training calendar",
    "https://docs.google.com/spreadsheets/d/1hdZcShRccqVyegUG07WjWBy-rWC51HVDlttACU7vNh4/edit?usp=sharing",
)];

/// Greeting for /start
pub fn start_message(first_name: &str) -> String {
    format!(
        "👋 hello {first_name}, i’m ✨blaster✨, your favourite blastard :)\n\n\
         use the menu below or type commands directly:\n\
         • /attendance — log attendance\n\
         • /usefullinks — view important links\n\
         • /help — report anything"
    )
}

/// Confirmation sent once a report lands in the spreadsheet. Sent through
/// the success feedback path, which prefixes the ✅.
pub fn confirmation_message(report: &AttendanceReport, submitted_display: &str) -> String {
    format!(
        "thank you {}! your submission has been recorded.\n\n\
         Type: {}\n\
         Date: {}\n\
         Reason: {}\n\
         Time (if applicable): {}\n\
         Submitted at: {}",
        report.name,
        report.status,
        report.date_header(),
        report.reason,
        format_excuse_time(report.excuse_time),
        submitted_display,
    )
}

/// Troubleshooting reply when the spreadsheet write fails. Sent through the
/// error feedback path, which prefixes the ❌.
pub fn sheets_failure_message(error: &str) -> String {
    format!(
        "Could not write to Google Sheets.\n\
         • Check GSHEET_ID\n\
         • Ensure the Sheet is shared with the service account email (Editor)\n\
         • Confirm SERVICE_ACCOUNT_FILE path\n\
         Error: {error}"
    )
}
