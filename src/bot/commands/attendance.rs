use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::messages;
use crate::bot::report::AttendanceReport;
use crate::sheets::client::SheetsClient;
use crate::utils::datetime::{format_submission_timestamp, now_singapore};
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_validation_error,
};

/// Handles /attendance: parse the report, append it to the date column in
/// the spreadsheet, confirm to the user.
///
/// Validation and spreadsheet failures are reported back to the chat and
/// never bubble up, so one bad report cannot take down the dispatcher.
pub async fn handle_attendance(
    bot: Bot,
    msg: Message,
    details: String,
    sheets: Arc<SheetsClient>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.clone());
    let display_user = username.as_deref().unwrap_or("unknown");

    let details = details.trim();
    log_command_start("attendance", display_user, user_id, chat_id, Some(details));

    let feedback = CommandFeedback::new(bot.clone(), msg.chat.id);

    // Bare /attendance gets the how-to instead of a validation error
    if details.is_empty() {
        bot.send_message(msg.chat.id, messages::ATTENDANCE_INSTRUCTIONS)
            .await?;
        return Ok(());
    }

    let report = match AttendanceReport::parse(details) {
        Ok(report) => report,
        Err(error) => {
            log_validation_error(
                "attendance",
                "arguments",
                details,
                &error.to_string(),
                display_user,
                user_id,
                chat_id,
            );
            feedback
                .validation_error(&error.to_string(), messages::ATTENDANCE_FORMAT_REMINDER)
                .await?;
            return Ok(());
        }
    };

    let submitted_at = now_singapore();
    let record = report.record_cell(username.as_deref(), &submitted_at);

    match sheets.append_attendance(&report.date_header(), &record).await {
        Ok(cell) => {
            log_command_success(
                "attendance",
                display_user,
                user_id,
                chat_id,
                Some(&format!(
                    "{} -> row {}, column {}",
                    report.date_header(),
                    cell.row,
                    cell.column
                )),
            );
            feedback
                .success(&messages::confirmation_message(
                    &report,
                    &format_submission_timestamp(&submitted_at),
                ))
                .await?;
        }
        Err(error) => {
            let error_text = format!("{error:#}");
            log_command_error("attendance", display_user, user_id, chat_id, &error_text);
            feedback
                .error(&messages::sheets_failure_message(&error_text))
                .await?;
        }
    }

    Ok(())
}
