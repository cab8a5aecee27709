use teloxide::prelude::*;

use crate::bot::messages;
use crate::utils::feedback::CommandFeedback;

/// Handles messages the command filter rejected.
///
/// A bare `/attendance` (including the `@botname` form) parses with empty
/// arguments or not at all depending on how it was typed, so the
/// instructions reply is also anchored here.
pub async fn handle_general_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot.clone(), msg.chat.id);

    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            let command_word = text.split_whitespace().next().unwrap_or(text);

            if command_word == "/attendance" || command_word.starts_with("/attendance@") {
                bot.send_message(msg.chat.id, messages::ATTENDANCE_INSTRUCTIONS)
                    .await?;
            } else {
                let error_msg = format!("Unknown command: {command_word}");
                let suggestion = "Use /help to see all available commands.";
                feedback.validation_error(&error_msg, suggestion).await?;
            }
        } else if text.to_lowercase().contains("attendance") {
            // Helpful hint for users typing instead of using the command
            feedback
                .info("Trying to log your attendance? Use /attendance to see the format.")
                .await?;
        }
        // For other messages, we don't respond to avoid spam
    }

    Ok(())
}
