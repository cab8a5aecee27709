use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::commands::Command;
use crate::bot::messages;
use crate::sheets::client::SheetsClient;

/// Routes a parsed command to its handler.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    sheets: Arc<SheetsClient>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            let first_name = msg
                .from()
                .map(|user| user.first_name.clone())
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "dancer".to_string());
            bot.send_message(msg.chat.id, messages::start_message(&first_name))
                .await?;
        }
        Command::Attendance { details } => {
            crate::bot::commands::attendance::handle_attendance(bot, msg, details, sheets).await?;
        }
        Command::UsefulLinks => {
            crate::bot::commands::links::handle_useful_links(bot, msg).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, messages::HELP_MESSAGE).await?;
        }
    }
    Ok(())
}
