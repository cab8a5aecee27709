use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::messages;

/// Handles /usefullinks with an inline keyboard of link buttons, one per row.
pub async fn handle_useful_links(bot: Bot, msg: Message) -> ResponseResult<()> {
    let mut keyboard_rows = Vec::new();

    for (title, link) in messages::USEFUL_LINKS {
        match reqwest::Url::parse(link) {
            Ok(url) => {
                keyboard_rows.push(vec![InlineKeyboardButton::url((*title).to_string(), url)]);
            }
            Err(error) => {
                tracing::warn!("Skipping malformed link '{}': {}", title, error);
            }
        }
    }

    bot.send_message(msg.chat.id, messages::USEFUL_LINKS_INTRO)
        .reply_markup(InlineKeyboardMarkup::new(keyboard_rows))
        .await?;

    Ok(())
}
