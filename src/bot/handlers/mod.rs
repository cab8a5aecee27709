/// Fallback for plain text and unrecognised commands
pub mod general_message;
/// Slash command dispatch
pub mod message;

use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::sheets::client::SheetsClient;

/// Wires bot updates to their handlers, carrying the shared sheets client.
pub struct BotHandler {
    pub sheets: Arc<SheetsClient>,
}

impl BotHandler {
    pub fn new(sheets: Arc<SheetsClient>) -> Self {
        Self { sheets }
    }

    /// Builds the dispatch tree: commands first, then the plain message
    /// fallback for anything the command filter rejects.
    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let sheets = self.sheets.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: crate::bot::commands::Command| {
                        let sheets = sheets.clone();
                        async move { message::command_handler(bot, msg, cmd, sheets).await }
                    }),
            )
            .branch(
                Update::filter_message().endpoint(general_message::handle_general_message),
            )
    }
}
