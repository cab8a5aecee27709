/// The /attendance report flow
pub mod attendance;
/// The /usefullinks button keyboard
pub mod links;

use teloxide::utils::command::BotCommands;

/// Slash commands shown in Telegram's command menu
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "BLAST attendance bot commands:")]
pub enum Command {
    #[command(description = "say hi to the bot 🖖")]
    Start,
    #[command(description = "report when you are absent/late/leave early for training (valid reasons) ✉️")]
    Attendance { details: String },
    #[command(description = "view important links 💃🏼🕺🏼")]
    UsefulLinks,
    #[command(description = "contact the bossman 🧘🏼")]
    Help,
}
