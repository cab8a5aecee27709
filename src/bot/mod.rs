/// Slash command definitions and per command handlers
pub mod commands;
/// Update dispatch and fallbacks
pub mod handlers;
/// User facing copy
pub mod messages;
/// Attendance report parsing and formatting
pub mod report;
