/// Service account credentials and access token minting
pub mod auth;
/// REST client for the spreadsheet operations the bot performs
pub mod client;
