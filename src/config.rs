use anyhow::{anyhow, Result};
use std::env;

/// Where the Google service account credentials come from.
///
/// `SERVICE_ACCOUNT_JSON` (the key file contents inlined into the
/// environment) wins over `SERVICE_ACCOUNT_FILE` when both are set.
#[derive(Debug, Clone)]
pub enum ServiceAccountSource {
    /// Raw key file JSON taken from the environment
    Inline(String),
    /// Path to a key file on disk
    File(String),
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token
    pub telegram_bot_token: String,
    /// ID of the spreadsheet attendance records are written to
    pub spreadsheet_id: String,
    /// Title of the worksheet tab inside the spreadsheet
    pub worksheet_title: String,
    /// Google service account credentials
    pub service_account: ServiceAccountSource,
    /// Port for the health check HTTP server
    pub http_port: u16,
}

impl Config {
    /// Loads configuration from the environment, failing fast on anything
    /// required that is missing or blank.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let spreadsheet_id = env::var("GSHEET_ID")
            .map_err(|_| anyhow!("GSHEET_ID must be set"))?;

        if spreadsheet_id.trim().is_empty() {
            return Err(anyhow!("GSHEET_ID must be set"));
        }

        let worksheet_title = env::var("WORKSHEET_TITLE")
            .unwrap_or_else(|_| "Sheet1".to_string());
        let worksheet_title = if worksheet_title.trim().is_empty() {
            "Sheet1".to_string()
        } else {
            worksheet_title
        };

        let inline_json = non_blank(env::var("SERVICE_ACCOUNT_JSON"));
        let key_file = non_blank(env::var("SERVICE_ACCOUNT_FILE"));
        let service_account = match (inline_json, key_file) {
            (Some(json), _) => ServiceAccountSource::Inline(json),
            (None, Some(path)) => ServiceAccountSource::File(path),
            (None, None) => {
                return Err(anyhow!("Set SERVICE_ACCOUNT_JSON or SERVICE_ACCOUNT_FILE in env"))
            }
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            spreadsheet_id,
            worksheet_title,
            service_account,
            http_port,
        })
    }
}

fn non_blank(var: Result<String, env::VarError>) -> Option<String> {
    var.ok().filter(|value| !value.trim().is_empty())
}
