//! # BLAST Attendance Bot Main Entry Point
//!
//! This is the main entry point for the BLAST attendance bot. It initializes
//! logging, loads configuration, builds the Google Sheets client, starts the
//! health check server, and runs the Telegram bot.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blast_attendance_bot::bot::commands::Command;
use blast_attendance_bot::bot::handlers::BotHandler;
use blast_attendance_bot::config::Config;
use blast_attendance_bot::services::health::HealthService;
use blast_attendance_bot::sheets::client::SheetsClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blast_attendance_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting BLAST attendance bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Worksheet: {}, HTTP Port: {}",
        config.worksheet_title, config.http_port);

    // Initialize the Google Sheets client
    info!("Initializing Google Sheets client...");
    let sheets = Arc::new(SheetsClient::new(&config)?);
    info!("Google Sheets client initialized successfully");

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register the command menu: {}", e);
    }
    let handler = BotHandler::new(sheets.clone());
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(sheets);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
