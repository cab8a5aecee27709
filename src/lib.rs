//! # BLAST Attendance Bot
//!
//! A Telegram bot that relays attendance reports from crew chats into a
//! date-columned Google Sheet.
//!
//! ## Features
//! - /attendance command with a strict 5-field report format
//! - One spreadsheet column per training date, created on demand
//! - Records appended into the first empty cell of the date column
//! - Service account authentication against the Google Sheets v4 API
//! - Health check endpoints for deployment monitoring

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Background services like the health check HTTP server
pub mod services;
/// Google Sheets access: service account auth and the v4 REST client
pub mod sheets;
/// Utility functions for datetime, validation, and formatting
pub mod utils;
