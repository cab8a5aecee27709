/// Date and time helpers for the Singapore based crew
pub mod datetime;
/// User feedback messages with emoji prefixes
pub mod feedback;
/// Structured logging helpers
pub mod logging;
/// Validators for the attendance report fields
pub mod validation;
