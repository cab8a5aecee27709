/// Health check HTTP endpoints for deployment probes
pub mod health;
