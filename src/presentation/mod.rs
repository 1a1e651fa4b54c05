// Presentation layer - HTTP handlers and routes
pub mod app_state;
pub mod handlers;
