// Application layer - Content construction and tab routing
pub mod content_builder;
pub mod view_router;
