// Infrastructure layer - Configuration, rendering adapters and HTTP encoding
pub mod config;
pub mod figure_mapper;
pub mod html_renderer;
pub mod http_response;
