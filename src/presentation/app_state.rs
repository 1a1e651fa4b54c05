// Application state for HTTP handlers
use crate::application::view_router::ViewRouter;

#[derive(Clone)]
pub struct AppState {
    pub view_router: ViewRouter,
}
