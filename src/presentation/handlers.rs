// HTTP request handlers
use crate::domain::tab::{TabId, UnknownTabError};
use crate::infrastructure::figure_mapper::fragment_to_json;
use crate::infrastructure::html_renderer::{render_fragment, render_page};
use crate::infrastructure::http_response::{
    accepts_brotli, encoded_response, HTML_CONTENT_TYPE, JSON_CONTENT_TYPE,
};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Build the dashboard routes
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/tabs/:id", get(tab_fragment))
        .route("/api/tabs/:id", get(tab_fragment_json))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Page shell with the default tab pre-rendered
pub async fn index(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let fragment = state.view_router.select(TabId::default());
    let page = render_page(fragment);

    or_status(encoded_response(page.into_bytes(), HTML_CONTENT_TYPE, accepts_brotli(&headers)).await)
}

/// HTML fragment for one tab, swapped in by the page script
pub async fn tab_fragment(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let fragment = match state.view_router.select_tab(&id) {
        Ok(fragment) => fragment,
        Err(e) => return (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    };
    let markup = render_fragment(fragment);

    or_status(encoded_response(markup.into_bytes(), HTML_CONTENT_TYPE, accepts_brotli(&headers)).await)
}

/// JSON description of one tab's layout and figures
pub async fn tab_fragment_json(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let fragment = match state.view_router.select_tab(&id) {
        Ok(fragment) => fragment,
        Err(e) => return unknown_tab_json(e),
    };
    let body = fragment_to_json(fragment).to_string();

    or_status(encoded_response(body.into_bytes(), JSON_CONTENT_TYPE, accepts_brotli(&headers)).await)
}

fn unknown_tab_json(e: UnknownTabError) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))).into_response()
}

fn or_status(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::content_builder::StaticContent;
    use crate::application::view_router::ViewRouter;
    use axum::http::{header, HeaderValue};

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            view_router: ViewRouter::new(Arc::new(StaticContent::build())),
        })
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }

    #[tokio::test]
    async fn test_index_renders_billing() {
        let response = index(HeaderMap::new(), State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(r#"data-tab="tab-cobranca">"#));
        assert!(body.contains("Índice de Recebimento dos Títulos"));
    }

    #[tokio::test]
    async fn test_tab_fragment_for_logistics() {
        let response = tab_fragment(Path("tab-logistica".to_string()), HeaderMap::new(), State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], HTML_CONTENT_TYPE);

        let body = body_text(response).await;
        assert!(body.contains("Total de Entregas"));
        assert!(body.contains("R$12,45"));
        assert!(!body.contains("Total de Licenças"));
    }

    #[tokio::test]
    async fn test_tab_fragment_is_stable() {
        let state = state();
        let first = body_text(tab_fragment(Path("tab-cobranca".to_string()), HeaderMap::new(), State(state.clone())).await).await;
        let second = body_text(tab_fragment(Path("tab-cobranca".to_string()), HeaderMap::new(), State(state)).await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_tab_is_not_found() {
        let response = tab_fragment(Path("tab-rh".to_string()), HeaderMap::new(), State(state())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("unknown tab `tab-rh`"));
    }

    #[tokio::test]
    async fn test_tab_fragment_json() {
        let response = tab_fragment_json(Path("tab-compliance".to_string()), HeaderMap::new(), State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(doc["tab"], "tab-compliance");
        assert_eq!(doc["rows"][0]["columns"][0]["widgets"][0]["figure"]["data"][0]["value"], 85.0);
    }

    #[tokio::test]
    async fn test_unknown_tab_json_error() {
        let response = tab_fragment_json(Path("nope".to_string()), HeaderMap::new(), State(state())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let doc: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(doc["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn test_brotli_negotiation() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, br"));

        let response = tab_fragment(Path("tab-compliance".to_string()), headers, State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }
}
