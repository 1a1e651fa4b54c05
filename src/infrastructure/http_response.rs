// HTTP response utilities with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use tokio::io::AsyncReadExt;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Whether the client advertised Brotli in `Accept-Encoding` with a non-zero quality
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(is_acceptable_brotli))
        .unwrap_or(false)
}

fn is_acceptable_brotli(coding: &str) -> bool {
    let mut parts = coding.split(';').map(str::trim);
    if parts.next() != Some("br") {
        return false;
    }

    // Missing q means 1; an unparseable q is treated as a refusal
    match parts.find_map(|p| p.strip_prefix("q=")) {
        Some(q) => q.parse::<f32>().map(|q| q > 0.0).unwrap_or(false),
        None => true,
    }
}

/// Build a 200 response, compressing the body with Brotli when asked to
pub async fn encoded_response(
    body: Vec<u8>,
    content_type: &'static str,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let (body_bytes, content_encoding) = if compress {
        let original_len = body.len();
        let cursor = std::io::Cursor::new(body);
        let mut encoder = BrotliEncoder::new(cursor);
        let mut compressed = Vec::new();
        encoder.read_to_end(&mut compressed).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!("Compressed response: {} -> {} bytes", original_len, compressed.len());
        (compressed, Some("br"))
    } else {
        (body, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()))
        .header(header::VARY, "accept-encoding");

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_compression::tokio::bufread::BrotliDecoder;

    fn headers_with(encoding: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_str(encoding).unwrap());
        headers
    }

    #[test]
    fn test_accepts_brotli() {
        assert!(accepts_brotli(&headers_with("gzip, deflate, br")));
        assert!(accepts_brotli(&headers_with("br;q=1.0")));
        assert!(!accepts_brotli(&headers_with("gzip, deflate")));
        assert!(!accepts_brotli(&headers_with("brotli-ish")));
        assert!(!accepts_brotli(&HeaderMap::new()));
    }

    #[test]
    fn test_brotli_refused_with_zero_quality() {
        assert!(!accepts_brotli(&headers_with("gzip, br;q=0")));
        assert!(!accepts_brotli(&headers_with("br; q=0.0, gzip")));
        assert!(!accepts_brotli(&headers_with("br;q=nope")));
        assert!(accepts_brotli(&headers_with("gzip;q=0, br;q=0.5")));
    }

    #[tokio::test]
    async fn test_plain_response() {
        let response = encoded_response(b"ok".to_vec(), HTML_CONTENT_TYPE, false).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "2");
        assert_eq!(response.headers()[header::CONTENT_TYPE], HTML_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_brotli_response_round_trips() {
        let payload = "<div>Licenças</div>".repeat(50);
        let response = encoded_response(payload.clone().into_bytes(), HTML_CONTENT_TYPE, true)
            .await
            .unwrap();
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");

        let compressed = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(compressed.len() < payload.len());

        let mut decoder = BrotliDecoder::new(std::io::Cursor::new(compressed.to_vec()));
        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).await.unwrap();
        assert_eq!(decoded, payload);
    }
}
