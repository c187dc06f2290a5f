use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Parse configured origins into header values, skipping blank entries.
pub fn parse_origins<S: AsRef<str>>(origins: &[S]) -> Result<Vec<HeaderValue>, String> {
    origins
        .iter()
        .map(|origin| origin.as_ref().trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| format!("Invalid CORS origin '{}': {}", origin, e))
        })
        .collect()
}

/// CORS layer for the storefront clients.
///
/// Exposes the `X-Pagination` header so browsers can read page counters.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::LOCATION, header::HeaderName::from_static("x-pagination")])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(&["http://localhost:3000", " ", "https://shop.example.com "]).unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://shop.example.com");
    }

    #[test]
    fn test_parse_origins_rejects_invalid_values() {
        let err = parse_origins(&["http://ok", "bad\norigin"]).unwrap_err();
        assert!(err.contains("bad"));
    }
}
