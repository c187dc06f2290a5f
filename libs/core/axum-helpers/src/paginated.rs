use axum::{
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use pagination::{PAGINATION_HEADER, PagedSlice};
use serde::Serialize;

use crate::Outcome;

/// Renders a paged outcome and adds the `X-Pagination` header on success.
///
/// The body is whatever the inner outcome renders, normally the JSON array of
/// the page's items.
#[derive(Debug)]
pub struct Paginated<T>(pub Outcome<PagedSlice<T>>);

impl<T> From<Outcome<PagedSlice<T>>> for Paginated<T> {
    fn from(outcome: Outcome<PagedSlice<T>>) -> Self {
        Self(outcome)
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        let metadata = self.0.value().map(PagedSlice::metadata);
        let mut response = self.0.into_response();

        let Some(metadata) = metadata else {
            return response;
        };
        if !response.status().is_success() {
            return response;
        }

        match metadata
            .to_header_json()
            .map_err(|e| e.to_string())
            .and_then(|json| HeaderValue::from_str(&json).map_err(|e| e.to_string()))
        {
            Ok(value) => {
                response
                    .headers_mut()
                    .insert(HeaderName::from_static("x-pagination"), value);
            }
            Err(e) => tracing::warn!("Could not build {} header: {}", PAGINATION_HEADER, e),
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use pagination::PageParams;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_adds_pagination_header() {
        let page = PagedSlice::paginate(1..=55, &PageParams::new(2, 20));
        let response = Paginated(Outcome::ok(page).unwrap()).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let header = response.headers()[PAGINATION_HEADER].to_str().unwrap().to_owned();
        let metadata: Value = serde_json::from_str(&header).unwrap();
        assert_eq!(
            metadata,
            json!({
                "totalCount": 55,
                "pageSize": 20,
                "currentPage": 2,
                "totalPages": 3,
                "hasNext": false,
                "hasPrevious": true
            })
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let items: Vec<u32> = serde_json::from_slice(&body).unwrap();
        assert_eq!(items, (21..=40).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_failure_has_no_pagination_header() {
        let response = Paginated::<u8>(Outcome::bad_request("pageSize must be a number")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(PAGINATION_HEADER).is_none());
    }
}
