use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use super::{Fault, Outcome, ResponseShape};
use crate::errors::{ErrorCode, ErrorResponse, messages};

impl<T: Serialize> Outcome<T> {
    /// Pick the single response this outcome renders as.
    ///
    /// One attached shape is returned as is. Several shapes are merged under
    /// the first shape's status code: success bodies become a JSON array,
    /// failure `errors` lists are concatenated. Without any shape, a success
    /// falls back to 200 with the value as body and a failure to a generic 500.
    pub fn resolve(self) -> ResponseShape {
        match self {
            Self::Success { value, shapes } => {
                let mut shapes = shapes.into_iter();
                let Some(first) = shapes.next() else {
                    return fallback_success(&value);
                };
                if shapes.len() == 0 {
                    return first;
                }
                merge_success(first, shapes)
            }
            Self::Failure { faults } => {
                let mut shapes = faults.into_iter().filter_map(|fault| fault.shape).peekable();
                let Some(first) = shapes.next() else {
                    return fallback_failure();
                };
                if shapes.peek().is_none() {
                    return first;
                }
                merge_failure(first, shapes)
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let shape = self.resolve();
        let status = shape.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), body = ?shape.body(), "Request failed");
        } else if status.is_client_error() {
            tracing::info!(status = status.as_u16(), body = ?shape.body(), "Request rejected");
        }

        shape.into_response()
    }
}

fn fallback_success<T: Serialize>(value: &T) -> ResponseShape {
    tracing::warn!("Success rendered without a response annotation, defaulting to 200");

    match serde_json::to_value(value) {
        Ok(payload) => ResponseShape::Payload {
            status: StatusCode::OK,
            payload,
        },
        Err(e) => {
            tracing::error!(
                error_code = ErrorCode::InvalidResponseShape.code(),
                "Success value could not be serialized: {}",
                e
            );
            ResponseShape::errors(StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
        }
    }
}

fn fallback_failure() -> ResponseShape {
    tracing::warn!(
        error_code = ErrorCode::MissingResponseShape.code(),
        "Failure rendered without a response annotation, defaulting to 500"
    );

    ResponseShape::errors(
        StatusCode::INTERNAL_SERVER_ERROR,
        messages::NO_VALID_RESPONSE,
    )
}

fn merge_success(
    first: ResponseShape,
    rest: impl Iterator<Item = ResponseShape>,
) -> ResponseShape {
    let status = first.status();
    if status == StatusCode::NO_CONTENT {
        return ResponseShape::Empty { status };
    }

    let location = first.location().map(str::to_owned);
    let payload = Value::Array(
        std::iter::once(first)
            .chain(rest)
            .filter_map(ResponseShape::into_body)
            .collect(),
    );

    match location {
        Some(location) => ResponseShape::Redirect {
            status,
            location,
            payload: Some(payload),
        },
        None => ResponseShape::Payload { status, payload },
    }
}

fn merge_failure(
    first: ResponseShape,
    rest: impl Iterator<Item = ResponseShape>,
) -> ResponseShape {
    let status = first.status();

    let mut errors = Vec::new();
    for shape in std::iter::once(first).chain(rest) {
        match shape {
            ResponseShape::Errors { body, .. } => errors.extend(body.errors),
            other => tracing::debug!(
                status = other.status().as_u16(),
                "Skipping failure shape without an errors body while merging"
            ),
        }
    }

    ResponseShape::Errors {
        status,
        body: ErrorResponse::new(errors),
    }
}

impl From<Fault> for Outcome<()> {
    fn from(fault: Fault) -> Self {
        Outcome::fail_with(vec![fault])
    }
}
