use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

use crate::errors::{AppError, ErrorResponse};

/// Programming error raised while annotating an outcome.
///
/// These are bugs in the calling handler or service, never request errors.
/// They surface as a generic 500 through [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("{0} is not a success status code (200-299)")]
    SuccessStatus(u16),

    #[error("{0} is not a failure status code (400-599)")]
    FailureStatus(u16),

    #[error("status code {0} requires a non-empty location")]
    MissingLocation(u16),

    #[error("location {0:?} is not a valid header value")]
    Location(String),

    #[error("payload could not be serialized: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for InvalidArgument {
    fn from(error: serde_json::Error) -> Self {
        InvalidArgument::Payload(error.to_string())
    }
}

/// The HTTP response an outcome intends to produce.
///
/// Attached to successes and faults when they are built, and only read when
/// the outcome is rendered at the HTTP boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// 201/202 with a `Location` header.
    Redirect {
        status: StatusCode,
        location: String,
        payload: Option<Value>,
    },
    /// A JSON body with any status code.
    Payload { status: StatusCode, payload: Value },
    /// `{"errors": [...]}`
    Errors {
        status: StatusCode,
        body: ErrorResponse,
    },
    /// Status code only.
    Empty { status: StatusCode },
}

impl ResponseShape {
    /// Resolve the success shape for `status`.
    ///
    /// | status | shape |
    /// |---|---|
    /// | 200 | `Payload`, or `Empty` when the payload is `null` |
    /// | 201, 202 | `Redirect`, `location` required |
    /// | 204 | `Empty` |
    /// | other 2xx | `Payload` |
    pub fn success(
        status: u16,
        payload: Value,
        location: Option<&str>,
    ) -> Result<Self, InvalidArgument> {
        if !(200..=299).contains(&status) {
            return Err(InvalidArgument::SuccessStatus(status));
        }
        let code = StatusCode::from_u16(status).map_err(|_| InvalidArgument::SuccessStatus(status))?;

        let shape = match status {
            200 if payload.is_null() => Self::Empty { status: code },
            201 | 202 => {
                let location = location
                    .map(str::trim)
                    .filter(|location| !location.is_empty())
                    .ok_or(InvalidArgument::MissingLocation(status))?;
                HeaderValue::from_str(location)
                    .map_err(|_| InvalidArgument::Location(location.to_owned()))?;

                Self::Redirect {
                    status: code,
                    location: location.to_owned(),
                    payload: (!payload.is_null()).then_some(payload),
                }
            }
            204 => Self::Empty { status: code },
            _ => Self::Payload {
                status: code,
                payload,
            },
        };

        Ok(shape)
    }

    /// Resolve the failure shape for `status`.
    ///
    /// 400, 401, 404, 409 and 422 carry `{"errors": [message]}`. Any other
    /// 4xx/5xx code carries the message itself as the JSON body.
    pub fn failure(status: u16, message: &str) -> Result<Self, InvalidArgument> {
        if !(400..=599).contains(&status) {
            return Err(InvalidArgument::FailureStatus(status));
        }
        let code = StatusCode::from_u16(status).map_err(|_| InvalidArgument::FailureStatus(status))?;

        let shape = match status {
            400 | 401 | 404 | 409 | 422 => Self::errors(code, message),
            _ => Self::Payload {
                status: code,
                payload: Value::String(message.to_owned()),
            },
        };

        Ok(shape)
    }

    pub(crate) fn errors(status: StatusCode, message: &str) -> Self {
        Self::Errors {
            status,
            body: ErrorResponse::single(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Redirect { status, .. }
            | Self::Payload { status, .. }
            | Self::Errors { status, .. }
            | Self::Empty { status } => *status,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect { location, .. } => Some(location.as_str()),
            _ => None,
        }
    }

    /// The JSON body this shape would send, if any.
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::Redirect { payload, .. } => payload.clone(),
            Self::Payload { payload, .. } => Some(payload.clone()),
            Self::Errors { body, .. } => serde_json::to_value(body).ok(),
            Self::Empty { .. } => None,
        }
    }

    pub(crate) fn into_body(self) -> Option<Value> {
        match self {
            Self::Redirect { payload, .. } => payload,
            Self::Payload { payload, .. } => Some(payload),
            Self::Errors { body, .. } => serde_json::to_value(body).ok(),
            Self::Empty { .. } => None,
        }
    }
}

impl IntoResponse for ResponseShape {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect {
                status,
                location,
                payload,
            } => {
                let location = match HeaderValue::from_str(&location) {
                    Ok(value) => value,
                    Err(_) => {
                        return AppError::from(InvalidArgument::Location(location)).into_response();
                    }
                };

                match payload {
                    Some(payload) => {
                        (status, [(header::LOCATION, location)], Json(payload)).into_response()
                    }
                    None => (status, [(header::LOCATION, location)]).into_response(),
                }
            }
            Self::Payload { status, payload } => (status, Json(payload)).into_response(),
            Self::Errors { status, body } => (status, Json(body)).into_response(),
            Self::Empty { status } => status.into_response(),
        }
    }
}
