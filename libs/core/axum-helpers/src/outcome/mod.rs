//! Success-or-failure results that know which HTTP response they map to.
//!
//! Services build an [`Outcome`] through the factory functions below, which
//! attach a [`ResponseShape`] resolved from a status code. The HTTP boundary
//! renders it through [`Outcome::resolve`] or `IntoResponse`.
//!
//! ```rust
//! use axum_helpers::Outcome;
//! use axum::http::StatusCode;
//!
//! let outcome = Outcome::<()>::fail_all(["CPF invalid", "Email invalid"], 400).unwrap();
//! let shape = outcome.resolve();
//! assert_eq!(shape.status(), StatusCode::BAD_REQUEST);
//! ```

mod resolve;
mod shape;

pub use shape::{InvalidArgument, ResponseShape};

use axum::http::StatusCode;
use serde::Serialize;

/// A single failure with its own response annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    message: String,
    shape: Option<ResponseShape>,
}

impl Fault {
    /// An unannotated fault.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shape: None,
        }
    }

    /// Attach the failure shape for `status`, replacing any previous one.
    pub fn with_status(mut self, status: u16) -> Result<Self, InvalidArgument> {
        self.shape = Some(ResponseShape::failure(status, &self.message)?);
        Ok(self)
    }

    fn with_errors(message: impl Into<String>, status: StatusCode) -> Self {
        let message = message.into();
        let shape = ResponseShape::errors(status, &message);
        Self {
            message,
            shape: Some(shape),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn shape(&self) -> Option<&ResponseShape> {
        self.shape.as_ref()
    }
}

/// Result of a service operation, carrying the response it should render as.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success {
        value: T,
        /// Empty when unannotated, one entry normally, several after [`Outcome::merge`].
        shapes: Vec<ResponseShape>,
    },
    Failure { faults: Vec<Fault> },
}

impl<T> Outcome<T> {
    /// A success with no response annotation; renders as a generic 200.
    pub fn success(value: T) -> Self {
        Self::Success {
            value,
            shapes: Vec::new(),
        }
    }

    /// Failure with one fault annotated for `status`.
    pub fn fail(message: impl Into<String>, status: u16) -> Result<Self, InvalidArgument> {
        let fault = Fault::new(message).with_status(status)?;
        Ok(Self::fail_with(vec![fault]))
    }

    /// Wrap pre-built faults verbatim, without annotating them.
    pub fn fail_with(faults: Vec<Fault>) -> Self {
        Self::Failure { faults }
    }

    /// Failure with one fault per message, each annotated for `status`.
    pub fn fail_all<I, S>(messages: I, status: u16) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let faults = messages
            .into_iter()
            .map(|message| Fault::new(message).with_status(status))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::fail_with(faults))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::fail_with(vec![Fault::with_errors(message, StatusCode::BAD_REQUEST)])
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::fail_with(vec![Fault::with_errors(message, StatusCode::NOT_FOUND)])
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::fail_with(vec![Fault::with_errors(message, StatusCode::CONFLICT)])
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::fail_with(vec![Fault::with_errors(
            message,
            StatusCode::UNPROCESSABLE_ENTITY,
        )])
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    pub fn faults(&self) -> &[Fault] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { faults } => faults,
        }
    }

    /// Every attached response shape, in attachment order.
    pub fn shapes(&self) -> Vec<&ResponseShape> {
        match self {
            Self::Success { shapes, .. } => shapes.iter().collect(),
            Self::Failure { faults } => faults.iter().filter_map(Fault::shape).collect(),
        }
    }

    pub fn into_result(self) -> Result<T, Vec<Fault>> {
        match self {
            Self::Success { value, .. } => Ok(value),
            Self::Failure { faults } => Err(faults),
        }
    }

    /// Aggregate independent outcomes into one.
    ///
    /// Any failure turns the whole merge into a failure carrying every fault
    /// in order; successes are then dropped. Otherwise values and response
    /// shapes are concatenated in order.
    pub fn merge<I>(outcomes: I) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        let mut values = Vec::new();
        let mut shapes = Vec::new();
        let mut faults = Vec::new();

        for outcome in outcomes {
            match outcome {
                Self::Success {
                    value,
                    shapes: success_shapes,
                } => {
                    values.push(value);
                    shapes.extend(success_shapes);
                }
                Self::Failure {
                    faults: outcome_faults,
                } => faults.extend(outcome_faults),
            }
        }

        if faults.is_empty() {
            Outcome::Success {
                value: values,
                shapes,
            }
        } else {
            Outcome::Failure { faults }
        }
    }
}

impl<T: Serialize> Outcome<T> {
    /// Success rendered as 200 with the value as body.
    pub fn ok(value: T) -> Result<Self, InvalidArgument> {
        Self::ok_with(value, 200, None)
    }

    /// Success annotated with the success shape for `status`.
    ///
    /// `location` is required for 201 and 202 and ignored otherwise.
    pub fn ok_with(value: T, status: u16, location: Option<&str>) -> Result<Self, InvalidArgument> {
        let payload = serde_json::to_value(&value)?;
        let shape = ResponseShape::success(status, payload, location)?;

        Ok(Self::Success {
            value,
            shapes: vec![shape],
        })
    }

    pub fn created(value: T, location: &str) -> Result<Self, InvalidArgument> {
        Self::ok_with(value, 201, Some(location))
    }

    /// Re-annotate with `status`, replacing every previously attached shape.
    ///
    /// A success takes the success shape, each fault of a failure takes the
    /// failure shape.
    pub fn with_status(self, status: u16, location: Option<&str>) -> Result<Self, InvalidArgument> {
        match self {
            Self::Success { value, .. } => Self::ok_with(value, status, location),
            Self::Failure { faults } => {
                let faults = faults
                    .into_iter()
                    .map(|fault| fault.with_status(status))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Failure { faults })
            }
        }
    }
}

impl Outcome<()> {
    pub fn no_content() -> Self {
        Self::Success {
            value: (),
            shapes: vec![ResponseShape::Empty {
                status: StatusCode::NO_CONTENT,
            }],
        }
    }
}
