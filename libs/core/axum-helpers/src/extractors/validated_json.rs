//! JSON extractor with automatic validation using the validator crate.

use crate::{
    Outcome,
    errors::{AppError, ErrorCode},
};
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor with automatic validation.
///
/// Malformed JSON is rejected through [`AppError::JsonExtractorRejection`].
/// Validation failures become a 400 with one `"field: message"` entry per
/// failed rule, sorted by field name.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateCustomer {
///     #[validate(length(min = 2, max = 120))]
///     name: String,
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn register(ValidatedJson(payload): ValidatedJson<CreateCustomer>) -> String {
///     format!("Registering: {}", payload.name)
/// }
///
/// let app = Router::new().route("/customers", post(register));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate().map_err(|e| {
            tracing::info!(
                error_code = ErrorCode::ValidationError.code(),
                "Request validation failed: {}",
                e
            );
            match Outcome::<()>::fail_all(validation_messages(&e), 400) {
                Ok(outcome) => outcome.into_response(),
                Err(e) => AppError::from(e).into_response(),
            }
        })?;

        Ok(ValidatedJson(data))
    }
}

/// Flatten validator errors into `"field: message"` strings, sorted by field.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors
                .iter()
                .map(|err| match &err.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, err.code),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
