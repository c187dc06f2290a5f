//! Standard messages for consistent error responses.

pub const VALIDATION_FAILED: &str = "Request validation failed.";
pub const INVALID_UUID: &str = "Invalid UUID format.";
pub const INVALID_JSON: &str = "Invalid JSON format.";
pub const INVALID_QUERY: &str = "Invalid query string.";
pub const BAD_REQUEST: &str = "The request could not be processed.";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found.";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource.";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred.";
pub const SERVICE_UNAVAILABLE: &str = "Service is temporarily unavailable.";

/// Body of the generic 500 sent when a failed outcome carries no status code.
pub const NO_VALID_RESPONSE: &str = "No valid response could be found";
