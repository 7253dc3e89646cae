use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of API failures, derived from the HTTP status code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response (DNS, connection, timeout).
    Network,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    Server,
    /// Anything else — unexpected status, unparseable body.
    Unexpected,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorKind::BadRequest,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            422 => ApiErrorKind::Validation,
            500..=599 => ApiErrorKind::Server,
            _ => ApiErrorKind::Unexpected,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiErrorKind::Network => "Network",
            ApiErrorKind::BadRequest => "BadRequest",
            ApiErrorKind::Unauthorized => "Unauthorized",
            ApiErrorKind::Forbidden => "Forbidden",
            ApiErrorKind::NotFound => "NotFound",
            ApiErrorKind::Validation => "Validation",
            ApiErrorKind::Server => "Server",
            ApiErrorKind::Unexpected => "Unexpected",
        };
        write!(f, "{name}")
    }
}

/// Structured failure returned by every API client call.
///
/// `message` is always presentable to the user; when the backend supplied a
/// `detail` field it becomes the message, otherwise a generic fallback is
/// used and the raw cause is kept out of the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// HTTP status code when a response was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

impl ApiError {
    /// Build from a non-2xx response. The body is searched for the backend's
    /// `{"detail": ...}` payload; when absent or unparseable the message
    /// falls back to a generic one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = Self::detail_from_body(body)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Self {
            kind: ApiErrorKind::from_status(status),
            message,
            status: Some(status),
        }
    }

    /// A transport-level failure: no response was received at all.
    pub fn network(cause: impl fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: format!("Could not reach the server: {cause}"),
            status: None,
        }
    }

    /// A response arrived but its body did not match the expected shape.
    pub fn decode(cause: impl fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Unexpected,
            message: format!("Unexpected response from the server: {cause}"),
            status: None,
        }
    }

    /// Extract the `detail` field from an error body.
    ///
    /// The backend replies with `{"detail": "..."}` for most failures and
    /// `{"detail": [{"msg": "...", ...}, ...]}` for validation errors; the
    /// first message wins in the latter case.
    pub fn detail_from_body(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        match value.get("detail")? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detail_string_becomes_message() {
        let err = ApiError::from_response(400, r#"{"detail":"Already enrolled in this course"}"#);
        assert_eq!(err.kind, ApiErrorKind::BadRequest);
        assert_eq!(err.message, "Already enrolled in this course");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn validation_detail_array_takes_first_msg() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"value_error"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.message, "field required");
    }

    #[test]
    fn garbage_body_falls_back_to_generic_message() {
        let err = ApiError::from_response(500, "<html>Internal Server Error</html>");
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn empty_detail_falls_back_to_generic_message() {
        let err = ApiError::from_response(403, r#"{"detail":""}"#);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(302), ApiErrorKind::Unexpected);
    }

    #[test]
    fn network_error_has_no_status() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert_eq!(err.status, None);
        assert!(err.message.contains("connection refused"));
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = ApiError::from_response(404, r#"{"detail":"Course not found"}"#);
        assert_eq!(format!("{err}"), "NotFound: Course not found");
    }

    #[test]
    fn unauthorized_check() {
        assert!(ApiError::from_response(401, "{}").is_unauthorized());
        assert!(!ApiError::from_response(404, "{}").is_unauthorized());
    }
}
