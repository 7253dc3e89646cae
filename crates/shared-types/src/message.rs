use serde::Deserialize;

/// Message-only acknowledgment body returned by mutation endpoints
/// (enroll, complete-lesson, approve, role update).
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct AckMessage {
    #[serde(default)]
    pub message: String,
}
