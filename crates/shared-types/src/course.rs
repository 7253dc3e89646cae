use serde::{Deserialize, Serialize};

/// Review status of a course.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CourseStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CourseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::Pending => "Pending",
            CourseStatus::Approved => "Approved",
            CourseStatus::Rejected => "Rejected",
        }
    }
}

/// A course as returned by the backend.
///
/// Different routes disagree about the shape: some return a `status` string,
/// others only an `is_approved` flag, and the enrollment listing omits both
/// `category` and any status. Every field beyond id/title is therefore
/// tolerant of absence and [`Course::status`] reconciles the two signals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}

impl Course {
    /// Effective review status: an explicit `status` string wins, then the
    /// `is_approved` flag, then `Pending`.
    pub fn status(&self) -> CourseStatus {
        if let Some(s) = &self.status {
            return match s.to_lowercase().as_str() {
                "approved" => CourseStatus::Approved,
                "rejected" => CourseStatus::Rejected,
                _ => CourseStatus::Pending,
            };
        }
        match self.is_approved {
            Some(true) => CourseStatus::Approved,
            _ => CourseStatus::Pending,
        }
    }
}

/// `POST /creator/courses` request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(status: Option<&str>, is_approved: Option<bool>) -> Course {
        Course {
            id: 1,
            title: "Rust Basics".into(),
            description: String::new(),
            category: None,
            status: status.map(str::to_string),
            is_approved,
        }
    }

    #[test]
    fn explicit_status_string_wins() {
        assert_eq!(
            course(Some("Rejected"), Some(true)).status(),
            CourseStatus::Rejected
        );
        assert_eq!(
            course(Some("approved"), Some(false)).status(),
            CourseStatus::Approved
        );
    }

    #[test]
    fn falls_back_to_approval_flag() {
        assert_eq!(course(None, Some(true)).status(), CourseStatus::Approved);
        assert_eq!(course(None, Some(false)).status(), CourseStatus::Pending);
    }

    #[test]
    fn defaults_to_pending() {
        assert_eq!(course(None, None).status(), CourseStatus::Pending);
        assert_eq!(course(Some("weird"), None).status(), CourseStatus::Pending);
    }

    #[test]
    fn enrollment_shape_deserializes() {
        // The enrollment listing returns only these four fields.
        let c: Course = serde_json::from_str(
            r#"{"id":3,"title":"Intro","description":"d","is_approved":true}"#,
        )
        .unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(c.status(), CourseStatus::Approved);
        assert!(c.category.is_none());
    }
}
