use serde::{Deserialize, Serialize};

/// A lesson belonging to exactly one course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// `POST /lessons/` request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewLesson {
    pub course_id: i64,
    pub title: String,
    pub content: String,
}

/// `POST /students/enroll` request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrollRequest {
    pub course_id: i64,
}

/// `POST /students/complete-lesson` request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompleteLessonRequest {
    pub lesson_id: i64,
}
