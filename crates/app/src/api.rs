use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AccountInfo, AckMessage, AdminStats, ApiError, CompleteLessonRequest, Course, CourseProgress,
    EnrollRequest, Lesson, LoginResponse, NewCourse, NewLesson, RegisterRequest, UserAccount,
};

use crate::session::use_session;

/// Base URL used when no override is baked in at build time.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Resolve the API base address: build-time environment override first,
/// fixed default otherwise. Trailing slashes are trimmed so path joining
/// stays uniform.
fn api_base() -> String {
    option_env!("MICROCOURSES_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// The single place requests are assembled.
///
/// Every call attaches `Authorization: Bearer <token>` when the client was
/// built with a session token and omits the header otherwise. No call site
/// constructs its own auth header.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: api_base(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self
            .authorize(req)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::error!("request failed ({status}): {}", err.message);
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        response.json().await.map_err(ApiError::decode)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        response.json().await.map_err(ApiError::decode)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        response.json().await.map_err(ApiError::decode)
    }

    // ── Auth ──

    pub async fn register(&self, request: &RegisterRequest) -> Result<AccountInfo, ApiError> {
        self.post_json("/users/register", request).await
    }

    /// The login endpoint expects an OAuth2 password form, not JSON.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let form = [("username", email), ("password", password)];
        let response = self
            .send(self.http.post(self.url("/login/")).form(&form))
            .await?;
        response.json().await.map_err(ApiError::decode)
    }

    // ── Courses & lessons ──

    pub async fn approved_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("/courses/approved").await
    }

    pub async fn my_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("/creator/my-courses").await
    }

    pub async fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError> {
        self.post_json("/creator/courses", course).await
    }

    pub async fn add_lesson(&self, lesson: &NewLesson) -> Result<Lesson, ApiError> {
        self.post_json("/lessons/", lesson).await
    }

    pub async fn lessons_for_course(&self, course_id: i64) -> Result<Vec<Lesson>, ApiError> {
        self.get_json(&format!("/lessons/course/{course_id}")).await
    }

    // ── Enrollment & progress ──

    pub async fn enrollments(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("/students/enrollments").await
    }

    pub async fn enroll(&self, course_id: i64) -> Result<AckMessage, ApiError> {
        self.post_json("/students/enroll", &EnrollRequest { course_id })
            .await
    }

    pub async fn complete_lesson(&self, lesson_id: i64) -> Result<AckMessage, ApiError> {
        self.post_json("/students/complete-lesson", &CompleteLessonRequest { lesson_id })
            .await
    }

    pub async fn progress(&self, course_id: i64) -> Result<CourseProgress, ApiError> {
        self.get_json(&format!("/students/progress/{course_id}"))
            .await
    }

    /// Certificate PDF as raw bytes.
    pub async fn certificate(&self, course_id: i64) -> Result<Vec<u8>, ApiError> {
        let response = self
            .send(self.http.get(self.url(&format!("/students/certificate/{course_id}"))))
            .await?;
        let bytes = response.bytes().await.map_err(ApiError::decode)?;
        Ok(bytes.to_vec())
    }

    // ── Administration ──

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json("/admin/stats").await
    }

    pub async fn pending_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("/admin/review/courses").await
    }

    pub async fn approve_course(&self, course_id: i64) -> Result<AckMessage, ApiError> {
        self.put_json(
            &format!("/admin/approve/{course_id}"),
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.get_json("/admin/users").await
    }

    pub async fn update_user_role(
        &self,
        user_id: i64,
        role: &str,
    ) -> Result<AckMessage, ApiError> {
        self.put_json(
            &format!("/admin/users/{user_id}"),
            &serde_json::json!({ "role": role }),
        )
        .await
    }
}

/// Hook: an API client carrying the current session's token (if any).
pub fn use_api() -> ApiClient {
    let state = use_session();
    let token = state
        .current
        .read()
        .as_ref()
        .map(|session| session.token.clone());
    ApiClient::new(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joining_has_no_double_slash() {
        let client = ApiClient::new(None);
        let url = client.url("/courses/approved");
        assert!(url.ends_with("/courses/approved"));
        assert!(!url.contains("//courses"));
    }

    #[test]
    fn client_without_token_has_no_credential() {
        let client = ApiClient::new(None);
        assert!(client.token.is_none());

        let client = ApiClient::new(Some("abc".into()));
        assert_eq!(client.token.as_deref(), Some("abc"));
    }
}
