use serde::{Deserialize, Serialize};

/// Platform-wide counters shown on the admin overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_courses: i64,
    #[serde(default)]
    pub approved_courses: i64,
    #[serde(default)]
    pub total_enrollments: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero() {
        let stats: AdminStats = serde_json::from_str(r#"{"total_users":12}"#).unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.total_courses, 0);
        assert_eq!(stats.total_enrollments, 0);
    }
}
