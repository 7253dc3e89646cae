use serde::{Deserialize, Serialize};

/// Server-derived progress snapshot for one enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CourseProgress {
    pub course_id: i64,
    #[serde(default)]
    pub total_lessons: i64,
    #[serde(default)]
    pub completed_lessons: Vec<i64>,
}

impl CourseProgress {
    /// Completion as a rounded percentage. A course with no lessons is 0%
    /// complete, not a division by zero.
    pub fn completion_percent(&self) -> u32 {
        if self.total_lessons <= 0 {
            return 0;
        }
        let done = self.completed_lessons.len() as f64;
        ((done * 100.0) / self.total_lessons as f64).round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.total_lessons > 0 && self.completion_percent() >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(total: i64, completed: &[i64]) -> CourseProgress {
        CourseProgress {
            course_id: 9,
            total_lessons: total,
            completed_lessons: completed.to_vec(),
        }
    }

    #[test]
    fn zero_lessons_is_zero_percent() {
        assert_eq!(progress(0, &[]).completion_percent(), 0);
        assert!(!progress(0, &[]).is_complete());
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(progress(3, &[1]).completion_percent(), 33);
        assert_eq!(progress(3, &[1, 2]).completion_percent(), 67);
        assert_eq!(progress(6, &[1]).completion_percent(), 17);
    }

    #[test]
    fn all_lessons_done_is_complete() {
        let p = progress(2, &[4, 5]);
        assert_eq!(p.completion_percent(), 100);
        assert!(p.is_complete());
    }

    #[test]
    fn snapshot_deserializes_from_wire_shape() {
        let p: CourseProgress = serde_json::from_str(
            r#"{"course_id":9,"total_lessons":4,"completed_lessons":[5,7]}"#,
        )
        .unwrap();
        assert_eq!(p.completion_percent(), 50);
        assert!(p.completed_lessons.contains(&5));
    }
}
