use shared_types::CourseStatus;
use shared_ui::BadgeVariant;

/// Badge color for a course's review status.
pub fn status_badge_variant(status: CourseStatus) -> BadgeVariant {
    match status {
        CourseStatus::Approved => BadgeVariant::Success,
        CourseStatus::Pending => BadgeVariant::Warning,
        CourseStatus::Rejected => BadgeVariant::Destructive,
    }
}

/// Attachment name for a downloaded certificate.
pub fn certificate_filename(course_id: i64) -> String {
    format!("Certificate_Course_{course_id}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_distinct_variants() {
        assert_eq!(
            status_badge_variant(CourseStatus::Approved),
            BadgeVariant::Success
        );
        assert_eq!(
            status_badge_variant(CourseStatus::Pending),
            BadgeVariant::Warning
        );
        assert_eq!(
            status_badge_variant(CourseStatus::Rejected),
            BadgeVariant::Destructive
        );
    }

    #[test]
    fn certificate_filename_carries_course_id() {
        assert_eq!(certificate_filename(42), "Certificate_Course_42.pdf");
    }
}
