//! Catalog domain module.
//!
//! Models for the static university catalog (colleges, campuses, courses,
//! announcements), the source trait for obtaining the data, and pure
//! filter helpers. The data itself lives in the infrastructure layer.

mod model;
mod source;

pub use model::{Announcement, AnnouncementCategory, Campus, College, Course};
pub use source::CatalogSource;

/// Filters courses down to one college, preserving catalog order.
pub fn courses_for_college(courses: &[Course], college: College) -> Vec<Course> {
    courses
        .iter()
        .filter(|course| course.college == college)
        .cloned()
        .collect()
}

/// Filters announcements down to one category, preserving input order.
pub fn announcements_in_category(
    announcements: &[Announcement],
    category: AnnouncementCategory,
) -> Vec<Announcement> {
    announcements
        .iter()
        .filter(|announcement| announcement.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, college: College) -> Course {
        Course {
            id: code.to_lowercase(),
            code: code.to_string(),
            title: format!("{code} title"),
            college,
            description: String::new(),
            credits: 3,
        }
    }

    #[test]
    fn test_courses_filter_preserves_order() {
        let courses = vec![
            course("IT 101", College::Computing),
            course("BIO 101", College::ArtsAndSciences),
            course("CMPSC 146", College::Computing),
        ];

        let filtered = courses_for_college(&courses, College::Computing);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].code, "IT 101");
        assert_eq!(filtered[1].code, "CMPSC 146");
    }

    #[test]
    fn test_empty_filter_result_for_uncovered_college() {
        let courses = vec![course("LAW 101", College::Law)];
        assert!(courses_for_college(&courses, College::Medicine).is_empty());
    }
}
