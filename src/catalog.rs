/// A purchasable course as listed in the storefront
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: String,
}

impl Course {
    fn new(id: u64, name: &str, description: &str, image: &str, price: &str) -> Self {
        Course {
            id,
            name: name.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            price: price.to_string(),
        }
    }
}

/// The fixed course catalog, in display order
pub fn catalog() -> Vec<Course> {
    vec![
        Course::new(
            1,
            "Web Development",
            "Learn to build websites",
            "/images/web-dev.jpg",
            "Tkn 10",
        ),
        Course::new(
            2,
            "Blockchain Basics",
            "Understand the fundamentals of blockchain",
            "/images/blockchain.jpg",
            "Tkn 50",
        ),
        Course::new(
            3,
            "Data Science",
            "Analyze data with Python",
            "/images/data-science.jpg",
            "Tkn 20",
        ),
        Course::new(
            4,
            "Digital Marketing",
            "Grow your business online",
            "/images/digital-marketing.jpg",
            "Tkn 30",
        ),
    ]
}

/// Look up a catalog course by id
pub fn find_course(id: u64) -> Option<Course> {
    catalog().into_iter().find(|course| course.id == id)
}

/// Keep courses whose name contains `query`, ignoring case.
///
/// Order is preserved and an empty query keeps everything.
pub fn filter_courses(courses: &[Course], query: &str) -> Vec<Course> {
    let needle = query.to_lowercase();
    courses
        .iter()
        .filter(|course| course.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_catalog_has_four_courses_in_order() {
        let courses = catalog();
        assert_eq!(courses.len(), 4);
        assert_eq!(
            courses.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(courses[1].price, "Tkn 50");
        assert_eq!(courses[2].image, "/images/data-science.jpg");
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let courses = catalog();
        assert_eq!(filter_courses(&courses, ""), courses);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let courses = catalog();
        assert_eq!(
            names(&filter_courses(&courses, "DATA")),
            vec!["Data Science"]
        );
        assert_eq!(
            names(&filter_courses(&courses, "block")),
            vec!["Blockchain Basics"]
        );
    }

    #[test]
    fn test_filter_matches_substrings_and_keeps_order() {
        let courses = catalog();
        assert_eq!(
            names(&filter_courses(&courses, "ment")),
            vec!["Web Development"]
        );
        assert_eq!(
            names(&filter_courses(&courses, "i")),
            vec!["Blockchain Basics", "Data Science", "Digital Marketing"]
        );
    }

    #[test]
    fn test_filter_only_looks_at_names() {
        let courses = catalog();
        // "python" is only in a description
        assert!(filter_courses(&courses, "python").is_empty());
    }

    #[test]
    fn test_find_course() {
        assert_eq!(find_course(3).map(|c| c.name), Some("Data Science".to_string()));
        assert!(find_course(99).is_none());
    }
}
