use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LhError, Result};

/// Sentinel category that matches every course.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Sentinel level that matches every course.
pub const ALL_LEVELS: &str = "All Levels";

/// Known course categories, sentinel first.
pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Web Development",
    "Data Science",
    "Marketing",
    "Design",
    "Business",
    "Photography",
    "Music",
    "Language Learning",
];

/// A purchasable course with its curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    #[serde(default)]
    pub instructor_avatar: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default)]
    pub students_count: u64,
    pub duration: String,
    pub level: Level,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub what_you_will_learn: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub course_content: Vec<CourseSection>,
}

impl Course {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(LhError::ValidationFailed(
                "course id must be non-empty".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(LhError::ValidationFailed(format!(
                "course {} must have a title",
                self.id
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(LhError::ValidationFailed(format!(
                "course {} has invalid price {}",
                self.id, self.price
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(LhError::ValidationFailed(format!(
                "course {} rating {} outside 0-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }

    /// Whole-percent discount against the original price, if there is one.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original <= 0.0 {
            return None;
        }
        let pct = ((original - self.price) / original * 100.0).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(pct as u32)
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.course_content.len()
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.course_content.iter().map(|s| s.lessons.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSection {
    pub section: String,
    #[serde(default)]
    pub lessons: Vec<String>,
}

/// Difficulty classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LhError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LhError::ValidationFailed(format!("unknown level: {s}")))
    }
}

/// Whether `category` appears in the known category list.
#[must_use]
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES[1..].contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::course;

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("beginner".parse::<Level>().unwrap(), Level::Beginner);
        assert_eq!(" Advanced ".parse::<Level>().unwrap(), Level::Advanced);
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn level_display_matches_ui_labels() {
        assert_eq!(Level::Intermediate.to_string(), "Intermediate");
    }

    #[test]
    fn discount_is_rounded_percent() {
        let mut c = course("1", "Title", 89.99, 4.8, 100);
        c.original_price = Some(199.99);
        assert_eq!(c.discount_percent(), Some(55));
    }

    #[test]
    fn discount_absent_when_original_not_higher() {
        let mut c = course("1", "Title", 50.0, 4.0, 1);
        assert_eq!(c.discount_percent(), None);
        c.original_price = Some(40.0);
        assert_eq!(c.discount_percent(), None);
    }

    #[test]
    fn validate_rejects_bad_records() {
        let mut c = course("", "Title", 10.0, 4.0, 1);
        assert!(c.validate().is_err());
        c.id = "x".to_string();
        assert!(c.validate().is_ok());
        c.price = -1.0;
        assert!(c.validate().is_err());
        c.price = 1.0;
        c.rating = 5.5;
        assert!(c.validate().is_err());
    }

    #[test]
    fn lesson_count_sums_sections() {
        let mut c = course("1", "Title", 10.0, 4.0, 1);
        c.course_content = vec![
            CourseSection {
                section: "A".to_string(),
                lessons: vec!["a1".to_string(), "a2".to_string()],
            },
            CourseSection {
                section: "B".to_string(),
                lessons: vec!["b1".to_string()],
            },
        ];
        assert_eq!(c.section_count(), 2);
        assert_eq!(c.lesson_count(), 3);
    }

    #[test]
    fn sentinel_is_not_a_known_category() {
        assert!(is_known_category("Design"));
        assert!(!is_known_category(ALL_CATEGORIES));
        assert!(!is_known_category("Cooking"));
    }
}
