use serde::{Deserialize, Serialize};

use crate::error::{LhError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    /// Ids of the courses this instructor teaches.
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub total_earnings: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub course_id: String,
    /// Percent complete, 0-100.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub last_accessed: String,
}

impl Enrollment {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.progress >= 100
    }
}

impl Student {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(LhError::ValidationFailed(
                "student id must be non-empty".to_string(),
            ));
        }
        if let Some(bad) = self.enrollments.iter().find(|e| e.progress > 100) {
            return Err(LhError::ValidationFailed(format!(
                "student {} has progress {} on course {}",
                self.id, bad.progress, bad.course_id
            )));
        }
        Ok(())
    }
}

impl Instructor {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(LhError::ValidationFailed(
                "instructor id must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}
