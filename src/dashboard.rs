//! Student and instructor dashboard summaries.

use serde::Serialize;

use crate::catalog::{Catalog, Course, Instructor, Student};
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct EnrolledCourse {
    pub course_id: String,
    pub title: String,
    pub instructor: String,
    pub progress: u8,
    pub last_accessed: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentDashboard {
    pub name: String,
    pub enrolled: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub certificates: usize,
    pub average_progress: f64,
    pub courses: Vec<EnrolledCourse>,
}

impl StudentDashboard {
    /// Every enrollment must reference a course in `catalog`.
    pub fn build(student: &Student, catalog: &Catalog) -> Result<Self> {
        let courses = student
            .enrollments
            .iter()
            .map(|enrollment| {
                let course = catalog.require(&enrollment.course_id)?;
                Ok(EnrolledCourse {
                    course_id: course.id.clone(),
                    title: course.title.clone(),
                    instructor: course.instructor.clone(),
                    progress: enrollment.progress,
                    last_accessed: enrollment.last_accessed.clone(),
                    completed: enrollment.is_completed(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let completed = courses.iter().filter(|c| c.completed).count();
        let average_progress = if courses.is_empty() {
            0.0
        } else {
            let sum: f64 = courses.iter().map(|c| f64::from(c.progress)).sum();
            #[allow(clippy::cast_precision_loss)]
            let count = courses.len() as f64;
            sum / count
        };

        Ok(Self {
            name: student.name.clone(),
            enrolled: courses.len(),
            completed,
            in_progress: courses.len() - completed,
            certificates: completed,
            average_progress,
            courses,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstructorDashboard {
    pub name: String,
    pub total_courses: usize,
    pub total_students: u64,
    pub total_reviews: u64,
    pub average_rating: f64,
    pub total_earnings: f64,
    pub courses: Vec<Course>,
}

impl InstructorDashboard {
    pub fn build(instructor: &Instructor, catalog: &Catalog) -> Result<Self> {
        let courses = instructor
            .courses
            .iter()
            .map(|id| catalog.require(id).cloned())
            .collect::<Result<Vec<_>>>()?;

        let average_rating = if courses.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = courses.len() as f64;
            courses.iter().map(|c| c.rating).sum::<f64>() / count
        };

        Ok(Self {
            name: instructor.name.clone(),
            total_courses: courses.len(),
            total_students: courses.iter().map(|c| c.students_count).sum(),
            total_reviews: courses.iter().map(|c| c.review_count).sum(),
            average_rating,
            total_earnings: instructor.total_earnings,
            courses,
        })
    }
}
