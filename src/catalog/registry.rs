use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::profiles::{Instructor, Student};
use super::query::{CourseQuery, query};
use super::types::{CATEGORIES, Course, is_known_category};
use crate::error::{LhError, Result};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// In-memory course catalog, kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
    instructors: Vec<Instructor>,
    students: Vec<Student>,
}

/// TOML layout of a catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDoc {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    #[serde(default)]
    pub students: Vec<Student>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Result<Self> {
        let mut catalog = Self::default();
        for course in courses {
            catalog.insert(course)?;
        }

        let unlisted = catalog.unlisted_categories();
        if !unlisted.is_empty() {
            warn!(target: "catalog", categories = ?unlisted, "courses use unlisted categories");
        }
        debug!(target: "catalog", courses = catalog.courses.len(), "catalog built");
        Ok(catalog)
    }

    fn insert(&mut self, course: Course) -> Result<()> {
        course.validate()?;
        if self.index.contains_key(&course.id) {
            return Err(LhError::ValidationFailed(format!(
                "duplicate course id: {}",
                course.id
            )));
        }
        self.index.insert(course.id.clone(), self.courses.len());
        self.courses.push(course);
        Ok(())
    }

    pub fn with_profiles(
        mut self,
        instructors: Vec<Instructor>,
        students: Vec<Student>,
    ) -> Result<Self> {
        for instructor in &instructors {
            instructor.validate()?;
        }
        for student in &students {
            student.validate()?;
        }
        self.instructors = instructors;
        self.students = students;
        Ok(self)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG, "built-in catalog")
    }

    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self> {
        let doc: CatalogDoc = toml::from_str(raw)
            .map_err(|err| LhError::Data(format!("parse {origin}: {err}")))?;
        Self::from_doc(doc)
    }

    pub fn from_doc(doc: CatalogDoc) -> Result<Self> {
        Self::new(doc.courses)?.with_profiles(doc.instructors, doc.students)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| LhError::Data(format!("read catalog {}: {err}", path.display())))?;
        Self::from_toml_str(&raw, &path.display().to_string())
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&pos| &self.courses[pos])
    }

    /// Like [`Catalog::get`], but a missing id is a `CourseNotFound` error.
    pub fn require(&self, id: &str) -> Result<&Course> {
        self.get(id)
            .ok_or_else(|| LhError::CourseNotFound(id.to_string()))
    }

    #[must_use]
    pub fn query(&self, params: &CourseQuery) -> Vec<Course> {
        query(&self.courses, params)
    }

    /// First `count` courses, as shown on the home page.
    #[must_use]
    pub fn featured(&self, count: usize) -> Vec<&Course> {
        self.courses.iter().take(count).collect()
    }

    /// Other courses in the same category, in catalog order.
    #[must_use]
    pub fn related(&self, course: &Course, count: usize) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.id != course.id && c.category == course.category)
            .take(count)
            .collect()
    }

    #[must_use]
    pub fn categories(&self) -> &'static [&'static str] {
        CATEGORIES
    }

    /// Categories used by courses but missing from the known list.
    #[must_use]
    pub fn unlisted_categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.courses
            .iter()
            .filter(|c| !is_known_category(&c.category))
            .filter(|c| seen.insert(c.category.as_str()))
            .map(|c| c.category.clone())
            .collect()
    }

    #[must_use]
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn require_instructor(&self, id: &str) -> Result<&Instructor> {
        self.instructors
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| LhError::NotFound(format!("instructor {id}")))
    }

    pub fn require_student(&self, id: &str) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| LhError::NotFound(format!("student {id}")))
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let categories: HashSet<&str> = self.courses.iter().map(|c| c.category.as_str()).collect();
        CatalogStats {
            total: self.courses.len(),
            categories_in_use: categories.len(),
            total_students: self.courses.iter().map(|c| c.students_count).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub categories_in_use: usize,
    pub total_students: u64,
}
