//! Catalog query engine: filter, then stable sort.
//!
//! The engine is a pure function of the course slice and a [`CourseQuery`]
//! value. It never fails and never mutates its input; an empty result is a
//! normal outcome that callers render as "no results".

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::types::{ALL_CATEGORIES, ALL_LEVELS, Course, Level};
use crate::error::{LhError, Result};

/// Ordering strategy applied to the filtered courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Descending by students count.
    #[default]
    Popularity,
    /// Descending by rating.
    Rating,
    PriceLow,
    PriceHigh,
    /// No creation date exists, so the filtered order is kept.
    Newest,
}

impl SortKey {
    pub const ALL: [Self; 5] = [
        Self::Popularity,
        Self::Rating,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Newest,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Rating => "rating",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
        }
    }

    /// Human label shown in the sort picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Popularity => "Most Popular",
            Self::Rating => "Highest Rated",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Newest => "Newest",
        }
    }

    fn compare(self, a: &Course, b: &Course) -> Ordering {
        match self {
            Self::Popularity => b.students_count.cmp(&a.students_count),
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::PriceLow => a.price.total_cmp(&b.price),
            Self::PriceHigh => b.price.total_cmp(&a.price),
            Self::Newest => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = LhError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == needle)
            .ok_or_else(|| LhError::ValidationFailed(format!("unknown sort key: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    fn matches(&self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => course.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(category) => f.write_str(category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = LhError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s == ALL_CATEGORIES {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(Level),
}

impl LevelFilter {
    fn matches(self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Only(level) => course.level == level,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LEVELS),
            Self::Only(level) => level.fmt(f),
        }
    }
}

impl FromStr for LevelFilter {
    type Err = LhError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s == ALL_LEVELS {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Immutable query parameters for the course listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub level: LevelFilter,
    pub sort: SortKey,
}

impl CourseQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub const fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Clears text, category and level. The sort order is kept.
    #[must_use]
    pub fn reset_filters(&self) -> Self {
        Self {
            sort: self.sort,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category == CategoryFilter::All && self.level == LevelFilter::All
    }

    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        self.matches_text(course) && self.category.matches(course) && self.level.matches(course)
    }

    fn matches_text(&self, course: &Course) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        course.title.to_lowercase().contains(&needle)
            || course.description.to_lowercase().contains(&needle)
    }
}

/// Filter `courses` by `params` and order the survivors by its sort key.
#[must_use]
pub fn query(courses: &[Course], params: &CourseQuery) -> Vec<Course> {
    let mut results: Vec<Course> = courses
        .iter()
        .filter(|course| params.matches(course))
        .cloned()
        .collect();

    // `sort_by` is stable, so equal keys keep their filtered order.
    results.sort_by(|a, b| params.sort.compare(a, b));

    trace!(
        target: "catalog",
        candidates = courses.len(),
        matched = results.len(),
        sort = %params.sort,
        "course query evaluated"
    );
    results
}
