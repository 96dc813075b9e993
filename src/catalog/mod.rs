//! Course catalog: records, registry and the query engine.

pub mod profiles;
pub mod query;
pub mod registry;
pub mod types;

pub use profiles::{Enrollment, Instructor, Student};
pub use query::{CategoryFilter, CourseQuery, LevelFilter, SortKey, query};
pub use registry::{Catalog, CatalogDoc, CatalogStats};
pub use types::{ALL_CATEGORIES, ALL_LEVELS, CATEGORIES, Course, CourseSection, Level};
