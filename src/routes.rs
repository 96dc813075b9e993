//! Path table for the marketplace pages.

use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Home,
    Courses,
    CourseDetail { id: String },
    SignUp,
    Login,
    InstructorDashboard,
    StudentDashboard,
    Checkout { course_id: String },
    About,
    Contact,
    Faq,
    NotFound { path: String },
}

impl Route {
    /// Match a path against the route table. Unknown paths map to `NotFound`.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] if path.starts_with('/') => Self::Home,
            ["courses"] => Self::Courses,
            ["course", id] => Self::CourseDetail { id: (*id).to_string() },
            ["signup"] => Self::SignUp,
            ["login"] => Self::Login,
            ["instructor-dashboard"] => Self::InstructorDashboard,
            ["student-dashboard"] => Self::StudentDashboard,
            ["checkout", id] => Self::Checkout { course_id: (*id).to_string() },
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            ["faq"] => Self::Faq,
            _ => Self::NotFound { path: path.to_string() },
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Courses => "/courses".to_string(),
            Self::CourseDetail { id } => format!("/course/{id}"),
            Self::SignUp => "/signup".to_string(),
            Self::Login => "/login".to_string(),
            Self::InstructorDashboard => "/instructor-dashboard".to_string(),
            Self::StudentDashboard => "/student-dashboard".to_string(),
            Self::Checkout { course_id } => format!("/checkout/{course_id}"),
            Self::About => "/about".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::Faq => "/faq".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Courses => "Explore Courses",
            Self::CourseDetail { .. } => "Course Detail",
            Self::SignUp => "Sign Up",
            Self::Login => "Log In",
            Self::InstructorDashboard => "Instructor Dashboard",
            Self::StudentDashboard => "Student Dashboard",
            Self::Checkout { .. } => "Checkout",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Faq => "Frequently Asked Questions",
            Self::NotFound { .. } => "Page Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What a page should render once its route is checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Page { route: Route },
    /// Course route with an unknown id; links back to the listing.
    CourseNotFound { id: String, back: Route },
    NotFound { path: String },
}

#[must_use]
pub fn resolve(route: Route, catalog: &Catalog) -> View {
    match route {
        Route::CourseDetail { ref id } | Route::Checkout { course_id: ref id }
            if catalog.get(id).is_none() =>
        {
            View::CourseNotFound {
                id: id.clone(),
                back: Route::Courses,
            }
        }
        Route::NotFound { path } => View::NotFound { path },
        route => View::Page { route },
    }
}
