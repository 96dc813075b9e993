//! Client-side form rules for login, sign-up, contact and course creation.
//!
//! Every rule is a presence or equality check. A submission always produces a
//! [`Notice`]; rejected submissions carry a destructive one.

use serde::Serialize;

use crate::catalog::Level;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Success,
    Destructive,
}

/// A transient notification shown after a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub(crate) fn missing_information(description: &str) -> Self {
        Self::destructive("Missing Information", description)
    }

    pub(crate) fn terms_required() -> Self {
        Self::destructive("Terms Required", "Please agree to the terms and conditions.")
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.variant == NoticeVariant::Success
    }
}

/// Outcome of submitting a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub notice: Notice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Route>,
}

pub trait Form {
    /// Check the form; a rejection carries the notice to show.
    fn validate(&self) -> Result<(), Notice>;

    fn success(&self) -> Notice;

    fn redirect(&self) -> Option<Route> {
        None
    }

    fn submit(&self) -> Submission {
        match self.validate() {
            Ok(()) => Submission {
                notice: self.success(),
                redirect: self.redirect(),
            },
            Err(notice) => Submission {
                notice,
                redirect: None,
            },
        }
    }
}

/// Presence check: any non-empty value counts, whitespace included.
pub(crate) const fn is_missing(value: &str) -> bool {
    value.is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    const fn label(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub role: Role,
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl Form for LoginForm {
    fn validate(&self) -> Result<(), Notice> {
        if is_missing(&self.email) || is_missing(&self.password) {
            return Err(Notice::missing_information("Please fill in all fields."));
        }
        Ok(())
    }

    fn success(&self) -> Notice {
        Notice::success(
            "Welcome Back!",
            format!("You have successfully logged in as {} {}.", article(self.role), self.role.label()),
        )
    }

    fn redirect(&self) -> Option<Route> {
        Some(match self.role {
            Role::Student => Route::StudentDashboard,
            Role::Instructor => Route::InstructorDashboard,
        })
    }
}

const fn article(role: Role) -> &'static str {
    match role {
        Role::Student => "a",
        Role::Instructor => "an",
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub role: Option<Role>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Instructor only.
    pub expertise: String,
    /// Instructor only, optional.
    pub bio: String,
    pub agreed_to_terms: bool,
}

impl SignUpForm {
    fn role(&self) -> Role {
        self.role.unwrap_or(Role::Student)
    }
}

impl Form for SignUpForm {
    fn validate(&self) -> Result<(), Notice> {
        let mut required = vec![&self.name, &self.email, &self.password, &self.confirm_password];
        if self.role() == Role::Instructor {
            required.push(&self.expertise);
        }
        if required.into_iter().any(|v| is_missing(v)) {
            return Err(Notice::missing_information("Please fill in all required fields."));
        }
        if self.password != self.confirm_password {
            return Err(Notice::destructive(
                "Password Mismatch",
                "Passwords do not match. Please try again.",
            ));
        }
        if !self.agreed_to_terms {
            return Err(Notice::terms_required());
        }
        Ok(())
    }

    fn success(&self) -> Notice {
        match self.role() {
            Role::Student => Notice::success(
                "Account Created!",
                "Welcome to LearnHub! You can now start exploring courses.",
            ),
            Role::Instructor => Notice::success(
                "Instructor Account Created!",
                "Welcome to LearnHub! You can now start creating courses.",
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub category: String,
    pub message: String,
}

impl Form for ContactForm {
    fn validate(&self) -> Result<(), Notice> {
        if is_missing(&self.name) || is_missing(&self.email) || is_missing(&self.message) {
            return Err(Notice::missing_information("Please fill in all required fields."));
        }
        Ok(())
    }

    fn success(&self) -> Notice {
        Notice::success("Message Sent!", "We'll get back to you within 24 hours.")
    }
}

/// Instructor's "create course" form. Values arrive as raw text.
#[derive(Debug, Clone, Default)]
pub struct NewCourseForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub price: String,
    pub duration: String,
}

impl NewCourseForm {
    fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .trim_start_matches('$')
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
    }
}

impl Form for NewCourseForm {
    fn validate(&self) -> Result<(), Notice> {
        let required = [
            &self.title,
            &self.description,
            &self.category,
            &self.level,
            &self.price,
        ];
        if required.into_iter().any(|v| is_missing(v)) {
            return Err(Notice::missing_information("Please fill in all required fields."));
        }
        if self.level.parse::<Level>().is_err() {
            return Err(Notice::destructive(
                "Invalid Level",
                format!("Unknown level \"{}\".", self.level),
            ));
        }
        if self.parsed_price().is_none() {
            return Err(Notice::destructive(
                "Invalid Price",
                format!("\"{}\" is not a valid price.", self.price),
            ));
        }
        Ok(())
    }

    fn success(&self) -> Notice {
        Notice::success(
            "Course Created!",
            "Your new course has been created successfully and is pending review.",
        )
    }
}
