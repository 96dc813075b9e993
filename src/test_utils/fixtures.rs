use std::path::PathBuf;

use tempfile::TempDir;

use crate::catalog::{Catalog, Course, Level};
use crate::checkout::PaymentForm;

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a file under the fixture root, making parent dirs as needed.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

/// Minimal valid course: Beginner, Web Development, no discount.
#[must_use]
pub fn course(id: &str, title: &str, price: f64, rating: f64, students: u64) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("About {title}"),
        instructor: "Test Instructor".to_string(),
        instructor_avatar: String::new(),
        price,
        original_price: None,
        rating,
        review_count: 0,
        students_count: students,
        duration: "1 hour".to_string(),
        level: Level::Beginner,
        category: "Web Development".to_string(),
        image: String::new(),
        what_you_will_learn: Vec::new(),
        requirements: Vec::new(),
        course_content: Vec::new(),
    }
}

/// The four storefront courses with the numbers the listing shows.
#[must_use]
pub fn sample_courses() -> Vec<Course> {
    let mut web = course("1", "Complete Web Development Bootcamp", 89.99, 4.8, 45231);
    web.description = "Learn HTML, CSS, JavaScript, React, Node.js and more. Build real projects and become a full-stack developer.".to_string();
    web.instructor = "John Smith".to_string();
    web.original_price = Some(199.99);
    web.review_count = 12453;

    let mut data = course("2", "Python for Data Science", 79.99, 4.7, 32145);
    data.description = "Master Python programming for data analysis, visualization, and machine learning applications.".to_string();
    data.instructor = "Sarah Johnson".to_string();
    data.original_price = Some(149.99);
    data.review_count = 8967;
    data.level = Level::Intermediate;
    data.category = "Data Science".to_string();

    let mut marketing = course("3", "Digital Marketing Masterclass", 69.99, 4.6, 18765);
    marketing.description = "Complete guide to digital marketing including SEO, social media, PPC, and content marketing.".to_string();
    marketing.instructor = "Mike Wilson".to_string();
    marketing.original_price = Some(129.99);
    marketing.review_count = 5432;
    marketing.category = "Marketing".to_string();

    let mut design = course("4", "UI/UX Design Complete Course", 94.99, 4.9, 23456);
    design.description = "Learn user interface and user experience design from scratch. Master Figma, design principles, and prototyping.".to_string();
    design.instructor = "Emily Chen".to_string();
    design.original_price = Some(179.99);
    design.review_count = 7654;
    design.category = "Design".to_string();

    vec![web, data, marketing, design]
}

#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_courses()).expect("sample courses are valid")
}

/// Payment form with every field filled and terms accepted.
#[must_use]
pub fn complete_payment_form() -> PaymentForm {
    PaymentForm {
        email: "alex@example.com".to_string(),
        first_name: "Alex".to_string(),
        last_name: "Rodriguez".to_string(),
        card_number: "4242 4242 4242 4242".to_string(),
        expiry_date: "12/28".to_string(),
        cvv: "123".to_string(),
        country: "United States".to_string(),
        state: "CA".to_string(),
        zip_code: "94105".to_string(),
        agree_to_terms: true,
    }
}
