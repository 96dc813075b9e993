use learnhub::routes::{Route, View, resolve};
use learnhub::test_utils::fixtures::sample_catalog;
use learnhub::test_utils::{TestCase, run_table_tests};

#[test]
fn route_titles() -> Result<(), String> {
    let cases = vec![
        TestCase::new("home", "/", "Home"),
        TestCase::new("listing", "/courses", "Explore Courses"),
        TestCase::new("detail", "/course/1", "Course Detail"),
        TestCase::new("checkout", "/checkout/1#pay", "Checkout"),
        TestCase::new("signup", "/signup/", "Sign Up"),
        TestCase::new("instructor", "/instructor-dashboard", "Instructor Dashboard"),
        TestCase::new("help", "/faq?q=refund", "Frequently Asked Questions"),
        TestCase::new("unknown", "/pricing", "Page Not Found"),
    ];
    run_table_tests(cases, |path| Route::parse(path).title())
}

#[test]
fn resolved_views() -> Result<(), String> {
    let catalog = sample_catalog();
    let cases = vec![
        TestCase::new("known course", "/course/2", "page"),
        TestCase::new("unknown course", "/course/99", "course_not_found"),
        TestCase::new("unknown checkout", "/checkout/abc", "course_not_found"),
        TestCase::new("static page", "/about", "page"),
        TestCase::new("no such page", "/admin", "not_found"),
    ];
    run_table_tests(cases, |path| match resolve(Route::parse(path), &catalog) {
        View::Page { .. } => "page",
        View::CourseNotFound { .. } => "course_not_found",
        View::NotFound { .. } => "not_found",
    })
}
