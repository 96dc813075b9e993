use learnhub::app::AppContext;
use learnhub::catalog::{Catalog, CategoryFilter, CourseQuery, Level, LevelFilter, SortKey};
use learnhub::config::Config;
use learnhub::faq;
use learnhub::test_utils::{TestCase, run_table_tests};

fn ids(catalog: &Catalog, params: &CourseQuery) -> Vec<String> {
    catalog.query(params).into_iter().map(|c| c.id).collect()
}

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

#[test]
fn builtin_catalog_queries() -> Result<(), String> {
    let catalog = Catalog::builtin().map_err(|e| e.to_string())?;
    let cases = vec![
        TestCase::new("default", CourseQuery::new(), strings(&["1", "2", "4", "3"])),
        TestCase::new(
            "rating",
            CourseQuery::new().with_sort(SortKey::Rating),
            strings(&["4", "1", "2", "3"]),
        ),
        TestCase::new(
            "newest keeps catalog order",
            CourseQuery::new().with_sort(SortKey::Newest),
            strings(&["1", "2", "3", "4"]),
        ),
        TestCase::new(
            "beginner by price",
            CourseQuery::new()
                .with_level(LevelFilter::Only(Level::Beginner))
                .with_sort(SortKey::PriceLow),
            strings(&["3", "1", "4"]),
        ),
        TestCase::new(
            "text in description",
            CourseQuery::new().with_text("seo"),
            strings(&["3"]),
        ),
        TestCase::new(
            "text and category disagree",
            CourseQuery::new()
                .with_text("python")
                .with_category(CategoryFilter::Only("Design".to_string())),
            Vec::new(),
        ),
        TestCase::new(
            "unlisted category",
            CourseQuery::new().with_category(CategoryFilter::Only("Music".to_string())),
            Vec::new(),
        ),
    ];

    run_table_tests(cases, |params| ids(&catalog, params))
}

#[test]
fn sentinel_strings_parse_to_all() -> Result<(), String> {
    let cases = vec![
        TestCase::new("category sentinel", "All Categories", true),
        TestCase::new("empty category", "", true),
        TestCase::new("real category", "Business", false),
    ];
    run_table_tests(cases, |raw| {
        raw.parse::<CategoryFilter>().map(|f| f == CategoryFilter::All).unwrap_or(false)
    })?;

    let cases = vec![
        TestCase::new("level sentinel", "All Levels", Some(LevelFilter::All)),
        TestCase::new("lowercase level", "advanced", Some(LevelFilter::Only(Level::Advanced))),
        TestCase::new("unknown level", "Expert", None),
    ];
    run_table_tests(cases, |raw| raw.parse::<LevelFilter>().ok())
}

#[test]
fn app_context_from_parts_uses_config_format() {
    let catalog = Catalog::builtin().unwrap();
    let entries = faq::flatten(&faq::builtin_categories().unwrap());
    let ctx = AppContext::new(Config::default(), catalog, entries);
    assert_eq!(ctx.catalog.len(), 4);
    assert_eq!(ctx.faq.len(), 21);
    assert_eq!(ctx.output_format, ctx.config.output.format);
}
