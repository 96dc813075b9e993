use std::cmp::Ordering;

use proptest::prelude::*;

use learnhub::catalog::{
    CategoryFilter, Course, CourseQuery, Level, LevelFilter, SortKey, query,
};
use learnhub::test_utils::fixtures::course;

fn arb_course() -> impl Strategy<Value = Course> {
    (
        "[a-z]{1,8}",
        "[A-Za-z ]{1,24}",
        0.0f64..500.0,
        0.0f64..=5.0,
        0u64..100_000,
        prop::sample::select(vec!["Web Development", "Design", "Music", "Cooking"]),
        prop::sample::select(Level::ALL.to_vec()),
    )
        .prop_map(|(id, title, price, rating, students, category, level)| {
            let mut c = course(&id, &title, price, rating, students);
            c.category = category.to_string();
            c.level = level;
            c
        })
}

/// Courses drawn from a few prices, ratings and audiences so sort keys tie often.
fn arb_tied_course() -> impl Strategy<Value = Course> {
    (
        "[a-z]{1,8}",
        prop::sample::select(vec![0.0, 19.99, 49.99]),
        prop::sample::select(vec![4.0, 4.5, 5.0]),
        0u64..3,
    )
        .prop_map(|(id, price, rating, students)| course(&id, &id, price, rating, students))
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_query() -> impl Strategy<Value = CourseQuery> {
    (
        "[a-z ]{0,3}",
        prop::option::of(prop::sample::select(vec!["Web Development", "Design", "Music", "Cooking"])),
        prop::option::of(prop::sample::select(Level::ALL.to_vec())),
        arb_sort(),
    )
        .prop_map(|(text, category, level, sort)| {
            let category = category.map_or(CategoryFilter::All, |name| CategoryFilter::Only(name.to_string()));
            let level = level.map_or(LevelFilter::All, LevelFilter::Only);
            CourseQuery::new()
                .with_text(text)
                .with_category(category)
                .with_level(level)
                .with_sort(sort)
        })
}

/// Expected ordering for each key, written out independently of the library.
fn expected_order(sort: SortKey, a: &Course, b: &Course) -> Ordering {
    match sort {
        SortKey::Popularity => b.students_count.cmp(&a.students_count),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::PriceLow => a.price.total_cmp(&b.price),
        SortKey::PriceHigh => b.price.total_cmp(&a.price),
        SortKey::Newest => Ordering::Equal,
    }
}

proptest! {
    #[test]
    fn result_is_a_subset_of_input(courses in prop::collection::vec(arb_course(), 0..20), params in arb_query()) {
        let result = query(&courses, &params);
        prop_assert!(result.len() <= courses.len());
        for c in &result {
            prop_assert!(courses.contains(c));
            prop_assert!(params.matches(c));
        }
    }

    #[test]
    fn every_match_is_kept(courses in prop::collection::vec(arb_course(), 0..20), params in arb_query()) {
        let expected = courses.iter().filter(|c| params.matches(c)).count();
        prop_assert_eq!(query(&courses, &params).len(), expected);
    }

    #[test]
    fn query_is_deterministic(courses in prop::collection::vec(arb_course(), 0..20), params in arb_query()) {
        prop_assert_eq!(query(&courses, &params), query(&courses, &params));
    }

    #[test]
    fn unfiltered_newest_is_identity(courses in prop::collection::vec(arb_course(), 0..20)) {
        let params = CourseQuery::new().with_sort(SortKey::Newest);
        prop_assert_eq!(query(&courses, &params), courses);
    }

    #[test]
    fn price_low_is_non_decreasing(courses in prop::collection::vec(arb_course(), 0..20)) {
        let result = query(&courses, &CourseQuery::new().with_sort(SortKey::PriceLow));
        for pair in result.windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn popularity_is_non_increasing(courses in prop::collection::vec(arb_course(), 0..20)) {
        let result = query(&courses, &CourseQuery::new());
        for pair in result.windows(2) {
            prop_assert!(pair[0].students_count >= pair[1].students_count);
        }
    }

    #[test]
    fn category_filter_keeps_only_that_category(
        courses in prop::collection::vec(arb_course(), 0..20),
        name in prop::sample::select(vec!["Web Development", "Design", "Music", "Cooking"]),
    ) {
        let params = CourseQuery::new().with_category(CategoryFilter::Only(name.to_string()));
        let result = query(&courses, &params);
        prop_assert!(result.iter().all(|c| c.category == name));
        prop_assert_eq!(result.len(), courses.iter().filter(|c| c.category == name).count());
    }

    #[test]
    fn sentinel_filters_only_sort(
        courses in prop::collection::vec(arb_tied_course(), 0..20),
        sort in arb_sort(),
    ) {
        let params = CourseQuery::new()
            .with_category("All Categories".parse().unwrap())
            .with_level("All Levels".parse().unwrap())
            .with_sort(sort);
        prop_assert!(params.is_unfiltered());

        let mut expected = courses.clone();
        expected.sort_by(|a, b| expected_order(sort, a, b));
        prop_assert_eq!(query(&courses, &params), expected);
    }
}
