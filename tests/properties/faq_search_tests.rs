use proptest::prelude::*;

use learnhub::faq::{FaqEntry, builtin_categories, flatten, search};

fn entries() -> Vec<FaqEntry> {
    flatten(&builtin_categories().unwrap())
}

proptest! {
    #[test]
    fn search_never_panics(term in ".*") {
        let _ = search(&entries(), &term);
    }

    #[test]
    fn search_keeps_source_order(term in "[a-z]{1,3}") {
        let all = entries();
        let results = search(&all, &term);
        let mut cursor = 0;
        for hit in &results {
            let pos = all[cursor..].iter().position(|e| e == hit);
            prop_assert!(pos.is_some());
            cursor += pos.unwrap_or_default() + 1;
        }
    }

    #[test]
    fn search_ignores_case(term in "[a-zA-Z]{1,4}") {
        let all = entries();
        prop_assert_eq!(search(&all, &term), search(&all, &term.to_uppercase()));
    }
}
