mod faq_search_tests;
mod query_invariant_tests;
