//! FAQ data and substring search.
//!
//! Categories are flattened once into [`FaqEntry`] values that carry their
//! category title as a label. Search is plain case-insensitive containment
//! over question and answer, preserving original order.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{LhError, Result};

const BUILTIN_FAQ: &str = include_str!("../../data/faq.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A question/answer pair labelled with its source category title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub category: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FaqDoc {
    #[serde(default)]
    categories: Vec<FaqCategory>,
}

pub fn builtin_categories() -> Result<Vec<FaqCategory>> {
    parse_categories(BUILTIN_FAQ, "built-in faq")
}

pub fn parse_categories(raw: &str, origin: &str) -> Result<Vec<FaqCategory>> {
    let doc: FaqDoc =
        toml::from_str(raw).map_err(|err| LhError::Data(format!("parse {origin}: {err}")))?;
    Ok(doc.categories)
}

/// Flatten categories into entries, category order then question order.
#[must_use]
pub fn flatten(categories: &[FaqCategory]) -> Vec<FaqEntry> {
    categories
        .iter()
        .flat_map(|category| {
            category.faqs.iter().map(|faq| FaqEntry {
                category: category.title.clone(),
                question: faq.question.clone(),
                answer: faq.answer.clone(),
            })
        })
        .collect()
}

/// Entries whose question or answer contains `text`, ignoring case.
///
/// An empty `text` returns every entry unchanged.
#[must_use]
pub fn search(entries: &[FaqEntry], text: &str) -> Vec<FaqEntry> {
    if text.is_empty() {
        return entries.to_vec();
    }
    let needle = text.to_lowercase();
    let results: Vec<FaqEntry> = entries
        .iter()
        .filter(|entry| {
            entry.question.to_lowercase().contains(&needle)
                || entry.answer.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    trace!(target: "faq", term = text, matched = results.len(), "faq search evaluated");
    results
}

/// Group entries by category label in first-appearance order.
#[must_use]
pub fn group_by_category(entries: &[FaqEntry]) -> Vec<(String, Vec<&FaqEntry>)> {
    let mut groups: Vec<(String, Vec<&FaqEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(label, _)| *label == entry.category) {
            Some((_, items)) => items.push(entry),
            None => groups.push((entry.category.clone(), vec![entry])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<FaqEntry> {
        flatten(&builtin_categories().unwrap())
    }

    #[test]
    fn builtin_faq_has_five_categories() {
        let categories = builtin_categories().unwrap();
        let titles: Vec<_> = categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "General",
                "Courses",
                "Payments & Billing",
                "For Instructors",
                "Technical Support"
            ]
        );
        assert_eq!(entries().len(), 21);
    }

    #[test]
    fn refund_matches_single_entry() {
        let results = search(&entries(), "refund");
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].question,
            "Can I get a refund if I don't like a course?"
        );
        assert_eq!(results[0].category, "Courses");
    }

    #[test]
    fn unmatched_term_is_empty() {
        assert!(search(&entries(), "zzzqqq").is_empty());
    }

    #[test]
    fn empty_term_returns_everything() {
        let all = entries();
        assert_eq!(search(&all, ""), all);
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let all = entries();
        let results = search(&all, "CERTIFICATE");
        assert!(!results.is_empty());
        let positions: Vec<_> = results
            .iter()
            .map(|r| all.iter().position(|e| e == r).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn search_spans_categories() {
        let results = search(&entries(), "email");
        let groups = group_by_category(&results);
        assert!(groups.len() > 1);
    }

    #[test]
    fn grouping_preserves_first_appearance() {
        let all = entries();
        let groups = group_by_category(&all);
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].0, "General");
        assert_eq!(groups[0].1.len(), 4);
        assert_eq!(groups[4].0, "Technical Support");
    }
}
