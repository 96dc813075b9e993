//! learnhub faq - Help center search

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::error::Result;
use crate::faq::{FaqEntry, group_by_category, search};

#[derive(Args, Debug)]
pub struct FaqArgs {
    /// Text to look for in questions and answers
    pub term: Option<String>,

    /// Print questions only
    #[arg(long)]
    pub questions_only: bool,
}

#[derive(Serialize)]
struct FaqResults<'a> {
    term: &'a str,
    count: usize,
    results: &'a [FaqEntry],
}

pub fn run(ctx: &AppContext, args: &FaqArgs) -> Result<()> {
    let term = args.term.as_deref().unwrap_or_default();
    let results = search(&ctx.faq, term);
    debug!(target: "faq", term, matched = results.len(), total = ctx.faq.len(), "faq search");

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(term, &results, args.questions_only));
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(FaqResults {
            term,
            count: results.len(),
            results: &results,
        })),
        OutputFormat::Jsonl => emit_jsonl(&results),
        OutputFormat::Plain => {
            for entry in &results {
                println!("{}\t{}", entry.category, entry.question);
            }
            Ok(())
        }
    }
}

fn render_human(term: &str, results: &[FaqEntry], questions_only: bool) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Frequently Asked Questions");

    if results.is_empty() {
        layout
            .push_line(format!("No results found for \"{term}\""))
            .blank()
            .push_line("Clear search with: learnhub faq");
        return layout;
    }

    if !term.is_empty() {
        layout.push_line(style(format!("Search Results ({})", results.len())).bold().to_string());
        layout.blank();
        for entry in results {
            push_entry(&mut layout, entry, questions_only);
            layout.push_line(style(format!("Category: {}", entry.category)).dim().to_string());
            layout.blank();
        }
        return layout;
    }

    for (category, entries) in group_by_category(results) {
        layout.section(&category);
        for entry in entries {
            push_entry(&mut layout, entry, questions_only);
            if !questions_only {
                layout.blank();
            }
        }
        if questions_only {
            layout.blank();
        }
    }
    layout
}

fn push_entry(layout: &mut HumanLayout, entry: &FaqEntry, questions_only: bool) {
    if questions_only {
        layout.bullet(&entry.question);
    } else {
        layout.push_line(style(format!("Q: {}", entry.question)).bold().to_string());
        layout.push_line(format!("A: {}", entry.answer));
    }
}
