//! learnhub categories - Category picker values

use clap::Args;
use serde::Serialize;
use tracing::{debug, warn};

use crate::app::AppContext;
use crate::catalog::CATEGORIES;
use crate::cli::output::{
    HumanLayout, OutputFormat, RobotResponse, emit_human, emit_json, emit_jsonl, robot_ok,
};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Include per-category course counts
    #[arg(long)]
    pub counts: bool,
}

#[derive(Debug, Serialize)]
struct CategoryRow {
    name: &'static str,
    courses: usize,
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    let rows: Vec<CategoryRow> = ctx
        .catalog
        .categories()
        .iter()
        .skip(1)
        .map(|&name| CategoryRow {
            name,
            courses: ctx.catalog.courses().iter().filter(|c| c.category == name).count(),
        })
        .collect();

    let unlisted = ctx.catalog.unlisted_categories();
    if !unlisted.is_empty() {
        warn!(target: "categories", ?unlisted, "courses use categories missing from the picker");
    }
    debug!(target: "categories", count = rows.len(), "listing categories");

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(&rows, &unlisted, args.counts));
            Ok(())
        }
        OutputFormat::Json => emit_json(&picker_response(&rows, &unlisted)),
        OutputFormat::Jsonl => emit_jsonl(&rows),
        OutputFormat::Plain => {
            for row in &rows {
                if args.counts {
                    println!("{}\t{}", row.name, row.courses);
                } else {
                    println!("{}", row.name);
                }
            }
            Ok(())
        }
    }
}

fn picker_response(rows: &[CategoryRow], unlisted: &[String]) -> RobotResponse<serde_json::Value> {
    let mut response = robot_ok(serde_json::json!({
        "all": CATEGORIES[0],
        "categories": rows,
        "unlisted": unlisted,
    }));
    response.warnings = unlisted
        .iter()
        .map(|name| format!("category not in picker: {name}"))
        .collect();
    response
}

fn render_human(rows: &[CategoryRow], unlisted: &[String], counts: bool) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Categories");
    for row in rows {
        if counts {
            layout.kv(row.name, &row.courses.to_string());
        } else {
            layout.bullet(row.name);
        }
    }
    if !unlisted.is_empty() {
        layout.blank().section("Not in picker");
        for name in unlisted {
            layout.bullet(name);
        }
    }
    layout
}
