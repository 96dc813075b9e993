//! learnhub featured - Landing page highlights

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::catalog::{CatalogStats, Course};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::error::Result;
use crate::utils::{format_count, format_price};

#[derive(Args, Debug)]
pub struct FeaturedArgs {
    /// Number of courses to feature (defaults to catalog.featured_count)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
}

#[derive(Serialize)]
struct FeaturedReport<'a> {
    stats: CatalogStats,
    courses: Vec<&'a Course>,
}

pub fn run(ctx: &AppContext, args: &FeaturedArgs) -> Result<()> {
    let count = args.count.unwrap_or(ctx.config.catalog.featured_count);
    let report = FeaturedReport {
        stats: ctx.catalog.stats(),
        courses: ctx.catalog.featured(count),
    };
    debug!(target: "featured", count, shown = report.courses.len(), "featured courses");

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(&report));
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(&report)),
        OutputFormat::Jsonl => emit_jsonl(&report.courses),
        OutputFormat::Plain => {
            for course in &report.courses {
                println!("{}\t{}\t{:.2}", course.id, course.title, course.price);
            }
            Ok(())
        }
    }
}

fn render_human(report: &FeaturedReport<'_>) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Featured Courses");
    layout
        .kv("Courses", &report.stats.total.to_string())
        .kv("Categories", &report.stats.categories_in_use.to_string())
        .kv("Learners", &format_count(report.stats.total_students))
        .blank();
    for course in &report.courses {
        layout.bullet(&format!(
            "[{}] {} by {} {} ({:.1})",
            course.id,
            course.title,
            course.instructor,
            format_price(course.price),
            course.rating
        ));
    }
    layout
}
