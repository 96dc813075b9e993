//! learnhub courses - Browse the catalog

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::catalog::{Course, CourseQuery, SortKey};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::error::Result;
use crate::utils::{format_count, format_price, truncate_string};

#[derive(Args, Debug, Default)]
pub struct CoursesArgs {
    /// Match text against title and description
    #[arg(long, short)]
    pub search: Option<String>,

    /// Category name, or "All Categories"
    #[arg(long, short)]
    pub category: Option<String>,

    /// Beginner, Intermediate, Advanced, or "All Levels"
    #[arg(long, short)]
    pub level: Option<String>,

    /// Sort by: popularity, rating, price-low, price-high, newest
    #[arg(long)]
    pub sort: Option<String>,

    /// Maximum number of courses to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &CoursesArgs) -> Result<()> {
    let params = build_query(args, ctx.config.catalog.default_sort)?;
    debug!(target: "courses", ?params, mode = ?ctx.output_format, "querying catalog");

    let mut courses = ctx.catalog.query(&params);
    let matched = courses.len();
    if let Some(limit) = args.limit {
        courses.truncate(limit);
    }

    debug!(target: "courses", matched, shown = courses.len(), "listing courses");

    let result = display(ctx, &params, &courses, matched);
    debug!(target: "courses", stage = "render_complete");
    result
}

/// Turn command-line filters into a query. Sort falls back to `default_sort`.
pub fn build_query(args: &CoursesArgs, default_sort: SortKey) -> Result<CourseQuery> {
    let mut params = CourseQuery::new().with_sort(default_sort);
    if let Some(text) = &args.search {
        params = params.with_text(text.clone());
    }
    if let Some(category) = &args.category {
        params = params.with_category(category.parse()?);
    }
    if let Some(level) = &args.level {
        params = params.with_level(level.parse()?);
    }
    if let Some(sort) = &args.sort {
        params = params.with_sort(sort.parse()?);
    }
    Ok(params)
}

#[derive(Serialize)]
struct QueryEcho {
    search: String,
    category: String,
    level: String,
    sort: SortKey,
}

impl From<&CourseQuery> for QueryEcho {
    fn from(params: &CourseQuery) -> Self {
        Self {
            search: params.text.clone(),
            category: params.category.to_string(),
            level: params.level.to_string(),
            sort: params.sort,
        }
    }
}

#[derive(Serialize)]
struct CourseListing<'a> {
    count: usize,
    matched: usize,
    query: QueryEcho,
    courses: &'a [Course],
}

fn display(ctx: &AppContext, params: &CourseQuery, courses: &[Course], matched: usize) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(params, courses, matched));
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(CourseListing {
            count: courses.len(),
            matched,
            query: QueryEcho::from(params),
            courses,
        })),
        OutputFormat::Jsonl => emit_jsonl(courses),
        OutputFormat::Plain => {
            for course in courses {
                println!("{}", plain_row(course));
            }
            Ok(())
        }
    }
}

/// ID, title, category, level, price, rating, students. No header.
fn plain_row(course: &Course) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.2}\t{:.1}\t{}",
        course.id,
        course.title,
        course.category,
        course.level,
        course.price,
        course.rating,
        course.students_count
    )
}

fn render_human(params: &CourseQuery, courses: &[Course], matched: usize) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Explore Courses");

    if matched == 0 {
        layout
            .push_line("No courses found matching your criteria")
            .blank()
            .push_line("Clear filters with: learnhub courses");
        return layout;
    }

    layout.push_line(format!(
        "Showing {} of {matched} courses, sorted by {}",
        courses.len(),
        params.sort.label()
    ));
    layout.blank();
    layout.push_line(format!(
        "{:4} {:36} {:18} {:13} {:>8} {:>6} {:>9}",
        "ID", "TITLE", "CATEGORY", "LEVEL", "PRICE", "RATING", "STUDENTS"
    ));
    layout.push_line("─".repeat(100));

    for course in courses {
        layout.push_line(format!(
            "{:4} {:36} {:18} {:13} {:>8} {:>6} {:>9}",
            course.id,
            truncate_string(&course.title, 36),
            truncate_string(&course.category, 18),
            course.level,
            format_price(course.price),
            format!("{:.1}", course.rating),
            format_count(course.students_count)
        ));
    }

    if !params.is_unfiltered() {
        layout.blank();
        layout.push_line(style("Clear filters with: learnhub courses").dim().to_string());
    }
    layout
}
