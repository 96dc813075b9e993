//! learnhub show - Course detail page

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::catalog::Course;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::error::Result;
use crate::utils::{format_count, format_price};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Course ID
    pub id: String,

    /// Hide the related courses section
    #[arg(long)]
    pub no_related: bool,
}

#[derive(Serialize)]
struct CourseDetail<'a> {
    course: &'a Course,
    discount_percent: Option<u32>,
    lesson_count: usize,
    related: Vec<&'a Course>,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let course = ctx.catalog.require(&args.id)?;
    debug!(target: "show", course_id = %course.id, mode = ?ctx.output_format, "loading course");

    let related = if args.no_related {
        Vec::new()
    } else {
        ctx.catalog.related(course, ctx.config.catalog.related_count)
    };

    let detail = CourseDetail {
        course,
        discount_percent: course.discount_percent(),
        lesson_count: course.lesson_count(),
        related,
    };

    let result = match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(&detail));
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(&detail)),
        OutputFormat::Jsonl => emit_jsonl(&[&detail]),
        OutputFormat::Plain => {
            println!("id: {}", course.id);
            println!("title: {}", course.title);
            println!("instructor: {}", course.instructor);
            println!("category: {}", course.category);
            println!("level: {}", course.level);
            println!("price: {:.2}", course.price);
            println!("rating: {:.1}", course.rating);
            println!("students: {}", course.students_count);
            println!("duration: {}", course.duration);
            Ok(())
        }
    };

    debug!(target: "show", stage = "render_complete");
    result
}

fn render_human(detail: &CourseDetail<'_>) -> HumanLayout {
    let course = detail.course;
    let mut layout = HumanLayout::new();
    layout.title(&course.title);
    layout.push_line(course.description.clone()).blank();

    let price = match (course.original_price, detail.discount_percent) {
        (Some(original), Some(percent)) => format!(
            "{} {} ({percent}% off)",
            format_price(course.price),
            style(format_price(original)).strikethrough().dim()
        ),
        _ => format_price(course.price),
    };

    layout
        .kv("Instructor", &course.instructor)
        .kv("Price", &price)
        .kv(
            "Rating",
            &format!("{:.1} ({} reviews)", course.rating, format_count(course.review_count)),
        )
        .kv("Students", &format_count(course.students_count))
        .kv("Duration", &course.duration)
        .kv("Level", course.level.as_str())
        .kv("Category", &course.category)
        .blank();

    if !course.what_you_will_learn.is_empty() {
        layout.section("What you'll learn");
        for item in &course.what_you_will_learn {
            layout.bullet(item);
        }
        layout.blank();
    }

    if !course.course_content.is_empty() {
        layout.section(&format!(
            "Course content ({} sections, {} lessons)",
            course.section_count(),
            detail.lesson_count
        ));
        for section in &course.course_content {
            layout.push_line(format!("{} ({} lessons)", section.section, section.lessons.len()));
            for lesson in &section.lessons {
                layout.push_line(format!("    {lesson}"));
            }
        }
        layout.blank();
    }

    if !course.requirements.is_empty() {
        layout.section("Requirements");
        for item in &course.requirements {
            layout.bullet(item);
        }
        layout.blank();
    }

    if !detail.related.is_empty() {
        layout.section("Related courses");
        for other in &detail.related {
            layout.bullet(&format!("[{}] {} {}", other.id, other.title, format_price(other.price)));
        }
        layout.blank();
    }

    layout.push_line(style(format!("Enroll with: learnhub checkout {}", course.id)).dim().to_string());
    layout
}
