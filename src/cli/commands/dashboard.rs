//! learnhub dashboard - Student and instructor summaries

use clap::{Args, Subcommand};
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::dashboard::{InstructorDashboard, StudentDashboard};
use crate::error::Result;
use crate::utils::{format_count, format_price};

#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub command: DashboardCommand,
}

#[derive(Subcommand, Debug)]
pub enum DashboardCommand {
    /// Enrollments and progress for a student
    Student {
        /// Student ID
        #[arg(default_value = "1")]
        id: String,
    },
    /// Courses, students and earnings for an instructor
    Instructor {
        /// Instructor ID
        #[arg(default_value = "1")]
        id: String,
    },
}

pub fn run(ctx: &AppContext, args: &DashboardArgs) -> Result<()> {
    match &args.command {
        DashboardCommand::Student { id } => {
            let student = ctx.catalog.require_student(id)?;
            let dash = StudentDashboard::build(student, &ctx.catalog)?;
            debug!(target: "dashboard", student = %id, enrolled = dash.enrolled, "student dashboard");
            match ctx.output_format {
                OutputFormat::Human => {
                    emit_human(render_student(&dash));
                    Ok(())
                }
                OutputFormat::Json => emit_json(&robot_ok(&dash)),
                OutputFormat::Jsonl => emit_jsonl(&dash.courses),
                OutputFormat::Plain => {
                    for course in &dash.courses {
                        println!("{}\t{}\t{}", course.course_id, course.title, course.progress);
                    }
                    Ok(())
                }
            }
        }
        DashboardCommand::Instructor { id } => {
            let instructor = ctx.catalog.require_instructor(id)?;
            let dash = InstructorDashboard::build(instructor, &ctx.catalog)?;
            debug!(target: "dashboard", instructor = %id, courses = dash.total_courses, "instructor dashboard");
            match ctx.output_format {
                OutputFormat::Human => {
                    emit_human(render_instructor(&dash));
                    Ok(())
                }
                OutputFormat::Json => emit_json(&robot_ok(&dash)),
                OutputFormat::Jsonl => emit_jsonl(&dash.courses),
                OutputFormat::Plain => {
                    for course in &dash.courses {
                        println!("{}\t{}\t{}", course.id, course.title, course.students_count);
                    }
                    Ok(())
                }
            }
        }
    }
}

fn render_student(dash: &StudentDashboard) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!("Welcome back, {}!", dash.name));
    layout
        .kv("Enrolled", &dash.enrolled.to_string())
        .kv("Completed", &dash.completed.to_string())
        .kv("In progress", &dash.in_progress.to_string())
        .kv("Certificates", &dash.certificates.to_string())
        .kv("Avg. progress", &format!("{:.0}%", dash.average_progress))
        .blank()
        .section("My courses");
    for course in &dash.courses {
        let status = if course.completed {
            "completed".to_string()
        } else {
            format!("{}%, last accessed {}", course.progress, course.last_accessed)
        };
        layout.bullet(&format!("{} ({status})", course.title));
    }
    layout
}

fn render_instructor(dash: &InstructorDashboard) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!("Instructor Dashboard: {}", dash.name));
    layout
        .kv("Courses", &dash.total_courses.to_string())
        .kv("Students", &format_count(dash.total_students))
        .kv("Reviews", &format_count(dash.total_reviews))
        .kv("Avg. rating", &format!("{:.1}", dash.average_rating))
        .kv("Earnings", &format_price(dash.total_earnings))
        .blank()
        .section("My courses");
    for course in &dash.courses {
        layout.bullet(&format!(
            "[{}] {} {} students",
            course.id,
            course.title,
            format_count(course.students_count)
        ));
    }
    layout
}
