//! learnhub route - Resolve a page path

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::error::Result;
use crate::routes::{Route, View, resolve};

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Page path, for example /course/1
    pub path: String,
}

pub fn run(ctx: &AppContext, args: &RouteArgs) -> Result<()> {
    let route = Route::parse(&args.path);
    debug!(target: "route", path = %args.path, ?route, "route parsed");
    let view = resolve(route, &ctx.catalog);

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(&args.path, &view));
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(&view)),
        OutputFormat::Jsonl => emit_jsonl(&[&view]),
        OutputFormat::Plain => {
            println!("{}", plain_line(&view));
            Ok(())
        }
    }
}

fn plain_line(view: &View) -> String {
    match view {
        View::Page { route } => format!("page\t{route}\t{}", route.title()),
        View::CourseNotFound { id, back } => format!("course_not_found\t{id}\t{back}"),
        View::NotFound { path } => format!("not_found\t{path}"),
    }
}

fn render_human(path: &str, view: &View) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.kv("Path", path);
    match view {
        View::Page { route } => {
            layout.kv("Page", route.title()).kv("Canonical", &route.path());
        }
        View::CourseNotFound { id, back } => {
            layout
                .kv("Page", "Course Not Found")
                .kv("Course", id)
                .kv("Back to", &format!("{} ({back})", Route::Courses.title()));
        }
        View::NotFound { path } => {
            layout
                .kv("Page", "404")
                .push_line(format!("Oops! Page not found: {path}"))
                .kv("Return to", &Route::Home.path());
        }
    }
    layout
}
