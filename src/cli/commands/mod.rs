//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod categories;
pub mod checkout;
pub mod config;
pub mod courses;
pub mod dashboard;
pub mod faq;
pub mod featured;
pub mod route;
pub mod show;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog with search, filters and sorting
    Courses(courses::CoursesArgs),

    /// Show one course in detail
    Show(show::ShowArgs),

    /// List featured courses for the landing page
    Featured(featured::FeaturedArgs),

    /// List the course categories
    Categories(categories::CategoriesArgs),

    /// Search the help center
    Faq(faq::FaqArgs),

    /// Buy a course
    Checkout(checkout::CheckoutArgs),

    /// Resolve a page path to the view it renders
    Route(route::RouteArgs),

    /// Student and instructor dashboards
    Dashboard(dashboard::DashboardArgs),

    /// Show the effective configuration
    Config(config::ConfigArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Courses(args) => courses::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Featured(args) => featured::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Faq(args) => faq::run(ctx, args),
        Commands::Checkout(args) => checkout::run(ctx, args),
        Commands::Route(args) => route::run(ctx, args),
        Commands::Dashboard(args) => dashboard::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
