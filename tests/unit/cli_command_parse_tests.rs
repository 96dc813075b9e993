use clap::Parser;

use learnhub::cli::commands::dashboard::DashboardCommand;
use learnhub::cli::{Cli, Commands, OutputFormat};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["learnhub"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[test]
fn parse_courses_filters() {
    let cli = parse(&[
        "courses",
        "--search",
        "react",
        "--category",
        "Web Development",
        "--level",
        "Beginner",
        "--sort",
        "rating",
        "-n",
        "2",
    ]);
    match cli.command {
        Commands::Courses(args) => {
            assert_eq!(args.search.as_deref(), Some("react"));
            assert_eq!(args.category.as_deref(), Some("Web Development"));
            assert_eq!(args.level.as_deref(), Some("Beginner"));
            assert_eq!(args.sort.as_deref(), Some("rating"));
            assert_eq!(args.limit, Some(2));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_checkout_fields() {
    let cli = parse(&[
        "checkout",
        "3",
        "--card-number",
        "4242424242424242",
        "--zip-code",
        "94105",
        "--agree-terms",
    ]);
    match cli.command {
        Commands::Checkout(args) => {
            assert_eq!(args.course_id, "3");
            assert_eq!(args.card_number, "4242424242424242");
            assert_eq!(args.zip_code, "94105");
            assert!(args.email.is_empty());
            assert!(args.agree_terms);
            assert!(!args.summary_only);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_dashboard_defaults_to_first_profile() {
    match parse(&["dashboard", "instructor"]).command {
        Commands::Dashboard(args) => match args.command {
            DashboardCommand::Instructor { id } => assert_eq!(id, "1"),
            DashboardCommand::Student { .. } => panic!("expected instructor"),
        },
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_faq_without_term() {
    match parse(&["faq"]).command {
        Commands::Faq(args) => assert!(args.term.is_none()),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn robot_flag_forces_json() {
    let cli = parse(&["--format", "plain", "--robot", "categories"]);
    assert_eq!(cli.requested_format(), Some(OutputFormat::Json));

    let cli = parse(&["--format", "jsonl", "featured"]);
    assert_eq!(cli.requested_format(), Some(OutputFormat::Jsonl));

    let cli = parse(&["featured"]);
    assert_eq!(cli.requested_format(), None);
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse(&["route", "/faq", "-vv", "--quiet"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from(["learnhub", "--format", "yaml", "courses"]);
    assert!(result.is_err());
}
