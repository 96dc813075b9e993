//! learnhub config - Show the effective configuration

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::config::Config;
use crate::error::{LhError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the effective configuration as TOML
    #[arg(long)]
    pub toml: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    debug!(target: "config", mode = ?ctx.output_format, "showing configuration");

    if args.toml {
        println!("{}", to_toml(&ctx.config)?);
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(&ctx.config, ctx.catalog.len()));
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(&ctx.config)),
        OutputFormat::Jsonl => emit_jsonl(&[&ctx.config]),
        OutputFormat::Plain => {
            for (key, value) in entries(&ctx.config) {
                println!("{key}\t{value}");
            }
            Ok(())
        }
    }
}

fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(|err| LhError::Config(format!("render config: {err}")))
}

fn entries(config: &Config) -> Vec<(&'static str, String)> {
    vec![
        (
            "catalog.data_path",
            config
                .catalog
                .data_path
                .as_ref()
                .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string()),
        ),
        ("catalog.default_sort", config.catalog.default_sort.to_string()),
        ("catalog.featured_count", config.catalog.featured_count.to_string()),
        ("catalog.related_count", config.catalog.related_count.to_string()),
        ("checkout.tax_rate", config.checkout.tax_rate.to_string()),
        ("output.format", config.output.format.to_string()),
    ]
}

fn render_human(config: &Config, course_count: usize) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Configuration");
    for (key, value) in entries(config) {
        layout.kv(key, &value);
    }
    layout.blank().kv("courses loaded", &course_count.to_string());
    layout
}
