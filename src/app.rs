use crate::catalog::Catalog;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::faq::{self, FaqEntry};

pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
    /// FAQ flattened once at startup.
    pub faq: Vec<FaqEntry>,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let catalog = match &config.catalog.data_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        let faq = faq::flatten(&faq::builtin_categories()?);
        let output_format = cli.requested_format().unwrap_or(config.output.format);

        Ok(Self {
            config,
            catalog,
            faq,
            output_format,
        })
    }

    /// Context over explicit parts, without reading config or env.
    #[must_use]
    pub fn new(config: Config, catalog: Catalog, faq: Vec<FaqEntry>) -> Self {
        let output_format = config.output.format;
        Self {
            config,
            catalog,
            faq,
            output_format,
        }
    }
}
