//! CLI for urlcount.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlcount_core::config::{self, OutputFormat};

use commands::{run_count, run_inspect, run_normalize, run_per_domain, run_root_domain};

/// Top-level CLI for urlcount.
#[derive(Debug, Parser)]
#[command(name = "urlcount")]
#[command(about = "Count distinct normalized URLs, overall and per root domain", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urlcount/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Count distinct normalized URLs (one URL per line).
    Count {
        /// File with one URL per line; stdin when omitted or "-".
        path: Option<PathBuf>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Count distinct normalized URLs per root domain.
    PerDomain {
        /// File with one URL per line; stdin when omitted or "-".
        path: Option<PathBuf>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized form of each URL.
    Normalize {
        /// URLs to normalize.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the root domain of each URL ("-" when there is none).
    RootDomain {
        /// URLs to inspect.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Show the parsed components of a URL.
    Inspect {
        /// URL to parse.
        url: String,
        /// Print the components as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Resolves the output format: an explicit `--json` wins over the config default.
fn output_format(json: bool, cfg: &config::UrlcountConfig) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        cfg.output_format()
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Count { path, json } => {
                run_count(path.as_deref(), &cfg.input, output_format(json, &cfg))?
            }
            CliCommand::PerDomain { path, json } => {
                run_per_domain(path.as_deref(), &cfg.input, output_format(json, &cfg))?
            }
            CliCommand::Normalize { urls } => run_normalize(&urls)?,
            CliCommand::RootDomain { urls } => run_root_domain(&urls)?,
            CliCommand::Inspect { url, json } => run_inspect(&url, output_format(json, &cfg))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
