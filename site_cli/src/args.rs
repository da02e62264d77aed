//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nla-site")]
#[command(about = "Build the Network Log Analyser landing page as static HTML")]
#[command(version)]
pub struct Cli {
    /// Site config file (default: ./nla-site.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = "info",
        global = true,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page and write it to disk
    Build {
        /// Output file (default: config `output`, else dist/index.html)
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        toggles: SectionToggles,
    },

    /// Render the page to stdout
    Render {
        #[command(flatten)]
        toggles: SectionToggles,
    },

    /// Print the composed section order
    Outline {
        /// Emit a JSON array of section ids
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        toggles: SectionToggles,
    },
}

/// Switches for content excluded from the default page.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct SectionToggles {
    /// Include the Demo section
    #[arg(long)]
    pub with_demo: bool,

    /// Include the Expected Solution block in the Problem Statement
    #[arg(long)]
    pub with_expected_solution: bool,
}
