//! # nla-site
//!
//! Static site builder for the Network Log Analyser landing page.
//!
//! ```bash
//! # Write dist/index.html
//! nla-site build
//!
//! # Include the demo video and usage examples
//! nla-site build --with-demo --out public/index.html
//!
//! # Inspect the composed section order
//! nla-site outline --json
//! ```
//!
//! Logs go to stderr so `render` and `outline` output can be piped.

mod args;
mod config;
mod error;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use nla_site::types::PageOptions;
use tracing::{debug, info};

use args::{Cli, Command};
use config::SiteConfig;
use error::SiteError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = SiteConfig::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Build { out, toggles } => {
            let options = config.page_options(toggles);
            let path = config.output_path(out);
            build(&options, &path)?;
        }
        Command::Render { toggles } => {
            let html = nla_site::render_page(&config.page_options(toggles));
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
        }
        Command::Outline { json, toggles } => {
            let layout = config.page_options(toggles).layout();
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                for (idx, section) in layout.iter().enumerate() {
                    println!("{}. {}", idx + 1, section.label());
                }
            }
        }
    }

    Ok(())
}

/// Render the page and write it to `path`, creating parent directories.
fn build(options: &PageOptions, path: &Path) -> Result<(), SiteError> {
    info!(
        "Rendering page (demo: {}, expected solution: {})",
        options.show_demo, options.show_expected_solution
    );
    let html = nla_site::render_page(options);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SiteError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, &html).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Sections: {:?}", options.layout());
    info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
