//! Configuration file support for the site builder.
//!
//! Loads optional `nla-site.toml` from the working directory, or the file
//! named with `--config`.

use std::path::{Path, PathBuf};

use nla_site::types::PageOptions;
use serde::Deserialize;
use tracing::debug;

use crate::args::SectionToggles;
use crate::error::SiteError;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "nla-site.toml";

/// Output path used when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT: &str = "dist/index.html";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Where `build` writes the page
    pub output: Option<PathBuf>,
    /// `[sections]` table: toggles for content hidden by default
    pub sections: SectionsConfig,
}

/// Content excluded from the default page, switched on per site.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionsConfig {
    /// Render the Demo section (video and usage examples)
    pub demo: bool,
    /// Render the Expected Solution block in the Problem Statement
    pub expected_solution: bool,
}

impl SiteConfig {
    /// Resolve the config for this run.
    ///
    /// An explicit path must exist and parse. The implicit
    /// [`DEFAULT_CONFIG_FILE`] in `cwd` is optional.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self, SiteError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = cwd.join(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(&path)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, SiteError> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Page toggles: a section is shown if either the config or the CLI enables it.
    pub fn page_options(&self, toggles: SectionToggles) -> PageOptions {
        PageOptions {
            show_demo: self.sections.demo || toggles.with_demo,
            show_expected_solution: self.sections.expected_solution
                || toggles.with_expected_solution,
        }
    }

    /// Output path: CLI first, then config, then [`DEFAULT_OUTPUT`].
    pub fn output_path(&self, cli_out: Option<PathBuf>) -> PathBuf {
        cli_out
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}
