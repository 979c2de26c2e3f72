//! Site configuration management for `vela.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[base]`     | Site metadata (title, description, url)        |
//! | `[content]`  | CMS source and the fixed resource manifest     |
//! | `[build]`    | Template and output paths, minification        |
//! | `[extra]`    | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Acme Technologies"
//! description = "Managed IT services"
//!
//! [content]
//! source = "_data"
//!
//! [content.manifest]
//! team = ["patricia-wilkinson.json", "jack-williamson.json"]
//!
//! [build]
//! template = "templates/index.html"
//! output = "public"
//! minify = true
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
mod build;
mod content;
pub mod defaults;
mod error;

// Re-export public types used by other modules
pub use content::{ContentConfig, ManifestConfig, NEWS_DIR, SERVICES_DIR, TEAM_DIR};

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing vela.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content source and manifest
    #[serde(default)]
    pub content: ContentConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
            Self::update_option(&mut self.content.source, build_args.source.as_ref());
            if build_args.clean {
                self.build.clean = true;
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.template, cli.template.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all file/directory paths
        self.build.template = Self::normalize_path(&root.join(&self.build.template));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.content.source.is_empty() {
            bail!(ConfigError::Validation(
                "[content.source] must not be empty".into()
            ));
        }

        if let Some(cli) = self.cli
            && cli.is_build()
            && !self.build.template.is_file()
        {
            bail!(ConfigError::Validation(format!(
                "[build.template] not found: {}",
                self.build.template.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
