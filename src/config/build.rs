//! `[build]` section configuration.
//!
//! Contains build settings: template and output paths, minification.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in vela.toml - hydration pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// template = "templates/index.html"
/// output = "public"
/// minify = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Site root directory (usually set via CLI `--root`).
    #[serde(skip)]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// HTML template file to hydrate.
    #[serde(default = "defaults::build::template")]
    #[educe(Default = defaults::build::template())]
    pub template: PathBuf,

    /// Output directory for the hydrated page.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify the HTML output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear the output directory completely before building.
    #[serde(default = "defaults::r#false")]
    pub clean: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]\ntitle = \"T\"").unwrap();

        assert_eq!(config.build.template, PathBuf::from("templates/index.html"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
    }

    #[test]
    fn test_build_config_custom() {
        let config = r#"
            [build]
            template = "site/page.html"
            output = "dist"
            minify = false
            clean = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.template, PathBuf::from("site/page.html"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
    }
}
