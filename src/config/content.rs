//! `[content]` section configuration.
//!
//! Declares where CMS documents are fetched from and the fixed resource
//! manifest: which singleton documents exist and which files make up each
//! collection. The manifest is static configuration: resources are never
//! discovered dynamically.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Collection subdirectories, relative to the content source.
pub const TEAM_DIR: &str = "team";
pub const SERVICES_DIR: &str = "services";
pub const NEWS_DIR: &str = "news";

/// `[content]` section in vela.toml - content source and resource manifest.
///
/// # Example
/// ```toml
/// [content]
/// source = "https://cms.acme.example/_data"
///
/// [content.manifest]
/// hero = "hero.json"
/// team = ["alice.json", "bob.json"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Where CMS documents live.
    ///
    /// `http://`/`https://` values are remote endpoints; anything else is a
    /// directory path relative to the site root.
    #[serde(default = "defaults::content::source")]
    #[educe(Default = defaults::content::source())]
    pub source: String,

    /// The fixed set of documents to fetch.
    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// `[content.manifest]` - resource paths per content key.
///
/// Singleton entries are paths relative to the source; collection entries
/// are filenames under their collection directory (`team/`, `services/`,
/// `news/`).
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    #[serde(default = "defaults::manifest::contact")]
    #[educe(Default = defaults::manifest::contact())]
    pub contact: String,

    #[serde(default = "defaults::manifest::company")]
    #[educe(Default = defaults::manifest::company())]
    pub company: String,

    #[serde(default = "defaults::manifest::hero")]
    #[educe(Default = defaults::manifest::hero())]
    pub hero: String,

    #[serde(default = "defaults::manifest::about")]
    #[educe(Default = defaults::manifest::about())]
    pub about: String,

    #[serde(default = "defaults::manifest::team")]
    #[educe(Default = defaults::manifest::team())]
    pub team: Vec<String>,

    #[serde(default = "defaults::manifest::services")]
    #[educe(Default = defaults::manifest::services())]
    pub services: Vec<String>,

    #[serde(default = "defaults::manifest::news")]
    #[educe(Default = defaults::manifest::news())]
    pub news: Vec<String>,
}

impl ManifestConfig {
    /// Total number of resources the manifest names.
    pub fn resource_count(&self) -> usize {
        4 + self.team.len() + self.services.len() + self.news.len()
    }
}
