//! `[base]` section configuration.
//!
//! Contains basic site information like title, description, url, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in vela.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Acme Technologies"
/// description = "Managed IT services"
/// url = "https://acme.example"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, informational only (the template carries the real head).
    #[serde(default)]
    pub title: String,

    /// Site description.
    #[serde(default)]
    pub description: String,

    /// Canonical site URL.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US", "de-DE").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
