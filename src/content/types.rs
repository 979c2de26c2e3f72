//! Typed CMS content documents.
//!
//! Each type mirrors one JSON document the CMS produces. Documents are
//! externally-sourced and immutable: the loader aggregates and orders them,
//! it never mutates fields.

use serde::{Deserialize, Serialize};

/// Contact singleton (`contact.json`).
///
/// Social fields are optional; absent platforms are simply not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Company singleton (`company.json`), drives the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub about: String,
    pub copyright_year: u16,
}

/// Hero singleton (`hero.json`).
///
/// `headline` should contain `highlight` as a substring; when it does not,
/// the headline renders unstyled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub pre_headline: String,
    pub headline: String,
    pub highlight: String,
    pub description: String,
    pub primary_button: String,
    pub secondary_button: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<HeroStat>,
}

/// One hero statistic, e.g. `{ "number": 500, "suffix": "+", "label": "Clients" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub number: serde_json::Number,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    pub label: String,
}

/// About singleton (`about.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub headline: String,
    pub highlight: String,
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<AboutFeature>,
}

/// One about-section feature card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutFeature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Team member collection item (`team/<file>.json`).
///
/// The collection is sorted ascending by `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Service collection item (`services/<file>.json`), sorted ascending by `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: i64,
}

/// News collection item (`news/<file>.json`), sorted descending by `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub excerpt: String,

    /// ISO 8601 date string ("2025-07-31" or RFC3339).
    pub date: String,

    pub author: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
