//! CMS content loading.
//!
//! One fetch per singleton document, one fetch per collection member, all
//! issued concurrently and awaited jointly. Failures stay local: a failed
//! singleton leaves its key absent, a failed member shrinks its collection,
//! and a fully-failed collection becomes an empty list. Rendering never
//! starts before every fetch has settled.

mod source;

pub use source::{ContentSource, FetchError};

use crate::{
    config::{NEWS_DIR, SERVICES_DIR, SiteConfig, TEAM_DIR},
    content::{
        SiteContent,
        store::{assemble_dated, assemble_ordered},
        types::{About, Company, Contact, Hero, NewsArticle, Service, TeamMember},
    },
    log,
};
use futures::future::join_all;
use serde::de::DeserializeOwned;

/// Fetches the manifest's resources and assembles the content snapshot.
pub struct ContentLoader<'c> {
    source: ContentSource,
    config: &'c SiteConfig,
}

impl<'c> ContentLoader<'c> {
    pub fn new(config: &'c SiteConfig) -> Self {
        Self {
            source: ContentSource::from_config(&config.content.source, config.get_root()),
            config,
        }
    }

    /// Fetch every manifest resource concurrently and assemble the snapshot.
    ///
    /// This is the whole fetch phase: by the time it returns, every resource
    /// has settled and the snapshot is complete and immutable. Individual
    /// failures degrade the snapshot; they never fail the build.
    pub async fn load_all(&self) -> SiteContent {
        let manifest = &self.config.content.manifest;

        let (contact, company, hero, about, team, services, news) = tokio::join!(
            self.load_singleton::<Contact>(&manifest.contact),
            self.load_singleton::<Company>(&manifest.company),
            self.load_singleton::<Hero>(&manifest.hero),
            self.load_singleton::<About>(&manifest.about),
            self.load_collection::<TeamMember>(TEAM_DIR, &manifest.team),
            self.load_collection::<Service>(SERVICES_DIR, &manifest.services),
            self.load_collection::<NewsArticle>(NEWS_DIR, &manifest.news),
        );

        SiteContent {
            contact,
            company,
            hero,
            about,
            team: assemble_ordered(team, |member| member.order),
            services: assemble_ordered(services, |service| service.order),
            news: assemble_dated(news),
        }
    }

    /// Fetch one singleton document; failure leaves the key absent.
    async fn load_singleton<T: DeserializeOwned>(&self, rel: &str) -> Option<T> {
        match self.source.fetch_json(rel).await {
            Ok(doc) => Some(doc),
            Err(err) => {
                log!("fetch"; "failed to load {rel}: {err}");
                None
            }
        }
    }

    /// Fetch all members of one collection; failed members come back `None`
    /// and are filtered out during assembly.
    async fn load_collection<T: DeserializeOwned>(
        &self,
        dir: &str,
        files: &[String],
    ) -> Vec<Option<T>> {
        join_all(files.iter().map(|file| self.load_member::<T>(dir, file))).await
    }

    async fn load_member<T: DeserializeOwned>(&self, dir: &str, file: &str) -> Option<T> {
        let rel = format!("{dir}/{file}");
        match self.source.fetch_json(&rel).await {
            Ok(item) => Some(item),
            Err(err) => {
                log!("fetch"; "failed to load {rel}: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    /// Write a fixture tree with the given team members and a full set of
    /// singletons, returning a config whose manifest matches.
    fn fixture_site(dir: &Path, team_files: &[(&str, serde_json::Value)]) -> SiteConfig {
        fs::create_dir_all(dir.join("team")).unwrap();
        fs::create_dir_all(dir.join("services")).unwrap();
        fs::create_dir_all(dir.join("news")).unwrap();

        fs::write(
            dir.join("contact.json"),
            json!({
                "email": "hello@acme.example",
                "phone": "+1 (555) 010-0100",
                "address": "1 Main St",
                "linkedin": "https://linkedin.com/company/acme"
            })
            .to_string(),
        )
        .unwrap();
        fs::write(
            dir.join("company.json"),
            json!({ "name": "Acme", "about": "We build things.", "copyright_year": 2025 })
                .to_string(),
        )
        .unwrap();
        fs::write(
            dir.join("hero.json"),
            json!({
                "pre_headline": "Welcome",
                "headline": "Building a Digital Future",
                "highlight": "Digital Future",
                "description": "D",
                "primary_button": "Go",
                "secondary_button": "More"
            })
            .to_string(),
        )
        .unwrap();
        fs::write(
            dir.join("about.json"),
            json!({
                "title": "About",
                "headline": "Who We Are",
                "highlight": "We",
                "description": "D"
            })
            .to_string(),
        )
        .unwrap();

        for (file, body) in team_files {
            fs::write(dir.join("team").join(file), body.to_string()).unwrap();
        }

        let mut config = SiteConfig::default();
        config.content.source = dir.to_str().unwrap().to_string();
        config.content.manifest.team = team_files
            .iter()
            .map(|(file, _)| file.to_string())
            .collect();
        config.content.manifest.services = vec![];
        config.content.manifest.news = vec![];
        config
    }

    fn member(name: &str, order: i64) -> serde_json::Value {
        json!({ "name": name, "position": "Engineer", "bio": "bio", "order": order })
    }

    #[tokio::test]
    async fn test_load_all_assembles_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture_site(
            dir.path(),
            &[("b.json", member("Second", 2)), ("a.json", member("First", 1))],
        );

        let content = ContentLoader::new(&config).load_all().await;

        assert!(content.contact.is_some());
        assert!(content.company.is_some());
        assert!(content.hero.is_some());
        assert!(content.about.is_some());
        assert_eq!(content.team.len(), 2);
        // Sorted by order, not manifest order
        assert_eq!(content.team[0].name, "First");
        assert_eq!(content.team[1].name, "Second");
    }

    #[tokio::test]
    async fn test_missing_member_shrinks_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture_site(
            dir.path(),
            &[("a.json", member("First", 1)), ("c.json", member("Third", 3))],
        );
        // Manifest names a member whose file does not exist
        config.content.manifest.team.push("ghost.json".to_string());

        let content = ContentLoader::new(&config).load_all().await;

        assert_eq!(content.team.len(), 2);
        assert_eq!(content.team[0].name, "First");
        assert_eq!(content.team[1].name, "Third");
        // Other sections are unaffected
        assert!(content.hero.is_some());
    }

    #[tokio::test]
    async fn test_malformed_member_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture_site(dir.path(), &[("a.json", member("Only", 1))]);
        fs::write(dir.path().join("team/broken.json"), "{ not json").unwrap();
        config.content.manifest.team.push("broken.json".to_string());

        let content = ContentLoader::new(&config).load_all().await;
        assert_eq!(content.team.len(), 1);
        assert_eq!(content.team[0].name, "Only");
    }

    #[tokio::test]
    async fn test_all_singletons_missing_yields_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.content.source = dir.path().to_str().unwrap().to_string();
        config.content.manifest.team = vec![];
        config.content.manifest.services = vec![];
        config.content.manifest.news = vec![];

        let content = ContentLoader::new(&config).load_all().await;

        assert!(content.is_empty());
        // Collections are empty lists, never absent keys
        assert_eq!(content.team.len(), 0);
        assert_eq!(content.services.len(), 0);
        assert_eq!(content.news.len(), 0);
    }

    #[tokio::test]
    async fn test_news_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture_site(dir.path(), &[]);

        for (file, date) in [
            ("a.json", "2025-07-31"),
            ("b.json", "2025-07-25"),
            ("c.json", "2025-07-29"),
        ] {
            fs::write(
                dir.path().join("news").join(file),
                json!({
                    "title": date,
                    "excerpt": "E",
                    "date": date,
                    "author": "A",
                    "category": "Tech"
                })
                .to_string(),
            )
            .unwrap();
        }
        config.content.manifest.news =
            vec!["a.json".into(), "b.json".into(), "c.json".into()];

        let content = ContentLoader::new(&config).load_all().await;

        let dates: Vec<_> = content.news.iter().map(|n| n.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-07-31", "2025-07-29", "2025-07-25"]);
    }
}
