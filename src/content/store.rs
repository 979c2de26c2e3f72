//! The immutable content snapshot.
//!
//! The fetch phase joins its independent per-resource outcomes into one
//! [`SiteContent`] value; the render phase only ever reads it. That phase
//! separation is the whole synchronization story: no key is written after
//! assembly, no shared accumulator exists.
//!
//! An absent singleton (`None`) and an empty collection mean the same thing
//! to renderers: leave the section alone.

use std::cmp::Ordering;

use super::types::{About, Company, Contact, Hero, NewsArticle, Service, TeamMember};
use crate::utils::date::DateTimeUtc;

/// All content for one page, assembled once per build.
#[derive(Debug, Default, Clone)]
pub struct SiteContent {
    pub contact: Option<Contact>,
    pub company: Option<Company>,
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub team: Vec<TeamMember>,
    pub services: Vec<Service>,
    pub news: Vec<NewsArticle>,
}

impl SiteContent {
    /// True when no resource loaded at all.
    pub fn is_empty(&self) -> bool {
        self.contact.is_none()
            && self.company.is_none()
            && self.hero.is_none()
            && self.about.is_none()
            && self.team.is_empty()
            && self.services.is_empty()
            && self.news.is_empty()
    }

    /// Number of page sections that will actually render.
    pub fn section_count(&self) -> usize {
        [
            self.hero.is_some(),
            self.about.is_some(),
            !self.services.is_empty(),
            !self.team.is_empty(),
            !self.news.is_empty(),
            self.contact.is_some(),
            self.company.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Assemble an ordered collection from per-member fetch outcomes.
///
/// Failed members (`None`) are dropped; survivors are sorted ascending by
/// their `order` key. The sort is stable, so ties keep manifest order.
pub fn assemble_ordered<T>(members: Vec<Option<T>>, order: impl Fn(&T) -> i64) -> Vec<T> {
    let mut items: Vec<T> = members.into_iter().flatten().collect();
    items.sort_by_key(order);
    items
}

/// Assemble the news collection: failed members dropped, survivors sorted
/// newest first by parsed date. Unparseable dates sort last; ties keep
/// manifest order.
pub fn assemble_dated(members: Vec<Option<NewsArticle>>) -> Vec<NewsArticle> {
    let mut items: Vec<NewsArticle> = members.into_iter().flatten().collect();
    items.sort_by(|a, b| compare_by_date(DateTimeUtc::parse(&a.date), DateTimeUtc::parse(&b.date)));
    items
}

/// Compare two parsed dates for newest-first ordering.
///
/// Dated items come before undated ones.
fn compare_by_date(a: Option<DateTimeUtc>, b: Option<DateTimeUtc>) -> Ordering {
    match (b, a) {
        (Some(date_b), Some(date_a)) => date_b.cmp(&date_a),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(title: &str, order: i64) -> Service {
        Service {
            title: title.to_string(),
            description: "desc".to_string(),
            icon: "fas fa-cloud".to_string(),
            order,
        }
    }

    fn article(title: &str, date: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            date: date.to_string(),
            author: "author".to_string(),
            category: "Tech".to_string(),
            image: None,
            url: None,
        }
    }

    #[test]
    fn test_assemble_ordered_sorts_ascending() {
        let members = vec![
            Some(service("third", 3)),
            Some(service("first", 1)),
            Some(service("second", 2)),
        ];
        let services = assemble_ordered(members, |s| s.order);

        let titles: Vec<_> = services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_assemble_ordered_drops_failed_members() {
        let members = vec![
            Some(service("a", 2)),
            None,
            Some(service("b", 1)),
            None,
        ];
        let services = assemble_ordered(members, |s| s.order);

        assert_eq!(services.len(), 2);
        assert_eq!(services[0].title, "b");
        assert_eq!(services[1].title, "a");
    }

    #[test]
    fn test_assemble_ordered_stable_under_ties() {
        let members = vec![
            Some(service("alpha", 1)),
            Some(service("beta", 1)),
            Some(service("gamma", 1)),
        ];
        let services = assemble_ordered(members, |s| s.order);

        // Equal keys keep manifest order
        let titles: Vec<_> = services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_assemble_ordered_all_failed_is_empty() {
        let members: Vec<Option<Service>> = vec![None, None, None];
        assert!(assemble_ordered(members, |s| s.order).is_empty());
    }

    #[test]
    fn test_assemble_dated_newest_first() {
        let members = vec![
            Some(article("transformation", "2025-07-31")),
            Some(article("cybersecurity", "2025-07-25")),
            Some(article("insights", "2025-07-29")),
        ];
        let news = assemble_dated(members);

        let dates: Vec<_> = news.iter().map(|n| n.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-07-31", "2025-07-29", "2025-07-25"]);
    }

    #[test]
    fn test_assemble_dated_unparseable_dates_sort_last() {
        let members = vec![
            Some(article("bad", "someday")),
            Some(article("good", "2025-07-25")),
        ];
        let news = assemble_dated(members);

        assert_eq!(news[0].title, "good");
        assert_eq!(news[1].title, "bad");
    }

    #[test]
    fn test_assemble_dated_drops_failed_members() {
        let members = vec![
            None,
            Some(article("only", "2025-07-25")),
            None,
        ];
        let news = assemble_dated(members);

        assert_eq!(news.len(), 1);
        assert_eq!(news[0].title, "only");
    }

    #[test]
    fn test_snapshot_is_empty() {
        let content = SiteContent::default();
        assert!(content.is_empty());
        assert_eq!(content.section_count(), 0);

        let content = SiteContent {
            services: vec![service("a", 1)],
            ..Default::default()
        };
        assert!(!content.is_empty());
        assert_eq!(content.section_count(), 1);
    }
}
