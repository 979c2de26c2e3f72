//! Contact and footer rewrites.
//!
//! These targets are attribute- and text-addressed rather than
//! container-addressed: every `mailto:` link points at the contact email,
//! every `tel:` link at the phone digits, and any anchor whose href
//! mentions a social platform name gets that platform's URL. The substring
//! match is deliberately loose: it is the documented best-effort heuristic,
//! not a strict field binding.

use crate::content::types::{Company, Contact};
use regex::Regex;
use std::sync::LazyLock;

/// `©YYYY` token in footer copyright text.
static COPYRIGHT_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"©\d{4}").unwrap());

/// Anything that is not a phone digit.
static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());

/// Compute the replacement href for an anchor, if any applies.
///
/// When several platform names occur in one href, the last platform in the
/// fixed order wins.
pub fn rewrite_href(href: &str, contact: &Contact) -> Option<String> {
    if href.starts_with("mailto:") {
        return Some(format!("mailto:{}", contact.email));
    }
    if href.starts_with("tel:") {
        return Some(format!("tel:{}", NON_DIGIT.replace_all(&contact.phone, "")));
    }

    let platforms = [
        ("linkedin", &contact.linkedin),
        ("twitter", &contact.twitter),
        ("facebook", &contact.facebook),
        ("instagram", &contact.instagram),
    ];

    let mut replacement = None;
    for (name, url) in platforms {
        if let Some(url) = url
            && href.contains(name)
        {
            replacement = Some(url.clone());
        }
    }
    replacement
}

/// Substitute the first `©YYYY` token in footer copyright text.
pub fn rewrite_copyright(text: &str, company: &Company) -> String {
    COPYRIGHT_YEAR
        .replace(text, format!("©{}", company.copyright_year))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact {
            email: "hello@acme.example".to_string(),
            phone: "+1 (555) 010-0100".to_string(),
            address: "1 Main St".to_string(),
            linkedin: Some("https://linkedin.com/company/acme".to_string()),
            twitter: None,
            facebook: Some("https://facebook.com/acme".to_string()),
            instagram: None,
        }
    }

    #[test]
    fn test_mailto_rewrite() {
        assert_eq!(
            rewrite_href("mailto:old@nowhere.example", &contact()).as_deref(),
            Some("mailto:hello@acme.example")
        );
    }

    #[test]
    fn test_tel_rewrite_strips_non_digits() {
        assert_eq!(
            rewrite_href("tel:+10000000000", &contact()).as_deref(),
            Some("tel:15550100100")
        );
    }

    #[test]
    fn test_platform_substring_match() {
        assert_eq!(
            rewrite_href("https://linkedin.com/company/placeholder", &contact()).as_deref(),
            Some("https://linkedin.com/company/acme")
        );
        // Any href containing the platform name matches, loose on purpose
        assert_eq!(
            rewrite_href("#facebook", &contact()).as_deref(),
            Some("https://facebook.com/acme")
        );
    }

    #[test]
    fn test_absent_platform_is_not_rewritten() {
        // Contact has no twitter, so twitter-matching hrefs stay put
        assert_eq!(rewrite_href("https://twitter.com/placeholder", &contact()), None);
    }

    #[test]
    fn test_unrelated_href_is_not_rewritten() {
        assert_eq!(rewrite_href("#services", &contact()), None);
        assert_eq!(rewrite_href("https://example.com", &contact()), None);
    }

    #[test]
    fn test_last_matching_platform_wins() {
        let href = "https://linkedin.com/share?next=facebook";
        assert_eq!(
            rewrite_href(href, &contact()).as_deref(),
            Some("https://facebook.com/acme")
        );
    }

    #[test]
    fn test_rewrite_copyright() {
        let company = Company {
            name: "Acme".to_string(),
            about: "About".to_string(),
            copyright_year: 2025,
        };

        assert_eq!(
            rewrite_copyright("©2019 Acme. All rights reserved.", &company),
            "©2025 Acme. All rights reserved."
        );
        // No token, no change
        assert_eq!(rewrite_copyright("All rights reserved.", &company), "All rights reserved.");
    }
}
