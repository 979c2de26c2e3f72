//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    pub fn source() -> String {
        "_data".into()
    }
}

// ============================================================================
// [content.manifest] Defaults
// ============================================================================
//
// The default manifest reproduces the resource lists the site shipped with.

pub mod manifest {
    pub fn contact() -> String {
        "contact.json".into()
    }

    pub fn company() -> String {
        "company.json".into()
    }

    pub fn hero() -> String {
        "hero.json".into()
    }

    pub fn about() -> String {
        "about.json".into()
    }

    pub fn team() -> Vec<String> {
        [
            "patricia-wilkinson.json",
            "jack-williamson.json",
            "kendra-cremin.json",
            "dennis-jacobson.json",
        ]
        .map(String::from)
        .to_vec()
    }

    pub fn services() -> Vec<String> {
        [
            "cloud-computing.json",
            "infrastructure-management.json",
            "cybersecurity.json",
            "consulting.json",
            "managed-services.json",
            "network-security.json",
        ]
        .map(String::from)
        .to_vec()
    }

    pub fn news() -> Vec<String> {
        [
            "2025-07-31-technology-transformation.json",
            "2025-07-29-tech-insights.json",
            "2025-07-25-cybersecurity-practices.json",
        ]
        .map(String::from)
        .to_vec()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn template() -> PathBuf {
        "templates/index.html".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }
}
