//! Site initialization module.
//!
//! Creates a new site structure: default configuration, a starter template
//! carrying every content selector, and sample CMS fixtures so `vela build`
//! produces a complete page out of the box.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use serde_json::json;
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "vela.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["_data/team", "_data/services", "_data/news", "templates"];

/// Starter template. Well-formed markup (self-closed void elements); the
/// streaming rewriter depends on it.
const TEMPLATE: &str = r##"<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>vela starter</title>
</head>
<body class="bg-dark text-white">
<section id="hero">
<p class="hero-pre-headline">Welcome</p>
<h1 class="hero-headline">Your headline here</h1>
<p class="hero-description">Your description here.</p>
<a href="#contact" class="hero-primary-btn">Get Started</a>
<a href="#about" class="hero-secondary-btn">Learn More</a>
<div class="hero-stats grid grid-cols-3 gap-8"> </div>
</section>
<section id="about">
<h3 class="about-title">About Us</h3>
<h2 class="about-headline">Who we are</h2>
<p class="about-description">About text here.</p>
<div class="about-features space-y-8"> </div>
</section>
<section id="services">
<div class="services-grid grid grid-cols-3 gap-8"> </div>
</section>
<section id="team">
<div class="team-grid grid grid-cols-4 gap-8"> </div>
</section>
<section id="news">
<div class="news-grid grid grid-cols-3 gap-8"> </div>
</section>
<section id="contact">
<p class="contact-email">contact email</p>
<p class="contact-phone">contact phone</p>
<p class="contact-address">contact address</p>
<a href="mailto:placeholder">Email us</a>
<a href="tel:0">Call us</a>
<a href="https://linkedin.com/company/placeholder">LinkedIn</a>
<a href="https://twitter.com/placeholder">Twitter</a>
</section>
<footer>
<span class="company-name">Company</span>
<p class="company-about">Company about text.</p>
<p class="copyright-year">©2025 Company. All rights reserved.</p>
</footer>
</body>
</html>
"##;

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `vela init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    init_template(root)?;
    init_sample_content(root)?;

    crate::log!("init"; "site created at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `vela init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write default configuration file with the scaffold's manifest
fn init_default_config(root: &Path) -> Result<()> {
    let mut config = SiteConfig::default();
    config.base.title = "My Site".into();
    config.content.manifest.team = vec!["alex-reed.json".into(), "casey-morgan.json".into()];
    config.content.manifest.services = vec![
        "cloud-platforms.json".into(),
        "network-security.json".into(),
        "it-consulting.json".into(),
    ];
    config.content.manifest.news = vec![
        "2025-07-31-platform-launch.json".into(),
        "2025-07-25-security-checklist.json".into(),
    ];

    let content = toml::to_string_pretty(&config)?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Write the starter template
fn init_template(root: &Path) -> Result<()> {
    fs::write(root.join("templates/index.html"), TEMPLATE)?;
    Ok(())
}

/// Write sample CMS fixtures matching the scaffold manifest
fn init_sample_content(root: &Path) -> Result<()> {
    let data = root.join("_data");

    let documents = [
        (
            "contact.json".to_string(),
            json!({
                "email": "hello@example.com",
                "phone": "+1 (555) 010-0100",
                "address": "1 Main Street, Springfield",
                "linkedin": "https://linkedin.com/company/example",
                "twitter": "https://twitter.com/example"
            }),
        ),
        (
            "company.json".to_string(),
            json!({
                "name": "Example Co",
                "about": "We keep businesses online.",
                "copyright_year": 2025
            }),
        ),
        (
            "hero.json".to_string(),
            json!({
                "pre_headline": "IT Services and Consulting",
                "headline": "Building a Digital Future",
                "highlight": "Digital Future",
                "description": "Cloud, security and infrastructure for growing teams.",
                "primary_button": "Get Started",
                "secondary_button": "Our Services",
                "stats": [
                    { "number": 500, "suffix": "+", "label": "Projects" },
                    { "number": 99.9, "suffix": "%", "label": "Uptime" },
                    { "number": 15, "label": "Years" }
                ]
            }),
        ),
        (
            "about.json".to_string(),
            json!({
                "title": "About Us",
                "headline": "Technology you can rely on",
                "highlight": "rely on",
                "description": "A senior team with a decade of infrastructure work behind it.",
                "features": [
                    { "icon": "fas fa-shield-halved", "title": "Security first", "description": "Hardened by default." },
                    { "icon": "fas fa-clock", "title": "Around the clock", "description": "Monitoring that never sleeps." }
                ]
            }),
        ),
        (
            "team/alex-reed.json".to_string(),
            json!({
                "name": "Alex Reed",
                "position": "Chief Technology Officer",
                "bio": "Keeps the platforms honest.",
                "order": 1,
                "linkedin": "https://linkedin.com/in/alex-reed"
            }),
        ),
        (
            "team/casey-morgan.json".to_string(),
            json!({
                "name": "Casey Morgan",
                "position": "Head of Operations",
                "bio": "Runs the day to day.",
                "order": 2
            }),
        ),
        (
            "services/cloud-platforms.json".to_string(),
            json!({
                "title": "Cloud Platforms",
                "description": "Design, migration and operation of cloud workloads.",
                "icon": "fas fa-cloud",
                "order": 1
            }),
        ),
        (
            "services/network-security.json".to_string(),
            json!({
                "title": "Network Security",
                "description": "Perimeter to endpoint, audited and monitored.",
                "icon": "fas fa-lock",
                "order": 2
            }),
        ),
        (
            "services/it-consulting.json".to_string(),
            json!({
                "title": "IT Consulting",
                "description": "Strategy and architecture reviews.",
                "icon": "fas fa-compass",
                "order": 3
            }),
        ),
        (
            "news/2025-07-31-platform-launch.json".to_string(),
            json!({
                "title": "New platform launch",
                "excerpt": "Our managed platform is generally available.",
                "date": "2025-07-31",
                "author": "Alex Reed",
                "category": "Tech"
            }),
        ),
        (
            "news/2025-07-25-security-checklist.json".to_string(),
            json!({
                "title": "A security checklist for small teams",
                "excerpt": "Ten checks that take an afternoon.",
                "date": "2025-07-25",
                "author": "Casey Morgan",
                "category": "Security"
            }),
        ),
    ];

    for (rel, body) in documents {
        let path = data.join(&rel);
        fs::write(&path, serde_json::to_string_pretty(&body)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
