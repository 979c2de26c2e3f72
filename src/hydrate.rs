//! Hydration orchestration.
//!
//! # Architecture
//!
//! ```text
//! run()
//!     │
//!     ├── fetch phase ──► ContentLoader::load_all()
//!     │       all manifest resources fetched concurrently; the phase
//!     │       settles completely before rendering starts
//!     │
//!     ├── render phase ─► render_page(template, snapshot)
//!     │       one streaming pass, per-section guarded replacements
//!     │
//!     └── write ────────► minify (optional), <output>/index.html
//! ```

use crate::{
    config::SiteConfig,
    content::SiteContent,
    fetch::ContentLoader,
    log, render,
    utils::minify::minify_html,
};
use anyhow::{Context, Result};
use std::fs;

/// Output filename inside the output directory.
const OUTPUT_FILE: &str = "index.html";

/// Fetch the content snapshot and hydrate the template into the output
/// directory.
pub fn run(config: &SiteConfig) -> Result<()> {
    let template_path = &config.build.template;
    let template = fs::read(template_path).with_context(|| {
        format!("Failed to read template `{}`", template_path.display())
    })?;

    log!(
        "fetch";
        "loading {} resources from {}",
        config.content.manifest.resource_count(),
        config.content.source
    );
    let snapshot = fetch_snapshot(config);
    log_snapshot(&snapshot);

    let page = render::render_page(&template, &snapshot)?;
    let page = minify_html(&page, config);

    write_output(config, &page)
}

/// Run the whole fetch phase on a fresh runtime.
///
/// Per-resource failures are already absorbed inside the loader; an
/// unexpected failure here (runtime construction) degrades to an empty
/// snapshot so the page still builds with its template placeholders.
fn fetch_snapshot(config: &SiteConfig) -> SiteContent {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            log!("error"; "content load failed: {err}");
            return SiteContent::default();
        }
    };

    runtime.block_on(ContentLoader::new(config).load_all())
}

fn log_snapshot(snapshot: &SiteContent) {
    if snapshot.is_empty() {
        log!("warn"; "no content loaded, output keeps template placeholders");
    } else {
        log!(
            "fetch";
            "{} sections ready ({} team, {} services, {} news)",
            snapshot.section_count(),
            snapshot.team.len(),
            snapshot.services.len(),
            snapshot.news.len()
        );
    }
}

fn write_output(config: &SiteConfig, page: &[u8]) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let path = output.join(OUTPUT_FILE);
    fs::write(&path, page)
        .with_context(|| format!("Failed to write `{}`", path.display()))?;

    log!("build"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_for(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.template = root.join("templates/index.html");
        config.build.output = root.join("public");
        config.build.minify = false;
        config.content.source = root.join("_data").to_str().unwrap().to_string();
        config.content.manifest.team = vec![];
        config.content.manifest.services = vec![];
        config.content.manifest.news = vec![];
        config
    }

    #[test]
    fn test_run_with_missing_content_keeps_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("templates")).unwrap();
        std::fs::write(
            root.join("templates/index.html"),
            "<html><body><h1 class=\"hero-headline\">placeholder</h1></body></html>",
        )
        .unwrap();

        // No _data directory at all: every fetch fails, the build still runs
        run(&config_for(root)).unwrap();

        let page = std::fs::read_to_string(root.join("public/index.html")).unwrap();
        assert!(page.contains("placeholder"));
    }

    #[test]
    fn test_run_missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&config_for(dir.path()));

        assert!(result.is_err());
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("templates")).unwrap();
        std::fs::write(root.join("templates/index.html"), "<html><body> </body></html>").unwrap();
        std::fs::create_dir_all(root.join("public")).unwrap();
        std::fs::write(root.join("public/stale.html"), "old").unwrap();

        let mut config = config_for(root);
        config.build.clean = true;
        run(&config).unwrap();

        assert!(!root.join("public/stale.html").exists());
        assert!(root.join("public/index.html").exists());
    }
}
