//! HTML minification for the final page.
//!
//! Thin wrapper around the `minify_html` crate with automatic
//! enable/disable based on `SiteConfig`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify HTML content when `[build] minify` is enabled.
///
/// Returns `Cow::Borrowed` if minify is disabled, `Cow::Owned` if minified.
pub fn minify_html<'a>(html: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return Cow::Borrowed(html);
    }

    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    Cow::Owned(minify_html::minify(html, &cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_html_basic() {
        let html = b"<html>\n  <head>\n  </head>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>";
        let result = minify_html(html, &config_with_minify(true));
        let result_str = String::from_utf8_lossy(&result);

        // Should remove unnecessary whitespace
        assert!(!result_str.contains("\n  "));
        assert!(result_str.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_minify_html_preserves_content() {
        let html = b"<p>Hello World</p>";
        let result = minify_html(html, &config_with_minify(true));

        assert!(String::from_utf8_lossy(&result).contains("Hello World"));
    }

    #[test]
    fn test_minify_html_disabled_is_borrowed() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";
        let result = minify_html(html, &config_with_minify(false));

        assert_eq!(&*result, html);
    }

    #[test]
    fn test_minify_html_enabled_shrinks() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";

        let minified = minify_html(html, &config_with_minify(true));
        let not_minified = minify_html(html, &config_with_minify(false));

        assert!(minified.len() < not_minified.len());
    }
}
