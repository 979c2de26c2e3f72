//! Markup builders for the collection and headline sections.
//!
//! Each builder turns an ordered slice of documents into one markup
//! fragment; the processor writes the fragment as the target container's
//! entire content in a single step. All interpolated values are escaped.

use crate::content::types::{AboutFeature, HeroStat, NewsArticle, Service, TeamMember};
use crate::utils::{date::DateTimeUtc, html::html_escape};
use anyhow::Result;
use std::fmt::Write;

/// Gradient classes that mark the highlighted headline segment.
const HIGHLIGHT_CLASSES: &str =
    "bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent";

/// Split a headline on the first occurrence of `highlight` and wrap the
/// highlight segment in a styled span.
///
/// When the highlight is absent (or empty) the whole headline passes
/// through unstyled. A degenerate case, not an error.
pub fn highlight_headline(headline: &str, highlight: &str) -> String {
    if highlight.is_empty() {
        return html_escape(headline);
    }
    match headline.split_once(highlight) {
        Some((prefix, suffix)) => format!(
            "{}<span class=\"{HIGHLIGHT_CLASSES}\">{}</span>{}",
            html_escape(prefix),
            html_escape(highlight),
            html_escape(suffix)
        ),
        None => html_escape(headline),
    }
}

/// Hero statistics row.
pub fn hero_stats(stats: &[HeroStat]) -> Result<String> {
    let mut out = String::new();
    for stat in stats {
        let suffix = stat.suffix.as_deref().unwrap_or("");
        write!(
            out,
            "<div class=\"text-center\">\
             <div class=\"text-3xl font-bold text-accent\">{}{}</div>\
             <div class=\"text-gray-400 text-sm\">{}</div>\
             </div>",
            stat.number,
            html_escape(suffix),
            html_escape(&stat.label)
        )?;
    }
    Ok(out)
}

/// About-section feature list.
pub fn about_features(features: &[AboutFeature]) -> Result<String> {
    let mut out = String::new();
    for (index, feature) in features.iter().enumerate() {
        write!(
            out,
            "<div class=\"flex items-start space-x-4\" data-aos=\"fade-up\" data-aos-delay=\"{}\">\
             <div class=\"w-12 h-12 bg-gradient-to-br from-primary to-accent rounded-lg flex items-center justify-center flex-shrink-0\">\
             <i class=\"{} text-white\"> </i>\
             </div>\
             <div>\
             <h3 class=\"text-xl font-semibold mb-2\">{}</h3>\
             <p class=\"text-gray-300\">{}</p>\
             </div>\
             </div>",
            200 + index * 200,
            html_escape(&feature.icon),
            html_escape(&feature.title),
            html_escape(&feature.description)
        )?;
    }
    Ok(out)
}

/// Service card grid content.
pub fn service_cards(services: &[Service]) -> Result<String> {
    let mut out = String::new();
    for (index, service) in services.iter().enumerate() {
        write!(
            out,
            "<div class=\"group bg-gray-800/50 p-8 rounded-2xl border border-gray-700/50\" data-aos=\"fade-up\" data-aos-delay=\"{}\">\
             <div class=\"w-16 h-16 bg-gradient-to-br from-primary to-accent rounded-xl flex items-center justify-center mb-6\">\
             <i class=\"{} text-white text-2xl\"> </i>\
             </div>\
             <h3 class=\"text-2xl font-semibold mb-4\">{}</h3>\
             <p class=\"text-gray-300 mb-6 leading-relaxed\">{}</p>\
             <a href=\"#contact\" class=\"inline-flex items-center text-primary font-medium\">Learn More</a>\
             </div>",
            100 + index * 100,
            html_escape(&service.icon),
            html_escape(&service.title),
            html_escape(&service.description)
        )?;
    }
    Ok(out)
}

/// Team member card grid content.
pub fn team_cards(members: &[TeamMember]) -> Result<String> {
    let mut out = String::new();
    for (index, member) in members.iter().enumerate() {
        write!(
            out,
            "<div class=\"group text-center\" data-aos=\"fade-up\" data-aos-delay=\"{}\">\
             <div class=\"relative mb-6 overflow-hidden rounded-2xl\">",
            100 + index * 100
        )?;

        match &member.photo {
            Some(photo) => write!(
                out,
                "<img src=\"{}\" alt=\"{}\" class=\"aspect-square w-full object-cover\"/>",
                html_escape(photo),
                html_escape(&member.name)
            )?,
            None => out.push_str(
                "<div class=\"aspect-square bg-gradient-to-br from-primary/20 to-accent/20 flex items-center justify-center\">\
                 <i class=\"fas fa-user text-white text-3xl\"> </i>\
                 </div>",
            ),
        }

        write_member_socials(&mut out, member)?;

        write!(
            out,
            "</div>\
             <h3 class=\"text-xl font-semibold mb-2\">{}</h3>\
             <p class=\"text-primary font-medium\">{}</p>\
             <p class=\"text-gray-400 text-sm mt-2\">{}</p>\
             </div>",
            html_escape(&member.name),
            html_escape(&member.position),
            html_escape(&member.bio)
        )?;
    }
    Ok(out)
}

/// Hover overlay with the member's social links, when any are present.
fn write_member_socials(out: &mut String, member: &TeamMember) -> Result<()> {
    if member.linkedin.is_none() && member.twitter.is_none() {
        return Ok(());
    }

    out.push_str("<div class=\"absolute inset-0 flex items-end justify-center pb-6\"><div class=\"flex space-x-4\">");
    for (icon, url) in [
        ("fab fa-linkedin-in", &member.linkedin),
        ("fab fa-twitter", &member.twitter),
    ] {
        if let Some(url) = url {
            write!(
                out,
                "<a href=\"{}\" class=\"w-10 h-10 bg-primary rounded-full flex items-center justify-center text-white\" target=\"_blank\">\
                 <i class=\"{icon}\"> </i>\
                 </a>",
                html_escape(url)
            )?;
        }
    }
    out.push_str("</div></div>");
    Ok(())
}

/// News article card grid content.
pub fn news_cards(articles: &[NewsArticle]) -> Result<String> {
    let mut out = String::new();
    for (index, article) in articles.iter().enumerate() {
        write!(
            out,
            "<article class=\"group bg-gray-800/50 rounded-2xl overflow-hidden border border-gray-700/50\" data-aos=\"fade-up\" data-aos-delay=\"{}\">\
             <div class=\"aspect-video bg-gradient-to-br from-primary/20 to-accent/20 relative overflow-hidden\">",
            100 + index * 100
        )?;

        match &article.image {
            Some(image) => write!(
                out,
                "<img src=\"{}\" alt=\"{}\" class=\"w-full h-full object-cover\"/>",
                html_escape(image),
                html_escape(&article.title)
            )?,
            None => out.push_str(
                "<div class=\"absolute inset-0 flex items-center justify-center\">\
                 <i class=\"fas fa-newspaper text-4xl text-gray-400\"> </i>\
                 </div>",
            ),
        }

        write!(
            out,
            "<div class=\"absolute top-4 left-4 {} px-3 py-1 rounded-full text-sm font-medium\">{}</div>\
             </div>\
             <div class=\"p-6\">\
             <div class=\"flex items-center text-sm text-gray-400 mb-4\">\
             <span>{}</span><span class=\"mx-2\">\u{2022}</span><span>{}</span>\
             </div>\
             <h3 class=\"text-xl font-semibold mb-3\">{}</h3>\
             <p class=\"text-gray-300 mb-4 leading-relaxed\">{}</p>\
             <a href=\"{}\" class=\"inline-flex items-center text-primary font-medium\">Read More</a>\
             </div>\
             </article>",
            category_class(&article.category),
            html_escape(&article.category),
            html_escape(&display_date(&article.date)),
            html_escape(&article.author),
            html_escape(&article.title),
            html_escape(&article.excerpt),
            html_escape(article.url.as_deref().unwrap_or("#"))
        )?;
    }
    Ok(out)
}

/// Badge background class per news category.
fn category_class(category: &str) -> &'static str {
    match category {
        "Tech" => "bg-primary",
        "Innovation" => "bg-accent",
        "Security" => "bg-red-500",
        "News" => "bg-green-500",
        _ => "bg-primary",
    }
}

/// Human-readable article date; unparseable dates pass through as-is.
fn display_date(date: &str) -> String {
    DateTimeUtc::parse(date)
        .map(DateTimeUtc::format_short)
        .unwrap_or_else(|| date.to_string())
}
