//! Template rendering: one streaming pass, selector-keyed replacements.
//!
//! The template is walked once with `quick-xml`. Elements whose class list
//! names a content section get their entire inner content replaced in a
//! single write; anchor hrefs are rewritten from the contact document. A
//! section whose data is missing or empty is left untouched, and a failing
//! section builder is logged and contained; sibling sections still render.
//!
//! Rendering is a pure function of (template, snapshot): re-rendering its
//! own output produces byte-identical bytes.

mod common;
mod contact;
mod sections;

use crate::{content::SiteContent, log, utils::html::html_escape};
use anyhow::Result;
use common::{XmlWriter, create_xml_reader, element_classes, has_class, rebuild_elem, write_raw};
use quick_xml::{
    Reader, Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

/// A computed replacement for one target element's content.
enum Replacement {
    /// Plain text, escaped on write.
    Text(String),
    /// Pre-built markup fragment, written verbatim.
    Html(String),
}

/// Hydrate the template with the content snapshot.
///
/// Runs after the fetch phase has fully settled; the snapshot is read-only
/// here. An empty snapshot yields the template unchanged (modulo markup
/// normalization), never an error.
pub fn render_page(template: &[u8], content: &SiteContent) -> Result<Vec<u8>> {
    let mut reader = create_xml_reader(template);
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(template.len())));

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem)) => {
                handle_start_element(&elem, &mut reader, &mut writer, content)?;
            }
            Ok(Event::Empty(elem)) => {
                writer.write_event(Event::Empty(rewrite_attributes(&elem, content)))?;
            }
            Ok(Event::Eof) => break,
            Ok(event) => writer.write_event(event)?,
            Err(e) => anyhow::bail!(
                "template parse error at position {}: {:?}",
                reader.error_position(),
                e
            ),
        }
    }

    Ok(writer.into_inner().into_inner())
}

fn handle_start_element(
    elem: &BytesStart<'_>,
    reader: &mut Reader<&[u8]>,
    writer: &mut XmlWriter,
    content: &SiteContent,
) -> Result<()> {
    let rewritten = rewrite_attributes(elem, content);

    // The copyright target edits its existing text rather than replacing it
    if has_class(elem, "copyright-year")
        && let Some(company) = &content.company
    {
        let existing = reader.read_text(elem.name())?;
        writer.write_event(Event::Start(rewritten))?;
        let updated = contact::rewrite_copyright(&existing, company);
        writer.write_event(Event::Text(BytesText::new(&updated)))?;
        writer.write_event(Event::End(BytesEnd::new(tag_name(elem))))?;
        return Ok(());
    }

    match replacement_for(elem, content) {
        Ok(Some(replacement)) => {
            writer.write_event(Event::Start(rewritten))?;
            // Discard the template's placeholder content in one step
            reader.read_to_end(elem.name())?;
            match replacement {
                Replacement::Text(text) => {
                    writer.write_event(Event::Text(BytesText::new(&text)))?;
                }
                Replacement::Html(html) => write_raw(writer, &html)?,
            }
            writer.write_event(Event::End(BytesEnd::new(tag_name(elem))))?;
        }
        Ok(None) => writer.write_event(Event::Start(rewritten))?,
        Err(err) => {
            // One failing section must not take its siblings down
            log!("render"; "section left untouched: {err:#}");
            writer.write_event(Event::Start(rewritten))?;
        }
    }
    Ok(())
}

/// Rewrite contact-addressed hrefs on anchors; other elements pass through.
fn rewrite_attributes(elem: &BytesStart<'_>, content: &SiteContent) -> BytesStart<'static> {
    if elem.name().as_ref() == b"a"
        && let Some(contact_doc) = &content.contact
    {
        return rebuild_elem(elem, |key, value| {
            if key == b"href" {
                let href = String::from_utf8_lossy(value.as_ref());
                if let Some(new_href) = contact::rewrite_href(&href, contact_doc) {
                    return html_escape(&new_href).into_bytes().into();
                }
            }
            value.into_owned().into()
        });
    }
    elem.to_owned()
}

/// Find the replacement for an element, if its class list names a section
/// whose data is present. Missing data means no replacement (guarded no-op).
fn replacement_for(elem: &BytesStart<'_>, content: &SiteContent) -> Result<Option<Replacement>> {
    let Some(classes) = element_classes(elem) else {
        return Ok(None);
    };
    for class in classes.split_whitespace() {
        if let Some(replacement) = class_replacement(class, content)? {
            return Ok(Some(replacement));
        }
    }
    Ok(None)
}

fn class_replacement(class: &str, content: &SiteContent) -> Result<Option<Replacement>> {
    use Replacement::{Html, Text};

    let hero = content.hero.as_ref();
    let about = content.about.as_ref();

    let replacement = match class {
        // Hero section
        "hero-pre-headline" => hero.map(|h| Text(h.pre_headline.clone())),
        "hero-headline" => {
            hero.map(|h| Html(sections::highlight_headline(&h.headline, &h.highlight)))
        }
        "hero-description" => hero.map(|h| Text(h.description.clone())),
        "hero-primary-btn" => hero.map(|h| Text(h.primary_button.clone())),
        "hero-secondary-btn" => hero.map(|h| Text(h.secondary_button.clone())),
        "hero-stats" => match hero {
            Some(h) if !h.stats.is_empty() => Some(Html(sections::hero_stats(&h.stats)?)),
            _ => None,
        },

        // About section
        "about-title" => about.map(|a| Text(a.title.clone())),
        "about-headline" => {
            about.map(|a| Html(sections::highlight_headline(&a.headline, &a.highlight)))
        }
        "about-description" => about.map(|a| Text(a.description.clone())),
        "about-features" => match about {
            Some(a) if !a.features.is_empty() => Some(Html(sections::about_features(&a.features)?)),
            _ => None,
        },

        // Collection grids
        "services-grid" if !content.services.is_empty() => {
            Some(Html(sections::service_cards(&content.services)?))
        }
        "team-grid" if !content.team.is_empty() => {
            Some(Html(sections::team_cards(&content.team)?))
        }
        "news-grid" if !content.news.is_empty() => {
            Some(Html(sections::news_cards(&content.news)?))
        }

        // Contact and footer text targets
        "contact-email" => content.contact.as_ref().map(|c| Text(c.email.clone())),
        "contact-phone" => content.contact.as_ref().map(|c| Text(c.phone.clone())),
        "contact-address" => content.contact.as_ref().map(|c| Text(c.address.clone())),
        "company-name" => content.company.as_ref().map(|c| Text(c.name.clone())),
        "company-about" => content.company.as_ref().map(|c| Text(c.about.clone())),

        _ => None,
    };
    Ok(replacement)
}

fn tag_name(elem: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(elem.name().as_ref()).into_owned()
}

// ============================================================================
// Tests
// ============================================================================
