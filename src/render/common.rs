//! Shared helpers for the streaming template rewriter.

use anyhow::Result;
use quick_xml::{Reader, Writer, events::BytesStart};
use std::borrow::Cow;
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

#[inline]
pub fn create_xml_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader
}

/// Rebuild an element with transformed attributes (avoids duplication bug).
pub fn rebuild_elem<F>(elem: &BytesStart<'_>, mut transform: F) -> BytesStart<'static>
where
    F: FnMut(&[u8], Cow<'_, [u8]>) -> Cow<'static, [u8]>,
{
    let tag = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    let attrs: Vec<_> = elem
        .attributes()
        .flatten()
        .map(|attr| {
            let key = attr.key.as_ref().to_vec();
            let value = transform(attr.key.as_ref(), attr.value);
            (key, value)
        })
        .collect();

    let mut new_elem = BytesStart::new(tag);
    for (k, v) in attrs {
        new_elem.push_attribute((k.as_slice(), v.as_ref()));
    }
    new_elem
}

/// Write a pre-built markup fragment verbatim (trusted input).
#[inline]
pub fn write_raw(writer: &mut XmlWriter, html: &str) -> Result<()> {
    writer.get_mut().write_all(html.as_bytes())?;
    Ok(())
}

/// The raw value of an element's `class` attribute, if present.
pub fn element_classes(elem: &BytesStart<'_>) -> Option<String> {
    elem.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"class")
        .map(|attr| String::from_utf8_lossy(attr.value.as_ref()).into_owned())
}

/// Whether the element's class list contains `class`.
pub fn has_class(elem: &BytesStart<'_>, class: &str) -> bool {
    element_classes(elem).is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}
