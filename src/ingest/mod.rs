//! XMLTV document ingestion
//!
//! Streaming quick-xml reader turning XMLTV text into the in-memory
//! [`XmltvDocument`] model. Known channel and programme children map onto
//! typed fields; everything else is captured as passthrough [`RawElement`]s
//! so the merge never loses provider extensions it does not understand.
//!
//! Writing XMLTV back out (declarations, pretty-printing) is deliberately
//! not handled here; that belongs to the output sink.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::errors::MergeError;
use crate::models::{
    Channel, ChannelListing, Credits, EpisodeNum, Icon, LocalizedText, Programme, RawElement,
    Rating, XmltvDocument,
};

type XmlReader<'a> = Reader<&'a [u8]>;

/// Parse an XMLTV document body into the in-memory model.
pub fn parse_xmltv(content: &str) -> Result<XmltvDocument, MergeError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut document = XmltvDocument::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"tv" => {}
                b"channel" => {
                    let channel = parse_channel(&mut reader, &e)?;
                    if channel.id.is_empty() {
                        warn!("skipping channel without id");
                        continue;
                    }
                    document.channels.push(channel);
                }
                b"programme" => {
                    let programme = parse_programme(&mut reader, &e)?;
                    if programme.channel.is_empty() {
                        warn!("skipping programme without channel reference");
                        continue;
                    }
                    document.programmes.push(programme);
                }
                _ => {
                    // Unknown top-level element, skip the whole subtree.
                    reader.read_to_end(e.name())?;
                }
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"channel" => {
                    let attrs = parse_attributes(&e);
                    match attrs.get("id") {
                        Some(id) if !id.is_empty() => {
                            document.channels.push(Channel::new(id.clone()))
                        }
                        _ => warn!("skipping channel without id"),
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(
        "parsed XMLTV document: {} channels, {} programmes",
        document.channels.len(),
        document.programmes.len()
    );
    Ok(document)
}

/// Scan parsed documents for every channel they offer, keyed by id. A later
/// document wins on id collisions, mirroring a plain directory scan.
pub fn list_available_channels<'a, I>(documents: I) -> Vec<ChannelListing>
where
    I: IntoIterator<Item = (&'a str, &'a XmltvDocument)>,
{
    let mut all: BTreeMap<String, ChannelListing> = BTreeMap::new();
    for (source, document) in documents {
        for channel in &document.channels {
            all.insert(
                channel.id.clone(),
                ChannelListing {
                    id: channel.id.clone(),
                    display_names: channel
                        .display_names
                        .iter()
                        .map(|name| name.value.clone())
                        .collect(),
                    source: source.to_string(),
                },
            );
        }
    }
    all.into_values().collect()
}

fn parse_channel(reader: &mut XmlReader, start: &BytesStart) -> Result<Channel, MergeError> {
    let attrs = parse_attributes(start);
    let mut channel = Channel::new(attrs.get("id").cloned().unwrap_or_default());

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"display-name" => {
                    let lang = attr(&e, "lang");
                    let value = read_text(reader, &e)?;
                    channel.display_names.push(LocalizedText { value, lang });
                }
                b"icon" => {
                    channel.icons.push(icon_from(&e));
                    reader.read_to_end(e.name())?;
                }
                _ => channel.extra.push(parse_raw(reader, &e)?),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"icon" => channel.icons.push(icon_from(&e)),
                _ => channel.extra.push(raw_from_start(&e)),
            },
            Event::End(e) if e.name().as_ref() == b"channel" => break,
            Event::Eof => return Err(MergeError::document("unexpected EOF inside <channel>")),
            _ => {}
        }
    }
    Ok(channel)
}

fn parse_programme(reader: &mut XmlReader, start: &BytesStart) -> Result<Programme, MergeError> {
    let attrs = parse_attributes(start);
    let mut programme = Programme {
        start: attrs.get("start").cloned().unwrap_or_default(),
        stop: attrs.get("stop").cloned(),
        channel: attrs.get("channel").cloned().unwrap_or_default(),
        ..Default::default()
    };

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"title" => {
                    let lang = attr(&e, "lang");
                    let value = read_text(reader, &e)?;
                    programme.title = Some(LocalizedText { value, lang });
                }
                b"sub-title" => {
                    let lang = attr(&e, "lang");
                    let value = read_text(reader, &e)?;
                    programme.subtitle = Some(LocalizedText { value, lang });
                }
                b"desc" => {
                    let lang = attr(&e, "lang");
                    let value = read_text(reader, &e)?;
                    programme.description = Some(LocalizedText { value, lang });
                }
                b"category" => {
                    let lang = attr(&e, "lang");
                    let value = read_text(reader, &e)?;
                    if !value.is_empty() {
                        programme.categories.push(LocalizedText { value, lang });
                    }
                }
                b"episode-num" => {
                    let system = attr(&e, "system");
                    let value = read_text(reader, &e)?;
                    programme.episode_num = Some(EpisodeNum { system, value });
                }
                b"date" => {
                    programme.date = Some(read_text(reader, &e)?);
                }
                b"rating" => {
                    programme.rating = parse_rating(reader, &e)?;
                }
                b"credits" => {
                    programme.credits = Some(parse_credits(reader)?);
                }
                b"icon" => {
                    programme.icons.push(icon_from(&e));
                    reader.read_to_end(e.name())?;
                }
                _ => programme.extra.push(parse_raw(reader, &e)?),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"icon" => programme.icons.push(icon_from(&e)),
                _ => programme.extra.push(raw_from_start(&e)),
            },
            Event::End(e) if e.name().as_ref() == b"programme" => break,
            Event::Eof => return Err(MergeError::document("unexpected EOF inside <programme>")),
            _ => {}
        }
    }
    Ok(programme)
}

fn parse_rating(reader: &mut XmlReader, start: &BytesStart) -> Result<Option<Rating>, MergeError> {
    let system = attr(start, "system");
    let mut value = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"value" => value = Some(read_text(reader, &e)?),
                _ => {
                    reader.read_to_end(e.name())?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"rating" => break,
            Event::Eof => return Err(MergeError::document("unexpected EOF inside <rating>")),
            _ => {}
        }
    }
    Ok(value.map(|value| Rating { system, value }))
}

fn parse_credits(reader: &mut XmlReader) -> Result<Credits, MergeError> {
    let mut credits = Credits::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let role = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let name = read_text(reader, &e)?;
                if !name.is_empty() {
                    credits.add(&role, name);
                }
            }
            Event::End(e) if e.name().as_ref() == b"credits" => break,
            Event::Eof => return Err(MergeError::document("unexpected EOF inside <credits>")),
            _ => {}
        }
    }
    Ok(credits)
}

/// Capture an unknown subtree verbatim.
fn parse_raw(reader: &mut XmlReader, start: &BytesStart) -> Result<RawElement, MergeError> {
    let mut element = raw_from_start(start);
    let end_tag = element.tag.clone();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => element.children.push(parse_raw(reader, &e)?),
            Event::Empty(e) => element.children.push(raw_from_start(&e)),
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e.into_inner())),
            Event::End(e) if e.name().as_ref() == end_tag.as_bytes() => break,
            Event::Eof => {
                return Err(MergeError::document(format!(
                    "unexpected EOF inside <{end_tag}>"
                )))
            }
            _ => {}
        }
    }
    if !text.is_empty() {
        element.text = Some(text);
    }
    Ok(element)
}

/// Accumulate the text content of an element, skipping nested markup.
fn read_text(reader: &mut XmlReader, start: &BytesStart) -> Result<String, MergeError> {
    let end_tag = start.name().as_ref().to_vec();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e.into_inner())),
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
            }
            Event::End(e) if e.name().as_ref() == end_tag.as_slice() => break,
            Event::Eof => return Err(MergeError::document("unexpected EOF inside element")),
            _ => {}
        }
    }
    Ok(text.trim().to_string())
}

fn raw_from_start(start: &BytesStart) -> RawElement {
    RawElement {
        tag: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        attributes: start
            .attributes()
            .flatten()
            .filter_map(|a| {
                let key = std::str::from_utf8(a.key.as_ref()).ok()?.to_string();
                let value = a.unescape_value().ok()?.into_owned();
                Some((key, value))
            })
            .collect(),
        text: None,
        children: Vec::new(),
    }
}

fn icon_from(start: &BytesStart) -> Icon {
    let attrs = parse_attributes(start);
    Icon {
        src: attrs.get("src").cloned().unwrap_or_default(),
        width: attrs.get("width").cloned(),
        height: attrs.get("height").cloned(),
    }
}

fn attr(start: &BytesStart, name: &str) -> Option<String> {
    parse_attributes(start).remove(name)
}

fn parse_attributes(start: &BytesStart) -> BTreeMap<String, String> {
    let mut attrs = BTreeMap::new();
    for a in start.attributes().flatten() {
        if let (Ok(key), Ok(value)) = (
            std::str::from_utf8(a.key.as_ref()),
            a.unescape_value(),
        ) {
            attrs.insert(key.to_string(), value.into_owned());
        }
    }
    attrs
}
