//! Support for the .NET `.resx` resource format.
//!
//! Every `<data>` element under `<root>` becomes one entry. Only string-typed data
//! (no `mimetype`, and no `type` or a `System.String` type) are text; serialized objects,
//! file references and binary blobs are read as non-string entries and never written back.
//! A `<data>` without a `<value>` child holds a null and is treated the same way.

use quick_xml::{
    Reader, Writer,
    escape::unescape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Write;

use crate::{
    error::Error,
    traits::Parser,
    types::{EntryValue, Resource, ResourceEntry},
};

const STRING_TYPE_PREFIX: &str = "System.String";

/// Type name reported for a `<data>` element that has no `<value>`.
const NULL_TYPE_NAME: &str = "null";

const RESHEADERS: [(&str, &str); 4] = [
    ("resmimetype", "text/microsoft-resx"),
    ("version", "2.0"),
    (
        "reader",
        "System.Resources.ResXResourceReader, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
    ),
    (
        "writer",
        "System.Resources.ResXResourceWriter, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
    ),
];

#[derive(Debug, Default)]
pub struct Format {
    pub data: Vec<ResxData>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResxData {
    pub name: String,
    /// `None` when the element has no `<value>` child.
    pub value: Option<String>,
    pub comment: Option<String>,
    pub type_name: Option<String>,
    pub mimetype: Option<String>,
}

impl ResxData {
    /// Whether this data element holds a plain string.
    pub fn is_string(&self) -> bool {
        self.mimetype.is_none()
            && self
                .type_name
                .as_deref()
                .is_none_or(|t| t.starts_with(STRING_TYPE_PREFIX))
    }

    fn to_entry(&self) -> ResourceEntry {
        let value = match &self.value {
            Some(text) if self.is_string() => EntryValue::Text(text.clone()),
            _ => EntryValue::Other {
                type_name: self
                    .type_name
                    .clone()
                    .or_else(|| self.mimetype.clone())
                    .unwrap_or_else(|| NULL_TYPE_NAME.to_string()),
            },
        };
        ResourceEntry {
            key: self.name.clone(),
            value,
            comment: self.comment.clone(),
        }
    }
}

impl Parser for Format {
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_str(s);
        // Whitespace inside <value> is significant.
        xml_reader.config_mut().trim_text(false);

        let mut seen_root = false;
        let mut data = Vec::new();

        loop {
            match xml_reader.read_event()? {
                Event::Start(ref e) | Event::Empty(ref e) if !seen_root => {
                    if e.name().as_ref() != b"root" {
                        return Err(Error::InvalidResource(format!(
                            "not a resx document: root element is <{}>",
                            String::from_utf8_lossy(e.name().as_ref())
                        )));
                    }
                    seen_root = true;
                }
                Event::Start(ref e) if e.name().as_ref() == b"data" => {
                    let mut item = parse_data_attributes(e)?;
                    read_data_body(&mut xml_reader, &mut item)?;
                    data.push(item);
                }
                Event::Empty(ref e) if e.name().as_ref() == b"data" => {
                    data.push(parse_data_attributes(e)?);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(Error::InvalidResource(
                "not a resx document: missing <root> element".to_string(),
            ));
        }
        Ok(Format { data })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        xml_writer.write_event(Event::Start(BytesStart::new("root")))?;

        for (name, value) in RESHEADERS {
            let mut header = BytesStart::new("resheader");
            header.push_attribute(("name", name));
            write_element(&mut xml_writer, header, value, None)?;
        }

        for item in self.data.iter().filter(|d| d.is_string()) {
            let Some(value) = item.value.as_deref() else {
                continue;
            };
            let mut elem = BytesStart::new("data");
            elem.push_attribute(("name", item.name.as_str()));
            elem.push_attribute(("xml:space", "preserve"));
            write_element(&mut xml_writer, elem, value, item.comment.as_deref())?;
        }

        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        xml_writer.write_event(Event::End(BytesEnd::new("root")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(())
    }
}

impl From<Format> for Resource {
    fn from(value: Format) -> Self {
        Resource::new(value.data.iter().map(ResxData::to_entry).collect())
    }
}

impl From<Resource> for Format {
    /// Keeps the text entries only; non-string values cannot be reproduced from their type name.
    fn from(value: Resource) -> Self {
        Format {
            data: value
                .entries
                .into_iter()
                .filter_map(|entry| match entry.value {
                    EntryValue::Text(text) => Some(ResxData {
                        name: entry.key,
                        value: Some(text),
                        comment: entry.comment,
                        type_name: None,
                        mimetype: None,
                    }),
                    EntryValue::Other { .. } => None,
                })
                .collect(),
        }
    }
}

fn parse_data_attributes(e: &BytesStart) -> Result<ResxData, Error> {
    let mut name = None;
    let mut type_name = None;
    let mut mimetype = None;

    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::InvalidResource(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => name = Some(attr.unescape_value()?.to_string()),
            b"type" => type_name = Some(attr.unescape_value()?.to_string()),
            b"mimetype" => mimetype = Some(attr.unescape_value()?.to_string()),
            _ => {}
        }
    }
    let name = name.ok_or_else(|| Error::InvalidResource("data tag missing 'name'".to_string()))?;

    Ok(ResxData {
        name,
        value: None,
        comment: None,
        type_name,
        mimetype,
    })
}

fn read_data_body(xml_reader: &mut Reader<&[u8]>, item: &mut ResxData) -> Result<(), Error> {
    loop {
        match xml_reader.read_event()? {
            Event::Start(ref e) if e.name().as_ref() == b"value" => {
                item.value = Some(read_text(xml_reader, b"value")?);
            }
            Event::Empty(ref e) if e.name().as_ref() == b"value" => {
                item.value = Some(String::new());
            }
            Event::Start(ref e) if e.name().as_ref() == b"comment" => {
                item.comment = Some(read_text(xml_reader, b"comment")?);
            }
            Event::Empty(ref e) if e.name().as_ref() == b"comment" => {
                item.comment = Some(String::new());
            }
            Event::End(ref e) if e.name().as_ref() == b"data" => return Ok(()),
            Event::Eof => {
                return Err(Error::InvalidResource(format!(
                    "unexpected end of file inside data '{}'",
                    item.name
                )));
            }
            _ => {}
        }
    }
}

/// Reads character data up to `</end>`, with XML end-of-line handling: `\r\n` and a lone
/// `\r` in the markup become `\n`, while an escaped `&#13;` stays a carriage return.
fn read_text(xml_reader: &mut Reader<&[u8]>, end: &[u8]) -> Result<String, Error> {
    let mut text = String::new();
    loop {
        match xml_reader.read_event()? {
            Event::Text(e) => {
                let raw = xml_reader
                    .decoder()
                    .decode(&e)
                    .map_err(quick_xml::Error::from)?;
                let normalized = normalize_line_endings(&raw);
                text.push_str(&unescape(&normalized).map_err(quick_xml::Error::from)?);
            }
            Event::CData(e) => {
                let raw = e.decode().map_err(quick_xml::Error::from)?;
                text.push_str(&normalize_line_endings(&raw));
            }
            Event::End(ref e) if e.name().as_ref() == end => return Ok(text),
            Event::Eof => {
                return Err(Error::InvalidResource(format!(
                    "unexpected end of file inside <{}>",
                    String::from_utf8_lossy(end)
                )));
            }
            _ => {}
        }
    }
}

fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

fn write_element<W: Write>(
    xml_writer: &mut Writer<W>,
    start: BytesStart,
    value: &str,
    comment: Option<&str>,
) -> Result<(), Error> {
    let end = BytesEnd::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());

    xml_writer.write_event(Event::Text(BytesText::new("\n  ")))?;
    xml_writer.write_event(Event::Start(start))?;
    write_child(xml_writer, "value", value)?;
    if let Some(comment) = comment {
        write_child(xml_writer, "comment", comment)?;
    }
    xml_writer.write_event(Event::Text(BytesText::new("\n  ")))?;
    xml_writer.write_event(Event::End(end))?;
    Ok(())
}

fn write_child<W: Write>(xml_writer: &mut Writer<W>, tag: &str, text: &str) -> Result<(), Error> {
    xml_writer.write_event(Event::Text(BytesText::new("\n    ")))?;
    xml_writer.write_event(Event::Start(BytesStart::new(tag)))?;
    xml_writer.write_event(Event::Text(BytesText::new(text)))?;
    xml_writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
