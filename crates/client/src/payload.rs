//! Event payload rendering.
//!
//! Responsibilities:
//! - Render a [`Context`] as a JSON object or as the iLert CheckMK XML document.
//! - Expose the MIME type matching the rendered body.
//!
//! Invariants:
//! - Entries appear in the context's iteration order (lexicographic by key).
//! - XML output is always well-formed: markup characters are escaped and
//!   characters XML 1.0 cannot represent are replaced with U+FFFD.

use ilert_config::{Context, PayloadFormat};
use tracing::debug;

use crate::error::Result;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// A rendered request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub format: PayloadFormat,
    pub body: String,
}

impl Payload {
    /// Value for the `Content-Type` and `Accept` headers.
    pub fn content_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Render `context` in the given format.
pub fn render(format: PayloadFormat, context: &Context) -> Result<Payload> {
    let body = match format {
        PayloadFormat::Json => to_json(context)?,
        PayloadFormat::Xml => {
            let document = to_xml(context);
            debug!(document = %document, "Rendered XML event");
            document
        }
    };
    Ok(Payload { format, body })
}

/// Serialize the context as a flat JSON object.
pub fn to_json(context: &Context) -> Result<String> {
    Ok(serde_json::to_string(context)?)
}

/// Serialize the context as `<event><payload><entry key="..">..</entry>..</payload></event>`.
pub fn to_xml(context: &Context) -> String {
    let mut xml = String::with_capacity(XML_DECLARATION.len() + 64 * (context.len() + 1));
    xml.push_str(XML_DECLARATION);
    xml.push_str("<event><payload>");
    for (key, value) in context.iter() {
        xml.push_str("<entry key=\"");
        xml.push_str(&escape_xml_attr(key));
        xml.push_str("\">");
        xml.push_str(&escape_xml(value));
        xml.push_str("</entry>");
    }
    xml.push_str("</payload></event>");
    xml
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Escape text content.
///
/// Carriage returns become `&#13;` since parsers fold raw CR and CRLF into LF.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            c if is_xml_char(c) => out.push(c),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
///
/// Whitespace control characters are written as character references so
/// attribute-value normalization does not turn them into spaces.
pub fn escape_xml_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push_str(&escape_xml(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out
}
