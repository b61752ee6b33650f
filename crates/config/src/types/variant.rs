//! Plugin variants.
//!
//! The three plugin binaries share one pipeline. A [`Variant`] captures the
//! handful of things that differ between them.

use std::fmt;

/// Body format of the event request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Xml,
}

impl PayloadFormat {
    /// MIME type used for both `Content-Type` and `Accept`.
    pub const fn mime_type(self) -> &'static str {
        match self {
            PayloadFormat::Json => "application/json",
            PayloadFormat::Xml => "application/xml",
        }
    }
}

/// Ingestion channel: the URL path segment after `/api/v1/events/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// JSON ingestion endpoint.
    CheckmkExt,
    /// XML ingestion endpoint.
    Checkmk,
}

impl Channel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::CheckmkExt => "checkmk-ext",
            Channel::Checkmk => "checkmk",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How `NOTIFY_` environment variable names become context keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// Keep the variable name as is (`NOTIFY_HOSTNAME`).
    Verbatim,
    /// Drop a leading `NOTIFY_` (`HOSTNAME`), matching CheckMK's own
    /// notification utilities. Names that only contain the marker further in
    /// are kept verbatim.
    StripPrefix,
}

/// One of the three plugin binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// JSON plugin for the `checkmk-ext` channel.
    Extension,
    /// XML plugin whose API key falls back to the webhook URL parameter.
    Native,
    /// XML plugin whose API key falls back to the contact's pager field.
    Pager,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Extension, Variant::Native, Variant::Pager];

    /// Name of the binary implementing this variant.
    pub const fn binary_name(self) -> &'static str {
        match self {
            Variant::Extension => "ilert-checkmk",
            Variant::Native => "ilert-checkmk-native",
            Variant::Pager => "ilert-checkmk-pager",
        }
    }

    pub const fn format(self) -> PayloadFormat {
        match self {
            Variant::Extension => PayloadFormat::Json,
            Variant::Native | Variant::Pager => PayloadFormat::Xml,
        }
    }

    pub const fn channel(self) -> Channel {
        match self {
            Variant::Extension => Channel::CheckmkExt,
            Variant::Native | Variant::Pager => Channel::Checkmk,
        }
    }

    /// Context key consulted when no API key is given on the command line.
    pub const fn api_key_fallback(self) -> &'static str {
        match self {
            Variant::Extension => "NOTIFY_PARAMETER_ILERT_API_KEY",
            Variant::Native => "PARAMETER_WEBHOOK_URL",
            Variant::Pager => "CONTACTPAGER",
        }
    }

    pub const fn key_style(self) -> KeyStyle {
        match self {
            Variant::Extension => KeyStyle::Verbatim,
            Variant::Native | Variant::Pager => KeyStyle::StripPrefix,
        }
    }

    /// Whether requests carry the `Agent: checkmk/extension/<version>` header.
    pub const fn sends_agent_header(self) -> bool {
        matches!(self, Variant::Extension)
    }
}
