//! WATO notification-parameter descriptor for the `ilert` notification method.
//!
//! Responsibilities:
//! - Declare the parameter form CheckMK renders for this plugin as a static table.
//! - Provide typed values for the enumerated choices and their defaults.
//! - Convert the URL prefix between the form's choice representation and the
//!   single-key mapping stored in the notification rule.
//!
//! Does NOT handle:
//! - Rendering the form (CheckMK's GUI framework does that).
//! - Password store lookups for `ApiKeySource::Store`.
//!
//! Invariants:
//! - `StoredUrlPrefix` always serializes as a single-key JSON object.
//! - Manual URL prefixes must start with `http://` or `https://` and end with `/check_mk/`.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::loader::ConfigError;

/// Notification method identifier registered with CheckMK.
pub const PARAMETER_IDENT: &str = "ilert";

/// Form title of the parameter dictionary.
pub const PARAMETER_TITLE: &str = "Create notification with the following parameters";

pub const DEFAULT_SUMMARY_HOST: &str =
    "$NOTIFICATIONTYPE$ Host Alert: $HOSTNAME$ is $HOSTSTATE$ - $HOSTOUTPUT$";

pub const DEFAULT_SUMMARY_SERVICE: &str = "$NOTIFICATIONTYPE$ Service Alert: $HOSTALIAS$/$SERVICEDESC$ is $SERVICESTATE$ - $SERVICEOUTPUT$";

const URL_PREFIX_HELP: &str = "If you use <b>Automatic HTTP/s</b>, the URL prefix for host \
and service links within the notification is filled automatically. If you specify an URL \
prefix here, then several parts of the notification are armed with hyperlinks to your \
Check_MK GUI. In both cases, the recipient of the notification can directly visit the host \
or service in question in Check_MK. Specify an absolute URL including the \
<tt>.../check_mk/</tt>.";

/// Kind of form element backing one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Literal API key or password-store reference.
    ApiKey { size: usize },
    /// Fixed set of `(value, label)` choices.
    Choice {
        choices: &'static [(&'static str, &'static str)],
        default: &'static str,
    },
    /// Free text with CheckMK macros.
    Text { default: &'static str, size: usize },
    /// Automatic HTTP/HTTPS or a manual URL.
    UrlPrefix {
        choices: &'static [(&'static str, &'static str)],
        default: &'static str,
    },
}

/// One entry of the parameter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub help: Option<&'static str>,
    pub optional: bool,
    pub kind: ParameterKind,
}

pub const PRIORITY_CHOICES: &[(&str, &str)] = &[
    ("high", "High (with escalation)"),
    ("low", "Low (without escalation)"),
];

pub const URL_PREFIX_CHOICES: &[(&str, &str)] = &[
    ("automatic_http", "Automatic HTTP"),
    ("automatic_https", "Automatic HTTPs"),
    ("manual", "Specify URL prefix"),
];

/// The parameter form, in display order.
pub const NOTIFICATION_PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "ilert_api_key",
        title: "iLert alert source API key",
        help: Some("API key for iLert alert server"),
        optional: false,
        kind: ParameterKind::ApiKey { size: 80 },
    },
    ParameterSpec {
        name: "ilert_priority",
        title: "Notification priority (This will override the priority configured in the alert source)",
        help: None,
        optional: true,
        kind: ParameterKind::Choice {
            choices: PRIORITY_CHOICES,
            default: "high",
        },
    },
    ParameterSpec {
        name: "ilert_summary_host",
        title: "Custom incident summary for host alerts",
        help: None,
        optional: true,
        kind: ParameterKind::Text {
            default: DEFAULT_SUMMARY_HOST,
            size: 64,
        },
    },
    ParameterSpec {
        name: "ilert_summary_service",
        title: "Custom incident summary for service alerts",
        help: None,
        optional: true,
        kind: ParameterKind::Text {
            default: DEFAULT_SUMMARY_SERVICE,
            size: 64,
        },
    },
    ParameterSpec {
        name: "url_prefix",
        title: "URL prefix for links to Check_MK",
        help: Some(URL_PREFIX_HELP),
        optional: true,
        kind: ParameterKind::UrlPrefix {
            choices: URL_PREFIX_CHOICES,
            default: "automatic_https",
        },
    },
];

/// Look up a parameter by name.
pub fn parameter(name: &str) -> Option<&'static ParameterSpec> {
    NOTIFICATION_PARAMETERS.iter().find(|spec| spec.name == name)
}

/// Names of the parameters a rule may omit.
pub fn optional_parameters() -> impl Iterator<Item = &'static str> {
    NOTIFICATION_PARAMETERS
        .iter()
        .filter(|spec| spec.optional)
        .map(|spec| spec.name)
}

/// Incident priority requested from iLert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IlertPriority {
    /// Escalates according to the alert source's escalation policy.
    #[default]
    High,
    /// Does not escalate.
    Low,
}

impl IlertPriority {
    pub const fn as_str(self) -> &'static str {
        match self {
            IlertPriority::High => "high",
            IlertPriority::Low => "low",
        }
    }
}

impl FromStr for IlertPriority {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(IlertPriority::High),
            "low" => Ok(IlertPriority::Low),
            other => Err(ConfigError::InvalidValue {
                var: "ilert_priority".into(),
                message: format!("must be high or low, got: {other}"),
            }),
        }
    }
}

/// Where the API key comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeySource {
    /// Key typed into the form.
    IlertApiKey(#[serde(with = "secret_string")] SecretString),
    /// Identifier of a password store entry.
    Store(String),
}

impl ApiKeySource {
    fn validate(&self) -> Result<(), ConfigError> {
        let (what, empty) = match self {
            ApiKeySource::IlertApiKey(key) => ("API key", key.expose_secret().is_empty()),
            ApiKeySource::Store(id) => ("password store entry", id.is_empty()),
        };
        if empty {
            return Err(ConfigError::InvalidValue {
                var: "ilert_api_key".into(),
                message: format!("{what} must not be empty"),
            });
        }
        Ok(())
    }
}

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlScheme {
    Http,
    Https,
}

impl UrlScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            UrlScheme::Http => "http",
            UrlScheme::Https => "https",
        }
    }
}

/// URL prefix as the form presents it: `automatic_http`, `automatic_https`
/// or `("manual", url)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UrlPrefixChoice {
    AutomaticHttp,
    #[default]
    AutomaticHttps,
    Manual(String),
}

/// URL prefix as stored in the notification rule: a single-key mapping,
/// `{"automatic": "https"}` or `{"manual": "<url>"}`.
///
/// CheckMK's event context cannot carry nested tuples, hence the flat form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoredUrlPrefix {
    Automatic(UrlScheme),
    Manual(String),
}

impl StoredUrlPrefix {
    /// Interpret a bare string saved by older plugin versions.
    pub fn from_legacy(value: &str) -> Self {
        match value {
            "automatic_http" => StoredUrlPrefix::Automatic(UrlScheme::Http),
            "automatic_https" => StoredUrlPrefix::Automatic(UrlScheme::Https),
            other => StoredUrlPrefix::Manual(other.to_string()),
        }
    }
}

/// Convert the form's choice into the stored mapping.
pub fn transform_back(choice: &UrlPrefixChoice) -> StoredUrlPrefix {
    match choice {
        UrlPrefixChoice::AutomaticHttp => StoredUrlPrefix::Automatic(UrlScheme::Http),
        UrlPrefixChoice::AutomaticHttps => StoredUrlPrefix::Automatic(UrlScheme::Https),
        UrlPrefixChoice::Manual(url) => StoredUrlPrefix::Manual(url.clone()),
    }
}

/// Convert the stored mapping into the form's choice.
pub fn transform_forth(stored: &StoredUrlPrefix) -> UrlPrefixChoice {
    match stored {
        StoredUrlPrefix::Automatic(UrlScheme::Http) => UrlPrefixChoice::AutomaticHttp,
        StoredUrlPrefix::Automatic(UrlScheme::Https) => UrlPrefixChoice::AutomaticHttps,
        StoredUrlPrefix::Manual(url) => UrlPrefixChoice::Manual(url.clone()),
    }
}

/// Check a manual URL prefix: `^(http|https)://.*/check_mk/$`.
pub fn validate_url_prefix(url: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(rest) if rest.ends_with("/check_mk/") && !rest.contains('\n') => Ok(()),
        _ => Err(ConfigError::InvalidValue {
            var: "url_prefix".into(),
            message: "The URL must begin with http or https and end with /check_mk/.".into(),
        }),
    }
}

/// Default manual URL prefix for the local site.
pub fn local_site_url(hostname: &str, site: &str) -> String {
    format!("http://{hostname}/{site}/check_mk/")
}

/// Values of one notification rule using this plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationParameters {
    pub ilert_api_key: ApiKeySource,
    #[serde(default)]
    pub ilert_priority: IlertPriority,
    #[serde(default = "default_summary_host")]
    pub ilert_summary_host: String,
    #[serde(default = "default_summary_service")]
    pub ilert_summary_service: String,
    #[serde(default = "default_url_prefix")]
    pub url_prefix: StoredUrlPrefix,
}

fn default_summary_host() -> String {
    DEFAULT_SUMMARY_HOST.to_string()
}

fn default_summary_service() -> String {
    DEFAULT_SUMMARY_SERVICE.to_string()
}

fn default_url_prefix() -> StoredUrlPrefix {
    transform_back(&UrlPrefixChoice::default())
}

impl NotificationParameters {
    /// Parameters with every optional field at its default.
    pub fn new(ilert_api_key: ApiKeySource) -> Self {
        Self {
            ilert_api_key,
            ilert_priority: IlertPriority::default(),
            ilert_summary_host: default_summary_host(),
            ilert_summary_service: default_summary_service(),
            url_prefix: default_url_prefix(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ilert_api_key.validate()?;
        if let StoredUrlPrefix::Manual(url) = &self.url_prefix {
            validate_url_prefix(url)?;
        }
        Ok(())
    }
}
