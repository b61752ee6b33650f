//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the argument surface shared by all plugin binaries.
//! - Hand parsed values to the [`ConfigLoader`].
//!
//! Non-responsibilities:
//! - Does not resolve the API key or validate the endpoint (see `ilert-config`).

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use ilert_config::constants::{DEFAULT_ENDPOINT, DEFAULT_PORT};
use ilert_config::{ConfigLoader, Variant};

#[derive(Parser, Debug, Clone)]
#[command(about = "Send CheckMK notifications to iLert", long_about = None)]
#[command(disable_version_flag = true)]
#[command(
    after_help = "Any trailing KEY=VALUE pairs are added to the event context, overriding NOTIFY_* variables of the same name."
)]
pub struct Cli {
    /// API key for the alert source in iLert
    #[arg(short, long)]
    pub apikey: Option<String>,

    /// iLert API endpoint
    #[arg(short, long, env = "ILERT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// iLert API port
    #[arg(short, long, env = "ILERT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Additional event context entries
    #[arg(
        value_name = "KEY=VALUE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub payload: Vec<String>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,
}

impl Cli {
    /// The clap command, named after the variant's binary.
    pub fn command_for(variant: Variant) -> clap::Command {
        Self::command()
            .name(variant.binary_name())
            .bin_name(variant.binary_name())
    }

    /// Parse process arguments, exiting on `--help` or usage errors.
    pub fn parse_for(variant: Variant) -> Self {
        let matches = Self::command_for(variant).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_for<I, T>(variant: Variant, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_for(variant).try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Apply command-line values on top of the collected environment.
    pub fn configure(&self, loader: ConfigLoader) -> ConfigLoader {
        let mut loader = loader
            .with_endpoint(self.endpoint.clone())
            .with_port(self.port)
            .with_payload(&self.payload);
        if let Some(ref key) = self.apikey {
            loader = loader.with_api_key(key.clone());
        }
        loader
    }
}
