use std::path::PathBuf;

use clap::Parser;
use strum::Display;
use strum::EnumString;

use crate::support::TracingLevel;

/// Which part of the response to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ExtractMode {
    /// The single entity under `d`
    Object,
    /// The entities under `d.results`
    Collection,
    /// The `$skiptoken` of the `d.__next` link
    SkipToken,
}

#[derive(Debug, Parser)]
#[command(
    name = "odata-envelope",
    version,
    about = "Normalize d-wrapped OData responses into plain JSON"
)]
pub struct Cli {
    /// What to extract: object, collection or skip-token
    pub mode: ExtractMode,

    /// Read the response from this file instead of stdin
    #[arg(long, env = "ODATA_ENVELOPE_INPUT")]
    pub input: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, env = "ODATA_ENVELOPE_LOG", default_value = "warn")]
    pub log_level: TracingLevel,
}
