use std::{fmt::Display, str::FromStr};

use autojit_config::{GlobalJitLevel, JitLevelRegistry, JitLevels};
use clap::{ArgAction, Parser as ClapParser, Subcommand as ClapSubcommand};
use serde::Serialize;
use tracing::Level;

#[allow(clippy::upper_case_acronyms)]
#[derive(ClapParser)]
#[command(
    name = "autojit",
    version,
    about = "Resolve the effective JIT levels for a session JIT level"
)]
pub struct CLI {
    #[command(flatten)]
    pub opts: Options,
    #[command(subcommand)]
    pub command: Option<Subcommand>,
}

#[derive(ClapParser, Debug, Clone)]
pub struct Options {
    #[arg(
        long = "jit-level",
        default_value_t = GlobalJitLevel::Default,
        value_name = "LEVEL",
        value_parser = clap::value_parser!(GlobalJitLevel),
        allow_hyphen_values = true,
        help = "Session JIT level.",
        long_help = "Possible values: default, off, on-1, on-2 (or -1, 0, 1, 2)",
        help_heading = "JIT options",
        env = "AUTOJIT_JIT_LEVEL"
    )]
    pub jit_level: GlobalJitLevel,
    #[arg(
        long = "no-auto-jit",
        action = ArgAction::SetTrue,
        help = "Do not register the auto-jit override.",
        long_help = "Skips the auto-jit initializer, so queries return the session level unchanged.",
        help_heading = "JIT options",
        env = "AUTOJIT_NO_AUTO_JIT"
    )]
    pub no_auto_jit: bool,
    #[arg(
        long = "format",
        default_value_t = OutputFormat::Text,
        value_name = "FORMAT",
        help = "Output format.",
        long_help = "Possible values: text, json",
        help_heading = "Output options",
        env = "AUTOJIT_FORMAT"
    )]
    pub format: OutputFormat,
    #[arg(
        long = "log.level",
        default_value_t = Level::WARN,
        value_name = "LOG_LEVEL",
        env = "AUTOJIT_LOG_LEVEL",
        help = "The verbosity level used for logs.",
        long_help = "Possible values: info, debug, trace, warn, error",
        help_heading = "Output options"
    )]
    pub log_level: Level,
    #[arg(
        long = "log.color",
        default_value_t = LogColor::Auto,
        help = "Output logs with ANSI color codes.",
        long_help = "Possible values: auto, always, never",
        help_heading = "Output options",
        env = "AUTOJIT_LOG_COLOR"
    )]
    pub log_color: LogColor,
}

#[derive(ClapSubcommand, Debug, Clone, Copy, Default)]
pub enum Subcommand {
    #[default]
    #[command(name = "query", about = "Effective levels for --jit-level (default)")]
    Query,
    #[command(name = "table", about = "Effective levels for every session level")]
    Table,
}

impl Subcommand {
    pub fn run(self, opts: &Options, registry: &JitLevelRegistry) -> Vec<LevelReport> {
        match self {
            Subcommand::Query => vec![LevelReport::resolve(opts.jit_level, registry)],
            Subcommand::Table => GlobalJitLevel::ALL
                .into_iter()
                .map(|level| LevelReport::resolve(level, registry))
                .collect(),
        }
    }
}

/// Answer to one level query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub session: GlobalJitLevel,
    pub effective: JitLevels,
    /// Getter that produced `effective`; `None` for the identity fallback.
    pub registrant: Option<String>,
}

impl LevelReport {
    pub fn resolve(session: GlobalJitLevel, registry: &JitLevelRegistry) -> Self {
        let (effective, registrant) = registry.query_with_registrant(session);
        Self {
            session,
            effective,
            registrant,
        }
    }
}

impl Display for LevelReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session={} {}", self.session, self.effective)?;
        match &self.registrant {
            Some(name) => write!(f, " ({name})"),
            None => write!(f, " (identity)"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn render(self, reports: &[LevelReport]) -> eyre::Result<String> {
        match self {
            OutputFormat::Text => Ok(reports
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format '{s}'. Expected: text or json")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogColor {
    #[default]
    Auto,
    Always,
    Never,
}

impl Display for LogColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogColor::Auto => write!(f, "auto"),
            LogColor::Always => write!(f, "always"),
            LogColor::Never => write!(f, "never"),
        }
    }
}

impl FromStr for LogColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(LogColor::Auto),
            "always" => Ok(LogColor::Always),
            "never" => Ok(LogColor::Never),
            _ => Err(format!(
                "Invalid log color '{s}'. Expected: auto, always, or never"
            )),
        }
    }
}
