//! Auto-jit flags.
//!
//! The override subsystem is configured through one environment variable,
//! [`AUTOJIT_FLAGS_ENV`], holding command-line style flags:
//!
//! ```text
//! AUTOJIT_FLAGS="--auto-jit=single-device(2)"
//! ```
//!
//! `--auto-jit` takes either a level (`-1`, `0`, `1`, `2` or a level name),
//! applied to both graph kinds, or `single-device(<level>)`, which only
//! touches single-device graphs.

use std::env::VarError;
use std::str::FromStr;

use autojit_config::GlobalJitLevel;
use clap::Parser as ClapParser;

use crate::error::AutoJitError;

/// Environment variable read by [`AutoJitFlags::from_env`].
pub const AUTOJIT_FLAGS_ENV: &str = "AUTOJIT_FLAGS";

const SINGLE_DEVICE_PREFIX: &str = "single-device(";

/// Parsed `--auto-jit` value.
///
/// A `Default` component means "no override" for that graph kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoJitFlag {
    pub single_device: GlobalJitLevel,
    pub general: GlobalJitLevel,
}

impl AutoJitFlag {
    /// Override both graph kinds with `level`.
    pub fn uniform(level: GlobalJitLevel) -> Self {
        Self {
            single_device: level,
            general: level,
        }
    }

    /// Override single-device graphs only.
    pub fn single_device(level: GlobalJitLevel) -> Self {
        Self {
            single_device: level,
            general: GlobalJitLevel::Default,
        }
    }
}

impl FromStr for AutoJitFlag {
    type Err = AutoJitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let invalid = || AutoJitError::InvalidLevel(value.to_string());

        if let Some(rest) = value.strip_prefix(SINGLE_DEVICE_PREFIX) {
            let code = rest
                .strip_suffix(')')
                .and_then(|inner| inner.trim().parse::<i32>().ok())
                .ok_or_else(invalid)?;
            let level = GlobalJitLevel::from_code(code).ok_or_else(invalid)?;
            return Ok(Self::single_device(level));
        }

        let level = value.parse::<GlobalJitLevel>().map_err(|_| invalid())?;
        Ok(Self::uniform(level))
    }
}

/// Flag set accepted in [`AUTOJIT_FLAGS_ENV`].
#[derive(ClapParser, Debug, Clone, Default)]
#[command(name = "AUTOJIT_FLAGS", no_binary_name = true, disable_help_flag = true)]
pub struct AutoJitFlags {
    #[arg(
        long = "auto-jit",
        value_name = "LEVEL",
        allow_hyphen_values = true,
        help = "Overrides the session JIT level: -1, 0, 1, 2 or single-device(<level>).",
        value_parser = clap::value_parser!(AutoJitFlag),
    )]
    pub auto_jit: Option<AutoJitFlag>,
}

impl AutoJitFlags {
    /// Parse a whitespace-separated flag string.
    pub fn parse_str(flags: &str) -> Result<Self, AutoJitError> {
        Ok(Self::try_parse_from(flags.split_whitespace())?)
    }

    /// Read flags from [`AUTOJIT_FLAGS_ENV`]. An unset variable yields the
    /// defaults (no override).
    pub fn from_env() -> Result<Self, AutoJitError> {
        Self::from_var(std::env::var(AUTOJIT_FLAGS_ENV))
    }

    /// Interpret the result of reading [`AUTOJIT_FLAGS_ENV`].
    pub fn from_var(var: Result<String, VarError>) -> Result<Self, AutoJitError> {
        match var {
            Ok(flags) => Self::parse_str(&flags),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(AutoJitError::EnvNotUnicode),
        }
    }

    /// The `--auto-jit` value, or no override when absent.
    pub fn auto_jit(&self) -> AutoJitFlag {
        self.auto_jit.unwrap_or_default()
    }
}
