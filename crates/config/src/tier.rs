//! JIT level types.
//!
//! `GlobalJitLevel` is the session-wide compilation aggressiveness knob.
//! `JitLevels` is what a level query answers with: the effective level for
//! graphs placed on a single device and for general (multi-device) graphs.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Session-wide JIT compilation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GlobalJitLevel {
    /// No explicit choice; the override subsystem (if any) decides.
    #[default]
    #[serde(rename = "default")]
    Default,
    /// JIT compilation disabled.
    #[serde(rename = "off")]
    Off,
    /// Conservative clustering.
    #[serde(rename = "on-1")]
    On1,
    /// Aggressive clustering.
    #[serde(rename = "on-2")]
    On2,
}

impl GlobalJitLevel {
    /// All levels, in code order.
    pub const ALL: [GlobalJitLevel; 4] = [
        GlobalJitLevel::Off,
        GlobalJitLevel::Default,
        GlobalJitLevel::On1,
        GlobalJitLevel::On2,
    ];

    /// Numeric code of the level (`-1` off, `0` default, `1`, `2`).
    pub fn code(self) -> i32 {
        match self {
            GlobalJitLevel::Off => -1,
            GlobalJitLevel::Default => 0,
            GlobalJitLevel::On1 => 1,
            GlobalJitLevel::On2 => 2,
        }
    }

    /// Inverse of [`GlobalJitLevel::code`].
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(GlobalJitLevel::Off),
            0 => Some(GlobalJitLevel::Default),
            1 => Some(GlobalJitLevel::On1),
            2 => Some(GlobalJitLevel::On2),
            _ => None,
        }
    }

    pub fn is_default(self) -> bool {
        self == GlobalJitLevel::Default
    }
}

impl Display for GlobalJitLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlobalJitLevel::Default => write!(f, "default"),
            GlobalJitLevel::Off => write!(f, "off"),
            GlobalJitLevel::On1 => write!(f, "on-1"),
            GlobalJitLevel::On2 => write!(f, "on-2"),
        }
    }
}

impl FromStr for GlobalJitLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return GlobalJitLevel::from_code(code)
                .ok_or_else(|| format!("Invalid JIT level code {code}. Expected: -1, 0, 1 or 2"));
        }
        match s.to_lowercase().as_str() {
            "default" => Ok(GlobalJitLevel::Default),
            "off" => Ok(GlobalJitLevel::Off),
            "on-1" | "on1" => Ok(GlobalJitLevel::On1),
            "on-2" | "on2" => Ok(GlobalJitLevel::On2),
            _ => Err(format!(
                "Invalid JIT level '{s}'. Expected: default, off, on-1, on-2 or -1, 0, 1, 2"
            )),
        }
    }
}

/// Effective JIT levels for single-device and general graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct JitLevels {
    /// Level applied to graphs that run on a single device.
    pub single_device: GlobalJitLevel,
    /// Level applied to every other graph.
    pub general: GlobalJitLevel,
}

impl JitLevels {
    pub fn new(single_device: GlobalJitLevel, general: GlobalJitLevel) -> Self {
        Self {
            single_device,
            general,
        }
    }

    /// Both components set to `level`.
    pub fn uniform(level: GlobalJitLevel) -> Self {
        Self::new(level, level)
    }
}

impl Display for JitLevels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "single-device={} general={}",
            self.single_device, self.general
        )
    }
}
