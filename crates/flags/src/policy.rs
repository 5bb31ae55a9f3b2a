//! Auto-jit override policy and its registry getter.

use autojit_config::{GlobalJitLevel, JitLevelGetter, JitLevels};

use crate::flags::AutoJitFlag;

/// Name under which [`AutoJitGetter`] registers.
pub const AUTO_JIT_GETTER_NAME: &str = "auto-jit-flags";

/// Combine the session level with the auto-jit flag.
///
/// A `Default` session level means JIT is off unless the flag says
/// otherwise. Any non-`Default` flag component wins over the session for its
/// graph kind.
pub fn effective_levels(session_level: GlobalJitLevel, flag: AutoJitFlag) -> JitLevels {
    let base = if session_level.is_default() {
        GlobalJitLevel::Off
    } else {
        session_level
    };

    let mut levels = JitLevels::uniform(base);
    if !flag.single_device.is_default() {
        levels.single_device = flag.single_device;
    }
    if !flag.general.is_default() {
        levels.general = flag.general;
    }
    levels
}

/// Registry getter applying [`effective_levels`] with a fixed flag.
///
/// The flag is read once at registration; later changes to the environment
/// are not observed.
#[derive(Debug, Clone, Copy)]
pub struct AutoJitGetter {
    flag: AutoJitFlag,
}

impl AutoJitGetter {
    pub fn new(flag: AutoJitFlag) -> Self {
        Self { flag }
    }

    pub fn flag(&self) -> AutoJitFlag {
        self.flag
    }
}

impl JitLevelGetter for AutoJitGetter {
    fn global_jit_level(&self, session_level: GlobalJitLevel) -> JitLevels {
        effective_levels(session_level, self.flag)
    }

    fn name(&self) -> &str {
        AUTO_JIT_GETTER_NAME
    }
}
