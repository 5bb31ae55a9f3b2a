//! Auto-jit override subsystem.
//!
//! Reads the auto-jit flag from the environment and registers a getter that
//! recomputes the effective JIT levels from it. Hosts that link this crate
//! call [`register_auto_jit_getter`] once from their startup sequence;
//! hosts that don't keep the identity behavior of `autojit-config`.

pub mod error;
pub mod flags;
pub mod policy;

pub use error::AutoJitError;
pub use flags::{AUTOJIT_FLAGS_ENV, AutoJitFlag, AutoJitFlags};
pub use policy::{AUTO_JIT_GETTER_NAME, AutoJitGetter, effective_levels};

use autojit_config::JitLevelRegistry;
use tracing::info;

/// Register the auto-jit getter, reading flags from [`AUTOJIT_FLAGS_ENV`].
///
/// Call this once at startup. Fails if the flags don't parse or if the
/// registry already holds a getter.
pub fn register_auto_jit_getter(registry: &JitLevelRegistry) -> Result<(), AutoJitError> {
    let flags = AutoJitFlags::from_env()?;
    register_auto_jit_getter_with(registry, &flags)
}

/// Register the auto-jit getter with already-parsed flags.
pub fn register_auto_jit_getter_with(
    registry: &JitLevelRegistry,
    flags: &AutoJitFlags,
) -> Result<(), AutoJitError> {
    let flag = flags.auto_jit();
    info!(
        single_device = %flag.single_device,
        general = %flag.general,
        "Auto-jit flag loaded"
    );
    registry.register(AutoJitGetter::new(flag))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;
