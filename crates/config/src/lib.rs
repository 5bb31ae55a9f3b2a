//! JIT level configuration for autojit hosts.
//!
//! This crate holds the lightweight, dependency-free side of the JIT level
//! override: the level types, the write-once [`JitLevelRegistry`], and the
//! process-wide instance behind [`get_global_jit_level`].
//!
//! The override subsystem (`autojit-flags`) lives in a separate crate and
//! pushes its getter in at startup, so hosts never depend on it directly.
//!
//! ```text
//! autojit-config (this crate)
//!   ├── tier     — GlobalJitLevel, JitLevels
//!   ├── registry — JitLevelRegistry, JitLevelGetter
//!   └── error    — RegistryError
//!
//! autojit-flags (override subsystem)
//!   └── registers an env-driven getter into JIT_LEVEL_REGISTRY
//! ```

pub mod error;
pub mod registry;
pub mod tier;

pub use error::RegistryError;
pub use registry::{JitLevelGetter, JitLevelRegistry};
pub use tier::{GlobalJitLevel, JitLevels};

lazy_static::lazy_static! {
    /// Process-wide JIT level registry.
    ///
    /// Created on first access and never cleared. The override subsystem
    /// registers into it during startup; hosts query it through
    /// [`get_global_jit_level`].
    pub static ref JIT_LEVEL_REGISTRY: JitLevelRegistry = JitLevelRegistry::new();
}

/// Register the process-wide JIT level getter.
///
/// See [`JitLevelRegistry::register`].
pub fn register_global_jit_level_getter<G>(getter: G) -> Result<(), RegistryError>
where
    G: JitLevelGetter + 'static,
{
    JIT_LEVEL_REGISTRY.register(getter)
}

/// Effective JIT levels for the session level, as seen by the process-wide
/// registry. Identity when no override subsystem registered.
pub fn get_global_jit_level(session_level: GlobalJitLevel) -> JitLevels {
    JIT_LEVEL_REGISTRY.query(session_level)
}
