//! JIT level registry.
//!
//! Holds the single optional getter through which an override subsystem
//! replaces the host's reading of the session JIT level, and answers level
//! queries with or without it.
//!
//! The slot is write-once: it starts empty, accepts one successful
//! [`JitLevelRegistry::register`], and is never cleared or replaced. While it
//! is empty, [`JitLevelRegistry::query`] returns the session level unchanged
//! for both graph kinds.

use std::sync::{Arc, RwLock};

use tracing::{error, info, trace};

use crate::error::RegistryError;
use crate::tier::{GlobalJitLevel, JitLevels};

/// Trait for JIT level override getters.
///
/// The registry defines this interface; an override subsystem provides the
/// implementation and registers it at startup. Any
/// `Fn(GlobalJitLevel) -> JitLevels` closure is a getter.
pub trait JitLevelGetter: Send + Sync {
    /// Map the session JIT level to the effective levels.
    fn global_jit_level(&self, session_level: GlobalJitLevel) -> JitLevels;

    /// Name used in logs and registration errors.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> JitLevelGetter for F
where
    F: Fn(GlobalJitLevel) -> JitLevels + Send + Sync,
{
    fn global_jit_level(&self, session_level: GlobalJitLevel) -> JitLevels {
        self(session_level)
    }
}

/// Write-once slot for the JIT level getter.
///
/// Shared by reference. The process-wide instance lives in
/// [`crate::JIT_LEVEL_REGISTRY`]; tests and embedding hosts can build their
/// own with [`JitLevelRegistry::new`].
pub struct JitLevelRegistry {
    /// Registered getter (set once by the override subsystem at startup).
    getter: RwLock<Option<Arc<dyn JitLevelGetter>>>,
}

impl JitLevelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            getter: RwLock::new(None),
        }
    }

    /// Register the JIT level getter.
    ///
    /// Call this once at startup, from the override subsystem's initializer.
    /// The presence check and the store happen under one write lock, so of
    /// any number of racing calls exactly one succeeds. Every other call
    /// returns [`RegistryError::AlreadyRegistered`] and the stored getter is
    /// left untouched.
    pub fn register<G>(&self, getter: G) -> Result<(), RegistryError>
    where
        G: JitLevelGetter + 'static,
    {
        #[expect(clippy::unwrap_used, reason = "RwLock poisoning is unrecoverable")]
        let mut guard = self.getter.write().unwrap();

        if let Some(existing) = guard.as_ref() {
            let err = RegistryError::AlreadyRegistered {
                existing: existing.name().to_string(),
                rejected: getter.name().to_string(),
            };
            error!("{err}");
            return Err(err);
        }

        info!(getter = getter.name(), "Registered JIT level getter");
        *guard = Some(Arc::new(getter));
        Ok(())
    }

    /// Effective JIT levels for `session_level`.
    ///
    /// Without a registered getter both components equal `session_level`.
    /// Otherwise the getter's answer is returned as is. The getter runs
    /// outside the lock; a panic inside it reaches the caller.
    pub fn query(&self, session_level: GlobalJitLevel) -> JitLevels {
        self.resolve(session_level).0
    }

    /// Like [`JitLevelRegistry::query`], also naming the getter that
    /// answered (`None` for the identity fallback).
    ///
    /// Both values come from one read of the slot, so the name always
    /// belongs to the getter that produced the levels.
    pub fn query_with_registrant(
        &self,
        session_level: GlobalJitLevel,
    ) -> (JitLevels, Option<String>) {
        let (levels, getter) = self.resolve(session_level);
        (levels, getter.map(|getter| getter.name().to_string()))
    }

    /// Whether a getter has been registered.
    pub fn is_registered(&self) -> bool {
        #[expect(clippy::unwrap_used, reason = "RwLock poisoning is unrecoverable")]
        let guard = self.getter.read().unwrap();
        guard.is_some()
    }

    /// Name of the registered getter, if any.
    pub fn registrant(&self) -> Option<String> {
        self.getter().map(|getter| getter.name().to_string())
    }

    fn resolve(
        &self,
        session_level: GlobalJitLevel,
    ) -> (JitLevels, Option<Arc<dyn JitLevelGetter>>) {
        let Some(getter) = self.getter() else {
            return (JitLevels::uniform(session_level), None);
        };
        let levels = getter.global_jit_level(session_level);
        trace!(%session_level, %levels, getter = getter.name(), "JIT level query");
        (levels, Some(getter))
    }

    fn getter(&self) -> Option<Arc<dyn JitLevelGetter>> {
        #[expect(clippy::unwrap_used, reason = "RwLock poisoning is unrecoverable")]
        let guard = self.getter.read().unwrap();
        guard.clone()
    }
}

impl Default for JitLevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JitLevelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JitLevelRegistry")
            .field("registrant", &self.registrant())
            .finish()
    }
}
