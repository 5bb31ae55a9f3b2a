//! Error types for the JIT level registry.

/// Errors returned by [`crate::registry::JitLevelRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A getter was already registered. The slot accepts exactly one write;
    /// two subsystems both claiming it is a configuration conflict.
    #[error("JIT level getter already registered by `{existing}`, rejected `{rejected}`")]
    AlreadyRegistered {
        /// Name of the getter that holds the slot.
        existing: String,
        /// Name of the getter that was turned away.
        rejected: String,
    },
}
