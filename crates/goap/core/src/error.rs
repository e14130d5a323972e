//! Error types for goap-core.
//!
//! Planning and execution are infallible: an action that cannot run is
//! skipped and reported, never raised. The only fallible surface is
//! configuration supplied from outside the core.

/// Invalid agent configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// A "one in zero" chance has no meaning for the attack roll.
    #[error("attack odds must be at least one in 1, got one in 0")]
    ZeroAttackOdds,
}
