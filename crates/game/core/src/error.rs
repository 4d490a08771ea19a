//! Common error infrastructure for wumpus-core.
//!
//! Domain-specific errors (`LayoutError`, `Rejection`, `SnapshotError`) are
//! defined next to the types they validate. This module only provides the
//! shared classification used by callers to pick a recovery strategy.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry the same intent later
/// - **Validation**: the input is not acceptable in the current state
/// - **Internal**: an invariant was violated; indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same intent.
    ///
    /// Examples: remote round-trip failed, action already in flight
    Recoverable,

    /// Validation error - rejected as a no-op, should not retry unchanged.
    ///
    /// Examples: shooting while not aiming, aiming without arrows
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: player left the explored set, turn counter regressed
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all wumpus-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable, upper-snake-case error code per variant
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
