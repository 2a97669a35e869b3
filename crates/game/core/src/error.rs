//! Common error infrastructure for cat-core.
//!
//! This module provides shared types and traits used across all error types in cat-core.
//! Domain-specific errors (`BlockError`, `LayoutError`, `StateError`) are defined in
//! their respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error type with specific variants
//! - **Rich Context**: Variants carry the offending position or parameter
//! - **Severity Classification**: Errors are categorized so shells can decide how to react
//! - **No panics**: A rejected click must never take the UI down

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the same turn can be retried with another input.
    ///
    /// Examples: target cell already blocked, target is the cat
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: coordinates outside the board, canvas too small, game already over
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all cat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, logging, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
