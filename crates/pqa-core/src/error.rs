//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the PQA stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Errors exist only at the identifier/parse boundary: validated newtype
//! constructors and `FromStr` implementations. The analytics engine itself
//! is total over the record domain — incomplete records degrade to safe
//! defaults and never surface an error (see `pqa-analytics`).

use thiserror::Error;

/// Top-level error type for the PQA stack.
#[derive(Error, Debug)]
pub enum PqaError {
    /// A validated identifier was constructed from invalid input.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A string failed to parse into one of the domain enums.
    #[error("parse error: {0}")]
    Parse(String),

    /// A record field violated a structural validation rule.
    #[error("validation error: {0}")]
    Validation(String),
}
