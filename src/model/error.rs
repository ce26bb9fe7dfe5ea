// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the measure model.

use thiserror::Error;

use super::measure::MeasureKind;

/// Failures reported by measure, bar, part and composition operations.
///
/// Every variant is recoverable: the operation that produced it leaves its
/// receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Note position outside the measure
    #[error("step {position} is out of range for a measure of {length} steps")]
    OutOfRange { position: usize, length: usize },

    /// Index outside a stack or collection
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A measure of the wrong kind was supplied
    #[error("expected a {expected}, got a {found}")]
    TypeMismatch {
        expected: MeasureKind,
        found: MeasureKind,
    },

    /// Variation and base measure differ in length
    #[error("cannot merge a {variation}-step variation into a {base}-step measure")]
    LengthMismatch { base: usize, variation: usize },
}

/// Result alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
