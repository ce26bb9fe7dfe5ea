// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Step data model.
//!
//! This module provides:
//! - Tristate: on/off/unset step values
//! - Measures and variations with overlay merging
//! - Stack: ordered sequences with move semantics

pub mod error;
pub mod measure;
pub mod stack;
pub mod tristate;

pub use error::{ModelError, Result};
pub use measure::{Measure, MeasureKind, DEFAULT_STEPS};
pub use stack::Stack;
pub use tristate::Tristate;
