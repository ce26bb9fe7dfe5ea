// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Bar and part arrangement.
//!
//! This module provides:
//! - Bars: a base measure with a stack of variations
//! - Parts: ordered bars, rendered into flat measures
//! - Compositions: ordered parts

pub mod bar;
pub mod composition;
pub mod part;

pub use bar::{Bar, BLANK_MEASURE_NAME};
pub use composition::Composition;
pub use part::{Part, DEFAULT_BARS};
