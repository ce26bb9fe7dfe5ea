// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Step patterns with variations.
//!
//! Measures hold on/off/unset steps. Variations overlay a measure, with
//! `Unset` steps deferring to the base. Bars stack variations over a base
//! measure and parts line bars up; rendering folds every variation in.

pub mod arrangement;
pub mod config;
pub mod export;
pub mod logging;
pub mod model;

pub use arrangement::{Bar, Composition, Part};
pub use config::{LogConfig, ModelConfig};
pub use model::{Measure, MeasureKind, ModelError, Stack, Tristate};
