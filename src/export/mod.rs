// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Export of measures and parts to human-readable documents.

pub mod yaml;

pub use yaml::{export_measure, export_part, MeasureDocument};
