// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Measures and variations.
//!
//! A measure is a fixed run of [`Tristate`] steps. A variation has the same
//! shape but starts out all `Unset` and is merged onto a base measure with
//! [`Measure::apply_variation`].

use std::fmt;

use tracing::{debug, trace};

use super::error::{ModelError, Result};
use super::tristate::Tristate;

/// Steps in a measure unless configured otherwise
pub const DEFAULT_STEPS: usize = 16;

/// Whether a measure is a base pattern or an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureKind {
    /// Ordinary measure, cells default to `Off`
    Base,
    /// Overlay, cells default to `Unset`
    Variation,
}

impl MeasureKind {
    /// Type name used by the YAML export
    pub fn type_name(self) -> &'static str {
        match self {
            MeasureKind::Base => "Measure",
            MeasureKind::Variation => "MeasureVariation",
        }
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureKind::Base => write!(f, "measure"),
            MeasureKind::Variation => write!(f, "variation"),
        }
    }
}

/// A single measure of step notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    /// Measure name (not required to be unique)
    name: String,
    /// Base or variation
    kind: MeasureKind,
    /// One state per step, length fixed at construction
    content: Vec<Tristate>,
    /// Variations spawned from this measure, in creation order
    variations: Vec<Measure>,
    /// Name of the measure a variation was spawned from
    origin: Option<String>,
}

impl Measure {
    /// Create a base measure with every step `Off`
    pub fn new(name: impl Into<String>, number_of_steps: usize) -> Self {
        Self::with_default(name, number_of_steps, Tristate::Off)
    }

    /// Create a base measure with every step set to `default`
    pub fn with_default(name: impl Into<String>, number_of_steps: usize, default: Tristate) -> Self {
        Self {
            name: name.into(),
            kind: MeasureKind::Base,
            content: vec![default; number_of_steps],
            variations: Vec::new(),
            origin: None,
        }
    }

    /// Create a 16-step blank measure
    pub fn blank(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_STEPS)
    }

    fn variation(name: String, number_of_steps: usize, origin: &str) -> Self {
        Self {
            name,
            kind: MeasureKind::Variation,
            content: vec![Tristate::Unset; number_of_steps],
            variations: Vec::new(),
            origin: Some(origin.to_string()),
        }
    }

    /// Get measure name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get measure kind
    pub fn kind(&self) -> MeasureKind {
        self.kind
    }

    /// Check if this measure is a variation
    pub fn is_variation(&self) -> bool {
        self.kind == MeasureKind::Variation
    }

    /// Name of the measure this variation was made from
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the measure has no steps
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// All steps, in order
    pub fn contents(&self) -> &[Tristate] {
        &self.content
    }

    /// Set the state of the step at `position`
    pub fn set_note(&mut self, position: usize, state: Tristate) -> Result<()> {
        let length = self.content.len();
        let cell = self
            .content
            .get_mut(position)
            .ok_or(ModelError::OutOfRange { position, length })?;
        *cell = state;
        Ok(())
    }

    /// Get the state of the step at `position`
    pub fn get_note(&self, position: usize) -> Result<Tristate> {
        self.content.get(position).copied().ok_or(ModelError::OutOfRange {
            position,
            length: self.content.len(),
        })
    }

    /// Make a variation of this measure.
    ///
    /// The new variation has the same length, every step `Unset`, and is
    /// named `<name>-variant-<n>` where `n` counts earlier variations. It is
    /// registered with this measure and a handle to it is returned.
    pub fn make_variation(&mut self) -> Result<&mut Measure> {
        if self.is_variation() {
            return Err(ModelError::TypeMismatch {
                expected: MeasureKind::Base,
                found: MeasureKind::Variation,
            });
        }

        let name = format!("{}-variant-{}", self.name, self.variations.len());
        debug!(measure = %self.name, variation = %name, "made variation");
        self.variations
            .push(Measure::variation(name, self.content.len(), &self.name));
        let index = self.variations.len() - 1;
        Ok(&mut self.variations[index])
    }

    /// Variations made from this measure
    pub fn variations(&self) -> &[Measure] {
        &self.variations
    }

    /// Get a variation by creation index
    pub fn get_variation(&self, index: usize) -> Option<&Measure> {
        self.variations.get(index)
    }

    /// Get a mutable variation by creation index
    pub fn get_variation_mut(&mut self, index: usize) -> Option<&mut Measure> {
        self.variations.get_mut(index)
    }

    /// Merge a variation onto this measure.
    ///
    /// Returns a new base measure named `<self>-<variation>` in which every
    /// step the variation sets wins and every `Unset` step falls back to
    /// this measure. Neither input changes.
    pub fn apply_variation(&self, variation: &Measure) -> Result<Measure> {
        if !variation.is_variation() {
            return Err(ModelError::TypeMismatch {
                expected: MeasureKind::Variation,
                found: variation.kind,
            });
        }
        if variation.len() != self.len() {
            return Err(ModelError::LengthMismatch {
                base: self.len(),
                variation: variation.len(),
            });
        }

        let content = self
            .content
            .iter()
            .zip(&variation.content)
            .map(|(&base, &over)| if over.is_set() { over } else { base })
            .collect();

        let product = Measure {
            name: format!("{}-{}", self.name, variation.name),
            kind: MeasureKind::Base,
            content,
            variations: Vec::new(),
            origin: None,
        };
        trace!(product = %product.name, steps = %product, "applied variation");
        Ok(product)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.content {
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}
