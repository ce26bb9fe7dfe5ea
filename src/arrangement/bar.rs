// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A position in a part: a base measure plus a stack of variations.

use std::fmt;

use tracing::debug;

use crate::model::{Measure, MeasureKind, ModelError, Result, Stack, DEFAULT_STEPS};

/// Name given to the measure of a default bar
pub const BLANK_MEASURE_NAME: &str = "blank measure";

/// A bar within a part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Base measure
    base_measure: Measure,
    /// Variations, later entries take precedence
    variations: Stack<Measure>,
}

impl Bar {
    /// Create a bar over `base_measure`.
    ///
    /// Fails if `base_measure` is a variation.
    pub fn new(base_measure: Measure) -> Result<Self> {
        check_kind(&base_measure, MeasureKind::Base)?;
        Ok(Self {
            base_measure,
            variations: Stack::new(),
        })
    }

    /// Create a bar over a fresh blank measure of `steps` steps
    pub fn blank(steps: usize) -> Self {
        Self::named_blank(BLANK_MEASURE_NAME, steps)
    }

    /// Create a bar over a fresh blank measure with the given name
    pub fn named_blank(name: impl Into<String>, steps: usize) -> Self {
        Self {
            base_measure: Measure::new(name, steps),
            variations: Stack::new(),
        }
    }

    /// Get the base measure
    pub fn base_measure(&self) -> &Measure {
        &self.base_measure
    }

    /// Get the base measure for editing
    pub fn base_measure_mut(&mut self) -> &mut Measure {
        &mut self.base_measure
    }

    /// Replace the base measure
    pub fn set_base_measure(&mut self, measure: Measure) -> Result<()> {
        check_kind(&measure, MeasureKind::Base)?;
        self.base_measure = measure;
        Ok(())
    }

    /// Push a variation onto the stack
    pub fn add_variation(&mut self, variation: Measure) -> Result<()> {
        check_kind(&variation, MeasureKind::Variation)?;
        self.variations.push(variation);
        Ok(())
    }

    /// Get the variation stack
    pub fn variations(&self) -> &Stack<Measure> {
        &self.variations
    }

    /// Remove a variation from the stack
    pub fn remove_variation(&mut self, index: usize) -> Result<Measure> {
        self.variations.remove(index)
    }

    /// Reorder the variation stack, see [`Stack::move_item`]
    pub fn move_variation(&mut self, from: usize, to: usize) -> Result<()> {
        self.variations.move_item(from, to)
    }

    /// Fold every variation onto the base measure.
    ///
    /// Variations apply in stack order. The result is a new bar holding the
    /// merged measure and no variations.
    pub fn render(&self) -> Result<Bar> {
        let mut product = self.base_measure.clone();
        for variation in &self.variations {
            product = product.apply_variation(variation)?;
        }
        debug!(
            bar = %self,
            variations = self.variations.len(),
            steps = %product,
            "rendered bar"
        );
        Ok(Bar {
            base_measure: product,
            variations: Stack::new(),
        })
    }
}

impl Default for Bar {
    fn default() -> Self {
        Self::blank(DEFAULT_STEPS)
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_measure.name())?;
        for variation in &self.variations {
            write!(f, " + {}", variation.name())?;
        }
        Ok(())
    }
}

fn check_kind(measure: &Measure, expected: MeasureKind) -> Result<()> {
    if measure.kind() == expected {
        Ok(())
    } else {
        Err(ModelError::TypeMismatch {
            expected,
            found: measure.kind(),
        })
    }
}
