// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Parts: ordered sequences of bars.
//!
//! A Part is rendered by rendering each of its bars, which yields a flat
//! part with every variation merged into its bar's measure.

use std::fmt;

use tracing::debug;

use super::bar::Bar;
use crate::config::ModelConfig;
use crate::model::{Result, DEFAULT_STEPS};

/// Bars in a part unless configured otherwise
pub const DEFAULT_BARS: usize = 4;

/// A sequence of bars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Part name
    name: String,
    /// Bars in playing order
    content: Vec<Bar>,
}

impl Part {
    /// Create a part of `number_of_bars` blank 16-step bars
    pub fn new(number_of_bars: usize) -> Self {
        Self {
            name: String::new(),
            content: (0..number_of_bars).map(|_| Bar::blank(DEFAULT_STEPS)).collect(),
        }
    }

    /// Create a part with no bars
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Create a part shaped by the configuration
    pub fn from_config(config: &ModelConfig) -> Self {
        Self {
            name: String::new(),
            content: (0..config.bars_per_part)
                .map(|_| Bar::named_blank(config.blank_measure_name.clone(), config.steps_per_measure))
                .collect(),
        }
    }

    /// Get part name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set part name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Builder: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a bar
    pub fn add_bar(&mut self, bar: Bar) {
        self.content.push(bar);
    }

    /// Get bar at index
    pub fn bar(&self, index: usize) -> Option<&Bar> {
        self.content.get(index)
    }

    /// Get mutable bar at index
    pub fn bar_mut(&mut self, index: usize) -> Option<&mut Bar> {
        self.content.get_mut(index)
    }

    /// Get all bars
    pub fn bars(&self) -> &[Bar] {
        &self.content
    }

    /// Number of bars
    pub fn number_of_bars(&self) -> usize {
        self.content.len()
    }

    /// Render every bar, producing a part with no variations left
    pub fn render(&self) -> Result<Part> {
        let content = self
            .content
            .iter()
            .map(Bar::render)
            .collect::<Result<Vec<_>>>()?;
        debug!(part = %self.name, bars = content.len(), "rendered part");
        Ok(Part {
            name: self.name.clone(),
            content,
        })
    }
}

impl Default for Part {
    fn default() -> Self {
        Self::new(DEFAULT_BARS)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, bar) in self.content.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", bar)?;
        }
        write!(f, "]")
    }
}
