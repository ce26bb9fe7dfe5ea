// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Compositions: ordered sequences of parts.

use super::part::Part;
use crate::model::{Result, Stack};

/// An ordered collection of parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    name: String,
    parts: Stack<Part>,
}

impl Composition {
    /// Create an empty composition
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Stack::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a part
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Remove the part at `index`
    pub fn remove_part(&mut self, index: usize) -> Result<Part> {
        self.parts.remove(index)
    }

    /// Reorder parts, see [`Stack::move_item`]
    pub fn move_part(&mut self, from: usize, to: usize) -> Result<()> {
        self.parts.move_item(from, to)
    }

    pub fn part(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    pub fn part_mut(&mut self, index: usize) -> Option<&mut Part> {
        self.parts.get_mut(index)
    }

    pub fn parts(&self) -> &[Part] {
        self.parts.as_slice()
    }

    pub fn number_of_parts(&self) -> usize {
        self.parts.len()
    }

    /// Builder: add part
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }
}
