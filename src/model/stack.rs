// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ordered sequence with pop-then-insert reordering.

use std::ops::Index;

use super::error::{ModelError, Result};

/// An ordered sequence whose items can be moved around.
///
/// Used for variation stacks, where order is merge precedence, and for
/// the parts of a composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the item at `index`
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index < self.items.len() {
            Ok(self.items.remove(index))
        } else {
            Err(ModelError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Move an item.
    ///
    /// Removes the item at `from` and inserts it at `to` in the remaining
    /// sequence, so `[a, b, c, d]` with `move_item(0, 2)` becomes
    /// `[b, c, a, d]`. A `to` past the end appends.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let item = self.remove(from)?;
        let to = to.min(self.items.len());
        self.items.insert(to, item);
        Ok(())
    }

    /// Get item at index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Get mutable item at index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Iterate in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// All items as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Stack<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
