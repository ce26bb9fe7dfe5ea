// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Three-valued note state.

use std::fmt;

/// State of a single step.
///
/// `Unset` is only meaningful inside a variation, where it defers to the
/// base measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tristate {
    /// Note sounds
    On,
    /// Note is silent
    Off,
    /// No opinion; defer to the base
    Unset,
}

impl Tristate {
    /// Flag used by the YAML export: `true`, `false` or null
    pub fn as_flag(self) -> Option<bool> {
        match self {
            Tristate::On => Some(true),
            Tristate::Off => Some(false),
            Tristate::Unset => None,
        }
    }

    /// Step-grid glyph
    pub fn glyph(self) -> char {
        match self {
            Tristate::On => 'x',
            Tristate::Off => '.',
            Tristate::Unset => '-',
        }
    }

    /// Whether this step carries an opinion
    pub fn is_set(self) -> bool {
        self != Tristate::Unset
    }
}

impl fmt::Display for Tristate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_tag() {
        assert_ne!(Tristate::On, Tristate::Off);
        assert_ne!(Tristate::Off, Tristate::Unset);
        assert_eq!(Tristate::On, Tristate::On);
        assert_eq!(Tristate::Unset, Tristate::Unset);
    }

    #[test]
    fn test_flags() {
        assert_eq!(Tristate::On.as_flag(), Some(true));
        assert_eq!(Tristate::Off.as_flag(), Some(false));
        assert_eq!(Tristate::Unset.as_flag(), None);
    }

    #[test]
    fn test_is_set() {
        assert!(Tristate::On.is_set());
        assert!(Tristate::Off.is_set());
        assert!(!Tristate::Unset.is_set());
    }
}
