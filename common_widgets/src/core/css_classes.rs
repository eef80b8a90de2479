// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use smallvec::SmallVec;

/// The set of CSS class names of a widget.
///
/// Classes keep the order in which they were first added. Adding a class which is
/// already present does nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CssClasses {
    classes: SmallVec<[String; 4]>,
}

impl CssClasses {
    /// Create an empty class set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class.
    ///
    /// Returns `true` if the class wasn't present before.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class.
    ///
    /// Returns `true` if the class was present.
    pub fn remove(&mut self, class: &str) -> bool {
        let len_before = self.classes.len();
        self.classes.retain(|existing| existing != class);
        self.classes.len() != len_before
    }

    /// Add `class` if `enabled` is true, remove it otherwise.
    pub fn toggle(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    /// Returns `true` if the class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Iterate over the classes, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if there are no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Formats the classes the way they'd appear in a `class` attribute.
impl fmt::Display for CssClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, class) in self.classes.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}
