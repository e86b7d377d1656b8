//! Short-name allocation for compressed output.
//!
//! Each created variable renders its full name normally and the next name in
//! the sequence `a, b, ..., z, aa, ab, ..., az, ba, ...` when compressed.

use quill_core::{Compressible, Value};

const DEFAULT_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Hands out compressible variable names.
#[derive(Debug, Clone)]
pub struct VariableFactory {
    index: usize,
    letters: Vec<char>,
}

impl VariableFactory {
    pub fn new() -> Self {
        Self {
            index: 0,
            letters: DEFAULT_LETTERS.chars().collect(),
        }
    }

    /// Use a custom alphabet. Returns `None` for an empty alphabet.
    pub fn with_letters(letters: &str) -> Option<Self> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.is_empty() {
            return None;
        }
        Some(Self { index: 0, letters })
    }

    /// How many names have been handed out.
    pub fn count(&self) -> usize {
        self.index
    }

    /// A variable rendering `name`, or the next short name when compressed.
    pub fn create(&mut self, name: impl Into<Value>) -> Compressible {
        let short = self.short_name(self.index);
        tracing::trace!(index = self.index, short = %short, "allocated variable");
        self.index += 1;
        Compressible::new(name, short)
    }

    /// The `index`th name in the letter sequence.
    pub fn short_name(&self, index: usize) -> String {
        let base = self.letters.len();
        let mut name = Vec::new();
        let mut i = index;
        loop {
            name.push(self.letters[i % base]);
            if i < base {
                break;
            }
            i = i / base - 1;
        }
        name.iter().rev().collect()
    }
}

impl Default for VariableFactory {
    fn default() -> Self {
        Self::new()
    }
}
