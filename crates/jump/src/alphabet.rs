//! Label alphabets.

use std::str::FromStr;

use anyhow::{bail, Result};

/// Ordered set of label characters.
///
/// Order is assignment priority inside a group: the target nearest the
/// cursor gets the first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAlphabet {
    chars: Vec<char>,
}

impl LabelAlphabet {
    /// Build an alphabet, rejecting empty input and repeated characters.
    pub fn new(chars: &str) -> Result<Self> {
        let mut seen = Vec::new();
        for ch in chars.chars() {
            if seen.contains(&ch) {
                bail!("Label alphabet repeats {:?}", ch);
            }
            seen.push(ch);
        }
        if seen.is_empty() {
            bail!("Label alphabet is empty");
        }
        Ok(Self { chars: seen })
    }

    /// Number of labels per group.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Labels in assignment order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Whether `ch` is one of the labels.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

impl FromStr for LabelAlphabet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
