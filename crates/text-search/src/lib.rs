//! Jump target scanning for easymotion.
//!
//! Turns a [`JumpTarget`] into a regex and finds every occurrence in a
//! piece of text, reporting character offsets.

use anyhow::{Context, Result};
use regex::Regex;

use easymotion_core::JumpTarget;

/// First character of a non-empty line, or last character of a line.
/// Newlines are never matched.
const LINE_BOUNDARY_PATTERN: &str = "(?m)^.|.$";

/// Search options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Match letters regardless of case.
    pub ignore_case: bool,
}

/// Build the regex source for `target`.
///
/// Characters are always matched literally. `ignore_case` has no effect on
/// line boundaries.
pub fn target_pattern(target: JumpTarget, options: &SearchOptions) -> String {
    match target {
        JumpTarget::LineBoundary => LINE_BOUNDARY_PATTERN.to_string(),
        JumpTarget::Char(ch) => {
            let literal = regex::escape(ch.encode_utf8(&mut [0; 4]));
            if options.ignore_case {
                format!("(?i){}", literal)
            } else {
                literal
            }
        }
    }
}

/// Compile the regex for `target`.
pub fn target_regex(target: JumpTarget, options: &SearchOptions) -> Result<Regex> {
    let pattern = target_pattern(target, options);
    Regex::new(&pattern).with_context(|| format!("Invalid jump pattern {:?}", pattern))
}

/// Find every occurrence of `target` in `text`.
///
/// Returns the character offset of each match in ascending order.
pub fn find_targets(text: &str, target: JumpTarget, options: &SearchOptions) -> Result<Vec<usize>> {
    let regex = target_regex(target, options)?;
    Ok(find_with(&regex, text))
}

/// Run an already compiled target regex over `text`.
pub fn find_with(regex: &Regex, text: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for mat in regex.find_iter(text) {
        // Convert byte offset to char offset incrementally
        char_pos += text[byte_pos..mat.start()].chars().count();
        byte_pos = mat.start();
        offsets.push(char_pos);
    }

    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str, target: JumpTarget, ignore_case: bool) -> Vec<usize> {
        find_targets(text, target, &SearchOptions { ignore_case }).unwrap()
    }

    #[test]
    fn test_find_char_simple() {
        assert_eq!(find("cat bat cat", JumpTarget::Char('a'), false), vec![1, 5, 9]);
    }

    #[test]
    fn test_find_char_no_matches() {
        assert!(find("xyz", JumpTarget::Char('a'), false).is_empty());
    }

    #[test]
    fn test_find_char_case() {
        let text = "Apple apple APPLE";
        assert_eq!(find(text, JumpTarget::Char('a'), false), vec![6]);
        assert_eq!(find(text, JumpTarget::Char('a'), true), vec![0, 6, 12]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let text = "a.b(c)[d]{e}^$?|:,+*\\";
        for ch in ['.', '(', ')', '[', ']', '{', '}', '^', '$', '?', '|', ':', ',', '+', '*', '\\'] {
            let offsets = find(text, JumpTarget::Char(ch), false);
            assert_eq!(offsets.len(), 1, "expected exactly one {:?}", ch);
            assert_eq!(text.chars().nth(offsets[0]), Some(ch));
        }
    }

    #[test]
    fn test_offsets_are_chars_not_bytes() {
        // 'ж' and 'ё' are two bytes each
        let text = "жёx жx";
        assert_eq!(find(text, JumpTarget::Char('x'), false), vec![2, 5]);
    }

    #[test]
    fn test_line_boundary() {
        let text = "abc\nx\n\nhello\n";
        // a(0) c(2) x(4) h(7) o(11)
        assert_eq!(find(text, JumpTarget::LineBoundary, false), vec![0, 2, 4, 7, 11]);
    }

    #[test]
    fn test_line_boundary_never_matches_newline() {
        let text = "ab\ncd";
        for offset in find(text, JumpTarget::LineBoundary, true) {
            assert_ne!(text.chars().nth(offset), Some('\n'));
        }
    }

    #[test]
    fn test_line_boundary_ignores_case_option() {
        let options = SearchOptions { ignore_case: true };
        assert_eq!(
            target_pattern(JumpTarget::LineBoundary, &options),
            LINE_BOUNDARY_PATTERN
        );
    }
}
