//! Jump command types.
//!
//! Commands are what the host's key bindings send to the dispatcher; the
//! dispatcher answers each one with a [`CommandResult`].

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::Region;

/// Pseudo-character name that targets line boundaries.
pub const LINE_BOUNDARY_NAME: &str = "enter";

/// What a jump session looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    /// Every occurrence of a character.
    Char(char),
    /// First and last character of every line.
    LineBoundary,
}

impl FromStr for JumpTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LINE_BOUNDARY_NAME {
            return Ok(JumpTarget::LineBoundary);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(JumpTarget::Char(ch)),
            _ => bail!("Jump target must be a single character or \"enter\", got {:?}", s),
        }
    }
}

impl fmt::Display for JumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpTarget::Char(ch) => write!(f, "{}", ch),
            JumpTarget::LineBoundary => f.write_str(LINE_BOUNDARY_NAME),
        }
    }
}

/// Commands handled by the jump dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpCommand {
    /// Start a session jumping to `target`.
    /// Response: `CommandResult::Started { groups }` or `CommandResult::NoMatches`
    Start {
        /// What to jump to
        target: JumpTarget,
        /// Extend the selection instead of moving the caret
        select_text: bool,
    },

    /// Show the next (`forward`) or previous label page.
    /// Response: `CommandResult::Page { index }`
    ShowGroup {
        /// Direction to page in
        forward: bool,
    },

    /// Confirm a label and end the session.
    /// Response: `CommandResult::Jumped(Option<Region>)`
    JumpTo {
        /// Label typed by the user
        label: char,
    },

    /// End the session without moving.
    /// Response: `CommandResult::Cancelled`
    Cancel,
}

/// Result of handling a jump command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommandResult {
    /// No session was active; the command was ignored.
    #[default]
    Ignored,

    /// A session started with this many label pages.
    Started {
        /// Number of pages
        groups: usize,
    },

    /// Nothing matched in the visible region; no session started.
    NoMatches,

    /// The page at `index` is now displayed.
    Page {
        /// Zero-based page index
        index: usize,
    },

    /// The session ended on a label. `None` when the label was not offered.
    Jumped(Option<Region>),

    /// The session was cancelled.
    Cancelled,
}

impl CommandResult {
    /// Whether the host should redraw the view.
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, CommandResult::Ignored | CommandResult::NoMatches)
    }

    /// Selection chosen by a jump, if any.
    pub fn winner(&self) -> Option<Region> {
        match self {
            CommandResult::Jumped(winner) => *winner,
            _ => None,
        }
    }
}
