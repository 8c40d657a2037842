//! Host editor contract.
//!
//! The jump engine never talks to a concrete editor. Everything it needs
//! from the host (text, folds, selection, highlights, undo, per-view flags
//! and the status line) goes through [`View`].

use crate::Region;

/// Per-view flag set while a jump session is running.
pub const EASY_MOTION_MODE: &str = "easy_motion_mode";

/// Modal editing flag borrowed from the host's vi layer. Cleared for the
/// length of a session so label keys are not swallowed as commands.
pub const COMMAND_MODE: &str = "command_mode";

/// Region key used for the highlight on currently offered labels.
pub const JUMP_MATCH_REGIONS: &str = "jump_match_regions";

/// A single-character replacement used for in-place label overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    /// Region replaced
    pub region: Region,
    /// Character written in its place
    pub ch: char,
}

/// Editing surface provided by the host.
///
/// Offsets are character offsets into the whole buffer.
pub trait View {
    /// Portion of the buffer currently rendered in the viewport.
    fn visible_region(&self) -> Region;

    /// Text covered by `region`.
    fn substr(&self, region: Region) -> String;

    /// Unfold everything folded inside `region`, returning the regions that
    /// were folded.
    fn unfold(&mut self, region: Region) -> Vec<Region>;

    /// Fold each of `regions`.
    fn fold(&mut self, regions: &[Region]);

    /// Current selections, primary first.
    fn selections(&self) -> Vec<Region>;

    /// Replace all selections with `region`.
    fn set_selection(&mut self, region: Region);

    /// Scroll so that `region` is visible.
    fn show(&mut self, region: Region);

    /// Attach named highlight regions drawn with the style `scope`.
    fn add_regions(&mut self, key: &str, regions: &[Region], scope: &str);

    /// Regions currently attached under `key`.
    fn get_regions(&self, key: &str) -> Vec<Region>;

    /// Drop the regions attached under `key`.
    fn erase_regions(&mut self, key: &str);

    /// Apply every replacement as one undoable edit.
    fn replace_batch(&mut self, replacements: &[Replacement]);

    /// Revert the most recent undoable edit.
    fn undo(&mut self);

    /// Read a boolean per-view setting.
    fn flag(&self, name: &str) -> Option<bool>;

    /// Write a boolean per-view setting.
    fn set_flag(&mut self, name: &str, value: bool);

    /// Show a non-blocking message on the status line.
    fn status_message(&mut self, message: &str);

    /// Primary selection, if any.
    fn primary_selection(&self) -> Option<Region> {
        self.selections().first().copied()
    }
}
