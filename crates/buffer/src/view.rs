//! In-memory implementation of the host contract.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use ropey::Rope;

use easymotion_core::{Region, Replacement, View};

use crate::{Action, History};

/// Named highlight regions and the style they are drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub regions: Vec<Region>,
    pub scope: String,
}

/// Lines shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// Visible line count, `None` to show the whole buffer
    pub height: Option<usize>,
}

/// Rope-backed text view with folds, highlights, flags and undo.
#[derive(Debug, Clone)]
pub struct TextView {
    text: Rope,
    history: History,
    selections: Vec<Region>,
    folds: Vec<Region>,
    highlights: HashMap<String, Highlight>,
    flags: HashMap<String, bool>,
    viewport: Viewport,
    status: Vec<String>,
}

impl TextView {
    /// View over `text` showing everything, caret at offset 0.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            history: History::new(),
            selections: vec![Region::point(0)],
            folds: Vec::new(),
            highlights: HashMap::new(),
            flags: HashMap::new(),
            viewport: Viewport {
                top_line: 0,
                height: None,
            },
            status: Vec::new(),
        }
    }

    /// Load a file into a new view.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let text = Rope::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut view = Self::from_text("");
        view.text = text;
        Ok(view)
    }

    /// Whole buffer as a string.
    pub fn text(&self) -> String {
        self.text.to_string()
    }

    /// Total characters.
    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    /// Total lines, counting an empty last line after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    /// Text of line `line` without its line ending.
    pub fn line(&self, line: usize) -> Option<String> {
        if line >= self.text.len_lines() {
            return None;
        }
        let content = self.text.line(line).to_string();
        Some(content.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Char offset of the start of `line`, clamped to the buffer.
    pub fn line_to_char(&self, line: usize) -> usize {
        if line >= self.text.len_lines() {
            self.text.len_chars()
        } else {
            self.text.line_to_char(line)
        }
    }

    /// `(line, column)` of a char offset, clamped to the buffer.
    pub fn char_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len_chars());
        let line = self.text.char_to_line(offset);
        (line, offset - self.text.line_to_char(line))
    }

    /// Char offset of `(line, column)`, with the column clamped to the line.
    pub fn line_col_to_char(&self, line: usize, column: usize) -> usize {
        let line = line.min(self.text.len_lines().saturating_sub(1));
        let len = self.line(line).map(|l| l.chars().count()).unwrap_or(0);
        self.line_to_char(line) + column.min(len)
    }

    /// Caret position (head of the primary selection).
    pub fn cursor(&self) -> usize {
        self.selections.first().map(|s| s.b).unwrap_or(0)
    }

    /// Currently folded regions, sorted.
    pub fn folds(&self) -> &[Region] {
        &self.folds
    }

    /// Highlight attached under `key`.
    pub fn highlight(&self, key: &str) -> Option<&Highlight> {
        self.highlights.get(key)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Show `height` lines starting at `top_line`.
    pub fn set_viewport(&mut self, top_line: usize, height: usize) {
        self.viewport = Viewport {
            top_line,
            height: Some(height),
        };
    }

    /// Status messages in the order they were shown.
    pub fn status_messages(&self) -> &[String] {
        &self.status
    }

    /// Most recent status message.
    pub fn last_status(&self) -> Option<&str> {
        self.status.last().map(String::as_str)
    }

    /// Number of edits that `undo` can revert.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Re-apply the last undone edit.
    pub fn redo(&mut self) {
        if let Some(action) = self.history.redo() {
            self.apply(&action);
        }
    }

    fn clamp(&self, region: Region) -> (usize, usize) {
        let len = self.text.len_chars();
        (region.begin().min(len), region.end().min(len))
    }

    fn apply(&mut self, action: &Action) {
        match action {
            Action::Insert { position, text } => {
                self.text.insert(*position, text);
            }
            Action::Delete { position, text } => {
                let end = *position + text.chars().count();
                self.text.remove(*position..end);
            }
            Action::Group { actions } => {
                for action in actions {
                    self.apply(action);
                }
            }
        }
    }
}

impl View for TextView {
    fn visible_region(&self) -> Region {
        let begin = self.line_to_char(self.viewport.top_line);
        let end = match self.viewport.height {
            Some(height) => self.line_to_char(self.viewport.top_line + height),
            None => self.text.len_chars(),
        };
        Region::new(begin, end)
    }

    fn substr(&self, region: Region) -> String {
        let (begin, end) = self.clamp(region);
        self.text.slice(begin..end).to_string()
    }

    fn unfold(&mut self, region: Region) -> Vec<Region> {
        let (unfolded, kept): (Vec<Region>, Vec<Region>) = self
            .folds
            .iter()
            .partition(|fold| fold.intersects(region));
        self.folds = kept;
        unfolded
    }

    fn fold(&mut self, regions: &[Region]) {
        for region in regions {
            if !region.is_empty() && !self.folds.contains(region) {
                self.folds.push(*region);
            }
        }
        self.folds.sort_by_key(|r| (r.begin(), r.end()));
    }

    fn selections(&self) -> Vec<Region> {
        self.selections.clone()
    }

    fn set_selection(&mut self, region: Region) {
        self.selections = vec![region];
    }

    fn show(&mut self, region: Region) {
        let Some(height) = self.viewport.height else {
            return;
        };
        let (line, _) = self.char_to_line_col(region.b);
        if line < self.viewport.top_line {
            self.viewport.top_line = line;
        } else if line >= self.viewport.top_line + height {
            self.viewport.top_line = line + 1 - height.max(1);
        }
    }

    fn add_regions(&mut self, key: &str, regions: &[Region], scope: &str) {
        self.highlights.insert(
            key.to_string(),
            Highlight {
                regions: regions.to_vec(),
                scope: scope.to_string(),
            },
        );
    }

    fn get_regions(&self, key: &str) -> Vec<Region> {
        self.highlights
            .get(key)
            .map(|h| h.regions.clone())
            .unwrap_or_default()
    }

    fn erase_regions(&mut self, key: &str) {
        self.highlights.remove(key);
    }

    fn replace_batch(&mut self, replacements: &[Replacement]) {
        let mut ordered: Vec<Replacement> = replacements.to_vec();
        // Back to front so earlier offsets stay valid
        ordered.sort_by_key(|r| std::cmp::Reverse(r.region.begin()));

        let mut actions = Vec::with_capacity(ordered.len() * 2);
        for replacement in ordered {
            let (begin, end) = self.clamp(replacement.region);
            let removed = self.text.slice(begin..end).to_string();
            let delete = Action::Delete {
                position: begin,
                text: removed,
            };
            let insert = Action::Insert {
                position: begin,
                text: replacement.ch.to_string(),
            };
            self.apply(&delete);
            self.apply(&insert);
            actions.push(delete);
            actions.push(insert);
        }

        let group = Action::Group { actions };
        if !group.is_noop() {
            self.history.push(group);
        }
    }

    fn undo(&mut self) {
        if let Some(action) = self.history.undo() {
            self.apply(&action);
        }
    }

    fn flag(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    fn set_flag(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    fn status_message(&mut self, message: &str) {
        self.status.push(message.to_string());
    }
}
