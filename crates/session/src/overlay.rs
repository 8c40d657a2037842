//! In-place label overlay.
//!
//! Labels are drawn by overwriting each target character with its label as
//! one undoable edit, plus a highlight on the same regions. Reverting is an
//! undo, so an overlay must be reverted before the next one is applied and
//! before the session ends.

use easymotion_core::{View, JUMP_MATCH_REGIONS};
use easymotion_jump::JumpGroup;
use easymotion_logger as logger;

/// Token for an overlay currently applied to a view.
///
/// [`AppliedOverlay::revert`] is the only way to release it.
#[must_use = "an applied overlay has to be reverted"]
#[derive(Debug)]
pub struct AppliedOverlay {
    labels: usize,
    reverted: bool,
}

/// Draw `group`'s labels over its targets and highlight them with `scope`.
pub fn apply_overlay<V: View + ?Sized>(view: &mut V, group: &JumpGroup, scope: &str) -> AppliedOverlay {
    view.replace_batch(&group.replacements());
    view.add_regions(JUMP_MATCH_REGIONS, &group.regions(), scope);
    AppliedOverlay {
        labels: group.len(),
        reverted: false,
    }
}

impl AppliedOverlay {
    /// Number of labels drawn.
    pub fn labels(&self) -> usize {
        self.labels
    }

    /// Remove the highlight and undo the label edit.
    pub fn revert<V: View + ?Sized>(mut self, view: &mut V) {
        view.erase_regions(JUMP_MATCH_REGIONS);
        view.undo();
        self.reverted = true;
    }
}

impl Drop for AppliedOverlay {
    fn drop(&mut self) {
        if !self.reverted {
            logger::warn(format!(
                "Label overlay with {} labels dropped without undo; buffer still shows labels",
                self.labels
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easymotion_buffer::TextView;
    use easymotion_core::Region;

    fn group() -> JumpGroup {
        vec![('x', Region::new(1, 2)), ('y', Region::new(5, 6))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_apply_then_revert() {
        let mut view = TextView::from_text("cat bat cat");

        let overlay = apply_overlay(&mut view, &group(), "string");
        assert_eq!(overlay.labels(), 2);
        assert_eq!(view.text(), "cxt byt cat");
        assert_eq!(
            view.get_regions(JUMP_MATCH_REGIONS),
            vec![Region::new(1, 2), Region::new(5, 6)]
        );
        assert_eq!(view.highlight(JUMP_MATCH_REGIONS).unwrap().scope, "string");

        overlay.revert(&mut view);
        assert_eq!(view.text(), "cat bat cat");
        assert!(view.get_regions(JUMP_MATCH_REGIONS).is_empty());
        assert_eq!(view.undo_depth(), 0);
    }
}
