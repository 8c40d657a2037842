//! Turning a confirmed label into a selection.

use easymotion_core::Region;

use crate::JumpGroup;

/// Selection produced by confirming `label` on `group`.
///
/// `origin` is the selection at the time the jump started. Without
/// `select_text` the result is a caret at the target. With it, the far end
/// of `origin` stays put and the selection grows to cover the target.
/// Returns `None` when `label` is not on the page.
pub fn resolve_label(
    group: &JumpGroup,
    label: char,
    origin: Region,
    select_text: bool,
) -> Option<Region> {
    let winner = group.get(label)?;

    if !select_text {
        return Some(Region::point(winner.begin()));
    }

    if winner.begin() < origin.begin() {
        Some(Region::new(origin.end(), winner.begin()))
    } else {
        Some(Region::new(origin.begin(), winner.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> JumpGroup {
        vec![('a', Region::new(2, 3)), ('b', Region::new(12, 13))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_resolve_collapses_to_target_start() {
        let origin = Region::point(7);
        assert_eq!(resolve_label(&group(), 'b', origin, false), Some(Region::point(12)));
        assert_eq!(resolve_label(&group(), 'a', origin, false), Some(Region::point(2)));
    }

    #[test]
    fn test_resolve_unknown_label() {
        assert_eq!(resolve_label(&group(), 'z', Region::point(7), false), None);
        assert_eq!(resolve_label(&group(), 'z', Region::point(7), true), None);
    }

    #[test]
    fn test_select_forward_includes_target() {
        let origin = Region::new(5, 7);
        assert_eq!(resolve_label(&group(), 'b', origin, true), Some(Region::new(5, 13)));
    }

    #[test]
    fn test_select_backward_anchors_at_origin_end() {
        let origin = Region::new(5, 7);
        let selection = resolve_label(&group(), 'a', origin, true).unwrap();
        assert_eq!(selection, Region::new(7, 2));
        assert_eq!(selection.begin(), 2);
        assert_eq!(selection.end(), 7);
    }
}
