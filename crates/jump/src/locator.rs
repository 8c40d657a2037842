//! Locating jump targets in the visible part of a view.

use std::ops::{Deref, DerefMut};

use anyhow::Result;

use easymotion_core::{JumpTarget, Region, View};
use easymotion_text_search::{find_with, target_regex, SearchOptions};

/// Folds inside a region, temporarily opened.
///
/// Hosts only report folds by unfolding them, so the query opens every fold
/// under the region and this guard closes them again when dropped.
pub struct FoldScope<'a, V: View + ?Sized> {
    view: &'a mut V,
    folded: Vec<Region>,
}

impl<'a, V: View + ?Sized> FoldScope<'a, V> {
    /// Unfold everything inside `region`.
    pub fn unfold(view: &'a mut V, region: Region) -> Self {
        let folded = view.unfold(region);
        Self { view, folded }
    }

    /// Regions that were folded before the scope opened.
    pub fn folded(&self) -> &[Region] {
        &self.folded
    }
}

impl<V: View + ?Sized> Deref for FoldScope<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: View + ?Sized> DerefMut for FoldScope<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: View + ?Sized> Drop for FoldScope<'_, V> {
    fn drop(&mut self) {
        if !self.folded.is_empty() {
            self.view.fold(&self.folded);
        }
    }
}

/// Folded regions overlapping the visible region. Fold state is unchanged
/// on return.
pub fn folded_regions<V: View + ?Sized>(view: &mut V) -> Vec<Region> {
    let visible = view.visible_region();
    let scope = FoldScope::unfold(view, visible);
    scope.folded().to_vec()
}

/// Every occurrence of `target` in the visible region, in text order, as
/// one-character regions. Occurrences hidden in a fold are skipped.
pub fn find_jump_targets<V: View + ?Sized>(
    view: &mut V,
    target: JumpTarget,
    options: &SearchOptions,
) -> Result<Vec<Region>> {
    let regex = target_regex(target, options)?;
    let visible = view.visible_region();
    let text = view.substr(visible);
    let folded = folded_regions(view);

    Ok(find_with(&regex, &text)
        .into_iter()
        .map(|offset| Region::new(offset, offset + 1).offset(visible.begin()))
        .filter(|region| !folded.iter().any(|fold| fold.contains(*region)))
        .collect())
}
