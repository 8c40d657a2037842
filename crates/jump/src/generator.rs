//! Jump groups: interleaving targets around the cursor, packing them into
//! labelled pages and paging through them.

use anyhow::Result;

use easymotion_core::{JumpTarget, Region, Replacement, View};
use easymotion_logger as logger;
use easymotion_text_search::SearchOptions;

use crate::{find_jump_targets, LabelAlphabet};

/// One page of labels: label characters mapped to target regions, in
/// assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpGroup {
    entries: Vec<(char, Region)>,
}

impl JumpGroup {
    /// Target labelled `label`, if offered on this page.
    pub fn get(&self, label: char) -> Option<Region> {
        self.iter()
            .find(|(ch, _)| *ch == label)
            .map(|(_, region)| region)
    }

    /// Labels in assignment order.
    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(ch, _)| *ch)
    }

    /// Target regions in assignment order.
    pub fn regions(&self) -> Vec<Region> {
        self.entries.iter().map(|(_, region)| *region).collect()
    }

    /// `(label, region)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Region)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Edits that draw each label over its target.
    pub fn replacements(&self) -> Vec<Replacement> {
        self.iter()
            .map(|(ch, region)| Replacement { region, ch })
            .collect()
    }
}

impl FromIterator<(char, Region)> for JumpGroup {
    fn from_iter<I: IntoIterator<Item = (char, Region)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Order `targets` by distance from `cursor`, alternating sides.
///
/// Targets before the cursor start nearest-first, targets after it are
/// already nearest-first. Targets inside the cursor span are dropped.
pub fn interleave(targets: &[Region], cursor: Region) -> Vec<Region> {
    let mut before = targets
        .iter()
        .rev()
        .filter(|t| t.begin() < cursor.begin())
        .copied();
    let mut after = targets
        .iter()
        .filter(|t| t.begin() > cursor.end())
        .copied();

    let mut interleaved = Vec::with_capacity(targets.len());
    loop {
        match (before.next(), after.next()) {
            (None, None) => break,
            (b, a) => {
                interleaved.extend(b);
                interleaved.extend(a);
            }
        }
    }
    interleaved
}

/// Pack `targets` into pages of `alphabet.len()` labels. Only the last
/// page may be short.
pub fn partition(targets: &[Region], alphabet: &LabelAlphabet) -> Vec<JumpGroup> {
    targets
        .chunks(alphabet.len())
        .map(|chunk| {
            alphabet
                .chars()
                .iter()
                .copied()
                .zip(chunk.iter().copied())
                .collect::<JumpGroup>()
        })
        .collect()
}

/// Label pages for one jump request, with a circular page cursor.
///
/// Built once from a scan of the view; never updated afterwards.
#[derive(Debug, Clone)]
pub struct JumpGroupGenerator {
    targets: Vec<Region>,
    groups: Vec<JumpGroup>,
    /// `None` until the first `next`/`previous`.
    index: Option<usize>,
}

impl JumpGroupGenerator {
    /// Scan the visible region of `view` for `target` and build pages
    /// around its primary selection.
    pub fn new<V: View + ?Sized>(
        view: &mut V,
        target: JumpTarget,
        alphabet: &LabelAlphabet,
        options: &SearchOptions,
    ) -> Result<Self> {
        let found = find_jump_targets(view, target, options)?;
        // Multiple selections make no sense here; only the primary counts.
        let cursor = view.primary_selection().unwrap_or_default();
        let generator = Self::from_targets(&found, cursor, alphabet);

        logger::debug(format!(
            "Jump to {}: {} targets in visible region, {} groups",
            target,
            generator.targets.len(),
            generator.groups.len()
        ));

        Ok(generator)
    }

    /// Build pages from targets already in text order.
    pub fn from_targets(targets: &[Region], cursor: Region, alphabet: &LabelAlphabet) -> Self {
        let targets = interleave(targets, cursor);
        let groups = partition(&targets, alphabet);
        Self {
            targets,
            groups,
            index: None,
        }
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Targets in label assignment order.
    pub fn targets(&self) -> &[Region] {
        &self.targets
    }

    /// All pages.
    pub fn groups(&self) -> &[JumpGroup] {
        &self.groups
    }

    /// Index of the page last returned by `next`/`previous`.
    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// Page last returned by `next`/`previous`.
    pub fn current(&self) -> Option<&JumpGroup> {
        self.index.and_then(|i| self.groups.get(i))
    }

    /// Advance one page, wrapping from the last to the first.
    pub fn next(&mut self) -> Option<&JumpGroup> {
        if self.groups.is_empty() {
            return None;
        }
        let next = match self.index {
            Some(i) if i + 1 < self.groups.len() => i + 1,
            _ => 0,
        };
        self.index = Some(next);
        self.groups.get(next)
    }

    /// Go back one page, wrapping from the first (or from the initial
    /// position) to the last.
    pub fn previous(&mut self) -> Option<&JumpGroup> {
        if self.groups.is_empty() {
            return None;
        }
        let previous = match self.index {
            Some(i) if i > 0 && i < self.groups.len() => i - 1,
            _ => self.groups.len() - 1,
        };
        self.index = Some(previous);
        self.groups.get(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easymotion_buffer::TextView;

    fn points(offsets: &[usize]) -> Vec<Region> {
        offsets.iter().map(|&o| Region::new(o, o + 1)).collect()
    }

    fn starts(regions: &[Region]) -> Vec<usize> {
        regions.iter().map(|r| r.begin()).collect()
    }

    fn alphabet(chars: &str) -> LabelAlphabet {
        LabelAlphabet::new(chars).unwrap()
    }

    #[test]
    fn test_interleave_alternates_sides() {
        let targets = points(&[1, 3, 5, 12, 14]);
        let cursor = Region::point(10);
        assert_eq!(starts(&interleave(&targets, cursor)), vec![5, 12, 3, 14, 1]);
    }

    #[test]
    fn test_interleave_continues_longer_side() {
        let targets = points(&[1, 2, 3, 4, 20]);
        let cursor = Region::point(10);
        assert_eq!(starts(&interleave(&targets, cursor)), vec![4, 20, 3, 2, 1]);
    }

    #[test]
    fn test_interleave_drops_targets_inside_selection() {
        let targets = points(&[1, 4, 5, 6, 9]);
        let selection = Region::new(6, 4);
        assert_eq!(starts(&interleave(&targets, selection)), vec![1, 9]);
    }

    #[test]
    fn test_interleave_is_permutation_of_kept_targets() {
        let targets = points(&[0, 2, 7, 8, 11, 30, 31]);
        let cursor = Region::point(8);
        let mut result = starts(&interleave(&targets, cursor));
        result.sort_unstable();
        assert_eq!(result, vec![0, 2, 7, 11, 30, 31]);
    }

    #[test]
    fn test_partition_sizes() {
        let targets = points(&[0, 1, 2, 3, 4, 5, 6]);
        let groups = partition(&targets, &alphabet("abc"));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].len(), 3);
        assert_eq!(groups[2].len(), 1);
    }

    #[test]
    fn test_partition_preserves_order() {
        let targets = points(&[9, 2, 7, 4, 5]);
        let groups = partition(&targets, &alphabet("xy"));
        let flattened: Vec<Region> = groups.iter().flat_map(|g| g.regions()).collect();
        assert_eq!(flattened, targets);
        let labels: Vec<char> = groups[0].labels().collect();
        assert_eq!(labels, vec!['x', 'y']);
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition(&[], &alphabet("ab")).is_empty());
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut generator =
            JumpGroupGenerator::from_targets(&points(&[1, 2, 3, 4, 5]), Region::point(0), &alphabet("ab"));
        assert_eq!(generator.len(), 3);
        let first = generator.next().cloned();
        generator.next();
        generator.next();
        assert_eq!(generator.next().cloned(), first);
        assert_eq!(generator.current_index(), Some(0));
    }

    #[test]
    fn test_previous_from_start_is_last() {
        let mut generator =
            JumpGroupGenerator::from_targets(&points(&[1, 2, 3, 4, 5]), Region::point(0), &alphabet("ab"));
        let last = generator.previous().cloned().unwrap();
        assert_eq!(last.regions(), points(&[5]));
        assert_eq!(generator.current_index(), Some(2));
        generator.previous();
        assert_eq!(generator.current_index(), Some(1));
    }

    #[test]
    fn test_empty_generator_yields_nothing() {
        let mut generator = JumpGroupGenerator::from_targets(&[], Region::point(0), &alphabet("ab"));
        assert!(generator.is_empty());
        assert!(generator.next().is_none());
        assert!(generator.previous().is_none());
        assert!(generator.current().is_none());
    }

    #[test]
    fn test_cat_bat_cat_scenario() {
        let mut view = TextView::from_text("cat bat cat");
        let mut generator = JumpGroupGenerator::new(
            &mut view,
            JumpTarget::Char('a'),
            &alphabet("ab"),
            &SearchOptions::default(),
        )
        .unwrap();

        assert_eq!(starts(generator.targets()), vec![1, 5, 9]);
        assert_eq!(generator.len(), 2);

        let first = generator.next().cloned().unwrap();
        assert_eq!(first.get('a'), Some(Region::new(1, 2)));
        assert_eq!(first.get('b'), Some(Region::new(5, 6)));

        let second = generator.next().cloned().unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second.get('a'), Some(Region::new(9, 10)));
        assert_eq!(second.get('b'), None);
    }

    #[test]
    fn test_no_matches_scenario() {
        let mut view = TextView::from_text("xyz");
        let generator = JumpGroupGenerator::new(
            &mut view,
            JumpTarget::Char('a'),
            &alphabet("ab"),
            &SearchOptions::default(),
        )
        .unwrap();
        assert!(generator.is_empty());
    }

    #[test]
    fn test_replacements_follow_labels() {
        let group: JumpGroup = vec![('q', Region::new(3, 4)), ('w', Region::new(0, 1))]
            .into_iter()
            .collect();
        assert_eq!(
            group.replacements(),
            vec![
                Replacement { region: Region::new(3, 4), ch: 'q' },
                Replacement { region: Region::new(0, 1), ch: 'w' },
            ]
        );
    }
}
