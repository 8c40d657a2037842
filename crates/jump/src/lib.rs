//! Jump target grouping for easymotion.
//!
//! Given a view, a target and a label alphabet this crate finds every
//! visible occurrence of the target, orders them outward from the cursor,
//! and packs them into pages of labels:
//!
//! ```text
//!   visible text ──► find_jump_targets ──► interleave ──► partition
//!                     (folds skipped)      (near first)    (one label per target)
//! ```
//!
//! [`JumpGroupGenerator`] owns the pages and pages through them in a
//! circle; [`resolve_label`] maps a typed label back to a selection.

mod alphabet;
mod generator;
mod locator;
mod resolve;

pub use alphabet::LabelAlphabet;
pub use generator::{interleave, partition, JumpGroup, JumpGroupGenerator};
pub use locator::{find_jump_targets, folded_regions, FoldScope};
pub use resolve::resolve_label;

pub use easymotion_text_search::SearchOptions;
