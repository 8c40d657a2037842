//! Jump sessions and command dispatch for easymotion.
//!
//! [`EasyMotion`] is owned by whatever dispatches the host's key bindings.
//! It turns [`easymotion_core::JumpCommand`]s into view edits:
//!
//! - `Start` scans the view, enters jump mode and draws the first page
//! - `ShowGroup` swaps the drawn page for the next or previous one
//! - `JumpTo` and `Cancel` undo the labels, leave jump mode and, on a hit,
//!   move the selection
//!
//! A session holds everything the jump needs between commands; starting a
//! new one tears the old one down first.

mod overlay;
mod session;

pub use overlay::{apply_overlay, AppliedOverlay};
pub use session::{EasyMotion, JumpOptions, JumpSession};
