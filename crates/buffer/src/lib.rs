//! In-memory text view for easymotion.
//!
//! [`TextView`] implements the [`easymotion_core::View`] contract over a
//! ropey buffer. It backs the terminal demo and the engine's tests.

mod history;
mod view;

pub use history::{Action, History};
pub use view::{Highlight, TextView, Viewport};
