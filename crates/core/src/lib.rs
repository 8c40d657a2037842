//! Core types for the EasyMotion jump engine.
//!
//! This crate holds the pieces shared by every other crate: character
//! regions, the [`View`] contract a host editor implements, and the
//! command/result pair the dispatcher speaks.

pub mod command;
pub mod region;
pub mod view;

pub use command::{CommandResult, JumpCommand, JumpTarget, LINE_BOUNDARY_NAME};
pub use region::Region;
pub use view::{Replacement, View, COMMAND_MODE, EASY_MOTION_MODE, JUMP_MATCH_REGIONS};
