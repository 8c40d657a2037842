//! Jump sessions and the command dispatcher that owns them.

use anyhow::Result;

use easymotion_config::JumpSettings;
use easymotion_core::{
    CommandResult, JumpCommand, JumpTarget, Region, View, COMMAND_MODE, EASY_MOTION_MODE,
};
use easymotion_jump::{resolve_label, JumpGroup, JumpGroupGenerator, LabelAlphabet, SearchOptions};
use easymotion_logger as logger;

use crate::overlay::{apply_overlay, AppliedOverlay};

const STATUS_PREFIX: &str = "EasyMotion: ";

/// Settings a dispatcher needs, already validated.
#[derive(Debug, Clone)]
pub struct JumpOptions {
    /// Label characters
    pub alphabet: LabelAlphabet,
    /// Highlight style for offered labels
    pub scope: String,
    /// Matching options
    pub search: SearchOptions,
}

impl JumpOptions {
    /// Build options from the settings file section.
    pub fn from_settings(settings: &JumpSettings) -> Result<Self> {
        Ok(Self {
            alphabet: LabelAlphabet::new(&settings.placeholder_chars)?,
            scope: settings.jump_target_scope.clone(),
            search: SearchOptions {
                ignore_case: settings.case_sensitive,
            },
        })
    }
}

/// State of one jump, from start to confirm or cancel.
#[derive(Debug)]
pub struct JumpSession {
    target: JumpTarget,
    generator: JumpGroupGenerator,
    select_text: bool,
    /// Selection when the session started
    origin: Region,
    /// Host's `command_mode` before the session cleared it
    command_mode_was: bool,
    overlay: Option<AppliedOverlay>,
}

impl JumpSession {
    pub fn target(&self) -> JumpTarget {
        self.target
    }

    pub fn select_text(&self) -> bool {
        self.select_text
    }

    pub fn origin(&self) -> Region {
        self.origin
    }

    pub fn generator(&self) -> &JumpGroupGenerator {
        &self.generator
    }

    /// Page currently drawn.
    pub fn current_group(&self) -> Option<&JumpGroup> {
        self.generator.current()
    }

    /// Revert the overlay and restore the host flags.
    fn finish<V: View + ?Sized>(self, view: &mut V) {
        if let Some(overlay) = self.overlay {
            overlay.revert(view);
        }
        deactivate_mode(view, self.command_mode_was);
    }
}

/// Command dispatcher holding at most one active session.
#[derive(Debug)]
pub struct EasyMotion {
    options: JumpOptions,
    session: Option<JumpSession>,
}

impl EasyMotion {
    pub fn new(options: JumpOptions) -> Self {
        Self {
            options,
            session: None,
        }
    }

    /// Dispatcher configured from the settings file section.
    pub fn from_settings(settings: &JumpSettings) -> Result<Self> {
        Ok(Self::new(JumpOptions::from_settings(settings)?))
    }

    pub fn options(&self) -> &JumpOptions {
        &self.options
    }

    /// Whether a session is running.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&JumpSession> {
        self.session.as_ref()
    }

    /// Handle one command against `view`.
    pub fn handle<V: View + ?Sized>(
        &mut self,
        view: &mut V,
        command: JumpCommand,
    ) -> Result<CommandResult> {
        match command {
            JumpCommand::Start {
                target,
                select_text,
            } => self.start(view, target, select_text),
            JumpCommand::ShowGroup { forward } => Ok(self.show_group(view, forward)),
            JumpCommand::JumpTo { label } => Ok(self.jump_to(view, label)),
            JumpCommand::Cancel => Ok(self.cancel(view)),
        }
    }

    fn start<V: View + ?Sized>(
        &mut self,
        view: &mut V,
        target: JumpTarget,
        select_text: bool,
    ) -> Result<CommandResult> {
        view.status_message(&format!("{}Jump to {}", STATUS_PREFIX, target));

        if let Some(previous) = self.session.take() {
            logger::debug(format!(
                "Replacing active jump to {} with jump to {}",
                previous.target, target
            ));
            previous.finish(view);
        }

        let generator =
            JumpGroupGenerator::new(view, target, &self.options.alphabet, &self.options.search)?;

        if generator.is_empty() {
            view.status_message(&format!(
                "{}unable to find any instances of {} in visible region",
                STATUS_PREFIX, target
            ));
            logger::info(format!("Jump to {}: no targets", target));
            return Ok(CommandResult::NoMatches);
        }

        let groups = generator.len();
        let origin = view.primary_selection().unwrap_or_default();
        let command_mode_was = activate_mode(view);

        logger::info(format!(
            "Jump to {}: {} targets on {} pages",
            target,
            generator.targets().len(),
            groups
        ));

        self.session = Some(JumpSession {
            target,
            generator,
            select_text,
            origin,
            command_mode_was,
            overlay: None,
        });
        self.show_group(view, true);

        Ok(CommandResult::Started { groups })
    }

    fn show_group<V: View + ?Sized>(&mut self, view: &mut V, forward: bool) -> CommandResult {
        let Some(session) = self.session.as_mut() else {
            return CommandResult::Ignored;
        };

        if let Some(overlay) = session.overlay.take() {
            overlay.revert(view);
        }

        let group = if forward {
            session.generator.next()
        } else {
            session.generator.previous()
        };
        let Some(group) = group else {
            return CommandResult::Ignored;
        };

        session.overlay = Some(apply_overlay(view, group, &self.options.scope));

        let index = session.generator.current_index().unwrap_or_default();
        logger::debug(format!(
            "Showing page {} of {}",
            index + 1,
            session.generator.len()
        ));
        CommandResult::Page { index }
    }

    fn jump_to<V: View + ?Sized>(&mut self, view: &mut V, label: char) -> CommandResult {
        let Some(session) = self.session.take() else {
            return CommandResult::Ignored;
        };

        let winner = session
            .current_group()
            .and_then(|group| resolve_label(group, label, session.origin, session.select_text));

        session.finish(view);

        match winner {
            Some(region) => {
                logger::info(format!("Jumped to {} via label {:?}", region, label));
                view.set_selection(region);
                view.show(region);
            }
            None => logger::debug(format!("Label {:?} not on current page", label)),
        }

        CommandResult::Jumped(winner)
    }

    fn cancel<V: View + ?Sized>(&mut self, view: &mut V) -> CommandResult {
        let Some(session) = self.session.take() else {
            return CommandResult::Ignored;
        };
        logger::debug(format!("Jump to {} cancelled", session.target));
        session.finish(view);
        CommandResult::Cancelled
    }
}

/// Enter jump mode. Returns whether `command_mode` was set.
fn activate_mode<V: View + ?Sized>(view: &mut V) -> bool {
    view.set_flag(EASY_MOTION_MODE, true);
    // Label keys would be eaten as vi commands otherwise
    let command_mode_was = view.flag(COMMAND_MODE).unwrap_or(false);
    if command_mode_was {
        view.set_flag(COMMAND_MODE, false);
    }
    command_mode_was
}

fn deactivate_mode<V: View + ?Sized>(view: &mut V, command_mode_was: bool) {
    view.set_flag(EASY_MOTION_MODE, false);
    if command_mode_was {
        view.set_flag(COMMAND_MODE, true);
    }
}
