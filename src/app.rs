//! Demo application state and key handling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, Terminal};

use easymotion_buffer::TextView;
use easymotion_core::{CommandResult, JumpCommand, JumpTarget, Region, View};
use easymotion_logger as logger;
use easymotion_session::EasyMotion;

use crate::event::{Event, EventHandler};

/// Lines reserved below the text for the status bar
const STATUS_HEIGHT: u16 = 1;

/// A jump key was pressed and the target character is awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingJump {
    select_text: bool,
}

/// Demo application: one file, one view, one dispatcher.
pub struct App {
    pub view: TextView,
    pub easy_motion: EasyMotion,
    pub title: String,
    pending: Option<PendingJump>,
    /// Terminal height received while a session held the viewport
    deferred_height: Option<u16>,
    /// Status messages older than the last key press are not shown
    status_mark: usize,
    needs_redraw: bool,
    should_quit: bool,
    event_handler: EventHandler,
}

impl App {
    pub fn new(view: TextView, easy_motion: EasyMotion, title: String) -> Self {
        Self {
            view,
            easy_motion,
            title,
            pending: None,
            deferred_height: None,
            status_mark: 0,
            needs_redraw: true,
            should_quit: false,
            event_handler: EventHandler::new(Duration::from_millis(250)),
        }
    }

    /// Status message produced by the last key press, if any.
    pub fn status(&self) -> Option<&str> {
        if self.view.status_messages().len() > self.status_mark {
            self.view.last_status()
        } else {
            None
        }
    }

    /// Key hint shown when there is no status message.
    pub fn hint(&self) -> &'static str {
        if self.easy_motion.is_active() {
            "label: jump  Tab/S-Tab: page  Esc: cancel"
        } else if self.pending.is_some() {
            "char or Enter (line ends)  Esc: cancel"
        } else {
            "f<c>: jump  F<c>: select to  arrows: move  q: quit"
        }
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut ratatui::Frame<'_>, &App),
    ) -> Result<()> {
        let size = terminal.size()?;
        self.resize(size.height);

        while !self.should_quit {
            if self.needs_redraw {
                terminal.draw(|frame| render_fn(frame, self))?;
                self.needs_redraw = false;
            }

            match self.event_handler.next()? {
                Event::Key(key) => self.handle_key_event(key)?,
                Event::Resize(_, height) => {
                    self.resize(height);
                    self.needs_redraw = true;
                }
                Event::Tick => {}
            }
        }

        Ok(())
    }

    fn resize(&mut self, height: u16) {
        // The visible region must not move under an active session
        if self.easy_motion.is_active() {
            self.deferred_height = Some(height);
            return;
        }
        self.deferred_height = None;
        let lines = height.saturating_sub(STATUS_HEIGHT).max(1) as usize;
        self.view.set_viewport(self.view.viewport().top_line, lines);
        let cursor = self.view.cursor();
        self.view.show(Region::point(cursor));
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        self.status_mark = self.view.status_messages().len();
        self.needs_redraw = true;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.easy_motion.is_active() {
                self.dispatch(JumpCommand::Cancel)?;
            }
            self.should_quit = true;
            return Ok(());
        }

        if self.easy_motion.is_active() {
            return self.handle_session_key(key);
        }

        if let Some(pending) = self.pending.take() {
            let target = match key.code {
                KeyCode::Char(ch) => JumpTarget::Char(ch),
                KeyCode::Enter => JumpTarget::LineBoundary,
                _ => return Ok(()),
            };
            self.dispatch(JumpCommand::Start {
                target,
                select_text: pending.select_text,
            })?;
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('f') => self.pending = Some(PendingJump { select_text: false }),
            KeyCode::Char('F') => self.pending = Some(PendingJump { select_text: true }),
            KeyCode::Left => self.move_horizontal(-1),
            KeyCode::Right => self.move_horizontal(1),
            KeyCode::Up => self.move_vertical(-1),
            KeyCode::Down => self.move_vertical(1),
            _ => {}
        }
        Ok(())
    }

    fn handle_session_key(&mut self, key: KeyEvent) -> Result<()> {
        let command = match key.code {
            KeyCode::Tab => JumpCommand::ShowGroup { forward: true },
            KeyCode::BackTab => JumpCommand::ShowGroup { forward: false },
            KeyCode::Esc => JumpCommand::Cancel,
            KeyCode::Char(label) => JumpCommand::JumpTo { label },
            _ => return Ok(()),
        };
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: JumpCommand) -> Result<()> {
        let result = self.easy_motion.handle(&mut self.view, command)?;
        if let CommandResult::Page { index } = result {
            logger::debug(format!("Demo showing page {}", index + 1));
        }
        // A status message still has to be drawn
        self.needs_redraw =
            result.needs_redraw() || self.view.status_messages().len() > self.status_mark;

        if !self.easy_motion.is_active() {
            if let Some(height) = self.deferred_height {
                self.resize(height);
                self.needs_redraw = true;
            }
        }
        Ok(())
    }

    fn move_horizontal(&mut self, delta: isize) {
        let cursor = self.view.cursor();
        let target = cursor
            .saturating_add_signed(delta)
            .min(self.view.len_chars());
        self.move_to(target);
    }

    fn move_vertical(&mut self, delta: isize) {
        let (line, column) = self.view.char_to_line_col(self.view.cursor());
        let line = line.saturating_add_signed(delta);
        let target = self.view.line_col_to_char(line, column);
        self.move_to(target);
    }

    fn move_to(&mut self, offset: usize) {
        let caret = Region::point(offset);
        self.view.set_selection(caret);
        self.view.show(caret);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use easymotion_config::JumpSettings;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn app(text: &str) -> App {
        let settings = JumpSettings {
            placeholder_chars: "ab".to_string(),
            ..JumpSettings::default()
        };
        App::new(
            TextView::from_text(text),
            EasyMotion::from_settings(&settings).unwrap(),
            "test".to_string(),
        )
    }

    #[test]
    fn test_f_then_char_then_label_jumps() {
        let mut app = app("cat bat cat");
        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        assert!(app.easy_motion.is_active());

        app.handle_key_event(key(KeyCode::Char('b'))).unwrap();
        assert!(!app.easy_motion.is_active());
        assert_eq!(app.view.cursor(), 5);
        assert_eq!(app.view.text(), "cat bat cat");
    }

    #[test]
    fn test_tab_pages_and_esc_cancels() {
        let mut app = app("cat bat cat");
        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        app.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.view.text(), "cat bat cat");
        assert_eq!(
            app.easy_motion.session().unwrap().generator().current_index(),
            Some(1)
        );

        app.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert!(!app.easy_motion.is_active());
        assert_eq!(app.view.cursor(), 0);
    }

    #[test]
    fn test_arrows_move_cursor() {
        let mut app = app("ab\ncd\n");
        app.handle_key_event(key(KeyCode::Right)).unwrap();
        app.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(app.view.cursor(), 4);
        app.handle_key_event(key(KeyCode::Left)).unwrap();
        app.handle_key_event(key(KeyCode::Left)).unwrap();
        assert_eq!(app.view.cursor(), 2);
    }

    #[test]
    fn test_q_quits_outside_session() {
        let mut app = app("q");
        app.handle_key_event(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_resize_during_session_applies_after_cancel() {
        let mut app = app(&"a\n".repeat(10));
        app.resize(11);
        assert_eq!(app.view.viewport().height, Some(10));

        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        app.resize(4);
        assert_eq!(app.view.viewport().height, Some(10));

        app.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.view.viewport().height, Some(3));

        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.easy_motion.session().unwrap().generator().targets().len(), 2);
    }

    #[test]
    fn test_ctrl_c_quits_inside_session() {
        let mut app = app("cat bat cat");
        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        assert!(app.easy_motion.is_active());

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        app.handle_key_event(ctrl_c).unwrap();
        assert!(app.should_quit);
        assert!(!app.easy_motion.is_active());
        assert_eq!(app.view.text(), "cat bat cat");
        assert_eq!(app.view.cursor(), 0);
    }

    #[test]
    fn test_ctrl_c_quits_while_target_pending() {
        let mut app = app("cat");
        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        app.handle_key_event(ctrl_c).unwrap();
        assert!(app.should_quit);
        assert!(!app.easy_motion.is_active());
        assert!(app.view.last_status().is_none());
    }

    #[test]
    fn test_status_gives_way_to_hint_after_session() {
        let mut app = app("cat bat cat");
        assert!(app.status().is_none());

        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.status(), Some("EasyMotion: Jump to a"));

        app.handle_key_event(key(KeyCode::Char('b'))).unwrap();
        assert!(!app.easy_motion.is_active());
        assert!(app.status().is_none());
        assert_eq!(app.hint(), "f<c>: jump  F<c>: select to  arrows: move  q: quit");
    }

    #[test]
    fn test_unknown_label_ends_session() {
        let mut app = app("cat bat cat");
        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        app.needs_redraw = false;

        app.handle_key_event(key(KeyCode::Char('z'))).unwrap();
        assert!(!app.easy_motion.is_active());
        assert!(app.needs_redraw);
        assert_eq!(app.view.text(), "cat bat cat");
        assert_eq!(app.view.cursor(), 0);
    }

    #[test]
    fn test_no_match_shows_status() {
        let mut app = app("xyz");
        app.handle_key_event(key(KeyCode::Char('F'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        assert!(!app.easy_motion.is_active());
        assert_eq!(
            app.view.last_status(),
            Some("EasyMotion: unable to find any instances of a in visible region")
        );
        assert_eq!(app.status(), app.view.last_status());
        assert!(app.needs_redraw);
    }
}
