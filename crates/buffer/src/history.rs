/// Undoable edit on a character-offset buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text insertion at a char offset
    Insert { position: usize, text: String },
    /// Text deletion starting at a char offset
    Delete { position: usize, text: String },
    /// Actions applied in order as one step
    Group { actions: Vec<Action> },
}

impl Action {
    /// Get inverse action
    pub fn inverse(&self) -> Action {
        match self {
            Action::Insert { position, text } => Action::Delete {
                position: *position,
                text: text.clone(),
            },
            Action::Delete { position, text } => Action::Insert {
                position: *position,
                text: text.clone(),
            },
            Action::Group { actions } => Action::Group {
                actions: actions.iter().rev().map(|a| a.inverse()).collect(),
            },
        }
    }

    /// Whether the action changes nothing
    pub fn is_noop(&self) -> bool {
        match self {
            Action::Insert { text, .. } | Action::Delete { text, .. } => text.is_empty(),
            Action::Group { actions } => actions.iter().all(Action::is_noop),
        }
    }
}

/// Edit history for undo/redo
#[derive(Debug, Clone)]
pub struct History {
    /// Action stack for undo
    undo_stack: Vec<Action>,
    /// Action stack for redo
    redo_stack: Vec<Action>,
    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create a new history
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Create history with specified size
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record an already applied action
    pub fn push(&mut self, action: Action) {
        self.redo_stack.clear();
        self.undo_stack.push(action);

        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Pop the last action and return what reverts it
    pub fn undo(&mut self) -> Option<Action> {
        let action = self.undo_stack.pop()?;
        let inverse = action.inverse();
        self.redo_stack.push(action);
        Some(inverse)
    }

    /// Pop the last undone action and return it for re-application
    pub fn redo(&mut self) -> Option<Action> {
        let action = self.redo_stack.pop()?;
        self.undo_stack.push(action.clone());
        Some(action)
    }

    /// Number of undoable steps
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_undo_redo() {
        let mut history = History::new();

        history.push(Action::Insert {
            position: 0,
            text: "hello".to_string(),
        });

        assert_eq!(history.undo_depth(), 1);

        let undo_action = history.undo().unwrap();
        assert_eq!(
            undo_action,
            Action::Delete {
                position: 0,
                text: "hello".to_string()
            }
        );

        assert_eq!(history.undo_depth(), 0);
        assert!(history.undo().is_none());

        let redo_action = history.redo().unwrap();
        assert_eq!(
            redo_action,
            Action::Insert {
                position: 0,
                text: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_group_inverse_reverses_order() {
        let group = Action::Group {
            actions: vec![
                Action::Delete {
                    position: 3,
                    text: "x".to_string(),
                },
                Action::Insert {
                    position: 3,
                    text: "a".to_string(),
                },
            ],
        };

        assert_eq!(
            group.inverse(),
            Action::Group {
                actions: vec![
                    Action::Delete {
                        position: 3,
                        text: "a".to_string(),
                    },
                    Action::Insert {
                        position: 3,
                        text: "x".to_string(),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_history_capacity() {
        let mut history = History::with_capacity(2);
        for i in 0..3 {
            history.push(Action::Insert {
                position: i,
                text: "a".to_string(),
            });
        }
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = History::new();
        history.push(Action::Insert {
            position: 0,
            text: "a".to_string(),
        });
        history.undo();
        history.push(Action::Insert {
            position: 0,
            text: "b".to_string(),
        });
        assert!(history.redo().is_none());
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_noop() {
        assert!(Action::Group { actions: vec![] }.is_noop());
        assert!(!Action::Insert {
            position: 0,
            text: "a".to_string()
        }
        .is_noop());
    }
}
