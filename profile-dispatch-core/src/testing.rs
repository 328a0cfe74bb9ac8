//! Test utilities for dispatch-runtime applications
//!
//! - [`key`]: Create a `KeyEvent` from a string (e.g., `key("ctrl+n")`)
//! - [`click`]: Left mouse press at a cell
//! - [`RecordingDispatch`]: Dispatch sink that records every action
//! - [`RenderHarness`]: Render into an in-memory terminal and read it back
//! - Assertion macros for verifying dispatched actions
//!
//! # Example
//!
//! ```ignore
//! use profile_dispatch_core::testing::{key_event, RecordingDispatch};
//!
//! let sink = RecordingDispatch::new();
//! let mut button = SaveButton::new(sink.clone());
//!
//! button.handle_event(&key_event("enter"), true);
//!
//! assert_eq!(sink.count(), 1);
//! assert_emitted!(sink.actions(), AppAction::Save);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::dispatch::Dispatch;
use crate::event::EventKind;
use crate::keybindings::parse_key_string;
use crate::Action;

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use profile_dispatch_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("n");
/// assert_eq!(k.code, KeyCode::Char('n'));
///
/// let k = key("ctrl+c");
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create an `EventKind::Key` from a key string.
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// Create an `EventKind::Key` release event from a key string.
pub fn key_release(s: &str) -> EventKind {
    EventKind::Key(KeyEvent {
        kind: KeyEventKind::Release,
        ..key(s)
    })
}

/// Create a left mouse button press at `(column, row)`.
pub fn click(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Create a mouse event of any kind at `(column, row)`.
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Dispatch sink that records every action it receives.
///
/// Clones share the same record, so hand one clone to the component under
/// test and keep another for assertions.
pub struct RecordingDispatch<A> {
    actions: Rc<RefCell<Vec<A>>>,
}

impl<A> Clone for RecordingDispatch<A> {
    fn clone(&self) -> Self {
        Self {
            actions: Rc::clone(&self.actions),
        }
    }
}

impl<A> Default for RecordingDispatch<A> {
    fn default() -> Self {
        Self {
            actions: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<A: Action> RecordingDispatch<A> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions dispatched so far
    pub fn count(&self) -> usize {
        self.actions.borrow().len()
    }

    /// Copy of every dispatched action, oldest first
    pub fn actions(&self) -> Vec<A> {
        self.actions.borrow().clone()
    }

    /// The most recently dispatched action
    pub fn last(&self) -> Option<A> {
        self.actions.borrow().last().cloned()
    }

    /// Remove and return the recorded actions
    pub fn take(&self) -> Vec<A> {
        std::mem::take(&mut *self.actions.borrow_mut())
    }
}

impl<A: Action> Dispatch<A> for RecordingDispatch<A> {
    fn dispatch(&self, action: A) {
        self.actions.borrow_mut().push(action);
    }
}

/// Renders into an in-memory terminal for assertions on the output.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        Self { terminal }
    }

    /// Render a frame and return the resulting buffer.
    pub fn render(&mut self, draw: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal.draw(draw).expect("test backend never fails");
        self.terminal.backend().buffer()
    }

    /// Render a frame and return its text with styling stripped.
    pub fn render_to_string_plain(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        buffer_to_string_plain(self.render(draw))
    }
}

/// Convert a buffer to text, one line per row, trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            let line: String = (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that a specific action was dispatched.
///
/// ```ignore
/// assert_emitted!(sink.actions(), AppAction::Save);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT dispatched.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Open,
        Close(u8),
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Open => "Open",
                TestAction::Close(_) => "Close",
            }
        }
    }

    #[test]
    fn test_key_helpers() {
        assert_eq!(key("q").code, KeyCode::Char('q'));
        assert_eq!(char_key('x').modifiers, KeyModifiers::empty());
        assert!(key("ctrl+c").modifiers.contains(KeyModifiers::CONTROL));

        match key_release("enter") {
            EventKind::Key(k) => {
                assert_eq!(k.code, KeyCode::Enter);
                assert_eq!(k.kind, KeyEventKind::Release);
            }
            other => panic!("Expected key event, got {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "Invalid key string")]
    fn test_key_panics_on_invalid() {
        key("not-a-key");
    }

    #[test]
    fn test_click() {
        match click(3, 7) {
            EventKind::Mouse(m) => {
                assert_eq!(m.kind, MouseEventKind::Down(MouseButton::Left));
                assert_eq!((m.column, m.row), (3, 7));
            }
            other => panic!("Expected mouse event, got {:?}", other),
        }
    }

    #[test]
    fn test_recording_dispatch_shares_record() {
        let sink = RecordingDispatch::new();
        let handle = sink.clone();

        assert_eq!(sink.count(), 0);
        assert_eq!(sink.last(), None);

        handle.dispatch(TestAction::Open);
        handle.dispatch(TestAction::Close(2));

        assert_eq!(sink.count(), 2);
        assert_eq!(sink.last(), Some(TestAction::Close(2)));
        assert_eq!(sink.take(), vec![TestAction::Open, TestAction::Close(2)]);
        assert_eq!(handle.count(), 0);
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![TestAction::Open, TestAction::Close(1), TestAction::Close(2)];

        assert_emitted!(actions, TestAction::Open);
        assert_emitted!(actions, TestAction::Close(n) if *n == 2);
        assert_not_emitted!(actions, TestAction::Close(9));
        assert_eq!(count_emitted!(actions, TestAction::Close(_)), 2);
    }

    #[test]
    fn test_render_harness() {
        let mut harness = RenderHarness::new(20, 3);

        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        });

        assert_eq!(output.lines().next(), Some("hello"));
        assert_eq!(output.split('\n').count(), 3);
    }
}
