//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI element that renders from props and turns events into actions
///
/// Components follow these rules:
/// 1. Props carry all read-only data needed for rendering, including focus
/// 2. `handle_event` returns actions, it never mutates application state
/// 3. `render` depends only on props plus internal UI state (such as the
///    last rendered area used for mouse hit testing)
///
/// A component that must deliver actions itself, rather than returning
/// them, takes a [`Dispatch`](crate::Dispatch) sink in its constructor and
/// forwards what its inner components return.
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Any `IntoIterator<Item = A>` works: `None`, `Some(action)`, or a `Vec`.
    /// The default returns nothing (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
