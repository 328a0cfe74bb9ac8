//! Dispatch capability handed to components

use tokio::sync::mpsc;
use tracing::warn;

use crate::Action;

/// A sink that accepts actions and forwards them to the state runtime
///
/// Components receive a `Dispatch` implementation through their constructor
/// instead of reaching for the store directly. Dispatching takes `&self`: the
/// capability is invoked, never reconfigured, by the component holding it.
///
/// # Example
///
/// ```ignore
/// let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
/// let button = SaveButton::new(action_tx.clone());
///
/// // later, in the main loop
/// while let Ok(action) = action_rx.try_recv() {
///     store.dispatch(action);
/// }
/// ```
pub trait Dispatch<A: Action> {
    /// Submit one action
    fn dispatch(&self, action: A);
}

impl<A: Action> Dispatch<A> for mpsc::UnboundedSender<A> {
    fn dispatch(&self, action: A) {
        if let Err(mpsc::error::SendError(action)) = self.send(action) {
            warn!(action = %action.name(), "Action channel closed, dropping action");
        }
    }
}

impl<A: Action, D: Dispatch<A> + ?Sized> Dispatch<A> for &D {
    fn dispatch(&self, action: A) {
        (**self).dispatch(action)
    }
}
