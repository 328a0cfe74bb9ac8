//! Action traits for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions are immutable messages describing an intended state change:
/// - Clone: middleware may log or record a copy before the reducer consumes it
/// - Debug: for logging
/// - Send + 'static: actions travel through tokio channels
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Builds one action of a fixed kind from an input record
///
/// Each call produces a fresh action, so a creator can be invoked from an
/// event handler any number of times without sharing state between the
/// resulting actions.
///
/// # Example
///
/// ```ignore
/// struct ClearSelection;
///
/// impl ActionCreator for ClearSelection {
///     type Payload = ();
///     type Action = AppAction;
///     const KIND: &'static str = "clear selection";
///
///     fn create(_payload: ()) -> AppAction {
///         AppAction::ClearSelection
///     }
/// }
///
/// let action = ClearSelection::create(());
/// ```
pub trait ActionCreator {
    /// Input record the action is built from
    type Payload;

    /// The action type produced
    type Action: Action;

    /// Stable identifier of the produced action kind
    const KIND: &'static str;

    /// Build a new action from the payload
    fn create(payload: Self::Payload) -> Self::Action;
}
