//! State container driven by a reducer

use std::marker::PhantomData;

use crate::Action;

/// Applies one action to the state
///
/// The returned flag tells the main loop whether to redraw.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Sole owner of the application state
///
/// Components never touch the store. They dispatch into a channel, and the
/// main loop drains that channel into [`Store::dispatch`]. Every action
/// passes the middleware on its way to and from the reducer.
///
/// ```ignore
/// let mut store = Store::with_middleware(AppState::default(), reducer, LoggingMiddleware);
/// if store.dispatch(AppAction::ClearSelection) {
///     redraw(store.state());
/// }
/// ```
pub struct Store<S, A: Action, M: Middleware<A> = NoopMiddleware> {
    state: S,
    reducer: Reducer<S, A>,
    middleware: M,
    _action: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A: Action, M: Middleware<A>> Store<S, A, M> {
    pub fn with_middleware(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
            _action: PhantomData,
        }
    }

    /// Run one action through middleware and reducer
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Observer wrapped around every reducer call
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);
    fn after(&mut self, action: &A, state_changed: bool);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Emits a `debug!` event per processed action with its change flag
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, _action: &A) {}

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = %action.name(), state_changed, "Action processed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Selection {
        table: Option<&'static str>,
    }

    #[derive(Clone, Debug)]
    enum SelectionAction {
        Pick(&'static str),
        Reset,
    }

    impl Action for SelectionAction {
        fn name(&self) -> &'static str {
            match self {
                SelectionAction::Pick(_) => "Pick",
                SelectionAction::Reset => "Reset",
            }
        }
    }

    fn selection_reducer(state: &mut Selection, action: SelectionAction) -> bool {
        match action {
            SelectionAction::Pick(table) => state.table.replace(table) != Some(table),
            SelectionAction::Reset => state.table.take().is_some(),
        }
    }

    #[test]
    fn test_dispatch_reports_changes() {
        let mut store = Store::new(Selection::default(), selection_reducer);

        assert!(store.dispatch(SelectionAction::Pick("users")));
        assert_eq!(store.state().table, Some("users"));
        assert!(!store.dispatch(SelectionAction::Pick("users")));

        assert!(store.dispatch(SelectionAction::Reset));
        assert!(!store.dispatch(SelectionAction::Reset));
        assert_eq!(store.state().table, None);
    }

    struct Trace(Rc<RefCell<Vec<String>>>);

    impl Middleware<SelectionAction> for Trace {
        fn before(&mut self, action: &SelectionAction) {
            self.0.borrow_mut().push(format!("before {}", action.name()));
        }

        fn after(&mut self, action: &SelectionAction, state_changed: bool) {
            self.0
                .borrow_mut()
                .push(format!("after {} {}", action.name(), state_changed));
        }
    }

    #[test]
    fn test_middleware_wraps_reducer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store =
            Store::with_middleware(Selection::default(), selection_reducer, Trace(log.clone()));

        store.dispatch(SelectionAction::Pick("orders"));
        store.dispatch(SelectionAction::Pick("orders"));

        assert_eq!(
            *log.borrow(),
            ["before Pick", "after Pick true", "before Pick", "after Pick false"]
        );
    }

    #[test]
    fn test_logging_middleware_keeps_result() {
        let mut store =
            Store::with_middleware(Selection::default(), selection_reducer, LoggingMiddleware);

        assert!(store.dispatch(SelectionAction::Pick("users")));
        assert_eq!(store.state().table, Some("users"));
    }
}
