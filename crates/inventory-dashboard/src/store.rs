use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Store - holds application state and manages the Redux loop
///
/// All reducer transitions run on the thread that owns the store. Actions
/// dispatched from middleware or from async service tasks are queued on a
/// channel and applied by [`Store::process_pending`] or
/// [`Store::wait_until_idle`].
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer, then apply
    /// whatever the middleware queued in response
    pub fn dispatch(&mut self, action: Action) {
        self.handle(action);
        self.process_pending();
    }

    /// Apply every queued action without blocking, returning how many ran
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle(action);
            processed += 1;
        }
        processed
    }

    /// Block until no store is loading, applying actions as they arrive.
    ///
    /// Returns `false` if `timeout` elapsed first. An operation that never
    /// settles leaves its loading flag set, so callers must bound the wait.
    pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.process_pending();

        while self.state.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.action_rx.recv_timeout(remaining) {
                Ok(action) => {
                    self.handle(action);
                    self.process_pending();
                }
                Err(RecvTimeoutError::Timeout) => {
                    log::warn!("Store: still busy after {:?}", timeout);
                    return false;
                }
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }

        true
    }

    fn handle(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{InventoryAction, SupplierAction};

    /// Consumes `SetError` and answers with a loading flag instead
    struct Redirect;

    impl Middleware for Redirect {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            if let Action::Inventory(InventoryAction::SetError(_)) = action {
                dispatcher.dispatch(Action::Inventory(InventoryAction::SetLoading(true)));
                return false;
            }
            true
        }
    }

    #[test]
    fn test_dispatch_reduces_unconsumed_actions() {
        let mut store = Store::new(AppState::default());
        store.dispatch(Action::Supplier(SupplierAction::SetLoading(true)));
        assert!(store.state().suppliers.is_loading);
    }

    #[test]
    fn test_consumed_action_skips_reducer_and_follow_up_runs() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(Redirect));

        store.dispatch(Action::Inventory(InventoryAction::SetError(Some(
            "ignored".to_string(),
        ))));

        assert_eq!(store.state().inventory.error, None);
        assert!(store.state().inventory.is_loading);
    }

    #[test]
    fn test_external_dispatch_is_applied_on_process_pending() {
        let mut store = Store::new(AppState::default());
        let dispatcher = store.dispatcher().clone();

        std::thread::spawn(move || {
            dispatcher.dispatch(Action::Inventory(InventoryAction::SetLoading(true)));
        })
        .join()
        .unwrap();

        assert!(!store.state().inventory.is_loading);
        assert_eq!(store.process_pending(), 1);
        assert!(store.state().inventory.is_loading);
    }

    #[test]
    fn test_wait_until_idle_times_out_while_loading() {
        let mut store = Store::new(AppState::default());
        store.dispatch(Action::Inventory(InventoryAction::SetLoading(true)));

        assert!(!store.wait_until_idle(Duration::from_millis(20)));
        assert!(store.state().is_busy());
    }

    #[test]
    fn test_wait_until_idle_returns_when_loading_clears() {
        let mut store = Store::new(AppState::default());
        store.dispatch(Action::Inventory(InventoryAction::SetLoading(true)));
        let dispatcher = store.dispatcher().clone();

        let worker = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(10));
            dispatcher.dispatch(Action::Inventory(InventoryAction::SetLoading(false)));
        });

        assert!(store.wait_until_idle(Duration::from_secs(5)));
        worker.join().unwrap();
    }
}
