use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::None) {
            log::debug!("Action: {:?}", action);
        }

        true // Always pass action through
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::InventoryAction;
    use std::sync::mpsc;

    #[test]
    fn test_passes_every_action_through() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = LoggingMiddleware::new();
        let state = AppState::default();

        assert!(middleware.handle(&Action::None, &state, &dispatcher));
        assert!(middleware.handle(
            &Action::Inventory(InventoryAction::SetLoading(true)),
            &state,
            &dispatcher
        ));
        assert!(rx.try_recv().is_err());
    }
}
