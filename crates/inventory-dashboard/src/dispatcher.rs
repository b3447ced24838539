//! Dispatcher for middleware action dispatch
//!
//! Middleware never touches the state directly. Both the synchronous part of a
//! command and the async tasks it spawns report back by dispatching actions,
//! which travel over a channel to the thread that owns the [`Store`] and
//! re-enter the middleware chain there.
//!
//! [`Store`]: crate::store::Store

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back to the store
///
/// Cheap to clone; every spawned service task carries its own copy.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// The action is processed on the store thread, after the action currently
    /// being handled.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
