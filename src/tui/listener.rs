//! Scoped keyboard subscriptions.
//!
//! [`KeyListeners`] is the presenter's equivalent of a window-level key
//! listener list. A view subscribes a handler when it mounts and receives a
//! [`ListenerGuard`]; dropping the guard unsubscribes the handler, so a view
//! can never leave a binding behind after it unmounts.
//!
//! The registry is single-threaded (`Rc`), matching the event loop that owns
//! it, and can be driven in tests without a terminal.

use crate::tui::event::Action;
use crossterm::event::KeyEvent;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A key handler: returns the action bound to the key, if any.
type Handler = Rc<dyn Fn(&KeyEvent) -> Option<Action>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Ordered list of active key handlers.
#[derive(Clone, Default)]
pub struct KeyListeners {
    registry: Rc<RefCell<Registry>>,
}

impl KeyListeners {
    /// Creates an empty listener list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` until the returned guard is dropped.
    #[must_use = "the handler is removed as soon as the guard is dropped"]
    pub fn subscribe<F>(&self, handler: F) -> ListenerGuard
    where
        F: Fn(&KeyEvent) -> Option<Action> + 'static,
    {
        let handler: Handler = Rc::new(handler);
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, handler));
        tracing::debug!("key listener {id} subscribed");
        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Offers `key` to every handler in subscription order and collects the
    /// actions they return.
    pub fn dispatch(&self, key: &KeyEvent) -> Vec<Action> {
        // Snapshot so handlers may subscribe or drop guards while running.
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        handlers.iter().filter_map(|handler| handler(key)).collect()
    }

    /// Number of active handlers.
    pub fn len(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    /// Returns `true` when no handler is subscribed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for KeyListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListeners")
            .field("len", &self.len())
            .finish()
    }
}

/// Keeps a handler subscribed; unsubscribes it on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
            tracing::debug!("key listener {} unsubscribed", self.id);
        }
    }
}
