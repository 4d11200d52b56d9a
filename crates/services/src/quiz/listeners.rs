use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::events::QuizEvent;

type Listener = Rc<RefCell<dyn FnMut(&QuizEvent)>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListenerScope {
    /// Lives until its `Subscription` is dropped.
    Session,
    /// Also removed when the current run finishes or restarts.
    Run,
}

struct Entry {
    id: u64,
    scope: ListenerScope,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Single-threaded observer list owned by a `QuizSession`.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ListenerRegistry {
    pub(crate) fn subscribe<F>(&self, scope: ListenerScope, listener: F) -> Subscription
    where
        F: FnMut(&QuizEvent) + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            scope,
            listener: Rc::new(RefCell::new(listener)),
        });
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Notifies listeners in registration order.
    ///
    /// The list is snapshotted first, so listeners may drop subscriptions
    /// (theirs or others') while being notified.
    pub(crate) fn emit(&self, event: &QuizEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|entry| Rc::clone(&entry.listener))
            .collect();
        for listener in listeners {
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(event);
            }
        }
    }

    /// Drops every run-scoped listener.
    pub(crate) fn end_run(&self) {
        self.inner
            .borrow_mut()
            .entries
            .retain(|entry| entry.scope != ListenerScope::Run);
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// RAII guard returned by `QuizSession::subscribe*`.
///
/// Dropping it removes the listener before the next notification cycle.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// False once the listener has been removed, by drop or by the end of its run.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .borrow()
                .entries
                .iter()
                .any(|entry| entry.id == self.id)
        })
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut registry) = registry.try_borrow_mut() {
            registry.entries.retain(|entry| entry.id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::events::FocusMoved;

    fn event() -> QuizEvent {
        QuizEvent::FocusMoved(FocusMoved { index: 0 })
    }

    fn counter() -> (Rc<RefCell<u32>>, impl FnMut(&QuizEvent) + 'static) {
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        (hits, move |_: &QuizEvent| *sink.borrow_mut() += 1)
    }

    #[test]
    fn dropping_subscription_removes_listener() {
        let registry = ListenerRegistry::default();
        let (hits, listener) = counter();
        let sub = registry.subscribe(ListenerScope::Session, listener);

        registry.emit(&event());
        drop(sub);
        registry.emit(&event());

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn end_run_keeps_session_listeners() {
        let registry = ListenerRegistry::default();
        let (_, run_listener) = counter();
        let (_, session_listener) = counter();
        let run = registry.subscribe(ListenerScope::Run, run_listener);
        let session = registry.subscribe(ListenerScope::Session, session_listener);

        registry.end_run();

        assert!(!run.is_active());
        assert!(session.is_active());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn listener_may_drop_a_subscription_during_emit() {
        let registry = ListenerRegistry::default();
        let (hits, listener) = counter();
        let victim = Rc::new(RefCell::new(Some(
            registry.subscribe(ListenerScope::Session, listener),
        )));
        let slot = Rc::clone(&victim);
        let _killer = registry.subscribe(ListenerScope::Session, move |_| {
            slot.borrow_mut().take();
        });

        registry.emit(&event());
        registry.emit(&event());

        // Notified once from the snapshot, then gone.
        assert_eq!(*hits.borrow(), 1);
        assert!(victim.borrow().is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn subscription_outliving_registry_is_inert() {
        let registry = ListenerRegistry::default();
        let (_, listener) = counter();
        let sub = registry.subscribe(ListenerScope::Session, listener);
        drop(registry);
        assert!(!sub.is_active());
    }
}
