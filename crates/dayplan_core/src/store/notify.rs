//! Explicit change-subscription interface.
//!
//! # Responsibility
//! - Let views register callbacks fired after every successful mutation.
//! - Keep the data flow unidirectional: the notifier carries no payload,
//!   subscribers pull a fresh snapshot from the store accessors.

/// Handle returned by `subscribe`, used to unsubscribe later.
pub type SubscriberId = u64;

/// Callback registry owned by each store.
///
/// Callbacks are plain `Fn()` values; the app model is single-context, so
/// no `Send` bound is needed.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: SubscriberId,
    subscribers: Vec<(SubscriberId, Box<dyn Fn()>)>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and returns its handle.
    pub fn subscribe(&mut self, listener: Box<dyn Fn()>) -> SubscriberId {
        self.next_id += 1;
        let id = self.next_id;
        self.subscribers.push((id, listener));
        id
    }

    /// Removes a callback. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(known, _)| *known != id);
        self.subscribers.len() != before
    }

    /// Fires every registered callback in subscription order.
    pub fn emit(&self) {
        for (_, listener) in &self.subscribers {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChangeNotifier;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn emit_reaches_every_subscriber_until_unsubscribed() {
        let mut notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&hits);
        let id = notifier.subscribe(Box::new(move || counter.set(counter.get() + 1)));

        notifier.emit();
        notifier.emit();
        assert_eq!(hits.get(), 2);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.emit();
        assert_eq!(hits.get(), 2);
    }
}
