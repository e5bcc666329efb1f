// signal.rs - Per-attribute change notification channels

use std::fmt;

/// Handle returned by [`Signal::subscribe`], used to detach later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<T> = Box<dyn FnMut(&T)>;

/// A synchronous fan-out notification channel.
///
/// Handlers run in subscription order on the emitting thread, before `emit`
/// returns. A handler only observes the value; it has no way to reject the
/// change that triggered it.
pub struct Signal<T> {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<T>)>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Detaches a handler. Returns `false` if it was not attached.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn unsubscribe_all(&mut self) {
        self.handlers.clear();
    }

    pub fn emit(&mut self, value: &T) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
