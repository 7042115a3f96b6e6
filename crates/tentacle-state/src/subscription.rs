//! Synchronous change notification

use uuid::Uuid;

pub type SubscriptionId = Uuid;

type Listener<T> = Box<dyn Fn(&[T]) + Send + Sync>;

/// Listener list for one collection. Every listener is called, in
/// registration order, with the full post-change contents.
pub struct Subscribers<T> {
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was never registered or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn notify(&self, items: &[T]) {
        for (_, listener) in &self.listeners {
            listener(items);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}
