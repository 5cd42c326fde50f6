use std::cell::RefCell;
use std::collections::VecDeque;

use crate::event::{EditorEvent, EventHandler};

/// Single FIFO event queue plus the observers notified as events are processed
pub struct EventBus {
    queue: RefCell<VecDeque<EditorEvent>>,
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queued", &self.queue.borrow().len())
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive processed events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Queue an event for processing
    pub fn emit(&self, event: EditorEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    pub fn emit_all(&self, events: impl IntoIterator<Item = EditorEvent>) {
        self.queue.borrow_mut().extend(events);
    }

    /// Take the oldest queued event
    pub fn next_event(&self) -> Option<EditorEvent> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Hand a processed event to every registered handler
    pub fn notify(&self, event: &EditorEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Recorder(Arc<Mutex<Vec<EditorEvent>>>);

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &EditorEvent) {
            self.0.lock().push(event.clone());
        }
    }

    #[test]
    fn test_events_come_out_in_emit_order() {
        let bus = EventBus::new();
        let (a, b) = (generate_id(), generate_id());
        bus.emit(EditorEvent::SelectionChanged(a));
        bus.emit(EditorEvent::SelectionChanged(b));

        assert_eq!(bus.pending(), 2);
        assert_eq!(bus.next_event(), Some(EditorEvent::SelectionChanged(a)));
        assert_eq!(bus.next_event(), Some(EditorEvent::SelectionChanged(b)));
        assert_eq!(bus.next_event(), None);
    }

    #[test]
    fn test_notify_reaches_every_handler() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe(Box::new(Recorder(seen.clone())));
        bus.subscribe(Box::new(Recorder(seen.clone())));

        bus.notify(&EditorEvent::SelectionCleared(generate_id()));
        assert_eq!(seen.lock().len(), 2);
        // notifying does not touch the queue
        assert_eq!(bus.pending(), 0);
    }
}
