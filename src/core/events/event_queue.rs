use std::collections::VecDeque;

use crate::core::events::event::{Event, EventType};

/// FIFO of discrete input events, consumed destructively by queries.
///
/// The queue is unbounded within a frame. Alongside it sits a single
/// "current event" slot that holds whatever `consume_one` took last, or
/// whatever a caller stored with `set_current`.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
    current: Event,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, kind: EventType, name: impl Into<String>) {
        self.events.push_back(Event::new(kind, name));
    }

    /// Removes and returns every event matching `filter`, in queue order.
    /// Non-matching events keep their relative order.
    pub fn drain(&mut self, filter: EventType) -> Vec<Event> {
        if filter == EventType::Any {
            return self.events.drain(..).collect();
        }

        let mut taken = Vec::new();
        let mut kept = VecDeque::with_capacity(self.events.len());

        for event in self.events.drain(..) {
            if event.kind.matches(filter) {
                taken.push(event);
            } else {
                kept.push_back(event);
            }
        }

        self.events = kept;
        taken
    }

    /// Moves the first event matching `filter` into the current slot.
    /// Returns `false` without touching anything when no event matches.
    pub fn consume_one(&mut self, filter: EventType) -> bool {
        let Some(index) = self
            .events
            .iter()
            .position(|event| event.kind.matches(filter))
        else {
            return false;
        };

        match self.events.remove(index) {
            Some(event) => {
                self.current = event;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Event {
        &self.current
    }

    pub fn set_current(&mut self, event: Event) {
        self.current = event;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(events: &[Event]) -> EventQueue {
        let mut queue = EventQueue::new();
        for event in events {
            queue.push_event(event.kind, event.name.clone());
        }
        queue
    }

    #[test]
    fn drain_any_is_destructive_and_exhaustive() {
        let mut queue = queue_of(&[Event::press("A"), Event::release("A")]);

        let first = queue.drain(EventType::Any);
        let second = queue.drain(EventType::Any);

        assert_eq!(first, vec![Event::press("A"), Event::release("A")]);
        assert!(second.is_empty());
    }

    #[test]
    fn drain_filtered_keeps_remaining_events_in_order() {
        let mut queue = queue_of(&[
            Event::press("A"),
            Event::release("B"),
            Event::press("C"),
            Event::release("D"),
        ]);

        let presses = queue.drain(EventType::Press);

        assert_eq!(presses, vec![Event::press("A"), Event::press("C")]);
        assert_eq!(
            queue.drain(EventType::Any),
            vec![Event::release("B"), Event::release("D")]
        );
    }

    #[test]
    fn consume_one_takes_first_match_and_leaves_earlier_mismatch() {
        let mut queue = queue_of(&[Event::release("B"), Event::press("A"), Event::press("C")]);

        assert!(queue.consume_one(EventType::Press));
        assert_eq!(queue.current(), &Event::press("A"));
        assert_eq!(
            queue.drain(EventType::Any),
            vec![Event::release("B"), Event::press("C")]
        );
    }

    #[test]
    fn consume_one_any_takes_head() {
        let mut queue = queue_of(&[Event::release("B"), Event::press("A")]);

        assert!(queue.consume_one(EventType::Any));
        assert_eq!(queue.current(), &Event::release("B"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn consume_one_without_match_mutates_nothing() {
        let mut queue = queue_of(&[Event::release("B")]);
        queue.set_current(Event::press("Z"));

        assert!(!queue.consume_one(EventType::Press));
        assert_eq!(queue.current(), &Event::press("Z"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn consume_one_on_empty_queue_returns_false() {
        let mut queue = EventQueue::new();

        assert!(!queue.consume_one(EventType::Any));
        assert_eq!(queue.current(), &Event::default());
    }

    #[test]
    fn set_current_does_not_touch_queue() {
        let mut queue = queue_of(&[Event::press("A")]);

        queue.set_current(Event::release("Q"));

        assert_eq!(queue.current(), &Event::release("Q"));
        assert_eq!(queue.len(), 1);
    }
}
