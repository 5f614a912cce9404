#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventType {
    #[default]
    Any,
    Press,
    Release,
}

impl EventType {
    /// Whether an event of type `self` passes `filter`. `Any` as a filter matches everything.
    #[must_use]
    pub fn matches(self, filter: EventType) -> bool {
        filter == EventType::Any || self == filter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    pub kind: EventType,
    pub name: String,
}

impl Event {
    pub fn new(kind: EventType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn press(name: impl Into<String>) -> Self {
        Self::new(EventType::Press, name)
    }

    pub fn release(name: impl Into<String>) -> Self {
        Self::new(EventType::Release, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_filter_matches_every_type() {
        assert!(EventType::Press.matches(EventType::Any));
        assert!(EventType::Release.matches(EventType::Any));
    }

    #[test]
    fn typed_filter_only_matches_same_type() {
        assert!(EventType::Press.matches(EventType::Press));
        assert!(!EventType::Release.matches(EventType::Press));
    }

    #[test]
    fn default_event_is_untyped_and_unnamed() {
        let event = Event::default();

        assert_eq!(event.kind, EventType::Any);
        assert!(event.name.is_empty());
    }
}
