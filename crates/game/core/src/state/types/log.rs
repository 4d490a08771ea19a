use std::collections::VecDeque;

/// Bounded narrative log, most recent entry first.
///
/// Empty messages are ignored and a message equal to the current head is not
/// repeated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrativeLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl NarrativeLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() || self.latest() == Some(message.as_str()) {
            return;
        }

        self.entries.push_front(message);
        self.entries.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
