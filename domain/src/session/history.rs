//! Bounded per-session conversation history.
//!
//! [`ConversationHistory`] keeps the most recent `max_turns` exchanges. Each
//! turn is stored as two [`Message`]s (question, answer), so the buffer holds
//! at most `2 * max_turns` entries and drops the oldest pair first.

use super::entities::Message;
use std::collections::VecDeque;

/// Ordered, append-only log of turns with FIFO eviction.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    max_turns: usize,
    entries: VecDeque<Message>,
}

impl ConversationHistory {
    pub fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            entries: VecDeque::with_capacity(2 * max_turns),
        }
    }

    /// Append one question/answer pair, then truncate to the last
    /// `max_turns` pairs.
    pub fn push_turn(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.entries.push_back(Message::user(question));
        self.entries.push_back(Message::assistant(answer));

        let capacity = self.capacity();
        if self.entries.len() > capacity {
            let excess = self.entries.len() - capacity;
            self.entries.drain(..excess);
        }
    }

    /// Maximum number of stored entries (two per turn).
    pub fn capacity(&self) -> usize {
        2 * self.max_turns
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of every stored entry, oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Role;

    #[test]
    fn test_push_turn_stores_user_then_assistant() {
        let mut history = ConversationHistory::new(3);
        history.push_turn("q1", "a1");

        let entries = history.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, Role::User);
        assert_eq!(entries[0].content, "q1");
        assert_eq!(entries[1].role, Role::Assistant);
        assert_eq!(entries[1].content, "a1");
    }

    #[test]
    fn test_truncation_keeps_most_recent_pairs() {
        let max_turns = 4;
        let mut history = ConversationHistory::new(max_turns);
        for i in 0..(max_turns + 3) {
            history.push_turn(format!("q{i}"), format!("a{i}"));
            assert!(history.len() <= 2 * max_turns);
        }

        let entries = history.snapshot();
        assert_eq!(entries.len(), 8);
        // q0..q2 evicted, q3..q6 survive in order
        assert_eq!(entries[0].content, "q3");
        assert_eq!(entries[1].content, "a3");
        assert_eq!(entries[6].content, "q6");
        assert_eq!(entries[7].content, "a6");
    }

    #[test]
    fn test_default_capacity_is_eighty_entries() {
        let mut history = ConversationHistory::new(40);
        for i in 0..45 {
            history.push_turn(format!("q{i}"), format!("a{i}"));
        }
        assert_eq!(history.capacity(), 80);
        assert_eq!(history.len(), 80);
        assert_eq!(history.snapshot()[0].content, "q5");
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut history = ConversationHistory::new(2);
        history.push_turn("q1", "a1");
        let snapshot = history.snapshot();
        history.push_turn("q2", "a2");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(history.len(), 4);
    }
}
