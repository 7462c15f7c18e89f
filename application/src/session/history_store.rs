//! Per-session conversation histories.

use ecobot_domain::{ConversationHistory, Message, SessionId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A history and the sequence number of the session that owns it.
struct Owned {
    sequence: u64,
    history: ConversationHistory,
}

/// Bounded histories keyed by session id.
///
/// `get` always hands out a copy, so the dispatcher never sees a history
/// that another task is mutating. Writes carry the owner's sequence number
/// so a closing session never touches a history that a newer session with
/// the same id has started.
pub struct HistoryStore {
    max_turns: usize,
    histories: Mutex<HashMap<SessionId, Owned>>,
}

impl HistoryStore {
    pub fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            histories: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, Owned>> {
        self.histories.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a question/answer pair as one step, truncating to the last
    /// `max_turns` turns. A history left behind by an older owner of the
    /// same id is discarded first.
    pub fn append(&self, id: &SessionId, sequence: u64, question: &str, answer: &str) {
        let mut histories = self.lock();
        let owned = histories.entry(id.clone()).or_insert_with(|| Owned {
            sequence,
            history: ConversationHistory::new(self.max_turns),
        });
        if owned.sequence != sequence {
            owned.sequence = sequence;
            owned.history = ConversationHistory::new(self.max_turns);
        }
        owned.history.push_turn(question, answer);
    }

    /// Copy of the history owned by `sequence`, oldest first. Empty when
    /// unknown or left behind by an older owner of the id.
    pub fn get(&self, id: &SessionId, sequence: u64) -> Vec<Message> {
        self.lock()
            .get(id)
            .filter(|owned| owned.sequence == sequence)
            .map(|owned| owned.history.snapshot())
            .unwrap_or_default()
    }

    /// Drop a closed session's history if `sequence` still owns it.
    pub fn remove(&self, id: &SessionId, sequence: u64) {
        let mut histories = self.lock();
        if histories.get(id).is_some_and(|owned| owned.sequence == sequence) {
            histories.remove(id);
        }
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.lock().contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecobot_domain::Role;

    #[test]
    fn test_append_and_get_copy() {
        let store = HistoryStore::new(40);
        let id = SessionId::from("aaaa0000");
        store.append(&id, 1, "q1", "a1");

        let mut copy = store.get(&id, 1);
        assert_eq!(copy.len(), 2);
        assert_eq!(copy[0].role, Role::User);
        assert_eq!(copy[1].content, "a1");

        copy.clear();
        assert_eq!(store.get(&id, 1).len(), 2);
    }

    #[test]
    fn test_truncation_keeps_most_recent_pairs() {
        let store = HistoryStore::new(3);
        let id = SessionId::from("aaaa0000");
        for i in 0..5 {
            store.append(&id, 1, &format!("q{i}"), &format!("a{i}"));
        }
        let history = store.get(&id, 1);
        assert_eq!(history.len(), 6);
        assert_eq!(history[0].content, "q2");
        assert_eq!(history[5].content, "a4");
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = HistoryStore::new(40);
        let a = SessionId::from("aaaa0000");
        let b = SessionId::from("bbbb1111");
        store.append(&a, 1, "pregunta a", "respuesta a");
        store.append(&b, 2, "pregunta b", "respuesta b");

        assert!(store.get(&a, 1).iter().all(|m| m.content.ends_with('a')));
        assert!(store.get(&b, 2).iter().all(|m| m.content.ends_with('b')));
    }

    #[test]
    fn test_remove_and_unknown() {
        let store = HistoryStore::new(40);
        let id = SessionId::from("aaaa0000");
        assert!(store.get(&id, 1).is_empty());
        store.append(&id, 1, "q", "a");
        assert!(store.contains(&id));
        store.remove(&id, 1);
        assert!(!store.contains(&id));
    }

    #[test]
    fn test_stale_owner_cannot_remove_reissued_history() {
        let store = HistoryStore::new(40);
        let id = SessionId::from("aaaa0000");
        store.append(&id, 1, "vieja", "respuesta vieja");

        // Id re-issued to session 2 before session 1 finished closing.
        assert!(store.get(&id, 2).is_empty());
        store.append(&id, 2, "nueva", "respuesta nueva");
        let history = store.get(&id, 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "nueva");
        assert!(store.get(&id, 1).is_empty());

        store.remove(&id, 1);
        assert_eq!(store.get(&id, 2).len(), 2);

        store.remove(&id, 2);
        assert!(!store.contains(&id));
    }
}
