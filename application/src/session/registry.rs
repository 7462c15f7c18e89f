//! Session registry: the shared directory of live sessions.
//!
//! Every operation takes one coarse [`Mutex`] for its critical section
//! only. Each entry carries a [`CancellationToken`]; `terminate` cancels it,
//! which unblocks the owning worker's pending read.

use ecobot_domain::{SessionId, SessionInfo};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Generates candidate session ids.
pub type IdGenerator = Arc<dyn Fn() -> SessionId + Send + Sync>;

/// Eight lowercase hex characters taken from a v4 UUID.
pub fn random_session_id() -> SessionId {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    SessionId::new(&uuid[..8])
}

/// What a worker receives when its session is registered.
#[derive(Debug, Clone)]
pub struct Registration {
    pub id: SessionId,
    pub sequence: u64,
    /// Cancelled when the session is terminated from outside.
    pub cancel: CancellationToken,
}

struct Entry {
    info: SessionInfo,
    cancel: CancellationToken,
}

struct Inner {
    sessions: HashMap<SessionId, Entry>,
    next_sequence: u64,
}

/// Registry of live sessions.
///
/// Constructed once at startup and shared by the acceptor, every worker and
/// the admin console.
pub struct SessionRegistry {
    inner: Mutex<Inner>,
    id_generator: IdGenerator,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(random_session_id))
    }

    /// Use a custom id source (tests force collisions with this).
    pub fn with_id_generator(id_generator: IdGenerator) -> Self {
        Self {
            inner: Mutex::new(Inner {
                sessions: HashMap::new(),
                next_sequence: 1,
            }),
            id_generator,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a new session for `peer` with a fresh id and the next
    /// sequence number. Ids already held by a live session are regenerated.
    pub fn register(&self, peer: SocketAddr) -> Registration {
        let mut inner = self.lock();

        let mut id = (self.id_generator)();
        while inner.sessions.contains_key(&id) {
            debug!(session = %id, "Session id collision, regenerating");
            id = (self.id_generator)();
        }

        let sequence = inner.next_sequence;
        inner.next_sequence += 1;

        let cancel = CancellationToken::new();
        inner.sessions.insert(
            id.clone(),
            Entry {
                info: SessionInfo::new(id.clone(), sequence, peer),
                cancel: cancel.clone(),
            },
        );

        Registration {
            id,
            sequence,
            cancel,
        }
    }

    /// Refresh last-active. No-op when the session is gone.
    pub fn touch(&self, id: &SessionId) {
        if let Some(entry) = self.lock().sessions.get_mut(id) {
            entry.info.touch();
        }
    }

    /// Independent snapshot ordered by sequence number.
    pub fn list(&self) -> Vec<SessionInfo> {
        let mut sessions: Vec<SessionInfo> = self
            .lock()
            .sessions
            .values()
            .map(|entry| entry.info.clone())
            .collect();
        sessions.sort_by_key(|info| info.sequence);
        sessions
    }

    pub fn get(&self, id: &SessionId) -> Option<SessionInfo> {
        self.lock().sessions.get(id).map(|entry| entry.info.clone())
    }

    /// Close the session's connection and remove it. Returns whether the
    /// id was live. Idempotent.
    pub fn terminate(&self, id: &SessionId) -> bool {
        let removed = self.lock().sessions.remove(id);
        match removed {
            Some(entry) => {
                entry.cancel.cancel();
                info!(session = %id, seq = entry.info.sequence, "Session terminated");
                true
            }
            None => false,
        }
    }

    /// Remove on natural close. Only the registration that owns `sequence`
    /// is removed: an id freed by `terminate` may already belong to a newer
    /// session.
    pub fn unregister(&self, id: &SessionId, sequence: u64) -> Option<SessionInfo> {
        let mut inner = self.lock();
        match inner.sessions.get(id) {
            Some(entry) if entry.info.sequence == sequence => {
                inner.sessions.remove(id).map(|entry| entry.info)
            }
            _ => None,
        }
    }

    /// Terminate every live session. Returns how many were closed.
    pub fn terminate_all(&self) -> usize {
        let drained: Vec<Entry> = self.lock().sessions.drain().map(|(_, e)| e).collect();
        for entry in &drained {
            entry.cancel.cancel();
        }
        drained.len()
    }

    pub fn len(&self) -> usize {
        self.lock().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    fn peer(port: u16) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], port))
    }

    #[test]
    fn test_register_assigns_increasing_sequence() {
        let registry = SessionRegistry::new();
        let a = registry.register(peer(1));
        let b = registry.register(peer(2));
        assert_eq!(a.sequence, 1);
        assert_eq!(b.sequence, 2);
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.as_str().len(), 8);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_sequence_is_never_reused() {
        let registry = SessionRegistry::new();
        let a = registry.register(peer(1));
        registry.unregister(&a.id, a.sequence);
        let b = registry.register(peer(2));
        assert_eq!(b.sequence, 2);
    }

    #[test]
    fn test_colliding_ids_are_regenerated() {
        let ids = Mutex::new(VecDeque::from(["aaaa0000", "aaaa0000", "bbbb1111"]));
        let registry = SessionRegistry::with_id_generator(Arc::new(move || {
            SessionId::from(ids.lock().unwrap().pop_front().unwrap())
        }));
        let a = registry.register(peer(1));
        let b = registry.register(peer(2));
        assert_eq!(a.id.as_str(), "aaaa0000");
        assert_eq!(b.id.as_str(), "bbbb1111");
    }

    #[test]
    fn test_list_is_a_sorted_snapshot() {
        let registry = SessionRegistry::new();
        let a = registry.register(peer(1));
        let b = registry.register(peer(2));
        let snapshot = registry.list();
        registry.unregister(&a.id, a.sequence);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, a.id);
        assert_eq!(snapshot[1].id, b.id);
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn test_stale_unregister_keeps_reissued_id() {
        let registry =
            SessionRegistry::with_id_generator(Arc::new(|| SessionId::from("aaaa0000")));
        let old = registry.register(peer(1));
        assert!(registry.terminate(&old.id));

        let new = registry.register(peer(2));
        assert_eq!(new.id, old.id);

        assert!(registry.unregister(&old.id, old.sequence).is_none());
        assert_eq!(registry.get(&new.id).unwrap().sequence, new.sequence);
        assert!(!new.cancel.is_cancelled());

        assert!(registry.unregister(&new.id, new.sequence).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_touch_missing_is_noop() {
        let registry = SessionRegistry::new();
        registry.touch(&SessionId::from("missing1"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_touch_updates_last_active() {
        let registry = SessionRegistry::new();
        let a = registry.register(peer(1));
        let before = registry.get(&a.id).unwrap().last_active;
        registry.touch(&a.id);
        assert!(registry.get(&a.id).unwrap().last_active >= before);
    }

    #[test]
    fn test_terminate_cancels_only_target() {
        let registry = SessionRegistry::new();
        let a = registry.register(peer(1));
        let b = registry.register(peer(2));

        assert!(registry.terminate(&a.id));
        assert!(a.cancel.is_cancelled());
        assert!(!b.cancel.is_cancelled());
        assert!(registry.get(&b.id).is_some());

        // Idempotent
        assert!(!registry.terminate(&a.id));
    }

    #[test]
    fn test_terminate_unknown_has_no_side_effects() {
        let registry = SessionRegistry::new();
        let a = registry.register(peer(1));
        assert!(!registry.terminate(&SessionId::from("nonexistent-id")));
        assert!(!a.cancel.is_cancelled());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_terminate_all() {
        let registry = SessionRegistry::new();
        let a = registry.register(peer(1));
        let b = registry.register(peer(2));
        assert_eq!(registry.terminate_all(), 2);
        assert!(a.cancel.is_cancelled() && b.cancel.is_cancelled());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_registrations_get_distinct_ids() {
        let registry = Arc::new(SessionRegistry::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.register(peer(1000 + i)))
            })
            .collect();
        let regs: Vec<Registration> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let ids: HashSet<_> = regs.iter().map(|r| r.id.clone()).collect();
        let seqs: HashSet<_> = regs.iter().map(|r| r.sequence).collect();
        assert_eq!(ids.len(), 16);
        assert_eq!(seqs.len(), 16);
    }
}
