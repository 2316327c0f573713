//! Per-document request sequencing.
//!
//! Overlapping lint requests for one document may finish out of order. Each
//! request takes a ticket; only the newest ticket's result is published.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

/// Identifies one request for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    seq: u64,
}

impl<K> Ticket<K> {
    /// Returns the sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Returns the document key.
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// Issues monotonically increasing tickets per key.
///
/// Numbers come from one shared counter, so a ticket issued before
/// [`RequestSequencer::forget`] can never match a later one.
#[derive(Debug)]
pub struct RequestSequencer<K> {
    state: Mutex<SequencerState<K>>,
}

#[derive(Debug)]
struct SequencerState<K> {
    next: u64,
    latest: HashMap<K, u64>,
}

impl<K: Eq + Hash + Clone> RequestSequencer<K> {
    /// Creates an empty sequencer.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SequencerState {
                next: 0,
                latest: HashMap::new(),
            }),
        }
    }

    /// Starts a request for `key`, superseding earlier ones.
    pub fn begin(&self, key: K) -> Ticket<K> {
        let mut state = self.state.lock();
        state.next += 1;
        let seq = state.next;
        state.latest.insert(key.clone(), seq);
        Ticket { key, seq }
    }

    /// Returns true if no newer request for the same key has started.
    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.state
            .lock()
            .latest
            .get(&ticket.key)
            .is_some_and(|seq| *seq == ticket.seq)
    }

    /// Forgets `key`; outstanding tickets for it become stale.
    pub fn forget(&self, key: &K) {
        self.state.lock().latest.remove(key);
    }
}

impl<K: Eq + Hash + Clone> Default for RequestSequencer<K> {
    fn default() -> Self {
        Self::new()
    }
}
