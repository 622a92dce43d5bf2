//! Deferred state transitions keyed by round.
//!
//! A key carries the identity of the round it belongs to, so rescheduling or
//! cancelling a round only ever touches that round's pending transition.

use std::time::Instant;

#[derive(Debug)]
struct Pending<K> {
    key: K,
    due: Instant,
}

#[derive(Debug)]
pub struct Scheduler<K> {
    pending: Vec<Pending<K>>,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq> Scheduler<K> {
    /// Schedules `key` at `due`, replacing any pending entry for the same key.
    pub fn schedule(&mut self, key: K, due: Instant) {
        self.cancel(&key);
        self.pending.push(Pending { key, due });
    }

    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.key != *key);
        self.pending.len() != before
    }

    /// Drops every pending entry matching `pred`.
    pub fn cancel_where(&mut self, pred: impl Fn(&K) -> bool) {
        self.pending.retain(|p| !pred(&p.key));
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.iter().any(|p| p.key == *key)
    }

    pub fn due_at(&self, key: &K) -> Option<Instant> {
        self.pending.iter().find(|p| p.key == *key).map(|p| p.due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every key due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let mut due = Vec::new();
        let mut idx = 0;
        while idx < self.pending.len() {
            if self.pending[idx].due <= now {
                due.push(self.pending.swap_remove(idx));
            } else {
                idx += 1;
            }
        }
        due.sort_by_key(|p| p.due);
        due.into_iter().map(|p| p.key).collect()
    }
}
