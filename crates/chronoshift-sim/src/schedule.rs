//! Deferred actions keyed to a clock.
//!
//! Staggered effects (wave spawns, burst shots, dash trails) are queued as
//! `(fire_at, action)` pairs and drained once per tick against the clock of
//! their timing domain. Actions carry whatever identity they depend on and
//! resolve as no-ops when it is gone.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chronoshift_core::enums::BulletBehavior;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduledAction {
    /// Release one spawn of `wave`.
    SpawnEnemy { wave: u32 },
    /// Start `wave` after an intermission.
    StartWave { wave: u32 },
    /// One step of a burst fired by `enemy`.
    BurstShot {
        enemy: hecs::Entity,
        behavior: BulletBehavior,
    },
    /// One puff of the dash trail.
    DashTrail,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    at: f64,
    seq: u64,
    action: ScheduledAction,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the BinaryHeap pops the earliest entry; ties keep insertion order
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .at
            .total_cmp(&self.at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-heap of actions for one timing domain.
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: f64, action: ScheduledAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { at, seq, action });
    }

    /// Pop every action due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<ScheduledAction> {
        let mut due = Vec::new();
        while self.heap.peek().is_some_and(|e| e.at <= now) {
            if let Some(entry) = self.heap.pop() {
                due.push(entry.action);
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
