//! Bubble lifecycle: staggered start, recurring spawns, per-bubble expiry.
//!
//! Timeline after [`BubbleScheduler::mount`] at `t0`:
//! - one-shot spawns at `t0`, `t0 + 2s`, `t0 + 4s`
//! - the last stagger arms a recurring spawn every 3s (`t0 + 7s`, `+10s`, ...)
//! - every bubble expires exactly `duration` after its own spawn
//!
//! Nothing here reads the clock. The host passes `now` into
//! [`BubbleScheduler::advance`] and arms a wall-clock timer at
//! [`BubbleScheduler::next_deadline`].

use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::Rng;

use super::bubble::{Bubble, BubbleId};
use super::timer::{TimerId, TimerQueue};

/// Delays of the initial staggered spawns, relative to mount.
pub const STAGGER_DELAYS: [Duration; 3] = [
    Duration::from_secs(0),
    Duration::from_secs(2),
    Duration::from_secs(4),
];

/// Period of the recurring spawn timer.
pub const SPAWN_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BubbleEvent {
    /// One of the initial spawns; `last` arms the recurring timer
    StaggeredSpawn { last: bool },
    /// Recurring spawn tick
    Spawn,
    /// Remove a bubble by identity
    Expire(BubbleId),
}

/// Owns the active bubbles and the timers that create and remove them.
#[derive(Debug)]
pub struct BubbleScheduler {
    bubbles: Vec<Bubble>,
    timers: TimerQueue<BubbleEvent>,
    stagger_timers: Vec<TimerId>,
    spawn_timer: Option<TimerId>,
    next_id: u64,
    mounted: bool,
}

impl Default for BubbleScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleScheduler {
    pub fn new() -> Self {
        Self {
            bubbles: Vec::new(),
            timers: TimerQueue::new(),
            stagger_timers: Vec::new(),
            spawn_timer: None,
            next_id: 0,
            mounted: false,
        }
    }

    /// Schedules the staggered initial spawns. Mounting twice is a no-op.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            debug!("Bubble scheduler already mounted");
            return;
        }
        self.mounted = true;

        let last_index = STAGGER_DELAYS.len() - 1;
        for (i, delay) in STAGGER_DELAYS.iter().enumerate() {
            let id = self.timers.schedule_once(
                now + *delay,
                BubbleEvent::StaggeredSpawn {
                    last: i == last_index,
                },
            );
            self.stagger_timers.push(id);
        }
        debug!(
            "Bubble scheduler mounted ({} staggered spawns)",
            STAGGER_DELAYS.len()
        );
    }

    /// Cancels every pending spawn.
    ///
    /// Expiry timers stay queued: removing an id that is already gone is a
    /// no-op, and the queue is dropped together with the scheduler.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;

        if let Some(id) = self.spawn_timer.take() {
            self.timers.cancel(id);
        }
        for id in self.stagger_timers.drain(..) {
            self.timers.cancel(id);
        }
        debug!(
            "Bubble scheduler unmounted ({} bubbles, {} expiry timers pending)",
            self.bubbles.len(),
            self.timers.len()
        );
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Fires every timer due at `now`, in deadline order.
    ///
    /// Returns `true` if the bubble set changed.
    pub fn advance<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        let mut changed = false;

        // Spawns are stamped with their scheduled deadline, not `now`, so a
        // late host does not shift lifetimes or the recurring cadence.
        while let Some((deadline, event)) = self.timers.pop_due(now) {
            match event {
                BubbleEvent::StaggeredSpawn { last } => {
                    self.spawn(deadline, rng);
                    changed = true;
                    if last && self.mounted {
                        let first = deadline + SPAWN_INTERVAL;
                        self.spawn_timer =
                            Some(self.timers.schedule_every(first, SPAWN_INTERVAL, BubbleEvent::Spawn));
                        debug!("Recurring bubble spawn armed ({:?} period)", SPAWN_INTERVAL);
                    }
                }
                BubbleEvent::Spawn => {
                    self.spawn(deadline, rng);
                    changed = true;
                }
                BubbleEvent::Expire(id) => {
                    changed |= self.remove(id);
                }
            }
        }

        if changed {
            self.stagger_timers.retain(|id| self.timers.is_pending(*id));
        }
        changed
    }

    fn spawn<R: Rng + ?Sized>(&mut self, at: Instant, rng: &mut R) {
        let id = BubbleId(self.next_id);
        self.next_id += 1;

        let bubble = Bubble::random(id, at, rng);
        self.timers
            .schedule_once(bubble.expires_at(), BubbleEvent::Expire(id));
        trace!(
            "Spawned bubble {:?} at {:.1}% ({}, {:.2}s, {:.2}rem)",
            id,
            bubble.left_percent,
            bubble.color_hex(),
            bubble.duration_secs,
            bubble.size_rem
        );
        self.bubbles.push(bubble);
    }

    fn remove(&mut self, id: BubbleId) -> bool {
        let before = self.bubbles.len();
        self.bubbles.retain(|bubble| bubble.id != id);
        let removed = self.bubbles.len() != before;
        if removed {
            trace!("Expired bubble {:?}", id);
        }
        removed
    }

    /// Earliest instant at which [`advance`](Self::advance) has work to do.
    pub fn next_deadline(&mut self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Active bubbles in spawn order.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn has_active(&self) -> bool {
        !self.bubbles.is_empty()
    }

    /// Number of timers still queued (spawns and expiries).
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
