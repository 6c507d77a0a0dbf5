//! Deadline-ordered timer queue with cancellable one-shot and repeating timers.
//!
//! The queue owns no clock: callers pass `now` into [`TimerQueue::pop_due`]
//! and arm a real wall-clock timer at [`TimerQueue::next_deadline`].

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::{Duration, Instant};

/// Handle returned when a timer is scheduled, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<E> {
    deadline: Instant,
    // Insertion sequence; breaks deadline ties in scheduling order.
    seq: u64,
    id: TimerId,
    period: Option<Duration>,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Pending timers, earliest deadline first.
#[derive(Debug)]
pub struct TimerQueue<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    // Ids still live in the heap; cancellation removes from here and the
    // stale heap entry is skipped lazily.
    live: HashSet<TimerId>,
    next_id: u64,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashSet::new(),
            next_id: 0,
            next_seq: 0,
        }
    }

    /// Schedules `event` to fire once at `deadline`.
    pub fn schedule_once(&mut self, deadline: Instant, event: E) -> TimerId {
        self.push(deadline, None, event)
    }

    /// Schedules `event` to fire at `first` and then every `period`.
    ///
    /// A zero period is bumped to one millisecond so the queue cannot spin.
    pub fn schedule_every(&mut self, first: Instant, period: Duration, event: E) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.push(first, Some(period), event)
    }

    fn push(&mut self, deadline: Instant, period: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        self.push_entry(id, deadline, period, event);
        id
    }

    fn push_entry(&mut self, id: TimerId, deadline: Instant, period: Option<Duration>, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            deadline,
            seq,
            id,
            period,
            event,
        }));
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.live.remove(&id)
    }

    /// Whether `id` is still scheduled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.live.contains(&id)
    }

    fn discard_cancelled(&mut self) {
        while let Some(Reverse(top)) = self.heap.peek() {
            if self.live.contains(&top.id) {
                break;
            }
            self.heap.pop();
        }
    }

    /// Earliest pending deadline, if any timer is scheduled.
    pub fn next_deadline(&mut self) -> Option<Instant> {
        self.discard_cancelled();
        self.heap.peek().map(|Reverse(entry)| entry.deadline)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl<E: Clone> TimerQueue<E> {
    /// Pops the earliest timer whose deadline is at or before `now`,
    /// together with the deadline it was scheduled for.
    ///
    /// Repeating timers are re-armed at `deadline + period`, so a late
    /// caller catches up one tick per call instead of skipping ticks.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, E)> {
        self.discard_cancelled();

        let due = matches!(self.heap.peek(), Some(Reverse(top)) if top.deadline <= now);
        if !due {
            return None;
        }

        let Reverse(entry) = self.heap.pop()?;
        match entry.period {
            Some(period) => {
                let event = entry.event.clone();
                self.push_entry(entry.id, entry.deadline + period, Some(period), entry.event);
                Some((entry.deadline, event))
            }
            None => {
                self.live.remove(&entry.id);
                Some((entry.deadline, entry.event))
            }
        }
    }
}
