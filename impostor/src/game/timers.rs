//! Phase-bound timers.
//!
//! Every phase transition advances the game's [`Epoch`]. Delayed work is
//! handed out as a [`Deferred`] carrying a [`CancelToken`] stamped with the
//! epoch it was created in, so a deferral that outlives its phase is
//! dropped instead of mutating a later phase.

use serde::{Deserialize, Serialize};
use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use super::entities::PlayerIdx;

/// Counter advanced on every phase transition.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Epoch(u64);

impl Epoch {
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    #[must_use]
    pub const fn token(self) -> CancelToken {
        CancelToken { epoch: self }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CancelToken {
    epoch: Epoch,
}

impl CancelToken {
    /// A token is cancelled once the game has moved past the epoch it was
    /// issued in.
    #[must_use]
    pub fn is_cancelled(&self, current: Epoch) -> bool {
        self.epoch != current
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeferredAction {
    /// The player finished passing the device on; count their word as seen.
    MarkRevealed(PlayerIdx),
}

/// Work the caller must hand back to the game after `delay` has passed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Deferred {
    pub token: CancelToken,
    pub delay: Duration,
    pub action: DeferredAction,
}

/// Deferrals waiting for their deadline, kept in deadline order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: VecDeque<(Instant, Deferred)>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, deferred: Deferred) {
        let deadline = now + deferred.delay;
        let idx = self
            .pending
            .iter()
            .position(|(other, _)| *other > deadline)
            .unwrap_or(self.pending.len());
        self.pending.insert(idx, (deadline, deferred));
    }

    /// Remove and return every deferral whose deadline has passed.
    pub fn pop_due(&mut self, now: Instant) -> Vec<Deferred> {
        let mut due = Vec::new();
        while let Some((deadline, _)) = self.pending.front() {
            if *deadline > now {
                break;
            }
            if let Some((_, deferred)) = self.pending.pop_front() {
                due.push(deferred);
            }
        }
        due
    }

    /// Drop deferrals cancelled by a phase change.
    pub fn prune(&mut self, current: Epoch) {
        self.pending
            .retain(|(_, deferred)| !deferred.token.is_cancelled(current));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

/// Measures how long the group has been discussing.
#[derive(Clone, Copy, Debug)]
pub struct DiscussionClock {
    started_at: Instant,
    stopped: Option<Duration>,
}

impl DiscussionClock {
    #[must_use]
    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    #[must_use]
    pub const fn start_at(started_at: Instant) -> Self {
        Self {
            started_at,
            stopped: None,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    #[must_use]
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        self.stopped
            .unwrap_or_else(|| now.saturating_duration_since(self.started_at))
    }

    /// Freeze the clock, returning the final reading.
    pub fn stop(&mut self) -> Duration {
        self.stop_at(Instant::now())
    }

    pub fn stop_at(&mut self, now: Instant) -> Duration {
        let elapsed = self.elapsed_at(now);
        self.stopped = Some(elapsed);
        elapsed
    }

    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }
}
