//! Timelock record and its sequence gate
//!
//! The record is current state, never history: every accepted `lock` or
//! `set_timelock` overwrites it in place.

use crate::error::{TimelockError, TimelockResult};
use serde::{Deserialize, Serialize};
use shared_types::{DrawId, Timestamp};

/// The single `(draw_id, timestamp)` pair a timelock holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timelock {
    /// Currently locked draw.
    pub draw_id: DrawId,
    /// Time at which the locked draw unlocks.
    pub timestamp: Timestamp,
}

impl Timelock {
    #[must_use]
    pub const fn new(draw_id: DrawId, timestamp: Timestamp) -> Self {
        Self { draw_id, timestamp }
    }

    /// True once `now` has reached the unlock time (inclusive).
    #[must_use]
    pub fn has_elapsed(&self, now: Timestamp) -> bool {
        now >= self.timestamp
    }

    /// Phase of the record at `now`.
    #[must_use]
    pub fn phase(&self, now: Timestamp) -> TimelockPhase {
        if self.has_elapsed(now) {
            TimelockPhase::Elapsed
        } else {
            TimelockPhase::Armed {
                remaining_secs: self.timestamp - now,
            }
        }
    }
}

/// Observable phase of the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelockPhase {
    /// The locked draw is still guarded.
    Armed { remaining_secs: u64 },
    /// The locked draw is settled; nothing is guarded.
    Elapsed,
}

/// Record plus the sequence bookkeeping around it.
///
/// `initialized` distinguishes the pristine `(0, 0)` record from one that
/// genuinely holds draw `0`. Pristine state accepts draw `0` as well as the
/// regular successor `1`, so draw `0` is lockable exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimelockState {
    record: Timelock,
    initialized: bool,
}

impl TimelockState {
    /// Pristine state: record `(0, 0)`, nothing locked yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record(&self) -> Timelock {
        self.record
    }

    /// True until the first `lock` or `overwrite`.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        !self.initialized
    }

    /// Successor of the stored draw id.
    #[must_use]
    pub fn next_draw_id(&self) -> u64 {
        u64::from(self.record.draw_id) + 1
    }

    /// True if `lock` would accept `draw_id`.
    #[must_use]
    pub fn accepts(&self, draw_id: DrawId) -> bool {
        u64::from(draw_id) == self.next_draw_id() || (!self.initialized && draw_id == 0)
    }

    /// Lock `draw_id` until `unlock_timestamp`.
    ///
    /// Check and write happen on the same `&mut self`, so the caller's lock
    /// over the state makes this a compare-and-swap. No elapsed check is made
    /// here: the previous draw may still be armed.
    pub fn lock(&mut self, draw_id: DrawId, unlock_timestamp: Timestamp) -> TimelockResult<()> {
        if !self.accepts(draw_id) {
            return Err(TimelockError::SequenceOutOfOrder {
                expected: self.next_draw_id(),
                requested: draw_id,
            });
        }

        self.record = Timelock::new(draw_id, unlock_timestamp);
        self.initialized = true;
        Ok(())
    }

    /// Replace the record without any sequence check.
    pub fn overwrite(&mut self, record: Timelock) {
        self.record = record;
        self.initialized = true;
    }

    /// All-or-nothing guard for a calculation over `draw_ids`.
    ///
    /// Fails only if the currently locked draw is requested while still
    /// armed. Every other draw id passes regardless of time.
    pub fn guard(&self, draw_ids: &[DrawId], now: Timestamp) -> TimelockResult<()> {
        let locked = self.record;
        if !locked.has_elapsed(now) && draw_ids.contains(&locked.draw_id) {
            return Err(TimelockError::TimelockNotExpired {
                draw_id: locked.draw_id,
                unlock_timestamp: locked.timestamp,
            });
        }
        Ok(())
    }
}
