// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band settling and the timer that drives it.
//!
//! The controller does not own a clock. When it needs a tick it hands the
//! host a [`ScheduledTick`]; the host calls back with the tick's
//! [`TickHandle`] after the requested delay. Canceling disarms the handle, so
//! a callback that was already in flight is recognized as stale and dropped.

use core::time::Duration;

use kurbo::Vec2;

use crate::tuning::Tuning;
use crate::viewport::ViewportTransform;

/// Identifies one armed rubber-band timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

/// A request to call back into the controller after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTick {
    /// Handle to pass back to [`GestureController::tick`](crate::GestureController::tick).
    pub handle: TickHandle,
    /// How long to wait before the tick.
    pub delay: Duration,
}

/// Cancellable tick timer owned by the controller.
///
/// At most one handle is armed at a time; arming again replaces it.
#[derive(Clone, Debug, Default)]
pub struct RubberBandTimer {
    armed: Option<TickHandle>,
    next_id: u64,
}

impl RubberBandTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a fresh handle, returning it with the handle it replaced, if any.
    pub fn arm(&mut self) -> (TickHandle, Option<TickHandle>) {
        let handle = TickHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let replaced = self.armed.replace(handle);
        (handle, replaced)
    }

    /// Disarms the timer, returning the handle that was armed.
    pub fn disarm(&mut self) -> Option<TickHandle> {
        self.armed.take()
    }

    /// The currently armed handle.
    #[must_use]
    pub fn armed(&self) -> Option<TickHandle> {
        self.armed
    }

    /// Returns `true` if `handle` is the armed one.
    #[must_use]
    pub fn is_armed(&self, handle: TickHandle) -> bool {
        self.armed == Some(handle)
    }
}

/// Outcome of one rubber-band tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Settle {
    /// The viewport was translated by the given correction.
    Moved(Vec2),
    /// No edge overflows the rest rect by more than the tolerance.
    Settled,
}

/// Nudges the viewport towards its rest rect by one tick.
///
/// See [`ViewportTransform::settle_correction`] for the correction rule.
pub fn settle_step(transform: &mut ViewportTransform, tuning: &Tuning) -> Settle {
    let correction = transform.settle_correction(tuning);
    if correction == Vec2::ZERO {
        return Settle::Settled;
    }
    transform.translate(correction);
    tracing::trace!(?correction, viewport = ?transform.current(), "rubber band");
    Settle::Moved(correction)
}
