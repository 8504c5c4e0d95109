// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Default delay between two rubber-band ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(50);

/// Default divisor applied to the remaining overflow on every tick.
///
/// With `3.0` each tick leaves two thirds of the overflow in place.
pub const DEFAULT_DECAY_DIVISOR: f64 = 3.0;

/// Default distance below which an edge counts as settled.
pub const DEFAULT_SETTLE_TOLERANCE: f64 = 1.0;

/// Default distance the viewport must stick out of the container vertically
/// before vertical panning is allowed.
pub const DEFAULT_PAN_OVERFLOW_SLACK: f64 = 1.0;

/// Tunable constants for the gesture controller.
///
/// The defaults reproduce the classic 50 ms, one-third-per-tick snap back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Delay between two rubber-band ticks.
    pub tick_period: Duration,
    /// Each tick moves the viewport by `overflow / decay_divisor`.
    ///
    /// Must be greater than `1.0` for the animation to converge.
    pub decay_divisor: f64,
    /// Edges closer than this to their rest edge are not corrected.
    pub settle_tolerance: f64,
    /// Vertical panning is enabled while `top <= -slack` or
    /// `bottom >= container height + slack`.
    pub pan_overflow_slack: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            decay_divisor: DEFAULT_DECAY_DIVISOR,
            settle_tolerance: DEFAULT_SETTLE_TOLERANCE,
            pan_overflow_slack: DEFAULT_PAN_OVERFLOW_SLACK,
        }
    }
}
