// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless host for `elastic_view` demos.
//!
//! [`ReplayHost`] plays the part of a windowing toolkit: it feeds decoded
//! pointer events to a [`GestureController`], keeps the single rubber-band
//! timer on a simulated clock, and records a [`Frame`] for every redraw
//! request instead of painting.

use std::time::Duration;

use elastic_view::{GestureController, PointerEvent, TickHandle, Update};
use kurbo::{Rect, Size};

/// One recorded repaint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Simulated time of the repaint.
    pub at: Duration,
    /// Image region that would be painted.
    pub source: Rect,
    /// Destination rectangle in the view.
    pub dest: Rect,
}

/// Drives a [`GestureController`] from a scripted input stream.
#[derive(Debug)]
pub struct ReplayHost {
    view: GestureController,
    now: Duration,
    pending: Option<(Duration, TickHandle)>,
    frames: Vec<Frame>,
}

impl ReplayHost {
    /// Wraps a controller and lays it out with an image of `natural` size in a
    /// `container` sized view.
    pub fn new(mut view: GestureController, natural: Size, container: Size) -> Self {
        let loaded = view.load_source(natural);
        let laid_out = view.on_layout(container);
        let mut host = Self {
            view,
            now: Duration::ZERO,
            pending: None,
            frames: Vec::new(),
        };
        host.apply(loaded);
        host.apply(laid_out);
        host
    }

    /// The wrapped controller.
    pub fn view(&self) -> &GestureController {
        &self.view
    }

    /// Simulated time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Repaints recorded so far.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns `true` while a tick is waiting on the clock.
    pub fn has_pending_tick(&self) -> bool {
        self.pending.is_some()
    }

    /// Delivers a pointer event at the current time.
    pub fn pointer(&mut self, event: PointerEvent) {
        let update = self.view.on_pointer_event(event);
        self.apply(update);
    }

    /// Advances the clock by `dt`, running every tick that falls due.
    pub fn advance(&mut self, dt: Duration) {
        let end = self.now + dt;
        while let Some((due, handle)) = self.pending {
            if due > end {
                break;
            }
            self.pending = None;
            self.now = due;
            let update = self.view.tick(handle);
            self.apply(update);
        }
        self.now = end;
    }

    /// Runs ticks until none are pending, returning the elapsed time.
    ///
    /// Gives up after `limit` of simulated time.
    pub fn run_until_idle(&mut self, limit: Duration) -> Duration {
        let start = self.now;
        while let Some((due, _)) = self.pending {
            if due - start > limit {
                tracing::warn!(?limit, "rubber band still running");
                break;
            }
            self.advance(due - self.now);
        }
        self.now - start
    }

    fn apply(&mut self, update: Update) {
        let canceled = update.cancel;
        if self.pending.is_some_and(|(_, pending)| Some(pending) == canceled) {
            self.pending = None;
        }
        if let Some(tick) = update.schedule {
            self.pending = Some((self.now + tick.delay, tick.handle));
        }
        if update.redraw
            && let (Some(source), Some(dest)) =
                (self.view.source_rect(), self.view.current_viewport())
        {
            tracing::info!(at = ?self.now, ?dest, "paint");
            self.frames.push(Frame {
                at: self.now,
                source,
                dest,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use elastic_view::{Contacts, GestureController, Mode, PointerEvent};
    use kurbo::{Point, Rect, Size};

    use super::ReplayHost;

    fn host() -> ReplayHost {
        ReplayHost::new(
            GestureController::new(),
            Size::new(1000.0, 500.0),
            Size::new(500.0, 500.0),
        )
    }

    fn drag_left(host: &mut ReplayHost, px: f64) {
        host.pointer(PointerEvent::FirstDown);
        host.pointer(PointerEvent::Move(Contacts::One(Point::new(300.0, 250.0))));
        host.pointer(PointerEvent::Move(Contacts::One(Point::new(300.0 - px, 250.0))));
    }

    #[test]
    fn layout_paints_rest_rect() {
        let host = host();
        let last = host.frames().last().unwrap();
        assert_eq!(last.dest, Rect::new(0.0, 125.0, 500.0, 375.0));
        assert_eq!(last.source, Rect::new(0.0, 0.0, 1000.0, 500.0));
    }

    #[test]
    fn release_settles_on_the_tick_clock() {
        let mut host = host();
        drag_left(&mut host, 60.0);
        host.pointer(PointerEvent::FirstUp);
        assert!(host.has_pending_tick());

        let elapsed = host.run_until_idle(Duration::from_secs(5));
        assert_eq!(host.view().mode(), Mode::Stop);
        // First tick runs immediately, then 11 more at 50 ms.
        assert_eq!(elapsed, Duration::from_millis(550));
        assert!(!host.has_pending_tick());
    }

    #[test]
    fn touch_during_settle_drops_pending_tick() {
        let mut host = host();
        drag_left(&mut host, 60.0);
        host.pointer(PointerEvent::FirstUp);
        host.advance(Duration::from_millis(120));
        assert!(host.has_pending_tick());

        host.pointer(PointerEvent::FirstDown);
        assert!(!host.has_pending_tick());
        let frames = host.frames().len();
        host.advance(Duration::from_secs(1));
        assert_eq!(host.frames().len(), frames);
        assert_eq!(host.view().mode(), Mode::Pan);
    }
}
