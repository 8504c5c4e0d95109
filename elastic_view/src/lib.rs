// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=elastic_view --heading-base-level=0

//! Elastic View: headless pan, pinch-zoom and rubber-band model for one image.
//!
//! This crate decides *where* a large image is drawn inside a fixed view while
//! the user drags it with one finger, pinches it with two, and lets go. It
//! tracks:
//! - The fitted *rest* rect the image settles back to.
//! - The *current* destination rect, mutated by pan and zoom.
//! - The gesture [`Mode`]: stop, pan, zoom or rubber (settling).
//!
//! It does **not** decode or paint images, and it does not own a clock.
//! Callers are expected to:
//! - Report the image's natural size and the view size.
//! - Decode platform pointer input into [`PointerEvent`]s.
//! - Repaint when an [`Update`] asks for it, drawing
//!   [`GestureController::source_rect`] into
//!   [`GestureController::current_viewport`].
//! - Schedule the rubber-band ticks an [`Update`] requests, and drop the ones
//!   it cancels.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use elastic_view::{Contacts, GestureController, Mode, PointerEvent};
//!
//! let mut view = GestureController::new();
//! let _ = view.load_source(Size::new(1000.0, 500.0));
//! let _ = view.on_layout(Size::new(500.0, 500.0));
//! assert_eq!(view.current_viewport(), Some(Rect::new(0.0, 125.0, 500.0, 375.0)));
//!
//! // Drag 60px to the left.
//! let _ = view.on_pointer_event(PointerEvent::FirstDown);
//! let _ = view.on_pointer_event(PointerEvent::Move(Contacts::One(Point::new(200.0, 250.0))));
//! let update = view.on_pointer_event(PointerEvent::Move(Contacts::One(Point::new(140.0, 250.0))));
//! assert!(update.redraw);
//!
//! // Release and run the rubber band until it stops.
//! let mut next = view.on_pointer_event(PointerEvent::FirstUp).schedule;
//! while let Some(tick) = next {
//!     // A real host waits `tick.delay` first.
//!     next = view.tick(tick.handle).schedule;
//! }
//! assert_eq!(view.mode(), Mode::Stop);
//! let settled = view.current_viewport().unwrap();
//! assert!(settled.x0.abs() <= 1.0);
//! ```
//!
//! ## Design notes
//!
//! - All rectangles are in view coordinates, y pointing down.
//! - Zooming out snaps exactly to the rest rect. Zooming in is only refused
//!   once the viewport is already wider than the image's natural size, so a
//!   large pinch step can overshoot it; there is no ceiling clamp.
//! - Vertical drags are ignored while the whole image height is visible.
//! - The controller is single threaded. Hosts with several threads should
//!   funnel events and ticks through one queue.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod geometry;
mod gesture;
mod pan;
mod rubber;
mod tuning;
mod viewport;
mod zoom;

pub use controller::{GestureController, GestureDebugInfo, Update};
pub use geometry::{centroid, distance, fit_rect};
pub use gesture::{Contacts, GestureState, Mode, PointerEvent, Step};
pub use pan::pan_step;
pub use rubber::{RubberBandTimer, ScheduledTick, Settle, TickHandle, settle_step};
pub use tuning::{
    DEFAULT_DECAY_DIVISOR, DEFAULT_PAN_OVERFLOW_SLACK, DEFAULT_SETTLE_TOLERANCE,
    DEFAULT_TICK_PERIOD, Tuning,
};
pub use viewport::ViewportTransform;
pub use zoom::zoom_step;
