// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Rect, Size};

use crate::gesture::{Contacts, GestureState, Mode, PointerEvent, Step};
use crate::pan::pan_step;
use crate::rubber::{RubberBandTimer, ScheduledTick, Settle, TickHandle, settle_step};
use crate::tuning::Tuning;
use crate::viewport::ViewportTransform;
use crate::zoom::zoom_step;

/// What the host has to do after handing an input to the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Update {
    /// The viewport changed; repaint [`GestureController::source_rect`] into
    /// [`GestureController::current_viewport`].
    pub redraw: bool,
    /// Drop the pending callback for this handle.
    pub cancel: Option<TickHandle>,
    /// Call [`GestureController::tick`] with this handle after its delay.
    pub schedule: Option<ScheduledTick>,
}

impl Update {
    /// Nothing to do.
    pub const NONE: Self = Self {
        redraw: false,
        cancel: None,
        schedule: None,
    };

    /// Only a repaint.
    pub const REDRAW: Self = Self {
        redraw: true,
        cancel: None,
        schedule: None,
    };
}

/// Pan, pinch and rubber-band controller for a single image.
///
/// The controller classifies pointer events into [`Mode`]s, routes moves to
/// the pan or zoom step and drives the rubber band after release. It is
/// single threaded: hosts deliver events and ticks one at a time, in order.
///
/// Until both a source extent and a container extent are known, pointer
/// events and ticks are accepted and ignored.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    tuning: Tuning,
    state: GestureState,
    source: Option<Size>,
    container: Option<Size>,
    transform: Option<ViewportTransform>,
    timer: RubberBandTimer,
}

impl GestureController {
    /// Creates an idle controller with default tuning and no content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle controller with the given tuning.
    #[must_use]
    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            tuning,
            ..Self::default()
        }
    }

    /// Returns the tuning in use.
    #[must_use]
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Returns the current gesture state, including its anchor.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` once both extents are known.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.transform.is_some()
    }

    /// The viewport transform, once both extents are known.
    #[must_use]
    pub fn transform(&self) -> Option<&ViewportTransform> {
        self.transform.as_ref()
    }

    /// Destination rectangle to paint the image into.
    #[must_use]
    pub fn current_viewport(&self) -> Option<Rect> {
        self.transform.as_ref().map(ViewportTransform::current)
    }

    /// Region of the image to paint.
    #[must_use]
    pub fn source_rect(&self) -> Option<Rect> {
        self.transform.as_ref().map(ViewportTransform::source_rect)
    }

    /// Sets the natural size of the image.
    ///
    /// Once the container size is known the viewport is reset to the fitted
    /// rest rect. The gesture mode is left alone.
    pub fn load_source(&mut self, natural: Size) -> Update {
        tracing::debug!(?natural, "load source");
        self.source = Some(natural);
        self.rebuild()
    }

    /// Drops the image. The controller stops and cancels any pending tick.
    pub fn clear_source(&mut self) -> Update {
        tracing::debug!("clear source");
        self.source = None;
        self.transform = None;
        let mut update = self.enter(GestureState::Stop);
        update.redraw = true;
        update
    }

    /// Sets the size of the display area and resets the viewport.
    pub fn on_layout(&mut self, container: Size) -> Update {
        tracing::debug!(?container, "layout");
        self.container = Some(container);
        self.rebuild()
    }

    /// Moves the viewport directly, without changing the mode.
    pub fn set_viewport(&mut self, rect: Rect) -> Update {
        match self.transform.as_mut() {
            Some(transform) => {
                if transform.set_current(rect) {
                    Update::REDRAW
                } else {
                    Update::NONE
                }
            }
            None => Update::NONE,
        }
    }

    /// Handles one pointer event.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Update {
        let Some(transform) = self.transform.as_mut() else {
            return Update::NONE;
        };
        let Step { state, redraw } = match (event, self.state) {
            (PointerEvent::Move(contacts), GestureState::Pan { anchor }) => {
                pan_step(anchor, contacts.primary(), transform, &self.tuning)
            }
            (PointerEvent::Move(Contacts::Two(p0, p1)), GestureState::Zoom { distance }) => {
                zoom_step(distance, p0, p1, transform)
            }
            (PointerEvent::Move(_), state) => Step {
                state,
                redraw: false,
            },
            (event, state) => {
                return self.enter(state.after(&event));
            }
        };
        self.state = state;
        Update {
            redraw,
            ..Update::NONE
        }
    }

    /// Runs one rubber-band tick.
    ///
    /// Ticks whose handle is no longer armed are ignored. When the viewport
    /// has settled the controller stops and nothing further is scheduled.
    pub fn tick(&mut self, handle: TickHandle) -> Update {
        if !self.timer.is_armed(handle) {
            tracing::trace!(?handle, "stale tick");
            return Update::NONE;
        }
        let (Some(transform), GestureState::Rubber) = (self.transform.as_mut(), self.state) else {
            self.timer.disarm();
            return Update::NONE;
        };
        match settle_step(transform, &self.tuning) {
            Settle::Moved(_) => Update {
                redraw: true,
                cancel: None,
                schedule: Some(ScheduledTick {
                    handle,
                    delay: self.tuning.tick_period,
                }),
            },
            Settle::Settled => {
                self.timer.disarm();
                tracing::debug!(viewport = ?transform.current(), "rubber band settled");
                self.state = GestureState::Stop;
                Update::NONE
            }
        }
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GestureDebugInfo {
        GestureDebugInfo {
            mode: self.mode(),
            state: self.state,
            source: self.source,
            container: self.container,
            current: self.current_viewport(),
            rest: self.transform.as_ref().map(ViewportTransform::rest),
            bound: self.transform.as_ref().map(ViewportTransform::bound),
            tick: self.timer.armed(),
        }
    }

    fn rebuild(&mut self) -> Update {
        let (Some(source), Some(container)) = (self.source, self.container) else {
            return Update::NONE;
        };
        match self.transform.as_mut() {
            Some(transform) => {
                transform.set_source(source);
                transform.set_container(container);
            }
            None => self.transform = Some(ViewportTransform::new(source, container)),
        }
        Update::REDRAW
    }

    /// Switches state, arming or canceling the rubber-band timer to match.
    fn enter(&mut self, next: GestureState) -> Update {
        tracing::debug!(from = ?self.state.mode(), to = ?next.mode(), "mode");
        self.state = next;
        if next == GestureState::Rubber {
            let (handle, cancel) = self.timer.arm();
            tracing::debug!(?handle, "rubber band armed");
            Update {
                redraw: false,
                cancel,
                schedule: Some(ScheduledTick {
                    handle,
                    delay: Duration::ZERO,
                }),
            }
        } else {
            let cancel = self.timer.disarm();
            if let Some(handle) = cancel {
                tracing::debug!(?handle, "rubber band canceled");
            }
            Update {
                cancel,
                ..Update::NONE
            }
        }
    }
}

/// Debug snapshot of a [`GestureController`].
#[derive(Clone, Copy, Debug)]
pub struct GestureDebugInfo {
    /// Current mode.
    pub mode: Mode,
    /// Current gesture state with anchors.
    pub state: GestureState,
    /// Natural image size, if loaded.
    pub source: Option<Size>,
    /// Container size, if laid out.
    pub container: Option<Size>,
    /// Current viewport, if ready.
    pub current: Option<Rect>,
    /// Rest rect, if ready.
    pub rest: Option<Rect>,
    /// Bound rect, if ready.
    pub bound: Option<Rect>,
    /// Armed rubber-band handle, if any.
    pub tick: Option<TickHandle>,
}
