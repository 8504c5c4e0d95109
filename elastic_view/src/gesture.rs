// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Pointer contacts reported with a move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Contacts {
    /// A single contact.
    One(Point),
    /// Two simultaneous contacts.
    Two(Point, Point),
}

impl Contacts {
    /// Decodes a host pointer list.
    ///
    /// Returns `None` for an empty list. Contacts past the second are ignored.
    #[must_use]
    pub fn from_slice(points: &[Point]) -> Option<Self> {
        match points {
            [] => None,
            [p] => Some(Self::One(*p)),
            [p0, p1, ..] => Some(Self::Two(*p0, *p1)),
        }
    }

    /// The first contact.
    #[must_use]
    pub fn primary(&self) -> Point {
        match *self {
            Self::One(p) | Self::Two(p, _) => p,
        }
    }
}

/// A pointer event, already decoded by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The first contact went down.
    FirstDown,
    /// The last contact went up.
    FirstUp,
    /// A second contact went down while one was already down.
    SecondDown,
    /// One of two contacts went up.
    SecondUp,
    /// One or more contacts moved.
    Move(Contacts),
}

/// Gesture state, with the anchor data each mode needs.
///
/// Anchors live inside the variant so that every mode change starts
/// from a cleared anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// Idle.
    #[default]
    Stop,
    /// One contact is dragging the image.
    Pan {
        /// Last seen contact position, `None` until the first move.
        anchor: Option<Point>,
    },
    /// Two contacts are pinching.
    Zoom {
        /// Last seen distance between the contacts, `0.0` until the first move.
        distance: f64,
    },
    /// All contacts released; the rubber band is settling the viewport.
    Rubber,
}

impl GestureState {
    /// A fresh pan with no anchor.
    pub const PAN: Self = Self::Pan { anchor: None };
    /// A fresh pinch with no recorded distance.
    pub const ZOOM: Self = Self::Zoom { distance: 0.0 };

    /// The mode without its anchor data.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Stop => Mode::Stop,
            Self::Pan { .. } => Mode::Pan,
            Self::Zoom { .. } => Mode::Zoom,
            Self::Rubber => Mode::Rubber,
        }
    }

    /// State entered after `event`, with a cleared anchor.
    ///
    /// Moves keep the current state; every other event kind maps to a fixed
    /// next mode regardless of the current one.
    #[must_use]
    pub fn after(self, event: &PointerEvent) -> Self {
        match event {
            PointerEvent::FirstDown | PointerEvent::SecondUp => Self::PAN,
            PointerEvent::SecondDown => Self::ZOOM,
            PointerEvent::FirstUp => Self::Rubber,
            PointerEvent::Move(_) => self,
        }
    }
}

/// Which gesture is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Idle.
    #[default]
    Stop,
    /// Single contact drag.
    Pan,
    /// Two contact pinch.
    Zoom,
    /// Elastic snap back after release.
    Rubber,
}

/// Result of a handler: the next gesture state and whether to redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// State to continue with.
    pub state: GestureState,
    /// `true` if the viewport changed.
    pub redraw: bool,
}
