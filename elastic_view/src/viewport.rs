// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::geometry::fit_rect;
use crate::tuning::Tuning;

/// Destination rectangle of an image inside a fixed container.
///
/// `ViewportTransform` owns four rectangles in container coordinates:
/// - the *rest* rect: the source fitted into the container, aspect preserved;
/// - the *bound* rect: the source at its natural pixel size, at the origin;
/// - the *current* rect: where the image is drawn right now;
/// - the container itself, as a [`Size`].
///
/// Rest and bound are only recomputed when the source or container extent
/// changes, and doing so resets the current rect to the rest rect.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    source: Size,
    container: Size,
    rest: Rect,
    bound: Rect,
    current: Rect,
}

impl ViewportTransform {
    /// Creates a transform showing `source` fitted into `container`.
    ///
    /// Both extents must have a positive width and height.
    #[must_use]
    pub fn new(source: Size, container: Size) -> Self {
        let mut vt = Self {
            source,
            container,
            rest: Rect::ZERO,
            bound: Rect::ZERO,
            current: Rect::ZERO,
        };
        vt.rebuild();
        vt
    }

    /// Replaces the source extent and resets the viewport to the new rest rect.
    pub fn set_source(&mut self, source: Size) {
        self.source = source;
        self.rebuild();
    }

    /// Replaces the container extent and resets the viewport to the new rest rect.
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
        self.rebuild();
    }

    /// Natural size of the image.
    #[must_use]
    pub fn source(&self) -> Size {
        self.source
    }

    /// Size of the display area.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// The aspect-fitted rectangle the viewport settles back to.
    #[must_use]
    pub fn rest(&self) -> Rect {
        self.rest
    }

    /// The source at natural size, used as the zoom-in reference.
    #[must_use]
    pub fn bound(&self) -> Rect {
        self.bound
    }

    /// Region of the source image to paint; always the whole image.
    #[must_use]
    pub fn source_rect(&self) -> Rect {
        self.bound
    }

    /// The rectangle the image is currently drawn into.
    #[must_use]
    pub fn current(&self) -> Rect {
        self.current
    }

    /// Places the viewport at `rect`. Returns `true` if it moved.
    ///
    /// `rect` must have a positive width and height.
    pub fn set_current(&mut self, rect: Rect) -> bool {
        debug_assert!(
            rect.width() > 0.0 && rect.height() > 0.0,
            "viewport must keep a positive extent"
        );
        if self.current == rect {
            return false;
        }
        self.current = rect;
        true
    }

    /// Returns `true` while the viewport sticks out of the container
    /// vertically by at least `slack`.
    #[must_use]
    pub fn overflows_vertically(&self, slack: f64) -> bool {
        self.current.y0 <= -slack || self.current.y1 >= self.container.height + slack
    }

    /// Moves every edge by `delta`. Returns `true` if the viewport moved.
    pub fn translate(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        self.current = self.current + delta;
        true
    }

    /// Pans by a pointer delta.
    ///
    /// The horizontal component always applies. The vertical component only
    /// applies while the image is taller than the view, see
    /// [`ViewportTransform::overflows_vertically`].
    pub fn pan_by(&mut self, delta: Vec2, slack: f64) -> bool {
        let dy = if self.overflows_vertically(slack) {
            delta.y
        } else {
            0.0
        };
        self.translate(Vec2::new(delta.x, dy))
    }

    /// Scales the viewport by `scale` about `centroid`, keeping the centroid
    /// fixed on screen. Returns `true` if the viewport changed.
    ///
    /// Shrinking is only allowed while the viewport is wider than the rest
    /// rect, growing only while it is not wider than the bound rect. Afterwards
    /// a viewport narrower than the rest rect snaps exactly to the rest rect.
    ///
    /// There is no matching ceiling: a single pinch step that starts at or
    /// below the bound width may leave the viewport wider than the bound.
    pub fn scale_about(&mut self, centroid: Point, scale: f64) -> bool {
        let width = self.current.width();
        let shrink = scale < 1.0 && width > self.rest.width();
        let grow = scale > 1.0 && width <= self.bound.width();

        let mut next = self.current;
        if shrink || grow {
            // Each edge moves in proportion to its distance from the centroid.
            next = Rect::new(
                centroid.x - (centroid.x - next.x0) * scale,
                centroid.y - (centroid.y - next.y0) * scale,
                centroid.x + (next.x1 - centroid.x) * scale,
                centroid.y + (next.y1 - centroid.y) * scale,
            );
        }
        if next.width() < self.rest.width() {
            next = self.rest;
        }

        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }

    /// Computes one rubber-band correction towards the rest rect.
    ///
    /// Per axis only one overflowing edge is corrected; bottom wins over top
    /// and right wins over left. A zero vector means the viewport is settled.
    #[must_use]
    pub fn settle_correction(&self, tuning: &Tuning) -> Vec2 {
        let cur = self.current;
        let rest = self.rest;
        let tol = tuning.settle_tolerance;
        let divisor = tuning.decay_divisor;

        let mut correction = Vec2::ZERO;
        if cur.y0 > rest.y0 + tol {
            correction.y = (rest.y0 - cur.y0) / divisor;
        }
        if cur.y1 < rest.y1 - tol {
            correction.y = (rest.y1 - cur.y1) / divisor;
        }
        if cur.x0 > rest.x0 + tol {
            correction.x = (rest.x0 - cur.x0) / divisor;
        }
        if cur.x1 < rest.x1 - tol {
            correction.x = (rest.x1 - cur.x1) / divisor;
        }
        correction
    }

    fn rebuild(&mut self) {
        debug_assert!(
            self.container.width > 0.0 && self.container.height > 0.0,
            "container extent must be positive"
        );
        self.rest = fit_rect(self.source, self.container);
        self.bound = Rect::from_origin_size(Point::ORIGIN, self.source);
        self.current = self.rest;
    }
}
