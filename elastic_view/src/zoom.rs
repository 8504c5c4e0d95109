// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::geometry::{centroid, distance};
use crate::gesture::{GestureState, Step};
use crate::viewport::ViewportTransform;

/// Applies a two-contact move to the viewport.
///
/// `previous` is the contact distance seen on the last move, or `0.0` right
/// after entering zoom mode. With no previous distance only the new distance
/// is recorded. Otherwise the viewport is scaled by `new / previous` about the
/// pinch centroid, subject to the limits of [`ViewportTransform::scale_about`].
pub fn zoom_step(
    previous: f64,
    p0: Point,
    p1: Point,
    transform: &mut ViewportTransform,
) -> Step {
    let current = distance(p0, p1);
    let mut redraw = false;
    if previous != 0.0 {
        let scale = current / previous;
        redraw = transform.scale_about(centroid(p0, p1), scale);
        if redraw {
            tracing::trace!(scale, viewport = ?transform.current(), "pinch");
        }
    }
    Step {
        state: GestureState::Zoom { distance: current },
        redraw,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::zoom_step;
    use crate::gesture::GestureState;
    use crate::viewport::ViewportTransform;

    fn landscape() -> ViewportTransform {
        ViewportTransform::new(Size::new(1000.0, 500.0), Size::new(500.0, 500.0))
    }

    #[test]
    fn first_pinch_move_records_distance() {
        let mut vt = landscape();
        let step = zoom_step(0.0, Point::new(200.0, 250.0), Point::new(300.0, 250.0), &mut vt);
        assert!(!step.redraw);
        assert_eq!(step.state, GestureState::Zoom { distance: 100.0 });
        assert_eq!(vt.current(), vt.rest());
    }

    #[test]
    fn spreading_doubles_about_centroid() {
        let mut vt = landscape();
        let step = zoom_step(100.0, Point::new(150.0, 250.0), Point::new(350.0, 250.0), &mut vt);
        assert!(step.redraw);
        assert_eq!(step.state, GestureState::Zoom { distance: 200.0 });
        assert_eq!(vt.current(), Rect::new(-250.0, 0.0, 750.0, 500.0));
    }

    #[test]
    fn refused_scale_still_updates_distance() {
        let mut vt = landscape();
        // Pinching in at rest is refused.
        let step = zoom_step(200.0, Point::new(200.0, 250.0), Point::new(300.0, 250.0), &mut vt);
        assert!(!step.redraw);
        assert_eq!(step.state, GestureState::Zoom { distance: 100.0 });
        assert_eq!(vt.current(), vt.rest());
    }
}
