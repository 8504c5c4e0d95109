// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::gesture::{GestureState, Step};
use crate::tuning::Tuning;
use crate::viewport::ViewportTransform;

/// Applies a single-contact move to the viewport.
///
/// The first move after entering pan mode only records `position`, so a new
/// drag never makes the image jump. Later moves pan by the distance travelled
/// since the previous move; see [`ViewportTransform::pan_by`] for the vertical
/// rule.
pub fn pan_step(
    anchor: Option<Point>,
    position: Point,
    transform: &mut ViewportTransform,
    tuning: &Tuning,
) -> Step {
    let redraw = match anchor {
        Some(previous) => transform.pan_by(position - previous, tuning.pan_overflow_slack),
        None => false,
    };
    if redraw {
        tracing::trace!(viewport = ?transform.current(), "pan");
    }
    Step {
        state: GestureState::Pan {
            anchor: Some(position),
        },
        redraw,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::pan_step;
    use crate::gesture::GestureState;
    use crate::tuning::Tuning;
    use crate::viewport::ViewportTransform;

    fn landscape() -> ViewportTransform {
        ViewportTransform::new(Size::new(1000.0, 500.0), Size::new(500.0, 500.0))
    }

    #[test]
    fn first_move_only_records_anchor() {
        let mut vt = landscape();
        let p = Point::new(100.0, 100.0);
        let step = pan_step(None, p, &mut vt, &Tuning::default());
        assert!(!step.redraw);
        assert_eq!(step.state, GestureState::Pan { anchor: Some(p) });
        assert_eq!(vt.current(), vt.rest());
    }

    #[test]
    fn drag_while_fitting_moves_horizontally_only() {
        let mut vt = landscape();
        let tuning = Tuning::default();
        let step = pan_step(
            Some(Point::new(100.0, 100.0)),
            Point::new(150.0, 130.0),
            &mut vt,
            &tuning,
        );
        assert!(step.redraw);
        assert_eq!(vt.current(), Rect::new(50.0, 125.0, 550.0, 375.0));
        assert_eq!(
            step.state,
            GestureState::Pan {
                anchor: Some(Point::new(150.0, 130.0))
            }
        );
    }

    #[test]
    fn stationary_contact_needs_no_redraw() {
        let mut vt = landscape();
        let p = Point::new(10.0, 10.0);
        let step = pan_step(Some(p), p, &mut vt, &Tuning::default());
        assert!(!step.redraw);
    }
}
