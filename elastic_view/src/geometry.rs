// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometric helpers shared by the handlers.

use kurbo::{Point, Rect, Size};

/// Fits `source` inside a `bounds` sized box, preserving its aspect ratio.
///
/// The uniform scale is the smaller of the two axis ratios, and the result is
/// centered inside `(0, 0)..bounds`. Both sizes must have a positive width
/// and height.
#[must_use]
pub fn fit_rect(source: Size, bounds: Size) -> Rect {
    debug_assert!(
        source.width > 0.0 && source.height > 0.0,
        "source extent must be positive"
    );
    let sx = bounds.width / source.width;
    let sy = bounds.height / source.height;
    let scale = sx.min(sy);
    let fitted = source * scale;
    let origin = Point::new(
        (bounds.width - fitted.width) / 2.0,
        (bounds.height - fitted.height) / 2.0,
    );
    Rect::from_origin_size(origin, fitted)
}

/// Euclidean distance between two contacts.
#[must_use]
pub fn distance(p0: Point, p1: Point) -> f64 {
    p0.distance(p1)
}

/// Midpoint of two contacts.
#[must_use]
pub fn centroid(p0: Point, p1: Point) -> Point {
    p0.midpoint(p1)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{centroid, distance, fit_rect};

    #[test]
    fn fit_wide_source_into_square_centers_vertically() {
        let rect = fit_rect(Size::new(1000.0, 500.0), Size::new(500.0, 500.0));
        assert_eq!(rect, Rect::new(0.0, 125.0, 500.0, 375.0));
    }

    #[test]
    fn fit_tall_source_centers_horizontally() {
        let rect = fit_rect(Size::new(300.0, 600.0), Size::new(400.0, 300.0));
        assert_eq!(rect, Rect::new(125.0, 0.0, 275.0, 300.0));
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        let sources = [
            Size::new(4032.0, 3024.0),
            Size::new(17.0, 1234.0),
            Size::new(1.0, 1.0),
            Size::new(333.3, 77.7),
        ];
        let bounds = [Size::new(1080.0, 1920.0), Size::new(640.0, 480.0)];
        for source in sources {
            for bound in bounds {
                let rect = fit_rect(source, bound);
                let want = source.width / source.height;
                let got = rect.width() / rect.height();
                assert!((want - got).abs() < 1e-9 * want.max(1.0));
                // Centered within the bounds.
                assert!((rect.center().x - bound.width / 2.0).abs() < 1e-9);
                assert!((rect.center().y - bound.height / 2.0).abs() < 1e-9);
                // One axis touches the bounds, the other fits inside.
                assert!(rect.width() <= bound.width + 1e-9);
                assert!(rect.height() <= bound.height + 1e-9);
            }
        }
    }

    #[test]
    fn distance_and_centroid() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(400.0, 500.0);
        assert_eq!(distance(a, b), 500.0);
        assert_eq!(distance(b, a), 500.0);
        assert_eq!(centroid(a, b), Point::new(250.0, 300.0));
    }
}
