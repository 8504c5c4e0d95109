// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture replay.
//!
//! Replay a drag, a pinch and a release against a 4000x3000 photo shown in a
//! 1080x1920 portrait view, printing every repaint.
//!
//! Run:
//! - `RUST_LOG=elastic_view=debug cargo run -p elastic_view_demos --example gesture_replay`

use std::time::Duration;

use elastic_view::{Contacts, GestureController, PointerEvent};
use elastic_view_demos::ReplayHost;
use kurbo::{Point, Size};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let mut host = ReplayHost::new(
        GestureController::new(),
        Size::new(4000.0, 3000.0),
        Size::new(1080.0, 1920.0),
    );
    let frame_ms = Duration::from_millis(16);

    // Pinch open around the middle of the view.
    host.pointer(PointerEvent::FirstDown);
    host.pointer(PointerEvent::SecondDown);
    for step in 0..=10 {
        let half = 100.0 + 20.0 * f64::from(step);
        host.pointer(PointerEvent::Move(Contacts::Two(
            Point::new(540.0 - half, 960.0),
            Point::new(540.0 + half, 960.0),
        )));
        host.advance(frame_ms);
    }

    // Lift one finger and drag the zoomed image down and to the right.
    host.pointer(PointerEvent::SecondUp);
    for step in 0..=10 {
        let offset = 30.0 * f64::from(step);
        host.pointer(PointerEvent::Move(Contacts::One(Point::new(
            400.0 + offset,
            900.0 + offset,
        ))));
        host.advance(frame_ms);
    }

    // Let go and watch it snap back.
    host.pointer(PointerEvent::FirstUp);
    let settle = host.run_until_idle(Duration::from_secs(10));

    for frame in host.frames() {
        let d = frame.dest;
        println!(
            "{:>6} ms  ({:8.1}, {:8.1}) - ({:8.1}, {:8.1})",
            frame.at.as_millis(),
            d.x0,
            d.y0,
            d.x1,
            d.y1
        );
    }
    println!(
        "settled in {} ms, mode {:?}",
        settle.as_millis(),
        host.view().mode()
    );
}
