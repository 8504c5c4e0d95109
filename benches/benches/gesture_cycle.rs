// Copyright 2025 the Elastic View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use elastic_view::{Contacts, GestureController, PointerEvent, Update};
use kurbo::{Point, Rect, Size};

fn laid_out() -> GestureController {
    let mut view = GestureController::new();
    let _ = view.load_source(Size::new(4000.0, 3000.0));
    let _ = view.on_layout(Size::new(1080.0, 1920.0));
    view
}

fn drain(view: &mut GestureController, mut update: Update) -> usize {
    let mut ticks = 0;
    while let Some(tick) = update.schedule {
        ticks += 1;
        update = view.tick(tick.handle);
    }
    ticks
}

fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/full_cycle");

    // Pan, pinch, release and settle, with an increasing number of move events.
    for moves in [16_usize, 128, 1_024] {
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            b.iter_batched(
                laid_out,
                |mut view| {
                    let _ = view.on_pointer_event(PointerEvent::FirstDown);
                    let _ = view.on_pointer_event(PointerEvent::SecondDown);
                    for i in 0..moves {
                        let half = 100.0 + (i % 64) as f64;
                        let _ = view.on_pointer_event(PointerEvent::Move(Contacts::Two(
                            Point::new(540.0 - half, 960.0),
                            Point::new(540.0 + half, 960.0),
                        )));
                    }
                    let _ = view.on_pointer_event(PointerEvent::SecondUp);
                    for i in 0..moves {
                        let _ = view.on_pointer_event(PointerEvent::Move(Contacts::One(
                            Point::new(400.0 + i as f64, 900.0 + i as f64),
                        )));
                    }
                    let release = view.on_pointer_event(PointerEvent::FirstUp);
                    black_box(drain(&mut view, release));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/settle");

    // Settling cost grows with log(offset).
    for offset in [10.0_f64, 1_000.0, 100_000.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(offset),
            &offset,
            |b, &offset| {
                b.iter_batched(
                    || {
                        let mut view = laid_out();
                        let rest = view.current_viewport().unwrap_or(Rect::ZERO);
                        let _ = view.set_viewport(rest + kurbo::Vec2::new(offset, -offset));
                        view
                    },
                    |mut view| {
                        let release = view.on_pointer_event(PointerEvent::FirstUp);
                        black_box(drain(&mut view, release));
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_full_cycle, bench_settle);
criterion_main!(benches);
