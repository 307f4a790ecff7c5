// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Point, Size, Vec2};
use understory_drag::{
    Bounds, ContainerGeometry, DragConfig, DragEvent, DragEventSink, DragSurface, ElementGeometry,
    FrameToken, GeometrySource, ManualScheduler, Scheduler, ScrollTarget, TimerToken, Velocity,
    compute_bounds, plan_bounce, throw_step,
};

struct BenchHost {
    sched: ManualScheduler,
    moves: usize,
}

impl BenchHost {
    fn new() -> Self {
        Self {
            sched: ManualScheduler::new(),
            moves: 0,
        }
    }
}

impl GeometrySource for BenchHost {
    fn container(&self) -> Option<ContainerGeometry> {
        Some(ContainerGeometry::new(Size::new(480.0, 480.0)))
    }

    fn element(&self) -> ElementGeometry {
        ElementGeometry::new(Size::new(100.0, 100.0))
    }
}

impl Scheduler for BenchHost {
    fn request_frame(&mut self) -> FrameToken {
        self.sched.request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.sched.cancel_frame(token);
    }

    fn start_timer(&mut self, delay: Duration) -> TimerToken {
        self.sched.start_timer(delay)
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        self.sched.cancel_timer(token);
    }
}

impl ScrollTarget for BenchHost {}

impl DragEventSink for BenchHost {
    fn emit(&mut self, event: DragEvent) {
        if matches!(event, DragEvent::Move(_)) {
            self.moves += 1;
        }
    }
}

fn thrown_surface(config: DragConfig, release: Vec2) -> (DragSurface, BenchHost) {
    let mut host = BenchHost::new();
    let mut surface = DragSurface::new(config).expect("valid config");
    surface.enable(&mut host).expect("container present");
    surface.begin(Point::ORIGIN, &mut host).expect("enabled");
    surface
        .move_by(Vec2::new(600.0, 250.0), &mut host)
        .expect("enabled");
    surface.move_by(release, &mut host).expect("enabled");
    surface.end(&mut host).expect("enabled");
    (surface, host)
}

fn pump(surface: &mut DragSurface, host: &mut BenchHost) {
    while host.sched.has_pending_frame() {
        for frame in host.sched.take_frames() {
            surface.on_frame(frame, host);
        }
    }
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_drag");

    let container = ContainerGeometry::new(Size::new(800.0, 600.0))
        .with_padding(Insets::uniform(12.0));
    let element =
        ElementGeometry::new(Size::new(320.0, 240.0)).with_origin(Point::new(-4.0, 10.0));
    group.bench_function("compute_bounds", |b| {
        b.iter(|| {
            compute_bounds(
                black_box(&container),
                black_box(&element),
                black_box(1.5),
                black_box(false),
            )
        });
    });

    let bounds = Bounds::new(0.0, 380.0, 0.0, 380.0);
    group.bench_function("throw_to_rest", |b| {
        b.iter(|| {
            let mut offset = Point::new(300.0, 120.0);
            let mut velocity = Velocity::from_vec2(Vec2::new(60.0, 25.0));
            loop {
                let step = throw_step(offset, velocity, &bounds);
                offset = step.offset;
                velocity = step.velocity;
                if step.finished {
                    break;
                }
            }
            black_box(plan_bounce(offset, velocity, &bounds, Some(50.0)))
        });
    });

    for (name, config) in [
        ("settle_free_throw", DragConfig::default().with_can_throw(true)),
        (
            "settle_snapped_throw",
            DragConfig::default()
                .with_can_throw(true)
                .with_snap_grid_size(50.0),
        ),
        (
            "settle_restricted_throw",
            DragConfig::default()
                .with_can_throw(true)
                .with_restrict(true, false),
        ),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || thrown_surface(config.clone(), Vec2::new(45.0, 20.0)),
                |(mut surface, mut host)| {
                    pump(&mut surface, &mut host);
                    black_box((surface.offset(), host.moves))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
