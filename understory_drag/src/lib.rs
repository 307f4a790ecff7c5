// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command,
// then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: a headless drag surface with momentum and elastic bounds.
//!
//! This crate models the behavior of an element that a pointer can drag
//! around inside a bounded container. It focuses on:
//! - Bounds: the rectangle of offsets that keep the element inside its
//!   container, including oversized elements and scaled vector shapes.
//! - Drag sessions: pointer deltas to offsets, with optional hard walls per
//!   axis and a release velocity estimate.
//! - Throws: per-frame friction on the released velocity, with an extra
//!   penalty while travelling outside the bounds.
//! - Bounces: an elastic correction to the nearest valid, grid-aligned offset
//!   that continues the throw's trajectory where it can.
//! - Zoom: rescaling around a focal point within a scale range.
//! - Scroll coupling: mapping the offset onto a container's native scroll
//!   position plus an overhang.
//!
//! It does **not** own any element, timer or event loop. Hosts are expected
//! to:
//! - Implement [`DragHost`] to answer geometry queries, register frames and
//!   timers, and receive [`DragEvent`]s.
//! - Feed pointer input into [`DragSurface::begin`], [`DragSurface::move_by`]
//!   (or [`DragSurface::move_to`]) and [`DragSurface::end`].
//! - Deliver requested frames to [`DragSurface::on_frame`], expired timers to
//!   [`DragSurface::on_timer`], and size changes to [`DragSurface::on_resize`].
//! - Position the element from the offsets carried by [`DragEvent::Move`].
//! - Release the surface with [`DragSurface::teardown`] when the element goes
//!   away, so no frame or timer registration outlives it.
//!
//! The simulation pieces are also exposed as plain functions
//! ([`compute_bounds`], [`throw_step`], [`plan_bounce`], [`rescale_offset`])
//! for hosts that want to drive them directly.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_drag::{
//!     ContainerGeometry, DragConfig, DragEvent, DragEventSink, DragSurface, ElementGeometry,
//!     FrameToken, GeometrySource, ManualScheduler, Scheduler, ScrollTarget, TimerToken,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     sched: ManualScheduler,
//!     events: Vec<DragEvent>,
//! }
//!
//! impl GeometrySource for Host {
//!     fn container(&self) -> Option<ContainerGeometry> {
//!         Some(ContainerGeometry::new(Size::new(500.0, 500.0)))
//!     }
//!     fn element(&self) -> ElementGeometry {
//!         ElementGeometry::new(Size::new(100.0, 100.0))
//!     }
//! }
//!
//! impl Scheduler for Host {
//!     fn request_frame(&mut self) -> FrameToken { self.sched.request_frame() }
//!     fn cancel_frame(&mut self, token: FrameToken) { self.sched.cancel_frame(token) }
//!     fn start_timer(&mut self, delay: core::time::Duration) -> TimerToken {
//!         self.sched.start_timer(delay)
//!     }
//!     fn cancel_timer(&mut self, token: TimerToken) { self.sched.cancel_timer(token) }
//! }
//!
//! impl ScrollTarget for Host {}
//!
//! impl DragEventSink for Host {
//!     fn emit(&mut self, event: DragEvent) { self.events.push(event) }
//! }
//!
//! let mut host = Host::default();
//! let mut surface = DragSurface::new(DragConfig::default().with_can_throw(true)).unwrap();
//! surface.enable(&mut host).unwrap();
//!
//! // Drag past the right edge and let go while still moving.
//! surface.begin(Point::ORIGIN, &mut host).unwrap();
//! surface.move_by(Vec2::new(610.0, 0.0), &mut host).unwrap();
//! surface.move_by(Vec2::new(40.0, 0.0), &mut host).unwrap();
//! surface.end(&mut host).unwrap();
//! assert!(surface.is_animating());
//!
//! // Pump frames until the throw and the bounce have both finished.
//! while host.sched.has_pending_frame() {
//!     for frame in host.sched.take_frames() {
//!         surface.on_frame(frame, &mut host);
//!     }
//! }
//!
//! assert_eq!(surface.offset(), Point::new(400.0, 0.0));
//! assert_eq!(host.events.last(), Some(&DragEvent::End(Point::new(400.0, 0.0))));
//! ```
//!
//! ## Design notes
//!
//! - All mutable state of one element (offset, bounds, phase, scale) lives in
//!   one [`DragSurface`]. The simulators are pure functions over it.
//! - The interaction state is a single [`Phase`] enum; a throw and a bounce
//!   can never run at the same time.
//! - Animation loops are frame-at-a-time through [`Scheduler`]. Cancelling a
//!   loop withdraws its frame, and stale frames are ignored, so a
//!   [`ManualScheduler`] can step everything deterministically in tests.
//! - Out-of-bounds offsets are an ordinary state, not an error. With no
//!   momentum and no restricted axis a drag may come to rest outside the
//!   bounds; every other configuration settles inside.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounce;
mod bounds;
mod config;
mod error;
mod host;
mod phase;
mod schedule;
mod scroll;
mod session;
mod surface;
mod throw;
mod vector;
mod zoom;

pub use bounce::{BouncePlan, ELASTICITY, bounce_target, plan_bounce};
pub use bounds::{Bounds, ContainerGeometry, Edge, ElementGeometry, Violation, compute_bounds};
pub use config::DragConfig;
pub use error::DragError;
pub use host::{DragEvent, DragEventSink, DragHost, GeometrySource, ScrollTarget};
pub use phase::{Phase, ThrowState};
pub use schedule::{FrameToken, ManualScheduler, Scheduler, TimerToken};
pub use scroll::{ScrollSplit, origin_from_scroll};
pub use session::DragSession;
pub use surface::{DragSurface, VELOCITY_DEBOUNCE};
pub use throw::{FRICTION, REST_THRESHOLD, ThrowStep, WALL_PENALTY, throw_step};
pub use vector::Velocity;
pub use zoom::{ScaleLimits, ScaleMode, rescale_offset};
