// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: turn pointer movement into offsets and a release velocity.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::new`], passing the offset the
//!    element currently sits at and the pointer position.
//! 2) On each move, feed either an absolute pointer position through
//!    [`DragSession::pointer_delta`] or a delta directly into
//!    [`DragSession::sample`] to get the next offset.
//! 3) Read [`DragSession::velocity`] on release.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag::{Bounds, DragConfig, DragSession};
//!
//! let bounds = Bounds::new(0.0, 400.0, 0.0, 400.0);
//! let config = DragConfig::default().with_restrict(true, false);
//! let mut session = DragSession::new(Point::new(350.0, 0.0), Point::new(10.0, 10.0));
//!
//! let delta = session.pointer_delta(Point::new(110.0, 30.0));
//! assert_eq!(delta, Vec2::new(100.0, 20.0));
//!
//! // x is a hard wall, y may overshoot freely.
//! let offset = session.sample(delta, &bounds, &config);
//! assert_eq!(offset, Point::new(400.0, 20.0));
//! let v = session.velocity().to_vec2();
//! assert!((v - Vec2::new(50.0, 20.0)).hypot() < 1e-9);
//! ```

use kurbo::{Point, Vec2};

use crate::bounds::Bounds;
use crate::config::DragConfig;
use crate::schedule::TimerToken;
use crate::vector::Velocity;

/// Tracks one pointer-down → move → up interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Offset when the session began.
    origin: Point,
    /// Pointer position at the start of the session.
    pointer_start: Point,
    /// Last pointer position fed through [`DragSession::pointer_delta`].
    last_pointer: Point,
    /// Sum of all pointer deltas so far.
    travel: Vec2,
    /// Offset produced by the previous sample.
    previous: Point,
    /// Offset change between the last two samples.
    velocity: Vec2,
    /// Pending pause timer that will zero the velocity.
    pub(crate) debounce: Option<TimerToken>,
}

impl DragSession {
    /// Starts tracking from `origin` with the pointer at `pointer`.
    #[must_use]
    pub fn new(origin: Point, pointer: Point) -> Self {
        Self {
            origin,
            pointer_start: pointer,
            last_pointer: pointer,
            travel: Vec2::ZERO,
            previous: origin,
            velocity: Vec2::ZERO,
            debounce: None,
        }
    }

    /// Offset the session started from.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pointer position at the start of the session.
    #[must_use]
    pub fn pointer_start(&self) -> Point {
        self.pointer_start
    }

    /// Total pointer travel since the session started.
    #[must_use]
    pub fn travel(&self) -> Vec2 {
        self.travel
    }

    /// Records an absolute pointer position and returns the movement since the
    /// previous one.
    pub fn pointer_delta(&mut self, pointer: Point) -> Vec2 {
        let delta = pointer - self.last_pointer;
        self.last_pointer = pointer;
        delta
    }

    /// Applies a pointer delta and returns the new offset.
    ///
    /// Axes restricted by `config` are clamped into `bounds`; the others may
    /// overshoot. The velocity becomes the change from the previous sample.
    pub fn sample(&mut self, delta: Vec2, bounds: &Bounds, config: &DragConfig) -> Point {
        self.travel += delta;
        let offset = self.constrain(self.origin + self.travel, bounds, config);
        self.velocity = offset - self.previous;
        self.previous = offset;
        offset
    }

    /// Re-applies the restrict clamps after the bounds changed mid-drag.
    ///
    /// Returns the new offset if it moved.
    pub fn reconstrain(&mut self, bounds: &Bounds, config: &DragConfig) -> Option<Point> {
        let offset = self.constrain(self.previous, bounds, config);
        if offset == self.previous {
            return None;
        }
        self.previous = offset;
        Some(offset)
    }

    /// Moves the whole session by `by`, e.g. when a zoom shifts the offset
    /// under a held pointer. The velocity is unaffected.
    pub fn shift(&mut self, by: Vec2) {
        self.origin += by;
        self.previous += by;
    }

    /// Velocity estimated from the last two samples, in offset units per move.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        Velocity::from_vec2(self.velocity)
    }

    /// Forgets the velocity, as after the pointer pauses before release.
    pub fn clear_velocity(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    fn constrain(&self, mut offset: Point, bounds: &Bounds, config: &DragConfig) -> Point {
        if config.restrict_horizontal_drag {
            offset.x = bounds.clamp_x(offset.x);
        }
        if config.restrict_vertical_drag {
            offset.y = bounds.clamp_y(offset.y);
        }
        offset
    }
}
