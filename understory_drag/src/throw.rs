// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Momentum after release.
//!
//! Each frame the released velocity loses a fixed fraction to friction and
//! the offset advances by what is left. Travelling outside the bounds costs
//! an extra fraction that same tick, so a throw into a wall dies quickly. The
//! throw ends once the speed drops to [`REST_THRESHOLD`].
//!
//! Axes that are hard walls during the drag stay hard walls during the throw:
//! [`ThrowStep::stop_at_walls`] pins the offset to the wall and drops the
//! velocity along that axis.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag::{Bounds, Velocity, throw_step};
//!
//! let bounds = Bounds::new(0.0, 400.0, 0.0, 400.0);
//! let velocity = Velocity::from_vec2(Vec2::new(40.0, 0.0));
//! let step = throw_step(Point::new(100.0, 0.0), velocity, &bounds);
//! assert_eq!(step.offset, Point::new(134.0, 0.0));
//! assert_eq!(step.velocity.magnitude, 34.0);
//! assert!(!step.finished);
//! ```

use kurbo::Point;

use crate::bounds::Bounds;
use crate::vector::Velocity;

/// Fraction of speed kept per frame.
pub const FRICTION: f64 = 0.85;

/// Extra fraction of speed kept on frames that end outside the bounds.
pub const WALL_PENALTY: f64 = 0.75;

/// Speed at or below which a throw or bounce is considered at rest.
pub const REST_THRESHOLD: f64 = 0.5;

/// Result of one throw frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrowStep {
    /// Offset after this frame.
    pub offset: Point,
    /// Velocity carried into the next frame, or handed to the bounce.
    pub velocity: Velocity,
    /// `true` when the throw has come to rest.
    pub finished: bool,
}

/// Advances a throw by one frame.
#[must_use]
pub fn throw_step(offset: Point, velocity: Velocity, bounds: &Bounds) -> ThrowStep {
    let mut velocity = velocity.scaled(FRICTION);
    let offset = offset + velocity.to_vec2();
    if !bounds.contains(offset) {
        velocity = velocity.scaled(WALL_PENALTY);
    }
    let finished = is_at_rest(velocity);
    ThrowStep {
        offset,
        velocity,
        finished,
    }
}

impl ThrowStep {
    /// Holds the restricted axes inside `bounds`.
    ///
    /// A restricted axis that would leave the bounds stops on the wall and
    /// loses its velocity component; the other axis keeps coasting.
    #[must_use]
    pub fn stop_at_walls(mut self, bounds: &Bounds, horizontal: bool, vertical: bool) -> Self {
        let mut velocity = self.velocity.to_vec2();
        let mut hit = false;
        if horizontal {
            let x = bounds.clamp_x(self.offset.x);
            if x != self.offset.x {
                self.offset.x = x;
                velocity.x = 0.0;
                hit = true;
            }
        }
        if vertical {
            let y = bounds.clamp_y(self.offset.y);
            if y != self.offset.y {
                self.offset.y = y;
                velocity.y = 0.0;
                hit = true;
            }
        }
        if hit {
            self.velocity = Velocity::from_vec2(velocity);
            self.finished = self.finished || is_at_rest(self.velocity);
        }
        self
    }
}

fn is_at_rest(velocity: Velocity) -> bool {
    velocity.magnitude <= REST_THRESHOLD || !velocity.magnitude.is_finite()
}
