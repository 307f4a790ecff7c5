// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elastic settle from an out-of-bounds offset to the nearest valid point.
//!
//! The target depends on how the offset violates the bounds:
//!
//! - inside: the offset itself;
//! - beyond one edge with no residual velocity: the perpendicular projection
//!   onto that edge;
//! - beyond one edge while still moving: the point on that edge reached by
//!   continuing along the velocity mirrored off the edge (`π − angle` for
//!   left/right, `−angle` for top/bottom), so the correction follows the
//!   throw instead of snapping sideways;
//! - beyond two edges: the matching corner.
//!
//! The target is then clamped into the bounds and snapped to the grid. The
//! animation shrinks the remaining correction by [`ELASTICITY`] per frame
//! and lands exactly on the target once it is within [`REST_THRESHOLD`].
//!
//! ```
//! use kurbo::Point;
//! use understory_drag::{Bounds, Velocity, plan_bounce};
//!
//! let bounds = Bounds::new(0.0, 400.0, 0.0, 400.0);
//! let mut plan = plan_bounce(Point::new(650.0, 0.0), Velocity::ZERO, &bounds, None);
//! assert_eq!(plan.target(), Point::new(400.0, 0.0));
//!
//! while !plan.step() {
//!     assert!(plan.offset().x > 400.0);
//! }
//! assert_eq!(plan.offset(), Point::new(400.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

use crate::bounds::{Bounds, Edge};
use crate::throw::REST_THRESHOLD;
use crate::vector::Velocity;

/// Fraction of the remaining correction kept per bounce frame.
pub const ELASTICITY: f64 = 0.75;

/// Direction components below this are treated as parallel to an edge.
const PARALLEL_EPSILON: f64 = 1e-6;

/// An in-flight correction toward a settled offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BouncePlan {
    target: Point,
    correction: Vec2,
}

impl BouncePlan {
    /// Where the bounce will come to rest.
    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// The correction still to travel, pointing toward the target.
    #[must_use]
    pub fn remaining(&self) -> Velocity {
        Velocity::from_vec2(self.correction)
    }

    /// Current offset along the correction.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.target - self.correction
    }

    /// Returns `true` once the offset sits exactly on the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.correction == Vec2::ZERO
    }

    /// Advances one frame. Returns `true` when the bounce has landed.
    pub fn step(&mut self) -> bool {
        self.correction *= ELASTICITY;
        let distance = self.correction.hypot();
        if distance <= REST_THRESHOLD || !distance.is_finite() {
            self.correction = Vec2::ZERO;
        }
        self.is_settled()
    }
}

/// Plans the correction from `offset` given the residual throw `velocity`.
#[must_use]
pub fn plan_bounce(
    offset: Point,
    velocity: Velocity,
    bounds: &Bounds,
    snap_grid: Option<f64>,
) -> BouncePlan {
    let target = bounce_target(offset, velocity, bounds, snap_grid);
    BouncePlan {
        target,
        correction: target - offset,
    }
}

/// The settled, grid-aligned offset a bounce from `offset` heads for.
///
/// The result always lies inside `bounds`.
#[must_use]
pub fn bounce_target(
    offset: Point,
    velocity: Velocity,
    bounds: &Bounds,
    snap_grid: Option<f64>,
) -> Point {
    let violation = bounds.violation(offset);
    let raw = match (violation.horizontal, violation.vertical) {
        (Some(h), Some(v)) => Point::new(bounds.edge(h), bounds.edge(v)),
        (Some(edge), None) | (None, Some(edge)) => along_mirrored(offset, velocity, edge, bounds)
            .unwrap_or_else(|| project(offset, edge, bounds)),
        (None, None) => offset,
    };
    let clamped = bounds.clamp(raw);
    match snap_grid {
        Some(grid) => bounds.snap(clamped, grid),
        None => clamped,
    }
}

fn project(offset: Point, edge: Edge, bounds: &Bounds) -> Point {
    match edge {
        Edge::Left | Edge::Right => Point::new(bounds.edge(edge), offset.y),
        Edge::Top | Edge::Bottom => Point::new(offset.x, bounds.edge(edge)),
    }
}

/// Point on `edge` reached by travelling from `offset` along the velocity
/// mirrored off that edge, or `None` without a usable direction.
fn along_mirrored(offset: Point, velocity: Velocity, edge: Edge, bounds: &Bounds) -> Option<Point> {
    if velocity.is_zero() {
        return None;
    }
    let v = velocity.to_vec2();
    let line = bounds.edge(edge);
    match edge {
        Edge::Left | Edge::Right => {
            let dir = Vec2::new(-v.x, v.y);
            if dir.x.abs() < PARALLEL_EPSILON {
                return None;
            }
            let t = (line - offset.x) / dir.x;
            Some(Point::new(line, offset.y + t * dir.y))
        }
        Edge::Top | Edge::Bottom => {
            let dir = Vec2::new(v.x, -v.y);
            if dir.y.abs() < PARALLEL_EPSILON {
                return None;
            }
            let t = (line - offset.y) / dir.y;
            Some(Point::new(offset.x + t * dir.x, line))
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ELASTICITY, bounce_target, plan_bounce};
    use crate::bounds::Bounds;
    use crate::vector::Velocity;

    const BOUNDS: Bounds = Bounds::new(0.0, 400.0, 0.0, 400.0);

    #[test]
    fn inside_offset_is_its_own_target() {
        let p = Point::new(123.0, 45.0);
        assert_eq!(bounce_target(p, Velocity::ZERO, &BOUNDS, None), p);
        assert_eq!(
            bounce_target(p, Velocity::ZERO, &BOUNDS, Some(50.0)),
            Point::new(100.0, 50.0)
        );
    }

    #[test]
    fn single_edge_without_velocity_projects_perpendicular() {
        let target = bounce_target(Point::new(120.0, -80.0), Velocity::ZERO, &BOUNDS, None);
        assert_eq!(target, Point::new(120.0, 0.0));
    }

    #[test]
    fn single_edge_with_velocity_continues_trajectory() {
        // Thrown right and down past the right edge: the mirrored direction
        // heads left while still travelling down.
        let v = Velocity::from_vec2(Vec2::new(2.0, 1.0));
        let target = bounce_target(Point::new(500.0, 100.0), v, &BOUNDS, None);
        assert!((target.x - 400.0).abs() < 1e-9);
        assert!((target.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_edge_mirrors_angle() {
        // Thrown up and right past the top edge: mirrored heads down and right.
        let v = Velocity::from_vec2(Vec2::new(1.0, -1.0));
        let target = bounce_target(Point::new(100.0, -30.0), v, &BOUNDS, None);
        assert!((target.x - 130.0).abs() < 1e-9);
        assert!(target.y.abs() < 1e-9);
    }

    #[test]
    fn parallel_velocity_falls_back_to_projection() {
        let v = Velocity::from_vec2(Vec2::new(0.0, 3.0));
        let target = bounce_target(Point::new(450.0, 200.0), v, &BOUNDS, None);
        assert!((target.x - 400.0).abs() < 1e-9);
        assert!((target.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn corner_targets_corner_regardless_of_velocity() {
        for v in [Vec2::ZERO, Vec2::new(5.0, 1.0), Vec2::new(-3.0, 9.0)] {
            let target =
                bounce_target(Point::new(-20.0, 900.0), Velocity::from_vec2(v), &BOUNDS, None);
            assert_eq!(target, Point::new(0.0, 400.0));
        }
    }

    #[test]
    fn trajectory_target_is_clamped() {
        // A shallow mirrored direction would land far below the bottom edge.
        let v = Velocity::from_vec2(Vec2::new(0.01, 5.0));
        let target = bounce_target(Point::new(401.0, 390.0), v, &BOUNDS, None);
        assert!(BOUNDS.contains(target));
    }

    #[test]
    fn target_always_inside_for_any_violation() {
        let offsets = [
            Point::new(-500.0, 20.0),
            Point::new(900.0, 399.0),
            Point::new(30.0, -1.0),
            Point::new(-1.0, -1.0),
            Point::new(742.8, 0.0),
        ];
        let velocities = [
            Vec2::ZERO,
            Vec2::new(0.4, 0.1),
            Vec2::new(-0.3, 0.3),
            Vec2::new(0.0, -0.45),
        ];
        for offset in offsets {
            for v in velocities {
                for grid in [None, Some(50.0), Some(120.0)] {
                    let target = bounce_target(offset, Velocity::from_vec2(v), &BOUNDS, grid);
                    assert!(BOUNDS.contains(target));
                }
            }
        }
    }

    #[test]
    fn distance_to_target_shrinks_every_frame() {
        let mut plan = plan_bounce(
            Point::new(742.0, -60.0),
            Velocity::from_vec2(Vec2::new(0.3, -0.2)),
            &BOUNDS,
            Some(50.0),
        );
        let target = plan.target();
        let mut distance = (target - plan.offset()).hypot();
        let mut frames = 0;
        while !plan.step() {
            let next = (target - plan.offset()).hypot();
            assert!(next < distance);
            assert!((next - distance * ELASTICITY).abs() < 1e-9);
            distance = next;
            frames += 1;
            assert!(frames < 1_000);
        }
        assert_eq!(plan.offset(), target);
        assert_eq!(target, Point::new(400.0, 0.0));
    }
}
