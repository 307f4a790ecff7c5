// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar vector primitive used for throw velocity and bounce correction.
//!
//! Positions and deltas use [`kurbo::Point`] and [`kurbo::Vec2`] directly.
//! Friction and elasticity decay a vector's *length* while keeping its
//! direction, so the simulators carry vectors in magnitude + angle form and
//! only convert back to a cartesian offset when applying a tick.

use kurbo::Vec2;

/// A 2D vector stored as a magnitude and a direction angle (radians).
///
/// The angle follows [`Vec2::angle`]: `0` points along `+x`, `π/2` along `+y`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    /// Length of the vector. Never negative for values built by this crate.
    pub magnitude: f64,
    /// Direction in radians.
    pub angle: f64,
}

impl Velocity {
    /// The zero vector.
    pub const ZERO: Self = Self {
        magnitude: 0.0,
        angle: 0.0,
    };

    /// Creates a vector from a magnitude and an angle in radians.
    #[must_use]
    pub const fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    /// Converts a cartesian vector into polar form.
    #[must_use]
    pub fn from_vec2(v: Vec2) -> Self {
        if v == Vec2::ZERO {
            return Self::ZERO;
        }
        Self {
            magnitude: v.hypot(),
            angle: v.angle(),
        }
    }

    /// Converts back into a cartesian offset.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        if self.magnitude == 0.0 {
            return Vec2::ZERO;
        }
        Vec2::from_angle(self.angle) * self.magnitude
    }

    /// Returns this vector with its magnitude multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            magnitude: self.magnitude * factor,
            angle: self.angle,
        }
    }

    /// Returns `true` when the vector has no length.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.magnitude == 0.0
    }
}

impl From<Vec2> for Velocity {
    fn from(v: Vec2) -> Self {
        Self::from_vec2(v)
    }
}
