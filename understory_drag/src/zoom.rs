// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale control around a focal point.
//!
//! The element is drawn at `offset + local * scale`. Changing the scale while
//! keeping a container point visually fixed therefore only needs the offset
//! moved toward (or away from) that point:
//!
//! ```
//! use kurbo::Point;
//! use understory_drag::rescale_offset;
//!
//! let offset = Point::new(100.0, 50.0);
//! let focal = Point::new(300.0, 250.0);
//! let zoomed = rescale_offset(offset, 1.0, 2.0, focal);
//!
//! // The element-local point under the focal point is unchanged.
//! let before = (focal - offset) / 1.0;
//! let after = (focal - zoomed) / 2.0;
//! assert_eq!(before, after);
//! ```

use kurbo::{Point, Size};

use crate::error::DragError;

/// Validated `[min, max]` scale range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Creates a range, rejecting `min > max` and non-positive or non-finite limits.
    pub fn new(min: f64, max: f64) -> Result<Self, DragError> {
        let finite = min.is_finite() && max.is_finite();
        if !finite || min <= 0.0 || min > max {
            return Err(DragError::InvalidScaleRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower limit.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper limit.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: 1.0, max: 1.0 }
    }
}

/// How a convenience scale is derived from container and element size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Show the whole element: the smaller of the two size ratios.
    Fit,
    /// Cover the whole container: the larger of the two size ratios.
    Fill,
    /// Native size.
    #[default]
    None,
}

impl ScaleMode {
    /// Scale implied by this mode for an element of `native` size shown in an
    /// area of `available` size. Degenerate element sizes yield `1.0`.
    #[must_use]
    pub fn scale_for(self, available: Size, native: Size) -> f64 {
        if native.width <= 0.0 || native.height <= 0.0 {
            return 1.0;
        }
        let sx = available.width / native.width;
        let sy = available.height / native.height;
        match self {
            Self::Fit => sx.min(sy),
            Self::Fill => sx.max(sy),
            Self::None => 1.0,
        }
    }
}

/// Offset that keeps `focal` (container coordinates) stationary across a
/// scale change from `old_scale` to `new_scale`.
///
/// With `delta = (old - new) / old`, the offset moves by the focal point's
/// position relative to the element times `delta`.
#[must_use]
pub fn rescale_offset(offset: Point, old_scale: f64, new_scale: f64, focal: Point) -> Point {
    if old_scale <= 0.0 || old_scale == new_scale {
        return offset;
    }
    let delta = (old_scale - new_scale) / old_scale;
    offset + (focal - offset) * delta
}
