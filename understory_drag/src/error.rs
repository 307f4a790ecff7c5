// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by drag surface operations that could not run.
///
/// A failed operation leaves the surface exactly as it was. Out-of-bounds
/// offsets, velocity underflow and superseded animations are ordinary states
/// and never surface as errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragError {
    /// `scale_min` is greater than `scale_max`, or a limit is not a positive
    /// finite number.
    InvalidScaleRange {
        /// The configured minimum scale.
        min: f64,
        /// The configured maximum scale.
        max: f64,
    },
    /// The element is not attached to a container.
    NoContainer,
    /// A drag operation ran before bounds were ever computed, i.e. before
    /// [`DragSurface::enable`](crate::DragSurface::enable) succeeded.
    NotEnabled,
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScaleRange { min, max } => {
                write!(f, "invalid scale range: min {min} must not exceed max {max}")
            }
            Self::NoContainer => f.write_str("element is not attached to a container"),
            Self::NotEnabled => f.write_str("drag operation before bounds were computed"),
        }
    }
}

impl core::error::Error for DragError {}
