// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::DragError;
use crate::zoom::ScaleLimits;

/// Recognized drag surface options.
///
/// The defaults describe a free drag: no hard walls, no momentum, no grid and
/// a fixed scale of `1.0`.
///
/// ```
/// use understory_drag::DragConfig;
///
/// let config = DragConfig::default()
///     .with_can_throw(true)
///     .with_snap_grid_size(50.0);
/// assert!(config.validate().is_ok());
/// assert!(config.enforces_containment());
///
/// let bad = DragConfig::default().with_scale_limits(2.0, 1.0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// Clamp x to the bounds on every move so it is never observably outside.
    pub restrict_horizontal_drag: bool,
    /// Clamp y to the bounds on every move so it is never observably outside.
    pub restrict_vertical_drag: bool,
    /// Enable momentum on release, followed by an elastic bounce into bounds.
    pub can_throw: bool,
    /// Map the offset onto the container's native scroll position.
    pub scroll_on_drag: bool,
    /// Spacing settled offsets round to; `0.0` disables snapping.
    pub snap_grid_size: f64,
    /// Smallest allowed scale.
    pub scale_min: f64,
    /// Largest allowed scale.
    pub scale_max: f64,
    /// Let the element travel over the container's padding.
    pub ignore_padding: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            restrict_horizontal_drag: false,
            restrict_vertical_drag: false,
            can_throw: false,
            scroll_on_drag: false,
            snap_grid_size: 0.0,
            scale_min: 1.0,
            scale_max: 1.0,
            ignore_padding: false,
        }
    }
}

impl DragConfig {
    /// Sets both restrict flags.
    #[must_use]
    pub fn with_restrict(mut self, horizontal: bool, vertical: bool) -> Self {
        self.restrict_horizontal_drag = horizontal;
        self.restrict_vertical_drag = vertical;
        self
    }

    /// Sets [`DragConfig::can_throw`].
    #[must_use]
    pub fn with_can_throw(mut self, can_throw: bool) -> Self {
        self.can_throw = can_throw;
        self
    }

    /// Sets [`DragConfig::scroll_on_drag`].
    #[must_use]
    pub fn with_scroll_on_drag(mut self, scroll_on_drag: bool) -> Self {
        self.scroll_on_drag = scroll_on_drag;
        self
    }

    /// Sets [`DragConfig::snap_grid_size`].
    #[must_use]
    pub fn with_snap_grid_size(mut self, size: f64) -> Self {
        self.snap_grid_size = size;
        self
    }

    /// Sets the scale range.
    #[must_use]
    pub fn with_scale_limits(mut self, min: f64, max: f64) -> Self {
        self.scale_min = min;
        self.scale_max = max;
        self
    }

    /// Sets [`DragConfig::ignore_padding`].
    #[must_use]
    pub fn with_ignore_padding(mut self, ignore_padding: bool) -> Self {
        self.ignore_padding = ignore_padding;
        self
    }

    /// Checks the options for contradictions.
    pub fn validate(&self) -> Result<(), DragError> {
        self.scale_limits().map(|_| ())
    }

    /// The validated scale range.
    pub fn scale_limits(&self) -> Result<ScaleLimits, DragError> {
        ScaleLimits::new(self.scale_min, self.scale_max)
    }

    /// Returns `true` if at least one axis is a hard wall during drags.
    #[must_use]
    pub fn restricts_any_axis(&self) -> bool {
        self.restrict_horizontal_drag || self.restrict_vertical_drag
    }

    /// Returns `true` if released drags always settle inside the bounds.
    ///
    /// The only configuration that may come to rest outside is a free drag
    /// without momentum: no throw and neither axis restricted.
    #[must_use]
    pub fn enforces_containment(&self) -> bool {
        self.can_throw || self.restricts_any_axis()
    }

    /// The snap grid spacing, if snapping is on.
    #[must_use]
    pub fn snap_grid(&self) -> Option<f64> {
        let size = self.snap_grid_size;
        (size > 0.0 && size.is_finite()).then_some(size)
    }
}
