// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds resolution: the rectangle of offsets that need no correction.
//!
//! Bounds live in offset space, where `(0, 0)` places the element's frame at
//! the container's drag origin (the top-left of its content box). They are
//! always recomputed wholesale from geometry and scale via
//! [`compute_bounds`], never nudged incrementally, and only when geometry or
//! scale change.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_drag::{ContainerGeometry, ElementGeometry, compute_bounds};
//!
//! let container = ContainerGeometry::new(Size::new(500.0, 500.0));
//! let element = ElementGeometry::new(Size::new(100.0, 100.0));
//! let bounds = compute_bounds(&container, &element, 1.0, false);
//!
//! assert_eq!((bounds.left, bounds.right), (0.0, 400.0));
//! assert!(bounds.contains(Point::new(400.0, 0.0)));
//! assert!(!bounds.contains(Point::new(401.0, 0.0)));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Insets, Point, Rect, Size, Vec2};

/// Geometry of the container the element is dragged within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerGeometry {
    /// Outer size of the container.
    pub size: Size,
    /// Padding between the container edge and its content box.
    pub padding: Insets,
}

impl ContainerGeometry {
    /// Creates container geometry without padding.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Insets::ZERO,
        }
    }

    /// Returns a copy with the given padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Size available to the dragged element.
    ///
    /// With `ignore_padding` the whole container is available; otherwise only
    /// the content box. A container that has not been laid out yet (negative
    /// or non-finite extents) reports zero.
    #[must_use]
    pub fn available_size(&self, ignore_padding: bool) -> Size {
        let size = sanitize_size(self.size);
        if ignore_padding {
            return size;
        }
        let p = self.padding;
        Size::new(
            (size.width - p.x0 - p.x1).max(0.0),
            (size.height - p.y0 - p.y1).max(0.0),
        )
    }

    /// How far the available area extends before the drag origin.
    fn leading_extension(&self, ignore_padding: bool) -> Vec2 {
        if ignore_padding {
            Vec2::new(self.padding.x0, self.padding.y0)
        } else {
            Vec2::ZERO
        }
    }
}

/// Geometry of the dragged element itself, at scale `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementGeometry {
    /// Native (unscaled) size of the element's visual bounding box.
    pub size: Size,
    /// Origin of the visual bounding box relative to the element's frame.
    ///
    /// Plain boxes use `(0, 0)`. Vector shapes whose drawn content does not
    /// start at the frame origin report that offset here so that the visible
    /// box, not the nominal frame, is what stays contained.
    pub origin: Point,
}

impl ElementGeometry {
    /// Creates element geometry with its bounding box at the frame origin.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            origin: Point::ORIGIN,
        }
    }

    /// Returns a copy with a shifted bounding-box origin.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }
}

/// One edge of a [`Bounds`] rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Minimum x.
    Left,
    /// Maximum x.
    Right,
    /// Minimum y.
    Top,
    /// Maximum y.
    Bottom,
}

/// Which edges an offset lies beyond, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Violation {
    /// Violated horizontal edge, if any.
    pub horizontal: Option<Edge>,
    /// Violated vertical edge, if any.
    pub vertical: Option<Edge>,
}

impl Violation {
    /// Returns `true` when no edge is violated.
    #[must_use]
    pub fn is_inside(self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }

    /// Returns `true` when both axes are out of range.
    #[must_use]
    pub fn is_corner(self) -> bool {
        self.horizontal.is_some() && self.vertical.is_some()
    }
}

/// Rectangle of offsets that need no correction.
///
/// `left <= right` and `top <= bottom` always hold. When the element is larger
/// than the container on an axis, that axis runs from the (negative) size
/// difference up to zero, so dragging reveals other parts of the element but
/// never empty container space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    /// Smallest valid x offset.
    pub left: f64,
    /// Largest valid x offset.
    pub right: f64,
    /// Smallest valid y offset.
    pub top: f64,
    /// Largest valid y offset.
    pub bottom: f64,
}

impl Bounds {
    /// Creates bounds from edge values.
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Horizontal span.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical span.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The same rectangle as a [`Rect`].
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// Value of one edge.
    #[must_use]
    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// Returns `true` if `offset` needs no correction. Edges are inclusive.
    #[must_use]
    pub fn contains(&self, offset: Point) -> bool {
        self.violation(offset).is_inside()
    }

    /// Classifies which edges `offset` lies beyond.
    #[must_use]
    pub fn violation(&self, offset: Point) -> Violation {
        let horizontal = if offset.x < self.left {
            Some(Edge::Left)
        } else if offset.x > self.right {
            Some(Edge::Right)
        } else {
            None
        };
        let vertical = if offset.y < self.top {
            Some(Edge::Top)
        } else if offset.y > self.bottom {
            Some(Edge::Bottom)
        } else {
            None
        };
        Violation {
            horizontal,
            vertical,
        }
    }

    /// Clamps `x` into `[left, right]`.
    #[must_use]
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(self.left, self.right)
    }

    /// Clamps `y` into `[top, bottom]`.
    #[must_use]
    pub fn clamp_y(&self, y: f64) -> f64 {
        y.clamp(self.top, self.bottom)
    }

    /// Nearest point inside the bounds.
    #[must_use]
    pub fn clamp(&self, offset: Point) -> Point {
        Point::new(self.clamp_x(offset.x), self.clamp_y(offset.y))
    }

    /// Rounds an in-bounds offset onto the snap grid without leaving the bounds.
    ///
    /// Each axis rounds to the nearest multiple of `grid`. A multiple that
    /// falls outside the bounds steps one cell back inside; if the grid is
    /// coarser than the span, the axis clamps to the nearest edge instead.
    /// A non-positive grid disables snapping. Snapping an already snapped
    /// offset returns it unchanged.
    #[must_use]
    pub fn snap(&self, offset: Point, grid: f64) -> Point {
        Point::new(
            snap_axis(offset.x, grid, self.left, self.right),
            snap_axis(offset.y, grid, self.top, self.bottom),
        )
    }
}

fn snap_axis(value: f64, grid: f64, min: f64, max: f64) -> f64 {
    if grid <= 0.0 || !grid.is_finite() {
        return value;
    }
    let mut snapped = (value / grid).round() * grid;
    if snapped > max {
        snapped -= grid;
    } else if snapped < min {
        snapped += grid;
    }
    if snapped < min || snapped > max {
        snapped = value.clamp(min, max);
    }
    snapped
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn sanitize_size(size: Size) -> Size {
    Size::new(sanitize_extent(size.width), sanitize_extent(size.height))
}

/// Valid offsets on one axis for an element of `element` extent in `available`.
fn axis_range(available: f64, element: f64) -> (f64, f64) {
    let slack = available - element;
    if element < available {
        (0.0, slack)
    } else {
        (slack, 0.0)
    }
}

/// Computes the valid-offset rectangle for an element inside a container.
///
/// `scale` multiplies the element's native size and bounding-box origin.
/// With `ignore_padding` the element may also travel over the container's
/// padding, so the leading edges extend to negative offsets.
#[must_use]
pub fn compute_bounds(
    container: &ContainerGeometry,
    element: &ElementGeometry,
    scale: f64,
    ignore_padding: bool,
) -> Bounds {
    let available = container.available_size(ignore_padding);
    let native = sanitize_size(element.size);
    let (left, right) = axis_range(available.width, native.width * scale);
    let (top, bottom) = axis_range(available.height, native.height * scale);
    let shift = -element.origin.to_vec2() * scale - container.leading_extension(ignore_padding);
    Bounds {
        left: left + shift.x,
        right: right + shift.x,
        top: top + shift.y,
        bottom: bottom + shift.y,
    }
}
