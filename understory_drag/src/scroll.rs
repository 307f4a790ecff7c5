// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-coupled dragging.
//!
//! In this mode the container scrolls instead of the element moving. The
//! in-bounds part of the offset becomes the (negated) native scroll position
//! and whatever lies beyond the bounds is applied as a small transform
//! overhang, so the content keeps tracking the pointer after the scrollable
//! range saturates.

use kurbo::{Point, Vec2};

use crate::bounds::Bounds;

/// An offset split into native scroll position and residual overhang.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSplit {
    /// Scroll position to write to the container.
    pub scroll_position: Point,
    /// Translation to apply on top of the scroll position.
    pub overhang: Vec2,
}

impl ScrollSplit {
    /// Splits `offset` against `bounds`.
    #[must_use]
    pub fn from_offset(offset: Point, bounds: &Bounds) -> Self {
        let inside = bounds.clamp(offset);
        Self {
            scroll_position: Point::ORIGIN - inside.to_vec2(),
            overhang: offset - inside,
        }
    }

    /// The offset this split represents.
    #[must_use]
    pub fn offset(&self) -> Point {
        Point::ORIGIN - self.scroll_position.to_vec2() + self.overhang
    }
}

/// Offset a scroll-coupled drag starts from, given the container's current
/// scroll position.
#[must_use]
pub fn origin_from_scroll(scroll_position: Point) -> Point {
    Point::ORIGIN - scroll_position.to_vec2()
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ScrollSplit, origin_from_scroll};
    use crate::bounds::Bounds;

    // Content 1000 wide in a 400 wide viewport.
    const BOUNDS: Bounds = Bounds::new(-600.0, 0.0, -300.0, 0.0);

    #[test]
    fn in_bounds_offset_is_pure_scroll() {
        let split = ScrollSplit::from_offset(Point::new(-250.0, -40.0), &BOUNDS);
        assert_eq!(split.scroll_position, Point::new(250.0, 40.0));
        assert_eq!(split.overhang, Vec2::ZERO);
    }

    #[test]
    fn excess_becomes_overhang() {
        let offset = Point::new(-650.0, 30.0);
        let split = ScrollSplit::from_offset(offset, &BOUNDS);
        assert_eq!(split.scroll_position, Point::new(600.0, 0.0));
        assert_eq!(split.overhang, Vec2::new(-50.0, 30.0));
        assert_eq!(split.offset(), offset);
    }

    #[test]
    fn origin_negates_scroll() {
        assert_eq!(origin_from_scroll(Point::new(120.0, 8.0)), Point::new(-120.0, -8.0));
    }
}
