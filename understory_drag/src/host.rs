// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborators a [`DragSurface`](crate::DragSurface) consumes from its host.
//!
//! The surface owns no element, timer or event loop. Everything it needs from
//! the outside world comes through these traits, bundled as [`DragHost`]:
//!
//! - [`GeometrySource`]: container and element geometry, read on enable,
//!   session start, resize and zoom.
//! - [`Scheduler`]: per-frame and one-shot timer registration.
//! - [`ScrollTarget`]: native scroll position, only used with
//!   [`DragConfig::scroll_on_drag`](crate::DragConfig::scroll_on_drag).
//! - [`DragEventSink`]: receives [`DragEvent`]s.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::bounds::{ContainerGeometry, ElementGeometry};
use crate::schedule::Scheduler;

/// Geometry queries answered by the host.
pub trait GeometrySource {
    /// Geometry of the container, or `None` if the element is not attached.
    ///
    /// A container that exists but has not been laid out yet should report a
    /// zero size rather than `None`.
    fn container(&self) -> Option<ContainerGeometry>;

    /// Native geometry of the dragged element.
    fn element(&self) -> ElementGeometry;
}

/// Access to the container's native scroll position.
///
/// Every method has a no-op default so hosts that never enable scroll
/// coupling can implement this with an empty block.
pub trait ScrollTarget {
    /// Current native scroll position.
    fn scroll_position(&self) -> Point {
        Point::ORIGIN
    }

    /// Writes the native scroll position.
    fn set_scroll_position(&mut self, position: Point) {
        let _ = position;
    }

    /// Applies the translation beyond the scrollable range.
    fn set_overhang(&mut self, overhang: Vec2) {
        let _ = overhang;
    }
}

/// Notifications raised by a drag surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// A drag session began.
    Start,
    /// The offset changed; carries the new offset.
    Move(Point),
    /// The session is over and everything has settled; carries the final offset.
    End(Point),
}

/// Receiver for [`DragEvent`]s.
pub trait DragEventSink {
    /// Called synchronously for every event, in order.
    fn emit(&mut self, event: DragEvent);
}

impl DragEventSink for Vec<DragEvent> {
    fn emit(&mut self, event: DragEvent) {
        self.push(event);
    }
}

/// Everything a drag surface needs from its host.
pub trait DragHost: GeometrySource + Scheduler + ScrollTarget + DragEventSink {}

impl<T> DragHost for T where
    T: GeometrySource + Scheduler + ScrollTarget + DragEventSink + ?Sized
{
}
