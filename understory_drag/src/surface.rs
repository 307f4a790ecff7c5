// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag surface behavior.

use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use log::{debug, error, trace, warn};

use crate::bounce::{bounce_target, plan_bounce};
use crate::bounds::{Bounds, ContainerGeometry, ElementGeometry, compute_bounds};
use crate::config::DragConfig;
use crate::error::DragError;
use crate::host::{DragEvent, DragHost};
use crate::phase::{Phase, ThrowState};
use crate::schedule::{FrameToken, TimerToken};
use crate::scroll::{ScrollSplit, origin_from_scroll};
use crate::session::DragSession;
use crate::throw::{ThrowStep, throw_step};
use crate::vector::Velocity;
use crate::zoom::{ScaleLimits, ScaleMode, rescale_offset};

/// Pointer pause after which the release velocity is forgotten.
pub const VELOCITY_DEBOUNCE: Duration = Duration::from_millis(100);

/// A draggable element's position state and the behavior driving it.
///
/// `DragSurface` owns the single offset / bounds / phase triple of one
/// element. Pointer input, frames, timers and resizes are fed in by the host;
/// every entry point takes the host as `&mut impl DragHost` and performs any
/// scheduling, scrolling and event emission through it synchronously.
///
/// Dropping a surface does not reach the host. Release it with
/// [`DragSurface::teardown`] (or call [`DragSurface::disable`] first) so that
/// outstanding frame and timer registrations are withdrawn.
#[derive(Clone, Debug)]
pub struct DragSurface {
    config: DragConfig,
    limits: ScaleLimits,
    offset: Point,
    bounds: Option<Bounds>,
    available: Size,
    scale: f64,
    phase: Phase,
}

impl DragSurface {
    /// Creates a surface at offset zero.
    ///
    /// Fails if the configured scale range is invalid.
    pub fn new(config: DragConfig) -> Result<Self, DragError> {
        let limits = config.scale_limits().inspect_err(|err| {
            warn!("rejecting drag configuration: {err}");
        })?;
        Ok(Self {
            scale: limits.clamp(1.0),
            config,
            limits,
            offset: Point::ORIGIN,
            bounds: None,
            available: Size::ZERO,
            phase: Phase::Idle,
        })
    }

    /// Current options.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Current bounds, or `None` before [`DragSurface::enable`].
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current phase with its data.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Current state tag.
    #[must_use]
    pub fn throw_state(&self) -> ThrowState {
        self.phase.state()
    }

    /// Returns `true` while a throw or bounce is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Returns `true` once bounds have been computed and until disabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.bounds.is_some()
    }

    /// Container area available to the element, as of the last geometry read.
    #[must_use]
    pub fn available_size(&self) -> Size {
        self.available
    }

    /// Turns dragging on: reads geometry and computes the bounds.
    ///
    /// The element must already be attached to a container. With scroll
    /// coupling the offset is taken from the container's scroll position.
    pub fn enable<H: DragHost + ?Sized>(&mut self, host: &mut H) -> Result<(), DragError> {
        let bounds = self.refresh_bounds(host)?;
        if self.config.scroll_on_drag {
            self.offset = origin_from_scroll(host.scroll_position());
        }
        debug!("drag enabled, bounds {bounds:?}");
        Ok(())
    }

    /// Turns dragging off, withdrawing every pending frame and timer.
    pub fn disable<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        self.cancel_phase(host);
        self.bounds = None;
        debug!("drag disabled at {:?}", self.offset);
    }

    /// Destroys the surface, withdrawing every pending frame and timer.
    ///
    /// Any throw or bounce in flight is abandoned without a
    /// [`DragEvent::End`]. Returns the offset the element was left at.
    pub fn teardown<H: DragHost + ?Sized>(mut self, host: &mut H) -> Point {
        self.disable(host);
        self.offset
    }

    /// Replaces the options.
    ///
    /// On error nothing changes. The current scale is clamped into the new
    /// range, and when enabled the bounds are recomputed and a resting offset
    /// is pulled back inside if the new options require containment.
    pub fn set_config<H: DragHost + ?Sized>(
        &mut self,
        config: DragConfig,
        host: &mut H,
    ) -> Result<(), DragError> {
        let limits = config.scale_limits().inspect_err(|err| {
            warn!("rejecting drag configuration: {err}");
        })?;
        let geometry = if self.is_enabled() {
            Some(Self::geometry(host)?)
        } else {
            None
        };
        self.config = config;
        self.limits = limits;
        self.scale = limits.clamp(self.scale);
        if let Some((container, element)) = geometry {
            self.recompute_bounds(&container, &element);
            self.geometry_changed(host);
        }
        Ok(())
    }

    /// Starts a drag session with the pointer at `pointer`.
    ///
    /// Any throw or bounce in flight is abandoned where it is, without a
    /// [`DragEvent::End`]. Bounds are recomputed from fresh geometry.
    pub fn begin<H: DragHost + ?Sized>(
        &mut self,
        pointer: Point,
        host: &mut H,
    ) -> Result<(), DragError> {
        self.ensure_enabled("begin")?;
        let (container, element) = Self::geometry(host)?;
        self.cancel_phase(host);
        let bounds = self.recompute_bounds(&container, &element);
        if self.config.scroll_on_drag {
            self.offset = origin_from_scroll(host.scroll_position());
        }
        self.phase = Phase::Dragging(DragSession::new(self.offset, pointer));
        debug!("drag start at {:?} within {bounds:?}", self.offset);
        host.emit(DragEvent::Start);
        Ok(())
    }

    /// Moves the element by a pointer delta.
    ///
    /// Restricted axes are clamped into the bounds; the others may overshoot.
    /// Each move restarts the pause timer that zeroes the release velocity.
    /// Outside a session this does nothing.
    pub fn move_by<H: DragHost + ?Sized>(
        &mut self,
        delta: Vec2,
        host: &mut H,
    ) -> Result<(), DragError> {
        let bounds = self.ensure_enabled("move")?;
        let Phase::Dragging(session) = &mut self.phase else {
            trace!("ignoring move outside a drag session");
            return Ok(());
        };
        let offset = session.sample(delta, &bounds, &self.config);
        if let Some(timer) = session.debounce.take() {
            host.cancel_timer(timer);
        }
        session.debounce = Some(host.start_timer(VELOCITY_DEBOUNCE));
        self.place(offset, host);
        Ok(())
    }

    /// Moves the element to follow the pointer at `pointer`.
    ///
    /// Equivalent to [`DragSurface::move_by`] with the change since the last
    /// pointer position of this session.
    pub fn move_to<H: DragHost + ?Sized>(
        &mut self,
        pointer: Point,
        host: &mut H,
    ) -> Result<(), DragError> {
        self.ensure_enabled("move")?;
        let Phase::Dragging(session) = &mut self.phase else {
            trace!("ignoring move outside a drag session");
            return Ok(());
        };
        let delta = session.pointer_delta(pointer);
        self.move_by(delta, host)
    }

    /// Releases the pointer.
    ///
    /// - With momentum enabled and a nonzero velocity the element is thrown.
    /// - Otherwise, if the configuration requires containment, it bounces
    ///   into bounds.
    /// - Otherwise it stays exactly where it was released, even outside the
    ///   bounds, and [`DragEvent::End`] fires immediately.
    pub fn end<H: DragHost + ?Sized>(&mut self, host: &mut H) -> Result<(), DragError> {
        self.ensure_enabled("end")?;
        let Phase::Dragging(session) = self.phase else {
            trace!("ignoring release outside a drag session");
            return Ok(());
        };
        if let Some(timer) = session.debounce {
            host.cancel_timer(timer);
        }
        let velocity = session.velocity();
        if self.config.can_throw && !velocity.is_zero() {
            let frame = host.request_frame();
            debug!("throw from {:?} with {velocity:?}", self.offset);
            self.phase = Phase::Throwing { velocity, frame };
        } else if self.config.enforces_containment() {
            self.phase = Phase::Idle;
            self.start_bounce(Velocity::ZERO, host);
        } else {
            self.finish(host);
        }
        Ok(())
    }

    /// Ends any session or animation and settles into bounds now.
    ///
    /// Used by controls that need strict containment without momentum,
    /// regardless of the configured restrictions.
    pub fn settle<H: DragHost + ?Sized>(&mut self, host: &mut H) -> Result<(), DragError> {
        self.ensure_enabled("settle")?;
        self.cancel_phase(host);
        self.start_bounce(Velocity::ZERO, host);
        Ok(())
    }

    /// Runs one throw or bounce tick for the frame identified by `token`.
    ///
    /// Tokens that do not belong to the current animation are ignored.
    pub fn on_frame<H: DragHost + ?Sized>(&mut self, token: FrameToken, host: &mut H) {
        if self.phase.pending_frame() != Some(token) {
            trace!("ignoring stale frame {token:?}");
            return;
        }
        let Some(bounds) = self.bounds else {
            return;
        };
        match self.phase {
            Phase::Throwing { velocity, .. } => {
                let step = throw_step(self.offset, velocity, &bounds).stop_at_walls(
                    &bounds,
                    self.config.restrict_horizontal_drag,
                    self.config.restrict_vertical_drag,
                );
                trace!("throw tick {:?} speed {}", step.offset, step.velocity.magnitude);
                self.place(step.offset, host);
                if step.finished {
                    self.phase = Phase::Idle;
                    self.start_bounce(step.velocity, host);
                } else {
                    self.phase = Phase::Throwing {
                        velocity: step.velocity,
                        frame: host.request_frame(),
                    };
                }
            }
            Phase::Bouncing { mut plan, .. } => {
                let landed = plan.step();
                trace!("bounce tick {:?}", plan.offset());
                self.place(plan.offset(), host);
                if landed {
                    self.finish(host);
                } else {
                    self.phase = Phase::Bouncing {
                        plan,
                        frame: host.request_frame(),
                    };
                }
            }
            Phase::Idle | Phase::Dragging(_) => {}
        }
    }

    /// Handles an expired timer identified by `token`.
    ///
    /// The only timer is the pause debounce: it zeroes the velocity so that a
    /// release after holding still does not throw.
    pub fn on_timer(&mut self, token: TimerToken) {
        if let Phase::Dragging(session) = &mut self.phase
            && session.debounce == Some(token)
        {
            session.debounce = None;
            session.clear_velocity();
            trace!("pointer paused, velocity cleared");
        }
    }

    /// Recomputes the bounds after the container or element changed size.
    ///
    /// An active drag keeps going with restricted axes pulled inside, a throw
    /// continues against the new bounds, a bounce re-targets, and a resting
    /// offset is pulled inside if the configuration requires containment.
    pub fn on_resize<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        if !self.is_enabled() {
            return;
        }
        let Ok((container, element)) = Self::geometry(host) else {
            return;
        };
        let bounds = self.recompute_bounds(&container, &element);
        debug!("resized, bounds {bounds:?}");
        self.geometry_changed(host);
    }

    /// Changes the scale, keeping `focal` (container coordinates) visually
    /// fixed.
    ///
    /// The scale is clamped to the configured range. A throw or bounce in
    /// flight is abandoned; an active drag continues from the adjusted offset.
    pub fn set_scale<H: DragHost + ?Sized>(
        &mut self,
        scale: f64,
        focal: Point,
        host: &mut H,
    ) -> Result<(), DragError> {
        self.ensure_enabled("set_scale")?;
        let (container, element) = Self::geometry(host)?;
        if self.phase.is_animating() {
            self.cancel_phase(host);
        }
        let old = self.scale;
        let new = self.limits.clamp(scale);
        self.scale = new;
        let offset = rescale_offset(self.offset, old, new, focal);
        if let Phase::Dragging(session) = &mut self.phase {
            session.shift(offset - self.offset);
        }
        self.recompute_bounds(&container, &element);
        debug!("scale {old} -> {new} about {focal:?}");
        if offset != self.offset {
            self.place(offset, host);
        }
        self.geometry_changed(host);
        Ok(())
    }

    /// Scales to fit, fill, or native size, about the center of the
    /// available area.
    pub fn apply_scale_mode<H: DragHost + ?Sized>(
        &mut self,
        mode: ScaleMode,
        host: &mut H,
    ) -> Result<(), DragError> {
        self.ensure_enabled("apply_scale_mode")?;
        let (container, element) = Self::geometry(host)?;
        let available = container.available_size(self.config.ignore_padding);
        let scale = mode.scale_for(available, element.size);
        let focal = Point::new(available.width / 2.0, available.height / 2.0);
        self.set_scale(scale, focal, host)
    }

    fn ensure_enabled(&self, operation: &str) -> Result<Bounds, DragError> {
        self.bounds.ok_or_else(|| {
            error!("drag `{operation}` called before bounds were computed");
            DragError::NotEnabled
        })
    }

    fn geometry<H: DragHost + ?Sized>(
        host: &H,
    ) -> Result<(ContainerGeometry, ElementGeometry), DragError> {
        let container = host.container().ok_or_else(|| {
            warn!("drag element is not attached to a container");
            DragError::NoContainer
        })?;
        Ok((container, host.element()))
    }

    fn refresh_bounds<H: DragHost + ?Sized>(&mut self, host: &H) -> Result<Bounds, DragError> {
        let (container, element) = Self::geometry(host)?;
        Ok(self.recompute_bounds(&container, &element))
    }

    fn recompute_bounds(
        &mut self,
        container: &ContainerGeometry,
        element: &ElementGeometry,
    ) -> Bounds {
        let ignore_padding = self.config.ignore_padding;
        let bounds = compute_bounds(container, element, self.scale, ignore_padding);
        self.available = container.available_size(ignore_padding);
        self.bounds = Some(bounds);
        bounds
    }

    /// Brings the current phase in line with freshly computed bounds.
    fn geometry_changed<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        let Some(bounds) = self.bounds else {
            return;
        };
        match &mut self.phase {
            Phase::Dragging(session) => {
                if let Some(offset) = session.reconstrain(&bounds, &self.config) {
                    self.place(offset, host);
                    return;
                }
            }
            Phase::Bouncing { plan, .. } => {
                *plan = plan_bounce(self.offset, Velocity::ZERO, &bounds, self.config.snap_grid());
                return;
            }
            Phase::Throwing { velocity, .. } => {
                let held = ThrowStep {
                    offset: self.offset,
                    velocity: *velocity,
                    finished: false,
                }
                .stop_at_walls(
                    &bounds,
                    self.config.restrict_horizontal_drag,
                    self.config.restrict_vertical_drag,
                );
                *velocity = held.velocity;
                if held.offset != self.offset {
                    self.place(held.offset, host);
                    return;
                }
            }
            Phase::Idle => {
                if self.config.enforces_containment() {
                    let target = bounce_target(
                        self.offset,
                        Velocity::ZERO,
                        &bounds,
                        self.config.snap_grid(),
                    );
                    if target != self.offset {
                        self.place(target, host);
                        return;
                    }
                }
            }
        }
        if self.config.scroll_on_drag {
            self.place(self.offset, host);
        }
    }

    /// Starts the bounce from the current offset, or settles at once if the
    /// offset needs no travel.
    fn start_bounce<H: DragHost + ?Sized>(&mut self, velocity: Velocity, host: &mut H) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let plan = plan_bounce(self.offset, velocity, &bounds, self.config.snap_grid());
        if bounds.contains(self.offset) {
            if plan.target() != self.offset {
                self.place(plan.target(), host);
            }
            self.finish(host);
            return;
        }
        debug!("bounce from {:?} to {:?}", self.offset, plan.target());
        self.phase = Phase::Bouncing {
            plan,
            frame: host.request_frame(),
        };
    }

    fn finish<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        self.phase = Phase::Idle;
        debug!("drag end at {:?}", self.offset);
        host.emit(DragEvent::End(self.offset));
    }

    /// Drops the current phase, withdrawing its frame or timer.
    fn cancel_phase<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(frame) = self.phase.pending_frame() {
            host.cancel_frame(frame);
        }
        if let Some(timer) = self.phase.pending_timer() {
            host.cancel_timer(timer);
        }
        if self.phase != Phase::Idle {
            debug!("abandoning {:?} at {:?}", self.phase.state(), self.offset);
        }
        self.phase = Phase::Idle;
    }

    fn place<H: DragHost + ?Sized>(&mut self, offset: Point, host: &mut H) {
        self.offset = offset;
        if self.config.scroll_on_drag
            && let Some(bounds) = self.bounds
        {
            let split = ScrollSplit::from_offset(offset, &bounds);
            host.set_scroll_position(split.scroll_position);
            host.set_overhang(split.overhang);
        }
        host.emit(DragEvent::Move(offset));
    }
}
