// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame and timer scheduling seam.
//!
//! Animation loops never call themselves back directly. Each tick asks the
//! host for *one* future frame through [`Scheduler::request_frame`] and
//! remembers the returned [`FrameToken`]. When the frame arrives the host
//! hands the token back (see [`DragSurface::on_frame`](crate::DragSurface::on_frame)).
//! Cancelling a loop means forgetting its token and telling the host, so a
//! late delivery of a stale token is simply ignored.
//!
//! [`ManualScheduler`] is a deterministic implementation with no clock of its
//! own. Tests and simple hosts step frames and advance time by hand:
//!
//! ```
//! use core::time::Duration;
//! use understory_drag::{ManualScheduler, Scheduler};
//!
//! let mut sched = ManualScheduler::new();
//! let frame = sched.request_frame();
//! let timer = sched.start_timer(Duration::from_millis(100));
//!
//! assert_eq!(sched.take_frames(), vec![frame]);
//! assert!(sched.take_frames().is_empty());
//!
//! assert!(sched.advance(Duration::from_millis(99)).is_empty());
//! assert_eq!(sched.advance(Duration::from_millis(1)), vec![timer]);
//! ```

use alloc::vec::Vec;
use core::time::Duration;

/// Identifies one requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(pub u64);

/// Identifies one pending one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

/// Per-frame and one-shot timer scheduling provided by the host.
///
/// Implementations must deliver each requested frame at most once and must
/// not deliver a frame or timer after it has been cancelled. Delivering a
/// cancelled token anyway is harmless: receivers drop tokens they no longer
/// hold.
pub trait Scheduler {
    /// Requests a single callback on the next frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Withdraws a frame request.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Starts a one-shot timer that fires after `delay`.
    fn start_timer(&mut self, delay: Duration) -> TimerToken;

    /// Cancels a pending timer.
    fn cancel_timer(&mut self, token: TimerToken);
}

/// A scheduler driven entirely by its caller.
///
/// Frames are handed out by [`ManualScheduler::take_frames`]; time only moves
/// through [`ManualScheduler::advance`].
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    frames: Vec<FrameToken>,
    timers: Vec<(TimerToken, Duration)>,
}

impl ManualScheduler {
    /// Creates an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed through [`ManualScheduler::advance`].
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns `true` if any frame request is outstanding.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Removes and returns every outstanding frame request, oldest first.
    pub fn take_frames(&mut self) -> Vec<FrameToken> {
        core::mem::take(&mut self.frames)
    }

    /// Moves time forward and returns the timers that expired, by deadline.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;
        let now = self.now;
        let mut fired: Vec<(TimerToken, Duration)> = Vec::new();
        self.timers.retain(|&(token, deadline)| {
            if deadline <= now {
                fired.push((token, deadline));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|&(token, deadline)| (deadline, token));
        fired.into_iter().map(|(token, _)| token).collect()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id());
        self.frames.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.frames.retain(|&t| t != token);
    }

    fn start_timer(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_id());
        self.timers.push((token, self.now + delay));
        token
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        self.timers.retain(|&(t, _)| t != token);
    }
}
