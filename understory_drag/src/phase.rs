// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::bounce::BouncePlan;
use crate::schedule::{FrameToken, TimerToken};
use crate::session::DragSession;
use crate::vector::Velocity;

/// Which of the four interaction states a surface is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThrowState {
    /// At rest.
    #[default]
    Idle,
    /// Following the pointer.
    Dragging,
    /// Coasting after release.
    Throwing,
    /// Settling back into bounds.
    Bouncing,
}

/// The interaction state together with the data only that state owns.
///
/// A throw carries its velocity and the frame it waits for; a bounce carries
/// its correction. Only one of them can exist at a time.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Phase {
    /// At rest.
    #[default]
    Idle,
    /// Following the pointer.
    Dragging(DragSession),
    /// Coasting after release.
    Throwing {
        /// Velocity for the next frame.
        velocity: Velocity,
        /// Frame the next tick runs on.
        frame: FrameToken,
    },
    /// Settling back into bounds.
    Bouncing {
        /// Remaining correction.
        plan: BouncePlan,
        /// Frame the next tick runs on.
        frame: FrameToken,
    },
}

impl Phase {
    /// The state tag.
    #[must_use]
    pub fn state(&self) -> ThrowState {
        match self {
            Self::Idle => ThrowState::Idle,
            Self::Dragging(_) => ThrowState::Dragging,
            Self::Throwing { .. } => ThrowState::Throwing,
            Self::Bouncing { .. } => ThrowState::Bouncing,
        }
    }

    /// Returns `true` while a throw or bounce is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Throwing { .. } | Self::Bouncing { .. })
    }

    /// Frame this phase is waiting for, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameToken> {
        match self {
            Self::Throwing { frame, .. } | Self::Bouncing { frame, .. } => Some(*frame),
            Self::Idle | Self::Dragging(_) => None,
        }
    }

    /// Timer this phase is waiting for, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerToken> {
        match self {
            Self::Dragging(session) => session.debounce,
            _ => None,
        }
    }
}
