// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture recognition gated by a minimum movement threshold.
//!
//! [`DragRecognizer`] turns raw pointer down/move/up notifications into a drag
//! lifecycle: `Idle → Pending → Dragging → Idle`, with an optional detour to
//! `Canceled` when the host declines the gesture as it starts.
//!
//! ## Usage
//!
//! ```
//! use understory_event_state::drag::{DragRecognizer, DragStart, DragState};
//! use kurbo::Point;
//!
//! let mut drag = DragRecognizer::new();
//! drag.on_down(Point::new(10.0, 10.0));
//!
//! // The first move notifies the start callback; below threshold nothing moves.
//! let moved = drag.on_move(Point::new(12.0, 12.0), |_origin, _pos| DragStart::Accept);
//! assert_eq!(moved, None);
//!
//! // Crossing the 3px threshold on either axis starts the drag.
//! let moved = drag.on_move(Point::new(14.0, 10.0), |_, _| DragStart::Accept);
//! assert_eq!(moved, Some(Point::new(14.0, 10.0)));
//! assert!(matches!(drag.state(), DragState::Dragging { .. }));
//!
//! // Releasing reports that the move-end notification is due.
//! assert!(drag.on_up());
//! assert_eq!(drag.state(), DragState::Idle);
//! ```
//!
//! ## Cancellation
//!
//! The start callback runs exactly once per gesture, on the first move after
//! pointer down. Returning [`DragStart::Cancel`] moves the recognizer to
//! [`DragState::Canceled`]: no further moves are reported and the matching
//! pointer up does not request a move-end notification.
//!
//! ```
//! # use understory_event_state::drag::{DragRecognizer, DragStart};
//! # use kurbo::Point;
//! let mut drag = DragRecognizer::new();
//! drag.on_down(Point::ZERO);
//! assert_eq!(drag.on_move(Point::new(50.0, 0.0), |_, _| DragStart::Cancel), None);
//! assert_eq!(drag.on_move(Point::new(90.0, 0.0), |_, _| DragStart::Accept), None);
//! assert!(!drag.on_up());
//! ```

use kurbo::Point;

/// Default displacement (in pointer units) required before a drag starts.
pub const DEFAULT_START_DISTANCE_THRESHOLD: f64 = 3.0;

/// Lifecycle of a single drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No pointer is down.
    #[default]
    Idle,
    /// Pointer is down but has not moved far enough to count as a drag.
    Pending {
        /// Pointer position at pointer down.
        origin: Point,
    },
    /// Movement exceeded the start threshold.
    Dragging {
        /// Most recent pointer position.
        position: Point,
    },
    /// The start callback declined the gesture; ignored until pointer up.
    Canceled,
}

/// Decision returned from the start callback of [`DragRecognizer::on_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragStart {
    /// Keep tracking the gesture.
    Accept,
    /// Abort the gesture; suppresses all further moves and the move-end.
    Cancel,
}

/// Drag gesture recognizer for a single pointer.
///
/// Only one gesture is tracked at a time: a pointer down while another
/// gesture is active is ignored.
#[derive(Clone, Debug)]
pub struct DragRecognizer {
    state: DragState,
    origin: Option<Point>,
    started: bool,
    /// Per-axis displacement from the pointer-down origin that must be
    /// exceeded before the gesture becomes a drag.
    pub start_distance_threshold: f64,
}

impl DragRecognizer {
    /// Create a recognizer with the default 3px start threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_START_DISTANCE_THRESHOLD)
    }

    /// Create a recognizer with a custom start threshold.
    pub fn with_threshold(start_distance_threshold: f64) -> Self {
        Self {
            state: DragState::Idle,
            origin: None,
            started: false,
            start_distance_threshold,
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns `true` once the start threshold has been exceeded.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer-down position of the active gesture, if any.
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Record a pointer down.
    ///
    /// Returns `false` and leaves the state untouched if a gesture is already
    /// in progress.
    pub fn on_down(&mut self, position: Point) -> bool {
        if self.state != DragState::Idle {
            return false;
        }
        self.state = DragState::Pending { origin: position };
        self.origin = Some(position);
        self.started = false;
        true
    }

    /// Process a pointer move.
    ///
    /// `on_start` is invoked once, on the first move of the gesture, with the
    /// pointer-down origin and the current position. Returns `Some(position)`
    /// whenever the host should receive a move notification: on the move that
    /// crosses the threshold and on every move after it.
    pub fn on_move<F>(&mut self, position: Point, on_start: F) -> Option<Point>
    where
        F: FnOnce(Point, Point) -> DragStart,
    {
        let origin = match self.state {
            DragState::Idle | DragState::Canceled => return None,
            DragState::Dragging { .. } => {
                self.state = DragState::Dragging { position };
                return Some(position);
            }
            DragState::Pending { origin } => origin,
        };

        if !self.started {
            self.started = true;
            if on_start(origin, position) == DragStart::Cancel {
                self.cancel();
                return None;
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(x = origin.x, y = origin.y, "drag pending");
        }

        let delta = position - origin;
        let t = self.start_distance_threshold;
        if delta.x > t || delta.x < -t || delta.y > t || delta.y < -t {
            self.state = DragState::Dragging { position };
            #[cfg(feature = "tracing")]
            tracing::debug!(x = position.x, y = position.y, "drag started");
            Some(position)
        } else {
            None
        }
    }

    /// Cancel the pending gesture.
    ///
    /// Only reached through [`DragStart::Cancel`] from the start callback.
    /// Returns `false` unless the gesture is pending.
    fn cancel(&mut self) -> bool {
        if !matches!(self.state, DragState::Pending { .. }) {
            return false;
        }
        self.state = DragState::Canceled;
        #[cfg(feature = "tracing")]
        tracing::debug!("drag canceled");
        true
    }

    /// Process a pointer up and reset to [`DragState::Idle`].
    ///
    /// Returns `true` if the host should receive a move-end notification,
    /// that is, the start callback ran and the gesture was not canceled.
    pub fn on_up(&mut self) -> bool {
        let notify = self.started && self.state != DragState::Canceled;
        self.state = DragState::Idle;
        self.origin = None;
        self.started = false;
        #[cfg(feature = "tracing")]
        tracing::debug!(notify, "drag ended");
        notify
    }
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
