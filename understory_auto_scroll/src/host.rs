// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seam for measuring, scrolling, and scheduling frames.

use kurbo::{Rect, Vec2};

/// Services the auto-scroll controller needs from its environment.
///
/// In a browser this maps to `getBoundingClientRect`, `scrollBy`, and
/// `requestAnimationFrame`; in tests it is usually a small struct that records
/// calls.
pub trait ScrollHost {
    /// Handle to a scrollable element.
    type Target;

    /// Bounding rect of `target` in the same space as pointer positions.
    ///
    /// Returning `None` (for example for a detached element) stops scrolling.
    fn bounding_rect(&self, target: &Self::Target) -> Option<Rect>;

    /// Scroll `target` by `delta` pixels.
    fn scroll_by(&mut self, target: &Self::Target, delta: Vec2);

    /// Ask for [`AutoScroll::step`](crate::AutoScroll::step) to be called on
    /// the next animation frame.
    fn request_frame(&mut self);
}
