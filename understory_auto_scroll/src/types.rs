// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration types for the auto-scroll controller.

bitflags::bitflags! {
    /// Axes along which auto-scrolling is allowed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ScrollAxes: u8 {
        /// Scroll left/right.
        const HORIZONTAL = 0b0000_0001;
        /// Scroll up/down.
        const VERTICAL   = 0b0000_0010;
    }
}

impl Default for ScrollAxes {
    fn default() -> Self {
        Self::HORIZONTAL | Self::VERTICAL
    }
}

/// Tuning for [`AutoScroll`](crate::AutoScroll).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScrollConfig {
    /// Distance from an edge (in pixels) within which scrolling starts.
    ///
    /// Capped at half the container size per axis so the two edges of a small
    /// container never overlap.
    pub edge_distance_threshold: f64,
    /// Speed at (or past) the edge, in pixels per second.
    pub max_speed: f64,
    /// Axes that may scroll.
    pub axes: ScrollAxes,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            edge_distance_threshold: 40.0,
            max_speed: 1000.0,
            axes: ScrollAxes::default(),
        }
    }
}
