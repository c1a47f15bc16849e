// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge areas of a drop target.

use kurbo::{Point, Rect};

/// Where the pointer sits relative to the edges of a drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeArea {
    /// Within the threshold of the top edge.
    Top,
    /// Within the threshold of the right edge.
    Right,
    /// Within the threshold of the bottom edge.
    Bottom,
    /// Within the threshold of the left edge.
    Left,
    /// Away from every edge.
    #[default]
    Center,
}

impl EdgeArea {
    /// Classify `point` against `rect`.
    ///
    /// Edges are checked in the order top, bottom, left, right and a later
    /// match replaces an earlier one, so near a corner the horizontal edges
    /// (left/right) win over the vertical ones (top/bottom).
    pub fn classify(point: Point, rect: Rect, threshold: f64) -> Self {
        let mut area = Self::Center;
        if point.y - rect.y0 < threshold {
            area = Self::Top;
        }
        if rect.y1 - point.y < threshold {
            area = Self::Bottom;
        }
        if point.x - rect.x0 < threshold {
            area = Self::Left;
        }
        if rect.x1 - point.x < threshold {
            area = Self::Right;
        }
        area
    }
}
