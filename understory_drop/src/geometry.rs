// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry behind placement: orientation, nearest child, insertion index.

use kurbo::{Point, Rect, Vec2};

/// Main axis along which a container's children are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Children stack top to bottom.
    Vertical,
    /// Children flow left to right.
    Horizontal,
}

impl Orientation {
    /// Guess the orientation from children rects.
    ///
    /// Vertical if there are fewer than two children or the first two share
    /// the same left edge, horizontal otherwise. This is a heuristic; it does
    /// not consult any computed style.
    pub fn detect(rects: &[Rect]) -> Self {
        match rects {
            [first, second, ..] if first.x0 != second.x0 => Self::Horizontal,
            _ => Self::Vertical,
        }
    }
}

/// Distance from `point` to the closest point of `rect`; zero inside.
pub fn distance_to_rect(point: Point, rect: Rect) -> f64 {
    let dx = (rect.x0 - point.x).max(0.0).max(point.x - rect.x1);
    let dy = (rect.y0 - point.y).max(0.0).max(point.y - rect.y1);
    Vec2::new(dx, dy).hypot()
}

/// Index of the rect closest to `point`. Ties keep the earliest rect.
pub fn nearest(rects: &[Rect], point: Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (ix, rect) in rects.iter().enumerate() {
        let d = distance_to_rect(point, *rect);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((ix, d));
        }
    }
    best.map(|(ix, _)| ix)
}

/// Insertion index for `point` among children `rects`, in `0..=rects.len()`.
///
/// The nearest child decides: a point up to and including its midpoint along
/// the main axis inserts before it, a point past the midpoint inserts after it.
/// `rects` and `point` must share a coordinate space.
pub fn insertion_index(rects: &[Rect], point: Point) -> usize {
    let Some(closest) = nearest(rects, point) else {
        return 0;
    };
    let rect = rects[closest];
    let before = match Orientation::detect(rects) {
        Orientation::Vertical => point.y <= rect.y0 + rect.height() / 2.0,
        Orientation::Horizontal => point.x <= rect.x0 + rect.width() / 2.0,
    };
    if before { closest } else { closest + 1 }
}
