// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement indicator geometry.

use kurbo::Rect;

/// Turns a placement rect into the rect to draw.
///
/// Probe rects are usually zero-size along the main axis. The indicator
/// widens any degenerate axis to `thickness`, centered on the insertion line,
/// so the result can be filled directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicator {
    /// Minimum extent of the drawn rect on each axis.
    pub thickness: f64,
}

impl Default for Indicator {
    fn default() -> Self {
        Self { thickness: 2.0 }
    }
}

impl Indicator {
    /// The rect to draw for `placement`, or `None` to draw nothing.
    pub fn resolve(&self, placement: Option<Rect>) -> Option<Rect> {
        let rect = placement?.abs();
        let half = self.thickness / 2.0;
        let (x0, x1) = if rect.width() < self.thickness {
            let cx = rect.center().x;
            (cx - half, cx + half)
        } else {
            (rect.x0, rect.x1)
        };
        let (y0, y1) = if rect.height() < self.thickness {
            let cy = rect.center().y;
            (cy - half, cy + half)
        } else {
            (rect.y0, rect.y1)
        };
        Some(Rect::new(x0, y0, x1, y1))
    }
}
