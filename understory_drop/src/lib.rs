// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drop --heading-base-level=0

//! Understory Drop: where does the dragged thing land?
//!
//! This crate answers the two questions a drag-and-drop interaction asks on
//! every pointer move: which container is under the pointer, and where among
//! that container's children the dragged item would be inserted. It never
//! lays anything out itself. Element lookup, measurement, and probing go
//! through the [`LayoutHost`] trait, so the same engine works for flow lists,
//! wrapped grids, and absolutely positioned canvases.
//!
//! - [`DropTargetResolver`]: hit test, ancestor walk with a caller predicate,
//!   [`EdgeArea`] classification, and hold detection.
//! - [`PlacementCalculator`]: insertion index by nearest child and midpoint,
//!   and a layout-correct placement rect measured with a probe element.
//! - [`DropSession`]: the two above wired together.
//! - [`Indicator`]: turns a placement rect into something drawable.
//!
//! The pure geometry is exposed as well, for hosts that already know their
//! children rects:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_drop::{Indicator, insertion_index};
//!
//! let rows = [
//!     Rect::new(0.0, 0.0, 200.0, 100.0),
//!     Rect::new(0.0, 100.0, 200.0, 200.0),
//!     Rect::new(0.0, 200.0, 200.0, 300.0),
//! ];
//! assert_eq!(insertion_index(&rows, Point::new(50.0, 50.0)), 0);
//! assert_eq!(insertion_index(&rows, Point::new(50.0, 150.0)), 1);
//! assert_eq!(insertion_index(&rows, Point::new(50.0, 260.0)), 3);
//!
//! // A zero-height insertion line becomes a 2px bar.
//! let bar = Indicator::default().resolve(Some(Rect::new(0.0, 100.0, 200.0, 100.0)));
//! assert_eq!(bar, Some(Rect::new(0.0, 99.0, 200.0, 101.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` floating-point support for `kurbo`.
//! - `tracing`: emit `tracing` events for target changes, holds, and
//!   placement updates.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edge;
mod geometry;
mod host;
mod indicator;
mod placement;
mod resolver;
mod session;

#[cfg(test)]
mod test_dom;

pub use edge::EdgeArea;
pub use geometry::{Orientation, distance_to_rect, insertion_index, nearest};
pub use host::LayoutHost;
pub use indicator::Indicator;
pub use placement::{Placement, PlacementCalculator};
pub use resolver::{DropTargetChange, DropTargetResolver, Hold, ResolverConfig};
pub use session::{DropSession, DropUpdate};
