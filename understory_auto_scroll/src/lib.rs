// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_auto_scroll --heading-base-level=0

//! Understory Auto Scroll: edge-triggered scrolling while dragging.
//!
//! When a drag gets close to the edge of a scrollable container, the container
//! should scroll on its own so the pointer can reach content that is currently
//! out of view. This crate provides the controller for that behavior and leaves
//! measurement, scrolling, and frame scheduling to the host.
//!
//! - [`AutoScroll`]: the controller. Feed it pointer positions with
//!   [`AutoScroll::handle_move`] and drive it from the host's animation frame
//!   callback with [`AutoScroll::step`].
//! - [`ScrollHost`]: the host seam (bounding rect, scroll-by, frame requests).
//! - [`AutoScrollConfig`]: edge distance, maximum speed, and [`ScrollAxes`].
//!
//! ## Speed model
//!
//! Each axis is handled independently. With `threshold = min(size / 2,
//! edge_distance_threshold)`, a pointer closer than `threshold` to the near
//! edge scrolls backwards, closer than `threshold` to the far edge scrolls
//! forwards, and anything else is still. Speed grows linearly with proximity
//! and saturates at `max_speed` (pixels per second) once the pointer reaches or
//! crosses the edge. Speeds are stored per frame, using a fixed
//! [`FRAME_PERIOD_MS`].
//!
//! ## Frame loop
//!
//! The controller requests a frame only while it is enabled, bound to a target,
//! and at least one axis has a per-frame speed that rounds to a nonzero value.
//! Each [`AutoScroll::step`] clears the pending request, scrolls once a full
//! frame period has elapsed since the last scroll, and requests the next frame
//! if the conditions still hold. Hosts must deliver every requested frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_auto_scroll::{AutoScroll, ScrollHost};
//!
//! struct Viewport {
//!     rect: Rect,
//!     offset: Vec2,
//!     frame_requested: bool,
//! }
//!
//! impl ScrollHost for Viewport {
//!     type Target = ();
//!     fn bounding_rect(&self, _: &()) -> Option<Rect> {
//!         Some(self.rect)
//!     }
//!     fn scroll_by(&mut self, _: &(), delta: Vec2) {
//!         self.offset += delta;
//!     }
//!     fn request_frame(&mut self) {
//!         self.frame_requested = true;
//!     }
//! }
//!
//! let mut host = Viewport {
//!     rect: Rect::new(0.0, 0.0, 400.0, 400.0),
//!     offset: Vec2::ZERO,
//!     frame_requested: false,
//! };
//! let mut scroll = AutoScroll::new();
//! scroll.set_target(Some(()));
//! scroll.set_enabled(&mut host, true);
//!
//! // Pointer right at the bottom edge: full speed downwards.
//! scroll.handle_move(&mut host, Point::new(200.0, 400.0));
//! assert!(host.frame_requested);
//! assert!(scroll.speed().y > 0.0);
//!
//! // The first frame primes the clock, later frames scroll.
//! scroll.step(&mut host, 0);
//! scroll.step(&mut host, 30);
//! assert!(host.offset.y > 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` floating-point support for `kurbo`.
//! - `tracing`: emit `tracing` events for the frame loop.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod host;
mod types;

pub use controller::{AutoScroll, FRAME_PERIOD_MS, axis_speed};
pub use host::ScrollHost;
pub use types::{AutoScrollConfig, ScrollAxes};
