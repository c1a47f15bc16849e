// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The auto-scroll controller: speed computation and the frame loop.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::host::ScrollHost;
use crate::types::{AutoScrollConfig, ScrollAxes};

/// Fixed frame period (milliseconds) used to convert speeds to pixels per
/// frame and to throttle [`AutoScroll::step`].
pub const FRAME_PERIOD_MS: f64 = 30.0;

/// Signed scroll speed (pixels per second) along one axis.
///
/// `start..end` is the container extent on that axis and `pos` the pointer
/// coordinate. Negative values scroll towards `start`, positive values towards
/// `end`. Zero when the pointer is at least `threshold` away from both edges,
/// where `threshold = min((end - start) / 2, edge_distance_threshold)`.
pub fn axis_speed(
    pos: f64,
    start: f64,
    end: f64,
    edge_distance_threshold: f64,
    max_speed: f64,
) -> f64 {
    let threshold = ((end - start) / 2.0).min(edge_distance_threshold);
    if threshold <= 0.0 {
        return 0.0;
    }
    let to_start = pos - start;
    let to_end = end - pos;
    if to_start < threshold {
        -max_speed * ((threshold - to_start) / threshold).min(1.0)
    } else if to_end < threshold {
        max_speed * ((threshold - to_end) / threshold).min(1.0)
    } else {
        0.0
    }
}

/// Edge-triggered auto-scroll controller for one scrollable target.
///
/// ## Usage
///
/// - Bind the scrollable element with [`AutoScroll::set_target`].
/// - Arm it with [`AutoScroll::set_enabled`] when a drag starts.
/// - Call [`AutoScroll::handle_move`] on every drag move.
/// - Call [`AutoScroll::step`] from the host's frame callback whenever
///   [`ScrollHost::request_frame`] was called.
/// - Call [`AutoScroll::handle_end`] when the drag ends or is canceled.
#[derive(Clone, Debug)]
pub struct AutoScroll<K> {
    config: AutoScrollConfig,
    target: Option<K>,
    enabled: bool,
    prev_timestamp: Option<u64>,
    /// Pixels per frame.
    speed: Vec2,
    step_scheduled: bool,
}

impl<K> AutoScroll<K> {
    /// Create a disabled controller with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AutoScrollConfig::default())
    }

    /// Create a disabled controller with a custom configuration.
    pub fn with_config(config: AutoScrollConfig) -> Self {
        Self {
            config,
            target: None,
            enabled: false,
            prev_timestamp: None,
            speed: Vec2::ZERO,
            step_scheduled: false,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next move.
    pub fn set_config(&mut self, config: AutoScrollConfig) {
        self.config = config;
    }

    /// Bind (or unbind) the scrollable element.
    pub fn set_target(&mut self, target: Option<K>) {
        self.target = target;
        if self.target.is_none() {
            self.speed = Vec2::ZERO;
        }
    }

    /// The bound scrollable element.
    pub fn target(&self) -> Option<&K> {
        self.target.as_ref()
    }

    /// Whether scrolling is armed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current speed in pixels per frame.
    pub fn speed(&self) -> Vec2 {
        self.speed
    }

    /// Whether a frame has been requested and not yet delivered.
    pub fn is_step_scheduled(&self) -> bool {
        self.step_scheduled
    }

    /// Arm or disarm scrolling.
    ///
    /// Arming restarts the frame loop if the last computed speed is nonzero.
    /// Disarming lets an already requested frame run as a no-op.
    pub fn set_enabled<H>(&mut self, host: &mut H, enabled: bool)
    where
        H: ScrollHost<Target = K>,
    {
        self.enabled = enabled;
        if !enabled {
            self.prev_timestamp = None;
        }
        self.schedule(host);
    }

    /// Recompute the per-axis speed for a pointer position and (re)start the
    /// frame loop if needed.
    pub fn handle_move<H>(&mut self, host: &mut H, point: Point)
    where
        H: ScrollHost<Target = K>,
    {
        let rect = self.target.as_ref().and_then(|t| host.bounding_rect(t));
        self.speed = match rect {
            Some(rect) => {
                let cfg = &self.config;
                let x = if cfg.axes.contains(ScrollAxes::HORIZONTAL) {
                    axis_speed(
                        point.x,
                        rect.x0,
                        rect.x1,
                        cfg.edge_distance_threshold,
                        cfg.max_speed,
                    )
                } else {
                    0.0
                };
                let y = if cfg.axes.contains(ScrollAxes::VERTICAL) {
                    axis_speed(
                        point.y,
                        rect.y0,
                        rect.y1,
                        cfg.edge_distance_threshold,
                        cfg.max_speed,
                    )
                } else {
                    0.0
                };
                // Per axis, so a saturated speed is exactly `max_speed * period / 1000`.
                Vec2::new(x * FRAME_PERIOD_MS / 1000.0, y * FRAME_PERIOD_MS / 1000.0)
            }
            None => Vec2::ZERO,
        };
        self.schedule(host);
    }

    /// Frame callback.
    ///
    /// Scrolls by `speed * elapsed / FRAME_PERIOD_MS` once at least one frame
    /// period has passed since the previous scroll, then requests the next
    /// frame while the loop should keep running. The first step after the loop
    /// (re)starts only records `now`. Returns the applied scroll delta.
    pub fn step<H>(&mut self, host: &mut H, now: u64) -> Option<Vec2>
    where
        H: ScrollHost<Target = K>,
    {
        self.step_scheduled = false;
        if !self.is_active() {
            self.prev_timestamp = None;
            #[cfg(feature = "tracing")]
            tracing::debug!("auto-scroll loop stopped");
            return None;
        }
        let target = self.target.as_ref()?;

        let scrolled = match self.prev_timestamp {
            None => {
                self.prev_timestamp = Some(now);
                None
            }
            Some(prev) => {
                let elapsed = now.saturating_sub(prev) as f64;
                if elapsed < FRAME_PERIOD_MS {
                    None
                } else {
                    let delta = self.speed * (elapsed / FRAME_PERIOD_MS);
                    host.scroll_by(target, delta);
                    self.prev_timestamp = Some(now);
                    #[cfg(feature = "tracing")]
                    tracing::trace!(dx = delta.x, dy = delta.y, "auto-scroll step");
                    Some(delta)
                }
            }
        };
        self.schedule(host);
        scrolled
    }

    /// Stop scrolling at the end of a drag.
    ///
    /// A frame that is already requested still arrives and finishes as a
    /// no-op.
    pub fn handle_end(&mut self) {
        self.enabled = false;
        self.speed = Vec2::ZERO;
        self.prev_timestamp = None;
    }

    fn is_active(&self) -> bool {
        self.enabled
            && self.target.is_some()
            && (self.speed.x.round() != 0.0 || self.speed.y.round() != 0.0)
    }

    fn schedule<H>(&mut self, host: &mut H)
    where
        H: ScrollHost<Target = K>,
    {
        if self.step_scheduled || !self.is_active() {
            return;
        }
        self.step_scheduled = true;
        host.request_frame();
        #[cfg(feature = "tracing")]
        tracing::trace!(sx = self.speed.x, sy = self.speed.y, "auto-scroll frame requested");
    }
}

impl<K> Default for AutoScroll<K> {
    fn default() -> Self {
        Self::new()
    }
}
