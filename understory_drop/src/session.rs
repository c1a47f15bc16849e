// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A resolver and a calculator wired together for one drag gesture at a time.

use kurbo::Point;

use crate::host::LayoutHost;
use crate::placement::{Placement, PlacementCalculator};
use crate::resolver::{DropTargetChange, DropTargetResolver, Hold, ResolverConfig};

/// Everything that changed during one call into a [`DropSession`].
#[derive(Clone, Debug, PartialEq)]
pub struct DropUpdate<K> {
    /// A hold fired on the target the pointer was resting on.
    pub hold: Option<Hold<K>>,
    /// The drop target or its edge area changed.
    pub target: Option<DropTargetChange<K>>,
    /// The placement changed.
    pub placement: Option<Placement<K>>,
}

impl<K> DropUpdate<K> {
    /// True when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.hold.is_none() && self.target.is_none() && self.placement.is_none()
    }
}

impl<K> Default for DropUpdate<K> {
    fn default() -> Self {
        Self {
            hold: None,
            target: None,
            placement: None,
        }
    }
}

/// Feeds target changes from a [`DropTargetResolver`] into a
/// [`PlacementCalculator`].
///
/// Forward pointer moves, container scrolls, and timer ticks; read the final
/// placement from [`DropSession::handle_end`] when the drag ends.
///
/// ```
/// # use understory_drop::{DropSession, LayoutHost};
/// # fn drive<H: LayoutHost<Element = u32>>(host: &mut H, root: u32) {
/// let mut session = DropSession::new(|e: &u32| *e != 7);
/// session.set_root(Some(root));
/// let update = session.handle_move(host, kurbo::Point::new(10.0, 10.0), 0);
/// if let Some(placement) = update.placement {
///     let _line = placement.viewport_rect();
/// }
/// let _dropped = session.handle_end(host);
/// # }
/// ```
pub struct DropSession<K, F> {
    resolver: DropTargetResolver<K, F>,
    calculator: PlacementCalculator<K>,
}

impl<K: core::fmt::Debug, F> core::fmt::Debug for DropSession<K, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DropSession")
            .field("resolver", &self.resolver)
            .field("calculator", &self.calculator)
            .finish()
    }
}

impl<K, F> DropSession<K, F>
where
    K: Clone + Eq + core::hash::Hash + core::fmt::Debug,
    F: Fn(&K) -> bool,
{
    /// Create a session with the default resolver configuration.
    pub fn new(is_drop_target: F) -> Self {
        Self::with_config(ResolverConfig::default(), is_drop_target)
    }

    /// Create a session with a custom resolver configuration.
    pub fn with_config(config: ResolverConfig, is_drop_target: F) -> Self {
        Self {
            resolver: DropTargetResolver::with_config(config, is_drop_target),
            calculator: PlacementCalculator::new(),
        }
    }

    /// Register (or clear) the root element.
    pub fn set_root(&mut self, root: Option<K>) {
        self.resolver.set_root(root);
    }

    /// The drop-target resolver.
    pub fn resolver(&self) -> &DropTargetResolver<K, F> {
        &self.resolver
    }

    /// The placement calculator.
    pub fn calculator(&self) -> &PlacementCalculator<K> {
        &self.calculator
    }

    /// The last emitted placement.
    pub fn placement(&self) -> Option<&Placement<K>> {
        self.calculator.placement()
    }

    /// Handle a pointer move at time `now` (ms).
    pub fn handle_move<H>(&mut self, host: &mut H, point: Point, now: u64) -> DropUpdate<K>
    where
        H: LayoutHost<Element = K>,
    {
        let hold = self.resolver.poll_hold(now);
        let previous = self.resolver.target().cloned();
        let target = self.resolver.handle_move(&*host, point, now);
        let placement = if self.resolver.target() != previous.as_ref() {
            self.calculator.set_pointer(point);
            self.calculator
                .handle_target_change(host, self.resolver.target().cloned())
        } else {
            self.calculator.handle_move(host, point)
        };
        DropUpdate {
            hold,
            target,
            placement,
        }
    }

    /// Handle a scroll of any container under the root.
    pub fn handle_scroll<H>(&mut self, host: &mut H, now: u64) -> DropUpdate<K>
    where
        H: LayoutHost<Element = K>,
    {
        let hold = self.resolver.poll_hold(now);
        let previous = self.resolver.target().cloned();
        let target = self.resolver.handle_scroll(&*host, now);
        let placement = if self.resolver.target() != previous.as_ref() {
            self.calculator
                .handle_target_change(host, self.resolver.target().cloned())
        } else {
            self.calculator.handle_scroll(host)
        };
        DropUpdate {
            hold,
            target,
            placement,
        }
    }

    /// Poll the hold timer without a move, e.g. from a frame callback.
    pub fn tick(&mut self, now: u64) -> Option<Hold<K>> {
        self.resolver.poll_hold(now)
    }

    /// End the gesture and return the placement to drop at, if any.
    ///
    /// Both components are reset, so the next gesture starts clean.
    pub fn handle_end<H>(&mut self, host: &mut H) -> Option<Placement<K>>
    where
        H: LayoutHost<Element = K>,
    {
        let placement = self.calculator.placement().cloned();
        self.resolver.handle_end();
        self.resolver.reset();
        self.calculator.handle_end(host);
        #[cfg(feature = "tracing")]
        tracing::debug!(?placement, "drop session ended");
        placement
    }
}
