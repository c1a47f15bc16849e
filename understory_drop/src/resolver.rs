// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-target resolution: hit test, ancestor walk, edge areas, and hold.
//!
//! ## Resolution
//!
//! On each move the resolver hit-tests the pointer, then walks from the hit
//! element towards the registered root. The first ancestor accepted by the
//! caller predicate becomes the drop target; if none is accepted (or the walk
//! leaves the root's subtree) the root itself is the target. The root is never
//! passed to the predicate.
//!
//! ## Hold
//!
//! Each target change restarts a hold deadline. Hosts poll it with
//! [`DropTargetResolver::poll_hold`] from a timer or frame callback; the hold
//! fires once per target if the pointer stays on it past the threshold, which
//! is the usual trigger for expanding a collapsed container.

use kurbo::{Point, Rect};

use crate::edge::EdgeArea;
use crate::host::LayoutHost;

/// Tuning for [`DropTargetResolver`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolverConfig {
    /// Distance from an edge (in pixels) that counts as that edge's area.
    pub edge_distance_threshold: f64,
    /// Time (milliseconds) the pointer must stay on one target before a hold
    /// fires.
    pub hold_time_threshold: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            edge_distance_threshold: 3.0,
            hold_time_threshold: 500,
        }
    }
}

/// Notification that the drop target or its edge area changed.
#[derive(Clone, Debug, PartialEq)]
pub struct DropTargetChange<K> {
    /// The resolved drop target.
    pub target: K,
    /// Bounding rect of the target, measured when it became the target (or on
    /// the last scroll). [`Rect::ZERO`] if the host could not measure it.
    pub rect: Rect,
    /// Edge area of the pointer within `rect`.
    pub area: EdgeArea,
}

/// Notification that the pointer rested on a target past the hold threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hold<K> {
    /// The target being held over.
    pub target: K,
}

/// Resolves the drop target under the pointer.
///
/// `F` is the caller's drop-target predicate. It should be pure; it is invoked
/// once per candidate ancestor on every move.
pub struct DropTargetResolver<K, F> {
    config: ResolverConfig,
    is_drop_target: F,
    root: Option<K>,
    target: Option<K>,
    rect: Rect,
    area: Option<EdgeArea>,
    pointer: Option<Point>,
    hold_deadline: Option<u64>,
}

impl<K: core::fmt::Debug, F> core::fmt::Debug for DropTargetResolver<K, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DropTargetResolver")
            .field("config", &self.config)
            .field("root", &self.root)
            .field("target", &self.target)
            .field("area", &self.area)
            .field("hold_deadline", &self.hold_deadline)
            .finish_non_exhaustive()
    }
}

impl<K, F> DropTargetResolver<K, F>
where
    K: Clone + PartialEq + core::fmt::Debug,
    F: Fn(&K) -> bool,
{
    /// Create a resolver with the default configuration.
    pub fn new(is_drop_target: F) -> Self {
        Self::with_config(ResolverConfig::default(), is_drop_target)
    }

    /// Create a resolver with a custom configuration.
    pub fn with_config(config: ResolverConfig, is_drop_target: F) -> Self {
        Self {
            config,
            is_drop_target,
            root: None,
            target: None,
            rect: Rect::ZERO,
            area: None,
            pointer: None,
            hold_deadline: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Register (or clear) the root element. Moves are ignored without one.
    pub fn set_root(&mut self, root: Option<K>) {
        self.root = root;
    }

    /// The registered root.
    pub fn root(&self) -> Option<&K> {
        self.root.as_ref()
    }

    /// The current drop target.
    pub fn target(&self) -> Option<&K> {
        self.target.as_ref()
    }

    /// Cached rect of the current drop target.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Edge area from the last move.
    pub fn area(&self) -> Option<EdgeArea> {
        self.area
    }

    /// Resolve the drop target for a pointer move at time `now` (ms).
    ///
    /// Returns a change when the target or the edge area differs from the last
    /// move. Without a root, or when nothing is under the pointer, the move is
    /// ignored.
    pub fn handle_move<H>(
        &mut self,
        host: &H,
        point: Point,
        now: u64,
    ) -> Option<DropTargetChange<K>>
    where
        H: LayoutHost<Element = K>,
    {
        let root = self.root.as_ref()?;
        let hit = host.element_at_point(point)?;
        let target = self.resolve(host, root, hit);
        self.pointer = Some(point);

        let retarget = self.target.as_ref() != Some(&target);
        if retarget {
            self.rect = host.bounding_rect(&target).unwrap_or(Rect::ZERO);
            self.hold_deadline = Some(now.saturating_add(self.config.hold_time_threshold));
            #[cfg(feature = "tracing")]
            tracing::debug!(?target, "drop target changed");
            self.target = Some(target.clone());
        }

        let area = EdgeArea::classify(point, self.rect, self.config.edge_distance_threshold);
        let area_changed = self.area != Some(area);
        self.area = Some(area);

        (retarget || area_changed).then(|| DropTargetChange {
            target,
            rect: self.rect,
            area,
        })
    }

    /// Re-measure the target and re-resolve from the last pointer position
    /// after the container scrolled.
    ///
    /// Reports a change if the target, its rect, or the edge area changed.
    pub fn handle_scroll<H>(&mut self, host: &H, now: u64) -> Option<DropTargetChange<K>>
    where
        H: LayoutHost<Element = K>,
    {
        let point = self.pointer?;
        let old_rect = self.rect;
        if let Some(target) = &self.target {
            self.rect = host.bounding_rect(target).unwrap_or(Rect::ZERO);
        }
        let change = self.handle_move(host, point, now);
        if change.is_some() || self.rect == old_rect {
            return change;
        }
        // Only the rect moved, or nothing is under the pointer. Classify against the new rect.
        let target = self.target.clone()?;
        let area = EdgeArea::classify(point, self.rect, self.config.edge_distance_threshold);
        self.area = Some(area);
        Some(DropTargetChange {
            target,
            rect: self.rect,
            area,
        })
    }

    /// Fire the hold notification if the deadline for the current target has
    /// passed. Fires at most once per target.
    pub fn poll_hold(&mut self, now: u64) -> Option<Hold<K>> {
        let deadline = self.hold_deadline?;
        if now < deadline {
            return None;
        }
        self.hold_deadline = None;
        let target = self.target.clone()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?target, "drop target hold");
        Some(Hold { target })
    }

    /// Stop the pending hold timer.
    ///
    /// The current target and area are kept; use [`Self::reset`] to forget
    /// them as well.
    pub fn handle_end(&mut self) {
        self.hold_deadline = None;
    }

    /// Forget the target, area, pointer, and hold timer. The root stays
    /// registered.
    pub fn reset(&mut self) {
        self.target = None;
        self.rect = Rect::ZERO;
        self.area = None;
        self.pointer = None;
        self.hold_deadline = None;
    }

    fn resolve<H>(&self, host: &H, root: &K, hit: K) -> K
    where
        H: LayoutHost<Element = K>,
    {
        let mut current = Some(hit);
        while let Some(element) = current {
            if element == *root {
                break;
            }
            if (self.is_drop_target)(&element) {
                return element;
            }
            current = host.parent(&element);
        }
        root.clone()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::test_dom::{Flow, TestDom};

    /// Root column with two 100px sections, each holding two 40px rows.
    fn tree() -> (TestDom, [usize; 6]) {
        let mut dom = TestDom::new(Rect::new(0.0, 0.0, 200.0, 400.0), Flow::Column);
        let root = dom.root();
        let a = dom.add(root, Flow::Column, Size::new(0.0, 100.0));
        let a1 = dom.add(a, Flow::Column, Size::new(0.0, 40.0));
        let a2 = dom.add(a, Flow::Column, Size::new(0.0, 40.0));
        let b = dom.add(root, Flow::Column, Size::new(0.0, 100.0));
        let b1 = dom.add(b, Flow::Column, Size::new(0.0, 40.0));
        (dom, [root, a, a1, a2, b, b1])
    }

    #[test]
    fn walks_to_first_accepted_ancestor() {
        let (dom, [root, a, _, _, b, _]) = tree();
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a || *e == b);
        resolver.set_root(Some(root));

        let change = resolver.handle_move(&dom, Point::new(50.0, 20.0), 0).unwrap();
        assert_eq!(change.target, a);
        assert_eq!(change.rect, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(change.area, EdgeArea::Center);

        let change = resolver.handle_move(&dom, Point::new(50.0, 120.0), 10).unwrap();
        assert_eq!(change.target, b);
    }

    #[test]
    fn falls_back_to_root() {
        let (dom, [root, ..]) = tree();
        let mut resolver = DropTargetResolver::new(|_: &usize| false);
        resolver.set_root(Some(root));

        let change = resolver.handle_move(&dom, Point::new(50.0, 20.0), 0).unwrap();
        assert_eq!(change.target, root);
    }

    #[test]
    fn root_is_never_offered_to_the_predicate() {
        let (dom, [root, ..]) = tree();
        let seen = core::cell::RefCell::new(alloc::vec::Vec::new());
        let mut resolver = DropTargetResolver::new(|e: &usize| {
            seen.borrow_mut().push(*e);
            false
        });
        resolver.set_root(Some(root));
        resolver.handle_move(&dom, Point::new(50.0, 20.0), 0);

        assert!(!seen.borrow().contains(&root));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn no_root_or_no_hit_is_a_no_op() {
        let (dom, [root, a, ..]) = tree();
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a);
        assert!(resolver.handle_move(&dom, Point::new(50.0, 20.0), 0).is_none());
        assert!(resolver.target().is_none());

        resolver.set_root(Some(root));
        assert!(resolver.handle_move(&dom, Point::new(-50.0, 20.0), 0).is_none());
        assert!(resolver.target().is_none());
    }

    #[test]
    fn same_target_and_area_is_quiet() {
        let (dom, [root, a, ..]) = tree();
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a);
        resolver.set_root(Some(root));

        assert!(resolver.handle_move(&dom, Point::new(50.0, 20.0), 0).is_some());
        assert!(resolver.handle_move(&dom, Point::new(60.0, 30.0), 5).is_none());
    }

    #[test]
    fn area_change_is_reported_without_retarget() {
        let (dom, [root, a, ..]) = tree();
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a);
        resolver.set_root(Some(root));
        resolver.handle_move(&dom, Point::new(50.0, 20.0), 0);

        let change = resolver.handle_move(&dom, Point::new(50.0, 98.0), 5).unwrap();
        assert_eq!(change.target, a);
        assert_eq!(change.area, EdgeArea::Bottom);

        let change = resolver.handle_move(&dom, Point::new(1.0, 98.0), 6).unwrap();
        assert_eq!(change.area, EdgeArea::Left);
    }

    #[test]
    fn hold_fires_once_after_threshold() {
        let (dom, [root, a, ..]) = tree();
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a);
        resolver.set_root(Some(root));
        resolver.handle_move(&dom, Point::new(50.0, 20.0), 1000);

        assert_eq!(resolver.poll_hold(1499), None);
        resolver.handle_move(&dom, Point::new(55.0, 25.0), 1400);
        assert_eq!(resolver.poll_hold(1500), Some(Hold { target: a }));
        assert_eq!(resolver.poll_hold(2500), None);
    }

    #[test]
    fn retarget_restarts_hold() {
        let (dom, [root, a, _, _, b, _]) = tree();
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a || *e == b);
        resolver.set_root(Some(root));
        resolver.handle_move(&dom, Point::new(50.0, 20.0), 0);
        resolver.handle_move(&dom, Point::new(50.0, 120.0), 400);

        assert_eq!(resolver.poll_hold(600), None);
        assert_eq!(resolver.poll_hold(900), Some(Hold { target: b }));
    }

    #[test]
    fn end_clears_only_the_hold() {
        let (dom, [root, a, ..]) = tree();
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a);
        resolver.set_root(Some(root));
        resolver.handle_move(&dom, Point::new(50.0, 20.0), 0);
        resolver.handle_end();

        assert_eq!(resolver.poll_hold(10_000), None);
        assert_eq!(resolver.target(), Some(&a));
        assert_eq!(resolver.area(), Some(EdgeArea::Center));

        resolver.reset();
        assert_eq!(resolver.target(), None);
    }

    #[test]
    fn scroll_remeasures_and_retargets() {
        let (mut dom, [root, a, _, _, b, _]) = tree();
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a || *e == b);
        resolver.set_root(Some(root));
        resolver.handle_move(&dom, Point::new(50.0, 150.0), 0);
        assert_eq!(resolver.target(), Some(&b));

        // Scrolling the root by 10px moves `b` up; same target, new rect.
        dom.scroll(root, kurbo::Vec2::new(0.0, 10.0));
        let change = resolver.handle_scroll(&dom, 10).unwrap();
        assert_eq!(change.target, b);
        assert_eq!(change.rect, Rect::new(0.0, 90.0, 200.0, 190.0));

        // Scrolling another 60px brings the pointer off `b`'s rows and past its end.
        dom.scroll(root, kurbo::Vec2::new(0.0, 60.0));
        let change = resolver.handle_scroll(&dom, 20).unwrap();
        assert_eq!(change.target, root);
    }

    #[test]
    fn scroll_without_hit_classifies_against_new_rect() {
        let mut dom = TestDom::new(Rect::new(0.0, 0.0, 200.0, 300.0), Flow::Column);
        let root = dom.root();
        let a = dom.add(root, Flow::Column, Size::new(0.0, 300.0));
        let mut resolver = DropTargetResolver::new(move |e: &usize| *e == a);
        resolver.set_root(Some(root));
        let change = resolver.handle_move(&dom, Point::new(100.0, 150.0), 0).unwrap();
        assert_eq!(change.area, EdgeArea::Center);

        // The whole viewport moves up and leaves nothing under the pointer.
        dom.set_offset(root, kurbo::Vec2::new(0.0, -200.0));
        assert_eq!(dom.element_at_point(Point::new(100.0, 150.0)), None);
        let change = resolver.handle_scroll(&dom, 10).unwrap();
        assert_eq!(change.target, a);
        assert_eq!(change.rect, Rect::new(0.0, -200.0, 200.0, 100.0));
        assert_eq!(change.area, EdgeArea::Bottom);
        assert_eq!(resolver.area(), Some(EdgeArea::Bottom));
    }
}
