// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion index and placement rect inside a drop target.
//!
//! ## Algorithm
//!
//! Children rects are measured through the [`LayoutHost`] once per target and
//! kept relative to the target's top-left corner, together with the pointer.
//! The nearest child and the main-axis midpoint decide the index (see
//! [`insertion_index`]). The placement rect is then
//! *materialized*: the calculator's probe element is inserted before the child
//! at that index (or appended), measured, and removed again. The host's layout
//! therefore decides where the indicator goes, whatever its flow model is.
//!
//! ## Cache
//!
//! Children rects are cached per parent element and stamped with a
//! generation. Target changes and scrolls bump the generation, so stale
//! entries are ignored and pruned on the next insert. There is no mutation
//! observer: after changing the target's children while a drag is in
//! progress, call [`PlacementCalculator::handle_target_change`] again.

use hashbrown::HashMap;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::geometry::insertion_index;
use crate::host::LayoutHost;

/// Where a dropped item would land.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement<K> {
    /// The drop target.
    pub target: K,
    /// Bounding rect of the target, in viewport coordinates.
    pub target_rect: Rect,
    /// Insertion index among the target's children, in `0..=child_count`.
    pub index: usize,
    /// Probe rect at `index`, relative to the top-left of `target_rect`.
    ///
    /// Usually degenerate along the main axis (the probe has no size).
    pub rect: Rect,
}

impl<K> Placement<K> {
    /// The placement rect translated back into viewport coordinates.
    pub fn viewport_rect(&self) -> Rect {
        self.rect + self.target_rect.origin().to_vec2()
    }
}

#[derive(Clone, Debug)]
struct CachedChildren {
    generation: u64,
    rects: SmallVec<[Rect; 8]>,
    /// Child index of each entry in `rects`; unmeasurable children have none.
    indices: SmallVec<[usize; 8]>,
}

impl CachedChildren {
    /// Map an insertion slot among the measured rects back to a child index.
    fn child_index(&self, slot: usize) -> usize {
        match self.indices.get(slot) {
            Some(ix) => *ix,
            None => self.indices.last().map_or(0, |ix| ix + 1),
        }
    }
}

/// Computes the [`Placement`] for the current target and pointer.
///
/// Each calculator owns one probe element, created through the host on first
/// use and reused for every later measurement.
#[derive(Debug)]
pub struct PlacementCalculator<K> {
    target: Option<K>,
    target_rect: Rect,
    pointer: Option<Point>,
    last: Option<Placement<K>>,
    force_emit: bool,
    dirty: bool,
    generation: u64,
    children: HashMap<K, CachedChildren>,
    probe: Option<K>,
}

impl<K> Default for PlacementCalculator<K> {
    fn default() -> Self {
        Self {
            target: None,
            target_rect: Rect::ZERO,
            pointer: None,
            last: None,
            force_emit: false,
            dirty: false,
            generation: 0,
            children: HashMap::new(),
            probe: None,
        }
    }
}

impl<K> PlacementCalculator<K>
where
    K: Clone + Eq + core::hash::Hash + core::fmt::Debug,
{
    /// Create an idle calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current target.
    pub fn target(&self) -> Option<&K> {
        self.target.as_ref()
    }

    /// The last emitted placement, if any.
    pub fn placement(&self) -> Option<&Placement<K>> {
        self.last.as_ref()
    }

    /// The probe element, once created.
    pub fn probe(&self) -> Option<&K> {
        self.probe.as_ref()
    }

    /// Record the pointer without recomputing.
    ///
    /// Useful right before [`Self::handle_target_change`] when the move that
    /// caused the target change should also position the placement.
    pub fn set_pointer(&mut self, point: Point) {
        self.pointer = Some(point);
    }

    /// Switch to a new target (or clear it with `None`).
    ///
    /// The children cache is invalidated and the next computation always
    /// emits, even if index and rects are unchanged. Without a known pointer
    /// the emission is deferred to the next [`Self::handle_move`].
    pub fn handle_target_change<H>(
        &mut self,
        host: &mut H,
        target: Option<K>,
    ) -> Option<Placement<K>>
    where
        H: LayoutHost<Element = K>,
    {
        self.generation = self.generation.wrapping_add(1);
        self.target_rect = target
            .as_ref()
            .and_then(|t| host.bounding_rect(t))
            .unwrap_or(Rect::ZERO);
        self.target = target;
        if self.target.is_none() {
            self.last = None;
            self.force_emit = false;
            self.dirty = false;
            return None;
        }
        self.force_emit = true;
        self.dirty = true;
        self.update(host)
    }

    /// Update the pointer and recompute. Emits only if the index, the
    /// placement rect, or the target rect changed.
    pub fn handle_move<H>(&mut self, host: &mut H, point: Point) -> Option<Placement<K>>
    where
        H: LayoutHost<Element = K>,
    {
        self.pointer = Some(point);
        self.update(host)
    }

    /// Re-measure after a scroll and recompute from the last pointer.
    pub fn handle_scroll<H>(&mut self, host: &mut H) -> Option<Placement<K>>
    where
        H: LayoutHost<Element = K>,
    {
        let target = self.target.as_ref()?;
        self.target_rect = host.bounding_rect(target).unwrap_or(Rect::ZERO);
        self.generation = self.generation.wrapping_add(1);
        self.dirty = true;
        self.update(host)
    }

    /// Drop all per-gesture state and detach the probe.
    ///
    /// The probe element itself is kept for the next gesture.
    pub fn handle_end<H>(&mut self, host: &mut H)
    where
        H: LayoutHost<Element = K>,
    {
        if let Some(probe) = &self.probe {
            host.remove(probe);
        }
        self.target = None;
        self.target_rect = Rect::ZERO;
        self.pointer = None;
        self.last = None;
        self.force_emit = false;
        self.dirty = false;
        self.children.clear();
    }

    fn update<H>(&mut self, host: &mut H) -> Option<Placement<K>>
    where
        H: LayoutHost<Element = K>,
    {
        let point = self.pointer?;
        let target = self.target.clone()?;
        let origin = self.target_rect.origin().to_vec2();

        self.refresh_children(host, &target, origin);
        let index = self.children.get(&target).map_or(0, |c| {
            c.child_index(insertion_index(&c.rects, point - origin))
        });

        let unchanged_index = self
            .last
            .as_ref()
            .is_some_and(|last| last.index == index && last.target == target);
        if !self.force_emit && !self.dirty && unchanged_index {
            return None;
        }

        let rect = self
            .materialize(host, &target, index)
            .map_or(Rect::ZERO, |r| r - origin);
        let placement = Placement {
            target,
            target_rect: self.target_rect,
            index,
            rect,
        };
        let emit = self.force_emit || self.last.as_ref() != Some(&placement);
        self.force_emit = false;
        self.dirty = false;
        if !emit {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(target = ?placement.target, index, "placement changed");
        self.last = Some(placement.clone());
        Some(placement)
    }

    fn refresh_children<H>(&mut self, host: &H, parent: &K, origin: Vec2)
    where
        H: LayoutHost<Element = K>,
    {
        let generation = self.generation;
        if self
            .children
            .get(parent)
            .is_some_and(|c| c.generation == generation)
        {
            return;
        }
        let mut rects = SmallVec::new();
        let mut indices = SmallVec::new();
        for ix in 0..host.child_count(parent) {
            let rect = host
                .child_at(parent, ix)
                .and_then(|child| host.bounding_rect(&child));
            if let Some(rect) = rect {
                rects.push(rect - origin);
                indices.push(ix);
            }
        }
        self.children.retain(|_, c| c.generation == generation);
        self.children.insert(
            parent.clone(),
            CachedChildren {
                generation,
                rects,
                indices,
            },
        );
    }

    fn materialize<H>(&mut self, host: &mut H, parent: &K, index: usize) -> Option<Rect>
    where
        H: LayoutHost<Element = K>,
    {
        if self.probe.is_none() {
            self.probe = host.create_probe();
        }
        let probe = self.probe.as_ref()?;
        let reference = host.child_at(parent, index);
        host.insert_before(parent, probe, reference.as_ref());
        let rect = host.bounding_rect(probe);
        host.remove(probe);
        rect
    }
}
