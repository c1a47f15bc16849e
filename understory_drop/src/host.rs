// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout host seam.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect};

/// Element tree and layout services provided by the host.
///
/// The engine never measures or lays anything out itself. A browser host maps
/// these methods to `elementFromPoint`, `parentElement`,
/// `getBoundingClientRect`, `children`, `createElement`, `insertBefore`, and
/// `remove`; a native host maps them to its own scene. All rects and points
/// share one coordinate space (typically the viewport).
///
/// Methods return `Option` so hosts can report detached or unknown elements;
/// the engine treats `None` as "skip", never as an error.
pub trait LayoutHost {
    /// Cheap handle to an element.
    type Element: Clone + Eq + Hash + Debug;

    /// Topmost element under `point`.
    fn element_at_point(&self, point: Point) -> Option<Self::Element>;

    /// Parent of `element`, or `None` at the top of the tree.
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Border-box rect of `element`.
    fn bounding_rect(&self, element: &Self::Element) -> Option<Rect>;

    /// Number of children of `parent`.
    fn child_count(&self, parent: &Self::Element) -> usize;

    /// Child of `parent` at `index` in document order.
    fn child_at(&self, parent: &Self::Element, index: usize) -> Option<Self::Element>;

    /// Create a detached, zero-size element used to probe where a new child
    /// would be laid out.
    fn create_probe(&mut self) -> Option<Self::Element>;

    /// Insert `node` into `parent` before `reference`, or append it when
    /// `reference` is `None`.
    fn insert_before(
        &mut self,
        parent: &Self::Element,
        node: &Self::Element,
        reference: Option<&Self::Element>,
    );

    /// Detach `node` from its parent.
    fn remove(&mut self, node: &Self::Element);
}
