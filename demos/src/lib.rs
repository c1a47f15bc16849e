// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small retained document used by the demos as both layout and scroll host.
//!
//! Nodes are laid out in columns, rows, or on a free canvas. Scroll offsets are
//! clamped to the content extent, and hit testing clips to each ancestor, so a
//! scrolled list behaves like a real scroll container.

use kurbo::{Point, Rect, Size, Vec2};
use understory_auto_scroll::ScrollHost;
use understory_drop::LayoutHost;

/// Handle to a node in a [`FlowDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

/// How a node lays out its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layout {
    /// Top to bottom with `gap` between children. Zero-width children stretch.
    Column {
        /// Space between consecutive children.
        gap: f64,
    },
    /// Left to right with `gap` between children. Zero-height children stretch.
    Row {
        /// Space between consecutive children.
        gap: f64,
    },
    /// Children are placed at their own position.
    Canvas,
}

#[derive(Clone, Debug)]
struct Node {
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: Layout,
    size: Size,
    position: Point,
    scroll: Vec2,
}

/// In-memory document implementing [`LayoutHost`] and [`ScrollHost`].
#[derive(Clone, Debug)]
pub struct FlowDocument {
    nodes: Vec<Node>,
    root: NodeId,
    frame_requested: bool,
}

impl FlowDocument {
    /// A document whose root is a canvas of the given size.
    pub fn new(size: Size) -> Self {
        let root = Node {
            label: "root".into(),
            parent: None,
            children: Vec::new(),
            layout: Layout::Canvas,
            size,
            position: Point::ZERO,
            scroll: Vec2::ZERO,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            frame_requested: false,
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a flowed child to `parent`.
    pub fn add(&mut self, parent: NodeId, label: &str, layout: Layout, size: Size) -> NodeId {
        self.push(Some(parent), label, layout, size, Point::ZERO)
    }

    /// Append a child placed at `rect` inside a canvas `parent`.
    pub fn add_at(&mut self, parent: NodeId, label: &str, layout: Layout, rect: Rect) -> NodeId {
        self.push(Some(parent), label, layout, rect.size(), rect.origin())
    }

    /// Label of `node`.
    pub fn label(&self, node: NodeId) -> &str {
        self.node(node).map_or("", |n| n.label.as_str())
    }

    /// Children of `node` in order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map_or(&[], |n| n.children.as_slice())
    }

    /// Current scroll offset of `node`.
    pub fn scroll_offset(&self, node: NodeId) -> Vec2 {
        self.node(node).map_or(Vec2::ZERO, |n| n.scroll)
    }

    /// Whether a frame was requested since the last call.
    pub fn take_frame_request(&mut self) -> bool {
        core::mem::take(&mut self.frame_requested)
    }

    /// Move `node` into `parent` at insertion gap `gap`.
    ///
    /// `gap` counts positions between the parent's current children, the way a
    /// placement index does. When the node already lives in `parent` before
    /// the gap, removing it shifts the gap down by one.
    pub fn move_node(&mut self, node: NodeId, parent: NodeId, gap: usize) {
        let mut to = gap;
        if let Some(old) = self.node(node).and_then(|n| n.parent) {
            if old == parent && self.index_in_parent(node).is_some_and(|from| from < to) {
                to -= 1;
            }
            if let Some(p) = self.node_mut(old) {
                p.children.retain(|c| *c != node);
            }
        }
        if let Some(p) = self.node_mut(parent) {
            let to = to.min(p.children.len());
            p.children.insert(to, node);
        }
        if let Some(n) = self.node_mut(node) {
            n.parent = Some(parent);
        }
    }

    /// Laid-out rect of `node` in viewport coordinates.
    pub fn rect(&self, node: NodeId) -> Option<Rect> {
        let this = self.node(node)?;
        let Some(parent_id) = this.parent else {
            return Some(Rect::from_origin_size(this.position, this.size));
        };
        let parent = self.node(parent_id)?;
        let outer = self.rect(parent_id)?;
        let origin = outer.origin() - parent.scroll;
        let preceding = parent.children.iter().take_while(|c| **c != node);
        let rect = match parent.layout {
            Layout::Column { gap } => {
                let y: f64 = preceding
                    .filter_map(|c| self.node(*c))
                    .map(|n| n.size.height + gap)
                    .sum();
                let width = if this.size.width == 0.0 {
                    outer.width()
                } else {
                    this.size.width
                };
                Rect::from_origin_size(
                    origin + Vec2::new(0.0, y),
                    Size::new(width, this.size.height),
                )
            }
            Layout::Row { gap } => {
                let x: f64 = preceding
                    .filter_map(|c| self.node(*c))
                    .map(|n| n.size.width + gap)
                    .sum();
                let height = if this.size.height == 0.0 {
                    outer.height()
                } else {
                    this.size.height
                };
                Rect::from_origin_size(
                    origin + Vec2::new(x, 0.0),
                    Size::new(this.size.width, height),
                )
            }
            Layout::Canvas => Rect::from_origin_size(origin + this.position.to_vec2(), this.size),
        };
        Some(rect)
    }

    fn push(
        &mut self,
        parent: Option<NodeId>,
        label: &str,
        layout: Layout,
        size: Size,
        position: Point,
    ) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            label: label.into(),
            parent,
            children: Vec::new(),
            layout,
            size,
            position,
            scroll: Vec2::ZERO,
        });
        if let Some(p) = parent.and_then(|p| self.node_mut(p)) {
            p.children.push(id);
        }
        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.node(node)?.parent?;
        self.children(parent).iter().position(|c| *c == node)
    }

    fn content_size(&self, id: NodeId) -> Size {
        let Some(node) = self.node(id) else {
            return Size::ZERO;
        };
        let sizes = node.children.iter().filter_map(|c| self.node(*c));
        match node.layout {
            Layout::Column { gap } => {
                let n = node.children.len() as f64;
                let h: f64 = sizes.map(|c| c.size.height).sum();
                Size::new(node.size.width, h + gap * (n - 1.0).max(0.0))
            }
            Layout::Row { gap } => {
                let n = node.children.len() as f64;
                let w: f64 = sizes.map(|c| c.size.width).sum();
                Size::new(w + gap * (n - 1.0).max(0.0), node.size.height)
            }
            Layout::Canvas => sizes.fold(node.size, |acc, c| {
                Size::new(
                    acc.width.max(c.position.x + c.size.width),
                    acc.height.max(c.position.y + c.size.height),
                )
            }),
        }
    }

    fn hit(&self, id: NodeId, point: Point) -> Option<NodeId> {
        if !self.rect(id)?.contains(point) {
            return None;
        }
        self.children(id)
            .iter()
            .rev()
            .find_map(|c| self.hit(*c, point))
            .or(Some(id))
    }
}

impl LayoutHost for FlowDocument {
    type Element = NodeId;

    fn element_at_point(&self, point: Point) -> Option<NodeId> {
        self.hit(self.root, point)
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.node(*element)?.parent
    }

    fn bounding_rect(&self, element: &NodeId) -> Option<Rect> {
        let attached = *element == self.root || self.node(*element)?.parent.is_some();
        if !attached {
            return None;
        }
        self.rect(*element)
    }

    fn child_count(&self, parent: &NodeId) -> usize {
        self.children(*parent).len()
    }

    fn child_at(&self, parent: &NodeId, index: usize) -> Option<NodeId> {
        self.children(*parent).get(index).copied()
    }

    fn create_probe(&mut self) -> Option<NodeId> {
        Some(self.push(None, "probe", Layout::Canvas, Size::ZERO, Point::ZERO))
    }

    fn insert_before(&mut self, parent: &NodeId, node: &NodeId, reference: Option<&NodeId>) {
        let at = reference
            .and_then(|r| self.children(*parent).iter().position(|c| c == r))
            .unwrap_or_else(|| self.children(*parent).len());
        if let Some(p) = self.node_mut(*parent) {
            p.children.insert(at, *node);
        }
        if let Some(n) = self.node_mut(*node) {
            n.parent = Some(*parent);
        }
    }

    fn remove(&mut self, node: &NodeId) {
        let Some(parent) = self.node_mut(*node).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| c != node);
        }
    }
}

impl ScrollHost for FlowDocument {
    type Target = NodeId;

    fn bounding_rect(&self, target: &NodeId) -> Option<Rect> {
        self.rect(*target)
    }

    fn scroll_by(&mut self, target: &NodeId, delta: Vec2) {
        let content = self.content_size(*target);
        let Some(node) = self.node_mut(*target) else {
            return;
        };
        let max = Vec2::new(
            (content.width - node.size.width).max(0.0),
            (content.height - node.size.height).max(0.0),
        );
        let next = node.scroll + delta;
        node.scroll = Vec2::new(next.x.clamp(0.0, max.x), next.y.clamp(0.0, max.y));
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> (FlowDocument, NodeId, Vec<NodeId>) {
        let mut doc = FlowDocument::new(Size::new(400.0, 400.0));
        let root = doc.root();
        let list = doc.add_at(
            root,
            "list",
            Layout::Column { gap: 0.0 },
            Rect::new(0.0, 0.0, 200.0, 100.0),
        );
        let rows = (0..4)
            .map(|i| doc.add(list, &format!("row {i}"), Layout::Canvas, Size::new(0.0, 40.0)))
            .collect();
        (doc, list, rows)
    }

    #[test]
    fn move_within_parent_accounts_for_the_gap() {
        let (mut doc, list, rows) = list();
        // Row 0 dropped into the gap before row 2 lands between rows 1 and 2.
        doc.move_node(rows[0], list, 2);
        assert_eq!(doc.children(list), &[rows[1], rows[0], rows[2], rows[3]]);
        // Row 3 dropped into the first gap moves to the front.
        doc.move_node(rows[3], list, 0);
        assert_eq!(doc.children(list), &[rows[3], rows[1], rows[0], rows[2]]);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let (mut doc, list, rows) = list();
        ScrollHost::scroll_by(&mut doc, &list, Vec2::new(0.0, 500.0));
        assert_eq!(doc.scroll_offset(list), Vec2::new(0.0, 60.0));
        assert_eq!(doc.rect(rows[0]), Some(Rect::new(0.0, -60.0, 200.0, -20.0)));
        ScrollHost::scroll_by(&mut doc, &list, Vec2::new(0.0, -500.0));
        assert_eq!(doc.scroll_offset(list), Vec2::ZERO);
    }

    #[test]
    fn hits_are_clipped_by_ancestors() {
        let (doc, list, rows) = list();
        assert_eq!(doc.element_at_point(Point::new(10.0, 50.0)), Some(rows[1]));
        // Row 2 starts at y=80 inside the list, row 3 is clipped away.
        assert_eq!(doc.element_at_point(Point::new(10.0, 130.0)), Some(doc.root()));
        assert_eq!(doc.element_at_point(Point::new(10.0, 90.0)), Some(rows[2]));
        assert_eq!(doc.parent(&rows[2]), Some(list));
    }
}
