// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory element tree with a tiny column/row/absolute layout, for tests.

use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::{Point, Rect, Size, Vec2};

use crate::host::LayoutHost;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Column,
    Row,
    Absolute,
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<usize>,
    children: Vec<usize>,
    flow: Flow,
    size: Size,
    /// Position inside an `Absolute` parent (or of the root).
    offset: Vec2,
    scroll: Vec2,
}

#[derive(Debug)]
pub(crate) struct TestDom {
    nodes: Vec<Node>,
    root: usize,
    pub(crate) probes_created: usize,
    pub(crate) measured: Cell<usize>,
    /// Elements whose rect cannot be measured.
    pub(crate) unmeasurable: Vec<usize>,
}

impl TestDom {
    pub(crate) fn new(root_rect: Rect, flow: Flow) -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            flow,
            size: root_rect.size(),
            offset: root_rect.origin().to_vec2(),
            scroll: Vec2::ZERO,
        };
        Self {
            nodes: alloc::vec![root],
            root: 0,
            probes_created: 0,
            measured: Cell::new(0),
            unmeasurable: Vec::new(),
        }
    }

    pub(crate) fn root(&self) -> usize {
        self.root
    }

    /// Append a child. A zero width in a column (or zero height in a row)
    /// stretches to the parent.
    pub(crate) fn add(&mut self, parent: usize, flow: Flow, size: Size) -> usize {
        self.add_at(parent, flow, size, Vec2::ZERO)
    }

    pub(crate) fn add_at(&mut self, parent: usize, flow: Flow, size: Size, offset: Vec2) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            flow,
            size,
            offset,
            scroll: Vec2::ZERO,
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Move an `Absolute` child, or the root itself.
    pub(crate) fn set_offset(&mut self, node: usize, offset: Vec2) {
        self.nodes[node].offset = offset;
    }

    pub(crate) fn scroll(&mut self, node: usize, delta: Vec2) {
        self.nodes[node].scroll += delta;
    }

    pub(crate) fn is_attached(&self, node: usize) -> bool {
        node == self.root || self.nodes[node].parent.is_some()
    }

    fn layout(&self, id: usize) -> Rect {
        let node = &self.nodes[id];
        let Some(parent_id) = node.parent else {
            return Rect::from_origin_size(node.offset.to_point(), node.size);
        };
        let parent = &self.nodes[parent_id];
        let outer = self.layout(parent_id);
        let origin = outer.origin() - parent.scroll;
        let preceding = parent.children.iter().take_while(|c| **c != id);
        match parent.flow {
            Flow::Column => {
                let y: f64 = preceding.map(|c| self.nodes[*c].size.height).sum();
                let width = if node.size.width == 0.0 {
                    outer.width()
                } else {
                    node.size.width
                };
                Rect::from_origin_size(
                    origin + Vec2::new(0.0, y),
                    Size::new(width, node.size.height),
                )
            }
            Flow::Row => {
                let x: f64 = preceding.map(|c| self.nodes[*c].size.width).sum();
                let height = if node.size.height == 0.0 {
                    outer.height()
                } else {
                    node.size.height
                };
                Rect::from_origin_size(
                    origin + Vec2::new(x, 0.0),
                    Size::new(node.size.width, height),
                )
            }
            Flow::Absolute => Rect::from_origin_size(origin + node.offset, node.size),
        }
    }

    fn hit(&self, id: usize, point: Point) -> Option<usize> {
        if !self.layout(id).contains(point) {
            return None;
        }
        self.nodes[id]
            .children
            .iter()
            .rev()
            .find_map(|c| self.hit(*c, point))
            .or(Some(id))
    }
}

impl LayoutHost for TestDom {
    type Element = usize;

    fn element_at_point(&self, point: Point) -> Option<usize> {
        self.hit(self.root, point)
    }

    fn parent(&self, element: &usize) -> Option<usize> {
        self.nodes.get(*element)?.parent
    }

    fn bounding_rect(&self, element: &usize) -> Option<Rect> {
        if *element >= self.nodes.len()
            || !self.is_attached(*element)
            || self.unmeasurable.contains(element)
        {
            return None;
        }
        self.measured.set(self.measured.get() + 1);
        Some(self.layout(*element))
    }

    fn child_count(&self, parent: &usize) -> usize {
        self.nodes.get(*parent).map_or(0, |n| n.children.len())
    }

    fn child_at(&self, parent: &usize, index: usize) -> Option<usize> {
        self.nodes.get(*parent)?.children.get(index).copied()
    }

    fn create_probe(&mut self) -> Option<usize> {
        self.probes_created += 1;
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            flow: Flow::Absolute,
            size: Size::ZERO,
            offset: Vec2::ZERO,
            scroll: Vec2::ZERO,
        });
        Some(id)
    }

    fn insert_before(&mut self, parent: &usize, node: &usize, reference: Option<&usize>) {
        let at = reference
            .and_then(|r| self.nodes[*parent].children.iter().position(|c| c == r))
            .unwrap_or(self.nodes[*parent].children.len());
        self.nodes[*parent].children.insert(at, *node);
        self.nodes[*node].parent = Some(*parent);
    }

    fn remove(&mut self, node: &usize) {
        if let Some(parent) = self.nodes[*node].parent.take() {
            self.nodes[parent].children.retain(|c| c != node);
        }
    }
}
