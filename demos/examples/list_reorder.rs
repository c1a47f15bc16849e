// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reordering a scrollable list: drag recognizer + drop session + auto-scroll.
//!
//! A scripted pointer grabs the second item, drags it to the bottom edge of the
//! list and rests there. The list auto-scrolls, every scroll is forwarded to
//! the drop session, and on release the item moves to the final placement.
//!
//! Run:
//! - `cargo run -p understory_demos --example list_reorder`

use kurbo::{Point, Rect, Size};
use understory_auto_scroll::{AutoScroll, AutoScrollConfig};
use understory_demos::{FlowDocument, Layout, NodeId};
use understory_drop::{DropSession, DropUpdate, Indicator, LayoutHost};
use understory_event_state::drag::{DragRecognizer, DragStart};

/// Milliseconds between simulated pointer events and frames.
const TICK_MS: u64 = 16;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let mut doc = FlowDocument::new(Size::new(400.0, 400.0));
    let root = doc.root();
    let list = doc.add_at(
        root,
        "list",
        Layout::Column { gap: 4.0 },
        Rect::new(20.0, 20.0, 220.0, 220.0),
    );
    for i in 0..12 {
        doc.add(list, &format!("Item {i}"), Layout::Canvas, Size::new(0.0, 36.0));
    }

    let mut drag = DragRecognizer::new();
    let mut session = DropSession::new(move |e: &NodeId| *e == list);
    session.set_root(Some(root));
    let mut scroll = AutoScroll::with_config(AutoScrollConfig {
        max_speed: 600.0,
        ..AutoScrollConfig::default()
    });
    scroll.set_target(Some(list));
    let indicator = Indicator::default();

    // Center of "Item 1".
    let grab = Point::new(120.0, 78.0);
    let Some(dragged) = doc.element_at_point(grab) else {
        return;
    };
    println!("grabbed {}", doc.label(dragged));

    let mut now = 0;
    drag.on_down(grab);
    let path = [
        (120.0, 80.0),
        (121.0, 81.0),
        (122.0, 95.0),
        (124.0, 130.0),
        (124.0, 170.0),
        (124.0, 210.0),
    ];
    for (x, y) in path {
        now += TICK_MS;
        let moved = drag.on_move(Point::new(x, y), |origin, _| {
            println!("drag pending from {origin:?}");
            DragStart::Accept
        });
        let Some(point) = moved else {
            continue;
        };
        if !scroll.is_enabled() {
            scroll.set_enabled(&mut doc, true);
        }
        scroll.handle_move(&mut doc, point);
        let update = session.handle_move(&mut doc, point, now);
        report(&doc, &indicator, update);
    }

    // Rest at the bottom edge and let frames drive auto-scroll.
    for _ in 0..20 {
        now += TICK_MS;
        if let Some(hold) = session.tick(now) {
            println!("hold over {}", doc.label(hold.target));
        }
        if !doc.take_frame_request() {
            continue;
        }
        if let Some(delta) = scroll.step(&mut doc, now) {
            println!(
                "auto-scrolled by {:.1}, offset {:.1}",
                delta.y,
                doc.scroll_offset(list).y
            );
            let update = session.handle_scroll(&mut doc, now);
            report(&doc, &indicator, update);
        }
    }

    if drag.on_up() {
        scroll.handle_end();
        if let Some(placement) = session.handle_end(&mut doc) {
            println!(
                "drop {} at gap {} of {}",
                doc.label(dragged),
                placement.index,
                doc.label(placement.target)
            );
            doc.move_node(dragged, placement.target, placement.index);
        }
    }

    let order: Vec<&str> = doc.children(list).iter().map(|c| doc.label(*c)).collect();
    println!("order: {}", order.join(", "));
}

fn report(doc: &FlowDocument, indicator: &Indicator, update: DropUpdate<NodeId>) {
    if let Some(hold) = update.hold {
        println!("hold over {}", doc.label(hold.target));
    }
    if let Some(change) = update.target {
        println!("target {} ({:?})", doc.label(change.target), change.area);
    }
    if let Some(placement) = update.placement {
        println!(
            "insert at {} in {}, indicator {:?}",
            placement.index,
            doc.label(placement.target),
            indicator.resolve(Some(placement.viewport_rect()))
        );
    }
}
