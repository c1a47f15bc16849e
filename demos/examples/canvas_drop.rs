// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropping onto an absolutely positioned canvas with nested containers.
//!
//! The board holds two card columns and a horizontal toolbar at fixed
//! positions. A card is dragged from the palette across a column edge, rests
//! there until the hold fires, then lands in the toolbar. A second gesture
//! starting on the empty board is canceled from the start notification and
//! produces nothing.
//!
//! Run:
//! - `cargo run -p understory_demos --example canvas_drop`

use kurbo::{Point, Rect, Size};
use understory_demos::{FlowDocument, Layout, NodeId};
use understory_drop::{DropSession, Indicator, LayoutHost, ResolverConfig};
use understory_event_state::drag::{DragRecognizer, DragStart};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let mut doc = FlowDocument::new(Size::new(800.0, 600.0));
    let board = doc.root();
    let palette = doc.add_at(
        board,
        "palette",
        Layout::Column { gap: 4.0 },
        Rect::new(10.0, 10.0, 90.0, 200.0),
    );
    let new_card = doc.add(palette, "new card", Layout::Canvas, Size::new(0.0, 30.0));

    let todo = doc.add_at(
        board,
        "todo",
        Layout::Column { gap: 8.0 },
        Rect::new(120.0, 40.0, 300.0, 400.0),
    );
    let done = doc.add_at(
        board,
        "done",
        Layout::Column { gap: 8.0 },
        Rect::new(340.0, 40.0, 520.0, 400.0),
    );
    for (column, name) in [(todo, "todo"), (done, "done")] {
        for i in 0..3 {
            doc.add(column, &format!("{name} {i}"), Layout::Canvas, Size::new(0.0, 60.0));
        }
    }
    let toolbar = doc.add_at(
        board,
        "toolbar",
        Layout::Row { gap: 6.0 },
        Rect::new(120.0, 440.0, 520.0, 480.0),
    );
    for i in 0..4 {
        doc.add(toolbar, &format!("tool {i}"), Layout::Canvas, Size::new(40.0, 0.0));
    }

    let containers = [todo, done, toolbar];
    let mut session = DropSession::with_config(
        ResolverConfig {
            edge_distance_threshold: 6.0,
            hold_time_threshold: 300,
        },
        move |e: &NodeId| containers.contains(e),
    );
    session.set_root(Some(board));
    let indicator = Indicator { thickness: 3.0 };

    let mut drag = DragRecognizer::new();
    let mut now = 0;

    // Drag from the palette, over the top edge of "todo", into its middle,
    // then down to the toolbar.
    let grab = Point::new(50.0, 25.0);
    drag.on_down(grab);
    let path = [
        (52.0, 26.0),
        (90.0, 60.0),
        (200.0, 42.0),
        (200.0, 150.0),
        (200.0, 152.0),
        (200.0, 153.0),
        (250.0, 460.0),
    ];
    for (x, y) in path {
        now += 120;
        let Some(point) = drag.on_move(Point::new(x, y), |_, _| DragStart::Accept) else {
            continue;
        };
        let update = session.handle_move(&mut doc, point, now);
        if let Some(hold) = update.hold {
            println!("hold over {}: expand it", doc.label(hold.target));
        }
        if let Some(change) = update.target {
            println!(
                "over {} at {:?}, rect {:?}",
                doc.label(change.target),
                change.area,
                change.rect
            );
        }
        if let Some(placement) = update.placement {
            println!(
                "  gap {} in {}, draw {:?}",
                placement.index,
                doc.label(placement.target),
                indicator.resolve(Some(placement.viewport_rect()))
            );
        }
    }
    if drag.on_up() {
        if let Some(placement) = session.handle_end(&mut doc) {
            doc.move_node(new_card, placement.target, placement.index);
        }
    }
    let tools: Vec<&str> = doc.children(toolbar).iter().map(|c| doc.label(*c)).collect();
    println!("toolbar: {}", tools.join(", "));

    // A gesture on the empty board is rejected before it starts.
    let empty = Point::new(700.0, 550.0);
    drag.on_down(empty);
    for dx in [1.0, 10.0, 40.0] {
        let moved = drag.on_move(empty + (dx, 0.0), |origin, _| {
            if doc.element_at_point(origin) == Some(board) {
                DragStart::Cancel
            } else {
                DragStart::Accept
            }
        });
        assert!(moved.is_none(), "canceled gestures never move");
    }
    println!("board gesture canceled: {:?}", drag.state());
    assert!(!drag.on_up(), "canceled gestures never end");
}
