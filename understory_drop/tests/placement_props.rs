// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the insertion index.

use kurbo::{Point, Rect};
use proptest::prelude::*;
use understory_drop::{insertion_index, nearest};

fn column(heights: &[f64]) -> Vec<Rect> {
    let mut y = 0.0;
    heights
        .iter()
        .map(|h| {
            let r = Rect::new(0.0, y, 100.0, y + h);
            y += h;
            r
        })
        .collect()
}

proptest! {
    #[test]
    fn index_is_within_bounds(
        heights in prop::collection::vec(1.0_f64..200.0, 0..16),
        x in -500.0_f64..500.0,
        y in -500.0_f64..3500.0,
    ) {
        let rects = column(&heights);
        let ix = insertion_index(&rects, Point::new(x, y));
        prop_assert!(ix <= rects.len());
    }

    #[test]
    fn index_is_nearest_or_one_past(
        heights in prop::collection::vec(1.0_f64..200.0, 1..16),
        y in -100.0_f64..3300.0,
    ) {
        let rects = column(&heights);
        let point = Point::new(50.0, y);
        let near = nearest(&rects, point).unwrap();
        let ix = insertion_index(&rects, point);
        prop_assert!(ix == near || ix == near + 1);
    }

    #[test]
    fn index_is_monotonic_down_a_column(
        heights in prop::collection::vec(1.0_f64..200.0, 1..16),
        a in -100.0_f64..3300.0,
        b in -100.0_f64..3300.0,
    ) {
        let rects = column(&heights);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let i_lo = insertion_index(&rects, Point::new(50.0, lo));
        let i_hi = insertion_index(&rects, Point::new(50.0, hi));
        prop_assert!(i_lo <= i_hi);
    }
}
