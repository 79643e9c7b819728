#![no_main]

use libfuzzer_sys::fuzz_target;
use robust_segments::{farther_than, left_turn, Point};

fuzz_target!(|data: [(f64, f64); 4]| {
    let in_range = data
        .iter()
        .flat_map(|&(x, y)| [x, y])
        .all(|v| v == 0.0 || (v.abs() >= 1e-100 && v.abs() <= 1e100));
    if !in_range {
        return;
    }
    let [a1, a2, b, c] = data.map(Point::from);

    // b - c and c - b can not both point to the left of a1 -> a2
    assert!(!(farther_than(a1, a2, b, c) && farther_than(a1, a2, c, b)));
    // with c on a1 the cross product is the orientation of b
    assert_eq!(farther_than(a1, a2, b, a1), left_turn(a1, a2, b) == 1);
});
