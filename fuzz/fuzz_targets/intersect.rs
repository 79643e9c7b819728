#![no_main]

use libfuzzer_sys::fuzz_target;
use robust_segments::{intersect, Point};

fuzz_target!(|data: [(f64, f64); 4]| {
    let in_range = data
        .iter()
        .flat_map(|&(x, y)| [x, y])
        .all(|v| v == 0.0 || (v.abs() >= 1e-100 && v.abs() <= 1e100));
    if !in_range {
        return;
    }
    let [a1, a2, b1, b2] = data.map(Point::from);

    let result = intersect(a1, a2, b1, b2);

    assert_eq!(result, intersect(b1, b2, a1, a2));
    assert_eq!(result, intersect(a2, a1, b1, b2));
    assert!(intersect(a1, a2, a2, b1));
});
