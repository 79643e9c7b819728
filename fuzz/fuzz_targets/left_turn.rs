#![no_main]

use libfuzzer_sys::fuzz_target;
use robust_segments::{left_turn, Point};

// Keeps products of two coordinates away from overflow and underflow.
fn in_range(data: &[(f64, f64)]) -> bool {
    data.iter()
        .flat_map(|&(x, y)| [x, y])
        .all(|v| v == 0.0 || (v.abs() >= 1e-100 && v.abs() <= 1e100))
}

fuzz_target!(|data: [(f64, f64); 3]| {
    if !in_range(&data) {
        return;
    }
    let a1 = Point::from(data[0]);
    let a2 = Point::from(data[1]);
    let b = Point::from(data[2]);

    let result = left_turn(a1, a2, b);

    assert!((-1..=1).contains(&result));
    assert_eq!(result, -left_turn(a2, a1, b));
    assert_eq!(left_turn(a1, a2, a1), 0);
});
