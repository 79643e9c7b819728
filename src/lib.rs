#![cfg_attr(all(feature = "no_std", not(test)), no_std)]
// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Exact Segment Predicates for Planar Geometry
//! Orientation, segment-intersection and distance-comparison predicates over
//! `f64` points whose answers are always the ones infinite-precision arithmetic
//! would give on the same coordinates.
//!
//! Every predicate first evaluates its expression in plain floating-point
//! arithmetic together with a certified error bound. Only when the computed
//! value lies inside that bound is the expression re-evaluated exactly,
//! using the expansion arithmetic of Jonathan Richard Shewchuk
//! ([https://www.cs.cmu.edu/~quake/robust.html](https://www.cs.cmu.edu/~quake/robust.html)).
//! Near-degenerate inputs are therefore the only ones paying for exactness.
//!
//! All predicates are pure functions on values: they allocate nothing, keep
//! their scratch space on the stack and may be called from any thread.
//!
//! Coordinates must be finite and small enough that products of two of them
//! neither overflow nor underflow; other inputs give unspecified results.
//!
//! # Features
//! - `no_std`: Build without the Rust standard library

mod expansion;

use expansion::Expansion;
#[cfg(feature = "no_std")]
use ieee754::Ieee754;

/// A point in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

// Relative error bound shared by all fast paths: the two compared terms each
// carry at most three roundings, the difference one more.
const ERRBOUND: f64 = 4.0 * f64::EPSILON;

#[cfg(not(feature = "no_std"))]
#[inline(always)]
pub(crate) fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(feature = "no_std")]
#[inline(always)]
pub(crate) fn abs(x: f64) -> f64 {
    Ieee754::abs(x)
}

/// Sign of `t1 - t2` if it survives the rounding error of both terms.
#[inline(always)]
fn certified_sign(t1: f64, t2: f64, magnitude: f64) -> Option<i32> {
    if abs(t1 - t2) > ERRBOUND * magnitude {
        Some(if t1 > t2 { 1 } else { -1 })
    } else {
        None
    }
}

/// Returns `1` if `b` lies to the **left** of the directed line `a1 → a2`
/// (`a1`, `a2`, `b` occur in counterclockwise order).
/// Returns `-1` if `b` lies to the **right** of it (clockwise order).
/// Returns `0` if the three points are **collinear**.
///
/// Swapping `a1` and `a2` negates the result.
pub fn left_turn(a1: Point, a2: Point, b: Point) -> i32 {
    match fast_left_turn(a1, a2, b) {
        Some(sign) => sign,
        None => exact_left_turn(a1, a2, b),
    }
}

fn fast_left_turn(a1: Point, a2: Point, b: Point) -> Option<i32> {
    let t1 = (a2.x - a1.x) * (b.y - a1.y);
    let t2 = (a2.y - a1.y) * (b.x - a1.x);
    certified_sign(t1, t2, abs(t1) + abs(t2))
}

// Sign of
// a2.x * b.y - a2.x * a1.y - a1.x * b.y - a2.y * b.x + a2.y * a1.x + a1.y * b.x
fn exact_left_turn(a1: Point, a2: Point, b: Point) -> i32 {
    let p0 = Expansion::product(a2.x, b.y);
    let p1 = Expansion::product(-a2.x, a1.y);
    let p2 = Expansion::product(-a1.x, b.y);
    let p3 = Expansion::product(-a2.y, b.x);
    let p4 = Expansion::product(a2.y, a1.x);
    let p5 = Expansion::product(a1.y, b.x);

    let s01: Expansion<4> = p0.sum(&p1);
    let s23: Expansion<4> = p2.sum(&p3);
    let s45: Expansion<4> = p4.sum(&p5);

    let s0123: Expansion<8> = s01.sum(&s23);
    let det: Expansion<12> = s0123.sum(&s45);
    det.sign()
}

/// Returns `true` if the closed segments `a1a2` and `b1b2` have at least one
/// point in common, including touching at an endpoint and overlapping along a
/// common line.
///
/// The result does not depend on the order of the segments nor on the
/// direction of either one. A segment may be degenerate (`a1 == a2`).
pub fn intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    bounding_boxes_overlap(a1, a2, b1, b2)
        && left_turn(a1, a2, b1) * left_turn(a1, a2, b2) <= 0
        && left_turn(b1, b2, a1) * left_turn(b1, b2, a2) <= 0
}

fn bounding_boxes_overlap(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let min_ax = a1.x.min(a2.x);
    let min_ay = a1.y.min(a2.y);
    let max_ax = a1.x.max(a2.x);
    let max_ay = a1.y.max(a2.y);
    let min_bx = b1.x.min(b2.x);
    let min_by = b1.y.min(b2.y);
    let max_bx = b1.x.max(b2.x);
    let max_by = b1.y.max(b2.y);

    !(max_bx < min_ax || max_ax < min_bx) && !(max_by < min_ay || max_ay < min_by)
}

/// Returns `true` if the cross product of the direction `a1 → a2` with the
/// vector `c → b`,
///
/// `(a2.x - a1.x) * (b.y - c.y) - (a2.y - a1.y) * (b.x - c.x)`,
///
/// is strictly **positive**, i.e. if `b - c` points to the left of the
/// directed line `a1 → a2`. Parallel vectors give `false`.
pub fn farther_than(a1: Point, a2: Point, b: Point, c: Point) -> bool {
    match fast_farther_than(a1, a2, b, c) {
        Some(sign) => sign == 1,
        None => exact_farther_than(a1, a2, b, c) == 1,
    }
}

fn fast_farther_than(a1: Point, a2: Point, b: Point, c: Point) -> Option<i32> {
    let t1 = (a2.x - a1.x) * (b.y - c.y);
    let t2 = (a2.y - a1.y) * (b.x - c.x);
    certified_sign(t1, t2, abs(t1) + abs(t2))
}

// Sign of
// a2.x * b.y - a2.x * c.y - a1.x * b.y + a1.x * c.y
//     - a2.y * b.x + a2.y * c.x + a1.y * b.x - a1.y * c.x
fn exact_farther_than(a1: Point, a2: Point, b: Point, c: Point) -> i32 {
    let p0 = Expansion::product(a2.x, b.y);
    let p1 = Expansion::product(-a2.x, c.y);
    let p2 = Expansion::product(-a1.x, b.y);
    let p3 = Expansion::product(a1.x, c.y);
    let p4 = Expansion::product(-a2.y, b.x);
    let p5 = Expansion::product(a2.y, c.x);
    let p6 = Expansion::product(a1.y, b.x);
    let p7 = Expansion::product(-a1.y, c.x);

    let s01: Expansion<4> = p0.sum(&p1);
    let s23: Expansion<4> = p2.sum(&p3);
    let s45: Expansion<4> = p4.sum(&p5);
    let s67: Expansion<4> = p6.sum(&p7);

    let s0123: Expansion<8> = s01.sum(&s23);
    let s4567: Expansion<8> = s45.sum(&s67);
    let det: Expansion<16> = s0123.sum(&s4567);
    det.sign()
}

/// Compares the lengths of the segments `a1a2` and `b1b2`.
///
/// Returns `1` if `a1a2` is **longer**, `-1` if it is **shorter** and `0` if
/// both segments have exactly the **same length**.
pub fn compare_distance(a1: Point, a2: Point, b1: Point, b2: Point) -> i32 {
    match fast_compare_distance(a1, a2, b1, b2) {
        Some(sign) => sign,
        None => exact_compare_distance(a1, a2, b1, b2),
    }
}

fn fast_compare_distance(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<i32> {
    let adx = a2.x - a1.x;
    let ady = a2.y - a1.y;
    let bdx = b2.x - b1.x;
    let bdy = b2.y - b1.y;
    let a = adx * adx + ady * ady;
    let b = bdx * bdx + bdy * bdy;
    certified_sign(a, b, a + b)
}

// Sign of
// (a2.x - a1.x)^2 + (a2.y - a1.y)^2 - (b2.x - b1.x)^2 - (b2.y - b1.y)^2
// expanded into twelve products of input coordinates. Doubling is exact.
fn exact_compare_distance(a1: Point, a2: Point, b1: Point, b2: Point) -> i32 {
    let p0 = Expansion::product(a2.x, a2.x);
    let p1 = Expansion::product(-2.0 * a2.x, a1.x);
    let p2 = Expansion::product(a1.x, a1.x);
    let p3 = Expansion::product(a2.y, a2.y);
    let p4 = Expansion::product(-2.0 * a2.y, a1.y);
    let p5 = Expansion::product(a1.y, a1.y);

    let p6 = Expansion::product(-b2.x, b2.x);
    let p7 = Expansion::product(2.0 * b2.x, b1.x);
    let p8 = Expansion::product(-b1.x, b1.x);
    let p9 = Expansion::product(-b2.y, b2.y);
    let p10 = Expansion::product(2.0 * b2.y, b1.y);
    let p11 = Expansion::product(-b1.y, b1.y);

    let s01: Expansion<4> = p0.sum(&p1);
    let s23: Expansion<4> = p2.sum(&p3);
    let s45: Expansion<4> = p4.sum(&p5);
    let s67: Expansion<4> = p6.sum(&p7);
    let s89: Expansion<4> = p8.sum(&p9);
    let s1011: Expansion<4> = p10.sum(&p11);

    let s0123: Expansion<8> = s01.sum(&s23);
    let s4567: Expansion<8> = s45.sum(&s67);
    let s891011: Expansion<8> = s89.sum(&s1011);

    let s0to7: Expansion<16> = s0123.sum(&s4567);
    let det: Expansion<24> = s0to7.sum(&s891011);
    det.sign()
}
