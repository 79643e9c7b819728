// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact floating-point expansion arithmetic.
//!
//! An expansion stores a real number as the exact sum of nonoverlapping `f64`
//! components, ordered from the least to the most significant one. The
//! error-free transformations below never round away information, so an
//! expansion built from products and sums of input coordinates carries the
//! exact value of the polynomial it was assembled from.
//!
//! Refer: Shewchuk, "Adaptive Precision Floating-Point Arithmetic and Fast
//! Robust Geometric Predicates" ([https://www.cs.cmu.edu/~quake/robust.html](https://www.cs.cmu.edu/~quake/robust.html)).

use crate::abs;

// 2^ceil(53 / 2) + 1, the "exactinit" splitter for IEEE-754 doubles.
const SPLITTER: f64 = 134_217_729f64;

/// A fixed-capacity expansion of at most `N` components.
///
/// Only the first `len` components are meaningful. Zero components are
/// eliminated while summing, except that an expansion of value zero keeps a
/// single `0.0` component.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Expansion<const N: usize> {
    components: [f64; N],
    len: usize,
}

impl Expansion<2> {
    /// The exact product `a * b` as a two-component expansion.
    #[inline]
    pub(crate) fn product(a: f64, b: f64) -> Self {
        let (x, y) = two_product(a, b);
        Expansion {
            components: [y, x],
            len: 2,
        }
    }
}

impl<const N: usize> Expansion<N> {
    pub(crate) fn components(&self) -> &[f64] {
        &self.components[..self.len]
    }

    /// Exact sum of `self` and `other`.
    ///
    /// The capacity `K` of the result must hold `N + M` components.
    #[inline]
    pub(crate) fn sum<const M: usize, const K: usize>(&self, other: &Expansion<M>) -> Expansion<K> {
        debug_assert!(K >= N + M, "expansion capacity {} < {} + {}", K, N, M);
        let mut components = [0.0f64; K];
        let len = fast_expansion_sum_zeroelim(self.components(), other.components(), &mut components);
        debug_assert!(
            is_increasing(&components[..len]),
            "expansion components out of order: {:?}",
            &components[..len]
        );
        Expansion { components, len }
    }

    /// Sign of the exact value: `1`, `-1` or `0`.
    #[inline]
    pub(crate) fn sign(&self) -> i32 {
        sign(self.components())
    }

    /// Floating-point approximation of the exact value.
    #[cfg(test)]
    pub(crate) fn estimate(&self) -> f64 {
        self.components().iter().sum()
    }
}

/// Sign of a nonoverlapping expansion, read from its most significant
/// nonzero component.
pub(crate) fn sign(e: &[f64]) -> i32 {
    for &component in e.iter().rev() {
        if component > 0.0 {
            return 1;
        }
        if component < 0.0 {
            return -1;
        }
    }
    0
}

/// Nonzero components of a nonoverlapping expansion strictly grow in magnitude.
pub(crate) fn is_increasing(e: &[f64]) -> bool {
    e.windows(2).all(|pair| abs(pair[0]) < abs(pair[1]))
}

/// Sums the nonoverlapping expansions `e` and `f` into `h`, dropping zero
/// components, and returns the number of components written.
///
/// `e` and `f` must each hold at least one component and `h` must hold
/// `e.len() + f.len()`.
pub(crate) fn fast_expansion_sum_zeroelim(e: &[f64], f: &[f64], h: &mut [f64]) -> usize {
    let mut eindex = 0;
    let mut findex = 0;
    let mut hindex = 0;

    let mut enow = e[0];
    let mut fnow = f[0];
    let mut q = if (fnow > enow) == (fnow > -enow) {
        eindex += 1;
        enow
    } else {
        findex += 1;
        fnow
    };

    if eindex < e.len() && findex < f.len() {
        enow = e[eindex];
        fnow = f[findex];
        let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
            eindex += 1;
            fast_two_sum(enow, q)
        } else {
            findex += 1;
            fast_two_sum(fnow, q)
        };
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }

        while eindex < e.len() && findex < f.len() {
            enow = e[eindex];
            fnow = f[findex];
            let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
                eindex += 1;
                two_sum(q, enow)
            } else {
                findex += 1;
                two_sum(q, fnow)
            };
            q = qnew;
            if hh != 0.0 {
                h[hindex] = hh;
                hindex += 1;
            }
        }
    }

    for &component in e[eindex..].iter().chain(&f[findex..]) {
        let (qnew, hh) = two_sum(q, component);
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }

    if q != 0.0 || hindex == 0 {
        h[hindex] = q;
        hindex += 1;
    }
    hindex
}

/// `x + y == a * b` exactly, where `x` is the rounded product.
#[inline]
pub(crate) fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    (x, two_product_tail(a, b, x))
}

#[inline]
fn two_product_tail(a: f64, b: f64, x: f64) -> f64 {
    let (ahi, alo) = split(a);
    let (bhi, blo) = split(b);
    let err1 = x - (ahi * bhi);
    let err2 = err1 - (alo * bhi);
    let err3 = err2 - (ahi * blo);
    (alo * blo) - err3
}

/// Splits `a` into two halves of at most 26 significant bits each.
#[inline]
fn split(a: f64) -> (f64, f64) {
    let c = SPLITTER * a;
    let abig = c - a;
    let ahi = c - abig;
    let alo = a - ahi;
    (ahi, alo)
}

/// `x + y == a + b` exactly, where `x` is the rounded sum.
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let bvirt = x - a;
    let avirt = x - bvirt;
    let bround = b - bvirt;
    let around = a - avirt;
    (x, around + bround)
}

/// Like [`two_sum`], but requires `|a| >= |b|`.
#[inline]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let bvirt = x - a;
    (x, b - bvirt)
}
