// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time evaluation of a single point on the complex plane.
//!
//! A point belongs to the Julia set of C when its orbit under
//! f(z) = z² + C never leaves the circle of radius 2 around the
//! origin; outside that circle the orbit provably diverges.  We can't
//! iterate forever, so the evaluator runs a fixed number of steps and
//! treats survival as membership.

use num::Complex;

/// One application of the defining function f(z) = z² + C.
#[inline]
fn f(z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
    z * z + c
}

/// Exact equality of two complex values, down to the bit patterns of
/// their components.  Numeric `==` treats 0.0 and -0.0 as equal and
/// NaN as unequal to itself; the fixed-point shortcut wants "literally
/// the same value again", nothing looser.
#[inline]
fn identical(a: Complex<f64>, b: Complex<f64>) -> bool {
    a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
}

/// Decide whether the point `z` belongs to the Julia set of `c`,
/// iterating at most `limit` times.
///
/// Returns `Some(stage)` with the 0-based iteration at which the orbit
/// left the escape circle, or `None` when the point survived every
/// iteration and is taken to be in the set.  The squared distance is
/// compared against 4.0, which is the same test as distance > 2.0
/// without the square root.
///
/// An orbit that repeats a value exactly has reached a fixed point and
/// can never escape, so evaluation stops early and reports membership.
/// Only period-1 repetition is detected this way; a longer cycle runs
/// out the full iteration budget and classifies identically, just
/// slower.
pub fn escape_stage(z: Complex<f64>, c: Complex<f64>, limit: usize) -> Option<usize> {
    let mut current = z;
    for stage in 0..limit {
        let previous = current;
        current = f(current, c);
        if current.norm_sqr() > 4.0 {
            return Some(stage);
        }
        if identical(current, previous) {
            return None;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_a_fixed_point_of_zero_constant() {
        assert_eq!(escape_stage(Complex::new(0.0, 0.0), Complex::new(0.0, 0.0), 100), None);
    }

    #[test]
    fn unit_fixed_point_short_circuits() {
        // 1² + 0 = 1 forever; the shortcut fires on the first
        // iteration regardless of how large the bound is.
        assert_eq!(
            escape_stage(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), usize::max_value()),
            None
        );
    }

    #[test]
    fn far_point_is_eliminated_at_stage_zero() {
        assert_eq!(
            escape_stage(Complex::new(3.0, 0.0), Complex::new(0.0, 0.0), 100),
            Some(0)
        );
        assert_eq!(
            escape_stage(Complex::new(0.0, -2.5), Complex::new(0.0, 0.0), 100),
            Some(0)
        );
    }

    #[test]
    fn near_boundary_point_is_eliminated_later() {
        // 1.3 → 1.69 (still inside) → 2.8561 (out), eliminated at
        // stage 1.
        assert_eq!(
            escape_stage(Complex::new(1.3, 0.0), Complex::new(0.0, 0.0), 100),
            Some(1)
        );
    }

    #[test]
    fn period_two_orbit_survives_the_full_budget() {
        // With C = -1 the origin cycles 0 → -1 → 0 → …  The shortcut
        // only catches period-1 repetition, so this one runs all the
        // way to the bound and still classifies as a member.
        assert_eq!(
            escape_stage(Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0), 100),
            None
        );
    }
}
