//! Exact rational intervals, the foundation of every just and Pythagorean
//! computation. Comparison and equality work by cross-multiplication (via
//! [num_rational::Ratio]), never through floating point, so sorting and
//! tie-breaking are free of rounding drift.

use std::fmt;

use num_rational::Ratio;
use num_traits::Pow;

pub mod catalogue;

/// A frequency ratio relative to a tonic, kept in lowest terms.
///
/// The two terms are always positive: constructing an interval with a zero
/// denominator is a programming error (no well-formed ratio input produces
/// one) and panics, it is not a runtime error a caller can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(Ratio<u64>);

impl Interval {
    /// Build an interval from a raw ratio, reducing it to lowest terms.
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Interval(Ratio::new(numerator, denominator))
    }

    pub fn unison() -> Self {
        Interval::new(1, 1)
    }

    pub fn octave() -> Self {
        Interval::new(2, 1)
    }

    pub fn perfect_fifth() -> Self {
        Interval::new(3, 2)
    }

    /// The discrepancy between four stacked fifths and a major third plus
    /// two octaves, 81:80.
    pub fn syntonic_comma() -> Self {
        Interval::new(81, 80)
    }

    pub fn numerator(&self) -> u64 {
        *self.0.numer()
    }

    pub fn denominator(&self) -> u64 {
        *self.0.denom()
    }

    pub fn is_unison(&self) -> bool {
        *self == Interval::unison()
    }

    pub fn is_octave(&self) -> bool {
        *self == Interval::octave()
    }

    /// Whether this is one of the four perfect consonances (unison, fourth,
    /// fifth, octave) that survive comma adjustment unchanged.
    pub fn is_perfect(&self) -> bool {
        self.is_unison()
            || *self == Interval::new(4, 3)
            || *self == Interval::perfect_fifth()
            || self.is_octave()
    }

    /// Stack `other` on top of `self`: multiply the ratios and reduce.
    pub fn compose(&self, other: &Interval) -> Interval {
        Interval(self.0 * other.0)
    }

    /// The interval between `self` and `other`: the larger divided by the
    /// smaller, so the result is never below the unison.
    pub fn difference(&self, other: &Interval) -> Interval {
        if self.0 >= other.0 {
            Interval(self.0 / other.0)
        } else {
            Interval(other.0 / self.0)
        }
    }

    pub fn reciprocal(&self) -> Interval {
        Interval(self.0.recip())
    }

    /// `self` stacked onto itself `n` times. A negative `n` stacks the
    /// reciprocal, which is how fifths below the tonic enter the circle of
    /// fifths.
    pub fn pow(&self, n: i32) -> Interval {
        Interval(Pow::pow(self.0, n))
    }

    /// Double the numerator (below unison) or the denominator (at or above
    /// the octave) until the value lies in `[1, 2)`.
    pub fn octave_reduce(&self) -> Interval {
        let mut n = self.numerator();
        let mut d = self.denominator();
        while n < d {
            n *= 2;
        }
        while n >= 2 * d {
            d *= 2;
        }
        Interval(Ratio::new(n, d))
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }

    /// Size of the interval in cents, 1200 per octave.
    pub fn cents(&self) -> f64 {
        1200.0 * self.as_f64().log2()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator(), self.denominator())
    }
}
