//! The Pythagorean circle of fifths, and the 5-limit just scale derived from
//! it by syntonic-comma adjustment.

use crate::interval::Interval;
use crate::scale::Scale;

/// How far the circle of fifths extends on either side of the tonic.
const FIFTHS_FROM_TONIC: i32 = 6;

/// The classic 12-tone Pythagorean chromatic scale: perfect fifths stacked to
/// powers -6..+6 around the tonic (the tonic itself excluded), each
/// octave-reduced, closed with the octave. 13 entries, ascending.
pub fn scale() -> Scale {
    let fifth = Interval::perfect_fifth();
    let mut degrees: Scale = (-FIFTHS_FROM_TONIC..=FIFTHS_FROM_TONIC)
        .filter(|p| *p != 0)
        .map(|p| fifth.pow(p).octave_reduce())
        .collect();
    degrees.push(Interval::octave());
    degrees.sort();
    degrees
}

/// 5-limit just intonation obtained by adjusting the Pythagorean scale.
///
/// The four perfect consonances are kept unchanged. Every other degree is
/// composed once with the syntonic comma (81:80, acute) and once with its
/// reciprocal (80:81, grave); after octave reduction, the candidate with the
/// smaller denominator wins. This resolves the Pythagorean thirds, sixths
/// and sevenths to their simple just counterparts (81:64 becomes 5:4, and so
/// on). The acute and grave adjustments of the two tritones swap their
/// order, hence the final sort.
pub fn five_limit_scale() -> Scale {
    let comma = Interval::syntonic_comma();
    let mut degrees: Scale = scale()
        .iter()
        .map(|degree| {
            if degree.is_perfect() {
                return *degree;
            }
            let acute = degree.compose(&comma).octave_reduce();
            let grave = degree.compose(&comma.reciprocal()).octave_reduce();
            if acute.denominator() < grave.denominator() {
                acute
            } else {
                grave
            }
        })
        .collect();
    degrees.sort();
    degrees
}
