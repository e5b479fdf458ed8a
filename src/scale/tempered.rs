//! Tempered scales: quarter-comma meantone (standard and extended) and the
//! Lehman reconstruction of Bach's well temperament.
//!
//! A tempered fifth is irrational, so unlike the just generators everything
//! here works in floating point, including octave reduction.

use crate::interval::Interval;

pub const SYNTONIC_COMMA: f64 = 81.0 / 80.0;

/// The fraction of a syntonic comma by which meantone narrows its fifths.
const MEANTONE_COMMA_FRACTION: f64 = 0.25;

/// Note names for the 13-degree standard meantone scale, tonic D. Index 0 is
/// the open string.
const MEANTONE_NOTE_NAMES: [&str; 13] = [
    "D", "Eb", "E", "F", "F#", "G", "G#", "Ab", "A", "Bb", "B", "C", "C#",
];

/// Note names for the 19-degree extended meantone scale, tonic D.
const EXTENDED_MEANTONE_NOTE_NAMES: [&str; 19] = [
    "D", "D#", "Eb", "E", "Fb", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B", "Cb",
    "C", "C#", "Db",
];

/// Interval names cycled through when labeling well-tempered degrees.
const WELL_TEMPERAMENT_DEGREE_NAMES: [&str; 12] = [
    "Unison",
    "Minor Second",
    "Major Second",
    "Minor Third",
    "Major Third",
    "Fourth",
    "Augmented Fourth",
    "Fifth",
    "Augmented Fifth",
    "Major Sixth",
    "Minor Seventh",
    "Major Seventh",
];

/// Per-fifth tempering fractions walking the circle of fifths from the
/// tonic, as decoded by Lehman ("Bach's Extraordinary Temperament: Our
/// Rosetta Stone", Early Music 33/1, 2005): pure, twelfth-comma-narrowed and
/// sixth-comma-narrowed fifths in a repeating pattern.
const LEHMAN_TEMPERING_FRACTIONS: [f64; 12] = [
    0.0,
    -1.0 / 12.0,
    -1.0 / 6.0,
    0.0,
    -1.0 / 6.0,
    -1.0 / 12.0,
    0.0,
    -1.0 / 6.0,
    -1.0 / 12.0,
    0.0,
    -1.0 / 6.0,
    -1.0 / 12.0,
];

/// A tempered scale: one octave of ratios in ascending order with the tonic
/// 1.0 first (the closing 2.0 octave is the renderer's business), plus the
/// positional names of the degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperedScale {
    pub ratios: Vec<f64>,
    pub names: &'static [&'static str],
}

/// Halve or double until the ratio lies in `[1, 2)`. The floating
/// counterpart of [Interval::octave_reduce][crate::interval::Interval],
/// needed because tempered ratios have no exact rational form.
pub fn octave_reduce(mut ratio: f64) -> f64 {
    while ratio >= 2.0 {
        ratio /= 2.0;
    }
    while ratio < 1.0 {
        ratio *= 2.0;
    }
    ratio
}

/// The quarter-comma tempered fifth, (3/2) * (81/80)^(-1/4).
fn tempered_fifth() -> f64 {
    Interval::perfect_fifth().as_f64() * SYNTONIC_COMMA.powf(-MEANTONE_COMMA_FRACTION)
}

/// Quarter-comma meantone: the tempered fifth raised to every power in
/// -k..+k (k = 6 standard, 9 extended), octave-reduced and sorted. Note
/// names are assigned positionally, tonic D.
pub fn meantone(extended: bool) -> TemperedScale {
    let (fifths_from_tonic, names): (i32, &'static [&'static str]) = if extended {
        (9, &EXTENDED_MEANTONE_NOTE_NAMES)
    } else {
        (6, &MEANTONE_NOTE_NAMES)
    };

    let fifth = tempered_fifth();
    let mut ratios: Vec<f64> = (-fifths_from_tonic..=fifths_from_tonic)
        .map(|p| octave_reduce(fifth.powi(p)))
        .collect();
    ratios.sort_by(f64::total_cmp);

    TemperedScale { ratios, names }
}

/// Bach's well temperament after Lehman: the twelve tempering fractions are
/// applied multiplicatively walking the circle of fifths from the tonic,
/// each cumulative ratio octave-reduced, the results sorted.
pub fn bach_well_temperament() -> TemperedScale {
    let mut ratios = Vec::with_capacity(12);
    let mut ratio = 1.0;
    ratios.push(ratio);
    for fraction in &LEHMAN_TEMPERING_FRACTIONS[..11] {
        let fifth = Interval::perfect_fifth().as_f64() * SYNTONIC_COMMA.powf(*fraction);
        ratio = octave_reduce(ratio * fifth);
        ratios.push(ratio);
    }
    ratios.sort_by(f64::total_cmp);

    TemperedScale {
        ratios,
        names: &WELL_TEMPERAMENT_DEGREE_NAMES,
    }
}
