//! The fretboard renderer. Every scale generator funnels through here: a
//! scale plus a physical scale length becomes an ordered list of frets with
//! labels, positions and annotations.
//!
//! A string fretted at distance `p` from the nut sounds at frequency ratio
//! `r` when the remaining length is `scaleLength / r`, so the fret sits at
//! `scaleLength - scaleLength / r`. Positions are rounded per system: two
//! decimal places for the rational systems and EDO, one for meantone, three
//! for the well temperament (matching the precision the historical tables
//! are quoted with).

use serde_derive::Serialize;

use crate::interval::{catalogue, Interval};
use crate::scale::edo::Division;
use crate::scale::tempered::TemperedScale;

/// One rendered scale degree. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fret {
    pub label: String,
    pub position: f64,
    /// The catalogue name of the ratio, or a descriptive text for tempered
    /// systems. Empty when the ratio has no name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// The interval from the previous fret (from the open string for the
    /// first fret), as a `num:den` label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub interval: String,
}

/// The system-wide description of a fretted string: the sole externally
/// visible artifact of the crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fretboard {
    pub system: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub scale_length: f64,
    pub frets: Vec<Fret>,
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

/// Render a scale of exact rational intervals: `num:den` labels, catalogue
/// comments, rational interval-from-previous annotations.
pub fn render_just(
    system: impl Into<String>,
    description: impl Into<String>,
    scale_length: f64,
    scale: &[Interval],
) -> Fretboard {
    let mut previous = Interval::unison();
    let frets = scale
        .iter()
        .map(|degree| {
            let fret = Fret {
                label: degree.to_string(),
                position: round_to(
                    scale_length - (scale_length / degree.numerator() as f64)
                        * degree.denominator() as f64,
                    2,
                ),
                comment: catalogue::name_of(degree).unwrap_or("").to_string(),
                interval: degree.difference(&previous).to_string(),
            };
            previous = *degree;
            fret
        })
        .collect();

    Fretboard {
        system: system.into(),
        description: description.into(),
        scale_length,
        frets,
    }
}

/// Render a tempered scale: positional note-name labels, float ratio and
/// interval comments, and an explicit closing octave fret at half the scale
/// length. The open-string tonic is skipped; it is not a fret.
pub fn render_tempered(
    system: impl Into<String>,
    description: impl Into<String>,
    scale_length: f64,
    scale: &TemperedScale,
    position_decimals: i32,
    ratio_decimals: usize,
) -> Fretboard {
    let mut previous = 1.0;
    let mut frets: Vec<Fret> = scale
        .ratios
        .iter()
        .enumerate()
        .skip(1)
        .map(|(number, &ratio)| {
            let fret = Fret {
                label: format!("{} ({})", number, scale.names[number % scale.names.len()]),
                position: round_to(scale_length - scale_length / ratio, position_decimals),
                comment: format!(
                    "ratio: {:.prec$}; interval: {:.6}",
                    ratio,
                    ratio / previous,
                    prec = ratio_decimals
                ),
                interval: String::new(),
            };
            previous = ratio;
            fret
        })
        .collect();

    frets.push(Fret {
        label: format!("{} (Octave)", scale.ratios.len()),
        position: scale_length / 2.0,
        comment: format!("ratio: {:.1}; interval: {:.6}", 2.0, 2.0 / previous),
        interval: String::new(),
    });

    Fretboard {
        system: system.into(),
        description: description.into(),
        scale_length,
        frets,
    }
}

/// Render equal divisions of the octave: cents labels, including the 0-cent
/// open-string entry and the closing 1200-cent octave.
pub fn render_edo(
    system: impl Into<String>,
    description: impl Into<String>,
    scale_length: f64,
    divisions: &[Division],
) -> Fretboard {
    let frets = divisions
        .iter()
        .map(|division| Fret {
            label: format!("{:.2} cents", division.cents),
            position: round_to(scale_length - scale_length / division.ratio, 2),
            comment: String::new(),
            interval: String::new(),
        })
        .collect();

    Fretboard {
        system: system.into(),
        description: description.into(),
        scale_length,
        frets,
    }
}
