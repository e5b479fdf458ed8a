//! The tuning-system selection layer: a closed enumeration of every system
//! the crate can compute, resolution from the textual selectors the outer
//! interface speaks, and the dispatch into the scale generators.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::fretboard::{self, Fretboard};
use crate::scale::diatonic::{self, Mode};
use crate::scale::just::{self, Limit, Symmetry};
use crate::scale::{edo, pythagorean, saz, tempered};

pub const DEFAULT_DIVISIONS: u32 = 12;
pub const DEFAULT_OCTAVES: u32 = 1;

/// Every tuning system the crate knows. Parameters that only apply to some
/// systems live in their variants, so a [TuningSystem] is always fully
/// specified once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningSystem {
    Equal { divisions: u32 },
    Saz,
    Pythagorean,
    Meantone { extended: bool },
    Ptolemy { mode: Mode, octaves: u32 },
    FiveLimitFromPythagorean,
    JustFromRatios { limit: Limit, symmetry: Symmetry },
    BachWellTemperament,
}

/// Optional parameters accompanying a selector. Each one applies to a
/// subset of the systems and is silently ignored by the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct Params {
    pub divisions: Option<u32>,
    pub octaves: Option<u32>,
    pub mode: Option<Mode>,
    pub symmetry: Option<Symmetry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TuningErr {
    /// The scale length was not a finite positive number.
    InvalidScaleLength(f64),
    /// The selector named no known tuning system.
    UnknownSystem(String),
}

impl Display for TuningErr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TuningErr::InvalidScaleLength(length) => {
                write!(f, "a finite scale length greater than zero is required, got {length}")
            }
            TuningErr::UnknownSystem(selector) => {
                write!(f, "unknown tuning system \"{selector}\"")
            }
        }
    }
}

impl Error for TuningErr {}

impl TuningSystem {
    /// Resolve a textual selector plus its optional parameters. The empty
    /// selector means Ptolemy, and missing parameters take their defaults
    /// (12 divisions, one octave, Ionian, asymmetric).
    pub fn from_selector(selector: &str, params: &Params) -> Result<Self, TuningErr> {
        let system = match selector {
            // zero counts are treated as unset, like every other missing parameter
            "equal" => TuningSystem::Equal {
                divisions: params.divisions.filter(|d| *d > 0).unwrap_or(DEFAULT_DIVISIONS),
            },
            "saz" => TuningSystem::Saz,
            "pythagorean" => TuningSystem::Pythagorean,
            "meantone" => TuningSystem::Meantone { extended: false },
            "extendedMeantone" => TuningSystem::Meantone { extended: true },
            "" | "ptolemy" => TuningSystem::Ptolemy {
                mode: params.mode.unwrap_or(Mode::Ionian),
                octaves: params.octaves.filter(|o| *o > 0).unwrap_or(DEFAULT_OCTAVES),
            },
            "just5limitFromPythagorean" => TuningSystem::FiveLimitFromPythagorean,
            "just5limitFromRatios" => TuningSystem::JustFromRatios {
                limit: Limit::Five,
                symmetry: params.symmetry.unwrap_or(Symmetry::Asymmetric),
            },
            "just7limitFromRatios" => TuningSystem::JustFromRatios {
                limit: Limit::Seven,
                symmetry: params.symmetry.unwrap_or(Symmetry::Asymmetric),
            },
            "just13limitFromRatios" => TuningSystem::JustFromRatios {
                limit: Limit::Thirteen,
                symmetry: params.symmetry.unwrap_or(Symmetry::Asymmetric),
            },
            "bachWellTemperament" => TuningSystem::BachWellTemperament,
            other => return Err(TuningErr::UnknownSystem(other.to_string())),
        };
        Ok(system)
    }

    /// Compute the fretboard for a string of the given scale length.
    pub fn fretboard(&self, scale_length: f64) -> Result<Fretboard, TuningErr> {
        if !scale_length.is_finite() || scale_length <= 0.0 {
            return Err(TuningErr::InvalidScaleLength(scale_length));
        }
        log::debug!("computing {self:?} over scale length {scale_length}");

        let board = match *self {
            TuningSystem::Equal { divisions } => fretboard::render_edo(
                format!("{divisions}-TET"),
                format!("Fret positions for {divisions}-tone equal temperament."),
                scale_length,
                &edo::divisions(divisions),
            ),
            TuningSystem::Saz => fretboard::render_just(
                "saz",
                "Fret positions for traditional Turkish Saz tuning ratios.",
                scale_length,
                &saz::scale(),
            ),
            TuningSystem::Pythagorean => fretboard::render_just(
                "Pythagorean",
                "Fret positions based on 3-limit Pythagorean ratios.",
                scale_length,
                &pythagorean::scale(),
            ),
            TuningSystem::Meantone { extended } => fretboard::render_tempered(
                "meantone",
                format!(
                    "Fret positions for {}meantone computed by narrowing of fifths by \
                     0.25 of a syntonic comma (81/80).  Nominal note names used given \
                     a tonic of D.",
                    if extended { "extended " } else { "" }
                ),
                scale_length,
                &tempered::meantone(extended),
                1,
                3,
            ),
            TuningSystem::Ptolemy { mode, octaves } => fretboard::render_just(
                "Ptolemy",
                format!(
                    "Fret positions for Ptolemy's 5-limit intense diatonic scale in {} mode.",
                    mode.name()
                ),
                scale_length,
                &diatonic::scale(mode, octaves),
            ),
            TuningSystem::FiveLimitFromPythagorean => fretboard::render_just(
                "5-limit Just Intonation",
                "Fret positions for chromatic scale based on 5-limit just intonation \
                 pure ratios derived from applying syntonic comma to Pythagorean ratios.",
                scale_length,
                &pythagorean::five_limit_scale(),
            ),
            TuningSystem::JustFromRatios { limit, symmetry } => fretboard::render_just(
                limit.system_name(),
                limit.description(),
                scale_length,
                &just::scale(limit, symmetry),
            ),
            TuningSystem::BachWellTemperament => fretboard::render_tempered(
                "Bach's Well-Tempered Tuning",
                "Fret positions derived from Lehman's decoding of Bach's Well-Tempered \
                 tuning, using sixth-comma, twelfth-comma, and pure fifths.",
                scale_length,
                &tempered::bach_well_temperament(),
                3,
                6,
            ),
        };
        Ok(board)
    }
}

impl Limit {
    fn system_name(self) -> &'static str {
        match self {
            Limit::Five => "5-limit Just Intonation",
            Limit::Seven => "7-limit Just Intonation",
            Limit::Thirteen => "13-limit Just Intonation",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Limit::Five => {
                "Fret positions for chromatic scale based on 5-limit just intonation \
                 pure ratios derived from third- and fifth-partial ratios."
            }
            Limit::Seven => {
                "Fret positions for chromatic scale based on 7-limit just intonation \
                 pure ratios derived from third-, fifth- and seventh-partial ratios."
            }
            Limit::Thirteen => {
                "Fret positions for chromatic scale based on 13-limit just intonation \
                 pure ratios derived from third-, fifth-, seventh- and thirteenth-partial \
                 ratios."
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_selector_resolution() {
        let params = Params::default();
        assert_eq!(
            TuningSystem::from_selector("equal", &params),
            Ok(TuningSystem::Equal { divisions: 12 })
        );
        assert_eq!(
            TuningSystem::from_selector("", &params),
            Ok(TuningSystem::Ptolemy {
                mode: Mode::Ionian,
                octaves: 1
            })
        );
        assert_eq!(
            TuningSystem::from_selector("extendedMeantone", &params),
            Ok(TuningSystem::Meantone { extended: true })
        );
        assert_eq!(
            TuningSystem::from_selector("theremin", &params),
            Err(TuningErr::UnknownSystem("theremin".to_string()))
        );
    }

    #[test]
    fn test_zero_counts_fall_back_to_defaults() {
        let params = Params {
            divisions: Some(0),
            octaves: Some(0),
            ..Params::default()
        };
        assert_eq!(
            TuningSystem::from_selector("equal", &params),
            Ok(TuningSystem::Equal { divisions: 12 })
        );
        assert_eq!(
            TuningSystem::from_selector("ptolemy", &params),
            Ok(TuningSystem::Ptolemy {
                mode: Mode::Ionian,
                octaves: 1
            })
        );
    }

    #[test]
    fn test_selector_parameters_override_defaults() {
        let params = Params {
            divisions: Some(19),
            octaves: Some(2),
            mode: Some(Mode::Dorian),
            symmetry: Some(Symmetry::Symmetric1),
        };
        assert_eq!(
            TuningSystem::from_selector("equal", &params),
            Ok(TuningSystem::Equal { divisions: 19 })
        );
        assert_eq!(
            TuningSystem::from_selector("ptolemy", &params),
            Ok(TuningSystem::Ptolemy {
                mode: Mode::Dorian,
                octaves: 2
            })
        );
        assert_eq!(
            TuningSystem::from_selector("just7limitFromRatios", &params),
            Ok(TuningSystem::JustFromRatios {
                limit: Limit::Seven,
                symmetry: Symmetry::Symmetric1
            })
        );
    }

    #[test]
    fn test_scale_length_validation() {
        let system = TuningSystem::Saz;
        assert_eq!(
            system.fretboard(0.0),
            Err(TuningErr::InvalidScaleLength(0.0))
        );
        assert_eq!(
            system.fretboard(-540.0),
            Err(TuningErr::InvalidScaleLength(-540.0))
        );
        assert!(system.fretboard(f64::NAN).is_err());
        assert!(system.fretboard(f64::INFINITY).is_err());
    }

    #[test]
    fn test_saz_fretboard() {
        let board = TuningSystem::Saz.fretboard(540.0).unwrap();
        assert_eq!(board.system, "saz");
        assert_eq!(board.frets.len(), 17);
        assert_eq!(board.frets[0].label, "18:17");
        assert_eq!(board.frets[16].label, "2:1");
        assert_eq!(board.frets[16].position, 270.0);
    }

    #[test]
    fn test_default_ptolemy_fretboard() {
        let board = TuningSystem::from_selector("", &Params::default())
            .unwrap()
            .fretboard(540.0)
            .unwrap();
        assert_eq!(board.system, "Ptolemy");
        assert_eq!(
            board.description,
            "Fret positions for Ptolemy's 5-limit intense diatonic scale in Ionian mode."
        );
        assert_eq!(board.frets.len(), 7);
        assert_eq!(board.frets[6].label, "2:1");
    }

    #[test]
    fn test_two_octave_ptolemy_fretboard() {
        let board = TuningSystem::Ptolemy {
            mode: Mode::Ionian,
            octaves: 2,
        }
        .fretboard(540.0)
        .unwrap();
        assert_eq!(board.frets.len(), 14);
        assert_eq!(
            board.frets[..7]
                .iter()
                .map(|f| f.position)
                .collect::<Vec<_>>(),
            vec![60.0, 108.0, 135.0, 180.0, 216.0, 252.0, 270.0]
        );
        assert_eq!(board.frets[13].label, "4:1");
        // 4:1 leaves a quarter of the string
        assert_eq!(board.frets[13].position, 405.0);
    }

    #[test]
    fn test_thirteen_limit_selector() {
        let board = TuningSystem::from_selector("just13limitFromRatios", &Params::default())
            .unwrap()
            .fretboard(540.0)
            .unwrap();
        assert_eq!(board.system, "13-limit Just Intonation");
        assert_eq!(board.frets.len(), 13);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TuningErr::InvalidScaleLength(-1.0).to_string(),
            "a finite scale length greater than zero is required, got -1"
        );
        assert_eq!(
            TuningErr::UnknownSystem("x".to_string()).to_string(),
            "unknown tuning system \"x\""
        );
    }
}
