//! Ptolemy's intense diatonic scale in its seven modes.
//!
//! Every mode is a fixed cyclic ordering of the same three step sizes: the
//! greater major second 9:8, the lesser major second 10:9 and the diatonic
//! semitone 16:15. Composing the steps cumulatively from the unison yields
//! the scale degrees; over several octaves the composition simply continues
//! past 2:1 without octave reduction.

use crate::interval::Interval;
use crate::scale::Scale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Lydian,
    Ionian,
    Mixolydian,
    Dorian,
    Aeolian,
    Phrygian,
    Locrian,
}

/// Step shorthand: greater tone, lesser tone, semitone.
#[derive(Clone, Copy)]
enum Step {
    G,
    L,
    S,
}

impl Step {
    fn interval(self) -> Interval {
        match self {
            Step::G => Interval::new(9, 8),
            Step::L => Interval::new(10, 9),
            Step::S => Interval::new(16, 15),
        }
    }
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Lydian => "Lydian",
            Mode::Ionian => "Ionian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Dorian => "Dorian",
            Mode::Aeolian => "Aeolian",
            Mode::Phrygian => "Phrygian",
            Mode::Locrian => "Locrian",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        [
            Mode::Lydian,
            Mode::Ionian,
            Mode::Mixolydian,
            Mode::Dorian,
            Mode::Aeolian,
            Mode::Phrygian,
            Mode::Locrian,
        ]
        .into_iter()
        .find(|mode| mode.name().eq_ignore_ascii_case(s))
    }

    /// The cyclic ordering of step sizes for this mode. Seven steps,
    /// composing to exactly one octave.
    fn steps(self) -> [Step; 7] {
        use Step::{G, L, S};
        match self {
            Mode::Lydian => [G, L, G, S, L, G, S],
            Mode::Ionian => [G, L, S, G, L, G, S],
            Mode::Mixolydian => [G, L, S, G, L, S, G],
            Mode::Dorian => [G, S, L, G, L, S, G],
            Mode::Aeolian => [G, S, L, G, S, G, L],
            Mode::Phrygian => [S, G, L, G, S, L, G],
            Mode::Locrian => [S, G, L, S, G, L, G],
        }
    }
}

/// The scale degrees of the mode across `octaves` octaves, ascending by
/// construction.
pub fn scale(mode: Mode, octaves: u32) -> Scale {
    let mut degrees = Vec::with_capacity(7 * octaves as usize);
    let mut ratio = Interval::unison();
    for _ in 0..octaves {
        for step in mode.steps() {
            ratio = ratio.compose(&step.interval());
            degrees.push(ratio);
        }
    }
    degrees
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(mode: Mode, octaves: u32) -> Vec<String> {
        scale(mode, octaves).iter().map(Interval::to_string).collect()
    }

    #[test]
    fn test_ionian() {
        assert_eq!(
            labels(Mode::Ionian, 1),
            vec!["9:8", "5:4", "4:3", "3:2", "5:3", "15:8", "2:1"]
        );
    }

    #[test]
    fn test_dorian() {
        assert_eq!(
            labels(Mode::Dorian, 1),
            vec!["9:8", "6:5", "4:3", "3:2", "5:3", "16:9", "2:1"]
        );
    }

    #[test]
    fn test_phrygian() {
        assert_eq!(
            labels(Mode::Phrygian, 1),
            vec!["16:15", "6:5", "4:3", "3:2", "8:5", "16:9", "2:1"]
        );
    }

    #[test]
    fn test_lydian() {
        assert_eq!(
            labels(Mode::Lydian, 1),
            vec!["9:8", "5:4", "45:32", "3:2", "5:3", "15:8", "2:1"]
        );
    }

    #[test]
    fn test_mixolydian() {
        assert_eq!(
            labels(Mode::Mixolydian, 1),
            vec!["9:8", "5:4", "4:3", "3:2", "5:3", "16:9", "2:1"]
        );
    }

    #[test]
    fn test_aeolian() {
        assert_eq!(
            labels(Mode::Aeolian, 1),
            vec!["9:8", "6:5", "4:3", "3:2", "8:5", "9:5", "2:1"]
        );
    }

    #[test]
    fn test_locrian() {
        assert_eq!(
            labels(Mode::Locrian, 1),
            vec!["16:15", "6:5", "4:3", "64:45", "8:5", "16:9", "2:1"]
        );
    }

    #[test]
    fn test_every_mode_closes_the_octave() {
        for mode in [
            Mode::Lydian,
            Mode::Ionian,
            Mode::Mixolydian,
            Mode::Dorian,
            Mode::Aeolian,
            Mode::Phrygian,
            Mode::Locrian,
        ] {
            let s = scale(mode, 1);
            assert_eq!(s.len(), 7);
            assert_eq!(*s.last().unwrap(), Interval::octave(), "{}", mode.name());
        }
    }

    #[test]
    fn test_second_octave_continues_past_the_octave() {
        let s = scale(Mode::Ionian, 2);
        assert_eq!(s.len(), 14);
        assert_eq!(s[7], Interval::new(9, 4));
        assert_eq!(*s.last().unwrap(), Interval::new(4, 1));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Mode::parse("Dorian"), Some(Mode::Dorian));
        assert_eq!(Mode::parse("dorian"), Some(Mode::Dorian));
        assert_eq!(Mode::parse("hypomixolydian"), None);
    }
}
