//! The catalogue of canonical interval names, spanning septimal, Pythagorean
//! and 5-limit just intervals. A read-only table, used for annotation only:
//! most computed ratios (complex 7- or 13-limit combinations in particular)
//! intentionally have no name.

use std::sync::LazyLock;

use super::Interval;

static NAMES: LazyLock<[(Interval, &'static str); 36]> = LazyLock::new(|| {
    [
        (Interval::new(1, 1), "Perfect Unison"),
        (Interval::new(225, 224), "Septimal Kleisma"),
        (Interval::new(81, 80), "Syntonic Comma"),
        (Interval::new(128, 125), "Dieses (Diminished Second)"),
        (Interval::new(25, 24), "Just (Lesser) Chromatic Semitone"),
        (Interval::new(256, 243), "Pythagorean Minor Second"),
        (Interval::new(135, 128), "Greater Chromatic Semitone"),
        (Interval::new(27, 25), "Acute Minor Second"),
        (Interval::new(16, 15), "Minor Second"),
        (Interval::new(15, 14), "Septimal Minor Second"),
        (Interval::new(10, 9), "Just (Lesser) Major Second"),
        (Interval::new(9, 8), "Pythagorean (Greater) Major Second"),
        (Interval::new(8, 7), "Septimal Major Second"),
        (Interval::new(6, 5), "Minor Third"),
        (Interval::new(5, 4), "Major Third"),
        (Interval::new(32, 27), "Diminished Fourth"),
        (Interval::new(81, 64), "Pythagorean Major Third"),
        (Interval::new(4, 3), "Perfect Fourth"),
        (Interval::new(45, 32), "Augmented Fourth"),
        (Interval::new(7, 5), "Septimal Augmented Fourth"),
        (Interval::new(1024, 729), "Pythagorean Diminished Fifth"),
        (Interval::new(729, 512), "Pythagorean Augmented Fourth"),
        (Interval::new(64, 45), "Diminished Fifth"),
        (Interval::new(10, 7), "Septimal Diminished Fifth"),
        (Interval::new(40, 27), "Grave Fifth"),
        (Interval::new(3, 2), "Perfect Fifth"),
        (Interval::new(8, 5), "Just Minor Sixth"),
        (Interval::new(128, 81), "Pythagorean Minor Sixth"),
        (Interval::new(5, 3), "Major Sixth"),
        (Interval::new(27, 16), "Pythagorean Major Sixth"),
        (Interval::new(16, 9), "Pythagorean (Lesser) Minor Seventh"),
        (Interval::new(9, 5), "Just (Greater) Minor Seventh"),
        (Interval::new(7, 4), "Septimal (Harmonic) Minor Seventh"),
        (Interval::new(15, 8), "Just Major Seventh"),
        (Interval::new(243, 128), "Pythagorean Major Seventh"),
        (Interval::new(2, 1), "Perfect Octave"),
    ]
});

/// Exact-match lookup on the reduced ratio. Returns [None] for ratios the
/// catalogue does not know.
pub fn name_of(interval: &Interval) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(known, _)| known == interval)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_known_intervals() {
        assert_eq!(name_of(&Interval::new(16, 15)), Some("Minor Second"));
        assert_eq!(name_of(&Interval::new(3, 2)), Some("Perfect Fifth"));
        assert_eq!(name_of(&Interval::new(2, 1)), Some("Perfect Octave"));
        assert_eq!(
            name_of(&Interval::new(256, 243)),
            Some("Pythagorean Minor Second")
        );
    }

    #[test]
    fn test_lookup_is_on_the_reduced_ratio() {
        assert_eq!(name_of(&Interval::new(6, 4)), Some("Perfect Fifth"));
    }

    #[test]
    fn test_unknown_intervals_have_no_name() {
        assert_eq!(name_of(&Interval::new(35, 18)), None);
        assert_eq!(name_of(&Interval::new(18, 17)), None);
    }
}
