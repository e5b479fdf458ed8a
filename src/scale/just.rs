//! Generic N-limit just scales built from cross products of partial
//! multipliers.
//!
//! Every limit crosses powers of the third partial (3^-2 .. 3^2) with a list
//! of higher-partial multipliers: 5-limit uses 5^-1 .. 5^1, 7-limit all
//! combinations of 5 and 7 with exponents -1..1, 13-limit the same with 13
//! added. Each product is octave-reduced; the fundamental and the 64:45
//! diminished fifth are discarded as non-scale-degree artifacts. Limits
//! above 5 produce far more candidates than there are chromatic degrees, so
//! those are collapsed to one representative per 100-cent bin.

use crate::interval::Interval;
use crate::scale::Scale;

/// The largest prime partial admitted into the multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Five,
    Seven,
    Thirteen,
}

impl Limit {
    fn higher_primes(self) -> &'static [u64] {
        match self {
            Limit::Five => &[5],
            Limit::Seven => &[5, 7],
            Limit::Thirteen => &[5, 7, 13],
        }
    }
}

/// Which of the competing 5-limit candidates survive: the major second can
/// be 10:9 or 9:8, the minor seventh 16:9 or 9:5. Each choice excludes two
/// of those four ratios. The symmetric choices keep inversion pairs (10:9
/// inverts to 9:5, 9:8 to 16:9); the asymmetric one mixes them.
///
/// A closed strategy enumeration rather than a callback: these three modes
/// and the implicit "no filter" of the other generators are the only cases
/// that ever occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    Asymmetric,
    Symmetric1,
    Symmetric2,
}

impl Symmetry {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asymmetric" => Some(Symmetry::Asymmetric),
            "symmetric1" => Some(Symmetry::Symmetric1),
            "symmetric2" => Some(Symmetry::Symmetric2),
            _ => None,
        }
    }

    /// The two contested degrees this choice drops from the multiplier pool.
    fn excluded(self) -> [Interval; 2] {
        match self {
            // keeps 10:9 and 16:9
            Symmetry::Asymmetric => [Interval::new(9, 8), Interval::new(9, 5)],
            // keeps 10:9 and its inversion 9:5
            Symmetry::Symmetric1 => [Interval::new(9, 8), Interval::new(16, 9)],
            // keeps 9:8 and its inversion 16:9
            Symmetry::Symmetric2 => [Interval::new(10, 9), Interval::new(9, 5)],
        }
    }

    pub fn excludes(self, ratio: &Interval) -> bool {
        self.excluded().contains(ratio)
    }
}

/// Powers of the third partial common to every limit: 3^-2 .. 3^2.
fn third_partial_multipliers() -> Vec<Interval> {
    vec![
        Interval::new(1, 9),
        Interval::new(1, 3),
        Interval::unison(),
        Interval::new(3, 1),
        Interval::new(9, 1),
    ]
}

/// All products of p^e over the limit's higher primes, e in -1..1.
fn higher_partial_multipliers(limit: Limit) -> Vec<Interval> {
    let mut multipliers = vec![Interval::unison()];
    for &p in limit.higher_primes() {
        let powers = [Interval::new(1, p), Interval::unison(), Interval::new(p, 1)];
        multipliers = multipliers
            .iter()
            .flat_map(|m| powers.iter().map(|f| m.compose(f)))
            .collect();
    }
    multipliers
}

/// The chromatic just scale for the given limit and symmetry choice,
/// ascending, closed with the octave.
pub fn scale(limit: Limit, symmetry: Symmetry) -> Scale {
    let diminished_fifth = Interval::new(64, 45);
    let mut pool = Vec::new();
    for higher in higher_partial_multipliers(limit) {
        for third in third_partial_multipliers() {
            let ratio = higher.compose(&third).octave_reduce();
            if ratio.is_unison() || ratio == diminished_fifth || symmetry.excludes(&ratio) {
                continue;
            }
            pool.push(ratio);
        }
    }

    let mut degrees = match limit {
        Limit::Five => pool,
        Limit::Seven | Limit::Thirteen => simplest_per_semitone(&pool),
    };
    degrees.push(Interval::octave());
    degrees.sort();
    degrees
}

/// Collapse a candidate pool to at most one interval per 100-cent bin of the
/// octave: within each bin the candidate with the smallest (numerator,
/// denominator) pair, compared lexicographically, is the canonical "simplest
/// ratio" representative.
fn simplest_per_semitone(pool: &[Interval]) -> Vec<Interval> {
    let mut bins: [Option<Interval>; 12] = [None; 12];
    for ratio in pool {
        let bin = ((ratio.cents() / 100.0).floor() as usize).min(11);
        let simpler = match bins[bin] {
            None => true,
            Some(chosen) => {
                (ratio.numerator(), ratio.denominator())
                    < (chosen.numerator(), chosen.denominator())
            }
        };
        if simpler {
            bins[bin] = Some(*ratio);
        }
    }
    bins.into_iter().flatten().collect()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(scale: &Scale) -> Vec<String> {
        scale.iter().map(Interval::to_string).collect()
    }

    #[test]
    fn test_five_limit_asymmetric() {
        let s = scale(Limit::Five, Symmetry::Asymmetric);
        assert_eq!(
            labels(&s),
            vec![
                "16:15", "10:9", "6:5", "5:4", "4:3", "45:32", "3:2", "8:5", "5:3", "16:9",
                "15:8", "2:1",
            ]
        );
    }

    #[test]
    fn test_symmetry_selects_the_major_second_deterministically() {
        let lesser = Interval::new(10, 9);
        let greater = Interval::new(9, 8);

        for symmetry in [Symmetry::Asymmetric, Symmetry::Symmetric1] {
            let s = scale(Limit::Five, symmetry);
            assert!(s.contains(&lesser));
            assert!(!s.contains(&greater));
        }

        let s = scale(Limit::Five, Symmetry::Symmetric2);
        assert!(s.contains(&greater));
        assert!(!s.contains(&lesser));
    }

    #[test]
    fn test_symmetry_selects_the_minor_seventh() {
        let lesser = Interval::new(16, 9);
        let greater = Interval::new(9, 5);

        let s = scale(Limit::Five, Symmetry::Asymmetric);
        assert!(s.contains(&lesser) && !s.contains(&greater));

        let s = scale(Limit::Five, Symmetry::Symmetric1);
        assert!(s.contains(&greater) && !s.contains(&lesser));

        let s = scale(Limit::Five, Symmetry::Symmetric2);
        assert!(s.contains(&lesser) && !s.contains(&greater));
    }

    #[test]
    fn test_seven_limit_asymmetric_picks_one_ratio_per_semitone() {
        let s = scale(Limit::Seven, Symmetry::Asymmetric);
        assert_eq!(
            labels(&s),
            vec![
                "21:20", "10:9", "7:6", "5:4", "4:3", "7:5", "10:7", "3:2", "5:3", "7:4", "15:8",
                "35:18", "2:1",
            ]
        );
    }

    #[test]
    fn test_thirteen_limit_structure() {
        let s = scale(Limit::Thirteen, Symmetry::Asymmetric);
        assert!(s.len() <= 13);
        assert!(s.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*s.last().unwrap(), Interval::octave());
        // the tridecimal submajor seventh wins its bin against 15:8's neighbours
        assert!(s.contains(&Interval::new(13, 7)));
    }

    #[test]
    fn test_scales_stay_inside_the_octave() {
        for limit in [Limit::Five, Limit::Seven, Limit::Thirteen] {
            let s = scale(limit, Symmetry::Asymmetric);
            for degree in &s[..s.len() - 1] {
                assert!(*degree >= Interval::unison() && *degree < Interval::octave());
            }
        }
    }
}
