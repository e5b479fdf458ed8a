//! Equal divisions of the octave: a purely geometric split, no rational
//! structure at all.

/// One division of the octave: its frequency ratio and its size in cents,
/// rounded to the nearest cent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Division {
    pub ratio: f64,
    pub cents: f64,
}

/// The divisions 0..=n of an octave split into `n` equal parts, ascending
/// from the unison to the octave. `n` must be at least 1; a zero division
/// count is substituted with a default before it ever reaches this function.
pub fn divisions(n: u32) -> Vec<Division> {
    (0..=n)
        .map(|i| {
            let ratio = (i as f64 / n as f64).exp2();
            Division {
                ratio,
                cents: (ratio.log2() * 1200.0).round(),
            }
        })
        .collect()
}
