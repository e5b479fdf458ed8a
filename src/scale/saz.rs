//! The traditional fretting of the Turkish saz (cura variant), as documented
//! on <https://en.wikipedia.org/wiki/Ba%C4%9Flama>. A hand-curated table,
//! not an algorithmic derivation.

use crate::interval::Interval;
use crate::scale::Scale;

const RATIOS: [(u64, u64); 17] = [
    (18, 17),
    (12, 11),
    (9, 8),
    (81, 68),
    (27, 22),
    (81, 64),
    (4, 3),
    (24, 17),
    (16, 11),
    (3, 2),
    (27, 17),
    (18, 11),
    (27, 16),
    (16, 9),
    (32, 17),
    (64, 33),
    (2, 1),
];

pub fn scale() -> Scale {
    RATIOS.iter().map(|&(n, d)| Interval::new(n, d)).collect()
}
