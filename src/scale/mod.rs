//! Scale generators, one module per family of tuning systems.
//!
//! The just and Pythagorean generators work entirely in exact rational
//! arithmetic on [Interval][crate::interval::Interval]s. The tempered
//! generators ([tempered], [edo]) work in floating point, because a tempered
//! fifth is irrational and has no exact rational representation. All of them
//! are pure functions: no generator holds state across invocations.

pub mod diatonic;
pub mod edo;
pub mod just;
pub mod pythagorean;
pub mod saz;
pub mod tempered;

use crate::interval::Interval;

/// One or more octaves of scale degrees, ascending, with the tonic implicit
/// and the closing octave explicit as the last element.
pub type Scale = Vec<Interval>;
