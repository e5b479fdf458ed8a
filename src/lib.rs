pub mod fretboard;
pub mod interval;
pub mod scale;
pub mod system;
