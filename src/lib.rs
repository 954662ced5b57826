//! Score every window of a DNA sequence against a position weight matrix on both strands

pub mod error;
pub mod fasta;
pub mod pwm;
pub mod scan;
pub mod types;
