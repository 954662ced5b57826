use crate::error::{MotifError, Result};
use ndarray::{Array2, ArrayView1};
use phf::phf_map;
use std::fmt;

/// Nucleotides in the fixed row order of a PWM file
pub const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Row index of each nucleotide in a [`Pwm`] and a [`Background`]
static BASE_INDEX: phf::Map<char, usize> = phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'T' => 3,
};

/// Returns the row index of `base`, or `None` for anything outside A/C/G/T.
pub fn base_index(base: char) -> Option<usize> {
    BASE_INDEX.get(&base).copied()
}

/// Represents a Position Weight Matrix (PWM)
/// Stored as a 4 x width matrix with rows A, C, G, T
#[derive(Debug, Clone, PartialEq)]
pub struct Pwm {
    matrix: Array2<f64>,
}

impl Pwm {
    /// Builds a PWM from its four rows, given in A, C, G, T order.
    ///
    /// # Errors
    /// * `MotifError::InvalidPwm` if the rows differ in length or are empty
    pub fn from_rows(rows: [Vec<f64>; 4]) -> Result<Self> {
        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width) {
            let lengths = BASES
                .iter()
                .zip(rows.iter())
                .map(|(base, row)| format!("{}: {}", base, row.len()))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(MotifError::invalid_pwm(format!(
                "PWM rows have inconsistent lengths ({})",
                lengths
            )));
        }
        if width == 0 {
            return Err(MotifError::invalid_pwm("PWM rows contain no values"));
        }

        let matrix = Array2::from_shape_vec((BASES.len(), width), rows.concat())
            .map_err(|e| MotifError::DataError(e.to_string()))?;
        Ok(Self { matrix })
    }

    /// Number of motif positions (columns).
    pub fn width(&self) -> usize {
        self.matrix.ncols()
    }

    /// The weights of `base` across all positions.
    pub fn row(&self, base: char) -> Option<ArrayView1<'_, f64>> {
        base_index(base).map(|idx| self.matrix.row(idx))
    }

    /// The weight of `base` at motif position `column`.
    pub fn get(&self, base: char, column: usize) -> Option<f64> {
        base_index(base).and_then(|idx| self.matrix.get((idx, column)).copied())
    }

    /// The highest-weight base at every position; ties go to the earliest of A, C, G, T.
    pub fn consensus(&self) -> String {
        self.matrix
            .columns()
            .into_iter()
            .map(|column| {
                let mut best = 0;
                for (idx, &value) in column.iter().enumerate() {
                    if value > column[best] {
                        best = idx;
                    }
                }
                BASES[best]
            })
            .collect()
    }
}

/// Background nucleotide frequencies for A, C, G, T
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    freqs: [f64; 4],
}

impl Background {
    pub fn new(freqs: [f64; 4]) -> Self {
        Self { freqs }
    }

    /// Builds a background from user-supplied values, which must be exactly four.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let freqs: [f64; 4] = values.try_into().map_err(|_| {
            MotifError::invalid_parameter(
                "bg",
                format!("{:?}", values),
                "expected exactly 4 values (A C G T)",
            )
        })?;
        Ok(Self::new(freqs))
    }

    pub fn get(&self, base: char) -> Option<f64> {
        base_index(base).map(|idx| self.freqs[idx])
    }
}

impl Default for Background {
    /// Uniform background, 0.25 for each nucleotide.
    fn default() -> Self {
        Self::new([0.25; 4])
    }
}

/// Orientation of a scored window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn symbol(&self) -> &'static str {
        match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Scores of one window on both strands
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRow {
    /// 1-based start of the window
    pub position: usize,
    pub fwd_score: f64,
    pub rev_score: f64,
    pub best_score: f64,
    pub strand: Strand,
}
