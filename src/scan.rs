use crate::error::{MotifError, Result};
use crate::fasta::reverse_complement;
use crate::types::{Background, Pwm, ScanRow, Strand};
use polars::prelude::*;
use std::io::Write;

/// Probability used for a base that has no PWM row or no background frequency
const FALLBACK_PROBABILITY: f64 = 1e-6;

/// Decimal places of the scores in the output table
const SCORE_PRECISION: usize = 3;

/// Computes the log2-odds score of a window against a PWM
///
/// Sums `log2(p / q)` over the window, where `p` is the PWM weight of the base at that
/// position and `q` its background frequency. A base outside A/C/G/T gets
/// probability 1e-6 at every position and background 1e-6.
///
/// The window must be exactly as long as the PWM is wide.
///
/// # Errors
/// * `MotifError::DegenerateScore` - If a `p` or `q` reaching the logarithm is not positive
pub fn score_window(window: &str, pwm: &Pwm, background: &Background) -> Result<f64> {
    let mut total = 0.0;
    for (column, base) in window.chars().enumerate() {
        let p = match pwm.row(base) {
            Some(row) => row[column],
            None => FALLBACK_PROBABILITY,
        };
        let q = background.get(base).unwrap_or(FALLBACK_PROBABILITY);
        if !(p > 0.0 && q > 0.0) {
            return Err(MotifError::DegenerateScore { column, base, p, q });
        }
        total += (p / q).log2();
    }
    Ok(total)
}

/// Scores every window of the sequence on both strands
///
/// Windows start at every offset from 0 to `len - width`; a sequence shorter than the
/// PWM yields no rows. The reverse strand score is the score of the window's reverse
/// complement, and ties go to the forward strand.
///
/// # Returns
/// * `Result<Vec<ScanRow>>` - One row per window in increasing position order, with
///   1-based positions
pub fn scan_sequence(sequence: &str, pwm: &Pwm, background: &Background) -> Result<Vec<ScanRow>> {
    let bases: Vec<char> = sequence.chars().collect();
    let width = pwm.width();

    let rows = bases
        .windows(width)
        .enumerate()
        .map(|(offset, window)| {
            let window: String = window.iter().collect();
            let fwd_score = score_window(&window, pwm, background)?;
            let rev_score = score_window(&reverse_complement(&window), pwm, background)?;
            let (best_score, strand) = if fwd_score >= rev_score {
                (fwd_score, Strand::Forward)
            } else {
                (rev_score, Strand::Reverse)
            };
            Ok(ScanRow {
                position: offset + 1,
                fwd_score,
                rev_score,
                best_score,
                strand,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!("scanned {} windows of width {}", rows.len(), width);
    Ok(rows)
}

/// Collects scan rows into a DataFrame
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with columns:
///   - "pos": 1-based window start
///   - "fwd_score", "rev_score", "best_score": log2-odds scores
///   - "strand": "+" or "-"
pub fn scan_to_dataframe(rows: &[ScanRow]) -> Result<DataFrame> {
    let positions: Vec<i64> = rows.iter().map(|row| row.position as i64).collect();
    let fwd_scores: Vec<f64> = rows.iter().map(|row| row.fwd_score).collect();
    let rev_scores: Vec<f64> = rows.iter().map(|row| row.rev_score).collect();
    let best_scores: Vec<f64> = rows.iter().map(|row| row.best_score).collect();
    let strands: Vec<String> = rows.iter().map(|row| row.strand.to_string()).collect();

    let df = DataFrame::new(vec![
        Column::new("pos".into(), positions),
        Column::new("fwd_score".into(), fwd_scores),
        Column::new("rev_score".into(), rev_scores),
        Column::new("best_score".into(), best_scores),
        Column::new("strand".into(), strands),
    ])?;

    Ok(df)
}

/// Writes the scan table tab-separated, with a header and scores to 3 decimal places.
pub fn write_table<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(b'\t')
        .with_float_precision(Some(SCORE_PRECISION))
        .finish(df)?;
    Ok(())
}
