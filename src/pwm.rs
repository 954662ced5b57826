use crate::error::{MotifError, Result};
use crate::types::{Pwm, BASES};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Splits a matrix row on whitespace and/or commas and parses every field as a number
fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| MotifError::InvalidValue {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses a 4-row PWM from any buffered reader
///
/// Blank lines are skipped. The remaining lines must be exactly four, holding the
/// weights of A, C, G and T in that order.
pub fn parse_pwm<R: BufRead>(reader: R) -> Result<Pwm> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    if lines.len() != BASES.len() {
        return Err(MotifError::invalid_pwm(format!(
            "PWM file must have exactly 4 non-empty lines (A,C,G,T), found {}",
            lines.len()
        )));
    }

    let mut rows: [Vec<f64>; 4] = Default::default();
    for (idx, line) in lines.iter().enumerate() {
        rows[idx] = parse_row(line, idx + 1)?;
    }

    Pwm::from_rows(rows)
}

/// Reads a Position Weight Matrix from a plain text file
///
/// # Arguments
/// * `filename` - Path to a file with four non-blank rows (A, C, G, T) of whitespace- or
///   comma-separated numbers
///
/// # Returns
/// * `Result<Pwm>` - The matrix; its width is the common row length
///
/// # Errors
/// * `MotifError::Io` - If the file cannot be opened or read
/// * `MotifError::InvalidPwm` - If there are not exactly 4 non-blank lines, or the rows
///   differ in length
/// * `MotifError::InvalidValue` - If a field is not a number
pub fn read_pwm(filename: impl AsRef<Path>) -> Result<Pwm> {
    let file = File::open(filename)?;
    let pwm = parse_pwm(BufReader::new(file))?;
    log::debug!("loaded PWM of width {}", pwm.width());
    Ok(pwm)
}
