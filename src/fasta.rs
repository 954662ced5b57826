use crate::error::Result;
use phf::phf_map;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

static COMPLEMENT: phf::Map<char, char> = phf_map! {
    'A' => 'T', 'C' => 'G', 'G' => 'C', 'T' => 'A', 'N' => 'N',
    'a' => 't', 'c' => 'g', 'g' => 'c', 't' => 'a', 'n' => 'n',
};

/// Concatenates every non-header line of a FASTA or plain text stream
///
/// Lines starting with '>' are dropped as they are, without trimming first. All other
/// lines are trimmed and joined without separator; the result is uppercased.
pub fn parse_sequence<R: BufRead>(reader: R) -> Result<String> {
    let mut sequence = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            continue;
        }
        sequence.push_str(line.trim());
    }
    Ok(sequence.to_uppercase())
}

/// Reads the sequence to scan from a FASTA or plain text file.
///
/// # Arguments
/// * `filename` - Path to the sequence file
///
/// # Returns
/// * `Result<String>` - All non-header lines joined into one uppercase sequence. May be
///   empty; characters outside A/C/G/T are kept.
///
/// # Errors
/// * Returns `MotifError::Io` for file reading issues
pub fn read_sequence(filename: impl AsRef<Path>) -> Result<String> {
    let file = File::open(filename)?;
    let sequence = parse_sequence(BufReader::new(file))?;
    log::debug!("loaded sequence of length {}", sequence.chars().count());
    Ok(sequence)
}

/// Generates the reverse complement of a DNA sequence.
///
/// A, C, G, T and N are complemented in either case; any other character is kept as is.
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .chars()
        .rev()
        .map(|c| COMPLEMENT.get(&c).copied().unwrap_or(c))
        .collect()
}
