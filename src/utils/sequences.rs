use crate::utils::{MotifError, Result, SoftColumn};
use std::io::BufRead;

/// Expected nucleotide composition of every column of one aligned sequence.
pub type SoftSequence = Vec<SoftColumn>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoftSequences {
    pub names: Vec<String>,
    pub sequences: Vec<SoftSequence>,
}

impl SoftSequences {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn as_slice(&self) -> &[SoftSequence] {
        &self.sequences
    }

    /// Reads the block format written by the sampler: a `>name` line opens a
    /// sequence and each following line holds the G A T C gap composition of
    /// one alignment column.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut soft = SoftSequences::default();

        for (line_number, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                MotifError::Input(format!("Error reading line {}: {}", line_number + 1, e))
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('>') {
                soft.names.push(name.trim().to_string());
                soft.sequences.push(Vec::new());
                continue;
            }

            let column = parse_column(line).map_err(|e| e.at_line(line_number + 1))?;
            match soft.sequences.last_mut() {
                Some(sequence) => sequence.push(column),
                None => {
                    return Err(MotifError::Input(format!(
                        "Error at line {}: column found before the first '>' header",
                        line_number + 1
                    )))
                }
            }
        }

        log::debug!(
            "Loaded {} soft sequences with {} columns in total",
            soft.len(),
            soft.sequences.iter().map(Vec::len).sum::<usize>()
        );
        Ok(soft)
    }
}

/// Reads hard nucleotide sequences from FASTA text; multi-line records are
/// concatenated.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<(String, Vec<u8>)>> {
    let mut records: Vec<(String, Vec<u8>)> = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            MotifError::Input(format!("Error reading line {}: {}", line_number + 1, e))
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix('>') {
            let name = name.split_whitespace().next().unwrap_or_default();
            records.push((name.to_string(), Vec::new()));
            continue;
        }
        match records.last_mut() {
            Some((_, sequence)) => sequence.extend_from_slice(line.as_bytes()),
            None => {
                return Err(MotifError::Input(format!(
                    "Error at line {}: sequence found before the first '>' header",
                    line_number + 1
                )))
            }
        }
    }
    Ok(records)
}

fn parse_column(line: &str) -> Result<SoftColumn> {
    let values = line
        .split_whitespace()
        .map(|value| {
            value
                .parse::<f64>()
                .map_err(|e| MotifError::Input(format!("Invalid count '{}': {}", value, e)))
        })
        .collect::<Result<Vec<f64>>>()?;
    let column: SoftColumn = values.try_into().map_err(|v: Vec<f64>| {
        MotifError::Input(format!(
            "Expected 5 values (G A T C gap) per column, found {}",
            v.len()
        ))
    })?;
    if column.iter().any(|&c| c < 0.0 || !c.is_finite()) {
        return Err(MotifError::Input(format!(
            "Column counts must be finite and non-negative: {}",
            line
        )));
    }
    Ok(column)
}
