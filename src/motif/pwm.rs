use crate::utils::{math::num_columns, Background, Matrix, MotifError, Nucleotide, Result};

/// Log-odds scores `log2(motif / background)` in bits.
pub fn pwm(motif: &[Vec<f64>], bg: &Background) -> Result<Matrix> {
    motif
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let background = bg.get(i);
            row.iter()
                .enumerate()
                .map(|(j, &p)| {
                    if p > 0.0 && background > 0.0 {
                        Ok((p / background).log2())
                    } else {
                        Err(MotifError::Domain(format!(
                            "Cannot take log-odds of {} against background {} at row {}, column {}",
                            p, background, i, j
                        )))
                    }
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

/// Sums the scores of the bases of a hard sequence. Symbols other than
/// A, C, G, T contribute nothing.
pub fn score(pwm: &[Vec<f64>], sequence: &[u8]) -> f64 {
    sequence
        .iter()
        .take(num_columns(pwm))
        .enumerate()
        .filter_map(|(j, &base)| Nucleotide::from_byte(base).map(|n| pwm[n.code()][j]))
        .sum()
}

/// A window of a scanned sequence scoring above the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanHit {
    pub position: usize,
    pub score: f64,
}

/// Slides the matrix along `sequence` and reports every window scoring
/// strictly above `threshold`. Windows spanning an alignment gap are skipped.
pub fn scan(pwm: &[Vec<f64>], sequence: &[u8], threshold: f64) -> Vec<ScanHit> {
    let length = num_columns(pwm);
    if length == 0 || sequence.len() < length {
        return Vec::new();
    }
    sequence
        .windows(length)
        .enumerate()
        .filter(|(_, window)| !window.contains(&b'-'))
        .filter_map(|(position, window)| {
            let score = score(pwm, window);
            (score > threshold).then_some(ScanHit { position, score })
        })
        .collect()
}
