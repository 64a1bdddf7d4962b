use super::{MotifError, NUM_BASES};
use std::str::FromStr;

const SUM_TOLERANCE: f64 = 1e-6;

/// Background nucleotide frequencies in G, A, T, C order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background([f64; NUM_BASES]);

impl Background {
    pub fn new(freqs: [f64; NUM_BASES]) -> Result<Self, MotifError> {
        if let Some(value) = freqs.iter().find(|&&f| !(f.is_finite() && f > 0.0)) {
            return Err(MotifError::Domain(format!(
                "Background frequencies must be strictly positive, got {}",
                value
            )));
        }
        let total: f64 = freqs.iter().sum();
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(MotifError::Domain(format!(
                "Background frequencies must sum to 1, got {}",
                total
            )));
        }
        Ok(Self(freqs))
    }

    pub fn freqs(&self) -> &[f64; NUM_BASES] {
        &self.0
    }

    pub fn get(&self, code: usize) -> f64 {
        self.0[code]
    }
}

impl Default for Background {
    fn default() -> Self {
        //             G    A    T    C
        Self([0.2, 0.3, 0.3, 0.2])
    }
}

impl FromStr for Background {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|x| x.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                MotifError::Input(format!("Could not parse background '{}': {}", s, e))
            })?;
        let freqs: [f64; NUM_BASES] = values.try_into().map_err(|v: Vec<f64>| {
            MotifError::Input(format!(
                "Expected {} comma-separated values (G,A,T,C) in background. Got {} -> {}",
                NUM_BASES,
                v.len(),
                s
            ))
        })?;
        Self::new(freqs)
    }
}
