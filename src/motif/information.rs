use crate::utils::{
    math::{num_columns, xlnx, xlog2x},
    Background, MotifError, Result, NUM_BASES,
};

/// Discrete entropy of every motif column, in nats.
pub fn entropy(motif: &[Vec<f64>]) -> Vec<f64> {
    (0..num_columns(motif))
        .map(|j| -motif.iter().map(|row| xlnx(row[j])).sum::<f64>())
        .collect()
}

/// Average conservation per column in bits, relative to the 2 bit maximum of
/// a four letter alphabet.
pub fn r_sequence(motif: &[Vec<f64>]) -> f64 {
    let length = num_columns(motif);
    if length == 0 {
        return 0.0;
    }
    let max_bits = (NUM_BASES as f64).log2();
    let conservation: f64 = (0..length)
        .map(|j| max_bits + motif.iter().map(|row| xlog2x(row[j])).sum::<f64>())
        .sum();
    conservation / length as f64
}

/// `p * log2(p / q)` with `0 * log(0 / q) := 0`.
fn relative_entropy_term(p: f64, q: f64) -> Result<f64> {
    if p == 0.0 {
        Ok(0.0)
    } else if p > 0.0 && q > 0.0 {
        Ok(p * (p / q).log2())
    } else {
        Err(MotifError::Domain(format!(
            "Relative entropy undefined for p={} against q={}",
            p, q
        )))
    }
}

fn column_divergence<P, Q>(p: P, q: Q) -> Result<f64>
where
    P: Fn(usize) -> f64,
    Q: Fn(usize) -> f64,
{
    (0..NUM_BASES).try_fold(0.0, |acc, i| -> Result<f64> {
        Ok(acc + relative_entropy_term(p(i), q(i))?)
    })
}

/// Average per column relative entropy of the motif to the background, in bits.
pub fn information_content(bg: &Background, motif: &[Vec<f64>]) -> Result<f64> {
    let length = num_columns(motif);
    if length == 0 {
        return Err(MotifError::Domain(
            "Information content of an empty motif".to_string(),
        ));
    }
    let mut total = 0.0;
    for j in 0..length {
        total += column_divergence(|i| motif[i][j], |i| bg.get(i))?;
    }
    Ok(total / length as f64)
}

/// Kullback-Leibler divergence between two frequency matrices with `freq2`
/// shifted `k` columns to the right. Columns without a partner are compared
/// against the background; the sum is normalized by the compared span.
///
/// `|k|` may not exceed the motif length.
pub fn kl_divergence(
    k: isize,
    bg: &Background,
    freq1: &[Vec<f64>],
    freq2: &[Vec<f64>],
) -> Result<f64> {
    let length = num_columns(freq1);
    if length != num_columns(freq2) {
        return Err(MotifError::Domain(format!(
            "Cannot compare frequency matrices of length {} and {}",
            length,
            num_columns(freq2)
        )));
    }
    if length == 0 {
        return Err(MotifError::Domain(
            "Cannot compare empty frequency matrices".to_string(),
        ));
    }

    if k.unsigned_abs() > length {
        return Err(MotifError::Domain(format!(
            "Shift {} exceeds the motif length {}",
            k, length
        )));
    }

    let len = length as isize;
    let in_range = |j: isize| (0..len).contains(&j);
    let mut total = 0.0;
    for j in k.min(0)..len.max(len + k) {
        let (j1, j2) = (j, j - k);
        total += match (in_range(j1), in_range(j2)) {
            (true, true) => column_divergence(
                |i| freq1[i][j1 as usize],
                |i| freq2[i][j2 as usize],
            )?,
            (true, false) => column_divergence(|i| freq1[i][j1 as usize], |i| bg.get(i))?,
            (false, true) => column_divergence(|i| bg.get(i), |i| freq2[i][j2 as usize])?,
            (false, false) => unreachable!("column {} outside both matrices", j),
        };
    }
    Ok(total / (len + k.abs()) as f64)
}

/// Offset within `-max_shift..=max_shift` minimizing the divergence. Ties go
/// to the smaller shift, then to the negative one. Shifts are capped at the
/// motif length.
pub fn best_offset(
    bg: &Background,
    freq1: &[Vec<f64>],
    freq2: &[Vec<f64>],
    max_shift: usize,
) -> Result<(isize, f64)> {
    let mut best = (0, kl_divergence(0, bg, freq1, freq2)?);
    let max_shift = max_shift.min(num_columns(freq1));
    for shift in 1..=max_shift as isize {
        for k in [-shift, shift] {
            let divergence = kl_divergence(k, bg, freq1, freq2)?;
            if divergence < best.1 {
                best = (k, divergence);
            }
        }
    }
    Ok(best)
}
