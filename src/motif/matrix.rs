use crate::utils::{
    complement_code,
    math::{column_sums, num_columns, total},
    Matrix, MotifError, Result, NUM_BASES,
};

/// Average number of nucleotides per column a motif is built from.
pub fn average_counts(counts: &[Vec<f64>]) -> f64 {
    let length = num_columns(counts);
    if length == 0 {
        return 0.0;
    }
    total(counts) / length as f64
}

/// Column-normalized counts. All-zero columns have no frequencies.
pub fn frequencies(counts: &[Vec<f64>]) -> Result<Matrix> {
    let sums = column_sums(counts);
    if let Some(j) = sums.iter().position(|&s| s <= 0.0) {
        return Err(MotifError::Domain(format!(
            "Column {} has no counts, frequencies are undefined",
            j
        )));
    }
    Ok(counts
        .iter()
        .map(|row| row.iter().zip(&sums).map(|(c, s)| c / s).collect())
        .collect())
}

/// Posterior expectation of a Dirichlet-multinomial column model.
pub fn posterior_motif(counts: &[Vec<f64>], alpha: &[Vec<f64>]) -> Result<Matrix> {
    let counts_sum = column_sums(counts);
    let alpha_sum = column_sums(alpha);
    let denominators: Vec<f64> = counts_sum
        .iter()
        .zip(&alpha_sum)
        .map(|(c, a)| c + a)
        .collect();
    if let Some(j) = denominators.iter().position(|&d| d <= 0.0) {
        return Err(MotifError::Domain(format!(
            "Column {} has neither counts nor pseudocounts",
            j
        )));
    }
    Ok(counts
        .iter()
        .zip(alpha)
        .map(|(count_row, alpha_row)| {
            count_row
                .iter()
                .zip(alpha_row)
                .zip(&denominators)
                .map(|((c, a), d)| (c + a) / d)
                .collect()
        })
        .collect())
}

/// Reverses the columns and swaps the rows of complementary bases.
pub fn reverse_complement(matrix: &[Vec<f64>]) -> Matrix {
    (0..NUM_BASES)
        .map(|i| {
            let mut row = matrix[complement_code(i)].clone();
            row.reverse();
            row
        })
        .collect()
}
