/// Row-major matrix; rows are nucleotides and columns motif positions.
pub type Matrix = Vec<Vec<f64>>;

pub fn zeros(rows: usize, columns: usize) -> Matrix {
    vec![vec![0.0; columns]; rows]
}

pub fn num_columns(matrix: &[Vec<f64>]) -> usize {
    matrix.first().map_or(0, Vec::len)
}

pub fn column_sums(matrix: &[Vec<f64>]) -> Vec<f64> {
    let mut sums = vec![0.0; num_columns(matrix)];
    for row in matrix {
        for (sum, value) in sums.iter_mut().zip(row) {
            *sum += value;
        }
    }
    sums
}

pub fn total(matrix: &[Vec<f64>]) -> f64 {
    matrix.iter().map(|row| row.iter().sum::<f64>()).sum()
}

/// `p * ln(p)` with `0 * ln(0) := 0`.
#[inline]
pub fn xlnx(p: f64) -> f64 {
    if p == 0.0 {
        0.0
    } else {
        p * p.ln()
    }
}

/// `p * log2(p)` with `0 * log2(0) := 0`.
#[inline]
pub fn xlog2x(p: f64) -> f64 {
    if p == 0.0 {
        0.0
    } else {
        p * p.log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_sums() {
        let matrix = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![0.5, 0.0]];
        assert_eq!(column_sums(&matrix), vec![4.5, 6.0]);
        assert_eq!(total(&matrix), 10.5);
    }

    #[test]
    fn test_column_sums_empty() {
        let matrix: Matrix = Vec::new();
        assert!(column_sums(&matrix).is_empty());
        assert_eq!(num_columns(&matrix), 0);
    }

    #[test]
    fn test_zero_log_convention() {
        assert_eq!(xlnx(0.0), 0.0);
        assert_eq!(xlog2x(0.0), 0.0);
        assert_eq!(xlog2x(0.5), -0.5);
        assert_eq!(xlnx(1.0), 0.0);
    }
}
