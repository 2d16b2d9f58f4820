//! Sample moments of observed variables.

use nalgebra::{DMatrix, DVector};

/// Means and the maximum-likelihood (divisor n) covariance matrix of a set of columns.
#[derive(Debug, Clone)]
pub struct SampleMoments {
    pub n_obs: usize,
    pub means: DVector<f64>,
    pub covariance: DMatrix<f64>,
}

impl SampleMoments {
    /// Compute moments of equal-length columns. Returns `None` for no columns
    /// or no observations.
    pub fn from_columns(columns: &[&[f64]]) -> Option<Self> {
        let p = columns.len();
        let n = columns.first().map_or(0, |c| c.len());
        if p == 0 || n == 0 || columns.iter().any(|c| c.len() != n) {
            return None;
        }

        let means = DVector::from_fn(p, |j, _| columns[j].iter().sum::<f64>() / n as f64);
        let centered = DMatrix::from_fn(n, p, |i, j| columns[j][i] - means[j]);
        let covariance = centered.transpose() * &centered / n as f64;

        Some(Self {
            n_obs: n,
            means,
            covariance,
        })
    }

    /// Variance of column `j`.
    pub fn variance(&self, j: usize) -> f64 {
        self.covariance[(j, j)]
    }

    /// True when column `j` is numerically constant.
    pub fn is_degenerate(&self, j: usize) -> bool {
        let scale = 1.0 + self.means[j].abs();
        !(self.variance(j) > f64::EPSILON * scale * scale)
    }

    /// Square sub-matrix over `rows` x `cols`.
    pub fn block(&self, rows: &[usize], cols: &[usize]) -> DMatrix<f64> {
        DMatrix::from_fn(rows.len(), cols.len(), |a, b| self.covariance[(rows[a], cols[b])])
    }

    /// Covariances of the columns in `rows` with column `col`.
    pub fn cross(&self, rows: &[usize], col: usize) -> DVector<f64> {
        DVector::from_fn(rows.len(), |a, _| self.covariance[(rows[a], col)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ml_covariance_uses_n_divisor() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        let m = SampleMoments::from_columns(&[&x, &y]).unwrap();
        assert_eq!(m.n_obs, 4);
        assert!((m.means[0] - 2.5).abs() < 1e-12);
        assert!((m.variance(0) - 1.25).abs() < 1e-12);
        assert!((m.covariance[(0, 1)] - 2.5).abs() < 1e-12);
        assert!((m.covariance[(1, 0)] - 2.5).abs() < 1e-12);
        assert_eq!(m.cross(&[0], 1)[0], m.covariance[(0, 1)]);
        assert_eq!(m.block(&[1], &[1])[(0, 0)], m.variance(1));
    }

    #[test]
    fn constant_column_is_degenerate() {
        let x = [3.0; 10];
        let y = [1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
        let m = SampleMoments::from_columns(&[&x, &y]).unwrap();
        assert!(m.is_degenerate(0));
        assert!(!m.is_degenerate(1));
    }

    #[test]
    fn ragged_or_empty_input_is_rejected() {
        assert!(SampleMoments::from_columns(&[]).is_none());
        assert!(SampleMoments::from_columns(&[&[1.0, 2.0], &[1.0]]).is_none());
        assert!(SampleMoments::from_columns(&[&[]]).is_none());
    }
}
