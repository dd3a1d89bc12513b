//! Ordinary least squares fitting
//!
//! Two shapes are enough for this suite: a single-feature regression fitted
//! from centered sums, and a small multi-feature model solved through the
//! normal equations. Feature counts here never exceed a handful, so a dense
//! Gaussian elimination is plenty.

use crate::error::RegressionError;

/// Pivots smaller than this are treated as zero during elimination
const SINGULARITY_EPSILON: f64 = 1e-10;

/// Single-feature linear regression (y = slope * x + intercept)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleRegression {
    pub slope: f64,
    pub intercept: f64,
}

impl SimpleRegression {
    /// Fit from (x, y) observations.
    ///
    /// Needs at least two points and non-zero variance in x.
    pub fn fit(points: &[(f64, f64)]) -> Result<Self, RegressionError> {
        if points.len() < 2 {
            return Err(RegressionError::EmptyTrainingSet);
        }

        let n = points.len() as f64;
        let x_mean = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let y_mean = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (x, y) in points {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < f64::EPSILON {
            return Err(RegressionError::SingularSystem);
        }

        let slope = numerator / denominator;
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Multi-feature linear regression with an intercept term
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Fit via the normal equations `XᵀX w = Xᵀy` with an implicit
    /// all-ones intercept column.
    pub fn fit(rows: &[Vec<f64>], targets: &[f64]) -> Result<Self, RegressionError> {
        if rows.is_empty() {
            return Err(RegressionError::EmptyTrainingSet);
        }
        if rows.len() != targets.len() {
            return Err(RegressionError::DimensionMismatch {
                expected: rows.len(),
                actual: targets.len(),
            });
        }

        let width = rows[0].len();
        for row in rows {
            if row.len() != width {
                return Err(RegressionError::DimensionMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        // Augmented width: features plus the intercept column
        let dim = width + 1;
        let mut normal = vec![vec![0.0; dim]; dim];
        let mut rhs = vec![0.0; dim];

        for (row, &y) in rows.iter().zip(targets) {
            for i in 0..dim {
                let xi = if i < width { row[i] } else { 1.0 };
                rhs[i] += xi * y;
                for j in 0..dim {
                    let xj = if j < width { row[j] } else { 1.0 };
                    normal[i][j] += xi * xj;
                }
            }
        }

        let solution = solve(&mut normal, &mut rhs)?;
        let (coefficients, intercept) = solution.split_at(width);
        Ok(Self {
            coefficients: coefficients.to_vec(),
            intercept: intercept[0],
        })
    }

    /// Predict for a feature row of the same width used at fit time
    #[must_use]
    pub fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

/// Gaussian elimination with partial pivoting. Consumes its inputs.
fn solve(matrix: &mut [Vec<f64>], rhs: &mut [f64]) -> Result<Vec<f64>, RegressionError> {
    let n = rhs.len();

    for col in 0..n {
        // Partial pivot: bring the largest remaining entry onto the diagonal
        let pivot_row = (col..n)
            .max_by(|&a, &b| {
                matrix[a][col]
                    .abs()
                    .total_cmp(&matrix[b][col].abs())
            })
            .unwrap_or(col);
        if matrix[pivot_row][col].abs() < SINGULARITY_EPSILON {
            return Err(RegressionError::SingularSystem);
        }
        matrix.swap(col, pivot_row);
        rhs.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..n {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    // Back substitution
    let mut solution = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = rhs[row];
        for col in (row + 1)..n {
            acc -= matrix[row][col] * solution[col];
        }
        solution[row] = acc / matrix[row][row];
    }
    Ok(solution)
}

/// Mean squared error between paired observations
#[must_use]
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    sum / actual.len() as f64
}
