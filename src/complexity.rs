//! Empirical Complexity Fitting
//!
//! If a sort runs in `C * f(N)` time, then `duration / f(N)` estimates `C`.
//! The constant is the plain mean of that ratio over all scales. This is not a
//! least-squares fit; it only needs to be good enough to overlay a reference
//! line on a log-log chart.

/// Theoretical growth function a model constant is fitted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityModel {
    /// O(N²)
    Quadratic,
    /// O(N log N), natural logarithm
    Linearithmic,
}

impl ComplexityModel {
    pub fn label(&self) -> &'static str {
        match self {
            ComplexityModel::Quadratic => "O(N^2)",
            ComplexityModel::Linearithmic => "O(N log N)",
        }
    }

    /// Value of the growth function at `n`.
    pub fn growth(&self, n: f64) -> f64 {
        match self {
            ComplexityModel::Quadratic => n * n,
            ComplexityModel::Linearithmic => n * n.ln(),
        }
    }

    /// Fit the model constant as the mean of `duration / growth(scale)`.
    ///
    /// Scales where the growth function is not strictly positive (N = 0, and
    /// N = 1 for N log N) carry no information and are skipped. With nothing
    /// left to average the constant is zero.
    pub fn fit(&self, scales: &[usize], durations: &[f64]) -> FittedModel {
        let ratios: Vec<f64> = scales
            .iter()
            .zip(durations)
            .filter_map(|(&scale, &duration)| {
                let growth = self.growth(scale as f64);
                (growth > 0.0).then(|| duration / growth)
            })
            .collect();

        let constant = if ratios.is_empty() {
            0.0
        } else {
            ratios.iter().sum::<f64>() / ratios.len() as f64
        };

        FittedModel {
            model: *self,
            constant,
        }
    }
}

/// A complexity model with its fitted constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedModel {
    pub model: ComplexityModel,
    pub constant: f64,
}

impl FittedModel {
    /// Predicted duration in seconds at input size `n`.
    pub fn predict(&self, n: f64) -> f64 {
        self.constant * self.model.growth(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALES: [usize; 8] = [10, 20, 50, 100, 200, 500, 1000, 5000];

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs() * 1e-9;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_growth() {
        assert_eq!(ComplexityModel::Quadratic.growth(10.0), 100.0);
        assert_close(ComplexityModel::Linearithmic.growth(10.0), 10.0 * 10f64.ln());
        assert_eq!(ComplexityModel::Linearithmic.growth(1.0), 0.0);
    }

    #[test]
    fn test_fit_recovers_quadratic_constant() {
        let c = 3.5e-9;
        let durations: Vec<f64> = SCALES.iter().map(|&n| c * (n * n) as f64).collect();
        let fitted = ComplexityModel::Quadratic.fit(&SCALES, &durations);
        assert_close(fitted.constant, c);
        assert_close(fitted.predict(5000.0), durations[7]);
    }

    #[test]
    fn test_fit_recovers_linearithmic_constant() {
        let c = 2.0e-8;
        let durations: Vec<f64> = SCALES
            .iter()
            .map(|&n| c * n as f64 * (n as f64).ln())
            .collect();
        let fitted = ComplexityModel::Linearithmic.fit(&SCALES, &durations);
        assert_close(fitted.constant, c);
    }

    #[test]
    fn test_fit_is_mean_of_ratios() {
        let fitted = ComplexityModel::Quadratic.fit(&[10, 100], &[1.0, 1.0]);
        assert_close(fitted.constant, (1.0 / 100.0 + 1.0 / 10_000.0) / 2.0);
    }

    #[test]
    fn test_fit_skips_degenerate_scales() {
        let fitted = ComplexityModel::Linearithmic.fit(&[0, 1, 10], &[5.0, 5.0, 1.0]);
        assert_close(fitted.constant, 1.0 / (10.0 * 10f64.ln()));
        assert!(fitted.constant.is_finite());
    }

    #[test]
    fn test_fit_empty_is_zero() {
        let fitted = ComplexityModel::Quadratic.fit(&[], &[]);
        assert_eq!(fitted.constant, 0.0);
        assert_eq!(fitted.predict(100.0), 0.0);
    }
}
