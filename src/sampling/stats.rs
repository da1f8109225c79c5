//! Estimators over a sequence of observable values.
//!
//! Samples are treated as independent; no autocorrelation correction is made.

use crate::error::{Result, VmcError};

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(VmcError::EmptyInput { operation: "mean" });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Unbiased (n - 1) sample variance, 0 for fewer than two values.
pub fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mu = values.iter().sum::<f64>() / n as f64;
    values.iter().map(|&x| (x - mu).powi(2)).sum::<f64>() / (n - 1) as f64
}

/// Standard error of the mean, sqrt(s² / n).
pub fn standard_error(values: &[f64]) -> Result<f64> {
    match values.len() {
        0 => Err(VmcError::EmptyInput {
            operation: "standard_error",
        }),
        1 => Ok(0.0),
        n => Ok((sample_variance(values) / n as f64).sqrt()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert_eq!(mean(&[-3.0]).unwrap(), -3.0);
    }

    #[test]
    fn test_sample_variance() {
        assert_relative_eq!(sample_variance(&[1.0, 2.0, 3.0, 4.0]), 5.0 / 3.0, epsilon = 1e-12);
        assert_eq!(sample_variance(&[]), 0.0);
        assert_eq!(sample_variance(&[42.0]), 0.0);
        assert_eq!(sample_variance(&[0.5; 100]), 0.0);
    }

    #[test]
    fn test_standard_error() {
        let expected = (5.0f64 / 3.0 / 4.0).sqrt();
        assert_relative_eq!(
            standard_error(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            expected,
            epsilon = 1e-12
        );
        assert_eq!(standard_error(&[7.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = mean(&[]).unwrap_err();
        assert!(matches!(err, VmcError::EmptyInput { operation: "mean" }));
        assert_eq!(err.to_string(), "mean requires at least one value");

        let err = standard_error(&[]).unwrap_err();
        assert!(matches!(err, VmcError::EmptyInput { operation: "standard_error" }));
    }
}
