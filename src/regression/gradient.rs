//! Gradient-descent steps and the fitting loop.

use crate::error::{GaError, Result};

/// Mean squared error of the line `theta_0 + theta_1 · x` over `data`.
///
/// # Errors
/// [`GaError::InvalidArgument`] if `data` is empty.
pub fn compute_mse(theta_0: f64, theta_1: f64, data: &[(f64, f64)]) -> Result<f64> {
    check_data(data)?;
    let total: f64 = data
        .iter()
        .map(|&(x, y)| {
            let residual = theta_0 + theta_1 * x - y;
            residual * residual
        })
        .sum();
    Ok(total / data.len() as f64)
}

/// One batch gradient-descent update with learning rate `alpha`.
///
/// Returns the new `(theta_0, theta_1)`.
///
/// # Errors
/// [`GaError::InvalidArgument`] if `data` is empty or `alpha` is not finite.
pub fn step_gradient(
    theta_0: f64,
    theta_1: f64,
    data: &[(f64, f64)],
    alpha: f64,
) -> Result<(f64, f64)> {
    check_data(data)?;
    check_alpha(alpha)?;
    Ok(step_unchecked(theta_0, theta_1, data, alpha))
}

/// Runs `num_iterations` gradient-descent updates from the given start.
///
/// Returns the history of `theta_0` and of `theta_1`. Both start with the
/// initial values and end with the last update, so each has
/// `num_iterations + 1` entries.
///
/// ```
/// use queens_evo::regression::fit;
///
/// let data: Vec<(f64, f64)> = (0..10).map(|x| (x as f64, 2.0 * x as f64 + 1.0)).collect();
/// let (t0, t1) = fit(&data, 0.0, 0.0, 0.01, 5000).unwrap();
/// assert!((t0.last().unwrap() - 1.0).abs() < 1e-6);
/// assert!((t1.last().unwrap() - 2.0).abs() < 1e-6);
/// ```
///
/// # Errors
/// [`GaError::InvalidArgument`] if `data` is empty or `alpha` is not finite.
pub fn fit(
    data: &[(f64, f64)],
    theta_0: f64,
    theta_1: f64,
    alpha: f64,
    num_iterations: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    check_data(data)?;
    check_alpha(alpha)?;

    let mut history_0 = Vec::with_capacity(num_iterations + 1);
    let mut history_1 = Vec::with_capacity(num_iterations + 1);
    history_0.push(theta_0);
    history_1.push(theta_1);

    let (mut t0, mut t1) = (theta_0, theta_1);
    for _ in 0..num_iterations {
        (t0, t1) = step_unchecked(t0, t1, data, alpha);
        history_0.push(t0);
        history_1.push(t1);
    }

    tracing::debug!(
        iterations = num_iterations,
        theta_0 = t0,
        theta_1 = t1,
        "Gradient descent finished"
    );
    Ok((history_0, history_1))
}

fn step_unchecked(theta_0: f64, theta_1: f64, data: &[(f64, f64)], alpha: f64) -> (f64, f64) {
    let n = data.len() as f64;
    let (sum_0, sum_1) = data.iter().fold((0.0, 0.0), |(s0, s1), &(x, y)| {
        let residual = theta_0 + theta_1 * x - y;
        (s0 + residual, s1 + residual * x)
    });
    let grad_0 = 2.0 * sum_0 / n;
    let grad_1 = 2.0 * sum_1 / n;
    (theta_0 - alpha * grad_0, theta_1 - alpha * grad_1)
}

fn check_data(data: &[(f64, f64)]) -> Result<()> {
    if data.is_empty() {
        return Err(GaError::invalid("regression data must not be empty"));
    }
    Ok(())
}

fn check_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() {
        return Err(GaError::invalid(format!(
            "learning rate must be finite, got {alpha}"
        )));
    }
    Ok(())
}
