//! Univariate linear regression by batch gradient descent.
//!
//! Fits `y ≈ theta_0 + theta_1 · x` to a set of `(x, y)` points by
//! minimizing the mean squared error. Independent of the GA: it shares only
//! the crate's error type.
//!
//! # References
//!
//! - Cauchy (1847), "Méthode générale pour la résolution des systèmes
//!   d'équations simultanées"

mod gradient;

pub use gradient::{compute_mse, fit, step_gradient};
