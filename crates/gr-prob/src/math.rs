//! Grid and quadrature helpers used with magnitude sequences.

use gr_core::{Error, Result};

/// `points` evenly spaced values from `start` to `stop`, both inclusive.
///
/// `points == 0` yields an empty grid, `points == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / (n - 1) as f64;
            // Last point pinned to `stop` so the grid covers the full range.
            (0..n).map(|i| if i == n - 1 { stop } else { start + step * i as f64 }).collect()
        }
    }
}

/// Trapezoidal integral of `ys` sampled at `xs`.
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(Error::Validation(format!(
            "trapezoid length mismatch: xs has {}, ys has {}",
            xs.len(),
            ys.len()
        )));
    }
    Ok(xs.windows(2).zip(ys.windows(2)).map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1])).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let g = linspace(4.0, 7.0, 31);
        assert_eq!(g.len(), 31);
        assert_eq!(g[0], 4.0);
        assert_eq!(g[30], 7.0);
        assert_relative_eq!(g[10], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn test_trapezoid_linear_is_exact() {
        let xs = linspace(0.0, 2.0, 5);
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x + 1.0).collect();
        assert_relative_eq!(trapezoid(&xs, &ys).unwrap(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_degenerate_inputs() {
        assert_eq!(trapezoid(&[], &[]).unwrap(), 0.0);
        assert_eq!(trapezoid(&[1.0], &[5.0]).unwrap(), 0.0);
        assert!(trapezoid(&[0.0, 1.0], &[1.0]).is_err());
    }
}
