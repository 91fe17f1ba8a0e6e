//! Modified Newton-Raphson root finder with a mid-point slope refresh.
//!
//! Every inversion in the crate (salinity from density, temperature of maximum
//! density, osmotic pressure, potential temperature, temperature from
//! Conservative Temperature) runs the same fixed-length loop:
//!
//! 1. evaluate the residual `f` at the current estimate `x_old`;
//! 2. take a Newton step `x½ = x_old - f / s` with the slope `s` carried over
//!    from the previous round;
//! 3. refresh the slope at the mid-point `(x½ + x_old) / 2`;
//! 4. redo the step from `x_old` with the refreshed slope.
//!
//! The step count is fixed per instance; there is no residual-based stopping
//! test, so every call costs the same number of evaluations.

/// State of the iteration: the estimate and the slope used for the next step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Iterate {
    pub value: f64,
    pub slope: f64,
    /// Size of the last full step; zero before the first round.
    pub correction: f64,
}

impl Iterate {
    pub fn new(value: f64, slope: f64) -> Self {
        Self {
            value,
            slope,
            correction: 0.0,
        }
    }
}

/// Runs `steps` rounds of the modified Newton-Raphson scheme from `initial`.
///
/// `residual(x)` is the function whose root is sought and `slope(x)` its
/// derivative; the slope is only ever evaluated at mid-points.
pub fn modified_newton<R, S>(initial: Iterate, steps: usize, mut residual: R, mut slope: S) -> Iterate
where
    R: FnMut(f64) -> f64,
    S: FnMut(f64) -> f64,
{
    let mut state = initial;
    for step in 0..steps {
        let old = state.value;
        let f = residual(old);
        let half = old - f / state.slope;
        state.slope = slope(0.5 * (half + old));
        state.value = old - f / state.slope;
        state.correction = state.value - old;
        tracing::trace!(step, value = state.value, correction = state.correction, "modified newton step");
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_steps_returns_initial_state() {
        let start = Iterate::new(1.5, 3.0);
        let end = modified_newton(start, 0, |x| x * x - 2.0, |x| 2.0 * x);
        assert_eq!(end, start);
    }

    #[test]
    fn square_root_converges_in_four_rounds() {
        let end = modified_newton(Iterate::new(1.0, 2.0), 4, |x| x * x - 2.0, |x| 2.0 * x);
        assert_relative_eq!(end.value, 2f64.sqrt(), max_relative = 1e-15);
        assert!(end.correction.abs() < 1e-12);
    }

    #[test]
    fn linear_residual_is_solved_in_one_round() {
        // For a linear residual the mid-point slope is exact.
        let end = modified_newton(Iterate::new(10.0, 1.0), 1, |x| 4.0 * x - 8.0, |_| 4.0);
        assert_eq!(end.value, 2.0);
        assert_eq!(end.slope, 4.0);
    }

    #[test]
    fn slope_is_evaluated_at_mid_points_only() {
        let mut probes = Vec::new();
        let _ = modified_newton(
            Iterate::new(0.0, 1.0),
            2,
            |x| x - 1.0,
            |x| {
                probes.push(x);
                1.0
            },
        );
        // Round one: half step lands on 1.0 from 0.0, mid-point 0.5.
        assert_eq!(probes, vec![0.5, 1.0]);
    }

    #[test]
    fn nan_residual_propagates() {
        let end = modified_newton(Iterate::new(1.0, 1.0), 2, |_| f64::NAN, |_| 1.0);
        assert!(end.value.is_nan());
    }
}
