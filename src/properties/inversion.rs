//! Inverse problems solved with the modified Newton-Raphson engine.
//!
//! Each routine runs a fixed number of rounds; the counts below reproduce the
//! documented accuracies for oceanographic inputs and are not adapted at run time.

use crate::constants::{DB2PA, SA_MAX};
use crate::gibbs::{self, Derivative, gibbs};
use crate::properties::chemical::{chem_potential_water_t_exact, pure_water_chem_potential};
use crate::solver::{Iterate, modified_newton};

/// Rounds for [`sa_from_rho_t_exact`]; error below 2e-13 g/kg.
pub const SA_FROM_RHO_STEPS: usize = 2;
/// Rounds for [`t_maxdensity_exact`]; within 1e-9 °C of the converged root.
pub const T_MAXDENSITY_STEPS: usize = 3;
/// Rounds for [`osmotic_pressure_t_exact`]; error below 6e-12 dbar.
pub const OSMOTIC_PRESSURE_STEPS: usize = 2;

/// Temperature increment [°C] of the centered difference for `g_TTP`.
const DT_MAXDENSITY: f64 = 0.001;
/// Initial estimate of `g_TTP` [m³/(kg·K²)].
const G_TTP_GUESS: f64 = 1.1e-8;
/// Offset [dbar] of the initial osmotic-pressure estimate above `pw`.
const OSMOTIC_PRESSURE_GUESS: f64 = 235.4684;

/// Absolute Salinity [g/kg] of seawater with density `rho` [kg/m³] at
/// in-situ temperature `t` [°C] and pressure `p` [dbar].
///
/// Returns `None` when the linear first estimate of SA lies outside
/// `[0, 120]` g/kg. The iteration still runs on such estimates; the flag is
/// decided before the loop and applied after it. Pure water can come back
/// `None`: `1/(1/v)` may differ from `v` by one ulp, which puts the first
/// estimate just below zero.
pub fn sa_from_rho_t_exact(rho: f64, t: f64, p: f64) -> Option<f64> {
    sa_from_rho(rho, t, p, SA_FROM_RHO_STEPS)
}

pub(crate) fn sa_from_rho(rho: f64, t: f64, p: f64, steps: usize) -> Option<f64> {
    let v_lab = 1.0 / rho;
    let v_0 = gibbs(Derivative::G_P, 0.0, t, p);
    let v_max = gibbs(Derivative::G_P, SA_MAX, t, p);

    let sa = SA_MAX * (v_lab - v_0) / (v_max - v_0);
    let out_of_range = sa < 0.0 || sa > SA_MAX;
    let v_sa = (v_max - v_0) / SA_MAX;

    let solved = modified_newton(
        Iterate::new(sa, v_sa),
        steps,
        |sa| gibbs(Derivative::G_P, sa, t, p) - v_lab,
        |sa| gibbs(Derivative::G_SA_P, sa, t, p),
    );

    if out_of_range {
        tracing::debug!(rho, t, p, estimate = sa, "salinity estimate outside [0, 120] g/kg");
        return None;
    }
    Some(solved.value)
}

/// In-situ temperature [°C] of maximum density at Absolute Salinity `sa`
/// [g/kg] and pressure `p` [dbar].
///
/// Finds the root of `g_TP` (thermal expansion vanishes). The slope `g_TTP`
/// is a centered difference of `g_TP` around the mid-point temperature.
pub fn t_maxdensity_exact(sa: f64, p: f64) -> f64 {
    t_maxdensity(sa, p, T_MAXDENSITY_STEPS)
}

pub(crate) fn t_maxdensity(sa: f64, p: f64, steps: usize) -> f64 {
    let t = 3.978 - 0.22072 * sa;
    modified_newton(
        Iterate::new(t, G_TTP_GUESS),
        steps,
        |t| gibbs(Derivative::G_TP, sa, t, p),
        |t| {
            (gibbs(Derivative::G_TP, sa, t + DT_MAXDENSITY, p)
                - gibbs(Derivative::G_TP, sa, t - DT_MAXDENSITY, p))
                / (2.0 * DT_MAXDENSITY)
        },
    )
    .value
}

/// Osmotic pressure [dbar] of seawater.
///
/// The extra pressure needed on seawater (`sa`, `t`) to bring the chemical
/// potential of its water into equilibrium with pure water at pressure `pw`
/// [dbar].
pub fn osmotic_pressure_t_exact(sa: f64, t: f64, pw: f64) -> f64 {
    osmotic_pressure(sa, t, pw, OSMOTIC_PRESSURE_STEPS)
}

pub(crate) fn osmotic_pressure(sa: f64, t: f64, pw: f64, steps: usize) -> f64 {
    let sa = gibbs::clamp_salinity(sa);
    let mu_pure_water = pure_water_chem_potential(t, pw);
    let df_dp = |p: f64| {
        -DB2PA * (gibbs(Derivative::G_P, sa, t, p) - sa * gibbs(Derivative::G_SA_P, sa, t, p))
    };

    let p = pw + OSMOTIC_PRESSURE_GUESS;
    let solved = modified_newton(
        Iterate::new(p, df_dp(p)),
        steps,
        |p| mu_pure_water - chem_potential_water_t_exact(sa, t, p),
        df_dp,
    );
    solved.value - pw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::volume::{alpha_wrt_t_exact, rho_t_exact};
    use approx::assert_relative_eq;

    #[test]
    fn sa_from_rho_recovers_salinity() {
        let states = [
            (0.01, -2.0, 0.0),
            (20.0, 10.0, 5000.0),
            (42.0, 40.0, 0.0),
            (42.0, -2.0, 10000.0),
        ];
        for &(sa, t, p) in &states {
            let rho = rho_t_exact(sa, t, p);
            let back = sa_from_rho_t_exact(rho, t, p).unwrap();
            assert!((back - sa).abs() < 2e-10, "sa={sa} back={back}");
        }
    }

    #[test]
    fn sa_from_rho_masks_out_of_range_estimates() {
        // Lighter than pure water at this state.
        let rho = rho_t_exact(0.0, 10.0, 0.0) - 1.0;
        assert_eq!(sa_from_rho_t_exact(rho, 10.0, 0.0), None);
        // Denser than 120 g/kg brine.
        let rho = rho_t_exact(SA_MAX, 10.0, 0.0) + 5.0;
        assert_eq!(sa_from_rho_t_exact(rho, 10.0, 0.0), None);
    }

    #[test]
    fn sa_from_rho_extra_round_changes_nothing() {
        let (sa, t, p) = (34.7366, 6.8863, 600.0);
        let rho = rho_t_exact(sa, t, p);
        let two = sa_from_rho(rho, t, p, 2).unwrap();
        let three = sa_from_rho(rho, t, p, 3).unwrap();
        assert!((two - three).abs() < 2e-12);
    }

    #[test]
    fn t_maxdensity_zeroes_thermal_expansion() {
        let t = t_maxdensity_exact(0.0, 0.0);
        assert_relative_eq!(t, 3.978_889_580_772, max_relative = 1e-9);
        assert!(alpha_wrt_t_exact(0.0, t, 0.0).abs() < 1e-15);
    }

    #[test]
    fn t_maxdensity_falls_with_salinity_and_pressure() {
        let fresh = t_maxdensity_exact(0.0, 0.0);
        let salty = t_maxdensity_exact(35.0, 0.0);
        let deep = t_maxdensity_exact(35.0, 500.0);
        assert!(salty < fresh);
        assert!(deep < salty);
        assert!((t_maxdensity(35.0, 0.0, 4) - salty).abs() < 1e-13);
    }

    #[test]
    fn osmotic_pressure_balances_water_potentials() {
        let (sa, t, pw) = (35.0, 20.0, 0.0);
        let dp = osmotic_pressure_t_exact(sa, t, pw);
        assert_relative_eq!(dp, 253.618_097_643, max_relative = 1e-9);
        let mismatch =
            pure_water_chem_potential(t, pw) - chem_potential_water_t_exact(sa, t, pw + dp);
        assert!(mismatch.abs() < 1e-8, "mismatch = {mismatch}");
    }

    proptest::proptest! {
        #[test]
        fn one_more_round_changes_nothing(
            sa in 0.5f64..42.0,
            t in -2.0f64..40.0,
            p in 0.0f64..10_000.0,
        ) {
            let rho = rho_t_exact(sa, t, p);
            let k = sa_from_rho(rho, t, p, SA_FROM_RHO_STEPS).unwrap();
            let k1 = sa_from_rho(rho, t, p, SA_FROM_RHO_STEPS + 1).unwrap();
            proptest::prop_assert!((k - k1).abs() < 1e-11);

            let k = osmotic_pressure(sa, t.max(0.0), p / 2.0, OSMOTIC_PRESSURE_STEPS);
            let k1 = osmotic_pressure(sa, t.max(0.0), p / 2.0, OSMOTIC_PRESSURE_STEPS + 1);
            proptest::prop_assert!((k - k1).abs() < 1e-9);

            let k = t_maxdensity(sa, p / 2.0, T_MAXDENSITY_STEPS);
            let k1 = t_maxdensity(sa, p / 2.0, T_MAXDENSITY_STEPS + 1);
            proptest::prop_assert!((k - k1).abs() < 1e-9);
        }
    }

    #[test]
    fn osmotic_pressure_of_pure_water_is_zero() {
        let dp = osmotic_pressure_t_exact(0.0, 10.0, 100.0);
        assert!(dp.abs() < 1e-9, "dp = {dp}");
    }

    #[test]
    fn osmotic_pressure_treats_negative_salinity_as_pure_water() {
        assert_eq!(
            osmotic_pressure_t_exact(-1.0, 10.0, 100.0),
            osmotic_pressure_t_exact(0.0, 10.0, 100.0)
        );
        assert!(osmotic_pressure_t_exact(f64::NAN, 10.0, 100.0).is_nan());
    }
}
