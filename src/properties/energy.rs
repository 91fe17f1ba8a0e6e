//! Entropy, energies, heat capacities and the adiabatic lapse rate.

use crate::adapters::teos10::ct_from_t;
use crate::constants::{CP0, DB2PA, P0, T0};
use crate::gibbs::{Derivative, gibbs};

/// Specific entropy [J/(kg·K)]: `η = -g_T`.
pub fn entropy_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    -gibbs(Derivative::G_T, sa, t, p)
}

/// Specific enthalpy [J/kg]: `h = g - (T0 + t) g_T`.
pub fn enthalpy_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    gibbs(Derivative::G, sa, t, p) - (T0 + t) * gibbs(Derivative::G_T, sa, t, p)
}

/// Specific internal energy [J/kg]: `u = g - (T0 + t) g_T - (P0 + p) g_P`,
/// absolute pressure in Pa.
pub fn internal_energy_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    gibbs(Derivative::G, sa, t, p)
        - (T0 + t) * gibbs(Derivative::G_T, sa, t, p)
        - (DB2PA * p + P0) * gibbs(Derivative::G_P, sa, t, p)
}

/// Specific Helmholtz energy [J/kg]: `f = g - (P0 + p) g_P`.
pub fn helmholtz_energy_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    gibbs(Derivative::G, sa, t, p) - (DB2PA * p + P0) * gibbs(Derivative::G_P, sa, t, p)
}

/// Dynamic enthalpy [J/kg]: enthalpy minus `cp0 · CT`.
pub fn dynamic_enthalpy_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let ct = ct_from_t(sa, t, p);
    enthalpy_t_exact(sa, t, p) - CP0 * ct
}

/// Isobaric heat capacity [J/(kg·K)]: `cp = -(T0 + t) g_TT`.
pub fn cp_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    -(T0 + t) * gibbs(Derivative::G_TT, sa, t, p)
}

/// Isochoric heat capacity [J/(kg·K)]: `cv = -(T0 + t)(g_TT - g_TP² / g_PP)`.
pub fn isochoric_heat_cap_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let g_tt = gibbs(Derivative::G_TT, sa, t, p);
    let g_tp = gibbs(Derivative::G_TP, sa, t, p);
    let g_pp = gibbs(Derivative::G_PP, sa, t, p);
    -(T0 + t) * (g_tt - g_tp * g_tp / g_pp)
}

/// Adiabatic lapse rate [K/Pa]: `Γ = -g_TP / g_TT`.
pub fn adiabatic_lapse_rate_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    -gibbs(Derivative::G_TP, sa, t, p) / gibbs(Derivative::G_TT, sa, t, p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn enthalpy_and_internal_energy_differ_by_pv() {
        let (sa, t, p) = (35.0, 12.0, 750.0);
        let pv = (DB2PA * p + P0) * gibbs(Derivative::G_P, sa, t, p);
        assert_relative_eq!(
            enthalpy_t_exact(sa, t, p) - internal_energy_t_exact(sa, t, p),
            pv,
            max_relative = 1e-9
        );
    }

    #[test]
    fn heat_capacity_ratio_exceeds_one() {
        let (sa, t, p) = (35.0, 25.0, 0.0);
        assert!(cp_t_exact(sa, t, p) > isochoric_heat_cap_t_exact(sa, t, p));
    }

    #[test]
    fn dynamic_enthalpy_vanishes_at_surface() {
        // At p = 0 enthalpy equals potential enthalpy = cp0 * CT.
        let h = dynamic_enthalpy_t_exact(35.0, 10.0, 0.0);
        assert!(h.abs() < 1e-8, "h = {h}");
    }

    #[test]
    fn lapse_rate_changes_sign_with_expansion() {
        // Fresh water below ~4 °C contracts on heating.
        assert!(adiabatic_lapse_rate_t_exact(0.0, 1.0, 0.0) < 0.0);
        assert!(adiabatic_lapse_rate_t_exact(35.0, 10.0, 0.0) > 0.0);
    }
}
