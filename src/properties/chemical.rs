//! Chemical potentials and the osmotic coefficient.
//!
//! The chemical potential of water in seawater is `μ_W = g - SA·g_SA`. It is
//! split into the pure-water potential `μ_W⁰(t, p) = g_W(t, p)` and a salinity
//! correction carried by the saline part of the Gibbs function alone, so the
//! osmotic routines can reuse either piece.

use crate::adapters::teos10::molality_from_sa;
use crate::constants::{R, T0};
use crate::gibbs::{self, Derivative};

/// Chemical potential of pure water [J/kg] at `t` [°C], `p` [dbar].
pub fn pure_water_chem_potential(t: f64, p: f64) -> f64 {
    gibbs::pure_water(Derivative::G, t, p)
}

/// Salinity correction `g_S - SA·∂g_S/∂SA` [J/kg] to the chemical potential
/// of water. Zero for pure water and for negative salinities.
pub fn salinity_correction(sa: f64, t: f64, p: f64) -> f64 {
    let sa = gibbs::clamp_salinity(sa);
    gibbs::saline(Derivative::G, sa, t, p) - sa * gibbs::saline(Derivative::G_SA, sa, t, p)
}

/// Relative chemical potential [J/g]: `μ = g_SA`.
///
/// Finite at `SA = 0`, where the logarithmic term dominates.
pub fn chem_potential_relative_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    gibbs::gibbs(Derivative::G_SA, sa, t, p)
}

/// Chemical potential of water in seawater [J/kg].
pub fn chem_potential_water_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    pure_water_chem_potential(t, p) + salinity_correction(sa, t, p)
}

/// Chemical potential of salt in seawater [J/g]: relative plus water potential.
pub fn chem_potential_salt_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    chem_potential_relative_t_exact(sa, t, p) + chem_potential_water_t_exact(sa, t, p)
}

/// Osmotic coefficient of seawater [unitless].
///
/// `φ = (μ_W⁰ - μ_W) / (m_SW R (T0 + t))`, with `m_SW` the molality of
/// seawater. Undefined (NaN) for pure water.
pub fn osmotic_coefficient_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let part = molality_from_sa(sa) * R * (T0 + t);
    (pure_water_chem_potential(t, p) - chem_potential_water_t_exact(sa, t, p)) / part
}
