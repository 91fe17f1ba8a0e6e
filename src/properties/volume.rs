//! Density, specific volume, expansion/contraction coefficients,
//! compressibilities and sound speed.
//!
//! Each function evaluates the Gibbs derivatives it needs at the same
//! `(SA, t, p)` and combines them in closed form. Inputs: `sa` [g/kg],
//! `t` [°C], `p` [dbar].

use crate::adapters::teos10::{pt_from_ct, pt_from_t, pt0_from_t};
use crate::constants::{CP0, SSO, T0};
use crate::gibbs::{Derivative, gibbs};

/// In-situ density [kg/m³]: `ρ = 1 / g_P`.
pub fn rho_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    1.0 / gibbs(Derivative::G_P, sa, t, p)
}

/// Specific volume [m³/kg]: `v = g_P`.
pub fn specvol_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    gibbs(Derivative::G_P, sa, t, p)
}

/// Potential density [kg/m³] referenced to `p_ref` [dbar].
///
/// The in-situ density of the parcel after it has been moved adiabatically
/// to `p_ref`: `ρ(SA, θ(SA, t, p, p_ref), p_ref)`.
pub fn pot_rho_t_exact(sa: f64, t: f64, p: f64, p_ref: f64) -> f64 {
    let pt = pt_from_t(sa, t, p, p_ref);
    rho_t_exact(sa, pt, p_ref)
}

/// Specific volume anomaly [m³/kg].
///
/// Specific volume minus that of Standard Ocean water (`SA = SSO`,
/// `CT = 0 °C`) at the same pressure.
pub fn specvol_anom_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let pt_zero = pt_from_ct(SSO, 0.0);
    let t_zero = pt_from_t(SSO, pt_zero, 0.0, p);
    gibbs(Derivative::G_P, sa, t, p) - gibbs(Derivative::G_P, SSO, t_zero, p)
}

/// Thermal expansion coefficient with respect to in-situ temperature [1/K]:
/// `α^t = g_TP / g_P`.
pub fn alpha_wrt_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    gibbs(Derivative::G_TP, sa, t, p) / gibbs(Derivative::G_P, sa, t, p)
}

/// Thermal expansion coefficient with respect to Conservative Temperature [1/K].
///
/// `α^Θ = α^t · (∂t/∂Θ)_{SA,p} = -cp0 / ((T0 + θ₀) g_TT) · g_TP / g_P`, with
/// `θ₀` the potential temperature at the sea surface.
pub fn alpha_wrt_ct_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let pt0 = pt0_from_t(sa, t, p);
    let factor = -CP0 / ((T0 + pt0) * gibbs(Derivative::G_TT, sa, t, p));
    factor * alpha_wrt_t_exact(sa, t, p)
}

/// Thermal expansion coefficient with respect to potential temperature [1/K].
///
/// `α^θ = g_TT(SA, θ₀, 0) / g_TT(SA, t, p) · g_TP / g_P`.
pub fn alpha_wrt_pt_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let pt0 = pt0_from_t(sa, t, p);
    let factor = gibbs(Derivative::G_TT, sa, pt0, 0.0) / gibbs(Derivative::G_TT, sa, t, p);
    factor * alpha_wrt_t_exact(sa, t, p)
}

/// Saline contraction coefficient at constant in-situ temperature [kg/g]:
/// `β^t = -g_SP / g_P`.
pub fn beta_const_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    -gibbs(Derivative::G_SA_P, sa, t, p) / gibbs(Derivative::G_P, sa, t, p)
}

/// Saline contraction coefficient at constant potential temperature [kg/g].
///
/// `β^θ = g_TP (g_ST - g_ST(SA, θ₀, 0)) / (g_P g_TT) - g_SP / g_P`.
pub fn beta_const_pt_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let pt0 = pt0_from_t(sa, t, p);
    let factora = gibbs(Derivative::G_SA_T, sa, t, p) - gibbs(Derivative::G_SA_T, sa, pt0, 0.0);
    saline_contraction(sa, t, p, factora)
}

/// Saline contraction coefficient at constant Conservative Temperature [kg/g].
///
/// `β^Θ = g_TP (g_ST - g_S(SA, θ₀, 0) / (T0 + θ₀)) / (g_P g_TT) - g_SP / g_P`.
pub fn beta_const_ct_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let pt0 = pt0_from_t(sa, t, p);
    let factora =
        gibbs(Derivative::G_SA_T, sa, t, p) - gibbs(Derivative::G_SA, sa, pt0, 0.0) / (T0 + pt0);
    saline_contraction(sa, t, p, factora)
}

/// Shared tail of the `β^θ`/`β^Θ` formulas.
fn saline_contraction(sa: f64, t: f64, p: f64, factora: f64) -> f64 {
    let g_p = gibbs(Derivative::G_P, sa, t, p);
    let factor = factora / (g_p * gibbs(Derivative::G_TT, sa, t, p));
    gibbs(Derivative::G_TP, sa, t, p) * factor - gibbs(Derivative::G_SA_P, sa, t, p) / g_p
}

/// Isentropic compressibility [1/Pa]: `κ = (g_TP² - g_TT g_PP) / (g_P g_TT)`.
pub fn kappa_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let g_tt = gibbs(Derivative::G_TT, sa, t, p);
    let g_tp = gibbs(Derivative::G_TP, sa, t, p);
    let g_pp = gibbs(Derivative::G_PP, sa, t, p);
    let g_p = gibbs(Derivative::G_P, sa, t, p);
    (g_tp * g_tp - g_tt * g_pp) / (g_p * g_tt)
}

/// Isothermal compressibility [1/Pa]: `κ^t = -g_PP / g_P`.
pub fn kappa_const_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    -gibbs(Derivative::G_PP, sa, t, p) / gibbs(Derivative::G_P, sa, t, p)
}

/// Speed of sound [m/s]: `c = g_P sqrt(g_TT / (g_TP² - g_TT g_PP))`.
pub fn sound_speed_t_exact(sa: f64, t: f64, p: f64) -> f64 {
    let g_tt = gibbs(Derivative::G_TT, sa, t, p);
    let g_tp = gibbs(Derivative::G_TP, sa, t, p);
    let g_p = gibbs(Derivative::G_P, sa, t, p);
    let g_pp = gibbs(Derivative::G_PP, sa, t, p);
    g_p * (g_tt / (g_tp * g_tp - g_tt * g_pp)).sqrt()
}
