#![allow(clippy::inconsistent_digit_grouping, clippy::excessive_precision)]

use crate::constants::{CP0, M_S, SSO, T0, UPS};
use crate::gibbs::{Derivative, gibbs};
use crate::solver::{Iterate, modified_newton};
use gsw as gsw_teos10;

/// Rounds of the entropy-matching iteration in [`pt_from_t`].
const PT_FROM_T_STEPS: usize = 2;
/// Rounds of the potential-enthalpy-matching iteration in [`pt_from_ct`].
const PT_FROM_CT_STEPS: usize = 3;

/// Absolute/Reference Salinity from Practical Salinity.
/// Note: This returns TEOS-10 Reference Salinity (SR) from SP and is used
/// as an approximation for Absolute Salinity (SA). For standard seawater
/// composition SR ≈ SA; use location-based SA conversions if available.
pub fn sa_from_sp(sp: f64) -> f64 {
    gsw_teos10::conversions::sr_from_sp(sp)
}

/// Potential temperature of seawater referenced to `p_ref`.
///
/// # Arguments
/// * `sa` - Absolute Salinity [g/kg]
/// * `t` - In-situ temperature [°C]
/// * `p_dbar` - Sea pressure [dbar]
/// * `p_ref` - Reference sea pressure [dbar]
///
/// # Returns
/// * Potential temperature [°C]
///
/// Solves `entropy(SA, pt, p_ref) = entropy(SA, t, p)` with two rounds of the
/// modified Newton-Raphson scheme, starting from a polynomial fit of `pt`.
pub fn pt_from_t(sa: f64, t: f64, p_dbar: f64, p_ref: f64) -> f64 {
    let s1 = sa / UPS;
    let p_sum = p_dbar + p_ref;
    let pt = t + (p_dbar - p_ref)
        * (8.654_839_133_954_42e-6
            - s1 * 1.416_362_997_448_81e-6
            - p_sum * 7.382_864_671_357_37e-9
            + t * (-8.382_413_570_396_98e-6
                + s1 * 2.839_333_685_855_34e-8
                + t * 1.778_039_652_186_56e-8
                + p_sum * 1.711_556_192_082_33e-10));

    let dentropy_dt = CP0 / ((T0 + pt) * (1.0 - 0.05 * (1.0 - sa / SSO)));
    let true_entropy = -gibbs(Derivative::G_T, sa, t, p_dbar);

    modified_newton(
        Iterate::new(pt, dentropy_dt),
        PT_FROM_T_STEPS,
        |pt| -gibbs(Derivative::G_T, sa, pt, p_ref) - true_entropy,
        |pt| -gibbs(Derivative::G_TT, sa, pt, p_ref),
    )
    .value
}

/// Potential temperature referenced to the sea surface (0 dbar).
pub fn pt0_from_t(sa: f64, t: f64, p_dbar: f64) -> f64 {
    pt_from_t(sa, t, p_dbar, 0.0)
}

/// Conservative Temperature from potential temperature: potential enthalpy
/// divided by `cp0`.
pub fn ct_from_pt(sa: f64, pt: f64) -> f64 {
    potential_enthalpy(sa, pt) / CP0
}

/// Computes Conservative Temperature (CT) from in-situ temperature `t` and Absolute Salinity `sa`.
///
/// # Arguments
/// * `sa` - Absolute Salinity [g/kg]
/// * `temp` - In-situ temperature [°C]
/// * `p_dbar` - Pressure [dbar]
///
/// # Returns
/// * Conservative Temperature [°C]
pub fn ct_from_t(sa: f64, temp: f64, p_dbar: f64) -> f64 {
    let pt0 = pt0_from_t(sa, temp, p_dbar);
    ct_from_pt(sa, pt0)
}

/// Potential temperature from Conservative Temperature.
///
/// Inverts [`ct_from_pt`] starting from `pt = CT`; the slope is
/// `dCT/dpt = -(T0 + pt) g_TT(SA, pt, 0) / cp0`.
pub fn pt_from_ct(sa: f64, ct: f64) -> f64 {
    modified_newton(
        Iterate::new(ct, 1.0),
        PT_FROM_CT_STEPS,
        |pt| ct_from_pt(sa, pt) - ct,
        |pt| -(T0 + pt) * gibbs(Derivative::G_TT, sa, pt, 0.0) / CP0,
    )
    .value
}

/// Molality of seawater [mol/kg]. Negative salinities give NaN.
pub fn molality_from_sa(sa: f64) -> f64 {
    if sa < 0.0 {
        return f64::NAN;
    }
    sa / (M_S * (1000.0 - sa))
}

fn potential_enthalpy(sa: f64, pt: f64) -> f64 {
    gibbs(Derivative::G, sa, pt, 0.0) - (T0 + pt) * gibbs(Derivative::G_T, sa, pt, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pt0_iteration_converges_reasonably() {
        let sa = 35.2;
        let t = 12.0;
        let p = 500.0;
        let pt0 = pt0_from_t(sa, t, p);
        assert!(pt0 < t);
        assert!((t - pt0) < 3.0);
    }

    #[test]
    fn pt_is_identity_at_reference_pressure() {
        let pt = pt_from_t(35.0, 7.5, 1500.0, 1500.0);
        assert_relative_eq!(pt, 7.5, max_relative = 1e-13);
    }

    #[test]
    fn pt_from_t_inverts_itself() {
        let (sa, t, p) = (42.0, -2.0, 8000.0);
        let pt = pt0_from_t(sa, t, p);
        let back = pt_from_t(sa, pt, 0.0, p);
        assert!((back - t).abs() < 1e-12, "{back} vs {t}");
    }

    #[test]
    fn ct_matches_reference_values() {
        let sa = [34.7118, 34.8915, 35.0256, 34.8472, 34.7366, 34.7324];
        let t = [28.7856, 28.4329, 22.8103, 10.2600, 6.8863, 4.4036];
        let p = [10.0, 50.0, 125.0, 250.0, 600.0, 1000.0];
        let expected = [
            28.809_919_826_700_28,
            28.439_227_816_091_14,
            22.786_176_893_078_5,
            10.226_189_266_620_78,
            6.827_213_633_479_988,
            4.323_575_748_610_455,
        ];
        for i in 0..6 {
            assert_relative_eq!(ct_from_t(sa[i], t[i], p[i]), expected[i], max_relative = 1e-10);
        }
    }

    #[test]
    fn pt_from_ct_inverts_ct_from_pt() {
        for sa in [0.0, 20.0, 35.0, 42.0, 120.0] {
            for pt in [-2.0, 0.0, 10.0, 25.0, 40.0] {
                let back = pt_from_ct(sa, ct_from_pt(sa, pt));
                assert!((back - pt).abs() < 1e-12, "sa={sa} pt={pt} back={back}");
            }
        }
    }

    #[test]
    fn molality_of_standard_seawater() {
        let m = molality_from_sa(SSO);
        assert_relative_eq!(m, 1.160_581_330_474_6, max_relative = 1e-12);
        assert!(molality_from_sa(-1.0).is_nan());
        assert_eq!(molality_from_sa(0.0), 0.0);
    }

    #[test]
    fn reference_salinity_from_practical_salinity() {
        assert_relative_eq!(sa_from_sp(35.0), SSO, max_relative = 1e-9);
    }
}
