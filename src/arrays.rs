//! Array versions of every property in [`crate::properties`].
//!
//! Each function takes [`Masked`] arguments, broadcasts them to a common
//! shape and evaluates the scalar routine element-wise. Masked or NaN input
//! elements give masked output elements; so does an out-of-range
//! salinity estimate in [`sa_from_rho_t_exact`].
//!
//! # Examples
//! ```rust
//! use seawater_rs::arrays;
//! use seawater_rs::masked::Masked;
//!
//! let sa = Masked::from_options(&[Some(34.7118), None, Some(35.0256)]);
//! let t = Masked::from(vec![28.7856, 28.4329, 22.8103]);
//! let p = Masked::scalar(10.0);
//!
//! let rho = arrays::rho_t_exact(&sa, &t, &p).unwrap();
//! let rho = rho.to_options();
//! assert!(rho[1].is_none());
//! assert!((rho[0].unwrap() - 1021.840_173).abs() < 1e-6);
//! ```

use crate::error::AppError;
use crate::masked::{Masked, map_n};
use crate::properties;

macro_rules! elementwise {
    ($($(#[$meta:meta])* $name:ident($($arg:ident),+);)+) => {
        $(
            $(#[$meta])*
            pub fn $name($($arg: &Masked),+) -> Result<Masked, AppError> {
                map_n([$($arg),+], |[$($arg),+]| Some(properties::$name($($arg),+)))
            }
        )+
    };
}

elementwise! {
    /// In-situ density [kg/m³].
    rho_t_exact(sa, t, p);
    /// Specific volume [m³/kg].
    specvol_t_exact(sa, t, p);
    /// Potential density [kg/m³] referenced to `p_ref` [dbar].
    pot_rho_t_exact(sa, t, p, p_ref);
    /// Specific volume anomaly [m³/kg].
    specvol_anom_t_exact(sa, t, p);
    /// Thermal expansion coefficient with respect to in-situ temperature [1/K].
    alpha_wrt_t_exact(sa, t, p);
    /// Thermal expansion coefficient with respect to Conservative Temperature [1/K].
    alpha_wrt_ct_t_exact(sa, t, p);
    /// Thermal expansion coefficient with respect to potential temperature [1/K].
    alpha_wrt_pt_t_exact(sa, t, p);
    /// Saline contraction coefficient at constant in-situ temperature [kg/g].
    beta_const_t_exact(sa, t, p);
    /// Saline contraction coefficient at constant potential temperature [kg/g].
    beta_const_pt_t_exact(sa, t, p);
    /// Saline contraction coefficient at constant Conservative Temperature [kg/g].
    beta_const_ct_t_exact(sa, t, p);
    /// Isentropic compressibility [1/Pa].
    kappa_t_exact(sa, t, p);
    /// Isothermal compressibility [1/Pa].
    kappa_const_t_exact(sa, t, p);
    /// Sound speed [m/s].
    sound_speed_t_exact(sa, t, p);
    /// Specific entropy [J/(kg·K)].
    entropy_t_exact(sa, t, p);
    /// Specific enthalpy [J/kg].
    enthalpy_t_exact(sa, t, p);
    /// Specific internal energy [J/kg].
    internal_energy_t_exact(sa, t, p);
    /// Specific Helmholtz energy [J/kg].
    helmholtz_energy_t_exact(sa, t, p);
    /// Dynamic enthalpy [J/kg].
    dynamic_enthalpy_t_exact(sa, t, p);
    /// Isobaric heat capacity [J/(kg·K)].
    cp_t_exact(sa, t, p);
    /// Isochoric heat capacity [J/(kg·K)].
    isochoric_heat_cap_t_exact(sa, t, p);
    /// Adiabatic lapse rate [K/Pa].
    adiabatic_lapse_rate_t_exact(sa, t, p);
    /// Relative chemical potential [J/g].
    chem_potential_relative_t_exact(sa, t, p);
    /// Chemical potential of water in seawater [J/kg].
    chem_potential_water_t_exact(sa, t, p);
    /// Chemical potential of salt in seawater [J/g].
    chem_potential_salt_t_exact(sa, t, p);
    /// Osmotic coefficient [unitless].
    osmotic_coefficient_t_exact(sa, t, p);
    /// Temperature of maximum density [°C].
    t_maxdensity_exact(sa, p);
    /// Osmotic pressure [dbar] against pure water at `pw` [dbar].
    osmotic_pressure_t_exact(sa, t, pw);
}

/// Absolute Salinity [g/kg] from density. Elements whose first salinity
/// estimate falls outside `[0, 120]` g/kg come back masked.
pub fn sa_from_rho_t_exact(rho: &Masked, t: &Masked, p: &Masked) -> Result<Masked, AppError> {
    map_n([rho, t, p], |[rho, t, p]| properties::sa_from_rho_t_exact(rho, t, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn array_matches_scalar_elementwise() {
        let sa = Masked::from(vec![34.7118, 34.8915, 35.0256]);
        let t = Masked::from(vec![28.7856, 28.4329, 22.8103]);
        let p = Masked::from(vec![10.0, 50.0, 125.0]);
        let out = cp_t_exact(&sa, &t, &p).unwrap().to_options();
        for (k, value) in out.into_iter().enumerate() {
            let expected = properties::cp_t_exact(sa.data()[[k]], t.data()[[k]], p.data()[[k]]);
            assert_eq!(value, Some(expected));
        }
    }

    #[test]
    fn pressure_profile_broadcasts_over_grid() {
        let sa = Masked::from_array(array![[34.0], [35.0]].into_dyn());
        let t = Masked::scalar(10.0);
        let p = Masked::from(vec![0.0, 1000.0, 2000.0]);
        let out = rho_t_exact(&sa, &t, &p).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
        let shallow = out.get(&[1, 0]).unwrap();
        let deep = out.get(&[1, 2]).unwrap();
        assert!(deep > shallow);
    }

    #[test]
    fn out_of_range_density_is_masked() {
        let rho = Masked::from(vec![1027.0, 900.0]);
        let out = sa_from_rho_t_exact(&rho, &Masked::scalar(10.0), &Masked::scalar(0.0)).unwrap();
        let out = out.to_options();
        assert!(out[0].is_some());
        assert!(out[1].is_none());
    }

    #[test]
    fn two_argument_wrapper_broadcasts() {
        let sa = Masked::from(vec![0.0, 35.0]);
        let out = t_maxdensity_exact(&sa, &Masked::scalar(0.0)).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.masked_count(), 0);
    }
}
