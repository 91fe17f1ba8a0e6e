//! Scalar thermodynamic properties of seawater in terms of `(SA, t, p)`.
//!
//! Every function here is a fixed algebraic combination of Gibbs function
//! derivatives (see [`crate::gibbs`]). They never fail: out-of-range input
//! produces NaN or inf through the arithmetic, and NaN input yields NaN.
//! The array versions with mask handling live in [`crate::arrays`].
//!
//! Units: `sa` in g/kg, `t` in °C (ITS-90), `p` in dbar (sea pressure).
//!
//! # Examples
//! ```rust
//! use seawater_rs::properties::{rho_t_exact, sa_from_rho_t_exact};
//!
//! let rho = rho_t_exact(34.7118, 28.7856, 10.0);
//! assert!((rho - 1021.840_173_19).abs() < 1e-6);
//!
//! let sa = sa_from_rho_t_exact(rho, 28.7856, 10.0).unwrap();
//! assert!((sa - 34.7118).abs() < 1e-10);
//! ```

pub mod chemical;
pub mod energy;
pub mod inversion;
pub mod volume;

pub use chemical::{
    chem_potential_relative_t_exact, chem_potential_salt_t_exact, chem_potential_water_t_exact,
    osmotic_coefficient_t_exact, pure_water_chem_potential, salinity_correction,
};
pub use energy::{
    adiabatic_lapse_rate_t_exact, cp_t_exact, dynamic_enthalpy_t_exact, enthalpy_t_exact,
    entropy_t_exact, helmholtz_energy_t_exact, internal_energy_t_exact,
    isochoric_heat_cap_t_exact,
};
pub use inversion::{osmotic_pressure_t_exact, sa_from_rho_t_exact, t_maxdensity_exact};
pub use volume::{
    alpha_wrt_ct_t_exact, alpha_wrt_pt_t_exact, alpha_wrt_t_exact, beta_const_ct_t_exact,
    beta_const_pt_t_exact, beta_const_t_exact, kappa_const_t_exact, kappa_t_exact,
    pot_rho_t_exact, rho_t_exact, sound_speed_t_exact, specvol_anom_t_exact, specvol_t_exact,
};
