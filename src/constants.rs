//! TEOS-10 constants shared by the Gibbs function, the conversions and the
//! property formulas.
//!
//! Units follow the crate convention: Absolute Salinity in g/kg, temperatures
//! in °C (ITS-90), sea pressure in dbar. Values mirror `GSW_TEOS10_CONSTANTS`.
#![allow(clippy::excessive_precision)]

/// Celsius zero point in Kelvin.
pub const T0: f64 = 273.15;
/// One standard atmosphere in Pa.
pub const P0: f64 = 101_325.0;
/// Conversion factor from dbar to Pa.
pub const DB2PA: f64 = 1.0e4;
/// Standard Ocean Reference Salinity (g/kg).
pub const SSO: f64 = 35.165_04;
/// Unit conversion factor from Practical Salinity to Reference Salinity, g/kg.
pub const UPS: f64 = SSO / 35.0;
/// "Specific heat" used to define Conservative Temperature, J/(kg·K).
pub const CP0: f64 = 3_991.867_957_119_63;
/// Molar gas constant used by TEOS-10, J/(mol·K).
pub const R: f64 = 8.314_472;
/// Mean molar mass of sea salt, kg/mol.
pub const M_S: f64 = 0.031_403_821_8;
/// Salinity scale factor: `x^2 = SFAC * SA`.
pub const SFAC: f64 = 0.024_882_667_558_461_5;

/// Upper end of the salinity interval in which `sa_from_rho_t_exact` accepts estimates.
pub const SA_MAX: f64 = 120.0;
