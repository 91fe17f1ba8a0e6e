use serde::{Deserialize, Deserializer, Serialize};

use crate::masked::Masked;

/// One input series: a number, `null` (a single masked value) or an array of
/// numbers and nulls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Series {
    Scalar(Option<f64>),
    Values(Vec<Option<f64>>),
}

impl From<&Series> for Masked {
    fn from(series: &Series) -> Self {
        match series {
            Series::Scalar(v) => Masked::scalar(v.unwrap_or(f64::NAN)),
            Series::Values(values) => Masked::from_options(values),
        }
    }
}

// A key that is present keeps `null` as a masked scalar instead of collapsing
// to an absent series.
fn present<'de, D>(deserializer: D) -> Result<Option<Series>, D::Error>
where
    D: Deserializer<'de>,
{
    Series::deserialize(deserializer).map(Some)
}

/// Measured state of the samples.
///
/// Salinity comes either as Absolute Salinity `sa` [g/kg] or as Practical
/// Salinity `sp`, which is converted to Reference Salinity. `rho` [kg/m³] is
/// only needed for `sa_from_rho`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Inputs {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub sa: Option<Series>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub sp: Option<Series>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub t: Option<Series>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub p: Option<Series>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub rho: Option<Series>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Reference pressure [dbar] for potential density.
    pub p_ref: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self { p_ref: 0.0 }
    }
}

/// Every property the calculator can evaluate, named after its function in
/// [`crate::properties`] without the `_t_exact` suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", value(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Rho,
    Specvol,
    PotRho,
    SpecvolAnom,
    AlphaWrtT,
    AlphaWrtCt,
    AlphaWrtPt,
    BetaConstT,
    BetaConstPt,
    BetaConstCt,
    Kappa,
    KappaConst,
    SoundSpeed,
    Entropy,
    Enthalpy,
    InternalEnergy,
    HelmholtzEnergy,
    DynamicEnthalpy,
    Cp,
    IsochoricHeatCap,
    AdiabaticLapseRate,
    ChemPotentialRelative,
    ChemPotentialWater,
    ChemPotentialSalt,
    OsmoticCoefficient,
    /// Inverse: Absolute Salinity from `rho`, `t`, `p`.
    SaFromRho,
    /// Inverse: temperature of maximum density from `sa`, `p`.
    TMaxdensity,
    /// Inverse: osmotic pressure with `p` read as the pure-water pressure.
    OsmoticPressure,
}

impl Property {
    /// Evaluated when the caller names no property.
    pub const DEFAULTS: [Property; 3] = [Property::Rho, Property::SoundSpeed, Property::Entropy];

    pub fn name(self) -> &'static str {
        match self {
            Property::Rho => "rho",
            Property::Specvol => "specvol",
            Property::PotRho => "pot_rho",
            Property::SpecvolAnom => "specvol_anom",
            Property::AlphaWrtT => "alpha_wrt_t",
            Property::AlphaWrtCt => "alpha_wrt_ct",
            Property::AlphaWrtPt => "alpha_wrt_pt",
            Property::BetaConstT => "beta_const_t",
            Property::BetaConstPt => "beta_const_pt",
            Property::BetaConstCt => "beta_const_ct",
            Property::Kappa => "kappa",
            Property::KappaConst => "kappa_const",
            Property::SoundSpeed => "sound_speed",
            Property::Entropy => "entropy",
            Property::Enthalpy => "enthalpy",
            Property::InternalEnergy => "internal_energy",
            Property::HelmholtzEnergy => "helmholtz_energy",
            Property::DynamicEnthalpy => "dynamic_enthalpy",
            Property::Cp => "cp",
            Property::IsochoricHeatCap => "isochoric_heat_cap",
            Property::AdiabaticLapseRate => "adiabatic_lapse_rate",
            Property::ChemPotentialRelative => "chem_potential_relative",
            Property::ChemPotentialWater => "chem_potential_water",
            Property::ChemPotentialSalt => "chem_potential_salt",
            Property::OsmoticCoefficient => "osmotic_coefficient",
            Property::SaFromRho => "sa_from_rho",
            Property::TMaxdensity => "t_maxdensity",
            Property::OsmoticPressure => "osmotic_pressure",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Property::Rho | Property::PotRho => "kg/m^3",
            Property::Specvol | Property::SpecvolAnom => "m^3/kg",
            Property::AlphaWrtT | Property::AlphaWrtCt | Property::AlphaWrtPt => "1/K",
            Property::BetaConstT | Property::BetaConstPt | Property::BetaConstCt => "kg/g",
            Property::Kappa | Property::KappaConst => "1/Pa",
            Property::SoundSpeed => "m/s",
            Property::Entropy | Property::Cp | Property::IsochoricHeatCap => "J/(kg K)",
            Property::Enthalpy
            | Property::InternalEnergy
            | Property::HelmholtzEnergy
            | Property::DynamicEnthalpy
            | Property::ChemPotentialWater => "J/kg",
            Property::AdiabaticLapseRate => "K/Pa",
            Property::ChemPotentialRelative | Property::ChemPotentialSalt => "J/g",
            Property::OsmoticCoefficient => "1",
            Property::SaFromRho => "g/kg",
            Property::TMaxdensity => "degC",
            Property::OsmoticPressure => "dbar",
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
