use serde::Serialize;

use crate::adapters::teos10::sa_from_sp;
use crate::arrays;
use crate::error::AppError;
use crate::masked::{Masked, map_n};
use crate::models::{Assumptions, Inputs, Property};

/// Input series resolved into masked arrays.
///
/// `sa` is taken from the `sa` input or derived from `sp`; absent inputs stay
/// `None` until a property asks for them.
#[derive(Clone, Debug)]
pub struct State {
    pub sa: Option<Masked>,
    pub t: Option<Masked>,
    pub p: Option<Masked>,
    pub rho: Option<Masked>,
}

impl State {
    pub fn from_inputs(inputs: &Inputs) -> Result<Self, AppError> {
        let sa = match (&inputs.sa, &inputs.sp) {
            (Some(_), Some(_)) => {
                return Err(AppError::Other(
                    "give salinity as either 'sa' or 'sp', not both".to_string(),
                ));
            }
            (Some(sa), None) => Some(Masked::from(sa)),
            (None, Some(sp)) => {
                let sp = Masked::from(sp);
                Some(map_n([&sp], |[sp]| Some(sa_from_sp(sp)))?)
            }
            (None, None) => None,
        };
        Ok(Self {
            sa,
            t: inputs.t.as_ref().map(Masked::from),
            p: inputs.p.as_ref().map(Masked::from),
            rho: inputs.rho.as_ref().map(Masked::from),
        })
    }

    fn require<'a>(
        series: &'a Option<Masked>,
        property: Property,
        name: &'static str,
    ) -> Result<&'a Masked, AppError> {
        series.as_ref().ok_or(AppError::MissingSeries {
            property: property.name(),
            series: name,
        })
    }
}

/// One evaluated property; `values` are row-major with `None` where masked.
#[derive(Serialize, Debug, Clone)]
pub struct PropertyOutput {
    pub property: Property,
    pub unit: &'static str,
    pub shape: Vec<usize>,
    pub values: Vec<Option<f64>>,
}

impl PropertyOutput {
    fn new(property: Property, result: &Masked) -> Self {
        Self {
            property,
            unit: property.unit(),
            shape: result.shape().to_vec(),
            values: result.to_options(),
        }
    }
}

/// Everything the CLI reports for one request.
#[derive(Serialize, Debug, Clone)]
pub struct CalculationSummary {
    pub assumptions: Assumptions,
    pub results: Vec<PropertyOutput>,
}

/// Evaluates one property over the resolved state.
pub fn evaluate(property: Property, state: &State, ass: &Assumptions) -> Result<Masked, AppError> {
    let sa = move || State::require(&state.sa, property, "sa");
    let t = move || State::require(&state.t, property, "t");
    let p = move || State::require(&state.p, property, "p");

    match property {
        Property::Rho => arrays::rho_t_exact(sa()?, t()?, p()?),
        Property::Specvol => arrays::specvol_t_exact(sa()?, t()?, p()?),
        Property::PotRho => {
            arrays::pot_rho_t_exact(sa()?, t()?, p()?, &Masked::scalar(ass.p_ref))
        }
        Property::SpecvolAnom => arrays::specvol_anom_t_exact(sa()?, t()?, p()?),
        Property::AlphaWrtT => arrays::alpha_wrt_t_exact(sa()?, t()?, p()?),
        Property::AlphaWrtCt => arrays::alpha_wrt_ct_t_exact(sa()?, t()?, p()?),
        Property::AlphaWrtPt => arrays::alpha_wrt_pt_t_exact(sa()?, t()?, p()?),
        Property::BetaConstT => arrays::beta_const_t_exact(sa()?, t()?, p()?),
        Property::BetaConstPt => arrays::beta_const_pt_t_exact(sa()?, t()?, p()?),
        Property::BetaConstCt => arrays::beta_const_ct_t_exact(sa()?, t()?, p()?),
        Property::Kappa => arrays::kappa_t_exact(sa()?, t()?, p()?),
        Property::KappaConst => arrays::kappa_const_t_exact(sa()?, t()?, p()?),
        Property::SoundSpeed => arrays::sound_speed_t_exact(sa()?, t()?, p()?),
        Property::Entropy => arrays::entropy_t_exact(sa()?, t()?, p()?),
        Property::Enthalpy => arrays::enthalpy_t_exact(sa()?, t()?, p()?),
        Property::InternalEnergy => arrays::internal_energy_t_exact(sa()?, t()?, p()?),
        Property::HelmholtzEnergy => arrays::helmholtz_energy_t_exact(sa()?, t()?, p()?),
        Property::DynamicEnthalpy => arrays::dynamic_enthalpy_t_exact(sa()?, t()?, p()?),
        Property::Cp => arrays::cp_t_exact(sa()?, t()?, p()?),
        Property::IsochoricHeatCap => arrays::isochoric_heat_cap_t_exact(sa()?, t()?, p()?),
        Property::AdiabaticLapseRate => arrays::adiabatic_lapse_rate_t_exact(sa()?, t()?, p()?),
        Property::ChemPotentialRelative => {
            arrays::chem_potential_relative_t_exact(sa()?, t()?, p()?)
        }
        Property::ChemPotentialWater => arrays::chem_potential_water_t_exact(sa()?, t()?, p()?),
        Property::ChemPotentialSalt => arrays::chem_potential_salt_t_exact(sa()?, t()?, p()?),
        Property::OsmoticCoefficient => arrays::osmotic_coefficient_t_exact(sa()?, t()?, p()?),
        Property::SaFromRho => {
            let rho = State::require(&state.rho, property, "rho")?;
            arrays::sa_from_rho_t_exact(rho, t()?, p()?)
        }
        Property::TMaxdensity => arrays::t_maxdensity_exact(sa()?, p()?),
        Property::OsmoticPressure => arrays::osmotic_pressure_t_exact(sa()?, t()?, p()?),
    }
}

/// Resolves the inputs once and evaluates every requested property in order.
pub fn compute_summary(
    inputs: &Inputs,
    ass: &Assumptions,
    properties: &[Property],
) -> Result<CalculationSummary, AppError> {
    let state = State::from_inputs(inputs)?;
    let mut results = Vec::with_capacity(properties.len());
    for &property in properties {
        let result = evaluate(property, &state, ass)?;
        tracing::debug!(
            property = property.name(),
            shape = ?result.shape(),
            masked = result.masked_count(),
            "evaluated property"
        );
        results.push(PropertyOutput::new(property, &result));
    }
    Ok(CalculationSummary {
        assumptions: ass.clone(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Series;
    use approx::assert_relative_eq;

    fn sample() -> Inputs {
        Inputs {
            sa: Some(Series::Values(vec![Some(34.7118), None])),
            t: Some(Series::Values(vec![Some(28.7856), Some(28.4329)])),
            p: Some(Series::Scalar(Some(10.0))),
            ..Inputs::default()
        }
    }

    #[test]
    fn summary_keeps_requested_order_and_masks() {
        let out = compute_summary(
            &sample(),
            &Assumptions::default(),
            &[Property::SoundSpeed, Property::Rho],
        )
        .unwrap();
        assert_eq!(out.results.len(), 2);
        assert_eq!(out.results[0].property, Property::SoundSpeed);
        assert_eq!(out.results[1].unit, "kg/m^3");
        assert_eq!(out.results[1].shape, vec![2]);
        assert_relative_eq!(out.results[1].values[0].unwrap(), 1021.840_173_19, max_relative = 1e-10);
        assert_eq!(out.results[1].values[1], None);
    }

    #[test]
    fn practical_salinity_is_converted() {
        let inputs = Inputs {
            sp: Some(Series::Scalar(Some(35.0))),
            t: Some(Series::Scalar(Some(10.0))),
            p: Some(Series::Scalar(Some(0.0))),
            ..Inputs::default()
        };
        let state = State::from_inputs(&inputs).unwrap();
        let sa = state.sa.unwrap().get(&[]).unwrap();
        assert_relative_eq!(sa, 35.165_04, max_relative = 1e-6);
    }

    #[test]
    fn both_salinities_are_rejected() {
        let inputs = Inputs {
            sa: Some(Series::Scalar(Some(35.0))),
            sp: Some(Series::Scalar(Some(35.0))),
            ..Inputs::default()
        };
        assert!(matches!(State::from_inputs(&inputs), Err(AppError::Other(_))));
    }

    #[test]
    fn missing_density_names_the_series() {
        let err = compute_summary(&sample(), &Assumptions::default(), &[Property::SaFromRho])
            .unwrap_err();
        match err {
            AppError::MissingSeries { property, series } => {
                assert_eq!(property, "sa_from_rho");
                assert_eq!(series, "rho");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn potential_density_uses_reference_pressure() {
        let state = State::from_inputs(&sample()).unwrap();
        let surface = evaluate(Property::PotRho, &state, &Assumptions { p_ref: 0.0 }).unwrap();
        let deep = evaluate(Property::PotRho, &state, &Assumptions { p_ref: 1000.0 }).unwrap();
        assert!(deep.get(&[0]).unwrap() > surface.get(&[0]).unwrap());
    }

    #[test]
    fn temperature_of_maximum_density_ignores_t() {
        let inputs = Inputs {
            sa: Some(Series::Scalar(Some(0.0))),
            p: Some(Series::Scalar(Some(0.0))),
            ..Inputs::default()
        };
        let state = State::from_inputs(&inputs).unwrap();
        let out = evaluate(Property::TMaxdensity, &state, &Assumptions::default()).unwrap();
        assert_relative_eq!(out.get(&[]).unwrap(), 3.978_889_580_772, max_relative = 1e-9);
    }
}
