//! TEOS-10 thermodynamic properties of seawater computed from the Gibbs
//! function of Absolute Salinity, in-situ temperature and sea pressure.
//!
//! * [`gibbs`]: the Gibbs function and its partial derivatives.
//! * [`properties`]: scalar property functions and inversions.
//! * [`arrays`]: the same functions over broadcast, masked arrays.
//! * [`calculator`]: property dispatch by name, used by the CLI.

pub mod adapters;
pub mod arrays;
pub mod calculator;
pub mod constants;
pub mod error;
pub mod gibbs;
pub mod masked;
pub mod models;
pub mod properties;
pub mod solver;

pub use crate::adapters::teos10::{ct_from_t, pt_from_ct, pt_from_t, pt0_from_t, sa_from_sp};
pub use crate::calculator::{CalculationSummary, PropertyOutput, compute_summary, evaluate};
pub use crate::error::AppError;
pub use crate::gibbs::{Derivative, Order, gibbs};
pub use crate::masked::Masked;
pub use crate::models::{Assumptions, Inputs, Property, Series};
