//! Specific Gibbs energy of seawater and its partial derivatives.
//!
//! The TEOS-10 Gibbs function is the sum of the IAPWS-09 pure-water polynomial
//! and the IAPWS-08 saline polynomial,
//!
//! `g(SA, t, p) = Σ g_0jk y^j z^k + Σ g_ijk x^i y^j z^k + x² ln x (g_100 + g_110 y)`
//!
//! with `x² = sfac·SA`, `y = t/40` and `z = p/10⁴`. Every derivative requested
//! through [`Derivative`] is obtained by differentiating the monomials of the
//! coefficient tables, so all properties of the crate share one evaluator.
//!
//! Units: `sa` in g/kg, `t` in °C, `p` in dbar (sea pressure). Temperature
//! derivatives are per K, pressure derivatives per Pa, salinity derivatives
//! per (g/kg). `gibbs(Derivative::G_P, ..)` is therefore specific volume in m³/kg.
//!
//! # Examples
//! ```rust
//! use seawater_rs::gibbs::{Derivative, gibbs};
//!
//! let v = gibbs(Derivative::G_P, 35.0, 10.0, 100.0);
//! assert!((1.0 / v - 1027.4).abs() < 1.0);
//! ```

mod coefficients;

use crate::constants::SFAC;
use coefficients::{LOG_X, LOG_XY, PURE_WATER, SALINE};

/// d(y)/d(t): `y = t / 40`.
const Y_SCALE: f64 = 0.025;
/// d(z)/d(P) with P in Pa: `z = p_dbar / 1e4 = P / 1e8`.
const Z_SCALE: f64 = 1.0e-8;
/// Salinity floor of the logarithmic term in salinity derivatives.
const SA_LOG_FLOOR: f64 = 1.0e-100;

/// Order of a partial derivative along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    Zero,
    One,
    Two,
}

impl Order {
    pub const fn as_i32(self) -> i32 {
        match self {
            Order::Zero => 0,
            Order::One => 1,
            Order::Two => 2,
        }
    }
}

/// Selector of a mixed partial derivative of `g` with respect to `(SA, t, p)`.
///
/// Property formulas use the named constants rather than building selectors
/// from integers, so an axis can never be transposed at a call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Derivative {
    pub sa: Order,
    pub t: Order,
    pub p: Order,
}

impl Derivative {
    pub const fn new(sa: Order, t: Order, p: Order) -> Self {
        Self { sa, t, p }
    }

    /// `g`
    pub const G: Self = Self::new(Order::Zero, Order::Zero, Order::Zero);
    /// `∂g/∂SA`
    pub const G_SA: Self = Self::new(Order::One, Order::Zero, Order::Zero);
    /// `∂g/∂T`
    pub const G_T: Self = Self::new(Order::Zero, Order::One, Order::Zero);
    /// `∂g/∂P`
    pub const G_P: Self = Self::new(Order::Zero, Order::Zero, Order::One);
    /// `∂²g/∂SA²`
    pub const G_SA_SA: Self = Self::new(Order::Two, Order::Zero, Order::Zero);
    /// `∂²g/∂SA∂T`
    pub const G_SA_T: Self = Self::new(Order::One, Order::One, Order::Zero);
    /// `∂²g/∂SA∂P`
    pub const G_SA_P: Self = Self::new(Order::One, Order::Zero, Order::One);
    /// `∂²g/∂T²`
    pub const G_TT: Self = Self::new(Order::Zero, Order::Two, Order::Zero);
    /// `∂²g/∂T∂P`
    pub const G_TP: Self = Self::new(Order::Zero, Order::One, Order::One);
    /// `∂²g/∂P²`
    pub const G_PP: Self = Self::new(Order::Zero, Order::Zero, Order::Two);
}

/// Partial derivative `d` of the specific Gibbs energy of seawater at `(sa, t, p)`.
///
/// Negative salinities are evaluated as pure water. NaN in any argument yields NaN.
pub fn gibbs(d: Derivative, sa: f64, t: f64, p: f64) -> f64 {
    pure_water(d, t, p) + saline(d, sa, t, p)
}

/// Pure-water part `g_W(t, p)` of the Gibbs function (IAPWS-09).
///
/// Any derivative with respect to salinity is identically zero.
pub fn pure_water(d: Derivative, t: f64, p: f64) -> f64 {
    if d.sa != Order::Zero {
        return 0.0;
    }
    let (nt, np) = (d.t.as_i32(), d.p.as_i32());
    let (y, z) = (Y_SCALE * t, 1.0e-4 * p);

    let sum: f64 = PURE_WATER
        .iter()
        .map(|&(j, k, c)| c * power_derivative(y, j, nt) * power_derivative(z, k, np))
        .sum();
    sum * axis_scale(nt, np)
}

/// Saline part `g_S(SA, t, p)` of the Gibbs function (IAPWS-08).
pub fn saline(d: Derivative, sa: f64, t: f64, p: f64) -> f64 {
    let (ns, nt, np) = (d.sa.as_i32(), d.t.as_i32(), d.p.as_i32());
    let sa = clamp_salinity(sa);
    let x = (SFAC * sa).sqrt();
    let (y, z) = (Y_SCALE * t, 1.0e-4 * p);

    let polynomial: f64 = SALINE
        .iter()
        .map(|&(i, j, k, c)| {
            c * salinity_derivative(x, i, ns)
                * power_derivative(y, j, nt)
                * power_derivative(z, k, np)
        })
        .sum();

    (polynomial + log_term(sa, y, ns, nt, np)) * axis_scale(nt, np)
}

/// Negative salinities become pure water; NaN compares false and survives.
pub(crate) fn clamp_salinity(sa: f64) -> f64 {
    if sa < 0.0 { 0.0 } else { sa }
}

fn axis_scale(nt: i32, np: i32) -> f64 {
    Y_SCALE.powi(nt) * Z_SCALE.powi(np)
}

/// `n (n-1) … (n-order+1)`
fn falling_factorial(n: f64, order: i32) -> f64 {
    (0..order).map(|m| n - f64::from(m)).product()
}

/// `d^order/dv^order v^n`
fn power_derivative(v: f64, n: i32, order: i32) -> f64 {
    if n < order {
        return 0.0;
    }
    falling_factorial(f64::from(n), order) * v.powi(n - order)
}

/// `d^ns/dSA^ns x^i` where `x^i = (SFAC·SA)^(i/2)`.
fn salinity_derivative(x: f64, i: i32, ns: i32) -> f64 {
    let factor = falling_factorial(0.5 * f64::from(i), ns);
    if factor == 0.0 {
        return 0.0;
    }
    SFAC.powi(ns) * factor * x.powi(i - 2 * ns)
}

/// Derivatives of `x² ln x (g_100 + g_110 y)`; only `g_100`/`g_110` terms carry it.
fn log_term(sa: f64, y: f64, ns: i32, nt: i32, np: i32) -> f64 {
    if np > 0 {
        return 0.0;
    }
    let coefficient = match nt {
        0 => LOG_X + LOG_XY * y,
        1 => LOG_XY,
        _ => return 0.0,
    };
    let floored = if sa < SA_LOG_FLOOR { SA_LOG_FLOOR } else { sa };
    let shape = match ns {
        0 => {
            let x2 = SFAC * sa;
            if x2 > 0.0 { 0.5 * x2 * x2.ln() } else { 0.0 }
        }
        1 => SFAC * 0.5 * ((SFAC * floored).ln() + 1.0),
        _ => 0.5 * SFAC / floored,
    };
    coefficient * shape
}
