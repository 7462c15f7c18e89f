//! Chart specifications and their validation rules.
//!
//! Linear curves follow `Q(P) = a + b·P`. Demand needs `b < 0`, supply
//! needs `b > 0`. Cost curves derive from `CT(Q) = F + v·Q + c·Q²`.

use super::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart family, used for file names and reply labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Demand,
    Supply,
    SupplyDemand,
    Cost,
    Series,
}

impl ChartKind {
    /// Stem used at the start of generated file names.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartKind::Demand => "demanda",
            ChartKind::Supply => "oferta",
            ChartKind::SupplyDemand => "oferta_demanda",
            ChartKind::Cost => "costos",
            ChartKind::Series => "serie",
        }
    }

    /// Upper-case label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Demand => "DEMANDA",
            ChartKind::Supply => "OFERTA",
            ChartKind::SupplyDemand => "OFERTA Y DEMANDA",
            ChartKind::Cost => "COSTOS",
            ChartKind::Series => "SERIE",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// `Q(P) = intercept + slope · P`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCurve {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearCurve {
    pub const DEFAULT_DEMAND: Self = Self::new(100.0, -1.0);
    pub const DEFAULT_SUPPLY: Self = Self::new(10.0, 1.0);

    pub const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    pub fn quantity_at(&self, price: f64) -> f64 {
        self.intercept + self.slope * price
    }

    /// Price at which the quantity reaches zero, if the curve is not flat.
    pub fn zero_quantity_price(&self) -> Option<f64> {
        (self.slope != 0.0).then(|| -self.intercept / self.slope)
    }

    fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.slope.is_finite()
    }
}

/// Quadratic total-cost model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostCurves {
    pub fixed: f64,
    pub linear: f64,
    pub quadratic: f64,
    pub max_quantity: u32,
}

impl Default for CostCurves {
    fn default() -> Self {
        Self {
            fixed: 50.0,
            linear: 5.0,
            quadratic: 1.0,
            max_quantity: 100,
        }
    }
}

impl CostCurves {
    pub fn total(&self, q: f64) -> f64 {
        self.fixed + self.linear * q + self.quadratic * q * q
    }

    /// CMg(Q) = v + 2cQ
    pub fn marginal(&self, q: f64) -> f64 {
        self.linear + 2.0 * self.quadratic * q
    }

    /// CMe(Q) = CT(Q) / Q
    pub fn average(&self, q: f64) -> f64 {
        self.total(q) / q
    }

    /// Quantities plotted: 1..=max, with 50 used when max is zero.
    pub fn quantities(&self) -> impl Iterator<Item = f64> {
        let max = if self.max_quantity < 1 {
            50
        } else {
            self.max_quantity
        };
        (1..=max).map(f64::from)
    }
}

/// Market equilibrium point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium {
    pub price: f64,
    pub quantity: f64,
}

/// A fully parameterised chart request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartSpec {
    Demand(LinearCurve),
    Supply(LinearCurve),
    SupplyDemand {
        demand: LinearCurve,
        supply: LinearCurve,
    },
    Cost(CostCurves),
    Series(Vec<f64>),
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Demand(_) => ChartKind::Demand,
            ChartSpec::Supply(_) => ChartKind::Supply,
            ChartSpec::SupplyDemand { .. } => ChartKind::SupplyDemand,
            ChartSpec::Cost(_) => ChartKind::Cost,
            ChartSpec::Series(_) => ChartKind::Series,
        }
    }

    /// Check sign and count constraints. Renderers call this before drawing.
    pub fn validate(&self) -> Result<(), ChartError> {
        match self {
            ChartSpec::Demand(demand) => check_demand(demand),
            ChartSpec::Supply(supply) => check_supply(supply),
            ChartSpec::SupplyDemand { demand, supply } => {
                check_demand(demand)?;
                check_supply(supply)
            }
            ChartSpec::Cost(cost) => {
                if [cost.fixed, cost.linear, cost.quadratic]
                    .iter()
                    .all(|v| v.is_finite())
                {
                    Ok(())
                } else {
                    Err(ChartError::NonFinite)
                }
            }
            ChartSpec::Series(values) => {
                if values.len() < 2 {
                    return Err(ChartError::TooFewPoints { got: values.len() });
                }
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(ChartError::NonFinite);
                }
                Ok(())
            }
        }
    }

    /// Equilibrium of the combined chart, when the curves cross.
    pub fn equilibrium(&self) -> Option<Equilibrium> {
        let ChartSpec::SupplyDemand { demand, supply } = self else {
            return None;
        };
        let denominator = supply.slope - demand.slope;
        if denominator == 0.0 {
            return None;
        }
        let price = (demand.intercept - supply.intercept) / denominator;
        Some(Equilibrium {
            price,
            quantity: demand.quantity_at(price),
        })
    }

    /// Price axis range for curve charts; `None` for cost and series charts.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let candidates: Vec<Option<f64>> = match self {
            ChartSpec::Demand(curve) | ChartSpec::Supply(curve) => {
                vec![curve.zero_quantity_price(), Some(curve.intercept)]
            }
            ChartSpec::SupplyDemand { demand, supply } => vec![
                demand.zero_quantity_price(),
                supply.zero_quantity_price(),
                self.equilibrium().map(|e| e.price),
                Some(demand.intercept),
                Some(supply.intercept),
            ],
            ChartSpec::Cost(_) | ChartSpec::Series(_) => return None,
        };
        Some(price_range_from_candidates(&candidates, 100.0))
    }
}

fn check_demand(demand: &LinearCurve) -> Result<(), ChartError> {
    if !demand.is_finite() {
        return Err(ChartError::NonFinite);
    }
    if demand.slope >= 0.0 {
        return Err(ChartError::DemandSlope(demand.slope));
    }
    Ok(())
}

fn check_supply(supply: &LinearCurve) -> Result<(), ChartError> {
    if !supply.is_finite() {
        return Err(ChartError::NonFinite);
    }
    if supply.slope <= 0.0 {
        return Err(ChartError::SupplySlope(supply.slope));
    }
    Ok(())
}

/// `[0, max]` price range from positive candidates, with 10% head-room and
/// a floor of 10. Falls back to `[0, fallback_max]`.
pub fn price_range_from_candidates(candidates: &[Option<f64>], fallback_max: f64) -> (f64, f64) {
    let max_positive = candidates
        .iter()
        .flatten()
        .copied()
        .filter(|p| p.is_finite() && *p > 0.0)
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |m| m.max(p))));

    match max_positive {
        None => (0.0, fallback_max),
        Some(max) => (0.0, (max * 1.1).max(10.0)),
    }
}
