//! Sweep results.

use super::parameter::SweepParameter;
use carbon_models::{EvaluationResult, Parameters};
use std::fmt;

/// Reported output of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Cumulative avoided emissions
    AvoidedEmissions,
    /// Cost of foregone coal production
    Cost,
    /// Social benefit of avoided emissions
    Benefit,
    /// Benefit minus cost
    Arbitrage,
}

impl Metric {
    /// All metrics in reporting order.
    pub const ALL: [Metric; 4] = [
        Self::AvoidedEmissions,
        Self::Cost,
        Self::Benefit,
        Self::Arbitrage,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AvoidedEmissions => "Total emissions prevented",
            Self::Cost => "Cost",
            Self::Benefit => "Benefit",
            Self::Arbitrage => "Carbon arbitrage opportunity",
        }
    }

    /// Unit of the metric.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::AvoidedEmissions => "GtCO2",
            Self::Cost | Self::Benefit | Self::Arbitrage => "trillion dollars",
        }
    }

    /// Value of this metric in `result`.
    pub fn extract(&self, result: &EvaluationResult) -> f64 {
        match self {
            Self::AvoidedEmissions => result.avoided_emissions,
            Self::Cost => result.cost,
            Self::Benefit => result.benefit,
            Self::Arbitrage => result.arbitrage,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepPoint {
    /// Value of the swept parameter
    pub value: f64,
    /// Full parameter set evaluated
    pub parameters: Parameters,
    /// Evaluation output
    pub result: EvaluationResult,
}

/// Ordered results of a sweep, one point per grid value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepTable {
    parameter: SweepParameter,
    fixed: Parameters,
    points: Vec<SweepPoint>,
}

impl SweepTable {
    /// Build a table. `points` are kept in the given order.
    pub fn new(parameter: SweepParameter, fixed: Parameters, points: Vec<SweepPoint>) -> Self {
        Self {
            parameter,
            fixed,
            points,
        }
    }

    /// Swept parameter.
    pub fn parameter(&self) -> SweepParameter {
        self.parameter
    }

    /// Parameters held fixed during the sweep.
    pub fn fixed(&self) -> &Parameters {
        &self.fixed
    }

    /// Evaluated points in grid order.
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Grid values in order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// `(grid value, metric value)` pairs in grid order.
    pub fn series(&self, metric: Metric) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.value, metric.extract(&p.result)))
            .collect()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the table holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over points.
    pub fn iter(&self) -> std::slice::Iter<'_, SweepPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a SweepTable {
    type Item = &'a SweepPoint;
    type IntoIter = std::slice::Iter<'a, SweepPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
