//! Sweepable parameters.

use crate::error::SweepError;
use carbon_models::Parameters;
use std::fmt;
use std::str::FromStr;

/// Input varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SweepParameter {
    /// Social cost of carbon
    Scc,
    /// Global levelised cost of energy
    Lcoe,
    /// Unleveraged beta
    Beta,
}

impl SweepParameter {
    /// All parameters in display order.
    pub const ALL: [SweepParameter; 3] = [Self::Scc, Self::Lcoe, Self::Beta];

    /// Default sweep range `(start, end)`.
    pub fn default_range(&self) -> (f64, f64) {
        match self {
            Self::Scc | Self::Lcoe => (10.0, 200.0),
            Self::Beta => (0.0, 2.0),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scc => "Social Cost of Carbon",
            Self::Lcoe => "Global LCOE",
            Self::Beta => "Beta",
        }
    }

    /// Short name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scc => "scc",
            Self::Lcoe => "lcoe",
            Self::Beta => "beta",
        }
    }

    /// Copy of `fixed` with this parameter replaced by `value`.
    pub fn apply(&self, fixed: &Parameters, value: f64) -> Parameters {
        let mut params = *fixed;
        match self {
            Self::Scc => params.social_cost_of_carbon = value,
            Self::Lcoe => params.global_lcoe = value,
            Self::Beta => params.beta = value,
        }
        params
    }

    /// Current value of this parameter in `params`.
    pub fn get(&self, params: &Parameters) -> f64 {
        match self {
            Self::Scc => params.social_cost_of_carbon,
            Self::Lcoe => params.global_lcoe,
            Self::Beta => params.beta,
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SweepParameter {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scc" | "social-cost-of-carbon" | "social_cost_of_carbon" => Ok(Self::Scc),
            "lcoe" | "global-lcoe" | "global_lcoe" => Ok(Self::Lcoe),
            "beta" => Ok(Self::Beta),
            _ => Err(SweepError::UnknownParameter(s.to_string())),
        }
    }
}
