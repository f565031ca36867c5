//! Leverage-weighted discount rate model.

/// Weighted blend of after-tax debt cost and CAPM equity cost.
///
/// ```text
/// rho = w * r_f * (1 - tax) + (1 - w) * (r_f + beta * crp)
/// ```
///
/// where `w` is the leverage weight, `r_f` the risk-free rate and `crp`
/// the equity risk premium over the credit spread. `beta` is an unleveraged
/// equity beta; the model does not bound it.
///
/// # Example
///
/// ```
/// use carbon_core::discounting::DiscountRateModel;
///
/// let model = DiscountRateModel::default();
/// let rho = model.rate(0.91);
/// assert!((rho - 0.02792).abs() < 1e-5);
/// assert!(model.rate(1.5) > rho);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiscountRateModel {
    /// Annual risk-free rate
    pub risk_free_rate: f64,
    /// Equity risk premium net of the 1% credit spread
    pub credit_spread_premium: f64,
    /// Share of debt in the financing mix
    pub leverage_weight: f64,
    /// Corporate tax rate applied to the debt leg
    pub tax_rate: f64,
}

impl DiscountRateModel {
    /// Risk-free rate used by [`Default`].
    pub const RISK_FREE_RATE: f64 = 0.0208;
    /// Equity risk premium (2.99%) less the 1% credit spread.
    pub const CREDIT_SPREAD_PREMIUM: f64 = 0.0299 - 0.01;
    /// Leverage weight used by [`Default`].
    pub const LEVERAGE_WEIGHT: f64 = 0.5175273490449868;
    /// Tax rate used by [`Default`].
    pub const TAX_RATE: f64 = 0.15;

    /// Create a model from explicit constants.
    pub fn new(
        risk_free_rate: f64,
        credit_spread_premium: f64,
        leverage_weight: f64,
        tax_rate: f64,
    ) -> Self {
        Self {
            risk_free_rate,
            credit_spread_premium,
            leverage_weight,
            tax_rate,
        }
    }

    /// Annual discount rate for the given unleveraged beta.
    #[inline]
    pub fn rate(&self, beta: f64) -> f64 {
        let w = self.leverage_weight;
        let r_f = self.risk_free_rate;
        w * r_f * (1.0 - self.tax_rate) + (1.0 - w) * (r_f + beta * self.credit_spread_premium)
    }

    /// Rate at `beta = 0`.
    #[inline]
    pub fn base_rate(&self) -> f64 {
        self.rate(0.0)
    }

    /// Change in rate per unit of beta.
    #[inline]
    pub fn beta_sensitivity(&self) -> f64 {
        (1.0 - self.leverage_weight) * self.credit_spread_premium
    }
}

impl Default for DiscountRateModel {
    fn default() -> Self {
        Self::new(
            Self::RISK_FREE_RATE,
            Self::CREDIT_SPREAD_PREMIUM,
            Self::LEVERAGE_WEIGHT,
            Self::TAX_RATE,
        )
    }
}
