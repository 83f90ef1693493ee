//! Policy input model.
//!
//! A [`PolicyInput`] describes one simulation request. It is plain data; the
//! classifier derives everything else from it.

use serde::{Deserialize, Serialize};

use crate::market::MarketType;
use crate::policy::PolicyCategory;

/// Policy rate used when none is supplied.
pub const DEFAULT_POLICY_RATE: f64 = 15.0;

/// Elasticity below one: quantity responds less than proportionally to price.
///
/// An absent elasticity is not evidence either way.
#[must_use]
pub fn is_low_elasticity(e: Option<f64>) -> bool {
    e.is_some_and(|e| e < 1.0)
}

/// Elasticity of one or more.
///
/// An absent elasticity is not evidence either way.
#[must_use]
pub fn is_high_elasticity(e: Option<f64>) -> bool {
    e.is_some_and(|e| e >= 1.0)
}

/// Configuration for one simulation run.
///
/// Elasticities are optional and absence is distinct from zero: both
/// [`is_low_elasticity`] and [`is_high_elasticity`] are false for `None`.
///
/// # Examples
///
/// ```
/// use policysim::{MarketType, PolicyCategory, PolicyInput};
///
/// let input = PolicyInput::builder()
///     .category(PolicyCategory::TaxIndirect)
///     .market(MarketType::Food)
///     .rate(15.0)
///     .build();
/// assert!(input.demand_elasticity.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInput {
    /// Market the policy applies to.
    pub market_type: MarketType,

    /// Instrument being simulated.
    pub policy_category: PolicyCategory,

    /// Percent-like magnitude; not range checked.
    pub policy_rate: f64,

    /// Price elasticity of demand.
    #[serde(rename = "Ed", default, skip_serializing_if = "Option::is_none")]
    pub demand_elasticity: Option<f64>,

    /// Price elasticity of supply.
    #[serde(rename = "Es", default, skip_serializing_if = "Option::is_none")]
    pub supply_elasticity: Option<f64>,

    /// Initial price. Carried for the presentation layer; no rule reads it.
    #[serde(rename = "P0", default, skip_serializing_if = "Option::is_none")]
    pub initial_price: Option<f64>,

    /// Initial quantity. Carried for the presentation layer; no rule reads it.
    #[serde(rename = "Q0", default, skip_serializing_if = "Option::is_none")]
    pub initial_quantity: Option<f64>,

    /// Read by the minimum-wage rule only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor_demand_elasticity: Option<f64>,

    /// Labor supply elasticity. No rule reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor_supply_elasticity: Option<f64>,

    /// Export quota. Accepted and carried but not consumed by any rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_amount: Option<f64>,
}

impl PolicyInput {
    /// Creates an input with no elasticities or optional fields.
    #[must_use]
    pub fn new(category: PolicyCategory, market: MarketType, rate: f64) -> Self {
        Self {
            market_type: market,
            policy_category: category,
            policy_rate: rate,
            demand_elasticity: None,
            supply_elasticity: None,
            initial_price: None,
            initial_quantity: None,
            labor_demand_elasticity: None,
            labor_supply_elasticity: None,
            quota_amount: None,
        }
    }

    /// Starts a builder with the form defaults (indirect tax, fuel, 15%).
    #[must_use]
    pub fn builder() -> PolicyInputBuilder {
        PolicyInputBuilder::new()
    }
}

impl Default for PolicyInput {
    fn default() -> Self {
        Self::new(PolicyCategory::default(), MarketType::default(), DEFAULT_POLICY_RATE)
    }
}

/// Builder for [`PolicyInput`].
#[derive(Debug, Clone)]
pub struct PolicyInputBuilder {
    input: PolicyInput,
}

impl Default for PolicyInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyInputBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: PolicyInput::default(),
        }
    }

    /// Sets the policy category.
    #[must_use]
    pub fn category(mut self, category: PolicyCategory) -> Self {
        self.input.policy_category = category;
        self
    }

    /// Sets the market.
    #[must_use]
    pub fn market(mut self, market: MarketType) -> Self {
        self.input.market_type = market;
        self
    }

    /// Sets the policy rate.
    #[must_use]
    pub fn rate(mut self, rate: f64) -> Self {
        self.input.policy_rate = rate;
        self
    }

    /// Set the price elasticity of demand (Ed).
    #[must_use]
    pub fn demand_elasticity(mut self, ed: f64) -> Self {
        self.input.demand_elasticity = Some(ed);
        self
    }

    /// Set the price elasticity of supply (Es).
    #[must_use]
    pub fn supply_elasticity(mut self, es: f64) -> Self {
        self.input.supply_elasticity = Some(es);
        self
    }

    /// Sets the initial price.
    #[must_use]
    pub fn initial_price(mut self, p0: f64) -> Self {
        self.input.initial_price = Some(p0);
        self
    }

    /// Sets the initial quantity.
    #[must_use]
    pub fn initial_quantity(mut self, q0: f64) -> Self {
        self.input.initial_quantity = Some(q0);
        self
    }

    /// Sets the labor demand elasticity.
    #[must_use]
    pub fn labor_demand_elasticity(mut self, e: f64) -> Self {
        self.input.labor_demand_elasticity = Some(e);
        self
    }

    /// Sets the labor supply elasticity.
    #[must_use]
    pub fn labor_supply_elasticity(mut self, e: f64) -> Self {
        self.input.labor_supply_elasticity = Some(e);
        self
    }

    /// Sets the export quota.
    #[must_use]
    pub fn quota_amount(mut self, quota: f64) -> Self {
        self.input.quota_amount = Some(quota);
        self
    }

    /// Finish building. Inputs are never rejected.
    #[must_use]
    pub fn build(self) -> PolicyInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elasticity_predicates_treat_absence_as_neither() {
        assert!(!is_low_elasticity(None));
        assert!(!is_high_elasticity(None));
    }

    #[test]
    fn elasticity_threshold_is_one() {
        assert!(is_low_elasticity(Some(0.0)));
        assert!(is_low_elasticity(Some(0.99)));
        assert!(!is_low_elasticity(Some(1.0)));
        assert!(is_high_elasticity(Some(1.0)));
        assert!(!is_high_elasticity(Some(0.5)));
    }

    #[test]
    fn builder_defaults_match_form_defaults() {
        let input = PolicyInput::builder().build();
        assert_eq!(input.policy_category, PolicyCategory::TaxIndirect);
        assert_eq!(input.market_type, MarketType::Fuel);
        assert!((input.policy_rate - DEFAULT_POLICY_RATE).abs() < f64::EPSILON);
    }

    #[test]
    fn json_uses_presentation_field_names() {
        let input = PolicyInput::builder()
            .category(PolicyCategory::PriceMinimumWage)
            .market(MarketType::Food)
            .rate(20.0)
            .demand_elasticity(0.6)
            .labor_demand_elasticity(0.7)
            .build();

        let v = serde_json::to_value(&input).unwrap();
        assert_eq!(v["policyCategory"], "price_minimum_wage");
        assert_eq!(v["marketType"], "food");
        assert_eq!(v["Ed"], 0.6);
        assert_eq!(v["laborDemandElasticity"], 0.7);
        assert!(v.get("Es").is_none());
        assert!(v.get("quotaAmount").is_none());
    }

    #[test]
    fn json_with_unknown_enums_deserializes_to_defaults() {
        let raw = r#"{"marketType":"housing","policyCategory":"rent_cap","policyRate":12}"#;
        let input: PolicyInput = serde_json::from_str(raw).unwrap();
        assert_eq!(input.market_type, MarketType::Fuel);
        assert_eq!(input.policy_category, PolicyCategory::TaxIndirect);
        assert!(input.demand_elasticity.is_none());
    }
}
