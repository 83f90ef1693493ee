//! Simulation orchestrator.
//!
//! Composes input coercion, classification, projection and series synthesis
//! into one immutable [`SimulationResult`]. Runs are synchronous and never
//! fail: unusual input is coerced, not rejected.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::classify;
use crate::impact::PolicyImpactResult;
use crate::input::{PolicyInput, DEFAULT_POLICY_RATE};
use crate::market::MarketType;
use crate::policy::{PolicyCategory, PolicyType};
use crate::projection::{project, ImpactDeltas};
use crate::series::{synthesize, DataPoint, TimeSeriesPoint};

/// Unique identifier of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationId(Uuid);

impl SimulationId {
    /// Creates a new random simulation ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a simulation ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SimulationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raw form value: either a number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Numeric field value.
    Number(f64),
    /// Text field value, possibly a number typed as text.
    Text(String),
}

impl ParamValue {
    /// Numeric view of this value; numeric text is parsed.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Text view of this value. Numbers have no text view.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Raw parameters as submitted by the input form, keyed by parameter id.
pub type RawParameters = BTreeMap<String, ParamValue>;

/// Parameter ids understood by [`coerce_inputs`].
pub mod keys {
    /// Market selector.
    pub const MARKET: &str = "market";
    /// Policy rate.
    pub const RATE: &str = "rate";
    /// Demand elasticity.
    pub const DEMAND_ELASTICITY: &str = "Ed";
    /// Supply elasticity.
    pub const SUPPLY_ELASTICITY: &str = "Es";
    /// Initial price.
    pub const INITIAL_PRICE: &str = "P0";
    /// Initial quantity.
    pub const INITIAL_QUANTITY: &str = "Q0";
    /// Labor demand elasticity.
    pub const LABOR_DEMAND_ELASTICITY: &str = "laborDemandElasticity";
    /// Labor supply elasticity.
    pub const LABOR_SUPPLY_ELASTICITY: &str = "laborSupplyElasticity";
    /// Export quota.
    pub const QUOTA: &str = "quota";
}

fn number(params: &RawParameters, key: &str) -> Option<f64> {
    let value = params.get(key)?;
    let n = value.as_number();
    if n.is_none() {
        tracing::warn!(key, ?value, "ignoring non-numeric parameter");
    }
    n
}

/// Coerces raw form parameters into a [`PolicyInput`].
///
/// - The category comes from the family's subtype key (`taxType`,
///   `subsidyType`, `controlType`, `tradeType`); unknown subtypes use the
///   family default.
/// - An unknown or missing market becomes fuel.
/// - A missing, non-numeric or zero rate becomes 15. The form's slider
///   starts at 0, and a zero rate is read as "not set".
/// - Optional numerics that cannot be parsed are treated as absent.
#[must_use]
pub fn coerce_inputs(policy_type: PolicyType, params: &RawParameters) -> PolicyInput {
    let subtype = params
        .get(policy_type.subtype_key())
        .and_then(ParamValue::as_text);
    let category = PolicyCategory::from_family_subtype(policy_type, subtype);

    let market_type = params
        .get(keys::MARKET)
        .and_then(ParamValue::as_text)
        .map_or_else(MarketType::default, MarketType::parse_lenient);

    PolicyInput {
        market_type,
        policy_category: category,
        policy_rate: number(params, keys::RATE)
            .filter(|rate| *rate != 0.0)
            .unwrap_or(DEFAULT_POLICY_RATE),
        demand_elasticity: number(params, keys::DEMAND_ELASTICITY),
        supply_elasticity: number(params, keys::SUPPLY_ELASTICITY),
        initial_price: number(params, keys::INITIAL_PRICE),
        initial_quantity: number(params, keys::INITIAL_QUANTITY),
        labor_demand_elasticity: number(params, keys::LABOR_DEMAND_ELASTICITY),
        labor_supply_elasticity: number(params, keys::LABOR_SUPPLY_ELASTICITY),
        quota_amount: number(params, keys::QUOTA),
    }
}

/// Numeric outputs of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutput {
    /// GDP change.
    pub gdp_change: f64,
    /// Employment change.
    pub employment_change: f64,
    /// Inflation change.
    pub inflation_change: f64,
    /// Revenue change.
    pub revenue_change: f64,
    /// Welfare change.
    pub welfare_change: f64,
    /// Price index per period.
    pub price_level: Vec<f64>,
    /// Demand curve.
    pub demand_curve: Vec<DataPoint>,
    /// Supply curve.
    pub supply_curve: Vec<DataPoint>,
    /// Indicator ramp over twelve periods.
    pub time_series_data: Vec<TimeSeriesPoint>,
}

impl SimulationOutput {
    /// The five scalar deltas.
    #[must_use]
    pub const fn deltas(&self) -> ImpactDeltas {
        ImpactDeltas {
            gdp_change: self.gdp_change,
            employment_change: self.employment_change,
            inflation_change: self.inflation_change,
            revenue_change: self.revenue_change,
            welfare_change: self.welfare_change,
        }
    }
}

/// Complete, immutable record of one run.
///
/// A new run produces a new value; nothing here is updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Run identifier.
    pub id: SimulationId,
    /// Policy family selected in the form.
    pub policy_type: PolicyType,
    /// Resolved category.
    pub policy_category: PolicyCategory,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
    /// Coerced inputs.
    pub inputs: PolicyInput,
    /// Stakeholder narrative.
    pub impacts: PolicyImpactResult,
    /// Numeric outputs and chart series.
    pub outputs: SimulationOutput,
}

impl SimulationResult {
    /// Serializes this result as JSON, e.g. for chat context.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Runs a simulation from raw form parameters.
///
/// # Examples
///
/// ```
/// use policysim::{run, ParamValue, PolicyCategory, PolicyType, RawParameters};
///
/// let mut params = RawParameters::new();
/// params.insert("taxType".into(), ParamValue::from("income"));
/// params.insert("rate".into(), ParamValue::from(30.0));
///
/// let result = run(PolicyType::Tax, &params);
/// assert_eq!(result.policy_category, PolicyCategory::TaxIncome);
/// assert_eq!(result.outputs.time_series_data.len(), 12);
/// ```
#[must_use]
pub fn run(policy_type: PolicyType, params: &RawParameters) -> SimulationResult {
    let inputs = coerce_inputs(policy_type, params);
    simulate(policy_type, inputs)
}

/// Runs a simulation from an already typed input.
#[must_use]
pub fn simulate(policy_type: PolicyType, inputs: PolicyInput) -> SimulationResult {
    let span = tracing::debug_span!(
        "simulation.run",
        category = inputs.policy_category.as_str(),
        market = inputs.market_type.as_str(),
        rate = inputs.policy_rate,
    );
    let _guard = span.enter();

    let impacts = classify(&inputs);
    let deltas = project(&impacts, &inputs);
    let series = synthesize(&deltas, &inputs);

    tracing::debug!(
        gdp = deltas.gdp_change,
        employment = deltas.employment_change,
        inflation = deltas.inflation_change,
        revenue = deltas.revenue_change,
        welfare = deltas.welfare_change,
        "simulation complete"
    );

    SimulationResult {
        id: SimulationId::new(),
        policy_type,
        policy_category: inputs.policy_category,
        timestamp: Utc::now(),
        inputs,
        impacts,
        outputs: SimulationOutput {
            gdp_change: deltas.gdp_change,
            employment_change: deltas.employment_change,
            inflation_change: deltas.inflation_change,
            revenue_change: deltas.revenue_change,
            welfare_change: deltas.welfare_change,
            price_level: series.price_level,
            demand_curve: series.curves.demand_curve,
            supply_curve: series.curves.supply_curve,
            time_series_data: series.time_series,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, ParamValue)]) -> RawParameters {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn simulation_id_is_unique() {
        assert_ne!(SimulationId::new(), SimulationId::new());
    }

    #[test]
    fn param_value_coercion() {
        assert_eq!(ParamValue::from(1.5).as_number(), Some(1.5));
        assert_eq!(ParamValue::from(" 2.5 ").as_number(), Some(2.5));
        assert_eq!(ParamValue::from("abc").as_number(), None);
        assert_eq!(ParamValue::Number(f64::NAN).as_number(), None);
        assert_eq!(ParamValue::from(3.0).as_text(), None);
    }

    #[test]
    fn coerce_defaults_for_empty_parameters() {
        let input = coerce_inputs(PolicyType::Tax, &RawParameters::new());
        assert_eq!(input.policy_category, PolicyCategory::TaxIndirect);
        assert_eq!(input.market_type, MarketType::Fuel);
        assert!((input.policy_rate - 15.0).abs() < f64::EPSILON);
        assert!(input.demand_elasticity.is_none());
        assert!(input.quota_amount.is_none());
    }

    #[test]
    fn coerce_reads_every_field() {
        let p = params(&[
            ("tradeType", "export_restriction".into()),
            ("market", "agriculture".into()),
            ("rate", 12.0.into()),
            ("Ed", "0.4".into()),
            ("Es", 1.1.into()),
            ("P0", 40.0.into()),
            ("Q0", 300.0.into()),
            ("laborDemandElasticity", 0.7.into()),
            ("laborSupplyElasticity", 0.3.into()),
            ("quota", 1000.0.into()),
        ]);
        let input = coerce_inputs(PolicyType::Trade, &p);
        assert_eq!(input.policy_category, PolicyCategory::TradeExportRestriction);
        assert_eq!(input.market_type, MarketType::Agriculture);
        assert_eq!(input.demand_elasticity, Some(0.4));
        assert_eq!(input.supply_elasticity, Some(1.1));
        assert_eq!(input.initial_price, Some(40.0));
        assert_eq!(input.initial_quantity, Some(300.0));
        assert_eq!(input.labor_demand_elasticity, Some(0.7));
        assert_eq!(input.labor_supply_elasticity, Some(0.3));
        assert_eq!(input.quota_amount, Some(1000.0));
    }

    #[test]
    fn coerce_keeps_unusual_rates() {
        let p = params(&[("rate", (-20.0).into())]);
        assert!((coerce_inputs(PolicyType::Subsidy, &p).policy_rate + 20.0).abs() < f64::EPSILON);
        let p = params(&[("rate", 250.0.into())]);
        assert!((coerce_inputs(PolicyType::Subsidy, &p).policy_rate - 250.0).abs() < f64::EPSILON);
        let p = params(&[("rate", "lots".into())]);
        assert!((coerce_inputs(PolicyType::Subsidy, &p).policy_rate - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coerce_treats_zero_rate_as_unset() {
        for zero in [ParamValue::from(0.0), ParamValue::from(-0.0), ParamValue::from("0")] {
            let p = params(&[("taxType", "indirect".into()), ("market", "food".into()), ("rate", zero)]);
            let input = coerce_inputs(PolicyType::Tax, &p);
            assert!((input.policy_rate - 15.0).abs() < f64::EPSILON);
        }

        let result = run(
            PolicyType::Tax,
            &params(&[("taxType", "indirect".into()), ("market", "food".into()), ("rate", 0.0.into())]),
        );
        assert!(result.outputs.gdp_change < 0.0);
        assert!(result.outputs.revenue_change > 0.0);
    }

    #[test]
    fn coerce_unknown_market_and_subtype() {
        let p = params(&[("controlType", "rent_cap".into()), ("market", "housing".into())]);
        let input = coerce_inputs(PolicyType::PriceControl, &p);
        assert_eq!(input.policy_category, PolicyCategory::PriceCeiling);
        assert_eq!(input.market_type, MarketType::Fuel);
    }

    #[test]
    fn run_assembles_all_outputs() {
        let p = params(&[("subsidyType", "producer".into()), ("rate", 25.0.into())]);
        let result = run(PolicyType::Subsidy, &p);
        assert_eq!(result.policy_type, PolicyType::Subsidy);
        assert_eq!(result.policy_category, PolicyCategory::SubsidyProducer);
        assert_eq!(result.impacts.policy_category, PolicyCategory::SubsidyProducer);
        assert_eq!(result.outputs.price_level.len(), 12);
        assert_eq!(result.outputs.time_series_data.len(), 12);
        assert_eq!(result.outputs.demand_curve.len(), 10);
        assert_eq!(result.outputs.supply_curve.len(), 10);
        assert_eq!(
            result.outputs.deltas(),
            project(&result.impacts, &result.inputs)
        );
    }

    #[test]
    fn result_json_shape() {
        let result = run(PolicyType::Tax, &RawParameters::new());
        let v: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(v["policyType"], "tax");
        assert_eq!(v["policyCategory"], "tax_indirect");
        assert!(v["impacts"]["macro"]["items"].is_array());
        assert!(v["outputs"]["timeSeriesData"].is_array());
        assert!(v["outputs"]["gdpChange"].is_number());
        assert_eq!(v["inputs"]["policyRate"], 15.0);
    }
}
