//! Series synthesizer.
//!
//! Turns scalar deltas into chart data: a straight-line ramp from baseline to
//! baseline + delta over twelve periods, and a pair of linear supply/demand
//! curves nudged by policy category. Neither is a model of dynamics.

use serde::{Deserialize, Serialize};

use crate::input::PolicyInput;
use crate::policy::PolicyCategory;
use crate::projection::{round2, ImpactDeltas};

/// Number of periods in every synthesized series.
pub const PERIODS: u32 = 12;

const BASE_GDP: f64 = 100.0;
const BASE_EMPLOYMENT: f64 = 95.0;
const BASE_INFLATION: f64 = 2.0;
const BASE_REVENUE: f64 = 50.0;
const BASE_PRICE_LEVEL: f64 = 100.0;

/// Demand elasticity assumed for curves when none is supplied.
pub const DEFAULT_CURVE_ED: f64 = 0.5;
/// Supply elasticity assumed for curves when none is supplied.
pub const DEFAULT_CURVE_ES: f64 = 0.8;

/// Indicator values at one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Period number, 1 to 12.
    pub period: u32,
    /// GDP index.
    pub gdp: f64,
    /// Employment rate.
    pub employment: f64,
    /// Inflation rate.
    pub inflation: f64,
    /// Government revenue.
    pub revenue: f64,
}

/// A chart point: `x` is quantity, `y` is price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Quantity.
    pub x: f64,
    /// Price.
    pub y: f64,
}

/// Demand and supply curves over the same quantity grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSet {
    /// Demand curve points.
    pub demand_curve: Vec<DataPoint>,
    /// Supply curve points.
    pub supply_curve: Vec<DataPoint>,
}

/// Everything the synthesizer produces for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedSeries {
    /// Indicator ramp over twelve periods.
    pub time_series: Vec<TimeSeriesPoint>,
    /// Price index per period.
    pub price_level: Vec<f64>,
    /// Supply and demand curves.
    #[serde(flatten)]
    pub curves: CurveSet,
}

/// Fraction of the full delta reached at `period` (1-based).
fn progress(period: u32) -> f64 {
    f64::from(period) / f64::from(PERIODS)
}

/// Linear ramp from the fixed baselines to baseline + delta.
#[must_use]
pub fn time_series(deltas: &ImpactDeltas) -> Vec<TimeSeriesPoint> {
    (1..=PERIODS)
        .map(|period| {
            let p = progress(period);
            TimeSeriesPoint {
                period,
                gdp: round2(BASE_GDP + deltas.gdp_change * p),
                employment: round2(BASE_EMPLOYMENT + deltas.employment_change * p),
                inflation: round2(BASE_INFLATION + deltas.inflation_change * p),
                revenue: round2(BASE_REVENUE + deltas.revenue_change * p),
            }
        })
        .collect()
}

/// Price index ramp driven by the inflation delta. Not rounded.
#[must_use]
pub fn price_level(deltas: &ImpactDeltas) -> Vec<f64> {
    (1..=PERIODS)
        .map(|period| BASE_PRICE_LEVEL + deltas.inflation_change * progress(period))
        .collect()
}

/// Illustrative `(demand, supply)` shift for a category.
///
/// These exist so the chart visibly responds to the category choice; they are
/// not derived from the narrative.
#[must_use]
pub const fn curve_shifts(category: PolicyCategory) -> (f64, f64) {
    match category {
        PolicyCategory::SubsidyConsumer => (10.0, 0.0),
        PolicyCategory::SubsidyProducer => (0.0, 15.0),
        PolicyCategory::PriceCeiling => (0.0, -10.0),
        PolicyCategory::PriceFloor => (-8.0, 0.0),
        c if c.is_tax() => (-5.0, 0.0),
        _ => (0.0, 0.0),
    }
}

/// Demand price at quantity `q`.
#[must_use]
pub fn demand_at(q: f64, ed: f64, shift: f64) -> f64 {
    150.0 - q * (1.0 + ed * 0.2) + shift
}

/// Supply price at quantity `q`.
#[must_use]
pub fn supply_at(q: f64, es: f64, shift: f64) -> f64 {
    20.0 + q * (0.5 + es * 0.3) + shift
}

/// Elasticity used for drawing; absent or zero means the default.
///
/// The classifier still tells absent and zero apart.
fn curve_elasticity(e: Option<f64>, default: f64) -> f64 {
    e.filter(|e| *e != 0.0).unwrap_or(default)
}

/// Supply and demand curves for q = 10, 20, ..., 100.
#[must_use]
pub fn curves(input: &PolicyInput) -> CurveSet {
    let ed = curve_elasticity(input.demand_elasticity, DEFAULT_CURVE_ED);
    let es = curve_elasticity(input.supply_elasticity, DEFAULT_CURVE_ES);
    let (demand_shift, supply_shift) = curve_shifts(input.policy_category);

    let (demand_curve, supply_curve): (Vec<_>, Vec<_>) = (1..=10u32)
        .map(|step| {
            let q = f64::from(step * 10);
            (
                DataPoint {
                    x: q,
                    y: demand_at(q, ed, demand_shift),
                },
                DataPoint {
                    x: q,
                    y: supply_at(q, es, supply_shift),
                },
            )
        })
        .unzip();

    CurveSet {
        demand_curve,
        supply_curve,
    }
}

/// Produces all chart series for one run.
#[must_use]
pub fn synthesize(deltas: &ImpactDeltas, input: &PolicyInput) -> SynthesizedSeries {
    SynthesizedSeries {
        time_series: time_series(deltas),
        price_level: price_level(deltas),
        curves: curves(input),
    }
}
