//! Numeric projector.
//!
//! Converts a qualitative [`PolicyImpactResult`] into five scalar deltas.
//! Effects are routed to indicators by case-insensitive keyword matching on
//! their text; the keyword list and the narrative wording are coupled, so
//! changing either changes the numbers.

use serde::{Deserialize, Serialize};

use crate::impact::{ImpactSection, PolicyImpactResult};
use crate::input::PolicyInput;

const GDP_SCALE: f64 = 1.5;
const EMPLOYMENT_SCALE: f64 = 0.8;
const INFLATION_SCALE: f64 = 0.5;
const REVENUE_SCALE: f64 = 3.0;
const WELFARE_SCALE: f64 = 2.0;

const MACRO_EMPLOYMENT_KEYWORDS: [&str; 2] = ["employment", "hiring"];
const WORKER_EMPLOYMENT_KEYWORDS: [&str; 3] = ["employment", "hiring", "job"];

/// Rounds to two decimals, with halves rounded towards positive infinity.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Scaling factor from policy rate: `min(rate / 100, 1)`.
///
/// Only the upper end is capped; negative rates flip the sign of every delta.
#[must_use]
pub fn rate_multiplier(policy_rate: f64) -> f64 {
    (policy_rate / 100.0).min(1.0)
}

/// Projected change per indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDeltas {
    /// GDP change, index points.
    pub gdp_change: f64,
    /// Employment change, percentage points.
    pub employment_change: f64,
    /// Inflation change, percentage points.
    pub inflation_change: f64,
    /// Government revenue change.
    pub revenue_change: f64,
    /// Consumer welfare change.
    pub welfare_change: f64,
}

/// Unscaled scores accumulated from the narrative.
///
/// Welfare is fractional because consumer items count at half weight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactScores {
    /// GDP score from macro items.
    pub gdp: i32,
    /// Employment score from macro and worker items.
    pub employment: i32,
    /// Inflation score, sign inverted.
    pub inflation: i32,
    /// Revenue score from macro items.
    pub revenue: i32,
    /// Welfare score from consumer items.
    pub welfare: f64,
}

impl ImpactScores {
    /// Accumulates scores from the macro, worker and consumer sections.
    ///
    /// The producer section never contributes.
    #[must_use]
    pub fn from_impacts(impacts: &PolicyImpactResult) -> Self {
        let mut scores = Self::default();
        scores.add_macro(&impacts.macro_);
        scores.add_worker(&impacts.worker);
        scores.add_consumer(&impacts.consumer);
        scores
    }

    fn add_macro(&mut self, section: &ImpactSection) {
        for item in &section.items {
            let effect = item.effect.to_lowercase();
            let score = item.level.score();

            if effect.contains("gdp") {
                self.gdp += score;
            }
            if contains_any(&effect, &MACRO_EMPLOYMENT_KEYWORDS) {
                self.employment += score;
            }
            // Rising inflation is a bad outcome, so the sign is inverted.
            if effect.contains("inflation") {
                self.inflation -= score;
            }
            if effect.contains("revenue") {
                self.revenue += score;
            }
        }
    }

    fn add_worker(&mut self, section: &ImpactSection) {
        for item in &section.items {
            let effect = item.effect.to_lowercase();
            if contains_any(&effect, &WORKER_EMPLOYMENT_KEYWORDS) {
                self.employment += item.level.score();
            }
        }
    }

    fn add_consumer(&mut self, section: &ImpactSection) {
        for item in &section.items {
            self.welfare += f64::from(item.level.score()) * 0.5;
        }
    }

    /// Scales the scores by the rate multiplier and per-indicator constants.
    #[must_use]
    pub fn scale(&self, policy_rate: f64) -> ImpactDeltas {
        let m = rate_multiplier(policy_rate);
        ImpactDeltas {
            gdp_change: round2(f64::from(self.gdp) * m * GDP_SCALE),
            employment_change: round2(f64::from(self.employment) * m * EMPLOYMENT_SCALE),
            inflation_change: round2(f64::from(self.inflation) * m * INFLATION_SCALE),
            revenue_change: round2(f64::from(self.revenue) * m * REVENUE_SCALE),
            welfare_change: round2(self.welfare * m * WELFARE_SCALE),
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Projects the narrative onto the five numeric indicators.
///
/// # Examples
///
/// ```
/// use policysim::{classify, project, MarketType, PolicyCategory, PolicyInput};
///
/// let input = PolicyInput::new(PolicyCategory::SubsidyConsumer, MarketType::Food, 20.0);
/// let deltas = project(&classify(&input), &input);
/// assert_eq!(deltas.gdp_change, 0.3);
/// ```
#[must_use]
pub fn project(impacts: &PolicyImpactResult, input: &PolicyInput) -> ImpactDeltas {
    ImpactScores::from_impacts(impacts).scale(input.policy_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::impact::{ImpactItem, ImpactLevel, StakeholderRole};
    use crate::market::MarketType;
    use crate::policy::PolicyCategory;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn round2_matches_half_up() {
        assert!(approx(round2(0.125), 0.13));
        assert!(approx(round2(-0.125), -0.12));
        assert!(approx(round2(1.0), 1.0));
        assert!(approx(round2(-0.3), -0.3));
    }

    #[test]
    fn rate_multiplier_caps_at_one() {
        assert!(approx(rate_multiplier(20.0), 0.2));
        assert!(approx(rate_multiplier(100.0), 1.0));
        assert!(approx(rate_multiplier(250.0), 1.0));
        assert!(approx(rate_multiplier(-10.0), -0.1));
    }

    #[test]
    fn indirect_tax_scores() {
        let input = PolicyInput::new(PolicyCategory::TaxIndirect, MarketType::Food, 15.0);
        let scores = ImpactScores::from_impacts(&classify(&input));
        assert_eq!(scores.gdp, -1);
        // Macro "Employment decreases" plus both worker items.
        assert_eq!(scores.employment, -3);
        assert_eq!(scores.inflation, 1);
        assert_eq!(scores.revenue, 1);
        assert!(approx(scores.welfare, -2.5));

        let deltas = scores.scale(20.0);
        assert!(approx(deltas.gdp_change, -0.3));
        assert!(approx(deltas.employment_change, -0.48));
        assert!(approx(deltas.inflation_change, 0.1));
        assert!(approx(deltas.revenue_change, 0.6));
        assert!(approx(deltas.welfare_change, -1.0));
    }

    #[test]
    fn item_matching_several_keywords_feeds_each_accumulator() {
        let mut impacts = classify(&PolicyInput::default());
        impacts.macro_ = ImpactSection::new(
            StakeholderRole::Macro,
            vec![ImpactItem::new(
                "GDP and revenue both rise, inflation too",
                ImpactLevel::StrongPositive,
            )],
            "",
        );
        let scores = ImpactScores::from_impacts(&impacts);
        assert_eq!(scores.gdp, 2);
        assert_eq!(scores.revenue, 2);
        assert_eq!(scores.inflation, -2);
    }

    #[test]
    fn item_matching_several_employment_keywords_counts_once() {
        let mut impacts = classify(&PolicyInput::default());
        impacts.worker = ImpactSection::new(
            StakeholderRole::Worker,
            vec![ImpactItem::new(
                "Employment falls as hiring freezes and job offers dry up",
                ImpactLevel::Negative,
            )],
            "",
        );
        impacts.macro_ = ImpactSection::new(
            StakeholderRole::Macro,
            vec![ImpactItem::new(
                "Employment and hiring both slow",
                ImpactLevel::Negative,
            )],
            "",
        );
        let scores = ImpactScores::from_impacts(&impacts);
        assert_eq!(scores.employment, -2);
        assert_eq!(scores.gdp, 0);
    }

    #[test]
    fn producer_section_is_ignored() {
        let input = PolicyInput::new(PolicyCategory::TaxCorporate, MarketType::Fuel, 10.0);
        let mut impacts = classify(&input);
        let before = ImpactScores::from_impacts(&impacts);
        impacts.producer.items.push(ImpactItem::new(
            "Employment and GDP soar",
            ImpactLevel::StrongPositive,
        ));
        assert_eq!(ImpactScores::from_impacts(&impacts), before);
    }

    #[test]
    fn unmatched_macro_items_contribute_nothing() {
        let input = PolicyInput::new(PolicyCategory::PriceCeiling, MarketType::Food, 20.0);
        let scores = ImpactScores::from_impacts(&classify(&input));
        // Only "GDP decreases" matches; inefficiency and misallocation do not.
        assert_eq!(scores.gdp, -1);
        assert_eq!(scores.inflation, 0);
        assert_eq!(scores.revenue, 0);
    }

    #[test]
    fn worker_job_keyword_counts() {
        let input = PolicyInput::new(PolicyCategory::TradeExportRestriction, MarketType::Food, 10.0);
        let scores = ImpactScores::from_impacts(&classify(&input));
        assert_eq!(scores.employment, -2);
    }

    #[test]
    fn zero_multiplier_yields_zero_deltas() {
        // Raw parameters never get here with a zero rate; a typed input can.
        let input = PolicyInput::new(PolicyCategory::TaxTariff, MarketType::Fuel, 0.0);
        let deltas = project(&classify(&input), &input);
        assert!(approx(deltas.gdp_change.abs(), 0.0));
        assert!(approx(deltas.revenue_change.abs(), 0.0));
    }
}
