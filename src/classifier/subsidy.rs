//! Subsidy rules: consumer and producer.

use super::{assemble, item};
use crate::impact::ImpactLevel::{self, Negative, Positive};
use crate::impact::{ImpactSection, PolicyImpactResult, StakeholderRole};
use crate::input::{is_high_elasticity, PolicyInput};
use crate::policy::PolicyCategory;

const CONSUMER_HIGH_RATE: f64 = 20.0;
const PRODUCER_HIGH_RATE: f64 = 20.0;

pub(super) fn consumer(input: &PolicyInput) -> PolicyImpactResult {
    let high_subsidy = input.policy_rate > CONSUMER_HIGH_RATE;

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item(
                "Effective prices decrease",
                ImpactLevel::escalated_if(Positive, high_subsidy),
            ),
            item("Welfare increases", Positive),
            item("Purchasing power increases", Positive),
        ],
        "Subsidies directly reduce consumer costs; take advantage of lower effective prices.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item("Demand increases", Positive),
            item("Revenue increases", Positive),
            item("Production expands to meet demand", Positive),
        ],
        "Higher demand from subsidized consumers drives sales growth and expansion.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Employment increases", Positive),
            item("Job opportunities expand", Positive),
        ],
        "Growing production creates new employment opportunities.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("Government expenditure increases", Negative),
            item("GDP increases", Positive),
            item("Inflation may increase (demand-pull)", Negative),
        ],
        "Stimulus effect on growth offset by fiscal costs and potential inflationary pressure.",
    );

    assemble(PolicyCategory::SubsidyConsumer, consumer, producer, worker, macro_)
}

pub(super) fn producer(input: &PolicyInput) -> PolicyImpactResult {
    let high_es = is_high_elasticity(input.supply_elasticity);
    let high_subsidy = input.policy_rate > PRODUCER_HIGH_RATE;

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item(
                "Prices decrease",
                ImpactLevel::escalated_if(Positive, high_subsidy),
            ),
            item("Product availability increases", Positive),
        ],
        "Lower production costs translate to reduced consumer prices.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item("Profits increase", Positive),
            item("Output increases", ImpactLevel::escalated_if(Positive, high_es)),
            item("Investment capacity increases", Positive),
        ],
        "Subsidies improve margins and enable capacity expansion.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Employment increases", Positive),
            item("Job security improves", Positive),
        ],
        "Expanded production creates stable employment opportunities.",
    );

    // Supply-side subsidies ease prices, so the inflation line is a positive.
    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("GDP increases", Positive),
            item("Inflation neutral or decreases", Positive),
            item("Government expenditure increases", Negative),
        ],
        "Supply-side stimulus grows economy with minimal inflationary pressure.",
    );

    assemble(PolicyCategory::SubsidyProducer, consumer, producer, worker, macro_)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::ImpactLevel::StrongPositive;
    use crate::market::MarketType;

    #[test]
    fn consumer_subsidy_escalates_above_20() {
        let at = PolicyInput::new(PolicyCategory::SubsidyConsumer, MarketType::Food, 20.0);
        assert_eq!(consumer(&at).consumer.items[0].level, Positive);
        let above = PolicyInput::new(PolicyCategory::SubsidyConsumer, MarketType::Food, 25.0);
        assert_eq!(consumer(&above).consumer.items[0].level, StrongPositive);
    }

    #[test]
    fn producer_subsidy_output_tracks_supply_elasticity() {
        let inelastic = PolicyInput::builder()
            .category(PolicyCategory::SubsidyProducer)
            .supply_elasticity(0.9)
            .build();
        assert_eq!(producer(&inelastic).producer.items[1].level, Positive);

        let elastic = PolicyInput::builder()
            .category(PolicyCategory::SubsidyProducer)
            .supply_elasticity(1.2)
            .build();
        assert_eq!(producer(&elastic).producer.items[1].level, StrongPositive);

        // Unknown Es is not elastic.
        let unknown = PolicyInput::new(PolicyCategory::SubsidyProducer, MarketType::Food, 30.0);
        let result = producer(&unknown);
        assert_eq!(result.producer.items[1].level, Positive);
        assert_eq!(result.consumer.items[0].level, StrongPositive);
    }
}
