//! Trade rules: export subsidy and export restriction.

use super::{assemble, item};
use crate::impact::ImpactLevel::{self, Negative, Neutral, Positive};
use crate::impact::{ImpactSection, PolicyImpactResult, StakeholderRole};
use crate::input::PolicyInput;
use crate::policy::PolicyCategory;

const EXPORT_SUBSIDY_HIGH_RATE: f64 = 15.0;

pub(super) fn export_subsidy(input: &PolicyInput) -> PolicyImpactResult {
    let high_subsidy = input.policy_rate > EXPORT_SUBSIDY_HIGH_RATE;

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item("Domestic prices may increase as goods exported", Negative),
            item("Domestic availability may decrease", Negative),
        ],
        "Export focus may reduce domestic supply; prices could rise locally.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item(
                "Export profits increase",
                ImpactLevel::escalated_if(Positive, high_subsidy),
            ),
            item("Output increases", Positive),
            item("International competitiveness increases", Positive),
        ],
        "Subsidies make exports more competitive; producers gain market share abroad.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Employment in export sectors increases", Positive),
            item("Job creation in manufacturing", Positive),
        ],
        "Export growth creates employment in production and logistics.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("GDP increases", Positive),
            item("Fiscal burden increases", Negative),
            item("Trade surplus increases", Positive),
            item("Risk of trade disputes", Negative),
        ],
        "Export subsidies boost growth but create fiscal costs and trade tensions.",
    );

    assemble(PolicyCategory::TradeExportSubsidy, consumer, producer, worker, macro_)
}

/// Fixed narrative. `quota_amount` is accepted on the input but has no
/// effect here.
pub(super) fn export_restriction(_input: &PolicyInput) -> PolicyImpactResult {
    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item("Domestic availability increases", Positive),
            item("Domestic prices decrease", Positive),
            item("Supply stability improves", Positive),
        ],
        "Export limits increase domestic supply; consumers benefit from lower prices.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item("Export revenue decreases", Negative),
            item("International market access limited", Negative),
            item("Domestic prices may not cover costs", Negative),
        ],
        "Producers lose lucrative export markets; domestic focus reduces profitability.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Employment in export sectors decreases", Negative),
            item("Job losses in trade-dependent industries", Negative),
        ],
        "Reduced exports lead to workforce reductions in affected sectors.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("GDP neutral or decreases", Neutral),
            item("Trade surplus decreases", Negative),
            item("Domestic food/commodity security improves", Positive),
        ],
        "Domestic availability improves at cost of export earnings.",
    );

    assemble(
        PolicyCategory::TradeExportRestriction,
        consumer,
        producer,
        worker,
        macro_,
    )
}
