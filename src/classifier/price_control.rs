//! Price-control rules: ceiling, floor and minimum wage.

use super::{assemble, item};
use crate::impact::ImpactLevel::{self, Negative, Neutral, Positive, StrongNegative};
use crate::impact::{ImpactSection, PolicyImpactResult, StakeholderRole};
use crate::input::{is_high_elasticity, PolicyInput};
use crate::policy::PolicyCategory;

const MINIMUM_WAGE_HIGH_RATE: f64 = 30.0;

pub(super) fn ceiling(input: &PolicyInput) -> PolicyImpactResult {
    let high_es = is_high_elasticity(input.supply_elasticity);

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item("Prices decrease (capped)", Positive),
            item("Shortages increase", StrongNegative),
            item("Black markets may emerge", Negative),
            item("Quality may decline", Negative),
        ],
        "Lower prices come with supply shortages; expect queues and rationing.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item("Output decreases", ImpactLevel::escalated_if(Negative, high_es)),
            item("Profit margins squeezed", Negative),
            item("Investment in sector decreases", Negative),
        ],
        "Price caps reduce incentive to produce; supply constraints worsen over time.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Employment decreases", Negative),
            item("Sector layoffs possible", Negative),
        ],
        "Reduced production leads to workforce reductions in affected sectors.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("GDP decreases", Negative),
            item("Economic inefficiency increases", Negative),
            item("Resource misallocation increases", Negative),
        ],
        "Market distortions create deadweight losses and economic inefficiency.",
    );

    assemble(PolicyCategory::PriceCeiling, consumer, producer, worker, macro_)
}

pub(super) fn floor(input: &PolicyInput) -> PolicyImpactResult {
    let high_es = is_high_elasticity(input.supply_elasticity);

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item("Prices increase (minimum set)", Negative),
            item("Demand decreases", Negative),
            item("Consumption falls", Negative),
        ],
        "Higher mandated prices reduce consumer purchasing; budget adjustments needed.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item("Revenue guaranteed at minimum level", Positive),
            item("Surplus increases", ImpactLevel::escalated_if(Positive, high_es)),
            item("May overproduce expecting floor price", Negative),
        ],
        "Price floors provide revenue stability but may lead to overproduction.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Employment increases if procurement exists", Positive),
            item("Rural employment may benefit", Positive),
        ],
        "Government procurement programs support employment in supported sectors.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("Inflation increases", Negative),
            item("Fiscal burden increases (procurement costs)", Negative),
            item("Surplus management costs increase", Negative),
        ],
        "Price floors create fiscal obligations and inflationary pressure.",
    );

    assemble(PolicyCategory::PriceFloor, consumer, producer, worker, macro_)
}

/// Minimum wage reads labor-market elasticities instead of goods-market ones.
pub(super) fn minimum_wage(input: &PolicyInput) -> PolicyImpactResult {
    let elastic_labor_demand = is_high_elasticity(input.labor_demand_elasticity);
    let high_rate = input.policy_rate > MINIMUM_WAGE_HIGH_RATE;

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item("Low-income consumption increases", Positive),
            item("Purchasing power of workers rises", Positive),
            item("Prices of labor-intensive goods may increase", Negative),
        ],
        "Higher wages boost spending power for low-income workers.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item("Labor costs increase", Negative),
            item(
                "Hiring decreases",
                ImpactLevel::escalated_if(Negative, elastic_labor_demand),
            ),
            item("Automation incentives increase", Neutral),
        ],
        if elastic_labor_demand {
            "Elastic labor demand means significant hiring reductions; expect automation shifts."
        } else {
            "Labor costs rise but hiring impacts are moderate in inelastic markets."
        },
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Wages increase for employed workers", Positive),
            item(
                "Unemployment may increase",
                ImpactLevel::escalated_if(Negative, elastic_labor_demand || high_rate),
            ),
            item("Entry-level opportunities may decrease", Negative),
        ],
        "Higher wages benefit employed workers; some may face job losses or reduced hours.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("Income inequality decreases", Positive),
            item("Inflation increases slightly", Negative),
            item("Consumer spending increases", Positive),
        ],
        "Minimum wage reduces inequality but may cause moderate inflation.",
    );

    assemble(PolicyCategory::PriceMinimumWage, consumer, producer, worker, macro_)
}
