//! Tax rules: indirect, income, corporate and tariff.

use super::{assemble, item};
use crate::impact::ImpactLevel::{Negative, Neutral, Positive, StrongNegative};
use crate::impact::{ImpactLevel, ImpactSection, PolicyImpactResult, StakeholderRole};
use crate::input::{is_high_elasticity, is_low_elasticity, PolicyInput};
use crate::policy::PolicyCategory;

const INDIRECT_HIGH_RATE: f64 = 15.0;
const INCOME_HIGH_RATE: f64 = 25.0;
const CORPORATE_HIGH_RATE: f64 = 20.0;
const TARIFF_HIGH_RATE: f64 = 20.0;

/// Incidence of an indirect tax follows elasticities: inelastic demand (or an
/// essential good) pushes the burden onto consumers.
pub(super) fn indirect(input: &PolicyInput) -> PolicyImpactResult {
    let low_ed = is_low_elasticity(input.demand_elasticity) || input.market_type.is_essential();
    let high_ed =
        is_high_elasticity(input.demand_elasticity) || input.market_type.is_high_elasticity();
    let low_es = is_low_elasticity(input.supply_elasticity);
    let high_rate = input.policy_rate > INDIRECT_HIGH_RATE;

    let consumer = if low_ed {
        ImpactSection::new(
            StakeholderRole::Consumer,
            vec![
                item("Prices increase significantly", StrongNegative),
                item("Consumption decreases slightly", Negative),
                item("Welfare decreases significantly", StrongNegative),
            ],
            "Essential goods are less elastic; prices rise. Budget-conscious consumers may need to adjust spending.",
        )
    } else {
        ImpactSection::new(
            StakeholderRole::Consumer,
            vec![
                item("Consumption decreases significantly", StrongNegative),
                item("Substitution to alternatives increases", Positive),
                item("Price sensitivity leads to demand reduction", Negative),
            ],
            "High elasticity means consumers respond strongly; consider substitutes or delaying purchases.",
        )
    };

    let producer = if low_es {
        ImpactSection::new(
            StakeholderRole::Producer,
            vec![
                item("Profit margins decrease slightly", Negative),
                item("Output decreases slightly", Negative),
            ],
            "Low supply elasticity means producers absorb some tax burden; margins compressed.",
        )
    } else {
        ImpactSection::new(
            StakeholderRole::Producer,
            vec![
                item("Output decreases more significantly", StrongNegative),
                item("Production cuts likely", Negative),
            ],
            "High supply elasticity leads to production adjustments; expect supply reductions.",
        )
    };

    let severe_job_losses = high_ed || high_rate;
    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Employment decreases", Negative),
            if severe_job_losses {
                item("Stronger job losses in affected sectors", StrongNegative)
            } else {
                item("Moderate employment effects", Negative)
            },
        ],
        "Workers in taxed sectors may face reduced hours or layoffs as producers adjust costs.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("Government revenue increases", Positive),
            item("Inflation increases", Negative),
            item("GDP decreases slightly", Negative),
            item("Employment decreases", Negative),
        ],
        "Tax revenue gains offset by reduced economic activity and higher price levels.",
    );

    assemble(PolicyCategory::TaxIndirect, consumer, producer, worker, macro_)
}

pub(super) fn income(input: &PolicyInput) -> PolicyImpactResult {
    let high_rate = input.policy_rate > INCOME_HIGH_RATE;

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item(
                "Disposable income decreases",
                ImpactLevel::escalated_if(Negative, high_rate),
            ),
            item("Consumption spending decreases", Negative),
            item("Savings may decrease", Negative),
        ],
        "Reduced take-home pay limits consumer spending power; prioritize essential expenditures.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item("Sales decline as consumer spending falls", Negative),
            item("SMEs affected more significantly", StrongNegative),
            item("Demand-driven revenue reduction", Negative),
        ],
        "Lower consumer demand impacts sales; businesses may need to adjust pricing or inventory.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Hiring slows", Negative),
            item("Wage growth decelerates", Negative),
            item("Work incentives may decrease", Negative),
        ],
        "Higher income taxes can reduce labor supply incentives and slow wage negotiations.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("Government revenue increases", Positive),
            item("GDP decreases", Negative),
            item("Inflation neutral or decreases", Neutral),
        ],
        "Fiscal revenue improves but consumption-driven growth slows.",
    );

    assemble(PolicyCategory::TaxIncome, consumer, producer, worker, macro_)
}

pub(super) fn corporate(input: &PolicyInput) -> PolicyImpactResult {
    let high_rate = input.policy_rate > CORPORATE_HIGH_RATE;

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item("Prices increase slightly as costs pass through", Negative),
            item("Product availability may decrease", Negative),
        ],
        "Some corporate tax burden may be passed to consumers through higher prices.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item(
                "Post-tax profits decrease",
                ImpactLevel::escalated_if(Negative, high_rate),
            ),
            item("Investment decreases", Negative),
            item("R&D spending decreases", Negative),
            item("Expansion plans may be delayed", Negative),
        ],
        "Higher corporate taxes reduce retained earnings for reinvestment and growth.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Hiring slows", Negative),
            item("Job security decreases", Negative),
            item("Bonus and benefit cuts possible", Negative),
        ],
        "Reduced profitability may lead to workforce adjustments and slower hiring.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("Government revenue increases", Positive),
            item("GDP decreases", Negative),
            item("Inflation neutral or slightly increases", Neutral),
            item("Business investment declines", Negative),
        ],
        "Revenue gains balanced against reduced business investment and slower growth.",
    );

    assemble(PolicyCategory::TaxCorporate, consumer, producer, worker, macro_)
}

pub(super) fn tariff(input: &PolicyInput) -> PolicyImpactResult {
    let high_rate = input.policy_rate > TARIFF_HIGH_RATE;

    let consumer = ImpactSection::new(
        StakeholderRole::Consumer,
        vec![
            item(
                "Imported goods prices increase",
                ImpactLevel::escalated_if(Negative, high_rate),
            ),
            item("Product choices decrease", Negative),
            item("Quality alternatives may be limited", Negative),
        ],
        "Higher import costs reduce purchasing power for foreign goods; consider domestic alternatives.",
    );

    let producer = ImpactSection::new(
        StakeholderRole::Producer,
        vec![
            item("Domestic firms gain protection", Positive),
            item("Import-reliant firms face higher input costs", Negative),
            item("Competitive pressure decreases", Positive),
        ],
        "Domestic producers benefit from reduced foreign competition but may face higher input costs.",
    );

    let worker = ImpactSection::new(
        StakeholderRole::Worker,
        vec![
            item("Employment increases in protected sectors", Positive),
            item("Jobs may shift from import-dependent to domestic industries", Neutral),
        ],
        "Protected industries may expand hiring as domestic production increases.",
    );

    let macro_ = ImpactSection::new(
        StakeholderRole::Macro,
        vec![
            item("Government revenue increases", Positive),
            item("Inflation increases", Negative),
            item("Trade deficit decreases", Positive),
            item("Potential for trade retaliation", Negative),
        ],
        "Tariff revenue and trade balance improve but at cost of higher domestic prices.",
    );

    assemble(PolicyCategory::TaxTariff, consumer, producer, worker, macro_)
}
