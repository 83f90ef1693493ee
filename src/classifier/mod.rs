//! Impact classifier.
//!
//! Maps a [`PolicyInput`] to a [`PolicyImpactResult`] by selecting one of a
//! few fixed narratives per stakeholder section. Each category has its own
//! rule function; selection is driven by a handful of booleans derived from
//! elasticities, market type and a category-specific rate threshold.
//!
//! Rules are pure: the same input always yields the same narrative.

mod price_control;
mod subsidy;
mod tax;
mod trade;

use crate::impact::{ImpactItem, ImpactLevel, ImpactSection, PolicyImpactResult};
use crate::input::PolicyInput;
use crate::policy::PolicyCategory;

/// A classification rule for one policy category.
pub type RuleFn = fn(&PolicyInput) -> PolicyImpactResult;

/// Dispatch table from category to its rule function.
#[must_use]
pub fn rule_for(category: PolicyCategory) -> RuleFn {
    match category {
        PolicyCategory::TaxIndirect => tax::indirect,
        PolicyCategory::TaxIncome => tax::income,
        PolicyCategory::TaxCorporate => tax::corporate,
        PolicyCategory::TaxTariff => tax::tariff,
        PolicyCategory::SubsidyConsumer => subsidy::consumer,
        PolicyCategory::SubsidyProducer => subsidy::producer,
        PolicyCategory::PriceCeiling => price_control::ceiling,
        PolicyCategory::PriceFloor => price_control::floor,
        PolicyCategory::PriceMinimumWage => price_control::minimum_wage,
        PolicyCategory::TradeExportSubsidy => trade::export_subsidy,
        PolicyCategory::TradeExportRestriction => trade::export_restriction,
    }
}

/// Classifies the impact of `input` across the four stakeholder groups.
///
/// # Examples
///
/// ```
/// use policysim::{classify, ImpactLevel, MarketType, PolicyCategory, PolicyInput};
///
/// let input = PolicyInput::new(PolicyCategory::TaxIndirect, MarketType::Food, 15.0);
/// let result = classify(&input);
/// assert_eq!(result.consumer.items[0].effect, "Prices increase significantly");
/// assert_eq!(result.consumer.items[0].level, ImpactLevel::StrongNegative);
/// ```
#[must_use]
pub fn classify(input: &PolicyInput) -> PolicyImpactResult {
    let result = rule_for(input.policy_category)(input);
    tracing::trace!(
        category = input.policy_category.as_str(),
        consumer = result.consumer.total_score(),
        producer = result.producer.total_score(),
        worker = result.worker.total_score(),
        macro_indicators = result.macro_.total_score(),
        "classified policy"
    );
    result
}

#[inline]
fn item(effect: &str, level: ImpactLevel) -> ImpactItem {
    ImpactItem::new(effect, level)
}

/// Assembles a result with the category's display name.
fn assemble(
    category: PolicyCategory,
    consumer: ImpactSection,
    producer: ImpactSection,
    worker: ImpactSection,
    macro_: ImpactSection,
) -> PolicyImpactResult {
    PolicyImpactResult {
        policy_category: category,
        policy_name: category.display_name().to_string(),
        consumer,
        producer,
        worker,
        macro_,
    }
}
