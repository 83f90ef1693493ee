//! Suggested follow-up questions for a simulation.

use serde::Serialize;

use crate::policy::PolicyType;
use crate::simulation::SimulationResult;

/// Number of questions offered per simulation.
pub const QUICK_QUESTION_COUNT: usize = 4;

/// A canned question: short button label plus the full prompt sent to chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickQuestion {
    /// Button label.
    pub label: &'static str,
    /// Message sent to the advisor when clicked.
    pub prompt: &'static str,
}

const fn q(label: &'static str, prompt: &'static str) -> QuickQuestion {
    QuickQuestion { label, prompt }
}

const TAX_POOL: [QuickQuestion; 8] = [
    q("Why this outcome?", "Why did the results change in this direction?"),
    q("Consumer impact?", "How are consumers affected by this tax policy?"),
    q("Producer burden?", "Who bears more of the tax burden - consumers or producers?"),
    q("Revenue gained?", "Is the government revenue gain worth the economic cost?"),
    q("If rate doubles?", "What would happen if we doubled the tax rate?"),
    q("Elasticity effect?", "How does elasticity affect who bears the tax burden?"),
    q("Employment impact?", "Why does employment change with this tax?"),
    q(
        "Alternative policies?",
        "What alternative policies could achieve similar revenue without as much economic impact?",
    ),
];

const SUBSIDY_POOL: [QuickQuestion; 8] = [
    q("Who benefits?", "Who benefits most from this subsidy - consumers or producers?"),
    q("Cost to govt?", "What is the government cost of providing this subsidy?"),
    q("Market distortion?", "Does this subsidy cause market distortions?"),
    q("Consumer savings?", "How much do consumers save from this subsidy?"),
    q("If subsidy ends?", "What happens to prices and quantity if the subsidy is removed?"),
    q("Employment gain?", "Why does employment increase with producer subsidies?"),
    q("Efficiency loss?", "Is there economic efficiency loss from this subsidy?"),
    q("Long-term effects?", "What are the long-term effects of subsidizing this good?"),
];

const PRICE_CONTROL_POOL: [QuickQuestion; 8] = [
    q("Shortage/surplus?", "Does this price control create shortages or surpluses?"),
    q("Black market?", "Could black markets emerge from this price control?"),
    q("Quality impact?", "How does price control affect product quality?"),
    q("Producer response?", "How do producers respond to controlled prices?"),
    q("Binding control?", "Is this price control binding on the market?"),
    q("Consumer welfare?", "Does this price control improve overall consumer welfare?"),
    q("If control removed?", "What would prices and quantities be without this control?"),
    q("Wage dynamics?", "How does minimum wage affect different skill levels?"),
];

const TRADE_POOL: [QuickQuestion; 8] = [
    q("Trade effect?", "How does this policy affect international trade?"),
    q("Domestic impact?", "How are domestic producers and consumers affected differently?"),
    q("Retaliation risk?", "Could other countries retaliate against this trade policy?"),
    q("Price impact?", "Why do import/export prices change with this policy?"),
    q("Consumer choice?", "How does this affect consumer choice of goods?"),
    q("Export market?", "Does this policy help domestic exporters?"),
    q("GDP effect?", "Why does this trade policy affect overall GDP?"),
    q("Comparative advantage?", "Does this policy distort comparative advantage?"),
];

/// Full question pool for a policy family.
#[must_use]
pub const fn pool(family: PolicyType) -> &'static [QuickQuestion] {
    match family {
        PolicyType::Tax => &TAX_POOL,
        PolicyType::Subsidy => &SUBSIDY_POOL,
        PolicyType::PriceControl => &PRICE_CONTROL_POOL,
        PolicyType::Trade => &TRADE_POOL,
    }
}

/// Picks four questions for a simulation.
///
/// The pool follows the result's category family, so an export subsidy gets
/// the trade questions rather than the subsidy ones even though its name
/// contains "subsidy". The selection is a
/// Fisher-Yates shuffle driven by a blake3 stream keyed on the simulation id,
/// so the same simulation always gets the same questions.
#[must_use]
pub fn quick_questions(result: &SimulationResult) -> Vec<QuickQuestion> {
    let mut questions = pool(result.policy_category.family()).to_vec();

    let mut hasher = blake3::Hasher::new();
    hasher.update(result.id.as_uuid().as_bytes());
    let mut stream = hasher.finalize_xof();

    for i in (1..questions.len()).rev() {
        let mut word = [0u8; 8];
        stream.fill(&mut word);
        let bound = (i + 1) as u64;
        #[allow(clippy::cast_possible_truncation)]
        let j = (u64::from_le_bytes(word) % bound) as usize;
        questions.swap(i, j);
    }

    questions.truncate(QUICK_QUESTION_COUNT);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{run, RawParameters, SimulationId};

    #[test]
    fn returns_four_from_family_pool() {
        for family in PolicyType::ALL {
            let result = run(family, &RawParameters::new());
            let picked = quick_questions(&result);
            assert_eq!(picked.len(), QUICK_QUESTION_COUNT);
            assert!(picked.iter().all(|q| pool(family).contains(q)));
        }
    }

    #[test]
    fn no_duplicates() {
        let result = run(PolicyType::Tax, &RawParameters::new());
        let picked = quick_questions(&result);
        for (i, a) in picked.iter().enumerate() {
            assert!(picked[i + 1..].iter().all(|b| b.label != a.label));
        }
    }

    #[test]
    fn deterministic_per_simulation_id() {
        let result = run(PolicyType::PriceControl, &RawParameters::new());
        assert_eq!(quick_questions(&result), quick_questions(&result));

        // A later run restored under the same id gets the same pick.
        let mut rerun = run(PolicyType::PriceControl, &RawParameters::new());
        assert_ne!(rerun.id, result.id);
        rerun.id = SimulationId::from_uuid(*result.id.as_uuid());
        assert_eq!(quick_questions(&rerun), quick_questions(&result));
    }

    #[test]
    fn export_subsidy_uses_trade_pool() {
        let mut params = RawParameters::new();
        params.insert("tradeType".into(), "export_subsidy".into());
        let result = run(PolicyType::Trade, &params);
        assert!(quick_questions(&result)
            .iter()
            .all(|q| pool(PolicyType::Trade).contains(q)));
    }

    #[test]
    fn pools_have_eight_questions() {
        for family in PolicyType::ALL {
            assert_eq!(pool(family).len(), 8);
        }
    }
}
