//! Qualitative impact types.
//!
//! A [`PolicyImpactResult`] is the narrative half of a simulation: four
//! stakeholder sections of labeled effects. [`ImpactLevel::score`] is the only
//! bridge to the numeric half.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::policy::PolicyCategory;

/// Five-point qualitative outcome scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    /// Large loss.
    StrongNegative,
    /// Loss.
    Negative,
    /// No clear effect.
    Neutral,
    /// Gain.
    Positive,
    /// Large gain.
    StrongPositive,
}

impl ImpactLevel {
    /// Numeric score used by the projector, in `-2..=2`.
    #[must_use]
    pub const fn score(self) -> i32 {
        match self {
            Self::StrongNegative => -2,
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
            Self::StrongPositive => 2,
        }
    }

    /// Picks the strong variant of `base` when `escalate` holds.
    ///
    /// Neutral has no strong form and is returned unchanged.
    #[must_use]
    pub const fn escalated_if(base: Self, escalate: bool) -> Self {
        if !escalate {
            return base;
        }
        match base {
            Self::Negative | Self::StrongNegative => Self::StrongNegative,
            Self::Positive | Self::StrongPositive => Self::StrongPositive,
            Self::Neutral => Self::Neutral,
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrongNegative => write!(f, "strong_negative"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
            Self::Positive => write!(f, "positive"),
            Self::StrongPositive => write!(f, "strong_positive"),
        }
    }
}

/// One labeled effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactItem {
    /// Narrative text; also the input to keyword scoring.
    pub effect: String,
    /// Qualitative magnitude.
    pub level: ImpactLevel,
}

impl ImpactItem {
    /// Creates an item.
    #[must_use]
    pub fn new(effect: impl Into<String>, level: ImpactLevel) -> Self {
        Self {
            effect: effect.into(),
            level,
        }
    }
}

/// Stakeholder group addressed by a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderRole {
    /// Households buying the good.
    Consumer,
    /// Firms selling the good.
    Producer,
    /// Employees in affected sectors.
    Worker,
    /// Economy-wide indicators.
    Macro,
}

impl StakeholderRole {
    /// Roles in display order.
    pub const ALL: [Self; 4] = [Self::Consumer, Self::Producer, Self::Worker, Self::Macro];

    /// Section heading for this role.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Consumer => "Consumer Impact",
            Self::Producer => "Producer Impact",
            Self::Worker => "Worker Impact",
            Self::Macro => "Macro Indicators",
        }
    }
}

/// Narrative for one stakeholder group.
///
/// Item order matters for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactSection {
    /// Heading, fixed per role.
    pub title: String,
    /// Effects in display order.
    pub items: Vec<ImpactItem>,
    /// Advice shown under the items.
    pub recommendation: String,
}

impl ImpactSection {
    /// Builds a section titled for `role`.
    #[must_use]
    pub fn new(
        role: StakeholderRole,
        items: Vec<ImpactItem>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            title: role.title().to_string(),
            items,
            recommendation: recommendation.into(),
        }
    }

    /// Sum of item scores in this section.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.items.iter().map(|i| i.level.score()).sum()
    }
}

/// Full qualitative classification of one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyImpactResult {
    /// Category that produced this narrative.
    pub policy_category: PolicyCategory,
    /// Human-readable category name.
    pub policy_name: String,
    /// Consumer section.
    pub consumer: ImpactSection,
    /// Producer section.
    pub producer: ImpactSection,
    /// Worker section.
    pub worker: ImpactSection,
    /// Macro indicators section.
    #[serde(rename = "macro")]
    pub macro_: ImpactSection,
}

impl PolicyImpactResult {
    /// Returns the section for `role`.
    #[must_use]
    pub const fn section(&self, role: StakeholderRole) -> &ImpactSection {
        match role {
            StakeholderRole::Consumer => &self.consumer,
            StakeholderRole::Producer => &self.producer,
            StakeholderRole::Worker => &self.worker,
            StakeholderRole::Macro => &self.macro_,
        }
    }

    /// All four sections in fixed role order.
    pub fn sections(&self) -> impl Iterator<Item = (StakeholderRole, &ImpactSection)> {
        StakeholderRole::ALL
            .into_iter()
            .map(move |role| (role, self.section(role)))
    }
}
