//! Policy families and categories.
//!
//! A [`PolicyCategory`] is one of eleven atomic instruments and fully
//! determines which classification rule runs. Categories group into four
//! [`PolicyType`] families, which is how the input form presents them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Policy family, as chosen in the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    /// Taxes and duties.
    #[default]
    Tax,
    /// Consumer and producer subsidies.
    Subsidy,
    /// Price ceilings, floors and minimum wage.
    PriceControl,
    /// Export measures.
    Trade,
}

impl PolicyType {
    /// All families, in display order.
    pub const ALL: [Self; 4] = [Self::Tax, Self::Subsidy, Self::PriceControl, Self::Trade];

    /// Wire name of this family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tax => "tax",
            Self::Subsidy => "subsidy",
            Self::PriceControl => "price_control",
            Self::Trade => "trade",
        }
    }

    /// Parameter key holding the subtype selector for this family.
    #[must_use]
    pub const fn subtype_key(self) -> &'static str {
        match self {
            Self::Tax => "taxType",
            Self::Subsidy => "subsidyType",
            Self::PriceControl => "controlType",
            Self::Trade => "tradeType",
        }
    }

    /// Category used when the subtype is missing or unrecognized.
    #[must_use]
    pub const fn default_category(self) -> PolicyCategory {
        match self {
            Self::Tax => PolicyCategory::TaxIndirect,
            Self::Subsidy => PolicyCategory::SubsidyConsumer,
            Self::PriceControl => PolicyCategory::PriceCeiling,
            Self::Trade => PolicyCategory::TradeExportSubsidy,
        }
    }

    /// Categories belonging to this family.
    #[must_use]
    pub fn categories(self) -> Vec<PolicyCategory> {
        PolicyCategory::ALL
            .into_iter()
            .filter(|c| c.family() == self)
            .collect()
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPolicyType {
                value: s.to_string(),
            })
    }
}

/// One of the eleven policy instruments.
///
/// Deserialization is lenient: an unrecognized name becomes
/// [`PolicyCategory::TaxIndirect`].
///
/// # Examples
///
/// ```
/// use policysim::{PolicyCategory, PolicyType};
///
/// let c = PolicyCategory::from_family_subtype(PolicyType::Tax, Some("income"));
/// assert_eq!(c, PolicyCategory::TaxIncome);
/// assert_eq!(c.as_str(), "tax_income");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyCategory {
    /// GST, excise or carbon tax.
    #[default]
    TaxIndirect,
    /// Personal income tax.
    TaxIncome,
    /// Corporate profits tax.
    TaxCorporate,
    /// Import duties.
    TaxTariff,
    /// Subsidy paid to buyers.
    SubsidyConsumer,
    /// Subsidy paid to producers.
    SubsidyProducer,
    /// Maximum legal price.
    PriceCeiling,
    /// Minimum price or support price.
    PriceFloor,
    /// Minimum wage.
    PriceMinimumWage,
    /// Export subsidy.
    TradeExportSubsidy,
    /// Export restrictions or quotas.
    TradeExportRestriction,
}

impl PolicyCategory {
    /// All categories, grouped by family.
    pub const ALL: [Self; 11] = [
        Self::TaxIndirect,
        Self::TaxIncome,
        Self::TaxCorporate,
        Self::TaxTariff,
        Self::SubsidyConsumer,
        Self::SubsidyProducer,
        Self::PriceCeiling,
        Self::PriceFloor,
        Self::PriceMinimumWage,
        Self::TradeExportSubsidy,
        Self::TradeExportRestriction,
    ];

    /// Wire name of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaxIndirect => "tax_indirect",
            Self::TaxIncome => "tax_income",
            Self::TaxCorporate => "tax_corporate",
            Self::TaxTariff => "tax_tariff",
            Self::SubsidyConsumer => "subsidy_consumer",
            Self::SubsidyProducer => "subsidy_producer",
            Self::PriceCeiling => "price_ceiling",
            Self::PriceFloor => "price_floor",
            Self::PriceMinimumWage => "price_minimum_wage",
            Self::TradeExportSubsidy => "trade_export_subsidy",
            Self::TradeExportRestriction => "trade_export_restriction",
        }
    }

    /// Human-readable policy name shown above the impact narrative.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TaxIndirect => "Indirect Tax (GST / Excise / Carbon Tax)",
            Self::TaxIncome => "Income Tax",
            Self::TaxCorporate => "Corporate Tax",
            Self::TaxTariff => "Import Duties / Tariffs",
            Self::SubsidyConsumer => "Consumer Subsidy",
            Self::SubsidyProducer => "Producer Subsidy",
            Self::PriceCeiling => "Price Ceiling",
            Self::PriceFloor => "Price Floor / MSP",
            Self::PriceMinimumWage => "Minimum Wage",
            Self::TradeExportSubsidy => "Export Subsidy",
            Self::TradeExportRestriction => "Export Restrictions / Quotas",
        }
    }

    /// Family this category belongs to.
    #[must_use]
    pub const fn family(self) -> PolicyType {
        match self {
            Self::TaxIndirect | Self::TaxIncome | Self::TaxCorporate | Self::TaxTariff => {
                PolicyType::Tax
            }
            Self::SubsidyConsumer | Self::SubsidyProducer => PolicyType::Subsidy,
            Self::PriceCeiling | Self::PriceFloor | Self::PriceMinimumWage => {
                PolicyType::PriceControl
            }
            Self::TradeExportSubsidy | Self::TradeExportRestriction => PolicyType::Trade,
        }
    }

    /// Subtype selector value for this category within its family.
    #[must_use]
    pub const fn subtype(self) -> &'static str {
        match self {
            Self::TaxIndirect => "indirect",
            Self::TaxIncome => "income",
            Self::TaxCorporate => "corporate",
            Self::TaxTariff => "tariff",
            Self::SubsidyConsumer => "consumer",
            Self::SubsidyProducer => "producer",
            Self::PriceCeiling => "ceiling",
            Self::PriceFloor => "floor",
            Self::PriceMinimumWage => "minimum_wage",
            Self::TradeExportSubsidy => "export_subsidy",
            Self::TradeExportRestriction => "export_restriction",
        }
    }

    /// Resolves a family + subtype pair, e.g. `tax` + `income`.
    ///
    /// A missing or unrecognized subtype resolves to the family default.
    #[must_use]
    pub fn from_family_subtype(family: PolicyType, subtype: Option<&str>) -> Self {
        let found = subtype.and_then(|s| {
            Self::ALL
                .into_iter()
                .find(|c| c.family() == family && c.subtype() == s)
        });
        match (found, subtype) {
            (Some(category), _) => category,
            (None, Some(s)) => {
                let fallback = family.default_category();
                tracing::warn!(
                    family = family.as_str(),
                    subtype = s,
                    fallback = fallback.as_str(),
                    "unrecognized policy subtype"
                );
                fallback
            }
            (None, None) => family.default_category(),
        }
    }

    /// Parses a category name, falling back to [`PolicyCategory::TaxIndirect`].
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(
                category = value,
                fallback = "tax_indirect",
                "unrecognized policy category"
            );
            Self::default()
        })
    }

    /// Returns true for the four tax instruments.
    #[must_use]
    pub const fn is_tax(self) -> bool {
        matches!(self.family(), PolicyType::Tax)
    }
}

impl fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPolicyCategory {
                value: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for PolicyCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}
