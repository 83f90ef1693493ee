//! Market types.
//!
//! The market a policy applies to carries a default elasticity profile:
//! fuel and food are essentials (inelastic demand), electronics are highly
//! elastic. Agriculture has no default tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The market a policy targets.
///
/// # Examples
///
/// ```
/// use policysim::MarketType;
///
/// assert!(MarketType::Food.is_essential());
/// assert!(MarketType::Electronics.is_high_elasticity());
/// assert_eq!(MarketType::parse_lenient("housing"), MarketType::Fuel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketType {
    /// Fuel (essential).
    #[default]
    Fuel,
    /// Food (essential).
    Food,
    /// Consumer electronics (elastic demand).
    Electronics,
    /// Agricultural produce.
    Agriculture,
}

impl MarketType {
    /// All market types, in display order.
    pub const ALL: [Self; 4] = [Self::Fuel, Self::Food, Self::Electronics, Self::Agriculture];

    /// Wire name of this market.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fuel => "fuel",
            Self::Food => "food",
            Self::Electronics => "electronics",
            Self::Agriculture => "agriculture",
        }
    }

    /// Essential goods have inelastic demand regardless of the supplied Ed.
    #[must_use]
    pub const fn is_essential(self) -> bool {
        matches!(self, Self::Fuel | Self::Food)
    }

    /// Goods whose demand is elastic by default.
    #[must_use]
    pub const fn is_high_elasticity(self) -> bool {
        matches!(self, Self::Electronics)
    }

    /// Parses a market name, falling back to [`MarketType::Fuel`].
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(market = value, fallback = "fuel", "unrecognized market type");
            Self::default()
        })
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownMarketType {
                value: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for MarketType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}
