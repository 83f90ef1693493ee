//! # policysim - Economic Policy Impact Engine
//!
//! policysim evaluates a proposed economic policy (a tax, subsidy, price
//! control or trade measure) applied to a market and explains who gains and
//! who loses. It is a teaching tool: every result is produced by fixed rules,
//! so the same input always yields the same narrative and the same numbers.
//!
//! ## Pipeline
//!
//! - **Classifier**: maps a [`PolicyInput`] to a four-section stakeholder
//!   narrative ([`PolicyImpactResult`])
//! - **Projector**: turns the narrative into five scalar deltas ([`ImpactDeltas`])
//! - **Synthesizer**: ramps the deltas into a 12-period series and draws
//!   illustrative supply/demand curves
//! - **Orchestrator**: coerces raw form parameters and assembles a
//!   [`SimulationResult`]
//!
//! The [`chat`] module carries the conversation and stream-decoding pieces
//! used by the advisor sidebar; the HTTP client lives behind the `relay`
//! feature.
//!
//! ## Usage
//!
//! ```rust
//! use policysim::{run, ParamValue, PolicyCategory, PolicyType, RawParameters};
//!
//! let mut params = RawParameters::new();
//! params.insert("taxType".into(), ParamValue::from("indirect"));
//! params.insert("market".into(), ParamValue::from("food"));
//! params.insert("rate".into(), ParamValue::from(20.0));
//!
//! let result = run(PolicyType::Tax, &params);
//! assert_eq!(result.policy_category, PolicyCategory::TaxIndirect);
//! assert!(result.outputs.gdp_change < 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Engine
pub mod classifier;
pub mod impact;
pub mod input;
pub mod market;
pub mod policy;
pub mod projection;
pub mod series;
pub mod simulation;

// Advisor chat
pub mod chat;

pub mod error;

pub use classifier::classify;
pub use error::{PolicySimError, PolicySimResult, RelayError, ValidationError};
pub use impact::{ImpactItem, ImpactLevel, ImpactSection, PolicyImpactResult, StakeholderRole};
pub use input::{PolicyInput, PolicyInputBuilder};
pub use market::MarketType;
pub use policy::{PolicyCategory, PolicyType};
pub use projection::{project, ImpactDeltas, ImpactScores};
pub use series::{CurveSet, DataPoint, TimeSeriesPoint};
pub use simulation::{
    coerce_inputs, run, simulate, ParamValue, RawParameters, SimulationId, SimulationOutput,
    SimulationResult,
};
