//! Customer Success balancing.
//!
//! Assigns every customer to the lowest-scoring available Customer Success
//! agent whose score is at least the customer's score, then reports the
//! agent serving the most customers.
//!
//! The work is split into three sequential steps:
//!
//! - **Validation** ([`validate`]): structural and numeric checks with a
//!   typed [`ValidationError`] per violated constraint.
//! - **Assignment** ([`assign`]): greedy lowest-capable assignment over
//!   score-sorted copies of the input. Agents marked away are skipped and
//!   customers nobody can serve stay unassigned.
//! - **Tally** ([`pick_winner`]): the busiest agent, or `0` when the
//!   maximum is shared.
//!
//! [`customer_success_balancing`] runs all three with default settings;
//! [`Balancer`] exposes the full [`BalancingResult`] and configuration.
//!
//! # Features
//!
//! - `parallel`: agent lookup over rayon when
//!   [`BalancerConfig::parallel`] is set.
//! - `serde`: `Serialize`/`Deserialize` for inputs and results.

pub mod assign;
pub mod config;
pub mod error;
pub mod runner;
pub mod tally;
pub mod types;
pub mod validate;

pub use assign::{assign, AgentLoad, Assignment};
pub use config::{BalancerConfig, Limits, ScanStrategy};
pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use runner::{customer_success_balancing, Balancer, BalancingResult};
pub use tally::{pick_winner, Tally, NO_WINNER};
pub use types::{Agent, AgentId, Customer, CustomerId, Score};
pub use validate::validate;
