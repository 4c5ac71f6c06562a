//! Validation, assignment and tally as one pipeline.
//!
//! [`Balancer`] runs the three steps in order and stops at the first
//! validation error, before any assignment is computed.

use crate::assign::{assign_with, Assignment};
use crate::config::BalancerConfig;
use crate::error::ValidationResult;
use crate::tally::{pick_winner, NO_WINNER};
use crate::types::{Agent, AgentId, Customer};
use crate::validate::validate;

/// Outcome of a balancing run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalancingResult {
    /// Customers per available agent, in ascending agent score.
    pub assignment: Assignment,
    /// Agent serving the most customers, `0` on a tie or with no agents.
    pub winner: AgentId,
}

impl BalancingResult {
    /// The winner, or `None` when there is no unique winner.
    pub fn winner_id(&self) -> Option<AgentId> {
        (self.winner != NO_WINNER).then_some(self.winner)
    }
}

/// Runs a full balancing pass with a given configuration.
///
/// # Usage
///
/// ```
/// use cs_balancing::{Agent, Balancer, BalancerConfig, Customer, ScanStrategy};
///
/// let balancer = Balancer::new(BalancerConfig::default().with_strategy(ScanStrategy::Linear));
/// let agents = Agent::numbered(&[60, 20, 95, 75]);
/// let customers = Customer::numbered(&[90, 20, 70, 40, 60, 10]);
///
/// let result = balancer.run(&agents, &customers, &[2, 4]).unwrap();
/// assert_eq!(result.winner_id(), Some(1));
/// assert!(result.assignment.unassigned().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    config: BalancerConfig,
}

impl Balancer {
    /// Creates a balancer.
    pub fn new(config: BalancerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    /// Validates the input, assigns customers and picks the winner.
    pub fn run(
        &self,
        agents: &[Agent],
        customers: &[Customer],
        away: &[AgentId],
    ) -> ValidationResult<BalancingResult> {
        if let Err(err) = validate(agents, customers, away, &self.config.limits) {
            log::debug!("balancing: input rejected ({}): {err}", err.kind());
            return Err(err);
        }

        let assignment = assign_with(
            agents,
            customers,
            away,
            self.config.strategy,
            self.config.parallel,
        );
        let winner = pick_winner(&assignment);

        log::debug!(
            "balancing: {} available agents, {} assigned, {} unassigned, winner={winner}",
            assignment.agent_count(),
            assignment.assigned_count(),
            assignment.unassigned().len(),
        );

        Ok(BalancingResult { assignment, winner })
    }
}

/// Returns the id of the agent serving the most customers.
///
/// Uses the default [`Limits`](crate::Limits) and scan strategy. Returns
/// `Ok(0)` when several agents tie for the maximum or no agent is available.
///
/// ```
/// use cs_balancing::{customer_success_balancing, Agent, Customer};
///
/// let agents = Agent::numbered(&[11, 21, 31, 3, 4, 5]);
/// let customers = Customer::numbered(&[10, 10, 10, 20, 20, 30, 30, 30, 20, 60]);
/// assert_eq!(customer_success_balancing(&agents, &customers, &[]), Ok(0));
/// ```
pub fn customer_success_balancing(
    agents: &[Agent],
    customers: &[Customer],
    away: &[AgentId],
) -> ValidationResult<AgentId> {
    Balancer::default()
        .run(agents, customers, away)
        .map(|result| result.winner)
}
