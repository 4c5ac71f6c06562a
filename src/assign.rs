//! Greedy lowest-capable assignment.
//!
//! Available agents are ordered by ascending score and customers by
//! ascending score (stable, so equal scores keep input order). Each
//! customer goes to the first agent whose score is at least its own.
//! Customers no agent can serve are left unassigned.

use crate::config::ScanStrategy;
use crate::types::{Agent, AgentId, Customer, CustomerId, Score};
use std::collections::HashSet;

/// One available agent and the customers assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentLoad {
    /// The agent.
    pub agent: Agent,
    /// Assigned customer ids, in ascending customer score.
    pub customers: Vec<CustomerId>,
}

/// Result of the assignment step.
///
/// Loads are ordered by ascending agent score and include every available
/// agent, even those with no customers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    loads: Vec<AgentLoad>,
    unassigned: Vec<CustomerId>,
}

impl Assignment {
    /// Per-agent loads in ascending agent score.
    pub fn loads(&self) -> &[AgentLoad] {
        &self.loads
    }

    /// Customers assigned to `agent`, or `None` if the agent was not available.
    pub fn customers_of(&self, agent: AgentId) -> Option<&[CustomerId]> {
        self.loads
            .iter()
            .find(|load| load.agent.id == agent)
            .map(|load| load.customers.as_slice())
    }

    /// Customers whose score exceeds every available agent's score.
    pub fn unassigned(&self) -> &[CustomerId] {
        &self.unassigned
    }

    /// Number of available agents.
    pub fn agent_count(&self) -> usize {
        self.loads.len()
    }

    /// Total number of assigned customers.
    pub fn assigned_count(&self) -> usize {
        self.loads.iter().map(|load| load.customers.len()).sum()
    }

    /// `(agent id, customer count)` pairs in ascending agent score.
    pub fn counts(&self) -> impl Iterator<Item = (AgentId, usize)> + '_ {
        self.loads
            .iter()
            .map(|load| (load.agent.id, load.customers.len()))
    }
}

/// Assigns customers to available agents.
///
/// Agents whose id appears in `away` are skipped. Inputs are not modified.
///
/// # Examples
///
/// ```
/// use cs_balancing::{assign, Agent, Customer, ScanStrategy};
///
/// let agents = Agent::numbered(&[60, 20, 95, 75]);
/// let customers = Customer::numbered(&[90, 20, 70, 40, 60, 10]);
/// let assignment = assign(&agents, &customers, &[2, 4], ScanStrategy::Linear);
///
/// assert_eq!(assignment.customers_of(1), Some(&[6, 2, 4, 5][..]));
/// assert_eq!(assignment.customers_of(3), Some(&[3, 1][..]));
/// assert_eq!(assignment.customers_of(2), None);
/// ```
pub fn assign(
    agents: &[Agent],
    customers: &[Customer],
    away: &[AgentId],
    strategy: ScanStrategy,
) -> Assignment {
    assign_with(agents, customers, away, strategy, false)
}

pub(crate) fn assign_with(
    agents: &[Agent],
    customers: &[Customer],
    away: &[AgentId],
    strategy: ScanStrategy,
    parallel: bool,
) -> Assignment {
    let away: HashSet<AgentId> = away.iter().copied().collect();

    let mut available: Vec<Agent> = agents
        .iter()
        .filter(|agent| !away.contains(&agent.id))
        .copied()
        .collect();
    available.sort_by_key(|agent| agent.score);

    let mut order: Vec<usize> = (0..customers.len()).collect();
    order.sort_by_key(|&i| customers[i].score);

    let slots = lookup_slots(&available, customers, &order, strategy, parallel);

    let mut loads: Vec<AgentLoad> = available
        .iter()
        .map(|&agent| AgentLoad {
            agent,
            customers: Vec::new(),
        })
        .collect();
    let mut unassigned = Vec::new();

    for (&i, slot) in order.iter().zip(slots) {
        let id = customers[i].id;
        match slot {
            Some(s) => loads[s].customers.push(id),
            None => unassigned.push(id),
        }
    }

    Assignment { loads, unassigned }
}

/// Index of the lowest-scoring agent in `available` (sorted by score) whose
/// score is at least `score`.
fn find_agent(available: &[Agent], score: Score, strategy: ScanStrategy) -> Option<usize> {
    match strategy {
        ScanStrategy::Linear => available.iter().position(|agent| agent.score >= score),
        ScanStrategy::BinarySearch => {
            let idx = available.partition_point(|agent| agent.score < score);
            (idx < available.len()).then_some(idx)
        }
    }
}

/// Agent slot for every customer, in `order`.
fn lookup_slots(
    available: &[Agent],
    customers: &[Customer],
    order: &[usize],
    strategy: ScanStrategy,
    parallel: bool,
) -> Vec<Option<usize>> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return order
                .par_iter()
                .map(|&i| find_agent(available, customers[i].score, strategy))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    order
        .iter()
        .map(|&i| find_agent(available, customers[i].score, strategy))
        .collect()
}
