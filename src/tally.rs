//! Winner selection over an [`Assignment`].
//!
//! [`Tally`] is a small state machine fed with `(agent, count)` pairs in
//! ascending agent-score order:
//!
//! - a count above the current maximum makes that agent the sole leader;
//! - a count equal to the maximum resets the leader to `0` (a tie);
//! - a lower count changes nothing.
//!
//! A tie stays in place until a strictly higher count shows up, and a later
//! tie at that higher count resets the leader again.

use crate::assign::Assignment;
use crate::types::AgentId;

/// Leader id reported when there is no unique winner.
pub const NO_WINNER: AgentId = 0;

/// Running maximum of customers per agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    leader: AgentId,
    max: Option<usize>,
}

impl Tally {
    /// Creates an empty tally. Its leader is [`NO_WINNER`].
    pub fn new() -> Self {
        Self {
            leader: NO_WINNER,
            max: None,
        }
    }

    /// Feeds one agent's customer count.
    pub fn observe(&mut self, agent: AgentId, count: usize) {
        match self.max {
            Some(max) if count < max => {}
            Some(max) if count == max => {
                log::trace!("tally: agent {agent} ties leader at {count} customers");
                self.leader = NO_WINNER;
            }
            _ => {
                self.leader = agent;
                self.max = Some(count);
            }
        }
    }

    /// Current leader, or [`NO_WINNER`] while tied or empty.
    pub fn leader(&self) -> AgentId {
        self.leader
    }

    /// Highest count seen so far.
    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the agent serving the most customers, or `0` on a tie or when
/// there are no available agents.
///
/// ```
/// use cs_balancing::{assign, pick_winner, Agent, Customer, ScanStrategy};
///
/// let agents = Agent::numbered(&[100, 99, 88, 3, 4, 5]);
/// let customers = Customer::numbered(&[10, 10, 10, 20, 20, 30, 30, 30, 20, 60]);
/// let assignment = assign(&agents, &customers, &[4, 5, 6], ScanStrategy::default());
/// assert_eq!(pick_winner(&assignment), 3);
/// ```
pub fn pick_winner(assignment: &Assignment) -> AgentId {
    let mut tally = Tally::new();
    for (agent, count) in assignment.counts() {
        tally.observe(agent, count);
    }
    tally.leader()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pairs: &[(AgentId, usize)]) -> AgentId {
        let mut tally = Tally::new();
        for &(agent, count) in pairs {
            tally.observe(agent, count);
        }
        tally.leader()
    }

    #[test]
    fn test_empty_has_no_winner() {
        assert_eq!(run(&[]), NO_WINNER);
        assert_eq!(Tally::default().max(), None);
    }

    #[test]
    fn test_single_agent_with_zero_wins() {
        assert_eq!(run(&[(7, 0)]), 7);
    }

    #[test]
    fn test_all_zero_ties() {
        assert_eq!(run(&[(4, 0), (5, 0), (6, 0)]), NO_WINNER);
    }

    #[test]
    fn test_strict_max_wins() {
        assert_eq!(run(&[(1, 2), (2, 5), (3, 1)]), 2);
    }

    #[test]
    fn test_tie_cleared_by_higher_count() {
        assert_eq!(run(&[(1, 3), (2, 3), (3, 4)]), 3);
    }

    #[test]
    fn test_lower_count_after_tie_keeps_tie() {
        let mut tally = Tally::new();
        tally.observe(1, 3);
        tally.observe(2, 3);
        tally.observe(3, 1);
        assert_eq!(tally.leader(), NO_WINNER);
        assert_eq!(tally.max(), Some(3));
    }

    #[test]
    fn test_cascading_ties() {
        // Tie at 2, cleared at 4, tied again at 4.
        assert_eq!(run(&[(1, 2), (2, 2), (3, 4), (4, 4)]), NO_WINNER);
        // ...and cleared once more.
        assert_eq!(run(&[(1, 2), (2, 2), (3, 4), (4, 4), (5, 6)]), 5);
    }
}
