//! Input entities: agents and customers.

/// Identifier of a Customer Success agent.
pub type AgentId = u32;

/// Identifier of a customer.
pub type CustomerId = u32;

/// Capacity score of an agent, or requirement score of a customer.
pub type Score = u32;

/// A Customer Success agent.
///
/// An agent can serve any customer whose score does not exceed its own.
/// Agent scores must be pairwise distinct within one balancing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Unique agent id.
    pub id: AgentId,
    /// Capacity score.
    pub score: Score,
}

impl Agent {
    /// Creates an agent.
    pub fn new(id: AgentId, score: Score) -> Self {
        Self { id, score }
    }

    /// Builds agents from a list of scores, numbering ids from 1.
    ///
    /// ```
    /// use cs_balancing::Agent;
    ///
    /// let agents = Agent::numbered(&[60, 20]);
    /// assert_eq!(agents, vec![Agent::new(1, 60), Agent::new(2, 20)]);
    /// ```
    pub fn numbered(scores: &[Score]) -> Vec<Self> {
        scores
            .iter()
            .zip(1..)
            .map(|(&score, id)| Self::new(id, score))
            .collect()
    }
}

/// A customer waiting to be assigned to an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    /// Customer id.
    pub id: CustomerId,
    /// Requirement score. Scores may repeat across customers.
    pub score: Score,
}

impl Customer {
    /// Creates a customer.
    pub fn new(id: CustomerId, score: Score) -> Self {
        Self { id, score }
    }

    /// Builds customers from a list of scores, numbering ids from 1.
    pub fn numbered(scores: &[Score]) -> Vec<Self> {
        scores
            .iter()
            .zip(1..)
            .map(|(&score, id)| Self::new(id, score))
            .collect()
    }
}
