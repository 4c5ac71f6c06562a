//! Balancing configuration.
//!
//! [`Limits`] holds the per-field ceilings enforced by the validator and
//! [`BalancerConfig`] bundles them with the assignment scan options.

/// Exclusive upper bounds applied during validation.
///
/// The lower bound of every field is also exclusive: zero is rejected.
///
/// # Examples
///
/// ```
/// use cs_balancing::Limits;
///
/// let limits = Limits::default();
/// assert_eq!(limits.max_agents, 1_000);
/// assert_eq!(limits.max_away(7), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Number of agents must be below this.
    pub max_agents: usize,
    /// Number of customers must be below this.
    pub max_customers: usize,
    /// Every agent id must be below this.
    pub max_agent_id: u32,
    /// Every agent score must be below this.
    pub max_agent_score: u32,
    /// Every customer id must be below this.
    pub max_customer_id: u32,
    /// Every customer score must be below this.
    pub max_customer_score: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_agents: 1_000,
            max_customers: 1_000_000,
            max_agent_id: 1_000,
            max_agent_score: 10_000,
            max_customer_id: 1_000_000,
            max_customer_score: 100_000,
        }
    }
}

impl Limits {
    /// Largest accepted away list for the given number of agents
    /// (inclusive, unlike the other bounds).
    pub fn max_away(&self, agent_count: usize) -> usize {
        agent_count / 2
    }

    /// Sets the agent count ceiling.
    pub fn with_max_agents(mut self, n: usize) -> Self {
        self.max_agents = n;
        self
    }

    /// Sets the customer count ceiling.
    pub fn with_max_customers(mut self, n: usize) -> Self {
        self.max_customers = n;
        self
    }

    /// Sets the agent id ceiling.
    pub fn with_max_agent_id(mut self, id: u32) -> Self {
        self.max_agent_id = id;
        self
    }

    /// Sets the agent score ceiling.
    pub fn with_max_agent_score(mut self, score: u32) -> Self {
        self.max_agent_score = score;
        self
    }

    /// Sets the customer id ceiling.
    pub fn with_max_customer_id(mut self, id: u32) -> Self {
        self.max_customer_id = id;
        self
    }

    /// Sets the customer score ceiling.
    pub fn with_max_customer_score(mut self, score: u32) -> Self {
        self.max_customer_score = score;
        self
    }
}

/// How the assigner looks up the lowest capable agent for a customer.
///
/// Both strategies pick the same agent; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanStrategy {
    /// Walk the score-sorted agents until one is capable. O(A) per customer.
    Linear,
    /// Lower-bound binary search over agent scores. O(log A) per customer.
    #[default]
    BinarySearch,
}

/// Configuration for [`Balancer`](crate::Balancer).
///
/// ```
/// use cs_balancing::{BalancerConfig, Limits, ScanStrategy};
///
/// let config = BalancerConfig::default()
///     .with_strategy(ScanStrategy::Linear)
///     .with_limits(Limits::default().with_max_agents(50));
/// assert_eq!(config.strategy, ScanStrategy::Linear);
/// assert_eq!(config.limits.max_agents, 50);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BalancerConfig {
    /// Validation ceilings.
    pub limits: Limits,
    /// Agent lookup strategy.
    pub strategy: ScanStrategy,
    /// Whether to look up agents in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl BalancerConfig {
    /// Sets the validation ceilings.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the agent lookup strategy.
    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables parallel lookup.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
