//! Input validation.
//!
//! Checks run in a fixed order and the first violation is returned:
//!
//! 1. agent scores are pairwise distinct
//! 2. agent count
//! 3. customer count
//! 4. away count (inclusive bound of `agents / 2`)
//! 5. agent ids
//! 6. agent scores
//! 7. customer ids
//! 8. customer scores

use crate::config::Limits;
use crate::error::{ValidationError, ValidationResult};
use crate::types::{Agent, AgentId, Customer};
use std::collections::HashSet;

/// Validates a balancing input against `limits`.
///
/// # Examples
///
/// ```
/// use cs_balancing::{validate, Agent, Customer, ErrorKind, Limits};
///
/// let agents = vec![Agent::new(1, 100), Agent::new(2, 100)];
/// let customers = Customer::numbered(&[10]);
/// let err = validate(&agents, &customers, &[], &Limits::default()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DuplicateAgentScore);
/// ```
pub fn validate(
    agents: &[Agent],
    customers: &[Customer],
    away: &[AgentId],
    limits: &Limits,
) -> ValidationResult<()> {
    check_distinct_scores(agents)?;

    if out_of_count_range(agents.len(), limits.max_agents) {
        return Err(ValidationError::AgentCountOutOfRange {
            count: agents.len(),
            bound: limits.max_agents,
        });
    }

    if out_of_count_range(customers.len(), limits.max_customers) {
        return Err(ValidationError::CustomerCountOutOfRange {
            count: customers.len(),
            bound: limits.max_customers,
        });
    }

    let max_away = limits.max_away(agents.len());
    if away.len() > max_away {
        return Err(ValidationError::AwayCountOutOfRange {
            count: away.len(),
            bound: max_away,
        });
    }

    let bad = out_of_value_range(agents.iter().map(|a| a.id), limits.max_agent_id);
    if !bad.is_empty() {
        return Err(ValidationError::AgentIdOutOfRange {
            values: bad,
            bound: limits.max_agent_id,
        });
    }

    let bad = out_of_value_range(agents.iter().map(|a| a.score), limits.max_agent_score);
    if !bad.is_empty() {
        return Err(ValidationError::AgentScoreOutOfRange {
            values: bad,
            bound: limits.max_agent_score,
        });
    }

    let bad = out_of_value_range(customers.iter().map(|c| c.id), limits.max_customer_id);
    if !bad.is_empty() {
        return Err(ValidationError::CustomerIdOutOfRange {
            values: bad,
            bound: limits.max_customer_id,
        });
    }

    let bad = out_of_value_range(
        customers.iter().map(|c| c.score),
        limits.max_customer_score,
    );
    if !bad.is_empty() {
        return Err(ValidationError::CustomerScoreOutOfRange {
            values: bad,
            bound: limits.max_customer_score,
        });
    }

    Ok(())
}

fn check_distinct_scores(agents: &[Agent]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(agents.len());
    let mut duplicated: Vec<_> = agents
        .iter()
        .filter(|a| !seen.insert(a.score))
        .map(|a| a.score)
        .collect();

    if duplicated.is_empty() {
        return Ok(());
    }

    duplicated.sort_unstable();
    duplicated.dedup();
    Err(ValidationError::DuplicateAgentScore { scores: duplicated })
}

fn out_of_count_range(count: usize, bound: usize) -> bool {
    count == 0 || count >= bound
}

/// Values equal to zero or at/above `bound`, in input order.
fn out_of_value_range(values: impl Iterator<Item = u32>, bound: u32) -> Vec<u32> {
    values.filter(|&v| v == 0 || v >= bound).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of(agents: &[Agent], customers: &[Customer], away: &[AgentId]) -> Option<ErrorKind> {
        validate(agents, customers, away, &Limits::default())
            .err()
            .map(|e| e.kind())
    }

    #[test]
    fn test_valid_input() {
        let agents = Agent::numbered(&[60, 20, 95, 75]);
        let customers = Customer::numbered(&[90, 20, 70, 40, 60, 10]);
        assert!(validate(&agents, &customers, &[2, 4], &Limits::default()).is_ok());
    }

    #[test]
    fn test_duplicates_reported_once_sorted() {
        let agents = Agent::numbered(&[7, 3, 7, 3, 7, 1]);
        let err = validate(&agents, &Customer::numbered(&[1]), &[], &Limits::default())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateAgentScore { scores: vec![3, 7] }
        );
    }

    #[test]
    fn test_duplicate_checked_before_counts() {
        // Empty customers would fail the count check, but duplicates come first.
        let agents = vec![Agent::new(1, 100), Agent::new(2, 100)];
        assert_eq!(kind_of(&agents, &[], &[]), Some(ErrorKind::DuplicateAgentScore));
    }

    #[test]
    fn test_empty_agents_rejected() {
        let customers = Customer::numbered(&[1]);
        assert_eq!(kind_of(&[], &customers, &[]), Some(ErrorKind::AgentCountOutOfRange));
    }

    #[test]
    fn test_empty_customers_rejected() {
        let agents = Agent::numbered(&[1]);
        assert_eq!(kind_of(&agents, &[], &[]), Some(ErrorKind::CustomerCountOutOfRange));
    }

    #[test]
    fn test_away_bound_inclusive() {
        let agents = Agent::numbered(&[1, 2, 3, 4, 5]);
        let customers = Customer::numbered(&[1]);
        assert_eq!(kind_of(&agents, &customers, &[1, 2]), None);

        let err = validate(&agents, &customers, &[1, 2, 3], &Limits::default()).unwrap_err();
        assert_eq!(err, ValidationError::AwayCountOutOfRange { count: 3, bound: 2 });
    }

    #[test]
    fn test_away_counts_unknown_ids() {
        let agents = Agent::numbered(&[1, 2]);
        let customers = Customer::numbered(&[1]);
        assert_eq!(
            kind_of(&agents, &customers, &[42, 43]),
            Some(ErrorKind::AwayCountOutOfRange)
        );
    }

    #[test]
    fn test_zero_values_rejected() {
        let customers = Customer::numbered(&[1]);
        assert_eq!(
            kind_of(&[Agent::new(0, 5)], &customers, &[]),
            Some(ErrorKind::AgentIdOutOfRange)
        );
        assert_eq!(
            kind_of(&[Agent::new(1, 0)], &customers, &[]),
            Some(ErrorKind::AgentScoreOutOfRange)
        );
        let agents = Agent::numbered(&[5]);
        assert_eq!(
            kind_of(&agents, &[Customer::new(0, 1)], &[]),
            Some(ErrorKind::CustomerIdOutOfRange)
        );
        assert_eq!(
            kind_of(&agents, &[Customer::new(1, 0)], &[]),
            Some(ErrorKind::CustomerScoreOutOfRange)
        );
    }

    #[test]
    fn test_offending_values_collected() {
        let agents = Agent::numbered(&[5]);
        let customers = vec![
            Customer::new(1, 100_000),
            Customer::new(2, 99_999),
            Customer::new(3, 250_000),
        ];
        let err = validate(&agents, &customers, &[], &Limits::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CustomerScoreOutOfRange {
                values: vec![100_000, 250_000],
                bound: 100_000,
            }
        );
    }

    #[test]
    fn test_agent_ids_checked_before_agent_scores() {
        let agents = vec![Agent::new(1_000, 10_000)];
        let customers = Customer::numbered(&[1]);
        assert_eq!(
            kind_of(&agents, &customers, &[]),
            Some(ErrorKind::AgentIdOutOfRange)
        );
    }

    #[test]
    fn test_custom_limits() {
        let limits = Limits::default().with_max_agents(3);
        let agents = Agent::numbered(&[1, 2, 3]);
        let customers = Customer::numbered(&[1]);
        let err = validate(&agents, &customers, &[], &limits).unwrap_err();
        assert_eq!(
            err,
            ValidationError::AgentCountOutOfRange { count: 3, bound: 3 }
        );
    }
}
