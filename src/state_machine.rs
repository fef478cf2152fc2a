// Copyright 2025 Cowboy AI, LLC.

//! State machine traits for domain aggregates
//!
//! Statuses are closed enums with an explicit adjacency table. Each
//! status type implements [`State`] (naming and terminality) and
//! [`StateTransitions`] (the adjacency table itself). Aggregates never
//! bypass the table: every command method routes the requested target
//! through `validate_transition` before producing a new instance.

use crate::errors::{DomainError, DomainResult};
use std::fmt::Debug;

/// Trait for types that can be used as states in a state machine
pub trait State: Debug + Clone + PartialEq + Eq + Send + Sync {
    /// Get the canonical label of this state
    fn name(&self) -> &'static str;

    /// Check if this is a terminal state
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Adjacency table for a state type
///
/// # Examples
///
/// ```rust
/// use tournament_domain::state_machine::StateTransitions;
/// use tournament_domain::MatchStatus;
///
/// let scheduled = MatchStatus::Scheduled;
///
/// // Must pass through InProgress before Completed
/// assert!(!scheduled.can_transition_to(&MatchStatus::Completed));
/// assert!(scheduled.can_transition_to(&MatchStatus::Walkover));
///
/// // validate_transition fails with an error naming both endpoints
/// let err = scheduled
///     .validate_transition(&MatchStatus::Completed)
///     .unwrap_err();
/// assert!(err.to_string().contains("SCHEDULED"));
/// assert!(err.to_string().contains("COMPLETED"));
/// ```
pub trait StateTransitions: State {
    /// Check if a transition to the target state is valid (pure query,
    /// never fails)
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Get all valid target states from this state
    fn valid_transitions(&self) -> Vec<Self>;

    /// Check a transition and fail with an error naming both endpoints
    /// and the allowed targets when it is illegal
    fn validate_transition(&self, target: &Self) -> DomainResult<()> {
        if self.can_transition_to(target) {
            return Ok(());
        }
        Err(DomainError::InvalidStateTransition {
            from: self.name().to_string(),
            to: target.name().to_string(),
            allowed: self
                .valid_transitions()
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Light {
        Red,
        Green,
        Off,
    }

    impl State for Light {
        fn name(&self) -> &'static str {
            match self {
                Light::Red => "RED",
                Light::Green => "GREEN",
                Light::Off => "OFF",
            }
        }

        fn is_terminal(&self) -> bool {
            matches!(self, Light::Off)
        }
    }

    impl StateTransitions for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Light::Red => vec![Light::Green, Light::Off],
                Light::Green => vec![Light::Red, Light::Off],
                Light::Off => vec![],
            }
        }
    }

    #[test]
    fn test_can_transition_to() {
        assert!(Light::Red.can_transition_to(&Light::Green));
        assert!(Light::Green.can_transition_to(&Light::Red));
        assert!(!Light::Off.can_transition_to(&Light::Red));
    }

    #[test]
    fn test_validate_transition_ok() {
        assert!(Light::Red.validate_transition(&Light::Green).is_ok());
    }

    #[test]
    fn test_validate_transition_error_names_endpoints() {
        let err = Light::Off.validate_transition(&Light::Red).unwrap_err();

        match err {
            DomainError::InvalidStateTransition { from, to, allowed } => {
                assert_eq!(from, "OFF");
                assert_eq!(to, "RED");
                assert!(allowed.is_empty());
            }
            other => panic!("Expected InvalidStateTransition, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_transition_error_lists_allowed() {
        let err = Light::Red.validate_transition(&Light::Red).unwrap_err();

        match err {
            DomainError::InvalidStateTransition { allowed, .. } => {
                assert_eq!(allowed, vec!["GREEN".to_string(), "OFF".to_string()]);
            }
            other => panic!("Expected InvalidStateTransition, got {other:?}"),
        }
    }

    #[test]
    fn test_terminal_states_have_empty_adjacency() {
        assert!(Light::Off.is_terminal());
        assert!(Light::Off.valid_transitions().is_empty());
    }
}
