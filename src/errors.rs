// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound {
        /// Type of entity that wasn't found
        entity_type: String,
        /// ID that was searched for
        id: String,
    },

    /// Invalid operation - a business precondition independent of the
    /// state machine was not met (e.g. assigning a team to an
    /// enrollment that is not approved)
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Reason why the operation is invalid
        reason: String,
    },

    /// Invariant violation
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Invalid state transition - the target status does not appear in
    /// the current status's adjacency list
    #[error("Invalid state transition from {from} to {to} (allowed: {allowed:?})")]
    InvalidStateTransition {
        /// Current state
        from: String,
        /// Attempted target state
        to: String,
        /// States reachable from the current state
        allowed: Vec<String>,
    },

    /// Validation error - raw input does not satisfy a value type's
    /// invariant (bad UUID shape, out-of-range number, unknown label)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// External service error
    #[error("External service error: {service} - {message}")]
    ExternalServiceError {
        /// Name of the external service
        service: String,
        /// Error message from the service
        message: String,
    },

    /// Generic domain error
    #[error("Domain error: {0}")]
    Generic(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl DomainError {
    /// Create a generic domain error
    pub fn generic(msg: impl Into<String>) -> Self {
        DomainError::Generic(msg.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::EntityNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::ValidationError(_) | DomainError::InvariantViolation(_)
        )
    }

    /// Check if this is an illegal state transition error
    pub fn is_transition_error(&self) -> bool {
        matches!(self, DomainError::InvalidStateTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error creation and display messages
    #[test]
    fn test_error_display_messages() {
        let err = DomainError::EntityNotFound {
            entity_type: "Enrollment".to_string(),
            id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Entity not found: Enrollment with id 123");

        let err = DomainError::InvalidOperation {
            reason: "Cannot assign a team before approval".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid operation: Cannot assign a team before approval"
        );

        let err = DomainError::InvariantViolation("Handicap out of range".to_string());
        assert_eq!(err.to_string(), "Invariant violation: Handicap out of range");

        let err = DomainError::InvalidStateTransition {
            from: "REJECTED".to_string(),
            to: "APPROVED".to_string(),
            allowed: vec![],
        };
        assert_eq!(
            err.to_string(),
            "Invalid state transition from REJECTED to APPROVED (allowed: [])"
        );

        let err = DomainError::ValidationError("Email format invalid".to_string());
        assert_eq!(err.to_string(), "Validation error: Email format invalid");

        let err = DomainError::SerializationError("Invalid JSON".to_string());
        assert_eq!(err.to_string(), "Serialization error: Invalid JSON");

        let err = DomainError::ExternalServiceError {
            service: "TournamentApi".to_string(),
            message: "Connection timeout".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "External service error: TournamentApi - Connection timeout"
        );

        let err = DomainError::Generic("Something went wrong".to_string());
        assert_eq!(err.to_string(), "Domain error: Something went wrong");
    }

    /// Test error cloning
    #[test]
    fn test_error_clone() {
        let original = DomainError::ValidationError("Test error".to_string());
        let cloned = original.clone();

        assert_eq!(original.to_string(), cloned.to_string());
    }

    /// Test generic error constructor
    #[test]
    fn test_generic_constructor() {
        let err1 = DomainError::generic("Test message");
        assert_eq!(err1.to_string(), "Domain error: Test message");

        let err2 = DomainError::generic(String::from("Another message"));
        assert_eq!(err2.to_string(), "Domain error: Another message");
    }

    /// Test is_not_found helper
    #[test]
    fn test_is_not_found() {
        assert!(DomainError::EntityNotFound {
            entity_type: "Match".to_string(),
            id: "123".to_string(),
        }
        .is_not_found());

        assert!(!DomainError::ValidationError("Test".to_string()).is_not_found());
        assert!(!DomainError::Generic("Test".to_string()).is_not_found());
    }

    /// Test is_validation_error helper
    #[test]
    fn test_is_validation_error() {
        assert!(DomainError::ValidationError("Test".to_string()).is_validation_error());
        assert!(DomainError::InvariantViolation("Test".to_string()).is_validation_error());

        assert!(!DomainError::EntityNotFound {
            entity_type: "Test".to_string(),
            id: "123".to_string(),
        }
        .is_validation_error());
        assert!(!DomainError::Generic("Test".to_string()).is_validation_error());
    }

    /// Test is_transition_error helper
    #[test]
    fn test_is_transition_error() {
        assert!(DomainError::InvalidStateTransition {
            from: "APPROVED".to_string(),
            to: "REQUESTED".to_string(),
            allowed: vec!["WITHDRAWN".to_string()],
        }
        .is_transition_error());

        assert!(!DomainError::ValidationError("Test".to_string()).is_transition_error());
        assert!(!DomainError::InvalidOperation {
            reason: "Test".to_string()
        }
        .is_transition_error());
    }

    /// Test helper methods don't match incorrect variants
    #[test]
    fn test_helper_method_exclusivity() {
        let transition_err = DomainError::InvalidStateTransition {
            from: "A".to_string(),
            to: "B".to_string(),
            allowed: vec![],
        };
        assert!(transition_err.is_transition_error());
        assert!(!transition_err.is_not_found());
        assert!(!transition_err.is_validation_error());

        let validation_err = DomainError::ValidationError("test".to_string());
        assert!(!validation_err.is_transition_error());
        assert!(!validation_err.is_not_found());
        assert!(validation_err.is_validation_error());
    }

    /// Test serde_json error conversion
    #[test]
    fn test_serde_json_conversion() {
        let invalid_json = "{ invalid json }";
        let serde_err = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();

        let domain_err: DomainError = serde_err.into();

        match domain_err {
            DomainError::SerializationError(msg) => {
                assert!(!msg.is_empty());
            }
            _ => panic!("Expected SerializationError"),
        }
    }

    /// Test DomainResult type alias
    #[test]
    fn test_domain_result() {
        let success: DomainResult<i32> = Ok(42);
        assert!(success.is_ok());

        let error: DomainResult<i32> = Err(DomainError::Generic("Failed".to_string()));
        assert!(error.is_err());
        assert_eq!(error.err().unwrap().to_string(), "Domain error: Failed");
    }
}
