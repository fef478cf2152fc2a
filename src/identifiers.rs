// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for enrollments, matches, and their server-owned references

use crate::entity::{EntityId, EnrollmentMarker, MatchMarker};
use crate::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type alias for enrollment entity IDs
///
/// Enrollments are aggregates with global identity and lifecycle.
/// This is just a convenience alias for EntityId<EnrollmentMarker>.
pub type EnrollmentId = EntityId<EnrollmentMarker>;

/// Type alias for match entity IDs
///
/// Matches are aggregates with global identity and lifecycle.
/// This is just a convenience alias for EntityId<MatchMarker>.
pub type MatchId = EntityId<MatchMarker>;

/// Competition ID - a server-owned reference key
///
/// Competitions are not entities of this core - the remote system owns
/// their identity. The key is opaque text, required to be non-empty
/// after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CompetitionId(String);

impl CompetitionId {
    /// Create from text, trimming surrounding whitespace
    pub fn new(s: impl Into<String>) -> DomainResult<Self> {
        let trimmed = s.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "Competition id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed))
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User ID - a server-owned reference key
///
/// Users are not entities of this core - the remote system owns their
/// identity. The key is opaque text, required to be non-empty after
/// trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct UserId(String);

impl UserId {
    /// Create from text, trimming surrounding whitespace
    pub fn new(s: impl Into<String>) -> DomainResult<Self> {
        let trimmed = s.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "User id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed))
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team ID - a server-owned reference key
///
/// Teams are not entities of this core. The key is opaque text,
/// required to be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TeamId(String);

impl TeamId {
    /// Create from text, trimming surrounding whitespace
    pub fn new(s: impl Into<String>) -> DomainResult<Self> {
        let trimmed = s.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "Team id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed))
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round ID - a server-owned reference key
///
/// Rounds are not entities of this core. The key is opaque text,
/// required to be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RoundId(String);

impl RoundId {
    /// Create from text, trimming surrounding whitespace
    pub fn new(s: impl Into<String>) -> DomainResult<Self> {
        let trimmed = s.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "Round id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed))
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
