// Copyright 2025 Cowboy AI, LLC.

//! Enrollment aggregate - one user's participation record in one competition
//!
//! The aggregate is an immutable value: every command method validates
//! its transition against the [`EnrollmentStatus`] adjacency table and
//! returns a new instance, leaving the receiver untouched. The remote
//! system remains the source of truth for concurrent conflicts; this
//! layer re-validates locally to fail fast and to let pure-client code
//! query legality without a round trip.

use crate::entity::{DomainEntity, EnrollmentMarker};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{CompetitionId, EnrollmentId, TeamId, UserId};
use crate::state_machine::{State, StateTransitions};
use crate::value_objects::{Handicap, TeeCategory};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Lifecycle states of an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    /// The user asked to join the competition
    Requested,
    /// An organizer invited the user
    Invited,
    /// Participation confirmed
    Approved,
    /// Terminal - participation denied
    Rejected,
    /// Terminal - request or invitation cancelled before approval
    Cancelled,
    /// Terminal - the user withdrew after approval
    Withdrawn,
}

impl EnrollmentStatus {
    /// Parse from a canonical label, failing on anything else
    pub fn parse(label: &str) -> DomainResult<Self> {
        match label {
            "REQUESTED" => Ok(EnrollmentStatus::Requested),
            "INVITED" => Ok(EnrollmentStatus::Invited),
            "APPROVED" => Ok(EnrollmentStatus::Approved),
            "REJECTED" => Ok(EnrollmentStatus::Rejected),
            "CANCELLED" => Ok(EnrollmentStatus::Cancelled),
            "WITHDRAWN" => Ok(EnrollmentStatus::Withdrawn),
            other => Err(DomainError::ValidationError(format!(
                "Invalid enrollment status: {other}"
            ))),
        }
    }

    /// Awaiting a decision (REQUESTED or INVITED)
    pub fn is_pending(&self) -> bool {
        matches!(self, EnrollmentStatus::Requested | EnrollmentStatus::Invited)
    }

    /// Confirmed participation (APPROVED)
    pub fn is_active(&self) -> bool {
        matches!(self, EnrollmentStatus::Approved)
    }

    /// No outgoing transitions remain
    pub fn is_final(&self) -> bool {
        self.is_terminal()
    }
}

impl State for EnrollmentStatus {
    fn name(&self) -> &'static str {
        match self {
            EnrollmentStatus::Requested => "REQUESTED",
            EnrollmentStatus::Invited => "INVITED",
            EnrollmentStatus::Approved => "APPROVED",
            EnrollmentStatus::Rejected => "REJECTED",
            EnrollmentStatus::Cancelled => "CANCELLED",
            EnrollmentStatus::Withdrawn => "WITHDRAWN",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(
            self,
            EnrollmentStatus::Rejected | EnrollmentStatus::Cancelled | EnrollmentStatus::Withdrawn
        )
    }
}

impl StateTransitions for EnrollmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EnrollmentStatus::*;

        match self {
            Requested => vec![Approved, Rejected, Cancelled],
            Invited => vec![Approved, Rejected, Cancelled],
            Approved => vec![Withdrawn],
            Rejected | Cancelled | Withdrawn => vec![],
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One user's participation record in one competition.
///
/// Identity, competition, and user never change after creation. Every
/// other field changes only by producing a new instance through one of
/// the command methods.
#[derive(Debug, Clone)]
pub struct Enrollment {
    id: EnrollmentId,
    competition_id: CompetitionId,
    user_id: UserId,
    status: EnrollmentStatus,
    team_id: Option<TeamId>,
    custom_handicap: Option<Handicap>,
    tee_category: Option<TeeCategory>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Enrollment {
    fn create(
        id: EnrollmentId,
        competition_id: CompetitionId,
        user_id: UserId,
        status: EnrollmentStatus,
        custom_handicap: Option<Handicap>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            competition_id,
            user_id,
            status,
            team_id: None,
            custom_handicap,
            tee_category: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a fresh enrollment in REQUESTED (user-initiated)
    pub fn request(id: EnrollmentId, competition_id: CompetitionId, user_id: UserId) -> Self {
        Self::create(id, competition_id, user_id, EnrollmentStatus::Requested, None)
    }

    /// Create a fresh enrollment in INVITED (organizer-initiated)
    pub fn invite(id: EnrollmentId, competition_id: CompetitionId, user_id: UserId) -> Self {
        Self::create(id, competition_id, user_id, EnrollmentStatus::Invited, None)
    }

    /// Create a fresh enrollment directly in APPROVED, optionally with
    /// an initial custom handicap
    pub fn direct_enroll(
        id: EnrollmentId,
        competition_id: CompetitionId,
        user_id: UserId,
        custom_handicap: Option<Handicap>,
    ) -> Self {
        Self::create(
            id,
            competition_id,
            user_id,
            EnrollmentStatus::Approved,
            custom_handicap,
        )
    }

    /// Rehydrate from a persisted record
    ///
    /// Every field is re-validated, but the status is taken as given
    /// rather than re-derived from a transition, since it comes from
    /// the server's record.
    pub fn from_persistence(record: EnrollmentRecord) -> DomainResult<Self> {
        let team_id = record.team_id.map(TeamId::new).transpose()?;
        let custom_handicap = record.custom_handicap.map(Handicap::new).transpose()?;
        let tee_category = record
            .tee_category
            .as_deref()
            .map(TeeCategory::parse)
            .transpose()?;
        Ok(Self {
            id: EnrollmentId::parse(&record.id)?,
            competition_id: CompetitionId::new(record.competition_id)?,
            user_id: UserId::new(record.user_id)?,
            status: EnrollmentStatus::parse(&record.status)?,
            team_id,
            custom_handicap,
            tee_category,
            created_at: parse_timestamp("created_at", &record.created_at)?,
            updated_at: parse_timestamp("updated_at", &record.updated_at)?,
        })
    }

    /// Enrollment identity
    pub fn id(&self) -> EnrollmentId {
        self.id
    }

    /// Competition this enrollment belongs to
    pub fn competition_id(&self) -> &CompetitionId {
        &self.competition_id
    }

    /// Enrolled user
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Current lifecycle status
    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    /// Assigned team, when present
    pub fn team_id(&self) -> Option<&TeamId> {
        self.team_id.as_ref()
    }

    /// Custom handicap, when present
    pub fn custom_handicap(&self) -> Option<Handicap> {
        self.custom_handicap
    }

    /// Tee category, when present
    pub fn tee_category(&self) -> Option<TeeCategory> {
        self.tee_category
    }

    /// When the enrollment was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the enrollment last changed
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn transition(&self, target: EnrollmentStatus) -> DomainResult<Self> {
        self.status.validate_transition(&target)?;
        Ok(Self {
            status: target,
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Approve the enrollment, returning the new instance
    pub fn approve(&self) -> DomainResult<Self> {
        self.transition(EnrollmentStatus::Approved)
    }

    /// Reject the enrollment, returning the new instance
    pub fn reject(&self) -> DomainResult<Self> {
        self.transition(EnrollmentStatus::Rejected)
    }

    /// Cancel the enrollment, returning the new instance
    pub fn cancel(&self) -> DomainResult<Self> {
        self.transition(EnrollmentStatus::Cancelled)
    }

    /// Withdraw from the competition, returning the new instance
    pub fn withdraw(&self) -> DomainResult<Self> {
        self.transition(EnrollmentStatus::Withdrawn)
    }

    /// Assign the enrollment to a team
    ///
    /// Precondition: the enrollment must be APPROVED. This is a
    /// business precondition, distinct from a status transition - the
    /// status does not change.
    pub fn assign_to_team(&self, team_id: &str) -> DomainResult<Self> {
        if !self.status.is_active() {
            return Err(DomainError::InvalidOperation {
                reason: format!(
                    "Cannot assign a team while enrollment is {}",
                    self.status
                ),
            });
        }
        let team_id = TeamId::new(team_id)?;
        Ok(Self {
            team_id: Some(team_id),
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Set the custom handicap, re-validating the bound
    pub fn set_custom_handicap(&self, value: f64) -> DomainResult<Self> {
        let handicap = Handicap::new(value)?;
        Ok(Self {
            custom_handicap: Some(handicap),
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Clear the custom handicap
    pub fn remove_custom_handicap(&self) -> Self {
        Self {
            custom_handicap: None,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Awaiting a decision
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Participation confirmed
    pub fn is_approved(&self) -> bool {
        matches!(self.status, EnrollmentStatus::Approved)
    }

    /// Participation denied
    pub fn is_rejected(&self) -> bool {
        matches!(self.status, EnrollmentStatus::Rejected)
    }

    /// Cancelled before a decision
    pub fn is_cancelled(&self) -> bool {
        matches!(self.status, EnrollmentStatus::Cancelled)
    }

    /// Withdrawn after approval
    pub fn is_withdrawn(&self) -> bool {
        matches!(self.status, EnrollmentStatus::Withdrawn)
    }

    /// A team has been assigned
    pub fn has_team_assigned(&self) -> bool {
        self.team_id.is_some()
    }

    /// A custom handicap is set
    pub fn has_custom_handicap(&self) -> bool {
        self.custom_handicap.is_some()
    }

    /// Flatten to primitive types for the mapping boundary
    pub fn to_persistence(&self) -> EnrollmentRecord {
        EnrollmentRecord {
            id: self.id.to_string(),
            competition_id: self.competition_id.as_str().to_string(),
            user_id: self.user_id.as_str().to_string(),
            status: self.status.name().to_string(),
            team_id: self.team_id.as_ref().map(|t| t.as_str().to_string()),
            custom_handicap: self.custom_handicap.map(|h| h.value()),
            tee_category: self.tee_category.map(|t| t.name().to_string()),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

fn parse_timestamp(field: &str, raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::ValidationError(format!("Invalid {field} timestamp: {e}")))
}

// Aggregate identity: two enrollments with the same id are the same
// enrollment regardless of field differences.
impl PartialEq for Enrollment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Enrollment {}

impl Hash for Enrollment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl DomainEntity for Enrollment {
    type IdType = EnrollmentMarker;

    fn id(&self) -> EnrollmentId {
        self.id
    }
}

/// Persisted wire shape of an [`Enrollment`]
///
/// Decoding is fail-closed: unknown fields are rejected, and every
/// value is re-validated by [`Enrollment::from_persistence`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EnrollmentRecord {
    /// Enrollment id as canonical UUID text
    pub id: String,
    /// Competition reference key
    pub competition_id: String,
    /// User reference key
    pub user_id: String,
    /// Status label
    pub status: String,
    /// Assigned team reference key, if any
    pub team_id: Option<String>,
    /// Raw custom handicap, if any
    pub custom_handicap: Option<f64>,
    /// Tee category label, if any
    pub tee_category: Option<String>,
    /// Creation timestamp, RFC 3339 text
    pub created_at: String,
    /// Last-update timestamp, RFC 3339 text
    pub updated_at: String,
}
