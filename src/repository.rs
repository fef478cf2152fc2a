// Copyright 2025 Cowboy AI, LLC.

//! Repository boundaries for the tournament domain
//!
//! Repositories are the out-of-scope collaborators that perform the
//! actual network/persistence calls. Methods are named after business
//! actions and return persisted-shape records; the caller feeds those
//! into the aggregate factories. Errors are surfaced to the caller
//! unmodified.

use crate::enrollment::{Enrollment, EnrollmentRecord};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{CompetitionId, EnrollmentId, MatchId, RoundId, UserId};
use crate::match_play::{Match, MatchRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Repository capability for enrollments
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Request enrollment in a competition
    async fn request_enrollment(
        &self,
        competition_id: &CompetitionId,
        user_id: &UserId,
    ) -> DomainResult<EnrollmentRecord>;

    /// Enroll a user directly in APPROVED state
    async fn direct_enroll(
        &self,
        competition_id: &CompetitionId,
        user_id: &UserId,
        custom_handicap: Option<f64>,
    ) -> DomainResult<EnrollmentRecord>;

    /// Approve an enrollment, optionally assigning a team
    async fn approve(
        &self,
        competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
        team_id: Option<&str>,
    ) -> DomainResult<EnrollmentRecord>;

    /// Reject an enrollment
    async fn reject(
        &self,
        competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
    ) -> DomainResult<EnrollmentRecord>;

    /// Cancel an enrollment
    async fn cancel(
        &self,
        competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
    ) -> DomainResult<EnrollmentRecord>;

    /// Withdraw an approved enrollment
    async fn withdraw(
        &self,
        competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
    ) -> DomainResult<EnrollmentRecord>;

    /// Set the custom handicap on an enrollment
    async fn set_custom_handicap(
        &self,
        competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
        custom_handicap: f64,
    ) -> DomainResult<EnrollmentRecord>;

    /// Load one enrollment by id
    async fn find_by_id(&self, enrollment_id: EnrollmentId)
        -> DomainResult<Option<EnrollmentRecord>>;

    /// Load all enrollments of a competition
    async fn find_by_competition(
        &self,
        competition_id: &CompetitionId,
    ) -> DomainResult<Vec<EnrollmentRecord>>;

    /// Load a user's enrollment in a competition
    async fn find_by_competition_and_user(
        &self,
        competition_id: &CompetitionId,
        user_id: &UserId,
    ) -> DomainResult<Option<EnrollmentRecord>>;

    /// Save an enrollment record
    async fn save(&self, record: EnrollmentRecord) -> DomainResult<()>;

    /// Delete an enrollment
    async fn delete(&self, enrollment_id: EnrollmentId) -> DomainResult<()>;
}

/// Repository capability for matches
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Load one match by id
    async fn find_by_id(&self, match_id: MatchId) -> DomainResult<Option<MatchRecord>>;

    /// Load all matches of a round
    async fn find_by_round(&self, round_id: &RoundId) -> DomainResult<Vec<MatchRecord>>;

    /// Save a match record
    async fn save(&self, record: MatchRecord) -> DomainResult<()>;

    /// Start a scheduled match
    async fn start(&self, match_id: MatchId) -> DomainResult<MatchRecord>;

    /// Complete a match with an outcome payload
    async fn complete(
        &self,
        match_id: MatchId,
        result: serde_json::Value,
    ) -> DomainResult<MatchRecord>;

    /// Decide a match as a walkover
    async fn walkover(&self, match_id: MatchId) -> DomainResult<MatchRecord>;
}

/// In-memory enrollment repository for testing
///
/// Plays the role of the remote system: it rehydrates the aggregate,
/// applies the command through the aggregate's own methods, and stores
/// the flattened result. Transition legality is therefore enforced
/// here exactly as it is on a real server.
#[derive(Default, Clone)]
pub struct InMemoryEnrollmentRepository {
    storage: Arc<RwLock<HashMap<EnrollmentId, EnrollmentRecord>>>,
}

impl InMemoryEnrollmentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn load(&self, enrollment_id: EnrollmentId) -> DomainResult<Enrollment> {
        let storage = self
            .storage
            .read()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        let record = storage.get(&enrollment_id).cloned().ok_or_else(|| {
            DomainError::EntityNotFound {
                entity_type: "Enrollment".to_string(),
                id: enrollment_id.to_string(),
            }
        })?;
        Enrollment::from_persistence(record)
    }

    fn store(&self, enrollment: &Enrollment) -> DomainResult<EnrollmentRecord> {
        let record = enrollment.to_persistence();
        let mut storage = self
            .storage
            .write()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        storage.insert(enrollment.id(), record.clone());
        Ok(record)
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn request_enrollment(
        &self,
        competition_id: &CompetitionId,
        user_id: &UserId,
    ) -> DomainResult<EnrollmentRecord> {
        debug!(competition = %competition_id, user = %user_id, "request enrollment");
        let enrollment =
            Enrollment::request(EnrollmentId::new(), competition_id.clone(), user_id.clone());
        self.store(&enrollment)
    }

    async fn direct_enroll(
        &self,
        competition_id: &CompetitionId,
        user_id: &UserId,
        custom_handicap: Option<f64>,
    ) -> DomainResult<EnrollmentRecord> {
        debug!(competition = %competition_id, user = %user_id, "direct enroll");
        let handicap = custom_handicap
            .map(crate::value_objects::Handicap::new)
            .transpose()?;
        let enrollment = Enrollment::direct_enroll(
            EnrollmentId::new(),
            competition_id.clone(),
            user_id.clone(),
            handicap,
        );
        self.store(&enrollment)
    }

    async fn approve(
        &self,
        _competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
        team_id: Option<&str>,
    ) -> DomainResult<EnrollmentRecord> {
        debug!(enrollment = %enrollment_id, "approve enrollment");
        let mut enrollment = self.load(enrollment_id)?.approve()?;
        if let Some(team_id) = team_id {
            enrollment = enrollment.assign_to_team(team_id)?;
        }
        self.store(&enrollment)
    }

    async fn reject(
        &self,
        _competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
    ) -> DomainResult<EnrollmentRecord> {
        debug!(enrollment = %enrollment_id, "reject enrollment");
        let enrollment = self.load(enrollment_id)?.reject()?;
        self.store(&enrollment)
    }

    async fn cancel(
        &self,
        _competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
    ) -> DomainResult<EnrollmentRecord> {
        debug!(enrollment = %enrollment_id, "cancel enrollment");
        let enrollment = self.load(enrollment_id)?.cancel()?;
        self.store(&enrollment)
    }

    async fn withdraw(
        &self,
        _competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
    ) -> DomainResult<EnrollmentRecord> {
        debug!(enrollment = %enrollment_id, "withdraw enrollment");
        let enrollment = self.load(enrollment_id)?.withdraw()?;
        self.store(&enrollment)
    }

    async fn set_custom_handicap(
        &self,
        _competition_id: &CompetitionId,
        enrollment_id: EnrollmentId,
        custom_handicap: f64,
    ) -> DomainResult<EnrollmentRecord> {
        debug!(enrollment = %enrollment_id, handicap = custom_handicap, "set custom handicap");
        let enrollment = self.load(enrollment_id)?.set_custom_handicap(custom_handicap)?;
        self.store(&enrollment)
    }

    async fn find_by_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> DomainResult<Option<EnrollmentRecord>> {
        let storage = self
            .storage
            .read()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        Ok(storage.get(&enrollment_id).cloned())
    }

    async fn find_by_competition(
        &self,
        competition_id: &CompetitionId,
    ) -> DomainResult<Vec<EnrollmentRecord>> {
        let storage = self
            .storage
            .read()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        Ok(storage
            .values()
            .filter(|r| r.competition_id == competition_id.as_str())
            .cloned()
            .collect())
    }

    async fn find_by_competition_and_user(
        &self,
        competition_id: &CompetitionId,
        user_id: &UserId,
    ) -> DomainResult<Option<EnrollmentRecord>> {
        let storage = self
            .storage
            .read()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        Ok(storage
            .values()
            .find(|r| {
                r.competition_id == competition_id.as_str() && r.user_id == user_id.as_str()
            })
            .cloned())
    }

    async fn save(&self, record: EnrollmentRecord) -> DomainResult<()> {
        // Validate before accepting, like a server would
        let enrollment = Enrollment::from_persistence(record)?;
        self.store(&enrollment)?;
        Ok(())
    }

    async fn delete(&self, enrollment_id: EnrollmentId) -> DomainResult<()> {
        debug!(enrollment = %enrollment_id, "delete enrollment");
        let mut storage = self
            .storage
            .write()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        storage.remove(&enrollment_id);
        Ok(())
    }
}

/// In-memory match repository for testing
#[derive(Default, Clone)]
pub struct InMemoryMatchRepository {
    storage: Arc<RwLock<HashMap<MatchId, MatchRecord>>>,
}

impl InMemoryMatchRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn load(&self, match_id: MatchId) -> DomainResult<Match> {
        let storage = self
            .storage
            .read()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        let record = storage
            .get(&match_id)
            .cloned()
            .ok_or_else(|| DomainError::EntityNotFound {
                entity_type: "Match".to_string(),
                id: match_id.to_string(),
            })?;
        Match::from_persistence(record)
    }

    fn store(&self, game: &Match) -> DomainResult<MatchRecord> {
        let record = game.to_persistence();
        let mut storage = self
            .storage
            .write()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        storage.insert(game.id(), record.clone());
        Ok(record)
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn find_by_id(&self, match_id: MatchId) -> DomainResult<Option<MatchRecord>> {
        let storage = self
            .storage
            .read()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        Ok(storage.get(&match_id).cloned())
    }

    async fn find_by_round(&self, round_id: &RoundId) -> DomainResult<Vec<MatchRecord>> {
        let storage = self
            .storage
            .read()
            .map_err(|e| DomainError::Generic(format!("Lock poisoned: {e}")))?;
        let mut records: Vec<MatchRecord> = storage
            .values()
            .filter(|r| r.round_id == round_id.as_str())
            .cloned()
            .collect();
        records.sort_by_key(|r| r.match_number);
        Ok(records)
    }

    async fn save(&self, record: MatchRecord) -> DomainResult<()> {
        let game = Match::from_persistence(record)?;
        self.store(&game)?;
        Ok(())
    }

    async fn start(&self, match_id: MatchId) -> DomainResult<MatchRecord> {
        debug!(game = %match_id, "start match");
        let game = self.load(match_id)?.start()?;
        self.store(&game)
    }

    async fn complete(
        &self,
        match_id: MatchId,
        result: serde_json::Value,
    ) -> DomainResult<MatchRecord> {
        debug!(game = %match_id, "complete match");
        let game = self.load(match_id)?.complete(result)?;
        self.store(&game)
    }

    async fn walkover(&self, match_id: MatchId) -> DomainResult<MatchRecord> {
        debug!(game = %match_id, "walkover match");
        let game = self.load(match_id)?.walkover()?;
        self.store(&game)
    }
}
