// Copyright 2025 Cowboy AI, LLC.

//! Match aggregate - one scheduled contest within a round
//!
//! Matches follow the same copy-on-write discipline as enrollments:
//! commands validate against the [`MatchStatus`] adjacency table and
//! return new instances. Player lists are snapshots - copied on
//! ingestion and on every read, so no caller can mutate internal state
//! through an alias.

use crate::entity::{DomainEntity, MatchMarker};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{MatchId, RoundId, UserId};
use crate::state_machine::{State, StateTransitions};
use crate::value_objects::{HoleNumber, TeeCategory};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Progress states of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Scheduled but not yet started
    Scheduled,
    /// Play is under way
    InProgress,
    /// Terminal - played to a result
    Completed,
    /// Terminal - decided without play
    Walkover,
}

impl MatchStatus {
    /// Parse from a canonical label, failing on anything else
    pub fn parse(label: &str) -> DomainResult<Self> {
        match label {
            "SCHEDULED" => Ok(MatchStatus::Scheduled),
            "IN_PROGRESS" => Ok(MatchStatus::InProgress),
            "COMPLETED" => Ok(MatchStatus::Completed),
            "WALKOVER" => Ok(MatchStatus::Walkover),
            other => Err(DomainError::ValidationError(format!(
                "Invalid match status: {other}"
            ))),
        }
    }

    /// True exactly for SCHEDULED and IN_PROGRESS
    pub fn is_playable(&self) -> bool {
        matches!(self, MatchStatus::Scheduled | MatchStatus::InProgress)
    }

    /// No outgoing transitions remain
    pub fn is_final(&self) -> bool {
        self.is_terminal()
    }
}

impl State for MatchStatus {
    fn name(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::InProgress => "IN_PROGRESS",
            MatchStatus::Completed => "COMPLETED",
            MatchStatus::Walkover => "WALKOVER",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Walkover)
    }
}

impl StateTransitions for MatchStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MatchStatus::*;

        match self {
            Scheduled => vec![InProgress, Walkover],
            InProgress => vec![Completed, Walkover],
            Completed | Walkover => vec![],
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which team receives the handicap strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum StrokesRecipient {
    /// Team A receives the strokes
    A,
    /// Team B receives the strokes
    B,
}

impl StrokesRecipient {
    /// Canonical label
    pub fn name(&self) -> &'static str {
        match self {
            StrokesRecipient::A => "A",
            StrokesRecipient::B => "B",
        }
    }

    /// Parse from a canonical label
    pub fn parse(label: &str) -> DomainResult<Self> {
        match label {
            "A" => Ok(StrokesRecipient::A),
            "B" => Ok(StrokesRecipient::B),
            other => Err(DomainError::ValidationError(format!(
                "Invalid strokes recipient: {other}"
            ))),
        }
    }
}

/// Per-player record inside a match: a read-only snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPlayer {
    user_id: UserId,
    playing_handicap: i32,
    tee_category: TeeCategory,
    strokes_received_holes: Vec<HoleNumber>,
}

impl MatchPlayer {
    /// Create a player snapshot
    pub fn new(
        user_id: UserId,
        playing_handicap: i32,
        tee_category: TeeCategory,
        strokes_received_holes: Vec<HoleNumber>,
    ) -> Self {
        Self {
            user_id,
            playing_handicap,
            tee_category,
            strokes_received_holes,
        }
    }

    /// The player
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Playing handicap (strokes, may be negative for plus players)
    pub fn playing_handicap(&self) -> i32 {
        self.playing_handicap
    }

    /// Tee category the player plays from
    pub fn tee_category(&self) -> TeeCategory {
        self.tee_category
    }

    /// Holes where the player receives a stroke - a fresh copy on
    /// every call
    pub fn strokes_received_holes(&self) -> Vec<HoleNumber> {
        self.strokes_received_holes.clone()
    }
}

/// One scheduled contest within a round.
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    round_id: RoundId,
    match_number: u32,
    team_a_players: Vec<MatchPlayer>,
    team_b_players: Vec<MatchPlayer>,
    status: MatchStatus,
    handicap_strokes_given: Option<u32>,
    strokes_given_to_team: Option<StrokesRecipient>,
    result: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Full property set for constructing a [`Match`]
///
/// There are no incremental factories - a match always arrives whole,
/// either freshly scheduled or reconstructed from the server's record.
#[derive(Debug, Clone)]
pub struct MatchProps {
    /// Match identity
    pub id: MatchId,
    /// Round the match belongs to
    pub round_id: RoundId,
    /// Positional index within the round, starting at 1
    pub match_number: u32,
    /// Team A player snapshots
    pub team_a_players: Vec<MatchPlayer>,
    /// Team B player snapshots
    pub team_b_players: Vec<MatchPlayer>,
    /// Current progress status
    pub status: MatchStatus,
    /// Handicap strokes given, if decided
    pub handicap_strokes_given: Option<u32>,
    /// Which team receives the strokes, if decided
    pub strokes_given_to_team: Option<StrokesRecipient>,
    /// Opaque outcome payload, if any
    pub result: Option<serde_json::Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Construct from a full property set
    ///
    /// The match number must be at least 1.
    pub fn new(props: MatchProps) -> DomainResult<Self> {
        if props.match_number == 0 {
            return Err(DomainError::ValidationError(
                "Match number must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            id: props.id,
            round_id: props.round_id,
            match_number: props.match_number,
            team_a_players: props.team_a_players,
            team_b_players: props.team_b_players,
            status: props.status,
            handicap_strokes_given: props.handicap_strokes_given,
            strokes_given_to_team: props.strokes_given_to_team,
            result: props.result,
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
    }

    /// Rehydrate from a persisted record, re-validating every field
    pub fn from_persistence(record: MatchRecord) -> DomainResult<Self> {
        let team_a_players = record
            .team_a_players
            .into_iter()
            .map(MatchPlayer::from_record)
            .collect::<DomainResult<Vec<_>>>()?;
        let team_b_players = record
            .team_b_players
            .into_iter()
            .map(MatchPlayer::from_record)
            .collect::<DomainResult<Vec<_>>>()?;
        let strokes_given_to_team = record
            .strokes_given_to_team
            .as_deref()
            .map(StrokesRecipient::parse)
            .transpose()?;
        Self::new(MatchProps {
            id: MatchId::parse(&record.id)?,
            round_id: RoundId::new(record.round_id)?,
            match_number: record.match_number,
            team_a_players,
            team_b_players,
            status: MatchStatus::parse(&record.status)?,
            handicap_strokes_given: record.handicap_strokes_given,
            strokes_given_to_team,
            result: record.result,
            created_at: parse_timestamp("created_at", &record.created_at)?,
            updated_at: parse_timestamp("updated_at", &record.updated_at)?,
        })
    }

    /// Match identity
    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Round the match belongs to
    pub fn round_id(&self) -> &RoundId {
        &self.round_id
    }

    /// Positional index within the round
    pub fn match_number(&self) -> u32 {
        self.match_number
    }

    /// Team A player snapshots - a fresh copy on every call
    pub fn team_a_players(&self) -> Vec<MatchPlayer> {
        self.team_a_players.clone()
    }

    /// Team B player snapshots - a fresh copy on every call
    pub fn team_b_players(&self) -> Vec<MatchPlayer> {
        self.team_b_players.clone()
    }

    /// Current progress status
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Handicap strokes given, if decided
    pub fn handicap_strokes_given(&self) -> Option<u32> {
        self.handicap_strokes_given
    }

    /// Which team receives the strokes, if decided
    pub fn strokes_given_to_team(&self) -> Option<StrokesRecipient> {
        self.strokes_given_to_team
    }

    /// Opaque outcome payload, if any
    pub fn result(&self) -> Option<&serde_json::Value> {
        self.result.as_ref()
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-update timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Not yet started
    pub fn is_scheduled(&self) -> bool {
        matches!(self.status, MatchStatus::Scheduled)
    }

    /// Play under way
    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, MatchStatus::InProgress)
    }

    /// Played to a result
    pub fn is_completed(&self) -> bool {
        matches!(self.status, MatchStatus::Completed)
    }

    /// Decided without play
    pub fn is_walkover(&self) -> bool {
        matches!(self.status, MatchStatus::Walkover)
    }

    /// Whether the match may move to IN_PROGRESS
    pub fn can_start(&self) -> bool {
        self.status.can_transition_to(&MatchStatus::InProgress)
    }

    /// Whether the match may move to COMPLETED
    pub fn can_complete(&self) -> bool {
        self.status.can_transition_to(&MatchStatus::Completed)
    }

    /// Start the match, returning the new instance
    pub fn start(&self) -> DomainResult<Self> {
        self.status.validate_transition(&MatchStatus::InProgress)?;
        Ok(Self {
            status: MatchStatus::InProgress,
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Complete the match with an outcome payload, returning the new
    /// instance
    pub fn complete(&self, result: serde_json::Value) -> DomainResult<Self> {
        self.status.validate_transition(&MatchStatus::Completed)?;
        Ok(Self {
            status: MatchStatus::Completed,
            result: Some(result),
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Decide the match as a walkover, returning the new instance
    pub fn walkover(&self) -> DomainResult<Self> {
        self.status.validate_transition(&MatchStatus::Walkover)?;
        Ok(Self {
            status: MatchStatus::Walkover,
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Flatten to primitive types for the mapping boundary
    pub fn to_persistence(&self) -> MatchRecord {
        MatchRecord {
            id: self.id.to_string(),
            round_id: self.round_id.as_str().to_string(),
            match_number: self.match_number,
            team_a_players: self.team_a_players.iter().map(MatchPlayer::to_record).collect(),
            team_b_players: self.team_b_players.iter().map(MatchPlayer::to_record).collect(),
            status: self.status.name().to_string(),
            handicap_strokes_given: self.handicap_strokes_given,
            strokes_given_to_team: self.strokes_given_to_team.map(|t| t.name().to_string()),
            result: self.result.clone(),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

impl MatchPlayer {
    /// Flatten to the wire shape
    pub fn to_record(&self) -> MatchPlayerRecord {
        MatchPlayerRecord {
            user_id: self.user_id.as_str().to_string(),
            playing_handicap: self.playing_handicap,
            tee_category: self.tee_category.name().to_string(),
            strokes_received_holes: self
                .strokes_received_holes
                .iter()
                .map(|h| h.value())
                .collect(),
        }
    }

    /// Rebuild from the wire shape, re-validating every field
    pub fn from_record(record: MatchPlayerRecord) -> DomainResult<Self> {
        let strokes_received_holes = record
            .strokes_received_holes
            .into_iter()
            .map(HoleNumber::new)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(
            UserId::new(record.user_id)?,
            record.playing_handicap,
            TeeCategory::parse(&record.tee_category)?,
            strokes_received_holes,
        ))
    }
}

fn parse_timestamp(field: &str, raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::ValidationError(format!("Invalid {field} timestamp: {e}")))
}

// Aggregate identity: equality by id only.
impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Match {}

impl Hash for Match {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl DomainEntity for Match {
    type IdType = MatchMarker;

    fn id(&self) -> MatchId {
        self.id
    }
}

/// Persisted wire shape of a [`Match`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MatchRecord {
    /// Match id as canonical UUID text
    pub id: String,
    /// Round reference key
    pub round_id: String,
    /// Positional index within the round
    pub match_number: u32,
    /// Team A player records
    pub team_a_players: Vec<MatchPlayerRecord>,
    /// Team B player records
    pub team_b_players: Vec<MatchPlayerRecord>,
    /// Status label
    pub status: String,
    /// Handicap strokes given, if decided
    pub handicap_strokes_given: Option<u32>,
    /// Recipient team label ("A" or "B"), if decided
    pub strokes_given_to_team: Option<String>,
    /// Opaque outcome payload, if any
    pub result: Option<serde_json::Value>,
    /// Creation timestamp, RFC 3339 text
    pub created_at: String,
    /// Last-update timestamp, RFC 3339 text
    pub updated_at: String,
}

/// Persisted wire shape of a [`MatchPlayer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MatchPlayerRecord {
    /// User reference key
    pub user_id: String,
    /// Playing handicap in strokes
    pub playing_handicap: i32,
    /// Tee category label
    pub tee_category: String,
    /// Raw hole numbers where a stroke is received
    pub strokes_received_holes: Vec<u8>,
}
