// Copyright 2025 Cowboy AI, LLC.

//! Flat, UI-facing view records
//!
//! Views are pure projections of an aggregate: primitive fields plus
//! derived booleans, so UI code can gate buttons without touching the
//! domain types or issuing a round trip. Display-only fields joined
//! from a side channel (user and competition names) are merged in when
//! supplied.

use crate::enrollment::Enrollment;
use crate::match_play::Match;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display fields joined from a side-channel payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EnrollmentDisplayFields {
    /// Display name of the enrolled user
    pub user_name: Option<String>,
    /// Display name of the competition
    pub competition_name: Option<String>,
}

/// Flat read model of an [`Enrollment`]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EnrollmentView {
    /// Enrollment's unique identifier
    pub enrollment_id: String,
    /// Competition reference key
    pub competition_id: String,
    /// User reference key
    pub user_id: String,
    /// Status label
    pub status: String,
    /// Assigned team, if any
    pub team_id: Option<String>,
    /// Custom handicap, if any
    pub custom_handicap: Option<f64>,
    /// Tee category label, if any
    pub tee_category: Option<String>,
    /// Creation timestamp, RFC 3339 text
    pub created_at: String,
    /// Last-update timestamp, RFC 3339 text
    pub updated_at: String,
    /// Awaiting a decision
    pub is_pending: bool,
    /// Participation confirmed
    pub is_approved: bool,
    /// No further transitions possible
    pub is_final: bool,
    /// A team has been assigned
    pub has_team_assigned: bool,
    /// A custom handicap is set
    pub has_custom_handicap: bool,
    /// Display name of the enrolled user, if joined
    pub user_name: Option<String>,
    /// Display name of the competition, if joined
    pub competition_name: Option<String>,
}

impl EnrollmentView {
    /// Project an enrollment, optionally merging joined display fields
    pub fn from_enrollment(
        enrollment: &Enrollment,
        extra: Option<&EnrollmentDisplayFields>,
    ) -> Self {
        let record = enrollment.to_persistence();
        Self {
            enrollment_id: record.id,
            competition_id: record.competition_id,
            user_id: record.user_id,
            status: record.status,
            team_id: record.team_id,
            custom_handicap: record.custom_handicap,
            tee_category: record.tee_category,
            created_at: record.created_at,
            updated_at: record.updated_at,
            is_pending: enrollment.is_pending(),
            is_approved: enrollment.is_approved(),
            is_final: enrollment.status().is_final(),
            has_team_assigned: enrollment.has_team_assigned(),
            has_custom_handicap: enrollment.has_custom_handicap(),
            user_name: extra.and_then(|e| e.user_name.clone()),
            competition_name: extra.and_then(|e| e.competition_name.clone()),
        }
    }
}

/// Flat read model of a [`Match`]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchView {
    /// Match's unique identifier
    pub match_id: String,
    /// Round reference key
    pub round_id: String,
    /// Positional index within the round
    pub match_number: u32,
    /// Status label
    pub status: String,
    /// Handicap strokes given, if decided
    pub handicap_strokes_given: Option<u32>,
    /// Recipient team label, if decided
    pub strokes_given_to_team: Option<String>,
    /// Opaque outcome payload, if any
    pub result: Option<serde_json::Value>,
    /// SCHEDULED or IN_PROGRESS
    pub is_playable: bool,
    /// The match may move to IN_PROGRESS
    pub can_start: bool,
    /// The match may move to COMPLETED
    pub can_complete: bool,
}

impl MatchView {
    /// Project a match
    pub fn from_match(game: &Match) -> Self {
        let record = game.to_persistence();
        Self {
            match_id: record.id,
            round_id: record.round_id,
            match_number: record.match_number,
            status: record.status,
            handicap_strokes_given: record.handicap_strokes_given,
            strokes_given_to_team: record.strokes_given_to_team,
            result: record.result,
            is_playable: game.status().is_playable(),
            can_start: game.can_start(),
            can_complete: game.can_complete(),
        }
    }
}
