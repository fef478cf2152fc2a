// Copyright 2025 Cowboy AI, LLC.

//! # Tournament Domain
//!
//! Core Domain-Driven Design (DDD) components for tournament management:
//! the enrollment and match lifecycles of a golf-competition client.
//!
//! This crate provides the fundamental building blocks:
//! - **Entity**: Types with identity, behind phantom-typed IDs
//! - **Value Objects**: Immutable, validated-at-construction types
//!   (handicaps, ratings, tees, holes)
//! - **Aggregates**: `Enrollment` and `Match`, immutable values whose
//!   command methods validate a state transition and return a new
//!   instance
//! - **State Machines**: Enum-based statuses with explicit adjacency
//!   tables and validated transitions
//! - **Repositories**: Async boundaries named after business actions,
//!   returning persisted-shape records
//! - **Views**: Flat read models with derived booleans for UI gating
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: Phantom types keep entity IDs apart at compile time
//! 2. **Immutability**: Aggregates are copy-on-write; a failed command
//!    leaves the receiver untouched
//! 3. **Controlled State**: Closed enums restrict statuses and their
//!    transitions to the adjacency table, at a single compiler-checked
//!    location
//! 4. **Fail Closed**: Wire records reject unknown fields and every
//!    value is re-validated on the way in
//! 5. **Remote Source of Truth**: Local validation exists to fail fast;
//!    the server reconciles concurrent conflicts

#![warn(missing_docs)]

mod entity;
mod enrollment;
mod errors;
mod identifiers;
mod match_play;
mod repository;
pub mod state_machine;
mod value_objects;
mod views;

// Re-export core types
pub use entity::{DomainEntity, EntityId, EnrollmentMarker, MatchMarker};
pub use enrollment::{Enrollment, EnrollmentRecord, EnrollmentStatus};
pub use errors::{DomainError, DomainResult};
pub use identifiers::{CompetitionId, EnrollmentId, MatchId, RoundId, TeamId, UserId};
pub use match_play::{
    Match, MatchPlayer, MatchPlayerRecord, MatchProps, MatchRecord, MatchStatus, StrokesRecipient,
};
pub use repository::{
    EnrollmentRepository, InMemoryEnrollmentRepository, InMemoryMatchRepository, MatchRepository,
};
pub use state_machine::{State, StateTransitions};
pub use value_objects::{
    CourseRating, Gender, Handicap, Hole, HoleDto, HoleNumber, Par, SlopeRating, StrokeIndex,
    Tee, TeeCategory, TeeDto,
};
pub use views::{EnrollmentDisplayFields, EnrollmentView, MatchView};
