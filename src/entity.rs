// Copyright 2025 Cowboy AI, LLC.

//! Entity types with identity and lifecycle

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed entity ID using phantom types for type safety
///
/// These IDs are globally unique and persistent. The phantom type
/// parameter ensures that IDs for different entity types cannot be
/// mixed up at compile time.
///
/// Textual input must have the canonical hyphenated UUID shape
/// (8-4-4-4-12 hex groups). Hex case is accepted on input and
/// normalized to the lower-case canonical form, so two ids that differ
/// only in case compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId<T> {
    id: Uuid,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> EntityId<T> {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            _phantom: PhantomData,
        }
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Parse an entity ID from canonical UUID text
    ///
    /// Fails with a validation error when the input is empty or does
    /// not match the 8-4-4-4-12 hyphenated shape.
    pub fn parse(text: &str) -> DomainResult<Self> {
        if text.is_empty() {
            return Err(DomainError::ValidationError(
                "Identifier must not be empty".to_string(),
            ));
        }
        if !has_canonical_uuid_shape(text) {
            return Err(DomainError::ValidationError(format!(
                "Invalid identifier format: {text}"
            )));
        }
        let id = Uuid::parse_str(text)
            .map_err(|e| DomainError::ValidationError(format!("Invalid identifier: {e}")))?;
        Ok(Self::from_uuid(id))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.id
    }

    /// Convert to a different entity ID type (use with caution)
    pub fn cast<U>(self) -> EntityId<U> {
        EntityId {
            id: self.id,
            _phantom: PhantomData,
        }
    }
}

/// Check for the canonical 8-4-4-4-12 hyphenated hex layout
fn has_canonical_uuid_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    for (i, b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if *b != b'-' {
                    return false;
                }
            }
            _ => {
                if !b.is_ascii_hexdigit() {
                    return false;
                }
            }
        }
    }
    true
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> Default for EntityId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<EntityId<T>> for Uuid {
    fn from(id: EntityId<T>) -> Self {
        id.id
    }
}

impl<T> From<&EntityId<T>> for Uuid {
    fn from(id: &EntityId<T>) -> Self {
        id.id
    }
}

/// Trait for domain entities with identity
pub trait DomainEntity: Sized + Send + Sync {
    /// The marker type for this entity
    type IdType;

    /// Get the entity's ID
    fn id(&self) -> EntityId<Self::IdType>;
}

// Marker types for entity IDs
/// Marker for enrollment aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrollmentMarker;

/// Marker for match aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchMarker;

#[cfg(test)]
mod tests {
    use super::*;

    /// Test EntityId creation and uniqueness
    ///
    /// ```mermaid
    /// graph LR
    ///     A[EntityId::new] -->|UUID v4| B[Unique ID]
    ///     C[EntityId::new] -->|UUID v4| D[Different ID]
    ///     B -->|Not Equal| D
    /// ```
    #[test]
    fn test_entity_id_new() {
        let id1 = EntityId::<EnrollmentMarker>::new();
        let id2 = EntityId::<EnrollmentMarker>::new();

        // IDs should be unique
        assert_ne!(id1, id2);

        // IDs should not be nil
        assert!(!id1.as_uuid().is_nil());
        assert!(!id2.as_uuid().is_nil());
    }

    /// Test EntityId from UUID
    #[test]
    fn test_entity_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = EntityId::<EnrollmentMarker>::from_uuid(uuid);

        assert_eq!(id.as_uuid(), &uuid);
    }

    /// Test parsing canonical UUID text round-trips
    #[test]
    fn test_entity_id_parse_round_trip() {
        let text = "550e8400-e29b-41d4-a716-446655440000";
        let id = EntityId::<EnrollmentMarker>::parse(text).unwrap();

        assert_eq!(id.to_string(), text);
    }

    /// Test that upper-case hex input is normalized to lower case
    #[test]
    fn test_entity_id_parse_normalizes_case() {
        let upper = "550E8400-E29B-41D4-A716-446655440000";
        let lower = "550e8400-e29b-41d4-a716-446655440000";

        let from_upper = EntityId::<EnrollmentMarker>::parse(upper).unwrap();
        let from_lower = EntityId::<EnrollmentMarker>::parse(lower).unwrap();

        assert_eq!(from_upper, from_lower);
        assert_eq!(from_upper.to_string(), lower);
    }

    /// Test parse rejects malformed input
    #[test]
    fn test_entity_id_parse_rejects_malformed() {
        // Empty
        assert!(EntityId::<EnrollmentMarker>::parse("").is_err());
        // Not a UUID at all
        assert!(EntityId::<EnrollmentMarker>::parse("not-a-uuid").is_err());
        // Missing hyphens (simple form is not canonical)
        assert!(EntityId::<EnrollmentMarker>::parse("550e8400e29b41d4a716446655440000").is_err());
        // Wrong group length
        assert!(EntityId::<EnrollmentMarker>::parse("550e840-0e29b-41d4-a716-446655440000").is_err());
        // Non-hex character
        assert!(EntityId::<EnrollmentMarker>::parse("550e8400-e29b-41d4-a716-44665544000g").is_err());
        // URN form
        assert!(EntityId::<EnrollmentMarker>::parse(
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000"
        )
        .is_err());

        let err = EntityId::<EnrollmentMarker>::parse("nope").unwrap_err();
        assert!(err.is_validation_error());
    }

    /// Test EntityId display formatting
    #[test]
    fn test_entity_id_display() {
        let uuid = Uuid::new_v4();
        let id = EntityId::<EnrollmentMarker>::from_uuid(uuid);

        assert_eq!(format!("{id}"), format!("{uuid}"));
    }

    /// Test EntityId type safety with phantom types
    #[test]
    fn test_entity_id_type_safety() {
        let enrollment_id = EntityId::<EnrollmentMarker>::new();
        let match_id: EntityId<MatchMarker> = enrollment_id.cast();

        // Same underlying UUID
        assert_eq!(enrollment_id.as_uuid(), match_id.as_uuid());

        // But different types at compile time
        // This would not compile:
        // let _: EntityId<EnrollmentMarker> = match_id;
    }

    /// Test EntityId serialization/deserialization
    #[test]
    fn test_entity_id_serde() {
        let original = EntityId::<EnrollmentMarker>::new();

        let json = serde_json::to_string(&original).unwrap();
        let deserialized: EntityId<EnrollmentMarker> = serde_json::from_str(&json).unwrap();

        assert_eq!(original, deserialized);
    }

    /// Test EntityId as hash map key
    #[test]
    fn test_entity_id_as_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        let id1 = EntityId::<EnrollmentMarker>::new();
        let id2 = EntityId::<EnrollmentMarker>::new();

        map.insert(id1, "value1");
        map.insert(id2, "value2");

        assert_eq!(map.get(&id1), Some(&"value1"));
        assert_eq!(map.get(&id2), Some(&"value2"));
        assert_eq!(map.len(), 2);
    }

    /// Test EntityId default implementation
    #[test]
    fn test_entity_id_default() {
        let id1 = EntityId::<MatchMarker>::default();
        let id2 = EntityId::<MatchMarker>::default();

        assert_ne!(id1, id2);
        assert!(!id1.as_uuid().is_nil());
    }
}
