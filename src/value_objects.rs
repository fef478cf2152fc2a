// Copyright 2025 Cowboy AI, LLC.

//! Canonical domain Value Objects (invariants) for the golf-course context.
//!
//! Value Objects are immutable, compared by value, and updated by
//! replacement. Each one validates its raw input exactly once, at
//! construction, and never clamps: out-of-range input is an error.
//! Composite objects carry a DTO pair for the wire boundary - `to_dto`
//! is a pure structural transform, `from_dto` re-validates.

use crate::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive bounds for a custom or playing handicap index
const HANDICAP_MIN: f64 = -10.0;
const HANDICAP_MAX: f64 = 54.0;

/// Inclusive bounds for a course rating
const COURSE_RATING_MIN: f64 = 50.0;
const COURSE_RATING_MAX: f64 = 90.0;

/// Inclusive bounds for a slope rating
const SLOPE_RATING_MIN: u16 = 55;
const SLOPE_RATING_MAX: u16 = 155;

/// A handicap index, bounded to -10.0..=54.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Handicap(f64);

impl Handicap {
    /// Create a handicap, failing when the value is not finite or is
    /// outside -10.0..=54.0
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::ValidationError(
                "Handicap must be a finite number".to_string(),
            ));
        }
        if !(HANDICAP_MIN..=HANDICAP_MAX).contains(&value) {
            return Err(DomainError::ValidationError(format!(
                "Handicap {value} out of range {HANDICAP_MIN}..={HANDICAP_MAX}"
            )));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Handicap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course rating, bounded to 50.0..=90.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CourseRating(f64);

impl CourseRating {
    /// Create a course rating, failing when the value is not finite or
    /// is outside 50.0..=90.0
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::ValidationError(
                "Course rating must be a finite number".to_string(),
            ));
        }
        if !(COURSE_RATING_MIN..=COURSE_RATING_MAX).contains(&value) {
            return Err(DomainError::ValidationError(format!(
                "Course rating {value} out of range {COURSE_RATING_MIN}..={COURSE_RATING_MAX}"
            )));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// A slope rating, bounded to 55..=155 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SlopeRating(u16);

impl SlopeRating {
    /// Create a slope rating, failing outside 55..=155
    pub fn new(value: u16) -> DomainResult<Self> {
        if !(SLOPE_RATING_MIN..=SLOPE_RATING_MAX).contains(&value) {
            return Err(DomainError::ValidationError(format!(
                "Slope rating {value} out of range {SLOPE_RATING_MIN}..={SLOPE_RATING_MAX}"
            )));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> u16 {
        self.0
    }
}

/// A hole number on the course, 1..=18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct HoleNumber(u8);

impl HoleNumber {
    /// Create a hole number, failing outside 1..=18
    pub fn new(value: u8) -> DomainResult<Self> {
        if !(1..=18).contains(&value) {
            return Err(DomainError::ValidationError(format!(
                "Hole number {value} out of range 1..=18"
            )));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Par for a hole, 3..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Par(u8);

impl Par {
    /// Create a par value, failing outside 3..=5
    pub fn new(value: u8) -> DomainResult<Self> {
        if !(3..=5).contains(&value) {
            return Err(DomainError::ValidationError(format!(
                "Par {value} out of range 3..=5"
            )));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Stroke index of a hole, 1..=18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct StrokeIndex(u8);

impl StrokeIndex {
    /// Create a stroke index, failing outside 1..=18
    pub fn new(value: u8) -> DomainResult<Self> {
        if !(1..=18).contains(&value) {
            return Err(DomainError::ValidationError(format!(
                "Stroke index {value} out of range 1..=18"
            )));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Tee category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeeCategory {
    /// Back tees for championship play
    Championship,
    /// Standard amateur tees
    Amateur,
    /// Senior tees
    Senior,
    /// Forward tees
    Forward,
    /// Junior tees
    Junior,
}

impl TeeCategory {
    /// Canonical label of this category
    pub fn name(&self) -> &'static str {
        match self {
            TeeCategory::Championship => "CHAMPIONSHIP",
            TeeCategory::Amateur => "AMATEUR",
            TeeCategory::Senior => "SENIOR",
            TeeCategory::Forward => "FORWARD",
            TeeCategory::Junior => "JUNIOR",
        }
    }

    /// Parse from a canonical label, failing on anything else
    pub fn parse(label: &str) -> DomainResult<Self> {
        match label {
            "CHAMPIONSHIP" => Ok(TeeCategory::Championship),
            "AMATEUR" => Ok(TeeCategory::Amateur),
            "SENIOR" => Ok(TeeCategory::Senior),
            "FORWARD" => Ok(TeeCategory::Forward),
            "JUNIOR" => Ok(TeeCategory::Junior),
            other => Err(DomainError::ValidationError(format!(
                "Invalid tee category: {other}"
            ))),
        }
    }
}

impl fmt::Display for TeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Gender classification for a tee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male tee rating
    Male,
    /// Female tee rating
    Female,
}

impl Gender {
    /// Canonical label
    pub fn name(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    /// Parse from a canonical label, failing on anything else
    pub fn parse(label: &str) -> DomainResult<Self> {
        match label {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            other => Err(DomainError::ValidationError(format!(
                "Invalid gender: {other}"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A tee definition: identity, category, and course/slope ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Tee {
    id: String,
    category: TeeCategory,
    course_rating: CourseRating,
    slope_rating: SlopeRating,
    gender: Option<Gender>,
}

impl Tee {
    /// Create a tee, validating the identifier is non-empty after
    /// trimming
    pub fn new(
        id: impl Into<String>,
        category: TeeCategory,
        course_rating: CourseRating,
        slope_rating: SlopeRating,
        gender: Option<Gender>,
    ) -> DomainResult<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(DomainError::ValidationError(
                "Tee id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            category,
            course_rating,
            slope_rating,
            gender,
        })
    }

    /// Tee identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tee category
    pub fn category(&self) -> TeeCategory {
        self.category
    }

    /// Course rating
    pub fn course_rating(&self) -> CourseRating {
        self.course_rating
    }

    /// Slope rating
    pub fn slope_rating(&self) -> SlopeRating {
        self.slope_rating
    }

    /// Gender classification, when present
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Flatten to the wire shape (pure, no re-validation needed since
    /// the source is already valid)
    pub fn to_dto(&self) -> TeeDto {
        TeeDto {
            id: self.id.clone(),
            category: self.category.name().to_string(),
            course_rating: self.course_rating.value(),
            slope_rating: self.slope_rating.value(),
            gender: self.gender.map(|g| g.name().to_string()),
        }
    }

    /// Rebuild from the wire shape, re-running every validation
    pub fn from_dto(dto: TeeDto) -> DomainResult<Self> {
        let gender = dto.gender.as_deref().map(Gender::parse).transpose()?;
        Tee::new(
            dto.id,
            TeeCategory::parse(&dto.category)?,
            CourseRating::new(dto.course_rating)?,
            SlopeRating::new(dto.slope_rating)?,
            gender,
        )
    }
}

/// Wire shape for [`Tee`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TeeDto {
    /// Tee identifier
    pub id: String,
    /// Category label
    pub category: String,
    /// Raw course rating
    pub course_rating: f64,
    /// Raw slope rating
    pub slope_rating: u16,
    /// Optional gender label
    pub gender: Option<String>,
}

/// A hole definition: number, par, and stroke index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Hole {
    number: HoleNumber,
    par: Par,
    stroke_index: StrokeIndex,
}

impl Hole {
    /// Create a hole from already-validated parts
    pub fn new(number: HoleNumber, par: Par, stroke_index: StrokeIndex) -> Self {
        Self {
            number,
            par,
            stroke_index,
        }
    }

    /// Hole number
    pub fn number(&self) -> HoleNumber {
        self.number
    }

    /// Par
    pub fn par(&self) -> Par {
        self.par
    }

    /// Stroke index
    pub fn stroke_index(&self) -> StrokeIndex {
        self.stroke_index
    }

    /// Flatten to the wire shape
    pub fn to_dto(&self) -> HoleDto {
        HoleDto {
            number: self.number.value(),
            par: self.par.value(),
            stroke_index: self.stroke_index.value(),
        }
    }

    /// Rebuild from the wire shape, re-running every validation
    pub fn from_dto(dto: HoleDto) -> DomainResult<Self> {
        Ok(Hole::new(
            HoleNumber::new(dto.number)?,
            Par::new(dto.par)?,
            StrokeIndex::new(dto.stroke_index)?,
        ))
    }
}

/// Wire shape for [`Hole`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HoleDto {
    /// Raw hole number
    pub number: u8,
    /// Raw par
    pub par: u8,
    /// Raw stroke index
    pub stroke_index: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test handicap boundary values
    ///
    /// ```mermaid
    /// graph LR
    ///     A[-10.1] -->|reject| E[Error]
    ///     B[-10.0] -->|accept| V[Handicap]
    ///     C[54.0] -->|accept| V
    ///     D[54.1] -->|reject| E
    /// ```
    #[test]
    fn test_handicap_bounds() {
        assert!(Handicap::new(-10.0).is_ok());
        assert!(Handicap::new(54.0).is_ok());
        assert!(Handicap::new(0.0).is_ok());

        assert!(Handicap::new(-10.1).is_err());
        assert!(Handicap::new(54.1).is_err());
    }

    /// Test handicap rejects non-finite numbers
    #[test]
    fn test_handicap_rejects_non_finite() {
        assert!(Handicap::new(f64::NAN).is_err());
        assert!(Handicap::new(f64::INFINITY).is_err());
        assert!(Handicap::new(f64::NEG_INFINITY).is_err());
    }

    /// Test handicap never clamps
    #[test]
    fn test_handicap_no_clamping() {
        let err = Handicap::new(60.0).unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("60"));
    }

    /// Test course rating boundary values
    #[test]
    fn test_course_rating_bounds() {
        assert!(CourseRating::new(50.0).is_ok());
        assert!(CourseRating::new(90.0).is_ok());
        assert!(CourseRating::new(72.3).is_ok());

        assert!(CourseRating::new(49.9).is_err());
        assert!(CourseRating::new(90.1).is_err());
        assert!(CourseRating::new(f64::NAN).is_err());
    }

    /// Test slope rating boundary values
    #[test]
    fn test_slope_rating_bounds() {
        assert!(SlopeRating::new(55).is_ok());
        assert!(SlopeRating::new(155).is_ok());
        assert!(SlopeRating::new(113).is_ok());

        assert!(SlopeRating::new(54).is_err());
        assert!(SlopeRating::new(156).is_err());
    }

    /// Test hole number bounds
    #[test]
    fn test_hole_number_bounds() {
        assert!(HoleNumber::new(1).is_ok());
        assert!(HoleNumber::new(18).is_ok());

        assert!(HoleNumber::new(0).is_err());
        assert!(HoleNumber::new(19).is_err());
    }

    /// Test par bounds
    #[test]
    fn test_par_bounds() {
        assert!(Par::new(3).is_ok());
        assert!(Par::new(4).is_ok());
        assert!(Par::new(5).is_ok());

        assert!(Par::new(2).is_err());
        assert!(Par::new(6).is_err());
    }

    /// Test stroke index bounds
    #[test]
    fn test_stroke_index_bounds() {
        assert!(StrokeIndex::new(1).is_ok());
        assert!(StrokeIndex::new(18).is_ok());

        assert!(StrokeIndex::new(0).is_err());
        assert!(StrokeIndex::new(19).is_err());
    }

    /// Test tee category labels round-trip
    #[test]
    fn test_tee_category_labels() {
        for category in [
            TeeCategory::Championship,
            TeeCategory::Amateur,
            TeeCategory::Senior,
            TeeCategory::Forward,
            TeeCategory::Junior,
        ] {
            assert_eq!(TeeCategory::parse(category.name()).unwrap(), category);
        }

        assert!(TeeCategory::parse("LADIES").is_err());
        assert!(TeeCategory::parse("championship").is_err());
        assert!(TeeCategory::parse("").is_err());
    }

    /// Test gender labels
    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::parse("MALE").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("FEMALE").unwrap(), Gender::Female);
        assert!(Gender::parse("OTHER").is_err());
    }

    /// Test tee construction validates the identifier
    #[test]
    fn test_tee_requires_non_empty_id() {
        let rating = CourseRating::new(72.0).unwrap();
        let slope = SlopeRating::new(130).unwrap();

        let tee = Tee::new("  white  ", TeeCategory::Amateur, rating, slope, None).unwrap();
        assert_eq!(tee.id(), "white");

        assert!(Tee::new("", TeeCategory::Amateur, rating, slope, None).is_err());
        assert!(Tee::new("   ", TeeCategory::Amateur, rating, slope, None).is_err());
    }

    /// Test the concrete course-rating scenario from the business rules
    #[test]
    fn test_tee_course_rating_boundary_scenario() {
        // 49.9 fails at the CourseRating constructor, so the tee can
        // never be built from it
        assert!(CourseRating::new(49.9).is_err());

        let tee = Tee::new(
            "blue",
            TeeCategory::Championship,
            CourseRating::new(50.0).unwrap(),
            SlopeRating::new(113).unwrap(),
            Some(Gender::Male),
        );
        assert!(tee.is_ok());
    }

    /// Test tee DTO round trip re-validates on the way back in
    #[test]
    fn test_tee_dto_round_trip() {
        let tee = Tee::new(
            "blue",
            TeeCategory::Championship,
            CourseRating::new(73.5).unwrap(),
            SlopeRating::new(140).unwrap(),
            Some(Gender::Female),
        )
        .unwrap();

        let dto = tee.to_dto();
        assert_eq!(dto.category, "CHAMPIONSHIP");
        assert_eq!(dto.gender.as_deref(), Some("FEMALE"));

        let back = Tee::from_dto(dto).unwrap();
        assert_eq!(back, tee);
    }

    /// Test tee from_dto rejects invalid raw data
    #[test]
    fn test_tee_from_dto_re_validates() {
        let dto = TeeDto {
            id: "blue".to_string(),
            category: "CHAMPIONSHIP".to_string(),
            course_rating: 49.9,
            slope_rating: 140,
            gender: None,
        };
        assert!(Tee::from_dto(dto).is_err());

        let dto = TeeDto {
            id: "blue".to_string(),
            category: "MYSTERY".to_string(),
            course_rating: 72.0,
            slope_rating: 140,
            gender: None,
        };
        assert!(Tee::from_dto(dto).is_err());

        let dto = TeeDto {
            id: "blue".to_string(),
            category: "AMATEUR".to_string(),
            course_rating: 72.0,
            slope_rating: 140,
            gender: Some("UNKNOWN".to_string()),
        };
        assert!(Tee::from_dto(dto).is_err());
    }

    /// Test hole DTO round trip
    #[test]
    fn test_hole_dto_round_trip() {
        let hole = Hole::new(
            HoleNumber::new(7).unwrap(),
            Par::new(4).unwrap(),
            StrokeIndex::new(11).unwrap(),
        );

        let dto = hole.to_dto();
        let back = Hole::from_dto(dto).unwrap();
        assert_eq!(back, hole);

        let bad = HoleDto {
            number: 19,
            par: 4,
            stroke_index: 11,
        };
        assert!(Hole::from_dto(bad).is_err());
    }

    /// Test value object serde shapes
    #[test]
    fn test_value_object_serde() {
        let handicap = Handicap::new(12.4).unwrap();
        assert_eq!(serde_json::to_string(&handicap).unwrap(), "12.4");

        let category = TeeCategory::Championship;
        assert_eq!(
            serde_json::to_string(&category).unwrap(),
            "\"CHAMPIONSHIP\""
        );

        let parsed: TeeCategory = serde_json::from_str("\"FORWARD\"").unwrap();
        assert_eq!(parsed, TeeCategory::Forward);
        assert!(serde_json::from_str::<TeeCategory>("\"BACK\"").is_err());
    }
}
