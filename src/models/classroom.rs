//! Classroom model.
//!
//! A classroom is one physical exam room. Records are immutable and can only
//! be produced through validation, so every stored value satisfies
//! `capacity >= 1` and a non-empty room ID.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation;

/// A validated exam room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClassroomRecord")]
pub struct Classroom {
    room_id: String,
    capacity: u32,
    floor_no: u32,
    near_washroom: bool,
}

/// Unchecked wire form of a classroom, validated on deserialization.
#[derive(Deserialize)]
struct ClassroomRecord {
    room_id: String,
    capacity: i64,
    floor_no: i64,
    #[serde(default)]
    near_washroom: bool,
}

impl TryFrom<ClassroomRecord> for Classroom {
    type Error = ValidationError;

    fn try_from(record: ClassroomRecord) -> Result<Self, Self::Error> {
        validation::validate_classroom(
            record.room_id,
            record.capacity,
            record.floor_no,
            record.near_washroom,
        )
    }
}

impl Classroom {
    /// Creates a classroom, checking the room ID, capacity and floor.
    ///
    /// # Example
    /// ```
    /// use exam_seating::models::Classroom;
    ///
    /// let room = Classroom::new("R101", 40, 1).unwrap().with_near_washroom(true);
    /// assert_eq!(room.capacity(), 40);
    /// assert!(Classroom::new("R102", 0, 1).is_err());
    /// ```
    pub fn new(
        room_id: impl Into<String>,
        capacity: i64,
        floor_no: i64,
    ) -> Result<Self, ValidationError> {
        validation::validate_classroom(room_id, capacity, floor_no, false)
    }

    /// Field values must already be validated.
    pub(crate) fn from_parts(
        room_id: String,
        capacity: u32,
        floor_no: u32,
        near_washroom: bool,
    ) -> Self {
        Self {
            room_id,
            capacity,
            floor_no,
            near_washroom,
        }
    }

    /// Sets the near-washroom flag.
    pub fn with_near_washroom(mut self, near_washroom: bool) -> Self {
        self.near_washroom = near_washroom;
        self
    }

    /// Unique room identifier.
    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Number of seats (always >= 1).
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Floor number (0 = ground floor).
    pub fn floor_no(&self) -> u32 {
        self.floor_no
    }

    /// Whether the room is near a washroom. Informational only.
    pub fn near_washroom(&self) -> bool {
        self.near_washroom
    }
}

/// Unvalidated classroom data as a caller collected it.
///
/// Numeric fields stay textual so any integer-like representation is
/// accepted; parsing happens during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomInput {
    /// Room identifier as entered.
    pub room_id: String,
    /// Capacity as entered.
    pub capacity: String,
    /// Floor number as entered.
    pub floor_no: String,
    /// Near-washroom flag.
    pub near_washroom: bool,
}

impl ClassroomInput {
    /// Creates an input from any integer-like capacity and floor.
    pub fn new(
        room_id: impl Into<String>,
        capacity: impl ToString,
        floor_no: impl ToString,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            capacity: capacity.to_string(),
            floor_no: floor_no.to_string(),
            near_washroom: false,
        }
    }

    /// Sets the near-washroom flag.
    pub fn with_near_washroom(mut self, near_washroom: bool) -> Self {
        self.near_washroom = near_washroom;
        self
    }
}
