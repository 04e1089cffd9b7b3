//! Input validation for classroom records and allocation requests.
//!
//! Callers hand over integer-like values in textual form (typed numbers are
//! converted with `ToString`), so every numeric field goes through
//! [`parse_integer`] before its range check. Checks run in a fixed order and
//! the first failure wins:
//!
//! 1. Room ID non-empty after trimming
//! 2. Capacity is an integer greater than 0
//! 3. Floor number is an integer, 0 or greater
//!
//! Duplicate IDs are checked by the registry, after these field checks.

use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Classroom, ClassroomInput};

/// Validation result.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses integer-like text.
///
/// Surrounding whitespace is ignored. Empty text, fractional values and
/// anything that is not a base-10 integer yield `None`.
pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Checks that a room ID is non-empty after trimming.
///
/// The ID is kept as given; trimming only decides emptiness.
pub fn validate_room_id(room_id: &str) -> ValidationResult<()> {
    if room_id.trim().is_empty() {
        return Err(ValidationError::MissingRoomId);
    }
    Ok(())
}

/// Checks a capacity value: must be an integer > 0.
pub fn validate_capacity(capacity: i64) -> ValidationResult<u32> {
    if capacity <= 0 {
        return Err(ValidationError::InvalidCapacity);
    }
    u32::try_from(capacity).map_err(|_| ValidationError::InvalidCapacity)
}

/// Checks a floor number: must be an integer >= 0.
pub fn validate_floor(floor_no: i64) -> ValidationResult<u32> {
    if floor_no < 0 {
        return Err(ValidationError::InvalidFloor);
    }
    u32::try_from(floor_no).map_err(|_| ValidationError::InvalidFloor)
}

/// Validates the fields of a classroom and builds the record.
///
/// Does not check uniqueness; that depends on registry contents.
pub fn validate_classroom(
    room_id: impl Into<String>,
    capacity: i64,
    floor_no: i64,
    near_washroom: bool,
) -> ValidationResult<Classroom> {
    let room_id = room_id.into();
    validate_room_id(&room_id)?;
    let capacity = validate_capacity(capacity)?;
    let floor_no = validate_floor(floor_no)?;
    Ok(Classroom::from_parts(room_id, capacity, floor_no, near_washroom))
}

/// Validates unparsed caller input and builds the record.
pub fn validate_input(input: &ClassroomInput) -> ValidationResult<Classroom> {
    let result = check_input(input);
    if let Err(ref err) = result {
        debug!(room_id = %input.room_id, reason = %err, "classroom input rejected");
    }
    result
}

fn check_input(input: &ClassroomInput) -> ValidationResult<Classroom> {
    validate_room_id(&input.room_id)?;
    let capacity = parse_integer(&input.capacity).ok_or(ValidationError::InvalidCapacity)?;
    let capacity = validate_capacity(capacity)?;
    let floor_no = parse_integer(&input.floor_no).ok_or(ValidationError::InvalidFloor)?;
    let floor_no = validate_floor(floor_no)?;
    Ok(Classroom::from_parts(
        input.room_id.clone(),
        capacity,
        floor_no,
        input.near_washroom,
    ))
}

/// Checks a requested student count: must be > 0.
pub fn validate_student_count(students: i64) -> ValidationResult<u64> {
    if students <= 0 {
        return Err(ValidationError::InvalidStudentCount);
    }
    u64::try_from(students).map_err(|_| ValidationError::InvalidStudentCount)
}

/// Parses and checks a student count given as integer-like text.
pub fn parse_student_count(text: &str) -> ValidationResult<u64> {
    let students = parse_integer(text).ok_or(ValidationError::InvalidStudentCount)?;
    validate_student_count(students)
}
