//! Error types.
//!
//! Two kinds of failure exist: a [`ValidationError`] when caller input breaks
//! a precondition, and a [`CapacityError`] when the registry cannot seat the
//! requested number of students. Neither ever leaves state modified.

use thiserror::Error;

/// Caller input violates a precondition.
///
/// The `Display` output is the human-readable message meant to be shown
/// verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Room ID is empty or whitespace only.
    #[error("Room ID is required")]
    MissingRoomId,
    /// Capacity is not an integer or not positive.
    #[error("Capacity must be greater than 0")]
    InvalidCapacity,
    /// Floor number is not an integer or is negative.
    #[error("Floor number must be 0 or greater")]
    InvalidFloor,
    /// A classroom with the same ID is already registered.
    #[error("Room ID already exists")]
    DuplicateRoomId(String),
    /// Student count is not an integer or not positive.
    #[error("Please enter a valid number of students")]
    InvalidStudentCount,
    /// Allocation was requested against an empty registry.
    #[error("No classrooms available. Please add classrooms first.")]
    NoClassrooms,
    /// A plan entry assigns no seats or more seats than the room holds.
    #[error("Allocated seats must be between 1 and the room capacity")]
    InvalidAllocatedSeats(String),
}

/// Registered seats cannot hold the requested number of students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Insufficient capacity! Total available seats: {total}, Required: {required}")]
pub struct CapacityError {
    /// Sum of all registered capacities.
    pub total: u64,
    /// Requested student count.
    pub required: u64,
}

impl CapacityError {
    /// Seats missing to satisfy the request.
    pub fn shortfall(&self) -> u64 {
        self.required.saturating_sub(self.total)
    }
}

/// Failure of an allocation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The request or the registry state failed a precondition.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The registry cannot seat every student.
    #[error(transparent)]
    Capacity(#[from] CapacityError),
}
