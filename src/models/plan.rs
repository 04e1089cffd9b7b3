//! Allocation plan (solution) model.
//!
//! A plan is the transient result of one allocation request. It is never
//! stored by the registry; callers discard it whenever the registry changes.

use serde::{Deserialize, Serialize};

use super::Classroom;
use crate::error::ValidationError;

/// A classroom together with the seats one plan assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AllocatedRoomRecord")]
pub struct AllocatedRoom {
    /// The room being used.
    #[serde(flatten)]
    pub classroom: Classroom,
    /// Seats assigned in this room (1..=capacity).
    pub allocated_seats: u32,
}

/// The ordered result of one allocation request.
///
/// Rooms appear in the order the allocator consumed them: ascending floor,
/// then registry insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AllocationPlanRecord")]
pub struct AllocationPlan {
    /// Requested number of students.
    pub total_students: u64,
    /// Number of rooms that received at least one seat.
    pub rooms_used: usize,
    /// Rooms in consumption order.
    pub allocated_rooms: Vec<AllocatedRoom>,
}

/// Wire form of an allocated room; seats are checked against capacity.
#[derive(Deserialize)]
struct AllocatedRoomRecord {
    #[serde(flatten)]
    classroom: Classroom,
    allocated_seats: u32,
}

impl TryFrom<AllocatedRoomRecord> for AllocatedRoom {
    type Error = ValidationError;

    fn try_from(record: AllocatedRoomRecord) -> Result<Self, Self::Error> {
        if record.allocated_seats == 0 || record.allocated_seats > record.classroom.capacity() {
            return Err(ValidationError::InvalidAllocatedSeats(
                record.classroom.room_id().to_string(),
            ));
        }
        Ok(Self::new(record.classroom, record.allocated_seats))
    }
}

/// Wire form of a plan; `rooms_used` is recomputed from the rooms.
#[derive(Deserialize)]
struct AllocationPlanRecord {
    total_students: u64,
    allocated_rooms: Vec<AllocatedRoom>,
}

impl From<AllocationPlanRecord> for AllocationPlan {
    fn from(record: AllocationPlanRecord) -> Self {
        Self::new(record.total_students, record.allocated_rooms)
    }
}

impl AllocatedRoom {
    /// Creates an allocated room.
    pub fn new(classroom: Classroom, allocated_seats: u32) -> Self {
        Self {
            classroom,
            allocated_seats,
        }
    }

    /// Room identifier.
    pub fn room_id(&self) -> &str {
        self.classroom.room_id()
    }

    /// Room capacity.
    pub fn capacity(&self) -> u32 {
        self.classroom.capacity()
    }

    /// Room floor.
    pub fn floor_no(&self) -> u32 {
        self.classroom.floor_no()
    }

    /// Near-washroom flag of the room.
    pub fn near_washroom(&self) -> bool {
        self.classroom.near_washroom()
    }

    /// Seats left empty in this room.
    #[inline]
    pub fn spare_seats(&self) -> u32 {
        self.capacity().saturating_sub(self.allocated_seats)
    }

    /// Whether every seat in the room is taken.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.allocated_seats == self.capacity()
    }
}

impl AllocationPlan {
    /// Creates a plan from rooms in consumption order.
    pub fn new(total_students: u64, allocated_rooms: Vec<AllocatedRoom>) -> Self {
        Self {
            total_students,
            rooms_used: allocated_rooms.len(),
            allocated_rooms,
        }
    }

    /// Sum of seats assigned across all rooms.
    pub fn seats_allocated(&self) -> u64 {
        self.allocated_rooms
            .iter()
            .map(|r| u64::from(r.allocated_seats))
            .sum()
    }

    /// Finds the allocation for a room.
    pub fn room(&self, room_id: &str) -> Option<&AllocatedRoom> {
        self.allocated_rooms.iter().find(|r| r.room_id() == room_id)
    }

    /// Iterates rooms in consumption order.
    pub fn iter(&self) -> std::slice::Iter<'_, AllocatedRoom> {
        self.allocated_rooms.iter()
    }
}

impl<'a> IntoIterator for &'a AllocationPlan {
    type Item = &'a AllocatedRoom;
    type IntoIter = std::slice::Iter<'a, AllocatedRoom>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
