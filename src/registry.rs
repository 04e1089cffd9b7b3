//! Classroom registry.
//!
//! An in-memory, insertion-ordered collection of classrooms keyed by room
//! ID. Insertion order is the only order stored; the floor-ordered listing is
//! recomputed on every call and never reorders the records.
//!
//! Every mutation bumps a revision counter. A plan computed at an earlier
//! revision is stale and must be discarded by its holder.

use tracing::debug;

use crate::allocation;
use crate::error::{AllocationError, ValidationError};
use crate::models::{AllocationPlan, Classroom, ClassroomInput};
use crate::validation::{self, ValidationResult};

/// In-memory classroom registry.
///
/// # Example
///
/// ```
/// use exam_seating::models::ClassroomInput;
/// use exam_seating::registry::Registry;
///
/// let mut registry = Registry::new();
/// registry.add(ClassroomInput::new("R1", 10, 0)).unwrap();
///
/// let err = registry.add(ClassroomInput::new("R1", 20, 1)).unwrap_err();
/// assert_eq!(err.to_string(), "Room ID already exists");
/// assert_eq!(registry.get("R1").unwrap().capacity(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    classrooms: Vec<Classroom>,
    revision: u64,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from validated classrooms, in the given order.
    ///
    /// Fails on the first duplicate room ID.
    pub fn from_classrooms(
        classrooms: impl IntoIterator<Item = Classroom>,
    ) -> ValidationResult<Self> {
        let mut registry = Self::new();
        for classroom in classrooms {
            registry.insert(classroom)?;
        }
        Ok(registry)
    }

    /// Validates caller input and appends the classroom.
    ///
    /// Checks run in order: room ID, capacity, floor, uniqueness. On failure
    /// the registry is unchanged. Returns the updated snapshot.
    pub fn add(&mut self, input: ClassroomInput) -> ValidationResult<&[Classroom]> {
        let classroom = validation::validate_input(&input)?;
        self.insert(classroom)
    }

    /// Appends an already validated classroom if its ID is unused.
    pub fn insert(&mut self, classroom: Classroom) -> ValidationResult<&[Classroom]> {
        if self.contains(classroom.room_id()) {
            debug!(room_id = classroom.room_id(), "duplicate room id rejected");
            return Err(ValidationError::DuplicateRoomId(
                classroom.room_id().to_string(),
            ));
        }

        self.revision += 1;
        debug!(
            room_id = classroom.room_id(),
            capacity = classroom.capacity(),
            floor_no = classroom.floor_no(),
            rooms = self.classrooms.len() + 1,
            revision = self.revision,
            "classroom added"
        );
        self.classrooms.push(classroom);
        Ok(&self.classrooms)
    }

    /// Removes the classroom with the given ID. Absent IDs are a no-op.
    ///
    /// The revision is bumped either way: any plan held by the caller is
    /// invalidated by a delete request.
    pub fn delete(&mut self, room_id: &str) -> &[Classroom] {
        let before = self.classrooms.len();
        self.classrooms.retain(|c| c.room_id() != room_id);
        self.revision += 1;
        debug!(
            room_id,
            removed = before != self.classrooms.len(),
            rooms = self.classrooms.len(),
            revision = self.revision,
            "classroom delete"
        );
        &self.classrooms
    }

    /// All classrooms by ascending floor, insertion order among equal floors.
    pub fn list(&self) -> Vec<&Classroom> {
        allocation::floor_order(&self.classrooms)
    }

    /// Classrooms in insertion order.
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// Iterates classrooms in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Classroom> {
        self.classrooms.iter()
    }

    /// Finds a classroom by ID.
    pub fn get(&self, room_id: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.room_id() == room_id)
    }

    /// Whether a classroom with this ID exists.
    pub fn contains(&self, room_id: &str) -> bool {
        self.get(room_id).is_some()
    }

    /// Number of classrooms.
    pub fn len(&self) -> usize {
        self.classrooms.len()
    }

    /// Whether the registry has no classrooms.
    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty()
    }

    /// Sum of all capacities.
    pub fn total_capacity(&self) -> u64 {
        allocation::total_capacity(&self.classrooms)
    }

    /// Mutation counter, starting at 0 for a new registry.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Allocates students against the current contents.
    pub fn allocate(&self, students_count: i64) -> Result<AllocationPlan, AllocationError> {
        allocation::allocate(&self.classrooms, students_count)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Classroom;
    type IntoIter = std::slice::Iter<'a, Classroom>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
