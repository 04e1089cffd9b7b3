//! Seat planning session.
//!
//! `SeatPlanner` is the caller-owned state a front end keeps: the registry
//! plus the most recently computed plan. Any registry mutation discards the
//! cached plan; a failed allocation keeps the previous one.

use crate::allocation::{self, PlanSummary};
use crate::error::{AllocationError, ValidationError};
use crate::models::{AllocationPlan, Classroom, ClassroomInput};
use crate::registry::Registry;

/// Registry plus the last computed plan.
///
/// # Example
///
/// ```
/// use exam_seating::models::ClassroomInput;
/// use exam_seating::planner::SeatPlanner;
///
/// let mut planner = SeatPlanner::new();
/// planner.add_classroom(ClassroomInput::new("R1", 30, 0)).unwrap();
/// planner.allocate(25).unwrap();
/// assert!(planner.last_plan().is_some());
///
/// planner.delete_classroom("R1");
/// assert!(planner.last_plan().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeatPlanner {
    registry: Registry,
    last_plan: Option<AllocationPlan>,
}

impl SeatPlanner {
    /// Creates a planner over an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner over an existing registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            last_plan: None,
        }
    }

    /// Adds a classroom. On success the cached plan is discarded.
    pub fn add_classroom(
        &mut self,
        input: ClassroomInput,
    ) -> Result<&[Classroom], ValidationError> {
        self.registry.add(input)?;
        self.last_plan = None;
        Ok(self.registry.classrooms())
    }

    /// Deletes a classroom by ID and discards the cached plan.
    pub fn delete_classroom(&mut self, room_id: &str) -> &[Classroom] {
        self.last_plan = None;
        self.registry.delete(room_id)
    }

    /// Classrooms by ascending floor.
    pub fn list_classrooms(&self) -> Vec<&Classroom> {
        self.registry.list()
    }

    /// Allocates against the current registry and caches the plan.
    ///
    /// On failure the previously cached plan is left in place.
    pub fn allocate(&mut self, students_count: i64) -> Result<&AllocationPlan, AllocationError> {
        let plan = self.registry.allocate(students_count)?;
        Ok(&*self.last_plan.insert(plan))
    }

    /// Like [`allocate`](Self::allocate), with the count as integer-like text.
    pub fn allocate_text(&mut self, students: &str) -> Result<&AllocationPlan, AllocationError> {
        let plan = allocation::allocate_text(self.registry.classrooms(), students)?;
        Ok(&*self.last_plan.insert(plan))
    }

    /// The plan computed since the last registry change, if any.
    pub fn last_plan(&self) -> Option<&AllocationPlan> {
        self.last_plan.as_ref()
    }

    /// Summary of the cached plan.
    pub fn last_summary(&self) -> Option<PlanSummary> {
        self.last_plan.as_ref().map(PlanSummary::calculate)
    }

    /// Read access to the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consumes the planner, returning its registry.
    pub fn into_registry(self) -> Registry {
        self.registry
    }
}
