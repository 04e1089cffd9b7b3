//! Exam room registry and seat allocation.
//!
//! Keeps an in-memory registry of exam classrooms and assigns a pool of
//! students to them with a deterministic greedy strategy that fills lower
//! floors first.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Classroom`, `ClassroomInput`,
//!   `AllocatedRoom`, `AllocationPlan`
//! - **`validation`**: Field checks and integer-like input parsing
//! - **`registry`**: The classroom registry (add, delete, floor-ordered listing)
//! - **`allocation`**: Floor-first greedy seat allocation and plan summaries
//! - **`planner`**: Caller-owned session that caches the last plan and
//!   discards it whenever the registry changes
//! - **`error`**: `ValidationError`, `CapacityError`, `AllocationError`
//!
//! # Example
//!
//! ```
//! use exam_seating::models::ClassroomInput;
//! use exam_seating::registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add(ClassroomInput::new("R1", 30, 1)).unwrap();
//! registry.add(ClassroomInput::new("R2", 20, 0)).unwrap();
//!
//! let plan = registry.allocate(35).unwrap();
//! assert_eq!(plan.rooms_used, 2);
//! assert_eq!(plan.allocated_rooms[0].room_id(), "R2");
//! assert_eq!(plan.allocated_rooms[1].allocated_seats, 15);
//! ```

pub mod allocation;
pub mod error;
pub mod models;
pub mod planner;
pub mod registry;
pub mod validation;

pub use error::{AllocationError, CapacityError, ValidationError};
