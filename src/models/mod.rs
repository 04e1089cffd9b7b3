//! Seating domain models.
//!
//! Provides the data types for exam rooms and for the seat plans computed
//! over them.
//!
//! # Domain Mappings
//!
//! | exam-seating | Meaning |
//! |--------------|---------|
//! | Classroom | A physical exam room with a seat capacity on a floor |
//! | ClassroomInput | Unvalidated room data as entered by a user |
//! | AllocatedRoom | A room plus the seats assigned to it by one plan |
//! | AllocationPlan | The ordered result of one allocation request |

mod classroom;
mod plan;

pub use classroom::{Classroom, ClassroomInput};
pub use plan::{AllocatedRoom, AllocationPlan};
