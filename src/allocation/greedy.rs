//! Floor-first greedy allocator.
//!
//! # Algorithm
//!
//! 1. Validate the request (student count, empty registry, total capacity).
//! 2. Stable-sort rooms by floor ascending; ties keep registry order.
//! 3. Walk the sorted rooms, giving each `min(capacity, remaining)` seats.
//! 4. Stop as soon as `remaining` reaches zero. Unvisited rooms are not in
//!    the plan.
//!
//! Every room in the plan except possibly the last is filled to capacity.
//!
//! # Complexity
//! O(n log n) in the number of rooms, dominated by the sort.

use tracing::{debug, warn};

use crate::error::{AllocationError, CapacityError, ValidationError};
use crate::models::{AllocatedRoom, AllocationPlan, Classroom};
use crate::validation;

/// Rooms ordered by ascending floor, keeping input order among equal floors.
pub fn floor_order(rooms: &[Classroom]) -> Vec<&Classroom> {
    let mut sorted: Vec<&Classroom> = rooms.iter().collect();
    sorted.sort_by_key(|c| c.floor_no());
    sorted
}

/// Sum of capacities across `rooms`.
pub fn total_capacity(rooms: &[Classroom]) -> u64 {
    rooms.iter().map(|c| u64::from(c.capacity())).sum()
}

/// Assigns `students_count` students to `rooms`, lowest floors first.
///
/// Fails with a validation error if the count is not positive or `rooms` is
/// empty, and with a capacity error if the rooms cannot seat everyone.
///
/// # Example
/// ```
/// use exam_seating::allocation::allocate;
/// use exam_seating::models::Classroom;
///
/// let rooms = vec![
///     Classroom::new("R1", 30, 1).unwrap(),
///     Classroom::new("R2", 20, 0).unwrap(),
/// ];
/// let plan = allocate(&rooms, 35).unwrap();
/// let seats: Vec<(&str, u32)> = plan
///     .iter()
///     .map(|r| (r.room_id(), r.allocated_seats))
///     .collect();
/// assert_eq!(seats, vec![("R2", 20), ("R1", 15)]);
/// ```
pub fn allocate(
    rooms: &[Classroom],
    students_count: i64,
) -> Result<AllocationPlan, AllocationError> {
    let required = validation::validate_student_count(students_count)?;
    allocate_checked(rooms, required)
}

/// Like [`allocate`], with the student count given as integer-like text.
pub fn allocate_text(
    rooms: &[Classroom],
    students: &str,
) -> Result<AllocationPlan, AllocationError> {
    let required = validation::parse_student_count(students)?;
    allocate_checked(rooms, required)
}

fn allocate_checked(
    rooms: &[Classroom],
    required: u64,
) -> Result<AllocationPlan, AllocationError> {
    if rooms.is_empty() {
        return Err(ValidationError::NoClassrooms.into());
    }

    let total = total_capacity(rooms);
    if total < required {
        warn!(total, required, "insufficient capacity");
        return Err(CapacityError { total, required }.into());
    }

    let mut allocated = Vec::new();
    let mut remaining = required;

    for room in floor_order(rooms) {
        if remaining == 0 {
            break;
        }
        let seats = room
            .capacity()
            .min(u32::try_from(remaining).unwrap_or(u32::MAX));
        remaining -= u64::from(seats);
        allocated.push(AllocatedRoom::new(room.clone(), seats));
    }

    let plan = AllocationPlan::new(required, allocated);
    debug!(
        total_students = plan.total_students,
        rooms_used = plan.rooms_used,
        "allocation computed"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn room(id: &str, capacity: i64, floor_no: i64) -> Classroom {
        Classroom::new(id, capacity, floor_no).unwrap()
    }

    fn seats(plan: &AllocationPlan) -> Vec<(&str, u32)> {
        plan.iter().map(|r| (r.room_id(), r.allocated_seats)).collect()
    }

    #[test]
    fn test_lower_floor_first() {
        let rooms = vec![room("R1", 30, 1), room("R2", 20, 0)];
        let plan = allocate(&rooms, 35).unwrap();
        assert_eq!(seats(&plan), vec![("R2", 20), ("R1", 15)]);
        assert_eq!(plan.rooms_used, 2);
        assert_eq!(plan.total_students, 35);
    }

    #[test]
    fn test_exact_single_room() {
        let rooms = vec![room("R1", 30, 0)];
        let plan = allocate(&rooms, 30).unwrap();
        assert_eq!(seats(&plan), vec![("R1", 30)]);
        assert_eq!(plan.rooms_used, 1);
    }

    #[test]
    fn test_insufficient_capacity() {
        let rooms = vec![room("R1", 10, 0)];
        let err = allocate(&rooms, 11).unwrap_err();
        assert_eq!(
            err,
            AllocationError::Capacity(CapacityError {
                total: 10,
                required: 11
            })
        );
        assert_eq!(
            err.to_string(),
            "Insufficient capacity! Total available seats: 10, Required: 11"
        );
    }

    #[test]
    fn test_invalid_student_count() {
        let rooms = vec![room("R1", 10, 0)];
        for count in [0, -1, i64::MIN] {
            assert_eq!(
                allocate(&rooms, count),
                Err(AllocationError::Validation(
                    ValidationError::InvalidStudentCount
                ))
            );
        }
    }

    #[test]
    fn test_student_count_checked_before_rooms() {
        assert_eq!(
            allocate(&[], 0),
            Err(AllocationError::Validation(
                ValidationError::InvalidStudentCount
            ))
        );
        assert_eq!(
            allocate(&[], 5),
            Err(AllocationError::Validation(ValidationError::NoClassrooms))
        );
    }

    #[test]
    fn test_demand_equals_total_capacity() {
        let rooms = vec![room("A", 10, 2), room("B", 15, 0), room("C", 5, 1)];
        let plan = allocate(&rooms, 30).unwrap();
        assert_eq!(seats(&plan), vec![("B", 15), ("C", 5), ("A", 10)]);
        assert!(plan.iter().all(|r| r.is_full()));
    }

    #[test]
    fn test_room_matching_remaining_ends_plan() {
        let rooms = vec![room("A", 10, 0), room("B", 5, 0), room("C", 50, 1)];
        let plan = allocate(&rooms, 15).unwrap();
        // B exactly covers what A leaves; C is never visited.
        assert_eq!(seats(&plan), vec![("A", 10), ("B", 5)]);
        assert!(plan.room("C").is_none());
    }

    #[test]
    fn test_floor_ties_keep_registry_order() {
        let rooms = vec![
            room("X", 10, 1),
            room("Y", 10, 0),
            room("Z", 10, 1),
            room("W", 10, 0),
        ];
        let plan = allocate(&rooms, 35).unwrap();
        assert_eq!(seats(&plan), vec![("Y", 10), ("W", 10), ("X", 10), ("Z", 5)]);
    }

    #[test]
    fn test_near_washroom_does_not_affect_order() {
        let rooms = vec![
            room("A", 10, 0),
            room("B", 10, 0).with_near_washroom(true),
        ];
        let plan = allocate(&rooms, 5).unwrap();
        assert_eq!(seats(&plan), vec![("A", 5)]);
    }

    #[test]
    fn test_input_not_reordered() {
        let rooms = vec![room("R1", 30, 1), room("R2", 20, 0)];
        let _ = allocate(&rooms, 35).unwrap();
        assert_eq!(rooms[0].room_id(), "R1");
    }

    #[test]
    fn test_allocate_text() {
        let rooms = vec![room("R1", 30, 1), room("R2", 20, 0)];
        let plan = allocate_text(&rooms, " 35 ").unwrap();
        assert_eq!(plan.rooms_used, 2);
        for bad in ["", "abc", "3.5", "-2", "0"] {
            assert_eq!(
                allocate_text(&rooms, bad),
                Err(AllocationError::Validation(
                    ValidationError::InvalidStudentCount
                )),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_floor_order_and_total() {
        let rooms = vec![room("A", 3, 4), room("B", 4, 1), room("C", 5, 1)];
        let ids: Vec<&str> = floor_order(&rooms).iter().map(|c| c.room_id()).collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
        assert_eq!(total_capacity(&rooms), 12);
        assert_eq!(total_capacity(&[]), 0);
    }

    fn random_rooms(rng: &mut StdRng) -> Vec<Classroom> {
        let count = rng.random_range(1..=12);
        (0..count)
            .map(|i| {
                room(
                    &format!("R{i}"),
                    rng.random_range(1..=60),
                    rng.random_range(0..=4),
                )
                .with_near_washroom(rng.random_bool(0.3))
            })
            .collect()
    }

    #[test]
    fn test_random_plans_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let rooms = random_rooms(&mut rng);
            let total = total_capacity(&rooms);
            let students = rng.random_range(1..=(total as i64 + 20));

            let plan = match allocate(&rooms, students) {
                Ok(plan) => plan,
                Err(AllocationError::Capacity(err)) => {
                    assert!(students as u64 > total);
                    assert_eq!(err.total, total);
                    assert_eq!(err.required, students as u64);
                    continue;
                }
                Err(other) => panic!("unexpected error: {other}"),
            };

            // Seat sum equals demand.
            assert_eq!(plan.seats_allocated(), students as u64);
            assert_eq!(plan.rooms_used, plan.allocated_rooms.len());

            // All but the last room are full, and every room gets a seat.
            let (last, rest) = plan.allocated_rooms.split_last().unwrap();
            assert!(rest.iter().all(|r| r.is_full()));
            assert!(last.allocated_seats >= 1 && last.allocated_seats <= last.capacity());

            // Ascending floor, ties in input order.
            let position = |id: &str| rooms.iter().position(|c| c.room_id() == id).unwrap();
            for pair in plan.allocated_rooms.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(a.floor_no() <= b.floor_no());
                if a.floor_no() == b.floor_no() {
                    assert!(position(a.room_id()) < position(b.room_id()));
                }
            }

            // The plan is a prefix of the floor order.
            let expected: Vec<&str> = floor_order(&rooms)
                .iter()
                .take(plan.rooms_used)
                .map(|c| c.room_id())
                .collect();
            let actual: Vec<&str> = plan.iter().map(|r| r.room_id()).collect();
            assert_eq!(actual, expected);
        }
    }
}
