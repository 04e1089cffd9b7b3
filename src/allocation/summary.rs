//! Plan quality metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Seats allocated | Sum of allocated seats (equals requested students) |
//! | Seats offered | Sum of capacities of the rooms used |
//! | Spare seats | Offered minus allocated; only the last room can have any |
//! | Floors used | Distinct floors in the plan, ascending |
//! | Near-washroom rooms | Used rooms flagged near a washroom |
//! | Utilization | Allocated / offered |

use crate::models::AllocationPlan;

/// Derived metrics of an allocation plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    /// Sum of allocated seats.
    pub seats_allocated: u64,
    /// Sum of capacities of the used rooms.
    pub seats_offered: u64,
    /// Empty seats left in the used rooms.
    pub spare_seats: u64,
    /// Distinct floors used, ascending.
    pub floors_used: Vec<u32>,
    /// Number of used rooms flagged near a washroom.
    pub near_washroom_rooms: usize,
    /// Fraction of offered seats that are taken (0.0..=1.0).
    pub utilization: f64,
}

impl PlanSummary {
    /// Computes the summary of a plan.
    pub fn calculate(plan: &AllocationPlan) -> Self {
        let seats_allocated = plan.seats_allocated();
        let seats_offered: u64 = plan.iter().map(|r| u64::from(r.capacity())).sum();

        let mut floors_used: Vec<u32> = plan.iter().map(|r| r.floor_no()).collect();
        floors_used.sort_unstable();
        floors_used.dedup();

        let utilization = if seats_offered == 0 {
            0.0
        } else {
            seats_allocated as f64 / seats_offered as f64
        };

        Self {
            seats_allocated,
            seats_offered,
            spare_seats: seats_offered.saturating_sub(seats_allocated),
            floors_used,
            near_washroom_rooms: plan.iter().filter(|r| r.near_washroom()).count(),
            utilization,
        }
    }
}

impl From<&AllocationPlan> for PlanSummary {
    fn from(plan: &AllocationPlan) -> Self {
        Self::calculate(plan)
    }
}
