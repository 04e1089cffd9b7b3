//! Floor-first greedy seat allocation and plan summaries.
//!
//! # Algorithm
//!
//! `allocate` stable-sorts rooms by floor and fills each one completely
//! before moving to the next, stopping as soon as demand is met. Lower
//! floors are always exhausted first. It does not try to minimize the
//! number of rooms used.
//!
//! # Summary
//!
//! `PlanSummary` derives seat and room metrics from a computed plan:
//! seats offered, spare seats, floors used, near-washroom rooms and
//! utilization.

mod greedy;
mod summary;

pub use greedy::{allocate, allocate_text, floor_order, total_capacity};
pub use summary::PlanSummary;
