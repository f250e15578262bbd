//! Duty-roster domain models.
//!
//! Provides the input and output types of the scheduler: who may serve
//! (members and their eligibility windows), which days must be covered,
//! how many people a day may hold, and the resulting per-day crews.
//!
//! # Domain Mappings
//!
//! | duty-roster | Lab duty | Clinic | Volunteer desk |
//! |-------------|----------|--------|----------------|
//! | Member | Student | Nurse | Volunteer |
//! | DateRange | Semester week | Rota period | Event days |
//! | CapacityBounds | Cleaners per day | Staff per shift | Desk seats |
//! | DayPlan | Duty crew | Shift crew | Desk crew |

mod capacity;
mod member;
mod plan;
mod range;

pub use capacity::CapacityBounds;
pub use member::Member;
pub use plan::{DayPlan, DutyRow};
pub use range::{parse_date, DateRange};
