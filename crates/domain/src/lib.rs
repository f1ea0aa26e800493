// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod containment;
mod custody;
mod error;
mod facility;
mod housing;
mod ids;
mod organization;
mod prisoner;
mod schedule;
mod staff;
mod supervision;
mod validation;
mod visitor;

#[cfg(test)]
mod tests;

pub use containment::{ContainmentKey, ContainmentTable};
pub use custody::{CustodyLedger, Gun, GunAssignment};
pub use facility::{Address, Facility};
pub use housing::{Block, Cell, is_isolation_type};
pub use organization::{
    Department, DepartmentStatus, Equipment, Expense, Room, SECURITY_DEPARTMENT_TYPE,
};
pub use prisoner::{CrimeRecord, Gender, MedicalNote, Prisoner};
pub use schedule::{Day, Schedule};
pub use staff::{Staff, StaffGender};
pub use supervision::{StaffSupervision, SupervisionGraph};
pub use visitor::{VisitLog, Visitor};

// Re-export public types
pub use error::{DomainError, ErrorKind};
pub use ids::{
    BlockId, CellId, DepartmentId, FacilityId, PrisonerId, RoomId, ScheduleId, SerialNumber,
    StaffId, VisitorId,
};
pub use validation::{
    MAX_LABEL_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, MAX_TEXT_LEN, format_time, parse_date, parse_time,
};
