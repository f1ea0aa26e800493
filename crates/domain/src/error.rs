// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{
    BlockId, CellId, DepartmentId, FacilityId, PrisonerId, RoomId, ScheduleId, SerialNumber,
    StaffId, VisitorId,
};
use time::{Date, Time};

/// Broad classification of a [`DomainError`].
///
/// Callers use the kind to choose how a rejection is presented: a full cell is
/// reported differently from a malformed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A single field or argument is malformed.
    Validation,
    /// A capacity rule would be broken.
    CapacityConflict,
    /// A relationship cannot be assembled.
    ReferentialIntegrity,
    /// The entity is not in a state that allows the transition.
    StateConflict,
    /// A referenced entity does not exist.
    NotFound,
}

/// Errors raised by entity mutators and relationship components.
///
/// A mutator that returns an error leaves its receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field is blank.
    EmptyField {
        /// The field name.
        field: &'static str,
    },
    /// A text field exceeds its maximum length.
    FieldTooLong {
        /// The field name.
        field: &'static str,
        /// The maximum number of characters.
        max: usize,
        /// The number of characters supplied.
        actual: usize,
    },
    /// A date lies after the observation date.
    DateInFuture {
        /// The field name.
        field: &'static str,
        /// The rejected date.
        date: Date,
    },
    /// Two dates that must be ordered are not.
    DateOrder {
        /// The field that must come first.
        earlier_field: &'static str,
        /// Its value.
        earlier: Date,
        /// The field that must come second.
        later_field: &'static str,
        /// Its value.
        later: Date,
    },
    /// A date string could not be parsed.
    InvalidDate {
        /// The field name.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// A time-of-day string could not be parsed.
    InvalidTime {
        /// The field name.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// A phone number contains characters other than digits and separators.
    InvalidPhone(String),
    /// An occupant gender value is not recognised.
    InvalidGender(String),
    /// A department status value is not recognised.
    InvalidDepartmentStatus(String),
    /// A schedule day token is not one of the seven weekdays.
    InvalidDay(String),
    /// A schedule was given no days.
    EmptyDays,
    /// A schedule window ends before it starts.
    InvalidTimeWindow {
        /// The window start.
        start: Time,
        /// The window end.
        end: Time,
    },
    /// A monetary amount is negative.
    NegativeAmount {
        /// The field name.
        field: &'static str,
        /// The rejected amount in cents.
        value: i64,
    },
    /// A cell capacity of zero was requested.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: u32,
    },
    /// An equipment quantity of zero was requested.
    InvalidQuantity {
        /// The rejected quantity.
        quantity: u32,
    },
    /// The cell already holds as many occupants as its capacity allows.
    CellFull {
        /// The cell.
        cell_id: CellId,
        /// Its capacity.
        capacity: u32,
    },
    /// An isolation-type cell must have a capacity of exactly one.
    IsolationCapacity {
        /// The cell.
        cell_id: CellId,
        /// The cell type that triggered the rule.
        cell_type: String,
        /// The capacity that was requested or is currently set.
        capacity: u32,
    },
    /// The requested capacity is below the current number of occupants.
    CapacityBelowOccupancy {
        /// The cell.
        cell_id: CellId,
        /// The requested capacity.
        capacity: u32,
        /// The current number of occupants.
        occupants: usize,
    },
    /// A staff member cannot supervise themselves.
    SelfSupervision {
        /// The staff member.
        staff_id: StaffId,
    },
    /// The supervision edge already exists.
    DuplicateSupervision {
        /// The supervisor.
        supervisor: StaffId,
        /// The subordinate.
        subordinate: StaffId,
    },
    /// The subordinate already reports to a different supervisor.
    SupervisorAlreadyAssigned {
        /// The subordinate.
        subordinate: StaffId,
        /// Their current supervisor.
        supervisor: StaffId,
    },
    /// The edge would close a loop in the chain of command.
    SupervisionCycle {
        /// The proposed supervisor.
        supervisor: StaffId,
        /// The proposed subordinate.
        subordinate: StaffId,
    },
    /// A participant of a relationship does not exist.
    MissingParticipant {
        /// The kind of participant (e.g. "room").
        participant: &'static str,
        /// The identifier that could not be resolved.
        id: String,
    },
    /// A weapon is already registered under this serial number.
    DuplicateSerialNumber(SerialNumber),
    /// The weapon is already held by this staff member.
    AssignmentOutstanding {
        /// The weapon.
        serial: SerialNumber,
        /// The holder.
        staff_id: StaffId,
    },
    /// The assignment has already been returned.
    AlreadyReturned {
        /// The weapon.
        serial: SerialNumber,
        /// The former holder.
        staff_id: StaffId,
    },
    /// Facility does not exist.
    FacilityNotFound(FacilityId),
    /// Block does not exist.
    BlockNotFound(BlockId),
    /// Cell does not exist.
    CellNotFound(CellId),
    /// Occupant does not exist.
    PrisonerNotFound(PrisonerId),
    /// Room does not exist.
    RoomNotFound(RoomId),
    /// Department does not exist.
    DepartmentNotFound(DepartmentId),
    /// Staff member does not exist.
    StaffNotFound(StaffId),
    /// Schedule does not exist.
    ScheduleNotFound(ScheduleId),
    /// Visitor does not exist.
    VisitorNotFound(VisitorId),
    /// Weapon does not exist.
    GunNotFound(SerialNumber),
    /// No custody record exists for the pair.
    AssignmentNotFound {
        /// The weapon.
        serial: SerialNumber,
        /// The staff member.
        staff_id: StaffId,
    },
    /// The staff member has no supervisor.
    SupervisionNotFound {
        /// The subordinate.
        subordinate: StaffId,
    },
}

impl DomainError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyField { .. }
            | Self::FieldTooLong { .. }
            | Self::DateInFuture { .. }
            | Self::DateOrder { .. }
            | Self::InvalidDate { .. }
            | Self::InvalidTime { .. }
            | Self::InvalidPhone(_)
            | Self::InvalidGender(_)
            | Self::InvalidDepartmentStatus(_)
            | Self::InvalidDay(_)
            | Self::EmptyDays
            | Self::InvalidTimeWindow { .. }
            | Self::NegativeAmount { .. }
            | Self::InvalidCapacity { .. }
            | Self::InvalidQuantity { .. } => ErrorKind::Validation,
            Self::CellFull { .. }
            | Self::IsolationCapacity { .. }
            | Self::CapacityBelowOccupancy { .. } => ErrorKind::CapacityConflict,
            Self::SelfSupervision { .. }
            | Self::DuplicateSupervision { .. }
            | Self::SupervisorAlreadyAssigned { .. }
            | Self::SupervisionCycle { .. }
            | Self::MissingParticipant { .. }
            | Self::DuplicateSerialNumber(_) => ErrorKind::ReferentialIntegrity,
            Self::AssignmentOutstanding { .. } | Self::AlreadyReturned { .. } => {
                ErrorKind::StateConflict
            }
            Self::FacilityNotFound(_)
            | Self::BlockNotFound(_)
            | Self::CellNotFound(_)
            | Self::PrisonerNotFound(_)
            | Self::RoomNotFound(_)
            | Self::DepartmentNotFound(_)
            | Self::StaffNotFound(_)
            | Self::ScheduleNotFound(_)
            | Self::VisitorNotFound(_)
            | Self::GunNotFound(_)
            | Self::AssignmentNotFound { .. }
            | Self::SupervisionNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

impl std::fmt::Display for DomainError {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "Field '{field}' cannot be empty"),
            Self::FieldTooLong { field, max, actual } => write!(
                f,
                "Field '{field}' is {actual} characters long; at most {max} are allowed"
            ),
            Self::DateInFuture { field, date } => {
                write!(f, "Field '{field}' cannot be in the future, got {date}")
            }
            Self::DateOrder {
                earlier_field,
                earlier,
                later_field,
                later,
            } => write!(
                f,
                "'{later_field}' ({later}) cannot be before '{earlier_field}' ({earlier})"
            ),
            Self::InvalidDate { field, value } => {
                write!(f, "Field '{field}' is not a valid date: '{value}'")
            }
            Self::InvalidTime { field, value } => {
                write!(f, "Field '{field}' is not a valid time of day: '{value}'")
            }
            Self::InvalidPhone(value) => write!(f, "Invalid phone number: '{value}'"),
            Self::InvalidGender(value) => write!(f, "Invalid gender: '{value}'"),
            Self::InvalidDepartmentStatus(value) => {
                write!(f, "Invalid department status: '{value}'")
            }
            Self::InvalidDay(value) => write!(f, "Invalid schedule day: '{value}'"),
            Self::EmptyDays => write!(f, "A schedule must include at least one day"),
            Self::InvalidTimeWindow { start, end } => {
                write!(f, "Schedule end {end} is before start {start}")
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "Field '{field}' cannot be negative, got {value}")
            }
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be greater than 0")
            }
            Self::InvalidQuantity { quantity } => {
                write!(f, "Invalid quantity: {quantity}. Must be greater than 0")
            }
            Self::CellFull { cell_id, capacity } => {
                write!(f, "Cell {cell_id} is full ({capacity} of {capacity})")
            }
            Self::IsolationCapacity {
                cell_id,
                cell_type,
                capacity,
            } => write!(
                f,
                "Cell {cell_id} of type '{cell_type}' must have capacity 1, got {capacity}"
            ),
            Self::CapacityBelowOccupancy {
                cell_id,
                capacity,
                occupants,
            } => write!(
                f,
                "Cell {cell_id} holds {occupants} occupants; capacity {capacity} is too small"
            ),
            Self::SelfSupervision { staff_id } => {
                write!(f, "Staff member {staff_id} cannot supervise themselves")
            }
            Self::DuplicateSupervision {
                supervisor,
                subordinate,
            } => write!(
                f,
                "Staff member {supervisor} already supervises staff member {subordinate}"
            ),
            Self::SupervisorAlreadyAssigned {
                subordinate,
                supervisor,
            } => write!(
                f,
                "Staff member {subordinate} already reports to staff member {supervisor}"
            ),
            Self::SupervisionCycle {
                supervisor,
                subordinate,
            } => write!(
                f,
                "Staff member {supervisor} cannot supervise staff member {subordinate}: \
                 {subordinate} is already in their chain of command"
            ),
            Self::MissingParticipant { participant, id } => {
                write!(f, "Relationship participant {participant} '{id}' does not exist")
            }
            Self::DuplicateSerialNumber(serial) => {
                write!(f, "A weapon with serial number '{serial}' is already registered")
            }
            Self::AssignmentOutstanding { serial, staff_id } => write!(
                f,
                "Weapon '{serial}' is already assigned to staff member {staff_id}"
            ),
            Self::AlreadyReturned { serial, staff_id } => write!(
                f,
                "Weapon '{serial}' has already been returned by staff member {staff_id}"
            ),
            Self::FacilityNotFound(id) => write!(f, "Facility {id} not found"),
            Self::BlockNotFound(id) => write!(f, "Block {id} not found"),
            Self::CellNotFound(id) => write!(f, "Cell {id} not found"),
            Self::PrisonerNotFound(id) => write!(f, "Prisoner {id} not found"),
            Self::RoomNotFound(id) => write!(f, "Room {id} not found"),
            Self::DepartmentNotFound(id) => write!(f, "Department {id} not found"),
            Self::StaffNotFound(id) => write!(f, "Staff member {id} not found"),
            Self::ScheduleNotFound(id) => write!(f, "Schedule {id} not found"),
            Self::VisitorNotFound(id) => write!(f, "Visitor {id} not found"),
            Self::GunNotFound(serial) => write!(f, "Weapon '{serial}' not found"),
            Self::AssignmentNotFound { serial, staff_id } => write!(
                f,
                "No custody record for weapon '{serial}' and staff member {staff_id}"
            ),
            Self::SupervisionNotFound { subordinate } => {
                write!(f, "Staff member {subordinate} has no supervisor")
            }
        }
    }
}

impl std::error::Error for DomainError {}
