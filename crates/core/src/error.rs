// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use warden_domain::{
    BlockId, DepartmentId, DomainError, ErrorKind, FacilityId, RoomId, SerialNumber, StaffId,
};

/// Errors that can occur during state transitions.
///
/// Entity-level rule violations arrive as `DomainViolation`. The remaining
/// variants are cross-aggregate policies owned by the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Only members of the security department may hold weapons.
    SecurityClearanceRequired {
        /// The staff member.
        staff_id: StaffId,
        /// The department type they belong to (or would belong to).
        department_type: String,
    },
    /// Displaced occupants do not fit in the remaining cells.
    InsufficientCapacity {
        /// How many occupants need a new cell.
        needed: usize,
        /// How many free places were found.
        available: usize,
    },
    /// The facility still houses occupants.
    FacilityOccupied {
        /// The facility.
        facility_id: FacilityId,
        /// The number of occupants.
        occupants: usize,
    },
    /// Staff still belong to the department.
    DepartmentHasStaff {
        /// The department.
        department_id: DepartmentId,
        /// The number of staff members.
        staff: usize,
    },
    /// The staff member still holds weapons.
    StaffHoldsWeapons {
        /// The staff member.
        staff_id: StaffId,
        /// The number of outstanding weapons.
        weapons: usize,
    },
    /// The weapon is still issued to staff.
    GunInCustody {
        /// The weapon.
        serial: SerialNumber,
        /// The number of current holders.
        holders: usize,
    },
    /// The containment association does not exist.
    AssociationNotFound {
        /// The block participant.
        block_id: BlockId,
        /// The department participant.
        department_id: DepartmentId,
        /// The room participant.
        room_id: RoomId,
    },
}

impl CoreError {
    /// Classifies the error.
    ///
    /// Policy rejections count as state conflicts, except relocation failures
    /// which are capacity conflicts.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DomainViolation(err) => err.kind(),
            Self::InsufficientCapacity { .. } => ErrorKind::CapacityConflict,
            Self::AssociationNotFound { .. } => ErrorKind::NotFound,
            Self::SecurityClearanceRequired { .. }
            | Self::FacilityOccupied { .. }
            | Self::DepartmentHasStaff { .. }
            | Self::StaffHoldsWeapons { .. }
            | Self::GunInCustody { .. } => ErrorKind::StateConflict,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SecurityClearanceRequired {
                staff_id,
                department_type,
            } => write!(
                f,
                "Staff member {staff_id} belongs to department '{department_type}'; \
                 only security staff may hold weapons"
            ),
            Self::InsufficientCapacity { needed, available } => write!(
                f,
                "Cannot relocate {needed} occupants: only {available} free places available"
            ),
            Self::FacilityOccupied {
                facility_id,
                occupants,
            } => write!(
                f,
                "Facility {facility_id} still houses {occupants} occupants"
            ),
            Self::DepartmentHasStaff {
                department_id,
                staff,
            } => write!(
                f,
                "Department {department_id} still has {staff} staff members"
            ),
            Self::StaffHoldsWeapons { staff_id, weapons } => write!(
                f,
                "Staff member {staff_id} still holds {weapons} weapons"
            ),
            Self::GunInCustody { serial, holders } => write!(
                f,
                "Weapon '{serial}' is still issued to {holders} staff members"
            ),
            Self::AssociationNotFound {
                block_id,
                department_id,
                room_id,
            } => write!(
                f,
                "Block {block_id}, department {department_id} and room {room_id} are not linked"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
