// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use warden::CoreError;
use warden_domain::{DomainError, ErrorKind};
use warden_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::EventNotFound(event_id) => Self::ResourceNotFound {
                resource_type: String::from("Audit event"),
                message: format!("Audit event {event_id} does not exist"),
            },
            other => Self::Internal {
                message: format!("Persistence failure: {other}"),
            },
        }
    }
}

/// Names the request field a validation error refers to.
const fn invalid_field(err: &DomainError) -> &'static str {
    match err {
        DomainError::EmptyField { field }
        | DomainError::FieldTooLong { field, .. }
        | DomainError::DateInFuture { field, .. }
        | DomainError::InvalidDate { field, .. }
        | DomainError::InvalidTime { field, .. }
        | DomainError::NegativeAmount { field, .. } => field,
        DomainError::DateOrder { later_field, .. } => later_field,
        DomainError::InvalidPhone(_) => "phone",
        DomainError::InvalidGender(_) => "gender",
        DomainError::InvalidDepartmentStatus(_) => "status",
        DomainError::InvalidDay(_) | DomainError::EmptyDays => "days",
        DomainError::InvalidTimeWindow { .. } => "end",
        DomainError::InvalidCapacity { .. } => "capacity",
        DomainError::InvalidQuantity { .. } => "quantity",
        _ => "request",
    }
}

/// Names the rule a conflict error breaks.
const fn violated_rule(err: &DomainError) -> &'static str {
    match err {
        DomainError::CellFull { .. } => "cell_capacity",
        DomainError::IsolationCapacity { .. } => "isolation_single_occupancy",
        DomainError::CapacityBelowOccupancy { .. } => "capacity_covers_occupants",
        DomainError::SelfSupervision { .. } => "no_self_supervision",
        DomainError::DuplicateSupervision { .. } => "unique_supervision",
        DomainError::SupervisorAlreadyAssigned { .. } => "single_supervisor",
        DomainError::SupervisionCycle { .. } => "acyclic_supervision",
        DomainError::MissingParticipant { .. } => "complete_association",
        DomainError::DuplicateSerialNumber(_) => "unique_serial_number",
        DomainError::AssignmentOutstanding { .. } => "single_outstanding_assignment",
        DomainError::AlreadyReturned { .. } => "return_once",
        _ => "domain_rule",
    }
}

/// Names the kind of resource a lookup failed to find.
const fn missing_resource(err: &DomainError) -> &'static str {
    match err {
        DomainError::FacilityNotFound(_) => "Facility",
        DomainError::BlockNotFound(_) => "Block",
        DomainError::CellNotFound(_) => "Cell",
        DomainError::PrisonerNotFound(_) => "Prisoner",
        DomainError::RoomNotFound(_) => "Room",
        DomainError::DepartmentNotFound(_) => "Department",
        DomainError::StaffNotFound(_) => "Staff member",
        DomainError::ScheduleNotFound(_) => "Schedule",
        DomainError::VisitorNotFound(_) => "Visitor",
        DomainError::GunNotFound(_) => "Weapon",
        DomainError::AssignmentNotFound { .. } => "Weapon assignment",
        DomainError::SupervisionNotFound { .. } => "Supervision",
        _ => "Resource",
    }
}

/// Translates a domain error into an API error.
///
/// Validation failures become `InvalidInput`, missing entities become
/// `ResourceNotFound` and every other rule becomes `DomainRuleViolation`.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err.kind() {
        ErrorKind::Validation => ApiError::InvalidInput {
            field: String::from(invalid_field(&err)),
            message: err.to_string(),
        },
        ErrorKind::NotFound => ApiError::ResourceNotFound {
            resource_type: String::from(missing_resource(&err)),
            message: err.to_string(),
        },
        ErrorKind::CapacityConflict
        | ErrorKind::StateConflict
        | ErrorKind::ReferentialIntegrity => ApiError::DomainRuleViolation {
            rule: String::from(violated_rule(&err)),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::AssociationNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Containment link"),
            message: err.to_string(),
        },
        other => ApiError::DomainRuleViolation {
            rule: String::from(core_rule(&other)),
            message: other.to_string(),
        },
    }
}

const fn core_rule(err: &CoreError) -> &'static str {
    match err {
        CoreError::SecurityClearanceRequired { .. } => "security_custody",
        CoreError::InsufficientCapacity { .. } => "relocation_capacity",
        CoreError::FacilityOccupied { .. } => "facility_empty_before_delete",
        CoreError::DepartmentHasStaff { .. } => "department_empty_before_delete",
        CoreError::StaffHoldsWeapons { .. } => "weapons_returned_first",
        CoreError::GunInCustody { .. } => "weapon_returned_before_retire",
        CoreError::DomainViolation(_) | CoreError::AssociationNotFound { .. } => "domain_rule",
    }
}
