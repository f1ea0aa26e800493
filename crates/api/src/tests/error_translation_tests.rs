// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use warden::CoreError;
use warden_domain::{CellId, DomainError, SerialNumber, StaffId};
use warden_persistence::PersistenceError;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_validation_errors_name_the_field() {
    let err: ApiError = translate_domain_error(DomainError::EmptyField { field: "name" });
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "name"));

    let err: ApiError = translate_domain_error(DomainError::InvalidCapacity { capacity: 0 });
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "capacity"));
}

#[test]
fn test_capacity_conflicts_are_rule_violations() {
    let err: ApiError = translate_domain_error(DomainError::CellFull {
        cell_id: CellId::new(4),
        capacity: 2,
    });
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "cell_capacity"
    ));
}

#[test]
fn test_missing_entities_are_not_found() {
    let err: ApiError = translate_domain_error(DomainError::StaffNotFound(StaffId::new(9)));
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Staff member"
    ));
}

#[test]
fn test_core_policy_errors_are_rule_violations() {
    let err: ApiError = translate_core_error(CoreError::GunInCustody {
        serial: SerialNumber::new("sn-1").unwrap(),
        holders: 1,
    });
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, ref message }
            if rule == "weapon_returned_before_retire" && message.contains("SN-1")
    ));
}

#[test]
fn test_wrapped_domain_errors_are_unwrapped() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(DomainError::EmptyDays));
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "days"));
}

#[test]
fn test_missing_audit_event_is_not_found() {
    let err: ApiError = ApiError::from(PersistenceError::EventNotFound(3));
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));

    let err: ApiError = ApiError::from(PersistenceError::QueryFailed(String::from("boom")));
    assert!(matches!(err, ApiError::Internal { .. }));
}
