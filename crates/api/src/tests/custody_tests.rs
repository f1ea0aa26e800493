// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use warden_persistence::Persistence;

use crate::tests::helpers::{
    create_as_admin, create_test_admin, create_test_department, create_test_hire,
    create_test_officer, create_test_persistence, create_test_today, submit_as,
};
use crate::{
    ApiError, AssignGunRequest, AuditEventInfo, AuthenticatedActor, CustodyRequest,
    DismissStaffRequest, GunInfo, ListGunsResponse, RegisterGunRequest, RetireGunRequest,
    ReturnGunRequest, StaffInfo, UpdateStaffRequest, WriteResponse, get_audit_event,
    get_audit_timeline, get_gun, get_staff, list_guns,
};

struct Armory {
    persistence: Persistence,
    guard: i64,
    cook: i64,
}

fn create_test_armory() -> Armory {
    let mut persistence: Persistence = create_test_persistence();
    let security: i64 = create_test_department(&mut persistence, "Security");
    let kitchen: i64 = create_test_department(&mut persistence, "Kitchen");
    let guard: i64 = create_as_admin(&mut persistence, &create_test_hire(security, "Gus Guard"));
    let cook: i64 = create_as_admin(&mut persistence, &create_test_hire(kitchen, "Ann Cook"));
    submit_as(
        &mut persistence,
        &create_test_admin(),
        &RegisterGunRequest {
            serial_number: String::from("sn-001"),
            gun_type: String::from("Pistol"),
            name: String::from("Glock 17"),
        },
    )
    .unwrap();
    Armory {
        persistence,
        guard,
        cook,
    }
}

fn custody(staff_id: i64) -> CustodyRequest {
    CustodyRequest {
        serial_number: String::from("SN-001"),
        staff_id,
    }
}

#[test]
fn test_only_security_staff_receive_weapons() {
    let mut armory: Armory = create_test_armory();

    let err: ApiError = submit_as(
        &mut armory.persistence,
        &create_test_officer(),
        &AssignGunRequest(custody(armory.cook)),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "security_custody"
    ));

    submit_as(
        &mut armory.persistence,
        &create_test_officer(),
        &AssignGunRequest(custody(armory.guard)),
    )
    .unwrap();
    let info: StaffInfo =
        get_staff(&mut armory.persistence, armory.guard, create_test_today()).unwrap();
    assert_eq!(info.weapons, vec![String::from("SN-001")]);
}

#[test]
fn test_duplicate_serial_number_is_rejected() {
    let mut armory: Armory = create_test_armory();

    let err: ApiError = submit_as(
        &mut armory.persistence,
        &create_test_admin(),
        &RegisterGunRequest {
            serial_number: String::from("SN-001 "),
            gun_type: String::from("Rifle"),
            name: String::from("AR-15"),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "unique_serial_number"
    ));
}

#[test]
fn test_outstanding_pair_cannot_be_issued_twice() {
    let mut armory: Armory = create_test_armory();
    submit_as(
        &mut armory.persistence,
        &create_test_officer(),
        &AssignGunRequest(custody(armory.guard)),
    )
    .unwrap();

    let err: ApiError = submit_as(
        &mut armory.persistence,
        &create_test_officer(),
        &AssignGunRequest(custody(armory.guard)),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "single_outstanding_assignment"
    ));
}

#[test]
fn test_weapon_lifecycle_with_return_and_reissue() {
    let mut armory: Armory = create_test_armory();
    let officer: AuthenticatedActor = create_test_officer();
    submit_as(&mut armory.persistence, &officer, &AssignGunRequest(custody(armory.guard))).unwrap();

    let err: ApiError = submit_as(
        &mut armory.persistence,
        &create_test_admin(),
        &RetireGunRequest {
            serial_number: String::from("SN-001"),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "weapon_returned_before_retire"
    ));

    submit_as(&mut armory.persistence, &officer, &ReturnGunRequest(custody(armory.guard))).unwrap();
    let err: ApiError = submit_as(
        &mut armory.persistence,
        &officer,
        &ReturnGunRequest(custody(armory.guard)),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "return_once"
    ));

    submit_as(&mut armory.persistence, &officer, &AssignGunRequest(custody(armory.guard))).unwrap();
    let gun: GunInfo = get_gun(&mut armory.persistence, "sn-001", create_test_today()).unwrap();
    assert_eq!(gun.assignments.len(), 1);
    assert!(!gun.assignments[0].returned);

    submit_as(&mut armory.persistence, &officer, &ReturnGunRequest(custody(armory.guard))).unwrap();
    submit_as(
        &mut armory.persistence,
        &create_test_admin(),
        &RetireGunRequest {
            serial_number: String::from("SN-001"),
        },
    )
    .unwrap();
    let guns: ListGunsResponse = list_guns(&mut armory.persistence, create_test_today()).unwrap();
    assert!(guns.guns.is_empty());
}

#[test]
fn test_armed_staff_cannot_leave_security_or_be_dismissed() {
    let mut armory: Armory = create_test_armory();
    submit_as(
        &mut armory.persistence,
        &create_test_officer(),
        &AssignGunRequest(custody(armory.guard)),
    )
    .unwrap();
    let kitchen: i64 = get_staff(&mut armory.persistence, armory.cook, create_test_today())
        .unwrap()
        .department_id;

    let err: ApiError = submit_as(
        &mut armory.persistence,
        &create_test_admin(),
        &UpdateStaffRequest {
            staff_id: armory.guard,
            name: None,
            salary_cents: None,
            phone: None,
            role: None,
            department_id: Some(kitchen),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));

    let err: ApiError = submit_as(
        &mut armory.persistence,
        &create_test_admin(),
        &DismissStaffRequest {
            staff_id: armory.guard,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "weapons_returned_first"
    ));
}

#[test]
fn test_every_write_is_audited() {
    let mut armory: Armory = create_test_armory();
    let response: WriteResponse = submit_as(
        &mut armory.persistence,
        &create_test_officer(),
        &AssignGunRequest(custody(armory.guard)),
    )
    .unwrap();

    let timeline: Vec<AuditEventInfo> = get_audit_timeline(&mut armory.persistence).unwrap();
    let names: Vec<&str> = timeline.iter().map(|e| e.action_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "CreateDepartment",
            "CreateDepartment",
            "HireStaff",
            "HireStaff",
            "RegisterGun",
            "AssignGun"
        ]
    );

    let event: AuditEventInfo =
        get_audit_event(&mut armory.persistence, response.event_id).unwrap();
    assert_eq!(event.actor_id, "officer-456");
    assert_eq!(event.actor_type, "officer");
    assert_eq!(event.cause_id, "api-req-456");
    assert!(event.after_snapshot.contains("assignments=1"));

    assert!(matches!(
        get_audit_event(&mut armory.persistence, 9_999).unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}
