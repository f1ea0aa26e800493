// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_department, hire, run, try_run};
use crate::{Command, CoreError, State};
use warden_domain::{DepartmentId, DomainError, ErrorKind, SerialNumber, StaffId};

struct Armory {
    state: State,
    security: DepartmentId,
    kitchen: DepartmentId,
    guard: StaffId,
    cook: StaffId,
    serial: SerialNumber,
}

fn create_test_armory() -> Armory {
    let (state, security) = create_department(&State::new(), "Security");
    let (state, kitchen) = create_department(&state, "Kitchen");
    let (state, guard) = hire(&state, "Gus Guard", security);
    let (state, cook) = hire(&state, "Cal Cook", kitchen);
    let serial: SerialNumber = SerialNumber::new("sn-001").unwrap();
    let (state, _) = run(
        &state,
        Command::RegisterGun {
            serial: serial.clone(),
            gun_type: String::from("Pistol"),
            name: String::from("Glock 17"),
        },
    );
    Armory {
        state,
        security,
        kitchen,
        guard,
        cook,
        serial,
    }
}

fn issue(armory: &Armory) -> State {
    run(
        &armory.state,
        Command::AssignGun {
            serial: armory.serial.clone(),
            staff_id: armory.guard,
        },
    )
    .0
}

#[test]
fn test_only_security_staff_may_hold_weapons() {
    let armory: Armory = create_test_armory();

    let err: CoreError = try_run(
        &armory.state,
        Command::AssignGun {
            serial: armory.serial.clone(),
            staff_id: armory.cook,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::SecurityClearanceRequired {
            staff_id: armory.cook,
            department_type: String::from("Kitchen"),
        }
    );
    assert_eq!(err.kind(), ErrorKind::StateConflict);
    assert!(armory.state.custody.is_empty());
}

#[test]
fn test_issue_and_return_weapon() {
    let armory: Armory = create_test_armory();
    let state: State = issue(&armory);
    assert_eq!(state.custody.holders_of(&armory.serial), vec![armory.guard]);

    let (state, _) = run(
        &state,
        Command::ReturnGun {
            serial: armory.serial.clone(),
            staff_id: armory.guard,
        },
    );

    assert!(state.custody.guns_of(armory.guard).is_empty());
    assert!(
        state
            .custody
            .assignment(&armory.serial, armory.guard)
            .unwrap()
            .returned()
    );
}

#[test]
fn test_second_return_is_rejected() {
    let armory: Armory = create_test_armory();
    let state: State = issue(&armory);
    let (state, _) = run(
        &state,
        Command::ReturnGun {
            serial: armory.serial.clone(),
            staff_id: armory.guard,
        },
    );

    let err: CoreError = try_run(
        &state,
        Command::ReturnGun {
            serial: armory.serial.clone(),
            staff_id: armory.guard,
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::AlreadyReturned { .. })
    ));
}

#[test]
fn test_serial_numbers_are_unique_ignoring_case() {
    let armory: Armory = create_test_armory();

    let err: CoreError = try_run(
        &armory.state,
        Command::RegisterGun {
            serial: SerialNumber::new("SN-001").unwrap(),
            gun_type: String::from("Rifle"),
            name: String::from("AR-15"),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::DuplicateSerialNumber(_))
    ));
}

#[test]
fn test_retire_issued_weapon_is_rejected() {
    let armory: Armory = create_test_armory();
    let state: State = issue(&armory);

    let err: CoreError = try_run(
        &state,
        Command::RetireGun {
            serial: armory.serial.clone(),
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::GunInCustody {
            serial: armory.serial.clone(),
            holders: 1,
        }
    );
}

#[test]
fn test_retire_returned_weapon_drops_history() {
    let armory: Armory = create_test_armory();
    let state: State = issue(&armory);
    let (state, _) = run(
        &state,
        Command::ReturnGun {
            serial: armory.serial.clone(),
            staff_id: armory.guard,
        },
    );

    let (state, _) = run(
        &state,
        Command::RetireGun {
            serial: armory.serial.clone(),
        },
    );

    assert!(state.guns.is_empty());
    assert!(state.custody.is_empty());
}

#[test]
fn test_dismissing_armed_staff_is_rejected() {
    let armory: Armory = create_test_armory();
    let state: State = issue(&armory);

    let err: CoreError = try_run(
        &state,
        Command::DismissStaff {
            staff_id: armory.guard,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::StaffHoldsWeapons {
            staff_id: armory.guard,
            weapons: 1,
        }
    );
}

#[test]
fn test_armed_staff_cannot_leave_security() {
    let armory: Armory = create_test_armory();
    let state: State = issue(&armory);

    let err: CoreError = try_run(
        &state,
        Command::UpdateStaff {
            staff_id: armory.guard,
            name: None,
            salary_cents: None,
            phone: None,
            role: None,
            department_id: Some(armory.kitchen),
        },
    )
    .unwrap_err();

    assert!(matches!(err, CoreError::SecurityClearanceRequired { .. }));
    assert_eq!(
        state.staff_member(armory.guard).unwrap().department_id(),
        armory.security
    );
}

#[test]
fn test_security_department_cannot_be_renamed_while_armed() {
    let armory: Armory = create_test_armory();
    let state: State = issue(&armory);

    let err: CoreError = try_run(
        &state,
        Command::UpdateDepartment {
            department_id: armory.security,
            department_type: Some(String::from("Maintenance")),
            status: None,
        },
    )
    .unwrap_err();

    assert!(matches!(err, CoreError::SecurityClearanceRequired { .. }));
}

#[test]
fn test_issue_unknown_weapon() {
    let armory: Armory = create_test_armory();

    let err: CoreError = try_run(
        &armory.state,
        Command::AssignGun {
            serial: SerialNumber::new("missing").unwrap(),
            staff_id: armory.guard,
        },
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}
