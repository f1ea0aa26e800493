// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    Housing, create_block, create_department, create_test_housing, hire, run, try_run,
};
use crate::{Command, CoreError, State};
use time::macros::date;
use warden_domain::{
    BlockId, ContainmentKey, DepartmentId, DepartmentStatus, DomainError, ErrorKind, RoomId,
};

fn create_room(state: &State, room_type: &str) -> (State, RoomId) {
    let (state, id) = run(
        state,
        Command::CreateRoom {
            room_type: String::from(room_type),
            description: Some(String::from("Ground floor")),
        },
    );
    (state, RoomId::new(id.unwrap()))
}

fn add_expense(state: &State, department_id: DepartmentId, amount_cents: i64) -> State {
    run(
        state,
        Command::AddExpense {
            department_id,
            description: String::from("Supplies"),
            amount_cents,
            incurred_on: date!(2026 - 01 - 02),
        },
    )
    .0
}

fn link(state: &State, block_id: BlockId, department_id: DepartmentId, room_id: RoomId) -> State {
    run(
        state,
        Command::LinkContainment {
            block_id,
            department_id,
            room_id,
        },
    )
    .0
}

#[test]
fn test_link_requires_all_participants() {
    let housing: Housing = create_test_housing(1);
    let (state, department_id) = create_department(&housing.state, "Medical");

    let err: CoreError = try_run(
        &state,
        Command::LinkContainment {
            block_id: housing.block_id,
            department_id,
            room_id: RoomId::new(999),
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::MissingParticipant {
            participant: "room",
            id: String::from("999"),
        })
    );
    assert_eq!(err.kind(), ErrorKind::ReferentialIntegrity);
    assert!(state.containment.is_empty());
}

#[test]
fn test_duplicate_link_is_noop() {
    let housing: Housing = create_test_housing(1);
    let (state, department_id) = create_department(&housing.state, "Medical");
    let (state, room_id) = create_room(&state, "Infirmary");
    let state: State = link(&state, housing.block_id, department_id, room_id);

    let state: State = link(&state, housing.block_id, department_id, room_id);

    assert_eq!(state.containment.len(), 1);
    assert!(state.containment.contains(&ContainmentKey::from_ids(
        housing.block_id,
        department_id,
        room_id
    )));
}

#[test]
fn test_unlink_missing_association() {
    let housing: Housing = create_test_housing(1);

    let err: CoreError = try_run(
        &housing.state,
        Command::UnlinkContainment {
            block_id: housing.block_id,
            department_id: DepartmentId::new(8),
            room_id: RoomId::new(9),
        },
    )
    .unwrap_err();

    assert!(matches!(err, CoreError::AssociationNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_block_expenses_count_each_department_once() {
    let housing: Housing = create_test_housing(1);
    let (state, medical) = create_department(&housing.state, "Medical Services");
    let (state, kitchen) = create_department(&state, "Kitchen");
    let (state, infirmary) = create_room(&state, "Infirmary");
    let (state, pharmacy) = create_room(&state, "Pharmacy");
    let (state, galley) = create_room(&state, "Galley");
    let state: State = add_expense(&state, medical, 10_000);
    let state: State = add_expense(&state, medical, 2_500);
    let state: State = add_expense(&state, kitchen, 4_000);
    let state: State = link(&state, housing.block_id, medical, infirmary);
    let state: State = link(&state, housing.block_id, medical, pharmacy);
    let state: State = link(&state, housing.block_id, kitchen, galley);

    assert_eq!(state.block_total_expenses(housing.block_id), 16_500);
    assert!(state.block_has_medical_department(housing.block_id));
}

#[test]
fn test_block_without_links_has_no_expenses() {
    let housing: Housing = create_test_housing(1);
    let (state, other_block) = create_block(&housing.state, housing.facility_id, "Annex");
    let (state, kitchen) = create_department(&state, "Kitchen");
    let (state, galley) = create_room(&state, "Galley");
    let state: State = add_expense(&state, kitchen, 4_000);
    let state: State = link(&state, housing.block_id, kitchen, galley);

    assert_eq!(state.block_total_expenses(other_block), 0);
    assert!(!state.block_has_medical_department(housing.block_id));
}

#[test]
fn test_negative_expense_is_rejected() {
    let (state, kitchen) = create_department(&State::new(), "Kitchen");

    let err: CoreError = try_run(
        &state,
        Command::AddExpense {
            department_id: kitchen,
            description: String::from("Refund"),
            amount_cents: -1,
            incurred_on: date!(2026 - 01 - 02),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::NegativeAmount { .. })
    ));
}

#[test]
fn test_delete_department_with_staff_is_rejected() {
    let (state, kitchen) = create_department(&State::new(), "Kitchen");
    let (state, _) = hire(&state, "Ann Cook", kitchen);

    let err: CoreError = try_run(
        &state,
        Command::DeleteDepartment {
            department_id: kitchen,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::DepartmentHasStaff {
            department_id: kitchen,
            staff: 1,
        }
    );
}

#[test]
fn test_delete_department_and_room_drop_links() {
    let housing: Housing = create_test_housing(1);
    let (state, medical) = create_department(&housing.state, "Medical");
    let (state, kitchen) = create_department(&state, "Kitchen");
    let (state, infirmary) = create_room(&state, "Infirmary");
    let state: State = link(&state, housing.block_id, medical, infirmary);
    let state: State = link(&state, housing.block_id, kitchen, infirmary);

    let (state, _) = run(
        &state,
        Command::DeleteDepartment {
            department_id: medical,
        },
    );
    assert_eq!(state.containment.len(), 1);

    let (state, _) = run(&state, Command::DeleteRoom { room_id: infirmary });
    assert!(state.containment.is_empty());
    assert!(state.room(infirmary).is_err());
}

#[test]
fn test_update_department_status_and_equipment_merge() {
    let (state, kitchen) = create_department(&State::new(), "Kitchen");
    let (state, galley) = create_room(&state, "Galley");

    let (state, _) = run(
        &state,
        Command::UpdateDepartment {
            department_id: kitchen,
            department_type: None,
            status: Some(DepartmentStatus::Inactive),
        },
    );
    let (state, _) = run(
        &state,
        Command::AddEquipment {
            room_id: galley,
            name: String::from("Stove"),
            quantity: 2,
        },
    );
    let (state, _) = run(
        &state,
        Command::AddEquipment {
            room_id: galley,
            name: String::from("stove"),
            quantity: 1,
        },
    );

    assert_eq!(
        state.department(kitchen).unwrap().status(),
        DepartmentStatus::Inactive
    );
    assert_eq!(state.room(galley).unwrap().equipment().len(), 1);
    assert_eq!(state.room(galley).unwrap().equipment()[0].quantity(), 3);
}
