// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    Housing, admit_command, create_facility, create_test_actor, create_test_address,
    create_test_cause, create_test_housing, create_test_today, run, try_run,
};
use crate::{Command, CoreError, State, TransitionResult, apply};
use warden_audit::{Actor, Cause};
use warden_domain::{DomainError, ErrorKind, FacilityId};

#[test]
fn test_valid_command_returns_new_state() {
    let state: State = State::new();
    let command: Command = Command::CreateFacility {
        name: String::from("North Ridge"),
        address: create_test_address(),
    };

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        command,
        create_test_actor(),
        create_test_cause(),
        create_test_today(),
    );

    let transition: TransitionResult = result.unwrap();
    assert_eq!(transition.new_state.facilities.len(), 1);
    assert_eq!(transition.created_id, Some(1));
    let facility_id: FacilityId = FacilityId::new(1);
    assert_eq!(
        transition.new_state.facility(facility_id).unwrap().name(),
        "North Ridge"
    );
}

#[test]
fn test_valid_command_emits_audit_event() {
    let state: State = State::new();
    let actor: Actor = create_test_actor();
    let cause: Cause = create_test_cause();

    let transition: TransitionResult = apply(
        &state,
        Command::CreateFacility {
            name: String::from("North Ridge"),
            address: create_test_address(),
        },
        actor,
        cause,
        create_test_today(),
    )
    .unwrap();

    assert_eq!(transition.audit_event.action.name, "CreateFacility");
    assert_eq!(transition.audit_event.actor.id, "officer-17");
    assert_eq!(transition.audit_event.cause.id, "req-456");
    assert!(transition.audit_event.event_id.is_none());
    assert!(
        transition
            .audit_event
            .action
            .details
            .as_ref()
            .unwrap()
            .contains("North Ridge")
    );
}

#[test]
fn test_audit_event_contains_before_and_after_state() {
    let housing: Housing = create_test_housing(2);

    let transition: TransitionResult =
        try_run(&housing.state, admit_command(housing.cell_id, "Jon Doe")).unwrap();

    assert!(transition.audit_event.before.data.contains("prisoners=0"));
    assert!(transition.audit_event.after.data.contains("prisoners=1"));
}

#[test]
fn test_failed_command_leaves_state_untouched() {
    let housing: Housing = create_test_housing(1);
    let snapshot: State = housing.state.clone();

    let result: Result<TransitionResult, CoreError> = try_run(
        &housing.state,
        Command::CreateCell {
            block_id: housing.block_id,
            cell_type: String::from("Isolation"),
            capacity: 2,
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::IsolationCapacity { .. }))
    ));
    assert_eq!(housing.state, snapshot);
}

#[test]
fn test_identifiers_are_shared_and_never_reused() {
    let (state, first) = create_facility(&State::new());
    let (state, _) = run(&state, Command::DeleteFacility { facility_id: first });
    let (state, second) = create_facility(&state);

    assert_eq!(first.value(), 1);
    assert_eq!(second.value(), 2);
    assert_eq!(state.next_id, 3);
}

#[test]
fn test_unknown_entity_is_not_found() {
    let state: State = State::new();

    let err: CoreError = try_run(
        &state,
        Command::DeleteFacility {
            facility_id: FacilityId::new(99),
        },
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::FacilityNotFound(FacilityId::new(99)))
    );
}

#[test]
fn test_every_command_name_matches_audit_action() {
    let housing: Housing = create_test_housing(1);
    let command: Command = Command::UpdateBlock {
        block_id: housing.block_id,
        block_type: String::from("Maximum"),
    };
    let name: &'static str = command.name();

    let transition: TransitionResult = try_run(&housing.state, command).unwrap();

    assert_eq!(name, "UpdateBlock");
    assert_eq!(transition.audit_event.action.name, name);
}
