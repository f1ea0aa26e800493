// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, State, TransitionResult, apply};
use time::Date;
use time::macros::date;
use warden_audit::{Actor, Cause};
use warden_domain::{
    Address, BlockId, CellId, DepartmentId, FacilityId, Gender, PrisonerId, StaffGender, StaffId,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("officer-17"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Shift change"))
}

pub const fn create_test_today() -> Date {
    date!(2026 - 01 - 15)
}

pub fn create_test_address() -> Address {
    Address::new("1 Main Street", "Springfield", "IL", "USA").unwrap()
}

/// Applies a command with the test actor, cause and date.
pub fn try_run(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    apply(
        state,
        command,
        create_test_actor(),
        create_test_cause(),
        create_test_today(),
    )
}

/// Applies a command that must succeed and returns the new state and the
/// created id, if any.
pub fn run(state: &State, command: Command) -> (State, Option<i64>) {
    let result: TransitionResult = try_run(state, command).unwrap();
    (result.new_state, result.created_id)
}

pub fn create_facility(state: &State) -> (State, FacilityId) {
    let (state, id) = run(
        state,
        Command::CreateFacility {
            name: String::from("North Ridge"),
            address: create_test_address(),
        },
    );
    (state, FacilityId::new(id.unwrap()))
}

pub fn create_block(state: &State, facility_id: FacilityId, block_type: &str) -> (State, BlockId) {
    let (state, id) = run(
        state,
        Command::CreateBlock {
            facility_id,
            block_type: String::from(block_type),
        },
    );
    (state, BlockId::new(id.unwrap()))
}

pub fn create_cell(
    state: &State,
    block_id: BlockId,
    cell_type: &str,
    capacity: u32,
) -> (State, CellId) {
    let (state, id) = run(
        state,
        Command::CreateCell {
            block_id,
            cell_type: String::from(cell_type),
            capacity,
        },
    );
    (state, CellId::new(id.unwrap()))
}

pub fn admit_command(cell_id: CellId, name: &str) -> Command {
    Command::AdmitPrisoner {
        cell_id,
        name: String::from(name),
        date_of_birth: date!(1990 - 05 - 20),
        sentence_start: date!(2024 - 03 - 01),
        sentence_end: date!(2030 - 03 - 01),
        gender: Gender::Male,
    }
}

pub fn admit(state: &State, cell_id: CellId, name: &str) -> (State, PrisonerId) {
    let (state, id) = run(state, admit_command(cell_id, name));
    (state, PrisonerId::new(id.unwrap()))
}

pub fn create_department(state: &State, department_type: &str) -> (State, DepartmentId) {
    let (state, id) = run(
        state,
        Command::CreateDepartment {
            department_type: String::from(department_type),
        },
    );
    (state, DepartmentId::new(id.unwrap()))
}

pub fn hire_command(name: &str, department_id: DepartmentId) -> Command {
    Command::HireStaff {
        name: String::from(name),
        salary_cents: 4_500_000,
        phone: String::from("555-0100"),
        date_of_birth: date!(1985 - 02 - 11),
        gender: StaffGender::Female,
        role: String::from("Officer"),
        department_id,
    }
}

pub fn hire(state: &State, name: &str, department_id: DepartmentId) -> (State, StaffId) {
    let (state, id) = run(state, hire_command(name, department_id));
    (state, StaffId::new(id.unwrap()))
}

/// A facility with one block holding a standard cell of the given capacity.
pub struct Housing {
    pub state: State,
    pub facility_id: FacilityId,
    pub block_id: BlockId,
    pub cell_id: CellId,
}

pub fn create_test_housing(capacity: u32) -> Housing {
    let (state, facility_id) = create_facility(&State::new());
    let (state, block_id) = create_block(&state, facility_id, "General Population");
    let (state, cell_id) = create_cell(&state, block_id, "Standard", capacity);
    Housing {
        state,
        facility_id,
        block_id,
        cell_id,
    }
}
