// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use crate::Persistence;
use time::Date;
use time::macros::date;
use warden::{Command, State, TransitionResult, apply};
use warden_audit::{Actor, Cause};
use warden_domain::{Address, BlockId, CellId, DepartmentId, FacilityId, StaffGender, StaffId};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("officer-17"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Shift change"))
}

pub const fn create_test_today() -> Date {
    date!(2026 - 01 - 15)
}

/// Applies commands and persists every resulting transition.
pub struct Recorder {
    pub persistence: Persistence,
    pub state: State,
    pub event_ids: Vec<i64>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            persistence: Persistence::new_in_memory().unwrap(),
            state: State::new(),
            event_ids: Vec::new(),
        }
    }

    /// Applies a command that must succeed, persists it and returns the
    /// created id.
    pub fn run(&mut self, command: Command) -> Option<i64> {
        let result: TransitionResult = apply(
            &self.state,
            command,
            create_test_actor(),
            create_test_cause(),
            create_test_today(),
        )
        .unwrap();
        let event_id: i64 = self.persistence.persist_transition(&result).unwrap();
        self.event_ids.push(event_id);
        self.state = result.new_state;
        result.created_id
    }

    pub fn create_facility(&mut self) -> FacilityId {
        FacilityId::new(
            self.run(Command::CreateFacility {
                name: String::from("North Ridge"),
                address: Address::new("1 Main Street", "Springfield", "IL", "USA").unwrap(),
            })
            .unwrap(),
        )
    }

    pub fn create_block(&mut self, facility_id: FacilityId, block_type: &str) -> BlockId {
        BlockId::new(
            self.run(Command::CreateBlock {
                facility_id,
                block_type: String::from(block_type),
            })
            .unwrap(),
        )
    }

    pub fn create_cell(&mut self, block_id: BlockId, cell_type: &str, capacity: u32) -> CellId {
        CellId::new(
            self.run(Command::CreateCell {
                block_id,
                cell_type: String::from(cell_type),
                capacity,
            })
            .unwrap(),
        )
    }

    pub fn create_department(&mut self, department_type: &str) -> DepartmentId {
        DepartmentId::new(
            self.run(Command::CreateDepartment {
                department_type: String::from(department_type),
            })
            .unwrap(),
        )
    }

    pub fn hire(&mut self, name: &str, department_id: DepartmentId) -> StaffId {
        StaffId::new(
            self.run(Command::HireStaff {
                name: String::from(name),
                salary_cents: 4_500_000,
                phone: String::from("555-0100"),
                date_of_birth: date!(1985 - 02 - 11),
                gender: StaffGender::Other,
                role: String::from("Officer"),
                department_id,
            })
            .unwrap(),
        )
    }
}
