// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Address, Block, BlockId, Cell, CellId, Department, DepartmentId, Facility, FacilityId, Gender,
    Prisoner, PrisonerId, Room, RoomId,
};
use time::Date;
use time::macros::date;

pub fn create_test_today() -> Date {
    date!(2026 - 01 - 15)
}

pub fn create_test_prisoner(id: i64) -> Prisoner {
    Prisoner::new(
        PrisonerId::new(id),
        &format!("Prisoner {id}"),
        date!(1990 - 05 - 20),
        date!(2024 - 03 - 01),
        date!(2030 - 03 - 01),
        Gender::Male,
        create_test_today(),
    )
    .unwrap()
}

pub fn create_test_cell(id: i64, capacity: u32) -> Cell {
    Cell::new(CellId::new(id), "Standard", capacity).unwrap()
}

pub fn create_test_block(id: i64) -> Block {
    Block::new(BlockId::new(id), "General Population").unwrap()
}

pub fn create_test_facility(id: i64) -> Facility {
    let address: Address = Address::new("1 Main Street", "Springfield", "IL", "USA").unwrap();
    Facility::new(FacilityId::new(id), "County Correctional", address).unwrap()
}

pub fn create_test_department(id: i64, department_type: &str) -> Department {
    Department::new(DepartmentId::new(id), department_type).unwrap()
}

pub fn create_test_room(id: i64) -> Room {
    Room::new(RoomId::new(id), "Office", None).unwrap()
}
