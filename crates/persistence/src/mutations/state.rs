// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-state replacement.
//!
//! The normalized tables always hold exactly one state: the one produced by
//! the latest persisted transition. Saving clears every entity table (children
//! first so foreign keys hold at every step) and writes the aggregate back
//! parent first.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use warden::State;
use warden_domain::{
    Address, Block, Cell, Day, Department, Facility, Prisoner, Room, Schedule, Staff, format_time,
};

use crate::diesel_schema;
use crate::error::PersistenceError;

/// Converts a collection index into a stored position.
fn position(index: usize) -> Result<i32, PersistenceError> {
    i32::try_from(index)
        .map_err(|_| PersistenceError::SerializationError(format!("position {index} overflows")))
}

/// Converts an unsigned count into a stored integer.
fn stored_count(field: &str, value: u32) -> Result<i32, PersistenceError> {
    i32::try_from(value)
        .map_err(|_| PersistenceError::SerializationError(format!("{field} {value} overflows")))
}

/// Deletes every entity row.
///
/// Audit events are left untouched.
///
/// # Errors
///
/// Returns an error if any delete fails.
pub fn clear_state(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::delete(diesel_schema::visit_logs::table).execute(conn)?;
    diesel::delete(diesel_schema::gun_assignments::table).execute(conn)?;
    diesel::delete(diesel_schema::guns::table).execute(conn)?;
    diesel::delete(diesel_schema::schedules::table).execute(conn)?;
    diesel::delete(diesel_schema::supervision::table).execute(conn)?;
    diesel::delete(diesel_schema::staff::table).execute(conn)?;
    diesel::delete(diesel_schema::containment::table).execute(conn)?;
    diesel::delete(diesel_schema::expenses::table).execute(conn)?;
    diesel::delete(diesel_schema::departments::table).execute(conn)?;
    diesel::delete(diesel_schema::equipment::table).execute(conn)?;
    diesel::delete(diesel_schema::rooms::table).execute(conn)?;
    diesel::delete(diesel_schema::medical_notes::table).execute(conn)?;
    diesel::delete(diesel_schema::crime_records::table).execute(conn)?;
    diesel::delete(diesel_schema::prisoners::table).execute(conn)?;
    diesel::delete(diesel_schema::cells::table).execute(conn)?;
    diesel::delete(diesel_schema::blocks::table).execute(conn)?;
    diesel::delete(diesel_schema::facilities::table).execute(conn)?;
    diesel::delete(diesel_schema::visitors::table).execute(conn)?;
    diesel::delete(diesel_schema::state_meta::table).execute(conn)?;
    Ok(())
}

/// Replaces the stored state with `state`.
///
/// Callers are expected to run this inside a transaction.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `state` - The state to write
///
/// # Errors
///
/// Returns an error if any row cannot be written.
pub fn write_state(conn: &mut SqliteConnection, state: &State) -> Result<(), PersistenceError> {
    clear_state(conn)?;

    diesel::insert_into(diesel_schema::state_meta::table)
        .values((
            diesel_schema::state_meta::meta_id.eq(1),
            diesel_schema::state_meta::next_id.eq(state.next_id),
        ))
        .execute(conn)?;

    for facility in state.facilities.values() {
        insert_facility(conn, facility)?;
    }
    for room in state.rooms.values() {
        insert_room(conn, room)?;
    }
    for department in state.departments.values() {
        insert_department(conn, department)?;
    }
    for key in state.containment.iter() {
        diesel::insert_into(diesel_schema::containment::table)
            .values((
                diesel_schema::containment::block_id.eq(key.block_id().value()),
                diesel_schema::containment::department_id.eq(key.department_id().value()),
                diesel_schema::containment::room_id.eq(key.room_id().value()),
            ))
            .execute(conn)?;
    }
    for member in state.staff.values() {
        insert_staff(conn, member)?;
    }
    for edge in state.supervision.edges() {
        diesel::insert_into(diesel_schema::supervision::table)
            .values((
                diesel_schema::supervision::subordinate_id.eq(edge.subordinate().value()),
                diesel_schema::supervision::supervisor_id.eq(edge.supervisor().value()),
            ))
            .execute(conn)?;
    }
    for schedule in state.schedules.values() {
        insert_schedule(conn, schedule)?;
    }
    for gun in state.guns.values() {
        diesel::insert_into(diesel_schema::guns::table)
            .values((
                diesel_schema::guns::serial_number.eq(gun.serial().as_str()),
                diesel_schema::guns::gun_type.eq(gun.gun_type()),
                diesel_schema::guns::name.eq(gun.name()),
            ))
            .execute(conn)?;
    }
    for assignment in state.custody.entries() {
        diesel::insert_into(diesel_schema::gun_assignments::table)
            .values((
                diesel_schema::gun_assignments::serial_number.eq(assignment.serial().as_str()),
                diesel_schema::gun_assignments::staff_id.eq(assignment.staff_id().value()),
                diesel_schema::gun_assignments::returned.eq(assignment.returned()),
            ))
            .execute(conn)?;
    }
    for visitor in state.visitors.values() {
        diesel::insert_into(diesel_schema::visitors::table)
            .values((
                diesel_schema::visitors::visitor_id.eq(visitor.id().value()),
                diesel_schema::visitors::name.eq(visitor.name()),
                diesel_schema::visitors::relationship.eq(visitor.relationship()),
                diesel_schema::visitors::phone.eq(visitor.phone()),
            ))
            .execute(conn)?;
    }
    for (index, log) in state.visit_logs.iter().enumerate() {
        diesel::insert_into(diesel_schema::visit_logs::table)
            .values((
                diesel_schema::visit_logs::position.eq(position(index)?),
                diesel_schema::visit_logs::visitor_id.eq(log.visitor_id().value()),
                diesel_schema::visit_logs::prisoner_id.eq(log.prisoner_id().value()),
                diesel_schema::visit_logs::visit_date.eq(log.visit_date().to_string()),
                diesel_schema::visit_logs::notes.eq(log.notes()),
            ))
            .execute(conn)?;
    }

    debug!(
        facilities = state.facilities.len(),
        staff = state.staff.len(),
        next_id = state.next_id,
        "Wrote state tables"
    );

    Ok(())
}

fn insert_facility(
    conn: &mut SqliteConnection,
    facility: &Facility,
) -> Result<(), PersistenceError> {
    let address: &Address = facility.address();
    diesel::insert_into(diesel_schema::facilities::table)
        .values((
            diesel_schema::facilities::facility_id.eq(facility.id().value()),
            diesel_schema::facilities::name.eq(facility.name()),
            diesel_schema::facilities::street.eq(address.street()),
            diesel_schema::facilities::city.eq(address.city()),
            diesel_schema::facilities::state.eq(address.state()),
            diesel_schema::facilities::country.eq(address.country()),
        ))
        .execute(conn)?;

    for block in facility.blocks() {
        insert_block(conn, facility, block)?;
    }
    Ok(())
}

fn insert_block(
    conn: &mut SqliteConnection,
    facility: &Facility,
    block: &Block,
) -> Result<(), PersistenceError> {
    diesel::insert_into(diesel_schema::blocks::table)
        .values((
            diesel_schema::blocks::block_id.eq(block.id().value()),
            diesel_schema::blocks::facility_id.eq(facility.id().value()),
            diesel_schema::blocks::block_type.eq(block.block_type()),
        ))
        .execute(conn)?;

    for cell in block.cells() {
        insert_cell(conn, block, cell)?;
    }
    Ok(())
}

fn insert_cell(
    conn: &mut SqliteConnection,
    block: &Block,
    cell: &Cell,
) -> Result<(), PersistenceError> {
    diesel::insert_into(diesel_schema::cells::table)
        .values((
            diesel_schema::cells::cell_id.eq(cell.id().value()),
            diesel_schema::cells::block_id.eq(block.id().value()),
            diesel_schema::cells::cell_type.eq(cell.cell_type()),
            diesel_schema::cells::capacity.eq(stored_count("capacity", cell.capacity())?),
        ))
        .execute(conn)?;

    for (index, prisoner) in cell.occupants().iter().enumerate() {
        insert_prisoner(conn, cell, index, prisoner)?;
    }
    Ok(())
}

fn insert_prisoner(
    conn: &mut SqliteConnection,
    cell: &Cell,
    index: usize,
    prisoner: &Prisoner,
) -> Result<(), PersistenceError> {
    let prisoner_id: i64 = prisoner.id().value();
    diesel::insert_into(diesel_schema::prisoners::table)
        .values((
            diesel_schema::prisoners::prisoner_id.eq(prisoner_id),
            diesel_schema::prisoners::cell_id.eq(cell.id().value()),
            diesel_schema::prisoners::position.eq(position(index)?),
            diesel_schema::prisoners::name.eq(prisoner.name()),
            diesel_schema::prisoners::date_of_birth.eq(prisoner.date_of_birth().to_string()),
            diesel_schema::prisoners::sentence_start.eq(prisoner.sentence_start().to_string()),
            diesel_schema::prisoners::sentence_end.eq(prisoner.sentence_end().to_string()),
            diesel_schema::prisoners::gender.eq(prisoner.gender().as_str()),
        ))
        .execute(conn)?;

    for (index, record) in prisoner.crime_records().iter().enumerate() {
        diesel::insert_into(diesel_schema::crime_records::table)
            .values((
                diesel_schema::crime_records::prisoner_id.eq(prisoner_id),
                diesel_schema::crime_records::position.eq(position(index)?),
                diesel_schema::crime_records::crime_type.eq(record.crime_type()),
                diesel_schema::crime_records::description.eq(record.description()),
                diesel_schema::crime_records::offence_date.eq(record.offence_date().to_string()),
            ))
            .execute(conn)?;
    }
    for (index, note) in prisoner.medical_notes().iter().enumerate() {
        diesel::insert_into(diesel_schema::medical_notes::table)
            .values((
                diesel_schema::medical_notes::prisoner_id.eq(prisoner_id),
                diesel_schema::medical_notes::position.eq(position(index)?),
                diesel_schema::medical_notes::recorded_on.eq(note.recorded_on().to_string()),
                diesel_schema::medical_notes::note.eq(note.note()),
            ))
            .execute(conn)?;
    }
    Ok(())
}

fn insert_room(conn: &mut SqliteConnection, room: &Room) -> Result<(), PersistenceError> {
    diesel::insert_into(diesel_schema::rooms::table)
        .values((
            diesel_schema::rooms::room_id.eq(room.id().value()),
            diesel_schema::rooms::room_type.eq(room.room_type()),
            diesel_schema::rooms::description.eq(room.description()),
        ))
        .execute(conn)?;

    for (index, item) in room.equipment().iter().enumerate() {
        diesel::insert_into(diesel_schema::equipment::table)
            .values((
                diesel_schema::equipment::room_id.eq(room.id().value()),
                diesel_schema::equipment::position.eq(position(index)?),
                diesel_schema::equipment::name.eq(item.name()),
                diesel_schema::equipment::quantity.eq(stored_count("quantity", item.quantity())?),
            ))
            .execute(conn)?;
    }
    Ok(())
}

fn insert_department(
    conn: &mut SqliteConnection,
    department: &Department,
) -> Result<(), PersistenceError> {
    diesel::insert_into(diesel_schema::departments::table)
        .values((
            diesel_schema::departments::department_id.eq(department.id().value()),
            diesel_schema::departments::department_type.eq(department.department_type()),
            diesel_schema::departments::status.eq(department.status().as_str()),
        ))
        .execute(conn)?;

    for (index, expense) in department.expenses().iter().enumerate() {
        diesel::insert_into(diesel_schema::expenses::table)
            .values((
                diesel_schema::expenses::department_id.eq(department.id().value()),
                diesel_schema::expenses::position.eq(position(index)?),
                diesel_schema::expenses::description.eq(expense.description()),
                diesel_schema::expenses::amount_cents.eq(expense.amount_cents()),
                diesel_schema::expenses::incurred_on.eq(expense.incurred_on().to_string()),
            ))
            .execute(conn)?;
    }
    Ok(())
}

fn insert_staff(conn: &mut SqliteConnection, member: &Staff) -> Result<(), PersistenceError> {
    diesel::insert_into(diesel_schema::staff::table)
        .values((
            diesel_schema::staff::staff_id.eq(member.id().value()),
            diesel_schema::staff::name.eq(member.name()),
            diesel_schema::staff::salary_cents.eq(member.salary_cents()),
            diesel_schema::staff::phone.eq(member.phone()),
            diesel_schema::staff::date_of_birth.eq(member.date_of_birth().to_string()),
            diesel_schema::staff::gender.eq(member.gender().as_str()),
            diesel_schema::staff::role.eq(member.role()),
            diesel_schema::staff::department_id.eq(member.department_id().value()),
        ))
        .execute(conn)?;
    Ok(())
}

fn insert_schedule(
    conn: &mut SqliteConnection,
    schedule: &Schedule,
) -> Result<(), PersistenceError> {
    let days: String = schedule
        .days()
        .iter()
        .map(Day::as_str)
        .collect::<Vec<&str>>()
        .join(",");

    diesel::insert_into(diesel_schema::schedules::table)
        .values((
            diesel_schema::schedules::schedule_id.eq(schedule.id().value()),
            diesel_schema::schedules::staff_id.eq(schedule.staff_id().value()),
            diesel_schema::schedules::days.eq(days),
            diesel_schema::schedules::start_time.eq(schedule.start().map(format_time)),
            diesel_schema::schedules::end_time.eq(schedule.end().map(format_time)),
        ))
        .execute(conn)?;
    Ok(())
}
