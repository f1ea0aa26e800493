// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rooms, departments and the containment association between them and
//! housing blocks.

use crate::apply::Outcome;
use crate::error::CoreError;
use crate::state::State;
use time::Date;
use warden_domain::{
    Block, BlockId, ContainmentKey, Department, DepartmentId, DepartmentStatus, DomainError,
    Equipment, Expense, Room, RoomId,
};

pub fn create_room(
    state: &mut State,
    room_type: &str,
    description: Option<&str>,
) -> Result<Outcome, CoreError> {
    let room_id: RoomId = RoomId::new(state.allocate_id());
    let room: Room = Room::new(room_id, room_type, description)?;
    state.rooms.insert(room_id, room);
    Ok(Outcome::created(format!("Created room {room_id}"), room_id.value()))
}

pub fn update_room(
    state: &mut State,
    room_id: RoomId,
    room_type: Option<&str>,
    description: Option<&str>,
) -> Result<Outcome, CoreError> {
    let room: &mut Room = state
        .rooms
        .get_mut(&room_id)
        .ok_or(DomainError::RoomNotFound(room_id))?;
    if let Some(room_type) = room_type {
        room.set_room_type(room_type)?;
    }
    if let Some(description) = description {
        room.set_description(Some(description))?;
    }
    Ok(Outcome::updated(format!("Updated room {room_id}")))
}

pub fn add_equipment(
    state: &mut State,
    room_id: RoomId,
    name: &str,
    quantity: u32,
) -> Result<Outcome, CoreError> {
    let equipment: Equipment = Equipment::new(name, quantity)?;
    state
        .rooms
        .get_mut(&room_id)
        .ok_or(DomainError::RoomNotFound(room_id))?
        .add_equipment(equipment);
    Ok(Outcome::updated(format!(
        "Added {quantity} x '{}' to room {room_id}",
        name.trim()
    )))
}

pub fn delete_room(state: &mut State, room_id: RoomId) -> Result<Outcome, CoreError> {
    state
        .rooms
        .remove(&room_id)
        .ok_or(DomainError::RoomNotFound(room_id))?;
    let links: usize = state.containment.remove_room(room_id);
    Ok(Outcome::updated(format!(
        "Deleted room {room_id} and {links} containment links"
    )))
}

pub fn create_department(state: &mut State, department_type: &str) -> Result<Outcome, CoreError> {
    let department_id: DepartmentId = DepartmentId::new(state.allocate_id());
    let department: Department = Department::new(department_id, department_type)?;
    state.departments.insert(department_id, department);
    Ok(Outcome::created(
        format!("Created department {department_id}"),
        department_id.value(),
    ))
}

/// Changes a department's type and/or status.
///
/// A department whose members hold weapons cannot stop being the security
/// department.
pub fn update_department(
    state: &mut State,
    department_id: DepartmentId,
    department_type: Option<&str>,
    status: Option<DepartmentStatus>,
) -> Result<Outcome, CoreError> {
    let was_security: bool = state.department(department_id)?.is_security();
    let department: &mut Department = state
        .departments
        .get_mut(&department_id)
        .ok_or(DomainError::DepartmentNotFound(department_id))?;
    if let Some(department_type) = department_type {
        department.set_department_type(department_type)?;
    }
    if let Some(status) = status {
        department.set_status(status);
    }

    if was_security && !department.is_security() {
        let new_type: String = department.department_type().to_string();
        if let Some(holder) = state
            .staff_of_department(department_id)
            .into_iter()
            .find(|s| !state.custody.guns_of(s.id()).is_empty())
        {
            return Err(CoreError::SecurityClearanceRequired {
                staff_id: holder.id(),
                department_type: new_type,
            });
        }
    }
    Ok(Outcome::updated(format!("Updated department {department_id}")))
}

pub fn add_expense(
    state: &mut State,
    department_id: DepartmentId,
    description: &str,
    amount_cents: i64,
    incurred_on: Date,
) -> Result<Outcome, CoreError> {
    let expense: Expense = Expense::new(description, amount_cents, incurred_on)?;
    state
        .departments
        .get_mut(&department_id)
        .ok_or(DomainError::DepartmentNotFound(department_id))?
        .add_expense(expense);
    Ok(Outcome::updated(format!(
        "Booked {amount_cents} cents against department {department_id}"
    )))
}

pub fn delete_department(
    state: &mut State,
    department_id: DepartmentId,
) -> Result<Outcome, CoreError> {
    state.department(department_id)?;
    let staff: usize = state.staff_of_department(department_id).len();
    if staff > 0 {
        return Err(CoreError::DepartmentHasStaff {
            department_id,
            staff,
        });
    }
    state.departments.remove(&department_id);
    let links: usize = state.containment.remove_department(department_id);
    Ok(Outcome::updated(format!(
        "Deleted department {department_id} and {links} containment links"
    )))
}

fn missing(participant: &'static str, id: impl ToString) -> DomainError {
    DomainError::MissingParticipant {
        participant,
        id: id.to_string(),
    }
}

/// Resolves all three participants, so only existing entities are linked.
fn resolve_key(
    state: &State,
    block_id: BlockId,
    department_id: DepartmentId,
    room_id: RoomId,
) -> Result<ContainmentKey, DomainError> {
    let block: &Block = state.block(block_id).map_err(|_| missing("block", block_id))?;
    let department: &Department = state
        .department(department_id)
        .map_err(|_| missing("department", department_id))?;
    let room: &Room = state.room(room_id).map_err(|_| missing("room", room_id))?;
    Ok(ContainmentKey::new(block, department, room))
}

pub fn link(
    state: &mut State,
    block_id: BlockId,
    department_id: DepartmentId,
    room_id: RoomId,
) -> Result<Outcome, CoreError> {
    let key: ContainmentKey = resolve_key(state, block_id, department_id, room_id)?;
    let details: String = if state.containment.insert(key) {
        format!("Linked block {block_id}, department {department_id} and room {room_id}")
    } else {
        format!("Block {block_id}, department {department_id} and room {room_id} already linked")
    };
    Ok(Outcome::updated(details))
}

pub fn unlink(
    state: &mut State,
    block_id: BlockId,
    department_id: DepartmentId,
    room_id: RoomId,
) -> Result<Outcome, CoreError> {
    let key: ContainmentKey = ContainmentKey::from_ids(block_id, department_id, room_id);
    if !state.containment.remove(&key) {
        return Err(CoreError::AssociationNotFound {
            block_id,
            department_id,
            room_id,
        });
    }
    Ok(Outcome::updated(format!(
        "Unlinked block {block_id}, department {department_id} and room {room_id}"
    )))
}
