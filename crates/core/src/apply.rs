// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::occupants::{Admission, PrisonerChanges};
use crate::personnel::{Hire, StaffChanges};
use crate::state::{State, TransitionResult};
use crate::{armory, housing, occupants, organization, personnel, visits};
use time::Date;
use tracing::{debug, info};
use warden_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};

/// What a handler reports back after mutating the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Human-readable summary recorded in the audit trail.
    pub details: String,
    /// The identifier handed out, for create commands.
    pub created_id: Option<i64>,
}

impl Outcome {
    pub(crate) const fn updated(details: String) -> Self {
        Self {
            details,
            created_id: None,
        }
    }

    pub(crate) const fn created(details: String, id: i64) -> Self {
        Self {
            details,
            created_id: Some(id),
        }
    }
}

/// Applies a command to the current state, producing a new state and audit event.
///
/// This is a pure function with no side effects. The input state is never
/// modified: the command runs against a working copy which is only returned
/// if every step succeeded.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `today` - The date used for every "not in the future" rule
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A referenced entity does not exist
/// - A field fails validation
/// - The command breaks a capacity, supervision, containment or custody rule
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let mut working: State = state.clone();

    let outcome: Outcome = dispatch(&mut working, command, today).inspect_err(|err| {
        debug!(command = name, error = %err, "Command rejected");
    })?;

    let before: StateSnapshot = state.to_snapshot();
    let after: StateSnapshot = working.to_snapshot();
    info!(
        command = name,
        actor = %actor.id,
        details = %outcome.details,
        "Applied command"
    );
    let action: Action = Action::new(String::from(name), Some(outcome.details));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

    Ok(TransitionResult {
        new_state: working,
        audit_event,
        created_id: outcome.created_id,
    })
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut State, command: Command, today: Date) -> Result<Outcome, CoreError> {
    match command {
        Command::CreateFacility { name, address } => {
            housing::create_facility(state, &name, address)
        }
        Command::UpdateFacility {
            facility_id,
            name,
            address,
        } => housing::update_facility(state, facility_id, name.as_deref(), address),
        Command::DeleteFacility { facility_id } => housing::delete_facility(state, facility_id),
        Command::CreateBlock {
            facility_id,
            block_type,
        } => housing::create_block(state, facility_id, &block_type),
        Command::UpdateBlock {
            block_id,
            block_type,
        } => housing::update_block(state, block_id, &block_type),
        Command::DeleteBlock { block_id } => housing::delete_block(state, block_id),
        Command::CreateCell {
            block_id,
            cell_type,
            capacity,
        } => housing::create_cell(state, block_id, &cell_type, capacity),
        Command::UpdateCell {
            cell_id,
            cell_type,
            capacity,
        } => housing::update_cell(state, cell_id, cell_type.as_deref(), capacity),
        Command::DeleteCell { cell_id } => housing::delete_cell(state, cell_id),
        Command::AdmitPrisoner {
            cell_id,
            name,
            date_of_birth,
            sentence_start,
            sentence_end,
            gender,
        } => occupants::admit(
            state,
            Admission {
                cell_id,
                name: &name,
                date_of_birth,
                sentence_start,
                sentence_end,
                gender,
            },
            today,
        ),
        Command::UpdatePrisoner {
            prisoner_id,
            name,
            date_of_birth,
            sentence_start,
            sentence_end,
            gender,
        } => occupants::update(
            state,
            prisoner_id,
            PrisonerChanges {
                name: name.as_deref(),
                date_of_birth,
                sentence_start,
                sentence_end,
                gender,
            },
            today,
        ),
        Command::TransferPrisoner {
            prisoner_id,
            to_cell_id,
        } => occupants::transfer(state, prisoner_id, to_cell_id),
        Command::ReleasePrisoner { prisoner_id } => occupants::release(state, prisoner_id),
        Command::AddCrimeRecord {
            prisoner_id,
            crime_type,
            description,
            offence_date,
        } => occupants::add_crime_record(
            state,
            prisoner_id,
            &crime_type,
            description.as_deref(),
            offence_date,
            today,
        ),
        Command::AddMedicalNote {
            prisoner_id,
            recorded_on,
            note,
        } => occupants::add_medical_note(state, prisoner_id, recorded_on, &note, today),
        Command::RegisterVisitor {
            name,
            relationship,
            phone,
        } => visits::register(state, &name, &relationship, &phone),
        Command::UpdateVisitor {
            visitor_id,
            name,
            relationship,
            phone,
        } => visits::update(
            state,
            visitor_id,
            name.as_deref(),
            relationship.as_deref(),
            phone.as_deref(),
        ),
        Command::RemoveVisitor { visitor_id } => visits::remove(state, visitor_id),
        Command::LogVisit {
            visitor_id,
            prisoner_id,
            visit_date,
            notes,
        } => visits::log_visit(
            state,
            visitor_id,
            prisoner_id,
            visit_date,
            notes.as_deref(),
            today,
        ),
        Command::CreateRoom {
            room_type,
            description,
        } => organization::create_room(state, &room_type, description.as_deref()),
        Command::UpdateRoom {
            room_id,
            room_type,
            description,
        } => organization::update_room(
            state,
            room_id,
            room_type.as_deref(),
            description.as_deref(),
        ),
        Command::AddEquipment {
            room_id,
            name,
            quantity,
        } => organization::add_equipment(state, room_id, &name, quantity),
        Command::DeleteRoom { room_id } => organization::delete_room(state, room_id),
        Command::CreateDepartment { department_type } => {
            organization::create_department(state, &department_type)
        }
        Command::UpdateDepartment {
            department_id,
            department_type,
            status,
        } => organization::update_department(
            state,
            department_id,
            department_type.as_deref(),
            status,
        ),
        Command::AddExpense {
            department_id,
            description,
            amount_cents,
            incurred_on,
        } => organization::add_expense(
            state,
            department_id,
            &description,
            amount_cents,
            incurred_on,
        ),
        Command::DeleteDepartment { department_id } => {
            organization::delete_department(state, department_id)
        }
        Command::LinkContainment {
            block_id,
            department_id,
            room_id,
        } => organization::link(state, block_id, department_id, room_id),
        Command::UnlinkContainment {
            block_id,
            department_id,
            room_id,
        } => organization::unlink(state, block_id, department_id, room_id),
        Command::HireStaff {
            name,
            salary_cents,
            phone,
            date_of_birth,
            gender,
            role,
            department_id,
        } => personnel::hire(
            state,
            Hire {
                name: &name,
                salary_cents,
                phone: &phone,
                date_of_birth,
                gender,
                role: &role,
                department_id,
            },
            today,
        ),
        Command::UpdateStaff {
            staff_id,
            name,
            salary_cents,
            phone,
            role,
            department_id,
        } => personnel::update(
            state,
            staff_id,
            StaffChanges {
                name: name.as_deref(),
                salary_cents,
                phone: phone.as_deref(),
                role: role.as_deref(),
                department_id,
            },
        ),
        Command::DismissStaff { staff_id } => personnel::dismiss(state, staff_id),
        Command::AssignSupervisor {
            supervisor_id,
            subordinate_id,
        } => personnel::assign_supervisor(state, supervisor_id, subordinate_id),
        Command::RemoveSupervisor { subordinate_id } => {
            personnel::remove_supervisor(state, subordinate_id)
        }
        Command::CreateSchedule {
            staff_id,
            days,
            start,
            end,
        } => personnel::create_schedule(state, staff_id, &days, start, end),
        Command::UpdateSchedule {
            schedule_id,
            days,
            start,
            end,
        } => personnel::update_schedule(state, schedule_id, days.as_deref(), start, end),
        Command::DeleteSchedule { schedule_id } => personnel::delete_schedule(state, schedule_id),
        Command::RegisterGun {
            serial,
            gun_type,
            name,
        } => armory::register(state, serial, &gun_type, &name),
        Command::RetireGun { serial } => armory::retire(state, &serial),
        Command::AssignGun { serial, staff_id } => armory::assign(state, serial, staff_id),
        Command::ReturnGun { serial, staff_id } => armory::return_gun(state, &serial, staff_id),
    }
}
