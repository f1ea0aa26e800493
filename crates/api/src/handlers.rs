// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler loads the persisted state, works on it and, for writes,
//! persists the resulting transition. Reads that depend on the calendar
//! take the observation date explicitly.

use time::{Date, Time};
use tracing::{debug, info};
use warden::{Command, Placement, State, TransitionResult, apply};
use warden_audit::{AuditEvent, Cause};
use warden_domain::{
    Block, BlockId, Cell, CellId, Department, DepartmentId, Facility, FacilityId, Gun, Prisoner,
    PrisonerId, Room, RoomId, Schedule, ScheduleId, SerialNumber, Staff, StaffId, VisitLog, Visitor,
    VisitorId, format_time, parse_time,
};
use warden_persistence::Persistence;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddressInfo, AssignmentInfo, AuditEventInfo, BlockInfo, BlockSummaryResponse, CellInfo,
    CommandRequest, CrimeRecordInfo, DepartmentInfo, EquipmentInfo, FacilityInfo, GunInfo,
    ListFacilitiesResponse, ListGunsResponse, MedicalNoteInfo, PlacementInfo, PrisonerInfo,
    RelocationPreviewResponse, RoomInfo, ScheduleInfo, StaffInfo, VisitLogInfo, VisitorInfo,
    WorkingHoursResponse, WriteResponse,
};

// ============================================================================
// Writes
// ============================================================================

/// Applies a write request and persists the resulting transition.
///
/// This function:
/// - Parses the request into a core command
/// - Verifies the actor's role allows the command
/// - Applies the command to the persisted state
/// - Persists the new state together with its audit event
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The write request
/// * `authenticated_actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
/// * `today` - The observation date used for date validation
///
/// # Errors
///
/// Returns an error if:
/// - A request field cannot be parsed
/// - The actor is not authorized for the command
/// - The command breaks a domain rule
/// - Persistence fails
pub fn submit<R: CommandRequest>(
    persistence: &mut Persistence,
    request: &R,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<WriteResponse, ApiError> {
    let command: Command = request.to_command()?;
    let action: &'static str = command.name();
    AuthorizationService::authorize(authenticated_actor, &command).inspect_err(|err| {
        debug!(actor = %authenticated_actor.id, action, error = %err, "Request refused");
    })?;

    let state: State = persistence.load_state(today)?;
    let result: TransitionResult = apply(
        &state,
        command,
        authenticated_actor.to_audit_actor(),
        cause,
        today,
    )
    .map_err(translate_core_error)?;

    let event_id: i64 = persistence.persist_transition(&result)?;
    info!(actor = %authenticated_actor.id, action, event_id, "Request applied");

    Ok(WriteResponse {
        action: String::from(action),
        message: result.audit_event.action.details.clone().unwrap_or_default(),
        event_id,
        created_id: result.created_id,
    })
}

// ============================================================================
// Housing reads
// ============================================================================

fn cell_info(cell: &Cell) -> CellInfo {
    CellInfo {
        cell_id: cell.id().value(),
        cell_type: cell.cell_type().to_string(),
        capacity: cell.capacity(),
        occupancy: cell.occupancy(),
        is_isolation: cell.is_isolation(),
        occupants: cell.occupants().iter().map(|p| p.id().value()).collect(),
    }
}

fn block_info(block: &Block) -> BlockInfo {
    BlockInfo {
        block_id: block.id().value(),
        block_type: block.block_type().to_string(),
        total_capacity: block.total_capacity(),
        occupants: block.number_of_prisoners(),
        cells: block.cells().iter().map(cell_info).collect(),
    }
}

fn facility_info(facility: &Facility) -> FacilityInfo {
    FacilityInfo {
        facility_id: facility.id().value(),
        name: facility.name().to_string(),
        address: AddressInfo::from(facility.address()),
        occupants: facility.number_of_prisoners(),
        blocks: facility.blocks().iter().map(block_info).collect(),
    }
}

/// Lists every facility with its blocks, cells and occupancy.
///
/// # Errors
///
/// Returns an error if the state cannot be loaded.
pub fn list_facilities(
    persistence: &mut Persistence,
    today: Date,
) -> Result<ListFacilitiesResponse, ApiError> {
    let state: State = persistence.load_state(today)?;
    Ok(ListFacilitiesResponse {
        facilities: state.facilities.values().map(facility_info).collect(),
    })
}

/// Returns one facility with its housing tree.
///
/// # Errors
///
/// Returns an error if the facility does not exist or the state cannot be
/// loaded.
pub fn get_facility(
    persistence: &mut Persistence,
    facility_id: i64,
    today: Date,
) -> Result<FacilityInfo, ApiError> {
    let state: State = persistence.load_state(today)?;
    let facility: &Facility = state
        .facility(FacilityId::new(facility_id))
        .map_err(translate_domain_error)?;
    Ok(facility_info(facility))
}

/// Returns one cell and its occupants.
///
/// # Errors
///
/// Returns an error if the cell does not exist or the state cannot be loaded.
pub fn get_cell(
    persistence: &mut Persistence,
    cell_id: i64,
    today: Date,
) -> Result<CellInfo, ApiError> {
    let state: State = persistence.load_state(today)?;
    let cell: &Cell = state
        .cell(CellId::new(cell_id))
        .map_err(translate_domain_error)?;
    Ok(cell_info(cell))
}

/// Returns the containment-derived figures of a block.
///
/// # Errors
///
/// Returns an error if the block does not exist or the state cannot be loaded.
pub fn get_block_summary(
    persistence: &mut Persistence,
    block_id: i64,
    today: Date,
) -> Result<BlockSummaryResponse, ApiError> {
    let state: State = persistence.load_state(today)?;
    let block_id: BlockId = BlockId::new(block_id);
    let block: &Block = state.block(block_id).map_err(translate_domain_error)?;
    let facility_id: FacilityId = state
        .facility_of_block(block_id)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Block {block_id} is not attached to a facility"),
        })?;

    Ok(BlockSummaryResponse {
        block_id: block_id.value(),
        facility_id: facility_id.value(),
        block_type: block.block_type().to_string(),
        departments: state
            .containment
            .departments_of_block(block_id)
            .into_iter()
            .map(DepartmentId::value)
            .collect(),
        rooms: state
            .containment
            .rooms_of_block(block_id)
            .into_iter()
            .map(RoomId::value)
            .collect(),
        total_expenses_cents: state.block_total_expenses(block_id),
        has_medical_department: state.block_has_medical_department(block_id),
    })
}

/// Previews where the occupants displaced from a cell would be moved.
///
/// With `new_capacity` set, the occupants beyond that capacity are
/// displaced; without it the whole cell is emptied as if it were deleted.
/// Nothing is changed.
///
/// # Errors
///
/// Returns an error if the cell does not exist, if the displaced occupants
/// would not fit, or if the state cannot be loaded.
pub fn preview_relocation(
    persistence: &mut Persistence,
    cell_id: i64,
    new_capacity: Option<u32>,
    today: Date,
) -> Result<RelocationPreviewResponse, ApiError> {
    let state: State = persistence.load_state(today)?;
    let cell_id: CellId = CellId::new(cell_id);
    let placements: Vec<Placement> =
        warden::preview_relocation(&state, cell_id, new_capacity).map_err(translate_core_error)?;

    Ok(RelocationPreviewResponse {
        cell_id: cell_id.value(),
        placements: placements
            .into_iter()
            .map(|p| PlacementInfo {
                prisoner_id: p.prisoner_id.value(),
                cell_id: p.cell_id.value(),
            })
            .collect(),
    })
}

// ============================================================================
// Occupant and visitor reads
// ============================================================================

fn prisoner_info(state: &State, prisoner: &Prisoner, today: Date) -> PrisonerInfo {
    PrisonerInfo {
        prisoner_id: prisoner.id().value(),
        cell_id: prisoner.cell_id().map(CellId::value),
        name: prisoner.name().to_string(),
        gender: prisoner.gender().to_string(),
        date_of_birth: prisoner.date_of_birth().to_string(),
        age: prisoner.age(today),
        sentence_start: prisoner.sentence_start().to_string(),
        sentence_end: prisoner.sentence_end().to_string(),
        sentence_days: prisoner.sentence_duration().whole_days(),
        served_days: prisoner.time_served(today).whole_days(),
        remaining_days: prisoner.time_remaining(today).whole_days(),
        sentence_complete: prisoner.is_sentence_complete(today),
        crime_records: prisoner
            .crime_records()
            .iter()
            .map(|r| CrimeRecordInfo {
                crime_type: r.crime_type().to_string(),
                description: r.description().map(ToString::to_string),
                offence_date: r.offence_date().to_string(),
            })
            .collect(),
        medical_notes: prisoner
            .medical_notes()
            .iter()
            .map(|n| MedicalNoteInfo {
                recorded_on: n.recorded_on().to_string(),
                note: n.note().to_string(),
            })
            .collect(),
        visitors: state
            .visitors_of(prisoner.id())
            .into_iter()
            .map(VisitorId::value)
            .collect(),
    }
}

/// Returns one occupant with sentence figures as of `today`.
///
/// # Errors
///
/// Returns an error if the occupant does not exist or the state cannot be
/// loaded.
pub fn get_prisoner(
    persistence: &mut Persistence,
    prisoner_id: i64,
    today: Date,
) -> Result<PrisonerInfo, ApiError> {
    let state: State = persistence.load_state(today)?;
    let prisoner: &Prisoner = state
        .prisoner(PrisonerId::new(prisoner_id))
        .map_err(translate_domain_error)?;
    Ok(prisoner_info(&state, prisoner, today))
}

fn visit_log_info(log: &VisitLog) -> VisitLogInfo {
    VisitLogInfo {
        visitor_id: log.visitor_id().value(),
        prisoner_id: log.prisoner_id().value(),
        visit_date: log.visit_date().to_string(),
        notes: log.notes().map(ToString::to_string),
    }
}

/// Returns one visitor with their visit history.
///
/// # Errors
///
/// Returns an error if the visitor does not exist or the state cannot be
/// loaded.
pub fn get_visitor(
    persistence: &mut Persistence,
    visitor_id: i64,
    today: Date,
) -> Result<VisitorInfo, ApiError> {
    let state: State = persistence.load_state(today)?;
    let visitor_id: VisitorId = VisitorId::new(visitor_id);
    let visitor: &Visitor = state.visitor(visitor_id).map_err(translate_domain_error)?;

    Ok(VisitorInfo {
        visitor_id: visitor_id.value(),
        name: visitor.name().to_string(),
        relationship: visitor.relationship().to_string(),
        phone: visitor.phone().to_string(),
        prisoners: state
            .prisoners_visited_by(visitor_id)
            .into_iter()
            .map(PrisonerId::value)
            .collect(),
        visits: state
            .visit_logs
            .iter()
            .filter(|v| v.visitor_id() == visitor_id)
            .map(visit_log_info)
            .collect(),
    })
}

// ============================================================================
// Staff reads
// ============================================================================

fn schedule_info(schedule: &Schedule) -> ScheduleInfo {
    ScheduleInfo {
        schedule_id: schedule.id().value(),
        staff_id: schedule.staff_id().value(),
        days: schedule
            .days()
            .iter()
            .map(|d| d.as_str().to_string())
            .collect(),
        start: schedule.start().map(format_time),
        end: schedule.end().map(format_time),
        full_time: schedule.is_full_time(),
        weekend: schedule.is_weekend(),
        shift_minutes: schedule.shift_length().map(|d| d.whole_minutes()),
    }
}

/// Returns one staff member with their place in the chain of command, their
/// schedules and the weapons they hold.
///
/// # Errors
///
/// Returns an error if the staff member does not exist or the state cannot
/// be loaded.
pub fn get_staff(
    persistence: &mut Persistence,
    staff_id: i64,
    today: Date,
) -> Result<StaffInfo, ApiError> {
    let state: State = persistence.load_state(today)?;
    let staff_id: StaffId = StaffId::new(staff_id);
    let staff: &Staff = state.staff_member(staff_id).map_err(translate_domain_error)?;

    Ok(StaffInfo {
        staff_id: staff_id.value(),
        name: staff.name().to_string(),
        role: staff.role().to_string(),
        department_id: staff.department_id().value(),
        salary_cents: staff.salary_cents(),
        phone: staff.phone().to_string(),
        gender: staff.gender().to_string(),
        date_of_birth: staff.date_of_birth().to_string(),
        supervisor_id: state.supervision.supervisor_of(staff_id).map(StaffId::value),
        subordinates: state
            .supervision
            .subordinates_of(staff_id)
            .into_iter()
            .map(StaffId::value)
            .collect(),
        chain_of_command: state
            .supervision
            .chain_of_command(staff_id)
            .into_iter()
            .map(StaffId::value)
            .collect(),
        schedules: state
            .schedules_of(staff_id)
            .into_iter()
            .map(schedule_info)
            .collect(),
        weapons: state
            .custody
            .guns_of(staff_id)
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
    })
}

/// Checks whether a time of day falls inside a schedule's shift.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `schedule_id` - The schedule to check
/// * `time` - The time of day, `HH:MM` or `HH:MM:SS`
/// * `today` - The observation date
///
/// # Errors
///
/// Returns an error if the time cannot be parsed, the schedule does not exist
/// or the state cannot be loaded.
pub fn check_working_hours(
    persistence: &mut Persistence,
    schedule_id: i64,
    time: &str,
    today: Date,
) -> Result<WorkingHoursResponse, ApiError> {
    let time: Time = parse_time("time", time).map_err(translate_domain_error)?;
    let state: State = persistence.load_state(today)?;
    let schedule: &Schedule = state
        .schedule(ScheduleId::new(schedule_id))
        .map_err(translate_domain_error)?;

    Ok(WorkingHoursResponse {
        schedule_id,
        time: format_time(time),
        working: schedule.is_working_hours(time),
    })
}

// ============================================================================
// Organization reads
// ============================================================================

/// Returns one room with its equipment and linked blocks.
///
/// # Errors
///
/// Returns an error if the room does not exist or the state cannot be loaded.
pub fn get_room(
    persistence: &mut Persistence,
    room_id: i64,
    today: Date,
) -> Result<RoomInfo, ApiError> {
    let state: State = persistence.load_state(today)?;
    let room_id: RoomId = RoomId::new(room_id);
    let room: &Room = state.room(room_id).map_err(translate_domain_error)?;

    Ok(RoomInfo {
        room_id: room_id.value(),
        room_type: room.room_type().to_string(),
        description: room.description().map(ToString::to_string),
        equipment: room
            .equipment()
            .iter()
            .map(|e| EquipmentInfo {
                name: e.name().to_string(),
                quantity: e.quantity(),
            })
            .collect(),
        blocks: state
            .containment
            .blocks_of_room(room_id)
            .into_iter()
            .map(BlockId::value)
            .collect(),
    })
}

/// Returns one department with its staff and linked blocks.
///
/// # Errors
///
/// Returns an error if the department does not exist or the state cannot be
/// loaded.
pub fn get_department(
    persistence: &mut Persistence,
    department_id: i64,
    today: Date,
) -> Result<DepartmentInfo, ApiError> {
    let state: State = persistence.load_state(today)?;
    let department_id: DepartmentId = DepartmentId::new(department_id);
    let department: &Department = state
        .department(department_id)
        .map_err(translate_domain_error)?;

    Ok(DepartmentInfo {
        department_id: department_id.value(),
        department_type: department.department_type().to_string(),
        status: department.status().to_string(),
        total_expenses_cents: department.total_expenses(),
        staff: state
            .staff_of_department(department_id)
            .into_iter()
            .map(|s| s.id().value())
            .collect(),
        blocks: state
            .containment
            .blocks_of_department(department_id)
            .into_iter()
            .map(BlockId::value)
            .collect(),
    })
}

// ============================================================================
// Weapon reads
// ============================================================================

fn gun_info(state: &State, gun: &Gun) -> GunInfo {
    GunInfo {
        serial_number: gun.serial().as_str().to_string(),
        gun_type: gun.gun_type().to_string(),
        name: gun.name().to_string(),
        assignments: state
            .custody
            .entries()
            .filter(|a| a.serial() == gun.serial())
            .map(|a| AssignmentInfo {
                staff_id: a.staff_id().value(),
                returned: a.returned(),
            })
            .collect(),
    }
}

/// Lists every registered weapon with its custody records.
///
/// # Errors
///
/// Returns an error if the state cannot be loaded.
pub fn list_guns(persistence: &mut Persistence, today: Date) -> Result<ListGunsResponse, ApiError> {
    let state: State = persistence.load_state(today)?;
    Ok(ListGunsResponse {
        guns: state.guns.values().map(|g| gun_info(&state, g)).collect(),
    })
}

/// Returns one weapon with its custody records.
///
/// # Errors
///
/// Returns an error if the serial number is invalid, the weapon does not
/// exist or the state cannot be loaded.
pub fn get_gun(
    persistence: &mut Persistence,
    serial_number: &str,
    today: Date,
) -> Result<GunInfo, ApiError> {
    let serial: SerialNumber = SerialNumber::new(serial_number).map_err(translate_domain_error)?;
    let state: State = persistence.load_state(today)?;
    let gun: &Gun = state.gun(&serial).map_err(translate_domain_error)?;
    Ok(gun_info(&state, gun))
}

// ============================================================================
// Audit reads
// ============================================================================

fn audit_event_info(event: &AuditEvent) -> AuditEventInfo {
    AuditEventInfo {
        event_id: event.event_id,
        actor_id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
        cause_id: event.cause.id.clone(),
        cause_description: event.cause.description.clone(),
        action_name: event.action.name.clone(),
        action_details: event.action.details.clone(),
        before_snapshot: event.before.data.clone(),
        after_snapshot: event.after.data.clone(),
    }
}

/// Returns every audit event in the order it was recorded.
///
/// # Errors
///
/// Returns an error if the events cannot be read.
pub fn get_audit_timeline(persistence: &mut Persistence) -> Result<Vec<AuditEventInfo>, ApiError> {
    let events: Vec<AuditEvent> = persistence.get_audit_timeline()?;
    Ok(events.iter().map(audit_event_info).collect())
}

/// Returns one audit event.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no such event exists.
pub fn get_audit_event(
    persistence: &mut Persistence,
    event_id: i64,
) -> Result<AuditEventInfo, ApiError> {
    let event: AuditEvent = persistence.get_audit_event(event_id)?;
    Ok(audit_event_info(&event))
}
