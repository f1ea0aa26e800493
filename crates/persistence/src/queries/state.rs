// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State reconstruction from the normalized tables.
//!
//! Every row is turned back into a domain entity through the same validated
//! constructors and mutators the service layer uses, so a reloaded state
//! satisfies every entity invariant. Relations (containment, supervision,
//! custody) are restored into their authoritative tables, which rebuilds all
//! the per-entity views derived from them.

use std::collections::BTreeMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::{Date, Time};
use tracing::debug;
use warden::State;
use warden_domain::{
    Address, Block, BlockId, Cell, CellId, ContainmentKey, CrimeRecord, Department, DepartmentId,
    DepartmentStatus, Equipment, Expense, Facility, FacilityId, Gender, Gun, GunAssignment,
    MedicalNote, Prisoner, PrisonerId, Room, RoomId, Schedule, ScheduleId, SerialNumber, Staff,
    StaffGender, StaffId, StaffSupervision, VisitLog, Visitor, VisitorId, parse_date, parse_time,
};

use crate::diesel_schema::{
    blocks, cells, containment, crime_records, departments, equipment, expenses, facilities,
    gun_assignments, guns, medical_notes, prisoners, rooms, schedules, staff, state_meta,
    supervision, visit_logs, visitors,
};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = facilities)]
struct FacilityRow {
    facility_id: i64,
    name: String,
    street: String,
    city: String,
    state: String,
    country: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = blocks)]
struct BlockRow {
    block_id: i64,
    facility_id: i64,
    block_type: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = cells)]
struct CellRow {
    cell_id: i64,
    block_id: i64,
    cell_type: String,
    capacity: i32,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = prisoners)]
struct PrisonerRow {
    prisoner_id: i64,
    cell_id: i64,
    #[allow(dead_code)]
    position: i32,
    name: String,
    date_of_birth: String,
    sentence_start: String,
    sentence_end: String,
    gender: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = crime_records)]
struct CrimeRecordRow {
    prisoner_id: i64,
    #[allow(dead_code)]
    position: i32,
    crime_type: String,
    description: Option<String>,
    offence_date: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = medical_notes)]
struct MedicalNoteRow {
    prisoner_id: i64,
    #[allow(dead_code)]
    position: i32,
    recorded_on: String,
    note: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
struct RoomRow {
    room_id: i64,
    room_type: String,
    description: Option<String>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = equipment)]
struct EquipmentRow {
    room_id: i64,
    #[allow(dead_code)]
    position: i32,
    name: String,
    quantity: i32,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = departments)]
struct DepartmentRow {
    department_id: i64,
    department_type: String,
    status: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = expenses)]
struct ExpenseRow {
    department_id: i64,
    #[allow(dead_code)]
    position: i32,
    description: String,
    amount_cents: i64,
    incurred_on: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = staff)]
struct StaffRow {
    staff_id: i64,
    name: String,
    salary_cents: i64,
    phone: String,
    date_of_birth: String,
    gender: String,
    role: String,
    department_id: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = schedules)]
struct ScheduleRow {
    schedule_id: i64,
    staff_id: i64,
    days: String,
    start_time: Option<String>,
    end_time: Option<String>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = visit_logs)]
struct VisitLogRow {
    #[allow(dead_code)]
    position: i32,
    visitor_id: i64,
    prisoner_id: i64,
    visit_date: String,
    notes: Option<String>,
}

/// Converts a stored integer back into an unsigned count.
fn unsigned(field: &str, value: i32) -> Result<u32, PersistenceError> {
    u32::try_from(value).map_err(|_| {
        PersistenceError::ReconstructionError(format!("{field} {value} is negative"))
    })
}

/// Builds the error for a child row whose parent was not loaded.
fn orphan(child: &str, id: i64, parent: &str, parent_id: i64) -> PersistenceError {
    PersistenceError::ReconstructionError(format!(
        "{child} {id} references missing {parent} {parent_id}"
    ))
}

/// Loads the stored state.
///
/// A database that has never been written returns an empty `State`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `today` - The observation date used by date validation
///
/// # Errors
///
/// Returns an error if the rows cannot be read or no longer satisfy the
/// entity rules.
pub fn load_state(conn: &mut SqliteConnection, today: Date) -> Result<State, PersistenceError> {
    let Some(next_id) = state_meta::table
        .select(state_meta::next_id)
        .first::<i64>(conn)
        .optional()?
    else {
        debug!("No stored state, starting empty");
        return Ok(State::new());
    };

    let mut state: State = State::new();
    state.next_id = next_id;

    state.facilities = load_housing(conn, today)?;
    state.rooms = load_rooms(conn)?;
    state.departments = load_departments(conn)?;

    let links: Vec<(i64, i64, i64)> = containment::table
        .select((
            containment::block_id,
            containment::department_id,
            containment::room_id,
        ))
        .load::<(i64, i64, i64)>(conn)?;
    for (block_id, department_id, room_id) in links {
        state.containment.insert(ContainmentKey::from_ids(
            BlockId::new(block_id),
            DepartmentId::new(department_id),
            RoomId::new(room_id),
        ));
    }

    load_personnel(conn, today, &mut state)?;
    load_armory(conn, &mut state)?;
    load_visits(conn, today, &mut state)?;

    debug!(
        facilities = state.facilities.len(),
        prisoners = state.number_of_prisoners(),
        staff = state.staff.len(),
        "Loaded state"
    );

    Ok(state)
}

/// Rebuilds the facility, block, cell and occupant tree bottom-up.
#[allow(clippy::too_many_lines)]
fn load_housing(
    conn: &mut SqliteConnection,
    today: Date,
) -> Result<BTreeMap<FacilityId, Facility>, PersistenceError> {
    let mut records: BTreeMap<i64, Vec<CrimeRecord>> = BTreeMap::new();
    let record_rows: Vec<CrimeRecordRow> = crime_records::table
        .order((crime_records::prisoner_id.asc(), crime_records::position.asc()))
        .select(CrimeRecordRow::as_select())
        .load::<CrimeRecordRow>(conn)?;
    for row in record_rows {
        records.entry(row.prisoner_id).or_default().push(CrimeRecord::new(
            &row.crime_type,
            row.description.as_deref(),
            parse_date("offence_date", &row.offence_date)?,
        )?);
    }

    let mut notes: BTreeMap<i64, Vec<MedicalNote>> = BTreeMap::new();
    let note_rows: Vec<MedicalNoteRow> = medical_notes::table
        .order((medical_notes::prisoner_id.asc(), medical_notes::position.asc()))
        .select(MedicalNoteRow::as_select())
        .load::<MedicalNoteRow>(conn)?;
    for row in note_rows {
        notes.entry(row.prisoner_id).or_default().push(MedicalNote::new(
            parse_date("recorded_on", &row.recorded_on)?,
            &row.note,
        )?);
    }

    let mut occupants: BTreeMap<i64, Vec<Prisoner>> = BTreeMap::new();
    let prisoner_rows: Vec<PrisonerRow> = prisoners::table
        .order((prisoners::cell_id.asc(), prisoners::position.asc()))
        .select(PrisonerRow::as_select())
        .load::<PrisonerRow>(conn)?;
    for row in prisoner_rows {
        let mut prisoner: Prisoner = Prisoner::new(
            PrisonerId::new(row.prisoner_id),
            &row.name,
            parse_date("date_of_birth", &row.date_of_birth)?,
            parse_date("sentence_start", &row.sentence_start)?,
            parse_date("sentence_end", &row.sentence_end)?,
            row.gender.parse::<Gender>()?,
            today,
        )?;
        for record in records.remove(&row.prisoner_id).unwrap_or_default() {
            prisoner.add_crime_record(record, today)?;
        }
        for note in notes.remove(&row.prisoner_id).unwrap_or_default() {
            prisoner.add_medical_note(note, today)?;
        }
        occupants.entry(row.cell_id).or_default().push(prisoner);
    }

    let mut cells_by_block: BTreeMap<i64, Vec<Cell>> = BTreeMap::new();
    let cell_rows: Vec<CellRow> = cells::table
        .order(cells::cell_id.asc())
        .select(CellRow::as_select())
        .load::<CellRow>(conn)?;
    for row in cell_rows {
        let mut cell: Cell = Cell::new(
            CellId::new(row.cell_id),
            &row.cell_type,
            unsigned("capacity", row.capacity)?,
        )?;
        for prisoner in occupants.remove(&row.cell_id).unwrap_or_default() {
            cell.add_occupant(prisoner)?;
        }
        cells_by_block.entry(row.block_id).or_default().push(cell);
    }
    if let Some((cell_id, stray)) = occupants.into_iter().next() {
        let prisoner_id: i64 = stray.first().map_or(0, |p| p.id().value());
        return Err(orphan("prisoner", prisoner_id, "cell", cell_id));
    }

    let mut blocks_by_facility: BTreeMap<i64, Vec<Block>> = BTreeMap::new();
    let block_rows: Vec<BlockRow> = blocks::table
        .order(blocks::block_id.asc())
        .select(BlockRow::as_select())
        .load::<BlockRow>(conn)?;
    for row in block_rows {
        let mut block: Block = Block::new(BlockId::new(row.block_id), &row.block_type)?;
        for cell in cells_by_block.remove(&row.block_id).unwrap_or_default() {
            block.add_cell(cell);
        }
        blocks_by_facility
            .entry(row.facility_id)
            .or_default()
            .push(block);
    }
    if let Some((block_id, stray)) = cells_by_block.into_iter().next() {
        let cell_id: i64 = stray.first().map_or(0, |c| c.id().value());
        return Err(orphan("cell", cell_id, "block", block_id));
    }

    let mut result: BTreeMap<FacilityId, Facility> = BTreeMap::new();
    let facility_rows: Vec<FacilityRow> = facilities::table
        .order(facilities::facility_id.asc())
        .select(FacilityRow::as_select())
        .load::<FacilityRow>(conn)?;
    for row in facility_rows {
        let address: Address = Address::new(&row.street, &row.city, &row.state, &row.country)?;
        let mut facility: Facility =
            Facility::new(FacilityId::new(row.facility_id), &row.name, address)?;
        for block in blocks_by_facility
            .remove(&row.facility_id)
            .unwrap_or_default()
        {
            facility.add_block(block);
        }
        result.insert(facility.id(), facility);
    }
    if let Some((facility_id, stray)) = blocks_by_facility.into_iter().next() {
        let block_id: i64 = stray.first().map_or(0, |b| b.id().value());
        return Err(orphan("block", block_id, "facility", facility_id));
    }

    Ok(result)
}

fn load_rooms(conn: &mut SqliteConnection) -> Result<BTreeMap<RoomId, Room>, PersistenceError> {
    let mut items: BTreeMap<i64, Vec<Equipment>> = BTreeMap::new();
    let equipment_rows: Vec<EquipmentRow> = equipment::table
        .order((equipment::room_id.asc(), equipment::position.asc()))
        .select(EquipmentRow::as_select())
        .load::<EquipmentRow>(conn)?;
    for row in equipment_rows {
        items
            .entry(row.room_id)
            .or_default()
            .push(Equipment::new(&row.name, unsigned("quantity", row.quantity)?)?);
    }

    let mut result: BTreeMap<RoomId, Room> = BTreeMap::new();
    let room_rows: Vec<RoomRow> = rooms::table
        .order(rooms::room_id.asc())
        .select(RoomRow::as_select())
        .load::<RoomRow>(conn)?;
    for row in room_rows {
        let mut room: Room = Room::new(
            RoomId::new(row.room_id),
            &row.room_type,
            row.description.as_deref(),
        )?;
        for item in items.remove(&row.room_id).unwrap_or_default() {
            room.add_equipment(item);
        }
        result.insert(room.id(), room);
    }
    Ok(result)
}

fn load_departments(
    conn: &mut SqliteConnection,
) -> Result<BTreeMap<DepartmentId, Department>, PersistenceError> {
    let mut spending: BTreeMap<i64, Vec<Expense>> = BTreeMap::new();
    let expense_rows: Vec<ExpenseRow> = expenses::table
        .order((expenses::department_id.asc(), expenses::position.asc()))
        .select(ExpenseRow::as_select())
        .load::<ExpenseRow>(conn)?;
    for row in expense_rows {
        spending.entry(row.department_id).or_default().push(Expense::new(
            &row.description,
            row.amount_cents,
            parse_date("incurred_on", &row.incurred_on)?,
        )?);
    }

    let mut result: BTreeMap<DepartmentId, Department> = BTreeMap::new();
    let department_rows: Vec<DepartmentRow> = departments::table
        .order(departments::department_id.asc())
        .select(DepartmentRow::as_select())
        .load::<DepartmentRow>(conn)?;
    for row in department_rows {
        let mut department: Department =
            Department::new(DepartmentId::new(row.department_id), &row.department_type)?;
        department.set_status(row.status.parse::<DepartmentStatus>()?);
        for expense in spending.remove(&row.department_id).unwrap_or_default() {
            department.add_expense(expense);
        }
        result.insert(department.id(), department);
    }
    Ok(result)
}

/// Restores staff members, the chain of command and work schedules.
fn load_personnel(
    conn: &mut SqliteConnection,
    today: Date,
    state: &mut State,
) -> Result<(), PersistenceError> {
    let staff_rows: Vec<StaffRow> = staff::table
        .order(staff::staff_id.asc())
        .select(StaffRow::as_select())
        .load::<StaffRow>(conn)?;
    for row in staff_rows {
        let member: Staff = Staff::new(
            StaffId::new(row.staff_id),
            &row.name,
            row.salary_cents,
            &row.phone,
            parse_date("date_of_birth", &row.date_of_birth)?,
            row.gender.parse::<StaffGender>()?,
            &row.role,
            DepartmentId::new(row.department_id),
            today,
        )?;
        state.staff.insert(member.id(), member);
    }

    let edges: Vec<(i64, i64)> = supervision::table
        .select((supervision::supervisor_id, supervision::subordinate_id))
        .load::<(i64, i64)>(conn)?;
    for (supervisor_id, subordinate_id) in edges {
        state.supervision.add(StaffSupervision::new(
            StaffId::new(supervisor_id),
            StaffId::new(subordinate_id),
        )?)?;
    }

    let schedule_rows: Vec<ScheduleRow> = schedules::table
        .order(schedules::schedule_id.asc())
        .select(ScheduleRow::as_select())
        .load::<ScheduleRow>(conn)?;
    for row in schedule_rows {
        let days: Vec<&str> = row.days.split(',').collect();
        let start: Option<Time> = row
            .start_time
            .as_deref()
            .map(|t| parse_time("start", t))
            .transpose()?;
        let end: Option<Time> = row
            .end_time
            .as_deref()
            .map(|t| parse_time("end", t))
            .transpose()?;
        let schedule: Schedule = Schedule::new(
            ScheduleId::new(row.schedule_id),
            StaffId::new(row.staff_id),
            &days,
            start,
            end,
        )?;
        state.schedules.insert(schedule.id(), schedule);
    }
    Ok(())
}

/// Restores registered weapons and their custody records.
fn load_armory(conn: &mut SqliteConnection, state: &mut State) -> Result<(), PersistenceError> {
    let gun_rows: Vec<(String, String, String)> = guns::table
        .select((guns::serial_number, guns::gun_type, guns::name))
        .load::<(String, String, String)>(conn)?;
    for (serial, gun_type, name) in gun_rows {
        let gun: Gun = Gun::new(SerialNumber::new(&serial)?, &gun_type, &name)?;
        state.guns.insert(gun.serial().clone(), gun);
    }

    let assignments: Vec<(String, i64, bool)> = gun_assignments::table
        .select((
            gun_assignments::serial_number,
            gun_assignments::staff_id,
            gun_assignments::returned,
        ))
        .load::<(String, i64, bool)>(conn)?;
    for (serial, staff_id, returned) in assignments {
        state.custody.restore(GunAssignment::restore(
            SerialNumber::new(&serial)?,
            StaffId::new(staff_id),
            returned,
        ));
    }
    Ok(())
}

/// Restores visitors and the visit log in recorded order.
fn load_visits(
    conn: &mut SqliteConnection,
    today: Date,
    state: &mut State,
) -> Result<(), PersistenceError> {
    let visitor_rows: Vec<(i64, String, String, String)> = visitors::table
        .order(visitors::visitor_id.asc())
        .select((
            visitors::visitor_id,
            visitors::name,
            visitors::relationship,
            visitors::phone,
        ))
        .load::<(i64, String, String, String)>(conn)?;
    for (visitor_id, name, relationship, phone) in visitor_rows {
        let visitor: Visitor =
            Visitor::new(VisitorId::new(visitor_id), &name, &relationship, &phone)?;
        state.visitors.insert(visitor.id(), visitor);
    }

    let log_rows: Vec<VisitLogRow> = visit_logs::table
        .order(visit_logs::position.asc())
        .select(VisitLogRow::as_select())
        .load::<VisitLogRow>(conn)?;
    for row in log_rows {
        state.visit_logs.push(VisitLog::new(
            VisitorId::new(row.visitor_id),
            PrisonerId::new(row.prisoner_id),
            parse_date("visit_date", &row.visit_date)?,
            row.notes.as_deref(),
            today,
        )?);
    }
    Ok(())
}
