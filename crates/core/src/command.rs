// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Time};
use warden_domain::{
    Address, BlockId, CellId, DepartmentId, DepartmentStatus, FacilityId, Gender, PrisonerId,
    RoomId, ScheduleId, SerialNumber, StaffGender, StaffId, VisitorId,
};

/// A command represents operator intent as data only.
///
/// Commands are the only way to request state changes. Optional fields in
/// update commands leave the corresponding value unchanged when `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a new facility.
    CreateFacility {
        /// The facility name.
        name: String,
        /// The postal address.
        address: Address,
    },
    /// Change a facility's name and/or address.
    UpdateFacility {
        /// The facility.
        facility_id: FacilityId,
        /// The new name.
        name: Option<String>,
        /// The new address.
        address: Option<Address>,
    },
    /// Close an empty facility, removing its blocks and cells.
    DeleteFacility {
        /// The facility.
        facility_id: FacilityId,
    },
    /// Add a block to a facility.
    CreateBlock {
        /// The owning facility.
        facility_id: FacilityId,
        /// The block type label.
        block_type: String,
    },
    /// Change a block's type.
    UpdateBlock {
        /// The block.
        block_id: BlockId,
        /// The new type label.
        block_type: String,
    },
    /// Remove a block, relocating its occupants within the facility.
    DeleteBlock {
        /// The block.
        block_id: BlockId,
    },
    /// Add a cell to a block.
    CreateCell {
        /// The owning block.
        block_id: BlockId,
        /// The cell type label.
        cell_type: String,
        /// The maximum number of occupants.
        capacity: u32,
    },
    /// Change a cell's type and/or capacity, relocating any excess occupants.
    UpdateCell {
        /// The cell.
        cell_id: CellId,
        /// The new type label.
        cell_type: Option<String>,
        /// The new capacity.
        capacity: Option<u32>,
    },
    /// Remove a cell, relocating its occupants.
    DeleteCell {
        /// The cell.
        cell_id: CellId,
    },
    /// Admit a new occupant into a cell.
    AdmitPrisoner {
        /// The receiving cell.
        cell_id: CellId,
        /// Full name.
        name: String,
        /// Date of birth.
        date_of_birth: Date,
        /// First day of the sentence.
        sentence_start: Date,
        /// Last day of the sentence.
        sentence_end: Date,
        /// Gender.
        gender: Gender,
    },
    /// Change an occupant's personal or sentence data.
    UpdatePrisoner {
        /// The occupant.
        prisoner_id: PrisonerId,
        /// The new name.
        name: Option<String>,
        /// The new date of birth.
        date_of_birth: Option<Date>,
        /// The new sentence start.
        sentence_start: Option<Date>,
        /// The new sentence end.
        sentence_end: Option<Date>,
        /// The new gender.
        gender: Option<Gender>,
    },
    /// Move an occupant to another cell.
    TransferPrisoner {
        /// The occupant.
        prisoner_id: PrisonerId,
        /// The receiving cell.
        to_cell_id: CellId,
    },
    /// Release an occupant, removing them and their visit history.
    ReleasePrisoner {
        /// The occupant.
        prisoner_id: PrisonerId,
    },
    /// Add a crime record to an occupant.
    AddCrimeRecord {
        /// The occupant.
        prisoner_id: PrisonerId,
        /// The crime type label.
        crime_type: String,
        /// Optional description.
        description: Option<String>,
        /// The date of the offence.
        offence_date: Date,
    },
    /// Add a medical note to an occupant.
    AddMedicalNote {
        /// The occupant.
        prisoner_id: PrisonerId,
        /// The date the note was recorded.
        recorded_on: Date,
        /// The note text.
        note: String,
    },
    /// Register a visitor.
    RegisterVisitor {
        /// Full name.
        name: String,
        /// Relationship to the occupant(s) visited.
        relationship: String,
        /// Contact number.
        phone: String,
    },
    /// Change a visitor's details.
    UpdateVisitor {
        /// The visitor.
        visitor_id: VisitorId,
        /// The new name.
        name: Option<String>,
        /// The new relationship.
        relationship: Option<String>,
        /// The new phone number.
        phone: Option<String>,
    },
    /// Remove a visitor and their visit history.
    RemoveVisitor {
        /// The visitor.
        visitor_id: VisitorId,
    },
    /// Record a visit.
    LogVisit {
        /// The visitor.
        visitor_id: VisitorId,
        /// The occupant visited.
        prisoner_id: PrisonerId,
        /// The visit date.
        visit_date: Date,
        /// Optional notes.
        notes: Option<String>,
    },
    /// Create a room.
    CreateRoom {
        /// The room type label.
        room_type: String,
        /// Optional description.
        description: Option<String>,
    },
    /// Change a room's type and/or description. A blank description clears it.
    UpdateRoom {
        /// The room.
        room_id: RoomId,
        /// The new type label.
        room_type: Option<String>,
        /// The new description.
        description: Option<String>,
    },
    /// Add equipment to a room.
    AddEquipment {
        /// The room.
        room_id: RoomId,
        /// The equipment name.
        name: String,
        /// How many items.
        quantity: u32,
    },
    /// Remove a room and its containment links.
    DeleteRoom {
        /// The room.
        room_id: RoomId,
    },
    /// Create a department.
    CreateDepartment {
        /// The department type label.
        department_type: String,
    },
    /// Change a department's type and/or status.
    UpdateDepartment {
        /// The department.
        department_id: DepartmentId,
        /// The new type label.
        department_type: Option<String>,
        /// The new status.
        status: Option<DepartmentStatus>,
    },
    /// Book an expense against a department.
    AddExpense {
        /// The department.
        department_id: DepartmentId,
        /// What the money was spent on.
        description: String,
        /// The amount in cents.
        amount_cents: i64,
        /// When it was incurred.
        incurred_on: Date,
    },
    /// Remove a department without staff, and its containment links.
    DeleteDepartment {
        /// The department.
        department_id: DepartmentId,
    },
    /// Associate a block, a department and a room.
    LinkContainment {
        /// The block participant.
        block_id: BlockId,
        /// The department participant.
        department_id: DepartmentId,
        /// The room participant.
        room_id: RoomId,
    },
    /// Remove a block / department / room association.
    UnlinkContainment {
        /// The block participant.
        block_id: BlockId,
        /// The department participant.
        department_id: DepartmentId,
        /// The room participant.
        room_id: RoomId,
    },
    /// Hire a staff member into a department.
    HireStaff {
        /// Full name.
        name: String,
        /// Annual salary in cents.
        salary_cents: i64,
        /// Contact number.
        phone: String,
        /// Date of birth.
        date_of_birth: Date,
        /// Gender.
        gender: StaffGender,
        /// Job title.
        role: String,
        /// The department.
        department_id: DepartmentId,
    },
    /// Change a staff member's details or department.
    UpdateStaff {
        /// The staff member.
        staff_id: StaffId,
        /// The new name.
        name: Option<String>,
        /// The new salary in cents.
        salary_cents: Option<i64>,
        /// The new phone number.
        phone: Option<String>,
        /// The new job title.
        role: Option<String>,
        /// The new department.
        department_id: Option<DepartmentId>,
    },
    /// Dismiss a staff member who holds no weapons.
    DismissStaff {
        /// The staff member.
        staff_id: StaffId,
    },
    /// Name a supervisor for a staff member.
    AssignSupervisor {
        /// The supervisor.
        supervisor_id: StaffId,
        /// The subordinate.
        subordinate_id: StaffId,
    },
    /// Remove a staff member's supervisor.
    RemoveSupervisor {
        /// The subordinate.
        subordinate_id: StaffId,
    },
    /// Create a weekly schedule for a staff member.
    CreateSchedule {
        /// The staff member.
        staff_id: StaffId,
        /// Day tokens.
        days: Vec<String>,
        /// Optional window start.
        start: Option<Time>,
        /// Optional window end.
        end: Option<Time>,
    },
    /// Change a schedule's days and/or window.
    UpdateSchedule {
        /// The schedule.
        schedule_id: ScheduleId,
        /// New day tokens.
        days: Option<Vec<String>>,
        /// New window start.
        start: Option<Time>,
        /// New window end.
        end: Option<Time>,
    },
    /// Remove a schedule.
    DeleteSchedule {
        /// The schedule.
        schedule_id: ScheduleId,
    },
    /// Register a weapon.
    RegisterGun {
        /// The serial number.
        serial: SerialNumber,
        /// The weapon type.
        gun_type: String,
        /// The weapon name or model.
        name: String,
    },
    /// Retire a weapon that is not issued to anyone.
    RetireGun {
        /// The serial number.
        serial: SerialNumber,
    },
    /// Issue a weapon to a security staff member.
    AssignGun {
        /// The serial number.
        serial: SerialNumber,
        /// The staff member.
        staff_id: StaffId,
    },
    /// Record that a staff member handed a weapon back.
    ReturnGun {
        /// The serial number.
        serial: SerialNumber,
        /// The staff member.
        staff_id: StaffId,
    },
}

impl Command {
    /// Returns the action name recorded in the audit trail.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateFacility { .. } => "CreateFacility",
            Self::UpdateFacility { .. } => "UpdateFacility",
            Self::DeleteFacility { .. } => "DeleteFacility",
            Self::CreateBlock { .. } => "CreateBlock",
            Self::UpdateBlock { .. } => "UpdateBlock",
            Self::DeleteBlock { .. } => "DeleteBlock",
            Self::CreateCell { .. } => "CreateCell",
            Self::UpdateCell { .. } => "UpdateCell",
            Self::DeleteCell { .. } => "DeleteCell",
            Self::AdmitPrisoner { .. } => "AdmitPrisoner",
            Self::UpdatePrisoner { .. } => "UpdatePrisoner",
            Self::TransferPrisoner { .. } => "TransferPrisoner",
            Self::ReleasePrisoner { .. } => "ReleasePrisoner",
            Self::AddCrimeRecord { .. } => "AddCrimeRecord",
            Self::AddMedicalNote { .. } => "AddMedicalNote",
            Self::RegisterVisitor { .. } => "RegisterVisitor",
            Self::UpdateVisitor { .. } => "UpdateVisitor",
            Self::RemoveVisitor { .. } => "RemoveVisitor",
            Self::LogVisit { .. } => "LogVisit",
            Self::CreateRoom { .. } => "CreateRoom",
            Self::UpdateRoom { .. } => "UpdateRoom",
            Self::AddEquipment { .. } => "AddEquipment",
            Self::DeleteRoom { .. } => "DeleteRoom",
            Self::CreateDepartment { .. } => "CreateDepartment",
            Self::UpdateDepartment { .. } => "UpdateDepartment",
            Self::AddExpense { .. } => "AddExpense",
            Self::DeleteDepartment { .. } => "DeleteDepartment",
            Self::LinkContainment { .. } => "LinkContainment",
            Self::UnlinkContainment { .. } => "UnlinkContainment",
            Self::HireStaff { .. } => "HireStaff",
            Self::UpdateStaff { .. } => "UpdateStaff",
            Self::DismissStaff { .. } => "DismissStaff",
            Self::AssignSupervisor { .. } => "AssignSupervisor",
            Self::RemoveSupervisor { .. } => "RemoveSupervisor",
            Self::CreateSchedule { .. } => "CreateSchedule",
            Self::UpdateSchedule { .. } => "UpdateSchedule",
            Self::DeleteSchedule { .. } => "DeleteSchedule",
            Self::RegisterGun { .. } => "RegisterGun",
            Self::RetireGun { .. } => "RetireGun",
            Self::AssignGun { .. } => "AssignGun",
            Self::ReturnGun { .. } => "ReturnGun",
        }
    }
}
