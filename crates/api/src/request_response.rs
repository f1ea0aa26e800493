// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry plain strings and raw identifiers. Each write request
//! turns itself into a core `Command` through [`CommandRequest`], which is
//! where dates, times, genders and serial numbers are parsed.

use serde::{Deserialize, Serialize};
use time::{Date, Time};
use warden::Command;
use warden_domain::{
    Address, BlockId, CellId, DepartmentId, DepartmentStatus, FacilityId, Gender, PrisonerId,
    RoomId, ScheduleId, SerialNumber, StaffGender, StaffId, VisitorId, parse_date, parse_time,
};

use crate::error::{ApiError, translate_domain_error};

/// A write request that can be expressed as a core command.
pub trait CommandRequest {
    /// Parses the request into the command it describes.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if a field cannot be parsed.
    fn to_command(&self) -> Result<Command, ApiError>;
}

fn date(field: &'static str, value: &str) -> Result<Date, ApiError> {
    parse_date(field, value).map_err(translate_domain_error)
}

fn optional_date(field: &'static str, value: Option<&str>) -> Result<Option<Date>, ApiError> {
    value.map(|v| date(field, v)).transpose()
}

fn optional_time(field: &'static str, value: Option<&str>) -> Result<Option<Time>, ApiError> {
    value
        .map(|v| parse_time(field, v).map_err(translate_domain_error))
        .transpose()
}

fn serial(value: &str) -> Result<SerialNumber, ApiError> {
    SerialNumber::new(value).map_err(translate_domain_error)
}

fn gender(value: &str) -> Result<Gender, ApiError> {
    value.parse().map_err(translate_domain_error)
}

/// A postal address as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    /// Street and number.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Country.
    pub country: String,
}

impl AddressInfo {
    fn to_address(&self) -> Result<Address, ApiError> {
        Address::new(&self.street, &self.city, &self.state, &self.country)
            .map_err(translate_domain_error)
    }
}

impl From<&Address> for AddressInfo {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            city: address.city().to_string(),
            state: address.state().to_string(),
            country: address.country().to_string(),
        }
    }
}

// ============================================================================
// Housing
// ============================================================================

/// API request to create a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFacilityRequest {
    /// The facility name.
    pub name: String,
    /// The facility address.
    pub address: AddressInfo,
}

impl CommandRequest for CreateFacilityRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::CreateFacility {
            name: self.name.clone(),
            address: self.address.to_address()?,
        })
    }
}

/// API request to rename and/or re-address a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFacilityRequest {
    /// The facility to change.
    pub facility_id: i64,
    /// The new name, if changing.
    pub name: Option<String>,
    /// The new address, if changing.
    pub address: Option<AddressInfo>,
}

impl CommandRequest for UpdateFacilityRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::UpdateFacility {
            facility_id: FacilityId::new(self.facility_id),
            name: self.name.clone(),
            address: self
                .address
                .as_ref()
                .map(AddressInfo::to_address)
                .transpose()?,
        })
    }
}

/// API request to delete an empty facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFacilityRequest {
    /// The facility to delete.
    pub facility_id: i64,
}

impl CommandRequest for DeleteFacilityRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::DeleteFacility {
            facility_id: FacilityId::new(self.facility_id),
        })
    }
}

/// API request to add a block to a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlockRequest {
    /// The owning facility.
    pub facility_id: i64,
    /// The block type, e.g. "Maximum Security".
    pub block_type: String,
}

impl CommandRequest for CreateBlockRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::CreateBlock {
            facility_id: FacilityId::new(self.facility_id),
            block_type: self.block_type.clone(),
        })
    }
}

/// API request to change a block's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBlockRequest {
    /// The block to change.
    pub block_id: i64,
    /// The new block type.
    pub block_type: String,
}

impl CommandRequest for UpdateBlockRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::UpdateBlock {
            block_id: BlockId::new(self.block_id),
            block_type: self.block_type.clone(),
        })
    }
}

/// API request to delete a block, relocating its occupants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBlockRequest {
    /// The block to delete.
    pub block_id: i64,
}

impl CommandRequest for DeleteBlockRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::DeleteBlock {
            block_id: BlockId::new(self.block_id),
        })
    }
}

/// API request to add a cell to a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCellRequest {
    /// The owning block.
    pub block_id: i64,
    /// The cell type; isolation types are limited to one occupant.
    pub cell_type: String,
    /// The number of occupants the cell holds.
    pub capacity: u32,
}

impl CommandRequest for CreateCellRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::CreateCell {
            block_id: BlockId::new(self.block_id),
            cell_type: self.cell_type.clone(),
            capacity: self.capacity,
        })
    }
}

/// API request to change a cell's type and/or capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCellRequest {
    /// The cell to change.
    pub cell_id: i64,
    /// The new cell type, if changing.
    pub cell_type: Option<String>,
    /// The new capacity, if changing.
    pub capacity: Option<u32>,
}

impl CommandRequest for UpdateCellRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::UpdateCell {
            cell_id: CellId::new(self.cell_id),
            cell_type: self.cell_type.clone(),
            capacity: self.capacity,
        })
    }
}

/// API request to delete a cell, relocating its occupants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCellRequest {
    /// The cell to delete.
    pub cell_id: i64,
}

impl CommandRequest for DeleteCellRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::DeleteCell {
            cell_id: CellId::new(self.cell_id),
        })
    }
}

// ============================================================================
// Occupants
// ============================================================================

/// API request to admit an occupant into a cell.
///
/// Dates are ISO 8601 (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmitPrisonerRequest {
    /// The receiving cell.
    pub cell_id: i64,
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: String,
    /// First day of the sentence.
    pub sentence_start: String,
    /// Last day of the sentence.
    pub sentence_end: String,
    /// `MALE` or `FEMALE`.
    pub gender: String,
}

impl CommandRequest for AdmitPrisonerRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::AdmitPrisoner {
            cell_id: CellId::new(self.cell_id),
            name: self.name.clone(),
            date_of_birth: date("date_of_birth", &self.date_of_birth)?,
            sentence_start: date("sentence_start", &self.sentence_start)?,
            sentence_end: date("sentence_end", &self.sentence_end)?,
            gender: gender(&self.gender)?,
        })
    }
}

/// API request to correct an occupant's personal or sentence data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePrisonerRequest {
    /// The occupant to change.
    pub prisoner_id: i64,
    /// New name.
    pub name: Option<String>,
    /// New date of birth.
    pub date_of_birth: Option<String>,
    /// New sentence start.
    pub sentence_start: Option<String>,
    /// New sentence end.
    pub sentence_end: Option<String>,
    /// New gender.
    pub gender: Option<String>,
}

impl CommandRequest for UpdatePrisonerRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::UpdatePrisoner {
            prisoner_id: PrisonerId::new(self.prisoner_id),
            name: self.name.clone(),
            date_of_birth: optional_date("date_of_birth", self.date_of_birth.as_deref())?,
            sentence_start: optional_date("sentence_start", self.sentence_start.as_deref())?,
            sentence_end: optional_date("sentence_end", self.sentence_end.as_deref())?,
            gender: self.gender.as_deref().map(gender).transpose()?,
        })
    }
}

/// API request to move an occupant to another cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPrisonerRequest {
    /// The occupant to move.
    pub prisoner_id: i64,
    /// The receiving cell.
    pub to_cell_id: i64,
}

impl CommandRequest for TransferPrisonerRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::TransferPrisoner {
            prisoner_id: PrisonerId::new(self.prisoner_id),
            to_cell_id: CellId::new(self.to_cell_id),
        })
    }
}

/// API request to release an occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePrisonerRequest {
    /// The occupant to release.
    pub prisoner_id: i64,
}

impl CommandRequest for ReleasePrisonerRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::ReleasePrisoner {
            prisoner_id: PrisonerId::new(self.prisoner_id),
        })
    }
}

/// API request to add a crime record to an occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCrimeRecordRequest {
    /// The occupant.
    pub prisoner_id: i64,
    /// The offence category.
    pub crime_type: String,
    /// Free-text description, at most 255 characters.
    pub description: Option<String>,
    /// When the offence happened.
    pub offence_date: String,
}

impl CommandRequest for AddCrimeRecordRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::AddCrimeRecord {
            prisoner_id: PrisonerId::new(self.prisoner_id),
            crime_type: self.crime_type.clone(),
            description: self.description.clone(),
            offence_date: date("offence_date", &self.offence_date)?,
        })
    }
}

/// API request to add a medical note to an occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMedicalNoteRequest {
    /// The occupant.
    pub prisoner_id: i64,
    /// When the note was taken.
    pub recorded_on: String,
    /// The note.
    pub note: String,
}

impl CommandRequest for AddMedicalNoteRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::AddMedicalNote {
            prisoner_id: PrisonerId::new(self.prisoner_id),
            recorded_on: date("recorded_on", &self.recorded_on)?,
            note: self.note.clone(),
        })
    }
}

// ============================================================================
// Visits
// ============================================================================

/// API request to register a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterVisitorRequest {
    /// Full name.
    pub name: String,
    /// Relationship to the occupants they visit.
    pub relationship: String,
    /// Contact phone number.
    pub phone: String,
}

impl CommandRequest for RegisterVisitorRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::RegisterVisitor {
            name: self.name.clone(),
            relationship: self.relationship.clone(),
            phone: self.phone.clone(),
        })
    }
}

/// API request to change a visitor's details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVisitorRequest {
    /// The visitor.
    pub visitor_id: i64,
    /// New name.
    pub name: Option<String>,
    /// New relationship.
    pub relationship: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

impl CommandRequest for UpdateVisitorRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::UpdateVisitor {
            visitor_id: VisitorId::new(self.visitor_id),
            name: self.name.clone(),
            relationship: self.relationship.clone(),
            phone: self.phone.clone(),
        })
    }
}

/// API request to remove a visitor and their visit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveVisitorRequest {
    /// The visitor.
    pub visitor_id: i64,
}

impl CommandRequest for RemoveVisitorRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::RemoveVisitor {
            visitor_id: VisitorId::new(self.visitor_id),
        })
    }
}

/// API request to log a visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogVisitRequest {
    /// The visitor.
    pub visitor_id: i64,
    /// The occupant visited.
    pub prisoner_id: i64,
    /// The day of the visit.
    pub visit_date: String,
    /// Optional remarks.
    pub notes: Option<String>,
}

impl CommandRequest for LogVisitRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::LogVisit {
            visitor_id: VisitorId::new(self.visitor_id),
            prisoner_id: PrisonerId::new(self.prisoner_id),
            visit_date: date("visit_date", &self.visit_date)?,
            notes: self.notes.clone(),
        })
    }
}

// ============================================================================
// Rooms, departments and containment
// ============================================================================

/// API request to create a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    /// The room type, e.g. "Infirmary".
    pub room_type: String,
    /// Optional description.
    pub description: Option<String>,
}

impl CommandRequest for CreateRoomRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::CreateRoom {
            room_type: self.room_type.clone(),
            description: self.description.clone(),
        })
    }
}

/// API request to change a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    /// The room.
    pub room_id: i64,
    /// New room type.
    pub room_type: Option<String>,
    /// New description.
    pub description: Option<String>,
}

impl CommandRequest for UpdateRoomRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::UpdateRoom {
            room_id: RoomId::new(self.room_id),
            room_type: self.room_type.clone(),
            description: self.description.clone(),
        })
    }
}

/// API request to record equipment in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddEquipmentRequest {
    /// The room.
    pub room_id: i64,
    /// The equipment name.
    pub name: String,
    /// How many units, at least one.
    pub quantity: u32,
}

impl CommandRequest for AddEquipmentRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::AddEquipment {
            room_id: RoomId::new(self.room_id),
            name: self.name.clone(),
            quantity: self.quantity,
        })
    }
}

/// API request to delete a room and its containment links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRoomRequest {
    /// The room.
    pub room_id: i64,
}

impl CommandRequest for DeleteRoomRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::DeleteRoom {
            room_id: RoomId::new(self.room_id),
        })
    }
}

/// API request to create a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    /// The department type; "SECURITY" marks the armed department.
    pub department_type: String,
}

impl CommandRequest for CreateDepartmentRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::CreateDepartment {
            department_type: self.department_type.clone(),
        })
    }
}

/// API request to change a department's type and/or status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDepartmentRequest {
    /// The department.
    pub department_id: i64,
    /// New department type.
    pub department_type: Option<String>,
    /// `ACTIVE` or `INACTIVE`.
    pub status: Option<String>,
}

impl CommandRequest for UpdateDepartmentRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        let status: Option<DepartmentStatus> = self
            .status
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(translate_domain_error)?;
        Ok(Command::UpdateDepartment {
            department_id: DepartmentId::new(self.department_id),
            department_type: self.department_type.clone(),
            status,
        })
    }
}

/// API request to record a department expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    /// The department.
    pub department_id: i64,
    /// What the money was spent on.
    pub description: String,
    /// The amount in cents.
    pub amount_cents: i64,
    /// When the expense was incurred.
    pub incurred_on: String,
}

impl CommandRequest for AddExpenseRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::AddExpense {
            department_id: DepartmentId::new(self.department_id),
            description: self.description.clone(),
            amount_cents: self.amount_cents,
            incurred_on: date("incurred_on", &self.incurred_on)?,
        })
    }
}

/// API request to delete a department without staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDepartmentRequest {
    /// The department.
    pub department_id: i64,
}

impl CommandRequest for DeleteDepartmentRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::DeleteDepartment {
            department_id: DepartmentId::new(self.department_id),
        })
    }
}

/// API request naming one block / department / room link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainmentRequest {
    /// The block.
    pub block_id: i64,
    /// The department.
    pub department_id: i64,
    /// The room.
    pub room_id: i64,
    /// `true` to remove the link instead of adding it.
    #[serde(default)]
    pub unlink: bool,
}

impl CommandRequest for ContainmentRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        let block_id: BlockId = BlockId::new(self.block_id);
        let department_id: DepartmentId = DepartmentId::new(self.department_id);
        let room_id: RoomId = RoomId::new(self.room_id);
        Ok(if self.unlink {
            Command::UnlinkContainment {
                block_id,
                department_id,
                room_id,
            }
        } else {
            Command::LinkContainment {
                block_id,
                department_id,
                room_id,
            }
        })
    }
}

// ============================================================================
// Staff and schedules
// ============================================================================

/// API request to hire a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireStaffRequest {
    /// Full name.
    pub name: String,
    /// Yearly salary in cents.
    pub salary_cents: i64,
    /// Contact phone number.
    pub phone: String,
    /// Date of birth.
    pub date_of_birth: String,
    /// `MALE`, `FEMALE` or `OTHER`.
    pub gender: String,
    /// Job title.
    pub role: String,
    /// The department they join.
    pub department_id: i64,
}

impl CommandRequest for HireStaffRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        let gender: StaffGender = self.gender.parse().map_err(translate_domain_error)?;
        Ok(Command::HireStaff {
            name: self.name.clone(),
            salary_cents: self.salary_cents,
            phone: self.phone.clone(),
            date_of_birth: date("date_of_birth", &self.date_of_birth)?,
            gender,
            role: self.role.clone(),
            department_id: DepartmentId::new(self.department_id),
        })
    }
}

/// API request to change a staff member's details or department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStaffRequest {
    /// The staff member.
    pub staff_id: i64,
    /// New name.
    pub name: Option<String>,
    /// New salary in cents.
    pub salary_cents: Option<i64>,
    /// New phone number.
    pub phone: Option<String>,
    /// New job title.
    pub role: Option<String>,
    /// New department.
    pub department_id: Option<i64>,
}

impl CommandRequest for UpdateStaffRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::UpdateStaff {
            staff_id: StaffId::new(self.staff_id),
            name: self.name.clone(),
            salary_cents: self.salary_cents,
            phone: self.phone.clone(),
            role: self.role.clone(),
            department_id: self.department_id.map(DepartmentId::new),
        })
    }
}

/// API request to dismiss a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissStaffRequest {
    /// The staff member.
    pub staff_id: i64,
}

impl CommandRequest for DismissStaffRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::DismissStaff {
            staff_id: StaffId::new(self.staff_id),
        })
    }
}

/// API request to put a staff member under a supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignSupervisorRequest {
    /// The supervisor.
    pub supervisor_id: i64,
    /// The subordinate.
    pub subordinate_id: i64,
}

impl CommandRequest for AssignSupervisorRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::AssignSupervisor {
            supervisor_id: StaffId::new(self.supervisor_id),
            subordinate_id: StaffId::new(self.subordinate_id),
        })
    }
}

/// API request to remove a staff member's supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveSupervisorRequest {
    /// The subordinate.
    pub subordinate_id: i64,
}

impl CommandRequest for RemoveSupervisorRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::RemoveSupervisor {
            subordinate_id: StaffId::new(self.subordinate_id),
        })
    }
}

/// API request to create a work schedule.
///
/// Times are `HH:MM` or `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    /// The staff member.
    pub staff_id: i64,
    /// Day names, e.g. `["Monday", "Tuesday"]`.
    pub days: Vec<String>,
    /// Start of the shift.
    pub start: Option<String>,
    /// End of the shift.
    pub end: Option<String>,
}

impl CommandRequest for CreateScheduleRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::CreateSchedule {
            staff_id: StaffId::new(self.staff_id),
            days: self.days.clone(),
            start: optional_time("start", self.start.as_deref())?,
            end: optional_time("end", self.end.as_deref())?,
        })
    }
}

/// API request to change a work schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    /// The schedule.
    pub schedule_id: i64,
    /// New day names.
    pub days: Option<Vec<String>>,
    /// New start of the shift.
    pub start: Option<String>,
    /// New end of the shift.
    pub end: Option<String>,
}

impl CommandRequest for UpdateScheduleRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::UpdateSchedule {
            schedule_id: ScheduleId::new(self.schedule_id),
            days: self.days.clone(),
            start: optional_time("start", self.start.as_deref())?,
            end: optional_time("end", self.end.as_deref())?,
        })
    }
}

/// API request to delete a work schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteScheduleRequest {
    /// The schedule.
    pub schedule_id: i64,
}

impl CommandRequest for DeleteScheduleRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::DeleteSchedule {
            schedule_id: ScheduleId::new(self.schedule_id),
        })
    }
}

// ============================================================================
// Weapons
// ============================================================================

/// API request to register a weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterGunRequest {
    /// The serial number, unique across the registry.
    pub serial_number: String,
    /// The weapon type, e.g. "Pistol".
    pub gun_type: String,
    /// The model name.
    pub name: String,
}

impl CommandRequest for RegisterGunRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::RegisterGun {
            serial: serial(&self.serial_number)?,
            gun_type: self.gun_type.clone(),
            name: self.name.clone(),
        })
    }
}

/// API request to retire a weapon that nobody holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetireGunRequest {
    /// The serial number.
    pub serial_number: String,
}

impl CommandRequest for RetireGunRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::RetireGun {
            serial: serial(&self.serial_number)?,
        })
    }
}

/// API request to issue a weapon to, or take it back from, a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyRequest {
    /// The serial number.
    pub serial_number: String,
    /// The staff member.
    pub staff_id: i64,
}

/// Issues a weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignGunRequest(pub CustodyRequest);

impl CommandRequest for AssignGunRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::AssignGun {
            serial: serial(&self.0.serial_number)?,
            staff_id: StaffId::new(self.0.staff_id),
        })
    }
}

/// Takes a weapon back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnGunRequest(pub CustodyRequest);

impl CommandRequest for ReturnGunRequest {
    fn to_command(&self) -> Result<Command, ApiError> {
        Ok(Command::ReturnGun {
            serial: serial(&self.0.serial_number)?,
            staff_id: StaffId::new(self.0.staff_id),
        })
    }
}

// ============================================================================
// Responses
// ============================================================================

/// API response for every successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResponse {
    /// The name of the applied command.
    pub action: String,
    /// What changed, as recorded in the audit trail.
    pub message: String,
    /// The persisted audit event.
    pub event_id: i64,
    /// The identifier of the created entity, if the command created one.
    pub created_id: Option<i64>,
}

/// One cell as seen from its block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellInfo {
    /// The cell.
    pub cell_id: i64,
    /// The cell type.
    pub cell_type: String,
    /// How many occupants fit.
    pub capacity: u32,
    /// How many occupants are housed.
    pub occupancy: usize,
    /// Whether the cell is an isolation cell.
    pub is_isolation: bool,
    /// Occupants in admission order.
    pub occupants: Vec<i64>,
}

/// One block with its cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    /// The block.
    pub block_id: i64,
    /// The block type.
    pub block_type: String,
    /// Sum of the cell capacities.
    pub total_capacity: u64,
    /// Occupants housed in the block.
    pub occupants: usize,
    /// The cells, in creation order.
    pub cells: Vec<CellInfo>,
}

/// One facility with its housing tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityInfo {
    /// The facility.
    pub facility_id: i64,
    /// The facility name.
    pub name: String,
    /// The facility address.
    pub address: AddressInfo,
    /// Occupants housed in the facility.
    pub occupants: usize,
    /// The blocks, in creation order.
    pub blocks: Vec<BlockInfo>,
}

/// API response listing facilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFacilitiesResponse {
    /// All facilities in identifier order.
    pub facilities: Vec<FacilityInfo>,
}

/// Derived block figures from the containment association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummaryResponse {
    /// The block.
    pub block_id: i64,
    /// The facility owning the block.
    pub facility_id: i64,
    /// The block type.
    pub block_type: String,
    /// Distinct departments linked to the block.
    pub departments: Vec<i64>,
    /// Distinct rooms linked to the block.
    pub rooms: Vec<i64>,
    /// Expenses of the linked departments, each department counted once.
    pub total_expenses_cents: i64,
    /// Whether a medical department is linked to the block.
    pub has_medical_department: bool,
}

/// One crime record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeRecordInfo {
    /// The offence category.
    pub crime_type: String,
    /// Free-text description.
    pub description: Option<String>,
    /// When the offence happened.
    pub offence_date: String,
}

/// One medical note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalNoteInfo {
    /// When the note was taken.
    pub recorded_on: String,
    /// The note.
    pub note: String,
}

/// API response describing one occupant.
///
/// Durations are whole days as of the request date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrisonerInfo {
    /// The occupant.
    pub prisoner_id: i64,
    /// The cell housing them.
    pub cell_id: Option<i64>,
    /// Full name.
    pub name: String,
    /// `MALE` or `FEMALE`.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: String,
    /// Age in whole years.
    pub age: u32,
    /// First day of the sentence.
    pub sentence_start: String,
    /// Last day of the sentence.
    pub sentence_end: String,
    /// Length of the sentence.
    pub sentence_days: i64,
    /// Days served so far.
    pub served_days: i64,
    /// Days left to serve.
    pub remaining_days: i64,
    /// Whether the sentence has ended.
    pub sentence_complete: bool,
    /// Crime records in the order they were added.
    pub crime_records: Vec<CrimeRecordInfo>,
    /// Medical notes in the order they were added.
    pub medical_notes: Vec<MedicalNoteInfo>,
    /// Distinct visitors the occupant received.
    pub visitors: Vec<i64>,
}

/// One work schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInfo {
    /// The schedule.
    pub schedule_id: i64,
    /// The staff member working it.
    pub staff_id: i64,
    /// Day names in week order.
    pub days: Vec<String>,
    /// Start of the shift, `HH:MM:SS`.
    pub start: Option<String>,
    /// End of the shift, `HH:MM:SS`.
    pub end: Option<String>,
    /// At least five days including a weekday.
    pub full_time: bool,
    /// Any working day falls on Saturday or Sunday.
    pub weekend: bool,
    /// Shift length in minutes when both bounds are set.
    pub shift_minutes: Option<i64>,
}

/// API response describing one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffInfo {
    /// The staff member.
    pub staff_id: i64,
    /// Full name.
    pub name: String,
    /// Job title.
    pub role: String,
    /// The department they belong to.
    pub department_id: i64,
    /// Yearly salary in cents.
    pub salary_cents: i64,
    /// Contact phone number.
    pub phone: String,
    /// `MALE`, `FEMALE` or `OTHER`.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: String,
    /// Direct supervisor.
    pub supervisor_id: Option<i64>,
    /// Direct subordinates.
    pub subordinates: Vec<i64>,
    /// Supervisors from the direct one up to the top.
    pub chain_of_command: Vec<i64>,
    /// Work schedules.
    pub schedules: Vec<ScheduleInfo>,
    /// Serial numbers of the weapons currently held.
    pub weapons: Vec<String>,
}

/// API response for a working-hours check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursResponse {
    /// The schedule.
    pub schedule_id: i64,
    /// The time of day checked, `HH:MM:SS`.
    pub time: String,
    /// Whether the time falls inside the shift.
    pub working: bool,
}

/// One equipment line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentInfo {
    /// The equipment name.
    pub name: String,
    /// How many units.
    pub quantity: u32,
}

/// API response describing one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    /// The room.
    pub room_id: i64,
    /// The room type.
    pub room_type: String,
    /// Optional description.
    pub description: Option<String>,
    /// Equipment in the order it was added.
    pub equipment: Vec<EquipmentInfo>,
    /// Blocks the room is linked to.
    pub blocks: Vec<i64>,
}

/// API response describing one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentInfo {
    /// The department.
    pub department_id: i64,
    /// The department type.
    pub department_type: String,
    /// `ACTIVE` or `INACTIVE`.
    pub status: String,
    /// Sum of the department's expenses.
    pub total_expenses_cents: i64,
    /// Staff members in the department.
    pub staff: Vec<i64>,
    /// Blocks the department is linked to.
    pub blocks: Vec<i64>,
}

/// One custody record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentInfo {
    /// The staff member.
    pub staff_id: i64,
    /// Whether the weapon came back.
    pub returned: bool,
}

/// API response describing one weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GunInfo {
    /// The serial number.
    pub serial_number: String,
    /// The weapon type.
    pub gun_type: String,
    /// The model name.
    pub name: String,
    /// Every custody record, returned or not.
    pub assignments: Vec<AssignmentInfo>,
}

/// API response listing weapons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGunsResponse {
    /// All weapons ordered by serial number.
    pub guns: Vec<GunInfo>,
}

/// One logged visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitLogInfo {
    /// The visitor.
    pub visitor_id: i64,
    /// The occupant visited.
    pub prisoner_id: i64,
    /// The day of the visit.
    pub visit_date: String,
    /// Optional remarks.
    pub notes: Option<String>,
}

/// API response describing one visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorInfo {
    /// The visitor.
    pub visitor_id: i64,
    /// Full name.
    pub name: String,
    /// Relationship to the occupants they visit.
    pub relationship: String,
    /// Contact phone number.
    pub phone: String,
    /// Distinct occupants visited.
    pub prisoners: Vec<i64>,
    /// Their visits in the order they were logged.
    pub visits: Vec<VisitLogInfo>,
}

/// One planned move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementInfo {
    /// The occupant that would move.
    pub prisoner_id: i64,
    /// The cell that would receive them.
    pub cell_id: i64,
}

/// API response previewing where displaced occupants would go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationPreviewResponse {
    /// The cell being shrunk or deleted.
    pub cell_id: i64,
    /// The planned moves, empty when nobody is displaced.
    pub placements: Vec<PlacementInfo>,
}

/// One audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    /// The event ID.
    pub event_id: Option<i64>,
    /// The actor ID.
    pub actor_id: String,
    /// The actor type.
    pub actor_type: String,
    /// The cause ID.
    pub cause_id: String,
    /// The cause description.
    pub cause_description: String,
    /// The action name.
    pub action_name: String,
    /// Optional action details.
    pub action_details: Option<String>,
    /// Before state snapshot.
    pub before_snapshot: String,
    /// After state snapshot.
    pub after_snapshot: String,
}
