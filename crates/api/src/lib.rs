// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Warden facility management system.
//!
//! This crate sits between transports and the core: it authenticates and
//! authorizes actors, parses wire requests into core commands, applies them
//! to the persisted state and translates every failure into an [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    check_working_hours, get_audit_event, get_audit_timeline, get_block_summary, get_cell,
    get_department, get_facility, get_gun, get_prisoner, get_room, get_staff, get_visitor,
    list_facilities, list_guns, preview_relocation, submit,
};
pub use request_response::{
    AddCrimeRecordRequest, AddEquipmentRequest, AddExpenseRequest, AddMedicalNoteRequest,
    AddressInfo, AdmitPrisonerRequest, AssignGunRequest, AssignSupervisorRequest, AssignmentInfo,
    AuditEventInfo, BlockInfo, BlockSummaryResponse, CellInfo, CommandRequest, ContainmentRequest,
    CreateBlockRequest, CreateCellRequest, CreateDepartmentRequest, CreateFacilityRequest,
    CreateRoomRequest, CreateScheduleRequest, CrimeRecordInfo, CustodyRequest, DeleteBlockRequest,
    DeleteCellRequest, DeleteDepartmentRequest, DeleteFacilityRequest, DeleteRoomRequest,
    DeleteScheduleRequest, DepartmentInfo, DismissStaffRequest, EquipmentInfo, FacilityInfo,
    GunInfo, HireStaffRequest, ListFacilitiesResponse, ListGunsResponse, LogVisitRequest,
    MedicalNoteInfo, PlacementInfo, PrisonerInfo, RegisterGunRequest, RegisterVisitorRequest,
    ReleasePrisonerRequest, RelocationPreviewResponse, RemoveSupervisorRequest,
    RemoveVisitorRequest, RetireGunRequest, ReturnGunRequest, RoomInfo, ScheduleInfo, StaffInfo,
    TransferPrisonerRequest, UpdateBlockRequest, UpdateCellRequest, UpdateDepartmentRequest,
    UpdateFacilityRequest, UpdatePrisonerRequest, UpdateRoomRequest, UpdateScheduleRequest,
    UpdateStaffRequest, UpdateVisitorRequest, VisitLogInfo, VisitorInfo, WorkingHoursResponse,
    WriteResponse,
};
