// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::Date;
use time::macros::date;
use warden_audit::Cause;
use warden_persistence::Persistence;

use crate::{
    AddressInfo, AdmitPrisonerRequest, ApiError, AuthenticatedActor, CommandRequest,
    CreateBlockRequest, CreateCellRequest, CreateDepartmentRequest, CreateFacilityRequest,
    HireStaffRequest, Role, WriteResponse, submit,
};

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-123"), Role::Admin)
}

pub fn create_test_officer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("officer-456"), Role::Officer)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub const fn create_test_today() -> Date {
    date!(2026 - 01 - 15)
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Submits a request as the given actor on the test date.
pub fn submit_as<R: CommandRequest>(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &R,
) -> Result<WriteResponse, ApiError> {
    submit(
        persistence,
        request,
        actor,
        create_test_cause(),
        create_test_today(),
    )
}

/// Submits a request as admin and returns the created identifier.
pub fn create_as_admin<R: CommandRequest>(persistence: &mut Persistence, request: &R) -> i64 {
    submit_as(persistence, &create_test_admin(), request)
        .unwrap()
        .created_id
        .unwrap()
}

pub fn create_test_address() -> AddressInfo {
    AddressInfo {
        street: String::from("1 Main Street"),
        city: String::from("Springfield"),
        state: String::from("IL"),
        country: String::from("USA"),
    }
}

/// A facility holding one block.
pub fn create_test_block(persistence: &mut Persistence) -> (i64, i64) {
    let facility_id: i64 = create_as_admin(
        persistence,
        &CreateFacilityRequest {
            name: String::from("North Ridge"),
            address: create_test_address(),
        },
    );
    let block_id: i64 = create_as_admin(
        persistence,
        &CreateBlockRequest {
            facility_id,
            block_type: String::from("General Population"),
        },
    );
    (facility_id, block_id)
}

pub fn create_test_cell(
    persistence: &mut Persistence,
    block_id: i64,
    cell_type: &str,
    capacity: u32,
) -> i64 {
    create_as_admin(
        persistence,
        &CreateCellRequest {
            block_id,
            cell_type: String::from(cell_type),
            capacity,
        },
    )
}

pub fn create_test_admission(cell_id: i64, name: &str) -> AdmitPrisonerRequest {
    AdmitPrisonerRequest {
        cell_id,
        name: String::from(name),
        date_of_birth: String::from("1990-05-20"),
        sentence_start: String::from("2024-03-01"),
        sentence_end: String::from("2030-03-01"),
        gender: String::from("MALE"),
    }
}

pub fn create_test_department(persistence: &mut Persistence, department_type: &str) -> i64 {
    create_as_admin(
        persistence,
        &CreateDepartmentRequest {
            department_type: String::from(department_type),
        },
    )
}

pub fn create_test_hire(department_id: i64, name: &str) -> HireStaffRequest {
    HireStaffRequest {
        name: String::from(name),
        salary_cents: 4_500_000,
        phone: String::from("555-0100"),
        date_of_birth: String::from("1985-02-11"),
        gender: String::from("FEMALE"),
        role: String::from("Guard"),
        department_id,
    }
}
