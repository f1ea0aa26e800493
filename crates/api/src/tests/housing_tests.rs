// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use warden_persistence::Persistence;

use crate::tests::helpers::{
    create_as_admin, create_test_admin, create_test_admission, create_test_block, create_test_cell,
    create_test_department, create_test_officer, create_test_persistence, create_test_today,
    submit_as,
};
use crate::{
    AddExpenseRequest, AdmitPrisonerRequest, ApiError, BlockSummaryResponse, CellInfo,
    ContainmentRequest, CreateCellRequest, CreateRoomRequest, DeleteFacilityRequest, FacilityInfo,
    ListFacilitiesResponse, PrisonerInfo, RelocationPreviewResponse, TransferPrisonerRequest,
    UpdateCellRequest, get_block_summary, get_cell, get_facility, get_prisoner, list_facilities,
    preview_relocation,
};

fn admit(persistence: &mut Persistence, cell_id: i64, name: &str) -> i64 {
    submit_as(
        persistence,
        &create_test_officer(),
        &create_test_admission(cell_id, name),
    )
    .unwrap()
    .created_id
    .unwrap()
}

#[test]
fn test_housing_tree_is_listed() {
    let mut persistence: Persistence = create_test_persistence();
    let (facility_id, block_id) = create_test_block(&mut persistence);
    let cell_id: i64 = create_test_cell(&mut persistence, block_id, "Standard", 2);
    create_test_cell(&mut persistence, block_id, "Solitary Confinement", 1);
    admit(&mut persistence, cell_id, "Jon Doe");

    let listing: ListFacilitiesResponse =
        list_facilities(&mut persistence, create_test_today()).unwrap();

    assert_eq!(listing.facilities.len(), 1);
    let facility: &FacilityInfo = &listing.facilities[0];
    assert_eq!(facility.facility_id, facility_id);
    assert_eq!(facility.occupants, 1);
    assert_eq!(facility.blocks[0].total_capacity, 3);
    assert_eq!(facility.blocks[0].cells.len(), 2);
    assert!(facility.blocks[0].cells[1].is_isolation);
}

#[test]
fn test_full_cell_rejects_admission() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);
    let cell_id: i64 = create_test_cell(&mut persistence, block_id, "Standard", 1);
    admit(&mut persistence, cell_id, "Jon Doe");

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_officer(),
        &create_test_admission(cell_id, "Jim Roe"),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "cell_capacity"
    ));
    let cell: CellInfo = get_cell(&mut persistence, cell_id, create_test_today()).unwrap();
    assert_eq!(cell.occupancy, 1);
}

#[test]
fn test_isolation_cell_must_hold_one() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &CreateCellRequest {
            block_id,
            cell_type: String::from("Isolation"),
            capacity: 2,
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "isolation_single_occupancy"
    ));
}

#[test]
fn test_malformed_date_is_invalid_input() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);
    let cell_id: i64 = create_test_cell(&mut persistence, block_id, "Standard", 2);
    let request: AdmitPrisonerRequest = AdmitPrisonerRequest {
        date_of_birth: String::from("20/05/1990"),
        ..create_test_admission(cell_id, "Jon Doe")
    };

    let err: ApiError = submit_as(&mut persistence, &create_test_officer(), &request).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "date_of_birth"));
}

#[test]
fn test_unknown_block_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &CreateCellRequest {
            block_id: 404,
            cell_type: String::from("Standard"),
            capacity: 2,
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Block"
    ));
}

#[test]
fn test_prisoner_sentence_figures() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);
    let cell_id: i64 = create_test_cell(&mut persistence, block_id, "Standard", 2);
    let prisoner_id: i64 = admit(&mut persistence, cell_id, "Jon Doe");

    let info: PrisonerInfo =
        get_prisoner(&mut persistence, prisoner_id, create_test_today()).unwrap();

    assert_eq!(info.cell_id, Some(cell_id));
    assert_eq!(info.age, 35);
    assert_eq!(info.sentence_start, "2024-03-01");
    assert_eq!(info.served_days, 685);
    assert_eq!(info.served_days + info.remaining_days, info.sentence_days);
    assert!(!info.sentence_complete);
}

#[test]
fn test_transfer_moves_occupant() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);
    let from: i64 = create_test_cell(&mut persistence, block_id, "Standard", 2);
    let to: i64 = create_test_cell(&mut persistence, block_id, "Standard", 2);
    let prisoner_id: i64 = admit(&mut persistence, from, "Jon Doe");

    submit_as(
        &mut persistence,
        &create_test_officer(),
        &TransferPrisonerRequest {
            prisoner_id,
            to_cell_id: to,
        },
    )
    .unwrap();

    let target: CellInfo = get_cell(&mut persistence, to, create_test_today()).unwrap();
    assert_eq!(target.occupants, vec![prisoner_id]);
    let origin: CellInfo = get_cell(&mut persistence, from, create_test_today()).unwrap();
    assert!(origin.occupants.is_empty());
}

#[test]
fn test_capacity_reduction_relocates_latest_admissions() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);
    let crowded: i64 = create_test_cell(&mut persistence, block_id, "Standard", 3);
    let spare: i64 = create_test_cell(&mut persistence, block_id, "Standard", 4);
    let first: i64 = admit(&mut persistence, crowded, "Jon Doe");
    let second: i64 = admit(&mut persistence, crowded, "Jim Roe");
    let third: i64 = admit(&mut persistence, crowded, "Joe Poe");

    let preview: RelocationPreviewResponse =
        preview_relocation(&mut persistence, crowded, Some(1), create_test_today()).unwrap();
    assert_eq!(preview.placements.len(), 2);
    assert!(preview.placements.iter().all(|p| p.cell_id == spare));

    submit_as(
        &mut persistence,
        &create_test_admin(),
        &UpdateCellRequest {
            cell_id: crowded,
            cell_type: None,
            capacity: Some(1),
        },
    )
    .unwrap();

    let kept: CellInfo = get_cell(&mut persistence, crowded, create_test_today()).unwrap();
    assert_eq!(kept.occupants, vec![first]);
    let moved: CellInfo = get_cell(&mut persistence, spare, create_test_today()).unwrap();
    assert_eq!(moved.occupants, vec![second, third]);
}

#[test]
fn test_relocation_that_does_not_fit_changes_nothing() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);
    let crowded: i64 = create_test_cell(&mut persistence, block_id, "Standard", 2);
    create_test_cell(&mut persistence, block_id, "Segregation", 1);
    admit(&mut persistence, crowded, "Jon Doe");
    admit(&mut persistence, crowded, "Jim Roe");

    let err: ApiError =
        preview_relocation(&mut persistence, crowded, None, create_test_today()).unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "relocation_capacity"
    ));

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &UpdateCellRequest {
            cell_id: crowded,
            cell_type: None,
            capacity: Some(1),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));

    let cell: CellInfo = get_cell(&mut persistence, crowded, create_test_today()).unwrap();
    assert_eq!(cell.capacity, 2);
    assert_eq!(cell.occupancy, 2);
}

#[test]
fn test_preview_rejects_zero_capacity_and_changes_nothing() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);
    let crowded: i64 = create_test_cell(&mut persistence, block_id, "Standard", 2);
    create_test_cell(&mut persistence, block_id, "Standard", 4);
    admit(&mut persistence, crowded, "Jon Doe");

    let err: ApiError =
        preview_relocation(&mut persistence, crowded, Some(0), create_test_today()).unwrap_err();

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "capacity"
    ));
    let cell: CellInfo = get_cell(&mut persistence, crowded, create_test_today()).unwrap();
    assert_eq!(cell.capacity, 2);
    assert_eq!(cell.occupancy, 1);
}

#[test]
fn test_occupied_facility_cannot_be_deleted() {
    let mut persistence: Persistence = create_test_persistence();
    let (facility_id, block_id) = create_test_block(&mut persistence);
    let cell_id: i64 = create_test_cell(&mut persistence, block_id, "Standard", 2);
    admit(&mut persistence, cell_id, "Jon Doe");

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &DeleteFacilityRequest { facility_id },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "facility_empty_before_delete"
    ));
    assert!(get_facility(&mut persistence, facility_id, create_test_today()).is_ok());
}

#[test]
fn test_block_summary_counts_each_department_once() {
    let mut persistence: Persistence = create_test_persistence();
    let (facility_id, block_id) = create_test_block(&mut persistence);
    let medical: i64 = create_test_department(&mut persistence, "Medical Services");
    submit_as(
        &mut persistence,
        &create_test_admin(),
        &AddExpenseRequest {
            department_id: medical,
            description: String::from("Bandages"),
            amount_cents: 12_500,
            incurred_on: String::from("2026-01-02"),
        },
    )
    .unwrap();
    let mut rooms: Vec<i64> = Vec::new();
    for room_type in ["Infirmary", "Pharmacy"] {
        let room_id: i64 = create_as_admin(
            &mut persistence,
            &CreateRoomRequest {
                room_type: String::from(room_type),
                description: None,
            },
        );
        submit_as(
            &mut persistence,
            &create_test_admin(),
            &ContainmentRequest {
                block_id,
                department_id: medical,
                room_id,
                unlink: false,
            },
        )
        .unwrap();
        rooms.push(room_id);
    }

    let summary: BlockSummaryResponse =
        get_block_summary(&mut persistence, block_id, create_test_today()).unwrap();

    assert_eq!(summary.facility_id, facility_id);
    assert_eq!(summary.departments, vec![medical]);
    assert_eq!(summary.rooms, rooms);
    assert_eq!(summary.total_expenses_cents, 12_500);
    assert!(summary.has_medical_department);
}

#[test]
fn test_unlinking_unknown_association_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, block_id) = create_test_block(&mut persistence);

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &ContainmentRequest {
            block_id,
            department_id: 98,
            room_id: 99,
            unlink: true,
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Containment link"
    ));
}
