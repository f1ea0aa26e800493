// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_department, create_test_room};
use crate::{Department, DepartmentStatus, DomainError, Equipment, Expense, Room};
use time::macros::date;

#[test]
fn test_department_starts_active() {
    let department: Department = create_test_department(1, "Kitchen");
    assert_eq!(department.status(), DepartmentStatus::Active);
    assert_eq!(department.total_expenses(), 0);
}

#[test]
fn test_department_status_round_trips_through_text() {
    assert_eq!(
        "inactive".parse::<DepartmentStatus>().unwrap(),
        DepartmentStatus::Inactive
    );
    assert_eq!(DepartmentStatus::Active.to_string(), "ACTIVE");
    assert!("closed".parse::<DepartmentStatus>().is_err());
}

#[test]
fn test_security_predicate_ignores_case() {
    assert!(create_test_department(1, "Security").is_security());
    assert!(create_test_department(2, "SECURITY").is_security());
    assert!(!create_test_department(3, "Kitchen").is_security());
    assert!(!create_test_department(4, "Security Annex").is_security());
}

#[test]
fn test_medical_predicate_matches_substring() {
    assert!(create_test_department(1, "Medical Wing").is_medical());
    assert!(create_test_department(2, "Psych/medical").is_medical());
    assert!(!create_test_department(3, "Kitchen").is_medical());
}

#[test]
fn test_expense_rejects_negative_amount() {
    let result: Result<Expense, DomainError> = Expense::new("Refund", -1, date!(2025 - 01 - 01));
    assert!(matches!(result, Err(DomainError::NegativeAmount { value: -1, .. })));
}

#[test]
fn test_total_expenses_sums_bookings() {
    let mut department: Department = create_test_department(1, "Kitchen");
    department.add_expense(Expense::new("Food", 125_000, date!(2025 - 01 - 01)).unwrap());
    department.add_expense(Expense::new("Gas", 4_050, date!(2025 - 02 - 01)).unwrap());
    assert_eq!(department.total_expenses(), 129_050);
}

#[test]
fn test_equipment_rejects_zero_quantity() {
    let result: Result<Equipment, DomainError> = Equipment::new("Desk", 0);
    assert!(matches!(result, Err(DomainError::InvalidQuantity { quantity: 0 })));
}

#[test]
fn test_room_merges_equipment_by_name() {
    let mut room: Room = create_test_room(1);
    room.add_equipment(Equipment::new("Desk", 2).unwrap());
    room.add_equipment(Equipment::new("desk", 1).unwrap());
    room.add_equipment(Equipment::new("Chair", 4).unwrap());

    assert_eq!(room.equipment().len(), 2);
    assert_eq!(room.equipment()[0].quantity(), 3);
}

#[test]
fn test_room_description_blank_clears() {
    let mut room: Room = create_test_room(1);
    room.set_description(Some("Ground floor")).unwrap();
    assert_eq!(room.description(), Some("Ground floor"));

    room.set_description(Some("   ")).unwrap();
    assert_eq!(room.description(), None);
}
