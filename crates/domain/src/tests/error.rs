// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CellId, DomainError, ErrorKind, SerialNumber, StaffId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::EmptyField { field: "name" };
    assert_eq!(format!("{err}"), "Field 'name' cannot be empty");

    let err: DomainError = DomainError::CellFull {
        cell_id: CellId::new(4),
        capacity: 2,
    };
    assert_eq!(format!("{err}"), "Cell 4 is full (2 of 2)");

    let err: DomainError = DomainError::SelfSupervision {
        staff_id: StaffId::new(7),
    };
    assert_eq!(format!("{err}"), "Staff member 7 cannot supervise themselves");

    let serial: SerialNumber = SerialNumber::new("sn-001").unwrap();
    let err: DomainError = DomainError::GunNotFound(serial);
    assert_eq!(format!("{err}"), "Weapon 'SN-001' not found");

    let err: DomainError = DomainError::InvalidDay(String::from("FUNDAY"));
    assert_eq!(format!("{err}"), "Invalid schedule day: 'FUNDAY'");
}

#[test]
fn test_error_kinds_follow_taxonomy() {
    assert_eq!(DomainError::EmptyDays.kind(), ErrorKind::Validation);
    assert_eq!(
        DomainError::CellFull {
            cell_id: CellId::new(1),
            capacity: 1,
        }
        .kind(),
        ErrorKind::CapacityConflict
    );
    assert_eq!(
        DomainError::MissingParticipant {
            participant: "room",
            id: String::from("3"),
        }
        .kind(),
        ErrorKind::ReferentialIntegrity
    );
    let serial: SerialNumber = SerialNumber::new("SN-1").unwrap();
    assert_eq!(
        DomainError::AlreadyReturned {
            serial: serial.clone(),
            staff_id: StaffId::new(1),
        }
        .kind(),
        ErrorKind::StateConflict
    );
    assert_eq!(DomainError::GunNotFound(serial).kind(), ErrorKind::NotFound);
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::EmptyDays);
    assert_eq!(err.to_string(), "A schedule must include at least one day");
}
