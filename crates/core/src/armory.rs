// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weapon registration and custody.
//!
//! Only members of the security department may be issued a weapon. The
//! ledger itself does not know about departments; the check lives here.

use crate::apply::Outcome;
use crate::error::CoreError;
use crate::state::State;
use warden_domain::{Department, DomainError, Gun, SerialNumber, Staff, StaffId};

pub fn register(
    state: &mut State,
    serial: SerialNumber,
    gun_type: &str,
    name: &str,
) -> Result<Outcome, CoreError> {
    if state.guns.contains_key(&serial) {
        return Err(DomainError::DuplicateSerialNumber(serial).into());
    }
    let gun: Gun = Gun::new(serial.clone(), gun_type, name)?;
    state.guns.insert(serial.clone(), gun);
    Ok(Outcome::updated(format!("Registered weapon '{serial}'")))
}

pub fn retire(state: &mut State, serial: &SerialNumber) -> Result<Outcome, CoreError> {
    state.gun(serial)?;
    let holders: usize = state.custody.holders_of(serial).len();
    if holders > 0 {
        return Err(CoreError::GunInCustody {
            serial: serial.clone(),
            holders,
        });
    }
    state.guns.remove(serial);
    let records: usize = state.custody.remove_for_gun(serial);
    Ok(Outcome::updated(format!(
        "Retired weapon '{serial}' and {records} custody records"
    )))
}

pub fn assign(
    state: &mut State,
    serial: SerialNumber,
    staff_id: StaffId,
) -> Result<Outcome, CoreError> {
    state.gun(&serial)?;
    let staff: &Staff = state.staff_member(staff_id)?;
    let department: &Department = state.department(staff.department_id())?;
    if !department.is_security() {
        return Err(CoreError::SecurityClearanceRequired {
            staff_id,
            department_type: department.department_type().to_string(),
        });
    }
    let details: String = format!("Issued weapon '{serial}' to staff member {staff_id}");
    state.custody.assign(serial, staff_id)?;
    Ok(Outcome::updated(details))
}

pub fn return_gun(
    state: &mut State,
    serial: &SerialNumber,
    staff_id: StaffId,
) -> Result<Outcome, CoreError> {
    state.custody.mark_returned(serial, staff_id)?;
    Ok(Outcome::updated(format!(
        "Staff member {staff_id} returned weapon '{serial}'"
    )))
}
