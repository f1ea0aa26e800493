// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weapons and the ledger of who holds them.
//!
//! The ledger records data only. Whether a staff member is allowed to hold a
//! weapon at all (department membership) is decided by the caller.

use crate::error::DomainError;
use crate::ids::{SerialNumber, StaffId};
use crate::validation::{MAX_LABEL_LEN, MAX_NAME_LEN, require_text};
use serde::Serialize;
use std::collections::BTreeMap;

/// A registered weapon, identified by its serial number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gun {
    serial: SerialNumber,
    gun_type: String,
    name: String,
}

impl Gun {
    /// Creates a weapon record.
    ///
    /// # Errors
    ///
    /// Returns an error if the type or name is blank or too long.
    pub fn new(serial: SerialNumber, gun_type: &str, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            serial,
            gun_type: require_text("gun_type", gun_type, MAX_LABEL_LEN)?,
            name: require_text("gun_name", name, MAX_NAME_LEN)?,
        })
    }

    /// Returns the serial number.
    #[must_use]
    pub const fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    /// Returns the weapon type.
    #[must_use]
    pub fn gun_type(&self) -> &str {
        &self.gun_type
    }

    /// Returns the weapon name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One custody record: a weapon issued to a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GunAssignment {
    serial: SerialNumber,
    staff_id: StaffId,
    returned: bool,
}

impl GunAssignment {
    /// Creates an outstanding assignment.
    #[must_use]
    pub const fn new(serial: SerialNumber, staff_id: StaffId) -> Self {
        Self {
            serial,
            staff_id,
            returned: false,
        }
    }

    /// Rebuilds a stored assignment, including its returned flag.
    #[must_use]
    pub const fn restore(serial: SerialNumber, staff_id: StaffId, returned: bool) -> Self {
        Self {
            serial,
            staff_id,
            returned,
        }
    }

    /// Returns the weapon serial number.
    #[must_use]
    pub const fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    /// Returns the holder.
    #[must_use]
    pub const fn staff_id(&self) -> StaffId {
        self.staff_id
    }

    /// Returns whether the weapon has been handed back.
    #[must_use]
    pub const fn returned(&self) -> bool {
        self.returned
    }

    /// Returns whether the weapon is still held.
    #[must_use]
    pub const fn is_outstanding(&self) -> bool {
        !self.returned
    }

    /// Marks the weapon as handed back. There is no way back.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyReturned` if it was already returned.
    pub fn mark_as_returned(&mut self) -> Result<(), DomainError> {
        if self.returned {
            return Err(DomainError::AlreadyReturned {
                serial: self.serial.clone(),
                staff_id: self.staff_id,
            });
        }
        self.returned = true;
        Ok(())
    }
}

/// All custody records, keyed by the (weapon, staff) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustodyLedger {
    entries: BTreeMap<(SerialNumber, StaffId), GunAssignment>,
}

impl CustodyLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Issues a weapon to a staff member.
    ///
    /// A previously returned record for the same pair is replaced by a new
    /// outstanding one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentOutstanding` if the pair already has an
    /// outstanding record.
    pub fn assign(&mut self, serial: SerialNumber, staff_id: StaffId) -> Result<(), DomainError> {
        let key: (SerialNumber, StaffId) = (serial, staff_id);
        if self.entries.get(&key).is_some_and(GunAssignment::is_outstanding) {
            return Err(DomainError::AssignmentOutstanding {
                serial: key.0,
                staff_id,
            });
        }
        let assignment: GunAssignment = GunAssignment::new(key.0.clone(), staff_id);
        self.entries.insert(key, assignment);
        Ok(())
    }

    /// Records a stored assignment as-is.
    pub fn restore(&mut self, assignment: GunAssignment) {
        self.entries.insert(
            (assignment.serial.clone(), assignment.staff_id),
            assignment,
        );
    }

    /// Marks the pair's record as returned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentNotFound` if there is no record, or
    /// `DomainError::AlreadyReturned` if it was already returned.
    pub fn mark_returned(
        &mut self,
        serial: &SerialNumber,
        staff_id: StaffId,
    ) -> Result<(), DomainError> {
        self.entries
            .get_mut(&(serial.clone(), staff_id))
            .ok_or_else(|| DomainError::AssignmentNotFound {
                serial: serial.clone(),
                staff_id,
            })?
            .mark_as_returned()
    }

    /// Returns the record for a pair.
    #[must_use]
    pub fn assignment(&self, serial: &SerialNumber, staff_id: StaffId) -> Option<&GunAssignment> {
        self.entries.get(&(serial.clone(), staff_id))
    }

    /// Returns the outstanding records held by a staff member.
    #[must_use]
    pub fn outstanding_for_staff(&self, staff_id: StaffId) -> Vec<&GunAssignment> {
        self.entries
            .values()
            .filter(|a| a.staff_id == staff_id && a.is_outstanding())
            .collect()
    }

    /// Returns the outstanding records for a weapon.
    #[must_use]
    pub fn outstanding_for_gun(&self, serial: &SerialNumber) -> Vec<&GunAssignment> {
        self.entries
            .values()
            .filter(|a| &a.serial == serial && a.is_outstanding())
            .collect()
    }

    /// Returns the staff currently holding a weapon.
    #[must_use]
    pub fn holders_of(&self, serial: &SerialNumber) -> Vec<StaffId> {
        self.outstanding_for_gun(serial)
            .into_iter()
            .map(GunAssignment::staff_id)
            .collect()
    }

    /// Returns the weapons a staff member currently holds.
    #[must_use]
    pub fn guns_of(&self, staff_id: StaffId) -> Vec<SerialNumber> {
        self.outstanding_for_staff(staff_id)
            .into_iter()
            .map(|a| a.serial.clone())
            .collect()
    }

    /// Drops every record of a weapon, returned or not, and returns how many
    /// were dropped.
    pub fn remove_for_gun(&mut self, serial: &SerialNumber) -> usize {
        let before: usize = self.entries.len();
        self.entries.retain(|(s, _), _| s != serial);
        before - self.entries.len()
    }

    /// Drops every record of a staff member and returns how many were
    /// dropped.
    pub fn remove_for_staff(&mut self, staff_id: StaffId) -> usize {
        let before: usize = self.entries.len();
        self.entries.retain(|(_, s), _| *s != staff_id);
        before - self.entries.len()
    }

    /// Iterates over every record in (serial, staff) order.
    pub fn entries(&self) -> impl Iterator<Item = &GunAssignment> {
        self.entries.values()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
