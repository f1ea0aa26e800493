// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rooms and departments: the organizational side of a block.

use crate::error::DomainError;
use crate::ids::{DepartmentId, RoomId};
use crate::validation::{
    MAX_LABEL_LEN, MAX_NAME_LEN, MAX_TEXT_LEN, optional_text, require_non_negative, require_text,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The department type that may hold weapons, compared case-insensitively.
pub const SECURITY_DEPARTMENT_TYPE: &str = "SECURITY";

/// Substring that marks a department as medical, compared case-insensitively.
const MEDICAL_MARKER: &str = "medical";

/// Operational status of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DepartmentStatus {
    /// The department is operating.
    #[default]
    Active,
    /// The department is suspended.
    Inactive,
}

impl DepartmentStatus {
    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl FromStr for DepartmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidDepartmentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for DepartmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of equipment kept in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equipment {
    name: String,
    quantity: u32,
}

impl Equipment {
    /// Creates an equipment entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or too long, or the quantity is
    /// zero.
    pub fn new(name: &str, quantity: u32) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity { quantity });
        }
        Ok(Self {
            name: require_text("equipment_name", name, MAX_NAME_LEN)?,
            quantity,
        })
    }

    /// Returns the equipment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A room that departments operate out of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    id: RoomId,
    room_type: String,
    description: Option<String>,
    equipment: Vec<Equipment>,
}

impl Room {
    /// Creates a room with no equipment.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is blank or longer than 50 characters,
    /// or the description is longer than 255 characters.
    pub fn new(
        id: RoomId,
        room_type: &str,
        description: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            room_type: require_text("room_type", room_type, MAX_LABEL_LEN)?,
            description: optional_text("description", description, MAX_TEXT_LEN)?,
            equipment: Vec::new(),
        })
    }

    /// Returns the room identity.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the room type.
    #[must_use]
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the equipment list.
    #[must_use]
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    /// Changes the room type.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is blank or longer than 50 characters.
    pub fn set_room_type(&mut self, room_type: &str) -> Result<(), DomainError> {
        self.room_type = require_text("room_type", room_type, MAX_LABEL_LEN)?;
        Ok(())
    }

    /// Changes the description. Blank input clears it.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is longer than 255 characters.
    pub fn set_description(&mut self, description: Option<&str>) -> Result<(), DomainError> {
        self.description = optional_text("description", description, MAX_TEXT_LEN)?;
        Ok(())
    }

    /// Adds equipment. An entry with the same name (case-insensitive) has its
    /// quantity increased instead.
    pub fn add_equipment(&mut self, equipment: Equipment) {
        match self
            .equipment
            .iter_mut()
            .find(|e| e.name.eq_ignore_ascii_case(&equipment.name))
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(equipment.quantity);
            }
            None => self.equipment.push(equipment),
        }
    }
}

/// A dated expense booked against a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    description: String,
    amount_cents: i64,
    incurred_on: Date,
}

impl Expense {
    /// Creates an expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is blank or too long, or the
    /// amount is negative.
    pub fn new(
        description: &str,
        amount_cents: i64,
        incurred_on: Date,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            description: require_text("description", description, MAX_TEXT_LEN)?,
            amount_cents: require_non_negative("amount_cents", amount_cents)?,
            incurred_on,
        })
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    /// Returns the date the expense was incurred.
    #[must_use]
    pub const fn incurred_on(&self) -> Date {
        self.incurred_on
    }
}

/// An organizational unit that staff belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    id: DepartmentId,
    department_type: String,
    status: DepartmentStatus,
    expenses: Vec<Expense>,
}

impl Department {
    /// Creates an active department with no expenses.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is blank or longer than 50 characters.
    pub fn new(id: DepartmentId, department_type: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            department_type: require_text("department_type", department_type, MAX_LABEL_LEN)?,
            status: DepartmentStatus::Active,
            expenses: Vec::new(),
        })
    }

    /// Returns the department identity.
    #[must_use]
    pub const fn id(&self) -> DepartmentId {
        self.id
    }

    /// Returns the department type.
    #[must_use]
    pub fn department_type(&self) -> &str {
        &self.department_type
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> DepartmentStatus {
        self.status
    }

    /// Returns the expenses in booking order.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Changes the department type.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is blank or longer than 50 characters.
    pub fn set_department_type(&mut self, department_type: &str) -> Result<(), DomainError> {
        self.department_type = require_text("department_type", department_type, MAX_LABEL_LEN)?;
        Ok(())
    }

    /// Changes the status.
    pub const fn set_status(&mut self, status: DepartmentStatus) {
        self.status = status;
    }

    /// Books an expense.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Returns the sum of all expenses in cents.
    #[must_use]
    pub fn total_expenses(&self) -> i64 {
        self.expenses
            .iter()
            .map(Expense::amount_cents)
            .fold(0_i64, i64::saturating_add)
    }

    /// Returns whether this is a medical department.
    #[must_use]
    pub fn is_medical(&self) -> bool {
        self.department_type.to_lowercase().contains(MEDICAL_MARKER)
    }

    /// Returns whether this is the security department, the only unit
    /// allowed to hold weapons.
    #[must_use]
    pub fn is_security(&self) -> bool {
        self.department_type
            .eq_ignore_ascii_case(SECURITY_DEPARTMENT_TYPE)
    }
}
