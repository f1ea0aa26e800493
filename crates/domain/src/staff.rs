// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{DepartmentId, StaffId};
use crate::validation::{
    MAX_LABEL_LEN, MAX_NAME_LEN, require_non_negative, require_not_future, require_phone,
    require_text,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Staff gender, a fixed three-value enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffGender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Any other identity.
    Other,
}

impl StaffGender {
    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for StaffGender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" | "M" => Ok(Self::Male),
            "FEMALE" | "F" => Ok(Self::Female),
            "OTHER" | "O" => Ok(Self::Other),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for StaffGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of staff.
///
/// Supervision and weapon custody are recorded outside the entity, in
/// [`crate::SupervisionGraph`] and [`crate::CustodyLedger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Staff {
    id: StaffId,
    name: String,
    salary_cents: i64,
    phone: String,
    date_of_birth: Date,
    gender: StaffGender,
    role: String,
    department_id: DepartmentId,
}

impl Staff {
    /// Creates a staff member.
    ///
    /// # Arguments
    ///
    /// * `id` - The staff identity
    /// * `name` - Full name (1-100 characters)
    /// * `salary_cents` - Annual salary in cents, not negative
    /// * `phone` - Contact number
    /// * `date_of_birth` - Must not be after `today`
    /// * `gender` - Staff gender
    /// * `role` - Job title (1-50 characters)
    /// * `department_id` - The department the member belongs to
    /// * `today` - The observation date
    ///
    /// # Errors
    ///
    /// Returns an error if any of the field rules above is broken.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: StaffId,
        name: &str,
        salary_cents: i64,
        phone: &str,
        date_of_birth: Date,
        gender: StaffGender,
        role: &str,
        department_id: DepartmentId,
        today: Date,
    ) -> Result<Self, DomainError> {
        require_not_future("date_of_birth", date_of_birth, today)?;
        Ok(Self {
            id,
            name: require_text("name", name, MAX_NAME_LEN)?,
            salary_cents: require_non_negative("salary_cents", salary_cents)?,
            phone: require_phone(phone)?,
            date_of_birth,
            gender,
            role: require_text("role", role, MAX_LABEL_LEN)?,
            department_id,
        })
    }

    /// Returns the staff identity.
    #[must_use]
    pub const fn id(&self) -> StaffId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the salary in cents.
    #[must_use]
    pub const fn salary_cents(&self) -> i64 {
        self.salary_cents
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }

    /// Returns the gender.
    #[must_use]
    pub const fn gender(&self) -> StaffGender {
        self.gender
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the department.
    #[must_use]
    pub const fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    /// Changes the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or longer than 100 characters.
    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = require_text("name", name, MAX_NAME_LEN)?;
        Ok(())
    }

    /// Changes the salary.
    ///
    /// # Errors
    ///
    /// Returns an error if the salary is negative.
    pub fn set_salary_cents(&mut self, salary_cents: i64) -> Result<(), DomainError> {
        self.salary_cents = require_non_negative("salary_cents", salary_cents)?;
        Ok(())
    }

    /// Changes the phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is blank, too long or malformed.
    pub fn set_phone(&mut self, phone: &str) -> Result<(), DomainError> {
        self.phone = require_phone(phone)?;
        Ok(())
    }

    /// Changes the date of birth.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is after `today`.
    pub fn set_date_of_birth(
        &mut self,
        date_of_birth: Date,
        today: Date,
    ) -> Result<(), DomainError> {
        require_not_future("date_of_birth", date_of_birth, today)?;
        self.date_of_birth = date_of_birth;
        Ok(())
    }

    /// Changes the gender.
    pub const fn set_gender(&mut self, gender: StaffGender) {
        self.gender = gender;
    }

    /// Changes the role.
    ///
    /// # Errors
    ///
    /// Returns an error if the role is blank or longer than 50 characters.
    pub fn set_role(&mut self, role: &str) -> Result<(), DomainError> {
        self.role = require_text("role", role, MAX_LABEL_LEN)?;
        Ok(())
    }

    /// Moves the staff member to another department.
    ///
    /// Department existence and custody consequences are checked by the
    /// caller.
    pub const fn set_department_id(&mut self, department_id: DepartmentId) {
        self.department_id = department_id;
    }
}
