// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{PrisonerId, VisitorId};
use crate::validation::{
    MAX_LABEL_LEN, MAX_NAME_LEN, MAX_TEXT_LEN, optional_text, require_not_future, require_phone,
    require_text,
};
use serde::Serialize;
use time::Date;

/// A person registered to visit occupants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visitor {
    id: VisitorId,
    name: String,
    relationship: String,
    phone: String,
}

impl Visitor {
    /// Creates a visitor.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or relationship is blank or too long, or
    /// the phone number is malformed.
    pub fn new(
        id: VisitorId,
        name: &str,
        relationship: &str,
        phone: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: require_text("name", name, MAX_NAME_LEN)?,
            relationship: require_text("relationship", relationship, MAX_LABEL_LEN)?,
            phone: require_phone(phone)?,
        })
    }

    /// Returns the visitor identity.
    #[must_use]
    pub const fn id(&self) -> VisitorId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the relationship to the occupant(s) visited.
    #[must_use]
    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Changes the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or too long.
    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = require_text("name", name, MAX_NAME_LEN)?;
        Ok(())
    }

    /// Changes the relationship.
    ///
    /// # Errors
    ///
    /// Returns an error if the relationship is blank or too long.
    pub fn set_relationship(&mut self, relationship: &str) -> Result<(), DomainError> {
        self.relationship = require_text("relationship", relationship, MAX_LABEL_LEN)?;
        Ok(())
    }

    /// Changes the phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is malformed.
    pub fn set_phone(&mut self, phone: &str) -> Result<(), DomainError> {
        self.phone = require_phone(phone)?;
        Ok(())
    }
}

/// A dated record of a visitor seeing an occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitLog {
    visitor_id: VisitorId,
    prisoner_id: PrisonerId,
    visit_date: Date,
    notes: Option<String>,
}

impl VisitLog {
    /// Records a visit.
    ///
    /// # Errors
    ///
    /// Returns an error if the visit date is after `today` or the notes are
    /// longer than 255 characters.
    pub fn new(
        visitor_id: VisitorId,
        prisoner_id: PrisonerId,
        visit_date: Date,
        notes: Option<&str>,
        today: Date,
    ) -> Result<Self, DomainError> {
        require_not_future("visit_date", visit_date, today)?;
        Ok(Self {
            visitor_id,
            prisoner_id,
            visit_date,
            notes: optional_text("notes", notes, MAX_TEXT_LEN)?,
        })
    }

    /// Returns the visitor.
    #[must_use]
    pub const fn visitor_id(&self) -> VisitorId {
        self.visitor_id
    }

    /// Returns the occupant visited.
    #[must_use]
    pub const fn prisoner_id(&self) -> PrisonerId {
        self.prisoner_id
    }

    /// Returns the visit date.
    #[must_use]
    pub const fn visit_date(&self) -> Date {
        self.visit_date
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
