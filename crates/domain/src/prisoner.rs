// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupants and the records they own.
//!
//! Derived values such as age and time served depend on the observation date,
//! which callers pass in explicitly. Nothing here reads the clock.

use crate::error::DomainError;
use crate::ids::{CellId, PrisonerId};
use crate::validation::{
    MAX_LABEL_LEN, MAX_NAME_LEN, MAX_TEXT_LEN, optional_text, require_not_future, require_ordered,
    require_text,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration};

/// Maximum length of a medical note.
const MAX_NOTE_LEN: usize = 2000;

/// Occupant gender, a fixed two-value enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" | "M" => Ok(Self::Male),
            "FEMALE" | "F" => Ok(Self::Female),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A conviction on an occupant's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrimeRecord {
    crime_type: String,
    description: Option<String>,
    offence_date: Date,
}

impl CrimeRecord {
    /// Creates a crime record.
    ///
    /// # Errors
    ///
    /// Returns an error if the crime type is blank or longer than 50
    /// characters, or the description is longer than 255 characters.
    pub fn new(
        crime_type: &str,
        description: Option<&str>,
        offence_date: Date,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            crime_type: require_text("crime_type", crime_type, MAX_LABEL_LEN)?,
            description: optional_text("description", description, MAX_TEXT_LEN)?,
            offence_date,
        })
    }

    /// Returns the crime type.
    #[must_use]
    pub fn crime_type(&self) -> &str {
        &self.crime_type
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the offence date.
    #[must_use]
    pub const fn offence_date(&self) -> Date {
        self.offence_date
    }
}

/// A dated medical observation about an occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicalNote {
    recorded_on: Date,
    note: String,
}

impl MedicalNote {
    /// Creates a medical note.
    ///
    /// # Errors
    ///
    /// Returns an error if the note is blank or longer than 2000 characters.
    pub fn new(recorded_on: Date, note: &str) -> Result<Self, DomainError> {
        Ok(Self {
            recorded_on,
            note: require_text("note", note, MAX_NOTE_LEN)?,
        })
    }

    /// Returns the date the note was recorded.
    #[must_use]
    pub const fn recorded_on(&self) -> Date {
        self.recorded_on
    }

    /// Returns the note text.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// An occupant of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prisoner {
    id: PrisonerId,
    cell_id: Option<CellId>,
    name: String,
    date_of_birth: Date,
    sentence_start: Date,
    sentence_end: Date,
    gender: Gender,
    crime_records: Vec<CrimeRecord>,
    medical_notes: Vec<MedicalNote>,
}

impl Prisoner {
    /// Creates an occupant that is not yet housed in a cell.
    ///
    /// # Arguments
    ///
    /// * `id` - The occupant identity
    /// * `name` - Full name (1-100 characters)
    /// * `date_of_birth` - Must not be after `today` or after `sentence_start`
    /// * `sentence_start` - Must not be after `today`
    /// * `sentence_end` - Must not be before `sentence_start`
    /// * `gender` - Occupant gender
    /// * `today` - The observation date
    ///
    /// # Errors
    ///
    /// Returns an error if any of the field rules above is broken.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PrisonerId,
        name: &str,
        date_of_birth: Date,
        sentence_start: Date,
        sentence_end: Date,
        gender: Gender,
        today: Date,
    ) -> Result<Self, DomainError> {
        let name: String = require_text("name", name, MAX_NAME_LEN)?;
        require_not_future("date_of_birth", date_of_birth, today)?;
        require_not_future("sentence_start", sentence_start, today)?;
        require_ordered(
            "date_of_birth",
            date_of_birth,
            "sentence_start",
            sentence_start,
        )?;
        require_ordered("sentence_start", sentence_start, "sentence_end", sentence_end)?;
        Ok(Self {
            id,
            cell_id: None,
            name,
            date_of_birth,
            sentence_start,
            sentence_end,
            gender,
            crime_records: Vec::new(),
            medical_notes: Vec::new(),
        })
    }

    /// Returns the occupant identity.
    #[must_use]
    pub const fn id(&self) -> PrisonerId {
        self.id
    }

    /// Returns the cell currently housing this occupant, if any.
    #[must_use]
    pub const fn cell_id(&self) -> Option<CellId> {
        self.cell_id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }

    /// Returns the sentence start date.
    #[must_use]
    pub const fn sentence_start(&self) -> Date {
        self.sentence_start
    }

    /// Returns the sentence end date.
    #[must_use]
    pub const fn sentence_end(&self) -> Date {
        self.sentence_end
    }

    /// Returns the gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the crime records in the order they were added.
    #[must_use]
    pub fn crime_records(&self) -> &[CrimeRecord] {
        &self.crime_records
    }

    /// Returns the medical notes in the order they were added.
    #[must_use]
    pub fn medical_notes(&self) -> &[MedicalNote] {
        &self.medical_notes
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

    /// Changes the gender.
    pub const fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Changes the date of birth.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is after `today` or after the sentence
    /// start.
    pub fn set_date_of_birth(
        &mut self,
        date_of_birth: Date,
        today: Date,
    ) -> Result<(), DomainError> {
        require_not_future("date_of_birth", date_of_birth, today)?;
        require_ordered(
            "date_of_birth",
            date_of_birth,
            "sentence_start",
            self.sentence_start,
        )?;
        self.date_of_birth = date_of_birth;
        Ok(())
    }

    /// Changes the sentence start.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is after `today`, before the date of
    /// birth, or after the current sentence end.
    pub fn set_sentence_start(
        &mut self,
        sentence_start: Date,
        today: Date,
    ) -> Result<(), DomainError> {
        require_not_future("sentence_start", sentence_start, today)?;
        require_ordered(
            "date_of_birth",
            self.date_of_birth,
            "sentence_start",
            sentence_start,
        )?;
        require_ordered(
            "sentence_start",
            sentence_start,
            "sentence_end",
            self.sentence_end,
        )?;
        self.sentence_start = sentence_start;
        Ok(())
    }

    /// Changes the sentence end.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is before the current sentence start.
    pub fn set_sentence_end(&mut self, sentence_end: Date) -> Result<(), DomainError> {
        require_ordered(
            "sentence_start",
            self.sentence_start,
            "sentence_end",
            sentence_end,
        )?;
        self.sentence_end = sentence_end;
        Ok(())
    }

    /// Replaces both ends of the sentence at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the start is after `today` or before the date of
    /// birth, or the end is before the start.
    pub fn set_sentence(
        &mut self,
        sentence_start: Date,
        sentence_end: Date,
        today: Date,
    ) -> Result<(), DomainError> {
        require_not_future("sentence_start", sentence_start, today)?;
        require_ordered(
            "date_of_birth",
            self.date_of_birth,
            "sentence_start",
            sentence_start,
        )?;
        require_ordered("sentence_start", sentence_start, "sentence_end", sentence_end)?;
        self.sentence_start = sentence_start;
        self.sentence_end = sentence_end;
        Ok(())
    }

    /// Adds a crime record.
    ///
    /// # Errors
    ///
    /// Returns an error if the offence date is after `today` or before the
    /// occupant's date of birth.
    pub fn add_crime_record(
        &mut self,
        record: CrimeRecord,
        today: Date,
    ) -> Result<(), DomainError> {
        require_not_future("offence_date", record.offence_date(), today)?;
        require_ordered(
            "date_of_birth",
            self.date_of_birth,
            "offence_date",
            record.offence_date(),
        )?;
        self.crime_records.push(record);
        Ok(())
    }

    /// Adds a medical note.
    ///
    /// # Errors
    ///
    /// Returns an error if the note is dated after `today`.
    pub fn add_medical_note(&mut self, note: MedicalNote, today: Date) -> Result<(), DomainError> {
        require_not_future("recorded_on", note.recorded_on(), today)?;
        self.medical_notes.push(note);
        Ok(())
    }

    /// Returns the age in whole years on `today`.
    #[must_use]
    pub fn age(&self, today: Date) -> u32 {
        let mut years: i32 = today.year() - self.date_of_birth.year();
        let birthday_pending: bool = (today.month() as u8, today.day())
            < (self.date_of_birth.month() as u8, self.date_of_birth.day());
        if birthday_pending {
            years -= 1;
        }
        u32::try_from(years).unwrap_or(0)
    }

    /// Returns the length of the sentence.
    #[must_use]
    pub fn sentence_duration(&self) -> Duration {
        self.sentence_end - self.sentence_start
    }

    /// Returns the portion of the sentence served by `today`.
    ///
    /// The value is clamped to the sentence window.
    #[must_use]
    pub fn time_served(&self, today: Date) -> Duration {
        self.clamp_to_sentence(today) - self.sentence_start
    }

    /// Returns the portion of the sentence remaining after `today`.
    ///
    /// The value is clamped to the sentence window.
    #[must_use]
    pub fn time_remaining(&self, today: Date) -> Duration {
        self.sentence_end - self.clamp_to_sentence(today)
    }

    /// Returns whether the sentence has been fully served by `today`.
    #[must_use]
    pub fn is_sentence_complete(&self, today: Date) -> bool {
        today >= self.sentence_end
    }

    fn clamp_to_sentence(&self, today: Date) -> Date {
        today.clamp(self.sentence_start, self.sentence_end)
    }

    pub(crate) const fn set_cell_id(&mut self, cell_id: Option<CellId>) {
        self.cell_id = cell_id;
    }
}
