// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupant lifecycle: admission, updates, transfers and release.

use crate::apply::Outcome;
use crate::error::CoreError;
use crate::state::{CellLocation, State};
use time::Date;
use warden_domain::{
    Cell, CellId, CrimeRecord, DomainError, Gender, MedicalNote, Prisoner, PrisonerId,
};

/// Fields of an admission request.
#[derive(Debug, Clone, Copy)]
pub struct Admission<'a> {
    pub cell_id: CellId,
    pub name: &'a str,
    pub date_of_birth: Date,
    pub sentence_start: Date,
    pub sentence_end: Date,
    pub gender: Gender,
}

/// Optional changes to an occupant.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrisonerChanges<'a> {
    pub name: Option<&'a str>,
    pub date_of_birth: Option<Date>,
    pub sentence_start: Option<Date>,
    pub sentence_end: Option<Date>,
    pub gender: Option<Gender>,
}

pub fn admit(
    state: &mut State,
    admission: Admission<'_>,
    today: Date,
) -> Result<Outcome, CoreError> {
    let cell: &Cell = state.cell(admission.cell_id)?;
    if cell.is_full() {
        return Err(DomainError::CellFull {
            cell_id: cell.id(),
            capacity: cell.capacity(),
        }
        .into());
    }
    let prisoner_id: PrisonerId = PrisonerId::new(state.allocate_id());
    let prisoner: Prisoner = Prisoner::new(
        prisoner_id,
        admission.name,
        admission.date_of_birth,
        admission.sentence_start,
        admission.sentence_end,
        admission.gender,
        today,
    )?;
    state.cell_mut(admission.cell_id)?.add_occupant(prisoner)?;
    Ok(Outcome::created(
        format!("Admitted prisoner {prisoner_id} to cell {}", admission.cell_id),
        prisoner_id.value(),
    ))
}

pub fn update(
    state: &mut State,
    prisoner_id: PrisonerId,
    changes: PrisonerChanges<'_>,
    today: Date,
) -> Result<Outcome, CoreError> {
    let prisoner: &mut Prisoner = state.prisoner_mut(prisoner_id)?;
    if let Some(name) = changes.name {
        prisoner.set_name(name)?;
    }
    if let Some(gender) = changes.gender {
        prisoner.set_gender(gender);
    }
    // A birth date later than the current sentence start only fits once the
    // sentence has moved.
    let birth_first: bool = changes
        .date_of_birth
        .is_some_and(|d| d <= prisoner.sentence_start());
    if birth_first {
        set_birth_date(prisoner, changes.date_of_birth, today)?;
    }
    match (changes.sentence_start, changes.sentence_end) {
        (Some(start), Some(end)) => prisoner.set_sentence(start, end, today)?,
        (Some(start), None) => prisoner.set_sentence_start(start, today)?,
        (None, Some(end)) => prisoner.set_sentence_end(end)?,
        (None, None) => {}
    }
    if !birth_first {
        set_birth_date(prisoner, changes.date_of_birth, today)?;
    }
    Ok(Outcome::updated(format!("Updated prisoner {prisoner_id}")))
}

fn set_birth_date(
    prisoner: &mut Prisoner,
    date_of_birth: Option<Date>,
    today: Date,
) -> Result<(), DomainError> {
    date_of_birth.map_or(Ok(()), |d| prisoner.set_date_of_birth(d, today))
}

/// Moves an occupant to another cell.
///
/// The target is checked before the occupant leaves the source cell, so a
/// full target leaves the occupant where they were. Transferring into the
/// cell the occupant already occupies is a no-op.
pub fn transfer(
    state: &mut State,
    prisoner_id: PrisonerId,
    to_cell_id: CellId,
) -> Result<Outcome, CoreError> {
    let from: CellLocation = state.locate_prisoner(prisoner_id)?;
    let target: &Cell = state.cell(to_cell_id)?;
    if from.cell_id == to_cell_id {
        return Ok(Outcome::updated(format!(
            "Prisoner {prisoner_id} already housed in cell {to_cell_id}"
        )));
    }
    if target.is_full() {
        return Err(DomainError::CellFull {
            cell_id: to_cell_id,
            capacity: target.capacity(),
        }
        .into());
    }
    let prisoner: Prisoner = state
        .cell_mut(from.cell_id)?
        .remove_occupant(prisoner_id)
        .ok_or(DomainError::PrisonerNotFound(prisoner_id))?;
    state.cell_mut(to_cell_id)?.add_occupant(prisoner)?;
    Ok(Outcome::updated(format!(
        "Transferred prisoner {prisoner_id} from cell {} to cell {to_cell_id}",
        from.cell_id
    )))
}

pub fn release(state: &mut State, prisoner_id: PrisonerId) -> Result<Outcome, CoreError> {
    let from: CellLocation = state.locate_prisoner(prisoner_id)?;
    state
        .cell_mut(from.cell_id)?
        .remove_occupant(prisoner_id)
        .ok_or(DomainError::PrisonerNotFound(prisoner_id))?;
    let before: usize = state.visit_logs.len();
    state.visit_logs.retain(|v| v.prisoner_id() != prisoner_id);
    let dropped: usize = before - state.visit_logs.len();
    Ok(Outcome::updated(format!(
        "Released prisoner {prisoner_id} from cell {}, dropped {dropped} visit records",
        from.cell_id
    )))
}

pub fn add_crime_record(
    state: &mut State,
    prisoner_id: PrisonerId,
    crime_type: &str,
    description: Option<&str>,
    offence_date: Date,
    today: Date,
) -> Result<Outcome, CoreError> {
    let record: CrimeRecord = CrimeRecord::new(crime_type, description, offence_date)?;
    state
        .prisoner_mut(prisoner_id)?
        .add_crime_record(record, today)?;
    Ok(Outcome::updated(format!(
        "Added crime record to prisoner {prisoner_id}"
    )))
}

pub fn add_medical_note(
    state: &mut State,
    prisoner_id: PrisonerId,
    recorded_on: Date,
    note: &str,
    today: Date,
) -> Result<Outcome, CoreError> {
    let note: MedicalNote = MedicalNote::new(recorded_on, note)?;
    state
        .prisoner_mut(prisoner_id)?
        .add_medical_note(note, today)?;
    Ok(Outcome::updated(format!(
        "Added medical note to prisoner {prisoner_id}"
    )))
}
