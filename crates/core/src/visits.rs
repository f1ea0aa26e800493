// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::Outcome;
use crate::error::CoreError;
use crate::state::State;
use time::Date;
use warden_domain::{DomainError, PrisonerId, VisitLog, Visitor, VisitorId};

pub fn register(
    state: &mut State,
    name: &str,
    relationship: &str,
    phone: &str,
) -> Result<Outcome, CoreError> {
    let visitor_id: VisitorId = VisitorId::new(state.allocate_id());
    let visitor: Visitor = Visitor::new(visitor_id, name, relationship, phone)?;
    state.visitors.insert(visitor_id, visitor);
    Ok(Outcome::created(
        format!("Registered visitor {visitor_id}"),
        visitor_id.value(),
    ))
}

pub fn update(
    state: &mut State,
    visitor_id: VisitorId,
    name: Option<&str>,
    relationship: Option<&str>,
    phone: Option<&str>,
) -> Result<Outcome, CoreError> {
    let visitor: &mut Visitor = state
        .visitors
        .get_mut(&visitor_id)
        .ok_or(DomainError::VisitorNotFound(visitor_id))?;
    if let Some(name) = name {
        visitor.set_name(name)?;
    }
    if let Some(relationship) = relationship {
        visitor.set_relationship(relationship)?;
    }
    if let Some(phone) = phone {
        visitor.set_phone(phone)?;
    }
    Ok(Outcome::updated(format!("Updated visitor {visitor_id}")))
}

pub fn remove(state: &mut State, visitor_id: VisitorId) -> Result<Outcome, CoreError> {
    state
        .visitors
        .remove(&visitor_id)
        .ok_or(DomainError::VisitorNotFound(visitor_id))?;
    let before: usize = state.visit_logs.len();
    state.visit_logs.retain(|v| v.visitor_id() != visitor_id);
    Ok(Outcome::updated(format!(
        "Removed visitor {visitor_id} and {} visit records",
        before - state.visit_logs.len()
    )))
}

pub fn log_visit(
    state: &mut State,
    visitor_id: VisitorId,
    prisoner_id: PrisonerId,
    visit_date: Date,
    notes: Option<&str>,
    today: Date,
) -> Result<Outcome, CoreError> {
    state.visitor(visitor_id)?;
    state.prisoner(prisoner_id)?;
    let log: VisitLog = VisitLog::new(visitor_id, prisoner_id, visit_date, notes, today)?;
    state.visit_logs.push(log);
    Ok(Outcome::updated(format!(
        "Visitor {visitor_id} visited prisoner {prisoner_id} on {visit_date}"
    )))
}
