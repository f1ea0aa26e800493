// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff records, the chain of command and work schedules.

use crate::apply::Outcome;
use crate::error::CoreError;
use crate::state::State;
use time::{Date, Time};
use tracing::info;
use warden_domain::{
    Department, DepartmentId, DomainError, Schedule, ScheduleId, SerialNumber, Staff, StaffGender,
    StaffId, StaffSupervision,
};

/// Fields of a hiring request.
#[derive(Debug, Clone, Copy)]
pub struct Hire<'a> {
    pub name: &'a str,
    pub salary_cents: i64,
    pub phone: &'a str,
    pub date_of_birth: Date,
    pub gender: StaffGender,
    pub role: &'a str,
    pub department_id: DepartmentId,
}

/// Optional changes to a staff member.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffChanges<'a> {
    pub name: Option<&'a str>,
    pub salary_cents: Option<i64>,
    pub phone: Option<&'a str>,
    pub role: Option<&'a str>,
    pub department_id: Option<DepartmentId>,
}

pub fn hire(state: &mut State, hire: Hire<'_>, today: Date) -> Result<Outcome, CoreError> {
    state.department(hire.department_id)?;
    let staff_id: StaffId = StaffId::new(state.allocate_id());
    let staff: Staff = Staff::new(
        staff_id,
        hire.name,
        hire.salary_cents,
        hire.phone,
        hire.date_of_birth,
        hire.gender,
        hire.role,
        hire.department_id,
        today,
    )?;
    state.staff.insert(staff_id, staff);
    Ok(Outcome::created(
        format!(
            "Hired staff member {staff_id} into department {}",
            hire.department_id
        ),
        staff_id.value(),
    ))
}

/// Changes a staff member's details.
///
/// Moving a member who still holds weapons out of the security department is
/// rejected.
pub fn update(
    state: &mut State,
    staff_id: StaffId,
    changes: StaffChanges<'_>,
) -> Result<Outcome, CoreError> {
    if let Some(department_id) = changes.department_id {
        let target: &Department = state.department(department_id)?;
        if !target.is_security() && !state.custody.guns_of(staff_id).is_empty() {
            return Err(CoreError::SecurityClearanceRequired {
                staff_id,
                department_type: target.department_type().to_string(),
            });
        }
    }

    let staff: &mut Staff = state
        .staff
        .get_mut(&staff_id)
        .ok_or(DomainError::StaffNotFound(staff_id))?;
    if let Some(name) = changes.name {
        staff.set_name(name)?;
    }
    if let Some(salary_cents) = changes.salary_cents {
        staff.set_salary_cents(salary_cents)?;
    }
    if let Some(phone) = changes.phone {
        staff.set_phone(phone)?;
    }
    if let Some(role) = changes.role {
        staff.set_role(role)?;
    }
    if let Some(department_id) = changes.department_id {
        staff.set_department_id(department_id);
    }
    Ok(Outcome::updated(format!("Updated staff member {staff_id}")))
}

/// Dismisses a staff member.
///
/// Their supervision edges, schedules and returned custody records go with
/// them. A member who still holds a weapon cannot be dismissed.
pub fn dismiss(state: &mut State, staff_id: StaffId) -> Result<Outcome, CoreError> {
    state.staff_member(staff_id)?;
    let held: Vec<SerialNumber> = state.custody.guns_of(staff_id);
    if !held.is_empty() {
        return Err(CoreError::StaffHoldsWeapons {
            staff_id,
            weapons: held.len(),
        });
    }
    state.staff.remove(&staff_id);
    let edges: usize = state.supervision.remove_staff(staff_id).len();
    let schedules_before: usize = state.schedules.len();
    state.schedules.retain(|_, s| s.staff_id() != staff_id);
    let schedules: usize = schedules_before - state.schedules.len();
    let records: usize = state.custody.remove_for_staff(staff_id);
    info!(
        staff_id = %staff_id,
        edges,
        schedules,
        records,
        "Dismissed staff member"
    );
    Ok(Outcome::updated(format!(
        "Dismissed staff member {staff_id}, removed {edges} supervision edges, \
         {schedules} schedules and {records} custody records"
    )))
}

pub fn assign_supervisor(
    state: &mut State,
    supervisor_id: StaffId,
    subordinate_id: StaffId,
) -> Result<Outcome, CoreError> {
    let edge: StaffSupervision = StaffSupervision::new(supervisor_id, subordinate_id)?;
    state.staff_member(supervisor_id)?;
    state.staff_member(subordinate_id)?;
    state.supervision.add(edge)?;
    Ok(Outcome::updated(format!(
        "Staff member {supervisor_id} now supervises {subordinate_id}"
    )))
}

pub fn remove_supervisor(state: &mut State, subordinate_id: StaffId) -> Result<Outcome, CoreError> {
    let edge: StaffSupervision =
        state
            .supervision
            .remove(subordinate_id)
            .ok_or(DomainError::SupervisionNotFound {
                subordinate: subordinate_id,
            })?;
    Ok(Outcome::updated(format!(
        "Staff member {} no longer supervises {subordinate_id}",
        edge.supervisor()
    )))
}

pub fn create_schedule(
    state: &mut State,
    staff_id: StaffId,
    days: &[String],
    start: Option<Time>,
    end: Option<Time>,
) -> Result<Outcome, CoreError> {
    state.staff_member(staff_id)?;
    let schedule_id: ScheduleId = ScheduleId::new(state.allocate_id());
    let schedule: Schedule = Schedule::new(schedule_id, staff_id, days, start, end)?;
    state.schedules.insert(schedule_id, schedule);
    Ok(Outcome::created(
        format!("Created schedule {schedule_id} for staff member {staff_id}"),
        schedule_id.value(),
    ))
}

pub fn update_schedule(
    state: &mut State,
    schedule_id: ScheduleId,
    days: Option<&[String]>,
    start: Option<Time>,
    end: Option<Time>,
) -> Result<Outcome, CoreError> {
    let schedule: &mut Schedule = state
        .schedules
        .get_mut(&schedule_id)
        .ok_or(DomainError::ScheduleNotFound(schedule_id))?;
    if let Some(days) = days {
        schedule.set_days(days)?;
    }
    match (start, end) {
        (Some(start), Some(end)) => schedule.set_window(start, end)?,
        (Some(start), None) => schedule.set_start(start)?,
        (None, Some(end)) => schedule.set_end(end)?,
        (None, None) => {}
    }
    Ok(Outcome::updated(format!("Updated schedule {schedule_id}")))
}

pub fn delete_schedule(state: &mut State, schedule_id: ScheduleId) -> Result<Outcome, CoreError> {
    state
        .schedules
        .remove(&schedule_id)
        .ok_or(DomainError::ScheduleNotFound(schedule_id))?;
    Ok(Outcome::updated(format!("Deleted schedule {schedule_id}")))
}
