// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use warden_persistence::Persistence;

use crate::tests::helpers::{
    create_as_admin, create_test_admin, create_test_department, create_test_hire,
    create_test_officer, create_test_persistence, create_test_today, submit_as,
};
use crate::{
    ApiError, AssignSupervisorRequest, CreateScheduleRequest, DeleteDepartmentRequest,
    DepartmentInfo, DismissStaffRequest, HireStaffRequest, ScheduleInfo, StaffInfo,
    UpdateScheduleRequest, WorkingHoursResponse, check_working_hours, get_department, get_staff,
};

fn supervise(
    persistence: &mut Persistence,
    supervisor_id: i64,
    subordinate_id: i64,
) -> Result<(), ApiError> {
    submit_as(
        persistence,
        &create_test_admin(),
        &AssignSupervisorRequest {
            supervisor_id,
            subordinate_id,
        },
    )
    .map(|_| ())
}

fn weekday_schedule(staff_id: i64) -> CreateScheduleRequest {
    CreateScheduleRequest {
        staff_id,
        days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
            .into_iter()
            .map(String::from)
            .collect(),
        start: Some(String::from("08:00")),
        end: Some(String::from("16:00")),
    }
}

#[test]
fn test_chain_of_command_is_reported() {
    let mut persistence: Persistence = create_test_persistence();
    let department_id: i64 = create_test_department(&mut persistence, "Operations");
    let warden: i64 =
        create_as_admin(&mut persistence, &create_test_hire(department_id, "Ann Top"));
    let captain: i64 =
        create_as_admin(&mut persistence, &create_test_hire(department_id, "Bea Mid"));
    let guard: i64 = create_as_admin(&mut persistence, &create_test_hire(department_id, "Cal Low"));
    supervise(&mut persistence, warden, captain).unwrap();
    supervise(&mut persistence, captain, guard).unwrap();

    let info: StaffInfo = get_staff(&mut persistence, guard, create_test_today()).unwrap();
    assert_eq!(info.supervisor_id, Some(captain));
    assert_eq!(info.chain_of_command, vec![captain, warden]);

    let info: StaffInfo = get_staff(&mut persistence, captain, create_test_today()).unwrap();
    assert_eq!(info.subordinates, vec![guard]);
}

#[test]
fn test_supervision_cycle_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let department_id: i64 = create_test_department(&mut persistence, "Operations");
    let first: i64 = create_as_admin(&mut persistence, &create_test_hire(department_id, "Ann Top"));
    let second: i64 =
        create_as_admin(&mut persistence, &create_test_hire(department_id, "Bea Mid"));
    supervise(&mut persistence, first, second).unwrap();

    let err: ApiError = supervise(&mut persistence, second, first).unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "acyclic_supervision"
    ));
}

#[test]
fn test_second_supervisor_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let department_id: i64 = create_test_department(&mut persistence, "Operations");
    let first: i64 = create_as_admin(&mut persistence, &create_test_hire(department_id, "Ann Top"));
    let second: i64 =
        create_as_admin(&mut persistence, &create_test_hire(department_id, "Bea Mid"));
    let third: i64 = create_as_admin(&mut persistence, &create_test_hire(department_id, "Cal Low"));
    supervise(&mut persistence, first, third).unwrap();

    let err: ApiError = supervise(&mut persistence, second, third).unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "single_supervisor"
    ));
}

#[test]
fn test_hire_rejects_unknown_gender_and_department() {
    let mut persistence: Persistence = create_test_persistence();
    let department_id: i64 = create_test_department(&mut persistence, "Operations");

    let request: HireStaffRequest = HireStaffRequest {
        gender: String::from("unknown"),
        ..create_test_hire(department_id, "Ann Top")
    };
    let err: ApiError = submit_as(&mut persistence, &create_test_admin(), &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "gender"));

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &create_test_hire(department_id + 100, "Ann Top"),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_schedule_figures_and_working_hours() {
    let mut persistence: Persistence = create_test_persistence();
    let department_id: i64 = create_test_department(&mut persistence, "Operations");
    let staff_id: i64 =
        create_as_admin(&mut persistence, &create_test_hire(department_id, "Ann Top"));
    let schedule_id: i64 = create_as_admin(&mut persistence, &weekday_schedule(staff_id));

    let info: StaffInfo = get_staff(&mut persistence, staff_id, create_test_today()).unwrap();
    let schedule: &ScheduleInfo = &info.schedules[0];
    assert_eq!(schedule.schedule_id, schedule_id);
    assert_eq!(schedule.days[0], "MONDAY");
    assert!(schedule.full_time);
    assert!(!schedule.weekend);
    assert_eq!(schedule.shift_minutes, Some(480));

    let at_end: WorkingHoursResponse =
        check_working_hours(&mut persistence, schedule_id, "16:00", create_test_today()).unwrap();
    assert!(at_end.working);
    let after: WorkingHoursResponse =
        check_working_hours(&mut persistence, schedule_id, "16:01", create_test_today()).unwrap();
    assert!(!after.working);
}

#[test]
fn test_schedule_rejects_reversed_window_and_bad_days() {
    let mut persistence: Persistence = create_test_persistence();
    let department_id: i64 = create_test_department(&mut persistence, "Operations");
    let staff_id: i64 =
        create_as_admin(&mut persistence, &create_test_hire(department_id, "Ann Top"));
    let schedule_id: i64 = create_as_admin(&mut persistence, &weekday_schedule(staff_id));

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &UpdateScheduleRequest {
            schedule_id,
            days: None,
            start: Some(String::from("18:00")),
            end: Some(String::from("06:00")),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "end"));

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &UpdateScheduleRequest {
            schedule_id,
            days: Some(vec![String::from("Funday")]),
            start: None,
            end: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "days"));
}

#[test]
fn test_officer_cannot_maintain_schedules() {
    let mut persistence: Persistence = create_test_persistence();
    let department_id: i64 = create_test_department(&mut persistence, "Operations");
    let staff_id: i64 =
        create_as_admin(&mut persistence, &create_test_hire(department_id, "Ann Top"));

    let err: ApiError =
        submit_as(&mut persistence, &create_test_officer(), &weekday_schedule(staff_id))
            .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[test]
fn test_dismissal_frees_department_for_deletion() {
    let mut persistence: Persistence = create_test_persistence();
    let department_id: i64 = create_test_department(&mut persistence, "Kitchen");
    let staff_id: i64 =
        create_as_admin(&mut persistence, &create_test_hire(department_id, "Ann Cook"));
    create_as_admin(&mut persistence, &weekday_schedule(staff_id));

    let err: ApiError = submit_as(
        &mut persistence,
        &create_test_admin(),
        &DeleteDepartmentRequest { department_id },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "department_empty_before_delete"
    ));
    let department: DepartmentInfo =
        get_department(&mut persistence, department_id, create_test_today()).unwrap();
    assert_eq!(department.staff, vec![staff_id]);

    submit_as(
        &mut persistence,
        &create_test_admin(),
        &DismissStaffRequest { staff_id },
    )
    .unwrap();
    submit_as(
        &mut persistence,
        &create_test_admin(),
        &DeleteDepartmentRequest { department_id },
    )
    .unwrap();

    assert!(matches!(
        get_department(&mut persistence, department_id, create_test_today()).unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}
