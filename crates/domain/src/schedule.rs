// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly recurring work schedules.
//!
//! A schedule is a set of days plus a daily window. The window bounds are set
//! independently: ordering is only checked once both are present. All
//! classification predicates are computed from the day set on every call.

use crate::error::DomainError;
use crate::ids::{ScheduleId, StaffId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use time::{Duration, Time};

/// Minimum number of working days for a full-time schedule.
const FULL_TIME_MIN_DAYS: usize = 5;

/// A day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Day {
    /// All days, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the canonical uppercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    /// Returns whether this is Saturday or Sunday.
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// Parses a list of day tokens into a day set.
    ///
    /// Tokens are trimmed and compared case-insensitively. Repeated tokens
    /// collapse into one day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyDays` if no tokens are given, or
    /// `DomainError::InvalidDay` for the first unknown token.
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<BTreeSet<Self>, DomainError> {
        if tokens.is_empty() {
            return Err(DomainError::EmptyDays);
        }
        tokens.iter().map(|t| t.as_ref().parse::<Self>()).collect()
    }
}

impl FromStr for Day {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidDay(s.to_string()))
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff member's weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    id: ScheduleId,
    staff_id: StaffId,
    days: BTreeSet<Day>,
    start: Option<Time>,
    end: Option<Time>,
}

impl Schedule {
    /// Creates a schedule.
    ///
    /// # Arguments
    ///
    /// * `id` - The schedule identity
    /// * `staff_id` - The staff member the schedule belongs to
    /// * `days` - Day tokens such as `"monday"` or `" FRIDAY "`
    /// * `start` - Optional start of the daily window
    /// * `end` - Optional end of the daily window
    ///
    /// # Errors
    ///
    /// Returns an error if the day list is empty or contains an unknown token,
    /// or if both bounds are given and `end` is before `start`.
    pub fn new<S: AsRef<str>>(
        id: ScheduleId,
        staff_id: StaffId,
        days: &[S],
        start: Option<Time>,
        end: Option<Time>,
    ) -> Result<Self, DomainError> {
        if let (Some(start), Some(end)) = (start, end) {
            check_window(start, end)?;
        }
        Ok(Self {
            id,
            staff_id,
            days: Day::parse_all(days)?,
            start,
            end,
        })
    }

    /// Returns the schedule identity.
    #[must_use]
    pub const fn id(&self) -> ScheduleId {
        self.id
    }

    /// Returns the owning staff member.
    #[must_use]
    pub const fn staff_id(&self) -> StaffId {
        self.staff_id
    }

    /// Returns the working days.
    #[must_use]
    pub const fn days(&self) -> &BTreeSet<Day> {
        &self.days
    }

    /// Returns the window start, if set.
    #[must_use]
    pub const fn start(&self) -> Option<Time> {
        self.start
    }

    /// Returns the window end, if set.
    #[must_use]
    pub const fn end(&self) -> Option<Time> {
        self.end
    }

    /// Replaces the working days.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains an unknown token.
    pub fn set_days<S: AsRef<str>>(&mut self, days: &[S]) -> Result<(), DomainError> {
        self.days = Day::parse_all(days)?;
        Ok(())
    }

    /// Sets the window start.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if an end is set and is
    /// before `start`.
    pub fn set_start(&mut self, start: Time) -> Result<(), DomainError> {
        if let Some(end) = self.end {
            check_window(start, end)?;
        }
        self.start = Some(start);
        Ok(())
    }

    /// Sets the window end.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if a start is set and is
    /// after `end`.
    pub fn set_end(&mut self, end: Time) -> Result<(), DomainError> {
        if let Some(start) = self.start {
            check_window(start, end)?;
        }
        self.end = Some(end);
        Ok(())
    }

    /// Replaces both window bounds at once.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if `end` is before `start`.
    pub fn set_window(&mut self, start: Time, end: Time) -> Result<(), DomainError> {
        check_window(start, end)?;
        self.start = Some(start);
        self.end = Some(end);
        Ok(())
    }

    /// Returns whether the schedule covers at least five days including at
    /// least one weekday.
    #[must_use]
    pub fn is_full_time(&self) -> bool {
        self.days.len() >= FULL_TIME_MIN_DAYS && self.is_weekday()
    }

    /// Returns whether the schedule is not full-time.
    #[must_use]
    pub fn is_part_time(&self) -> bool {
        !self.is_full_time()
    }

    /// Returns whether any working day falls on a weekend.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        self.days.iter().any(Day::is_weekend)
    }

    /// Returns whether any working day falls on a weekday.
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        self.days.iter().any(|d| !d.is_weekend())
    }

    /// Returns whether `time` lies within the daily window, both bounds
    /// included. Always `false` while either bound is unset.
    #[must_use]
    pub fn is_working_hours(&self, time: Time) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => time >= start && time <= end,
            _ => false,
        }
    }

    /// Returns the length of the daily window, if both bounds are set.
    #[must_use]
    pub fn shift_length(&self) -> Option<Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

fn check_window(start: Time, end: Time) -> Result<(), DomainError> {
    if end < start {
        return Err(DomainError::InvalidTimeWindow { start, end });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::time;

    fn create_test_schedule(days: &[&str]) -> Schedule {
        Schedule::new(ScheduleId::new(1), StaffId::new(1), days, None, None).unwrap()
    }

    #[test]
    fn test_day_parsing_normalizes_case_and_whitespace() {
        assert_eq!(" monday ".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("SuNdAy".parse::<Day>().unwrap(), Day::Sunday);
        assert!(matches!(
            "Funday".parse::<Day>(),
            Err(DomainError::InvalidDay(_))
        ));
    }

    #[test]
    fn test_empty_days_are_rejected() {
        let empty: [&str; 0] = [];
        let result: Result<Schedule, DomainError> =
            Schedule::new(ScheduleId::new(1), StaffId::new(1), &empty, None, None);
        assert!(matches!(result, Err(DomainError::EmptyDays)));
    }

    #[test]
    fn test_invalid_day_leaves_previous_days() {
        let mut schedule: Schedule = create_test_schedule(&["MONDAY"]);
        assert!(schedule.set_days(&["TUESDAY", "NOTADAY"]).is_err());
        assert_eq!(schedule.days(), &BTreeSet::from([Day::Monday]));
    }

    #[test]
    fn test_full_time_weekday_schedule() {
        let mut schedule: Schedule = create_test_schedule(&[
            "MONDAY",
            "TUESDAY",
            "WEDNESDAY",
            "THURSDAY",
            "FRIDAY",
        ]);
        schedule.set_start(time!(09:00)).unwrap();
        schedule.set_end(time!(17:00)).unwrap();

        assert!(schedule.is_full_time());
        assert!(!schedule.is_part_time());
        assert!(!schedule.is_weekend());
        assert!(schedule.is_weekday());
        assert!(schedule.is_working_hours(time!(09:00)));
        assert!(schedule.is_working_hours(time!(17:00)));
        assert!(!schedule.is_working_hours(time!(17:00:01)));
        assert!(!schedule.is_working_hours(time!(08:59:59)));
        assert_eq!(schedule.shift_length(), Some(Duration::hours(8)));
    }

    #[test]
    fn test_weekend_only_schedule_is_part_time() {
        let schedule: Schedule = create_test_schedule(&["saturday", "sunday"]);
        assert!(schedule.is_part_time());
        assert!(schedule.is_weekend());
        assert!(!schedule.is_weekday());
    }

    #[test]
    fn test_repeated_days_collapse() {
        let schedule: Schedule =
            create_test_schedule(&["MONDAY", "monday", "TUESDAY", "WEDNESDAY", "THURSDAY"]);
        assert_eq!(schedule.days().len(), 4);
        assert!(schedule.is_part_time());
    }

    #[test]
    fn test_first_bound_is_set_unconditionally() {
        let mut schedule: Schedule = create_test_schedule(&["MONDAY"]);
        schedule.set_end(time!(06:00)).unwrap();
        assert_eq!(schedule.end(), Some(time!(06:00)));
        assert!(!schedule.is_working_hours(time!(05:00)));
    }

    #[test]
    fn test_window_order_is_enforced_once_both_are_set() {
        let mut schedule: Schedule = create_test_schedule(&["MONDAY"]);
        schedule.set_start(time!(09:00)).unwrap();
        schedule.set_end(time!(17:00)).unwrap();

        assert!(matches!(
            schedule.set_start(time!(18:00)),
            Err(DomainError::InvalidTimeWindow { .. })
        ));
        assert!(schedule.set_end(time!(08:00)).is_err());
        assert_eq!(schedule.start(), Some(time!(09:00)));
        assert_eq!(schedule.end(), Some(time!(17:00)));
    }

    #[test]
    fn test_set_window_moves_both_bounds() {
        let mut schedule: Schedule = create_test_schedule(&["MONDAY"]);
        schedule.set_window(time!(09:00), time!(17:00)).unwrap();

        schedule.set_window(time!(18:00), time!(23:00)).unwrap();

        assert_eq!(schedule.start(), Some(time!(18:00)));
        assert!(schedule.set_window(time!(10:00), time!(09:00)).is_err());
        assert_eq!(schedule.end(), Some(time!(23:00)));
    }

    #[test]
    fn test_construction_checks_window() {
        let result: Result<Schedule, DomainError> = Schedule::new(
            ScheduleId::new(1),
            StaffId::new(1),
            &["MONDAY"],
            Some(time!(17:00)),
            Some(time!(09:00)),
        );
        assert!(result.is_err());
    }
}
