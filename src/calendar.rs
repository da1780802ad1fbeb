use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;
use std::fmt;

/// Calendar searches walk one day at a time; a holiday list that blankets
/// every candidate day would otherwise never terminate. Ten years is far
/// beyond any real scheduling horizon.
const SEARCH_HORIZON_DAYS: i64 = 3650;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    Exhausted { from: NaiveDate },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::Exhausted { from } => write!(
                f,
                "no working day found within {SEARCH_HORIZON_DAYS} days of {from}"
            ),
        }
    }
}

impl std::error::Error for CalendarError {}

/// Working-day predicate and business-day arithmetic over one project's
/// weekend policy and holiday list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCalendar {
    work_weekends: bool,
    holidays: HashSet<NaiveDate>,
}

impl ProjectCalendar {
    pub fn new<I>(work_weekends: bool, holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            work_weekends,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Check whether a date is available for scheduling.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        if !self.work_weekends && matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        !self.holidays.contains(&date)
    }

    /// First working day strictly after `date`.
    pub fn next_working_day(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let limit = date + Duration::days(SEARCH_HORIZON_DAYS);
        let mut current = date + Duration::days(1);
        while !self.is_working_day(current) {
            current += Duration::days(1);
            if current > limit {
                return Err(CalendarError::Exhausted { from: date });
            }
        }
        Ok(current)
    }

    /// Last working day strictly before `date`.
    pub fn previous_working_day(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let limit = date - Duration::days(SEARCH_HORIZON_DAYS);
        let mut current = date - Duration::days(1);
        while !self.is_working_day(current) {
            current -= Duration::days(1);
            if current < limit {
                return Err(CalendarError::Exhausted { from: date });
            }
        }
        Ok(current)
    }

    /// Date of the `duration`-th working day counting forward from `start`.
    ///
    /// A `start` on a non-working day first snaps forward to the nearest
    /// working day; that day counts as day 1, so `duration = 1` returns the
    /// first working day at or after `start`.
    pub fn add_business_days(
        &self,
        start: NaiveDate,
        duration: i64,
    ) -> Result<NaiveDate, CalendarError> {
        let limit = start + Duration::days(SEARCH_HORIZON_DAYS);
        let mut current = start;
        while !self.is_working_day(current) {
            current += Duration::days(1);
            if current > limit {
                return Err(CalendarError::Exhausted { from: start });
            }
        }
        let mut counted = 1;
        while counted < duration {
            current += Duration::days(1);
            if current > limit {
                return Err(CalendarError::Exhausted { from: start });
            }
            if self.is_working_day(current) {
                counted += 1;
            }
        }
        Ok(current)
    }

    /// Backward counterpart of [`add_business_days`](Self::add_business_days):
    /// the `duration`-th working day counting backward from `end`, with the
    /// same snap-then-count-as-day-1 rule.
    pub fn subtract_business_days(
        &self,
        end: NaiveDate,
        duration: i64,
    ) -> Result<NaiveDate, CalendarError> {
        let limit = end - Duration::days(SEARCH_HORIZON_DAYS);
        let mut current = end;
        while !self.is_working_day(current) {
            current -= Duration::days(1);
            if current < limit {
                return Err(CalendarError::Exhausted { from: end });
            }
        }
        let mut counted = 1;
        while counted < duration {
            current -= Duration::days(1);
            if current < limit {
                return Err(CalendarError::Exhausted { from: end });
            }
            if self.is_working_day(current) {
                counted += 1;
            }
        }
        Ok(current)
    }

    /// Count working days in `start..=end`; 0 when `start > end`.
    pub fn count_working_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let mut count = 0;
        let mut current = start;
        while current <= end {
            if self.is_working_day(current) {
                count += 1;
            }
            current += Duration::days(1);
        }
        count
    }
}

/// ISO-8601 week number (Thursday-anchored), used for timeline labels.
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
