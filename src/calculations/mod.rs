use crate::calendar::CalendarError;
use std::fmt;

pub mod backward_pass;
pub mod forward_pass;

pub use backward_pass::compute_critical_path;
pub use forward_pass::schedule_project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    InvalidDuration { task_id: i64, duration: i64 },
    CyclicDependency { task_id: i64 },
    UnstabilizedSchedule { task_id: i64 },
    Calendar(CalendarError),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidDuration { task_id, duration } => write!(
                f,
                "task {task_id} has nonpositive duration {duration}"
            ),
            ScheduleError::CyclicDependency { task_id } => write!(
                f,
                "schedule did not stabilize, cyclic dependency suspected at task {task_id}"
            ),
            ScheduleError::UnstabilizedSchedule { task_id } => write!(
                f,
                "task {task_id} does not reflect a stabilized forward schedule, run the scheduler first"
            ),
            ScheduleError::Calendar(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<CalendarError> for ScheduleError {
    fn from(value: CalendarError) -> Self {
        Self::Calendar(value)
    }
}
