pub mod calculations;
pub mod calendar;
pub mod graph;
pub mod persistence;
pub mod project;
pub mod task;
pub(crate) mod task_validation;

pub use calculations::{ScheduleError, compute_critical_path, schedule_project};
pub use calendar::{CalendarError, ProjectCalendar, week_number};
pub use persistence::{
    PersistenceError, load_project_from_json, save_project_to_json, validate_project,
    validate_tasks,
};
pub use project::{Baseline, Holiday, Project, RefreshSummary, Resource};
pub use task::{Task, TaskKind};
pub use task_validation::TaskValidationError;
