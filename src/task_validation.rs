use crate::graph::DependencyGraph;
use crate::task::Task;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TaskValidationError {
    message: String,
}

impl TaskValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TaskValidationError {}

pub fn validate_task(task: &Task) -> Result<(), TaskValidationError> {
    // Milestones are exempt: the scheduler forces their duration to 1.
    if !task.is_milestone && task.duration < 1 {
        return Err(TaskValidationError::new(format!(
            "task {} has nonpositive duration {}",
            task.id, task.duration
        )));
    }

    if task.predecessor_id == Some(task.id) {
        return Err(TaskValidationError::new(format!(
            "task {} depends on itself",
            task.id
        )));
    }

    Ok(())
}

pub fn validate_task_collection(tasks: &[Task]) -> Result<(), TaskValidationError> {
    let mut seen_ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen_ids.insert(task.id) {
            return Err(TaskValidationError::new(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        validate_task(task)?;
    }
    Ok(())
}

/// Collection checks plus dependency-cycle detection. Dangling predecessor
/// ids are tolerated; only a genuine loop is an error.
pub fn validate_task_graph(tasks: &[Task]) -> Result<(), TaskValidationError> {
    validate_task_collection(tasks)?;
    if let Some(task_id) = DependencyGraph::build(tasks).find_cycle_member() {
        return Err(TaskValidationError::new(format!(
            "dependency cycle involving task {task_id}"
        )));
    }
    Ok(())
}
