use crate::calculations::ScheduleError;
use crate::project::Project;
use std::collections::HashMap;

/// Settle every task's `start`/`end` against its predecessor and the
/// project calendar.
///
/// Tasks are stored in arbitrary order and a predecessor may appear after
/// its successor, so dates are relaxed iteratively until a full pass makes
/// no change. A start only ever moves forward: a caller-supplied start
/// without binding predecessor pressure is preserved, and a predecessor
/// whose own dates shift pushes its successors on a later pass. Each
/// relaxation is monotone, so acyclic input converges within one pass per
/// level of the longest dependency chain; the quadratic cap only bounds
/// cyclic input, reported as [`ScheduleError::CyclicDependency`] naming a
/// task whose start was still moving on the final permitted pass.
///
/// A `predecessor_id` that resolves to no task exerts no pressure.
pub fn schedule_project(project: &mut Project) -> Result<(), ScheduleError> {
    if project.tasks.is_empty() {
        return Ok(());
    }

    for task in &project.tasks {
        if !task.is_milestone && task.duration < 1 {
            return Err(ScheduleError::InvalidDuration {
                task_id: task.id,
                duration: task.duration,
            });
        }
    }

    let calendar = project.calendar();
    let index_by_id: HashMap<i64, usize> = project
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| (task.id, idx))
        .collect();

    let max_passes = (project.tasks.len() * project.tasks.len()).max(2);
    let mut last_pushed = None;

    for _ in 0..max_passes {
        let mut changed = false;
        last_pushed = None;

        for idx in 0..project.tasks.len() {
            if project.tasks[idx].is_milestone {
                project.tasks[idx].duration = 1;
            }

            let mut new_start = project.tasks[idx].start;
            let pred_end = project.tasks[idx]
                .predecessor_id
                .and_then(|pred_id| index_by_id.get(&pred_id).copied())
                .and_then(|pred_idx| project.tasks[pred_idx].end);
            if let Some(pred_end) = pred_end {
                let candidate = calendar.next_working_day(pred_end)?;
                if candidate > new_start {
                    new_start = candidate;
                }
            }
            let new_end = calendar.add_business_days(new_start, project.tasks[idx].duration)?;

            let task = &mut project.tasks[idx];
            if new_start != task.start {
                last_pushed = Some(task.id);
            }
            if new_start != task.start || Some(new_end) != task.end {
                task.start = new_start;
                task.end = Some(new_end);
                changed = true;
            }
        }

        if !changed {
            return Ok(());
        }
    }

    Err(ScheduleError::CyclicDependency {
        task_id: last_pushed.unwrap_or(project.tasks[0].id),
    })
}
