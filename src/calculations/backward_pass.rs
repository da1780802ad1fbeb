use crate::calculations::ScheduleError;
use crate::project::Project;
use crate::task::TaskKind;
use std::collections::HashMap;

/// Flag the zero-float chain after a forward pass has settled all dates.
///
/// Rebuilds `successors` from predecessor links, mirrors the forward
/// schedule into `es`/`ef`, anchors the latest finish at the largest `ef`,
/// then walks tasks in descending `ef` order computing `lf`/`ls` — in a
/// forward-scheduled forest a task always finishes no later than its
/// successors, so this visits successors first without an explicit
/// topological sort. Total float is `ls - es` in days; zero float marks a
/// task critical. Phases are never flagged; milestones are ordinary
/// zero-float points and are flagged like any other task.
///
/// The document must already be stabilized: a missing `end`, or a start
/// that violates its predecessor's pressure, is rejected instead of being
/// folded into silently wrong late dates.
pub fn compute_critical_path(project: &mut Project) -> Result<(), ScheduleError> {
    if project.tasks.is_empty() {
        return Ok(());
    }

    let calendar = project.calendar();
    let index_by_id: HashMap<i64, usize> = project
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| (task.id, idx))
        .collect();

    for task in &project.tasks {
        if task.end.is_none() {
            return Err(ScheduleError::UnstabilizedSchedule { task_id: task.id });
        }
    }
    for idx in 0..project.tasks.len() {
        let pred_end = project.tasks[idx]
            .predecessor_id
            .and_then(|pred_id| index_by_id.get(&pred_id).copied())
            .and_then(|pred_idx| project.tasks[pred_idx].end);
        if let Some(pred_end) = pred_end {
            if project.tasks[idx].start < calendar.next_working_day(pred_end)? {
                return Err(ScheduleError::UnstabilizedSchedule {
                    task_id: project.tasks[idx].id,
                });
            }
        }
    }

    for task in &mut project.tasks {
        task.is_critical = false;
        task.successors.clear();
        task.es = Some(task.start);
        task.ef = task.end;
        task.ls = None;
        task.lf = None;
        task.total_float = None;
    }
    for idx in 0..project.tasks.len() {
        let task_id = project.tasks[idx].id;
        let pred_idx = project.tasks[idx]
            .predecessor_id
            .and_then(|pred_id| index_by_id.get(&pred_id).copied());
        if let Some(pred_idx) = pred_idx {
            project.tasks[pred_idx].successors.push(task_id);
        }
    }

    let Some(project_end) = project.tasks.iter().filter_map(|t| t.ef).max() else {
        return Ok(());
    };

    let mut order: Vec<usize> = (0..project.tasks.len()).collect();
    order.sort_by(|&a, &b| project.tasks[b].ef.cmp(&project.tasks[a].ef));

    for idx in order {
        let min_successor_ls = project.tasks[idx]
            .successors
            .iter()
            .filter_map(|succ_id| index_by_id.get(succ_id).copied())
            .filter_map(|succ_idx| project.tasks[succ_idx].ls)
            .min();
        let lf = match min_successor_ls {
            Some(successor_ls) => calendar.previous_working_day(successor_ls)?,
            None => project_end,
        };
        let ls = calendar.subtract_business_days(lf, project.tasks[idx].duration)?;

        let task = &mut project.tasks[idx];
        task.lf = Some(lf);
        task.ls = Some(ls);
    }

    for task in &mut project.tasks {
        if let (Some(ls), Some(es)) = (task.ls, task.es) {
            let total_float = (ls - es).num_days();
            task.total_float = Some(total_float);
            if total_float <= 0 && task.kind == TaskKind::Task {
                task.is_critical = true;
            }
        }
    }

    Ok(())
}
