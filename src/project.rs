use crate::calculations::{ScheduleError, compute_critical_path, schedule_project};
use crate::calendar::ProjectCalendar;
use crate::task::Task;
use crate::task_validation::{self, TaskValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A non-working date on top of the weekend policy; unique by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

/// Opaque to the scheduling engine; carried on the document for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub role: String,
}

/// Immutable snapshot of the task list, captured for later comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub id: i64,
    pub name: String,
    pub tasks: Vec<Task>,
}

/// The project document: the single value every scheduling operation reads
/// and mutates. Field names follow the camelCase wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub work_weekends: bool,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub baselines: Vec<Baseline>,
    #[serde(default)]
    pub selected_baseline_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSummary {
    pub task_count: usize,
    pub critical_count: usize,
    pub critical_path: Vec<i64>,
    pub project_finish: Option<NaiveDate>,
    pub ahead_count: usize,
    pub behind_count: usize,
    pub on_track_count: usize,
}

impl RefreshSummary {
    pub fn summary_line(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("tasks={}", self.task_count));
        parts.push(format!("critical={}", self.critical_count));
        if let Some(date) = self.project_finish {
            parts.push(format!("finish={}", date));
        }
        if self.ahead_count > 0 {
            parts.push(format!("ahead={}", self.ahead_count));
        }
        if self.behind_count > 0 {
            parts.push(format!("behind={}", self.behind_count));
        }
        if self.on_track_count > 0 {
            parts.push(format!("on_track={}", self.on_track_count));
        }
        if !self.critical_path.is_empty() {
            let chain = self
                .critical_path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("->");
            parts.push(format!("crit_path={}", chain));
        }
        parts.join(", ")
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            work_weekends: false,
            holidays: Vec::new(),
            tasks: Vec::new(),
            resources: Vec::new(),
            baselines: Vec::new(),
            selected_baseline_id: None,
        }
    }

    /// Calendar view of this document's weekend policy and holiday list.
    pub fn calendar(&self) -> ProjectCalendar {
        ProjectCalendar::new(self.work_weekends, self.holidays.iter().map(|h| h.date))
    }

    pub fn next_task_id(&self) -> i64 {
        self.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    pub fn find_task(&self, task_id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn find_task_mut(&mut self, task_id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), TaskValidationError> {
        if self.find_task(task.id).is_some() {
            return Err(TaskValidationError::new(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        task_validation::validate_task(&task)?;
        self.tasks.push(task);
        Ok(())
    }

    /// Replace the task with the same id, or append when it is new.
    pub fn upsert_task(&mut self, task: Task) -> Result<(), TaskValidationError> {
        task_validation::validate_task(&task)?;
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
        Ok(())
    }

    /// Remove a task and strip references to it from the remaining tasks,
    /// so no dependent keeps pressure from a task that no longer exists.
    pub fn remove_task(&mut self, task_id: i64) -> bool {
        let Some(position) = self.tasks.iter().position(|t| t.id == task_id) else {
            return false;
        };
        self.tasks.remove(position);
        for task in &mut self.tasks {
            if task.predecessor_id == Some(task_id) {
                task.predecessor_id = None;
            }
            task.successors.retain(|&succ| succ != task_id);
        }
        true
    }

    /// Request a new start for a task. The end is cleared rather than
    /// recomputed here; dates settle on the next scheduling pass, which may
    /// also push the start back under predecessor pressure.
    pub fn move_task(&mut self, task_id: i64, new_start: NaiveDate) -> bool {
        match self.find_task_mut(task_id) {
            Some(task) => {
                task.start = new_start;
                task.end = None;
                true
            }
            None => false,
        }
    }

    /// Add a holiday; refused when the date is already listed.
    pub fn add_holiday(&mut self, date: NaiveDate, name: impl Into<String>) -> bool {
        if self.holidays.iter().any(|h| h.date == date) {
            return false;
        }
        self.holidays.push(Holiday {
            date,
            name: name.into(),
        });
        true
    }

    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        let before = self.holidays.len();
        self.holidays.retain(|h| h.date != date);
        self.holidays.len() < before
    }

    /// Snapshot the current task list; returns the new baseline's id.
    pub fn save_baseline(&mut self, name: impl Into<String>) -> i64 {
        let id = self.baselines.iter().map(|b| b.id).max().map_or(1, |max| max + 1);
        self.baselines.push(Baseline {
            id,
            name: name.into(),
            tasks: self.tasks.clone(),
        });
        id
    }

    pub fn select_baseline(&mut self, baseline_id: Option<i64>) -> bool {
        match baseline_id {
            Some(id) if !self.baselines.iter().any(|b| b.id == id) => false,
            selection => {
                self.selected_baseline_id = selection;
                true
            }
        }
    }

    pub fn delete_baseline(&mut self, baseline_id: i64) -> bool {
        let before = self.baselines.len();
        self.baselines.retain(|b| b.id != baseline_id);
        if self.selected_baseline_id == Some(baseline_id) {
            self.selected_baseline_id = None;
        }
        self.baselines.len() < before
    }

    pub fn active_baseline(&self) -> Option<&Baseline> {
        self.selected_baseline_id
            .and_then(|id| self.baselines.iter().find(|b| b.id == id))
    }

    /// Run both passes and summarize the resulting schedule, including
    /// working-day variance counts against the selected baseline.
    pub fn refresh(&mut self) -> Result<RefreshSummary, ScheduleError> {
        schedule_project(self)?;
        compute_critical_path(self)?;

        let calendar = self.calendar();
        let mut critical_path: Vec<(NaiveDate, i64)> = Vec::new();
        let mut critical_count = 0;
        let mut ahead_count = 0;
        let mut behind_count = 0;
        let mut on_track_count = 0;

        for task in &self.tasks {
            if task.is_critical {
                critical_count += 1;
                critical_path.push((task.start, task.id));
            }
        }
        critical_path.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        if let Some(baseline) = self.active_baseline() {
            for task in &self.tasks {
                let Some(snapshot) = baseline.tasks.iter().find(|bt| bt.id == task.id) else {
                    continue;
                };
                let variance = match (snapshot.end, task.end) {
                    (Some(baseline_end), Some(end)) => {
                        working_days_diff(&calendar, baseline_end, end)
                    }
                    _ => working_days_diff(&calendar, snapshot.start, task.start),
                };
                if variance > 0 {
                    behind_count += 1;
                } else if variance < 0 {
                    ahead_count += 1;
                } else {
                    on_track_count += 1;
                }
            }
        }

        Ok(RefreshSummary {
            task_count: self.tasks.len(),
            critical_count,
            critical_path: critical_path.into_iter().map(|(_, id)| id).collect(),
            project_finish: self.tasks.iter().filter_map(|t| t.end).max(),
            ahead_count,
            behind_count,
            on_track_count,
        })
    }
}

/// Signed working-day distance from `baseline` to `actual`; positive when
/// `actual` lands later.
fn working_days_diff(calendar: &ProjectCalendar, baseline: NaiveDate, actual: NaiveDate) -> i64 {
    if baseline == actual {
        0
    } else if actual > baseline {
        calendar.count_working_days(baseline, actual) - 1
    } else {
        -(calendar.count_working_days(actual, baseline) - 1)
    }
}
