use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    #[default]
    Task,
    Phase,
}

/// The schedulable unit. Field names follow the project-document wire shape
/// (camelCase JSON). `name`, `status`, `progress` and `resource_id` are
/// opaque to the scheduling engine and pass through unmodified.
///
/// `end` is owned by the scheduler once a pass has run; `is_critical`,
/// `es`/`ef`/`ls`/`lf`, `total_float` and `successors` are scratch values
/// rebuilt from scratch on every critical-path computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: TaskKind,
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    pub duration: i64,
    #[serde(default)]
    pub predecessor_id: Option<i64>,
    #[serde(default)]
    pub is_milestone: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub resource_id: Option<i64>,
    #[serde(default)]
    pub is_critical: bool,
    #[serde(default)]
    pub es: Option<NaiveDate>,
    #[serde(default)]
    pub ef: Option<NaiveDate>,
    #[serde(default)]
    pub ls: Option<NaiveDate>,
    #[serde(default)]
    pub lf: Option<NaiveDate>,
    #[serde(default)]
    pub total_float: Option<i64>,
    #[serde(default)]
    pub successors: Vec<i64>,
}

impl Task {
    pub fn new(id: i64, name: impl Into<String>, start: NaiveDate, duration: i64) -> Self {
        Self {
            id,
            name: name.into(),
            kind: TaskKind::Task,
            start,
            end: None,
            duration,
            predecessor_id: None,
            is_milestone: false,
            status: None,
            progress: 0,
            resource_id: None,
            is_critical: false,
            es: None,
            ef: None,
            ls: None,
            lf: None,
            total_float: None,
            successors: Vec::new(),
        }
    }

    pub fn with_predecessor(mut self, predecessor_id: i64) -> Self {
        self.predecessor_id = Some(predecessor_id);
        self
    }

    pub fn as_milestone(mut self) -> Self {
        self.is_milestone = true;
        self
    }

    pub fn as_phase(mut self) -> Self {
        self.kind = TaskKind::Phase;
        self
    }
}
