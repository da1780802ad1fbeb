use super::PersistenceResult;
use crate::project::Project;
use std::fs::File;
use std::path::Path;

/// Write a validated project document as pretty-printed JSON.
pub fn save_project_to_json<P: AsRef<Path>>(project: &Project, path: P) -> PersistenceResult<()> {
    super::validate_project(project)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, project)?;
    Ok(())
}

/// Read a project document, rejecting structurally invalid task lists
/// (duplicate ids, nonpositive durations, dependency cycles) before the
/// document reaches a scheduling pass.
pub fn load_project_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Project> {
    let file = File::open(path)?;
    let project: Project = serde_json::from_reader(file)?;
    super::validate_project(&project)?;
    Ok(project)
}
