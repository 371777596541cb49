//! Then steps for task management BDD scenarios.

use super::world::TaskManagementWorld;
use rstest_bdd_macros::then;
use taskmaster::task::{domain::TaskStatus, services::TaskServiceError};

#[then("the operation fails with an invalid title error")]
fn fails_with_invalid_title(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !matches!(result, Err(TaskServiceError::InvalidTitle)) {
        return Err(eyre::eyre!("expected InvalidTitle error, got {result:?}"));
    }

    Ok(())
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if let Err(err) = result {
        return Err(eyre::eyre!("expected success, got {err}"));
    }

    Ok(())
}

#[then("the task list contains {count:usize} tasks")]
fn task_list_contains(world: &TaskManagementWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world
        .repository
        .len()
        .map_err(|err| eyre::eyre!("repository unavailable: {err}"))?;
    eyre::ensure!(stored == count, "expected {count} stored tasks, found {stored}");
    Ok(())
}

#[then(r#"the task "{title}" has status "{status}""#)]
fn task_has_status(
    world: &TaskManagementWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task_titled(&title)?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }

    Ok(())
}

#[then("{count:usize} tasks are listed")]
fn tasks_are_listed(world: &TaskManagementWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world.listed.len();
    eyre::ensure!(listed == count, "expected {count} listed tasks, found {listed}");
    Ok(())
}
