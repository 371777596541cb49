//! When steps for task management BDD scenarios.

use super::world::{TaskManagementWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use taskmaster::task::domain::{Task, TaskFilter, TaskQuery};

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskManagementWorld, title: String) {
    let result = run_async(
        world
            .services
            .create
            .execute(Task::new(title, &DefaultClock)),
    );
    match result {
        Ok(created) => {
            world.remember(created);
            world.last_result = Some(Ok(()));
        }
        Err(err) => world.last_result = Some(Err(err)),
    }
}

#[when(r#"the task "{title}" is toggled"#)]
fn toggle_task(world: &mut TaskManagementWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    let toggled = run_async(world.services.toggle_status.execute(task))
        .wrap_err("toggle task in scenario")?;
    world.remember(toggled);
    Ok(())
}

#[when(r#"tasks are listed with filter "{filter}""#)]
fn list_tasks(world: &mut TaskManagementWorld, filter: String) -> Result<(), eyre::Report> {
    let parsed = match filter.as_str() {
        "all" => TaskFilter::All,
        "active" => TaskFilter::Active,
        "completed" => TaskFilter::Completed,
        "overdue" => TaskFilter::Overdue,
        other => return Err(eyre::eyre!("unknown filter in scenario: {other}")),
    };
    world.listed = run_async(
        world
            .services
            .fetch
            .execute(&TaskQuery::new().with_filter(parsed)),
    )
    .wrap_err("list tasks in scenario")?;
    Ok(())
}

#[when(r#"the task "{title}" and an unknown task are deleted together"#)]
fn delete_with_unknown(
    world: &mut TaskManagementWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    let unknown = Task::new("never stored", &DefaultClock);
    let result = run_async(
        world
            .services
            .delete
            .execute_many(&[task.id(), unknown.id()]),
    );
    world.last_result = Some(result);
    Ok(())
}
