//! Contract tests for [`InMemoryTaskRepository`].
//!
//! Covers identifier uniqueness, not-found reporting, best-effort bulk
//! deletion, and the derived queries.

use crate::in_memory::helpers::{repo, runtime, task_with};
use chrono::{Duration, Utc};
use rstest::rstest;
use std::io;
use taskmaster::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskCategory, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use tokio::runtime::Runtime;

/// Tests that a second task with the same identifier is rejected.
#[rstest]
fn duplicate_identifier_rejected(runtime: io::Result<Runtime>, repo: InMemoryTaskRepository) {
    let rt = runtime.expect("runtime creation");
    let task = task_with("Original", TaskStatus::Todo, None);

    rt.block_on(repo.create(task.clone())).expect("first create");
    let result = rt.block_on(repo.create(task.clone().with_title("Copy")));

    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()));
    let stored = rt.block_on(repo.find_by_id(task.id())).expect("lookup");
    assert_eq!(stored.map(|found| found.title().to_owned()), Some("Original".to_owned()));
}

/// Tests that updating an unknown task fails and stores nothing.
#[rstest]
fn update_of_unknown_task_is_not_found(
    runtime: io::Result<Runtime>,
    repo: InMemoryTaskRepository,
) {
    let rt = runtime.expect("runtime creation");
    let ghost = task_with("Ghost", TaskStatus::Todo, None);

    let result = rt.block_on(repo.update(ghost.clone()));

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == ghost.id()));
    assert_eq!(repo.len().expect("len"), 0);
}

/// Tests that a write is visible to a subsequent read.
#[rstest]
fn update_is_visible_to_following_read(
    runtime: io::Result<Runtime>,
    repo: InMemoryTaskRepository,
) {
    let rt = runtime.expect("runtime creation");
    let task = task_with("Before", TaskStatus::Todo, None);
    rt.block_on(repo.create(task.clone())).expect("create");

    rt.block_on(repo.update(task.clone().with_title("After")))
        .expect("update");
    let all = rt.block_on(repo.fetch_all()).expect("fetch all");

    assert_eq!(all.len(), 1);
    assert_eq!(all.first().map(|found| found.title()), Some("After"));
}

/// Tests single and bulk deletion semantics.
#[rstest]
fn bulk_delete_is_best_effort(runtime: io::Result<Runtime>, repo: InMemoryTaskRepository) {
    let rt = runtime.expect("runtime creation");
    let first = task_with("A", TaskStatus::Todo, None);
    let second = task_with("B", TaskStatus::Todo, None);
    let absent = task_with("Absent", TaskStatus::Todo, None);
    rt.block_on(repo.create(first.clone())).expect("create first");
    rt.block_on(repo.create(second.clone())).expect("create second");

    rt.block_on(repo.delete_many(&[first.id(), absent.id()]))
        .expect("bulk delete");
    let single = rt.block_on(repo.delete(absent.id()));

    assert!(matches!(single, Err(TaskRepositoryError::NotFound(_))));
    let remaining = rt.block_on(repo.fetch_all()).expect("fetch all");
    assert_eq!(remaining, vec![second]);
}

/// Tests the status, category, and overdue queries.
#[rstest]
fn derived_queries_select_matching_tasks(
    runtime: io::Result<Runtime>,
    repo: InMemoryTaskRepository,
) {
    let rt = runtime.expect("runtime creation");
    let now = Utc::now();
    let overdue = task_with("Overdue", TaskStatus::InProgress, Some(now - Duration::days(1)));
    let done = task_with("Done", TaskStatus::Completed, Some(now - Duration::days(1)))
        .with_category(TaskCategory::Work);
    let upcoming = task_with("Upcoming", TaskStatus::Todo, Some(now + Duration::days(1)));
    for task in [&overdue, &done, &upcoming] {
        rt.block_on(repo.create(task.clone())).expect("create");
    }

    let late = rt.block_on(repo.find_overdue(now)).expect("overdue");
    let work = rt
        .block_on(repo.find_by_category(TaskCategory::Work))
        .expect("category");
    let todo = rt
        .block_on(repo.find_by_status(TaskStatus::Todo))
        .expect("status");

    assert_eq!(late, vec![overdue]);
    assert_eq!(work, vec![done]);
    assert_eq!(todo, vec![upcoming]);
}
