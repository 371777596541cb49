//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskCategory, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Status and category filters run in SQL. A row holding an unrecognised raw
/// value decodes to the fallback member, so the filter for that member
/// matches every raw value that names no other member.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn fetch_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn create(&self, task: Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let new_row = to_new_row(&task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await?;

        tracing::debug!(task_id = %task_id, "stored task");
        Ok(task)
    }

    async fn update(&self, task: Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let row = to_new_row(&task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&row)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await?;

        tracing::debug!(task_id = %task_id, "updated task");
        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();

        let affected = self
            .run_blocking(move |connection| {
                diesel::delete(tasks::table.filter(tasks::id.eq_any(uuids)))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;

        tracing::debug!(requested = ids.len(), affected, "bulk deleted tasks");
        Ok(())
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let all = tasks::table.select(TaskRow::as_select()).into_boxed();
            let query = if status == TaskStatus::default() {
                let others = other_raw_values(TaskStatus::ALL, status, TaskStatus::as_str);
                all.filter(tasks::status.ne_all(others))
            } else {
                all.filter(tasks::status.eq(status.as_str()))
            };
            let rows = query
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn find_by_category(&self, category: TaskCategory) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let all = tasks::table.select(TaskRow::as_select()).into_boxed();
            let query = if category == TaskCategory::default() {
                let others = other_raw_values(TaskCategory::ALL, category, TaskCategory::as_str);
                all.filter(tasks::category.ne_all(others))
            } else {
                all.filter(tasks::category.eq(category.as_str()))
            };
            let rows = query
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::due_date.lt(now))
                .filter(tasks::status.ne(TaskStatus::Completed.as_str()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }
}

/// Raw values of every member except `selected`.
fn other_raw_values<T>(members: &[T], selected: T, raw: fn(T) -> &'static str) -> Vec<&'static str>
where
    T: Copy + PartialEq,
{
    members
        .iter()
        .copied()
        .filter(|member| *member != selected)
        .map(raw)
        .collect()
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        category: task.category().as_str().to_owned(),
        due_date: task.due_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

/// Decodes a row, substituting fallbacks for unknown enumeration values.
fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        title,
        description,
        status,
        priority,
        category,
        due_date,
        created_at,
        updated_at,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status: TaskStatus::from_stored(&status),
        priority: TaskPriority::from_stored(&priority),
        category: TaskCategory::from_stored(&category),
        due_date,
        created_at,
        updated_at,
    })
}
