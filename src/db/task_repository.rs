use crate::core::TaskStatus;
use crate::db::models::{NewTask, Task};
use crate::errors::Error;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Repository for managing task records in the SQLite database
pub struct TaskRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> TaskRepository<'a> {
    /// Creates a new TaskRepository instance
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        TaskRepository { conn }
    }

    /// Inserts a new task with status `pending` and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_task(&mut self, website_url: &str, user_question: &str) -> Result<i32, Error> {
        use crate::schema::tasks;

        let now = Utc::now().to_rfc3339();
        let new_task = NewTask {
            website_url: website_url.to_string(),
            user_question: user_question.to_string(),
            status: TaskStatus::Pending.to_string(),
            created_at: now.clone(),
            updated_at: now,
        };

        let task_id = diesel::insert_into(tasks::table)
            .values(&new_task)
            .returning(tasks::id)
            .get_result(self.conn)?;

        Ok(task_id)
    }

    /// Retrieves a task by primary key, or `None` if no such id exists.
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn get_task(&mut self, task_id: i32) -> Result<Option<Task>, Error> {
        use crate::schema::tasks::dsl::*;

        let found = tasks
            .filter(id.eq(task_id))
            .first::<Task>(self.conn)
            .optional()?;
        Ok(found)
    }

    /// Returns the oldest pending task, if any.
    ///
    /// Tasks are dispatched FIFO; id order is creation order.
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn next_pending(&mut self) -> Result<Option<Task>, Error> {
        use crate::schema::tasks::dsl::*;

        let found = tasks
            .filter(status.eq(TaskStatus::Pending.to_string()))
            .order(id.asc())
            .first::<Task>(self.conn)
            .optional()?;
        Ok(found)
    }

    /// Atomically moves a task from `pending` to `processing`.
    ///
    /// The update is guarded on the current status, so only one caller can
    /// win the claim; returns whether this call did.
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn claim_task(&mut self, task_id: i32) -> Result<bool, Error> {
        use crate::schema::tasks::dsl::*;
        let now = Utc::now().to_rfc3339();

        let rows = diesel::update(
            tasks
                .filter(id.eq(task_id))
                .filter(status.eq(TaskStatus::Pending.to_string())),
        )
        .set((
            status.eq(TaskStatus::Processing.to_string()),
            updated_at.eq(&now),
        ))
        .execute(self.conn)?;

        Ok(rows == 1)
    }

    /// Records a successful pipeline run: stores the extracted text and the
    /// generated answer and moves the task to `completed`.
    ///
    /// Guarded on `processing` so a terminal task is never rewritten and
    /// re-applying the update is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn complete_task(&mut self, task_id: i32, content: &str, answer: &str) -> Result<(), Error> {
        use crate::schema::tasks::dsl::*;
        let now = Utc::now().to_rfc3339();

        diesel::update(
            tasks
                .filter(id.eq(task_id))
                .filter(status.eq(TaskStatus::Processing.to_string())),
        )
        .set((
            status.eq(TaskStatus::Completed.to_string()),
            scraped_content.eq(content),
            ai_answer.eq(answer),
            updated_at.eq(&now),
        ))
        .execute(self.conn)?;

        Ok(())
    }

    /// Moves a task to `failed`, keeping whatever the fetch stage produced.
    ///
    /// The failure message lands in `ai_answer` so a polling client can see
    /// why the task failed. Guarded on `processing` like [`Self::complete_task`].
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn fail_task(
        &mut self,
        task_id: i32,
        content: Option<&str>,
        message: &str,
    ) -> Result<(), Error> {
        use crate::schema::tasks::dsl::*;
        let now = Utc::now().to_rfc3339();

        diesel::update(
            tasks
                .filter(id.eq(task_id))
                .filter(status.eq(TaskStatus::Processing.to_string())),
        )
        .set((
            status.eq(TaskStatus::Failed.to_string()),
            scraped_content.eq(content),
            ai_answer.eq(message),
            updated_at.eq(&now),
        ))
        .execute(self.conn)?;

        Ok(())
    }
}
