use crate::db::{Database, Task, TaskRepository};
use crate::errors::Error;
use crate::llm::AnswerGenerator;
use crate::scrape::ContentFetcher;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Single-worker dispatch loop driving tasks to a terminal state.
///
/// Every tick it claims the oldest pending task, runs the fetch-then-generate
/// pipeline against it and writes the terminal update. Work is synchronous
/// per tick: at most one task is in flight at any time, and the next tick
/// only starts after the current one finished.
pub struct PipelineWorker {
    database: Database,
    fetcher: Arc<dyn ContentFetcher>,
    generator: Arc<dyn AnswerGenerator>,
    tick_interval: Duration,
}

impl PipelineWorker {
    /// Creates a new worker over the given collaborators.
    pub fn new(
        database: Database,
        fetcher: Arc<dyn ContentFetcher>,
        generator: Arc<dyn AnswerGenerator>,
        tick_interval: Duration,
    ) -> Self {
        PipelineWorker {
            database,
            fetcher,
            generator,
            tick_interval,
        }
    }

    /// Runs the dispatch loop forever.
    ///
    /// A failing tick is logged and the loop keeps ticking; one bad task or a
    /// transient store error never stops subsequent tasks.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "worker started, polling for pending tasks every {:?}",
            self.tick_interval
        );

        loop {
            ticker.tick().await;
            match self.run_once().await {
                Ok(Some(task_id)) => info!("task {} reached a terminal state", task_id),
                Ok(None) => {}
                Err(e) => warn!("worker tick failed: {}", e),
            }
        }
    }

    /// Claims and executes at most one pending task.
    ///
    /// Returns the id of the task that was driven to a terminal state, if
    /// any. Fetch and generation failures are terminal for the task and are
    /// absorbed here; only store errors bubble up to the caller.
    pub async fn run_once(&self) -> Result<Option<i32>, Error> {
        let candidate = {
            let mut conn = self.database.get_conn()?;
            TaskRepository::new(&mut conn).next_pending()?
        };
        let Some(task) = candidate else {
            return Ok(None);
        };

        let claimed = {
            let mut conn = self.database.get_conn()?;
            TaskRepository::new(&mut conn).claim_task(task.id)?
        };
        if !claimed {
            // the task moved on since we selected it; leave it alone
            return Ok(None);
        }

        self.execute(&task).await?;
        Ok(Some(task.id))
    }

    async fn execute(&self, task: &Task) -> Result<(), Error> {
        info!("processing task {} ({})", task.id, task.website_url);

        let content = match self.fetcher.fetch(&task.website_url).await {
            Ok(content) => content,
            Err(e) => {
                warn!("task {}: {}", task.id, e);
                return self.mark_failed(task.id, None, &format!("Scraping failed: {}", e));
            }
        };

        let answer = match self.generator.answer(&content, &task.user_question).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("task {}: {}", task.id, e);
                // keep what the fetch stage produced, it helps diagnosis
                return self.mark_failed(
                    task.id,
                    Some(&content),
                    &format!("AI answer failed: {}", e),
                );
            }
        };

        let mut conn = self.database.get_conn()?;
        TaskRepository::new(&mut conn).complete_task(task.id, &content, &answer)?;
        info!("task {} completed", task.id);
        Ok(())
    }

    fn mark_failed(&self, task_id: i32, content: Option<&str>, message: &str) -> Result<(), Error> {
        let mut conn = self.database.get_conn()?;
        TaskRepository::new(&mut conn).fail_task(task_id, content, message)
    }
}
