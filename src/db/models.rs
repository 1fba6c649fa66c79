use crate::schema::tasks;
use diesel::{Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// A scrape-and-answer task as stored in the database.
///
/// Serialized as-is by the query API, so field names here are the public
/// wire names of the task record.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = tasks)]
pub struct Task {
    /// Primary key, assigned by SQLite at insert and never reused
    pub id: i32,
    /// URL to scrape; not validated for reachability at insert time
    pub website_url: String,
    /// Question to answer from the page content
    pub user_question: String,
    /// Extracted page text; populated only on a successful fetch
    pub scraped_content: Option<String>,
    /// Generated answer on success, or a diagnostic message on failure
    pub ai_answer: Option<String>,
    /// Current lifecycle state, see [`crate::core::TaskStatus`]
    pub status: String,
    /// RFC 3339 timestamp set at insert, immutable
    pub created_at: String,
    /// RFC 3339 timestamp refreshed on every status-affecting update
    pub updated_at: String,
}

/// Insertable form of a task; `id` is assigned by the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTask {
    pub website_url: String,
    pub user_question: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
