//! Project records and their persistence gateway
//!
//! `NewProject` is what the console assembles from user input; `Project` is
//! what comes back from the store once an identifier has been assigned.

use crate::storage::Database;
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;
use std::fmt;

/// A project as captured from user input, before it has been stored.
///
/// Every field is optional at this layer. A blank answer at a prompt stays
/// absent here; whether a field is actually required is the store's call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: Option<String>,
    /// Hours, normalized to two fractional digits at parse time
    pub estimated_hours: Option<f64>,
    /// Hours, normalized to two fractional digits at parse time
    pub actual_hours: Option<f64>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// A persisted project with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier assigned by the store; read-only from here on
    pub id: i64,
    pub name: Option<String>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
    /// When the record was stored
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn text(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("(none)")
        }
        fn hours(value: Option<f64>) -> String {
            value.map_or_else(|| "(none)".to_string(), |v| format!("{v:.2}"))
        }
        let difficulty = self
            .difficulty
            .map_or_else(|| "(none)".to_string(), |d| d.to_string());

        write!(
            f,
            "ID={}, name={}, estimated hours={}, actual hours={}, difficulty={}, notes={}",
            self.id,
            text(&self.name),
            hours(self.estimated_hours),
            hours(self.actual_hours),
            difficulty,
            text(&self.notes),
        )
    }
}

/// Boundary through which project records reach durable storage.
///
/// The console workflow only ever talks to this trait, so tests can swap in
/// a scripted store.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Store a new project and return it with its assigned identifier.
    async fn add_project(&self, draft: NewProject) -> Result<Project>;
}

/// SQLite-backed project store
pub struct ProjectRepository<'a> {
    db: &'a Database,
}

impl<'a> ProjectRepository<'a> {
    /// Create a new project repository
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get a project by id
    pub async fn get(&self, id: i64) -> Result<Option<Project>> {
        let row = sqlx::query(
            "SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes, created_at \
             FROM projects WHERE project_id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| self.row_to_project(r)))
    }

    /// Convert a database row to a Project
    fn row_to_project(&self, row: sqlx::sqlite::SqliteRow) -> Project {
        Project {
            id: row.get("project_id"),
            name: row.get("project_name"),
            estimated_hours: row.get("estimated_hours"),
            actual_hours: row.get("actual_hours"),
            difficulty: row.get("difficulty"),
            notes: row.get("notes"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository<'_> {
    async fn add_project(&self, draft: NewProject) -> Result<Project> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (project_name, estimated_hours, actual_hours, difficulty, notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(draft.estimated_hours)
        .bind(draft.actual_hours)
        .bind(draft.difficulty)
        .bind(&draft.notes)
        .bind(Utc::now())
        .execute(self.db.pool())
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(project_id = id, "Stored new project");

        // Read the row back so the caller sees exactly what was persisted
        let row = sqlx::query(
            "SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes, created_at \
             FROM projects WHERE project_id = ?",
        )
        .bind(id)
        .fetch_one(self.db.pool())
        .await?;

        Ok(self.row_to_project(row))
    }
}
