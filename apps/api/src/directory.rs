//! Read-only access to the platform's users and projects.
//!
//! The matching engine never queries storage itself; handlers load plain rows
//! through a `SkillDirectory` and hand the skill lists to the ranker.
//! `AppState` holds an `Arc<dyn SkillDirectory>`.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::ProjectRow;
use crate::models::user::UserRow;

#[async_trait]
pub trait SkillDirectory: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<UserRow>>;

    async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRow>>;

    /// Projects with status `open`, newest first.
    async fn open_projects(&self) -> Result<Vec<ProjectRow>>;

    /// Users with a public profile and at least one skill, newest first.
    async fn public_users_with_skills(&self) -> Result<Vec<UserRow>>;
}

/// PostgreSQL-backed directory.
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillDirectory for PgDirectory {
    async fn find_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        Ok(sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, name, skills, profile_public, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRow>> {
        Ok(sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, required_skills, status, created_by, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn open_projects(&self) -> Result<Vec<ProjectRow>> {
        Ok(sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, required_skills, status, created_by, created_at
            FROM projects
            WHERE status = 'open'
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn public_users_with_skills(&self) -> Result<Vec<UserRow>> {
        Ok(sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, name, skills, profile_public, created_at
            FROM users
            WHERE profile_public = TRUE AND cardinality(skills) > 0
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
