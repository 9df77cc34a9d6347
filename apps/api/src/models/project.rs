use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::ranker::SkillSource;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub status: String, // open | in-progress | completed | closed
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl SkillSource for ProjectRow {
    fn skills(&self) -> &[String] {
        &self.required_skills
    }
}
