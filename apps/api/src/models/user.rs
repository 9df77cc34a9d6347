use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::ranker::SkillSource;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub skills: Vec<String>,
    pub profile_public: bool,
    pub created_at: DateTime<Utc>,
}

impl SkillSource for UserRow {
    fn skills(&self) -> &[String] {
        &self.skills
    }
}
