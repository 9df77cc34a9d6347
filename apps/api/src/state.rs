use std::sync::Arc;

use crate::config::Config;
use crate::directory::SkillDirectory;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Source of users and projects for directory-backed recommendations.
    /// Default: `PgDirectory`.
    pub directory: Arc<dyn SkillDirectory>,
}
