use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub match_defaults: MatchDefaults,
}

/// Recommendation defaults applied when a request leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDefaults {
    /// Minimum percentage when ranking projects for a person.
    pub project_min_percentage: i64,
    /// Minimum percentage when ranking people for a project.
    pub candidate_min_percentage: i64,
    /// Page size for directory-backed recommendations.
    pub page_limit: i64,
}

impl Default for MatchDefaults {
    fn default() -> Self {
        Self {
            project_min_percentage: 30,
            candidate_min_percentage: 40,
            page_limit: 10,
        }
    }
}

impl MatchDefaults {
    /// Rejects defaults that every request would fail on.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0..=100).contains(&self.project_min_percentage),
            "PROJECT_MIN_MATCH must be between 0 and 100"
        );
        ensure!(
            (0..=100).contains(&self.candidate_min_percentage),
            "CANDIDATE_MIN_MATCH must be between 0 and 100"
        );
        ensure!(self.page_limit >= 0, "RECOMMENDATION_LIMIT must not be negative");
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatchDefaults::default();

        let config = Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_defaults: MatchDefaults {
                project_min_percentage: env_or(
                    "PROJECT_MIN_MATCH",
                    defaults.project_min_percentage,
                )?,
                candidate_min_percentage: env_or(
                    "CANDIDATE_MIN_MATCH",
                    defaults.candidate_min_percentage,
                )?,
                page_limit: env_or("RECOMMENDATION_LIMIT", defaults.page_limit)?,
            },
        };
        config.match_defaults.validate()?;
        Ok(config)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: i64) -> Result<i64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .with_context(|| format!("{key} must be an integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
