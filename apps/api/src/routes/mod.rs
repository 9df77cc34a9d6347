pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless scoring
        .route("/api/v1/match", post(handlers::handle_match))
        .route(
            "/api/v1/recommendations/projects",
            post(handlers::handle_recommend_projects),
        )
        .route(
            "/api/v1/recommendations/candidates",
            post(handlers::handle_recommend_candidates),
        )
        // Directory-backed recommendations
        .route(
            "/api/v1/users/:id/recommended-projects",
            get(handlers::handle_user_recommended_projects),
        )
        .route(
            "/api/v1/projects/:id/recommended-users",
            get(handlers::handle_project_recommended_users),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::{Config, MatchDefaults};
    use crate::directory::SkillDirectory;
    use crate::models::project::ProjectRow;
    use crate::models::user::UserRow;

    #[derive(Default)]
    struct InMemoryDirectory {
        users: Vec<UserRow>,
        projects: Vec<ProjectRow>,
    }

    #[async_trait]
    impl SkillDirectory for InMemoryDirectory {
        async fn find_user(&self, id: Uuid) -> Result<Option<UserRow>> {
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRow>> {
            Ok(self.projects.iter().find(|p| p.id == id).cloned())
        }

        async fn open_projects(&self) -> Result<Vec<ProjectRow>> {
            Ok(self
                .projects
                .iter()
                .filter(|p| p.status == "open")
                .cloned()
                .collect())
        }

        async fn public_users_with_skills(&self) -> Result<Vec<UserRow>> {
            Ok(self
                .users
                .iter()
                .filter(|u| u.profile_public && !u.skills.is_empty())
                .cloned()
                .collect())
        }
    }

    fn make_user(name: &str, skills: &[&str]) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            username: name.to_string(),
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            profile_public: true,
            created_at: Utc::now(),
        }
    }

    fn make_project(title: &str, skills: &[&str], created_by: Option<Uuid>) -> ProjectRow {
        ProjectRow {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{title} description"),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            status: "open".to_string(),
            created_by,
            created_at: Utc::now(),
        }
    }

    fn app(directory: InMemoryDirectory) -> Router {
        build_router(AppState {
            config: Config {
                database_url: "postgres://unused".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                match_defaults: MatchDefaults::default(),
            },
            directory: Arc::new(directory),
        })
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(InMemoryDirectory::default()), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "skillmatch");
    }

    #[tokio::test]
    async fn test_match_endpoint_returns_report_and_badge() {
        let (status, body) = send(
            app(InMemoryDirectory::default()),
            Method::POST,
            "/api/v1/match",
            Some(json!({ "candidate_skills": ["js"], "required_skills": ["javascript"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"]["percentage"], 90);
        assert_eq!(body["report"]["matched_skills"][0]["matched_against"], "js");
        assert_eq!(body["badge"]["tier"], "excellent");
    }

    #[tokio::test]
    async fn test_match_endpoint_accepts_missing_lists() {
        let (status, body) = send(
            app(InMemoryDirectory::default()),
            Method::POST,
            "/api/v1/match",
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"]["percentage"], 0);
        assert_eq!(body["badge"]["tier"], "low");
    }

    #[tokio::test]
    async fn test_recommend_projects_uses_default_threshold() {
        let (status, body) = send(
            app(InMemoryDirectory::default()),
            Method::POST,
            "/api/v1/recommendations/projects",
            Some(json!({
                "candidate_skills": ["React", "Node.js", "MongoDB"],
                "targets": [
                    { "id": "t1", "skills": ["react", "redux"] },
                    { "id": "t2", "skills": ["react", "node", "mongodb"] },
                    { "id": "t3", "skills": ["python", "django"] }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["min_percentage"], 30);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["subject"]["id"], "t2");
        assert_eq!(recs[1]["subject"]["id"], "t1");
        assert_eq!(recs[1]["badge"]["tier"], "good");
    }

    #[tokio::test]
    async fn test_recommend_candidates_rejects_negative_limit() {
        let (status, body) = send(
            app(InMemoryDirectory::default()),
            Method::POST,
            "/api/v1/recommendations/candidates",
            Some(json!({
                "required_skills": ["rust"],
                "candidates": [{ "id": "c1", "skills": ["rust"] }],
                "limit": -1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recommend_candidates_rejects_negative_min_percentage() {
        let (status, _) = send(
            app(InMemoryDirectory::default()),
            Method::POST,
            "/api/v1/recommendations/candidates",
            Some(json!({ "required_skills": ["rust"], "candidates": [], "min_percentage": -10 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recommend_candidates_with_empty_requirements_is_empty() {
        let (status, body) = send(
            app(InMemoryDirectory::default()),
            Method::POST,
            "/api/v1/recommendations/candidates",
            Some(json!({
                "required_skills": [],
                "candidates": [{ "id": "c1", "skills": ["rust"] }],
                "min_percentage": 0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["recommendations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_recommended_projects_excludes_own_projects() {
        let user = make_user("ada", &["rust", "postgres"]);
        let own = make_project("own", &["rust"], Some(user.id));
        let other = make_project("other", &["rust", "postgresql"], None);
        let mut closed = make_project("closed", &["rust"], None);
        closed.status = "closed".to_string();
        let uri = format!("/api/v1/users/{}/recommended-projects", user.id);
        let directory = InMemoryDirectory {
            users: vec![user],
            projects: vec![own, other, closed],
        };

        let (status, body) = send(app(directory), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["subject"]["title"], "other");
        // 1.0 + 0.9 over 2
        assert_eq!(recs[0]["report"]["percentage"], 95);
    }

    #[tokio::test]
    async fn test_user_recommended_projects_applies_limit() {
        let user = make_user("ada", &["rust"]);
        let projects = (0..5)
            .map(|i| make_project(&format!("p{i}"), &["rust"], None))
            .collect();
        let uri = format!("/api/v1/users/{}/recommended-projects?limit=2", user.id);
        let directory = InMemoryDirectory {
            users: vec![user],
            projects,
        };

        let (status, body) = send(app(directory), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["subject"]["title"], "p0");
        assert_eq!(recs[1]["subject"]["title"], "p1");
    }

    #[tokio::test]
    async fn test_unknown_user_is_404() {
        let uri = format!("/api/v1/users/{}/recommended-projects", Uuid::new_v4());
        let (status, body) = send(app(InMemoryDirectory::default()), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_project_recommended_users_excludes_creator_and_private() {
        let owner = make_user("owner", &["python", "django"]);
        let match_user = make_user("dev", &["Python", "Django", "Docker"]);
        let mut private = make_user("hidden", &["python", "django"]);
        private.profile_public = false;
        let weak = make_user("weak", &["flask"]);
        let project = make_project("api", &["python", "django"], Some(owner.id));
        let uri = format!(
            "/api/v1/projects/{}/recommended-users?min_percentage=10",
            project.id
        );
        let directory = InMemoryDirectory {
            users: vec![owner, match_user, private, weak],
            projects: vec![project],
        };

        let (status, body) = send(app(directory), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        let names: Vec<&str> = recs
            .iter()
            .map(|r| r["subject"]["username"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["dev", "weak"]);
        assert_eq!(recs[1]["report"]["percentage"], 15);
        assert_eq!(body["min_percentage"], 10);
    }

    #[tokio::test]
    async fn test_unknown_project_is_404() {
        let uri = format!("/api/v1/projects/{}/recommended-users", Uuid::new_v4());
        let (status, _) = send(app(InMemoryDirectory::default()), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_query_option_is_400() {
        let user = make_user("ada", &["rust"]);
        let uri = format!(
            "/api/v1/users/{}/recommended-projects?min_percentage=150",
            user.id
        );
        let directory = InMemoryDirectory {
            users: vec![user],
            projects: vec![],
        };
        let (status, _) = send(app(directory), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
