//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use http::{HeaderMap, Request, StatusCode};
use sqlx::SqlitePool;
use tower::ServiceExt;

use quill_core::config::session::SessionConfig;
use quill_core::config::{AppConfig, DatabaseConfig};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: SqlitePool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an in-memory database.
    ///
    /// The session secret is fixed so signed cookies verify across
    /// requests within a test.
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                connect_timeout_seconds: 5,
            },
            session: SessionConfig {
                secret: "an-integration-test-secret-of-enough-length".to_string(),
                ..SessionConfig::default()
            },
            ..AppConfig::default()
        };

        let db_pool = quill_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to open test database");

        quill_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = quill_web::build_state(config.clone(), db_pool.clone())
            .expect("Failed to build app state");
        let router = quill_web::build_router(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Make a GET request, sending the given cookies.
    pub async fn get(&self, path: &str, cookies: &[String]) -> TestResponse {
        self.request("GET", path, None, cookies).await
    }

    /// Make a form POST request, sending the given cookies.
    pub async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        cookies: &[String],
    ) -> TestResponse {
        let body = serde_urlencoded::to_string(form).expect("Failed to encode form");
        self.request("POST", path, Some(body), cookies).await
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        cookies: &[String],
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if body.is_some() {
            req = req.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        }
        if !cookies.is_empty() {
            req = req.header(COOKIE, cookies.join("; "));
        }

        let req = req
            .body(Body::from(body.unwrap_or_default()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }

    /// Register a user and log them in, returning the session cookies.
    pub async fn register_and_login(&self, username: &str, password: &str) -> Vec<String> {
        let form = [("username", username), ("password", password)];

        let response = self.post_form("/auth/register", &form, &[]).await;
        assert_eq!(
            response.location(),
            Some("/auth/login"),
            "Registration failed: {}",
            response.body
        );

        let response = self.post_form("/auth/login", &form, &[]).await;
        assert_eq!(response.location(), Some("/"), "Login failed: {}", response.body);

        response.cookies()
    }

    /// Count posts directly in the database.
    pub async fn post_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count posts")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
}

impl TestResponse {
    /// The Location header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Live cookie pairs from Set-Cookie headers, suitable for a
    /// follow-up request. Removal cookies (Max-Age=0) are dropped.
    pub fn cookies(&self) -> Vec<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter(|c| !c.contains("Max-Age=0"))
            .filter_map(|c| c.split(';').next())
            .map(str::to_string)
            .collect()
    }
}
