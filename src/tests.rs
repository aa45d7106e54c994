//! Integration tests for the Campus Connect backend.

use std::sync::Arc;

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::auth::TokenService;
use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::{create_router, AppState};

const TEST_SECRET: &str = "integration-secret";

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        let config = Config {
            jwt_secret: Some(TEST_SECRET.to_string()),
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: 4,
        };

        let app = create_router(AppState::new(repo, &config));

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register an account and return (token, user id).
    async fn register(&self, username: &str) -> (String, String) {
        let resp = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&json!({
                "username": username,
                "password": "pa55word",
                "email": format!("{}@example.com", username)
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        let body: Value = resp.json().await.unwrap();
        (
            body["data"]["token"].as_str().unwrap().to_string(),
            body["data"]["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    async fn save_profile(&self, token: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/student"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .unwrap()
    }
}

fn profile_body() -> Value {
    json!({
        "name": "Asha Rao",
        "dob": "2003-04-11",
        "semester": 5,
        "college": "NIT Trichy",
        "branch": "CSE",
        "subjects": [{ "name": "Operating Systems", "semester": 5 }]
    })
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn test_register_returns_token_and_identity() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "username": "asha",
            "password": "pa55word",
            "email": "asha@example.com"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["data"]["token"].is_string());
    assert!(body["data"]["user"]["id"].is_string());
    assert_eq!(body["data"]["user"]["username"], "asha");
    assert_eq!(body["data"]["user"]["email"], "asha@example.com");
    assert!(body["data"]["user"].get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate() {
    let fixture = TestFixture::new().await;
    fixture.register("asha").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "username": "someone-else",
            "password": "pa55word",
            "email": "asha@example.com"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_register_missing_field() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({ "username": "asha", "password": "pa55word" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login() {
    let fixture = TestFixture::new().await;
    let (_, user_id) = fixture.register("asha").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": "asha", "password": "pa55word" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["user"]["id"], user_id.as_str());

    let wrong_password = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": "asha", "password": "guess" }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), 401);
    let wrong_password: Value = wrong_password.json().await.unwrap();

    let unknown_user = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": "ghost", "password": "pa55word" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_user.status(), 401);
    let unknown_user: Value = unknown_user.json().await.unwrap();

    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_missing_token() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "MISSING_TOKEN");
}

#[tokio::test]
async fn test_invalid_and_expired_tokens() {
    let fixture = TestFixture::new().await;
    let (_, user_id) = fixture.register("asha").await;

    let garbage = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .bearer_auth("definitely.not.valid")
        .send()
        .await
        .unwrap();
    assert_eq!(garbage.status(), 403);
    let body: Value = garbage.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");

    let tokens = TokenService::new(TEST_SECRET, 24);
    let expired = tokens
        .issue_at(&user_id, "asha", Utc::now() - Duration::hours(48))
        .unwrap();
    let resp = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .bearer_auth(expired)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);

    let foreign = TokenService::new("some-other-secret", 24)
        .issue(&user_id, "asha")
        .unwrap();
    let resp = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .bearer_auth(foreign)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_me() {
    let fixture = TestFixture::new().await;
    let (token, user_id) = fixture.register("asha").await;

    let resp = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["user"]["id"], user_id.as_str());
    assert_eq!(body["data"]["user"]["username"], "asha");
    let issued = body["data"]["issuedAt"].as_i64().unwrap();
    let expires = body["data"]["expiresAt"].as_i64().unwrap();
    assert_eq!(expires - issued, 24 * 3600);
}

#[tokio::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let fixture = TestFixture::new().await;
    let (token, user_id) = fixture.register("asha").await;

    for scheme in ["bearer", "BEARER", "Bearer"] {
        let resp = fixture
            .client
            .get(fixture.url("/api/auth/me"))
            .header("authorization", format!("{} {}", scheme, token))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "scheme {}", scheme);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["user"]["id"], user_id.as_str());
    }

    let basic = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .header("authorization", format!("Basic {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(basic.status(), 401);
    let body: Value = basic.json().await.unwrap();
    assert_eq!(body["error"]["code"], "MISSING_TOKEN");
}

#[tokio::test]
async fn test_profile_lifecycle() {
    let fixture = TestFixture::new().await;
    let (token, user_id) = fixture.register("asha").await;

    // No profile yet
    let get_resp = fixture
        .client
        .get(fixture.url(&format!("/api/student/{}", user_id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 404);

    // Partial updates do not create a profile
    let skills_resp = fixture
        .client
        .put(fixture.url(&format!("/api/student/{}/skills", user_id)))
        .bearer_auth(&token)
        .json(&json!({ "skills": [{ "name": "React", "category": "Web Development" }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(skills_resp.status(), 404);
    let body: Value = skills_resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    // Save profile
    let save_resp = fixture.save_profile(&token, profile_body()).await;
    assert_eq!(save_resp.status(), 200);
    let save_body: Value = save_resp.json().await.unwrap();
    assert_eq!(save_body["message"], "Student details saved successfully");
    assert_eq!(save_body["data"]["userId"], user_id.as_str());
    assert_eq!(save_body["data"]["skills"], json!([]));

    // Now skills can be replaced
    let skills_resp = fixture
        .client
        .put(fixture.url(&format!("/api/student/{}/skills", user_id)))
        .bearer_auth(&token)
        .json(&json!({ "skills": [{ "name": "React", "category": "Web Development" }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(skills_resp.status(), 200);
    let skills_body: Value = skills_resp.json().await.unwrap();
    assert_eq!(skills_body["data"][0]["name"], "React");

    // Subjects too
    let subjects_resp = fixture
        .client
        .put(fixture.url(&format!("/api/student/{}/subjects", user_id)))
        .bearer_auth(&token)
        .json(&json!({ "subjects": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(subjects_resp.status(), 200);

    // Profile reflects the new lists, scalars unchanged
    let get_resp = fixture
        .client
        .get(fixture.url(&format!("/api/student/{}", user_id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let profile: Value = get_resp.json().await.unwrap();
    assert_eq!(
        profile["data"]["skills"],
        json!([{ "name": "React", "category": "Web Development" }])
    );
    assert_eq!(profile["data"]["subjects"], json!([]));
    assert_eq!(profile["data"]["name"], "Asha Rao");
    assert_eq!(profile["data"]["semester"], 5);
    assert_eq!(profile["data"]["college"], "NIT Trichy");
}

#[tokio::test]
async fn test_profile_validation() {
    let fixture = TestFixture::new().await;
    let (token, _) = fixture.register("asha").await;

    let mut body = profile_body();
    body["semester"] = json!(9);
    let resp = fixture.save_profile(&token, body).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let mut body = profile_body();
    body["name"] = json!("");
    let resp = fixture.save_profile(&token, body).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_semester_sent_as_string() {
    let fixture = TestFixture::new().await;
    let (token, _) = fixture.register("asha").await;

    let mut body = profile_body();
    body["semester"] = json!("5");
    body["subjects"] = json!([{ "name": "Operating Systems", "semester": "4" }]);
    let resp = fixture.save_profile(&token, body).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["semester"], 5);
    assert_eq!(body["data"]["subjects"][0]["semester"], 4);

    let mut body = profile_body();
    body["semester"] = json!("fifth");
    let resp = fixture.save_profile(&token, body).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unreadable_bodies_use_error_envelope() {
    let fixture = TestFixture::new().await;
    let (token, user_id) = fixture.register("asha").await;
    let resp = fixture.save_profile(&token, profile_body()).await;
    assert_eq!(resp.status(), 200);

    for list in ["skills", "subjects"] {
        let resp = fixture
            .client
            .put(fixture.url(&format!("/api/student/{}/{}", user_id, list)))
            .bearer_auth(&token)
            .json(&json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "PUT {} without a list", list);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains(list));
    }

    let malformed = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .header("content-type", "application/json")
        .body("{\"username\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status(), 400);
    let body: Value = malformed.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let not_json = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .body("username=asha")
        .send()
        .await
        .unwrap();
    assert_eq!(not_json.status(), 400);
    let body: Value = not_json.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // stored profile untouched by the rejected updates
    let resp = fixture
        .client
        .get(fixture.url(&format!("/api/student/{}", user_id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["skills"], json!([]));
    assert_eq!(body["data"]["subjects"][0]["name"], "Operating Systems");
}

#[tokio::test]
async fn test_profile_of_another_user_is_forbidden() {
    let fixture = TestFixture::new().await;
    let (asha_token, _) = fixture.register("asha").await;
    let (ravi_token, ravi_id) = fixture.register("ravi").await;

    let resp = fixture.save_profile(&ravi_token, profile_body()).await;
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .client
        .get(fixture.url(&format!("/api/student/{}", ravi_id)))
        .bearer_auth(&asha_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "FORBIDDEN");

    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/student/{}/skills", ravi_id)))
        .bearer_auth(&asha_token)
        .json(&json!({ "skills": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_recommendations_from_profile() {
    let fixture = TestFixture::new().await;
    let (token, _) = fixture.register("asha").await;

    // Without a profile the fallback lists are returned
    let resp = fixture
        .client
        .get(fixture.url("/api/recommendations"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["projects"][0]["title"], "Portfolio Website");
    assert_eq!(body["data"]["companies"].as_array().unwrap().len(), 3);

    let mut profile = profile_body();
    profile["skills"] = json!([{ "name": "React", "category": "Web Development" }]);
    let resp = fixture.save_profile(&token, profile).await;
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .client
        .get(fixture.url("/api/recommendations"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let projects: Vec<&str> = body["data"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert!(projects.contains(&"E-commerce Platform"));
    assert!(projects.contains(&"Portfolio Website"));
    let companies: Vec<&str> = body["data"]["companies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(companies.contains(&"Google"));
    assert!(companies.contains(&"Netflix"));
}

#[tokio::test]
async fn test_recommendations_for_explicit_skills() {
    let fixture = TestFixture::new().await;
    let (token, _) = fixture.register("asha").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/recommendations"))
        .bearer_auth(&token)
        .json(&json!({ "skills": ["Cobol"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let companies: Vec<&str> = body["data"]["companies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(companies, vec!["Airbnb", "Accenture", "TCS"]);
    assert_eq!(body["data"]["problems"][0]["title"], "Two Sum");

    let unauthenticated = fixture
        .client
        .post(fixture.url("/api/recommendations"))
        .json(&json!({ "skills": ["React"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(unauthenticated.status(), 401);
}
