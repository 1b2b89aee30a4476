//! HTTP-level tests for the CMS admin API.
//!
//! The router runs against in-memory services and the in-memory session
//! store, so no database or Redis is needed.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use cms_api_lib::config::ApiConfig;
use cms_api_lib::routes::create_router;
use cms_api_lib::session::{MemorySessionStore, SessionDataStore};
use cms_api_lib::state::AppState;
use common::{AppError, AppResult};
use domain::{
    EntityType, LoginOutcome, PasswordUpdate, PersonProfile, SessionData, MSG_INCORRECT_PASSWORD,
    MSG_INVALID_CREDENTIALS, MSG_PASSWORD_CHANGED, MSG_PASSWORD_MISMATCH,
};
use people_service_lib::service::{EntityService, PeopleService, SessionService};

const EMAIL: &str = "jane@example.com";
const PASSWORD: &str = "CorrectHorse42";

// =============================================================================
// In-memory services
// =============================================================================

#[derive(Default)]
struct Backend {
    force_password_change: bool,
    active: HashSet<String>,
    password_updates: usize,
}

/// People and session services sharing one small in-memory state.
#[derive(Clone, Default)]
struct FakePeople {
    backend: Arc<Mutex<Backend>>,
}

impl FakePeople {
    fn forcing_password_change() -> Self {
        let people = Self::default();
        people.backend.lock().unwrap().force_password_change = true;
        people
    }

    fn password_updates(&self) -> usize {
        self.backend.lock().unwrap().password_updates
    }

    fn active_sessions(&self) -> usize {
        self.backend.lock().unwrap().active.len()
    }

    fn profile(force_password_change: bool) -> PersonProfile {
        PersonProfile {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            roles: vec!["editor".to_string()],
            capabilities: vec!["content.edit".to_string()],
            force_password_change,
        }
    }
}

#[async_trait]
impl PeopleService for FakePeople {
    async fn login(&self, email: String, password: String) -> AppResult<LoginOutcome> {
        if email != EMAIL || password != PASSWORD {
            return Err(AppError::unauthorized(MSG_INVALID_CREDENTIALS));
        }

        let mut backend = self.backend.lock().unwrap();
        let session_token = Uuid::new_v4().simple().to_string();
        backend.active.insert(session_token.clone());

        Ok(LoginOutcome {
            session_token,
            user: Self::profile(backend.force_password_change),
        })
    }

    async fn update_password(&self, update: PasswordUpdate) -> AppResult<PersonProfile> {
        if update.old_password != PASSWORD {
            return Err(AppError::unauthorized(MSG_INCORRECT_PASSWORD));
        }

        let mut backend = self.backend.lock().unwrap();
        backend.password_updates += 1;
        backend.force_password_change = false;
        Ok(Self::profile(false))
    }
}

#[async_trait]
impl SessionService for FakePeople {
    async fn logout(&self, session_token: &str) -> AppResult<()> {
        self.backend.lock().unwrap().active.remove(session_token);
        Ok(())
    }

    async fn is_active(&self, session_token: &str) -> AppResult<bool> {
        Ok(self.backend.lock().unwrap().active.contains(session_token))
    }
}

struct FakeEntities(Vec<EntityType>);

#[async_trait]
impl EntityService for FakeEntities {
    async fn entity_types(&self) -> AppResult<Vec<EntityType>> {
        Ok(self.0.clone())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

struct TestApp {
    router: Router,
    people: FakePeople,
    store: Arc<MemorySessionStore>,
}

fn test_app_with(people: FakePeople, entity_types: Vec<EntityType>) -> TestApp {
    let store = Arc::new(MemorySessionStore::new());
    let state = AppState::new(
        Arc::new(people.clone()),
        Arc::new(people.clone()),
        Arc::new(FakeEntities(entity_types)),
        store.clone(),
        ApiConfig::default(),
    );

    TestApp {
        router: create_router(state),
        people,
        store,
    }
}

fn test_app() -> TestApp {
    test_app_with(FakePeople::default(), vec![])
}

fn json_request(method: Method, uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// The `name=value` part of the response's Set-Cookie header.
fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

fn session_id(cookie: &str) -> &str {
    cookie.split_once('=').map(|(_, id)| id).unwrap_or_default()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Log in with valid credentials and return the session cookie.
    async fn login(&self) -> String {
        let response = self
            .send(json_request(
                Method::POST,
                "/session",
                json!({ "email": EMAIL, "password": PASSWORD }),
                None,
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        set_cookie(&response).expect("login should issue a session cookie")
    }

    async fn stored(&self, cookie: &str) -> Option<SessionData> {
        self.store.load(session_id(cookie)).await.unwrap()
    }
}

// =============================================================================
// POST /session
// =============================================================================

#[tokio::test]
async fn test_login_without_password_is_rejected() {
    let app = test_app();

    let response = app
        .send(json_request(
            Method::POST,
            "/session",
            json!({ "email": EMAIL }),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(set_cookie(&response).is_none());
    assert!(app.store.is_empty().await);
    assert_eq!(app.people.active_sessions(), 0);
}

#[tokio::test]
async fn test_login_with_empty_email_is_rejected() {
    let app = test_app();

    let response = app
        .send(json_request(
            Method::POST,
            "/session",
            json!({ "email": "", "password": PASSWORD }),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Email/username and password are required.");
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unprocessable() {
    let app = test_app();

    let response = app
        .send(json_request(
            Method::POST,
            "/session",
            json!({ "email": EMAIL, "password": "wrong-password" }),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["message"], MSG_INVALID_CREDENTIALS);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_login_caches_roles_and_capabilities() {
    let app = test_app();

    let response = app
        .send(json_request(
            Method::POST,
            "/session",
            json!({ "email": EMAIL, "password": PASSWORD }),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response).unwrap();
    assert_eq!(body_json(response).await, json!({ "forcePasswordChange": false }));

    let data = app.stored(&cookie).await.unwrap();
    let cache = data.cache.unwrap();
    assert!(data.session_token.is_some());
    assert_eq!(cache.first_name, "Jane");
    assert_eq!(cache.default_entity_type, "Articles");
    assert_eq!(cache.homepage, "/admin");
    assert_eq!(cache.roles(), Some(&["editor".to_string()][..]));
    assert_eq!(cache.capabilities(), Some(&["content.edit".to_string()][..]));
}

#[tokio::test]
async fn test_login_with_forced_password_change_withholds_roles() {
    let app = test_app_with(FakePeople::forcing_password_change(), vec![]);

    let response = app
        .send(json_request(
            Method::POST,
            "/session",
            json!({ "email": EMAIL, "password": PASSWORD }),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response).unwrap();
    assert_eq!(body_json(response).await, json!({ "forcePasswordChange": true }));

    let cache = app.stored(&cookie).await.unwrap().cache.unwrap();
    assert!(cache.force_password_change);
    assert!(cache.roles().is_none());
    assert!(cache.capabilities().is_none());
}

#[tokio::test]
async fn test_login_again_rotates_session() {
    let app = test_app();
    let first = app.login().await;
    let first_token = app.stored(&first).await.unwrap().session_token;

    let response = app
        .send(json_request(
            Method::POST,
            "/session",
            json!({ "email": EMAIL, "password": PASSWORD }),
            Some(&first),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let second = set_cookie(&response).expect("login should issue a new session cookie");
    assert_ne!(session_id(&second), session_id(&first));

    assert!(app.stored(&first).await.is_none());
    let second_token = app.stored(&second).await.unwrap().session_token;
    assert_ne!(second_token, first_token);
    assert_eq!(app.people.active_sessions(), 1);
}

// =============================================================================
// DELETE /session
// =============================================================================

#[tokio::test]
async fn test_logout_without_session_is_rejected() {
    let app = test_app();

    let response = app.send(empty_request(Method::DELETE, "/session", None)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_logout_destroys_session() {
    let app = test_app();
    let cookie = app.login().await;
    assert_eq!(app.people.active_sessions(), 1);

    let response = app
        .send(empty_request(Method::DELETE, "/session", Some(&cookie)))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let removal = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(removal.contains("Max-Age=0"));
    assert_eq!(body_json(response).await, json!({ "message": "OK" }));

    assert!(app.stored(&cookie).await.is_none());
    assert_eq!(app.people.active_sessions(), 0);

    // The old cookie no longer names a session
    let again = app
        .send(empty_request(Method::DELETE, "/session", Some(&cookie)))
        .await;
    assert_eq!(again.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unsupported_method_on_session() {
    let app = test_app();

    let response = app.send(empty_request(Method::GET, "/session", None)).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
}

// =============================================================================
// PUT /me/password
// =============================================================================

fn password_body(current: &str, new: &str, confirm: &str) -> Value {
    json!({
        "email": EMAIL,
        "currentPassword": current,
        "newPassword": new,
        "confirmNewPassword": confirm,
    })
}

#[tokio::test]
async fn test_password_mismatch_changes_nothing() {
    let app = test_app();
    let cookie = app.login().await;

    let response = app
        .send(json_request(
            Method::PUT,
            "/me/password",
            password_body(PASSWORD, "NewPassword123", "Different123"),
            Some(&cookie),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], MSG_PASSWORD_MISMATCH);
    assert_eq!(app.people.password_updates(), 0);
}

#[tokio::test]
async fn test_password_required() {
    let app = test_app();
    let cookie = app.login().await;

    let response = app
        .send(json_request(
            Method::PUT,
            "/me/password",
            json!({ "currentPassword": PASSWORD, "newPassword": "NewPassword123" }),
            Some(&cookie),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], "Password is required.");
    assert_eq!(app.people.password_updates(), 0);
}

#[tokio::test]
async fn test_password_change_requires_login() {
    let app = test_app();

    let response = app
        .send(json_request(
            Method::PUT,
            "/me/password",
            password_body(PASSWORD, "NewPassword123", "NewPassword123"),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.people.password_updates(), 0);
}

#[tokio::test]
async fn test_password_change_with_wrong_current_password() {
    let app = test_app();
    let cookie = app.login().await;

    let response = app
        .send(json_request(
            Method::PUT,
            "/me/password",
            password_body("not-my-password", "NewPassword123", "NewPassword123"),
            Some(&cookie),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], MSG_INCORRECT_PASSWORD);
}

#[tokio::test]
async fn test_password_change_refreshes_session_cache() {
    let app = test_app_with(FakePeople::forcing_password_change(), vec![]);
    let cookie = app.login().await;
    let before = app.stored(&cookie).await.unwrap().cache.unwrap();
    assert!(before.force_password_change);

    let response = app
        .send(json_request(
            Method::PUT,
            "/me/password",
            password_body(PASSWORD, "NewPassword123", "NewPassword123"),
            Some(&cookie),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    // The session keeps its id, so no new cookie is issued
    assert!(set_cookie(&response).is_none());
    assert_eq!(
        body_json(response).await,
        json!({ "message": MSG_PASSWORD_CHANGED })
    );
    assert_eq!(app.people.password_updates(), 1);

    let after = app.stored(&cookie).await.unwrap().cache.unwrap();
    assert!(!after.force_password_change);
    assert_eq!(after.roles(), Some(&["editor".to_string()][..]));
}

// =============================================================================
// GET /entity_types
// =============================================================================

#[tokio::test]
async fn test_no_entity_types_is_not_found() {
    let app = test_app();

    let response = app.send(empty_request(Method::GET, "/entity_types", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn test_entity_types_returned_unchanged() {
    let entity_types = vec![
        EntityType {
            id: Uuid::new_v4(),
            name: "Articles".to_string(),
            slug: "articles".to_string(),
        },
        EntityType {
            id: Uuid::new_v4(),
            name: "Press Releases".to_string(),
            slug: "press-releases".to_string(),
        },
    ];
    let app = test_app_with(FakePeople::default(), entity_types.clone());

    let response = app.send(empty_request(Method::GET, "/entity_types", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::to_value(&entity_types).unwrap());
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let response = app.send(empty_request(Method::GET, "/health", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}
