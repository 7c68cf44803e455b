//! Unit tests for the auth crate
//!
//! Use cases and gates run against an in-memory repository; the router
//! tests drive the real HTTP surface through `tower::ServiceExt`.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use kernel::id::AccountId;

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory account store backing the tests
#[derive(Clone, Default)]
struct MemAccountRepository {
    inner: Arc<Mutex<MemAccounts>>,
}

#[derive(Default)]
struct MemAccounts {
    next_id: i64,
    rows: Vec<Account>,
}

impl MemAccountRepository {
    /// Flip the admin flag, mimicking an out-of-band role grant
    fn promote_to_admin(&self, email: &str) {
        let mut state = self.inner.lock().unwrap();
        if let Some(account) = state.rows.iter_mut().find(|a| a.email.as_str() == email) {
            account.is_admin = true;
        }
    }
}

impl AccountRepository for MemAccountRepository {
    async fn create(&self, account: &NewAccount) -> AuthResult<Account> {
        let mut state = self.inner.lock().unwrap();

        // The unique index surfaces as a storage error, like Postgres
        if state.rows.iter().any(|a| a.email == account.email) {
            return Err(AuthError::Internal("duplicate email".to_string()));
        }

        state.next_id += 1;
        let stored = Account {
            account_id: AccountId::from_i64(state.next_id),
            email: account.email.clone(),
            password_hash: account.password_hash.clone(),
            is_admin: false,
            created_at: Utc::now(),
        };
        state.rows.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let state = self.inner.lock().unwrap();
        Ok(state.rows.iter().find(|a| &a.email == email).cloned())
    }
}

mod use_case_tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::login::{LoginInput, LoginUseCase};
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use kernel::principal::Principal;
    use platform::token::TokenCodec;

    fn setup() -> (MemAccountRepository, Arc<AuthConfig>, Arc<TokenCodec>) {
        let config = Arc::new(AuthConfig::with_random_secret());
        let codec = Arc::new(TokenCodec::new(config.token_secret));
        (MemAccountRepository::default(), config, codec)
    }

    async fn register(
        repo: &MemAccountRepository,
        config: &Arc<AuthConfig>,
        codec: &Arc<TokenCodec>,
        email: &str,
        password: &str,
    ) -> AuthResult<crate::application::register::RegisterOutput> {
        let use_case =
            RegisterUseCase::new(Arc::new(repo.clone()), config.clone(), codec.clone());
        use_case
            .execute(RegisterInput {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    async fn login(
        repo: &MemAccountRepository,
        config: &Arc<AuthConfig>,
        codec: &Arc<TokenCodec>,
        email: &str,
        password: &str,
    ) -> AuthResult<crate::application::login::LoginOutput> {
        let use_case = LoginUseCase::new(Arc::new(repo.clone()), config.clone(), codec.clone());
        use_case
            .execute(LoginInput {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    #[tokio::test]
    async fn register_then_login_returns_matching_identity() {
        let (repo, config, codec) = setup();

        let registered = register(&repo, &config, &codec, "trainer@example.com", "correct horse battery")
            .await
            .unwrap();

        let claim: Principal = codec.verify(&registered.token).unwrap();
        assert_eq!(claim.id, registered.id);
        assert_eq!(claim.email, "trainer@example.com");
        assert!(!claim.is_admin);

        let logged_in = login(&repo, &config, &codec, "trainer@example.com", "correct horse battery")
            .await
            .unwrap();
        assert_eq!(logged_in.id, registered.id);

        let claim: Principal = codec.verify(&logged_in.token).unwrap();
        assert_eq!(claim.id, registered.id);
        assert_eq!(claim.email, "trainer@example.com");
    }

    #[tokio::test]
    async fn login_with_unknown_email_fails() {
        let (repo, config, codec) = setup();

        let result = login(&repo, &config, &codec, "nobody@example.com", "whatever password").await;
        assert!(matches!(result, Err(AuthError::AccountNotFound)));
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let (repo, config, codec) = setup();

        register(&repo, &config, &codec, "trainer@example.com", "correct horse battery")
            .await
            .unwrap();

        let result = login(&repo, &config, &codec, "trainer@example.com", "incorrect horse battery").await;
        assert!(matches!(result, Err(AuthError::InvalidPassword)));
    }

    #[tokio::test]
    async fn register_duplicate_email_fails() {
        let (repo, config, codec) = setup();

        register(&repo, &config, &codec, "trainer@example.com", "correct horse battery")
            .await
            .unwrap();

        let result =
            register(&repo, &config, &codec, "trainer@example.com", "another password here").await;
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }

    #[tokio::test]
    async fn register_rejects_invalid_email() {
        let (repo, config, codec) = setup();

        let result = register(&repo, &config, &codec, "not-an-email", "correct horse battery").await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let (repo, config, codec) = setup();

        let result = register(&repo, &config, &codec, "trainer@example.com", "short").await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}

mod gate_tests {
    use super::*;
    use crate::presentation::middleware::{CredentialGate, require_admin, require_credential};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::middleware;
    use axum::routing::{get, post};
    use axum::{Extension, Json, Router};
    use kernel::principal::Principal;
    use platform::token::TokenCodec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    const SECRET: [u8; 32] = [9u8; 32];

    fn principal(is_admin: bool) -> Principal {
        Principal {
            id: 1,
            email: "trainer@example.com".to_string(),
            is_admin,
        }
    }

    /// A user route and an admin route behind the two gates, counting how
    /// often the admin handler actually runs
    fn gated_app(admin_hits: Arc<AtomicUsize>) -> Router {
        let codec = Arc::new(TokenCodec::new(SECRET));
        let gate = CredentialGate::new(codec);

        let admin_routes = Router::new()
            .route(
                "/admin",
                post(move |Extension(principal): Extension<Principal>| {
                    let admin_hits = admin_hits.clone();
                    async move {
                        admin_hits.fetch_add(1, Ordering::SeqCst);
                        Json(principal)
                    }
                }),
            )
            .layer(middleware::from_fn(require_admin));

        Router::new()
            .route(
                "/me",
                get(|Extension(principal): Extension<Principal>| async move { Json(principal) }),
            )
            .merge(admin_routes)
            .layer(middleware::from_fn(
                move |req: Request<Body>, next: middleware::Next| {
                    require_credential(gate.clone(), req, next)
                },
            ))
    }

    fn bearer(claims: &Principal) -> String {
        let token = TokenCodec::new(SECRET).issue(claims).unwrap();
        format!("Bearer {token}")
    }

    async fn send(app: Router, method: &str, uri: &str, auth: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        response.status()
    }

    #[tokio::test]
    async fn missing_credential_is_unauthorized() {
        let app = gated_app(Arc::new(AtomicUsize::new(0)));
        assert_eq!(send(app, "GET", "/me", None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_unauthorized() {
        let app = gated_app(Arc::new(AtomicUsize::new(0)));
        let status = send(app, "GET", "/me", Some("Basic dHJhaW5lcg==")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn garbage_token_is_forbidden() {
        let app = gated_app(Arc::new(AtomicUsize::new(0)));
        let status = send(app, "GET", "/me", Some("Bearer not.a.credential")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn foreign_signature_is_forbidden() {
        let app = gated_app(Arc::new(AtomicUsize::new(0)));
        let foreign = TokenCodec::new([0u8; 32]).issue(&principal(true)).unwrap();
        let status = send(app, "GET", "/me", Some(&format!("Bearer {foreign}"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn valid_credential_passes_user_gate() {
        let app = gated_app(Arc::new(AtomicUsize::new(0)));
        let status = send(app, "GET", "/me", Some(&bearer(&principal(false)))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn non_admin_is_rejected_before_admin_handler_runs() {
        let admin_hits = Arc::new(AtomicUsize::new(0));
        let app = gated_app(admin_hits.clone());

        let status = send(app, "POST", "/admin", Some(&bearer(&principal(false)))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(admin_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn admin_credential_reaches_admin_handler() {
        let admin_hits = Arc::new(AtomicUsize::new(0));
        let app = gated_app(admin_hits.clone());

        let status = send(app, "POST", "/admin", Some(&bearer(&principal(true)))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(admin_hits.load(Ordering::SeqCst), 1);
    }
}

mod router_tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::presentation::router::auth_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use kernel::principal::Principal;
    use platform::token::TokenCodec;
    use tower::ServiceExt;

    const SECRET: [u8; 32] = [3u8; 32];

    fn app(repo: MemAccountRepository) -> Router {
        let config = AuthConfig {
            token_secret: SECRET,
            ..Default::default()
        };
        auth_router_generic(repo, config, TokenCodec::new(SECRET))
    }

    async fn post_json(
        app: &Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn register_returns_created_with_token() {
        let app = app(MemAccountRepository::default());

        let (status, body) = post_json(
            &app,
            "/register",
            serde_json::json!({"email": "trainer@example.com", "password": "correct horse battery"}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "trainer@example.com");

        let claim: Principal = TokenCodec::new(SECRET)
            .verify(body["token"].as_str().unwrap())
            .unwrap();
        assert_eq!(claim.id, body["id"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn login_reflects_admin_flag() {
        let repo = MemAccountRepository::default();
        let app = app(repo.clone());

        post_json(
            &app,
            "/register",
            serde_json::json!({"email": "admin@example.com", "password": "correct horse battery"}),
        )
        .await;
        repo.promote_to_admin("admin@example.com");

        let (status, body) = post_json(
            &app,
            "/login",
            serde_json::json!({"email": "admin@example.com", "password": "correct horse battery"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isAdmin"], true);

        let claim: Principal = TokenCodec::new(SECRET)
            .verify(body["token"].as_str().unwrap())
            .unwrap();
        assert!(claim.is_admin);
    }

    #[tokio::test]
    async fn login_unknown_email_is_bad_request() {
        let app = app(MemAccountRepository::default());

        let (status, _) = post_json(
            &app,
            "/login",
            serde_json::json!({"email": "nobody@example.com", "password": "whatever password"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_duplicate_email_is_internal_error() {
        let app = app(MemAccountRepository::default());
        let body = serde_json::json!({"email": "trainer@example.com", "password": "correct horse battery"});

        let (first, _) = post_json(&app, "/register", body.clone()).await;
        assert_eq!(first, StatusCode::CREATED);

        let (second, _) = post_json(&app, "/register", body).await;
        assert_eq!(second, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
