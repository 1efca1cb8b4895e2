use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenService;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Router;
use catalog_service::clothes::errors::ClothesError;
use catalog_service::clothes::models::Clothes;
use catalog_service::clothes::models::ClothesId;
use catalog_service::clothes::models::NewClothes;
use catalog_service::clothes::ports::ClothesRepository;
use catalog_service::domain::clothes::service::ClothesService;
use catalog_service::domain::user::service::UserService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::user::errors::UserError;
use catalog_service::user::models::NewUser;
use catalog_service::user::models::Role;
use catalog_service::user::models::User;
use catalog_service::user::models::UserId;
use catalog_service::user::ports::UserRepository;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application driving the real router in-process, with in-memory
/// stores standing in for Postgres.
pub struct TestApp {
    router: Router,
    pub tokens: Arc<TokenService>,
    pub users: Arc<InMemoryUserRepository>,
    pub clothes: Arc<InMemoryClothesRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let tokens = Arc::new(TokenService::new(TEST_SECRET, 120));
        let users = Arc::new(InMemoryUserRepository::default());
        let clothes = Arc::new(InMemoryClothesRepository::default());

        let router = create_router(
            Arc::new(UserService::new(Arc::clone(&users) as Arc<dyn UserRepository>)),
            Arc::new(ClothesService::new(
                Arc::clone(&clothes) as Arc<dyn ClothesRepository>
            )),
            Arc::clone(&tokens),
        );

        Self {
            router,
            tokens,
            users,
            clothes,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    pub async fn post_json_authenticated(
        &self,
        path: &str,
        body: &serde_json::Value,
        token: &str,
    ) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    pub async fn get_authenticated(&self, path: &str, token: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Register a user through the API and return the issued token.
    pub async fn register(&self, email: &str) -> String {
        let response = self
            .post_json(
                "/register",
                &serde_json::json!({
                    "email": email,
                    "full_name": "Jane Doe",
                    "password": "secret123"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        body["token"].as_str().expect("Missing token").to_string()
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request")
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}

/// In-memory user store enforcing the same email uniqueness the Postgres
/// unique constraint does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn remove(&self, id: UserId) {
        self.users.lock().unwrap().remove(&id.0);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<UserId, UserError> {
        let mut users = self.users.lock().unwrap();

        if users
            .values()
            .any(|u| u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        users.insert(
            id,
            User {
                id: UserId(id),
                email: user.email,
                password_hash: user.password_hash,
                full_name: user.full_name,
                phone: user.phone,
                role: Role::User,
                created_at: now,
                last_modified_at: now,
            },
        );

        Ok(UserId(id))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(&id.0).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryClothesRepository {
    clothes: Mutex<HashMap<i64, Clothes>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ClothesRepository for InMemoryClothesRepository {
    async fn create(&self, clothes: NewClothes) -> Result<ClothesId, ClothesError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();

        self.clothes.lock().unwrap().insert(
            id,
            Clothes {
                id: ClothesId(id),
                name: clothes.name,
                color: clothes.color,
                size: clothes.size,
                photo_url: clothes.photo_url,
                created_at: now,
                last_modified_at: now,
            },
        );

        Ok(ClothesId(id))
    }

    async fn find_by_id(&self, id: ClothesId) -> Result<Option<Clothes>, ClothesError> {
        Ok(self.clothes.lock().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Clothes>, ClothesError> {
        let mut listing: Vec<Clothes> = self.clothes.lock().unwrap().values().cloned().collect();
        listing.sort_by_key(|c| c.id.0);
        Ok(listing)
    }
}
