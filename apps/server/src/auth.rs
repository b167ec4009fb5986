use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use pmajay_core::errors::{DatabaseError, Error as CoreError};
use pmajay_core::users::{Actor, NewUser, User, UserRole};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::main_lib::AppState;

/// Roles allowed through a gated route group.
pub type RoleSet = &'static [UserRole];

pub const CENTRAL_ONLY: RoleSet = &[UserRole::Central];
pub const CENTRAL_AND_STATE: RoleSet = &[UserRole::Central, UserRole::StateUser];
pub const FIELD_STAFF: RoleSet = &[UserRole::Central, UserRole::StateUser, UserRole::Agency];

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    Forbidden,
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    code: u16,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    role: String,
    state_id: Option<i32>,
    iat: usize,
    exp: usize,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub state_id: Option<i32>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}

impl From<User> for LoginUser {
    fn from(user: User) -> Self {
        LoginUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            state_id: user.state_id,
        }
    }
}

impl AuthManager {
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_ttl,
        }
    }

    /// Builds the manager from the configured secret, or from a random one
    /// when none is configured. Tokens signed with a random secret do not
    /// survive a restart.
    pub fn from_config(secret: Option<&str>, token_ttl: Duration) -> anyhow::Result<Self> {
        let key = match secret {
            Some(raw) => decode_secret_key(raw)?,
            None => {
                tracing::warn!(
                    "PMAJAY_JWT_SECRET is not set; using an ephemeral signing key"
                );
                let mut bytes = vec![0u8; 32];
                OsRng.fill_bytes(&mut bytes);
                bytes
            }
        };
        Ok(Self::new(&key, token_ttl))
    }

    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::Internal("System clock is before UNIX_EPOCH".into()))?;
        let exp = now + self.token_ttl;
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            state_id: user.state_id,
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Verifies signature and expiry and returns the caller's identity.
    pub fn validate_token(&self, token: &str) -> Result<Actor, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AuthError::InvalidToken)?;
        let claims = data.claims;
        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken)?;
        let role = claims
            .role
            .parse::<UserRole>()
            .map_err(|_| AuthError::InvalidToken)?;
        Ok(Actor {
            user_id,
            email: claims.email,
            role,
            state_id: claims.state_id,
        })
    }

    /// Reads an optional bearer token. An absent header yields `None`; a
    /// present but bad one is rejected.
    pub fn actor_from_headers(&self, headers: &HeaderMap) -> Result<Option<Actor>, AuthError> {
        match bearer_token(headers)? {
            Some(token) => self.validate_token(token).map(Some),
            None => Ok(None),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "No token provided".to_string()),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            AuthError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Insufficient permissions".to_string(),
            ),
            AuthError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = Json(AuthErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Internal(msg) => ApiError::Internal(msg),
            AuthError::MissingToken | AuthError::InvalidToken => {
                ApiError::Core(CoreError::InvalidCredentials)
            }
            AuthError::Forbidden => {
                ApiError::Core(CoreError::Forbidden("Insufficient permissions".into()))
            }
        }
    }
}

pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) => bytes,
        Err(_) if trimmed.len() == 32 => trimmed.as_bytes().to_vec(),
        Err(_) => {
            anyhow::bail!("JWT secret must be base64 encoded or a 32-byte ASCII string")
        }
    };

    if decoded.len() != 32 {
        anyhow::bail!("JWT secret must decode to exactly 32 bytes");
    }

    Ok(decoded)
}

fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let header = value.to_str().map_err(|_| AuthError::InvalidToken)?;
    let mut parts = header.splitn(2, ' ');
    match (parts.next(), parts.next()) {
        (Some(scheme), Some(token))
            if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
        {
            Ok(Some(token.trim()))
        }
        _ => Err(AuthError::InvalidToken),
    }
}

pub async fn require_jwt(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers())?.ok_or(AuthError::MissingToken)?;
    let actor = state.auth.validate_token(token)?;
    request.extensions_mut().insert(actor);
    Ok(next.run(request).await)
}

/// Rejects callers whose role is not in `allowed`. Runs after `require_jwt`.
pub async fn require_role(
    allowed: RoleSet,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let actor = request
        .extensions()
        .get::<Actor>()
        .ok_or(AuthError::MissingToken)?;
    if !allowed.contains(&actor.role) {
        tracing::debug!(
            "User {} with role {} denied access to {}",
            actor.user_id,
            actor.role,
            request.uri().path()
        );
        return Err(AuthError::Forbidden);
    }
    Ok(next.run(request).await)
}

/// Puts every route of `router` behind token verification and the role gate.
pub fn gated(
    router: Router<Arc<AppState>>,
    state: &Arc<AppState>,
    allowed: RoleSet,
) -> Router<Arc<AppState>> {
    router
        .route_layer(middleware::from_fn(
            move |request: Request<Body>, next: Next| require_role(allowed, request, next),
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt))
}

/// Puts every route of `router` behind token verification only.
pub fn authenticated(
    router: Router<Arc<AppState>>,
    state: &Arc<AppState>,
) -> Router<Arc<AppState>> {
    router.route_layer(middleware::from_fn_with_state(state.clone(), require_jwt))
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state
        .user_service
        .authenticate(&payload.email, &payload.password)
        .await?;
    let token = state.auth.issue_token(&user)?;
    tracing::info!("User {} logged in", user.id);
    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

async fn register(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<CreatedResponse>), Response> {
    let requester = state
        .auth
        .actor_from_headers(&headers)
        .map_err(IntoResponse::into_response)?;
    let user = state
        .user_service
        .register(requester.as_ref(), payload)
        .await
        .map_err(|err| match err {
            CoreError::Database(DatabaseError::UniqueViolation(_)) => {
                ApiError::Conflict("User already exists".to_string()).into_response()
            }
            other => ApiError::from(other).into_response(),
        })?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: user.id,
            message: "User registered successfully".to_string(),
        }),
    ))
}

async fn me(Extension(actor): Extension<Actor>) -> Json<Actor> {
    Json(actor)
}

pub fn router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .merge(authenticated(
            Router::new().route("/auth/me", get(me)),
            state,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(role: UserRole, state_id: Option<i32>) -> User {
        User {
            id: 7,
            name: "Maharashtra Officer".to_string(),
            email: "officer@mh.gov.in".to_string(),
            role,
            state_id,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn issued_tokens_round_trip_identity() {
        let auth = AuthManager::new(&[7u8; 32], Duration::from_secs(60));
        let token = auth
            .issue_token(&user(UserRole::StateUser, Some(1)))
            .unwrap();
        let actor = auth.validate_token(&token).unwrap();
        assert_eq!(actor.user_id, 7);
        assert_eq!(actor.role, UserRole::StateUser);
        assert_eq!(actor.state_id, Some(1));
    }

    #[test]
    fn tokens_from_another_key_are_rejected() {
        let issuer = AuthManager::new(&[1u8; 32], Duration::from_secs(60));
        let verifier = AuthManager::new(&[2u8; 32], Duration::from_secs(60));
        let token = issuer.issue_token(&user(UserRole::Central, None)).unwrap();
        assert!(matches!(
            verifier.validate_token(&token),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            verifier.validate_token("not-a-jwt"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let auth = AuthManager::new(&[3u8; 32], Duration::from_secs(0));
        let token = auth.issue_token(&user(UserRole::Central, None)).unwrap();
        std::thread::sleep(Duration::from_millis(1100));
        assert!(auth.validate_token(&token).is_err());
    }

    #[test]
    fn bearer_header_parsing() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).unwrap().is_none());

        headers.insert(AUTHORIZATION, "Bearer abc.def".parse().unwrap());
        assert_eq!(bearer_token(&headers).unwrap(), Some("abc.def"));

        headers.insert(AUTHORIZATION, "Basic abc".parse().unwrap());
        assert!(bearer_token(&headers).is_err());
    }

    #[test]
    fn secret_must_be_32_bytes() {
        assert!(decode_secret_key(&BASE64.encode([9u8; 32])).is_ok());
        assert!(decode_secret_key("0123456789abcdef0123456789abcde!").is_ok());
        assert!(decode_secret_key("short").is_err());
        assert!(decode_secret_key("  ").is_err());
    }
}
