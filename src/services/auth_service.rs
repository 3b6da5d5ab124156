//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::REFRESH_TOKEN_LENGTH,
    db::repositories::{TokenRepository, UserRepository},
    error::{AppError, AppResult},
    models::User,
    utils::crypto,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user. The caller is responsible for restricting which
    /// roles may be chosen at signup.
    pub async fn register(
        pool: &PgPool,
        email: &str,
        password: &str,
        name: &str,
        role: &str,
    ) -> AppResult<User> {
        // Check if email exists
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        // Hash password
        let password_hash = Self::hash_password(password)?;

        // Create user
        let user = UserRepository::create(pool, email, name, &password_hash, role).await?;

        Ok(user)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String, String, i64)> {
        // Find user
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Deactivated accounts cannot sign in
        if !user.is_active {
            return Err(AppError::Forbidden("Account is deactivated".to_string()));
        }

        // Verify password
        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        // Update last login
        UserRepository::update_last_login(pool, &user.id).await?;

        // Generate tokens
        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let refresh_token = Self::issue_refresh_token(pool, config, &user.id).await?;

        Ok((user, access_token, refresh_token, expires_in))
    }

    /// Rotate a refresh token: redeem the presented token and issue a new
    /// access/refresh pair.
    pub async fn refresh_token(
        pool: &PgPool,
        config: &Config,
        refresh_token: &str,
    ) -> AppResult<(String, String, i64)> {
        let token_hash = crypto::hash_string(refresh_token);

        let stored = TokenRepository::consume(pool, &token_hash)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let user = UserRepository::find_by_id(pool, &stored.user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if !user.is_active {
            return Err(AppError::Forbidden("Account is deactivated".to_string()));
        }

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let new_refresh_token = Self::issue_refresh_token(pool, config, &user.id).await?;

        Ok((access_token, new_refresh_token, expires_in))
    }

    /// Logout: revoke the presented refresh token, or every stored token
    /// for the user when `all_sessions` is set.
    pub async fn logout(
        pool: &PgPool,
        user_id: &Uuid,
        refresh_token: Option<&str>,
        all_sessions: bool,
    ) -> AppResult<()> {
        if all_sessions {
            TokenRepository::revoke_for_user(pool, user_id).await?;
        } else if let Some(token) = refresh_token {
            TokenRepository::revoke(pool, &crypto::hash_string(token)).await?;
        }

        Ok(())
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }

    /// Generate an opaque refresh token, store its hash, return the raw value
    async fn issue_refresh_token(
        pool: &PgPool,
        config: &Config,
        user_id: &Uuid,
    ) -> AppResult<String> {
        let raw = crypto::generate_secure_token(REFRESH_TOKEN_LENGTH);
        let expires_at = Utc::now() + Duration::days(config.jwt.refresh_token_expiry_days);

        TokenRepository::store(pool, user_id, &crypto::hash_string(&raw), expires_at).await?;

        Ok(raw)
    }
}
