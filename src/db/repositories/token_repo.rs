//! Refresh token repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::RefreshToken};

/// Repository for stored refresh tokens
pub struct TokenRepository;

impl TokenRepository {
    /// Store a refresh token hash for a user
    pub async fn store(
        pool: &PgPool,
        user_id: &Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RefreshToken> {
        let token = sqlx::query_as::<_, RefreshToken>(
            r#"
            INSERT INTO refresh_tokens (user_id, token_hash, expires_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .fetch_one(pool)
        .await?;

        Ok(token)
    }

    /// Consume an unexpired token by hash: the row is deleted and returned
    /// in one statement, so a token can be redeemed at most once.
    pub async fn consume(pool: &PgPool, token_hash: &str) -> AppResult<Option<RefreshToken>> {
        let token = sqlx::query_as::<_, RefreshToken>(
            r#"
            DELETE FROM refresh_tokens
            WHERE token_hash = $1 AND expires_at > NOW()
            RETURNING *
            "#,
        )
        .bind(token_hash)
        .fetch_optional(pool)
        .await?;

        Ok(token)
    }

    /// Revoke one stored token by hash
    pub async fn revoke(pool: &PgPool, token_hash: &str) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM refresh_tokens WHERE token_hash = $1"#)
            .bind(token_hash)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Revoke every stored token for a user
    pub async fn revoke_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM refresh_tokens WHERE user_id = $1"#)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
