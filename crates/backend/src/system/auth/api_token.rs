use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::ApiToken;
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

/// Generate a 40-hex-char token key
fn generate_key() -> String {
    let mut rng = rand::thread_rng();
    (0..20)
        .map(|_| format!("{:02x}", rng.gen::<u8>()))
        .collect()
}

/// Provision the API token for a freshly created user. One token per user,
/// enforced by the unique constraint on user_id.
pub async fn create_for_user(user_id: &str) -> Result<ApiToken> {
    let conn = get_connection();

    let token = ApiToken {
        token_key: generate_key(),
        user_id: user_id.to_string(),
        created_at: Utc::now().to_rfc3339(),
    };

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_api_tokens (token_key, user_id, created_at) VALUES (?, ?, ?)",
        [
            token.token_key.clone().into(),
            token.user_id.clone().into(),
            token.created_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert API token")?;

    Ok(token)
}

/// Get the token belonging to a user
pub async fn get_by_user(user_id: &str) -> Result<Option<ApiToken>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT token_key, user_id, created_at FROM sys_api_tokens WHERE user_id = ?",
            [user_id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(ApiToken {
            token_key: row.try_get("", "token_key")?,
            user_id: row.try_get("", "user_id")?,
            created_at: row.try_get("", "created_at")?,
        })),
        None => Ok(None),
    }
}

/// Resolve a token key to its owning user id
pub async fn get_user_id_by_key(token_key: &str) -> Result<Option<String>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_api_tokens WHERE token_key = ?",
            [token_key.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "user_id")?)),
        None => Ok(None),
    }
}

/// Count tokens held by a user
pub async fn count_for_user(user_id: &str) -> Result<usize> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as count FROM sys_api_tokens WHERE user_id = ?",
            [user_id.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let count: i64 = row.try_get("", "count")?;
            Ok(count as usize)
        }
        None => Ok(0),
    }
}
