//! User repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use foods_core::result::AppResult;
use foods_core::traits::{Record, Repository};
use foods_core::types::SearchPredicate;
use foods_entity::user::{User, UserRole};

use super::{missing, parse_id};
use crate::error::map_sqlx_error;

/// Raw `users` row. Roles are stored as text.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    passwd: String,
    role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: Some(row.id),
            username: Some(row.username),
            email: Some(row.email),
            passwd: Some(row.passwd),
            role: Some(row.role.parse().unwrap_or_default()),
        }
    }
}

/// PostgreSQL-backed repository for the `users` table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn query_all(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id::text AS id, username, email, passwd, role \
             FROM users ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, User::RESOURCE))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn query_id(&self, id: &str) -> AppResult<User> {
        let uuid = parse_id(id, User::RESOURCE)?;

        sqlx::query_as::<_, UserRow>(
            "SELECT id::text AS id, username, email, passwd, role FROM users WHERE id = $1",
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, User::RESOURCE))?
        .map(User::from)
        .ok_or_else(|| missing(id, User::RESOURCE))
    }

    async fn create(&self, user: User) -> AppResult<User> {
        user.check_required()?;
        let role = user.role.unwrap_or_default();

        sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, email, passwd, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id::text AS id, username, email, passwd, role",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.passwd)
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await
        .map(User::from)
        .map_err(|e| map_sqlx_error(e, User::RESOURCE))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = user.id.clone().unwrap_or_default();
        let uuid = parse_id(&id, User::RESOURCE)?;

        sqlx::query_as::<_, UserRow>(
            "UPDATE users SET \
                username = COALESCE($2, username), \
                email = COALESCE($3, email), \
                role = COALESCE($4, role), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id::text AS id, username, email, passwd, role",
        )
        .bind(uuid)
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.role.map(|r: UserRole| r.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, User::RESOURCE))?
        .map(User::from)
        .ok_or_else(|| missing(&id, User::RESOURCE))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let uuid = parse_id(id, User::RESOURCE)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, User::RESOURCE))?;

        if result.rows_affected() == 0 {
            return Err(missing(id, User::RESOURCE));
        }
        Ok(())
    }

    async fn search(&self, predicate: &SearchPredicate) -> AppResult<Vec<User>> {
        let Some(column) = User::FIELDS.iter().find(|f| **f == predicate.key) else {
            debug!(key = %predicate.key, "Search on unknown user field");
            return Ok(Vec::new());
        };

        let sql = format!(
            "SELECT id::text AS id, username, email, passwd, role \
             FROM users WHERE {column} = $1 ORDER BY created_at, id"
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(&predicate.value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, User::RESOURCE))?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
