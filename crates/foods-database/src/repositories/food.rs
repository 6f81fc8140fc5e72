//! Food repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use foods_core::result::AppResult;
use foods_core::traits::{Record, Repository};
use foods_core::types::SearchPredicate;
use foods_entity::food::Food;

use super::{missing, parse_id};
use crate::error::map_sqlx_error;

/// PostgreSQL-backed repository for the `foods` table.
#[derive(Debug, Clone)]
pub struct FoodRepository {
    pool: PgPool,
}

impl FoodRepository {
    /// Create a new food repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Food> for FoodRepository {
    async fn query_all(&self) -> AppResult<Vec<Food>> {
        sqlx::query_as::<_, Food>(
            "SELECT id::text AS id, name, cuisine, diet, region, info, img \
             FROM foods ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Food::RESOURCE))
    }

    async fn query_id(&self, id: &str) -> AppResult<Food> {
        let uuid = parse_id(id, Food::RESOURCE)?;

        sqlx::query_as::<_, Food>(
            "SELECT id::text AS id, name, cuisine, diet, region, info, img \
             FROM foods WHERE id = $1",
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Food::RESOURCE))?
        .ok_or_else(|| missing(id, Food::RESOURCE))
    }

    async fn create(&self, food: Food) -> AppResult<Food> {
        food.check_required()?;

        sqlx::query_as::<_, Food>(
            "INSERT INTO foods (name, cuisine, diet, region, info, img) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id::text AS id, name, cuisine, diet, region, info, img",
        )
        .bind(&food.name)
        .bind(&food.cuisine)
        .bind(&food.diet)
        .bind(&food.region)
        .bind(&food.info)
        .bind(&food.img)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Food::RESOURCE))
    }

    async fn update(&self, food: Food) -> AppResult<Food> {
        let id = food.id.clone().unwrap_or_default();
        let uuid = parse_id(&id, Food::RESOURCE)?;

        sqlx::query_as::<_, Food>(
            "UPDATE foods SET \
                name = COALESCE($2, name), \
                cuisine = COALESCE($3, cuisine), \
                diet = COALESCE($4, diet), \
                region = COALESCE($5, region), \
                info = COALESCE($6, info), \
                img = COALESCE($7, img), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id::text AS id, name, cuisine, diet, region, info, img",
        )
        .bind(uuid)
        .bind(&food.name)
        .bind(&food.cuisine)
        .bind(&food.diet)
        .bind(&food.region)
        .bind(&food.info)
        .bind(&food.img)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Food::RESOURCE))?
        .ok_or_else(|| missing(&id, Food::RESOURCE))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let uuid = parse_id(id, Food::RESOURCE)?;

        let result = sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Food::RESOURCE))?;

        if result.rows_affected() == 0 {
            return Err(missing(id, Food::RESOURCE));
        }
        Ok(())
    }

    async fn search(&self, predicate: &SearchPredicate) -> AppResult<Vec<Food>> {
        let Some(column) = Food::FIELDS.iter().find(|f| **f == predicate.key) else {
            debug!(key = %predicate.key, "Search on unknown food field");
            return Ok(Vec::new());
        };

        let sql = format!(
            "SELECT id::text AS id, name, cuisine, diet, region, info, img \
             FROM foods WHERE {column} = $1 ORDER BY created_at, id"
        );

        sqlx::query_as::<_, Food>(&sql)
            .bind(&predicate.value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Food::RESOURCE))
    }
}
