// Generic MySQL repository
//
// SQL is assembled from the entity's Resource metadata:
// - reads always filter out soft-deleted rows (delete_yn = 'N')
// - substring search runs over a binary collation so it is case-sensitive
// - soft deletes become an UPDATE of delete_yn / delete_time

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::resource::{contains_pattern, DeleteStrategy, Resource};
use crate::core::traits::CrudRepository;
use crate::core::{AppError, Result};

const LIVE_ROW: &str = "delete_yn = 'N'";

/// Repository for one resource table in MySQL
pub struct MySqlRepository<E> {
    pool: MySqlPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for MySqlRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<E> MySqlRepository<E> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E: Resource> MySqlRepository<E> {
    fn is_soft() -> bool {
        E::DELETE_STRATEGY == DeleteStrategy::Soft
    }

    /// `WHERE` clause combining the live-row filter with `condition`
    fn where_clause(condition: Option<&str>) -> String {
        let mut conditions = Vec::with_capacity(2);
        if Self::is_soft() {
            conditions.push(LIVE_ROW);
        }
        if let Some(condition) = condition {
            conditions.push(condition);
        }

        if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        }
    }

    fn select_sql(condition: Option<&str>) -> String {
        format!(
            "SELECT {}, {}, insert_time, update_time FROM {}{}",
            E::ID_COLUMN,
            E::COLUMNS.join(", "),
            E::TABLE,
            Self::where_clause(condition),
        )
    }

    fn by_id_condition() -> String {
        format!("{} = ?", E::ID_COLUMN)
    }

    fn insert_sql() -> String {
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        format!(
            "INSERT INTO {} ({}, insert_time, update_time) VALUES ({}, NOW(), NOW())",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders,
        )
    }

    fn update_sql() -> String {
        let assignments = E::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {}, update_time = NOW(){}",
            E::TABLE,
            assignments,
            Self::where_clause(Some(&Self::by_id_condition())),
        )
    }

    fn delete_sql(condition: Option<&str>) -> String {
        match E::DELETE_STRATEGY {
            DeleteStrategy::Physical => {
                format!("DELETE FROM {}{}", E::TABLE, Self::where_clause(condition))
            }
            DeleteStrategy::Soft => format!(
                "UPDATE {} SET delete_yn = 'Y', delete_time = NOW(){}",
                E::TABLE,
                Self::where_clause(condition),
            ),
        }
    }

    async fn insert(&self, entity: &E) -> Result<i64> {
        let sql = Self::insert_sql();
        let result = entity
            .bind_columns(sqlx::query(&sql))
            .execute(&self.pool)
            .await?;

        i64::try_from(result.last_insert_id()).map_err(|_| {
            AppError::internal(format!(
                "Generated id {} for {} does not fit in i64",
                result.last_insert_id(),
                E::TABLE
            ))
        })
    }

    async fn update(&self, id: i64, entity: &E) -> Result<()> {
        let sql = Self::update_sql();
        entity
            .bind_columns(sqlx::query(&sql))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl<E: Resource> CrudRepository<E> for MySqlRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>> {
        let rows = sqlx::query_as::<_, E>(&Self::select_sql(None))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>> {
        let row = sqlx::query_as::<_, E>(&Self::select_sql(Some(&Self::by_id_condition())))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn find_all_containing(&self, text: &str) -> Result<Vec<E>> {
        let condition = format!("{} COLLATE utf8mb4_bin LIKE ?", E::SEARCH_COLUMN);
        let rows = sqlx::query_as::<_, E>(&Self::select_sql(Some(&condition)))
            .bind(contains_pattern(text))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn save(&self, entity: E) -> Result<E> {
        let id = match entity.id() {
            Some(id) if self.exists_by_id(id).await? => {
                self.update(id, &entity).await?;
                id
            }
            _ => self.insert(&entity).await?,
        };

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::internal(format!("{} row {} missing after save", E::TABLE, id))
        })
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let sql = format!(
            "SELECT COUNT(*) FROM {}{}",
            E::TABLE,
            Self::where_clause(Some(&Self::by_id_condition())),
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query(&Self::delete_sql(Some(&Self::by_id_condition())))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        sqlx::query(&Self::delete_sql(None))
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
