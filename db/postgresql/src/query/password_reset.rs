use anyhow::{Error, Result};
use chrono::{Duration, Utc};
use sqlx::{types::chrono::DateTime, Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::password_reset::PasswordResetModel};

const INSERT: &str = "INSERT INTO \"password_resets\" (\"id\", \"created_at\", \"updated_at\", \"user_id\", \"code\") VALUES ($1, $2, $3, $4, $5)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"user_id\", \"code\" FROM \"password_resets\" WHERE \"id\" = $1 AND \"updated_at\" >= $2";
const DELETE: &str = "DELETE FROM \"password_resets\" WHERE \"id\" = $1";
const DELETE_EXPIRE: &str = "DELETE FROM \"password_resets\" WHERE \"updated_at\" < $1";

pub async fn init(pool: &Pool<Postgres>) {
    tb_log::info(Some("🔧"), "PostgreSQL: Setting up password_resets table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"password_resets\" (\"id\" uuid, \"created_at\" timestamptz, \"updated_at\" timestamptz, \"user_id\" uuid, \"code\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(DELETE),
        pool.prepare(DELETE_EXPIRE),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_password_reset(&self, value: &PasswordResetModel) -> Result<()> {
        let _ = self.delete_expired_password_resets().await;
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.user_id())
                .bind(value.code()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_password_reset(&self, id: &Uuid) -> Result<PasswordResetModel> {
        let _ = self.delete_expired_password_resets().await;
        Ok(self
            .fetch_one(sqlx::query_as(SELECT).bind(id).bind(&{
                let now = Utc::now();
                DateTime::from_timestamp(
                    now.timestamp() - self.table_reset_password_ttl(),
                    now.timestamp_subsec_nanos(),
                )
                .ok_or_else(|| Error::msg("timestamp is out of range."))?
            }))
            .await?)
    }

    pub async fn delete_password_reset(&self, id: &Uuid) -> Result<()> {
        let _ = self.delete_expired_password_resets().await;
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }

    async fn delete_expired_password_resets(&self) -> Result<()> {
        self.execute(
            sqlx::query(DELETE_EXPIRE).bind(
                Utc::now()
                    .checked_sub_signed(
                        Duration::try_seconds(*self.table_reset_password_ttl()).ok_or_else(
                            || Error::msg("table_reset_password_ttl is out of range."),
                        )?,
                    )
                    .ok_or_else(|| Error::msg("table_reset_password_ttl is out of range."))?,
            ),
        )
        .await?;
        Ok(())
    }
}
