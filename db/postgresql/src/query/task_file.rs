use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::task_file::TaskFileModel};

const INSERT: &str = "INSERT INTO \"task_files\" (\"id\", \"created_at\", \"updated_at\", \"task_id\", \"created_by\", \"file_name\", \"content_type\", \"size\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"task_id\", \"created_by\", \"file_name\", \"content_type\", \"size\" FROM \"task_files\" WHERE \"id\" = $1";
const SELECT_MANY_BY_TASK_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"task_id\", \"created_by\", \"file_name\", \"content_type\", \"size\" FROM \"task_files\" WHERE \"task_id\" = $1 ORDER BY \"created_at\" DESC";
const DELETE: &str = "DELETE FROM \"task_files\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    tb_log::info(Some("🔧"), "PostgreSQL: Setting up task_files table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"task_files\" (\"id\" uuid, \"created_at\" timestamptz, \"updated_at\" timestamptz, \"task_id\" uuid, \"created_by\" uuid, \"file_name\" text, \"content_type\" text, \"size\" bigint, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_MANY_BY_TASK_ID),
        pool.prepare(DELETE),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_task_file(&self, value: &TaskFileModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.task_id())
                .bind(value.created_by())
                .bind(value.file_name())
                .bind(value.content_type())
                .bind(value.size()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_task_file(&self, id: &Uuid) -> Result<TaskFileModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_task_files_by_task_id(
        &self,
        task_id: &Uuid,
    ) -> Result<Vec<TaskFileModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_TASK_ID).bind(task_id))
            .await?)
    }

    pub async fn delete_task_file(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
