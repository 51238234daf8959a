use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::task::TaskModel};

const INSERT: &str = "INSERT INTO \"tasks\" (\"id\", \"created_at\", \"updated_at\", \"project_id\", \"created_by\", \"title\", \"description\", \"status\", \"priority\", \"due_date\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"project_id\", \"created_by\", \"title\", \"description\", \"status\", \"priority\", \"due_date\" FROM \"tasks\" WHERE \"id\" = $1";
const SELECT_MANY_BY_PROJECT_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"project_id\", \"created_by\", \"title\", \"description\", \"status\", \"priority\", \"due_date\" FROM \"tasks\" WHERE \"project_id\" = $1 ORDER BY \"created_at\" DESC";
const SELECT_MANY_BY_CREATED_BY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"project_id\", \"created_by\", \"title\", \"description\", \"status\", \"priority\", \"due_date\" FROM \"tasks\" WHERE \"created_by\" = $1 ORDER BY \"created_at\" DESC";
const UPDATE: &str = "UPDATE \"tasks\" SET \"updated_at\" = $1, \"title\" = $2, \"description\" = $3, \"status\" = $4, \"priority\" = $5, \"due_date\" = $6 WHERE \"id\" = $7";
const DELETE: &str = "DELETE FROM \"tasks\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    tb_log::info(Some("🔧"), "PostgreSQL: Setting up tasks table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"tasks\" (\"id\" uuid, \"created_at\" timestamptz, \"updated_at\" timestamptz, \"project_id\" uuid, \"created_by\" uuid, \"title\" text, \"description\" text, \"status\" text, \"priority\" text, \"due_date\" timestamptz, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_MANY_BY_PROJECT_ID),
        pool.prepare(SELECT_MANY_BY_CREATED_BY),
        pool.prepare(UPDATE),
        pool.prepare(DELETE),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_task(&self, value: &TaskModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.project_id())
                .bind(value.created_by())
                .bind(value.title())
                .bind(value.description())
                .bind(value.status())
                .bind(value.priority())
                .bind(value.due_date()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_task(&self, id: &Uuid) -> Result<TaskModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_tasks_by_project_id(
        &self,
        project_id: &Uuid,
    ) -> Result<Vec<TaskModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_PROJECT_ID).bind(project_id))
            .await?)
    }

    pub async fn select_many_tasks_by_created_by(
        &self,
        created_by: &Uuid,
    ) -> Result<Vec<TaskModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_CREATED_BY).bind(created_by))
            .await?)
    }

    pub async fn update_task(&self, value: &TaskModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.description())
                .bind(value.status())
                .bind(value.priority())
                .bind(value.due_date())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
