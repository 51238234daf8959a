use anyhow::Result;
use chrono::{DateTime, Utc};
use tb_db_postgresql::model::task_file::TaskFileModel as TaskFilePostgresModel;
use uuid::Uuid;

use crate::Db;

pub struct TaskFileDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    task_id: Uuid,
    created_by: Uuid,
    file_name: String,
    content_type: String,
    size: i64,
}

impl TaskFileDao {
    pub fn new(
        task_id: &Uuid,
        created_by: &Uuid,
        file_name: &str,
        content_type: &str,
        size: &i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            task_id: *task_id,
            created_by: *created_by,
            file_name: file_name.to_owned(),
            content_type: content_type.to_owned(),
            size: *size,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub fn task_id(&self) -> &Uuid {
        &self.task_id
    }

    pub fn created_by(&self) -> &Uuid {
        &self.created_by
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> &i64 {
        &self.size
    }

    pub fn full_path(storage_path: &str, id: &Uuid) -> String {
        format!("{storage_path}/{id}")
    }

    pub async fn save(&self, db: &Db, storage_path: &str, source_path: &str) -> Result<()> {
        tokio::fs::create_dir_all(storage_path).await?;
        tokio::fs::copy(source_path, Self::full_path(storage_path, &self.id)).await?;

        if let Err(err) = self.db_insert(db).await {
            let _ = tokio::fs::remove_file(Self::full_path(storage_path, &self.id)).await;
            return Err(err);
        }

        Ok(())
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_task_file(id).await?,
            )),
        }
    }

    pub async fn db_select_many_by_task_id(db: &Db, task_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let files = db.select_many_task_files_by_task_id(task_id).await?;
                let mut files_data = Vec::with_capacity(files.len());
                for file in &files {
                    files_data.push(Self::from_postgresdb_model(file));
                }
                Ok(files_data)
            }
        }
    }

    pub async fn db_delete(db: &Db, storage_path: &str, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_task_file(id).await?,
        }

        let _ = tokio::fs::remove_file(Self::full_path(storage_path, id)).await;

        Ok(())
    }

    async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_task_file(&self.to_postgresdb_model()).await,
        }
    }

    fn from_postgresdb_model(model: &TaskFilePostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            task_id: *model.task_id(),
            created_by: *model.created_by(),
            file_name: model.file_name().to_owned(),
            content_type: model.content_type().to_owned(),
            size: *model.size(),
        }
    }

    fn to_postgresdb_model(&self) -> TaskFilePostgresModel {
        TaskFilePostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.task_id,
            &self.created_by,
            &self.file_name,
            &self.content_type,
            &self.size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_path_joins_storage_path_and_id() {
        let id = Uuid::now_v7();

        assert_eq!(
            TaskFileDao::full_path("./data/files", &id),
            format!("./data/files/{id}")
        );
    }
}
