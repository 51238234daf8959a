use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct TaskFileModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    task_id: Uuid,
    created_by: Uuid,
    file_name: String,
    content_type: String,
    size: i64,
}

impl TaskFileModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        task_id: &Uuid,
        created_by: &Uuid,
        file_name: &str,
        content_type: &str,
        size: &i64,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
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
}
