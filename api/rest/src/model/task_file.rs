use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct InsertOneTaskFileReqPath {
    project_id: Uuid,
    task_id: Uuid,
}

impl InsertOneTaskFileReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }

    pub fn task_id(&self) -> &Uuid {
        &self.task_id
    }
}

#[derive(MultipartForm)]
pub struct InsertOneTaskFileReqForm {
    #[multipart(limit = "10MiB")]
    pub file: TempFile,
}

#[derive(Deserialize)]
pub struct FindOneTaskFileReqPath {
    project_id: Uuid,
    task_id: Uuid,
    file_id: Uuid,
}

impl FindOneTaskFileReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }

    pub fn task_id(&self) -> &Uuid {
        &self.task_id
    }

    pub fn file_id(&self) -> &Uuid {
        &self.file_id
    }
}

#[derive(Deserialize)]
pub struct DeleteOneTaskFileReqPath {
    project_id: Uuid,
    task_id: Uuid,
    file_id: Uuid,
}

impl DeleteOneTaskFileReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }

    pub fn task_id(&self) -> &Uuid {
        &self.task_id
    }

    pub fn file_id(&self) -> &Uuid {
        &self.file_id
    }
}

#[derive(Deserialize)]
pub struct FindManyTaskFileReqPath {
    project_id: Uuid,
    task_id: Uuid,
}

impl FindManyTaskFileReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }

    pub fn task_id(&self) -> &Uuid {
        &self.task_id
    }
}

#[derive(Serialize)]
pub struct TaskFileResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    task_id: Uuid,
    file_name: String,
    content_type: String,
    size: i64,
}

impl TaskFileResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        task_id: &Uuid,
        file_name: &str,
        content_type: &str,
        size: &i64,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            task_id: *task_id,
            file_name: file_name.to_owned(),
            content_type: content_type.to_owned(),
            size: *size,
        }
    }
}

#[derive(Serialize)]
pub struct TaskFileIDResJson {
    id: Uuid,
}

impl TaskFileIDResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
