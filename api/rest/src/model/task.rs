use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct InsertOneTaskReqPath {
    project_id: Uuid,
}

impl InsertOneTaskReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }
}

#[derive(Deserialize)]
pub struct InsertOneTaskReqJson {
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl InsertOneTaskReqJson {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn status(&self) -> &Option<String> {
        &self.status
    }

    pub fn priority(&self) -> &Option<String> {
        &self.priority
    }

    pub fn due_date(&self) -> &Option<DateTime<Utc>> {
        &self.due_date
    }
}

#[derive(Deserialize)]
pub struct FindOneTaskReqPath {
    project_id: Uuid,
    task_id: Uuid,
}

impl FindOneTaskReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }

    pub fn task_id(&self) -> &Uuid {
        &self.task_id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneTaskReqPath {
    project_id: Uuid,
    task_id: Uuid,
}

impl UpdateOneTaskReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }

    pub fn task_id(&self) -> &Uuid {
        &self.task_id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneTaskReqJson {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl UpdateOneTaskReqJson {
    pub fn title(&self) -> &Option<String> {
        &self.title
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn status(&self) -> &Option<String> {
        &self.status
    }

    pub fn priority(&self) -> &Option<String> {
        &self.priority
    }

    pub fn due_date(&self) -> &Option<DateTime<Utc>> {
        &self.due_date
    }

    pub fn is_all_none(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneTaskReqPath {
    project_id: Uuid,
    task_id: Uuid,
}

impl DeleteOneTaskReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }

    pub fn task_id(&self) -> &Uuid {
        &self.task_id
    }
}

#[derive(Deserialize)]
pub struct FindManyTaskReqPath {
    project_id: Uuid,
}

impl FindManyTaskReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }
}

#[derive(Serialize)]
pub struct TaskResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    project_id: Uuid,
    created_by: Uuid,
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    due_date: Option<DateTime<Utc>>,
}

impl TaskResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        project_id: &Uuid,
        created_by: &Uuid,
        title: &str,
        description: &Option<String>,
        status: &str,
        priority: &str,
        due_date: &Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            project_id: *project_id,
            created_by: *created_by,
            title: title.to_owned(),
            description: description.to_owned(),
            status: status.to_owned(),
            priority: priority.to_owned(),
            due_date: *due_date,
        }
    }
}

#[derive(Serialize)]
pub struct TaskIDResJson {
    id: Uuid,
}

impl TaskIDResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
