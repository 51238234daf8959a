use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct InsertOneProjectReqJson {
    title: String,
    description: Option<String>,
    status: Option<String>,
}

impl InsertOneProjectReqJson {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn status(&self) -> &Option<String> {
        &self.status
    }
}

#[derive(Deserialize)]
pub struct FindOneProjectReqPath {
    project_id: Uuid,
}

impl FindOneProjectReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneProjectReqPath {
    project_id: Uuid,
}

impl UpdateOneProjectReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneProjectReqJson {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

impl UpdateOneProjectReqJson {
    pub fn title(&self) -> &Option<String> {
        &self.title
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn status(&self) -> &Option<String> {
        &self.status
    }

    pub fn is_all_none(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneProjectReqPath {
    project_id: Uuid,
}

impl DeleteOneProjectReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }
}

#[derive(Serialize)]
pub struct ProjectResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_id: Uuid,
    title: String,
    description: Option<String>,
    status: String,
}

impl ProjectResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        owner_id: &Uuid,
        title: &str,
        description: &Option<String>,
        status: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            owner_id: *owner_id,
            title: title.to_owned(),
            description: description.to_owned(),
            status: status.to_owned(),
        }
    }
}

#[derive(Serialize)]
pub struct ProjectIDResJson {
    id: Uuid,
}

impl ProjectIDResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
