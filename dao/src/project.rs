use anyhow::{Error, Result};
use chrono::{DateTime, Utc};
use strum_macros::EnumIter;
use tb_db_postgresql::model::project::ProjectModel as ProjectPostgresModel;
use uuid::Uuid;

use crate::{task::TaskDao, Db};

#[derive(EnumIter, PartialEq, Clone, Copy, Debug)]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn to_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    pub fn from_str(str: &str) -> Result<Self> {
        match str {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(Error::msg(format!("Unknown project status '{str}'"))),
        }
    }
}

pub struct ProjectDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_id: Uuid,
    title: String,
    description: Option<String>,
    status: ProjectStatus,
}

impl ProjectDao {
    pub fn new(
        owner_id: &Uuid,
        title: &str,
        description: &Option<String>,
        status: &ProjectStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            owner_id: *owner_id,
            title: title.to_owned(),
            description: description.to_owned(),
            status: *status,
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

    pub fn owner_id(&self) -> &Uuid {
        &self.owner_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn status(&self) -> &ProjectStatus {
        &self.status
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_description(&mut self, description: &Option<String>) {
        self.description = description.to_owned();
    }

    pub fn set_status(&mut self, status: &ProjectStatus) {
        self.status = *status;
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_project(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Self::from_postgresdb_model(&db.select_project(id).await?),
        }
    }

    pub async fn db_select_many_by_owner_id(db: &Db, owner_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let projects = db.select_many_projects_by_owner_id(owner_id).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_postgresdb_model(project)?);
                }
                Ok(projects_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_project(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, storage_path: &str, id: &Uuid) -> Result<()> {
        let tasks_data = TaskDao::db_select_many_by_project_id(db, id).await?;
        for task_data in &tasks_data {
            TaskDao::db_delete(db, storage_path, task_data.id()).await?;
        }

        match db {
            Db::PostgresqlDb(db) => db.delete_project(id).await,
        }
    }

    fn from_postgresdb_model(model: &ProjectPostgresModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            owner_id: *model.owner_id(),
            title: model.title().to_owned(),
            description: model.description().to_owned(),
            status: ProjectStatus::from_str(model.status())?,
        })
    }

    fn to_postgresdb_model(&self) -> ProjectPostgresModel {
        ProjectPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.owner_id,
            &self.title,
            &self.description,
            self.status.to_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in ProjectStatus::iter() {
            assert_eq!(ProjectStatus::from_str(status.to_str()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(ProjectStatus::from_str("paused").is_err());
    }

    #[test]
    fn new_project_keeps_the_given_fields() {
        let owner_id = Uuid::now_v7();
        let project_data = ProjectDao::new(
            &owner_id,
            "Website Redesign",
            &Some("Redesign company website".to_owned()),
            &ProjectStatus::Active,
        );

        assert_eq!(project_data.owner_id(), &owner_id);
        assert_eq!(project_data.title(), "Website Redesign");
        assert_eq!(
            project_data.description().as_deref(),
            Some("Redesign company website")
        );
        assert_eq!(project_data.status(), &ProjectStatus::Active);
        assert_eq!(project_data.created_at(), project_data.updated_at());
    }
}
