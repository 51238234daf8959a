use anyhow::{Error, Result};
use chrono::{DateTime, Utc};
use futures::future;
use strum_macros::EnumIter;
use tb_db_postgresql::model::task::TaskModel as TaskPostgresModel;
use uuid::Uuid;

use crate::{task_file::TaskFileDao, Db};

#[derive(EnumIter, PartialEq, Clone, Copy, Debug)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn to_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(str: &str) -> Result<Self> {
        match str {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(Error::msg(format!("Unknown task status '{str}'"))),
        }
    }
}

#[derive(EnumIter, PartialEq, Clone, Copy, Debug)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn to_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(str: &str) -> Result<Self> {
        match str {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(Error::msg(format!("Unknown task priority '{str}'"))),
        }
    }
}

pub struct TaskDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    project_id: Uuid,
    created_by: Uuid,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
}

impl TaskDao {
    pub fn new(
        project_id: &Uuid,
        created_by: &Uuid,
        title: &str,
        description: &Option<String>,
        status: &TaskStatus,
        priority: &TaskPriority,
        due_date: &Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            project_id: *project_id,
            created_by: *created_by,
            title: title.to_owned(),
            description: description.to_owned(),
            status: *status,
            priority: *priority,
            due_date: *due_date,
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

    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }

    pub fn created_by(&self) -> &Uuid {
        &self.created_by
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn status(&self) -> &TaskStatus {
        &self.status
    }

    pub fn priority(&self) -> &TaskPriority {
        &self.priority
    }

    pub fn due_date(&self) -> &Option<DateTime<Utc>> {
        &self.due_date
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_description(&mut self, description: &Option<String>) {
        self.description = description.to_owned();
    }

    pub fn set_status(&mut self, status: &TaskStatus) {
        self.status = *status;
    }

    pub fn set_priority(&mut self, priority: &TaskPriority) {
        self.priority = *priority;
    }

    pub fn set_due_date(&mut self, due_date: &Option<DateTime<Utc>>) {
        self.due_date = *due_date;
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_task(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Self::from_postgresdb_model(&db.select_task(id).await?),
        }
    }

    pub async fn db_select_many_by_project_id(db: &Db, project_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let tasks = db.select_many_tasks_by_project_id(project_id).await?;
                let mut tasks_data = Vec::with_capacity(tasks.len());
                for task in &tasks {
                    tasks_data.push(Self::from_postgresdb_model(task)?);
                }
                Ok(tasks_data)
            }
        }
    }

    pub async fn db_select_many_by_created_by(db: &Db, created_by: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let tasks = db.select_many_tasks_by_created_by(created_by).await?;
                let mut tasks_data = Vec::with_capacity(tasks.len());
                for task in &tasks {
                    tasks_data.push(Self::from_postgresdb_model(task)?);
                }
                Ok(tasks_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_task(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, storage_path: &str, id: &Uuid) -> Result<()> {
        let files_data = TaskFileDao::db_select_many_by_task_id(db, id).await?;

        let mut remove_files = Vec::with_capacity(files_data.len());
        for file_data in &files_data {
            remove_files.push(TaskFileDao::db_delete(db, storage_path, file_data.id()));
        }
        future::join_all(remove_files).await;

        match db {
            Db::PostgresqlDb(db) => db.delete_task(id).await,
        }
    }

    fn from_postgresdb_model(model: &TaskPostgresModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            project_id: *model.project_id(),
            created_by: *model.created_by(),
            title: model.title().to_owned(),
            description: model.description().to_owned(),
            status: TaskStatus::from_str(model.status())?,
            priority: TaskPriority::from_str(model.priority())?,
            due_date: *model.due_date(),
        })
    }

    fn to_postgresdb_model(&self) -> TaskPostgresModel {
        TaskPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.project_id,
            &self.created_by,
            &self.title,
            &self.description,
            self.status.to_str(),
            self.priority.to_str(),
            &self.due_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in TaskStatus::iter() {
            assert_eq!(TaskStatus::from_str(status.to_str()).unwrap(), status);
        }
    }

    #[test]
    fn priority_round_trips_through_str() {
        for priority in TaskPriority::iter() {
            assert_eq!(TaskPriority::from_str(priority.to_str()).unwrap(), priority);
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(TaskStatus::from_str("done").is_err());
        assert!(TaskPriority::from_str("urgent").is_err());
    }

    #[test]
    fn setters_replace_optional_fields() {
        let project_id = Uuid::now_v7();
        let created_by = Uuid::now_v7();
        let mut task_data = TaskDao::new(
            &project_id,
            &created_by,
            "Write docs",
            &None,
            &TaskStatus::Todo,
            &TaskPriority::Medium,
            &None,
        );

        task_data.set_description(&Some("User guide".to_owned()));
        task_data.set_status(&TaskStatus::InProgress);
        task_data.set_due_date(&None);

        assert_eq!(task_data.description().as_deref(), Some("User guide"));
        assert_eq!(task_data.status(), &TaskStatus::InProgress);
        assert!(task_data.due_date().is_none());
    }
}
