use anyhow::Result;
use chrono::{DateTime, Utc};
use tb_db_postgresql::model::user::UserModel as UserPostgresModel;
use uuid::Uuid;

use crate::{project::ProjectDao, Db};

pub struct UserDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
    password_hash: String,
    full_name: String,
}

impl UserDao {
    pub fn new(email: &str, password_hash: &str, full_name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            full_name: full_name.to_owned(),
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

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_password_hash(&mut self, password_hash: &str) {
        self.password_hash = password_hash.to_owned();
    }

    pub fn set_full_name(&mut self, full_name: &str) {
        self.full_name = full_name.to_owned();
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_user(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(&db.select_user(id).await?)),
        }
    }

    pub async fn db_select_by_email(db: &Db, email: &str) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_user_by_email(email).await?,
            )),
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_user(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, storage_path: &str, id: &Uuid) -> Result<()> {
        let projects_data = ProjectDao::db_select_many_by_owner_id(db, id).await?;
        for project_data in &projects_data {
            ProjectDao::db_delete(db, storage_path, project_data.id()).await?;
        }

        match db {
            Db::PostgresqlDb(db) => db.delete_user(id).await,
        }
    }

    fn from_postgresdb_model(model: &UserPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
            full_name: model.full_name().to_owned(),
        }
    }

    fn to_postgresdb_model(&self) -> UserPostgresModel {
        UserPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.email,
            &self.password_hash,
            &self.full_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_with_equal_timestamps() {
        let user_data = UserDao::new("user@example.com", "hash", "Jane Doe");

        assert_eq!(user_data.created_at(), user_data.updated_at());
        assert_eq!(user_data.email(), "user@example.com");
        assert_eq!(user_data.full_name(), "Jane Doe");
    }
}
