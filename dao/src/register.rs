use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use tb_db_postgresql::model::registration::RegistrationModel as RegistrationPostgresModel;
use uuid::Uuid;

use crate::Db;

pub struct RegistrationDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
    password_hash: String,
    full_name: String,
    code: String,
}

impl RegistrationDao {
    pub fn new(email: &str, password_hash: &str, full_name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            full_name: full_name.to_owned(),
            code: Self::generate_code(),
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

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_password_hash(&mut self, password_hash: &str) {
        self.password_hash = password_hash.to_owned();
    }

    pub fn set_full_name(&mut self, full_name: &str) {
        self.full_name = full_name.to_owned();
    }

    pub fn regenerate_code(&mut self) {
        self.code = Self::generate_code();
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_registration(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_registration(id).await?,
            )),
        }
    }

    pub async fn db_select_by_email(db: &Db, email: &str) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_registration_by_email(email).await?,
            )),
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_registration(&self.to_postgresdb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_registration(id).await,
        }
    }

    fn generate_code() -> String {
        rand::thread_rng().gen_range(100000..=999999).to_string()
    }

    fn from_postgresdb_model(model: &RegistrationPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
            full_name: model.full_name().to_owned(),
            code: model.code().to_owned(),
        }
    }

    fn to_postgresdb_model(&self) -> RegistrationPostgresModel {
        RegistrationPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.email,
            &self.password_hash,
            &self.full_name,
            &self.code,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_six_decimal_digits() {
        let registration_data = RegistrationDao::new("user@example.com", "hash", "Jane Doe");

        assert_eq!(registration_data.code().len(), 6);
        assert!(registration_data
            .code()
            .chars()
            .all(|char| char.is_ascii_digit()));
    }

    #[test]
    fn regenerate_code_keeps_the_format() {
        let mut registration_data = RegistrationDao::new("user@example.com", "hash", "Jane Doe");

        registration_data.regenerate_code();

        assert_eq!(registration_data.code().len(), 6);
        assert!(registration_data
            .code()
            .chars()
            .all(|char| char.is_ascii_digit()));
    }
}
