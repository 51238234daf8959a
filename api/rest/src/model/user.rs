use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct UpdateOneUserReqJson {
    full_name: Option<String>,
    password: Option<String>,
}

impl UpdateOneUserReqJson {
    pub fn full_name(&self) -> &Option<String> {
        &self.full_name
    }

    pub fn password(&self) -> &Option<String> {
        &self.password
    }

    pub fn is_all_none(&self) -> bool {
        self.full_name.is_none() && self.password.is_none()
    }
}

#[derive(Serialize)]
pub struct UserResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
    full_name: String,
}

impl UserResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        email: &str,
        full_name: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            email: email.to_owned(),
            full_name: full_name.to_owned(),
        }
    }
}

#[derive(Serialize)]
pub struct UserIDResJson {
    id: Uuid,
}

impl UserIDResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
