use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthConfig {
    registration: bool,
    registration_ttl: u32,
    reset_password_ttl: u32,
}

impl AuthConfig {
    pub fn registration(&self) -> &bool {
        &self.registration
    }

    pub fn registration_ttl(&self) -> &u32 {
        &self.registration_ttl
    }

    pub fn reset_password_ttl(&self) -> &u32 {
        &self.reset_password_ttl
    }
}
