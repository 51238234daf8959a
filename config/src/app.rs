use serde::Deserialize;

#[derive(Deserialize)]
pub struct AppConfig {
    mode: String,
}

impl AppConfig {
    pub fn mode(&self) -> &str {
        &self.mode
    }
}
