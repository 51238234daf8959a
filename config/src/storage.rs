use serde::Deserialize;

#[derive(Deserialize)]
pub struct StorageConfig {
    path: String,
}

impl StorageConfig {
    pub fn path(&self) -> &str {
        &self.path
    }
}
