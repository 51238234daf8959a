use serde::Deserialize;

#[derive(Deserialize)]
pub struct SubscriptionReqPath {
    target: String,
}

impl SubscriptionReqPath {
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[derive(Deserialize)]
pub struct SubscriptionReqQuery {
    token: String,
}

impl SubscriptionReqQuery {
    pub fn token(&self) -> &str {
        &self.token
    }
}
