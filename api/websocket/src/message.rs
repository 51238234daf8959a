use serde::Serialize;

use crate::UserId;

#[derive(Serialize, Clone)]
pub struct Message {
    #[serde(skip_serializing)]
    pub target: Target,
    #[serde(skip_serializing)]
    pub owner: UserId,

    kind: MessageKind,
    data: serde_json::Value,
}

impl Message {
    pub fn new(target: Target, owner: UserId, kind: MessageKind, data: serde_json::Value) -> Self {
        Self {
            target,
            owner,
            kind,
            data,
        }
    }
}

#[derive(Eq, Hash, PartialEq, Clone, Copy)]
pub enum Target {
    Projects,
    Tasks,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    InsertOne,
    UpdateOne,
    DeleteOne,
}
