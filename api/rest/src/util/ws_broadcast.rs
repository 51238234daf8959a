use anyhow::Result;
use serde::Serialize;
use tb_api_websocket::{
    handler::WebSocketHandler,
    message::{Message, MessageKind, Target},
};
use uuid::Uuid;

pub fn websocket_broadcast<T>(
    handler: &WebSocketHandler,
    target: Target,
    owner: Uuid,
    kind: MessageKind,
    data: T,
) -> Result<()>
where
    T: Serialize,
{
    let data = serde_json::to_value(data)?;
    handler.broadcast(Message::new(target, owner, kind, data))
}
