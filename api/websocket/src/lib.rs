use std::time::Duration;

use ahash::{HashMap, HashMapExt, HashSet};
use anyhow::Result;
use broadcaster::WebSocketBroadcaster;
use connection::{Connection, WebSocketConnection};
use handler::WebSocketHandler;
use message::{Message, Target};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

mod connection;

pub mod broadcaster;
pub mod handler;
pub mod message;

pub type ConnectionId = Uuid;
pub type UserId = Uuid;

pub struct ApiWebSocketServer {
    sessions: HashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
    user_sessions: HashMap<ConnectionId, UserId>,
    subscribers: HashMap<Target, HashSet<ConnectionId>>,

    connection_rx: mpsc::UnboundedReceiver<Connection>,
    broadcast_rx: mpsc::UnboundedReceiver<Message>,
}

impl ApiWebSocketServer {
    pub fn new(
        heartbeat_interval: &Duration,
        client_timeout: &Duration,
    ) -> (Self, WebSocketHandler, WebSocketBroadcaster) {
        tb_log::info(Some("⚡"), "ApiWebSocketServer: Initializing component");

        let (connection_tx, connection_rx) = mpsc::unbounded_channel();
        let (broadcast_tx, broadcast_rx) = mpsc::unbounded_channel();

        let connection = WebSocketConnection::new(connection_tx);
        let publisher = WebSocketBroadcaster::new(broadcast_tx);
        let handler = WebSocketHandler::new(
            connection,
            publisher.clone(),
            heartbeat_interval,
            client_timeout,
        );

        (
            Self {
                sessions: HashMap::new(),
                user_sessions: HashMap::new(),
                subscribers: HashMap::new(),

                connection_rx,
                broadcast_rx,
            },
            handler,
            publisher,
        )
    }

    pub async fn run(mut self, cancel_token: CancellationToken) -> Result<()> {
        tb_log::info(Some("💫"), "ApiWebSocketServer: Running component");

        Ok(tokio::spawn((|| async move {
            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        break;
                    }
                    _ = tokio::signal::ctrl_c() => {
                        break;
                    }
                    connection = self.connection_rx.recv() => {
                        if let Some(connection) = connection {
                            match connection {
                                Connection::Connect {
                                    user_id,
                                    target,
                                    connection_id,
                                    connection_tx,
                                } => self.insert_connection(
                                    user_id,
                                    target,
                                    connection_id,
                                    connection_tx,
                                ),
                                Connection::Disconnect(connection_id) => self.disconnect(connection_id),
                            }
                        } else {
                            break;
                        }
                    }
                    broadcast = self.broadcast_rx.recv() => {
                        if let Some(message) = broadcast {
                            self.broadcast(message);
                        } else {
                            break;
                        }
                    }
                }
            }

            tb_log::info(None, "ApiWebSocketServer: Shutting down component");
        })())
        .await?)
    }

    fn insert_connection(
        &mut self,
        user_id: UserId,
        target: Target,
        connection_id: ConnectionId,
        connection_tx: mpsc::UnboundedSender<Message>,
    ) {
        self.sessions.insert(connection_id, connection_tx);
        self.user_sessions.insert(connection_id, user_id);
        self.subscribers
            .entry(target)
            .or_default()
            .insert(connection_id);
    }

    fn disconnect(&mut self, connection_id: ConnectionId) {
        if self.sessions.remove(&connection_id).is_some() {
            self.user_sessions.remove(&connection_id);
            for connection_ids in self.subscribers.values_mut() {
                connection_ids.remove(&connection_id);
            }
        }
    }

    fn broadcast(&self, message: Message) {
        if let Some(connection_ids) = self.subscribers.get(&message.target) {
            for connection_id in connection_ids {
                if let Some(user_id) = self.user_sessions.get(connection_id) {
                    if &message.owner != user_id {
                        continue;
                    }
                    if let Some(connection_tx) = self.sessions.get(connection_id) {
                        let _ = connection_tx.send(message.clone());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use crate::message::MessageKind;

    use super::*;

    fn server() -> ApiWebSocketServer {
        ApiWebSocketServer::new(&Duration::from_secs(10), &Duration::from_secs(30)).0
    }

    #[tokio::test]
    async fn broadcast_reaches_only_the_owning_subscriber() {
        let mut server = server();

        let owner_id = Uuid::now_v7();
        let other_id = Uuid::now_v7();

        let (owner_tx, mut owner_rx) = mpsc::unbounded_channel();
        let (other_tx, mut other_rx) = mpsc::unbounded_channel();

        server.insert_connection(owner_id, Target::Projects, Uuid::now_v7(), owner_tx);
        server.insert_connection(other_id, Target::Projects, Uuid::now_v7(), other_tx);

        server.broadcast(Message::new(
            Target::Projects,
            owner_id,
            MessageKind::InsertOne,
            json!({"title": "Website Redesign"}),
        ));

        assert!(owner_rx.try_recv().is_ok());
        assert!(other_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn broadcast_is_scoped_to_the_subscribed_target() {
        let mut server = server();

        let user_id = Uuid::now_v7();
        let (tx, mut rx) = mpsc::unbounded_channel();

        server.insert_connection(user_id, Target::Tasks, Uuid::now_v7(), tx);

        server.broadcast(Message::new(
            Target::Projects,
            user_id,
            MessageKind::UpdateOne,
            json!({}),
        ));

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn disconnected_sessions_receive_nothing() {
        let mut server = server();

        let user_id = Uuid::now_v7();
        let connection_id = Uuid::now_v7();
        let (tx, mut rx) = mpsc::unbounded_channel();

        server.insert_connection(user_id, Target::Tasks, connection_id, tx);
        server.disconnect(connection_id);

        server.broadcast(Message::new(
            Target::Tasks,
            user_id,
            MessageKind::DeleteOne,
            json!({}),
        ));

        assert!(rx.try_recv().is_err());
    }
}
