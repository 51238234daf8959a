use std::sync::{mpsc::Sender, Arc};

use tb_api_websocket::handler::WebSocketHandler;
use tb_dao::Db;
use tb_hash_argon2::argon2::Argon2Hash;
use tb_mailer::MailPayload;
use tb_token_jwt::token::JwtToken;

pub struct ApiRestCtx {
    hash: ApiRestHashCtx,
    token: ApiRestTokenCtx,
    mailer: Option<ApiRestMailerCtx>,
    dao: ApiRestDaoCtx,
    ws: ApiRestWsCtx,
    registration: bool,
    registration_ttl: u32,
    reset_password_ttl: u32,
    storage_path: String,
}

impl ApiRestCtx {
    pub fn new(
        hash: ApiRestHashCtx,
        token: ApiRestTokenCtx,
        mailer: Option<ApiRestMailerCtx>,
        dao: ApiRestDaoCtx,
        ws: ApiRestWsCtx,
        registration: bool,
        registration_ttl: u32,
        reset_password_ttl: u32,
        storage_path: String,
    ) -> Self {
        Self {
            hash,
            token,
            mailer,
            dao,
            ws,
            registration,
            registration_ttl,
            reset_password_ttl,
            storage_path,
        }
    }

    pub fn hash(&self) -> &ApiRestHashCtx {
        &self.hash
    }

    pub fn token(&self) -> &ApiRestTokenCtx {
        &self.token
    }

    pub fn mailer(&self) -> &Option<ApiRestMailerCtx> {
        &self.mailer
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }

    pub fn ws(&self) -> &ApiRestWsCtx {
        &self.ws
    }

    pub fn registration(&self) -> &bool {
        &self.registration
    }

    pub fn registration_ttl(&self) -> &u32 {
        &self.registration_ttl
    }

    pub fn reset_password_ttl(&self) -> &u32 {
        &self.reset_password_ttl
    }

    pub fn storage_path(&self) -> &str {
        &self.storage_path
    }
}

pub struct ApiRestHashCtx {
    argon2: Argon2Hash,
}

impl ApiRestHashCtx {
    pub fn new(argon2: Argon2Hash) -> Self {
        Self { argon2 }
    }

    pub fn argon2(&self) -> &Argon2Hash {
        &self.argon2
    }
}

pub struct ApiRestTokenCtx {
    jwt: JwtToken,
}

impl ApiRestTokenCtx {
    pub fn new(jwt: JwtToken) -> Self {
        Self { jwt }
    }

    pub fn jwt(&self) -> &JwtToken {
        &self.jwt
    }
}

pub struct ApiRestMailerCtx {
    sender: Sender<MailPayload>,
}

impl ApiRestMailerCtx {
    pub fn new(sender: Sender<MailPayload>) -> Self {
        Self { sender }
    }

    pub fn sender(&self) -> &Sender<MailPayload> {
        &self.sender
    }
}

pub struct ApiRestDaoCtx {
    db: Arc<Db>,
}

impl ApiRestDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}

pub struct ApiRestWsCtx {
    handler: WebSocketHandler,
}

impl ApiRestWsCtx {
    pub fn new(handler: WebSocketHandler) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &WebSocketHandler {
        &self.handler
    }
}
