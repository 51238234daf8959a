use std::sync::Arc;

use tb_api_rest::{
    context::{
        ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestMailerCtx, ApiRestTokenCtx, ApiRestWsCtx,
    },
    ApiRestServer,
};
use tb_api_websocket::ApiWebSocketServer;
use tb_dao::Db;
use tb_db_postgresql::db::PostgresDb;
use tb_hash_argon2::argon2::Argon2Hash;
use tb_mailer::Mailer;
use tb_token_jwt::token::JwtToken;
use tokio_util::sync::CancellationToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = tb_config::from_path(&config_path);

    tb_log::init(config.log().display_level(), config.log().level_filter());

    tb_log::info(Some("🚀"), "[Taskbase] Starting");

    let argon2_hash = Argon2Hash::new(
        config.hash().argon2().algorithm(),
        config.hash().argon2().version(),
        config.hash().argon2().salt(),
    );

    let jwt_token = JwtToken::new(
        config.token().jwt().secret(),
        config.token().jwt().expiry_duration(),
    );

    let (mailer, mailer_sender) = match config.mailer() {
        Some(config_mailer) => {
            let (mailer, mailer_sender) = Mailer::new(
                config_mailer.smtp_host(),
                config_mailer.smtp_username(),
                config_mailer.smtp_password(),
                config_mailer.sender_name(),
                config_mailer.sender_email(),
            );
            (Some(mailer), Some(mailer_sender))
        }
        None => (None, None),
    };

    let postgres = config.db().postgres();
    let db = Arc::new(Db::PostgresqlDb(
        PostgresDb::new(
            postgres.user(),
            postgres.password(),
            postgres.host(),
            postgres.port(),
            postgres.db_name(),
            postgres.max_connections(),
            &i64::from(*config.auth().registration_ttl()),
            &i64::from(*config.auth().reset_password_ttl()),
        )
        .await,
    ));

    let (api_websocket_server, websocket_handler, _websocket_broadcaster) = ApiWebSocketServer::new(
        config.api().websocket().heartbeat_interval(),
        config.api().websocket().client_timeout(),
    );

    let api_rest_server = ApiRestServer::new(
        config.app().mode(),
        config.api().rest().host(),
        config.api().rest().port(),
        config.api().rest().allowed_origin(),
        ApiRestCtx::new(
            ApiRestHashCtx::new(argon2_hash),
            ApiRestTokenCtx::new(jwt_token),
            mailer_sender.map(ApiRestMailerCtx::new),
            ApiRestDaoCtx::new(db),
            ApiRestWsCtx::new(websocket_handler),
            *config.auth().registration(),
            *config.auth().registration_ttl(),
            *config.auth().reset_password_ttl(),
            config.storage().path().to_owned(),
        ),
    );

    let cancel_token = CancellationToken::new();

    let mailer_run = async {
        match mailer {
            Some(mailer) => mailer.run(cancel_token.clone()).await,
            None => Mailer::run_none().await,
        }
    };

    match tokio::try_join!(
        mailer_run,
        api_rest_server.run(cancel_token.clone()),
        api_websocket_server.run(cancel_token.clone())
    ) {
        Ok(_) => tb_log::info(Some("👋"), "[Taskbase] Turned off"),
        Err(err) => {
            tb_log::warn(None, "[Taskbase] Shutting down all running components");
            cancel_token.cancel();
            tb_log::warn(Some("👋"), format!("[Taskbase] Turned off with error: {err}"));
        }
    }
}
