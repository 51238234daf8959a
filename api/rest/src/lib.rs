use actix_cors::Cors;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use configure::configure;
use context::ApiRestCtx;
use error_handler::default_error_handler;
use logger::logger_format;
use tokio_util::sync::CancellationToken;

mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod service;
mod util;

pub struct ApiRestServer {
    mode: String,
    address: String,
    allowed_origin: Option<String>,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(
        mode: &str,
        host: &str,
        port: &u16,
        allowed_origin: &Option<String>,
        ctx: ApiRestCtx,
    ) -> Self {
        tb_log::info(Some("⚡"), "ApiRestServer: Initializing component");

        let address = format!("{host}:{port}");
        let context = web::Data::new(ctx);

        Self {
            mode: mode.to_owned(),
            address,
            allowed_origin: allowed_origin.to_owned(),
            context,
        }
    }

    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        tb_log::info(Some("💫"), "ApiRestServer: Running component");

        let mode = self.mode;
        let allowed_origin = self.allowed_origin;
        let context = self.context;

        let server = HttpServer::new(move || {
            let cors = if mode == "development" {
                Cors::permissive()
            } else {
                match &allowed_origin {
                    Some(allowed_origin) => Cors::default()
                        .allowed_origin(allowed_origin)
                        .allow_any_method()
                        .allow_any_header()
                        .supports_credentials(),
                    None => Cors::default(),
                }
            };

            App::new()
                .wrap(Logger::new(logger_format()))
                .wrap(cors)
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .app_data(context.clone())
                .configure(configure)
        })
        .bind(self.address)?
        .run();

        let server_handle = server.handle();

        tokio::select! {
            res = server => Ok(res?),
            _ = cancel_token.cancelled() => {
                server_handle.stop(true).await;

                tb_log::info(None, "ApiRestServer: Shutting down component");

                Ok(())
            }
        }
    }
}
