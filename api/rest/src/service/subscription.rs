use actix_web::{http::StatusCode, rt, web, HttpRequest, HttpResponse};
use tb_api_websocket::message::Target;
use tb_dao::user::UserDao;

use crate::{
    context::ApiRestCtx,
    model::{
        subscription::{SubscriptionReqPath, SubscriptionReqQuery},
        Response,
    },
};

pub fn subscription_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/subscription/{target}", web::get().to(subscribe));
}

async fn subscribe(
    ctx: web::Data<ApiRestCtx>,
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<SubscriptionReqPath>,
    query: web::Query<SubscriptionReqQuery>,
) -> HttpResponse {
    let token_claim = match ctx.token().jwt().decode(query.token()) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            &format!("Failed to get user data: {err}"),
        );
    }

    let target = match path.target() {
        "projects" => Target::Projects,
        "tasks" => Target::Tasks,
        target => {
            return Response::error_raw(
                &StatusCode::BAD_REQUEST,
                &format!("Unknown subscription target '{target}'"),
            )
        }
    };

    let (res, session, msg_stream) = match actix_ws_ng::handle(&req, stream) {
        Ok(handle) => handle,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    let handler = ctx.ws().handler().clone();
    let user_id = *token_claim.id();

    rt::spawn(async move {
        if let Err(err) = handler.connection(user_id, target, session, msg_stream).await {
            tb_log::error(
                None,
                format!("ApiRestServer: WebSocket connection error: {err}"),
            );
        }
    });

    res
}
