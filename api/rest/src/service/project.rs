use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tb_api_websocket::message::{MessageKind, Target};
use tb_dao::{
    project::{ProjectDao, ProjectStatus},
    user::UserDao,
};

use crate::{
    context::ApiRestCtx,
    model::{
        project::{
            DeleteOneProjectReqPath, FindOneProjectReqPath, InsertOneProjectReqJson,
            ProjectIDResJson, ProjectResJson, UpdateOneProjectReqJson, UpdateOneProjectReqPath,
        },
        PaginationRes, Response,
    },
    util::ws_broadcast::websocket_broadcast,
};

pub fn project_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/project", web::post().to(insert_one))
        .route("/project/{project_id}", web::get().to(find_one))
        .route("/project/{project_id}", web::patch().to(update_one))
        .route("/project/{project_id}", web::delete().to(delete_one))
        .route("/projects", web::get().to(find_many));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<InsertOneProjectReqJson>,
) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            &format!("Failed to get user data: {err}"),
        );
    }

    let status = match data.status() {
        Some(status) => match ProjectStatus::from_str(status) {
            Ok(status) => status,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        },
        None => ProjectStatus::Active,
    };

    let project_data = ProjectDao::new(token_claim.id(), data.title(), data.description(), &status);

    if let Err(err) = project_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    let project_res = ProjectResJson::new(
        project_data.id(),
        project_data.created_at(),
        project_data.updated_at(),
        project_data.owner_id(),
        project_data.title(),
        project_data.description(),
        project_data.status().to_str(),
    );

    if let Err(err) = websocket_broadcast(
        ctx.ws().handler(),
        Target::Projects,
        *project_data.owner_id(),
        MessageKind::InsertOne,
        &project_res,
    ) {
        tb_log::error(
            None,
            format!("ApiRestServer: Failed to broadcast project insert: {err}"),
        );
    }

    Response::data(&StatusCode::CREATED, &None, &project_res)
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<FindOneProjectReqPath>,
) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            &format!("Failed to get user data: {err}"),
        );
    }

    let project_data = match ProjectDao::db_select(ctx.dao().db(), path.project_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if project_data.owner_id() != token_claim.id() {
        return Response::error_raw(
            &StatusCode::FORBIDDEN,
            "This project does not belong to you",
        );
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &ProjectResJson::new(
            project_data.id(),
            project_data.created_at(),
            project_data.updated_at(),
            project_data.owner_id(),
            project_data.title(),
            project_data.description(),
            project_data.status().to_str(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneProjectReqPath>,
    data: web::Json<UpdateOneProjectReqJson>,
) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            &format!("Failed to get user data: {err}"),
        );
    }

    let mut project_data = match ProjectDao::db_select(ctx.dao().db(), path.project_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if project_data.owner_id() != token_claim.id() {
        return Response::error_raw(
            &StatusCode::FORBIDDEN,
            "This project does not belong to you",
        );
    }

    if let Some(title) = data.title() {
        project_data.set_title(title);
    }

    if let Some(description) = data.description() {
        project_data.set_description(&Some(description.to_owned()));
    }

    if let Some(status) = data.status() {
        match ProjectStatus::from_str(status) {
            Ok(status) => project_data.set_status(&status),
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        }
    }

    if !data.is_all_none() {
        if let Err(err) = project_data.db_update(ctx.dao().db()).await {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
        }
    }

    let project_res = ProjectResJson::new(
        project_data.id(),
        project_data.created_at(),
        project_data.updated_at(),
        project_data.owner_id(),
        project_data.title(),
        project_data.description(),
        project_data.status().to_str(),
    );

    if let Err(err) = websocket_broadcast(
        ctx.ws().handler(),
        Target::Projects,
        *project_data.owner_id(),
        MessageKind::UpdateOne,
        &project_res,
    ) {
        tb_log::error(
            None,
            format!("ApiRestServer: Failed to broadcast project update: {err}"),
        );
    }

    Response::data(&StatusCode::OK, &None, &project_res)
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneProjectReqPath>,
) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            &format!("Failed to get user data: {err}"),
        );
    }

    let project_data = match ProjectDao::db_select(ctx.dao().db(), path.project_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if project_data.owner_id() != token_claim.id() {
        return Response::error_raw(
            &StatusCode::FORBIDDEN,
            "This project does not belong to you",
        );
    }

    if let Err(err) =
        ProjectDao::db_delete(ctx.dao().db(), ctx.storage_path(), path.project_id()).await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    let project_res = ProjectIDResJson::new(project_data.id());

    if let Err(err) = websocket_broadcast(
        ctx.ws().handler(),
        Target::Projects,
        *project_data.owner_id(),
        MessageKind::DeleteOne,
        &project_res,
    ) {
        tb_log::error(
            None,
            format!("ApiRestServer: Failed to broadcast project delete: {err}"),
        );
    }

    Response::data(&StatusCode::OK, &None, &project_res)
}

async fn find_many(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            &format!("Failed to get user data: {err}"),
        );
    }

    let projects_data =
        match ProjectDao::db_select_many_by_owner_id(ctx.dao().db(), token_claim.id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &projects_data.len(),
            &projects_data.len(),
        )),
        &projects_data
            .iter()
            .map(|data| {
                ProjectResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.owner_id(),
                    data.title(),
                    data.description(),
                    data.status().to_str(),
                )
            })
            .collect::<Vec<_>>(),
    )
}
