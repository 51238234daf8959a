use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tb_api_websocket::message::{MessageKind, Target};
use tb_dao::{
    project::ProjectDao,
    task::{TaskDao, TaskPriority, TaskStatus},
    user::UserDao,
};

use crate::{
    context::ApiRestCtx,
    model::{
        task::{
            DeleteOneTaskReqPath, FindManyTaskReqPath, FindOneTaskReqPath, InsertOneTaskReqJson,
            InsertOneTaskReqPath, TaskIDResJson, TaskResJson, UpdateOneTaskReqJson,
            UpdateOneTaskReqPath,
        },
        PaginationRes, Response,
    },
    util::ws_broadcast::websocket_broadcast,
};

pub fn task_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/project/{project_id}/task", web::post().to(insert_one))
        .route(
            "/project/{project_id}/task/{task_id}",
            web::get().to(find_one),
        )
        .route(
            "/project/{project_id}/task/{task_id}",
            web::patch().to(update_one),
        )
        .route(
            "/project/{project_id}/task/{task_id}",
            web::delete().to(delete_one),
        )
        .route("/project/{project_id}/tasks", web::get().to(find_many))
        .route("/tasks", web::get().to(find_many_created));
}

fn task_res(task_data: &TaskDao) -> TaskResJson {
    TaskResJson::new(
        task_data.id(),
        task_data.created_at(),
        task_data.updated_at(),
        task_data.project_id(),
        task_data.created_by(),
        task_data.title(),
        task_data.description(),
        task_data.status().to_str(),
        task_data.priority().to_str(),
        task_data.due_date(),
    )
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<InsertOneTaskReqPath>,
    data: web::Json<InsertOneTaskReqJson>,
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

    let status = match data.status() {
        Some(status) => match TaskStatus::from_str(status) {
            Ok(status) => status,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        },
        None => TaskStatus::Todo,
    };

    let priority = match data.priority() {
        Some(priority) => match TaskPriority::from_str(priority) {
            Ok(priority) => priority,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        },
        None => TaskPriority::Medium,
    };

    let task_data = TaskDao::new(
        project_data.id(),
        token_claim.id(),
        data.title(),
        data.description(),
        &status,
        &priority,
        data.due_date(),
    );

    if let Err(err) = task_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    let task_res = task_res(&task_data);

    if let Err(err) = websocket_broadcast(
        ctx.ws().handler(),
        Target::Tasks,
        *task_data.created_by(),
        MessageKind::InsertOne,
        &task_res,
    ) {
        tb_log::error(
            None,
            format!("ApiRestServer: Failed to broadcast task insert: {err}"),
        );
    }

    Response::data(&StatusCode::CREATED, &None, &task_res)
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<FindOneTaskReqPath>,
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

    let (project_data, task_data) = match tokio::try_join!(
        ProjectDao::db_select(ctx.dao().db(), path.project_id()),
        TaskDao::db_select(ctx.dao().db(), path.task_id())
    ) {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if project_data.owner_id() != token_claim.id() {
        return Response::error_raw(
            &StatusCode::FORBIDDEN,
            "This project does not belong to you",
        );
    }

    if task_data.project_id() != project_data.id() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Project id does not match");
    }

    Response::data(&StatusCode::OK, &None, &task_res(&task_data))
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneTaskReqPath>,
    data: web::Json<UpdateOneTaskReqJson>,
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

    let (project_data, mut task_data) = match tokio::try_join!(
        ProjectDao::db_select(ctx.dao().db(), path.project_id()),
        TaskDao::db_select(ctx.dao().db(), path.task_id())
    ) {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if project_data.owner_id() != token_claim.id() {
        return Response::error_raw(
            &StatusCode::FORBIDDEN,
            "This project does not belong to you",
        );
    }

    if task_data.project_id() != project_data.id() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Project id does not match");
    }

    if let Some(title) = data.title() {
        task_data.set_title(title);
    }

    if let Some(description) = data.description() {
        task_data.set_description(&Some(description.to_owned()));
    }

    if let Some(status) = data.status() {
        match TaskStatus::from_str(status) {
            Ok(status) => task_data.set_status(&status),
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        }
    }

    if let Some(priority) = data.priority() {
        match TaskPriority::from_str(priority) {
            Ok(priority) => task_data.set_priority(&priority),
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        }
    }

    if let Some(due_date) = data.due_date() {
        task_data.set_due_date(&Some(*due_date));
    }

    if !data.is_all_none() {
        if let Err(err) = task_data.db_update(ctx.dao().db()).await {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
        }
    }

    let task_res = task_res(&task_data);

    if let Err(err) = websocket_broadcast(
        ctx.ws().handler(),
        Target::Tasks,
        *task_data.created_by(),
        MessageKind::UpdateOne,
        &task_res,
    ) {
        tb_log::error(
            None,
            format!("ApiRestServer: Failed to broadcast task update: {err}"),
        );
    }

    Response::data(&StatusCode::OK, &None, &task_res)
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneTaskReqPath>,
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

    let (project_data, task_data) = match tokio::try_join!(
        ProjectDao::db_select(ctx.dao().db(), path.project_id()),
        TaskDao::db_select(ctx.dao().db(), path.task_id())
    ) {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if project_data.owner_id() != token_claim.id() {
        return Response::error_raw(
            &StatusCode::FORBIDDEN,
            "This project does not belong to you",
        );
    }

    if task_data.project_id() != project_data.id() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Project id does not match");
    }

    if let Err(err) = TaskDao::db_delete(ctx.dao().db(), ctx.storage_path(), path.task_id()).await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    let task_res = TaskIDResJson::new(task_data.id());

    if let Err(err) = websocket_broadcast(
        ctx.ws().handler(),
        Target::Tasks,
        *task_data.created_by(),
        MessageKind::DeleteOne,
        &task_res,
    ) {
        tb_log::error(
            None,
            format!("ApiRestServer: Failed to broadcast task delete: {err}"),
        );
    }

    Response::data(&StatusCode::OK, &None, &task_res)
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<FindManyTaskReqPath>,
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

    let tasks_data =
        match TaskDao::db_select_many_by_project_id(ctx.dao().db(), path.project_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&tasks_data.len(), &tasks_data.len())),
        &tasks_data.iter().map(task_res).collect::<Vec<_>>(),
    )
}

async fn find_many_created(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
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

    let tasks_data =
        match TaskDao::db_select_many_by_created_by(ctx.dao().db(), token_claim.id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&tasks_data.len(), &tasks_data.len())),
        &tasks_data.iter().map(task_res).collect::<Vec<_>>(),
    )
}
