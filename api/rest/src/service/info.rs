use actix_web::{http::StatusCode, web, HttpResponse};
use strum::IntoEnumIterator;
use tb_dao::{
    project::ProjectStatus,
    task::{TaskPriority, TaskStatus},
};

use crate::{context::ApiRestCtx, model::Response};

pub fn info_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/info/registration", web::get().to(registration))
        .route("/info/project_statuses", web::get().to(project_statuses))
        .route("/info/task_statuses", web::get().to(task_statuses))
        .route("/info/task_priorities", web::get().to(task_priorities));
}

async fn registration(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    Response::data(&StatusCode::OK, &None, ctx.registration())
}

async fn project_statuses() -> HttpResponse {
    let mut statuses = Vec::new();

    for status in ProjectStatus::iter() {
        statuses.push(status.to_str().to_owned());
    }

    Response::data(&StatusCode::OK, &None, &statuses)
}

async fn task_statuses() -> HttpResponse {
    let mut statuses = Vec::new();

    for status in TaskStatus::iter() {
        statuses.push(status.to_str().to_owned());
    }

    Response::data(&StatusCode::OK, &None, &statuses)
}

async fn task_priorities() -> HttpResponse {
    let mut priorities = Vec::new();

    for priority in TaskPriority::iter() {
        priorities.push(priority.to_str().to_owned());
    }

    Response::data(&StatusCode::OK, &None, &priorities)
}
