use actix_files::NamedFile;
use actix_multipart::form::MultipartForm;
use actix_web::{
    http::{
        header::{ContentDisposition, DispositionParam, DispositionType},
        StatusCode,
    },
    web, HttpRequest, HttpResponse,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tb_dao::{project::ProjectDao, task::TaskDao, task_file::TaskFileDao, user::UserDao};

use crate::{
    context::ApiRestCtx,
    model::{
        task_file::{
            DeleteOneTaskFileReqPath, FindManyTaskFileReqPath, FindOneTaskFileReqPath,
            InsertOneTaskFileReqForm, InsertOneTaskFileReqPath, TaskFileIDResJson, TaskFileResJson,
        },
        PaginationRes, Response,
    },
};

const ALLOWED_EXTENSIONS: [&str; 10] = [
    ".pdf", ".doc", ".docx", ".txt", ".jpg", ".jpeg", ".png", ".gif", ".csv", ".xlsx",
];

pub fn task_file_api(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/project/{project_id}/task/{task_id}/file",
        web::post().to(insert_one),
    )
    .route(
        "/project/{project_id}/task/{task_id}/file/{file_id}",
        web::get().to(find_one),
    )
    .route(
        "/project/{project_id}/task/{task_id}/file/{file_id}",
        web::delete().to(delete_one),
    )
    .route(
        "/project/{project_id}/task/{task_id}/files",
        web::get().to(find_many),
    );
}

fn allowed_extension(file_name: &str) -> bool {
    let file_name = file_name.to_lowercase();
    ALLOWED_EXTENSIONS
        .iter()
        .any(|extension| file_name.ends_with(extension))
}

fn task_file_res(file_data: &TaskFileDao) -> TaskFileResJson {
    TaskFileResJson::new(
        file_data.id(),
        file_data.created_at(),
        file_data.updated_at(),
        file_data.task_id(),
        file_data.file_name(),
        file_data.content_type(),
        file_data.size(),
    )
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<InsertOneTaskFileReqPath>,
    form: MultipartForm<InsertOneTaskFileReqForm>,
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

    let file_name = match &form.file.file_name {
        Some(file_name) => file_name.to_owned(),
        None => return Response::error_raw(&StatusCode::BAD_REQUEST, "File name is required"),
    };

    if !allowed_extension(&file_name) {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            &format!(
                "File type not allowed. Allowed types: {}",
                ALLOWED_EXTENSIONS.join(", ")
            ),
        );
    }

    let content_type = match &form.file.content_type {
        Some(content_type) => content_type.to_string(),
        None => mime::APPLICATION_OCTET_STREAM.to_string(),
    };

    let size = match i64::try_from(form.file.size) {
        Ok(size) => size,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let source_path = match form.file.file.path().to_str() {
        Some(source_path) => source_path.to_owned(),
        None => {
            return Response::error_raw(
                &StatusCode::INTERNAL_SERVER_ERROR,
                "Uploaded file has no usable temporary path",
            )
        }
    };

    let file_data = TaskFileDao::new(
        task_data.id(),
        token_claim.id(),
        &file_name,
        &content_type,
        &size,
    );

    if let Err(err) = file_data
        .save(ctx.dao().db(), ctx.storage_path(), &source_path)
        .await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(&StatusCode::CREATED, &None, &task_file_res(&file_data))
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    req: HttpRequest,
    path: web::Path<FindOneTaskFileReqPath>,
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

    let (project_data, task_data, file_data) = match tokio::try_join!(
        ProjectDao::db_select(ctx.dao().db(), path.project_id()),
        TaskDao::db_select(ctx.dao().db(), path.task_id()),
        TaskFileDao::db_select(ctx.dao().db(), path.file_id())
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

    if file_data.task_id() != task_data.id() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Task id does not match");
    }

    let file = match NamedFile::open_async(TaskFileDao::full_path(
        ctx.storage_path(),
        file_data.id(),
    ))
    .await
    {
        Ok(file) => file,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    let content_type = match file_data.content_type().parse::<mime::Mime>() {
        Ok(content_type) => content_type,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    file.set_content_type(content_type)
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file_data.file_name().to_owned())],
        })
        .into_response(&req)
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneTaskFileReqPath>,
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

    let (project_data, task_data, file_data) = match tokio::try_join!(
        ProjectDao::db_select(ctx.dao().db(), path.project_id()),
        TaskDao::db_select(ctx.dao().db(), path.task_id()),
        TaskFileDao::db_select(ctx.dao().db(), path.file_id())
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

    if file_data.task_id() != task_data.id() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Task id does not match");
    }

    if let Err(err) =
        TaskFileDao::db_delete(ctx.dao().db(), ctx.storage_path(), path.file_id()).await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &TaskFileIDResJson::new(file_data.id()),
    )
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<FindManyTaskFileReqPath>,
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

    let files_data =
        match TaskFileDao::db_select_many_by_task_id(ctx.dao().db(), path.task_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&files_data.len(), &files_data.len())),
        &files_data.iter().map(task_file_res).collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(allowed_extension("report.PDF"));
        assert!(allowed_extension("photo.jpeg"));
        assert!(allowed_extension("data.xlsx"));
    }

    #[test]
    fn disallowed_extensions_are_rejected() {
        assert!(!allowed_extension("malware.exe"));
        assert!(!allowed_extension("script.sh"));
        assert!(!allowed_extension("archive.tar.gz"));
        assert!(!allowed_extension("no_extension"));
    }
}
