use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use serde::Serialize;
use tb_error::Error;

pub mod auth;
pub mod project;
pub mod subscription;
pub mod task;
pub mod task_file;
pub mod user;

#[derive(Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl Response {
    pub fn data<T: Serialize>(
        status_code: &StatusCode,
        pagination: &Option<PaginationRes>,
        data: T,
    ) -> HttpResponse {
        match serde_json::to_value(data) {
            Ok(data) => HttpResponseBuilder::new(*status_code).json(Self {
                error: None,
                pagination: *pagination,
                data: Some(data),
            }),
            Err(err) => {
                tb_log::error(None, &err);
                Self::error(&Error::InternalServerError(err.to_string()))
            }
        }
    }

    pub fn error(err: &Error) -> HttpResponse {
        let (status_code, message) = match err {
            Error::BadRequest(msg) => (&StatusCode::BAD_REQUEST, msg),
            Error::Forbidden(msg) => (&StatusCode::FORBIDDEN, msg),
            Error::InternalServerError(msg) => (&StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        Self::error_raw(status_code, message)
    }

    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        tb_log::error(None, message);

        HttpResponseBuilder::new(*status_code).json(Self {
            error: Some(ErrorRes {
                status: match status_code.canonical_reason() {
                    Some(status_code) => status_code.to_owned(),
                    None => "Unknown".to_owned(),
                },
                message: message.to_owned(),
            }),
            pagination: None,
            data: None,
        })
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    status: String,
    message: String,
}

#[derive(Serialize, Clone, Copy)]
pub struct PaginationRes {
    count: usize,
    total: usize,
}

impl PaginationRes {
    pub fn new(count: &usize, total: &usize) -> Self {
        Self {
            count: *count,
            total: *total,
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn data_response_carries_the_payload() {
        let res = Response::data(&StatusCode::OK, &None, "running");

        assert_eq!(res.status(), StatusCode::OK);

        let body = to_bytes(res.into_body()).await.unwrap();
        let json = serde_json::from_slice::<serde_json::Value>(&body).unwrap();

        assert_eq!(json["data"], "running");
        assert!(json.get("error").is_none());
        assert!(json.get("pagination").is_none());
    }

    #[actix_web::test]
    async fn error_response_carries_status_and_message() {
        let res = Response::error_raw(&StatusCode::FORBIDDEN, "This project does not belong to you");

        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let body = to_bytes(res.into_body()).await.unwrap();
        let json = serde_json::from_slice::<serde_json::Value>(&body).unwrap();

        assert_eq!(json["error"]["status"], "Forbidden");
        assert_eq!(json["error"]["message"], "This project does not belong to you");
        assert!(json.get("data").is_none());
    }

    #[actix_web::test]
    async fn pagination_is_serialized_alongside_data() {
        let res = Response::data(
            &StatusCode::OK,
            &Some(PaginationRes::new(&2, &2)),
            vec!["a", "b"],
        );

        let body = to_bytes(res.into_body()).await.unwrap();
        let json = serde_json::from_slice::<serde_json::Value>(&body).unwrap();

        assert_eq!(json["pagination"]["count"], 2);
        assert_eq!(json["pagination"]["total"], 2);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
