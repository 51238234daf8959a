use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tb_dao::{password_reset::PasswordResetDao, register::RegistrationDao, user::UserDao};
use tb_mailer::MailPayload;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        auth::{
            AuthTokenResJson, ConfirmPasswordResetReqJson, ConfirmPasswordResetResJson,
            PasswordBasedReqJson, RegisterReqJson, RegisterResJson, RequestPasswordResetReqJson,
            RequestPasswordResetResJson, VerifyRegistrationReqJson, VerifyRegistrationResJson,
        },
        Response,
    },
};

pub fn auth_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/token", web::get().to(token))
        .route("/auth/register", web::post().to(register))
        .route(
            "/auth/verify-registration",
            web::post().to(verify_registration),
        )
        .route("/auth/password-based", web::post().to(password_based))
        .route(
            "/auth/request-password-reset",
            web::post().to(request_password_reset),
        )
        .route(
            "/auth/confirm-password-reset",
            web::post().to(confirm_password_reset),
        );
}

async fn token(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
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

    let token = match ctx.token().jwt().need_renew(&token_claim) {
        Ok(need) => {
            if need {
                match ctx.token().jwt().renew(&token_claim) {
                    Ok(token) => token,
                    Err(err) => {
                        return Response::error_raw(
                            &StatusCode::INTERNAL_SERVER_ERROR,
                            &err.to_string(),
                        )
                    }
                }
            } else {
                token.to_owned()
            }
        }
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(&StatusCode::OK, &None, &AuthTokenResJson::new(&token))
}

async fn register(ctx: web::Data<ApiRestCtx>, data: web::Json<RegisterReqJson>) -> HttpResponse {
    if !ctx.registration() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "User registration is disabled");
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    if UserDao::db_select_by_email(ctx.dao().db(), data.email())
        .await
        .is_ok()
    {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Account has been registered");
    };

    let password_hash = match ctx
        .hash()
        .argon2()
        .hash_password(data.password().as_bytes())
    {
        Ok(hash) => hash,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    let registration_data =
        match RegistrationDao::db_select_by_email(ctx.dao().db(), data.email()).await {
            Ok(mut registration_data) => {
                registration_data.set_password_hash(&password_hash.to_string());
                registration_data.set_full_name(data.full_name());
                registration_data.regenerate_code();
                if let Err(err) = registration_data.db_update(ctx.dao().db()).await {
                    return Response::error_raw(
                        &StatusCode::INTERNAL_SERVER_ERROR,
                        &err.to_string(),
                    );
                }
                registration_data
            }
            Err(_) => {
                let registration_data = RegistrationDao::new(
                    data.email(),
                    &password_hash.to_string(),
                    data.full_name(),
                );
                if let Err(err) = registration_data.db_insert(ctx.dao().db()).await {
                    return Response::error_raw(
                        &StatusCode::INTERNAL_SERVER_ERROR,
                        &err.to_string(),
                    );
                }
                registration_data
            }
        };

    match ctx.mailer() {
        Some(mailer) => {
            if let Err(err) = mailer.sender().send(MailPayload::new(
                data.email(),
                "Registration Verification Code",
                &format!(
                    "Your registration verification code is {}. This code will expire in {} seconds",
                    registration_data.code(),
                    ctx.registration_ttl()
                ),
            )) {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
            }
        }
        None => tb_log::warn(
            None,
            format!(
                "ApiRestServer: Mailer is not configured. Registration verification code for '{}' is {}",
                data.email(),
                registration_data.code()
            ),
        ),
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &RegisterResJson::new(registration_data.id()),
    )
}

async fn verify_registration(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<VerifyRegistrationReqJson>,
) -> HttpResponse {
    if !ctx.registration() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "User registration is disabled");
    }

    let registration_data = match RegistrationDao::db_select(ctx.dao().db(), data.id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if data.code() != registration_data.code() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Wrong code");
    }

    let user_data = UserDao::new(
        registration_data.email(),
        registration_data.password_hash(),
        registration_data.full_name(),
    );

    if let Err(err) = user_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    if let Err(err) = RegistrationDao::db_delete(ctx.dao().db(), registration_data.id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &VerifyRegistrationResJson::new(user_data.id()),
    )
}

async fn password_based(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<PasswordBasedReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let user_data = match UserDao::db_select_by_email(ctx.dao().db(), data.email()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = ctx
        .hash()
        .argon2()
        .verify_password(data.password(), user_data.password_hash())
    {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let token = match ctx.token().jwt().encode(user_data.id()) {
        Ok(token) => token,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(&StatusCode::OK, &None, &AuthTokenResJson::new(&token))
}

async fn request_password_reset(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<RequestPasswordResetReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    };

    let user_data = match UserDao::db_select_by_email(ctx.dao().db(), data.email()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let password_reset_data = PasswordResetDao::new(user_data.id());

    if let Err(err) = password_reset_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    match ctx.mailer() {
        Some(mailer) => {
            if let Err(err) = mailer.sender().send(MailPayload::new(
                data.email(),
                "Request Password Reset Verification Code",
                &format!(
                    "Your password reset verification code is {}. This code will expire in {} seconds",
                    password_reset_data.code(),
                    ctx.reset_password_ttl()
                ),
            )) {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
            }
        }
        None => tb_log::warn(
            None,
            format!(
                "ApiRestServer: Mailer is not configured. Password reset verification code for '{}' is {}",
                data.email(),
                password_reset_data.code()
            ),
        ),
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &RequestPasswordResetResJson::new(password_reset_data.id()),
    )
}

async fn confirm_password_reset(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<ConfirmPasswordResetReqJson>,
) -> HttpResponse {
    let password_reset_data = match PasswordResetDao::db_select(ctx.dao().db(), data.id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if data.code() != password_reset_data.code() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Wrong code");
    }

    let mut user_data =
        match UserDao::db_select(ctx.dao().db(), password_reset_data.user_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        };

    let password_hash = match ctx
        .hash()
        .argon2()
        .hash_password(data.password().as_bytes())
    {
        Ok(hash) => hash,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    user_data.set_password_hash(&password_hash.to_string());

    if let Err(err) = user_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    if let Err(err) = PasswordResetDao::db_delete(ctx.dao().db(), password_reset_data.id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    if let Some(mailer) = ctx.mailer() {
        if let Err(err) = mailer.sender().send(MailPayload::new(
            user_data.email(),
            "Your Password Has Been Reset Successfully",
            "Your account password has been successfully changed",
        )) {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
        }
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &ConfirmPasswordResetResJson::new(user_data.id()),
    )
}
