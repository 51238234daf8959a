use actix_web::web;

use crate::service::{
    auth::auth_api, info::info_api, project::project_api, root::root_api,
    subscription::subscription_api, task::task_api, task_file::task_file_api, user::user_api,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api).service(
        web::scope("/api/rest")
            .configure(info_api)
            .configure(auth_api)
            .configure(user_api)
            .configure(project_api)
            .configure(task_api)
            .configure(task_file_api)
            .configure(subscription_api),
    );
}
