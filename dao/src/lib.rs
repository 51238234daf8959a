use tb_db_postgresql::db::PostgresDb;

pub mod password_reset;
pub mod project;
pub mod register;
pub mod task;
pub mod task_file;
pub mod user;

pub enum Db {
    PostgresqlDb(PostgresDb),
}
