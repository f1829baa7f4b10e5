pub mod check_db;
pub mod serve;
