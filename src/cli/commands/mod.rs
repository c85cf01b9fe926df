pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod login;
pub mod password;
pub mod punch;
pub mod register;
pub mod report;
pub mod status;
