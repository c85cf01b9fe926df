pub mod daily;
pub mod punch;
pub mod punch_type;
pub mod report;
pub mod user;
