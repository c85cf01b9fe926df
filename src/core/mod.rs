pub mod auth;
pub mod calculator;
pub mod clock;
pub mod punch;
pub mod report;
pub mod session;
