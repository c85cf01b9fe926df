pub mod daily;

pub use daily::compute_daily_hours;
