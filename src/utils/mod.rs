mod time;

pub use time::{current_time_millis, monotonic_time_nanos};
