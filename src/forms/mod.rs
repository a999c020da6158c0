pub mod featured;
pub mod messages;
