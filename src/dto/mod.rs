pub mod featured;
pub mod messages;
pub mod products;
