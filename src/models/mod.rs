//! Diesel row structs and their conversions to domain types.

#[cfg(feature = "server")]
pub mod auth;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod featured;
pub mod message;
pub mod product;
pub mod product_image;
