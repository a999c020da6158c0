//! Framework-free domain entities and the carousel resolver.

pub mod auth;
pub mod carousel;
pub mod category;
pub mod featured;
pub mod message;
pub mod product;
pub mod types;
