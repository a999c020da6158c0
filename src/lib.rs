//! Core library exports for the MeloSport storefront service.
//!
//! This crate exposes the carousel domain, contact inbox, forms, models,
//! repositories, routes and service layers used by the storefront web
//! application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Role required to manage the carousel and the contact inbox.
pub const ADMIN_ROLE: &str = "admin";
