//! Actix extractor for the session-stored [`AuthenticatedUser`].

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use thiserror::Error as ThisError;

pub use crate::domain::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;

/// Rejection raised when the session holds no valid identity.
///
/// Browser-facing screens get a redirect to the auth service login page
/// rather than a bare 401.
#[derive(Debug, ThisError)]
#[error("authentication required")]
pub struct AuthenticationRequired {
    login_url: String,
}

impl ResponseError for AuthenticationRequired {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, self.login_url.as_str()))
            .finish()
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let login_url = req
            .app_data::<web::Data<ServerConfig>>()
            .map(|config| config.auth_service_url.clone())
            .unwrap_or_else(|| "/".to_string());

        let user = Identity::from_request(req, payload)
            .into_inner()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|stored| serde_json::from_str::<AuthenticatedUser>(&stored).ok());

        ready(user.ok_or_else(|| AuthenticationRequired { login_url }.into()))
    }
}
