use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;

pub mod featured;
pub mod main;
pub mod messages;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// Maps a flash message level to the matching Bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

fn flash_alerts(flash_messages: &IncomingFlashMessages) -> Vec<(&str, &'static str)> {
    flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect()
}

/// Template context for the administrative screens.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
    home_url: &str,
) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &flash_alerts(flash_messages));
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context
}

/// Template context for the public storefront pages. The user is optional;
/// the navigation only shows the admin links when one is present.
pub fn public_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &flash_alerts(flash_messages));
    if let Some(user) = user {
        context.insert("current_user", user);
    }
    context.insert("current_page", current_page);
    context
}
