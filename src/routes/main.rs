use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::messages::{ContactMessageForm, ContactMessageFormPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, public_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::main::{show_home as show_home_service, show_product as show_product_service};
use crate::services::messages::submit_contact_message as submit_contact_message_service;

#[get("/")]
pub async fn index(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_home_service(repo.get_ref()) {
        Ok(slides) => {
            let mut context = public_context(&flash_messages, user.as_ref(), "index");
            context.insert("slides", &slides);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render home page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/productos/{product_id}")]
pub async fn show_product(
    product_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(product) => {
            let mut context = public_context(&flash_messages, user.as_ref(), "productos");
            context.insert("product", &product);
            render_template(&tera, "main/product.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render product page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/nosotros")]
pub async fn nosotros(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = public_context(&flash_messages, user.as_ref(), "nosotros");
    render_template(&tera, "main/nosotros.html", &context)
}

#[get("/terminos")]
pub async fn terminos(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = public_context(&flash_messages, user.as_ref(), "terminos");
    render_template(&tera, "main/terminos.html", &context)
}

#[post("/contacto")]
pub async fn submit_contact(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ContactMessageForm>,
) -> impl Responder {
    let payload: ContactMessageFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    match submit_contact_message_service(payload, repo.get_ref()) {
        Ok(true) => {
            FlashMessage::success("Gracias por tu mensaje. Te responderemos pronto.").send()
        }
        Ok(false) => FlashMessage::error("No se pudo enviar el mensaje. Inténtalo de nuevo.").send(),
        Err(err) => {
            log::error!("Failed to submit contact message: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/")
}

#[get("/na")]
pub async fn not_assigned(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(
        &flash_messages,
        &user,
        "index",
        &server_config.auth_service_url,
    );
    render_template(&tera, "main/not_assigned.html", &context)
}
