use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::messages::AnswerMessageForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::messages::{
    delete_message as delete_message_service,
    mark_message_answered as mark_message_answered_service,
    show_messages as show_messages_service,
};

#[derive(Deserialize)]
struct MessagesQueryParams {
    page: Option<usize>,
}

#[get("/mensajes")]
pub async fn show_messages(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    params: web::Query<MessagesQueryParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);

    match show_messages_service(page, &user, repo.get_ref()) {
        Ok(messages) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "mensajes",
                &server_config.auth_service_url,
            );
            context.insert("messages", &messages);
            render_template(&tera, "messages/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to render messages page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/mensajes/{message_id}/answered")]
pub async fn mark_message_answered(
    message_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AnswerMessageForm>,
) -> impl Responder {
    let answered = form.answered.unwrap_or(true);

    match mark_message_answered_service(message_id.into_inner(), answered, &user, repo.get_ref()) {
        Ok(true) => {
            if answered {
                FlashMessage::success("Mensaje marcado como respondido.").send();
            } else {
                FlashMessage::success("Mensaje marcado como pendiente.").send();
            }
        }
        Ok(false) => FlashMessage::error("Error al actualizar el mensaje.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::NotFound) => FlashMessage::error("Mensaje no encontrado.").send(),
        Err(err) => {
            log::error!("Failed to update message: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/mensajes")
}

#[post("/mensajes/{message_id}/delete")]
pub async fn delete_message(
    message_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_message_service(message_id.into_inner(), &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Mensaje eliminado.").send(),
        Ok(false) => FlashMessage::error("Error al eliminar el mensaje.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::NotFound) => FlashMessage::error("Mensaje no encontrado.").send(),
        Err(err) => {
            log::error!("Failed to delete message: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/mensajes")
}
