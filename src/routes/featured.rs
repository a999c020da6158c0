use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::featured::{
    AddFeaturedEntryForm, AddFeaturedEntryFormPayload, UpdateFeaturedEntryForm,
    UpdateFeaturedEntryFormPayload,
};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::featured::{
    add_featured_entry as add_featured_entry_service,
    delete_featured_entry as delete_featured_entry_service,
    show_featured as show_featured_service,
    update_featured_entry as update_featured_entry_service,
};

#[get("/destacados")]
pub async fn show_featured(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_featured_service(&user, repo.get_ref()) {
        Ok(entries) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "destacados",
                &server_config.auth_service_url,
            );
            context.insert("entries", &entries);
            render_template(&tera, "featured/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to render featured entries page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/destacados")]
pub async fn add_featured_entry(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddFeaturedEntryForm>,
) -> impl Responder {
    let payload: AddFeaturedEntryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/destacados");
        }
    };

    match add_featured_entry_service(payload, &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Producto destacado añadido.").send(),
        Ok(false) => FlashMessage::error("Error al añadir el producto destacado.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::NotFound) => FlashMessage::error("Producto no encontrado.").send(),
        Err(ServiceError::Conflict(message)) => FlashMessage::error(message).send(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to add featured entry: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/destacados")
}

#[post("/destacados/{entry_id}/update")]
pub async fn update_featured_entry(
    entry_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateFeaturedEntryForm>,
) -> impl Responder {
    let payload: UpdateFeaturedEntryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/destacados");
        }
    };

    match update_featured_entry_service(entry_id.into_inner(), payload, &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Entrada actualizada.").send(),
        Ok(false) => FlashMessage::error("Error al actualizar la entrada.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::NotFound) => FlashMessage::error("Entrada no encontrada.").send(),
        Err(ServiceError::Conflict(message)) => FlashMessage::error(message).send(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to update featured entry: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/destacados")
}

#[post("/destacados/{entry_id}/delete")]
pub async fn delete_featured_entry(
    entry_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_featured_entry_service(entry_id.into_inner(), &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Entrada eliminada.").send(),
        Ok(false) => FlashMessage::error("Error al eliminar la entrada.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/na"),
        Err(ServiceError::NotFound) => FlashMessage::error("Entrada no encontrada.").send(),
        Err(err) => {
            log::error!("Failed to delete featured entry: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/destacados")
}
