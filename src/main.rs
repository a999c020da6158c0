use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use config::{Config, Environment, File};
use tera::Tera;

use melosport_storefront::db::establish_connection_pool;
use melosport_storefront::models::config::ServerConfig;
use melosport_storefront::repository::DieselRepository;
use melosport_storefront::routes::featured::{
    add_featured_entry, delete_featured_entry, show_featured, update_featured_entry,
};
use melosport_storefront::routes::main::{
    index, nosotros, not_assigned, show_product, submit_contact, terminos,
};
use melosport_storefront::routes::messages::{
    delete_message, mark_message_answered, show_messages,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let server_config: ServerConfig = match config.try_deserialize() {
        Ok(server_config) => server_config,
        Err(e) => {
            eprintln!("Failed to parse configuration: {e}");
            std::process::exit(1);
        }
    };

    // Key::from panics below this length.
    if server_config.secret_key.len() < 64 {
        eprintln!("SECRET_KEY must be at least 64 bytes long");
        std::process::exit(1);
    }
    let secret_key = Key::from(server_config.secret_key.as_bytes());

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Failed to create database pool: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let tera = match Tera::new("templates/**/*") {
        Ok(tera) => tera,
        Err(e) => {
            eprintln!("Failed to load templates: {e}");
            std::process::exit(1);
        }
    };

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = server_config.bind_address.clone();

    HttpServer::new(move || {
        let session_middleware =
            SessionMiddleware::new(CookieSessionStore::default(), secret_key.clone());

        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(index)
            .service(show_product)
            .service(nosotros)
            .service(terminos)
            .service(submit_contact)
            .service(not_assigned)
            .service(show_featured)
            .service(add_featured_entry)
            .service(update_featured_entry)
            .service(delete_featured_entry)
            .service(show_messages)
            .service(mark_message_answered)
            .service(delete_message)
            .service(Files::new("/static", "./static"))
            .service(Files::new("/media", "./media"))
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(session_middleware)
            .wrap(Logger::default())
    })
    .bind(&bind_address)?
    .run()
    .await
}
