//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use items_api::Trace;
#[cfg(debug_assertions)]
use items_api::doc::ApiDoc;
use items_api::inbound::http::error::{json_error_handler, path_error_handler};
use items_api::inbound::http::health::health;
use items_api::inbound::http::items::{
    create_item, delete_item, get_item, list_items, update_item,
};
use items_api::inbound::http::meta::welcome;
use items_api::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(Trace)
        .service(welcome)
        .service(health)
        .service(list_items)
        .service(get_item)
        .service(create_item)
        .service(update_item)
        .service(delete_item);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an actix HTTP server bound according to the settings.
///
/// The record store is created once here and shared across workers.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::new());

    let server = HttpServer::new(move || build_app(state.clone()))
        .bind((settings.host(), settings.port))?
        .run();

    Ok(server)
}
