//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use recitation_backend::Trace;
#[cfg(debug_assertions)]
use recitation_backend::doc::ApiDoc;
use recitation_backend::inbound::http::error::json_error_handler;
use recitation_backend::inbound::http::health::{HealthState, live, ready};
use recitation_backend::inbound::http::history::current_cycle_history;
use recitation_backend::inbound::http::lists::{
    add_item, clear_items, create_list, delete_list, get_list, list_lists, remove_item,
    update_list,
};
use recitation_backend::inbound::http::selections::generate_selections;
use recitation_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(generate_selections)
        .service(current_cycle_history)
        .service(list_lists)
        .service(get_list)
        .service(create_list)
        .service(update_list)
        .service(add_item)
        .service(remove_item)
        .service(clear_items)
        .service(delete_list);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Seeds the default lists before binding and marks the health state ready
/// once the listener is up.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config).await);
    let ServerConfig { bind_addr, .. } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
