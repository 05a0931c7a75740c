//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::warn;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{
    CredentialStore, MemoryCredentialStore, MemoryUserRepository, UserRepository,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, destroy_user, list_users, show_user, update_user};
use crate::middleware::Trace;
use crate::outbound::persistence::{DieselCredentialStore, DieselUserRepository};

/// Pick the port implementations based on configuration.
///
/// With a pool: Diesel adapters over PostgreSQL. Without one: in-memory
/// stores, which lose everything on restart and hold no credentials, so
/// every mutating request is rejected until stores are provisioned.
fn build_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselCredentialStore::new(pool.clone())),
        ),
        None => {
            warn!("no database pool configured; serving from in-memory stores");
            let users: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::default());
            let credentials: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::default());
            HttpState::new(users, credentials)
        }
    }
}

fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
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
        .app_data(health_state)
        .wrap(Trace)
        .service(list_users)
        .service(show_user)
        .service(create_user)
        .service(update_user)
        .service(destroy_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let state = web::Data::new(build_state(&config));
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || build_app(state.clone(), server_health_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
