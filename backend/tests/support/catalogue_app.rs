//! Shared app construction for catalogue integration suites.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use camply_backend::Trace;
use camply_backend::inbound::http::api_scope;
use camply_backend::inbound::http::health::{HealthState, live, ready};
use camply_backend::inbound::http::state::{HttpState, HttpStatePorts};
use camply_backend::outbound::memory::InMemoryCatalogue;

/// Ports backed by the bundled seed.
pub fn bundled_ports() -> HttpStatePorts {
    let catalogue = InMemoryCatalogue::bundled().expect("bundled seed is valid");
    HttpStatePorts::from_adapter(Arc::new(catalogue))
}

/// Full application wired the way the server binary wires it.
pub fn catalogue_app(
    ports: HttpStatePorts,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(ports)))
        .app_data(health_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live)
}
