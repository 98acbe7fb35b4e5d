//! The published client against a live server over the bundled seed.

#[path = "support/catalogue_app.rs"]
mod catalogue_app;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{HttpServer, web};
use camply_backend::inbound::http::health::HealthState;
use camply_client::description::{DescriptionView, Rendered};
use camply_client::dto::EntityType;
use camply_client::search::{SearchEvent, SearchStatus, spawn_search};
use camply_client::{AppRoute, CamplyClient, ClientConfig, ClientError, LoadState};
use rstest::rstest;

use catalogue_app::{bundled_ports, catalogue_app};

struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl RunningServer {
    fn start() -> Self {
        let ports = bundled_ports();
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let server = HttpServer::new(move || catalogue_app(ports.clone(), health.clone()))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("bind test server");
        let addr = server.addrs()[0];
        let running = server.run();
        let handle = running.handle();
        actix_web::rt::spawn(running);
        Self { addr, handle }
    }

    fn client(&self) -> CamplyClient {
        let config = ClientConfig::new(&format!("http://{}/api", self.addr)).expect("config");
        CamplyClient::new(config).expect("client")
    }

    async fn stop(self) {
        self.handle.stop(true).await;
    }
}

#[rstest]
#[actix_web::test]
async fn browse_from_search_to_campground() {
    let server = RunningServer::start();
    let client = server.client();

    let hits = client.search("yosemite", Some(5)).await.expect("search");
    assert_eq!(hits[0].entity_type, EntityType::RecreationArea);
    let Some(AppRoute::RecreationArea { provider_id, id }) = hits[0].target_route() else {
        panic!("recreation area route expected");
    };

    let area = client
        .recreation_area(provider_id, &id)
        .await
        .expect("area");
    assert_eq!(area.name, "Yosemite National Park");
    let description = DescriptionView::build(area.description.as_deref());
    assert!(matches!(description.render(true), Rendered::Html(_)));

    let campgrounds = client
        .recreation_area_campgrounds(provider_id, &id)
        .await
        .expect("campgrounds");
    let names: Vec<&str> = campgrounds.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["Lower Pines", "North Pines", "Tuolumne Meadows", "Upper Pines"]
    );

    let upper = client.campground(1, "232447").await.expect("campground");
    assert_eq!(
        upper.url.as_deref(),
        Some("https://www.recreation.gov/camping/campgrounds/232447")
    );
    assert_eq!(
        upper.parent_route(),
        Some(AppRoute::RecreationArea {
            provider_id: 1,
            id: "2991".to_owned()
        })
    );
    server.stop().await;
}

#[rstest]
#[actix_web::test]
async fn missing_entities_become_not_found_states() {
    let server = RunningServer::start();
    let client = server.client();

    let provider = LoadState::from_result(client.provider(99).await);
    assert_eq!(provider, LoadState::NotFound);
    let err = client
        .campground(1, "nope")
        .await
        .expect_err("unknown campground");
    assert!(matches!(err, ClientError::NotFound { .. }));
    server.stop().await;
}

#[rstest]
#[actix_web::test]
async fn invalid_limit_carries_api_error() {
    let server = RunningServer::start();

    let err = server
        .client()
        .search("pines", Some(0))
        .await
        .expect_err("limit rejected");

    let ClientError::Status {
        status,
        code,
        trace_id,
        ..
    } = err
    else {
        panic!("status error expected, got {err:?}");
    };
    assert_eq!(status, 400);
    assert_eq!(code.as_deref(), Some("invalid_request"));
    assert!(trace_id.is_some());
    server.stop().await;
}

#[rstest]
#[actix_web::test]
async fn health_renders_status_lines() {
    let server = RunningServer::start();

    let health = LoadState::from_result(server.client().health().await);
    let lines = health.health_lines();

    assert_eq!(lines[0], "Status: 200");
    assert!(lines[1].starts_with("Timestamp: "));
    assert!(lines[1].ends_with('Z'));
    server.stop().await;
}

#[rstest]
#[actix_web::test]
async fn search_driver_uses_live_results() {
    let server = RunningServer::start();
    let handle = spawn_search(Arc::new(server.client()));

    handle
        .send(SearchEvent::Input("pines".to_owned()))
        .await
        .expect("send");
    let mut views = handle.subscribe();
    let view = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        views.wait_for(|view| view.status == SearchStatus::Results),
    )
    .await
    .expect("results in time")
    .expect("driver running")
    .clone();

    let names: Vec<&str> = view.results.iter().map(|r| r.display_name()).collect();
    assert_eq!(
        names,
        ["Lower Pines", "North Pines", "Tuolumne Meadows", "Upper Pines"]
    );
    drop(views);
    handle.shutdown().await;
    server.stop().await;
}
