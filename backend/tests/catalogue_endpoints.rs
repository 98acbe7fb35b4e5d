//! End-to-end tests for the catalogue and search endpoints over the bundled
//! seed.

#[path = "support/catalogue_app.rs"]
mod catalogue_app;

use actix_web::http::{StatusCode, header};
use actix_web::{test, web};
use camply_backend::inbound::http::health::HealthState;
use rstest::rstest;
use serde_json::Value;

use catalogue_app::{bundled_ports, catalogue_app};

async fn get(uri: &str) -> (StatusCode, Option<String>, Value) {
    let app = test::init_service(catalogue_app(
        bundled_ports(),
        web::Data::new(HealthState::new()),
    ))
    .await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    let cache_control = res
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    (status, cache_control, body)
}

fn names(body: &Value, field: &str) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item.get(field).and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}

#[actix_web::test]
async fn providers_are_listed_by_id() {
    let (status, cache_control, body) = get("/api/provider").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=300"));
    assert_eq!(names(&body, "name"), ["RecreationDotGov", "ReserveCalifornia"]);
}

#[actix_web::test]
async fn recreation_area_links_to_the_booking_gateway() {
    let (status, _, body) = get("/api/rec-area/1/2991").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Yosemite National Park");
    assert_eq!(body["url"], "https://www.recreation.gov/camping/gateways/2991");
}

#[actix_web::test]
async fn recreation_area_campgrounds_include_every_site() {
    let (status, _, body) = get("/api/rec-area/1/2991/campgrounds").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body, "name"),
        ["Lower Pines", "North Pines", "Tuolumne Meadows", "Upper Pines"]
    );
    assert_eq!(body[2]["reservable"], false);
}

#[actix_web::test]
async fn campgrounds_of_unknown_area_are_empty() {
    let (status, _, body) = get("/api/rec-area/1/9999/campgrounds").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(Vec::new()));
}

#[rstest]
#[case("/api/campground/1/232448")]
#[case("/api/campground/1/000000")]
#[case("/api/rec-area/1/9999")]
#[case("/api/provider/42")]
#[actix_web::test]
async fn missing_or_hidden_entities_are_not_found(#[case] uri: &str) {
    let (status, _, body) = get(uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn campground_lookup_returns_booking_url() {
    let (status, _, body) = get("/api/campground/1/232447").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recreation_area_id"], "2991");
    assert_eq!(
        body["url"],
        "https://www.recreation.gov/camping/campgrounds/232447"
    );
}

#[actix_web::test]
async fn search_orders_matches_by_name() {
    let (status, _, body) = get("/api/search?query=pines").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body, "campground_name"),
        ["Lower Pines", "North Pines", "Upper Pines"]
    );
    assert_eq!(body[0]["recreation_area_name"], "Yosemite National Park");
}

#[actix_web::test]
async fn search_prefers_recreation_areas_and_honours_limit() {
    let (status, _, body) = get("/api/search?query=Yosemite&limit=1").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().expect("array body");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["entity_type"], "RecreationArea");
    assert_eq!(results[0]["id"], "1:rec-area:2991");
}

#[rstest]
#[case("/api/search?query=big")]
#[case("/api/search?query=tuolumne")]
#[case("/api/search?query=")]
#[actix_web::test]
async fn disabled_or_non_reservable_entities_are_not_searchable(#[case] uri: &str) {
    let (status, _, body) = get(uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(Vec::new()));
}
