//! Unit tests for catalogue domain type construction.

use rstest::rstest;

use super::*;

fn recreation_area_draft() -> RecreationAreaDraft {
    RecreationAreaDraft {
        id: "1074".to_owned(),
        provider_id: 1,
        name: "Yosemite National Park".to_owned(),
        description: Some("<p>Granite cliffs.</p>".to_owned()),
        country: Some("USA".to_owned()),
        state: Some("CA".to_owned()),
        longitude: Some(-119.538),
        latitude: Some(37.865),
        reservable: true,
        enabled: true,
    }
}

fn campground_draft() -> CampgroundDraft {
    CampgroundDraft {
        id: "232447".to_owned(),
        provider_id: 1,
        recreation_area_id: Some("1074".to_owned()),
        name: "Upper Pines".to_owned(),
        description: None,
        country: None,
        state: None,
        longitude: None,
        latitude: None,
        reservable: true,
        enabled: true,
    }
}

#[rstest]
fn recreation_gov_areas_link_to_gateway_pages() {
    let area = RecreationArea::new(recreation_area_draft()).expect("valid area");

    assert_eq!(
        area.url().as_deref(),
        Some("https://www.recreation.gov/camping/gateways/1074")
    );
    assert_eq!(area.location().state(), Some("CA"));
}

#[rstest]
fn recreation_gov_campgrounds_link_to_booking_pages() {
    let campground = Campground::new(campground_draft()).expect("valid campground");

    assert_eq!(
        campground.url().as_deref(),
        Some("https://www.recreation.gov/camping/campgrounds/232447")
    );
    assert_eq!(campground.recreation_area_id(), Some("1074"));
}

#[rstest]
fn unknown_providers_have_no_public_url() {
    let mut draft = campground_draft();
    draft.provider_id = 2;
    let campground = Campground::new(draft).expect("valid campground");

    assert_eq!(campground.url(), None);
}

#[rstest]
#[case("", "recreation_area.name")]
#[case("   ", "recreation_area.name")]
fn blank_names_are_rejected(#[case] name: &str, #[case] field: &'static str) {
    let mut draft = recreation_area_draft();
    draft.name = name.to_owned();

    let err = RecreationArea::new(draft).expect_err("blank name should fail");
    assert_eq!(err, CatalogueValidationError::EmptyField { field });
}

#[rstest]
fn overlong_ids_are_rejected() {
    let mut draft = campground_draft();
    draft.id = "9".repeat(129);

    let err = Campground::new(draft).expect_err("long id should fail");
    assert!(matches!(
        err,
        CatalogueValidationError::TooLong {
            field: "campground.id",
            max: 128,
            actual: 129
        }
    ));
}

#[rstest]
#[case(Some(180.5), None, "recreation_area.longitude")]
#[case(None, Some(-90.1), "recreation_area.latitude")]
#[case(Some(f64::NAN), None, "recreation_area.longitude")]
fn out_of_range_coordinates_are_rejected(
    #[case] longitude: Option<f64>,
    #[case] latitude: Option<f64>,
    #[case] expected_field: &'static str,
) {
    let mut draft = recreation_area_draft();
    draft.longitude = longitude;
    draft.latitude = latitude;

    let err = RecreationArea::new(draft).expect_err("coordinate should fail");
    match err {
        CatalogueValidationError::InvalidCoordinate { field, .. } => {
            assert_eq!(field, expected_field);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn blank_optional_text_collapses_to_none() {
    let mut draft = campground_draft();
    draft.description = Some("  ".to_owned());
    draft.recreation_area_id = Some(String::new());
    draft.country = Some(String::new());

    let campground = Campground::new(draft).expect("valid campground");
    assert_eq!(campground.description(), None);
    assert_eq!(campground.recreation_area_id(), None);
    assert_eq!(campground.location().country(), None);
}

#[rstest]
fn provider_requires_a_url() {
    let err = Provider::new(ProviderDraft {
        id: 1,
        name: "Recreation.gov".to_owned(),
        description: None,
        url: " ".to_owned(),
        enabled: true,
    })
    .expect_err("blank url should fail");

    assert_eq!(
        err,
        CatalogueValidationError::EmptyField {
            field: "provider.url"
        }
    );
}

#[rstest]
fn entities_deserialize_through_their_drafts() {
    let json = r#"{"id":"10","provider_id":1,"name":"Lake","longitude":200.0}"#;
    let err = serde_json::from_str::<Campground>(json).expect_err("invalid longitude");
    assert!(err.to_string().contains("campground.longitude"));

    let provider: Provider = serde_json::from_str(
        r#"{"id":1,"name":"Recreation.gov","url":"https://www.recreation.gov"}"#,
    )
    .expect("valid provider");
    assert!(provider.enabled());
    assert_eq!(provider.id(), ProviderId::new(1));
}
