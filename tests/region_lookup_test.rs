//! Address resolution tests for `RegionLookupService` against wiremock.

use wilayah::{AddressQuery, Client, ClientConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> Client {
    Client::with_config(ClientConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..ClientConfig::default()
    })
    .unwrap()
}

fn envelope(records: &[(&str, &str)]) -> serde_json::Value {
    let data: Vec<serde_json::Value> = records
        .iter()
        .map(|(code, name)| serde_json::json!({"code": code, "name": name}))
        .collect();
    serde_json::json!({"data": data, "meta": {}})
}

async fn mount(mock_server: &MockServer, route: &str, records: &[(&str, &str)], hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(records)))
        .expect(hits)
        .mount(mock_server)
        .await;
}

fn query(
    province: Option<&str>,
    regency: Option<&str>,
    district: Option<&str>,
    village: Option<&str>,
) -> AddressQuery {
    AddressQuery {
        province: province.map(String::from),
        regency: regency.map(String::from),
        district: district.map(String::from),
        village: village.map(String::from),
    }
}

#[tokio::test]
async fn resolve_full_hierarchy_strips_prefixes() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/provinces.json",
        &[("31", "DKI Jakarta"), ("32", "Jawa Barat")],
        1,
    )
    .await;
    mount(
        &mock_server,
        "/regencies/31.json",
        &[("31.71", "Kota Adm. Jakarta Pusat"), ("31.74", "Kota Adm. Jakarta Selatan")],
        1,
    )
    .await;
    mount(
        &mock_server,
        "/districts/31.74.json",
        &[("31.74.01", "Tebet"), ("31.74.09", "Jagakarsa")],
        1,
    )
    .await;
    mount(
        &mock_server,
        "/villages/31.74.09.json",
        &[("31.74.09.1001", "Jagakarsa"), ("31.74.09.1003", "Ciganjur")],
        1,
    )
    .await;

    let client = test_client(&mock_server);
    let resolved = client
        .lookup()
        .resolve(&query(
            Some("Provinsi DKI Jakarta"),
            Some("Kota Jakarta Selatan"),
            Some("Kecamatan Jagakarsa"),
            Some("Kelurahan Ciganjur"),
        ))
        .await
        .unwrap();

    assert_eq!(resolved.province.as_ref().unwrap().code, "31");
    assert_eq!(resolved.regency.as_ref().unwrap().code, "31.74");
    assert_eq!(resolved.district.as_ref().unwrap().code, "31.74.09");
    assert_eq!(resolved.village.as_ref().unwrap().code, "31.74.09.1003");
    assert_eq!(resolved.deepest().unwrap().code, "31.74.09.1003");
}

#[tokio::test]
async fn resolve_stops_when_regency_is_unknown() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/provinces.json", &[("31", "DKI Jakarta")], 1).await;
    mount(
        &mock_server,
        "/regencies/31.json",
        &[("31.74", "Kota Adm. Jakarta Selatan")],
        1,
    )
    .await;
    // Must not be fetched once the regency fails to resolve.
    mount(&mock_server, "/districts/31.74.json", &[("31.74.09", "Jagakarsa")], 0).await;

    let client = test_client(&mock_server);
    let resolved = client
        .lookup()
        .resolve(&query(
            Some("Jakarta"),
            Some("Surabaya"),
            Some("Jagakarsa"),
            Some("Ciganjur"),
        ))
        .await
        .unwrap();

    assert_eq!(resolved.province.unwrap().code, "31");
    assert!(resolved.regency.is_none());
    assert!(resolved.district.is_none());
    assert!(resolved.village.is_none());
}

#[tokio::test]
async fn resolve_stops_when_province_is_unknown() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/provinces.json", &[("31", "DKI Jakarta")], 1).await;

    let client = test_client(&mock_server);
    let resolved = client
        .lookup()
        .resolve(&query(Some("Atlantis"), Some("Jakarta Selatan"), None, None))
        .await
        .unwrap();

    assert_eq!(resolved, Default::default());
}

#[tokio::test]
async fn resolve_regency_without_province_backfills_province() {
    let mock_server = MockServer::start().await;
    // The global search listing also supplies the province.
    mount(
        &mock_server,
        "/provinces.json",
        &[("31", "DKI Jakarta"), ("32", "Jawa Barat")],
        1,
    )
    .await;
    mount(
        &mock_server,
        "/regencies/31.json",
        &[("31.74", "Kota Adm. Jakarta Selatan")],
        1,
    )
    .await;
    mount(
        &mock_server,
        "/regencies/32.json",
        &[("32.04", "Kabupaten Bandung"), ("32.73", "Kota Bandung")],
        1,
    )
    .await;

    let client = test_client(&mock_server);
    let resolved = client
        .lookup()
        .resolve(&query(None, Some("Kab. Bandung"), None, None))
        .await
        .unwrap();

    assert_eq!(resolved.regency.as_ref().unwrap().code, "32.04");
    assert_eq!(resolved.province.as_ref().unwrap().code, "32");
    assert!(resolved.district.is_none());
}

#[tokio::test]
async fn resolve_keeps_kota_apart_from_kabupaten() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/provinces.json",
        &[("31", "DKI JAKARTA"), ("32", "JAWA BARAT")],
        1,
    )
    .await;
    mount(
        &mock_server,
        "/regencies/32.json",
        &[("32.04", "KABUPATEN BANDUNG"), ("32.73", "KOTA BANDUNG")],
        2,
    )
    .await;

    let client = test_client(&mock_server);
    let resolved = client
        .lookup()
        .resolve(&query(Some("Jawa Barat"), Some("Kota Bandung"), None, None))
        .await
        .unwrap();

    let direct = client
        .regencies()
        .find_by_name("32", "Kota Bandung")
        .await
        .unwrap();

    assert_eq!(resolved.province.as_ref().unwrap().code, "32");
    assert_eq!(resolved.regency.as_ref().unwrap().code, "32.73");
    assert_eq!(resolved.regency, direct);
}

#[tokio::test]
async fn resolve_global_kota_prefers_name_as_typed() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/provinces.json",
        &[("31", "DKI JAKARTA"), ("32", "JAWA BARAT")],
        1,
    )
    .await;
    mount(
        &mock_server,
        "/regencies/31.json",
        &[("31.74", "KOTA ADM. JAKARTA SELATAN")],
        1,
    )
    .await;
    mount(
        &mock_server,
        "/regencies/32.json",
        &[("32.04", "KABUPATEN BANDUNG"), ("32.73", "KOTA BANDUNG")],
        1,
    )
    .await;

    let client = test_client(&mock_server);
    let resolved = client
        .lookup()
        .resolve(&query(None, Some("Kota Bandung"), None, None))
        .await
        .unwrap();

    assert_eq!(resolved.regency.as_ref().unwrap().code, "32.73");
    assert_eq!(resolved.province.as_ref().unwrap().code, "32");
}

#[tokio::test]
async fn resolve_district_without_regency_is_skipped() {
    let mock_server = MockServer::start().await;

    let client = test_client(&mock_server);
    let resolved = client
        .lookup()
        .resolve(&query(None, None, Some("Jagakarsa"), Some("Ciganjur")))
        .await
        .unwrap();

    assert!(resolved.deepest().is_none());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn resolve_propagates_transport_errors() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/provinces.json"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .lookup()
        .resolve(&query(Some("Jakarta"), None, None, None))
        .await
        .unwrap_err();

    assert!(err.is_request_error());
    assert_eq!(err.status(), Some(502));
}
