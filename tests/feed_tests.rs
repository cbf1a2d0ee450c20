use epicenter::feed::load_earthquakes;
use pretty_assertions::assert_eq;

const FEED_FIXTURE: &str = include_str!("fixtures/all_day.geojson");

#[test]
fn loads_and_parses_the_feed() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/all_day.geojson")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(FEED_FIXTURE)
        .create();

    let url = format!("{}/all_day.geojson", server.url());
    let list = load_earthquakes(&url).unwrap();

    assert_eq!(list.features.len(), 4);
    assert_eq!(
        list.features[0].properties.place.as_deref(),
        Some("63 km SE of Ofunato, Japan")
    );
    mock.assert();
}

#[test]
fn malformed_body_is_an_error_not_a_panic() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/all_day.geojson")
        .with_status(200)
        .with_body("<html>service unavailable</html>")
        .create();

    let url = format!("{}/all_day.geojson", server.url());
    assert!(load_earthquakes(&url).is_err());
}

#[test]
fn unreachable_host_is_an_error() {
    // nothing listens on port 1
    assert!(load_earthquakes("http://127.0.0.1:1/all_day.geojson").is_err());
}

#[test]
fn invalid_url_is_an_error() {
    assert!(load_earthquakes("not a url at all").is_err());
}
