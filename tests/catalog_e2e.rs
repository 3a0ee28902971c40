use httpmock::prelude::*;
use seatwatch::core::catalog::resolve_show;
use seatwatch::{HttpClient, ScrapeError, ShowCatalog, ShowEntry};

const LISTING_PAGE: &str = r#"<html><body><form>
    <select data-id="show-selector">
    <option value="">Choose a show</option>
    <option value="6168">Hamlet</option>
    <option value="61a8">Stale Entry</option>
    <option value="7201">The Mousetrap</option>
    </select>
    </form></body></html>"#;

#[tokio::test]
async fn test_catalog_fetch_filters_malformed_ids() {
    let server = MockServer::start();
    let listing = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LISTING_PAGE);
    });

    let fetcher = HttpClient::new(server.base_url(), None);
    let catalog = ShowCatalog::fetch(&fetcher).await.unwrap();

    listing.assert();
    let entries: Vec<ShowEntry> = catalog.entries().collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(catalog.get("Hamlet"), Some("6168"));
    assert_eq!(catalog.get("The Mousetrap"), Some("7201"));
    assert_eq!(catalog.get("Stale Entry"), None);
}

#[tokio::test]
async fn test_resolve_show_by_name_over_http() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LISTING_PAGE);
    });

    let fetcher = HttpClient::new(server.base_url(), None);
    let id = resolve_show(&fetcher, "The Mousetrap").await.unwrap();
    assert_eq!(id, "7201");
}

#[tokio::test]
async fn test_resolve_unknown_show_fails_before_any_availability_fetch() {
    let server = MockServer::start();
    let listing = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LISTING_PAGE);
    });
    let availability = server.mock(|when, then| {
        when.method(GET).path_contains("/book/availability");
        then.status(200).body("<html></html>");
    });

    let fetcher = HttpClient::new(server.base_url(), None);
    let err = resolve_show(&fetcher, "Macbeth").await.unwrap_err();

    assert!(matches!(err, ScrapeError::UnknownShow { .. }));
    listing.assert();
    assert_eq!(availability.hits(), 0);
}

#[tokio::test]
async fn test_listing_failure_is_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(503);
    });

    let fetcher = HttpClient::new(server.base_url(), None);
    let err = ShowCatalog::fetch(&fetcher).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Transport(_)));
}
