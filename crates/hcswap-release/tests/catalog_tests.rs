//! Catalog client against a local mock index

use hcswap_core::Tool;
use hcswap_release::catalog::parse_catalog_url;
use hcswap_release::{FetchError, http, list_versions};
use hcswap_testkit::mock::{mock_listing, mock_status};

#[test]
fn test_list_versions_is_bounded_by_limit() {
    let mut server = mockito::Server::new();
    let all: Vec<String> = (0..25).map(|i| format!("1.{i}.0")).collect();
    let refs: Vec<&str> = all.iter().map(String::as_str).collect();
    let listing = mock_listing(&mut server, "terraform", &refs);

    let client = http::build_default_client().unwrap();
    let base = parse_catalog_url(&server.url()).unwrap();
    let versions = list_versions(&client, &base, Tool::Terraform, 10).unwrap();

    listing.assert();
    assert_eq!(versions, all[..10].to_vec());
}

#[test]
fn test_list_versions_returns_everything_below_limit() {
    let mut server = mockito::Server::new();
    let _listing = mock_listing(&mut server, "vault", &["1.15.2", "1.15.1", "1.14.0"]);

    let client = http::build_default_client().unwrap();
    let base = parse_catalog_url(&server.url()).unwrap();
    let versions = list_versions(&client, &base, Tool::Vault, 10).unwrap();

    assert_eq!(versions, vec!["1.15.2", "1.15.1", "1.14.0"]);
}

#[test]
fn test_list_versions_with_empty_listing() {
    let mut server = mockito::Server::new();
    let _listing = mock_listing(&mut server, "packer", &[]);

    let client = http::build_default_client().unwrap();
    let base = parse_catalog_url(&server.url()).unwrap();
    let versions = list_versions(&client, &base, Tool::Packer, 10).unwrap();

    assert!(versions.is_empty());
}

#[test]
fn test_list_versions_reports_http_status() {
    let mut server = mockito::Server::new();
    let _missing = mock_status(&mut server, "/terraform/", 503);

    let client = http::build_default_client().unwrap();
    let base = parse_catalog_url(&server.url()).unwrap();
    let err = list_versions(&client, &base, Tool::Terraform, 10).unwrap_err();

    match err {
        FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn test_list_versions_unreachable_catalog() {
    // Port 9 (discard) is not served by anything in the test environment
    let client = http::build_default_client().unwrap();
    let base = parse_catalog_url("http://127.0.0.1:9/").unwrap();
    let err = list_versions(&client, &base, Tool::Vault, 10).unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }));
    assert!(err.to_string().starts_with("NETWORK_FETCH_FAILED"));
}
