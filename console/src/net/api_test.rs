use futures::executor::block_on;
use session::MemoryTokenStore;

use super::*;

// =============================================================================
// helpers
// =============================================================================

#[test]
fn endpoint_joins_without_doubling_slashes() {
    assert_eq!(endpoint("http://api.test/", "/items/get"), "http://api.test/items/get");
    assert_eq!(endpoint("http://api.test", "login/"), "http://api.test/login/");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn login_form_body_percent_encodes_credentials() {
    assert_eq!(
        login_form_body("ann lee", "p&ss=1"),
        "username=ann+lee&password=p%26ss%3D1"
    );
}

#[test]
fn verb_names_match_http_methods() {
    assert_eq!(Verb::Patch.as_str(), "PATCH");
    assert_eq!(Verb::Delete.as_str(), "DELETE");
}

// =============================================================================
// error_detail
// =============================================================================

#[test]
fn error_detail_reads_string_detail() {
    assert_eq!(error_detail(r#"{"detail":"Invalid credentials"}"#), "Invalid credentials");
}

#[test]
fn error_detail_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email"},{"msg":"field required"}]}"#;
    assert_eq!(error_detail(body), "value is not a valid email; field required");
}

#[test]
fn error_detail_falls_back_for_empty_or_unrecognized_bodies() {
    assert_eq!(error_detail(""), FALLBACK_DETAIL);
    assert_eq!(error_detail(r#"{"error":"x"}"#), FALLBACK_DETAIL);
    assert_eq!(error_detail(r#"{"detail":[]}"#), FALLBACK_DETAIL);
    assert_eq!(error_detail("Internal Server Error\n"), "Internal Server Error");
}

// =============================================================================
// parse_body
// =============================================================================

#[test]
fn parse_body_maps_non_success_status_to_status_error() {
    let err = parse_body::<serde_json::Value>(404, r#"{"detail":"Item not found"}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            detail: "Item not found".to_owned()
        }
    );
}

#[test]
fn parse_body_reports_malformed_success_body() {
    let err = parse_body::<Category>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Body(_)));
}

#[test]
fn parse_body_decodes_success_body() {
    let category: Category = parse_body(201, r#"{"id":3,"name":"Tools"}"#).expect("category");
    assert_eq!(category.name, "Tools");
}

// =============================================================================
// gateway (native build)
// =============================================================================

#[test]
fn native_gateway_reports_network_error() {
    let gateway = HttpGateway::new("http://api.test", Arc::new(MemoryTokenStore::with_token("t")));
    let err = block_on(gateway.list_items()).unwrap_err();
    assert!(matches!(err, ApiError::Network(msg) if msg.contains("GET http://api.test/items/get")));
    let err = block_on(gateway.login("ann", "pw")).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn gateway_debug_omits_token_store() {
    let gateway = HttpGateway::new("http://api.test", Arc::new(MemoryTokenStore::new()));
    assert_eq!(gateway.base_url(), "http://api.test");
    assert!(format!("{gateway:?}").contains("http://api.test"));
}
