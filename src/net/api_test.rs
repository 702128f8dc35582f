#![cfg(not(feature = "hydrate"))]

use super::*;

// ============================================================================
// Endpoint paths
// ============================================================================

#[test]
fn report_list_endpoint_is_versioned() {
    assert_eq!(REPORT_LIST_ENDPOINT, "/api/v1/admin/reports");
}

#[test]
fn user_list_endpoint_is_versioned() {
    assert_eq!(USER_LIST_ENDPOINT, "/api/v1/admin/users");
}

#[test]
fn login_endpoint_is_versioned() {
    assert_eq!(LOGIN_ENDPOINT, "/api/v1/admin/login");
}

#[test]
fn report_detail_endpoint_embeds_id() {
    assert_eq!(report_detail_endpoint(42), "/api/v1/admin/reports/42");
}

#[test]
fn report_detail_endpoint_handles_large_ids() {
    assert_eq!(
        report_detail_endpoint(9_007_199_254_740_993),
        "/api/v1/admin/reports/9007199254740993"
    );
}

#[test]
fn rented_rooms_endpoint_embeds_sid() {
    assert_eq!(
        rented_rooms_endpoint("u-3f2a"),
        "/api/v1/admin/chats/u-3f2a/rented-rooms"
    );
}

// ============================================================================
// Failure messages
// ============================================================================

#[test]
fn request_failed_message_names_request_and_status() {
    assert_eq!(
        request_failed_message("report list", 401),
        "report list request failed: 401"
    );
}

#[test]
fn request_failed_message_handles_server_errors() {
    assert_eq!(
        request_failed_message("login", 500),
        "login request failed: 500"
    );
}
