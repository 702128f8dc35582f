//! REST helpers for the admin backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, carrying the
//! stored operator token as a bearer header.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>` outputs instead of panics; transport,
//! authorization, and validation failures all collapse into one opaque
//! message that callers log without surfacing to the operator.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RentedRoom, Report, ReportAction, UserRow};
#[cfg(feature = "hydrate")]
use super::types::{ApiEnvelope, LoginResult};

#[cfg(any(test, feature = "hydrate"))]
const REPORT_LIST_ENDPOINT: &str = "/api/v1/admin/reports";

#[cfg(any(test, feature = "hydrate"))]
const USER_LIST_ENDPOINT: &str = "/api/v1/admin/users";

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/v1/admin/login";

#[cfg(any(test, feature = "hydrate"))]
fn report_detail_endpoint(report_id: i64) -> String {
    format!("/api/v1/admin/reports/{report_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rented_rooms_endpoint(user_sid: &str) -> String {
    format!("/api/v1/admin/chats/{user_sid}/rented-rooms")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Attach the stored access token, if any, as a bearer header.
#[cfg(feature = "hydrate")]
fn with_bearer(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::token::read_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

/// Exchange operator credentials for an access token via
/// `POST /api/v1/admin/login`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        let body: ApiEnvelope<LoginResult> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.result.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the report inventory via `GET /api/v1/admin/reports`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_reports() -> Result<Vec<Report>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(REPORT_LIST_ENDPOINT))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("report list", resp.status()));
        }
        let body: ApiEnvelope<Vec<Report>> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the member account list via `GET /api/v1/admin/users`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_users() -> Result<Vec<UserRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(USER_LIST_ENDPOINT))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("user list", resp.status()));
        }
        let body: ApiEnvelope<Vec<UserRow>> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one report's full detail via `GET /api/v1/admin/reports/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_report_detail(report_id: i64) -> Result<Report, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = report_detail_endpoint(report_id);
        let resp = with_bearer(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("report detail", resp.status()));
        }
        let body: ApiEnvelope<Report> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = report_id;
        Err("not available on server".to_owned())
    }
}

/// Submit a disposition via `POST /api/v1/admin/reports/{id}`. The
/// response body is unused beyond success/failure.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn update_report_action(report_id: i64, action: ReportAction) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = report_detail_endpoint(report_id);
        let payload = serde_json::json!({ "action": action });
        let resp = with_bearer(gloo_net::http::Request::post(&url))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("report action", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (report_id, action);
        Err("not available on server".to_owned())
    }
}

/// Fetch a user's active rental chat rooms via
/// `GET /api/v1/admin/chats/{userSid}/rented-rooms`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_rented_rooms(user_sid: &str) -> Result<Vec<RentedRoom>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = rented_rooms_endpoint(user_sid);
        let resp = with_bearer(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("rented rooms", resp.status()));
        }
        let body: ApiEnvelope<Vec<RentedRoom>> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_sid;
        Err("not available on server".to_owned())
    }
}
