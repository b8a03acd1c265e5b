//! Booking resource handler.
//!
//! Maps method + path under `/bookings` onto store and Auth Gate calls.
//!
//! ```text
//! GET    /bookings        → list
//! GET    /bookings/{id}   → lookup (400 bad id, 404 unknown)
//! POST   /bookings[/..]   → create (400 malformed / missing guest name)
//! DELETE /bookings        → 405
//! DELETE /bookings/{id}   → Auth Gate, then remove (401, 400, 404)
//! ```

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::bookings::model::BookingDraft;
use crate::http::request::{read_body, RequestIdExt};
use crate::http::response::{json_response, ApiError};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::{item_path, BookingTarget, InvalidId};

const BOOKING_NOT_FOUND: &str = "Booking not found";

/// Entry point for every path the static routes do not claim.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let Some(target) = BookingTarget::from_path(request.uri().path()) else {
        return ApiError::not_found("Not Found").into_response();
    };

    let method = request.method().clone();
    let result = match method {
        Method::GET | Method::HEAD => get(&state, &target),
        Method::POST => create(&state, request).await,
        Method::DELETE => {
            let authorization = request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok());
            delete(&state, &target, authorization)
        }
        _ => Err(ApiError::method_not_allowed("Method Not Allowed")),
    };

    result.unwrap_or_else(|e| {
        tracing::debug!(method = %method, status = %e.status(), error = %e.message(), "Booking request rejected");
        e.into_response()
    })
}

fn get(state: &AppState, target: &BookingTarget) -> Result<Response, ApiError> {
    match target {
        BookingTarget::Collection => {
            let bookings = state.store.list_all();
            Ok(json_response(StatusCode::OK, &*bookings, &state.failures))
        }
        BookingTarget::Item(suffix) => {
            let id = parse_id(suffix)?;
            let booking = state
                .store
                .get_by_id(id)
                .ok_or_else(|| ApiError::not_found(BOOKING_NOT_FOUND))?;
            Ok(json_response(StatusCode::OK, &booking, &state.failures))
        }
    }
}

async fn create(state: &AppState, request: Request<Body>) -> Result<Response, ApiError> {
    let request_id = request.request_id().to_string();
    let body = read_body(request.into_body(), state.max_body_size).await?;

    let booking = BookingDraft::parse(&body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    state.store.add(booking.clone());
    metrics::record_store_size(state.store.len());
    tracing::info!(request_id = %request_id, booking_id = booking.id, "Booking created");

    let mut response = json_response(StatusCode::CREATED, &booking, &state.failures);
    if response.status() == StatusCode::CREATED {
        if let Ok(location) = HeaderValue::from_str(&item_path(booking.id)) {
            response.headers_mut().insert(header::LOCATION, location);
        }
    }
    Ok(response)
}

fn delete(
    state: &AppState,
    target: &BookingTarget,
    authorization: Option<&str>,
) -> Result<Response, ApiError> {
    let suffix = match target {
        BookingTarget::Collection => {
            return Err(ApiError::method_not_allowed(
                "Method Not Allowed on collection",
            ))
        }
        BookingTarget::Item(suffix) => suffix,
    };

    if !state.auth.validate(authorization) {
        tracing::warn!(credential_present = authorization.is_some(), "Rejected unauthenticated delete");
        return Err(ApiError::unauthorized(state.auth.challenge()));
    }

    let id = parse_id(suffix)?;
    if !state.store.remove_by_id(id) {
        return Err(ApiError::not_found(BOOKING_NOT_FOUND));
    }

    metrics::record_store_size(state.store.len());
    tracing::info!(booking_id = id, "Booking deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

fn parse_id(suffix: &str) -> Result<i32, ApiError> {
    BookingTarget::parse_id(suffix).map_err(|e: InvalidId| ApiError::bad_request(e.to_string()))
}
