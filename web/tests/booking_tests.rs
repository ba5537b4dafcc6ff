/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use core::booking::BookingError;
use uuid::Uuid;
use web::endpoints::bookings::BookingStatusRequest;
use web::error::WebError;

#[test]
fn test_booking_status_request_serialization() {
    let request = BookingStatusRequest {
        status: "approved".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("approved"));
}

#[test]
fn test_booking_error_maps_to_status_codes() {
    let cases = [
        (
            BookingError::Unauthenticated("user"),
            StatusCode::UNAUTHORIZED,
        ),
        (BookingError::Forbidden, StatusCode::FORBIDDEN),
        (BookingError::OrganizationNotFound, StatusCode::NOT_FOUND),
        (BookingError::UserNotFound, StatusCode::NOT_FOUND),
        (BookingError::VenuesNotFound, StatusCode::NOT_FOUND),
        (BookingError::NotFound, StatusCode::NOT_FOUND),
        (
            BookingError::InvalidIdentifier("event"),
            StatusCode::BAD_REQUEST,
        ),
        (
            BookingError::MissingFields("venue"),
            StatusCode::BAD_REQUEST,
        ),
        (
            BookingError::InvalidDate("start_date"),
            StatusCode::BAD_REQUEST,
        ),
        (
            BookingError::InvalidTime("start_time"),
            StatusCode::BAD_REQUEST,
        ),
        (BookingError::InvalidRange, StatusCode::BAD_REQUEST),
        (
            BookingError::SchedulingConflict(Uuid::new_v4()),
            StatusCode::BAD_REQUEST,
        ),
        (
            BookingError::InvalidStatus("cancelled".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            BookingError::InvalidFilter("weeks".to_string()),
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (err, expected) in cases {
        let response = WebError::from(err).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn test_scheduling_conflict_message_names_the_booking() {
    let id = Uuid::new_v4();
    let err = WebError::from(BookingError::SchedulingConflict(id));

    assert!(err.to_string().contains(&id.to_string()));
}
