/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use core::registration::RegistrationError;
use web::endpoints::registrations::{PaymentStatusRequest, ValidateCredentialRequest};
use web::error::WebError;

#[test]
fn test_validate_credential_request_serialization() {
    let request = ValidateCredentialRequest {
        code: "eyJyZWdpc3RyYXRpb25faWQiOiJ0ZXN0In0=".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("eyJyZWdpc3RyYXRpb25faWQiOiJ0ZXN0In0="));
}

#[test]
fn test_payment_status_request_serialization() {
    let request = PaymentStatusRequest {
        status: "paid".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("paid"));
}

#[test]
fn test_registration_error_maps_to_status_codes() {
    let cases = [
        (
            RegistrationError::DuplicateRegistration,
            StatusCode::BAD_REQUEST,
        ),
        (
            RegistrationError::InvalidCredential,
            StatusCode::BAD_REQUEST,
        ),
        (
            RegistrationError::InvalidStatus("cancelled".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            RegistrationError::MissingRelatedEntity("event"),
            StatusCode::NOT_FOUND,
        ),
        (RegistrationError::NotFound, StatusCode::NOT_FOUND),
        (RegistrationError::AlreadyCheckedIn, StatusCode::CONFLICT),
    ];

    for (err, expected) in cases {
        let response = WebError::from(err).into_response();
        assert_eq!(response.status(), expected);
    }
}
