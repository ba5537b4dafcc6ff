/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tower_http::cors::{AllowOrigin, CorsLayer};
use web::error::WebError;

#[test]
fn test_middleware_configuration() {
    let state = common::create_mock_state();

    // Test CORS configuration creation doesn't panic
    let cors_allow_origin = if state.cli.debug {
        AllowOrigin::list(vec![
            state.cli.serve_url.clone().try_into().unwrap(),
            format!("http://{}:8000", state.cli.ip.clone())
                .try_into()
                .unwrap(),
        ])
    } else {
        AllowOrigin::exact(state.cli.serve_url.clone().try_into().unwrap())
    };

    // Test that CORS configuration is properly created
    let _cors = CorsLayer::new()
        .allow_origin(cors_allow_origin)
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true);
}

#[test]
fn test_health_endpoint() {
    tokio_test::block_on(async {
        let response = web::endpoints::get_health().await.unwrap();

        assert!(!response.0.error);
        assert_eq!(response.0.message, "200 ALIVE");
    });
}

#[test]
fn test_fallback_returns_not_found() {
    tokio_test::block_on(async {
        let err = web::endpoints::handle_404().await;

        assert!(matches!(err, WebError::NotFound(_)));
    });
}
