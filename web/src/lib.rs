/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use anyhow::{Context, Result};
use axum::routing::{get, post, put};
use axum::{Router, middleware};
use core::types::ServerState;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::endpoints::{auth, bookings, events, orgs, registrations, user, venues};

pub async fn serve_web(state: Arc<ServerState>) -> Result<()> {
    let server_url = format!("{}:{}", state.cli.ip.clone(), state.cli.port.clone());

    let cors_allow_origin = if state.cli.debug {
        AllowOrigin::list(vec![
            state
                .cli
                .serve_url
                .clone()
                .try_into()
                .context("Invalid serve URL")?,
            format!("http://{}:8000", state.cli.ip.clone())
                .try_into()
                .context("Invalid debug origin")?,
        ])
    } else {
        AllowOrigin::exact(
            state
                .cli
                .serve_url
                .clone()
                .try_into()
                .context("Invalid serve URL")?,
        )
    };

    let cors = CorsLayer::new()
        .allow_origin(cors_allow_origin)
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true);

    let app = Router::new()
        .route("/api/v1/user", get(user::get).delete(user::delete))
        .route("/api/v1/orgs", get(orgs::get).put(orgs::put))
        .route(
            "/api/v1/orgs/{organization}",
            get(orgs::get_organization)
                .patch(orgs::patch_organization)
                .delete(orgs::delete_organization),
        )
        .route(
            "/api/v1/orgs/{organization}/users",
            get(orgs::get_organization_users)
                .post(orgs::post_organization_users)
                .delete(orgs::delete_organization_users),
        )
        .route(
            "/api/v1/orgs/{organization}/venues",
            get(venues::get).put(venues::put),
        )
        .route(
            "/api/v1/orgs/{organization}/venues/{venue}",
            get(venues::get_venue)
                .patch(venues::patch_venue)
                .delete(venues::delete_venue),
        )
        .route(
            "/api/v1/orgs/{organization}/events",
            get(events::get).put(events::put),
        )
        .route(
            "/api/v1/orgs/{organization}/events/{event}",
            get(events::get_event)
                .patch(events::patch_event)
                .delete(events::delete_event),
        )
        .route(
            "/api/v1/orgs/{organization}/events/{event}/status",
            post(events::post_event_status),
        )
        .route("/api/v1/bookings", get(bookings::get).put(bookings::put))
        .route(
            "/api/v1/bookings/{booking}",
            get(bookings::get_booking)
                .patch(bookings::patch_booking)
                .delete(bookings::delete_booking),
        )
        .route(
            "/api/v1/bookings/{booking}/status",
            post(bookings::post_booking_status),
        )
        .route(
            "/api/v1/bookings/event/{event}",
            get(bookings::get_by_event),
        )
        .route(
            "/api/v1/bookings/event/{event}/bulk",
            put(bookings::put_bulk),
        )
        .route(
            "/api/v1/bookings/venue/{venue}",
            get(bookings::get_by_venue),
        )
        .route(
            "/api/v1/bookings/organizer",
            get(bookings::get_by_organizer),
        )
        .route(
            "/api/v1/bookings/organization/{organization}",
            get(bookings::get_by_organization),
        )
        .route(
            "/api/v1/bookings/status/{status}",
            get(bookings::get_by_status),
        )
        .route(
            "/api/v1/bookings/upcoming/{filter}/{amount}",
            get(bookings::get_upcoming),
        )
        .route("/api/v1/registrations", put(registrations::put))
        .route(
            "/api/v1/registrations/{registration}",
            get(registrations::get_registration).delete(registrations::delete_registration),
        )
        .route(
            "/api/v1/registrations/event/{event}",
            get(registrations::get_by_event),
        )
        .route(
            "/api/v1/registrations/{registration}/credential",
            get(registrations::get_credential),
        )
        .route(
            "/api/v1/registrations/{registration}/credential/image",
            get(registrations::get_credential_image),
        )
        .route(
            "/api/v1/registrations/{registration}/credential/regenerate",
            post(registrations::post_regenerate_credential),
        )
        .route(
            "/api/v1/registrations/{registration}/check-in",
            post(registrations::post_check_in),
        )
        .route(
            "/api/v1/registrations/{registration}/payment",
            post(registrations::post_payment_status),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/v1/auth/register", post(auth::post_register))
        .route("/api/v1/auth/login", post(auth::post_login))
        .route("/api/v1/auth/logout", post(auth::post_logout))
        .route(
            "/api/v1/registrations/validate",
            post(registrations::post_validate),
        )
        .route("/static/{file}", get(registrations::get_artifact))
        .route("/api/v1/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&server_url)
        .await
        .context("Failed to bind server address")?;

    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
